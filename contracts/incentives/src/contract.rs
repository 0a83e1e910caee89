#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Addr, Api, Binary, Coin, Deps, DepsMut, Env, MessageInfo, Order, Response,
    StdResult, Timestamp,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::nonpayable;

use crate::bank::{credit_msg, fee_coin, fee_disposal_msg, Payment};
use crate::distribution::distribute_epoch;
use crate::error::{invalid_amount, not_found, ContractError};
use crate::gauge::{self, NewGauge};
use crate::lockup;
use crate::msg::{ExecuteMsg, InstantiateMsg, ParamsMsg, SudoMsg};
use crate::query::{
    AdminResponse, EndorsementResponse, EndorsementsResponse, FeeResponse, GaugeResponse,
    GaugesResponse, LastEpochResponse, LockResponse, LocksResponse, ParamsResponse, QueryMsg,
    RetiredGaugeResponse, RollappResponse,
};
use crate::sponsorship;
use crate::state::{
    DistrTarget, Distribution, EpochInfo, FeeDisposal, Params, ADMIN, ENDORSEMENTS, GAUGES,
    GAUGE_ID, LAST_EPOCH, LOCK_ID, NEW_ADMIN_PROPOSAL, PARAMS, RETIRED_GAUGES, ROLLAPPS,
};
use crate::utils::{coins_to_string, distinct_denoms, query_limit, validate_coins};

/// Contract name that is used for migration.
pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
/// Contract version that is used for migration.
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ids of locks and gauges start from this value
pub const FIRST_ID: u64 = 1;

fn validate_params(api: &dyn Api, params: ParamsMsg) -> Result<Params, ContractError> {
    if params.fee_denom.is_empty() {
        return Err(invalid_amount("fee denom cannot be empty"));
    }

    let fee_disposal = match params.fee_collector {
        Some(collector) => FeeDisposal::Forward {
            collector: api.addr_validate(&collector)?,
        },
        None => FeeDisposal::Burn,
    };

    Ok(Params {
        fee_denom: params.fee_denom,
        create_gauge_base_fee: params.create_gauge_base_fee,
        add_to_gauge_base_fee: params.add_to_gauge_base_fee,
        add_denom_fee: params.add_denom_fee,
        lock_creation_fee: params.lock_creation_fee,
        min_lock_age: params.min_lock_age,
        min_lock_duration: params.min_lock_duration,
        rollapp_gauges_mode: params.rollapp_gauges_mode,
        fee_disposal,
    })
}

fn fee_disposal_to_string(params: &Params) -> String {
    match &params.fee_disposal {
        FeeDisposal::Burn => "burn".to_string(),
        FeeDisposal::Forward { collector } => collector.to_string(),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let admin = deps.api.addr_validate(&msg.admin)?;
    let params = validate_params(deps.api, msg.params)?;

    ADMIN.save(deps.storage, &admin)?;
    NEW_ADMIN_PROPOSAL.save(deps.storage, &None)?;
    PARAMS.save(deps.storage, &params)?;
    LOCK_ID.save(deps.storage, &FIRST_ID)?;
    GAUGE_ID.save(deps.storage, &FIRST_ID)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin.to_string())
        .add_attribute("fee_denom", params.fee_denom.clone())
        .add_attribute("fee_disposal", fee_disposal_to_string(&params)))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateLock { coins, duration } => {
            execute_create_lock(deps, env, info, coins, duration)
        }
        ExecuteMsg::BeginUnlock { lock_id } => execute_begin_unlock(deps, env, info, lock_id),
        ExecuteMsg::WithdrawLock { lock_id } => execute_withdraw_lock(deps, env, info, lock_id),
        ExecuteMsg::CreateGauge {
            is_perpetual,
            distribute_to,
            coins,
            num_epochs_paid_over,
            start_time,
            min_lock_age,
            release_per_epoch,
        } => execute_create_gauge(
            deps,
            env,
            info,
            NewGauge {
                is_perpetual,
                distribute_to,
                coins,
                num_epochs_paid_over,
                start_time,
                min_lock_age,
                release_per_epoch,
            },
        ),
        ExecuteMsg::AddToGauge { gauge_id, coins } => {
            execute_add_to_gauge(deps, info, gauge_id, coins)
        }
        ExecuteMsg::UpdateParams { params } => execute_update_params(deps, info, params),
        ExecuteMsg::BootstrapEndorsements {} => execute_bootstrap_endorsements(deps, info),
        ExecuteMsg::ForceSetLockEligibility { lock_id, timestamp } => {
            execute_force_set_lock_eligibility(deps, info, lock_id, timestamp)
        }
        ExecuteMsg::SetGaugeMinLockAge {
            gauge_id,
            min_lock_age,
        } => execute_set_gauge_min_lock_age(deps, info, gauge_id, min_lock_age),
        ExecuteMsg::ProposeNewAdmin { new_admin } => {
            execute_propose_new_admin(deps, info, new_admin)
        }
        ExecuteMsg::ClaimAdminRole {} => execute_claim_admin_role(deps, info),
    }
}

fn assert_admin(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let admin = ADMIN.load(deps.storage)?;
    if admin != *sender {
        return Err(ContractError::Unauthorized {});
    }

    Ok(())
}

// Disposes of the charged fee and credits back whatever the sender attached on top.
fn settle_payment(
    response: Response,
    params: &Params,
    fee: &Coin,
    payment: Payment,
    sender: &Addr,
) -> Response {
    response
        .add_messages(fee_disposal_msg(params, fee))
        .add_messages(payment.refund_msg(sender))
}

/// Locks the given coins for `duration` seconds. The coins and the lock creation fee
/// must be attached to the message.
///
/// # Errors
/// Returns `InvalidAmount` if no coins are given or any amount is zero.
/// Returns `InvalidLockDuration` if the duration is zero or too large to unlock.
/// Returns `InsufficientFunds` if the attached funds do not cover the coins and the fee.
pub fn execute_create_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    coins: Vec<Coin>,
    duration: u64,
) -> Result<Response, ContractError> {
    let params = PARAMS.load(deps.storage)?;
    let coins = lockup::validate_lock(&coins, duration, env.block.time)?;

    let fee = fee_coin(&params, params.lock_creation_fee);
    let mut payment = Payment::new(&info.funds);
    payment.charge_fee(&fee, &coins)?;
    payment.debit(&coins)?;

    let lock = lockup::create_lock(
        deps.storage,
        env.block.time,
        info.sender.clone(),
        coins,
        duration,
    )?;

    let response = Response::new()
        .add_attribute("action", "create_lock")
        .add_attribute("lock_id", lock.lock_id.to_string())
        .add_attribute("owner", lock.owner.to_string())
        .add_attribute("coins", coins_to_string(&lock.coins))
        .add_attribute("duration", lock.duration.to_string())
        .add_attribute("fee", fee.to_string());

    Ok(settle_payment(response, &params, &fee, payment, &info.sender))
}

pub fn execute_begin_unlock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    lock_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let lock = lockup::begin_unlock(deps.storage, env.block.time, &info.sender, lock_id)?;

    Ok(Response::new()
        .add_attribute("action", "begin_unlock")
        .add_attribute("lock_id", lock_id.to_string())
        .add_attribute(
            "end_time",
            lock.end_time.unwrap_or(env.block.time).to_string(),
        ))
}

/// Credits the coins of a matured lock back to its owner and removes the lock.
///
/// # Errors
/// Returns `NotFound` if the lock doesn't exist.
/// Returns `Unauthorized` if the sender is not the lock owner.
/// Returns `LockNotMatured` if the lock is not unlocking or its end time has not passed yet.
pub fn execute_withdraw_lock(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    lock_id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let lock = lockup::withdraw_lock(deps.storage, env.block.time, &info.sender, lock_id)?;

    Ok(Response::new()
        .add_message(credit_msg(&lock.owner, lock.coins.clone()))
        .add_attribute("action", "withdraw_lock")
        .add_attribute("lock_id", lock_id.to_string())
        .add_attribute("owner", lock.owner.to_string())
        .add_attribute("coins", coins_to_string(&lock.coins)))
}

/// Creates a gauge funded with `coins`. The coins plus the creation fee must be attached
/// to the message; the fee is taken in the fee denom on top of any funding in that denom.
///
/// # Errors
/// Returns `InvalidAmount` if the funding coins are empty, zero or duplicated.
/// Returns `InvalidEpochCount` for a finite gauge paid over zero epochs.
/// Returns `InvalidTarget`, `NotFound` or `RollappGaugeExists` if the target can't be used.
/// Returns `InsufficientFunds` if the attached funds do not cover the coins and the fee.
pub fn execute_create_gauge(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    new_gauge: NewGauge,
) -> Result<Response, ContractError> {
    let params = PARAMS.load(deps.storage)?;
    let gauge = gauge::prepare_gauge(
        deps.storage,
        env.block.time,
        info.sender.clone(),
        new_gauge,
    )?;

    let fee = fee_coin(&params, gauge::create_gauge_fee(&params, &gauge.coins)?);
    let mut payment = Payment::new(&info.funds);
    payment.charge_fee(&fee, &gauge.coins)?;
    payment.debit(&gauge.coins)?;

    gauge::create_gauge(deps.storage, &gauge)?;

    let target = match &gauge.distribute_to {
        DistrTarget::Asset { denom, duration } => format!("asset:{denom}:{duration}"),
        DistrTarget::Rollapp { rollapp_id } => format!("rollapp:{rollapp_id}"),
    };

    let response = Response::new()
        .add_attribute("action", "create_gauge")
        .add_attribute("gauge_id", gauge.id.to_string())
        .add_attribute("owner", gauge.owner.to_string())
        .add_attribute("distribute_to", target)
        .add_attribute("is_perpetual", gauge.is_perpetual.to_string())
        .add_attribute("num_epochs_paid_over", gauge.num_epochs_paid_over.to_string())
        .add_attribute("coins", coins_to_string(&gauge.coins))
        .add_attribute("fee", fee.to_string());

    Ok(settle_payment(response, &params, &fee, payment, &info.sender))
}

/// Adds coins to a live gauge. Anyone can fund a gauge.
///
/// # Errors
/// Returns `NotFound` if the gauge never existed and `GaugeTerminal` if it was retired.
/// Returns `InsufficientFunds` if the attached funds do not cover the coins and the fee.
pub fn execute_add_to_gauge(
    deps: DepsMut,
    info: MessageInfo,
    gauge_id: u64,
    coins: Vec<Coin>,
) -> Result<Response, ContractError> {
    let params = PARAMS.load(deps.storage)?;
    let gauge = gauge::load_live_gauge(deps.storage, gauge_id)?;
    let coins = validate_coins(&coins)?;

    let fee = fee_coin(&params, gauge::add_to_gauge_fee(&params, &gauge, &coins)?);
    let mut payment = Payment::new(&info.funds);
    payment.charge_fee(&fee, &coins)?;
    payment.debit(&coins)?;

    let gauge = gauge::add_to_gauge(deps.storage, gauge, &coins)?;

    let response = Response::new()
        .add_attribute("action", "add_to_gauge")
        .add_attribute("gauge_id", gauge_id.to_string())
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("coins", coins_to_string(&coins))
        .add_attribute("gauge_coins", coins_to_string(&gauge.coins))
        .add_attribute("fee", fee.to_string());

    Ok(settle_payment(response, &params, &fee, payment, &info.sender))
}

pub fn execute_update_params(
    deps: DepsMut,
    info: MessageInfo,
    params: ParamsMsg,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;

    let params = validate_params(deps.api, params)?;
    PARAMS.save(deps.storage, &params)?;

    Ok(Response::new()
        .add_attribute("action", "update_params")
        .add_attribute("sender", info.sender.to_string())
        .add_attribute("fee_denom", params.fee_denom.clone())
        .add_attribute("fee_disposal", fee_disposal_to_string(&params)))
}

/// Creates the endorsements that are missing for live rollapp gauges, using the
/// last vote distribution. Endorsements that already exist are not touched.
pub fn execute_bootstrap_endorsements(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;

    let created = sponsorship::bootstrap_endorsements(deps.storage)?;

    Ok(Response::new()
        .add_attribute("action", "bootstrap_endorsements")
        .add_attribute("created", created.len().to_string()))
}

pub fn execute_force_set_lock_eligibility(
    deps: DepsMut,
    info: MessageInfo,
    lock_id: u64,
    timestamp: Timestamp,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;

    lockup::force_set_lock_eligibility(deps.storage, lock_id, timestamp)?;

    Ok(Response::new()
        .add_attribute("action", "force_set_lock_eligibility")
        .add_attribute("lock_id", lock_id.to_string())
        .add_attribute("eligible_since", timestamp.to_string()))
}

pub fn execute_set_gauge_min_lock_age(
    deps: DepsMut,
    info: MessageInfo,
    gauge_id: u64,
    min_lock_age: Option<u64>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;

    gauge::set_gauge_min_lock_age(deps.storage, gauge_id, min_lock_age)?;

    Ok(Response::new()
        .add_attribute("action", "set_gauge_min_lock_age")
        .add_attribute("gauge_id", gauge_id.to_string())
        .add_attribute(
            "min_lock_age",
            min_lock_age.map_or("None".to_string(), |age| age.to_string()),
        ))
}

/// Proposes a new admin for the contract.
/// Only the current admin can propose a new admin. The new admin must claim the role.
///
/// Setting `new_admin` to `None` removes any existing proposed admin,
/// preventing anyone from claiming admin privileges.
///
/// # Errors
/// Returns `Unauthorized` if sender is not the current admin.
/// Returns an error if the new admin address is invalid.
pub fn execute_propose_new_admin(
    deps: DepsMut,
    info: MessageInfo,
    new_admin: Option<String>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    assert_admin(deps.as_ref(), &info.sender)?;

    let maybe_new_admin_addr = new_admin
        .as_deref()
        .map(|a| deps.api.addr_validate(a))
        .transpose()?;

    NEW_ADMIN_PROPOSAL.save(deps.storage, &maybe_new_admin_addr)?;

    Ok(Response::new()
        .add_attribute("action", "propose_new_admin")
        .add_attribute("new_admin", new_admin.as_deref().unwrap_or("None")))
}

/// Claims the admin role for the contract.
/// Only the proposed new admin can claim the admin role.
///
/// # Errors
/// Returns `NoNewAdminProposed` if no admin proposal exists.
/// Returns `NotNewAdmin` if sender is not the proposed new admin.
pub fn execute_claim_admin_role(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    let new_admin = NEW_ADMIN_PROPOSAL
        .may_load(deps.storage)?
        .flatten()
        .ok_or(ContractError::NoNewAdminProposed {})?;

    if new_admin != info.sender {
        return Err(ContractError::NotNewAdmin {
            caller: info.sender.to_string(),
            new_admin: new_admin.to_string(),
        });
    }

    ADMIN.save(deps.storage, &new_admin)?;
    NEW_ADMIN_PROPOSAL.save(deps.storage, &None)?;

    Ok(Response::new()
        .add_attribute("action", "claim_admin_role")
        .add_attribute("new_admin", new_admin.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn sudo(deps: DepsMut, env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::EpochTick { epoch_id } => sudo_epoch_tick(deps, env, epoch_id),
        SudoMsg::UpdateSponsorshipDistribution { distribution } => {
            sudo_update_sponsorship_distribution(deps, distribution)
        }
        SudoMsg::UpsertRollapp {
            rollapp_id,
            owner,
            active,
        } => sudo_upsert_rollapp(deps, rollapp_id, owner, active),
    }
}

/// Distributes the rewards of every gauge for the epoch that just ended.
/// Epochs must be reported in order, without gaps.
///
/// # Errors
/// Returns `InvalidEpoch` if the epoch does not directly follow the last reported one.
pub fn sudo_epoch_tick(deps: DepsMut, env: Env, epoch_id: u64) -> Result<Response, ContractError> {
    if let Some(last_epoch) = LAST_EPOCH.may_load(deps.storage)? {
        if last_epoch.epoch_id.checked_add(1) != Some(epoch_id) {
            return Err(ContractError::InvalidEpoch {
                epoch_id,
                last_epoch_id: last_epoch.epoch_id,
            });
        }
    }

    LAST_EPOCH.save(
        deps.storage,
        &EpochInfo {
            epoch_id,
            timestamp: env.block.time,
        },
    )?;

    let params = PARAMS.load(deps.storage)?;
    let distribution = distribute_epoch(deps.storage, deps.api, env.block.time, &params, epoch_id)?;

    Ok(Response::new()
        .add_messages(distribution.messages)
        .add_events(distribution.events)
        .add_attribute("action", "epoch_tick")
        .add_attribute("epoch_id", epoch_id.to_string())
        .add_attribute("paid_gauges", distribution.paid_gauges.to_string())
        .add_attribute("skipped_gauges", distribution.skipped_gauges.to_string())
        .add_attribute("failed_gauges", distribution.failed_gauges.to_string())
        .add_attribute("retired_gauges", distribution.retired_gauges.to_string()))
}

pub fn sudo_update_sponsorship_distribution(
    deps: DepsMut,
    distribution: Distribution,
) -> Result<Response, ContractError> {
    let voting_power = distribution.voting_power;
    let updated = sponsorship::update_sponsorship_distribution(deps.storage, distribution)?;

    Ok(Response::new()
        .add_attribute("action", "update_sponsorship_distribution")
        .add_attribute("voting_power", voting_power.to_string())
        .add_attribute("updated_endorsements", updated.to_string()))
}

pub fn sudo_upsert_rollapp(
    deps: DepsMut,
    rollapp_id: String,
    owner: String,
    active: bool,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let rollapp = sponsorship::upsert_rollapp(deps.storage, rollapp_id, owner, active)?;

    Ok(Response::new()
        .add_attribute("action", "upsert_rollapp")
        .add_attribute("rollapp_id", rollapp.rollapp_id)
        .add_attribute("owner", rollapp.owner.to_string())
        .add_attribute("active", rollapp.active.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let binary = match msg {
        QueryMsg::Params {} => to_json_binary(&query_params(deps)?),
        QueryMsg::Admin {} => to_json_binary(&query_admin(deps)?),
        QueryMsg::Gauge { gauge_id } => to_json_binary(&query_gauge(deps, gauge_id)?),
        QueryMsg::Gauges { start_after, limit } => {
            to_json_binary(&query_gauges(deps, start_after, limit)?)
        }
        QueryMsg::RetiredGauge { gauge_id } => {
            to_json_binary(&query_retired_gauge(deps, gauge_id)?)
        }
        QueryMsg::Lock { lock_id } => to_json_binary(&query_lock(deps, lock_id)?),
        QueryMsg::LocksByCondition {
            denom,
            min_duration,
            start_after,
            limit,
        } => to_json_binary(&query_locks_by_condition(
            deps,
            denom,
            min_duration,
            start_after,
            limit,
        )?),
        QueryMsg::LocksByOwner {
            owner,
            start_after,
            limit,
        } => to_json_binary(&query_locks_by_owner(deps, owner, start_after, limit)?),
        QueryMsg::Endorsement { rollapp_id } => {
            to_json_binary(&query_endorsement(deps, rollapp_id)?)
        }
        QueryMsg::Endorsements { start_after, limit } => {
            to_json_binary(&query_endorsements(deps, start_after, limit)?)
        }
        QueryMsg::Rollapp { rollapp_id } => to_json_binary(&query_rollapp(deps, rollapp_id)?),
        QueryMsg::LastEpoch {} => to_json_binary(&query_last_epoch(deps)?),
        QueryMsg::CreateGaugeFee { coins } => {
            to_json_binary(&query_create_gauge_fee(deps, coins)?)
        }
        QueryMsg::AddToGaugeFee { gauge_id, coins } => {
            to_json_binary(&query_add_to_gauge_fee(deps, gauge_id, coins)?)
        }
    }?;

    Ok(binary)
}

pub fn query_params(deps: Deps) -> StdResult<ParamsResponse> {
    Ok(ParamsResponse {
        params: PARAMS.load(deps.storage)?,
    })
}

pub fn query_admin(deps: Deps) -> StdResult<AdminResponse> {
    Ok(AdminResponse {
        admin: ADMIN.load(deps.storage)?,
        new_admin_proposal: NEW_ADMIN_PROPOSAL.may_load(deps.storage)?.flatten(),
    })
}

pub fn query_gauge(deps: Deps, gauge_id: u64) -> Result<GaugeResponse, ContractError> {
    let gauge = GAUGES
        .may_load(deps.storage, gauge_id)?
        .ok_or_else(|| not_found("gauge", gauge_id))?;

    Ok(GaugeResponse { gauge })
}

pub fn query_gauges(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<GaugesResponse> {
    Ok(GaugesResponse {
        gauges: gauge::gauges(deps.storage, start_after, query_limit(limit))?,
    })
}

pub fn query_retired_gauge(
    deps: Deps,
    gauge_id: u64,
) -> Result<RetiredGaugeResponse, ContractError> {
    let retired_gauge = RETIRED_GAUGES
        .may_load(deps.storage, gauge_id)?
        .ok_or_else(|| not_found("retired gauge", gauge_id))?;

    Ok(RetiredGaugeResponse { retired_gauge })
}

pub fn query_lock(deps: Deps, lock_id: u64) -> Result<LockResponse, ContractError> {
    Ok(LockResponse {
        lock: lockup::load_lock(deps.storage, lock_id)?,
    })
}

pub fn query_locks_by_condition(
    deps: Deps,
    denom: String,
    min_duration: u64,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<LocksResponse> {
    let locks = lockup::locks_by_condition(deps.storage, &denom, min_duration, start_after)
        .take(query_limit(limit))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(LocksResponse { locks })
}

pub fn query_locks_by_owner(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<LocksResponse> {
    let owner = deps.api.addr_validate(&owner)?;

    Ok(LocksResponse {
        locks: lockup::locks_by_owner(deps.storage, owner, start_after, query_limit(limit))?,
    })
}

pub fn query_endorsement(
    deps: Deps,
    rollapp_id: String,
) -> Result<EndorsementResponse, ContractError> {
    let endorsement = ENDORSEMENTS
        .may_load(deps.storage, rollapp_id.clone())?
        .ok_or_else(|| not_found("endorsement", rollapp_id))?;

    Ok(EndorsementResponse { endorsement })
}

pub fn query_endorsements(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<EndorsementsResponse> {
    let endorsements = ENDORSEMENTS
        .range(
            deps.storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(query_limit(limit))
        .map(|entry| entry.map(|(_, endorsement)| endorsement))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(EndorsementsResponse { endorsements })
}

pub fn query_rollapp(deps: Deps, rollapp_id: String) -> Result<RollappResponse, ContractError> {
    let rollapp = ROLLAPPS
        .may_load(deps.storage, rollapp_id.clone())?
        .ok_or_else(|| not_found("rollapp", rollapp_id))?;

    Ok(RollappResponse { rollapp })
}

pub fn query_last_epoch(deps: Deps) -> StdResult<LastEpochResponse> {
    Ok(LastEpochResponse {
        last_epoch: LAST_EPOCH.may_load(deps.storage)?,
    })
}

pub fn query_create_gauge_fee(
    deps: Deps,
    coins: Vec<Coin>,
) -> Result<FeeResponse, ContractError> {
    let params = PARAMS.load(deps.storage)?;
    let fee = gauge::create_gauge_fee(&params, &coins)?;

    Ok(FeeResponse {
        fee: fee_coin(&params, fee),
        base_fee: params.create_gauge_base_fee,
        denom_count: distinct_denoms(&[&coins]),
    })
}

pub fn query_add_to_gauge_fee(
    deps: Deps,
    gauge_id: u64,
    coins: Vec<Coin>,
) -> Result<FeeResponse, ContractError> {
    let params = PARAMS.load(deps.storage)?;
    let gauge = gauge::load_live_gauge(deps.storage, gauge_id)?;
    let fee = gauge::add_to_gauge_fee(&params, &gauge, &coins)?;

    Ok(FeeResponse {
        fee: fee_coin(&params, fee),
        base_fee: params.add_to_gauge_base_fee,
        denom_count: distinct_denoms(&[&coins, &gauge.coins]),
    })
}
