use cosmwasm_std::{Addr, Coin, Order, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::Bound;

use crate::error::{invalid_amount, not_found, ContractError};
use crate::sponsorship;
use crate::state::{
    DistrTarget, Gauge, Params, GAUGES, GAUGE_ID, RETIRED_GAUGES, ROLLAPPS, ROLLAPP_GAUGES,
};
use crate::utils::{add_coins, distinct_denoms, validate_coins};

/// Everything a caller chooses about a gauge when creating it.
pub struct NewGauge {
    pub is_perpetual: bool,
    pub distribute_to: DistrTarget,
    pub coins: Vec<Coin>,
    pub num_epochs_paid_over: u64,
    pub start_time: Option<Timestamp>,
    pub min_lock_age: Option<u64>,
    pub release_per_epoch: Option<Vec<Coin>>,
}

/// fee = create_gauge_base_fee + add_denom_fee * number of distinct denoms funded
pub fn create_gauge_fee(params: &Params, coins: &[Coin]) -> Result<Uint128, ContractError> {
    denom_fee(params, params.create_gauge_base_fee, &[coins])
}

/// fee = add_to_gauge_base_fee + add_denom_fee * number of distinct denoms
/// the gauge holds after the coins are added
pub fn add_to_gauge_fee(
    params: &Params,
    gauge: &Gauge,
    coins: &[Coin],
) -> Result<Uint128, ContractError> {
    denom_fee(params, params.add_to_gauge_base_fee, &[coins, &gauge.coins])
}

fn denom_fee(
    params: &Params,
    base_fee: Uint128,
    coin_sets: &[&[Coin]],
) -> Result<Uint128, ContractError> {
    let denoms = Uint128::from(distinct_denoms(coin_sets));

    Ok(params.add_denom_fee.checked_mul(denoms)?.checked_add(base_fee)?)
}

/// Validates a gauge creation request and builds the gauge that will be stored
/// under the next gauge id. Nothing is written.
pub fn prepare_gauge(
    storage: &dyn Storage,
    now: Timestamp,
    owner: Addr,
    new_gauge: NewGauge,
) -> Result<Gauge, ContractError> {
    let coins = validate_coins(&new_gauge.coins)?;

    let num_epochs_paid_over = if new_gauge.is_perpetual {
        1
    } else if new_gauge.num_epochs_paid_over == 0 {
        return Err(ContractError::InvalidEpochCount {});
    } else {
        new_gauge.num_epochs_paid_over
    };

    match &new_gauge.distribute_to {
        DistrTarget::Asset { denom, .. } => {
            if denom.is_empty() {
                return Err(ContractError::InvalidTarget {
                    reason: "asset denom cannot be empty".to_string(),
                });
            }
        }
        DistrTarget::Rollapp { rollapp_id } => {
            if new_gauge.min_lock_age.is_some() {
                return Err(ContractError::InvalidTarget {
                    reason: "minimum lock age only applies to asset gauges".to_string(),
                });
            }
            if !ROLLAPPS.has(storage, rollapp_id.clone()) {
                return Err(not_found("rollapp", rollapp_id));
            }
            if let Some(gauge_id) = ROLLAPP_GAUGES.may_load(storage, rollapp_id.clone())? {
                return Err(ContractError::RollappGaugeExists {
                    rollapp_id: rollapp_id.clone(),
                    gauge_id,
                });
            }
        }
    }

    let release_per_epoch = match new_gauge.release_per_epoch {
        Some(_) if !new_gauge.is_perpetual => {
            return Err(invalid_amount(
                "release per epoch can only be set on perpetual gauges",
            ));
        }
        Some(release) => Some(validate_coins(&release)?),
        None => None,
    };

    Ok(Gauge {
        id: GAUGE_ID.load(storage)?,
        owner,
        is_perpetual: new_gauge.is_perpetual,
        distribute_to: new_gauge.distribute_to,
        coins,
        distributed_coins: vec![],
        num_epochs_paid_over,
        filled_epochs: 0,
        start_time: new_gauge.start_time.unwrap_or(now),
        min_lock_age: new_gauge.min_lock_age,
        release_per_epoch,
    })
}

/// Stores a gauge built by `prepare_gauge` once it has been paid for. A rollapp gauge
/// is registered as the rollapp's gauge and gets its endorsement.
pub fn create_gauge(storage: &mut dyn Storage, gauge: &Gauge) -> StdResult<()> {
    GAUGE_ID.save(storage, &(gauge.id + 1))?;
    GAUGES.save(storage, gauge.id, gauge)?;

    if let DistrTarget::Rollapp { rollapp_id } = &gauge.distribute_to {
        ROLLAPP_GAUGES.save(storage, rollapp_id.clone(), &gauge.id)?;
        sponsorship::ensure_endorsement(storage, rollapp_id, gauge.id)?;
    }

    Ok(())
}

/// Loads a gauge that can still be funded.
pub fn load_live_gauge(storage: &dyn Storage, gauge_id: u64) -> Result<Gauge, ContractError> {
    if let Some(gauge) = GAUGES.may_load(storage, gauge_id)? {
        return Ok(gauge);
    }

    if RETIRED_GAUGES.has(storage, gauge_id) {
        return Err(ContractError::GaugeTerminal { gauge_id });
    }

    Err(not_found("gauge", gauge_id))
}

/// Adds already paid coins to a gauge.
pub fn add_to_gauge(
    storage: &mut dyn Storage,
    mut gauge: Gauge,
    coins: &[Coin],
) -> Result<Gauge, ContractError> {
    gauge.coins = add_coins(&gauge.coins, coins)?;
    GAUGES.save(storage, gauge.id, &gauge)?;

    Ok(gauge)
}

pub fn set_gauge_min_lock_age(
    storage: &mut dyn Storage,
    gauge_id: u64,
    min_lock_age: Option<u64>,
) -> Result<Gauge, ContractError> {
    let mut gauge = load_live_gauge(storage, gauge_id)?;

    if !matches!(gauge.distribute_to, DistrTarget::Asset { .. }) {
        return Err(ContractError::InvalidTarget {
            reason: format!("gauge {gauge_id} does not distribute to locks"),
        });
    }

    gauge.min_lock_age = min_lock_age;
    GAUGES.save(storage, gauge_id, &gauge)?;

    Ok(gauge)
}

pub fn gauges(
    storage: &dyn Storage,
    start_after: Option<u64>,
    limit: usize,
) -> StdResult<Vec<Gauge>> {
    GAUGES
        .range(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|entry| entry.map(|(_, gauge)| gauge))
        .collect()
}
