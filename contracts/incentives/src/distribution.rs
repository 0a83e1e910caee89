use std::collections::BTreeMap;

use cosmwasm_std::{
    Addr, Api, BankMsg, Coin, Event, Order, StdResult, Storage, Timestamp, Uint128,
};

use crate::bank::credit_msg;
use crate::error::{invariant_violation, ContractError};
use crate::lockup::{is_reward_eligible, locks_by_condition};
use crate::sponsorship;
use crate::state::{
    DistrTarget, Gauge, Params, RetiredGauge, RollappGaugesMode, ENDORSEMENTS, GAUGES,
    RETIRED_GAUGES, ROLLAPPS,
};
use crate::utils::{add_coins, amount_of, coins_to_string, covers, sub_coins};

/// A party that takes part in a gauge's release, proportionally to its weight.
/// For asset gauges the id is the lock id, for rollapp gauges the gauge id.
#[derive(Clone, Debug, PartialEq)]
pub struct Recipient {
    pub id: u64,
    pub address: Addr,
    pub weight: Uint128,
}

/// The outcome of one gauge for one epoch, computed without touching the storage.
#[derive(Clone, Debug, PartialEq)]
pub enum GaugeOutcome {
    Paid(GaugePlan),
    Skipped { reason: String },
}

#[derive(Clone, Debug, PartialEq)]
pub struct GaugePlan {
    // the gauge as it should be stored after this epoch
    pub gauge: Gauge,
    pub released: Vec<Coin>,
    pub payouts: BTreeMap<Addr, Vec<Coin>>,
    pub recipients: usize,
    pub retire: bool,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EpochDistribution {
    pub messages: Vec<BankMsg>,
    pub events: Vec<Event>,
    pub paid_gauges: u64,
    pub skipped_gauges: u64,
    pub failed_gauges: u64,
    pub retired_gauges: u64,
}

/// Coins a gauge releases in the current epoch.
///
/// A finite gauge spreads what is left evenly over its remaining epochs and releases
/// everything that is left in its last epoch. A perpetual gauge releases its fixed
/// amount per epoch if it has one, otherwise its whole remaining balance.
pub fn compute_release(gauge: &Gauge) -> Result<Vec<Coin>, ContractError> {
    let remaining = sub_coins(&gauge.coins, &gauge.distributed_coins)
        .map_err(|_| invariant_violation(gauge.id, "distributed coins exceed funded coins"))?;

    if gauge.is_perpetual {
        let Some(release) = &gauge.release_per_epoch else {
            return Ok(remaining);
        };

        for coin in release {
            let available = amount_of(&remaining, &coin.denom);
            if available < coin.amount {
                return Err(ContractError::InsufficientGaugeBalance {
                    gauge_id: gauge.id,
                    denom: coin.denom.clone(),
                    required: coin.amount,
                    available,
                });
            }
        }

        return Ok(release.clone());
    }

    let remaining_epochs = gauge
        .num_epochs_paid_over
        .saturating_sub(gauge.filled_epochs);
    if remaining_epochs == 0 {
        return Err(invariant_violation(gauge.id, "no epochs left to pay over"));
    }

    Ok(remaining
        .into_iter()
        .map(|coin| Coin {
            amount: coin.amount / Uint128::from(remaining_epochs),
            denom: coin.denom,
        })
        .filter(|coin| !coin.amount.is_zero())
        .collect())
}

/// Splits `release` between the recipients proportionally to their weights, rounding down.
/// What is left after rounding goes to the first recipient, so the shares always sum up to
/// `release`. Recipients are expected in ascending id order.
pub fn apportion(
    release: &[Coin],
    recipients: &[Recipient],
) -> Result<Vec<Vec<Coin>>, ContractError> {
    let mut shares: Vec<Vec<Coin>> = vec![vec![]; recipients.len()];
    if recipients.is_empty() {
        return Ok(shares);
    }

    let total_weight = recipients
        .iter()
        .try_fold(Uint128::zero(), |total, recipient| {
            total.checked_add(recipient.weight)
        })?;

    for coin in release {
        let mut amounts = recipients
            .iter()
            .map(|recipient| {
                coin.amount
                    .checked_multiply_ratio(recipient.weight, total_weight)
            })
            .collect::<Result<Vec<Uint128>, _>>()?;

        let apportioned = amounts
            .iter()
            .try_fold(Uint128::zero(), |total, amount| total.checked_add(*amount))?;
        amounts[0] = amounts[0].checked_add(coin.amount.checked_sub(apportioned)?)?;

        for (share, amount) in shares.iter_mut().zip(amounts) {
            if !amount.is_zero() {
                share.push(Coin {
                    denom: coin.denom.clone(),
                    amount,
                });
            }
        }
    }

    Ok(shares)
}

/// Recipients of a gauge for the current epoch, in ascending id order.
pub fn eligible_recipients(
    storage: &dyn Storage,
    now: Timestamp,
    params: &Params,
    gauge: &Gauge,
) -> StdResult<Vec<Recipient>> {
    match &gauge.distribute_to {
        DistrTarget::Asset { denom, duration } => {
            let min_lock_age = gauge.min_lock_age.unwrap_or_default().max(params.min_lock_age);

            let mut recipients = vec![];
            for lock in locks_by_condition(storage, denom, *duration, None) {
                let lock = lock?;
                if !is_reward_eligible(&lock, now, params, min_lock_age) {
                    continue;
                }

                let weight = lock.amount_of(denom);
                if !weight.is_zero() {
                    recipients.push(Recipient {
                        id: lock.lock_id,
                        address: lock.owner,
                        weight,
                    });
                }
            }

            Ok(recipients)
        }
        DistrTarget::Rollapp { rollapp_id } => {
            let Some(rollapp) = ROLLAPPS.may_load(storage, rollapp_id.clone())? else {
                return Ok(vec![]);
            };

            if params.rollapp_gauges_mode == RollappGaugesMode::ActiveRollapps && !rollapp.active
            {
                return Ok(vec![]);
            }

            let power = ENDORSEMENTS
                .may_load(storage, rollapp_id.clone())?
                .filter(|endorsement| endorsement.rollapp_gauge_id == gauge.id)
                .map(|endorsement| endorsement.power)
                .unwrap_or_default();

            if power.is_zero() {
                return Ok(vec![]);
            }

            Ok(vec![Recipient {
                id: gauge.id,
                address: rollapp.owner,
                weight: power,
            }])
        }
    }
}

/// Works out what a gauge pays in the current epoch. Nothing is written, so a gauge whose
/// plan fails leaves no trace.
pub fn plan_gauge(
    storage: &dyn Storage,
    now: Timestamp,
    params: &Params,
    gauge: &Gauge,
) -> Result<GaugeOutcome, ContractError> {
    if gauge.is_upcoming(now) {
        return Ok(GaugeOutcome::Skipped {
            reason: "upcoming".to_string(),
        });
    }

    let release = compute_release(gauge)?;

    // a gauge holding nothing waits for more funds without using up an epoch
    if release.is_empty() && covers(&gauge.distributed_coins, &gauge.coins) {
        return Ok(GaugeOutcome::Skipped {
            reason: "nothing to release".to_string(),
        });
    }

    let recipients = eligible_recipients(storage, now, params, gauge)?;
    if recipients.is_empty() {
        return Ok(GaugeOutcome::Skipped {
            reason: "no eligible recipients".to_string(),
        });
    }

    let shares = apportion(&release, &recipients)?;

    let mut payouts: BTreeMap<Addr, Vec<Coin>> = BTreeMap::new();
    let mut paid: Vec<Coin> = vec![];
    for (recipient, share) in recipients.iter().zip(shares) {
        if share.is_empty() {
            continue;
        }

        paid = add_coins(&paid, &share)?;
        let payout = payouts.entry(recipient.address.clone()).or_default();
        *payout = add_coins(payout, &share)?;
    }

    if paid != release {
        return Err(invariant_violation(
            gauge.id,
            format!(
                "payouts {} do not sum up to the release {}",
                coins_to_string(&paid),
                coins_to_string(&release)
            ),
        ));
    }

    let mut gauge = gauge.clone();
    gauge.distributed_coins = add_coins(&gauge.distributed_coins, &release)?;
    gauge.filled_epochs = gauge.filled_epochs.checked_add(1).ok_or_else(|| {
        invariant_violation(gauge.id, "filled epochs overflow")
    })?;

    if !covers(&gauge.coins, &gauge.distributed_coins) {
        return Err(invariant_violation(
            gauge.id,
            format!(
                "distributed {} exceeds funded {}",
                coins_to_string(&gauge.distributed_coins),
                coins_to_string(&gauge.coins)
            ),
        ));
    }

    let retire = !gauge.is_perpetual
        && (gauge.filled_epochs >= gauge.num_epochs_paid_over
            || covers(&gauge.distributed_coins, &gauge.coins));

    Ok(GaugeOutcome::Paid(GaugePlan {
        gauge,
        released: release,
        payouts,
        recipients: recipients.len(),
        retire,
    }))
}

fn commit_plan(
    storage: &mut dyn Storage,
    now: Timestamp,
    epoch_id: u64,
    plan: &GaugePlan,
) -> StdResult<()> {
    let gauge = &plan.gauge;
    if !plan.retire {
        return GAUGES.save(storage, gauge.id, gauge);
    }

    GAUGES.remove(storage, gauge.id);
    RETIRED_GAUGES.save(
        storage,
        gauge.id,
        &RetiredGauge {
            gauge_id: gauge.id,
            retired_at: now,
            epoch_id,
            distributed_coins: gauge.distributed_coins.clone(),
        },
    )?;

    if let Some(rollapp_id) = gauge.rollapp_id() {
        sponsorship::remove_rollapp_gauge(storage, rollapp_id);
    }

    Ok(())
}

// Errors that only concern the gauge being processed. Anything else aborts the whole epoch.
fn is_gauge_failure(err: &ContractError) -> bool {
    matches!(
        err,
        ContractError::InvariantViolation { .. }
            | ContractError::InsufficientGaugeBalance { .. }
            | ContractError::OverflowError(_)
            | ContractError::CheckedMultiplyRatioError(_)
    )
}

/// Runs one epoch of distribution over all gauges in ascending id order. Every gauge is
/// planned on its own: a gauge that fails is reported and left untouched, and the epoch
/// goes on with the next gauge. Rewards are merged per address into one credit each.
pub fn distribute_epoch(
    storage: &mut dyn Storage,
    api: &dyn Api,
    now: Timestamp,
    params: &Params,
    epoch_id: u64,
) -> Result<EpochDistribution, ContractError> {
    let gauges = GAUGES
        .range(storage, None, None, Order::Ascending)
        .map(|entry| entry.map(|(_, gauge)| gauge))
        .collect::<StdResult<Vec<Gauge>>>()?;

    let mut result = EpochDistribution::default();
    let mut credits: BTreeMap<Addr, Vec<Coin>> = BTreeMap::new();

    for gauge in gauges {
        let outcome = plan_gauge(storage, now, params, &gauge).and_then(|outcome| {
            let plan = match outcome {
                GaugeOutcome::Paid(plan) => plan,
                skipped => return Ok((skipped, vec![])),
            };

            let mut merged = Vec::with_capacity(plan.payouts.len());
            for (address, coins) in &plan.payouts {
                let credited = credits.get(address).map(Vec::as_slice).unwrap_or_default();
                merged.push((address.clone(), add_coins(credited, coins)?));
            }

            Ok((GaugeOutcome::Paid(plan), merged))
        });

        match outcome {
            Ok((GaugeOutcome::Paid(plan), merged)) => {
                commit_plan(storage, now, epoch_id, &plan)?;
                credits.extend(merged);

                result.paid_gauges += 1;
                if plan.retire {
                    result.retired_gauges += 1;
                }
                result.events.push(
                    Event::new("gauge_distribution")
                        .add_attribute("epoch_id", epoch_id.to_string())
                        .add_attribute("gauge_id", plan.gauge.id.to_string())
                        .add_attribute("released", coins_to_string(&plan.released))
                        .add_attribute("recipients", plan.recipients.to_string())
                        .add_attribute("filled_epochs", plan.gauge.filled_epochs.to_string())
                        .add_attribute("retired", plan.retire.to_string()),
                );
            }
            Ok((GaugeOutcome::Skipped { reason }, _)) => {
                result.skipped_gauges += 1;
                result.events.push(
                    Event::new("gauge_skipped")
                        .add_attribute("epoch_id", epoch_id.to_string())
                        .add_attribute("gauge_id", gauge.id.to_string())
                        .add_attribute("reason", reason),
                );
            }
            Err(err) if is_gauge_failure(&err) => {
                api.debug(&format!(
                    "epoch {epoch_id}: distribution of gauge {} failed: {err}",
                    gauge.id
                ));

                result.failed_gauges += 1;
                result.events.push(
                    Event::new("gauge_skipped")
                        .add_attribute("epoch_id", epoch_id.to_string())
                        .add_attribute("gauge_id", gauge.id.to_string())
                        .add_attribute("reason", "failed")
                        .add_attribute("error", err.to_string()),
                );
            }
            Err(err) => return Err(err),
        }
    }

    result.messages = credits
        .into_iter()
        .map(|(address, coins)| credit_msg(&address, coins))
        .collect();

    Ok(result)
}
