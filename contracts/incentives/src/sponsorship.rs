use std::collections::BTreeSet;

use cosmwasm_std::{Addr, Order, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{
    Distribution, Endorsement, Rollapp, ENDORSEMENTS, ROLLAPPS, ROLLAPP_GAUGES,
    SPONSORSHIP_DISTRIBUTION,
};

/// Power cast towards the given gauge in a vote distribution. Gauges without votes have zero power.
pub fn power_for_gauge(distribution: &Distribution, gauge_id: u64) -> Uint128 {
    distribution
        .gauges
        .iter()
        .find(|gauge_power| gauge_power.gauge_id == gauge_id)
        .map(|gauge_power| gauge_power.power)
        .unwrap_or_default()
}

fn last_distribution(storage: &dyn Storage) -> StdResult<Distribution> {
    Ok(SPONSORSHIP_DISTRIBUTION
        .may_load(storage)?
        .unwrap_or_default())
}

/// Every live rollapp gauge as (rollapp_id, gauge_id), in rollapp id order.
pub fn rollapp_gauges(storage: &dyn Storage) -> StdResult<Vec<(String, u64)>> {
    ROLLAPP_GAUGES
        .range(storage, None, None, Order::Ascending)
        .collect()
}

pub fn recompute_endorsement(
    storage: &mut dyn Storage,
    rollapp_id: &str,
    gauge_id: u64,
    power: Uint128,
) -> StdResult<Endorsement> {
    let endorsement = Endorsement {
        rollapp_id: rollapp_id.to_string(),
        rollapp_gauge_id: gauge_id,
        power,
    };
    ENDORSEMENTS.save(storage, rollapp_id.to_string(), &endorsement)?;

    Ok(endorsement)
}

/// Creates the endorsement of a rollapp gauge from the last vote distribution, unless it exists.
/// Returns true if a new endorsement was created.
pub fn ensure_endorsement(
    storage: &mut dyn Storage,
    rollapp_id: &str,
    gauge_id: u64,
) -> StdResult<bool> {
    if ENDORSEMENTS.has(storage, rollapp_id.to_string()) {
        return Ok(false);
    }

    let power = power_for_gauge(&last_distribution(storage)?, gauge_id);
    recompute_endorsement(storage, rollapp_id, gauge_id, power)?;

    Ok(true)
}

/// Creates the missing endorsements of all live rollapp gauges. Existing endorsements
/// are kept as they are, so running it more than once changes nothing.
pub fn bootstrap_endorsements(storage: &mut dyn Storage) -> StdResult<Vec<Endorsement>> {
    let distribution = last_distribution(storage)?;
    let mut created = vec![];

    for (rollapp_id, gauge_id) in rollapp_gauges(storage)? {
        if ENDORSEMENTS.has(storage, rollapp_id.clone()) {
            continue;
        }

        let power = power_for_gauge(&distribution, gauge_id);
        created.push(recompute_endorsement(storage, &rollapp_id, gauge_id, power)?);
    }

    Ok(created)
}

pub fn validate_distribution(distribution: &Distribution) -> Result<(), ContractError> {
    let mut seen = BTreeSet::new();
    for gauge_power in &distribution.gauges {
        if !seen.insert(gauge_power.gauge_id) {
            return Err(ContractError::InvalidTarget {
                reason: format!(
                    "gauge {} appears more than once in the distribution",
                    gauge_power.gauge_id
                ),
            });
        }
    }

    Ok(())
}

/// Stores a new vote distribution and refreshes the endorsement of every live rollapp gauge.
/// Returns the number of refreshed endorsements.
pub fn update_sponsorship_distribution(
    storage: &mut dyn Storage,
    distribution: Distribution,
) -> Result<usize, ContractError> {
    validate_distribution(&distribution)?;
    SPONSORSHIP_DISTRIBUTION.save(storage, &distribution)?;

    let gauges = rollapp_gauges(storage)?;
    for (rollapp_id, gauge_id) in &gauges {
        let power = power_for_gauge(&distribution, *gauge_id);
        recompute_endorsement(storage, rollapp_id, *gauge_id, power)?;
    }

    Ok(gauges.len())
}

/// Forgets a retired rollapp gauge, so that a new gauge can be created for the rollapp.
pub fn remove_rollapp_gauge(storage: &mut dyn Storage, rollapp_id: &str) {
    ROLLAPP_GAUGES.remove(storage, rollapp_id.to_string());
    ENDORSEMENTS.remove(storage, rollapp_id.to_string());
}

pub fn upsert_rollapp(
    storage: &mut dyn Storage,
    rollapp_id: String,
    owner: Addr,
    active: bool,
) -> Result<Rollapp, ContractError> {
    if rollapp_id.is_empty() {
        return Err(ContractError::InvalidTarget {
            reason: "rollapp id cannot be empty".to_string(),
        });
    }

    let rollapp = Rollapp {
        rollapp_id,
        owner,
        active,
    };
    ROLLAPPS.save(storage, rollapp.rollapp_id.clone(), &rollapp)?;

    Ok(rollapp)
}
