use cosmwasm_std::{Addr, Coin, Order, StdResult, Storage, Timestamp};
use cw_storage_plus::Bound;

use crate::error::{not_found, ContractError};
use crate::state::{Lock, Params, LOCKS, LOCKS_BY_DENOM, LOCKS_BY_OWNER, LOCK_ID};
use crate::utils::validate_coins;

/// Validates the coins and duration of a new lock. Returns the coins sorted by denom.
pub fn validate_lock(
    coins: &[Coin],
    duration: u64,
    now: Timestamp,
) -> Result<Vec<Coin>, ContractError> {
    let coins = validate_coins(coins)?;

    if duration == 0 {
        return Err(ContractError::InvalidLockDuration {});
    }
    unlock_end_time(now, duration)?;

    Ok(coins)
}

/// Time at which a lock that starts unlocking at `now` can be withdrawn.
pub fn unlock_end_time(now: Timestamp, duration: u64) -> Result<Timestamp, ContractError> {
    duration
        .checked_mul(1_000_000_000)
        .and_then(|nanos| now.nanos().checked_add(nanos))
        .map(Timestamp::from_nanos)
        .ok_or(ContractError::InvalidLockDuration {})
}

/// Stores a new lock. The coins must already be validated and paid for.
/// The eligibility age of the lock starts counting at `now`.
pub fn create_lock(
    storage: &mut dyn Storage,
    now: Timestamp,
    owner: Addr,
    coins: Vec<Coin>,
    duration: u64,
) -> StdResult<Lock> {
    let lock_id = LOCK_ID.load(storage)?;
    LOCK_ID.save(storage, &(lock_id + 1))?;

    let lock = Lock {
        lock_id,
        owner,
        coins,
        duration,
        eligible_since: now,
        end_time: None,
    };

    LOCKS.save(storage, lock_id, &lock)?;
    LOCKS_BY_OWNER.save(storage, (lock.owner.clone(), lock_id), &())?;
    for coin in &lock.coins {
        LOCKS_BY_DENOM.save(storage, (coin.denom.clone(), lock_id), &lock.duration)?;
    }

    Ok(lock)
}

pub fn load_lock(storage: &dyn Storage, lock_id: u64) -> Result<Lock, ContractError> {
    LOCKS
        .may_load(storage, lock_id)?
        .ok_or_else(|| not_found("lock", lock_id))
}

fn load_owned_lock(
    storage: &dyn Storage,
    sender: &Addr,
    lock_id: u64,
) -> Result<Lock, ContractError> {
    let lock = load_lock(storage, lock_id)?;
    if lock.owner != *sender {
        return Err(ContractError::Unauthorized {});
    }

    Ok(lock)
}

/// Starts the unbonding of a lock. From now on the lock no longer earns rewards,
/// and its coins can be withdrawn once `duration` seconds have passed.
pub fn begin_unlock(
    storage: &mut dyn Storage,
    now: Timestamp,
    sender: &Addr,
    lock_id: u64,
) -> Result<Lock, ContractError> {
    let mut lock = load_owned_lock(storage, sender, lock_id)?;
    if lock.is_unlocking() {
        return Err(ContractError::LockAlreadyUnlocking { lock_id });
    }

    lock.end_time = Some(unlock_end_time(now, lock.duration)?);
    LOCKS.save(storage, lock_id, &lock)?;

    Ok(lock)
}

/// Removes a matured lock and returns it, so that its coins can be credited back to the owner.
pub fn withdraw_lock(
    storage: &mut dyn Storage,
    now: Timestamp,
    sender: &Addr,
    lock_id: u64,
) -> Result<Lock, ContractError> {
    let lock = load_owned_lock(storage, sender, lock_id)?;

    match lock.end_time {
        Some(end_time) if end_time <= now => {}
        Some(end_time) => return Err(ContractError::LockNotMatured { lock_id, end_time }),
        None => {
            return Err(ContractError::LockNotMatured {
                lock_id,
                end_time: unlock_end_time(now, lock.duration)?,
            })
        }
    }

    LOCKS.remove(storage, lock_id);
    LOCKS_BY_OWNER.remove(storage, (lock.owner.clone(), lock_id));
    for coin in &lock.coins {
        LOCKS_BY_DENOM.remove(storage, (coin.denom.clone(), lock_id));
    }

    Ok(lock)
}

/// Overrides the eligibility timestamp of a lock. Used by the admin for one-time corrections.
pub fn force_set_lock_eligibility(
    storage: &mut dyn Storage,
    lock_id: u64,
    timestamp: Timestamp,
) -> Result<Lock, ContractError> {
    let mut lock = load_lock(storage, lock_id)?;
    lock.eligible_since = timestamp;
    LOCKS.save(storage, lock_id, &lock)?;

    Ok(lock)
}

/// Lazily iterates over the locks holding `denom` that were locked for at least
/// `min_duration` seconds, in ascending lock id order. Iteration can be resumed
/// after a given lock id.
pub fn locks_by_condition<'a>(
    storage: &'a dyn Storage,
    denom: &str,
    min_duration: u64,
    start_after: Option<u64>,
) -> impl Iterator<Item = StdResult<Lock>> + 'a {
    LOCKS_BY_DENOM
        .prefix(denom.to_string())
        .range(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .filter(move |entry| !matches!(entry, Ok((_, duration)) if *duration < min_duration))
        .map(move |entry| entry.and_then(|(lock_id, _)| LOCKS.load(storage, lock_id)))
}

/// A lock earns rewards while it is not unlocking, its age has reached `min_lock_age`
/// and it was locked for at least the configured minimum duration.
pub fn is_reward_eligible(lock: &Lock, now: Timestamp, params: &Params, min_lock_age: u64) -> bool {
    !lock.is_unlocking()
        && lock.duration >= params.min_lock_duration
        && lock.age(now) >= min_lock_age
}

pub fn locks_by_owner(
    storage: &dyn Storage,
    owner: Addr,
    start_after: Option<u64>,
    limit: usize,
) -> StdResult<Vec<Lock>> {
    LOCKS_BY_OWNER
        .prefix(owner)
        .keys(
            storage,
            start_after.map(Bound::exclusive),
            None,
            Order::Ascending,
        )
        .take(limit)
        .map(|lock_id| lock_id.and_then(|lock_id| LOCKS.load(storage, lock_id)))
        .collect()
}
