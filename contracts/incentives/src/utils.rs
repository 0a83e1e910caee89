use std::collections::{BTreeMap, BTreeSet};

use cosmwasm_std::{Coin, OverflowError, Uint128};

use crate::error::{invalid_amount, ContractError};

pub const DEFAULT_QUERY_LIMIT: u32 = 10;
pub const MAX_QUERY_LIMIT: u32 = 100;

pub fn query_limit(limit: Option<u32>) -> usize {
    limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize
}

pub fn amount_of(coins: &[Coin], denom: &str) -> Uint128 {
    coins
        .iter()
        .filter(|coin| coin.denom == denom)
        .map(|coin| coin.amount)
        .sum()
}

/// Validates coins supplied by a user: at least one coin, no zero amounts and
/// every denom at most once. Returns the coins sorted by denom.
pub fn validate_coins(coins: &[Coin]) -> Result<Vec<Coin>, ContractError> {
    if coins.is_empty() {
        return Err(invalid_amount("at least one coin must be provided"));
    }

    let mut seen = BTreeSet::new();
    for coin in coins {
        if coin.denom.is_empty() {
            return Err(invalid_amount("denom cannot be empty"));
        }
        if coin.amount.is_zero() {
            return Err(invalid_amount(format!("zero amount of {}", coin.denom)));
        }
        if !seen.insert(coin.denom.as_str()) {
            return Err(invalid_amount(format!("duplicate denom {}", coin.denom)));
        }
    }

    let mut sorted = coins.to_vec();
    sorted.sort_by(|a, b| a.denom.cmp(&b.denom));
    Ok(sorted)
}

fn into_coins(amounts: BTreeMap<String, Uint128>) -> Vec<Coin> {
    amounts
        .into_iter()
        .filter(|(_, amount)| !amount.is_zero())
        .map(|(denom, amount)| Coin { denom, amount })
        .collect()
}

/// Merges two coin sets. The result is sorted by denom and holds no zero amounts.
pub fn add_coins(left: &[Coin], right: &[Coin]) -> Result<Vec<Coin>, OverflowError> {
    let mut amounts: BTreeMap<String, Uint128> = BTreeMap::new();
    for coin in left.iter().chain(right.iter()) {
        let entry = amounts.entry(coin.denom.clone()).or_default();
        *entry = entry.checked_add(coin.amount)?;
    }

    Ok(into_coins(amounts))
}

/// Subtracts `right` from `left`, failing if any denom of `right` is not fully covered.
pub fn sub_coins(left: &[Coin], right: &[Coin]) -> Result<Vec<Coin>, OverflowError> {
    let mut amounts: BTreeMap<String, Uint128> = BTreeMap::new();
    for coin in left {
        let entry = amounts.entry(coin.denom.clone()).or_default();
        *entry = entry.checked_add(coin.amount)?;
    }
    for coin in right {
        let entry = amounts.entry(coin.denom.clone()).or_default();
        *entry = entry.checked_sub(coin.amount)?;
    }

    Ok(into_coins(amounts))
}

/// Returns true if `left` holds at least as much as `right` in every denom.
pub fn covers(left: &[Coin], right: &[Coin]) -> bool {
    right
        .iter()
        .all(|coin| amount_of(left, &coin.denom) >= coin.amount)
}

pub fn distinct_denoms(sets: &[&[Coin]]) -> u64 {
    sets.iter()
        .flat_map(|coins| coins.iter())
        .filter(|coin| !coin.amount.is_zero())
        .map(|coin| coin.denom.as_str())
        .collect::<BTreeSet<&str>>()
        .len() as u64
}

pub fn coins_to_string(coins: &[Coin]) -> String {
    if coins.is_empty() {
        return "none".to_string();
    }

    coins
        .iter()
        .map(|coin| coin.to_string())
        .collect::<Vec<String>>()
        .join(",")
}
