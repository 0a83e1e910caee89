use cosmwasm_std::{CheckedMultiplyRatioError, OverflowError, StdError, Timestamp, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error(transparent)]
    Std(#[from] StdError),

    #[error(transparent)]
    OverflowError(#[from] OverflowError),

    #[error(transparent)]
    CheckedMultiplyRatioError(#[from] CheckedMultiplyRatioError),

    #[error(transparent)]
    PaymentError(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Insufficient funds in {denom}: required {required}, available {available}")]
    InsufficientFunds {
        denom: String,
        required: Uint128,
        available: Uint128,
    },

    #[error("{kind} {id} not found")]
    NotFound { kind: String, id: String },

    #[error("Gauge {gauge_id} is retired")]
    GaugeTerminal { gauge_id: u64 },

    #[error("Invariant violation in gauge {gauge_id}: {reason}")]
    InvariantViolation { gauge_id: u64, reason: String },

    #[error("Gauge {gauge_id} holds {available} {denom}, cannot release {required}")]
    InsufficientGaugeBalance {
        gauge_id: u64,
        denom: String,
        required: Uint128,
        available: Uint128,
    },

    #[error("Epoch {epoch_id} cannot follow epoch {last_epoch_id}")]
    InvalidEpoch { epoch_id: u64, last_epoch_id: u64 },

    #[error("Finite gauge must be paid over at least one epoch")]
    InvalidEpochCount {},

    #[error("Lock duration must be greater than zero and its unlock time must fit into a timestamp")]
    InvalidLockDuration {},

    #[error("Invalid distribution target: {reason}")]
    InvalidTarget { reason: String },

    #[error("Rollapp {rollapp_id} already has gauge {gauge_id}")]
    RollappGaugeExists { rollapp_id: String, gauge_id: u64 },

    #[error("Lock {lock_id} is already unlocking")]
    LockAlreadyUnlocking { lock_id: u64 },

    #[error("Lock {lock_id} can not be withdrawn before {end_time}")]
    LockNotMatured { lock_id: u64, end_time: Timestamp },

    #[error("No new admin proposed")]
    NoNewAdminProposed {},

    #[error("{caller} is not the new admin (should be {new_admin})")]
    NotNewAdmin { caller: String, new_admin: String },
}

pub fn not_found(kind: &str, id: impl ToString) -> ContractError {
    ContractError::NotFound {
        kind: kind.to_string(),
        id: id.to_string(),
    }
}

pub fn invalid_amount(reason: impl Into<String>) -> ContractError {
    ContractError::InvalidAmount {
        reason: reason.into(),
    }
}

pub fn invariant_violation(gauge_id: u64, reason: impl Into<String>) -> ContractError {
    ContractError::InvariantViolation {
        gauge_id,
        reason: reason.into(),
    }
}
