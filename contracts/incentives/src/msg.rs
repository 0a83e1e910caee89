use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Coin, Timestamp, Uint128};

use crate::state::{DistrTarget, Distribution, RollappGaugesMode};

#[cw_serde]
pub struct InstantiateMsg {
    pub admin: String,
    pub params: ParamsMsg,
}

#[cw_serde]
pub struct ParamsMsg {
    pub fee_denom: String,
    pub create_gauge_base_fee: Uint128,
    pub add_to_gauge_base_fee: Uint128,
    pub add_denom_fee: Uint128,
    pub lock_creation_fee: Uint128,
    // in seconds
    pub min_lock_age: u64,
    // in seconds
    pub min_lock_duration: u64,
    pub rollapp_gauges_mode: RollappGaugesMode,
    // fees are sent to this address if set, and burned otherwise
    pub fee_collector: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    CreateLock {
        coins: Vec<Coin>,
        // in seconds
        duration: u64,
    },
    BeginUnlock {
        lock_id: u64,
    },
    WithdrawLock {
        lock_id: u64,
    },
    CreateGauge {
        is_perpetual: bool,
        distribute_to: DistrTarget,
        coins: Vec<Coin>,
        // ignored for perpetual gauges
        num_epochs_paid_over: u64,
        // defaults to the current block time
        start_time: Option<Timestamp>,
        // in seconds, only for asset gauges
        min_lock_age: Option<u64>,
        // only for perpetual gauges
        release_per_epoch: Option<Vec<Coin>>,
    },
    AddToGauge {
        gauge_id: u64,
        coins: Vec<Coin>,
    },
    UpdateParams {
        params: ParamsMsg,
    },
    BootstrapEndorsements {},
    ForceSetLockEligibility {
        lock_id: u64,
        timestamp: Timestamp,
    },
    SetGaugeMinLockAge {
        gauge_id: u64,
        min_lock_age: Option<u64>,
    },
    ProposeNewAdmin {
        new_admin: Option<String>,
    },
    ClaimAdminRole {},
}

/// Messages sent by the chain modules the contract works with.
#[cw_serde]
pub enum SudoMsg {
    /// Sent by the epochs module at the end of every epoch.
    EpochTick { epoch_id: u64 },
    /// Sent by the sponsorship module whenever the vote distribution changes.
    UpdateSponsorshipDistribution { distribution: Distribution },
    /// Sent by the rollapp module when a rollapp is registered or changes.
    UpsertRollapp {
        rollapp_id: String,
        owner: String,
        active: bool,
    },
}

#[cw_serde]
pub struct MigrateMsg {}
