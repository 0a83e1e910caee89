use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

use crate::utils::amount_of;

/// The admin who can update params and run the one-time correction paths
pub const ADMIN: Item<Addr> = Item::new("admin");

/// When transferring the admin permissions to a new admin,
/// we store the new admin address (proposal) to this store,
/// and the new admin need to later claim the permissions
pub const NEW_ADMIN_PROPOSAL: Item<Option<Addr>> = Item::new("new_admin_proposal");

pub const PARAMS: Item<Params> = Item::new("params");

#[cw_serde]
pub enum FeeDisposal {
    Burn,
    Forward { collector: Addr },
}

#[cw_serde]
pub enum RollappGaugesMode {
    AllRollapps,
    ActiveRollapps,
}

#[cw_serde]
pub struct Params {
    // all admission fees are charged in this denom
    pub fee_denom: String,
    pub create_gauge_base_fee: Uint128,
    pub add_to_gauge_base_fee: Uint128,
    // charged once for every distinct denom the gauge ends up holding
    pub add_denom_fee: Uint128,
    pub lock_creation_fee: Uint128,
    // in seconds
    pub min_lock_age: u64,
    // in seconds
    pub min_lock_duration: u64,
    pub rollapp_gauges_mode: RollappGaugesMode,
    pub fee_disposal: FeeDisposal,
}

// stores the id that will be assigned to the next lock
pub const LOCK_ID: Item<u64> = Item::new("lock_id");

// LOCKS: key(lock_id) -> Lock
pub const LOCKS: Map<u64, Lock> = Map::new("locks");

// Secondary index used to match locks against asset gauges. Iterating a denom
// prefix yields the locks in ascending lock id order.
// LOCKS_BY_DENOM: key(denom, lock_id) -> lock duration in seconds
pub const LOCKS_BY_DENOM: Map<(String, u64), u64> = Map::new("locks_by_denom");

// LOCKS_BY_OWNER: key(owner, lock_id) -> ()
pub const LOCKS_BY_OWNER: Map<(Addr, u64), ()> = Map::new("locks_by_owner");

#[cw_serde]
pub struct Lock {
    pub lock_id: u64,
    pub owner: Addr,
    // sorted by denom, every amount is non-zero
    pub coins: Vec<Coin>,
    // in seconds, immutable after creation
    pub duration: u64,
    // the lock age used for reward eligibility is measured from this timestamp
    pub eligible_since: Timestamp,
    // set once the owner begins unlocking; the coins can be withdrawn after it
    pub end_time: Option<Timestamp>,
}

impl Lock {
    pub fn amount_of(&self, denom: &str) -> Uint128 {
        amount_of(&self.coins, denom)
    }

    pub fn is_unlocking(&self) -> bool {
        self.end_time.is_some()
    }

    pub fn age(&self, now: Timestamp) -> u64 {
        now.seconds().saturating_sub(self.eligible_since.seconds())
    }
}

// stores the id that will be assigned to the next gauge
pub const GAUGE_ID: Item<u64> = Item::new("gauge_id");

// GAUGES: key(gauge_id) -> Gauge
pub const GAUGES: Map<u64, Gauge> = Map::new("gauges");

// Gauges are removed from GAUGES once they are exhausted. The tombstone lets
// later calls tell a retired gauge apart from one that never existed.
// RETIRED_GAUGES: key(gauge_id) -> RetiredGauge
pub const RETIRED_GAUGES: Map<u64, RetiredGauge> = Map::new("retired_gauges");

// ROLLAPP_GAUGES: key(rollapp_id) -> id of the live gauge distributing to the rollapp
pub const ROLLAPP_GAUGES: Map<String, u64> = Map::new("rollapp_gauges");

#[cw_serde]
pub enum DistrTarget {
    // locks holding `denom` that were locked for at least `duration` seconds
    Asset { denom: String, duration: u64 },
    // the owner of the rollapp, weighted by the rollapp's endorsement power
    Rollapp { rollapp_id: String },
}

#[cw_serde]
pub struct Gauge {
    pub id: u64,
    pub owner: Addr,
    pub is_perpetual: bool,
    pub distribute_to: DistrTarget,
    // everything ever funded into the gauge, sorted by denom
    pub coins: Vec<Coin>,
    pub distributed_coins: Vec<Coin>,
    pub num_epochs_paid_over: u64,
    pub filled_epochs: u64,
    pub start_time: Timestamp,
    // only used by asset gauges, in seconds
    pub min_lock_age: Option<u64>,
    // only used by perpetual gauges; None releases the whole balance each epoch
    pub release_per_epoch: Option<Vec<Coin>>,
}

impl Gauge {
    pub fn is_upcoming(&self, now: Timestamp) -> bool {
        self.start_time > now
    }

    pub fn rollapp_id(&self) -> Option<&str> {
        match &self.distribute_to {
            DistrTarget::Rollapp { rollapp_id } => Some(rollapp_id),
            DistrTarget::Asset { .. } => None,
        }
    }
}

#[cw_serde]
pub struct RetiredGauge {
    pub gauge_id: u64,
    pub retired_at: Timestamp,
    pub epoch_id: u64,
    pub distributed_coins: Vec<Coin>,
}

// ENDORSEMENTS: key(rollapp_id) -> Endorsement
pub const ENDORSEMENTS: Map<String, Endorsement> = Map::new("endorsements");

#[cw_serde]
pub struct Endorsement {
    pub rollapp_id: String,
    pub rollapp_gauge_id: u64,
    // total voting power cast towards the rollapp gauge
    pub power: Uint128,
}

// The last vote distribution reported by the sponsorship module.
pub const SPONSORSHIP_DISTRIBUTION: Item<Distribution> = Item::new("sponsorship_distribution");

#[cw_serde]
#[derive(Default)]
pub struct Distribution {
    pub voting_power: Uint128,
    pub gauges: Vec<GaugePower>,
}

#[cw_serde]
pub struct GaugePower {
    pub gauge_id: u64,
    pub power: Uint128,
}

// ROLLAPPS: key(rollapp_id) -> Rollapp
pub const ROLLAPPS: Map<String, Rollapp> = Map::new("rollapps");

#[cw_serde]
pub struct Rollapp {
    pub rollapp_id: String,
    // receives the rewards of the rollapp gauge
    pub owner: Addr,
    pub active: bool,
}

pub const LAST_EPOCH: Item<EpochInfo> = Item::new("last_epoch");

#[cw_serde]
pub struct EpochInfo {
    pub epoch_id: u64,
    pub timestamp: Timestamp,
}
