use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Uint128};

use crate::state::{EpochInfo, Endorsement, Gauge, Lock, Params, RetiredGauge, Rollapp};

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ParamsResponse)]
    Params {},

    #[returns(AdminResponse)]
    Admin {},

    #[returns(GaugeResponse)]
    Gauge { gauge_id: u64 },

    #[returns(GaugesResponse)]
    Gauges {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(RetiredGaugeResponse)]
    RetiredGauge { gauge_id: u64 },

    #[returns(LockResponse)]
    Lock { lock_id: u64 },

    #[returns(LocksResponse)]
    LocksByCondition {
        denom: String,
        // in seconds
        min_duration: u64,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(LocksResponse)]
    LocksByOwner {
        owner: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(EndorsementResponse)]
    Endorsement { rollapp_id: String },

    #[returns(EndorsementsResponse)]
    Endorsements {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    #[returns(RollappResponse)]
    Rollapp { rollapp_id: String },

    #[returns(LastEpochResponse)]
    LastEpoch {},

    #[returns(FeeResponse)]
    CreateGaugeFee { coins: Vec<Coin> },

    #[returns(FeeResponse)]
    AddToGaugeFee { gauge_id: u64, coins: Vec<Coin> },
}

#[cw_serde]
pub struct ParamsResponse {
    pub params: Params,
}

#[cw_serde]
pub struct AdminResponse {
    pub admin: Addr,
    pub new_admin_proposal: Option<Addr>,
}

#[cw_serde]
pub struct GaugeResponse {
    pub gauge: Gauge,
}

#[cw_serde]
pub struct GaugesResponse {
    pub gauges: Vec<Gauge>,
}

#[cw_serde]
pub struct RetiredGaugeResponse {
    pub retired_gauge: RetiredGauge,
}

#[cw_serde]
pub struct LockResponse {
    pub lock: Lock,
}

#[cw_serde]
pub struct LocksResponse {
    pub locks: Vec<Lock>,
}

#[cw_serde]
pub struct EndorsementResponse {
    pub endorsement: Endorsement,
}

#[cw_serde]
pub struct EndorsementsResponse {
    pub endorsements: Vec<Endorsement>,
}

#[cw_serde]
pub struct RollappResponse {
    pub rollapp: Rollapp,
}

#[cw_serde]
pub struct LastEpochResponse {
    pub last_epoch: Option<EpochInfo>,
}

#[cw_serde]
pub struct FeeResponse {
    pub fee: Coin,
    // the part of the fee that does not depend on the number of denoms
    pub base_fee: Uint128,
    pub denom_count: u64,
}
