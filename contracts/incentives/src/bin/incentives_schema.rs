use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use incentives::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, SudoMsg};
use incentives::query::{
    AdminResponse, EndorsementResponse, EndorsementsResponse, FeeResponse, GaugeResponse,
    GaugesResponse, LastEpochResponse, LockResponse, LocksResponse, ParamsResponse, QueryMsg,
    RetiredGaugeResponse, RollappResponse,
};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(SudoMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);

    export_schema(&schema_for!(ParamsResponse), &out_dir);
    export_schema(&schema_for!(AdminResponse), &out_dir);
    export_schema(&schema_for!(GaugeResponse), &out_dir);
    export_schema(&schema_for!(GaugesResponse), &out_dir);
    export_schema(&schema_for!(RetiredGaugeResponse), &out_dir);
    export_schema(&schema_for!(LockResponse), &out_dir);
    export_schema(&schema_for!(LocksResponse), &out_dir);
    export_schema(&schema_for!(EndorsementResponse), &out_dir);
    export_schema(&schema_for!(EndorsementsResponse), &out_dir);
    export_schema(&schema_for!(RollappResponse), &out_dir);
    export_schema(&schema_for!(LastEpochResponse), &out_dir);
    export_schema(&schema_for!(FeeResponse), &out_dir);
}
