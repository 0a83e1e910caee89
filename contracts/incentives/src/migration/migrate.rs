use crate::contract::{CONTRACT_NAME, CONTRACT_VERSION};
use crate::error::ContractError;
use crate::msg::MigrateMsg;
// entry_point is being used but for some reason clippy doesn't see that, hence the allow attribute here
#[allow(unused_imports)]
use cosmwasm_std::{entry_point, DepsMut, Env, Response, StdError, Storage};
use cw2::{get_contract_version, set_contract_version};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous_version = check_contract_version(deps.storage)?;

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("previous_version", previous_version)
        .add_attribute("new_version", CONTRACT_VERSION))
}

fn check_contract_version(storage: &dyn Storage) -> Result<String, ContractError> {
    let contract_version = get_contract_version(storage)?;

    if contract_version.contract != CONTRACT_NAME {
        return Err(ContractError::Std(StdError::generic_err(format!(
            "Cannot migrate contract {} to {}.",
            contract_version.contract, CONTRACT_NAME
        ))));
    }

    if contract_version.version == CONTRACT_VERSION {
        return Err(ContractError::Std(StdError::generic_err(
            "Contract is already migrated to the newest version.",
        )));
    }

    Ok(contract_version.version)
}
