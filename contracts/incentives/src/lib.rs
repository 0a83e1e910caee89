pub mod bank;
pub mod contract;
pub mod distribution;
mod error;
pub mod gauge;
pub mod lockup;
pub mod migration;
pub mod msg;
pub mod query;
pub mod sponsorship;
pub mod state;
pub mod utils;

pub use crate::error::ContractError;






#[cfg(test)]
mod testing_distribution;
