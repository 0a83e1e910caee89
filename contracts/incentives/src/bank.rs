use cosmwasm_std::{Addr, BankMsg, Coin, Uint128};
use cw_utils::NativeBalance;

use crate::error::ContractError;
use crate::state::{FeeDisposal, Params};
use crate::utils::amount_of;

/// Funds attached to an execute message.
///
/// The chain moves the attached funds into the contract before the message is
/// executed and moves them back if execution fails, so every debit taken from a
/// `Payment` is all-or-nothing together with the rest of the transaction. Whatever
/// is left once an operation has taken its share is credited back to the sender.
#[derive(Clone, Debug, PartialEq)]
pub struct Payment {
    funds: NativeBalance,
}

impl Payment {
    pub fn new(funds: &[Coin]) -> Self {
        let mut funds = NativeBalance(funds.to_vec());
        funds.normalize();

        Self { funds }
    }

    pub fn available(&self, denom: &str) -> Uint128 {
        amount_of(&self.funds.0, denom)
    }

    /// Debits `fee` in the fee denom. The fee-denom part of `locked_aside` must remain
    /// available after the fee is taken, coins of other denoms are not looked at.
    /// On error the payment is left untouched.
    pub fn charge_fee(&mut self, fee: &Coin, locked_aside: &[Coin]) -> Result<(), ContractError> {
        let available = self.available(&fee.denom);
        let required = fee
            .amount
            .checked_add(amount_of(locked_aside, &fee.denom))?;

        if available < required {
            return Err(ContractError::InsufficientFunds {
                denom: fee.denom.clone(),
                required,
                available,
            });
        }

        if fee.amount.is_zero() {
            return Ok(());
        }

        self.funds = (self.funds.clone() - fee.clone())?;

        Ok(())
    }

    /// Debits all of `coins` or nothing.
    pub fn debit(&mut self, coins: &[Coin]) -> Result<(), ContractError> {
        for coin in coins {
            let available = self.available(&coin.denom);
            if available < coin.amount {
                return Err(ContractError::InsufficientFunds {
                    denom: coin.denom.clone(),
                    required: coin.amount,
                    available,
                });
            }
        }

        let mut remaining = self.funds.clone();
        for coin in coins.iter().filter(|coin| !coin.amount.is_zero()) {
            remaining = (remaining - coin.clone())?;
        }
        self.funds = remaining;

        Ok(())
    }

    pub fn refund_msg(self, to: &Addr) -> Option<BankMsg> {
        let mut funds = self.funds;
        funds.normalize();

        if funds.is_empty() {
            return None;
        }

        Some(credit_msg(to, funds.into_vec()))
    }
}

pub fn credit_msg(to: &Addr, coins: Vec<Coin>) -> BankMsg {
    BankMsg::Send {
        to_address: to.to_string(),
        amount: coins,
    }
}

pub fn fee_coin(params: &Params, amount: Uint128) -> Coin {
    Coin {
        denom: params.fee_denom.clone(),
        amount,
    }
}

/// Builds the message that takes a charged fee out of the contract, according to
/// the configured disposal. Zero fees produce no message.
pub fn fee_disposal_msg(params: &Params, fee: &Coin) -> Option<BankMsg> {
    if fee.amount.is_zero() {
        return None;
    }

    Some(match &params.fee_disposal {
        FeeDisposal::Burn => BankMsg::Burn {
            amount: vec![fee.clone()],
        },
        FeeDisposal::Forward { collector } => credit_msg(collector, vec![fee.clone()]),
    })
}
