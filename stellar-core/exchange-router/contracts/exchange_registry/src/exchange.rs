//! Calling side of the exchange contracts the registry routes through.
//!
//! Error codes mirror the ones the exchange Wasm returns; only the codes
//! travel across the contract boundary.

use soroban_sdk::{contractclient, contracterror, Address, Env, InvokeError};

use crate::error::RegistryError;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExchangeError {
    InsufficientBalance = 1,
    InsufficientAllowance = 2,
    InsufficientLiquidity = 3,
    NegativeAmount = 4,
}

#[allow(dead_code)]
#[contractclient(name = "ExchangeClient")]
pub trait ExchangeInterface {
    fn token(env: Env) -> Address;
    fn receive(env: Env, from: Address, amount: i128) -> Result<(), ExchangeError>;
    fn transfer(env: Env, to: Address, amount: i128) -> Result<(), ExchangeError>;
}

fn classify(err: Result<ExchangeError, InvokeError>) -> RegistryError {
    match err {
        Ok(ExchangeError::InsufficientBalance) => RegistryError::InsufficientBalance,
        Ok(ExchangeError::InsufficientAllowance) => RegistryError::InsufficientAllowance,
        _ => RegistryError::ExchangeCallFailed,
    }
}

/// Debit `from` through `exchange`.
pub fn receive(
    env: &Env,
    exchange: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), RegistryError> {
    match ExchangeClient::new(env, exchange).try_receive(from, &amount) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(_)) => Err(RegistryError::ExchangeCallFailed),
        Err(err) => Err(classify(err)),
    }
}

/// Credit `to` through `exchange`.
pub fn transfer(
    env: &Env,
    exchange: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), RegistryError> {
    match ExchangeClient::new(env, exchange).try_transfer(to, &amount) {
        Ok(Ok(())) => Ok(()),
        Ok(Err(_)) => Err(RegistryError::ExchangeCallFailed),
        Err(err) => Err(classify(err)),
    }
}
