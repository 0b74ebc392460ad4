#![no_std]
//! # Token Exchange
//!
//! Custodian for a single token that only takes orders from its registry.
//! The registry pulls the seller's tokens in with [`TokenExchange::receive`]
//! and pays the buyer out with [`TokenExchange::transfer`]; every instance
//! built from this Wasm shares one executable hash, which is what the
//! registry checks before routing trades here.

use soroban_sdk::{contract, contractimpl, token, Address, Env};

mod error;
mod storage;

pub use error::ExchangeError;

pub fn check_nonnegative_amount(amount: i128) -> Result<(), ExchangeError> {
    if amount < 0 {
        Err(ExchangeError::NegativeAmount)
    } else {
        Ok(())
    }
}

#[contract]
pub struct TokenExchange;

#[contractimpl]
impl TokenExchange {
    /// Bind the exchange to the token it holds and the registry it serves
    pub fn __constructor(env: Env, token: Address, registry: Address) {
        storage::set_token(&env, &token);
        storage::set_registry(&env, &registry);
    }

    /// Token handled by this exchange; fixed for the lifetime of the instance
    pub fn token(env: Env) -> Address {
        storage::get_token(&env)
    }

    pub fn registry(env: Env) -> Address {
        storage::get_registry(&env)
    }

    /// Tokens currently held in custody
    pub fn reserve(env: Env) -> i128 {
        let asset = token::Client::new(&env, &storage::get_token(&env));
        asset.balance(&env.current_contract_address())
    }

    /// Pull `amount` from `from` into custody using the allowance `from`
    /// granted to this exchange. Registry only.
    pub fn receive(env: Env, from: Address, amount: i128) -> Result<(), ExchangeError> {
        storage::get_registry(&env).require_auth();
        check_nonnegative_amount(amount)?;
        storage::extend_instance_ttl(&env);

        let this = env.current_contract_address();
        let asset = token::Client::new(&env, &storage::get_token(&env));

        if asset.balance(&from) < amount {
            return Err(ExchangeError::InsufficientBalance);
        }
        if asset.allowance(&from, &this) < amount {
            return Err(ExchangeError::InsufficientAllowance);
        }

        asset.transfer_from(&this, &from, &this, &amount);
        Ok(())
    }

    /// Pay `amount` out of custody to `to`. Registry only.
    pub fn transfer(env: Env, to: Address, amount: i128) -> Result<(), ExchangeError> {
        storage::get_registry(&env).require_auth();
        check_nonnegative_amount(amount)?;
        storage::extend_instance_ttl(&env);

        let this = env.current_contract_address();
        let asset = token::Client::new(&env, &storage::get_token(&env));

        if asset.balance(&this) < amount {
            return Err(ExchangeError::InsufficientLiquidity);
        }

        asset.transfer(&this, &to, &amount);
        Ok(())
    }
}
