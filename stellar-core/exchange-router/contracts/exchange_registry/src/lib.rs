#![no_std]
//! # Exchange Registry
//!
//! Maps each token to the exchange contract that holds it and swaps one
//! registered token for another at a fixed 1:1 rate.
//!
//! ## Registration
//! The registry is deployed with the Wasm hash of the exchange contract it
//! trusts. Any address whose executable is exactly that Wasm may be
//! registered, by anyone, under the token it reports from `token()`. No
//! allow-list of addresses is kept; the code hash is the credential.
//!
//! ## Trading
//! `trade` pulls `amount` of `token_a` from the caller through the `token_a`
//! exchange, then pays `amount` of `token_b` through the `token_b` exchange.
//! Any failure returns an error, and the host discards both legs.

use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Executable};

mod error;
mod events;
mod exchange;
mod storage;

pub use error::RegistryError;
pub use events::{Register, Trade};
pub use exchange::{ExchangeClient, ExchangeError, ExchangeInterface};

#[contract]
pub struct ExchangeRegistry;

#[contractimpl]
impl ExchangeRegistry {
    /// Store the executable hash every registrant must match
    pub fn __constructor(env: Env, fingerprint: BytesN<32>) {
        storage::set_fingerprint(&env, &fingerprint);
    }

    pub fn fingerprint(env: Env) -> BytesN<32> {
        storage::get_fingerprint(&env)
    }

    /// Exchange currently routing `token`, if any
    pub fn get_exchange(env: Env, token: Address) -> Option<Address> {
        storage::get_exchange(&env, &token)
    }

    /// Register `exchange` under the token it reports.
    ///
    /// Fails with `UnauthorizedCaller` unless `exchange` runs the Wasm whose
    /// hash was fixed at deployment. Accounts and Stellar Asset Contracts
    /// never match. Re-registering a token replaces its previous exchange.
    /// The registry an instance was constructed with is not checked; an
    /// instance bound to another registry registers but rejects our trades.
    pub fn register(env: Env, exchange: Address) -> Result<(), RegistryError> {
        let fingerprint = storage::get_fingerprint(&env);

        let authorized = match exchange.executable() {
            Some(Executable::Wasm(hash)) => hash == fingerprint,
            _ => false,
        };
        if !authorized {
            log!(&env, "register rejected", exchange);
            return Err(RegistryError::UnauthorizedCaller);
        }

        let token = ExchangeClient::new(&env, &exchange).token();
        storage::set_exchange(&env, &token, &exchange);
        storage::extend_instance_ttl(&env);

        Register { token, exchange }.publish(&env);
        Ok(())
    }

    /// Swap `amount` of `token_a` for the same amount of `token_b`.
    ///
    /// The caller must have approved the `token_a` exchange for at least
    /// `amount`. Both exchanges are resolved before either is called.
    pub fn trade(
        env: Env,
        caller: Address,
        token_a: Address,
        token_b: Address,
        amount: i128,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        if amount < 0 {
            return Err(RegistryError::NegativeAmount);
        }
        storage::extend_instance_ttl(&env);

        let exchange_a =
            storage::get_exchange(&env, &token_a).ok_or(RegistryError::NoSuchExchange)?;
        let exchange_b =
            storage::get_exchange(&env, &token_b).ok_or(RegistryError::NoSuchExchange)?;

        exchange::receive(&env, &exchange_a, &caller, amount)?;
        exchange::transfer(&env, &exchange_b, &caller, amount)?;

        Trade {
            caller,
            token_a,
            token_b,
            amount,
        }
        .publish(&env);
        Ok(())
    }
}
