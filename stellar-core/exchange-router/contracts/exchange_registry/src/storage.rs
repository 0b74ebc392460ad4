use soroban_sdk::{contracttype, Address, BytesN, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub(crate) const EXCHANGE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const EXCHANGE_LIFETIME_THRESHOLD: u32 = EXCHANGE_BUMP_AMOUNT - DAY_IN_LEDGERS;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Fingerprint,
    Exchange(Address),
}

pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

// Written once by the constructor and never again.
pub fn get_fingerprint(env: &Env) -> BytesN<32> {
    env.storage().instance().get(&DataKey::Fingerprint).unwrap()
}

pub fn set_fingerprint(env: &Env, fingerprint: &BytesN<32>) {
    env.storage()
        .instance()
        .set(&DataKey::Fingerprint, fingerprint);
}

pub fn get_exchange(env: &Env, token: &Address) -> Option<Address> {
    let key = DataKey::Exchange(token.clone());
    let exchange = env.storage().persistent().get(&key);
    if exchange.is_some() {
        env.storage().persistent().extend_ttl(
            &key,
            EXCHANGE_LIFETIME_THRESHOLD,
            EXCHANGE_BUMP_AMOUNT,
        );
    }
    exchange
}

/// Last write wins: a second exchange for the same token replaces the first.
pub fn set_exchange(env: &Env, token: &Address, exchange: &Address) {
    let key = DataKey::Exchange(token.clone());
    env.storage().persistent().set(&key, exchange);
    env.storage()
        .persistent()
        .extend_ttl(&key, EXCHANGE_LIFETIME_THRESHOLD, EXCHANGE_BUMP_AMOUNT);
}
