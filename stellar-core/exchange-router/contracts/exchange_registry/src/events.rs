use soroban_sdk::{contractevent, Address};

/// topics: ("register", token), data: exchange
#[contractevent(data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Register {
    #[topic]
    pub token: Address,
    pub exchange: Address,
}

/// topics: ("trade", caller, token_a, token_b), data: amount
#[contractevent(data_format = "single-value")]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Trade {
    #[topic]
    pub caller: Address,
    #[topic]
    pub token_a: Address,
    #[topic]
    pub token_b: Address,
    pub amount: i128,
}
