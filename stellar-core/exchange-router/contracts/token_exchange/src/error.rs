use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ExchangeError {
    InsufficientBalance = 1,
    InsufficientAllowance = 2,
    InsufficientLiquidity = 3,
    NegativeAmount = 4,
}
