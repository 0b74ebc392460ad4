use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum RegistryError {
    /// Registrant's executable hash differs from the registry fingerprint
    UnauthorizedCaller = 1,
    /// No exchange registered for a traded token
    NoSuchExchange = 2,
    InsufficientBalance = 3,
    InsufficientAllowance = 4,
    /// Exchange rejected a leg for any other reason
    ExchangeCallFailed = 5,
    NegativeAmount = 6,
}
