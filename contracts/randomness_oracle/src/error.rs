use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum OracleError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    InvalidRequestId = 3,
    AlreadyFulfilled = 4,
}
