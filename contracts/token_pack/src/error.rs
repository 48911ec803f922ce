use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    Unauthorized = 2,
    UnauthorizedCaller = 3,
    EmptyPath = 4,
    PriceUnderLimit = 5,
    CapacityUnderLimit = 6,
    BlueprintsUnderLimit = 7,
    InvalidBlueprintId = 8,
    InvalidCollectionId = 9,
    InvalidTokenId = 10,
    InvalidRequestId = 11,
    InvalidAmount = 12,
    AlreadyFulfilled = 13,
}
