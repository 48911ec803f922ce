use soroban_sdk::{Address, BytesN, contracttype};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    // Configuration
    Admin,
    Oracle,
    PaymentToken,

    // Counters
    BlueprintCount,
    AuthorBlueprintCount(Address),
    CollectionCount,
    TokenCount,

    // Records
    Blueprint(u64),
    Collection(u64),
    TokenOwner(u64),
    TokenBlueprint(u64),
    Balance(Address),
    Order(BytesN<32>),
}
