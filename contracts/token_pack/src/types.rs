use soroban_sdk::{Address, String, Vec, contracttype};

/// An author-registered template. Concrete tokens are minted from it.
#[derive(Clone, Debug)]
#[contracttype]
pub struct Blueprint {
    pub author: Address,
    pub metadata_path: String,
}

/// A priced, capacity-bounded pack template over a fixed blueprint pool.
/// Immutable once created; `blueprints.len() >= capacity` always holds.
#[derive(Clone, Debug)]
#[contracttype]
pub struct TokenCollection {
    pub metadata_path: String,
    pub unit_price: i128,
    pub capacity: u32,
    pub blueprints: Vec<u64>,
}

/// A pack purchase awaiting (or past) randomness-driven fulfillment.
/// Keyed by the oracle-assigned request id; never deleted.
#[derive(Clone, Debug)]
#[contracttype]
pub struct PurchaseOrder {
    pub buyer: Address,
    pub collection_id: u64,
    pub fulfilled: bool,
    pub minted_tokens: Vec<u64>,
}
