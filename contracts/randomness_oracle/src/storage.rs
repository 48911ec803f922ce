use soroban_sdk::{BytesN, contracttype};

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Operator,
    RequestCount,
    Request(BytesN<32>),
}
