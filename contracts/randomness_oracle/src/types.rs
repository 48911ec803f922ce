use soroban_sdk::{Address, contracttype};

/// One pending or completed randomness request. The consumer recorded here
/// is the only contract the delivery will call back into.
#[derive(Clone, Debug)]
#[contracttype]
pub struct RandomnessRequest {
    pub consumer: Address,
    pub fulfilled: bool,
}
