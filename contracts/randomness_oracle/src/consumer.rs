use soroban_sdk::{Address, BytesN, Env, contractclient};

/// Interface a consumer contract must expose to receive deliveries. The
/// oracle passes its own address as `caller` so the consumer can pin the
/// callback to the oracle it trusts.
#[contractclient(name = "RandomnessConsumerClient")]
pub trait RandomnessConsumer {
    fn fulfill_randomness(env: Env, caller: Address, request_id: BytesN<32>, randomness: BytesN<32>);
}
