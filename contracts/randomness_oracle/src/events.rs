use soroban_sdk::{Address, BytesN, Env, contractevent};

#[contractevent]
#[derive(Clone, Debug)]
pub struct RandomnessRequested {
    pub request_id: BytesN<32>,
    pub consumer: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct RandomnessFulfilled {
    pub request_id: BytesN<32>,
}

pub fn emit_randomness_requested(env: &Env, request_id: BytesN<32>, consumer: Address) {
    RandomnessRequested {
        request_id,
        consumer,
    }
    .publish(env);
}

pub fn emit_randomness_fulfilled(env: &Env, request_id: BytesN<32>) {
    RandomnessFulfilled { request_id }.publish(env);
}
