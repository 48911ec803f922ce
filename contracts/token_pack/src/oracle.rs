use soroban_sdk::{Address, Bytes, BytesN, Env, contractclient};

/// Interface the pack contract needs from the randomness oracle subsystem.
///
/// The oracle assigns the request id and later delivers the random value by
/// invoking `fulfill_randomness` on the consumer it recorded at request time.
#[contractclient(name = "RandomnessOracleClient")]
pub trait RandomnessOracle {
    fn request_randomness(env: Env, consumer: Address, seed_material: Bytes) -> BytesN<32>;
}
