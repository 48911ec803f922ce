use crate::consumer::RandomnessConsumerClient;
use crate::error::OracleError;
use crate::events;
use crate::storage::DataKey;
use crate::types::RandomnessRequest;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env, contract, contractimpl, panic_with_error};

/// Randomness request/fulfill coordinator. Consumers register a request and
/// get back an opaque id; the off-chain operator observes the request event
/// and delivers the random value, which the coordinator forwards to the
/// consumer exactly once.
#[contract]
pub struct RandomnessOracle;

#[contractimpl]
impl RandomnessOracle {
    pub fn initialize(env: Env, admin: Address, operator: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, OracleError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Operator, &operator);
        env.storage().instance().set(&DataKey::RequestCount, &0u64);
    }

    /// Registers a request on behalf of `consumer` and assigns it a fresh
    /// id. The counter guarantees no two requests ever share one.
    pub fn request_randomness(env: Env, consumer: Address, seed_material: Bytes) -> BytesN<32> {
        consumer.require_auth();

        let count: u64 = env
            .storage()
            .instance()
            .get(&DataKey::RequestCount)
            .unwrap_or(0);

        let mut material = Bytes::new(&env);
        material.extend_from_array(&count.to_be_bytes());
        material.append(&consumer.clone().to_xdr(&env));
        material.append(&seed_material);
        material.extend_from_array(&env.ledger().sequence().to_be_bytes());
        let request_id = env.crypto().sha256(&material).to_bytes();

        let request = RandomnessRequest {
            consumer: consumer.clone(),
            fulfilled: false,
        };
        env.storage()
            .persistent()
            .set(&DataKey::Request(request_id.clone()), &request);
        env.storage()
            .instance()
            .set(&DataKey::RequestCount, &(count + 1));

        events::emit_randomness_requested(&env, request_id.clone(), consumer);

        request_id
    }

    /// Operator-only delivery. Marks the request fulfilled, then invokes
    /// the recorded consumer's `fulfill_randomness`; if the consumer fails,
    /// the whole delivery fails and can be resubmitted.
    pub fn submit_randomness(
        env: Env,
        operator: Address,
        request_id: BytesN<32>,
        randomness: BytesN<32>,
    ) -> Result<(), OracleError> {
        operator.require_auth();
        let expected: Address = env.storage().instance().get(&DataKey::Operator).unwrap();
        if operator != expected {
            return Err(OracleError::Unauthorized);
        }

        let mut request: RandomnessRequest = env
            .storage()
            .persistent()
            .get(&DataKey::Request(request_id.clone()))
            .ok_or(OracleError::InvalidRequestId)?;
        if request.fulfilled {
            return Err(OracleError::AlreadyFulfilled);
        }

        request.fulfilled = true;
        env.storage()
            .persistent()
            .set(&DataKey::Request(request_id.clone()), &request);

        RandomnessConsumerClient::new(&env, &request.consumer).fulfill_randomness(
            &env.current_contract_address(),
            &request_id,
            &randomness,
        );

        events::emit_randomness_fulfilled(&env, request_id);

        Ok(())
    }

    pub fn randomness_request(
        env: Env,
        request_id: BytesN<32>,
    ) -> Result<RandomnessRequest, OracleError> {
        env.storage()
            .persistent()
            .get(&DataKey::Request(request_id))
            .ok_or(OracleError::InvalidRequestId)
    }

    pub fn total_requests(env: Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::RequestCount)
            .unwrap_or(0)
    }

    pub fn set_operator(env: Env, new_operator: Address) {
        let admin: Address = env.storage().instance().get(&DataKey::Admin).unwrap();
        admin.require_auth();
        env.storage().instance().set(&DataKey::Operator, &new_operator);
    }

    pub fn operator(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Operator).unwrap()
    }
}
