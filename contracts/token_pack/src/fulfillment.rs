use crate::collection_registry::CollectionRegistry;
use crate::error::ContractError;
use crate::events;
use crate::oracle::RandomnessOracleClient;
use crate::storage::DataKey;
use crate::token_minter::TokenMinter;
use crate::types::PurchaseOrder;
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{Address, Bytes, BytesN, Env, Vec, token};

/// The purchase-order state machine. An order is created at `buy_pack`
/// (payment taken, randomness requested) and completed by exactly one
/// oracle callback: `Requested -> Fulfilled`, no other transitions.
pub struct PackFulfillment;

impl PackFulfillment {
    /// Takes the exact pack price from `buyer`, asks the oracle for a fresh
    /// random value and records the pending order under the returned
    /// request id. Payment is validated before any token moves and before
    /// the oracle is ever invoked.
    pub fn buy_pack(
        env: &Env,
        buyer: Address,
        collection_id: u64,
        payment: i128,
    ) -> Result<BytesN<32>, ContractError> {
        let collection = CollectionRegistry::get(env, collection_id)?;
        if payment != collection.unit_price {
            return Err(ContractError::InvalidAmount);
        }

        let payment_token: Address = env
            .storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .unwrap();
        token::Client::new(env, &payment_token).transfer(
            &buyer,
            &env.current_contract_address(),
            &payment,
        );

        let oracle: Address = env.storage().instance().get(&DataKey::Oracle).unwrap();
        let mut seed_material = Bytes::new(env);
        seed_material.append(&buyer.clone().to_xdr(env));
        seed_material.extend_from_array(&collection_id.to_be_bytes());
        let request_id = RandomnessOracleClient::new(env, &oracle)
            .request_randomness(&env.current_contract_address(), &seed_material);

        let order = PurchaseOrder {
            buyer: buyer.clone(),
            collection_id,
            fulfilled: false,
            minted_tokens: Vec::new(env),
        };
        env.storage()
            .persistent()
            .set(&DataKey::Order(request_id.clone()), &order);

        events::emit_purchase_ordered(env, buyer, collection_id, request_id.clone());

        Ok(request_id)
    }

    /// Oracle callback. Draws `capacity` distinct blueprints from the
    /// collection pool, mints each to the buyer in draw order and seals the
    /// order. A replayed or forged callback changes nothing; a mint failure
    /// fails the whole invocation, so the order stays pending and a
    /// redelivery can retry.
    pub fn fulfill(
        env: &Env,
        caller: Address,
        request_id: BytesN<32>,
        randomness: BytesN<32>,
    ) -> Result<(), ContractError> {
        let oracle: Address = env.storage().instance().get(&DataKey::Oracle).unwrap();
        if caller != oracle {
            return Err(ContractError::UnauthorizedCaller);
        }

        let mut order: PurchaseOrder = env
            .storage()
            .persistent()
            .get(&DataKey::Order(request_id.clone()))
            .ok_or(ContractError::InvalidRequestId)?;
        if order.fulfilled {
            return Err(ContractError::AlreadyFulfilled);
        }

        let collection = CollectionRegistry::get(env, order.collection_id)?;
        let drawn = Self::draw_distinct(env, &randomness, &collection.blueprints, collection.capacity);

        let mut minted_tokens = Vec::new(env);
        for blueprint_id in drawn.iter() {
            let token_id = TokenMinter::mint(env, order.buyer.clone(), blueprint_id)?;
            minted_tokens.push_back(token_id);
        }

        order.fulfilled = true;
        order.minted_tokens = minted_tokens;
        env.storage()
            .persistent()
            .set(&DataKey::Order(request_id.clone()), &order);

        events::emit_pack_opened(env, request_id, order.buyer);

        Ok(())
    }

    pub fn order(env: &Env, request_id: BytesN<32>) -> Result<PurchaseOrder, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Order(request_id))
            .ok_or(ContractError::InvalidRequestId)
    }

    /// Token ids minted for an order, in draw order. Empty while the order
    /// is still waiting for its callback.
    pub fn order_tokens(env: &Env, request_id: BytesN<32>) -> Result<Vec<u64>, ContractError> {
        let order = Self::order(env, request_id)?;
        Ok(order.minted_tokens)
    }

    /// Fisher-Yates-style sampling without replacement: each round derives
    /// an index into the remaining pool and swap-removes the pick, so the
    /// result is `capacity` distinct members of the original pool and is
    /// fully determined by `randomness`.
    fn draw_distinct(
        env: &Env,
        randomness: &BytesN<32>,
        blueprints: &Vec<u64>,
        capacity: u32,
    ) -> Vec<u64> {
        let mut pool = blueprints.clone();
        let mut drawn = Vec::new(env);
        for round in 0..capacity {
            let idx = Self::draw_index(env, randomness, round, pool.len());
            let picked = pool.get_unchecked(idx);
            let tail = pool.get_unchecked(pool.len() - 1);
            pool.set(idx, tail);
            pool.pop_back();
            drawn.push_back(picked);
        }
        drawn
    }

    fn draw_index(env: &Env, randomness: &BytesN<32>, round: u32, bound: u32) -> u32 {
        let mut material = Bytes::from_array(env, &randomness.to_array());
        material.extend_from_array(&round.to_be_bytes());
        let digest = env.crypto().sha256(&material).to_array();
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest[..8]);
        (u64::from_be_bytes(word) % bound as u64) as u32
    }
}
