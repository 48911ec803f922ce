use crate::blueprint_registry::BlueprintRegistry;
use crate::collection_registry::CollectionRegistry;
use crate::error::ContractError;
use crate::fulfillment::PackFulfillment;
use crate::storage::DataKey;
use crate::token_minter::TokenMinter;
use crate::types::{Blueprint, PurchaseOrder, TokenCollection};
use soroban_sdk::{
    Address, BytesN, Env, String, Vec, contract, contractimpl, panic_with_error, token,
};

/// Booster-pack marketplace: blueprint registry, collection registry,
/// token minter and the purchase/fulfillment coordinator behind one ABI.
#[contract]
pub struct TokenPack;

#[contractimpl]
impl TokenPack {
    /// One-time setup. `oracle` is the only principal whose randomness
    /// callbacks are accepted; `payment_token` prices every collection.
    pub fn initialize(env: Env, admin: Address, oracle: Address, payment_token: Address) {
        if env.storage().instance().has(&DataKey::Admin) {
            panic_with_error!(&env, ContractError::AlreadyInitialized);
        }
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Oracle, &oracle);
        env.storage()
            .instance()
            .set(&DataKey::PaymentToken, &payment_token);
        env.storage().instance().set(&DataKey::BlueprintCount, &0u64);
        env.storage()
            .instance()
            .set(&DataKey::CollectionCount, &0u64);
        env.storage().instance().set(&DataKey::TokenCount, &0u64);
    }

    // --- Blueprint registry ---

    pub fn create_blueprint(
        env: Env,
        author: Address,
        metadata_path: String,
    ) -> Result<u64, ContractError> {
        author.require_auth();
        BlueprintRegistry::create(&env, author, metadata_path)
    }

    pub fn blueprint(env: Env, blueprint_id: u64) -> Result<Blueprint, ContractError> {
        BlueprintRegistry::get(&env, blueprint_id)
    }

    pub fn blueprint_uri(env: Env, blueprint_id: u64) -> Result<String, ContractError> {
        Ok(BlueprintRegistry::get(&env, blueprint_id)?.metadata_path)
    }

    pub fn total_blueprints(env: Env) -> u64 {
        BlueprintRegistry::total(&env)
    }

    // --- Collection registry ---

    pub fn create_token_collection(
        env: Env,
        creator: Address,
        metadata_path: String,
        unit_price: i128,
        capacity: u32,
        blueprints: Vec<u64>,
    ) -> Result<u64, ContractError> {
        creator.require_auth();
        CollectionRegistry::create(&env, creator, metadata_path, unit_price, capacity, blueprints)
    }

    pub fn token_collection(env: Env, collection_id: u64) -> Result<TokenCollection, ContractError> {
        CollectionRegistry::get(&env, collection_id)
    }

    pub fn total_collections(env: Env) -> u64 {
        CollectionRegistry::total(&env)
    }

    // --- Purchase / fulfillment ---

    pub fn buy_pack(
        env: Env,
        buyer: Address,
        collection_id: u64,
        payment: i128,
    ) -> Result<BytesN<32>, ContractError> {
        buyer.require_auth();
        PackFulfillment::buy_pack(&env, buyer, collection_id, payment)
    }

    /// Randomness callback. Accepted only from the configured oracle and
    /// only once per request id.
    pub fn fulfill_randomness(
        env: Env,
        caller: Address,
        request_id: BytesN<32>,
        randomness: BytesN<32>,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        PackFulfillment::fulfill(&env, caller, request_id, randomness)
    }

    pub fn purchase_order(
        env: Env,
        request_id: BytesN<32>,
    ) -> Result<PurchaseOrder, ContractError> {
        PackFulfillment::order(&env, request_id)
    }

    pub fn purchase_order_tokens(
        env: Env,
        request_id: BytesN<32>,
    ) -> Result<Vec<u64>, ContractError> {
        PackFulfillment::order_tokens(&env, request_id)
    }

    // --- Token minter ---

    /// Minting is reserved for the pack contract itself; fulfillment mints
    /// through the internal path, so any external principal is rejected.
    pub fn mint_from_blueprint(
        env: Env,
        caller: Address,
        receiver: Address,
        blueprint_id: u64,
    ) -> Result<u64, ContractError> {
        caller.require_auth();
        if caller != env.current_contract_address() {
            return Err(ContractError::Unauthorized);
        }
        TokenMinter::mint(&env, receiver, blueprint_id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), ContractError> {
        from.require_auth();
        TokenMinter::transfer(&env, from, to, token_id)
    }

    pub fn token_uri(env: Env, token_id: u64) -> Result<String, ContractError> {
        TokenMinter::token_uri(&env, token_id)
    }

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, ContractError> {
        TokenMinter::owner_of(&env, token_id)
    }

    pub fn balance_of(env: Env, owner: Address) -> u64 {
        TokenMinter::balance_of(&env, owner)
    }

    pub fn total_tokens(env: Env) -> u64 {
        TokenMinter::total(&env)
    }

    // --- Administration ---

    pub fn set_admin(env: Env, new_admin: Address) {
        let admin: Address = env.storage().instance().get(&DataKey::Admin).unwrap();
        admin.require_auth();
        env.storage().instance().set(&DataKey::Admin, &new_admin);
    }

    pub fn set_oracle(env: Env, new_oracle: Address) {
        let admin: Address = env.storage().instance().get(&DataKey::Admin).unwrap();
        admin.require_auth();
        env.storage().instance().set(&DataKey::Oracle, &new_oracle);
    }

    /// Moves accumulated sale proceeds out of the contract.
    pub fn withdraw(env: Env, to: Address, amount: i128) {
        let admin: Address = env.storage().instance().get(&DataKey::Admin).unwrap();
        admin.require_auth();
        let payment_token: Address = env
            .storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .unwrap();
        token::Client::new(&env, &payment_token).transfer(
            &env.current_contract_address(),
            &to,
            &amount,
        );
    }

    pub fn admin(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Admin).unwrap()
    }

    pub fn oracle(env: Env) -> Address {
        env.storage().instance().get(&DataKey::Oracle).unwrap()
    }

    pub fn payment_token(env: Env) -> Address {
        env.storage().instance().get(&DataKey::PaymentToken).unwrap()
    }
}
