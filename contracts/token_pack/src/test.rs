#![cfg(test)]

use crate::error::ContractError;
use crate::pack_core::{TokenPack, TokenPackClient};
use soroban_sdk::{Address, BytesN, Env, String, Vec, testutils::Address as _, token};

const PATHS: [&str; 10] = [
    "IPFS_PATH_0",
    "IPFS_PATH_1",
    "IPFS_PATH_2",
    "IPFS_PATH_3",
    "IPFS_PATH_4",
    "IPFS_PATH_5",
    "IPFS_PATH_6",
    "IPFS_PATH_7",
    "IPFS_PATH_8",
    "IPFS_PATH_9",
];

const COLLECTION_PATH: &str = "IPFS_COLLECTION_PATH";

/// Stand-in for the oracle coordinator: assigns request ids and lets tests
/// push a chosen random value back into the pack contract.
mod stub_oracle {
    use crate::pack_core::TokenPackClient;
    use soroban_sdk::{Address, Bytes, BytesN, Env, contract, contractimpl, contracttype};

    #[derive(Clone)]
    #[contracttype]
    pub enum StubKey {
        Count,
    }

    #[contract]
    pub struct StubOracle;

    #[contractimpl]
    impl StubOracle {
        pub fn request_randomness(env: Env, _consumer: Address, _seed_material: Bytes) -> BytesN<32> {
            let count: u64 = env.storage().instance().get(&StubKey::Count).unwrap_or(0);
            env.storage().instance().set(&StubKey::Count, &(count + 1));
            let mut raw = [0u8; 32];
            raw[24..].copy_from_slice(&count.to_be_bytes());
            BytesN::from_array(&env, &raw)
        }

        pub fn call_back_with_randomness(
            env: Env,
            request_id: BytesN<32>,
            randomness: BytesN<32>,
            consumer: Address,
        ) {
            TokenPackClient::new(&env, &consumer).fulfill_randomness(
                &env.current_contract_address(),
                &request_id,
                &randomness,
            );
        }
    }
}

use stub_oracle::{StubOracle, StubOracleClient};

struct World {
    env: Env,
    pack: TokenPackClient<'static>,
    oracle_address: Address,
    oracle: StubOracleClient<'static>,
    payment: token::Client<'static>,
    admin: Address,
    author: Address,
    buyer: Address,
}

fn setup() -> World {
    let env = Env::default();
    env.mock_all_auths();

    let admin = Address::generate(&env);
    let author = Address::generate(&env);
    let buyer = Address::generate(&env);

    let sac = env.register_stellar_asset_contract_v2(admin.clone());
    let payment = token::Client::new(&env, &sac.address());
    token::StellarAssetClient::new(&env, &sac.address()).mint(&buyer, &10);

    let oracle_address = env.register_contract(None, StubOracle);
    let oracle = StubOracleClient::new(&env, &oracle_address);

    let pack_address = env.register_contract(None, TokenPack);
    let pack = TokenPackClient::new(&env, &pack_address);
    pack.initialize(&admin, &oracle_address, &sac.address());

    World {
        env,
        pack,
        oracle_address,
        oracle,
        payment,
        admin,
        author,
        buyer,
    }
}

fn seed(env: &Env, value: u64) -> BytesN<32> {
    let mut raw = [0u8; 32];
    raw[24..].copy_from_slice(&value.to_be_bytes());
    BytesN::from_array(env, &raw)
}

fn create_blueprints(world: &World, quantity: usize) -> Vec<u64> {
    let mut ids = Vec::new(&world.env);
    for i in 0..quantity {
        let id = world
            .pack
            .create_blueprint(&world.author, &String::from_str(&world.env, PATHS[i]));
        ids.push_back(id);
    }
    ids
}

fn create_collection(world: &World, unit_price: i128, capacity: u32, pool_size: usize) -> u64 {
    let blueprints = create_blueprints(world, pool_size);
    world.pack.create_token_collection(
        &world.admin,
        &String::from_str(&world.env, COLLECTION_PATH),
        &unit_price,
        &capacity,
        &blueprints,
    )
}

fn uri_is_one_of(world: &World, uri: &String, pool_size: usize) -> bool {
    PATHS[..pool_size]
        .iter()
        .any(|p| *uri == String::from_str(&world.env, p))
}

#[test]
fn blueprint_ids_are_dense_with_per_author_indices() {
    let world = setup();
    let other_author = Address::generate(&world.env);
    let path = String::from_str(&world.env, PATHS[0]);

    assert_eq!(world.pack.create_blueprint(&world.author, &path), 0);
    assert_eq!(world.pack.create_blueprint(&world.author, &path), 1);
    assert_eq!(world.pack.create_blueprint(&other_author, &path), 2);

    assert_eq!(world.pack.total_blueprints(), 3);
    assert_eq!(world.pack.blueprint_uri(&0), path);
    assert_eq!(world.pack.blueprint(&2).author, other_author);
}

#[test]
fn blueprint_creation_rejects_empty_path() {
    let world = setup();
    let result = world
        .pack
        .try_create_blueprint(&world.author, &String::from_str(&world.env, ""));
    assert_eq!(result, Err(Ok(ContractError::EmptyPath)));
    assert_eq!(world.pack.total_blueprints(), 0);
}

#[test]
fn blueprint_uri_rejects_unknown_id() {
    let world = setup();
    assert_eq!(
        world.pack.try_blueprint_uri(&7),
        Err(Ok(ContractError::InvalidBlueprintId))
    );
}

#[test]
fn collection_creation_succeeds() {
    let world = setup();
    let collection_id = create_collection(&world, 1, 3, 6);
    assert_eq!(collection_id, 0);
    assert_eq!(world.pack.total_collections(), 1);

    let collection = world.pack.token_collection(&collection_id);
    assert_eq!(
        collection.metadata_path,
        String::from_str(&world.env, COLLECTION_PATH)
    );
    assert_eq!(collection.unit_price, 1);
    assert_eq!(collection.capacity, 3);
    assert_eq!(collection.blueprints.len(), 6);
}

#[test]
fn collection_creation_validates_inputs() {
    let world = setup();
    let blueprints = create_blueprints(&world, 5);
    let path = String::from_str(&world.env, COLLECTION_PATH);

    assert_eq!(
        world.pack.try_create_token_collection(
            &world.admin,
            &String::from_str(&world.env, ""),
            &1,
            &5,
            &blueprints
        ),
        Err(Ok(ContractError::EmptyPath))
    );
    assert_eq!(
        world
            .pack
            .try_create_token_collection(&world.admin, &path, &0, &5, &blueprints),
        Err(Ok(ContractError::PriceUnderLimit))
    );
    assert_eq!(
        world
            .pack
            .try_create_token_collection(&world.admin, &path, &1, &0, &blueprints),
        Err(Ok(ContractError::CapacityUnderLimit))
    );
    assert_eq!(
        world
            .pack
            .try_create_token_collection(&world.admin, &path, &1, &6, &blueprints),
        Err(Ok(ContractError::BlueprintsUnderLimit))
    );

    let mut unknown_members = blueprints.clone();
    unknown_members.push_back(42);
    assert_eq!(
        world
            .pack
            .try_create_token_collection(&world.admin, &path, &1, &5, &unknown_members),
        Err(Ok(ContractError::InvalidBlueprintId))
    );

    assert_eq!(world.pack.total_collections(), 0);
}

#[test]
fn buy_pack_rejects_unknown_collection() {
    let world = setup();
    assert_eq!(
        world.pack.try_buy_pack(&world.buyer, &0, &1),
        Err(Ok(ContractError::InvalidCollectionId))
    );
    // No payment was taken and no randomness request was issued.
    assert_eq!(world.payment.balance(&world.buyer), 10);
}

#[test]
fn buy_pack_rejects_wrong_amount() {
    let world = setup();
    let collection_id = create_collection(&world, 1, 3, 6);
    assert_eq!(
        world.pack.try_buy_pack(&world.buyer, &collection_id, &2),
        Err(Ok(ContractError::InvalidAmount))
    );
    assert_eq!(world.payment.balance(&world.buyer), 10);
}

#[test]
fn pack_purchase_and_fulfillment() {
    let world = setup();
    let collection_id = create_collection(&world, 1, 3, 6);

    let request_id = world.pack.buy_pack(&world.buyer, &collection_id, &1);
    assert_eq!(world.payment.balance(&world.buyer), 9);
    assert_eq!(world.payment.balance(&world.pack.address), 1);

    let order = world.pack.purchase_order(&request_id);
    assert_eq!(order.buyer, world.buyer);
    assert_eq!(order.collection_id, collection_id);
    assert!(!order.fulfilled);
    assert_eq!(world.pack.purchase_order_tokens(&request_id).len(), 0);

    world
        .oracle
        .call_back_with_randomness(&request_id, &seed(&world.env, 777), &world.pack.address);

    let minted = world.pack.purchase_order_tokens(&request_id);
    assert_eq!(minted, soroban_sdk::vec![&world.env, 0u64, 1, 2]);
    assert!(world.pack.purchase_order(&request_id).fulfilled);
    assert_eq!(world.pack.total_tokens(), 3);
    assert_eq!(world.pack.balance_of(&world.buyer), 3);

    let uris = [
        world.pack.token_uri(&0),
        world.pack.token_uri(&1),
        world.pack.token_uri(&2),
    ];
    for uri in uris.iter() {
        assert!(uri_is_one_of(&world, uri, 6));
    }
    assert!(uris[0] != uris[1] && uris[0] != uris[2] && uris[1] != uris[2]);
    for token_id in minted.iter() {
        assert_eq!(world.pack.owner_of(&token_id), world.buyer);
    }
}

#[test]
fn fulfillment_replay_is_rejected() {
    let world = setup();
    let collection_id = create_collection(&world, 1, 3, 6);
    let request_id = world.pack.buy_pack(&world.buyer, &collection_id, &1);
    let randomness = seed(&world.env, 777);

    world
        .pack
        .fulfill_randomness(&world.oracle_address, &request_id, &randomness);
    assert_eq!(
        world
            .pack
            .try_fulfill_randomness(&world.oracle_address, &request_id, &randomness),
        Err(Ok(ContractError::AlreadyFulfilled))
    );

    // Replay minted nothing.
    assert_eq!(world.pack.total_tokens(), 3);
    assert_eq!(world.pack.balance_of(&world.buyer), 3);
}

#[test]
fn fulfillment_rejects_unknown_request() {
    let world = setup();
    assert_eq!(
        world.pack.try_fulfill_randomness(
            &world.oracle_address,
            &seed(&world.env, 9),
            &seed(&world.env, 777)
        ),
        Err(Ok(ContractError::InvalidRequestId))
    );
    assert_eq!(
        world.pack.try_purchase_order_tokens(&seed(&world.env, 9)),
        Err(Ok(ContractError::InvalidRequestId))
    );
}

#[test]
fn fulfillment_rejects_unknown_caller() {
    let world = setup();
    let collection_id = create_collection(&world, 1, 3, 6);
    let request_id = world.pack.buy_pack(&world.buyer, &collection_id, &1);

    let mallory = Address::generate(&world.env);
    assert_eq!(
        world
            .pack
            .try_fulfill_randomness(&mallory, &request_id, &seed(&world.env, 777)),
        Err(Ok(ContractError::UnauthorizedCaller))
    );
    assert!(!world.pack.purchase_order(&request_id).fulfilled);
    assert_eq!(world.pack.total_tokens(), 0);
}

#[test]
fn minting_is_reserved_for_the_pack_contract() {
    let world = setup();
    create_blueprints(&world, 1);
    let mallory = Address::generate(&world.env);
    assert_eq!(
        world.pack.try_mint_from_blueprint(&mallory, &mallory, &0),
        Err(Ok(ContractError::Unauthorized))
    );
    assert_eq!(world.pack.total_tokens(), 0);
}

#[test]
fn orders_draw_independently_from_the_full_pool() {
    let world = setup();
    let collection_id = create_collection(&world, 1, 3, 6);

    let first = world.pack.buy_pack(&world.buyer, &collection_id, &1);
    let second = world.pack.buy_pack(&world.buyer, &collection_id, &1);
    assert!(first != second);

    let randomness = seed(&world.env, 777);
    world
        .pack
        .fulfill_randomness(&world.oracle_address, &first, &randomness);
    world
        .pack
        .fulfill_randomness(&world.oracle_address, &second, &randomness);

    assert_eq!(
        world.pack.purchase_order_tokens(&first),
        soroban_sdk::vec![&world.env, 0u64, 1, 2]
    );
    assert_eq!(
        world.pack.purchase_order_tokens(&second),
        soroban_sdk::vec![&world.env, 3u64, 4, 5]
    );

    // Same seed over the same pool selects the same blueprints: the second
    // order drew from a fresh copy, not from a depleted pool.
    let first_uris = [
        world.pack.token_uri(&0),
        world.pack.token_uri(&1),
        world.pack.token_uri(&2),
    ];
    let second_uris = [
        world.pack.token_uri(&3),
        world.pack.token_uri(&4),
        world.pack.token_uri(&5),
    ];
    assert_eq!(first_uris, second_uris);
    assert_eq!(world.pack.balance_of(&world.buyer), 6);
}

#[test]
fn transfer_moves_ownership() {
    let world = setup();
    let collection_id = create_collection(&world, 1, 3, 6);
    let request_id = world.pack.buy_pack(&world.buyer, &collection_id, &1);
    world
        .pack
        .fulfill_randomness(&world.oracle_address, &request_id, &seed(&world.env, 777));

    let receiver = Address::generate(&world.env);
    world.pack.transfer(&world.buyer, &receiver, &0);

    assert_eq!(world.pack.owner_of(&0), receiver);
    assert_eq!(world.pack.balance_of(&world.buyer), 2);
    assert_eq!(world.pack.balance_of(&receiver), 1);

    // Only the current owner may move a token.
    assert_eq!(
        world.pack.try_transfer(&world.buyer, &receiver, &0),
        Err(Ok(ContractError::Unauthorized))
    );
}

#[test]
fn withdraw_moves_sale_proceeds() {
    let world = setup();
    let collection_id = create_collection(&world, 1, 3, 6);
    world.pack.buy_pack(&world.buyer, &collection_id, &1);

    let treasury = Address::generate(&world.env);
    world.pack.withdraw(&treasury, &1);

    assert_eq!(world.payment.balance(&world.pack.address), 0);
    assert_eq!(world.payment.balance(&treasury), 1);
}

#[test]
#[should_panic(expected = "Error(Contract, #1)")]
fn initialize_can_run_only_once() {
    let world = setup();
    world
        .pack
        .initialize(&world.admin, &world.oracle_address, &world.payment.address);
}
