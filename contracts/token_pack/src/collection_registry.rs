use crate::blueprint_registry::BlueprintRegistry;
use crate::error::ContractError;
use crate::events;
use crate::storage::DataKey;
use crate::types::TokenCollection;
use soroban_sdk::{Address, Env, String, Vec};

/// Registry of pack templates. A collection groups a fixed blueprint pool
/// with a price and a draw capacity; it is immutable once stored.
pub struct CollectionRegistry;

impl CollectionRegistry {
    pub fn create(
        env: &Env,
        creator: Address,
        metadata_path: String,
        unit_price: i128,
        capacity: u32,
        blueprints: Vec<u64>,
    ) -> Result<u64, ContractError> {
        if metadata_path.is_empty() {
            return Err(ContractError::EmptyPath);
        }
        if unit_price <= 0 {
            return Err(ContractError::PriceUnderLimit);
        }
        if capacity == 0 {
            return Err(ContractError::CapacityUnderLimit);
        }
        // The pool must be large enough to draw `capacity` distinct members.
        if blueprints.len() < capacity {
            return Err(ContractError::BlueprintsUnderLimit);
        }
        for blueprint_id in blueprints.iter() {
            if !BlueprintRegistry::exists(env, blueprint_id) {
                return Err(ContractError::InvalidBlueprintId);
            }
        }

        let collection_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::CollectionCount)
            .unwrap_or(0);

        let collection = TokenCollection {
            metadata_path,
            unit_price,
            capacity,
            blueprints,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Collection(collection_id), &collection);
        env.storage()
            .instance()
            .set(&DataKey::CollectionCount, &(collection_id + 1));

        events::emit_collection_created(env, creator, collection_id);

        Ok(collection_id)
    }

    pub fn get(env: &Env, collection_id: u64) -> Result<TokenCollection, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Collection(collection_id))
            .ok_or(ContractError::InvalidCollectionId)
    }

    pub fn total(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::CollectionCount)
            .unwrap_or(0)
    }
}
