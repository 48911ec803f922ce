use crate::error::ContractError;
use crate::events;
use crate::storage::DataKey;
use crate::types::Blueprint;
use soroban_sdk::{Address, Env, String};

/// Registry of author-submitted templates. Blueprints are append-only:
/// ids are dense, monotonic from 0, and a blueprint never changes after
/// creation.
pub struct BlueprintRegistry;

impl BlueprintRegistry {
    pub fn create(
        env: &Env,
        author: Address,
        metadata_path: String,
    ) -> Result<u64, ContractError> {
        if metadata_path.is_empty() {
            return Err(ContractError::EmptyPath);
        }

        let blueprint_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::BlueprintCount)
            .unwrap_or(0);
        let author_index: u64 = env
            .storage()
            .instance()
            .get(&DataKey::AuthorBlueprintCount(author.clone()))
            .unwrap_or(0);

        let blueprint = Blueprint {
            author: author.clone(),
            metadata_path,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Blueprint(blueprint_id), &blueprint);
        env.storage()
            .instance()
            .set(&DataKey::BlueprintCount, &(blueprint_id + 1));
        env.storage().instance().set(
            &DataKey::AuthorBlueprintCount(author.clone()),
            &(author_index + 1),
        );

        events::emit_blueprint_created(env, author, blueprint_id, author_index);

        Ok(blueprint_id)
    }

    pub fn get(env: &Env, blueprint_id: u64) -> Result<Blueprint, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::Blueprint(blueprint_id))
            .ok_or(ContractError::InvalidBlueprintId)
    }

    pub fn exists(env: &Env, blueprint_id: u64) -> bool {
        env.storage()
            .persistent()
            .has(&DataKey::Blueprint(blueprint_id))
    }

    pub fn total(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::BlueprintCount)
            .unwrap_or(0)
    }
}
