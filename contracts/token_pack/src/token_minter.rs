use crate::blueprint_registry::BlueprintRegistry;
use crate::error::ContractError;
use crate::events;
use crate::storage::DataKey;
use soroban_sdk::{Address, Env, String};

/// Owns concrete token state: dense monotonic ids, per-token owner and
/// source blueprint, per-owner balances. Minting is reserved for the pack
/// contract itself; everything else is standard ownership bookkeeping.
pub struct TokenMinter;

impl TokenMinter {
    /// Mints one token from `blueprint_id` to `receiver`. Callers must be
    /// authorized before reaching this; the fulfillment path calls it
    /// directly.
    pub fn mint(env: &Env, receiver: Address, blueprint_id: u64) -> Result<u64, ContractError> {
        if !BlueprintRegistry::exists(env, blueprint_id) {
            return Err(ContractError::InvalidBlueprintId);
        }

        let token_id: u64 = env
            .storage()
            .instance()
            .get(&DataKey::TokenCount)
            .unwrap_or(0);

        env.storage()
            .persistent()
            .set(&DataKey::TokenOwner(token_id), &receiver);
        env.storage()
            .persistent()
            .set(&DataKey::TokenBlueprint(token_id), &blueprint_id);

        let balance: u64 = env
            .storage()
            .persistent()
            .get(&DataKey::Balance(receiver.clone()))
            .unwrap_or(0);
        env.storage()
            .persistent()
            .set(&DataKey::Balance(receiver.clone()), &(balance + 1));

        env.storage()
            .instance()
            .set(&DataKey::TokenCount, &(token_id + 1));

        events::emit_minted(env, token_id, receiver, blueprint_id);

        Ok(token_id)
    }

    pub fn transfer(
        env: &Env,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), ContractError> {
        let owner: Address = env
            .storage()
            .persistent()
            .get(&DataKey::TokenOwner(token_id))
            .ok_or(ContractError::InvalidTokenId)?;
        if owner != from {
            return Err(ContractError::Unauthorized);
        }

        env.storage()
            .persistent()
            .set(&DataKey::TokenOwner(token_id), &to);

        let from_balance: u64 = env
            .storage()
            .persistent()
            .get(&DataKey::Balance(from.clone()))
            .unwrap_or(0);
        env.storage()
            .persistent()
            .set(&DataKey::Balance(from.clone()), &(from_balance - 1));

        let to_balance: u64 = env
            .storage()
            .persistent()
            .get(&DataKey::Balance(to.clone()))
            .unwrap_or(0);
        env.storage()
            .persistent()
            .set(&DataKey::Balance(to.clone()), &(to_balance + 1));

        events::emit_transfer(env, from, to, token_id);

        Ok(())
    }

    /// Resolves a token's metadata through its source blueprint.
    pub fn token_uri(env: &Env, token_id: u64) -> Result<String, ContractError> {
        let blueprint_id: u64 = env
            .storage()
            .persistent()
            .get(&DataKey::TokenBlueprint(token_id))
            .ok_or(ContractError::InvalidTokenId)?;
        let blueprint = BlueprintRegistry::get(env, blueprint_id)?;
        Ok(blueprint.metadata_path)
    }

    pub fn owner_of(env: &Env, token_id: u64) -> Result<Address, ContractError> {
        env.storage()
            .persistent()
            .get(&DataKey::TokenOwner(token_id))
            .ok_or(ContractError::InvalidTokenId)
    }

    pub fn balance_of(env: &Env, owner: Address) -> u64 {
        env.storage()
            .persistent()
            .get(&DataKey::Balance(owner))
            .unwrap_or(0)
    }

    pub fn total(env: &Env) -> u64 {
        env.storage()
            .instance()
            .get(&DataKey::TokenCount)
            .unwrap_or(0)
    }
}
