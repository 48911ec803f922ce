use soroban_sdk::{Address, BytesN, Env, contractevent};

#[contractevent]
#[derive(Clone, Debug)]
pub struct BlueprintCreated {
    pub author: Address,
    pub blueprint_id: u64,
    pub author_index: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct CollectionCreated {
    pub creator: Address,
    pub collection_id: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct PurchaseOrdered {
    pub buyer: Address,
    pub collection_id: u64,
    pub request_id: BytesN<32>,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Minted {
    pub token_id: u64,
    pub receiver: Address,
    pub blueprint_id: u64,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct PackOpened {
    pub request_id: BytesN<32>,
    pub buyer: Address,
}

#[contractevent]
#[derive(Clone, Debug)]
pub struct Transfer {
    pub from: Address,
    pub to: Address,
    pub token_id: u64,
}

pub fn emit_blueprint_created(env: &Env, author: Address, blueprint_id: u64, author_index: u64) {
    BlueprintCreated {
        author,
        blueprint_id,
        author_index,
    }
    .publish(env);
}

pub fn emit_collection_created(env: &Env, creator: Address, collection_id: u64) {
    CollectionCreated {
        creator,
        collection_id,
    }
    .publish(env);
}

pub fn emit_purchase_ordered(
    env: &Env,
    buyer: Address,
    collection_id: u64,
    request_id: BytesN<32>,
) {
    PurchaseOrdered {
        buyer,
        collection_id,
        request_id,
    }
    .publish(env);
}

pub fn emit_minted(env: &Env, token_id: u64, receiver: Address, blueprint_id: u64) {
    Minted {
        token_id,
        receiver,
        blueprint_id,
    }
    .publish(env);
}

pub fn emit_pack_opened(env: &Env, request_id: BytesN<32>, buyer: Address) {
    PackOpened { request_id, buyer }.publish(env);
}

pub fn emit_transfer(env: &Env, from: Address, to: Address, token_id: u64) {
    Transfer { from, to, token_id }.publish(env);
}
