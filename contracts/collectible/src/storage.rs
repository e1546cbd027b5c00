use crate::types::DataKey;
use soroban_sdk::{Address, Env, String, Vec};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn set_name(env: &Env, name: &String) {
    env.storage().instance().set(&DataKey::Name, name);
}

pub fn get_name(env: &Env) -> String {
    env.storage().instance().get(&DataKey::Name).unwrap()
}

pub fn set_symbol(env: &Env, symbol: &String) {
    env.storage().instance().set(&DataKey::Symbol, symbol);
}

pub fn get_symbol(env: &Env) -> String {
    env.storage().instance().get(&DataKey::Symbol).unwrap()
}

pub fn is_minter(env: &Env, minter: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Minter(minter.clone()))
        .unwrap_or(false)
}

pub fn set_minter(env: &Env, minter: &Address, allowed: bool) {
    env.storage()
        .persistent()
        .set(&DataKey::Minter(minter.clone()), &allowed);
}

pub fn get_token_counter(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TokenCounter)
        .unwrap_or(0)
}

pub fn set_token_counter(env: &Env, counter: u64) {
    env.storage().instance().set(&DataKey::TokenCounter, &counter);
}

pub fn get_token_owner(env: &Env, token_id: u64) -> Option<Address> {
    env.storage().persistent().get(&DataKey::TokenOwner(token_id))
}

pub fn set_token_owner(env: &Env, token_id: u64, owner: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::TokenOwner(token_id), owner);
}

pub fn get_owner_tokens(env: &Env, owner: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::OwnerTokens(owner.clone()))
        .unwrap_or(Vec::new(env))
}

fn set_owner_tokens(env: &Env, owner: &Address, tokens: &Vec<u64>) {
    env.storage()
        .persistent()
        .set(&DataKey::OwnerTokens(owner.clone()), tokens);
}

// Enumeration bookkeeping: per-owner id vector plus a token -> position index,
// so removal is a swap-remove instead of a scan.

pub fn add_owner_token(env: &Env, owner: &Address, token_id: u64) {
    let mut tokens = get_owner_tokens(env, owner);
    env.storage()
        .persistent()
        .set(&DataKey::OwnerTokenIndex(token_id), &tokens.len());
    tokens.push_back(token_id);
    set_owner_tokens(env, owner, &tokens);
}

pub fn remove_owner_token(env: &Env, owner: &Address, token_id: u64) {
    let mut tokens = get_owner_tokens(env, owner);
    let index: u32 = env
        .storage()
        .persistent()
        .get(&DataKey::OwnerTokenIndex(token_id))
        .unwrap();
    let last_index = tokens.len() - 1;
    if index != last_index {
        let moved = tokens.get_unchecked(last_index);
        tokens.set(index, moved);
        env.storage()
            .persistent()
            .set(&DataKey::OwnerTokenIndex(moved), &index);
    }
    tokens.pop_back();
    set_owner_tokens(env, owner, &tokens);
    env.storage()
        .persistent()
        .remove(&DataKey::OwnerTokenIndex(token_id));
}
