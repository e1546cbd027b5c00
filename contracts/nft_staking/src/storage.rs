use crate::types::{DataKey, StakeRecord};
use soroban_sdk::{Address, Env, Vec};

pub fn has_admin(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Admin)
}

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_collectible(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Collectible).unwrap()
}

pub fn set_collectible(env: &Env, collectible: &Address) {
    env.storage()
        .instance()
        .set(&DataKey::Collectible, collectible);
}

pub fn get_stake(env: &Env, token_id: u64) -> Option<StakeRecord> {
    env.storage().persistent().get(&DataKey::Stake(token_id))
}

pub fn set_stake(env: &Env, token_id: u64, record: &StakeRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Stake(token_id), record);
}

pub fn remove_stake(env: &Env, token_id: u64) {
    env.storage().persistent().remove(&DataKey::Stake(token_id));
}

pub fn get_lock(env: &Env, token_id: u64) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::Lock(token_id))
        .unwrap_or(0)
}

pub fn set_lock(env: &Env, token_id: u64, locked_until: u64) {
    env.storage()
        .persistent()
        .set(&DataKey::Lock(token_id), &locked_until);
}

pub fn remove_lock(env: &Env, token_id: u64) {
    env.storage().persistent().remove(&DataKey::Lock(token_id));
}

// Two enumerable sets with the same swap-remove shape: the global staker
// set and the per-staker token id set. Each keeps a position index so
// removal does not scan.

pub fn get_stakers(env: &Env) -> Vec<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::Stakers)
        .unwrap_or(Vec::new(env))
}

fn set_stakers(env: &Env, stakers: &Vec<Address>) {
    env.storage().persistent().set(&DataKey::Stakers, stakers);
}

pub fn add_staker(env: &Env, staker: &Address) {
    let key = DataKey::StakerIndex(staker.clone());
    if env.storage().persistent().has(&key) {
        return;
    }
    let mut stakers = get_stakers(env);
    env.storage().persistent().set(&key, &stakers.len());
    stakers.push_back(staker.clone());
    set_stakers(env, &stakers);
}

pub fn remove_staker(env: &Env, staker: &Address) {
    let key = DataKey::StakerIndex(staker.clone());
    let index: u32 = match env.storage().persistent().get(&key) {
        Some(index) => index,
        None => return,
    };
    let mut stakers = get_stakers(env);
    let last_index = stakers.len() - 1;
    if index != last_index {
        let moved = stakers.get_unchecked(last_index);
        stakers.set(index, moved.clone());
        env.storage()
            .persistent()
            .set(&DataKey::StakerIndex(moved), &index);
    }
    stakers.pop_back();
    set_stakers(env, &stakers);
    env.storage().persistent().remove(&key);
}

pub fn get_staked_ids(env: &Env, staker: &Address) -> Vec<u64> {
    env.storage()
        .persistent()
        .get(&DataKey::StakedIds(staker.clone()))
        .unwrap_or(Vec::new(env))
}

fn set_staked_ids(env: &Env, staker: &Address, ids: &Vec<u64>) {
    env.storage()
        .persistent()
        .set(&DataKey::StakedIds(staker.clone()), ids);
}

pub fn add_staked_id(env: &Env, staker: &Address, token_id: u64) {
    let mut ids = get_staked_ids(env, staker);
    env.storage()
        .persistent()
        .set(&DataKey::StakedIndex(token_id), &ids.len());
    ids.push_back(token_id);
    set_staked_ids(env, staker, &ids);
}

pub fn remove_staked_id(env: &Env, staker: &Address, token_id: u64) {
    let mut ids = get_staked_ids(env, staker);
    let index: u32 = env
        .storage()
        .persistent()
        .get(&DataKey::StakedIndex(token_id))
        .unwrap();
    let last_index = ids.len() - 1;
    if index != last_index {
        let moved = ids.get_unchecked(last_index);
        ids.set(index, moved);
        env.storage()
            .persistent()
            .set(&DataKey::StakedIndex(moved), &index);
    }
    ids.pop_back();
    set_staked_ids(env, staker, &ids);
    env.storage()
        .persistent()
        .remove(&DataKey::StakedIndex(token_id));
}
