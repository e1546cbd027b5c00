#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contractmeta, contracttype, symbol_short, Address, Env,
    String,
};

contractmeta!(
    key = "Description",
    val = "Non-transferable participation badge, one per address"
);

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Name,
    Symbol,
    TokenUri,
    TotalSupply,
    Minter(Address),
    Holder(Address),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
}

fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

fn is_minter(env: &Env, minter: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Minter(minter.clone()))
        .unwrap_or(false)
}

fn get_total_supply(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(0)
}

#[contract]
pub struct ParticipationBadgeContract;

#[contractimpl]
impl ParticipationBadgeContract {
    pub fn initialize(env: Env, admin: Address, name: String, symbol: String) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Name, &name);
        env.storage().instance().set(&DataKey::Symbol, &symbol);

        env.events()
            .publish((symbol_short!("init"),), (admin, name, symbol));
        Ok(())
    }

    pub fn set_minter(env: Env, minter: Address, allowed: bool) -> Result<(), Error> {
        let admin = get_admin(&env);
        admin.require_auth();

        env.storage()
            .persistent()
            .set(&DataKey::Minter(minter.clone()), &allowed);

        env.events()
            .publish((symbol_short!("minter"),), (minter, allowed, admin));
        Ok(())
    }

    pub fn set_token_uri(env: Env, uri: String) -> Result<(), Error> {
        let admin = get_admin(&env);
        admin.require_auth();

        env.storage().instance().set(&DataKey::TokenUri, &uri);

        env.events().publish((symbol_short!("uri"),), (uri, admin));
        Ok(())
    }

    /// Issue a badge to `to`. A no-op when `to` already holds one; there is no
    /// way to hold more than a single badge and no way to transfer it.
    pub fn mint_once(env: Env, minter: Address, to: Address) -> Result<(), Error> {
        minter.require_auth();
        if !is_minter(&env, &minter) {
            return Err(Error::NotAuthorized);
        }

        let key = DataKey::Holder(to.clone());
        if env.storage().persistent().get(&key).unwrap_or(false) {
            return Ok(());
        }
        env.storage().persistent().set(&key, &true);
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &(get_total_supply(&env) + 1));

        env.events().publish((symbol_short!("badge"), to), ());
        Ok(())
    }

    // Views

    pub fn has_badge(env: Env, owner: Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Holder(owner))
            .unwrap_or(false)
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        if Self::has_badge(env, owner) {
            1
        } else {
            0
        }
    }

    pub fn total_supply(env: Env) -> u64 {
        get_total_supply(&env)
    }

    pub fn name(env: Env) -> String {
        env.storage().instance().get(&DataKey::Name).unwrap()
    }

    pub fn symbol(env: Env) -> String {
        env.storage().instance().get(&DataKey::Symbol).unwrap()
    }

    pub fn token_uri(env: Env) -> String {
        env.storage()
            .instance()
            .get(&DataKey::TokenUri)
            .unwrap_or(String::from_str(&env, ""))
    }
}
