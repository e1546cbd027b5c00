use crate::storage::*;
use crate::types::Error;
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, Address, Env, String, Vec};

contractmeta!(
    key = "Description",
    val = "Transferable collectible token ledger with per-owner enumeration"
);

#[contract]
pub struct CollectibleContract;

#[contractimpl]
impl CollectibleContract {
    pub fn initialize(env: Env, admin: Address, name: String, symbol: String) -> Result<(), Error> {
        if has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        set_admin(&env, &admin);
        set_name(&env, &name);
        set_symbol(&env, &symbol);

        env.events()
            .publish((symbol_short!("init"),), (admin, name, symbol));
        Ok(())
    }

    /// Register or revoke an address allowed to mint. The sale engine is the
    /// expected minter; supply caps are enforced there, not here.
    pub fn set_minter(env: Env, minter: Address, allowed: bool) -> Result<(), Error> {
        let admin = get_admin(&env);
        admin.require_auth();

        set_minter(&env, &minter, allowed);

        env.events()
            .publish((symbol_short!("minter"),), (minter, allowed, admin));
        Ok(())
    }

    /// Mint `quantity` sequential ids to `to`, returning the first id.
    pub fn mint(env: Env, minter: Address, to: Address, quantity: u64) -> Result<u64, Error> {
        minter.require_auth();
        if !is_minter(&env, &minter) {
            return Err(Error::NotAuthorized);
        }
        if quantity == 0 {
            return Err(Error::InvalidQuantity);
        }

        let first_id = get_token_counter(&env);
        for token_id in first_id..first_id + quantity {
            set_token_owner(&env, token_id, &to);
            add_owner_token(&env, &to, token_id);
        }
        set_token_counter(&env, first_id + quantity);

        env.events()
            .publish((symbol_short!("minted"), to), (first_id, quantity));
        Ok(first_id)
    }

    pub fn transfer(env: Env, from: Address, to: Address, token_id: u64) -> Result<(), Error> {
        from.require_auth();

        let owner = get_token_owner(&env, token_id).ok_or(Error::TokenNotFound)?;
        if owner != from {
            return Err(Error::NotTokenOwner);
        }

        set_token_owner(&env, token_id, &to);
        remove_owner_token(&env, &from, token_id);
        add_owner_token(&env, &to, token_id);

        env.events()
            .publish((symbol_short!("transfer"), from, to), token_id);
        Ok(())
    }

    // Views

    pub fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        get_token_owner(&env, token_id).ok_or(Error::TokenNotFound)
    }

    pub fn balance_of(env: Env, owner: Address) -> u32 {
        get_owner_tokens(&env, &owner).len()
    }

    pub fn ids_of_owner(env: Env, owner: Address) -> Vec<u64> {
        get_owner_tokens(&env, &owner)
    }

    pub fn total_supply(env: Env) -> u64 {
        get_token_counter(&env)
    }

    pub fn is_minter(env: Env, minter: Address) -> bool {
        is_minter(&env, &minter)
    }

    pub fn name(env: Env) -> String {
        get_name(&env)
    }

    pub fn symbol(env: Env) -> String {
        get_symbol(&env)
    }
}
