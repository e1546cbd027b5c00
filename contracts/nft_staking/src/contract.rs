use crate::storage;
use crate::types::{Error, StakeRecord};
use soroban_sdk::{contract, contractimpl, contractmeta, symbol_short, Address, Env, Vec};

use collectible::CollectibleContractClient;

contractmeta!(
    key = "Description",
    val = "Lock aware staking registry for collectible tokens"
);

#[contract]
pub struct NftStakingContract;

#[contractimpl]
impl NftStakingContract {
    pub fn initialize(env: Env, admin: Address, collectible: Address) -> Result<(), Error> {
        if storage::has_admin(&env) {
            return Err(Error::AlreadyInitialized);
        }
        admin.require_auth();

        storage::set_admin(&env, &admin);
        storage::set_collectible(&env, &collectible);

        env.events()
            .publish((symbol_short!("init"),), (admin, collectible));
        Ok(())
    }

    /// Stake the caller's tokens. Custody moves to the registry and a record
    /// is kept per token.
    pub fn stake(env: Env, staker: Address, token_ids: Vec<u64>) -> Result<(), Error> {
        staker.require_auth();
        if token_ids.is_empty() {
            return Err(Error::InvalidLength);
        }

        let collectible = CollectibleContractClient::new(&env, &storage::get_collectible(&env));
        let now = env.ledger().timestamp();

        for token_id in token_ids.iter() {
            match collectible.try_owner_of(&token_id) {
                Ok(Ok(owner)) if owner == staker => {}
                _ => return Err(Error::NotAnOwner),
            }

            collectible.transfer(&staker, &env.current_contract_address(), &token_id);
            storage::set_stake(
                &env,
                token_id,
                &StakeRecord {
                    staker: staker.clone(),
                    staked_at: now,
                },
            );
            storage::add_staked_id(&env, &staker, token_id);

            env.events()
                .publish((symbol_short!("staked"), staker.clone()), (token_id, now));
        }
        storage::add_staker(&env, &staker);
        Ok(())
    }

    /// Admin path for distributing pre-staked tokens. The admin surrenders
    /// custody of its own tokens while each stake is recorded for the
    /// matching beneficiary; a nonzero duration locks the token until
    /// `now + duration`.
    pub fn stake_with_lock_on_behalf_of(
        env: Env,
        token_ids: Vec<u64>,
        beneficiaries: Vec<Address>,
        durations: Vec<u64>,
    ) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        if token_ids.is_empty()
            || token_ids.len() != beneficiaries.len()
            || token_ids.len() != durations.len()
        {
            return Err(Error::InvalidLength);
        }

        let collectible = CollectibleContractClient::new(&env, &storage::get_collectible(&env));
        let now = env.ledger().timestamp();

        for (index, token_id) in token_ids.iter().enumerate() {
            let beneficiary = beneficiaries.get_unchecked(index as u32);
            let duration = durations.get_unchecked(index as u32);

            match collectible.try_owner_of(&token_id) {
                Ok(Ok(owner)) if owner == admin => {}
                _ => return Err(Error::NotAnOwner),
            }

            collectible.transfer(&admin, &env.current_contract_address(), &token_id);
            storage::set_stake(
                &env,
                token_id,
                &StakeRecord {
                    staker: beneficiary.clone(),
                    staked_at: now,
                },
            );
            storage::add_staked_id(&env, &beneficiary, token_id);
            storage::add_staker(&env, &beneficiary);
            if duration > 0 {
                storage::set_lock(&env, token_id, now + duration);
            }

            env.events().publish(
                (symbol_short!("staked"), beneficiary),
                (token_id, now),
            );
        }
        Ok(())
    }

    /// Withdraw staked tokens to `to`. Only the recorded staker may withdraw,
    /// and only once any lock has expired.
    pub fn unstake(env: Env, staker: Address, token_ids: Vec<u64>, to: Address) -> Result<(), Error> {
        staker.require_auth();
        if token_ids.is_empty() {
            return Err(Error::InvalidLength);
        }

        let collectible = CollectibleContractClient::new(&env, &storage::get_collectible(&env));
        let now = env.ledger().timestamp();

        for token_id in token_ids.iter() {
            let record = storage::get_stake(&env, token_id).ok_or(Error::NotAnOwner)?;
            if record.staker != staker {
                return Err(Error::NotAnOwner);
            }
            if now < storage::get_lock(&env, token_id) {
                return Err(Error::LockedToken);
            }

            storage::remove_stake(&env, token_id);
            storage::remove_lock(&env, token_id);
            storage::remove_staked_id(&env, &staker, token_id);

            collectible.transfer(&env.current_contract_address(), &to, &token_id);

            env.events()
                .publish((symbol_short!("unstaked"), staker.clone()), (token_id, to.clone()));
        }
        if storage::get_staked_ids(&env, &staker).is_empty() {
            storage::remove_staker(&env, &staker);
        }
        Ok(())
    }

    /// Force-withdraw stakes, ignoring locks. Custody returns to the
    /// recorded staker, not to the admin.
    pub fn unstake_by_admin(env: Env, token_ids: Vec<u64>) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        if token_ids.is_empty() {
            return Err(Error::InvalidLength);
        }

        let collectible = CollectibleContractClient::new(&env, &storage::get_collectible(&env));

        for token_id in token_ids.iter() {
            let record = storage::get_stake(&env, token_id).ok_or(Error::UnstakedToken)?;

            storage::remove_stake(&env, token_id);
            storage::remove_lock(&env, token_id);
            storage::remove_staked_id(&env, &record.staker, token_id);
            if storage::get_staked_ids(&env, &record.staker).is_empty() {
                storage::remove_staker(&env, &record.staker);
            }

            collectible.transfer(&env.current_contract_address(), &record.staker, &token_id);

            env.events().publish(
                (symbol_short!("unstaked"), record.staker.clone()),
                (token_id, record.staker),
            );
        }
        Ok(())
    }

    /// Overwrite lock deadlines. A zero timestamp clears the lock.
    pub fn set_unlock_timestamps(
        env: Env,
        token_ids: Vec<u64>,
        timestamps: Vec<u64>,
    ) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        if token_ids.is_empty() || token_ids.len() != timestamps.len() {
            return Err(Error::InvalidLength);
        }

        for (index, token_id) in token_ids.iter().enumerate() {
            let locked_until = timestamps.get_unchecked(index as u32);
            storage::set_lock(&env, token_id, locked_until);
        }
        Ok(())
    }

    // ---- views ----

    pub fn stakers(env: Env) -> Vec<Address> {
        storage::get_stakers(&env)
    }

    pub fn staked_token_ids(env: Env, staker: Address) -> Vec<u64> {
        storage::get_staked_ids(&env, &staker)
    }

    /// Bulk record lookup; missing entries come back as `None`.
    pub fn stake_data(env: Env, token_ids: Vec<u64>) -> Vec<Option<StakeRecord>> {
        let mut out = Vec::new(&env);
        for token_id in token_ids.iter() {
            out.push_back(storage::get_stake(&env, token_id));
        }
        out
    }

    /// Bulk lock lookup; zero means unlocked.
    pub fn locks(env: Env, token_ids: Vec<u64>) -> Vec<u64> {
        let mut out = Vec::new(&env);
        for token_id in token_ids.iter() {
            out.push_back(storage::get_lock(&env, token_id));
        }
        out
    }

    /// `(token_id, staked_at)` for everything the staker has in the registry.
    pub fn stake_at_by_staker(env: Env, staker: Address) -> Vec<(u64, u64)> {
        let mut out = Vec::new(&env);
        for token_id in storage::get_staked_ids(&env, &staker).iter() {
            if let Some(record) = storage::get_stake(&env, token_id) {
                out.push_back((token_id, record.staked_at));
            }
        }
        out
    }

    /// `(token_id, locked_until)` for the staker's tokens, zero included.
    pub fn locks_by_staker(env: Env, staker: Address) -> Vec<(u64, u64)> {
        let mut out = Vec::new(&env);
        for token_id in storage::get_staked_ids(&env, &staker).iter() {
            out.push_back((token_id, storage::get_lock(&env, token_id)));
        }
        out
    }

    /// Like `locks_by_staker`, restricted to tokens that actually carry a
    /// lock.
    pub fn locked_until_by_staker(env: Env, staker: Address) -> Vec<(u64, u64)> {
        let mut out = Vec::new(&env);
        for token_id in storage::get_staked_ids(&env, &staker).iter() {
            let locked_until = storage::get_lock(&env, token_id);
            if locked_until != 0 {
                out.push_back((token_id, locked_until));
            }
        }
        out
    }

    pub fn admin(env: Env) -> Address {
        storage::get_admin(&env)
    }

    pub fn collectible(env: Env) -> Address {
        storage::get_collectible(&env)
    }
}
