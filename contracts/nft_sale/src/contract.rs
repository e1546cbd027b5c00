use soroban_sdk::{
    contract, contractimpl, contractmeta, symbol_short, token, Address, BytesN, Env, String, Vec,
};

use collectible::CollectibleContractClient;
use participation_badge::ParticipationBadgeContractClient;

use crate::merkle;
use crate::storage;
use crate::types::{
    units_of, Error, GlobalStats, PhaseWindow, Roots, SaleConfig, SalePhase, UserData,
};

contractmeta!(
    key = "Description",
    val = "Time gated collectible sale with proof based settlement"
);

#[contract]
pub struct NftSaleContract;

#[contractimpl]
impl NftSaleContract {
    /// Set up the sale. Can only be called once.
    pub fn initialize(
        env: Env,
        admin: Address,
        collectible: Address,
        badge: Address,
        payment_token: Address,
        max_total_supply: u64,
        whitelist_price: i128,
        public_price: i128,
    ) -> Result<(), Error> {
        if storage::has_config(&env) {
            return Err(Error::AlreadyInitialized);
        }
        if whitelist_price <= 0 || public_price <= 0 || max_total_supply == 0 {
            return Err(Error::InvalidValue);
        }

        storage::set_admin(&env, &admin);
        storage::set_config(
            &env,
            &SaleConfig {
                collectible,
                badge,
                payment_token,
                max_total_supply,
                whitelist_price,
                public_price,
            },
        );

        env.events()
            .publish((symbol_short!("init"),), (admin, max_total_supply));
        Ok(())
    }

    /// Replace the commitment roots for the three proof classes. A zero root
    /// keeps the corresponding class closed.
    pub fn set_roots(
        env: Env,
        eligibility: BytesN<32>,
        claim: BytesN<32>,
        refund: BytesN<32>,
    ) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        let roots = Roots {
            eligibility,
            claim,
            refund,
        };
        storage::set_roots(&env, &roots);

        env.events()
            .publish((symbol_short!("roots"),), (roots, admin));
        Ok(())
    }

    pub fn set_receiver(env: Env, receiver: Address) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        storage::set_receiver(&env, &receiver);
        env.events()
            .publish((symbol_short!("receiver"),), (receiver, admin));
        Ok(())
    }

    pub fn set_base_uri(env: Env, uri: String) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        storage::set_base_uri(&env, &uri);
        env.events()
            .publish((symbol_short!("base_uri"),), (uri, admin));
        Ok(())
    }

    /// Move the phase boundaries. Boundaries must be strictly ordered. While
    /// no window has been set yet, a nonzero start must lie in the future;
    /// after that the admin may rewrite the window freely, including back to
    /// the unset state with `start == 0`.
    pub fn set_timestamps(
        env: Env,
        start: u64,
        whitelist_end: u64,
        end: u64,
    ) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        if !(start < whitelist_end && whitelist_end < end) {
            return Err(Error::InvalidTimestamp);
        }
        let current = storage::get_window(&env);
        if !current.is_set() && start != 0 && start <= env.ledger().timestamp() {
            return Err(Error::InvalidTimestamp);
        }

        let window = PhaseWindow {
            start,
            whitelist_end,
            end,
        };
        storage::set_window(&env, &window);

        env.events()
            .publish((symbol_short!("times"),), (start, whitelist_end, end, admin));
        Ok(())
    }

    /// Mint collectibles outside the sale flow, e.g. for partner allocations.
    /// The whole batch is bounded by the configured maximum supply; nothing is
    /// minted when the batch does not fit.
    pub fn mint_by_admin(
        env: Env,
        recipients: Vec<Address>,
        quantities: Vec<u64>,
    ) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        if recipients.is_empty() || recipients.len() != quantities.len() {
            return Err(Error::ParamsLengthMismatch);
        }
        let mut total: u64 = 0;
        for quantity in quantities.iter() {
            if quantity == 0 {
                return Err(Error::InvalidValue);
            }
            total += quantity;
        }

        let config = storage::get_config(&env);
        let collectible = CollectibleContractClient::new(&env, &config.collectible);
        if collectible.total_supply() + total > config.max_total_supply {
            return Err(Error::TotalSupplyExceeded);
        }

        for (index, to) in recipients.iter().enumerate() {
            let quantity = quantities.get_unchecked(index as u32);
            let first_id = collectible.mint(&env.current_contract_address(), &to, &quantity);
            env.events().publish(
                (symbol_short!("minted"), to),
                (first_id, quantity, admin.clone()),
            );
        }
        Ok(())
    }

    /// Pay escrowed public-sale funds out to the receiver. Fails when `amount`
    /// exceeds the escrow ledger, so refund backing cannot be withdrawn by
    /// mistake.
    pub fn withdraw_funds(env: Env, amount: i128) -> Result<(), Error> {
        let admin = storage::get_admin(&env);
        admin.require_auth();

        let receiver = storage::get_receiver(&env).ok_or(Error::ZeroAddress)?;
        storage::debit_escrow(&env, amount)?;

        let config = storage::get_config(&env);
        let payment = token::Client::new(&env, &config.payment_token);
        payment.transfer(&env.current_contract_address(), &receiver, &amount);

        env.events()
            .publish((symbol_short!("withdraw"), receiver), (amount, admin));
        Ok(())
    }

    /// Pay into the sale while it is open.
    ///
    /// A non-empty `proof` selects the whitelist path: the amount must cover
    /// exactly one whitelist allocation plus any number of public units, and
    /// the proof must show the depositor in the eligibility set. An empty
    /// proof selects the public path: the amount must be a positive multiple
    /// of the public price.
    ///
    /// The whitelist portion is forwarded to the receiver immediately; the
    /// public portion stays escrowed until settlement resolves it into a
    /// claim or a refund.
    pub fn deposit(
        env: Env,
        depositor: Address,
        amount: i128,
        proof: Vec<BytesN<32>>,
    ) -> Result<(), Error> {
        depositor.require_auth();

        let window = storage::get_window(&env);
        if window.phase(env.ledger().timestamp()) != SalePhase::Open {
            return Err(Error::IncorrectState);
        }

        let config = storage::get_config(&env);
        let mut account = storage::get_account(&env, &depositor);
        let mut stats = storage::get_stats(&env);

        let is_whitelist = !proof.is_empty();
        let public_units: u64;

        if is_whitelist {
            if account.whitelist_deposited {
                return Err(Error::DepositedAlready);
            }
            let remainder = amount - config.whitelist_price;
            if remainder < 0 || remainder % config.public_price != 0 {
                return Err(Error::InvalidValue);
            }
            let roots = storage::get_roots(&env);
            let leaf = merkle::address_leaf(&env, &depositor);
            if !merkle::verify(&env, &proof, &roots.eligibility, &leaf) {
                return Err(Error::MerkleProofFailed);
            }
            public_units = units_of(remainder, config.public_price)?;
        } else {
            if amount <= 0 || amount % config.public_price != 0 {
                return Err(Error::InvalidValue);
            }
            public_units = units_of(amount, config.public_price)?;
        }

        // Whitelist revenue leaves the contract right away, so a receiver
        // must be configured before whitelist deposits can be accepted.
        let receiver = if is_whitelist {
            Some(storage::get_receiver(&env).ok_or(Error::ZeroAddress)?)
        } else {
            None
        };

        if is_whitelist {
            account.whitelist_deposited = true;
            stats.whitelist_deposits += 1;
        }
        account.public_quantity += public_units;
        stats.total_public_quantity += public_units;
        storage::set_account(&env, &depositor, &account);
        storage::set_stats(&env, &stats);
        storage::credit_escrow(&env, public_units as i128 * config.public_price);

        let payment = token::Client::new(&env, &config.payment_token);
        payment.transfer(&depositor, &env.current_contract_address(), &amount);
        if let Some(receiver) = receiver {
            payment.transfer(
                &env.current_contract_address(),
                &receiver,
                &config.whitelist_price,
            );
        }

        let badge = ParticipationBadgeContractClient::new(&env, &config.badge);
        badge.mint_once(&env.current_contract_address(), &depositor);

        env.events().publish(
            (symbol_short!("deposited"), depositor),
            (amount, is_whitelist, public_units),
        );
        Ok(())
    }

    /// Collect everything the settlement allocation grants the caller: the
    /// whitelist unit if one was deposited and not yet taken, plus the gap
    /// between the proven cumulative allocation and what was already claimed.
    pub fn claim(
        env: Env,
        claimer: Address,
        cumulative: u64,
        proof: Vec<BytesN<32>>,
    ) -> Result<(), Error> {
        claimer.require_auth();

        let window = storage::get_window(&env);
        if window.phase(env.ledger().timestamp()) != SalePhase::Settlement {
            return Err(Error::IncorrectState);
        }

        let config = storage::get_config(&env);
        let mut account = storage::get_account(&env, &claimer);
        let mut stats = storage::get_stats(&env);

        let whitelist_fired = account.whitelist_deposited && !account.claimed_whitelist;
        let delta = cumulative.saturating_sub(account.claimed_quantity);

        if delta > 0 {
            let roots = storage::get_roots(&env);
            let leaf = merkle::allowance_leaf(&env, &claimer, cumulative);
            if !merkle::verify(&env, &proof, &roots.claim, &leaf) {
                return Err(Error::MerkleProofFailed);
            }
        }
        if !whitelist_fired && delta == 0 {
            return Err(Error::NothingToClaim);
        }

        let to_mint = delta + if whitelist_fired { 1 } else { 0 };
        let collectible = CollectibleContractClient::new(&env, &config.collectible);
        if collectible.total_supply() + to_mint > config.max_total_supply {
            return Err(Error::TotalSupplyExceeded);
        }

        if whitelist_fired {
            account.claimed_whitelist = true;
            stats.whitelist_claims += 1;
        }
        account.claimed_quantity += delta;
        stats.total_claimed_quantity += delta;
        storage::set_account(&env, &claimer, &account);
        storage::set_stats(&env, &stats);

        collectible.mint(&env.current_contract_address(), &claimer, &to_mint);

        env.events().publish(
            (symbol_short!("claimed"), claimer),
            (whitelist_fired, delta),
        );
        Ok(())
    }

    /// Return escrowed funds for public units the settlement allocation did
    /// not convert into collectibles. `cumulative` is the total refundable
    /// quantity proven for the caller; only the part not refunded before is
    /// paid out, and it must fit in the caller's unclaimed public balance.
    pub fn refund(
        env: Env,
        caller: Address,
        cumulative: u64,
        proof: Vec<BytesN<32>>,
    ) -> Result<(), Error> {
        caller.require_auth();

        let window = storage::get_window(&env);
        if window.phase(env.ledger().timestamp()) != SalePhase::Settlement {
            return Err(Error::IncorrectState);
        }

        let roots = storage::get_roots(&env);
        let leaf = merkle::allowance_leaf(&env, &caller, cumulative);
        if !merkle::verify(&env, &proof, &roots.refund, &leaf) {
            return Err(Error::MerkleProofFailed);
        }

        let config = storage::get_config(&env);
        let mut account = storage::get_account(&env, &caller);
        let mut stats = storage::get_stats(&env);

        let delta = cumulative.saturating_sub(account.refunded_quantity);
        let available = account.public_quantity.saturating_sub(account.claimed_quantity);
        if delta == 0 || delta > available {
            return Err(Error::NothingToClaim);
        }

        account.refunded_quantity += delta;
        account.public_quantity -= delta;
        stats.total_public_quantity -= delta;
        storage::set_account(&env, &caller, &account);
        storage::set_stats(&env, &stats);

        let amount = delta as i128 * config.public_price;
        storage::debit_escrow(&env, amount)?;

        let payment = token::Client::new(&env, &config.payment_token);
        payment.transfer(&env.current_contract_address(), &caller, &amount);

        env.events()
            .publish((symbol_short!("refunded"), caller), (amount, delta));
        Ok(())
    }

    // ---- views ----

    pub fn get_state(env: Env) -> SalePhase {
        storage::get_window(&env).phase(env.ledger().timestamp())
    }

    pub fn get_timestamps(env: Env) -> PhaseWindow {
        storage::get_window(&env)
    }

    pub fn get_roots(env: Env) -> Roots {
        storage::get_roots(&env)
    }

    pub fn get_stats(env: Env) -> GlobalStats {
        storage::get_stats(&env)
    }

    pub fn get_user_data(env: Env, addr: Address) -> UserData {
        let account = storage::get_account(&env, &addr);
        UserData {
            whitelist_deposited: account.whitelist_deposited,
            public_quantity: account.public_quantity,
            claimed_whitelist: account.claimed_whitelist,
            claimed_quantity: account.claimed_quantity,
        }
    }

    pub fn get_config(env: Env) -> SaleConfig {
        storage::get_config(&env)
    }

    pub fn receiver(env: Env) -> Option<Address> {
        storage::get_receiver(&env)
    }

    pub fn base_uri(env: Env) -> String {
        storage::get_base_uri(&env)
    }

    pub fn escrow_balance(env: Env) -> i128 {
        storage::get_escrow(&env)
    }

    pub fn get_ids_of_owner(env: Env, owner: Address) -> Vec<u64> {
        let config = storage::get_config(&env);
        CollectibleContractClient::new(&env, &config.collectible).ids_of_owner(&owner)
    }

    pub fn is_admin(env: Env, addr: Address) -> bool {
        storage::get_admin(&env) == addr
    }
}
