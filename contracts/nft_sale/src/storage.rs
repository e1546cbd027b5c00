use soroban_sdk::{Address, Env, String};

use crate::merkle;
use crate::types::{DataKey, Error, GlobalStats, PhaseWindow, Roots, SaleConfig, UserAccount};

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> SaleConfig {
    env.storage().instance().get(&DataKey::Config).unwrap()
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_admin(env: &Env) -> Address {
    env.storage().instance().get(&DataKey::Admin).unwrap()
}

pub fn set_admin(env: &Env, admin: &Address) {
    env.storage().instance().set(&DataKey::Admin, admin);
}

pub fn get_receiver(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Receiver)
}

pub fn set_receiver(env: &Env, receiver: &Address) {
    env.storage().instance().set(&DataKey::Receiver, receiver);
}

pub fn get_window(env: &Env) -> PhaseWindow {
    env.storage()
        .instance()
        .get(&DataKey::Window)
        .unwrap_or(PhaseWindow::unset())
}

pub fn set_window(env: &Env, window: &PhaseWindow) {
    env.storage().instance().set(&DataKey::Window, window);
}

pub fn get_roots(env: &Env) -> Roots {
    env.storage().instance().get(&DataKey::Roots).unwrap_or(Roots {
        eligibility: merkle::zero_root(env),
        claim: merkle::zero_root(env),
        refund: merkle::zero_root(env),
    })
}

pub fn set_roots(env: &Env, roots: &Roots) {
    env.storage().instance().set(&DataKey::Roots, roots);
}

pub fn get_base_uri(env: &Env) -> String {
    env.storage()
        .instance()
        .get(&DataKey::BaseUri)
        .unwrap_or(String::from_str(env, ""))
}

pub fn set_base_uri(env: &Env, uri: &String) {
    env.storage().instance().set(&DataKey::BaseUri, uri);
}

pub fn get_stats(env: &Env) -> GlobalStats {
    env.storage()
        .instance()
        .get(&DataKey::Stats)
        .unwrap_or(GlobalStats::empty())
}

pub fn set_stats(env: &Env, stats: &GlobalStats) {
    env.storage().instance().set(&DataKey::Stats, stats);
}

pub fn get_account(env: &Env, addr: &Address) -> UserAccount {
    env.storage()
        .persistent()
        .get(&DataKey::Account(addr.clone()))
        .unwrap_or(UserAccount::empty())
}

pub fn set_account(env: &Env, addr: &Address, account: &UserAccount) {
    env.storage()
        .persistent()
        .set(&DataKey::Account(addr.clone()), account);
}

pub fn get_escrow(env: &Env) -> i128 {
    env.storage().instance().get(&DataKey::Escrow).unwrap_or(0)
}

pub fn credit_escrow(env: &Env, amount: i128) {
    let balance = get_escrow(env);
    env.storage()
        .instance()
        .set(&DataKey::Escrow, &(balance + amount));
}

/// Reduce the escrow ledger. Fails when the requested amount exceeds what the
/// sale actually holds, so payouts can never dip into whitelist revenue that
/// was already forwarded.
pub fn debit_escrow(env: &Env, amount: i128) -> Result<(), Error> {
    let balance = get_escrow(env);
    if amount <= 0 || amount > balance {
        return Err(Error::InvalidValue);
    }
    env.storage()
        .instance()
        .set(&DataKey::Escrow, &(balance - amount));
    Ok(())
}
