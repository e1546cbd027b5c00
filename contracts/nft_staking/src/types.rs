use soroban_sdk::{contracterror, contracttype, Address};

/// Who staked a token and when. Custody sits with the registry while a
/// record exists.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct StakeRecord {
    pub staker: Address,
    pub staked_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Collectible,
    /// All addresses with at least one staked token.
    Stakers,
    StakerIndex(Address),
    /// Token ids staked by an address.
    StakedIds(Address),
    StakedIndex(u64),
    Stake(u64),
    Lock(u64),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotAnOwner = 2,
    InvalidLength = 3,
    LockedToken = 4,
    UnstakedToken = 5,
}
