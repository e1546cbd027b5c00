use soroban_sdk::{contracterror, contracttype, Address};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Admin,
    Name,
    Symbol,
    TokenCounter,
    Minter(Address),
    TokenOwner(u64),
    OwnerTokens(Address),
    OwnerTokenIndex(u64),
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    TokenNotFound = 3,
    NotTokenOwner = 4,
    InvalidQuantity = 5,
}
