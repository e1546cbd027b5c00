#![no_std]

mod contract;
mod storage;
mod types;

#[cfg(test)]
mod test;

pub use contract::{CollectibleContract, CollectibleContractClient};
pub use types::Error;
