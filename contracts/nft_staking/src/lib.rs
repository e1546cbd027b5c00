#![no_std]

mod contract;
mod storage;
mod types;


pub use contract::{NftStakingContract, NftStakingContractClient};
pub use types::{Error, StakeRecord};
