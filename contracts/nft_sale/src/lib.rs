#![no_std]

mod contract;
mod merkle;
mod storage;
mod types;


pub use contract::{NftSaleContract, NftSaleContractClient};
pub use types::{Error, GlobalStats, PhaseWindow, Roots, SaleConfig, SalePhase, UserData};
