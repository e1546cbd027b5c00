use soroban_sdk::{contracterror, contracttype, Address, BytesN};

#[derive(Clone)]
#[contracttype]
pub struct SaleConfig {
    pub collectible: Address,   // transferable collectible ledger
    pub badge: Address,         // participation badge issuer
    pub payment_token: Address, // token deposits are paid in
    pub max_total_supply: u64,
    pub whitelist_price: i128,
    pub public_price: i128,
}

/// The three admin-set boundaries of the sale. All-zero `start` means the
/// window is unset and the sale stays closed.
#[derive(Clone)]
#[contracttype]
pub struct PhaseWindow {
    pub start: u64,
    pub whitelist_end: u64,
    pub end: u64,
}

impl PhaseWindow {
    pub fn unset() -> Self {
        PhaseWindow {
            start: 0,
            whitelist_end: 0,
            end: 0,
        }
    }

    pub fn is_set(&self) -> bool {
        self.start != 0
    }

    /// Derive the phase from the window and the current time. The gap between
    /// `whitelist_end` and `end` is a deliberate blackout: deposits have
    /// stopped but settlement has not opened yet.
    pub fn phase(&self, now: u64) -> SalePhase {
        if !self.is_set() || now < self.start {
            SalePhase::Closed
        } else if now <= self.whitelist_end {
            SalePhase::Open
        } else if now < self.end {
            SalePhase::Closed
        } else {
            SalePhase::Settlement
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
pub enum SalePhase {
    Closed = 0,
    Open = 1,
    Settlement = 2,
}

/// Commitment roots for the three proof classes. A zero root disables the
/// class: no proof can satisfy it.
#[derive(Clone)]
#[contracttype]
pub struct Roots {
    pub eligibility: BytesN<32>,
    pub claim: BytesN<32>,
    pub refund: BytesN<32>,
}

#[derive(Clone)]
#[contracttype]
pub struct UserAccount {
    pub whitelist_deposited: bool,
    pub public_quantity: u64,
    pub claimed_whitelist: bool,
    pub claimed_quantity: u64,
    // Monotonic refunded-so-far counter. Not exposed through views; it exists
    // so a refund allowance cannot be consumed twice after public_quantity
    // has already been reduced.
    pub refunded_quantity: u64,
}

impl UserAccount {
    pub fn empty() -> Self {
        UserAccount {
            whitelist_deposited: false,
            public_quantity: 0,
            claimed_whitelist: false,
            claimed_quantity: 0,
            refunded_quantity: 0,
        }
    }
}

/// Public projection of `UserAccount`.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct UserData {
    pub whitelist_deposited: bool,
    pub public_quantity: u64,
    pub claimed_whitelist: bool,
    pub claimed_quantity: u64,
}

/// Aggregate mirrors of the per-account fields. Invariant: each field equals
/// the sum of the corresponding field across all accounts.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct GlobalStats {
    pub whitelist_deposits: u64,
    pub total_public_quantity: u64,
    pub whitelist_claims: u64,
    pub total_claimed_quantity: u64,
}

impl GlobalStats {
    pub fn empty() -> Self {
        GlobalStats {
            whitelist_deposits: 0,
            total_public_quantity: 0,
            whitelist_claims: 0,
            total_claimed_quantity: 0,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Config,
    Admin,
    Receiver,
    Window,
    Roots,
    BaseUri,
    Escrow,
    Stats,
    Account(Address),
}

/// Convert a payment amount into whole public units. The caller has already
/// checked divisibility; this guards the narrowing of the quotient.
pub(crate) fn units_of(amount: i128, price: i128) -> Result<u64, Error> {
    u64::try_from(amount / price).map_err(|_| Error::InvalidValue)
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    IncorrectState = 2,
    InvalidValue = 3,
    DepositedAlready = 4,
    MerkleProofFailed = 5,
    NothingToClaim = 6,
    TotalSupplyExceeded = 7,
    ParamsLengthMismatch = 8,
    InvalidTimestamp = 9,
    ZeroAddress = 10,
}
