use soroban_sdk::{contracterror, contracttype, Address, BytesN};

/// Storage keys for contract data
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,                         // Contract administrator
    PaymentToken,                  // Native asset contract used for contributions
    VipCondition,                  // Thresholds for VIP promotion
    SaleCount,                     // Counter for sale IDs
    Sale(u32),                     // Sale ID -> Sale
    SaleId(BytesN<32>),            // Sale name -> Sale ID
    SaleContributorCount(u32),     // Sale ID -> number of distinct contributors
    SaleContributor(u32, u32),     // (Sale ID, index) -> Address
    Participant(Address),          // Address -> Participant
    Contribution(Address, u32),    // (Address, Sale ID) -> Contribution
}

/// Lifecycle of a sale. Discriminants are part of the public interface.
#[contracttype]
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SaleState {
    Created = 0,   // Configured, not yet accepting contributions
    Active = 1,    // Accepting contributions until end_time
    Canceled = 2,  // Closed below the soft goal, contributions refundable
    Finalized = 3, // Closed at or above the soft goal, units claimable
}

/// Owner-supplied terms of a new sale
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleConfig {
    pub name: BytesN<32>,
    pub max_units: i128,
    pub soft_goal: i128,
    pub min_contribution: i128,
    pub max_contribution: i128,
    pub rate: i128, // Reward units per unit of payment token, before bonus
    pub join_bonus_percent: u32,
    pub vip_bonus_percent: u32,
}

/// A fixed-term fundraising sale
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Sale {
    pub id: u32,
    pub name: BytesN<32>,
    pub max_units: i128,
    pub remaining_units: i128,
    pub soft_goal: i128,
    pub min_contribution: i128,
    pub max_contribution: i128,
    pub total_raised: i128,
    pub withdrawn: i128,
    pub start_time: u64,
    pub end_time: u64,
    pub contribution_count: u32,
    pub rate: i128,
    pub join_bonus_percent: u32,
    pub vip_bonus_percent: u32,
    pub state: SaleState,
    pub reward_token: Address,
}

/// Tier record of an address
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Participant {
    pub registered: bool,
    pub vip: bool,
    pub total_deposited: i128,   // Across all sales, never reduced by refunds
    pub contribution_count: u32, // Across all sales
}

/// Deposit of one participant into one sale
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Contribution {
    pub amount_deposited: i128,
    pub units_reserved: i128,
    pub settled: bool,
}

/// Thresholds a registered participant must meet to be promoted to VIP
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VipCondition {
    pub deposit_amount_threshold: i128,
    pub deposit_count_threshold: u32,
}

pub const DEFAULT_DEPOSIT_AMOUNT_THRESHOLD: i128 = 10_000;
pub const DEFAULT_DEPOSIT_COUNT_THRESHOLD: u32 = 2;

/// Upper bound on the addresses returned by one `get_contributors` page
pub const MAX_CONTRIBUTORS_PAGE: u32 = 100;

/// Contract error types
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    NotInitialized = 1,            // Contract not initialized
    AlreadyInitialized = 2,        // Contract already setup
    NotOwner = 3,                  // Caller is not the owner
    SaleNotExist = 4,              // Unknown sale
    SaleAlreadyExists = 5,         // Sale name already registered
    NotParticipant = 6,            // Address is not registered
    NoDeposit = 7,                 // No contribution to settle
    SaleNotActive = 8,             // Sale is not accepting contributions
    SaleIsOver = 9,                // Sale window has elapsed
    SaleNotOver = 10,              // Sale window still open or sale not closed
    SaleNotFinalized = 11,         // Sale did not reach its soft goal
    SaleAlreadyStarted = 12,       // Sale left the Created state
    AlreadyParticipant = 13,       // Address already registered
    AlreadyVip = 14,               // Address already VIP
    AlreadyClaimed = 15,           // Contribution already settled
    AlreadyWithdrawn = 16,         // Proceeds already withdrawn
    InputInvalid = 17,             // Invalid amount, duration or config
    InsufficientSupplyInSale = 18, // Not enough units left
    VipConditionUnsatisfied = 19,  // Deposit totals below thresholds
    InsufficientAllowance = 20,    // Owner has not approved enough reward units
}
