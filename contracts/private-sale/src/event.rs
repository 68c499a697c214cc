use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, Symbol};

use crate::types::{Sale, SaleState};

// Topic for sale lifecycle and settlement events.
pub const SALE: Symbol = symbol_short!("SALE");

// Topic for participant tier events.
pub const TIER: Symbol = symbol_short!("TIER");

pub const CREATE: Symbol = symbol_short!("CREATE");
pub const START: Symbol = symbol_short!("START");
pub const END: Symbol = symbol_short!("END");
pub const CONTRIB: Symbol = symbol_short!("CONTRIB");
pub const CLAIM: Symbol = symbol_short!("CLAIM");
pub const WITHDRAW: Symbol = symbol_short!("WITHDRAW");
pub const REGISTER: Symbol = symbol_short!("REGISTER");
pub const VIP: Symbol = symbol_short!("VIP");
pub const VIP_COND: Symbol = symbol_short!("VIP_COND");

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleCreated {
    pub sale: Sale,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleStarted {
    pub sale_id: u32,
    pub name: BytesN<32>,
    pub start_time: u64,
    pub end_time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SaleEnded {
    pub sale_id: u32,
    pub name: BytesN<32>,
    pub state: SaleState,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionAccepted {
    pub sale_id: u32,
    pub contributor: Address,
    pub value: i128,
    pub units: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimSettled {
    pub sale_id: u32,
    pub participant: Address,
    pub refunded: i128,
    pub units: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ProceedsWithdrawn {
    pub sale_id: u32,
    pub owner: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParticipantRegistered {
    pub participant: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VipGranted {
    pub participant: Address,
    pub total_deposited: i128,
    pub contribution_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VipConditionChanged {
    pub deposit_amount_threshold: i128,
    pub deposit_count_threshold: u32,
}

pub fn sale_created(env: &Env, sale: &Sale) {
    env.events()
        .publish((SALE, CREATE), SaleCreated { sale: sale.clone() });
}

pub fn sale_started(env: &Env, sale: &Sale) {
    env.events().publish(
        (SALE, START),
        SaleStarted {
            sale_id: sale.id,
            name: sale.name.clone(),
            start_time: sale.start_time,
            end_time: sale.end_time,
        },
    );
}

pub fn sale_ended(env: &Env, sale: &Sale) {
    env.events().publish(
        (SALE, END),
        SaleEnded {
            sale_id: sale.id,
            name: sale.name.clone(),
            state: sale.state,
            total_raised: sale.total_raised,
        },
    );
}
