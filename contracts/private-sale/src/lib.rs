#![no_std]
use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, Symbol, Vec};

mod access;
mod accounting;
mod distribution;
mod event;
mod sale;
mod storage;
mod types;

use crate::access::AccessManager;
use crate::accounting::AccountingManager;
use crate::sale::SaleManager;
pub use crate::event::*;
pub use crate::types::*;

#[contract]
pub struct PrivateSaleContract;

#[contractimpl]
impl PrivateSaleContract {
    /// Initialize the contract with its owner and the native asset contract
    /// that contributions are paid in
    pub fn initialize(env: Env, owner: Address, payment_token: Address) -> Result<(), Error> {
        if storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();
        storage::set_owner(&env, &owner);
        storage::set_payment_token(&env, &payment_token);
        storage::set_vip_condition(
            &env,
            &VipCondition {
                deposit_amount_threshold: DEFAULT_DEPOSIT_AMOUNT_THRESHOLD,
                deposit_count_threshold: DEFAULT_DEPOSIT_COUNT_THRESHOLD,
            },
        );
        storage::set_sale_count(&env, 0);
        storage::extend_instance(&env);

        env.events()
            .publish((Symbol::new(&env, "init"),), (owner, payment_token));
        Ok(())
    }

    // Sale lifecycle

    /// Create a sale (owner only). Returns the new sale ID.
    ///
    /// Finalized claims are paid from the owner's `reward_token` balance, so the
    /// owner must approve this contract for the reserved units before claims
    /// open; short allowances fail with `InsufficientAllowance`.
    pub fn create_sale(
        env: Env,
        caller: Address,
        config: SaleConfig,
        reward_token: Address,
    ) -> Result<u32, Error> {
        SaleManager::create_sale(&env, &caller, config, reward_token)
    }

    /// Start a created sale for `duration` seconds (owner only)
    pub fn start_sale(
        env: Env,
        caller: Address,
        name: BytesN<32>,
        duration: u64,
    ) -> Result<(), Error> {
        SaleManager::start_sale(&env, &caller, &name, duration)
    }

    /// Close an active sale after its end time (owner only)
    pub fn end_sale(env: Env, caller: Address, name: BytesN<32>) -> Result<SaleState, Error> {
        SaleManager::end_sale(&env, &caller, &name)
    }

    // Contributions and settlement

    /// Contribute `value` of the payment token to an active sale.
    /// Returns the reward units reserved.
    pub fn contribute(
        env: Env,
        contributor: Address,
        name: BytesN<32>,
        value: i128,
    ) -> Result<i128, Error> {
        AccountingManager::contribute(&env, &contributor, &name, value)
    }

    /// Refund or reward a contribution once the sale is closed
    pub fn claim(env: Env, participant: Address, name: BytesN<32>) -> Result<i128, Error> {
        AccountingManager::claim(&env, &participant, &name)
    }

    /// Send a finalized sale's proceeds to the owner (owner only)
    pub fn withdraw(env: Env, caller: Address, name: BytesN<32>) -> Result<i128, Error> {
        AccountingManager::withdraw(&env, &caller, &name)
    }

    // Participant tiers

    pub fn register(env: Env, caller: Address, participant: Address) -> Result<(), Error> {
        AccessManager::register(&env, &caller, &participant)
    }

    pub fn register_vip(env: Env, caller: Address, participant: Address) -> Result<(), Error> {
        AccessManager::register_vip(&env, &caller, &participant)
    }

    pub fn change_vip_condition(
        env: Env,
        caller: Address,
        amount_threshold: i128,
        count_threshold: u32,
    ) -> Result<(), Error> {
        AccessManager::change_vip_condition(&env, &caller, amount_threshold, count_threshold)
    }

    // Queries

    pub fn get_owner(env: Env) -> Result<Address, Error> {
        storage::get_owner(&env)
    }

    pub fn get_payment_token(env: Env) -> Result<Address, Error> {
        storage::get_payment_token(&env)
    }

    pub fn get_sale(env: Env, sale_id: u32) -> Result<Sale, Error> {
        SaleManager::get_sale(&env, sale_id)
    }

    pub fn get_sale_by_name(env: Env, name: BytesN<32>) -> Result<Sale, Error> {
        SaleManager::get_sale_by_name(&env, &name)
    }

    pub fn get_sale_id(env: Env, name: BytesN<32>) -> Result<u32, Error> {
        SaleManager::get_sale_id(&env, &name)
    }

    pub fn get_sale_count(env: Env) -> u32 {
        storage::get_sale_count(&env)
    }

    pub fn get_contribution(env: Env, participant: Address, sale_id: u32) -> Option<Contribution> {
        storage::get_contribution(&env, &participant, sale_id)
    }

    pub fn get_contributor_count(env: Env, sale_id: u32) -> Result<u32, Error> {
        SaleManager::get_contributor_count(&env, sale_id)
    }

    /// One page of a sale's contributors, in first-contribution order
    pub fn get_contributors(
        env: Env,
        sale_id: u32,
        start: u32,
        limit: u32,
    ) -> Result<Vec<Address>, Error> {
        SaleManager::get_contributors(&env, sale_id, start, limit)
    }

    /// Units a contribution would reserve at the participant's current tier
    pub fn quote_units(
        env: Env,
        name: BytesN<32>,
        participant: Address,
        value: i128,
    ) -> Result<i128, Error> {
        AccountingManager::quote_units(&env, &name, &participant, value)
    }

    pub fn get_participant(env: Env, address: Address) -> Participant {
        storage::get_participant(&env, &address)
    }

    pub fn is_participant(env: Env, address: Address) -> bool {
        AccessManager::is_participant(&env, &address)
    }

    pub fn is_vip(env: Env, address: Address) -> bool {
        AccessManager::is_vip(&env, &address)
    }

    pub fn get_vip_condition(env: Env) -> Result<VipCondition, Error> {
        storage::get_vip_condition(&env)
    }

    pub fn get_deposit_amount_threshold(env: Env) -> Result<i128, Error> {
        Ok(storage::get_vip_condition(&env)?.deposit_amount_threshold)
    }

    pub fn get_deposit_count_threshold(env: Env) -> Result<u32, Error> {
        Ok(storage::get_vip_condition(&env)?.deposit_count_threshold)
    }
}
