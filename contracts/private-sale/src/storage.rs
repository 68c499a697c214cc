use crate::types::{Contribution, DataKey, Error, Participant, Sale, VipCondition};
use soroban_sdk::{Address, BytesN, Env};

pub(crate) const DAY_IN_LEDGERS: u32 = 17280;
pub(crate) const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub(crate) const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub(crate) const RECORD_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub(crate) const RECORD_LIFETIME_THRESHOLD: u32 = RECORD_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn extend_record(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, RECORD_LIFETIME_THRESHOLD, RECORD_BUMP_AMOUNT);
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Owner)
}

pub fn get_owner(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(Error::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&DataKey::Owner, owner);
}

pub fn get_payment_token(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .ok_or(Error::NotInitialized)
}

pub fn set_payment_token(env: &Env, token: &Address) {
    env.storage().instance().set(&DataKey::PaymentToken, token);
}

pub fn get_vip_condition(env: &Env) -> Result<VipCondition, Error> {
    env.storage()
        .instance()
        .get(&DataKey::VipCondition)
        .ok_or(Error::NotInitialized)
}

pub fn set_vip_condition(env: &Env, condition: &VipCondition) {
    env.storage()
        .instance()
        .set(&DataKey::VipCondition, condition);
}

pub fn get_sale_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::SaleCount)
        .unwrap_or(0)
}

pub fn set_sale_count(env: &Env, count: u32) {
    env.storage().instance().set(&DataKey::SaleCount, &count);
}

pub fn get_sale(env: &Env, sale_id: u32) -> Option<Sale> {
    let key = DataKey::Sale(sale_id);
    let sale = env.storage().persistent().get(&key);
    if sale.is_some() {
        extend_record(env, &key);
    }
    sale
}

pub fn set_sale(env: &Env, sale: &Sale) {
    let key = DataKey::Sale(sale.id);
    env.storage().persistent().set(&key, sale);
    extend_record(env, &key);
}

pub fn get_sale_id(env: &Env, name: &BytesN<32>) -> Option<u32> {
    env.storage()
        .persistent()
        .get(&DataKey::SaleId(name.clone()))
}

pub fn set_sale_id(env: &Env, name: &BytesN<32>, sale_id: u32) {
    let key = DataKey::SaleId(name.clone());
    env.storage().persistent().set(&key, &sale_id);
    extend_record(env, &key);
}

pub fn get_contributor_count(env: &Env, sale_id: u32) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::SaleContributorCount(sale_id))
        .unwrap_or(0)
}

pub fn get_contributor(env: &Env, sale_id: u32, index: u32) -> Option<Address> {
    env.storage()
        .persistent()
        .get(&DataKey::SaleContributor(sale_id, index))
}

/// Append a contributor under the next index of the sale
pub fn add_contributor(env: &Env, sale_id: u32, contributor: &Address) {
    let index = get_contributor_count(env, sale_id);

    let key = DataKey::SaleContributor(sale_id, index);
    env.storage().persistent().set(&key, contributor);
    extend_record(env, &key);

    let count_key = DataKey::SaleContributorCount(sale_id);
    env.storage().persistent().set(&count_key, &(index + 1));
    extend_record(env, &count_key);
}

pub fn get_participant(env: &Env, address: &Address) -> Participant {
    env.storage()
        .persistent()
        .get(&DataKey::Participant(address.clone()))
        .unwrap_or_default()
}

pub fn set_participant(env: &Env, address: &Address, participant: &Participant) {
    let key = DataKey::Participant(address.clone());
    env.storage().persistent().set(&key, participant);
    extend_record(env, &key);
}

pub fn get_contribution(env: &Env, address: &Address, sale_id: u32) -> Option<Contribution> {
    env.storage()
        .persistent()
        .get(&DataKey::Contribution(address.clone(), sale_id))
}

pub fn set_contribution(env: &Env, address: &Address, sale_id: u32, contribution: &Contribution) {
    let key = DataKey::Contribution(address.clone(), sale_id);
    env.storage().persistent().set(&key, contribution);
    extend_record(env, &key);
}
