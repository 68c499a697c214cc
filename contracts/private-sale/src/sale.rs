use crate::access::AccessManager;
use crate::event;
use crate::storage;
use crate::types::{Error, Sale, SaleConfig, SaleState, MAX_CONTRIBUTORS_PAGE};
use soroban_sdk::{log, Address, BytesN, Env, Vec};

pub struct SaleManager;

impl SaleManager {
    /// Create a new sale in the Created state
    pub fn create_sale(
        env: &Env,
        caller: &Address,
        config: SaleConfig,
        reward_token: Address,
    ) -> Result<u32, Error> {
        AccessManager::verify_owner(env, caller)?;

        if storage::get_sale_id(env, &config.name).is_some() {
            return Err(Error::SaleAlreadyExists);
        }

        config.validate()?;

        let sale_id = storage::get_sale_count(env) + 1;

        let sale = Sale {
            id: sale_id,
            name: config.name.clone(),
            max_units: config.max_units,
            remaining_units: config.max_units,
            soft_goal: config.soft_goal,
            min_contribution: config.min_contribution,
            max_contribution: config.max_contribution,
            total_raised: 0,
            withdrawn: 0,
            start_time: 0,
            end_time: 0,
            contribution_count: 0,
            rate: config.rate,
            join_bonus_percent: config.join_bonus_percent,
            vip_bonus_percent: config.vip_bonus_percent,
            state: SaleState::Created,
            reward_token,
        };

        storage::set_sale(env, &sale);
        storage::set_sale_id(env, &config.name, sale_id);
        storage::set_sale_count(env, sale_id);

        event::sale_created(env, &sale);

        Ok(sale_id)
    }

    /// Open a Created sale for `duration` seconds starting now
    pub fn start_sale(
        env: &Env,
        caller: &Address,
        name: &BytesN<32>,
        duration: u64,
    ) -> Result<(), Error> {
        AccessManager::verify_owner(env, caller)?;

        let mut sale = Self::get_sale_by_name(env, name)?;

        if duration == 0 {
            return Err(Error::InputInvalid);
        }
        if sale.state != SaleState::Created {
            return Err(Error::SaleAlreadyStarted);
        }

        let now = env.ledger().timestamp();
        sale.start_time = now;
        sale.end_time = now.checked_add(duration).ok_or(Error::InputInvalid)?;
        sale.state = SaleState::Active;

        storage::set_sale(env, &sale);

        log!(env, "sale {} active until {}", sale.id, sale.end_time);
        event::sale_started(env, &sale);

        Ok(())
    }

    /// Close an Active sale whose window has elapsed
    pub fn end_sale(env: &Env, caller: &Address, name: &BytesN<32>) -> Result<SaleState, Error> {
        AccessManager::verify_owner(env, caller)?;

        let mut sale = Self::get_sale_by_name(env, name)?;

        if sale.state != SaleState::Active {
            return Err(Error::SaleNotActive);
        }
        if !sale.has_elapsed(env) {
            return Err(Error::SaleNotOver);
        }

        sale.state = if sale.total_raised >= sale.soft_goal {
            SaleState::Finalized
        } else {
            SaleState::Canceled
        };

        storage::set_sale(env, &sale);

        log!(
            env,
            "sale {} closed with {} raised against goal {}",
            sale.id,
            sale.total_raised,
            sale.soft_goal
        );
        event::sale_ended(env, &sale);

        Ok(sale.state)
    }

    /// Get sale details
    pub fn get_sale(env: &Env, sale_id: u32) -> Result<Sale, Error> {
        storage::get_sale(env, sale_id).ok_or(Error::SaleNotExist)
    }

    pub fn get_sale_id(env: &Env, name: &BytesN<32>) -> Result<u32, Error> {
        storage::get_sale_id(env, name).ok_or(Error::SaleNotExist)
    }

    pub fn get_sale_by_name(env: &Env, name: &BytesN<32>) -> Result<Sale, Error> {
        let sale_id = Self::get_sale_id(env, name)?;
        Self::get_sale(env, sale_id)
    }

    pub fn get_contributor_count(env: &Env, sale_id: u32) -> Result<u32, Error> {
        Self::get_sale(env, sale_id)?;
        Ok(storage::get_contributor_count(env, sale_id))
    }

    /// Contributors in first-contribution order, from `start`, at most
    /// `limit` (capped at MAX_CONTRIBUTORS_PAGE) per call
    pub fn get_contributors(
        env: &Env,
        sale_id: u32,
        start: u32,
        limit: u32,
    ) -> Result<Vec<Address>, Error> {
        let count = Self::get_contributor_count(env, sale_id)?;
        let end = start
            .saturating_add(limit.min(MAX_CONTRIBUTORS_PAGE))
            .min(count);

        let mut page = Vec::new(env);
        for index in start..end {
            if let Some(contributor) = storage::get_contributor(env, sale_id, index) {
                page.push_back(contributor);
            }
        }
        Ok(page)
    }
}

impl SaleConfig {
    pub fn validate(&self) -> Result<(), Error> {
        if self.max_units <= 0 || self.rate <= 0 || self.soft_goal < 0 {
            return Err(Error::InputInvalid);
        }

        if self.min_contribution <= 0 || self.min_contribution > self.max_contribution {
            return Err(Error::InputInvalid);
        }

        Ok(())
    }
}

impl Sale {
    /// Closure is lazy: an Active sale stops accepting contributions once
    /// `end_time` passes, before `end_sale` is called.
    pub fn has_elapsed(&self, env: &Env) -> bool {
        env.ledger().timestamp() >= self.end_time
    }

    pub fn is_settled(&self) -> bool {
        matches!(self.state, SaleState::Canceled | SaleState::Finalized)
    }

    /// Units reserved for `value` at `bonus_percent`, rounded down
    pub fn units_for(&self, value: i128, bonus_percent: u32) -> Result<i128, Error> {
        value
            .checked_mul(self.rate)
            .and_then(|base| base.checked_mul(100 + bonus_percent as i128))
            .map(|scaled| scaled / 100)
            .ok_or(Error::InputInvalid)
    }
}
