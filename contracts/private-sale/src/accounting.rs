use crate::access::AccessManager;
use crate::distribution;
use crate::event::{ClaimSettled, ContributionAccepted, ProceedsWithdrawn, CLAIM, CONTRIB, SALE, WITHDRAW};
use crate::sale::SaleManager;
use crate::storage;
use crate::types::{Error, Sale, SaleState};
use soroban_sdk::{log, Address, BytesN, Env};

pub struct AccountingManager;

impl AccountingManager {
    /// Accept a payment-token contribution and reserve reward units for it.
    ///
    /// All counters are written before the payment is pulled into custody.
    pub fn contribute(
        env: &Env,
        contributor: &Address,
        name: &BytesN<32>,
        value: i128,
    ) -> Result<i128, Error> {
        contributor.require_auth();
        let payment_token = storage::get_payment_token(env)?;
        storage::extend_instance(env);

        let mut sale = SaleManager::get_sale_by_name(env, name)?;
        let units = Self::check_contribution(env, &sale, contributor, value)?;

        // Effects
        sale.remaining_units -= units;
        sale.total_raised = sale
            .total_raised
            .checked_add(value)
            .ok_or(Error::InputInvalid)?;
        sale.contribution_count += 1;
        storage::set_sale(env, &sale);

        let mut contribution = match storage::get_contribution(env, contributor, sale.id) {
            Some(contribution) => contribution,
            None => {
                storage::add_contributor(env, sale.id, contributor);
                Default::default()
            }
        };
        contribution.amount_deposited += value;
        contribution.units_reserved += units;
        storage::set_contribution(env, contributor, sale.id, &contribution);

        let mut participant = storage::get_participant(env, contributor);
        participant.total_deposited = participant
            .total_deposited
            .checked_add(value)
            .ok_or(Error::InputInvalid)?;
        participant.contribution_count += 1;
        storage::set_participant(env, contributor, &participant);

        // Interaction
        distribution::transfer_to_contract(env, &payment_token, contributor, &value);

        env.events().publish(
            (SALE, CONTRIB),
            ContributionAccepted {
                sale_id: sale.id,
                contributor: contributor.clone(),
                value,
                units,
            },
        );

        Ok(units)
    }

    /// Units a contribution of `value` from `contributor` would reserve now
    pub fn quote_units(
        env: &Env,
        name: &BytesN<32>,
        contributor: &Address,
        value: i128,
    ) -> Result<i128, Error> {
        let sale = SaleManager::get_sale_by_name(env, name)?;
        let record = storage::get_participant(env, contributor);
        let bonus = AccessManager::bonus_percent(
            &record,
            sale.join_bonus_percent,
            sale.vip_bonus_percent,
        )?;
        sale.units_for(value, bonus)
    }

    /// Settle a participant's contribution: refund on a canceled sale,
    /// reward units on a finalized one. Returns the amount paid out.
    pub fn claim(env: &Env, participant: &Address, name: &BytesN<32>) -> Result<i128, Error> {
        participant.require_auth();
        let payment_token = storage::get_payment_token(env)?;
        storage::extend_instance(env);

        let mut sale = SaleManager::get_sale_by_name(env, name)?;
        if !sale.is_settled() {
            return Err(Error::SaleNotOver);
        }

        let mut contribution =
            storage::get_contribution(env, participant, sale.id).ok_or(Error::NoDeposit)?;
        if contribution.settled {
            return Err(Error::AlreadyClaimed);
        }

        let owner = storage::get_owner(env)?;
        if sale.state == SaleState::Finalized
            && distribution::allowance_from_owner(env, &sale.reward_token, &owner)
                < contribution.units_reserved
        {
            return Err(Error::InsufficientAllowance);
        }

        contribution.settled = true;
        storage::set_contribution(env, participant, sale.id, &contribution);

        let (refunded, units) = match sale.state {
            SaleState::Canceled => {
                sale.total_raised -= contribution.amount_deposited;
                sale.remaining_units += contribution.units_reserved;
                storage::set_sale(env, &sale);

                distribution::transfer_from_contract(
                    env,
                    &payment_token,
                    participant,
                    &contribution.amount_deposited,
                );
                (contribution.amount_deposited, 0)
            }
            _ => {
                distribution::transfer_from_owner(
                    env,
                    &sale.reward_token,
                    &owner,
                    participant,
                    &contribution.units_reserved,
                );
                (0, contribution.units_reserved)
            }
        };

        log!(env, "sale {} settled: refunded {}, units {}", sale.id, refunded, units);
        env.events().publish(
            (SALE, CLAIM),
            ClaimSettled {
                sale_id: sale.id,
                participant: participant.clone(),
                refunded,
                units,
            },
        );

        Ok(refunded + units)
    }

    /// Transfer a finalized sale's proceeds to the owner, once
    pub fn withdraw(env: &Env, caller: &Address, name: &BytesN<32>) -> Result<i128, Error> {
        AccessManager::verify_owner(env, caller)?;

        let mut sale = SaleManager::get_sale_by_name(env, name)?;
        if sale.state != SaleState::Finalized {
            return Err(Error::SaleNotFinalized);
        }
        if sale.total_raised == 0 {
            return Err(Error::AlreadyWithdrawn);
        }

        let amount = sale.total_raised;
        sale.total_raised = 0;
        sale.withdrawn = amount;
        storage::set_sale(env, &sale);

        let payment_token = storage::get_payment_token(env)?;
        distribution::transfer_from_contract(env, &payment_token, caller, &amount);

        env.events().publish(
            (SALE, WITHDRAW),
            ProceedsWithdrawn {
                sale_id: sale.id,
                owner: caller.clone(),
                amount,
            },
        );

        Ok(amount)
    }

    fn check_contribution(
        env: &Env,
        sale: &Sale,
        contributor: &Address,
        value: i128,
    ) -> Result<i128, Error> {
        if sale.state != SaleState::Active {
            return Err(Error::SaleNotActive);
        }
        if sale.has_elapsed(env) {
            return Err(Error::SaleIsOver);
        }
        if value < sale.min_contribution || value > sale.max_contribution {
            return Err(Error::InputInvalid);
        }

        let record = storage::get_participant(env, contributor);
        let bonus = AccessManager::bonus_percent(
            &record,
            sale.join_bonus_percent,
            sale.vip_bonus_percent,
        )?;

        let units = sale.units_for(value, bonus)?;
        if units > sale.remaining_units {
            return Err(Error::InsufficientSupplyInSale);
        }

        Ok(units)
    }
}
