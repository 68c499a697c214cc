use crate::event::{ParticipantRegistered, VipConditionChanged, VipGranted, REGISTER, TIER, VIP, VIP_COND};
use crate::storage;
use crate::types::{Error, Participant, VipCondition};
use soroban_sdk::{log, Address, Env};

pub struct AccessManager;

impl AccessManager {
    /// Verify that `caller` is the contract owner and has signed the call
    pub fn verify_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        let owner = storage::get_owner(env)?;
        caller.require_auth();

        if caller != &owner {
            return Err(Error::NotOwner);
        }

        storage::extend_instance(env);
        Ok(())
    }

    /// Register an address as a participant
    pub fn register(env: &Env, caller: &Address, participant: &Address) -> Result<(), Error> {
        Self::verify_owner(env, caller)?;

        let mut record = storage::get_participant(env, participant);
        if record.registered {
            return Err(Error::AlreadyParticipant);
        }

        record.registered = true;
        storage::set_participant(env, participant, &record);

        env.events().publish(
            (TIER, REGISTER),
            ParticipantRegistered {
                participant: participant.clone(),
            },
        );
        Ok(())
    }

    /// Promote a registered participant whose deposit history meets the VIP condition
    pub fn register_vip(env: &Env, caller: &Address, participant: &Address) -> Result<(), Error> {
        Self::verify_owner(env, caller)?;

        let mut record = storage::get_participant(env, participant);
        if !record.registered {
            return Err(Error::NotParticipant);
        }
        if record.vip {
            return Err(Error::AlreadyVip);
        }

        let condition = storage::get_vip_condition(env)?;
        if !Self::meets_condition(&record, &condition) {
            log!(
                env,
                "vip rejected: deposited {} of {}, count {} of {}",
                record.total_deposited,
                condition.deposit_amount_threshold,
                record.contribution_count,
                condition.deposit_count_threshold
            );
            return Err(Error::VipConditionUnsatisfied);
        }

        record.vip = true;
        storage::set_participant(env, participant, &record);

        env.events().publish(
            (TIER, VIP),
            VipGranted {
                participant: participant.clone(),
                total_deposited: record.total_deposited,
                contribution_count: record.contribution_count,
            },
        );
        Ok(())
    }

    /// Replace both VIP thresholds. Existing VIPs keep their status.
    pub fn change_vip_condition(
        env: &Env,
        caller: &Address,
        amount_threshold: i128,
        count_threshold: u32,
    ) -> Result<(), Error> {
        Self::verify_owner(env, caller)?;

        if amount_threshold < 0 {
            return Err(Error::InputInvalid);
        }

        let condition = VipCondition {
            deposit_amount_threshold: amount_threshold,
            deposit_count_threshold: count_threshold,
        };
        storage::set_vip_condition(env, &condition);

        env.events().publish(
            (TIER, VIP_COND),
            VipConditionChanged {
                deposit_amount_threshold: amount_threshold,
                deposit_count_threshold: count_threshold,
            },
        );
        Ok(())
    }

    /// Bonus percent applied to a contribution from this participant.
    /// Unregistered addresses cannot contribute.
    pub fn bonus_percent(
        record: &Participant,
        join_bonus_percent: u32,
        vip_bonus_percent: u32,
    ) -> Result<u32, Error> {
        if !record.registered {
            return Err(Error::NotParticipant);
        }
        if record.vip {
            Ok(vip_bonus_percent)
        } else {
            Ok(join_bonus_percent)
        }
    }

    pub fn meets_condition(record: &Participant, condition: &VipCondition) -> bool {
        record.total_deposited >= condition.deposit_amount_threshold
            && record.contribution_count >= condition.deposit_count_threshold
    }

    pub fn is_participant(env: &Env, address: &Address) -> bool {
        storage::get_participant(env, address).registered
    }

    pub fn is_vip(env: &Env, address: &Address) -> bool {
        storage::get_participant(env, address).vip
    }
}
