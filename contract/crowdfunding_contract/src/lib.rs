#![no_std]
#![allow(deprecated)]


mod events;
mod settlement;
mod storage;
mod storage_types;
mod utils;

pub use storage_types::{
    Campaign, CampaignId, CampaignStatus, CrowdfundingError, MAX_CONTRIBUTORS,
    MAX_DESCRIPTION_LEN, MAX_IMAGE_REFERENCE_LEN, MAX_TITLE_LEN,
};

use events::{
    CampaignCanceledEvent, CampaignCreatedEvent, CampaignFundedEvent, FundsWithdrawnEvent,
};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};
use storage_types::DataKey;
use utils::{checked_add, validate_contribution, validate_metadata, validate_target};

#[contract]
pub struct CrowdfundingContract;

#[contractimpl]
impl CrowdfundingContract {
    /// Initialize the ledger with its admin and the settlement token used for
    /// every contribution, withdrawal and refund.
    pub fn initialize(e: Env, admin: Address, token: Address) -> Result<(), CrowdfundingError> {
        if storage::is_initialized(&e) {
            return Err(CrowdfundingError::AlreadyInitialized);
        }
        admin.require_auth();

        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Token, &token);
        e.storage().instance().set(&DataKey::Paused, &false);
        e.storage().instance().set(&DataKey::NextCampaignId, &1u64);
        storage::extend_instance(&e);

        Ok(())
    }

    /// Create a new campaign owned by `fundraiser`.
    pub fn create_campaign(
        e: Env,
        fundraiser: Address,
        title: String,
        description: String,
        image_reference: String,
        target_amount: i128,
    ) -> Result<CampaignId, CrowdfundingError> {
        fundraiser.require_auth();
        storage::check_not_paused(&e)?;
        validate_target(target_amount)?;
        validate_metadata(&title, &description, &image_reference)?;

        let campaign_id = storage::next_campaign_id(&e)?;
        let campaign = Campaign {
            id: campaign_id,
            fundraiser: fundraiser.clone(),
            title,
            description,
            image_reference,
            target_amount,
            total_funded: 0,
            total_withdrawn: 0,
            total_refunded: 0,
            status: CampaignStatus::Active,
            created_at: e.ledger().timestamp(),
        };

        storage::save_campaign(&e, &campaign);
        storage::index_fundraiser_campaign(&e, &fundraiser, campaign_id);

        log!(&e, "campaign {} created, target {}", campaign_id, target_amount);

        events::emit_campaign_created(
            &e,
            CampaignCreatedEvent {
                campaign_id,
                fundraiser,
                target_amount,
            },
        );

        Ok(campaign_id)
    }

    /// Contribute `amount` to an active campaign. The transfer into escrow and
    /// the bookkeeping land in the same invocation.
    pub fn fund_campaign(
        e: Env,
        campaign_id: CampaignId,
        amount: i128,
        contributor: Address,
    ) -> Result<(), CrowdfundingError> {
        contributor.require_auth();
        storage::check_not_paused(&e)?;

        let mut campaign = storage::load_campaign(&e, campaign_id)?;
        if !campaign.is_active() {
            return Err(CrowdfundingError::CampaignNotActive);
        }
        validate_contribution(amount)?;

        let contributed = storage::read_contribution(&e, campaign_id, &contributor);
        campaign.total_funded = checked_add(campaign.total_funded, amount)?;
        let contributed = checked_add(contributed, amount)?;

        storage::track_contributor(&e, campaign_id, &contributor)?;
        storage::write_contribution(&e, campaign_id, &contributor, contributed);
        storage::save_campaign(&e, &campaign);

        settlement::collect(&e, &contributor, amount)?;

        log!(&e, "campaign {} funded with {}", campaign_id, amount);

        events::emit_campaign_funded(
            &e,
            CampaignFundedEvent {
                campaign_id,
                contributor,
                amount,
                total_funded: campaign.total_funded,
            },
        );

        Ok(())
    }

    /// Pay `amount` out of the campaign's pool to its fundraiser. Individual
    /// contribution records are left untouched.
    pub fn withdraw_funds(
        e: Env,
        campaign_id: CampaignId,
        amount: i128,
        caller: Address,
    ) -> Result<(), CrowdfundingError> {
        caller.require_auth();
        storage::check_not_paused(&e)?;

        let mut campaign = storage::load_campaign(&e, campaign_id)?;
        if caller != campaign.fundraiser {
            return Err(CrowdfundingError::Unauthorized);
        }
        if !campaign.is_active() {
            return Err(CrowdfundingError::CampaignNotActive);
        }
        if amount <= 0 || amount > campaign.available_balance() {
            return Err(CrowdfundingError::InsufficientFunds);
        }

        campaign.total_withdrawn = checked_add(campaign.total_withdrawn, amount)?;
        storage::save_campaign(&e, &campaign);

        settlement::pay_out(&e, &caller, amount)?;

        log!(&e, "campaign {} withdrew {}", campaign_id, amount);

        events::emit_funds_withdrawn(
            &e,
            FundsWithdrawnEvent {
                campaign_id,
                fundraiser: caller,
                amount,
                total_withdrawn: campaign.total_withdrawn,
            },
        );

        Ok(())
    }

    /// Cancel an active campaign and refund every contributor in full.
    ///
    /// Refused once the fundraiser has withdrawn anything, so the pool always
    /// covers the refunds. Not subject to the pause switch.
    pub fn cancel_campaign(
        e: Env,
        campaign_id: CampaignId,
        caller: Address,
    ) -> Result<(), CrowdfundingError> {
        caller.require_auth();

        let mut campaign = storage::load_campaign(&e, campaign_id)?;
        if caller != campaign.fundraiser {
            return Err(CrowdfundingError::Unauthorized);
        }
        if !campaign.is_active() {
            return Err(CrowdfundingError::AlreadyFinalized);
        }
        if campaign.total_withdrawn > 0 {
            return Err(CrowdfundingError::WithdrawalsRecorded);
        }

        campaign.status = CampaignStatus::Canceled;
        let refund_count = settlement::refund_contributors(&e, &mut campaign)?;
        storage::save_campaign(&e, &campaign);

        log!(&e, "campaign {} canceled, {} refunds", campaign_id, refund_count);

        events::emit_campaign_canceled(
            &e,
            CampaignCanceledEvent {
                campaign_id,
                fundraiser: caller,
                total_refunded: campaign.total_refunded,
                refund_count,
            },
        );

        Ok(())
    }

    pub fn pause(e: Env, caller: Address) -> Result<(), CrowdfundingError> {
        Self::require_admin(&e, &caller)?;
        storage::set_paused(&e, true);
        events::emit_contract_paused(&e, caller);
        Ok(())
    }

    pub fn unpause(e: Env, caller: Address) -> Result<(), CrowdfundingError> {
        Self::require_admin(&e, &caller)?;
        storage::set_paused(&e, false);
        events::emit_contract_unpaused(&e, caller);
        Ok(())
    }

    /// View functions
    pub fn get_campaign_details(
        e: Env,
        campaign_id: CampaignId,
    ) -> Result<Campaign, CrowdfundingError> {
        storage::load_campaign(&e, campaign_id)
    }

    /// Amount currently owed to `contributor` should the campaign be canceled.
    pub fn get_contribution(
        e: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, CrowdfundingError> {
        storage::load_campaign(&e, campaign_id)?;
        Ok(storage::read_contribution(&e, campaign_id, &contributor))
    }

    pub fn get_contributors(
        e: Env,
        campaign_id: CampaignId,
    ) -> Result<Vec<Address>, CrowdfundingError> {
        storage::load_campaign(&e, campaign_id)?;
        Ok(storage::read_contributors(&e, campaign_id))
    }

    pub fn get_available_balance(
        e: Env,
        campaign_id: CampaignId,
    ) -> Result<i128, CrowdfundingError> {
        let campaign = storage::load_campaign(&e, campaign_id)?;
        Ok(campaign.available_balance())
    }

    pub fn get_campaigns_by_fundraiser(e: Env, fundraiser: Address) -> Vec<CampaignId> {
        storage::read_fundraiser_campaigns(&e, &fundraiser)
    }

    pub fn get_campaign_count(e: Env) -> u64 {
        storage::campaign_count(&e)
    }

    pub fn get_admin(e: Env) -> Result<Address, CrowdfundingError> {
        storage::read_admin(&e)
    }

    pub fn get_token(e: Env) -> Result<Address, CrowdfundingError> {
        storage::read_token(&e)
    }

    pub fn is_paused(e: Env) -> bool {
        storage::is_paused(&e)
    }
}

impl CrowdfundingContract {
    fn require_admin(e: &Env, caller: &Address) -> Result<(), CrowdfundingError> {
        caller.require_auth();
        let admin = storage::read_admin(e)?;
        if *caller != admin {
            return Err(CrowdfundingError::Unauthorized);
        }
        Ok(())
    }
}
