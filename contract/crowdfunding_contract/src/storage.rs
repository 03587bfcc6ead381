use soroban_sdk::{Address, Env, Vec};

use crate::storage_types::{
    Campaign, CampaignId, CrowdfundingError, DataKey, PersistentKey, MAX_CONTRIBUTORS,
    TTL_INSTANCE, TTL_PERSISTENT,
};

pub fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

pub fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn read_admin(e: &Env) -> Result<Address, CrowdfundingError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn read_token(e: &Env) -> Result<Address, CrowdfundingError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundingError::NotInitialized)
}

pub fn is_paused(e: &Env) -> bool {
    e.storage().instance().get(&DataKey::Paused).unwrap_or(false)
}

pub fn set_paused(e: &Env, paused: bool) {
    e.storage().instance().set(&DataKey::Paused, &paused);
    extend_instance(e);
}

/// Fails with `ContractPaused` while the admin has halted new activity.
pub fn check_not_paused(e: &Env) -> Result<(), CrowdfundingError> {
    if !is_initialized(e) {
        return Err(CrowdfundingError::NotInitialized);
    }
    if is_paused(e) {
        return Err(CrowdfundingError::ContractPaused);
    }
    Ok(())
}

/// Hands out the next campaign id and advances the sequence. Ids start at 1
/// and are never reused.
pub fn next_campaign_id(e: &Env) -> Result<CampaignId, CrowdfundingError> {
    let id: CampaignId = e
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .ok_or(CrowdfundingError::NotInitialized)?;
    let next = id.checked_add(1).ok_or(CrowdfundingError::Overflow)?;
    e.storage().instance().set(&DataKey::NextCampaignId, &next);
    extend_instance(e);
    Ok(id)
}

pub fn campaign_count(e: &Env) -> u64 {
    let next: CampaignId = e
        .storage()
        .instance()
        .get(&DataKey::NextCampaignId)
        .unwrap_or(1);
    next - 1
}

pub fn load_campaign(e: &Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundingError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CrowdfundingError::CampaignNotFound)
}

pub fn save_campaign(e: &Env, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign.id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

pub fn read_contribution(e: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::Contribution(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

pub fn write_contribution(e: &Env, campaign_id: CampaignId, contributor: &Address, amount: i128) {
    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    e.storage().persistent().set(&key, &amount);
    extend_persistent(e, &key);
}

pub fn read_contributors(e: &Env, campaign_id: CampaignId) -> Vec<Address> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Contributors(campaign_id))
        .unwrap_or(Vec::new(e))
}

/// Records `contributor` in first-contribution order. Repeat contributors
/// keep their original position; new ones are refused once the campaign
/// holds `MAX_CONTRIBUTORS`.
pub fn track_contributor(
    e: &Env,
    campaign_id: CampaignId,
    contributor: &Address,
) -> Result<(), CrowdfundingError> {
    let key = PersistentKey::Contribution(campaign_id, contributor.clone());
    if e.storage().persistent().has(&key) {
        return Ok(());
    }

    let mut contributors = read_contributors(e, campaign_id);
    if contributors.len() >= MAX_CONTRIBUTORS {
        return Err(CrowdfundingError::TooManyContributors);
    }
    contributors.push_back(contributor.clone());

    let list_key = PersistentKey::Contributors(campaign_id);
    e.storage().persistent().set(&list_key, &contributors);
    extend_persistent(e, &list_key);
    Ok(())
}

pub fn read_fundraiser_campaigns(e: &Env, fundraiser: &Address) -> Vec<CampaignId> {
    e.storage()
        .persistent()
        .get(&PersistentKey::CampaignsByFundraiser(fundraiser.clone()))
        .unwrap_or(Vec::new(e))
}

pub fn index_fundraiser_campaign(e: &Env, fundraiser: &Address, campaign_id: CampaignId) {
    let mut ids = read_fundraiser_campaigns(e, fundraiser);
    ids.push_back(campaign_id);

    let key = PersistentKey::CampaignsByFundraiser(fundraiser.clone());
    e.storage().persistent().set(&key, &ids);
    extend_persistent(e, &key);
}
