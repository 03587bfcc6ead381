use soroban_sdk::{contracttype, Address, Env, Symbol};

use crate::storage_types::CampaignId;

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: CampaignId,
    pub fundraiser: Address,
    pub target_amount: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignFundedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
    pub total_funded: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct FundsWithdrawnEvent {
    pub campaign_id: CampaignId,
    pub fundraiser: Address,
    pub amount: i128,
    pub total_withdrawn: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct CampaignCanceledEvent {
    pub campaign_id: CampaignId,
    pub fundraiser: Address,
    pub total_refunded: i128,
    pub refund_count: u32,
}

#[contracttype]
#[derive(Clone)]
pub struct ContributionRefundedEvent {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, event: CampaignCreatedEvent) {
    env.events().publish((Symbol::new(env, "campaign_created"),), event);
}

pub fn emit_campaign_funded(env: &Env, event: CampaignFundedEvent) {
    env.events().publish((Symbol::new(env, "campaign_funded"),), event);
}

pub fn emit_funds_withdrawn(env: &Env, event: FundsWithdrawnEvent) {
    env.events().publish((Symbol::new(env, "funds_withdrawn"),), event);
}

pub fn emit_campaign_canceled(env: &Env, event: CampaignCanceledEvent) {
    env.events().publish((Symbol::new(env, "campaign_canceled"),), event);
}

pub fn emit_contribution_refunded(env: &Env, event: ContributionRefundedEvent) {
    env.events().publish((Symbol::new(env, "contribution_refunded"),), event);
}

pub fn emit_contract_paused(env: &Env, admin: Address) {
    env.events().publish((Symbol::new(env, "contract_paused"),), admin);
}

pub fn emit_contract_unpaused(env: &Env, admin: Address) {
    env.events().publish((Symbol::new(env, "contract_unpaused"),), admin);
}
