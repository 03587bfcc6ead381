use soroban_sdk::{log, token, Address, Env};

use crate::events::{self, ContributionRefundedEvent};
use crate::storage;
use crate::storage_types::{Campaign, CrowdfundingError};
use crate::utils::checked_add;

/// Move `amount` of the settlement token from `contributor` into escrow.
pub fn collect(e: &Env, contributor: &Address, amount: i128) -> Result<(), CrowdfundingError> {
    let token_address = storage::read_token(e)?;
    let token_client = token::Client::new(e, &token_address);
    token_client.transfer(contributor, &e.current_contract_address(), &amount);
    Ok(())
}

/// Pay `amount` out of escrow to `recipient`.
pub fn pay_out(e: &Env, recipient: &Address, amount: i128) -> Result<(), CrowdfundingError> {
    let token_address = storage::read_token(e)?;
    let token_client = token::Client::new(e, &token_address);
    token_client.transfer(&e.current_contract_address(), recipient, &amount);
    Ok(())
}

/// Refund every contributor of `campaign` their full recorded contribution,
/// in first-contribution order, zeroing each entry as it is paid.
///
/// Returns the number of contributors refunded. `campaign.total_refunded` is
/// updated in place; the caller persists the record.
pub fn refund_contributors(e: &Env, campaign: &mut Campaign) -> Result<u32, CrowdfundingError> {
    let contributors = storage::read_contributors(e, campaign.id);
    let mut refund_count = 0u32;

    for contributor in contributors.iter() {
        let owed = storage::read_contribution(e, campaign.id, &contributor);
        if owed <= 0 {
            continue;
        }
        if owed > campaign.available_balance() {
            return Err(CrowdfundingError::InsufficientFunds);
        }

        storage::write_contribution(e, campaign.id, &contributor, 0);
        campaign.total_refunded = checked_add(campaign.total_refunded, owed)?;
        pay_out(e, &contributor, owed)?;
        refund_count += 1;

        log!(e, "campaign {} refunded {} to {}", campaign.id, owed, contributor);

        events::emit_contribution_refunded(
            e,
            ContributionRefundedEvent {
                campaign_id: campaign.id,
                contributor,
                amount: owed,
            },
        );
    }

    Ok(refund_count)
}
