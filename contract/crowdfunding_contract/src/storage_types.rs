use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Token,
    Paused,
    NextCampaignId,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Contribution(CampaignId, Address),
    Contributors(CampaignId),
    CampaignsByFundraiser(Address),
}

pub type CampaignId = u64;

// Discriminants are part of the public snapshot and must not be renumbered.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum CampaignStatus {
    Active = 0,
    /// Reserved. Reaching the target never moves a campaign here.
    Successful = 1,
    Canceled = 2,
}

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub id: CampaignId,
    pub fundraiser: Address,
    pub title: String,
    pub description: String,
    pub image_reference: String,
    pub target_amount: i128,       // Informational goal, funding is not capped
    pub total_funded: i128,        // Gross sum of all contributions
    pub total_withdrawn: i128,     // Sum paid out to the fundraiser
    pub total_refunded: i128,      // Sum returned to contributors on cancellation
    pub status: CampaignStatus,
    pub created_at: u64,
}

impl Campaign {
    /// Value still held in escrow for this campaign.
    pub fn available_balance(&self) -> i128 {
        self.total_funded - self.total_withdrawn - self.total_refunded
    }

    pub fn is_active(&self) -> bool {
        self.status == CampaignStatus::Active
    }
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundingError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    CampaignNotFound = 3,
    InvalidArgument = 4,
    CampaignNotActive = 5,
    Unauthorized = 6,
    InsufficientFunds = 7,
    AlreadyFinalized = 8,
    WithdrawalsRecorded = 9,
    ContractPaused = 10,
    Overflow = 11,
    TooManyContributors = 12,
}

// Constants
pub const MAX_TITLE_LEN: u32 = 100;
pub const MAX_DESCRIPTION_LEN: u32 = 1000;
pub const MAX_IMAGE_REFERENCE_LEN: u32 = 512;
// A full cancel writes two ledger entries per contributor and must fit in one transaction.
pub const MAX_CONTRIBUTORS: u32 = 20;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
