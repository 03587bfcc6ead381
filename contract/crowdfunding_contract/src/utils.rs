use soroban_sdk::String;

use crate::storage_types::{
    CrowdfundingError, MAX_DESCRIPTION_LEN, MAX_IMAGE_REFERENCE_LEN, MAX_TITLE_LEN,
};

/// Contribution amounts must be strictly positive
pub fn validate_contribution(amount: i128) -> Result<(), CrowdfundingError> {
    if amount <= 0 {
        return Err(CrowdfundingError::InvalidArgument);
    }
    Ok(())
}

/// Target may be zero but never negative
pub fn validate_target(target_amount: i128) -> Result<(), CrowdfundingError> {
    if target_amount < 0 {
        return Err(CrowdfundingError::InvalidArgument);
    }
    Ok(())
}

fn validate_text(value: &String, max_len: u32) -> Result<(), CrowdfundingError> {
    let len = value.len();
    if len == 0 || len > max_len {
        return Err(CrowdfundingError::InvalidArgument);
    }
    Ok(())
}

/// Display metadata is opaque; only presence and size are checked.
pub fn validate_metadata(
    title: &String,
    description: &String,
    image_reference: &String,
) -> Result<(), CrowdfundingError> {
    validate_text(title, MAX_TITLE_LEN)?;
    validate_text(description, MAX_DESCRIPTION_LEN)?;
    validate_text(image_reference, MAX_IMAGE_REFERENCE_LEN)
}

pub fn checked_add(a: i128, b: i128) -> Result<i128, CrowdfundingError> {
    a.checked_add(b).ok_or(CrowdfundingError::Overflow)
}
