use ink::prelude::string::String;
use ink::prelude::vec::Vec;
use scale::{Decode, Encode};

/// Progress of one epoch clock (e.g. the "day" epoch)
#[derive(Decode, Encode, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct EpochTracker {
    /// Epoch identifier, e.g. "day" or "stride_epoch"
    pub epoch_identifier: String,
    /// Number of the epoch currently in progress
    pub epoch_number: u64,
    /// Start of the next epoch (unix nanoseconds)
    pub next_epoch_start_time: u64,
    /// Epoch length (nanoseconds)
    pub duration: u64,
}

/// Unbonding batch of one host zone within an epoch
#[derive(Decode, Encode, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct HostZoneUnbonding {
    /// Chain id of the host zone
    pub host_zone_id: String,
    /// Native denom being unbonded
    pub denom: String,
    /// Total native tokens in the batch
    pub native_token_amount: u128,
    /// Completion time of the unbonding on the host (unix nanoseconds), 0 until known
    pub unbonding_time: u64,
    /// Ids of the user redemption records batched here
    pub user_redemption_records: Vec<String>,
}

/// All host zone unbondings opened during one day epoch
#[derive(Decode, Encode, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct EpochUnbondingRecord {
    pub epoch_number: u64,
    pub host_zone_unbondings: Vec<HostZoneUnbonding>,
}

/// A single user's pending redemption
#[derive(Decode, Encode, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct UserRedemptionRecord {
    /// Composite id "{host_zone_id}.{epoch_number}.{address}"
    pub id: String,
    /// Address on the host zone receiving the native tokens
    pub receiver: String,
    pub native_token_amount: u128,
    pub denom: String,
    pub host_zone_id: String,
    pub epoch_number: u64,
    /// Whether the redemption can be claimed
    pub claim_is_pending: bool,
}

/// Host zone configuration
#[derive(Decode, Encode, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct HostZone {
    pub chain_id: String,
    pub host_denom: String,
    /// Number of day epochs between unbonding batches (> 0)
    pub unbonding_frequency: u64,
}

/// Request for the pending unbondings of one or more addresses
#[derive(Decode, Encode, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct QueryAddressUnbondings {
    /// Single address or several comma separated
    pub address: String,
}

/// One pending unbonding of a queried address
#[derive(Decode, Encode, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct AddressUnbonding {
    pub address: String,
    pub receiver: String,
    /// Estimated completion, formatted as "YYYY-MM-DD HH:MM:SS +0000 UTC"
    pub unbonding_estimated_time: String,
    pub amount: u128,
    pub denom: String,
    pub claim_is_pending: bool,
    pub epoch_number: u64,
}

#[derive(Decode, Encode, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct QueryAddressUnbondingsResponse {
    pub address_unbondings: Vec<AddressUnbonding>,
}
