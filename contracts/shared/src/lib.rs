#![cfg_attr(not(feature = "std"), no_std)]

pub mod errors;
pub mod records;
pub mod redemption_id;

pub use errors::Error;
pub use records::{
    AddressUnbonding, EpochTracker, EpochUnbondingRecord, HostZone, HostZoneUnbonding,
    QueryAddressUnbondings, QueryAddressUnbondingsResponse, UserRedemptionRecord,
};
pub use redemption_id::{MalformedRedemptionRecordId, RedemptionRecordId};
pub use scale::{Decode, Encode};

/// Identifier of the epoch tracker that counts days
pub const DAY_EPOCH: &str = "day";

/// Nanoseconds in one day
pub const NANOS_PER_DAY: u64 = 86_400_000_000_000;
