use scale::{Decode, Encode};

/// Common error types
#[derive(Debug, PartialEq, Eq, Clone, Copy, Encode, Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// Caller is not the contract owner
    Unauthorized,
    /// Request is malformed, e.g. an empty address list
    InvalidArgument,
    /// No tracker is stored for the requested epoch identifier
    EpochTrackerNotFound,
    /// No host zone is stored for the requested chain id
    HostZoneNotFound,
    EpochUnbondingRecordNotFound,
    UserRedemptionRecordNotFound,
    /// Host zone unbonding frequency must be at least one day
    InvalidUnbondingFrequency,
}

impl Error {
    /// Whether the error reports a missing piece of chain state
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::EpochTrackerNotFound
                | Error::HostZoneNotFound
                | Error::EpochUnbondingRecordNotFound
                | Error::UserRedemptionRecordNotFound
        )
    }
}
