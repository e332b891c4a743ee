use core::fmt;
use ink::prelude::format;
use ink::prelude::string::String;

/// Separator between the components of a user redemption record id
pub const REDEMPTION_RECORD_ID_DELIMITER: char = '.';

/// Parsed user redemption record id: "{host_zone_id}.{epoch}.{address}"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedemptionRecordId<'a> {
    /// Chain id the redemption was requested for
    pub host_zone_id: &'a str,
    /// Day epoch the redemption was requested in (kept as written)
    pub epoch: &'a str,
    /// Address that requested the redemption
    pub address: &'a str,
}

/// An id that does not split into exactly three components
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedRedemptionRecordId<'a> {
    pub id: &'a str,
    pub components: usize,
}

impl<'a> RedemptionRecordId<'a> {
    pub fn parse(id: &'a str) -> Result<Self, MalformedRedemptionRecordId<'a>> {
        let mut components = id.split(REDEMPTION_RECORD_ID_DELIMITER);
        match (
            components.next(),
            components.next(),
            components.next(),
            components.next(),
        ) {
            (Some(host_zone_id), Some(epoch), Some(address), None) => Ok(Self {
                host_zone_id,
                epoch,
                address,
            }),
            _ => Err(MalformedRedemptionRecordId {
                id,
                components: id.split(REDEMPTION_RECORD_ID_DELIMITER).count(),
            }),
        }
    }

    /// Key under which the record for `address` redeeming in `epoch_number` is stored
    pub fn key(host_zone_id: &str, epoch_number: u64, address: &str) -> String {
        format!(
            "{host_zone_id}{d}{epoch_number}{d}{address}",
            d = REDEMPTION_RECORD_ID_DELIMITER
        )
    }
}

impl fmt::Display for RedemptionRecordId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{d}{}{d}{}",
            self.host_zone_id,
            self.epoch,
            self.address,
            d = REDEMPTION_RECORD_ID_DELIMITER
        )
    }
}

impl fmt::Display for MalformedRedemptionRecordId<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid user redemption record id {}", self.id)
    }
}
