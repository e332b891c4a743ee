// stakeibc/src/query.rs

use crate::unbonding_time::estimated_unbonding_time;
use ink::prelude::string::String;
use ink::prelude::vec::Vec;
use shared::{
    AddressUnbonding, EpochTracker, EpochUnbondingRecord, Error, HostZone, HostZoneUnbonding,
    QueryAddressUnbondings, QueryAddressUnbondingsResponse, RedemptionRecordId,
    UserRedemptionRecord, DAY_EPOCH,
};

/// Separator between addresses in a query
pub const ADDRESS_DELIMITER: char = ',';

/// Read access to the chain state the address unbondings query needs
pub trait UnbondingRecordsReader {
    fn epoch_tracker(&self, epoch_identifier: &str) -> Option<EpochTracker>;

    /// All epoch unbonding records, ordered by epoch number
    fn epoch_unbonding_records(&self) -> Vec<EpochUnbondingRecord>;

    fn user_redemption_record(&self, id: &str) -> Option<UserRedemptionRecord>;

    fn host_zone(&self, chain_id: &str) -> Option<HostZone>;
}

/// Every user redemption record id, paired with the host zone unbonding that batches it
pub fn scan_redemption_record_ids(
    records: &[EpochUnbondingRecord],
) -> impl Iterator<Item = (&HostZoneUnbonding, &str)> {
    records
        .iter()
        .flat_map(|record| record.host_zone_unbondings.iter())
        .flat_map(|unbonding| {
            unbonding
                .user_redemption_records
                .iter()
                .map(move |id| (unbonding, id.as_str()))
        })
}

/// Split a comma separated address list, trimming each entry
pub fn parse_addresses(address: &str) -> Result<Vec<&str>, Error> {
    if address.is_empty() {
        return Err(Error::InvalidArgument);
    }
    Ok(address.split(ADDRESS_DELIMITER).map(str::trim).collect())
}

/// Pending unbondings of the requested addresses with their estimated completion time
///
/// Malformed redemption record ids are logged and skipped; ids without a stored
/// redemption record have been claimed and are skipped silently. A missing day
/// epoch tracker, or a missing host zone for an unbonding whose time must be
/// projected, fails the whole query.
pub fn address_unbondings<R>(
    records: &R,
    request: &QueryAddressUnbondings,
) -> Result<QueryAddressUnbondingsResponse, Error>
where
    R: UnbondingRecordsReader + ?Sized,
{
    let addresses = parse_addresses(&request.address)?;

    let day_epoch = records
        .epoch_tracker(DAY_EPOCH)
        .ok_or(Error::EpochTrackerNotFound)?;

    let epoch_unbonding_records = records.epoch_unbonding_records();
    let mut address_unbondings = Vec::new();

    for (host_zone_unbonding, id) in scan_redemption_record_ids(&epoch_unbonding_records) {
        let redemption_id = match RedemptionRecordId::parse(id) {
            Ok(redemption_id) => redemption_id,
            Err(malformed) => {
                ink::env::debug_println!("{}", malformed);
                continue;
            }
        };

        if !addresses.contains(&redemption_id.address) {
            continue;
        }

        // already claimed
        let Some(redemption) = records.user_redemption_record(id) else {
            continue;
        };

        let unbonding_estimated_time =
            estimated_unbonding_time(records, &day_epoch, host_zone_unbonding)?;

        address_unbondings.push(AddressUnbonding {
            address: String::from(redemption_id.address),
            receiver: redemption.receiver,
            unbonding_estimated_time,
            amount: redemption.native_token_amount,
            denom: redemption.denom,
            claim_is_pending: redemption.claim_is_pending,
            epoch_number: redemption.epoch_number,
        });
    }

    Ok(QueryAddressUnbondingsResponse { address_unbondings })
}
