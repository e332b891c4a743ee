// stakeibc/src/unbonding_time.rs

use crate::query::UnbondingRecordsReader;
use chrono::DateTime;
use ink::prelude::format;
use ink::prelude::string::{String, ToString};
use shared::{EpochTracker, Error, HostZoneUnbonding, NANOS_PER_DAY};

/// Assumed length of one unbonding epoch on the host chain, in days
pub const HOST_EPOCH_LENGTH_DAYS: u64 = 7;
/// Margin added to every estimate before it is reported
pub const UNBONDING_BUFFER_DAYS: u64 = 1;

const NANOS_PER_SECOND: u64 = 1_000_000_000;

fn days(count: u64) -> u64 {
    count.saturating_mul(NANOS_PER_DAY)
}

/// Project when a batch that is not yet submitted to the host will finish unbonding
///
/// Batches go out every `unbonding_frequency` days. The next batch leaves on the
/// first day boundary where the day number is a multiple of the frequency, and
/// then takes `(unbonding_frequency - 1)` host epochs to complete.
pub fn projected_unbonding_time(
    day_epoch: &EpochTracker,
    unbonding_frequency: u64,
) -> Result<u64, Error> {
    let day_in_cycle = day_epoch
        .epoch_number
        .checked_rem(unbonding_frequency)
        .ok_or(Error::InvalidUnbondingFrequency)?;
    let days_until_unbonding = unbonding_frequency - day_in_cycle;

    let unbonding_start_time = day_epoch
        .next_epoch_start_time
        .saturating_add(days(days_until_unbonding - 1));
    let estimated_duration_days = (unbonding_frequency - 1).saturating_mul(HOST_EPOCH_LENGTH_DAYS);

    Ok(unbonding_start_time.saturating_add(days(estimated_duration_days)))
}

/// Completion time of a host zone unbonding, in unix nanoseconds
///
/// The host zone is only consulted when the chain has not fixed the time yet.
pub fn completion_time<R>(
    records: &R,
    day_epoch: &EpochTracker,
    unbonding: &HostZoneUnbonding,
) -> Result<u64, Error>
where
    R: UnbondingRecordsReader + ?Sized,
{
    if unbonding.unbonding_time != 0 {
        return Ok(unbonding.unbonding_time);
    }

    let host_zone = records
        .host_zone(&unbonding.host_zone_id)
        .ok_or(Error::HostZoneNotFound)?;
    projected_unbonding_time(day_epoch, host_zone.unbonding_frequency)
}

/// Completion time plus the safety buffer, formatted for display
pub fn estimated_unbonding_time<R>(
    records: &R,
    day_epoch: &EpochTracker,
    unbonding: &HostZoneUnbonding,
) -> Result<String, Error>
where
    R: UnbondingRecordsReader + ?Sized,
{
    let completion = completion_time(records, day_epoch, unbonding)?;
    Ok(format_utc(
        completion.saturating_add(days(UNBONDING_BUFFER_DAYS)),
    ))
}

/// Render unix nanoseconds as "2006-01-02 15:04:05.999999999 +0000 UTC"
///
/// The fractional part drops trailing zeros and is omitted on whole seconds.
pub fn format_utc(timestamp_nanos: u64) -> String {
    let seconds = i64::try_from(timestamp_nanos / NANOS_PER_SECOND).unwrap_or(i64::MAX);
    let subsec_nanos = u32::try_from(timestamp_nanos % NANOS_PER_SECOND).unwrap_or_default();

    // u64 nanoseconds never leave chrono's supported range
    let date_time = DateTime::from_timestamp(seconds, subsec_nanos).unwrap_or_default();

    let mut formatted = date_time.format("%Y-%m-%d %H:%M:%S").to_string();
    if subsec_nanos != 0 {
        let fraction = format!("{subsec_nanos:09}");
        formatted.push('.');
        formatted.push_str(fraction.trim_end_matches('0'));
    }
    formatted.push_str(" +0000 UTC");
    formatted
}
