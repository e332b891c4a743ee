// stakeibc/src/lib.rs

#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub mod query;
pub mod unbonding_time;

#[ink::contract]
mod stake_ibc {
    use crate::query::{self, UnbondingRecordsReader};
    use ink::prelude::string::String;
    use ink::prelude::vec::Vec;
    use ink::storage::Mapping;
    use shared::errors::Error;
    use shared::{
        EpochTracker, EpochUnbondingRecord, HostZone, QueryAddressUnbondings,
        QueryAddressUnbondingsResponse, RedemptionRecordId, UserRedemptionRecord,
    };

    // Events

    /// Event emitted when an epoch tracker is stored
    #[ink(event)]
    pub struct EpochTrackerUpdated {
        #[ink(topic)]
        pub epoch_identifier: String,
        pub epoch_number: u64,
        pub next_epoch_start_time: u64,
    }

    /// Event emitted when a host zone is stored
    #[ink(event)]
    pub struct HostZoneUpdated {
        #[ink(topic)]
        pub chain_id: String,
        pub unbonding_frequency: u64,
    }

    /// Event emitted when an epoch unbonding record is stored
    #[ink(event)]
    pub struct EpochUnbondingRecordUpdated {
        #[ink(topic)]
        pub epoch_number: u64,
        pub host_zone_unbondings: u32,
    }

    /// Event emitted when an epoch unbonding record is removed
    #[ink(event)]
    pub struct EpochUnbondingRecordRemoved {
        #[ink(topic)]
        pub epoch_number: u64,
    }

    /// Event emitted when a user redemption record is stored
    #[ink(event)]
    pub struct UserRedemptionRecordUpdated {
        #[ink(topic)]
        pub id: String,
        pub amount: u128,
        pub claim_is_pending: bool,
    }

    /// Event emitted when a user redemption record is claimed
    #[ink(event)]
    pub struct UserRedemptionRecordRemoved {
        #[ink(topic)]
        pub id: String,
    }

    /// Stake IBC contract storage
    #[ink(storage)]
    pub struct Stakeibc {
        /// Contract owner, the only account allowed to write records
        owner: AccountId,
        /// Epoch trackers per epoch identifier
        epoch_trackers: Mapping<String, EpochTracker>,
        /// Host zones per chain id
        host_zones: Mapping<String, HostZone>,
        /// Epoch unbonding records per epoch number
        epoch_unbonding_records: Mapping<u64, EpochUnbondingRecord>,
        /// Epoch numbers that have an unbonding record, ascending
        epoch_unbonding_record_index: Vec<u64>,
        /// User redemption records per "{chain}.{epoch}.{address}" id
        user_redemption_records: Mapping<String, UserRedemptionRecord>,
    }

    impl Default for Stakeibc {
        fn default() -> Self {
            Self::new()
        }
    }

    impl UnbondingRecordsReader for Stakeibc {
        fn epoch_tracker(&self, epoch_identifier: &str) -> Option<EpochTracker> {
            self.epoch_trackers.get(epoch_identifier)
        }

        fn epoch_unbonding_records(&self) -> Vec<EpochUnbondingRecord> {
            self.epoch_unbonding_record_index
                .iter()
                .filter_map(|epoch_number| self.epoch_unbonding_records.get(epoch_number))
                .collect()
        }

        fn user_redemption_record(&self, id: &str) -> Option<UserRedemptionRecord> {
            self.user_redemption_records.get(id)
        }

        fn host_zone(&self, chain_id: &str) -> Option<HostZone> {
            self.host_zones.get(chain_id)
        }
    }

    impl Stakeibc {
        /// Constructor that initializes an empty record store
        #[ink(constructor)]
        pub fn new() -> Self {
            Self {
                owner: Self::env().caller(),
                epoch_trackers: Mapping::default(),
                host_zones: Mapping::default(),
                epoch_unbonding_records: Mapping::default(),
                epoch_unbonding_record_index: Vec::new(),
                user_redemption_records: Mapping::default(),
            }
        }

        /// Ensure the caller is the owner
        fn ensure_owner(&self) -> Result<(), Error> {
            if self.env().caller() != self.owner {
                return Err(Error::Unauthorized);
            }
            Ok(())
        }

        /// Pending unbondings of one or more comma separated addresses
        #[ink(message)]
        pub fn address_unbondings(
            &self,
            request: QueryAddressUnbondings,
        ) -> Result<QueryAddressUnbondingsResponse, Error> {
            query::address_unbondings(self, &request)
        }

        /// Store or replace an epoch tracker
        #[ink(message)]
        pub fn set_epoch_tracker(&mut self, tracker: EpochTracker) -> Result<(), Error> {
            self.ensure_owner()?;

            self.epoch_trackers
                .insert(&tracker.epoch_identifier, &tracker);

            self.env().emit_event(EpochTrackerUpdated {
                epoch_identifier: tracker.epoch_identifier,
                epoch_number: tracker.epoch_number,
                next_epoch_start_time: tracker.next_epoch_start_time,
            });

            Ok(())
        }

        /// Store or replace a host zone
        #[ink(message)]
        pub fn set_host_zone(&mut self, host_zone: HostZone) -> Result<(), Error> {
            self.ensure_owner()?;

            if host_zone.unbonding_frequency == 0 {
                return Err(Error::InvalidUnbondingFrequency);
            }

            self.host_zones.insert(&host_zone.chain_id, &host_zone);

            self.env().emit_event(HostZoneUpdated {
                chain_id: host_zone.chain_id,
                unbonding_frequency: host_zone.unbonding_frequency,
            });

            Ok(())
        }

        /// Store or replace the unbonding record of an epoch
        #[ink(message)]
        pub fn set_epoch_unbonding_record(
            &mut self,
            record: EpochUnbondingRecord,
        ) -> Result<(), Error> {
            self.ensure_owner()?;

            let epoch_number = record.epoch_number;
            if let Err(position) = self.epoch_unbonding_record_index.binary_search(&epoch_number) {
                self.epoch_unbonding_record_index
                    .insert(position, epoch_number);
            }
            self.epoch_unbonding_records.insert(epoch_number, &record);

            self.env().emit_event(EpochUnbondingRecordUpdated {
                epoch_number,
                host_zone_unbondings: u32::try_from(record.host_zone_unbondings.len())
                    .unwrap_or(u32::MAX),
            });

            Ok(())
        }

        /// Remove the unbonding record of an epoch
        #[ink(message)]
        pub fn remove_epoch_unbonding_record(&mut self, epoch_number: u64) -> Result<(), Error> {
            self.ensure_owner()?;

            let position = self
                .epoch_unbonding_record_index
                .binary_search(&epoch_number)
                .map_err(|_| Error::EpochUnbondingRecordNotFound)?;
            self.epoch_unbonding_record_index.remove(position);
            self.epoch_unbonding_records.remove(epoch_number);

            self.env()
                .emit_event(EpochUnbondingRecordRemoved { epoch_number });

            Ok(())
        }

        /// Store or replace a user redemption record under its id
        #[ink(message)]
        pub fn set_user_redemption_record(
            &mut self,
            record: UserRedemptionRecord,
        ) -> Result<(), Error> {
            self.ensure_owner()?;

            if RedemptionRecordId::parse(&record.id).is_err() {
                return Err(Error::InvalidArgument);
            }

            self.user_redemption_records.insert(&record.id, &record);

            self.env().emit_event(UserRedemptionRecordUpdated {
                id: record.id,
                amount: record.native_token_amount,
                claim_is_pending: record.claim_is_pending,
            });

            Ok(())
        }

        /// Remove a user redemption record once it has been claimed
        #[ink(message)]
        pub fn remove_user_redemption_record(&mut self, id: String) -> Result<(), Error> {
            self.ensure_owner()?;

            if !self.user_redemption_records.contains(&id) {
                return Err(Error::UserRedemptionRecordNotFound);
            }
            self.user_redemption_records.remove(&id);

            self.env().emit_event(UserRedemptionRecordRemoved { id });

            Ok(())
        }

        /// Hand the record keeper role to another account
        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), Error> {
            self.ensure_owner()?;
            self.owner = new_owner;
            Ok(())
        }

        /// View function to get an epoch tracker
        #[ink(message)]
        pub fn get_epoch_tracker(&self, epoch_identifier: String) -> Option<EpochTracker> {
            self.epoch_trackers.get(&epoch_identifier)
        }

        /// View function to get a host zone
        #[ink(message)]
        pub fn get_host_zone(&self, chain_id: String) -> Option<HostZone> {
            self.host_zones.get(&chain_id)
        }

        #[ink(message)]
        pub fn get_epoch_unbonding_record(&self, epoch_number: u64) -> Option<EpochUnbondingRecord> {
            self.epoch_unbonding_records.get(epoch_number)
        }

        /// View function to get every epoch unbonding record, oldest epoch first
        #[ink(message)]
        pub fn get_all_epoch_unbonding_records(&self) -> Vec<EpochUnbondingRecord> {
            self.epoch_unbonding_records()
        }

        #[ink(message)]
        pub fn get_user_redemption_record(&self, id: String) -> Option<UserRedemptionRecord> {
            self.user_redemption_records.get(&id)
        }

        /// Get the owner
        #[ink(message)]
        pub fn get_owner(&self) -> AccountId {
            self.owner
        }
    }
}
