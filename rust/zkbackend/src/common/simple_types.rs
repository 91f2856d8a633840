//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use serde::{Deserialize, Serialize};

use crate::common::constants::*;

pub type AesKeyBytes = [u8; AES_KEY_LEN];
pub type GroupMasterKeyBytes = [u8; GROUP_MASTER_KEY_LEN];
pub type GroupIdentifierBytes = [u8; GROUP_IDENTIFIER_LEN];
pub type UidBytes = [u8; UUID_LEN];
pub type ProfileKeyBytes = [u8; PROFILE_KEY_LEN];
pub type ProfileKeyVersionBytes = [u8; PROFILE_KEY_VERSION_LEN];
pub type ProfileKeyVersionEncodedBytes = [u8; PROFILE_KEY_VERSION_ENCODED_LEN];
pub type RandomnessBytes = [u8; RANDOMNESS_LEN];
pub type NotarySignatureBytes = [u8; SIGNATURE_LEN];

/// Timestamp measured in seconds past the epoch.
///
/// Redemption times are expected to be day-aligned so that a credential does not fingerprint the
/// moment it was requested.
#[derive(Copy, Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Timestamp(u64);

impl Timestamp {
    #[inline]
    pub const fn from_epoch_seconds(seconds: u64) -> Self {
        Self(seconds)
    }

    #[inline]
    pub const fn epoch_seconds(&self) -> u64 {
        self.0
    }

    #[inline]
    pub fn checked_add_seconds(&self, seconds: u64) -> Option<Self> {
        self.0.checked_add(seconds).map(Self)
    }

    #[inline]
    pub fn checked_sub_seconds(&self, seconds: u64) -> Option<Self> {
        self.0.checked_sub(seconds).map(Self)
    }

    #[inline]
    pub const fn is_day_aligned(&self) -> bool {
        self.0 % SECONDS_PER_DAY == 0
    }

    #[inline]
    pub const fn to_be_bytes(self) -> [u8; TIMESTAMP_LEN] {
        self.0.to_be_bytes()
    }

    #[inline]
    pub const fn from_be_bytes(bytes: [u8; TIMESTAMP_LEN]) -> Self {
        Self(u64::from_be_bytes(bytes))
    }
}

impl From<u64> for Timestamp {
    fn from(seconds: u64) -> Self {
        Self(seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timestamp_helpers() {
        let t = Timestamp::from_epoch_seconds(3 * SECONDS_PER_DAY);
        assert!(t.is_day_aligned());
        assert!(!Timestamp::from_epoch_seconds(1).is_day_aligned());
        assert_eq!(Timestamp::from_be_bytes(t.to_be_bytes()), t);
        assert_eq!(
            t.checked_sub_seconds(SECONDS_PER_DAY),
            Some(Timestamp::from_epoch_seconds(2 * SECONDS_PER_DAY))
        );
        assert_eq!(Timestamp::from_epoch_seconds(0).checked_sub_seconds(1), None);
        assert_eq!(Timestamp::from_epoch_seconds(u64::MAX).checked_add_seconds(1), None);
    }
}
