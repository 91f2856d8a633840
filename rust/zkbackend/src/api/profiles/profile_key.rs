//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::common::constants::*;
use crate::common::sho::*;
use crate::common::simple_types::*;
use crate::{api, crypto};

#[derive(Copy, Clone, Default, Serialize, Deserialize)]
pub struct ProfileKey {
    pub(crate) bytes: ProfileKeyBytes,
}

impl std::fmt::Debug for ProfileKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileKey").finish_non_exhaustive()
    }
}

impl PartialEq for ProfileKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl ProfileKey {
    pub fn generate(randomness: RandomnessBytes) -> Self {
        let mut sho = Sho::new(b"ZkBackend_20241019_Random_ProfileKey_Generate", &randomness);
        Self {
            bytes: sho.squeeze_as_array(),
        }
    }

    pub fn create(bytes: ProfileKeyBytes) -> Self {
        Self { bytes }
    }

    pub fn get_bytes(&self) -> ProfileKeyBytes {
        self.bytes
    }

    /// The commitment the issuer checks a profile key credential request against.
    pub fn get_commitment(&self, uuid: UidBytes) -> api::profiles::ProfileKeyCommitment {
        let profile_key = crypto::profile_key_struct::ProfileKeyStruct::new(self.bytes, uuid);
        let commitment =
            crypto::profile_key_commitment::CommitmentWithSecretNonce::new(profile_key, uuid);
        api::profiles::ProfileKeyCommitment {
            reserved: Default::default(),
            commitment: commitment.get_profile_key_commitment(),
        }
    }

    pub fn get_profile_key_version(&self, uuid: UidBytes) -> api::profiles::ProfileKeyVersion {
        let mut combined = [0u8; PROFILE_KEY_LEN + UUID_LEN];
        combined[..PROFILE_KEY_LEN].copy_from_slice(&self.bytes);
        combined[PROFILE_KEY_LEN..].copy_from_slice(&uuid);
        let mut sho = Sho::new(
            b"ZkBackend_20241019_ProfileKeyAndUid_ProfileKey_GetProfileKeyVersion",
            &combined,
        );
        let version: ProfileKeyVersionBytes = sho.squeeze_as_array();
        let mut bytes = [0u8; PROFILE_KEY_VERSION_ENCODED_LEN];
        hex::encode_to_slice(version, &mut bytes).expect("buffer is twice the hash length");
        api::profiles::ProfileKeyVersion { bytes }
    }
}
