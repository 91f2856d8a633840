//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

#![allow(non_snake_case)]

use curve25519_dalek::ristretto::RistrettoPoint;
use serde::{Deserialize, Serialize};

use crate::common::constants::*;
use crate::common::sho::*;
use crate::common::simple_types::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileKeyStruct {
    pub(crate) bytes: ProfileKeyBytes,
    pub(crate) M3: RistrettoPoint,
}

impl ProfileKeyStruct {
    /// The point is bound to the owner's uid so the same key yields unrelated points for different
    /// accounts.
    pub fn new(profile_key_bytes: ProfileKeyBytes, uid_bytes: UidBytes) -> Self {
        let mut combined = [0u8; PROFILE_KEY_LEN + UUID_LEN];
        combined[..PROFILE_KEY_LEN].copy_from_slice(&profile_key_bytes);
        combined[PROFILE_KEY_LEN..].copy_from_slice(&uid_bytes);
        let M3 = Sho::new(b"ZkBackend_20241019_ProfileKeyStruct_CalcM3", &combined).get_point();
        ProfileKeyStruct {
            bytes: profile_key_bytes,
            M3,
        }
    }
}
