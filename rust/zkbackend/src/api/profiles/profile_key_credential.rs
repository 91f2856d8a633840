//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use serde::{Deserialize, Serialize};

use crate::common::serialization::ReservedByte;
use crate::common::simple_types::*;
use crate::crypto;

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct ProfileKeyCredential {
    pub(crate) reserved: ReservedByte,
    pub(crate) credential: crypto::credentials::ProfileKeyCredential,
    pub(crate) uid_bytes: UidBytes,
    pub(crate) profile_key_bytes: ProfileKeyBytes,
    pub(crate) redemption_time: Timestamp,
}

impl ProfileKeyCredential {
    pub fn redemption_time(&self) -> Timestamp {
        self.redemption_time
    }
}
