//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use serde::{Deserialize, Serialize};

use crate::common::serialization::ReservedByte;
use crate::common::simple_types::*;
use crate::crypto;

/// A received auth credential. Only [`ServerPublicParams::receive_auth_credential`] makes one.
///
/// [`ServerPublicParams::receive_auth_credential`]: crate::ServerPublicParams::receive_auth_credential
#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct AuthCredential {
    pub(crate) reserved: ReservedByte,
    pub(crate) credential: crypto::credentials::AuthCredential,
    pub(crate) uid: crypto::uid_struct::UidStruct,
    pub(crate) redemption_time: Timestamp,
}

impl AuthCredential {
    pub fn redemption_time(&self) -> Timestamp {
        self.redemption_time
    }
}
