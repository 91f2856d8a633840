//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use serde::{Deserialize, Serialize};

use crate::common::serialization::ReservedByte;
use crate::crypto;

#[derive(Clone, Serialize, Deserialize)]
pub struct ProfileKeyCredentialResponse {
    pub(crate) reserved: ReservedByte,
    pub(crate) blinded_credential: crypto::credentials::BlindedProfileKeyCredential,
    pub(crate) proof: crypto::proofs::ProfileKeyCredentialIssuanceProof,
}
