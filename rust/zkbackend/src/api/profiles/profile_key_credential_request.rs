//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use serde::{Deserialize, Serialize};

use crate::crypto;

/// What the client sends the issuer. Unversioned, so it is exactly
/// [`PROFILE_KEY_CREDENTIAL_REQUEST_LEN`](crate::PROFILE_KEY_CREDENTIAL_REQUEST_LEN) bytes.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProfileKeyCredentialRequest {
    pub(crate) public_key: crypto::profile_key_credential_request::PublicKey,
    pub(crate) ciphertext: crypto::profile_key_credential_request::Ciphertext,
    pub(crate) proof: crypto::proofs::ProfileKeyCredentialRequestProof,
}
