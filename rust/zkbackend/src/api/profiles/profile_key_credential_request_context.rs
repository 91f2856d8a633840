//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use serde::{Deserialize, Serialize};

use crate::common::serialization::ReservedByte;
use crate::common::simple_types::*;
use crate::{api, crypto};

#[derive(Clone, Serialize, Deserialize)]
pub struct ProfileKeyCredentialRequestContext {
    pub(crate) reserved: ReservedByte,
    pub(crate) uid_bytes: UidBytes,
    pub(crate) profile_key_bytes: ProfileKeyBytes,
    pub(crate) key_pair: crypto::profile_key_credential_request::KeyPair,
    pub(crate) ciphertext_with_secret_nonce:
        crypto::profile_key_credential_request::CiphertextWithSecretNonce,
    pub(crate) proof: crypto::proofs::ProfileKeyCredentialRequestProof,
}

impl ProfileKeyCredentialRequestContext {
    pub fn get_request(&self) -> api::profiles::ProfileKeyCredentialRequest {
        api::profiles::ProfileKeyCredentialRequest {
            public_key: self.key_pair.get_public_key(),
            ciphertext: self.ciphertext_with_secret_nonce.get_ciphertext(),
            proof: self.proof.clone(),
        }
    }

    pub fn uuid(&self) -> UidBytes {
        self.uid_bytes
    }
}
