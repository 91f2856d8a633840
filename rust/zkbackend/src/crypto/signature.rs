//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Schnorr signatures as a one-equation [`Statement`]: `public_key = private_key*G`.

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use serde::{Deserialize, Serialize};

use crate::common::constants::*;
use crate::common::errors::*;
use crate::common::sho::*;
use crate::common::simple_types::*;
use crate::crypto::statement::{PointArgs, ScalarArgs, Statement};

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub(crate) signing_key: Scalar,
    pub(crate) public_key: RistrettoPoint,
}

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub(crate) public_key: RistrettoPoint,
}

fn statement() -> Statement {
    let mut st = Statement::new();
    st.add("public_key", &[("private_key", "G")]);
    st
}

impl KeyPair {
    pub fn generate(sho: &mut Sho) -> Self {
        let signing_key = sho.get_scalar();
        let public_key = signing_key * RISTRETTO_BASEPOINT_POINT;
        KeyPair {
            signing_key,
            public_key,
        }
    }

    pub fn sign(&self, message: &[u8], sho: &mut Sho) -> NotarySignatureBytes {
        let mut scalar_args = ScalarArgs::new();
        scalar_args.add("private_key", self.signing_key);
        let mut point_args = PointArgs::new();
        point_args.add("public_key", self.public_key);

        let proof = statement()
            .prove(&scalar_args, &point_args, message, &sho.squeeze_as_array())
            .expect("signature failed to self-verify; bad public key?");
        let mut signature = [0u8; SIGNATURE_LEN];
        signature.copy_from_slice(&proof);
        signature
    }

    pub fn get_public_key(&self) -> PublicKey {
        PublicKey {
            public_key: self.public_key,
        }
    }
}

impl PublicKey {
    pub fn verify(
        &self,
        message: &[u8],
        signature: &NotarySignatureBytes,
    ) -> Result<(), ZkBackendVerificationFailure> {
        let mut point_args = PointArgs::new();
        point_args.add("public_key", self.public_key);
        statement()
            .verify(signature, &point_args, message)
            .map_err(|_| ZkBackendVerificationFailure)
    }
}
