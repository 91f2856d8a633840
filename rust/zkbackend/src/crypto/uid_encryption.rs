//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Deterministic per-group encryption of uids.
//!
//! `E_A1 = a1*M1`, `E_A2 = a2*E_A1 + M2`, with public key `A = a1*G_a1 + a2*G_a2`.
//! Decryption recovers `M2 = E_A2 - a2*E_A1` and reads the uid out of it.

#![allow(non_snake_case)]

use std::sync::LazyLock;

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use serde::{Deserialize, Serialize};

use crate::common::errors::*;
use crate::common::sho::*;
use crate::crypto::uid_struct;

static SYSTEM_PARAMS: LazyLock<SystemParams> = LazyLock::new(SystemParams::generate);

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemParams {
    pub(crate) G_a1: RistrettoPoint,
    pub(crate) G_a2: RistrettoPoint,
}

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub(crate) a1: Scalar,
    pub(crate) a2: Scalar,
    pub(crate) A: RistrettoPoint,
}

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub(crate) A: RistrettoPoint,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    pub(crate) E_A1: RistrettoPoint,
    pub(crate) E_A2: RistrettoPoint,
}

impl SystemParams {
    fn generate() -> Self {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Constant_UidEncryption_SystemParams_Generate",
            b"",
        );
        let G_a1 = sho.get_point();
        let G_a2 = sho.get_point();
        SystemParams { G_a1, G_a2 }
    }

    pub fn get_hardcoded() -> SystemParams {
        *SYSTEM_PARAMS
    }
}

impl KeyPair {
    pub fn derive_from(sho: &mut Sho) -> Self {
        let system = SystemParams::get_hardcoded();
        let a1 = sho.get_scalar();
        let a2 = sho.get_scalar();
        let A = a1 * system.G_a1 + a2 * system.G_a2;
        KeyPair { a1, a2, A }
    }

    pub fn encrypt(&self, uid: &uid_struct::UidStruct) -> Ciphertext {
        let E_A1 = self.a1 * uid.M1;
        let E_A2 = (self.a2 * E_A1) + uid.M2;
        Ciphertext { E_A1, E_A2 }
    }

    pub fn decrypt(
        &self,
        ciphertext: &Ciphertext,
    ) -> Result<uid_struct::UidStruct, ZkBackendVerificationFailure> {
        if ciphertext.E_A1 == RISTRETTO_BASEPOINT_POINT {
            return Err(ZkBackendVerificationFailure);
        }
        let M2 = ciphertext.E_A2 - (self.a2 * ciphertext.E_A1);
        let uid = uid_struct::UidStruct::from_M2(M2).ok_or(ZkBackendVerificationFailure)?;
        if self.a1 * uid.M1 != ciphertext.E_A1 {
            return Err(ZkBackendVerificationFailure);
        }
        Ok(uid)
    }

    pub fn get_public_key(&self) -> PublicKey {
        PublicKey { A: self.A }
    }
}
