//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Deterministic per-group encryption of profile keys.
//!
//! `E_B1 = b1*M3` is what presentations prove statements about. `E_B2` carries the key bytes
//! themselves, masked with a pad derived from `b2*E_B1`; decryption unmasks them and checks the
//! result against `E_B1`. The public key is `B = b1*G_b1 + b2*G_b2`.

#![allow(non_snake_case)]

use std::sync::LazyLock;

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use serde::{Deserialize, Serialize};

use crate::common::errors::*;
use crate::common::sho::*;
use crate::common::simple_types::*;
use crate::crypto::profile_key_struct;

static SYSTEM_PARAMS: LazyLock<SystemParams> = LazyLock::new(SystemParams::generate);

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemParams {
    pub(crate) G_b1: RistrettoPoint,
    pub(crate) G_b2: RistrettoPoint,
}

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyPair {
    pub(crate) b1: Scalar,
    pub(crate) b2: Scalar,
    pub(crate) B: RistrettoPoint,
}

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub(crate) B: RistrettoPoint,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ciphertext {
    pub(crate) E_B1: RistrettoPoint,
    pub(crate) E_B2: ProfileKeyBytes,
}

impl SystemParams {
    fn generate() -> Self {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Constant_ProfileKeyEncryption_SystemParams_Generate",
            b"",
        );
        let G_b1 = sho.get_point();
        let G_b2 = sho.get_point();
        SystemParams { G_b1, G_b2 }
    }

    pub fn get_hardcoded() -> SystemParams {
        *SYSTEM_PARAMS
    }
}

impl KeyPair {
    pub fn derive_from(sho: &mut Sho) -> Self {
        let system = SystemParams::get_hardcoded();
        let b1 = sho.get_scalar();
        let b2 = sho.get_scalar();
        let B = b1 * system.G_b1 + b2 * system.G_b2;
        KeyPair { b1, b2, B }
    }

    pub fn encrypt(&self, profile_key: &profile_key_struct::ProfileKeyStruct) -> Ciphertext {
        let E_B1 = self.b1 * profile_key.M3;
        let E_B2 = self.mask(E_B1, profile_key.bytes);
        Ciphertext { E_B1, E_B2 }
    }

    /// Recovers the profile key; the uid is needed to recompute `M3`.
    pub fn decrypt(
        &self,
        ciphertext: &Ciphertext,
        uid_bytes: UidBytes,
    ) -> Result<profile_key_struct::ProfileKeyStruct, ZkBackendVerificationFailure> {
        if ciphertext.E_B1 == RISTRETTO_BASEPOINT_POINT {
            return Err(ZkBackendVerificationFailure);
        }
        let bytes = self.mask(ciphertext.E_B1, ciphertext.E_B2);
        let profile_key = profile_key_struct::ProfileKeyStruct::new(bytes, uid_bytes);
        if self.b1 * profile_key.M3 != ciphertext.E_B1 {
            return Err(ZkBackendVerificationFailure);
        }
        Ok(profile_key)
    }

    pub fn get_public_key(&self) -> PublicKey {
        PublicKey { B: self.B }
    }

    /// XORs `bytes` with the pad for `E_B1`. Its own inverse.
    fn mask(&self, E_B1: RistrettoPoint, bytes: ProfileKeyBytes) -> ProfileKeyBytes {
        let pad: ProfileKeyBytes = Sho::new(
            b"ZkBackend_20241019_ProfileKeyEncryption_Pad",
            (self.b2 * E_B1).compress().as_bytes(),
        )
        .squeeze_as_array();
        std::array::from_fn(|i| bytes[i] ^ pad[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::constants::*;
    use crate::crypto::profile_key_struct::ProfileKeyStruct;

    fn key_pair(seed: &[u8]) -> KeyPair {
        KeyPair::derive_from(&mut Sho::new(b"Test_Profile_Key_Encryption", seed))
    }

    #[test]
    fn decrypt_round_trip() {
        let key_pair = key_pair(&TEST_ARRAY_32);
        let profile_key = ProfileKeyStruct::new(TEST_ARRAY_32_1, TEST_ARRAY_16);
        let ciphertext = key_pair.encrypt(&profile_key);

        assert_eq!(ciphertext, key_pair.encrypt(&profile_key));
        assert_ne!(ciphertext.E_B2, TEST_ARRAY_32_1);
        assert_eq!(key_pair.decrypt(&ciphertext, TEST_ARRAY_16), Ok(profile_key));
    }

    #[test]
    fn decrypt_needs_the_right_key_and_uid() {
        let key_pair = key_pair(&TEST_ARRAY_32);
        let ciphertext = key_pair.encrypt(&ProfileKeyStruct::new(TEST_ARRAY_32_1, TEST_ARRAY_16));

        assert_eq!(
            self::key_pair(&TEST_ARRAY_32_2).decrypt(&ciphertext, TEST_ARRAY_16),
            Err(ZkBackendVerificationFailure)
        );
        assert_eq!(
            key_pair.decrypt(&ciphertext, TEST_ARRAY_16_1),
            Err(ZkBackendVerificationFailure)
        );

        let mut tampered = ciphertext;
        tampered.E_B2[31] ^= 0x80;
        assert_eq!(
            key_pair.decrypt(&tampered, TEST_ARRAY_16),
            Err(ZkBackendVerificationFailure)
        );
    }
}
