//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Commitment to a profile key point: `J1 = j3*G_j1 + M3`, `J3 = j3*G_j3`.
//!
//! `j3` is derived from the profile key and uid, so anyone holding both can recompute it.

#![allow(non_snake_case)]

use std::sync::LazyLock;

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use serde::{Deserialize, Serialize};

use crate::common::constants::*;
use crate::common::sho::*;
use crate::common::simple_types::*;
use crate::crypto::profile_key_struct;

static SYSTEM_PARAMS: LazyLock<SystemParams> = LazyLock::new(SystemParams::generate);

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemParams {
    pub(crate) G_j1: RistrettoPoint,
    pub(crate) G_j3: RistrettoPoint,
}

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentWithSecretNonce {
    pub(crate) J1: RistrettoPoint,
    pub(crate) J3: RistrettoPoint,
    pub(crate) j3: Scalar,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commitment {
    pub(crate) J1: RistrettoPoint,
    pub(crate) J3: RistrettoPoint,
}

impl SystemParams {
    fn generate() -> Self {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Constant_ProfileKeyCommitment_SystemParams_Generate",
            b"",
        );
        let G_j1 = sho.get_point();
        let G_j3 = sho.get_point();
        SystemParams { G_j1, G_j3 }
    }

    pub fn get_hardcoded() -> SystemParams {
        *SYSTEM_PARAMS
    }
}

impl CommitmentWithSecretNonce {
    pub fn new(
        profile_key: profile_key_struct::ProfileKeyStruct,
        uid_bytes: UidBytes,
    ) -> CommitmentWithSecretNonce {
        let system = SystemParams::get_hardcoded();
        let j3 = Self::calc_j3(profile_key.bytes, uid_bytes);
        let J1 = (j3 * system.G_j1) + profile_key.M3;
        let J3 = j3 * system.G_j3;
        CommitmentWithSecretNonce { J1, J3, j3 }
    }

    pub fn get_profile_key_commitment(&self) -> Commitment {
        Commitment {
            J1: self.J1,
            J3: self.J3,
        }
    }

    pub fn calc_j3(profile_key_bytes: ProfileKeyBytes, uid_bytes: UidBytes) -> Scalar {
        let mut combined = [0u8; PROFILE_KEY_LEN + UUID_LEN];
        combined[..PROFILE_KEY_LEN].copy_from_slice(&profile_key_bytes);
        combined[PROFILE_KEY_LEN..].copy_from_slice(&uid_bytes);
        Sho::new(b"ZkBackend_20241019_ProfileKeyCommitment_Calcj3", &combined).get_scalar()
    }
}
