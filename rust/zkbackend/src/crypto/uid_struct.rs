//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

#![allow(non_snake_case)]

use curve25519_dalek::ristretto::{CompressedRistretto, RistrettoPoint};
use serde::{Deserialize, Serialize};

use crate::common::constants::*;
use crate::common::sho::*;
use crate::common::simple_types::*;

/// Where the uid sits inside the encoding of `M2`.
const M2_UID_OFFSET: usize = 8;

/// A service identifier together with the two points that stand for it in credentials.
///
/// `M1` is a hash of the uid. `M2` is reversible: its compressed encoding carries the uid bytes
/// verbatim, so whoever can strip the encryption off `M2` learns the uid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UidStruct {
    pub(crate) bytes: UidBytes,
    pub(crate) M1: RistrettoPoint,
    pub(crate) M2: RistrettoPoint,
}

impl UidStruct {
    pub fn from_uuid(bytes: UidBytes) -> Self {
        let M1 = Sho::new(b"ZkBackend_20241019_UidStruct_CalcM1", &bytes).get_point();
        let M2 = Self::calc_M2(bytes);
        UidStruct { bytes, M1, M2 }
    }

    /// Recovers the uid embedded in `M2`.
    ///
    /// Returns `None` unless `M2` is exactly the encoding [`from_uuid`](Self::from_uuid) would
    /// produce for the embedded bytes.
    pub fn from_M2(M2: RistrettoPoint) -> Option<Self> {
        let encoded = M2.compress().to_bytes();
        let mut bytes = [0u8; UUID_LEN];
        bytes.copy_from_slice(&encoded[M2_UID_OFFSET..][..UUID_LEN]);
        let uid = Self::from_uuid(bytes);
        (uid.M2 == M2).then_some(uid)
    }

    pub fn to_bytes(&self) -> UidBytes {
        self.bytes
    }

    /// Try-and-increment: fill the free bytes from a hash of the uid until the candidate is the
    /// canonical encoding of a Ristretto point.
    ///
    /// About one candidate in four decodes.
    fn calc_M2(bytes: UidBytes) -> RistrettoPoint {
        let mut sho = Sho::new(b"ZkBackend_20241019_UidStruct_CalcM2", &bytes);
        loop {
            let mut candidate: [u8; 32] = sho.squeeze_as_array();
            candidate[0] &= 0xFE;
            candidate[31] &= 0x7F;
            candidate[M2_UID_OFFSET..][..UUID_LEN].copy_from_slice(&bytes);
            if let Some(point) = CompressedRistretto(candidate).decompress() {
                return point;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;

    use super::*;

    #[test]
    fn points_depend_on_uuid() {
        let a = UidStruct::from_uuid(TEST_ARRAY_16);
        let b = UidStruct::from_uuid(TEST_ARRAY_16_1);
        assert_eq!(a, UidStruct::from_uuid(TEST_ARRAY_16));
        assert_ne!(a.M1, b.M1);
        assert_ne!(a.M2, b.M2);
        assert_ne!(a.M1, a.M2);
        assert_eq!(a.to_bytes(), TEST_ARRAY_16);
    }

    #[test]
    fn M2_embeds_the_uid() {
        for uuid in [TEST_ARRAY_16, TEST_ARRAY_16_1, [0u8; 16], [0xFF; 16]] {
            let uid = UidStruct::from_uuid(uuid);
            assert_eq!(uid.M2.compress().as_bytes()[8..24], uuid);
            assert_eq!(UidStruct::from_M2(uid.M2), Some(uid));
        }
    }

    #[test]
    fn other_points_do_not_decode() {
        assert_eq!(UidStruct::from_M2(RISTRETTO_BASEPOINT_POINT), None);
        let uid = UidStruct::from_uuid(TEST_ARRAY_16);
        assert_eq!(UidStruct::from_M2(uid.M1), None);
        assert_eq!(UidStruct::from_M2(uid.M2 + RISTRETTO_BASEPOINT_POINT), None);
    }
}
