//
// Copyright 2024 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use curve25519_dalek::scalar::Scalar;

use crate::common::sho::Sho;
use crate::common::simple_types::Timestamp;

/// Maps a redemption time onto the scalar that weights its attribute generator.
pub struct TimestampStruct;

impl TimestampStruct {
    pub fn calc_m_from(timestamp: Timestamp) -> Scalar {
        Sho::new(
            b"ZkBackend_20241019_TimestampStruct_CalcM",
            &timestamp.to_be_bytes(),
        )
        .get_scalar()
    }
}
