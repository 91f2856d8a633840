//
// Copyright 2021 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use rand::Rng;
use zkbackend::{RandomnessBytes, RANDOMNESS_LEN};

/// Fills a randomness buffer from the thread-local CSPRNG.
pub(crate) fn fresh() -> RandomnessBytes {
    let mut randomness = [0u8; RANDOMNESS_LEN];
    rand::thread_rng().fill(&mut randomness);
    randomness
}
