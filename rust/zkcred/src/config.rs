//
// Copyright 2020-2022 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use zkbackend::{Timestamp, SECONDS_PER_DAY};

/// How far the current time may be from a presentation's redemption time.
///
/// A presentation is acceptable from `before_seconds` before its redemption time through
/// `after_seconds` after it, inclusive.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RedemptionWindow {
    pub before_seconds: u64,
    pub after_seconds: u64,
}

impl Default for RedemptionWindow {
    fn default() -> Self {
        Self {
            before_seconds: SECONDS_PER_DAY,
            after_seconds: 2 * SECONDS_PER_DAY,
        }
    }
}

impl RedemptionWindow {
    pub fn contains(&self, redemption_time: Timestamp, current_time: Timestamp) -> bool {
        let redemption_time = redemption_time.epoch_seconds();
        let start = redemption_time.saturating_sub(self.before_seconds);
        let end = redemption_time.saturating_add(self.after_seconds);
        (start..=end).contains(&current_time.epoch_seconds())
    }
}
