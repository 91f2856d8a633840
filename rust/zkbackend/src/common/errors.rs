//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

/// Verification failure in the proof backend
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error, displaydoc::Display)]
pub struct ZkBackendVerificationFailure;

/// Failed to deserialize {0}
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error, displaydoc::Display)]
pub struct ZkBackendDeserializationFailure(&'static str);

impl ZkBackendDeserializationFailure {
    pub fn new<T>() -> Self {
        Self(std::any::type_name::<T>())
    }

    pub fn type_name(&self) -> &'static str {
        self.0
    }
}
