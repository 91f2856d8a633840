//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use serde::ser::SerializeTuple;
use serde::{Serialize, Serializer};

use crate::common::simple_types::*;

/// Identifies a profile key without revealing it: lowercase hex of a hash of the key and its
/// owner's uid.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct ProfileKeyVersion {
    pub(crate) bytes: ProfileKeyVersionEncodedBytes,
}

impl ProfileKeyVersion {
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes).expect("hex is ASCII")
    }
}

impl std::fmt::Debug for ProfileKeyVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ProfileKeyVersion").field(&self.as_str()).finish()
    }
}

impl Serialize for ProfileKeyVersion {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_tuple(self.bytes.len())?;
        for b in self.bytes.iter() {
            seq.serialize_element(b)?;
        }
        seq.end()
    }
}
