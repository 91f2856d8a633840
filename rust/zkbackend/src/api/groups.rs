//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

mod group_params;
mod profile_key_ciphertext;
mod uuid_ciphertext;

pub use group_params::{GroupMasterKey, GroupPublicParams, GroupSecretParams};
pub use profile_key_ciphertext::ProfileKeyCiphertext;
pub use uuid_ciphertext::UuidCiphertext;
