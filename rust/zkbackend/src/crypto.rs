//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

pub mod credentials;
pub mod profile_key_commitment;
pub mod profile_key_credential_request;
pub mod profile_key_encryption;
pub mod profile_key_struct;
pub mod proofs;
pub mod signature;
pub mod statement;
pub mod timestamp_struct;
pub mod uid_encryption;
pub mod uid_struct;
