//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

pub mod auth;
pub mod groups;
pub mod profiles;

mod server_params;

pub use server_params::{ServerPublicParams, ServerSecretParams};
