//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

mod auth_credential;
mod auth_credential_presentation;
mod auth_credential_response;

pub use auth_credential::AuthCredential;
pub use auth_credential_presentation::AuthCredentialPresentation;
pub use auth_credential_response::AuthCredentialResponse;
