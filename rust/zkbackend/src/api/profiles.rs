//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

mod profile_key;
mod profile_key_commitment;
mod profile_key_credential;
mod profile_key_credential_presentation;
mod profile_key_credential_request;
mod profile_key_credential_request_context;
mod profile_key_credential_response;
mod profile_key_version;

pub use profile_key::ProfileKey;
pub use profile_key_commitment::ProfileKeyCommitment;
pub use profile_key_credential::ProfileKeyCredential;
pub use profile_key_credential_presentation::ProfileKeyCredentialPresentation;
pub use profile_key_credential_request::ProfileKeyCredentialRequest;
pub use profile_key_credential_request_context::ProfileKeyCredentialRequestContext;
pub use profile_key_credential_response::ProfileKeyCredentialResponse;
pub use profile_key_version::ProfileKeyVersion;
