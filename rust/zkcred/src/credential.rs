//
// Copyright 2020-2022 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Descriptors that specialize the issuance and presentation protocols.

use crate::backend::CredentialType;
use crate::container::{ArtifactKind, Empty};
use crate::kinds::*;

/// Everything the generic protocols need to know about one credential type.
pub trait CredentialKind: 'static {
    const NAME: &'static str;
    const CREDENTIAL_TYPE: CredentialType;

    /// What the client commits to and gets certified blindly.
    type Secret: ArtifactKind;
    type Commitment: ArtifactKind;
    type RequestContext: ArtifactKind;
    type Request: ArtifactKind;
    type Response: ArtifactKind;
    type Credential: ArtifactKind;
    type Presentation: ArtifactKind;
}

/// Certifies an identity and a redemption time. Issued directly, without a request.
pub enum AuthCredentialKind {}

impl CredentialKind for AuthCredentialKind {
    const NAME: &'static str = "auth";
    const CREDENTIAL_TYPE: CredentialType = CredentialType::Auth;

    type Secret = Empty;
    type Commitment = Empty;
    type RequestContext = Empty;
    type Request = Empty;
    type Response = AuthCredentialResponseKind;
    type Credential = AuthCredentialArtifactKind;
    type Presentation = AuthCredentialPresentationKind;
}

/// Certifies an identity, a redemption time, and a profile key the issuer never sees.
pub enum ProfileKeyCredentialKind {}

impl CredentialKind for ProfileKeyCredentialKind {
    const NAME: &'static str = "profile key";
    const CREDENTIAL_TYPE: CredentialType = CredentialType::ProfileKey;

    type Secret = ProfileKeyKind;
    type Commitment = ProfileKeyCommitmentKind;
    type RequestContext = ProfileKeyCredentialRequestContextKind;
    type Request = ProfileKeyCredentialRequestKind;
    type Response = ProfileKeyCredentialResponseKind;
    type Credential = ProfileKeyCredentialArtifactKind;
    type Presentation = ProfileKeyCredentialPresentationKind;
}
