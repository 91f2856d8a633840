//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Every artifact the protocol layer handles, with its size and validation.

use zkbackend::common::constants::*;

use crate::backend::ArtifactType;
use crate::container::{Artifact, ArtifactKind, Decodable};

macro_rules! artifact_kind {
    ($(#[$meta:meta])* $kind:ident => $alias:ident, $size:expr, $validation:expr) => {
        $(#[$meta])*
        pub enum $kind {}

        impl ArtifactKind for $kind {
            const SIZE: usize = $size;
            const NAME: &'static str = stringify!($alias);
            const VALIDATION: Option<ArtifactType> = $validation;
        }

        pub type $alias = Artifact<$kind>;
    };
}

macro_rules! decodable {
    ($($kind:ident),* $(,)?) => {
        $(impl Decodable for $kind {})*
    };
}

artifact_kind!(
    /// The issuer's key material.
    ServerSecretParamsKind => ServerSecretParams,
    SERVER_SECRET_PARAMS_LEN,
    Some(ArtifactType::ServerSecretParams)
);
artifact_kind!(
    ServerPublicParamsKind => ServerPublicParams,
    SERVER_PUBLIC_PARAMS_LEN,
    Some(ArtifactType::ServerPublicParams)
);
artifact_kind!(
    /// A schnorr signature by the issuer: 32 bytes of challenge, then 32 of response.
    NotarySignatureKind => NotarySignature,
    SIGNATURE_LEN,
    None
);
artifact_kind!(
    /// The seed all of a group's parameters derive from.
    GroupMasterKeyKind => GroupMasterKey,
    GROUP_MASTER_KEY_LEN,
    None
);
artifact_kind!(
    GroupSecretParamsKind => GroupSecretParams,
    GROUP_SECRET_PARAMS_LEN,
    Some(ArtifactType::GroupSecretParams)
);
artifact_kind!(
    GroupPublicParamsKind => GroupPublicParams,
    GROUP_PUBLIC_PARAMS_LEN,
    Some(ArtifactType::GroupPublicParams)
);
artifact_kind!(
    UuidCiphertextKind => UuidCiphertext,
    UUID_CIPHERTEXT_LEN,
    Some(ArtifactType::UuidCiphertext)
);
artifact_kind!(
    ProfileKeyCiphertextKind => ProfileKeyCiphertext,
    PROFILE_KEY_CIPHERTEXT_LEN,
    Some(ArtifactType::ProfileKeyCiphertext)
);
artifact_kind!(ProfileKeyKind => ProfileKey, PROFILE_KEY_LEN, None);
artifact_kind!(
    /// Lowercase hex naming one version of a profile, as fetched by group members.
    ProfileKeyVersionKind => ProfileKeyVersion,
    PROFILE_KEY_VERSION_ENCODED_LEN,
    None
);
artifact_kind!(
    ProfileKeyCommitmentKind => ProfileKeyCommitment,
    PROFILE_KEY_COMMITMENT_LEN,
    Some(ArtifactType::ProfileKeyCommitment)
);

artifact_kind!(
    AuthCredentialResponseKind => AuthCredentialResponse,
    AUTH_CREDENTIAL_RESPONSE_LEN,
    Some(ArtifactType::AuthCredentialResponse)
);
artifact_kind!(
    /// Only ever produced by receiving a response, so never validated.
    AuthCredentialArtifactKind => AuthCredential,
    AUTH_CREDENTIAL_LEN,
    None
);
artifact_kind!(
    AuthCredentialPresentationKind => AuthCredentialPresentation,
    AUTH_CREDENTIAL_PRESENTATION_LEN,
    Some(ArtifactType::AuthCredentialPresentation)
);

artifact_kind!(
    /// Client-side state kept between requesting and receiving a profile key credential.
    ProfileKeyCredentialRequestContextKind => ProfileKeyCredentialRequestContext,
    PROFILE_KEY_CREDENTIAL_REQUEST_CONTEXT_LEN,
    Some(ArtifactType::ProfileKeyCredentialRequestContext)
);
artifact_kind!(
    ProfileKeyCredentialRequestKind => ProfileKeyCredentialRequest,
    PROFILE_KEY_CREDENTIAL_REQUEST_LEN,
    Some(ArtifactType::ProfileKeyCredentialRequest)
);
artifact_kind!(
    ProfileKeyCredentialResponseKind => ProfileKeyCredentialResponse,
    PROFILE_KEY_CREDENTIAL_RESPONSE_LEN,
    Some(ArtifactType::ProfileKeyCredentialResponse)
);
artifact_kind!(
    /// Only ever produced by receiving a response, so never validated.
    ProfileKeyCredentialArtifactKind => ProfileKeyCredential,
    PROFILE_KEY_CREDENTIAL_LEN,
    None
);
artifact_kind!(
    ProfileKeyCredentialPresentationKind => ProfileKeyCredentialPresentation,
    PROFILE_KEY_CREDENTIAL_PRESENTATION_LEN,
    Some(ArtifactType::ProfileKeyCredentialPresentation)
);

decodable!(
    ServerSecretParamsKind,
    ServerPublicParamsKind,
    NotarySignatureKind,
    GroupMasterKeyKind,
    GroupSecretParamsKind,
    GroupPublicParamsKind,
    UuidCiphertextKind,
    ProfileKeyCiphertextKind,
    ProfileKeyKind,
    ProfileKeyVersionKind,
    ProfileKeyCommitmentKind,
    AuthCredentialResponseKind,
    AuthCredentialPresentationKind,
    ProfileKeyCredentialRequestContextKind,
    ProfileKeyCredentialRequestKind,
    ProfileKeyCredentialResponseKind,
    ProfileKeyCredentialPresentationKind,
);

static_assertions::const_assert_eq!(NotarySignatureKind::SIZE, 64);
static_assertions::const_assert_eq!(ProfileKeyCredentialRequestKind::SIZE, 232);
static_assertions::const_assert_eq!(ProfileKeyVersionKind::SIZE, 64);
static_assertions::assert_impl_all!(ServerSecretParams: Send, Sync);
static_assertions::assert_not_impl_any!(AuthCredentialArtifactKind: Decodable);
static_assertions::assert_not_impl_any!(ProfileKeyCredentialArtifactKind: Decodable);

impl ProfileKey {
    /// A fresh random profile key.
    pub fn generate_fresh() -> Self {
        Self::from_trusted(crate::randomness::fresh().to_vec())
    }
}

impl ProfileKeyVersion {
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use test_case::test_case;

    use super::*;
    use crate::error::{InvalidInput, InvalidInputReason};

    #[test_case(63)]
    #[test_case(65)]
    #[test_case(0)]
    fn notary_signature_length(len: usize) {
        assert_matches!(
            NotarySignature::new(&vec![0; len]),
            Err(InvalidInput {
                type_name: "NotarySignature",
                reason: InvalidInputReason::WrongLength { expected: 64, actual }
            }) if actual == len
        );
    }

    #[test]
    fn notary_signature_contents_are_unchecked() {
        NotarySignature::new(&[0xFF; 64]).expect("any 64 bytes");
    }

    #[test_case(231)]
    #[test_case(233)]
    fn request_length(len: usize) {
        assert_matches!(
            ProfileKeyCredentialRequest::new(&vec![0; len]),
            Err(InvalidInput {
                reason: InvalidInputReason::WrongLength { expected: 232, .. },
                ..
            })
        );
    }

    #[test]
    fn invalid_group_secret_params() {
        assert_matches!(
            GroupSecretParams::new(&[0xFF; GROUP_SECRET_PARAMS_LEN]),
            Err(InvalidInput {
                type_name: "GroupSecretParams",
                reason: InvalidInputReason::RejectedContents
            })
        );
    }

    #[test]
    fn credentials_are_not_validated() {
        assert_eq!(AuthCredentialArtifactKind::VALIDATION, None);
        assert_eq!(ProfileKeyCredentialArtifactKind::VALIDATION, None);
    }

    #[test]
    fn fresh_profile_keys_differ() {
        assert_ne!(ProfileKey::generate_fresh(), ProfileKey::generate_fresh());
    }
}
