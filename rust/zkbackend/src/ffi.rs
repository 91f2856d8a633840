//
// Copyright 2020-2021 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Byte-buffer call surface.
//!
//! Every operation takes a list of input buffers and writes its result into a caller-sized output
//! buffer, reporting one of three [`FfiStatus`] codes. Inputs that a caller is expected to have
//! validated already (with [`Operation::CheckValidContents`]) are "trusted": failing to decode
//! one is an [`FfiStatus::OtherFailure`], not an input error.

use serde::de::DeserializeOwned;

use crate::api::auth::*;
use crate::api::groups::*;
use crate::api::profiles::*;
use crate::common::constants::*;
use crate::common::errors::*;
use crate::common::simple_types::*;
use crate::{ServerPublicParams, ServerSecretParams};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum FfiStatus {
    Ok = 0,
    InputError = 1,
    OtherFailure = 2,
}

/// Selects the operation set used by the credential lifecycle operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CredentialType {
    Auth,
    ProfileKey,
}

/// Artifacts with internal structure the backend can check.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactType {
    ServerSecretParams,
    ServerPublicParams,
    GroupSecretParams,
    GroupPublicParams,
    ProfileKeyCommitment,
    UuidCiphertext,
    ProfileKeyCiphertext,
    AuthCredentialResponse,
    AuthCredential,
    AuthCredentialPresentation,
    ProfileKeyCredentialRequestContext,
    ProfileKeyCredentialRequest,
    ProfileKeyCredentialResponse,
    ProfileKeyCredential,
    ProfileKeyCredentialPresentation,
}

impl ArtifactType {
    pub const fn serialized_len(self) -> usize {
        match self {
            ArtifactType::ServerSecretParams => SERVER_SECRET_PARAMS_LEN,
            ArtifactType::ServerPublicParams => SERVER_PUBLIC_PARAMS_LEN,
            ArtifactType::GroupSecretParams => GROUP_SECRET_PARAMS_LEN,
            ArtifactType::GroupPublicParams => GROUP_PUBLIC_PARAMS_LEN,
            ArtifactType::ProfileKeyCommitment => PROFILE_KEY_COMMITMENT_LEN,
            ArtifactType::UuidCiphertext => UUID_CIPHERTEXT_LEN,
            ArtifactType::ProfileKeyCiphertext => PROFILE_KEY_CIPHERTEXT_LEN,
            ArtifactType::AuthCredentialResponse => AUTH_CREDENTIAL_RESPONSE_LEN,
            ArtifactType::AuthCredential => AUTH_CREDENTIAL_LEN,
            ArtifactType::AuthCredentialPresentation => AUTH_CREDENTIAL_PRESENTATION_LEN,
            ArtifactType::ProfileKeyCredentialRequestContext => {
                PROFILE_KEY_CREDENTIAL_REQUEST_CONTEXT_LEN
            }
            ArtifactType::ProfileKeyCredentialRequest => PROFILE_KEY_CREDENTIAL_REQUEST_LEN,
            ArtifactType::ProfileKeyCredentialResponse => PROFILE_KEY_CREDENTIAL_RESPONSE_LEN,
            ArtifactType::ProfileKeyCredential => PROFILE_KEY_CREDENTIAL_LEN,
            ArtifactType::ProfileKeyCredentialPresentation => {
                PROFILE_KEY_CREDENTIAL_PRESENTATION_LEN
            }
        }
    }
}

/// The operations [`invoke`] can perform.
///
/// Input lists, in order ("R" marks operations that require randomness):
///
/// | Operation | Inputs | Output |
/// |---|---|---|
/// | `ServerSecretParamsGenerate` (R) | | server secret params |
/// | `ServerSecretParamsGetPublicParams` | secret | server public params |
/// | `ServerSecretParamsSign` (R) | secret, message | signature |
/// | `ServerPublicParamsVerifySignature` | public, message, signature | |
/// | `GroupSecretParamsGenerate` (R) | | group secret params |
/// | `GroupSecretParamsDeriveFromMasterKey` | master key | group secret params |
/// | `GroupSecretParamsGetMasterKey` | group secret | master key |
/// | `GroupSecretParamsGetPublicParams` | group secret | group public params |
/// | `GroupPublicParamsGetGroupIdentifier` | group public | identifier |
/// | `GroupSecretParamsSign` (R) | group secret, message | signature |
/// | `GroupPublicParamsVerifySignature` | group public, message, signature | |
/// | `GroupSecretParamsEncryptUuid` | group secret, uuid | uuid ciphertext |
/// | `GroupSecretParamsDecryptUuid` | group secret, uuid ciphertext | uuid |
/// | `GroupSecretParamsEncryptProfileKey` | group secret, profile key, uuid | profile key ciphertext |
/// | `GroupSecretParamsDecryptProfileKey` | group secret, profile key ciphertext, uuid | profile key |
/// | `GroupSecretParamsEncryptBlob` (R) | group secret, plaintext | blob |
/// | `GroupSecretParamsDecryptBlob` | group secret, blob | plaintext |
/// | `ProfileKeyGetCommitment` | profile key, uuid | commitment |
/// | `ProfileKeyGetProfileKeyVersion` | profile key, uuid | version |
/// | `CreateRequestContext` (R) | public, uuid, profile key | request context |
/// | `GetRequest` | request context | request |
/// | `Issue` (R) | secret, request, uuid, commitment, redemption time | response |
/// | `Receive` | public, request context, uuid, redemption time, response | credential |
/// | `CreatePresentation` (R) | public, group secret, credential | presentation |
/// | `VerifyPresentation` | secret, group public, presentation | |
/// | `PresentationGet*` | presentation | the disclosed field |
/// | `CheckValidContents` | artifact | |
///
/// Blobs are [`BLOB_ENCRYPTION_OVERHEAD`] bytes longer than their plaintext.
///
/// Auth credentials have no request: their request context, request, profile key and commitment
/// slots are empty buffers, and `CreateRequestContext`/`GetRequest` produce empty output.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    ServerSecretParamsGenerate,
    ServerSecretParamsGetPublicParams,
    ServerSecretParamsSign,
    ServerPublicParamsVerifySignature,
    GroupSecretParamsGenerate,
    GroupSecretParamsDeriveFromMasterKey,
    GroupSecretParamsGetMasterKey,
    GroupSecretParamsGetPublicParams,
    GroupPublicParamsGetGroupIdentifier,
    GroupSecretParamsSign,
    GroupPublicParamsVerifySignature,
    GroupSecretParamsEncryptUuid,
    GroupSecretParamsDecryptUuid,
    GroupSecretParamsEncryptProfileKey,
    GroupSecretParamsDecryptProfileKey,
    GroupSecretParamsEncryptBlob,
    GroupSecretParamsDecryptBlob,
    ProfileKeyGetCommitment,
    ProfileKeyGetProfileKeyVersion,
    CreateRequestContext(CredentialType),
    GetRequest(CredentialType),
    Issue(CredentialType),
    Receive(CredentialType),
    CreatePresentation(CredentialType),
    VerifyPresentation(CredentialType),
    PresentationGetUuidCiphertext(CredentialType),
    PresentationGetRedemptionTime(CredentialType),
    PresentationGetProfileKeyCiphertext(CredentialType),
    CheckValidContents(ArtifactType),
}

#[derive(Debug, thiserror::Error, displaydoc::Display)]
pub enum FfiError {
    /// verification failed
    Verification(#[from] ZkBackendVerificationFailure),
    /// invalid contents for {0}
    InvalidContents(&'static str),
    /// {0}
    CorruptInput(#[from] ZkBackendDeserializationFailure),
    /// expected {expected} inputs, got {actual}
    WrongInputCount { expected: usize, actual: usize },
    /// input {index} should be {expected} bytes, got {actual}
    WrongInputLength {
        index: usize,
        expected: usize,
        actual: usize,
    },
    /// operation requires randomness
    MissingRandomness,
    /// {0:?} is not supported
    Unsupported(Operation),
    /// output buffer should be {expected} bytes, got {actual}
    WrongOutputLength { expected: usize, actual: usize },
}

impl FfiError {
    pub fn status(&self) -> FfiStatus {
        match self {
            FfiError::Verification(_) | FfiError::InvalidContents(_) => FfiStatus::InputError,
            FfiError::CorruptInput(_)
            | FfiError::WrongInputCount { .. }
            | FfiError::WrongInputLength { .. }
            | FfiError::MissingRandomness
            | FfiError::Unsupported(_)
            | FfiError::WrongOutputLength { .. } => FfiStatus::OtherFailure,
        }
    }
}

/// Runs `operation`, filling `out` on success.
///
/// `out` is left untouched unless the result is [`FfiStatus::Ok`].
pub fn invoke(
    operation: Operation,
    randomness: Option<&RandomnessBytes>,
    inputs: &[&[u8]],
    out: &mut [u8],
) -> FfiStatus {
    let result = run(operation, randomness, inputs).and_then(|output| {
        if output.len() != out.len() {
            return Err(FfiError::WrongOutputLength {
                expected: output.len(),
                actual: out.len(),
            });
        }
        out.copy_from_slice(&output);
        Ok(())
    });

    match result {
        Ok(()) => FfiStatus::Ok,
        Err(e) => {
            let status = e.status();
            if status == FfiStatus::OtherFailure {
                log::error!("{operation:?} failed: {e}");
            } else {
                log::debug!("{operation:?} rejected its input: {e}");
            }
            status
        }
    }
}

struct Inputs<'a> {
    inputs: &'a [&'a [u8]],
}

impl<'a> Inputs<'a> {
    fn expect(inputs: &'a [&'a [u8]], expected: usize) -> Result<Self, FfiError> {
        if inputs.len() != expected {
            return Err(FfiError::WrongInputCount {
                expected,
                actual: inputs.len(),
            });
        }
        Ok(Self { inputs })
    }

    fn bytes(&self, index: usize) -> &'a [u8] {
        self.inputs[index]
    }

    fn fixed<const N: usize>(&self, index: usize) -> Result<[u8; N], FfiError> {
        let bytes = self.bytes(index);
        bytes.try_into().map_err(|_| FfiError::WrongInputLength {
            index,
            expected: N,
            actual: bytes.len(),
        })
    }

    fn empty(&self, index: usize) -> Result<(), FfiError> {
        self.fixed::<0>(index).map(|_| ())
    }

    fn timestamp(&self, index: usize) -> Result<Timestamp, FfiError> {
        self.fixed(index).map(Timestamp::from_be_bytes)
    }

    fn trusted<T: DeserializeOwned>(&self, index: usize) -> Result<T, FfiError> {
        Ok(crate::deserialize(self.bytes(index))?)
    }
}

fn required(randomness: Option<&RandomnessBytes>) -> Result<RandomnessBytes, FfiError> {
    randomness.copied().ok_or(FfiError::MissingRandomness)
}

fn run(
    operation: Operation,
    randomness: Option<&RandomnessBytes>,
    inputs: &[&[u8]],
) -> Result<Vec<u8>, FfiError> {
    use Operation::*;

    match operation {
        ServerSecretParamsGenerate => {
            Inputs::expect(inputs, 0)?;
            Ok(crate::serialize(&ServerSecretParams::generate(required(
                randomness,
            )?)))
        }
        ServerSecretParamsGetPublicParams => {
            let inputs = Inputs::expect(inputs, 1)?;
            let secret: ServerSecretParams = inputs.trusted(0)?;
            Ok(crate::serialize(&secret.get_public_params()))
        }
        ServerSecretParamsSign => {
            let inputs = Inputs::expect(inputs, 2)?;
            let secret: ServerSecretParams = inputs.trusted(0)?;
            Ok(secret
                .sign(required(randomness)?, inputs.bytes(1))
                .to_vec())
        }
        ServerPublicParamsVerifySignature => {
            let inputs = Inputs::expect(inputs, 3)?;
            let public: ServerPublicParams = inputs.trusted(0)?;
            public.verify_signature(inputs.bytes(1), inputs.fixed(2)?)?;
            Ok(vec![])
        }
        GroupSecretParamsGenerate => {
            Inputs::expect(inputs, 0)?;
            Ok(crate::serialize(&GroupSecretParams::generate(required(
                randomness,
            )?)))
        }
        GroupSecretParamsDeriveFromMasterKey => {
            let inputs = Inputs::expect(inputs, 1)?;
            let master_key = GroupMasterKey::new(inputs.fixed(0)?);
            Ok(crate::serialize(&GroupSecretParams::derive_from_master_key(
                master_key,
            )))
        }
        GroupSecretParamsGetMasterKey => {
            let inputs = Inputs::expect(inputs, 1)?;
            let group_secret: GroupSecretParams = inputs.trusted(0)?;
            Ok(group_secret.get_master_key().to_bytes().to_vec())
        }
        GroupSecretParamsGetPublicParams => {
            let inputs = Inputs::expect(inputs, 1)?;
            let group_secret: GroupSecretParams = inputs.trusted(0)?;
            Ok(crate::serialize(&group_secret.get_public_params()))
        }
        GroupPublicParamsGetGroupIdentifier => {
            let inputs = Inputs::expect(inputs, 1)?;
            let group_public: GroupPublicParams = inputs.trusted(0)?;
            Ok(group_public.get_group_identifier().to_vec())
        }
        GroupSecretParamsSign => {
            let inputs = Inputs::expect(inputs, 2)?;
            let group_secret: GroupSecretParams = inputs.trusted(0)?;
            Ok(group_secret
                .sign(required(randomness)?, inputs.bytes(1))
                .to_vec())
        }
        GroupPublicParamsVerifySignature => {
            let inputs = Inputs::expect(inputs, 3)?;
            let group_public: GroupPublicParams = inputs.trusted(0)?;
            group_public.verify_signature(inputs.bytes(1), inputs.fixed(2)?)?;
            Ok(vec![])
        }
        GroupSecretParamsEncryptUuid => {
            let inputs = Inputs::expect(inputs, 2)?;
            let group_secret: GroupSecretParams = inputs.trusted(0)?;
            Ok(crate::serialize(&group_secret.encrypt_uuid(inputs.fixed(1)?)))
        }
        GroupSecretParamsDecryptUuid => {
            let inputs = Inputs::expect(inputs, 2)?;
            let group_secret: GroupSecretParams = inputs.trusted(0)?;
            let ciphertext: UuidCiphertext = inputs.trusted(1)?;
            Ok(group_secret.decrypt_uuid(ciphertext)?.to_vec())
        }
        GroupSecretParamsEncryptProfileKey => {
            let inputs = Inputs::expect(inputs, 3)?;
            let group_secret: GroupSecretParams = inputs.trusted(0)?;
            let profile_key = ProfileKey::create(inputs.fixed(1)?);
            Ok(crate::serialize(
                &group_secret.encrypt_profile_key(profile_key, inputs.fixed(2)?),
            ))
        }
        GroupSecretParamsDecryptProfileKey => {
            let inputs = Inputs::expect(inputs, 3)?;
            let group_secret: GroupSecretParams = inputs.trusted(0)?;
            let ciphertext: ProfileKeyCiphertext = inputs.trusted(1)?;
            let profile_key = group_secret.decrypt_profile_key(ciphertext, inputs.fixed(2)?)?;
            Ok(profile_key.get_bytes().to_vec())
        }
        GroupSecretParamsEncryptBlob => {
            let inputs = Inputs::expect(inputs, 2)?;
            let group_secret: GroupSecretParams = inputs.trusted(0)?;
            Ok(group_secret.encrypt_blob(required(randomness)?, inputs.bytes(1)))
        }
        GroupSecretParamsDecryptBlob => {
            let inputs = Inputs::expect(inputs, 2)?;
            let group_secret: GroupSecretParams = inputs.trusted(0)?;
            Ok(group_secret.decrypt_blob(inputs.bytes(1))?)
        }
        ProfileKeyGetCommitment => {
            let inputs = Inputs::expect(inputs, 2)?;
            let profile_key = ProfileKey::create(inputs.fixed(0)?);
            Ok(crate::serialize(
                &profile_key.get_commitment(inputs.fixed(1)?),
            ))
        }
        ProfileKeyGetProfileKeyVersion => {
            let inputs = Inputs::expect(inputs, 2)?;
            let profile_key = ProfileKey::create(inputs.fixed(0)?);
            Ok(crate::serialize(
                &profile_key.get_profile_key_version(inputs.fixed(1)?),
            ))
        }
        CreateRequestContext(credential_type) => {
            let inputs = Inputs::expect(inputs, 3)?;
            let public: ServerPublicParams = inputs.trusted(0)?;
            let uuid = inputs.fixed(1)?;
            match credential_type {
                CredentialType::Auth => {
                    inputs.empty(2)?;
                    Ok(vec![])
                }
                CredentialType::ProfileKey => {
                    let profile_key = ProfileKey::create(inputs.fixed(2)?);
                    Ok(crate::serialize(
                        &public.create_profile_key_credential_request_context(
                            required(randomness)?,
                            uuid,
                            profile_key,
                        ),
                    ))
                }
            }
        }
        GetRequest(credential_type) => {
            let inputs = Inputs::expect(inputs, 1)?;
            match credential_type {
                CredentialType::Auth => {
                    inputs.empty(0)?;
                    Ok(vec![])
                }
                CredentialType::ProfileKey => {
                    let context: ProfileKeyCredentialRequestContext = inputs.trusted(0)?;
                    Ok(crate::serialize(&context.get_request()))
                }
            }
        }
        Issue(credential_type) => {
            let inputs = Inputs::expect(inputs, 5)?;
            let secret: ServerSecretParams = inputs.trusted(0)?;
            let uuid = inputs.fixed(2)?;
            let redemption_time = inputs.timestamp(4)?;
            let randomness = required(randomness)?;
            match credential_type {
                CredentialType::Auth => {
                    inputs.empty(1)?;
                    inputs.empty(3)?;
                    Ok(crate::serialize(&secret.issue_auth_credential(
                        randomness,
                        uuid,
                        redemption_time,
                    )))
                }
                CredentialType::ProfileKey => {
                    let request: ProfileKeyCredentialRequest = inputs.trusted(1)?;
                    let commitment: ProfileKeyCommitment = inputs.trusted(3)?;
                    let response = secret.issue_profile_key_credential(
                        randomness,
                        &request,
                        uuid,
                        commitment,
                        redemption_time,
                    )?;
                    Ok(crate::serialize(&response))
                }
            }
        }
        Receive(credential_type) => {
            let inputs = Inputs::expect(inputs, 5)?;
            let public: ServerPublicParams = inputs.trusted(0)?;
            let uuid: UidBytes = inputs.fixed(2)?;
            let redemption_time = inputs.timestamp(3)?;
            match credential_type {
                CredentialType::Auth => {
                    inputs.empty(1)?;
                    let response: AuthCredentialResponse = inputs.trusted(4)?;
                    Ok(crate::serialize(&public.receive_auth_credential(
                        uuid,
                        redemption_time,
                        &response,
                    )?))
                }
                CredentialType::ProfileKey => {
                    let context: ProfileKeyCredentialRequestContext = inputs.trusted(1)?;
                    let response: ProfileKeyCredentialResponse = inputs.trusted(4)?;
                    if context.uuid() != uuid {
                        return Err(ZkBackendVerificationFailure.into());
                    }
                    Ok(crate::serialize(&public.receive_profile_key_credential(
                        &context,
                        &response,
                        redemption_time,
                    )?))
                }
            }
        }
        CreatePresentation(credential_type) => {
            let inputs = Inputs::expect(inputs, 3)?;
            let public: ServerPublicParams = inputs.trusted(0)?;
            let group_secret: GroupSecretParams = inputs.trusted(1)?;
            let randomness = required(randomness)?;
            match credential_type {
                CredentialType::Auth => {
                    let credential: AuthCredential = inputs.trusted(2)?;
                    Ok(crate::serialize(&public.create_auth_credential_presentation(
                        randomness,
                        &group_secret,
                        &credential,
                    )))
                }
                CredentialType::ProfileKey => {
                    let credential: ProfileKeyCredential = inputs.trusted(2)?;
                    Ok(crate::serialize(
                        &public.create_profile_key_credential_presentation(
                            randomness,
                            &group_secret,
                            &credential,
                        ),
                    ))
                }
            }
        }
        VerifyPresentation(credential_type) => {
            let inputs = Inputs::expect(inputs, 3)?;
            let secret: ServerSecretParams = inputs.trusted(0)?;
            let group_public: GroupPublicParams = inputs.trusted(1)?;
            match credential_type {
                CredentialType::Auth => {
                    let presentation: AuthCredentialPresentation = inputs.trusted(2)?;
                    secret.verify_auth_credential_presentation(&group_public, &presentation)?;
                }
                CredentialType::ProfileKey => {
                    let presentation: ProfileKeyCredentialPresentation = inputs.trusted(2)?;
                    secret
                        .verify_profile_key_credential_presentation(&group_public, &presentation)?;
                }
            }
            Ok(vec![])
        }
        PresentationGetUuidCiphertext(credential_type) => {
            let inputs = Inputs::expect(inputs, 1)?;
            let ciphertext = match credential_type {
                CredentialType::Auth => inputs
                    .trusted::<AuthCredentialPresentation>(0)?
                    .get_uuid_ciphertext(),
                CredentialType::ProfileKey => inputs
                    .trusted::<ProfileKeyCredentialPresentation>(0)?
                    .get_uuid_ciphertext(),
            };
            Ok(crate::serialize(&ciphertext))
        }
        PresentationGetRedemptionTime(credential_type) => {
            let inputs = Inputs::expect(inputs, 1)?;
            let redemption_time = match credential_type {
                CredentialType::Auth => inputs
                    .trusted::<AuthCredentialPresentation>(0)?
                    .get_redemption_time(),
                CredentialType::ProfileKey => inputs
                    .trusted::<ProfileKeyCredentialPresentation>(0)?
                    .get_redemption_time(),
            };
            Ok(redemption_time.to_be_bytes().to_vec())
        }
        PresentationGetProfileKeyCiphertext(credential_type) => {
            let inputs = Inputs::expect(inputs, 1)?;
            match credential_type {
                CredentialType::Auth => Err(FfiError::Unsupported(operation)),
                CredentialType::ProfileKey => {
                    let presentation: ProfileKeyCredentialPresentation = inputs.trusted(0)?;
                    Ok(crate::serialize(&presentation.get_profile_key_ciphertext()))
                }
            }
        }
        CheckValidContents(artifact_type) => {
            let inputs = Inputs::expect(inputs, 1)?;
            check_valid_contents(artifact_type, inputs.bytes(0))?;
            Ok(vec![])
        }
    }
}

fn validate<T: DeserializeOwned>(bytes: &[u8]) -> Result<(), FfiError> {
    crate::deserialize::<T>(bytes)
        .map(|_| ())
        .map_err(|e| FfiError::InvalidContents(e.type_name()))
}

fn check_valid_contents(artifact_type: ArtifactType, bytes: &[u8]) -> Result<(), FfiError> {
    let expected = artifact_type.serialized_len();
    if bytes.len() != expected {
        return Err(FfiError::WrongInputLength {
            index: 0,
            expected,
            actual: bytes.len(),
        });
    }

    match artifact_type {
        ArtifactType::ServerSecretParams => validate::<ServerSecretParams>(bytes),
        ArtifactType::ServerPublicParams => validate::<ServerPublicParams>(bytes),
        ArtifactType::GroupSecretParams => validate::<GroupSecretParams>(bytes),
        ArtifactType::GroupPublicParams => validate::<GroupPublicParams>(bytes),
        ArtifactType::ProfileKeyCommitment => validate::<ProfileKeyCommitment>(bytes),
        ArtifactType::UuidCiphertext => validate::<UuidCiphertext>(bytes),
        ArtifactType::ProfileKeyCiphertext => validate::<ProfileKeyCiphertext>(bytes),
        ArtifactType::AuthCredentialResponse => validate::<AuthCredentialResponse>(bytes),
        ArtifactType::AuthCredential => validate::<AuthCredential>(bytes),
        ArtifactType::AuthCredentialPresentation => {
            validate::<AuthCredentialPresentation>(bytes)
        }
        ArtifactType::ProfileKeyCredentialRequestContext => {
            validate::<ProfileKeyCredentialRequestContext>(bytes)
        }
        ArtifactType::ProfileKeyCredentialRequest => {
            validate::<ProfileKeyCredentialRequest>(bytes)
        }
        ArtifactType::ProfileKeyCredentialResponse => {
            validate::<ProfileKeyCredentialResponse>(bytes)
        }
        ArtifactType::ProfileKeyCredential => validate::<ProfileKeyCredential>(bytes),
        ArtifactType::ProfileKeyCredentialPresentation => {
            validate::<ProfileKeyCredentialPresentation>(bytes)
        }
    }
}
