//
// Copyright 2020-2022 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use test_case::test_case;
use zkbackend::ffi::{invoke, ArtifactType, CredentialType, FfiStatus, Operation};
use zkbackend::*;

/// Simple wrapper around `assert_eq` that prints the hex-encoded values on
/// failure.
macro_rules! assert_hex_eq {
    ($lhs:expr, $rhs: expr) => {
        assert_eq!(
            &$lhs,
            &$rhs,
            "{} = {}, {} = {}",
            stringify!($lhs),
            hex::encode(&$lhs),
            stringify!($rhs),
            hex::encode(&$rhs),
        );
    };
}

fn call(
    operation: Operation,
    randomness: Option<&RandomnessBytes>,
    inputs: &[&[u8]],
    output_len: usize,
) -> Result<Vec<u8>, FfiStatus> {
    let mut out = vec![0u8; output_len];
    match invoke(operation, randomness, inputs, &mut out) {
        FfiStatus::Ok => Ok(out),
        status => Err(status),
    }
}

fn check_valid(artifact_type: ArtifactType, bytes: &[u8]) -> FfiStatus {
    invoke(
        Operation::CheckValidContents(artifact_type),
        None,
        &[bytes],
        &mut [],
    )
}

struct Setup {
    server_secret: Vec<u8>,
    server_public: Vec<u8>,
    group_secret: Vec<u8>,
    group_public: Vec<u8>,
}

impl Setup {
    fn new(server_seed: RandomnessBytes, group_seed: RandomnessBytes) -> Self {
        let server_secret = call(
            Operation::ServerSecretParamsGenerate,
            Some(&server_seed),
            &[],
            SERVER_SECRET_PARAMS_LEN,
        )
        .unwrap();
        let server_public = call(
            Operation::ServerSecretParamsGetPublicParams,
            None,
            &[&server_secret],
            SERVER_PUBLIC_PARAMS_LEN,
        )
        .unwrap();
        let group_secret = call(
            Operation::GroupSecretParamsGenerate,
            Some(&group_seed),
            &[],
            GROUP_SECRET_PARAMS_LEN,
        )
        .unwrap();
        let group_public = call(
            Operation::GroupSecretParamsGetPublicParams,
            None,
            &[&group_secret],
            GROUP_PUBLIC_PARAMS_LEN,
        )
        .unwrap();
        Self {
            server_secret,
            server_public,
            group_secret,
            group_public,
        }
    }
}

#[test]
fn auth_flow_through_ffi() {
    let setup = Setup::new(TEST_ARRAY_32, TEST_ARRAY_32_1);
    let redemption_time = Timestamp::from_epoch_seconds(18000 * SECONDS_PER_DAY).to_be_bytes();
    let ty = CredentialType::Auth;

    let response = call(
        Operation::Issue(ty),
        Some(&TEST_ARRAY_32_2),
        &[
            &setup.server_secret,
            &[],
            &TEST_ARRAY_16,
            &[],
            &redemption_time,
        ],
        AUTH_CREDENTIAL_RESPONSE_LEN,
    )
    .unwrap();
    assert_eq!(
        check_valid(ArtifactType::AuthCredentialResponse, &response),
        FfiStatus::Ok
    );

    let credential = call(
        Operation::Receive(ty),
        None,
        &[
            &setup.server_public,
            &[],
            &TEST_ARRAY_16,
            &redemption_time,
            &response,
        ],
        AUTH_CREDENTIAL_LEN,
    )
    .unwrap();

    let wrong_time = Timestamp::from_epoch_seconds(18001 * SECONDS_PER_DAY).to_be_bytes();
    assert_eq!(
        call(
            Operation::Receive(ty),
            None,
            &[
                &setup.server_public,
                &[],
                &TEST_ARRAY_16,
                &wrong_time,
                &response,
            ],
            AUTH_CREDENTIAL_LEN,
        ),
        Err(FfiStatus::InputError)
    );

    let presentation = call(
        Operation::CreatePresentation(ty),
        Some(&TEST_ARRAY_32_3),
        &[&setup.server_public, &setup.group_secret, &credential],
        AUTH_CREDENTIAL_PRESENTATION_LEN,
    )
    .unwrap();

    assert_eq!(
        call(
            Operation::VerifyPresentation(ty),
            None,
            &[&setup.server_secret, &setup.group_public, &presentation],
            0,
        ),
        Ok(vec![])
    );

    let disclosed = call(
        Operation::PresentationGetUuidCiphertext(ty),
        None,
        &[&presentation],
        UUID_CIPHERTEXT_LEN,
    )
    .unwrap();
    let expected = call(
        Operation::GroupSecretParamsEncryptUuid,
        None,
        &[&setup.group_secret, &TEST_ARRAY_16],
        UUID_CIPHERTEXT_LEN,
    )
    .unwrap();
    assert_hex_eq!(disclosed, expected);

    assert_eq!(
        call(
            Operation::PresentationGetRedemptionTime(ty),
            None,
            &[&presentation],
            TIMESTAMP_LEN,
        ),
        Ok(redemption_time.to_vec())
    );
}

#[test]
fn profile_key_flow_through_ffi() {
    let setup = Setup::new(TEST_ARRAY_32, TEST_ARRAY_32_1);
    let redemption_time = Timestamp::from_epoch_seconds(20 * SECONDS_PER_DAY).to_be_bytes();
    let profile_key = TEST_ARRAY_32_4;
    let ty = CredentialType::ProfileKey;

    let context = call(
        Operation::CreateRequestContext(ty),
        Some(&TEST_ARRAY_32_2),
        &[&setup.server_public, &TEST_ARRAY_16, &profile_key],
        PROFILE_KEY_CREDENTIAL_REQUEST_CONTEXT_LEN,
    )
    .unwrap();
    let request = call(
        Operation::GetRequest(ty),
        None,
        &[&context],
        PROFILE_KEY_CREDENTIAL_REQUEST_LEN,
    )
    .unwrap();
    let commitment = call(
        Operation::ProfileKeyGetCommitment,
        None,
        &[&profile_key, &TEST_ARRAY_16],
        PROFILE_KEY_COMMITMENT_LEN,
    )
    .unwrap();

    let other_commitment = call(
        Operation::ProfileKeyGetCommitment,
        None,
        &[&TEST_ARRAY_32_3, &TEST_ARRAY_16],
        PROFILE_KEY_COMMITMENT_LEN,
    )
    .unwrap();
    assert_eq!(
        call(
            Operation::Issue(ty),
            Some(&TEST_ARRAY_32_3),
            &[
                &setup.server_secret,
                &request,
                &TEST_ARRAY_16,
                &other_commitment,
                &redemption_time,
            ],
            PROFILE_KEY_CREDENTIAL_RESPONSE_LEN,
        ),
        Err(FfiStatus::InputError)
    );

    let response = call(
        Operation::Issue(ty),
        Some(&TEST_ARRAY_32_3),
        &[
            &setup.server_secret,
            &request,
            &TEST_ARRAY_16,
            &commitment,
            &redemption_time,
        ],
        PROFILE_KEY_CREDENTIAL_RESPONSE_LEN,
    )
    .unwrap();

    assert_eq!(
        call(
            Operation::Receive(ty),
            None,
            &[
                &setup.server_public,
                &context,
                &TEST_ARRAY_16_1,
                &redemption_time,
                &response,
            ],
            PROFILE_KEY_CREDENTIAL_LEN,
        ),
        Err(FfiStatus::InputError)
    );
    let credential = call(
        Operation::Receive(ty),
        None,
        &[
            &setup.server_public,
            &context,
            &TEST_ARRAY_16,
            &redemption_time,
            &response,
        ],
        PROFILE_KEY_CREDENTIAL_LEN,
    )
    .unwrap();

    let presentation = call(
        Operation::CreatePresentation(ty),
        Some(&TEST_ARRAY_32_4),
        &[&setup.server_public, &setup.group_secret, &credential],
        PROFILE_KEY_CREDENTIAL_PRESENTATION_LEN,
    )
    .unwrap();
    assert_eq!(
        call(
            Operation::VerifyPresentation(ty),
            None,
            &[&setup.server_secret, &setup.group_public, &presentation],
            0,
        ),
        Ok(vec![])
    );

    let disclosed = call(
        Operation::PresentationGetProfileKeyCiphertext(ty),
        None,
        &[&presentation],
        PROFILE_KEY_CIPHERTEXT_LEN,
    )
    .unwrap();
    let expected = call(
        Operation::GroupSecretParamsEncryptProfileKey,
        None,
        &[&setup.group_secret, &profile_key, &TEST_ARRAY_16],
        PROFILE_KEY_CIPHERTEXT_LEN,
    )
    .unwrap();
    assert_hex_eq!(disclosed, expected);
}

#[test]
fn presentations_are_bound_to_their_group() {
    let setup = Setup::new(TEST_ARRAY_32, TEST_ARRAY_32_1);
    let other = Setup::new(TEST_ARRAY_32, TEST_ARRAY_32_2);
    let redemption_time = Timestamp::from_epoch_seconds(0).to_be_bytes();
    let ty = CredentialType::Auth;

    let response = call(
        Operation::Issue(ty),
        Some(&TEST_ARRAY_32_3),
        &[&setup.server_secret, &[], &TEST_ARRAY_16, &[], &redemption_time],
        AUTH_CREDENTIAL_RESPONSE_LEN,
    )
    .unwrap();
    let credential = call(
        Operation::Receive(ty),
        None,
        &[
            &setup.server_public,
            &[],
            &TEST_ARRAY_16,
            &redemption_time,
            &response,
        ],
        AUTH_CREDENTIAL_LEN,
    )
    .unwrap();
    let presentation = call(
        Operation::CreatePresentation(ty),
        Some(&TEST_ARRAY_32_4),
        &[&setup.server_public, &setup.group_secret, &credential],
        AUTH_CREDENTIAL_PRESENTATION_LEN,
    )
    .unwrap();

    assert_eq!(
        call(
            Operation::VerifyPresentation(ty),
            None,
            &[&setup.server_secret, &other.group_public, &presentation],
            0,
        ),
        Err(FfiStatus::InputError)
    );
}

#[test]
fn signatures() {
    let setup = Setup::new(TEST_ARRAY_32, TEST_ARRAY_32_1);
    let message = TEST_ARRAY_32_2;
    let signature = call(
        Operation::ServerSecretParamsSign,
        Some(&TEST_ARRAY_32_3),
        &[&setup.server_secret, &message],
        SIGNATURE_LEN,
    )
    .unwrap();

    assert_eq!(
        call(
            Operation::ServerPublicParamsVerifySignature,
            None,
            &[&setup.server_public, &message, &signature],
            0,
        ),
        Ok(vec![])
    );

    let mut altered = message;
    altered[31] ^= 1;
    assert_eq!(
        call(
            Operation::ServerPublicParamsVerifySignature,
            None,
            &[&setup.server_public, &altered, &signature],
            0,
        ),
        Err(FfiStatus::InputError)
    );
}

#[test]
fn group_cipher_through_ffi() {
    let setup = Setup::new(TEST_ARRAY_32, TEST_ARRAY_32_1);
    let other = Setup::new(TEST_ARRAY_32, TEST_ARRAY_32_2);
    let profile_key = TEST_ARRAY_32_4;

    let uuid_ciphertext = call(
        Operation::GroupSecretParamsEncryptUuid,
        None,
        &[&setup.group_secret, &TEST_ARRAY_16],
        UUID_CIPHERTEXT_LEN,
    )
    .unwrap();
    assert_eq!(
        call(
            Operation::GroupSecretParamsDecryptUuid,
            None,
            &[&setup.group_secret, &uuid_ciphertext],
            UUID_LEN,
        ),
        Ok(TEST_ARRAY_16.to_vec())
    );
    assert_eq!(
        call(
            Operation::GroupSecretParamsDecryptUuid,
            None,
            &[&other.group_secret, &uuid_ciphertext],
            UUID_LEN,
        ),
        Err(FfiStatus::InputError)
    );

    let profile_key_ciphertext = call(
        Operation::GroupSecretParamsEncryptProfileKey,
        None,
        &[&setup.group_secret, &profile_key, &TEST_ARRAY_16],
        PROFILE_KEY_CIPHERTEXT_LEN,
    )
    .unwrap();
    assert_eq!(
        check_valid(ArtifactType::ProfileKeyCiphertext, &profile_key_ciphertext),
        FfiStatus::Ok
    );
    assert_eq!(
        call(
            Operation::GroupSecretParamsDecryptProfileKey,
            None,
            &[&setup.group_secret, &profile_key_ciphertext, &TEST_ARRAY_16],
            PROFILE_KEY_LEN,
        ),
        Ok(profile_key.to_vec())
    );
    assert_eq!(
        call(
            Operation::GroupSecretParamsDecryptProfileKey,
            None,
            &[&other.group_secret, &profile_key_ciphertext, &TEST_ARRAY_16],
            PROFILE_KEY_LEN,
        ),
        Err(FfiStatus::InputError)
    );

    let message = TEST_ARRAY_32_1;
    let signature = call(
        Operation::GroupSecretParamsSign,
        Some(&TEST_ARRAY_32_2),
        &[&setup.group_secret, &message],
        SIGNATURE_LEN,
    )
    .unwrap();
    assert_eq!(
        call(
            Operation::GroupPublicParamsVerifySignature,
            None,
            &[&setup.group_public, &message, &signature],
            0,
        ),
        Ok(vec![])
    );
    assert_eq!(
        call(
            Operation::GroupPublicParamsVerifySignature,
            None,
            &[&other.group_public, &message, &signature],
            0,
        ),
        Err(FfiStatus::InputError)
    );

    let version = call(
        Operation::ProfileKeyGetProfileKeyVersion,
        None,
        &[&profile_key, &TEST_ARRAY_16],
        PROFILE_KEY_VERSION_ENCODED_LEN,
    )
    .unwrap();
    assert!(version.iter().all(u8::is_ascii_hexdigit));
}

#[test]
fn group_params_from_master_key() {
    let setup = Setup::new(TEST_ARRAY_32, TEST_ARRAY_32_1);
    let master_key = call(
        Operation::GroupSecretParamsGetMasterKey,
        None,
        &[&setup.group_secret],
        GROUP_MASTER_KEY_LEN,
    )
    .unwrap();
    let derived = call(
        Operation::GroupSecretParamsDeriveFromMasterKey,
        None,
        &[&master_key],
        GROUP_SECRET_PARAMS_LEN,
    )
    .unwrap();
    assert_hex_eq!(derived, setup.group_secret);

    let identifier = call(
        Operation::GroupPublicParamsGetGroupIdentifier,
        None,
        &[&setup.group_public],
        GROUP_IDENTIFIER_LEN,
    )
    .unwrap();
    assert_eq!(identifier.len(), GROUP_IDENTIFIER_LEN);
}

#[test]
fn fixed_randomness_is_deterministic() {
    let a = Setup::new(TEST_ARRAY_32, TEST_ARRAY_32_1);
    let b = Setup::new(TEST_ARRAY_32, TEST_ARRAY_32_1);
    assert_hex_eq!(a.server_secret, b.server_secret);
    assert_hex_eq!(a.group_secret, b.group_secret);
}

#[test_case(ArtifactType::ServerSecretParams, SERVER_SECRET_PARAMS_LEN)]
#[test_case(ArtifactType::ServerPublicParams, SERVER_PUBLIC_PARAMS_LEN)]
#[test_case(ArtifactType::GroupSecretParams, GROUP_SECRET_PARAMS_LEN)]
#[test_case(ArtifactType::GroupPublicParams, GROUP_PUBLIC_PARAMS_LEN)]
fn generated_params_are_valid(artifact_type: ArtifactType, len: usize) {
    let setup = Setup::new(TEST_ARRAY_32, TEST_ARRAY_32_1);
    let bytes = match artifact_type {
        ArtifactType::ServerSecretParams => &setup.server_secret,
        ArtifactType::ServerPublicParams => &setup.server_public,
        ArtifactType::GroupSecretParams => &setup.group_secret,
        ArtifactType::GroupPublicParams => &setup.group_public,
        _ => unreachable!(),
    };
    assert_eq!(bytes.len(), len);
    assert_eq!(artifact_type.serialized_len(), len);
    assert_eq!(check_valid(artifact_type, bytes), FfiStatus::Ok);

    let mut wrong_version = bytes.clone();
    wrong_version[0] = 1;
    assert_eq!(
        check_valid(artifact_type, &wrong_version),
        FfiStatus::InputError
    );
}
