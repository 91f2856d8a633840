//
// Copyright 2022 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Flipping any single bit of an artifact must make the step that consumes it fail.

use std::sync::LazyLock;

use proptest::prelude::*;
use zkbackend::{TEST_ARRAY_16, TEST_ARRAY_32, TEST_ARRAY_32_1, TEST_ARRAY_32_2, TEST_ARRAY_32_3};
use zkcred::*;

struct Fixture {
    secret: ServerSecretParams,
    public: ServerPublicParams,
    group_secret: GroupSecretParams,
    group_public: GroupPublicParams,
    identity: Uuid,
    redemption_time: Timestamp,
    profile_key: ProfileKey,
    context: ProfileKeyCredentialRequestContext,
    request: ProfileKeyCredentialRequest,
    response: ProfileKeyCredentialResponse,
    presentation: ProfileKeyCredentialPresentation,
    auth_response: AuthCredentialResponse,
    auth_presentation: AuthCredentialPresentation,
}

static FIXTURE: LazyLock<Fixture> = LazyLock::new(|| {
    let authority = ParameterAuthority::new();
    let secret = authority.generate(&TEST_ARRAY_32);
    let public = authority.derive_public(&secret);
    let groups = GroupContext::new();
    let group_secret = groups.generate(&TEST_ARRAY_32_1);
    let group_public = groups.derive_public(&group_secret);

    let identity = Uuid::from_bytes(TEST_ARRAY_16);
    let redemption_time = Timestamp::from_epoch_seconds(20_000 * SECONDS_PER_DAY);
    let profile_key = ProfileKey::new(&TEST_ARRAY_32_2).expect("32 bytes");

    let issuance = IssuanceProtocol::<ProfileKeyCredentialKind>::new();
    let context = issuance.create_request_context(&public, identity, &profile_key, &TEST_ARRAY_32_3);
    let request = issuance.request(&context);
    let response = issuance
        .issue(
            &secret,
            &request,
            identity,
            &issuance.commitment(&profile_key, identity),
            redemption_time,
            &TEST_ARRAY_32_1,
        )
        .expect("valid request");
    let credential = issuance
        .receive(&public, &context, identity, redemption_time, &response)
        .expect("valid response");
    let presentation = PresentationProtocol::<ProfileKeyCredentialKind>::new().create_presentation(
        &public,
        &group_secret,
        &credential,
        &TEST_ARRAY_32_2,
    );

    let auth = IssuanceProtocol::<AuthCredentialKind>::new();
    let auth_response = auth
        .issue(
            &secret,
            &Artifact::empty(),
            identity,
            &Artifact::empty(),
            redemption_time,
            &TEST_ARRAY_32_3,
        )
        .expect("no request to reject");
    let auth_credential = auth
        .receive(&public, &Artifact::empty(), identity, redemption_time, &auth_response)
        .expect("valid response");
    let auth_presentation = PresentationProtocol::<AuthCredentialKind>::new().create_presentation(
        &public,
        &group_secret,
        &auth_credential,
        &TEST_ARRAY_32,
    );

    Fixture {
        secret,
        public,
        group_secret,
        group_public,
        identity,
        redemption_time,
        profile_key,
        context,
        request,
        response,
        presentation,
        auth_response,
        auth_presentation,
    }
});

fn flip(bytes: &[u8], bit: usize) -> Vec<u8> {
    let mut bytes = bytes.to_vec();
    bytes[bit / 8] ^= 1 << (bit % 8);
    bytes
}

/// Decodes tampered bytes and runs `consume` on them, returning whether anything noticed.
fn rejected<K: Decodable, T>(
    bytes: Vec<u8>,
    consume: impl FnOnce(&Artifact<K>) -> Result<T, VerificationFailed>,
) -> bool {
    match Artifact::<K>::new(&bytes) {
        Err(InvalidInput {
            reason: InvalidInputReason::RejectedContents,
            ..
        }) => true,
        Err(e) => panic!("unexpected error: {e}"),
        Ok(artifact) => consume(&artifact).is_err(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn tampered_request(bit in 0..ProfileKeyCredentialRequestKind::SIZE * 8) {
        let f = &*FIXTURE;
        let issuance = IssuanceProtocol::<ProfileKeyCredentialKind>::new();
        let commitment = issuance.commitment(&f.profile_key, f.identity);
        let was_rejected = rejected(flip(&f.request.serialize(), bit), |request| {
            issuance.issue(
                &f.secret,
                request,
                f.identity,
                &commitment,
                f.redemption_time,
                &TEST_ARRAY_32_3,
            )
        });
        prop_assert!(was_rejected);
    }

    #[test]
    fn tampered_response(bit in 0..ProfileKeyCredentialResponseKind::SIZE * 8) {
        let f = &*FIXTURE;
        let issuance = IssuanceProtocol::<ProfileKeyCredentialKind>::new();
        let was_rejected = rejected(flip(&f.response.serialize(), bit), |response| {
            issuance.receive(&f.public, &f.context, f.identity, f.redemption_time, response)
        });
        prop_assert!(was_rejected);
    }

    #[test]
    fn tampered_presentation(bit in 0..ProfileKeyCredentialPresentationKind::SIZE * 8) {
        let f = &*FIXTURE;
        let presentations = PresentationProtocol::<ProfileKeyCredentialKind>::new();
        let was_rejected = rejected(flip(&f.presentation.serialize(), bit), |presentation| {
            presentations.verify_presentation(&f.secret, &f.group_public, presentation)
        });
        prop_assert!(was_rejected);
    }

    #[test]
    fn tampered_auth_response(bit in 0..AuthCredentialResponseKind::SIZE * 8) {
        let f = &*FIXTURE;
        let issuance = IssuanceProtocol::<AuthCredentialKind>::new();
        let was_rejected = rejected(flip(&f.auth_response.serialize(), bit), |response| {
            issuance.receive(
                &f.public,
                &Artifact::empty(),
                f.identity,
                f.redemption_time,
                response,
            )
        });
        prop_assert!(was_rejected);
    }

    #[test]
    fn tampered_auth_presentation(bit in 0..AuthCredentialPresentationKind::SIZE * 8) {
        let f = &*FIXTURE;
        let presentations = PresentationProtocol::<AuthCredentialKind>::new();
        let was_rejected = rejected(flip(&f.auth_presentation.serialize(), bit), |presentation| {
            presentations.verify_presentation(&f.secret, &f.group_public, presentation)
        });
        prop_assert!(was_rejected);
    }
}

#[test]
fn untampered_artifacts_are_accepted() {
    let f = &*FIXTURE;
    let presentations = PresentationProtocol::<ProfileKeyCredentialKind>::new();
    presentations
        .verify_presentation(&f.secret, &f.group_public, &f.presentation)
        .expect("valid presentation");
    PresentationProtocol::<AuthCredentialKind>::new()
        .verify_presentation(&f.secret, &f.group_public, &f.auth_presentation)
        .expect("valid presentation");
    assert_eq!(
        presentations.uuid_ciphertext(&f.presentation),
        GroupContext::new().encrypt_uuid(&f.group_secret, f.identity)
    );
}
