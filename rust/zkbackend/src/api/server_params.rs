//
// Copyright 2020-2022 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use serde::{Deserialize, Serialize};

use crate::common::errors::*;
use crate::common::serialization::ReservedByte;
use crate::common::sho::*;
use crate::common::simple_types::*;
use crate::{api, crypto};

#[derive(Clone, Serialize, Deserialize)]
pub struct ServerSecretParams {
    reserved: ReservedByte,
    pub(crate) auth_credentials_key_pair:
        crypto::credentials::KeyPair<crypto::credentials::AuthCredential>,
    pub(crate) profile_key_credentials_key_pair:
        crypto::credentials::KeyPair<crypto::credentials::ProfileKeyCredential>,
    sig_key_pair: crypto::signature::KeyPair,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ServerPublicParams {
    reserved: ReservedByte,
    pub(crate) auth_credentials_public_key: crypto::credentials::PublicKey,
    pub(crate) profile_key_credentials_public_key: crypto::credentials::PublicKey,
    sig_public_key: crypto::signature::PublicKey,
}

impl ServerSecretParams {
    pub fn generate(randomness: RandomnessBytes) -> Self {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Random_ServerSecretParams_Generate",
            &randomness,
        );

        let auth_credentials_key_pair = crypto::credentials::KeyPair::generate(&mut sho);
        let profile_key_credentials_key_pair = crypto::credentials::KeyPair::generate(&mut sho);
        let sig_key_pair = crypto::signature::KeyPair::generate(&mut sho);

        Self {
            reserved: Default::default(),
            auth_credentials_key_pair,
            profile_key_credentials_key_pair,
            sig_key_pair,
        }
    }

    pub fn get_public_params(&self) -> ServerPublicParams {
        ServerPublicParams {
            reserved: Default::default(),
            auth_credentials_public_key: self.auth_credentials_key_pair.get_public_key(),
            profile_key_credentials_public_key: self
                .profile_key_credentials_key_pair
                .get_public_key(),
            sig_public_key: self.sig_key_pair.get_public_key(),
        }
    }

    pub fn sign(&self, randomness: RandomnessBytes, message: &[u8]) -> NotarySignatureBytes {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Random_ServerSecretParams_Sign",
            &randomness,
        );
        self.sig_key_pair.sign(message, &mut sho)
    }

    pub fn issue_auth_credential(
        &self,
        randomness: RandomnessBytes,
        uuid: UidBytes,
        redemption_time: Timestamp,
    ) -> api::auth::AuthCredentialResponse {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Random_ServerSecretParams_IssueAuthCredential",
            &randomness,
        );

        let uid = crypto::uid_struct::UidStruct::from_uuid(uuid);
        let credential =
            self.auth_credentials_key_pair
                .create_auth_credential(uid, redemption_time, &mut sho);
        let proof = crypto::proofs::AuthCredentialIssuanceProof::new(
            self.auth_credentials_key_pair,
            credential,
            uid,
            redemption_time,
            &mut sho,
        );

        api::auth::AuthCredentialResponse {
            reserved: Default::default(),
            credential,
            proof,
        }
    }

    /// Checks the presentation against the redemption time it carries.
    ///
    /// Whether that time is acceptable right now is for the caller to decide.
    pub fn verify_auth_credential_presentation(
        &self,
        group_public_params: &api::groups::GroupPublicParams,
        presentation: &api::auth::AuthCredentialPresentation,
    ) -> Result<(), ZkBackendVerificationFailure> {
        presentation.proof.verify(
            self.auth_credentials_key_pair,
            group_public_params.uid_enc_public_key,
            presentation.ciphertext,
            presentation.redemption_time,
        )
    }

    pub fn issue_profile_key_credential(
        &self,
        randomness: RandomnessBytes,
        request: &api::profiles::ProfileKeyCredentialRequest,
        uuid: UidBytes,
        commitment: api::profiles::ProfileKeyCommitment,
        redemption_time: Timestamp,
    ) -> Result<api::profiles::ProfileKeyCredentialResponse, ZkBackendVerificationFailure> {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Random_ServerSecretParams_IssueProfileKeyCredential",
            &randomness,
        );

        request.proof.verify(
            request.public_key,
            request.ciphertext,
            commitment.commitment,
        )?;

        let uid = crypto::uid_struct::UidStruct::from_uuid(uuid);
        let blinded_credential_with_secret_nonce = self
            .profile_key_credentials_key_pair
            .create_blinded_profile_key_credential(
                uid,
                request.public_key,
                request.ciphertext,
                redemption_time,
                &mut sho,
            );

        let proof = crypto::proofs::ProfileKeyCredentialIssuanceProof::new(
            self.profile_key_credentials_key_pair,
            request.public_key,
            request.ciphertext,
            blinded_credential_with_secret_nonce,
            uid,
            redemption_time,
            &mut sho,
        );

        Ok(api::profiles::ProfileKeyCredentialResponse {
            reserved: Default::default(),
            blinded_credential: blinded_credential_with_secret_nonce
                .get_blinded_profile_key_credential(),
            proof,
        })
    }

    pub fn verify_profile_key_credential_presentation(
        &self,
        group_public_params: &api::groups::GroupPublicParams,
        presentation: &api::profiles::ProfileKeyCredentialPresentation,
    ) -> Result<(), ZkBackendVerificationFailure> {
        presentation.proof.verify(
            self.profile_key_credentials_key_pair,
            group_public_params.uid_enc_public_key,
            presentation.uid_enc_ciphertext,
            group_public_params.profile_key_enc_public_key,
            presentation.profile_key_enc_ciphertext,
            presentation.redemption_time,
        )
    }
}

impl ServerPublicParams {
    pub fn verify_signature(
        &self,
        message: &[u8],
        signature: NotarySignatureBytes,
    ) -> Result<(), ZkBackendVerificationFailure> {
        self.sig_public_key.verify(message, &signature)
    }

    pub fn receive_auth_credential(
        &self,
        uuid: UidBytes,
        redemption_time: Timestamp,
        response: &api::auth::AuthCredentialResponse,
    ) -> Result<api::auth::AuthCredential, ZkBackendVerificationFailure> {
        let uid = crypto::uid_struct::UidStruct::from_uuid(uuid);
        response.proof.verify(
            self.auth_credentials_public_key,
            response.credential,
            uid,
            redemption_time,
        )?;

        Ok(api::auth::AuthCredential {
            reserved: Default::default(),
            credential: response.credential,
            uid,
            redemption_time,
        })
    }

    pub fn create_auth_credential_presentation(
        &self,
        randomness: RandomnessBytes,
        group_secret_params: &api::groups::GroupSecretParams,
        auth_credential: &api::auth::AuthCredential,
    ) -> api::auth::AuthCredentialPresentation {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Random_ServerPublicParams_CreateAuthCredentialPresentation",
            &randomness,
        );

        let uid_enc_key_pair = group_secret_params.uid_enc_key_pair;
        let ciphertext = uid_enc_key_pair.encrypt(&auth_credential.uid);
        let proof = crypto::proofs::AuthCredentialPresentationProof::new(
            self.auth_credentials_public_key,
            uid_enc_key_pair,
            auth_credential.credential,
            auth_credential.uid,
            ciphertext,
            &mut sho,
        );

        api::auth::AuthCredentialPresentation {
            reserved: Default::default(),
            proof,
            ciphertext,
            redemption_time: auth_credential.redemption_time,
        }
    }

    pub fn create_profile_key_credential_request_context(
        &self,
        randomness: RandomnessBytes,
        uuid: UidBytes,
        profile_key: api::profiles::ProfileKey,
    ) -> api::profiles::ProfileKeyCredentialRequestContext {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Random_ServerPublicParams_CreateProfileKeyCredentialRequestContext",
            &randomness,
        );
        let profile_key_struct =
            crypto::profile_key_struct::ProfileKeyStruct::new(profile_key.bytes, uuid);

        let commitment_with_secret_nonce =
            crypto::profile_key_commitment::CommitmentWithSecretNonce::new(
                profile_key_struct,
                uuid,
            );

        let key_pair = crypto::profile_key_credential_request::KeyPair::generate(&mut sho);
        let ciphertext_with_secret_nonce = key_pair.encrypt(profile_key_struct, &mut sho);

        let proof = crypto::proofs::ProfileKeyCredentialRequestProof::new(
            key_pair,
            ciphertext_with_secret_nonce,
            commitment_with_secret_nonce,
            &mut sho,
        );

        api::profiles::ProfileKeyCredentialRequestContext {
            reserved: Default::default(),
            uid_bytes: uuid,
            profile_key_bytes: profile_key_struct.bytes,
            key_pair,
            ciphertext_with_secret_nonce,
            proof,
        }
    }

    /// Unblinds the response. The identity is the one the context was built for.
    pub fn receive_profile_key_credential(
        &self,
        context: &api::profiles::ProfileKeyCredentialRequestContext,
        response: &api::profiles::ProfileKeyCredentialResponse,
        redemption_time: Timestamp,
    ) -> Result<api::profiles::ProfileKeyCredential, ZkBackendVerificationFailure> {
        let uid = crypto::uid_struct::UidStruct::from_uuid(context.uid_bytes);

        response.proof.verify(
            self.profile_key_credentials_public_key,
            context.key_pair.get_public_key(),
            context.ciphertext_with_secret_nonce.get_ciphertext(),
            response.blinded_credential,
            uid,
            redemption_time,
        )?;

        let credential = context
            .key_pair
            .decrypt_blinded_profile_key_credential(response.blinded_credential);

        Ok(api::profiles::ProfileKeyCredential {
            reserved: Default::default(),
            credential,
            uid_bytes: context.uid_bytes,
            profile_key_bytes: context.profile_key_bytes,
            redemption_time,
        })
    }

    pub fn create_profile_key_credential_presentation(
        &self,
        randomness: RandomnessBytes,
        group_secret_params: &api::groups::GroupSecretParams,
        profile_key_credential: &api::profiles::ProfileKeyCredential,
    ) -> api::profiles::ProfileKeyCredentialPresentation {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Random_ServerPublicParams_CreateProfileKeyCredentialPresentation",
            &randomness,
        );

        let uid_enc_key_pair = group_secret_params.uid_enc_key_pair;
        let profile_key_enc_key_pair = group_secret_params.profile_key_enc_key_pair;

        let uid = crypto::uid_struct::UidStruct::from_uuid(profile_key_credential.uid_bytes);
        let uid_ciphertext = uid_enc_key_pair.encrypt(&uid);
        let profile_key_struct = crypto::profile_key_struct::ProfileKeyStruct::new(
            profile_key_credential.profile_key_bytes,
            profile_key_credential.uid_bytes,
        );
        let profile_key_ciphertext = profile_key_enc_key_pair.encrypt(&profile_key_struct);

        let proof = crypto::proofs::ProfileKeyCredentialPresentationProof::new(
            self.profile_key_credentials_public_key,
            uid_enc_key_pair,
            profile_key_enc_key_pair,
            profile_key_credential.credential,
            uid,
            uid_ciphertext,
            profile_key_struct,
            profile_key_ciphertext,
            &mut sho,
        );

        api::profiles::ProfileKeyCredentialPresentation {
            reserved: Default::default(),
            proof,
            uid_enc_ciphertext: uid_ciphertext,
            profile_key_enc_ciphertext: profile_key_ciphertext,
            redemption_time: profile_key_credential.redemption_time,
        }
    }
}
