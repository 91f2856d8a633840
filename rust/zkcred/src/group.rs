//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Per-group parameters.
//!
//! A presentation is bound to the group whose secret params created it. Presentations of the same
//! credential for different groups cannot be linked by anyone holding only one group's public
//! params, and the group's ciphertexts are deterministic so members can match them up.

use log::{debug, warn};
use uuid::Uuid;
use zkbackend::{
    GroupIdentifierBytes, RandomnessBytes, BLOB_ENCRYPTION_OVERHEAD, GROUP_IDENTIFIER_LEN,
    UUID_LEN,
};

use crate::backend::{self, Operation, ProofBackend, RistrettoBackend};
use crate::error::VerificationFailed;
use crate::kinds::*;
use crate::randomness;

#[derive(Clone, Debug, Default)]
pub struct GroupContext<B = RistrettoBackend> {
    backend: B,
}

impl GroupContext {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: ProofBackend> GroupContext<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn generate(&self, random_seed: &RandomnessBytes) -> GroupSecretParams {
        debug!("generating group params");
        backend::produce(
            &self.backend,
            Operation::GroupSecretParamsGenerate,
            Some(random_seed),
            &[],
        )
    }

    pub fn generate_fresh(&self) -> GroupSecretParams {
        self.generate(&randomness::fresh())
    }

    pub fn derive_from_master_key(&self, master_key: &GroupMasterKey) -> GroupSecretParams {
        backend::produce(
            &self.backend,
            Operation::GroupSecretParamsDeriveFromMasterKey,
            None,
            &[master_key.as_bytes()],
        )
    }

    pub fn master_key(&self, group_secret: &GroupSecretParams) -> GroupMasterKey {
        backend::produce(
            &self.backend,
            Operation::GroupSecretParamsGetMasterKey,
            None,
            &[group_secret.as_bytes()],
        )
    }

    pub fn derive_public(&self, group_secret: &GroupSecretParams) -> GroupPublicParams {
        backend::produce(
            &self.backend,
            Operation::GroupSecretParamsGetPublicParams,
            None,
            &[group_secret.as_bytes()],
        )
    }

    pub fn group_identifier(&self, group_public: &GroupPublicParams) -> GroupIdentifierBytes {
        let bytes = backend::call_trusted(
            &self.backend,
            Operation::GroupPublicParamsGetGroupIdentifier,
            None,
            &[group_public.as_bytes()],
            GROUP_IDENTIFIER_LEN,
        );
        let mut identifier = [0u8; GROUP_IDENTIFIER_LEN];
        identifier.copy_from_slice(&bytes);
        identifier
    }

    pub fn encrypt_uuid(&self, group_secret: &GroupSecretParams, uuid: Uuid) -> UuidCiphertext {
        backend::produce(
            &self.backend,
            Operation::GroupSecretParamsEncryptUuid,
            None,
            &[group_secret.as_bytes(), uuid.as_bytes()],
        )
    }

    pub fn encrypt_profile_key(
        &self,
        group_secret: &GroupSecretParams,
        profile_key: &ProfileKey,
        uuid: Uuid,
    ) -> ProfileKeyCiphertext {
        backend::produce(
            &self.backend,
            Operation::GroupSecretParamsEncryptProfileKey,
            None,
            &[group_secret.as_bytes(), profile_key.as_bytes(), uuid.as_bytes()],
        )
    }

    /// Fails for ciphertexts made under any other group's params.
    pub fn decrypt_uuid(
        &self,
        group_secret: &GroupSecretParams,
        ciphertext: &UuidCiphertext,
    ) -> Result<Uuid, VerificationFailed> {
        let bytes = backend::call(
            &self.backend,
            Operation::GroupSecretParamsDecryptUuid,
            None,
            &[group_secret.as_bytes(), ciphertext.as_bytes()],
            UUID_LEN,
        )
        .ok_or_else(|| {
            warn!("uuid ciphertext did not decrypt");
            VerificationFailed
        })?;
        Ok(Uuid::from_slice(&bytes).unwrap_or_else(|_| {
            backend::fatal(Operation::GroupSecretParamsDecryptUuid, "uuid of wrong length")
        }))
    }

    /// `uuid` is the owner of the profile key, normally just recovered with
    /// [`decrypt_uuid`](Self::decrypt_uuid).
    pub fn decrypt_profile_key(
        &self,
        group_secret: &GroupSecretParams,
        ciphertext: &ProfileKeyCiphertext,
        uuid: Uuid,
    ) -> Result<ProfileKey, VerificationFailed> {
        backend::try_produce(
            &self.backend,
            Operation::GroupSecretParamsDecryptProfileKey,
            None,
            &[group_secret.as_bytes(), ciphertext.as_bytes(), uuid.as_bytes()],
        )
        .ok_or_else(|| {
            warn!("profile key ciphertext did not decrypt");
            VerificationFailed
        })
    }

    pub fn profile_key_version(&self, profile_key: &ProfileKey, uuid: Uuid) -> ProfileKeyVersion {
        backend::produce(
            &self.backend,
            Operation::ProfileKeyGetProfileKeyVersion,
            None,
            &[profile_key.as_bytes(), uuid.as_bytes()],
        )
    }

    pub fn sign(
        &self,
        group_secret: &GroupSecretParams,
        randomness: &RandomnessBytes,
        message: &[u8],
    ) -> NotarySignature {
        backend::produce(
            &self.backend,
            Operation::GroupSecretParamsSign,
            Some(randomness),
            &[group_secret.as_bytes(), message],
        )
    }

    pub fn sign_fresh(&self, group_secret: &GroupSecretParams, message: &[u8]) -> NotarySignature {
        self.sign(group_secret, &randomness::fresh(), message)
    }

    pub fn verify_signature(
        &self,
        group_public: &GroupPublicParams,
        message: &[u8],
        signature: &NotarySignature,
    ) -> Result<(), VerificationFailed> {
        backend::call(
            &self.backend,
            Operation::GroupPublicParamsVerifySignature,
            None,
            &[group_public.as_bytes(), message, signature.as_bytes()],
            0,
        )
        .map(|_| ())
        .ok_or_else(|| {
            warn!("group signature did not verify");
            VerificationFailed
        })
    }

    /// Encrypts arbitrary data, such as a group title, under the group's blob key.
    ///
    /// The result is [`BLOB_ENCRYPTION_OVERHEAD`] bytes longer than `plaintext`.
    pub fn encrypt_blob(
        &self,
        group_secret: &GroupSecretParams,
        randomness: &RandomnessBytes,
        plaintext: &[u8],
    ) -> Vec<u8> {
        backend::call_trusted(
            &self.backend,
            Operation::GroupSecretParamsEncryptBlob,
            Some(randomness),
            &[group_secret.as_bytes(), plaintext],
            plaintext.len() + BLOB_ENCRYPTION_OVERHEAD,
        )
    }

    pub fn encrypt_blob_fresh(&self, group_secret: &GroupSecretParams, plaintext: &[u8]) -> Vec<u8> {
        self.encrypt_blob(group_secret, &randomness::fresh(), plaintext)
    }

    pub fn decrypt_blob(
        &self,
        group_secret: &GroupSecretParams,
        blob: &[u8],
    ) -> Result<Vec<u8>, VerificationFailed> {
        let Some(plaintext_len) = blob.len().checked_sub(BLOB_ENCRYPTION_OVERHEAD) else {
            warn!("blob too short: {} bytes", blob.len());
            return Err(VerificationFailed);
        };
        backend::call(
            &self.backend,
            Operation::GroupSecretParamsDecryptBlob,
            None,
            &[group_secret.as_bytes(), blob],
            plaintext_len,
        )
        .ok_or_else(|| {
            warn!("blob did not decrypt");
            VerificationFailed
        })
    }
}

#[cfg(test)]
mod tests {
    use zkbackend::{TEST_ARRAY_16, TEST_ARRAY_16_1, TEST_ARRAY_32, TEST_ARRAY_32_1};

    use super::*;

    #[test]
    fn master_key_round_trip() {
        let groups = GroupContext::new();
        let group_secret = groups.generate(&TEST_ARRAY_32);
        let master_key = groups.master_key(&group_secret);
        assert_eq!(groups.derive_from_master_key(&master_key), group_secret);

        let rebuilt = GroupMasterKey::new(&master_key.serialize()).expect("32 bytes");
        assert_eq!(groups.derive_from_master_key(&rebuilt), group_secret);
    }

    #[test]
    fn ciphertexts_are_deterministic_per_group() {
        let groups = GroupContext::new();
        let a = groups.generate(&TEST_ARRAY_32);
        let b = groups.generate(&TEST_ARRAY_32_1);
        let uuid = Uuid::from_bytes(TEST_ARRAY_16);

        assert_eq!(groups.encrypt_uuid(&a, uuid), groups.encrypt_uuid(&a, uuid));
        assert_ne!(groups.encrypt_uuid(&a, uuid), groups.encrypt_uuid(&b, uuid));
        assert_ne!(
            groups.group_identifier(&groups.derive_public(&a)),
            groups.group_identifier(&groups.derive_public(&b))
        );

        let profile_key = ProfileKey::new(&TEST_ARRAY_32_1).expect("32 bytes");
        assert_ne!(
            groups.encrypt_profile_key(&a, &profile_key, uuid),
            groups.encrypt_profile_key(&b, &profile_key, uuid)
        );
    }

    #[test]
    fn decryption_is_per_group() {
        let groups = GroupContext::new();
        let a = groups.generate(&TEST_ARRAY_32);
        let b = groups.generate(&TEST_ARRAY_32_1);
        let uuid = Uuid::from_bytes(TEST_ARRAY_16);
        let profile_key = ProfileKey::new(&TEST_ARRAY_32_1).expect("32 bytes");

        let uuid_ciphertext = groups.encrypt_uuid(&a, uuid);
        assert_eq!(groups.decrypt_uuid(&a, &uuid_ciphertext), Ok(uuid));
        assert_eq!(
            groups.decrypt_uuid(&b, &uuid_ciphertext),
            Err(VerificationFailed)
        );

        let profile_key_ciphertext = groups.encrypt_profile_key(&a, &profile_key, uuid);
        assert_eq!(
            groups.decrypt_profile_key(&a, &profile_key_ciphertext, uuid),
            Ok(profile_key.clone())
        );
        assert_eq!(
            groups.decrypt_profile_key(&b, &profile_key_ciphertext, uuid),
            Err(VerificationFailed)
        );
        assert_eq!(
            groups.decrypt_profile_key(
                &a,
                &profile_key_ciphertext,
                Uuid::from_bytes(TEST_ARRAY_16_1)
            ),
            Err(VerificationFailed)
        );
    }

    #[test]
    fn signatures_are_per_group() {
        let groups = GroupContext::new();
        let a = groups.generate(&TEST_ARRAY_32);
        let b = groups.generate(&TEST_ARRAY_32_1);

        let signature = groups.sign_fresh(&a, b"group title");
        groups
            .verify_signature(&groups.derive_public(&a), b"group title", &signature)
            .expect("valid signature");
        assert_eq!(
            groups.verify_signature(&groups.derive_public(&b), b"group title", &signature),
            Err(VerificationFailed)
        );
        assert_eq!(
            groups.verify_signature(&groups.derive_public(&a), b"group Title", &signature),
            Err(VerificationFailed)
        );
    }

    #[test]
    fn blobs() {
        let groups = GroupContext::new();
        let a = groups.generate(&TEST_ARRAY_32);
        let b = groups.generate(&TEST_ARRAY_32_1);

        for plaintext in [&b""[..], &b"x"[..], &[0x42; 1000][..]] {
            let blob = groups.encrypt_blob_fresh(&a, plaintext);
            assert_eq!(blob.len(), plaintext.len() + BLOB_ENCRYPTION_OVERHEAD);
            assert_eq!(groups.decrypt_blob(&a, &blob).as_deref(), Ok(plaintext));
            assert_eq!(groups.decrypt_blob(&b, &blob), Err(VerificationFailed));
        }

        let blob = groups.encrypt_blob(&a, &TEST_ARRAY_32_1, b"title");
        assert_eq!(blob, groups.encrypt_blob(&a, &TEST_ARRAY_32_1, b"title"));
        assert_eq!(
            groups.decrypt_blob(&a, &blob[..BLOB_ENCRYPTION_OVERHEAD - 1]),
            Err(VerificationFailed)
        );
        let mut tampered = blob.clone();
        tampered[0] ^= 1;
        assert_eq!(groups.decrypt_blob(&a, &tampered), Err(VerificationFailed));
    }

    #[test]
    fn profile_key_versions() {
        let groups = GroupContext::new();
        let profile_key = ProfileKey::new(&TEST_ARRAY_32).expect("32 bytes");
        let uuid = Uuid::from_bytes(TEST_ARRAY_16);

        let version = groups.profile_key_version(&profile_key, uuid);
        assert_eq!(version.as_str().len(), 64);
        assert!(version
            .as_str()
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
        assert_eq!(version, groups.profile_key_version(&profile_key, uuid));
        assert_ne!(
            version,
            groups.profile_key_version(&profile_key, Uuid::from_bytes(TEST_ARRAY_16_1))
        );
    }
}
