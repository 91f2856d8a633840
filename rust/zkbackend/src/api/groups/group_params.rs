//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use aes_gcm_siv::aead::generic_array::GenericArray;
use aes_gcm_siv::aead::{Aead, KeyInit};
use aes_gcm_siv::Aes256GcmSiv;
use serde::{Deserialize, Serialize};
use subtle::ConstantTimeEq;

use crate::common::constants::*;
use crate::common::errors::*;
use crate::common::serialization::ReservedByte;
use crate::common::sho::*;
use crate::common::simple_types::*;
use crate::{api, crypto};

#[derive(Copy, Clone, Default, Serialize, Deserialize)]
pub struct GroupMasterKey {
    pub(crate) bytes: GroupMasterKeyBytes,
}

impl PartialEq for GroupMasterKey {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.ct_eq(&other.bytes).into()
    }
}

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct GroupSecretParams {
    reserved: ReservedByte,
    master_key: GroupMasterKey,
    group_id: GroupIdentifierBytes,
    blob_key: AesKeyBytes,
    pub(crate) uid_enc_key_pair: crypto::uid_encryption::KeyPair,
    pub(crate) profile_key_enc_key_pair: crypto::profile_key_encryption::KeyPair,
    sig_key_pair: crypto::signature::KeyPair,
}

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct GroupPublicParams {
    reserved: ReservedByte,
    group_id: GroupIdentifierBytes,
    pub(crate) uid_enc_public_key: crypto::uid_encryption::PublicKey,
    pub(crate) profile_key_enc_public_key: crypto::profile_key_encryption::PublicKey,
    sig_public_key: crypto::signature::PublicKey,
}

impl GroupMasterKey {
    pub fn new(bytes: GroupMasterKeyBytes) -> Self {
        GroupMasterKey { bytes }
    }

    pub fn to_bytes(&self) -> GroupMasterKeyBytes {
        self.bytes
    }
}

impl GroupSecretParams {
    pub fn generate(randomness: RandomnessBytes) -> Self {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Random_GroupSecretParams_Generate",
            &randomness,
        );
        let master_key = GroupMasterKey::new(sho.squeeze_as_array());
        GroupSecretParams::derive_from_master_key(master_key)
    }

    pub fn derive_from_master_key(master_key: GroupMasterKey) -> Self {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_GroupMasterKey_GroupSecretParams_DeriveFromMasterKey",
            &master_key.bytes,
        );
        let group_id = sho.squeeze_as_array();
        let blob_key = sho.squeeze_as_array();
        let uid_enc_key_pair = crypto::uid_encryption::KeyPair::derive_from(&mut sho);
        let profile_key_enc_key_pair =
            crypto::profile_key_encryption::KeyPair::derive_from(&mut sho);
        let sig_key_pair = crypto::signature::KeyPair::generate(&mut sho);

        Self {
            reserved: Default::default(),
            master_key,
            group_id,
            blob_key,
            uid_enc_key_pair,
            profile_key_enc_key_pair,
            sig_key_pair,
        }
    }

    pub fn get_master_key(&self) -> GroupMasterKey {
        self.master_key
    }

    pub fn get_group_identifier(&self) -> GroupIdentifierBytes {
        self.group_id
    }

    pub fn get_public_params(&self) -> GroupPublicParams {
        GroupPublicParams {
            reserved: Default::default(),
            group_id: self.group_id,
            uid_enc_public_key: self.uid_enc_key_pair.get_public_key(),
            profile_key_enc_public_key: self.profile_key_enc_key_pair.get_public_key(),
            sig_public_key: self.sig_key_pair.get_public_key(),
        }
    }

    pub fn sign(&self, randomness: RandomnessBytes, message: &[u8]) -> NotarySignatureBytes {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Random_GroupSecretParams_Sign",
            &randomness,
        );
        self.sig_key_pair.sign(message, &mut sho)
    }

    pub fn encrypt_uuid(&self, uuid: UidBytes) -> api::groups::UuidCiphertext {
        let uid = crypto::uid_struct::UidStruct::from_uuid(uuid);
        api::groups::UuidCiphertext {
            reserved: Default::default(),
            ciphertext: self.uid_enc_key_pair.encrypt(&uid),
        }
    }

    pub fn decrypt_uuid(
        &self,
        ciphertext: api::groups::UuidCiphertext,
    ) -> Result<UidBytes, ZkBackendVerificationFailure> {
        let uid = self.uid_enc_key_pair.decrypt(&ciphertext.ciphertext)?;
        Ok(uid.to_bytes())
    }

    pub fn encrypt_profile_key(
        &self,
        profile_key: api::profiles::ProfileKey,
        uuid: UidBytes,
    ) -> api::groups::ProfileKeyCiphertext {
        let profile_key = crypto::profile_key_struct::ProfileKeyStruct::new(profile_key.bytes, uuid);
        api::groups::ProfileKeyCiphertext {
            reserved: Default::default(),
            ciphertext: self.profile_key_enc_key_pair.encrypt(&profile_key),
        }
    }

    /// Recovers a profile key encrypted for the owner of `uuid`.
    pub fn decrypt_profile_key(
        &self,
        ciphertext: api::groups::ProfileKeyCiphertext,
        uuid: UidBytes,
    ) -> Result<api::profiles::ProfileKey, ZkBackendVerificationFailure> {
        let profile_key = self
            .profile_key_enc_key_pair
            .decrypt(&ciphertext.ciphertext, uuid)?;
        Ok(api::profiles::ProfileKey::create(profile_key.bytes))
    }

    /// AES-256-GCM-SIV under the group's blob key.
    ///
    /// Output is `ciphertext || tag || nonce || reserved byte`.
    pub fn encrypt_blob(&self, randomness: RandomnessBytes, plaintext: &[u8]) -> Vec<u8> {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Random_GroupSecretParams_EncryptBlob",
            &randomness,
        );
        let nonce: [u8; AESGCM_NONCE_LEN] = sho.squeeze_as_array();
        let mut ciphertext = aesgcmsiv_encrypt(&self.blob_key, &nonce, plaintext);
        ciphertext.extend_from_slice(&nonce);
        ciphertext.push(0); // reserved byte
        ciphertext
    }

    pub fn decrypt_blob(&self, ciphertext: &[u8]) -> Result<Vec<u8>, ZkBackendVerificationFailure> {
        let Some((&0, rest)) = ciphertext.split_last() else {
            return Err(ZkBackendVerificationFailure);
        };
        if rest.len() < AESGCM_NONCE_LEN {
            return Err(ZkBackendVerificationFailure);
        }
        let (ciphertext, nonce) = rest.split_at(rest.len() - AESGCM_NONCE_LEN);
        aesgcmsiv_decrypt(&self.blob_key, nonce, ciphertext)
    }
}

fn aesgcmsiv_encrypt(key: &AesKeyBytes, nonce: &[u8], plaintext: &[u8]) -> Vec<u8> {
    Aes256GcmSiv::new(GenericArray::from_slice(key))
        .encrypt(GenericArray::from_slice(nonce), plaintext)
        .expect("plaintext fits in AES-GCM-SIV")
}

fn aesgcmsiv_decrypt(
    key: &AesKeyBytes,
    nonce: &[u8],
    ciphertext: &[u8],
) -> Result<Vec<u8>, ZkBackendVerificationFailure> {
    if ciphertext.len() < AESGCM_TAG_LEN {
        return Err(ZkBackendVerificationFailure);
    }
    Aes256GcmSiv::new(GenericArray::from_slice(key))
        .decrypt(GenericArray::from_slice(nonce), ciphertext)
        .map_err(|_| ZkBackendVerificationFailure)
}

impl GroupPublicParams {
    pub fn get_group_identifier(&self) -> GroupIdentifierBytes {
        self.group_id
    }

    pub fn verify_signature(
        &self,
        message: &[u8],
        signature: NotarySignatureBytes,
    ) -> Result<(), ZkBackendVerificationFailure> {
        self.sig_public_key.verify(message, &signature)
    }
}
