//
// Copyright 2020-2022 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Presenting a credential to a verifier.
//!
//! Every presentation is freshly rerandomized, so two presentations of the same credential share
//! nothing a verifier could use to link them except what they deliberately disclose: the group's
//! ciphertexts and the redemption time.

use std::marker::PhantomData;

use log::{debug, warn};
use zkbackend::{RandomnessBytes, Timestamp, TIMESTAMP_LEN};

use crate::backend::{self, Operation, ProofBackend, RistrettoBackend};
use crate::config::RedemptionWindow;
use crate::container::Artifact;
use crate::credential::{CredentialKind, ProfileKeyCredentialKind};
use crate::error::VerificationFailed;
use crate::kinds::*;
use crate::randomness;

pub struct PresentationProtocol<K, B = RistrettoBackend> {
    backend: B,
    window: RedemptionWindow,
    kind: PhantomData<fn() -> K>,
}

impl<K: CredentialKind> PresentationProtocol<K> {
    pub fn new() -> Self {
        Self::with_backend(RistrettoBackend)
    }
}

impl<K: CredentialKind> Default for PresentationProtocol<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CredentialKind, B: ProofBackend> PresentationProtocol<K, B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            window: RedemptionWindow::default(),
            kind: PhantomData,
        }
    }

    /// Replaces the window used by [`verify_presentation_at`](Self::verify_presentation_at).
    pub fn with_window(self, window: RedemptionWindow) -> Self {
        Self { window, ..self }
    }

    pub fn window(&self) -> RedemptionWindow {
        self.window
    }

    pub fn create_presentation(
        &self,
        public: &ServerPublicParams,
        group_secret: &GroupSecretParams,
        credential: &Artifact<K::Credential>,
        randomness: &RandomnessBytes,
    ) -> Artifact<K::Presentation> {
        debug!("creating {} credential presentation", K::NAME);
        backend::produce(
            &self.backend,
            Operation::CreatePresentation(K::CREDENTIAL_TYPE),
            Some(randomness),
            &[
                public.as_bytes(),
                group_secret.as_bytes(),
                credential.as_bytes(),
            ],
        )
    }

    pub fn create_presentation_fresh(
        &self,
        public: &ServerPublicParams,
        group_secret: &GroupSecretParams,
        credential: &Artifact<K::Credential>,
    ) -> Artifact<K::Presentation> {
        self.create_presentation(public, group_secret, credential, &randomness::fresh())
    }

    /// Checks the proof against the redemption time the presentation carries.
    ///
    /// Use [`verify_presentation_at`](Self::verify_presentation_at) to also check that time.
    pub fn verify_presentation(
        &self,
        secret: &ServerSecretParams,
        group_public: &GroupPublicParams,
        presentation: &Artifact<K::Presentation>,
    ) -> Result<(), VerificationFailed> {
        debug!("verifying {} credential presentation", K::NAME);
        backend::call(
            &self.backend,
            Operation::VerifyPresentation(K::CREDENTIAL_TYPE),
            None,
            &[
                secret.as_bytes(),
                group_public.as_bytes(),
                presentation.as_bytes(),
            ],
            0,
        )
        .map(|_| ())
        .ok_or_else(|| {
            warn!("{} credential presentation did not verify", K::NAME);
            VerificationFailed
        })
    }

    pub fn verify_presentation_at(
        &self,
        secret: &ServerSecretParams,
        group_public: &GroupPublicParams,
        presentation: &Artifact<K::Presentation>,
        current_time: Timestamp,
    ) -> Result<(), VerificationFailed> {
        let redemption_time = self.redemption_time(presentation);
        if !self.window.contains(redemption_time, current_time) {
            warn!(
                "{} credential presentation redeemable at {} presented at {}",
                K::NAME,
                redemption_time.epoch_seconds(),
                current_time.epoch_seconds()
            );
            return Err(VerificationFailed);
        }
        self.verify_presentation(secret, group_public, presentation)
    }

    pub fn uuid_ciphertext(&self, presentation: &Artifact<K::Presentation>) -> UuidCiphertext {
        backend::produce(
            &self.backend,
            Operation::PresentationGetUuidCiphertext(K::CREDENTIAL_TYPE),
            None,
            &[presentation.as_bytes()],
        )
    }

    pub fn redemption_time(&self, presentation: &Artifact<K::Presentation>) -> Timestamp {
        let bytes = backend::call_trusted(
            &self.backend,
            Operation::PresentationGetRedemptionTime(K::CREDENTIAL_TYPE),
            None,
            &[presentation.as_bytes()],
            TIMESTAMP_LEN,
        );
        let mut be_bytes = [0u8; TIMESTAMP_LEN];
        be_bytes.copy_from_slice(&bytes);
        Timestamp::from_be_bytes(be_bytes)
    }
}

impl<B: ProofBackend> PresentationProtocol<ProfileKeyCredentialKind, B> {
    pub fn profile_key_ciphertext(
        &self,
        presentation: &ProfileKeyCredentialPresentation,
    ) -> ProfileKeyCiphertext {
        backend::produce(
            &self.backend,
            Operation::PresentationGetProfileKeyCiphertext(ProfileKeyCredentialKind::CREDENTIAL_TYPE),
            None,
            &[presentation.as_bytes()],
        )
    }
}
