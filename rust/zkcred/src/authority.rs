//
// Copyright 2020-2022 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use log::{debug, warn};
use zkbackend::RandomnessBytes;

use crate::backend::{self, Operation, ProofBackend, RistrettoBackend};
use crate::error::VerificationFailed;
use crate::kinds::*;
use crate::randomness;

/// Generates and uses the issuer's key material.
#[derive(Clone, Debug, Default)]
pub struct ParameterAuthority<B = RistrettoBackend> {
    backend: B,
}

impl ParameterAuthority {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: ProofBackend> ParameterAuthority<B> {
    pub fn with_backend(backend: B) -> Self {
        Self { backend }
    }

    pub fn generate(&self, random_seed: &RandomnessBytes) -> ServerSecretParams {
        debug!("generating server params");
        backend::produce(
            &self.backend,
            Operation::ServerSecretParamsGenerate,
            Some(random_seed),
            &[],
        )
    }

    pub fn generate_fresh(&self) -> ServerSecretParams {
        self.generate(&randomness::fresh())
    }

    pub fn derive_public(&self, secret: &ServerSecretParams) -> ServerPublicParams {
        backend::produce(
            &self.backend,
            Operation::ServerSecretParamsGetPublicParams,
            None,
            &[secret.as_bytes()],
        )
    }

    pub fn sign(
        &self,
        secret: &ServerSecretParams,
        randomness: &RandomnessBytes,
        message: &[u8],
    ) -> NotarySignature {
        backend::produce(
            &self.backend,
            Operation::ServerSecretParamsSign,
            Some(randomness),
            &[secret.as_bytes(), message],
        )
    }

    pub fn sign_fresh(&self, secret: &ServerSecretParams, message: &[u8]) -> NotarySignature {
        self.sign(secret, &randomness::fresh(), message)
    }

    pub fn verify_signature(
        &self,
        public: &ServerPublicParams,
        message: &[u8],
        signature: &NotarySignature,
    ) -> Result<(), VerificationFailed> {
        backend::call(
            &self.backend,
            Operation::ServerPublicParamsVerifySignature,
            None,
            &[public.as_bytes(), message, signature.as_bytes()],
            0,
        )
        .map(|_| ())
        .ok_or_else(|| {
            warn!("server signature did not verify");
            VerificationFailed
        })
    }
}
