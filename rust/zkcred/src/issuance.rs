//
// Copyright 2020-2022 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Request, issue, receive.
//!
//! The client builds a request context (keeping it) and sends the request derived from it. The
//! issuer checks the request against the client's commitment and returns a response, which the
//! client turns into a credential with [`IssuanceProtocol::receive`]. Credential kinds without a
//! request use [`Empty`](crate::Empty) artifacts for the request, its context and the commitment.

use std::marker::PhantomData;

use log::{debug, warn};
use uuid::Uuid;
use zkbackend::{RandomnessBytes, Timestamp};

use crate::backend::{self, CredentialType, Operation, ProofBackend, RistrettoBackend};
use crate::container::Artifact;
use crate::credential::CredentialKind;
use crate::error::VerificationFailed;
use crate::kinds::*;
use crate::randomness;

pub struct IssuanceProtocol<K, B = RistrettoBackend> {
    backend: B,
    kind: PhantomData<fn() -> K>,
}

impl<K: CredentialKind> IssuanceProtocol<K> {
    pub fn new() -> Self {
        Self::with_backend(RistrettoBackend)
    }
}

impl<K: CredentialKind> Default for IssuanceProtocol<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: CredentialKind, B: ProofBackend> IssuanceProtocol<K, B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            kind: PhantomData,
        }
    }

    /// What the issuer needs to know about `secret` ahead of time, typically from a directory.
    pub fn commitment(&self, secret: &Artifact<K::Secret>, identity: Uuid) -> Artifact<K::Commitment> {
        match K::CREDENTIAL_TYPE {
            CredentialType::Auth => Artifact::from_trusted(Vec::new()),
            CredentialType::ProfileKey => backend::produce(
                &self.backend,
                Operation::ProfileKeyGetCommitment,
                None,
                &[secret.as_bytes(), identity.as_bytes()],
            ),
        }
    }

    pub fn create_request_context(
        &self,
        public: &ServerPublicParams,
        identity: Uuid,
        secret: &Artifact<K::Secret>,
        randomness: &RandomnessBytes,
    ) -> Artifact<K::RequestContext> {
        debug!("creating {} credential request", K::NAME);
        backend::produce(
            &self.backend,
            Operation::CreateRequestContext(K::CREDENTIAL_TYPE),
            Some(randomness),
            &[public.as_bytes(), identity.as_bytes(), secret.as_bytes()],
        )
    }

    pub fn create_request_context_fresh(
        &self,
        public: &ServerPublicParams,
        identity: Uuid,
        secret: &Artifact<K::Secret>,
    ) -> Artifact<K::RequestContext> {
        self.create_request_context(public, identity, secret, &randomness::fresh())
    }

    pub fn request(&self, context: &Artifact<K::RequestContext>) -> Artifact<K::Request> {
        backend::produce(
            &self.backend,
            Operation::GetRequest(K::CREDENTIAL_TYPE),
            None,
            &[context.as_bytes()],
        )
    }

    /// Issues a credential to `identity`, valid at `redemption_time`.
    ///
    /// Fails if the request does not match `commitment`.
    pub fn issue(
        &self,
        secret: &ServerSecretParams,
        request: &Artifact<K::Request>,
        identity: Uuid,
        commitment: &Artifact<K::Commitment>,
        redemption_time: Timestamp,
        randomness: &RandomnessBytes,
    ) -> Result<Artifact<K::Response>, VerificationFailed> {
        debug!(
            "issuing {} credential for redemption at {}",
            K::NAME,
            redemption_time.epoch_seconds()
        );
        backend::try_produce(
            &self.backend,
            Operation::Issue(K::CREDENTIAL_TYPE),
            Some(randomness),
            &[
                secret.as_bytes(),
                request.as_bytes(),
                identity.as_bytes(),
                commitment.as_bytes(),
                &redemption_time.to_be_bytes(),
            ],
        )
        .ok_or_else(|| {
            warn!("{} credential request did not verify", K::NAME);
            VerificationFailed
        })
    }

    pub fn issue_fresh(
        &self,
        secret: &ServerSecretParams,
        request: &Artifact<K::Request>,
        identity: Uuid,
        commitment: &Artifact<K::Commitment>,
        redemption_time: Timestamp,
    ) -> Result<Artifact<K::Response>, VerificationFailed> {
        self.issue(
            secret,
            request,
            identity,
            commitment,
            redemption_time,
            &randomness::fresh(),
        )
    }

    /// Checks the issuer's proof and extracts the credential.
    ///
    /// `identity` and `redemption_time` must be the ones the issuer used.
    pub fn receive(
        &self,
        public: &ServerPublicParams,
        context: &Artifact<K::RequestContext>,
        identity: Uuid,
        redemption_time: Timestamp,
        response: &Artifact<K::Response>,
    ) -> Result<Artifact<K::Credential>, VerificationFailed> {
        debug!("receiving {} credential", K::NAME);
        backend::try_produce(
            &self.backend,
            Operation::Receive(K::CREDENTIAL_TYPE),
            None,
            &[
                public.as_bytes(),
                context.as_bytes(),
                identity.as_bytes(),
                &redemption_time.to_be_bytes(),
                response.as_bytes(),
            ],
        )
        .ok_or_else(|| {
            warn!("{} credential response did not verify", K::NAME);
            VerificationFailed
        })
    }
}
