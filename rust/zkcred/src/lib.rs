//
// Copyright 2020-2022 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Keyed-verification anonymous credentials, as a protocol layer over an opaque proof backend.
//!
//! An issuer ([`ParameterAuthority`]) certifies attributes of a client, such as its identity and
//! a redemption time, with [`IssuanceProtocol`]. The client later proves possession of the
//! credential to the issuer with [`PresentationProtocol`], revealing its identity only encrypted
//! under a [`GroupContext`]'s key.
//!
//! Every value crossing the API is an [`Artifact`]: a fixed-length opaque byte string whose
//! contents are checked by the backend when built from untrusted input. All arithmetic happens
//! behind [`ProofBackend`]; [`RistrettoBackend`] is the built-in one.

#![deny(unsafe_code)]

pub mod authority;
pub mod backend;
pub mod config;
pub mod container;
pub mod credential;
pub mod error;
pub mod group;
pub mod issuance;
pub mod kinds;
pub mod presentation;
mod randomness;

pub use authority::ParameterAuthority;
pub use backend::{BackendResult, ProofBackend, RistrettoBackend};
pub use config::RedemptionWindow;
pub use container::{Artifact, ArtifactKind, Decodable, Empty};
pub use credential::{AuthCredentialKind, CredentialKind, ProfileKeyCredentialKind};
pub use error::{InvalidInput, InvalidInputReason, VerificationFailed, ZkCredError};
pub use group::GroupContext;
pub use issuance::IssuanceProtocol;
pub use kinds::*;
pub use presentation::PresentationProtocol;
pub use uuid::Uuid;
pub use zkbackend::{
    RandomnessBytes, Timestamp, BLOB_ENCRYPTION_OVERHEAD, RANDOMNESS_LEN, SECONDS_PER_DAY,
};
