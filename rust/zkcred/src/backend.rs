//
// Copyright 2020-2021 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! The seam between the protocol layer and whatever does the arithmetic.

use log::error;
pub use zkbackend::ffi::{ArtifactType, CredentialType, Operation};
use zkbackend::ffi::FfiStatus;
use zkbackend::RandomnessBytes;

use crate::container::{Artifact, ArtifactKind};

/// The outcome of a backend call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendResult {
    /// The operation succeeded and produced these bytes.
    Ok(Vec<u8>),
    /// The inputs were structurally or cryptographically invalid.
    Rejected,
    /// The backend itself failed.
    Fault,
}

/// Performs all scheme-specific computation on opaque buffers.
///
/// Implementations must be pure: the same operation, randomness and inputs give the same result.
pub trait ProofBackend: Send + Sync {
    fn invoke(
        &self,
        operation: Operation,
        randomness: Option<&RandomnessBytes>,
        inputs: &[&[u8]],
        output_len: usize,
    ) -> BackendResult;
}

/// The built-in Ristretto255 backend.
#[derive(Copy, Clone, Debug, Default)]
pub struct RistrettoBackend;

impl ProofBackend for RistrettoBackend {
    fn invoke(
        &self,
        operation: Operation,
        randomness: Option<&RandomnessBytes>,
        inputs: &[&[u8]],
        output_len: usize,
    ) -> BackendResult {
        let mut out = vec![0u8; output_len];
        match zkbackend::ffi::invoke(operation, randomness, inputs, &mut out) {
            FfiStatus::Ok => BackendResult::Ok(out),
            FfiStatus::InputError => BackendResult::Rejected,
            FfiStatus::OtherFailure => BackendResult::Fault,
        }
    }
}

/// Aborts on a violated backend invariant.
///
/// There is no recovering from this; the caller's inputs were already validated.
#[track_caller]
pub fn fatal(operation: Operation, detail: &str) -> ! {
    error!("backend fault during {operation:?}: {detail}");
    panic!("internal error during {operation:?}: {detail}")
}

/// Calls the backend, returning `None` if it rejected the inputs.
pub(crate) fn call<B: ProofBackend + ?Sized>(
    backend: &B,
    operation: Operation,
    randomness: Option<&RandomnessBytes>,
    inputs: &[&[u8]],
    output_len: usize,
) -> Option<Vec<u8>> {
    match backend.invoke(operation, randomness, inputs, output_len) {
        BackendResult::Ok(bytes) if bytes.len() == output_len => Some(bytes),
        BackendResult::Ok(bytes) => fatal(
            operation,
            &format!("expected {output_len} bytes of output, got {}", bytes.len()),
        ),
        BackendResult::Rejected => None,
        BackendResult::Fault => fatal(operation, "backend reported a failure"),
    }
}

/// Like [`call`], for operations whose inputs are all trusted.
pub(crate) fn call_trusted<B: ProofBackend + ?Sized>(
    backend: &B,
    operation: Operation,
    randomness: Option<&RandomnessBytes>,
    inputs: &[&[u8]],
    output_len: usize,
) -> Vec<u8> {
    call(backend, operation, randomness, inputs, output_len)
        .unwrap_or_else(|| fatal(operation, "backend rejected trusted inputs"))
}

/// Runs an operation whose output is a `K` artifact.
pub(crate) fn produce<K: ArtifactKind, B: ProofBackend + ?Sized>(
    backend: &B,
    operation: Operation,
    randomness: Option<&RandomnessBytes>,
    inputs: &[&[u8]],
) -> Artifact<K> {
    Artifact::from_trusted(call_trusted(
        backend, operation, randomness, inputs, K::SIZE,
    ))
}

/// Like [`produce`], but a rejection is reported rather than fatal.
pub(crate) fn try_produce<K: ArtifactKind, B: ProofBackend + ?Sized>(
    backend: &B,
    operation: Operation,
    randomness: Option<&RandomnessBytes>,
    inputs: &[&[u8]],
) -> Option<Artifact<K>> {
    call(backend, operation, randomness, inputs, K::SIZE).map(Artifact::from_trusted)
}
