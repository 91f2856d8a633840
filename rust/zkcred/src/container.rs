//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Fixed-length opaque byte containers.

use std::marker::PhantomData;

use derive_where::derive_where;
use log::warn;
use subtle::ConstantTimeEq;

use crate::backend::{self, ArtifactType, Operation, ProofBackend, RistrettoBackend};
use crate::error::{InvalidInput, InvalidInputReason};

/// Describes one kind of artifact.
pub trait ArtifactKind: 'static {
    /// Exact length in bytes.
    const SIZE: usize;
    /// Used in errors and `Debug` output.
    const NAME: &'static str;
    /// If set, contents are checked with the backend when constructed from bytes.
    const VALIDATION: Option<ArtifactType> = None;
}

/// Marks kinds that may be built from untrusted bytes with [`Artifact::new`].
///
/// Credentials are deliberately excluded: the only way to get one is to receive it.
pub trait Decodable: ArtifactKind {}

/// Exactly `K::SIZE` bytes holding a `K`.
#[derive_where(Clone)]
pub struct Artifact<K: ArtifactKind> {
    bytes: Vec<u8>,
    kind: PhantomData<fn() -> K>,
}

impl<K: ArtifactKind> Artifact<K> {
    pub(crate) fn from_trusted(bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), K::SIZE, "{} built with wrong length", K::NAME);
        Self {
            bytes,
            kind: PhantomData,
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns a copy of the contents.
    pub fn serialize(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

impl<K: Decodable> Artifact<K> {
    /// Checks `bytes` against the built-in backend.
    pub fn new(bytes: &[u8]) -> Result<Self, InvalidInput> {
        Self::new_with_backend(bytes, &RistrettoBackend)
    }

    pub fn new_with_backend<B: ProofBackend + ?Sized>(
        bytes: &[u8],
        backend: &B,
    ) -> Result<Self, InvalidInput> {
        if bytes.len() != K::SIZE {
            warn!(
                "rejecting {}: expected {} bytes, got {}",
                K::NAME,
                K::SIZE,
                bytes.len()
            );
            return Err(InvalidInput {
                type_name: K::NAME,
                reason: InvalidInputReason::WrongLength {
                    expected: K::SIZE,
                    actual: bytes.len(),
                },
            });
        }

        if let Some(artifact_type) = K::VALIDATION {
            let operation = Operation::CheckValidContents(artifact_type);
            if backend::call(backend, operation, None, &[bytes], 0).is_none() {
                warn!("rejecting {}: invalid contents", K::NAME);
                return Err(InvalidInput {
                    type_name: K::NAME,
                    reason: InvalidInputReason::RejectedContents,
                });
            }
        }

        Ok(Self::from_trusted(bytes.to_vec()))
    }
}

impl Artifact<Empty> {
    pub fn empty() -> Self {
        Self::from_trusted(Vec::new())
    }
}

impl<K: ArtifactKind> PartialEq for Artifact<K> {
    fn eq(&self, other: &Self) -> bool {
        self.bytes.as_slice().ct_eq(other.bytes.as_slice()).into()
    }
}

impl<K: ArtifactKind> Eq for Artifact<K> {}

impl<K: ArtifactKind> std::fmt::Debug for Artifact<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", K::NAME, hex::encode(&self.bytes))
    }
}

/// Stands in for the request, request context and commitment of credentials issued without one.
pub enum Empty {}

impl ArtifactKind for Empty {
    const SIZE: usize = 0;
    const NAME: &'static str = "Empty";
}

impl Decodable for Empty {}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    enum Four {}

    impl ArtifactKind for Four {
        const SIZE: usize = 4;
        const NAME: &'static str = "Four";
    }

    impl Decodable for Four {}

    #[test]
    fn length_is_checked() {
        assert_matches!(
            Artifact::<Four>::new(&[1, 2, 3]),
            Err(InvalidInput {
                type_name: "Four",
                reason: InvalidInputReason::WrongLength {
                    expected: 4,
                    actual: 3
                }
            })
        );
        let artifact = Artifact::<Four>::new(&[1, 2, 3, 4]).expect("right length");
        assert_eq!(artifact.serialize(), [1, 2, 3, 4]);
        assert_eq!(format!("{artifact:?}"), "Four(01020304)");
    }

    #[test]
    fn serialize_is_a_copy() {
        let artifact = Artifact::<Four>::new(&[1, 2, 3, 4]).expect("right length");
        let mut copy = artifact.serialize();
        copy[0] = 9;
        assert_eq!(artifact.as_bytes(), [1, 2, 3, 4]);
    }

    #[test]
    fn equality() {
        let a = Artifact::<Four>::new(&[1, 2, 3, 4]).expect("right length");
        let b = Artifact::<Four>::new(&[1, 2, 3, 5]).expect("right length");
        assert_eq!(a, a.clone());
        assert_ne!(a, b);
        assert_eq!(Artifact::empty(), Artifact::<Empty>::new(&[]).expect("empty"));
    }
}
