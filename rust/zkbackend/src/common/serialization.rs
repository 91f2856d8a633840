//
// Copyright 2023 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

use bincode::Options;
use serde::{Deserialize, Serialize};

use crate::ZkBackendDeserializationFailure;

fn backend_bincode_options() -> impl bincode::Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

/// Deserializes a type using the backend's standard encoding (based on bincode).
///
/// Trailing bytes are an error, so every artifact has exactly one valid length.
pub fn deserialize<'a, T: Deserialize<'a>>(
    bytes: &'a [u8],
) -> Result<T, ZkBackendDeserializationFailure> {
    backend_bincode_options()
        .deserialize(bytes)
        .map_err(|_| ZkBackendDeserializationFailure::new::<T>())
}

/// Serializes a type using the backend's standard encoding (based on bincode).
pub fn serialize<T: Serialize>(value: &T) -> Vec<u8> {
    backend_bincode_options()
        .serialize(value)
        .expect("cannot fail")
}

/// Constant version number `C` as a type.
///
/// Zero-sized; serializes as the single byte `C` and refuses to deserialize anything else.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct VersionByte<const C: u8>;

impl<const C: u8> From<VersionByte<C>> for u8 {
    fn from(VersionByte: VersionByte<C>) -> Self {
        C
    }
}

/// version byte was {found}, not {EXPECTED:?}
#[derive(Copy, Clone, Debug, Eq, PartialEq, displaydoc::Display)]
pub struct VersionMismatchError<const EXPECTED: u8> {
    found: u8,
}

impl<const C: u8> TryFrom<u8> for VersionByte<C> {
    type Error = VersionMismatchError<C>;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        (value == C)
            .then_some(VersionByte::<C>)
            .ok_or(VersionMismatchError::<C> { found: value })
    }
}

impl<const C: u8> Serialize for VersionByte<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        u8::serialize(&C, serializer)
    }
}

impl<'de, const C: u8> Deserialize<'de> for VersionByte<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let v = u8::deserialize(deserializer)?;
        v.try_into().map_err(|_| {
            <D::Error as serde::de::Error>::invalid_value(
                serde::de::Unexpected::Unsigned(v.into()),
                &format!("version `{C}`").as_str(),
            )
        })
    }
}

/// Value that always serializes to and from `0u8`.
pub type ReservedByte = VersionByte<0>;
