//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Ristretto-based proof backend for keyed-verification anonymous credentials.
//!
//! The typed API lives in [`api`]; the byte-buffer call surface used by protocol layers lives in
//! [`ffi`].

#![deny(unsafe_code)]

pub mod api;
pub mod common;
pub mod crypto;
pub mod ffi;

pub use api::*;
pub use common::constants::*;
pub use common::errors::*;
pub use common::serialization::{deserialize, serialize};
pub use common::simple_types::*;
