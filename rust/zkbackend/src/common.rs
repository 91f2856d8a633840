//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

pub mod constants;
pub mod errors;
pub mod serialization;
pub mod sho;
pub mod simple_types;
