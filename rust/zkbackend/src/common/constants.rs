//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

pub const NUM_AUTH_CRED_ATTRIBUTES: usize = 3;
pub const NUM_PROFILE_KEY_CRED_ATTRIBUTES: usize = 4;

pub const AES_KEY_LEN: usize = 32;
pub const AESGCM_NONCE_LEN: usize = 12;
pub const AESGCM_TAG_LEN: usize = 16;
pub const GROUP_MASTER_KEY_LEN: usize = 32;
pub const GROUP_IDENTIFIER_LEN: usize = 32;
pub const PROFILE_KEY_LEN: usize = 32;
pub const PROFILE_KEY_VERSION_LEN: usize = 32;
pub const PROFILE_KEY_VERSION_ENCODED_LEN: usize = PROFILE_KEY_VERSION_LEN * 2;
pub const RANDOMNESS_LEN: usize = 32;
pub const SIGNATURE_LEN: usize = 64;
pub const TIMESTAMP_LEN: usize = 8;
pub const UUID_LEN: usize = 16;

pub const SERVER_SECRET_PARAMS_LEN: usize = 769;
pub const SERVER_PUBLIC_PARAMS_LEN: usize = 161;
pub const GROUP_SECRET_PARAMS_LEN: usize = 353;
pub const GROUP_PUBLIC_PARAMS_LEN: usize = 129;
pub const UUID_CIPHERTEXT_LEN: usize = 65;
pub const PROFILE_KEY_CIPHERTEXT_LEN: usize = 65;
pub const PROFILE_KEY_COMMITMENT_LEN: usize = 65;

pub const AUTH_CREDENTIAL_RESPONSE_LEN: usize = 361;
pub const AUTH_CREDENTIAL_LEN: usize = 185;
pub const AUTH_CREDENTIAL_PRESENTATION_LEN: usize = 497;

pub const PROFILE_KEY_CREDENTIAL_REQUEST_CONTEXT_LEN: usize = 345;
pub const PROFILE_KEY_CREDENTIAL_REQUEST_LEN: usize = 232;
pub const PROFILE_KEY_CREDENTIAL_RESPONSE_LEN: usize = 457;
pub const PROFILE_KEY_CREDENTIAL_LEN: usize = 153;
pub const PROFILE_KEY_CREDENTIAL_PRESENTATION_LEN: usize = 689;

/// What [`encrypt_blob`](crate::api::groups::GroupSecretParams::encrypt_blob) adds to a
/// plaintext: the tag, the nonce and a reserved byte.
pub const BLOB_ENCRYPTION_OVERHEAD: usize = AESGCM_TAG_LEN + AESGCM_NONCE_LEN + 1;

static_assertions::const_assert_eq!(SIGNATURE_LEN, 64);
static_assertions::const_assert_eq!(PROFILE_KEY_CREDENTIAL_REQUEST_LEN, 232);

pub const SECONDS_PER_DAY: u64 = 86400;

pub const TEST_ARRAY_16: [u8; 16] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15,
];

pub const TEST_ARRAY_16_1: [u8; 16] = [
    100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115,
];

pub const TEST_ARRAY_32: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31,
];

pub const TEST_ARRAY_32_1: [u8; 32] = [
    100, 101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111, 112, 113, 114, 115, 116, 117, 118,
    119, 120, 121, 122, 123, 124, 125, 126, 127, 128, 129, 130, 131,
];

pub const TEST_ARRAY_32_2: [u8; 32] = [
    200, 201, 202, 203, 204, 205, 206, 207, 208, 209, 210, 211, 212, 213, 214, 215, 216, 217, 218,
    219, 220, 221, 222, 223, 224, 225, 226, 227, 228, 229, 230, 231,
];

pub const TEST_ARRAY_32_3: [u8; 32] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26,
    27, 28, 29, 30, 31, 32,
];

pub const TEST_ARRAY_32_4: [u8; 32] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25, 26, 27,
    28, 29, 30, 31, 32, 33,
];
