//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Stateful hash object over HMAC-SHA256.
//!
//! Every derived scalar, point, and Fiat-Shamir challenge in this crate comes out of a `Sho`
//! that was first keyed with a domain-separation label.

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

const HASH_LEN: usize = 32;

#[derive(Clone)]
pub struct Sho {
    cv: [u8; HASH_LEN],
    absorbing: Option<HmacSha256>,
}

fn keyed(cv: &[u8; HASH_LEN]) -> HmacSha256 {
    HmacSha256::new_from_slice(cv).expect("HMAC accepts 256-bit keys")
}

impl Sho {
    pub fn new(label: &[u8], data: &[u8]) -> Self {
        let mut sho = Self::with_label(label);
        sho.absorb_and_ratchet(data);
        sho
    }

    pub fn with_label(label: &[u8]) -> Self {
        let mut sho = Sho {
            cv: [0; HASH_LEN],
            absorbing: None,
        };
        sho.absorb_and_ratchet(label);
        sho
    }

    pub fn absorb(&mut self, input: &[u8]) {
        self.absorbing
            .get_or_insert_with(|| keyed(&self.cv))
            .update(input);
    }

    pub fn ratchet(&mut self) {
        if let Some(mut hasher) = self.absorbing.take() {
            hasher.update(&[0x00]);
            self.cv = hasher.finalize().into_bytes().into();
        }
    }

    pub fn absorb_and_ratchet(&mut self, input: &[u8]) {
        self.absorb(input);
        self.ratchet();
    }

    pub fn squeeze(&mut self, outlen: usize) -> Vec<u8> {
        debug_assert!(self.absorbing.is_none(), "squeeze while absorbing");
        let prefix = keyed(&self.cv);
        let mut output = Vec::with_capacity(outlen);
        for (i, chunk_start) in (0..outlen).step_by(HASH_LEN).enumerate() {
            let mut block = prefix.clone();
            block.update(&(i as u64).to_be_bytes());
            block.update(&[0x01]);
            let digest = block.finalize().into_bytes();
            let take = HASH_LEN.min(outlen - chunk_start);
            output.extend_from_slice(&digest[..take]);
        }

        let mut next = prefix;
        next.update(&(outlen as u64).to_be_bytes());
        next.update(&[0x02]);
        self.cv = next.finalize().into_bytes().into();
        output
    }

    pub fn squeeze_as_array<const N: usize>(&mut self) -> [u8; N] {
        let mut out = [0u8; N];
        out.copy_from_slice(&self.squeeze(N));
        out
    }

    pub fn get_point(&mut self) -> RistrettoPoint {
        RistrettoPoint::from_uniform_bytes(&self.squeeze_as_array())
    }

    pub fn get_scalar(&mut self) -> Scalar {
        Scalar::from_bytes_mod_order_wide(&self.squeeze_as_array())
    }
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    #[test]
    fn squeeze_vectors() {
        let expected = hex!(
            "392cb9449373037fa0c11aebed69cca3b7d3bc9790878f341729c65d5506442f"
            "04986cb5c9098f277c3ea640a4dc6e90372b433a90af9aea7072eaba3398c4fe"
        );

        let mut sho = Sho::new(b"asd", b"asdasd");
        assert_eq!(sho.squeeze(64), expected);

        // A longer squeeze shares the prefix.
        let mut sho = Sho::new(b"asd", b"asdasd");
        let out = sho.squeeze(65);
        assert_eq!(out[..64], expected);
        assert_eq!(out[64], 0x7a);
    }

    #[test]
    fn split_absorb_matches_single_absorb() {
        let mut split = Sho::with_label(b"label");
        split.absorb(b"hello ");
        split.absorb(b"world");
        split.ratchet();

        let mut single = Sho::new(b"label", b"hello world");
        assert_eq!(split.squeeze(32), single.squeeze(32));
    }

    #[test]
    fn labels_separate_outputs() {
        let a = Sho::new(b"label_a", b"data").get_scalar();
        let b = Sho::new(b"label_b", b"data").get_scalar();
        assert_ne!(a, b);

        let p = Sho::new(b"label_a", b"data").get_point();
        let q = Sho::new(b"label_a", b"data").get_point();
        assert_eq!(p, q);
    }
}
