//
// Copyright 2020 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Fiat-Shamir Schnorr proofs of knowledge for systems of linear equations over Ristretto.
//!
//! A statement is a list of equations of the form
//!
//! ```text
//! P = s1*Q1 + s2*Q2 + ...
//! ```
//!
//! over named scalars (the witness) and named points (public values). The point named `G` is
//! always the Ristretto base point.
//!
//! Transcript:
//!
//! ```text
//! sho = SHO(label)
//! sho.absorb(description || all points); ratchet
//!     nonce_sho = sho.clone()
//!     nonce_sho.absorb(randomness || witness); ratchet
//!     nonce_sho.absorb(message); ratchet
//!     nonce[i] = nonce_sho.squeeze(64)   (one per witness scalar)
//! sho.absorb(commitments || message); ratchet
//! challenge = sho.squeeze(64)
//! ```
//!
//! Proof bytes are the challenge followed by one response per scalar, in order of first
//! appearance in the statement.

use std::collections::HashMap;

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::MultiscalarMul;
use subtle::ConstantTimeEq;

use crate::common::sho::Sho;
use crate::common::simple_types::RandomnessBytes;

const PROOF_LABEL: &[u8] = b"ZkBackend_Ristretto_LinearStatement_Proof";
const SCALAR_LEN: usize = 32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error, displaydoc::Display)]
pub enum ProofError {
    /// no value supplied for `{0}`
    MissingArgument(&'static str),
    /// proof failed to verify
    VerificationFailure,
    /// freshly created proof did not verify
    ProofCreationFailure,
}

/// Named values to substitute into a [`Statement`].
#[derive(Clone, Debug)]
pub struct Args<T>(HashMap<&'static str, T>);

pub type ScalarArgs = Args<Scalar>;
pub type PointArgs = Args<RistrettoPoint>;

impl<T: Copy> Args<T> {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    pub fn add(&mut self, name: &'static str, value: T) {
        self.0.insert(name, value);
    }

    fn resolve(&self, names: &[&'static str]) -> Result<Vec<T>, ProofError> {
        names
            .iter()
            .map(|name| {
                self.0
                    .get(name)
                    .copied()
                    .ok_or(ProofError::MissingArgument(*name))
            })
            .collect()
    }
}

impl<T: Copy> Default for Args<T> {
    fn default() -> Self {
        Self::new()
    }
}

struct Equation {
    lhs: u8,
    terms: Vec<(u8, u8)>,
}

pub struct Statement {
    equations: Vec<Equation>,
    scalars: Vec<&'static str>,
    points: Vec<&'static str>,
}

fn intern(names: &mut Vec<&'static str>, name: &'static str) -> u8 {
    let index = names.iter().position(|n| *n == name).unwrap_or_else(|| {
        names.push(name);
        names.len() - 1
    });
    u8::try_from(index).expect("at most 256 names per statement")
}

impl Default for Statement {
    fn default() -> Self {
        Self::new()
    }
}

impl Statement {
    pub fn new() -> Self {
        Self {
            equations: Vec::new(),
            scalars: Vec::new(),
            points: vec!["G"],
        }
    }

    /// Adds `lhs = Σ scalar * point` to the statement.
    ///
    /// Panics if `terms` is empty; statements are fixed at compile time.
    pub fn add(&mut self, lhs: &'static str, terms: &[(&'static str, &'static str)]) {
        assert!(!terms.is_empty(), "equation for {lhs} has no terms");
        assert!(self.equations.len() < usize::from(u8::MAX));
        let lhs = intern(&mut self.points, lhs);
        let terms = terms
            .iter()
            .map(|&(scalar, point)| {
                (
                    intern(&mut self.scalars, scalar),
                    intern(&mut self.points, point),
                )
            })
            .collect();
        self.equations.push(Equation { lhs, terms });
    }

    pub fn proof_len(&self) -> usize {
        SCALAR_LEN * (1 + self.scalars.len())
    }

    pub fn prove(
        &self,
        scalar_args: &ScalarArgs,
        point_args: &PointArgs,
        message: &[u8],
        randomness: &RandomnessBytes,
    ) -> Result<Vec<u8>, ProofError> {
        let witness = scalar_args.resolve(&self.scalars)?;
        let points = self.point_values(point_args)?;
        let mut sho = self.transcript(&points);

        let mut nonce_sho = sho.clone();
        nonce_sho.absorb(randomness);
        for scalar in &witness {
            nonce_sho.absorb(scalar.as_bytes());
        }
        nonce_sho.ratchet();
        nonce_sho.absorb_and_ratchet(message);
        let nonces: Vec<Scalar> = (0..witness.len())
            .map(|_| nonce_sho.get_scalar())
            .collect();

        let commitments = self.apply(&nonces, &points, None);
        let challenge = Self::challenge(&mut sho, &commitments, message);

        let mut proof = Vec::with_capacity(self.proof_len());
        proof.extend_from_slice(challenge.as_bytes());
        for (nonce, secret) in nonces.iter().zip(&witness) {
            proof.extend_from_slice((nonce + challenge * secret).as_bytes());
        }

        // A proof that fails to verify means the witness was wrong; never release it.
        match self.verify(&proof, point_args, message) {
            Ok(()) => Ok(proof),
            Err(ProofError::VerificationFailure) => Err(ProofError::ProofCreationFailure),
            Err(e) => Err(e),
        }
    }

    pub fn verify(
        &self,
        proof: &[u8],
        point_args: &PointArgs,
        message: &[u8],
    ) -> Result<(), ProofError> {
        if proof.len() != self.proof_len() {
            return Err(ProofError::VerificationFailure);
        }
        let mut parsed = proof.chunks_exact(SCALAR_LEN).map(|chunk| {
            let mut bytes = [0u8; SCALAR_LEN];
            bytes.copy_from_slice(chunk);
            Option::<Scalar>::from(Scalar::from_canonical_bytes(bytes))
                .ok_or(ProofError::VerificationFailure)
        });
        let claimed_challenge = parsed.next().ok_or(ProofError::VerificationFailure)??;
        let responses = parsed.collect::<Result<Vec<_>, _>>()?;

        let points = self.point_values(point_args)?;
        let mut sho = self.transcript(&points);
        let commitments = self.apply(&responses, &points, Some(claimed_challenge));
        let challenge = Self::challenge(&mut sho, &commitments, message);

        if bool::from(challenge.ct_eq(&claimed_challenge)) {
            Ok(())
        } else {
            Err(ProofError::VerificationFailure)
        }
    }

    fn point_values(&self, point_args: &PointArgs) -> Result<Vec<RistrettoPoint>, ProofError> {
        let mut values = Vec::with_capacity(self.points.len());
        values.push(RISTRETTO_BASEPOINT_POINT);
        values.extend(point_args.resolve(&self.points[1..])?);
        Ok(values)
    }

    fn description(&self) -> Vec<u8> {
        let mut out = vec![self.equations.len() as u8];
        for Equation { lhs, terms } in &self.equations {
            out.push(*lhs);
            out.push(terms.len() as u8);
            for (scalar, point) in terms {
                out.extend([*scalar, *point]);
            }
        }
        out
    }

    fn transcript(&self, points: &[RistrettoPoint]) -> Sho {
        let mut sho = Sho::with_label(PROOF_LABEL);
        sho.absorb(&self.description());
        for point in points {
            sho.absorb(point.compress().as_bytes());
        }
        sho.ratchet();
        sho
    }

    fn challenge(sho: &mut Sho, commitments: &[RistrettoPoint], message: &[u8]) -> Scalar {
        for commitment in commitments {
            sho.absorb(commitment.compress().as_bytes());
        }
        sho.absorb_and_ratchet(message);
        sho.get_scalar()
    }

    /// Evaluates every right-hand side with `scalars`, subtracting `challenge * lhs` if given.
    fn apply(
        &self,
        scalars: &[Scalar],
        points: &[RistrettoPoint],
        challenge: Option<Scalar>,
    ) -> Vec<RistrettoPoint> {
        self.equations
            .iter()
            .map(|Equation { lhs, terms }| {
                let lhs_term = challenge.map(|c| (-c, points[usize::from(*lhs)]));
                let (term_scalars, term_points): (Vec<Scalar>, Vec<RistrettoPoint>) = terms
                    .iter()
                    .map(|(s, p)| (scalars[usize::from(*s)], points[usize::from(*p)]))
                    .chain(lhs_term)
                    .unzip();
                RistrettoPoint::multiscalar_mul(term_scalars, term_points)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::sho::Sho;

    fn dleq() -> Statement {
        let mut st = Statement::new();
        st.add("A", &[("a", "G")]);
        st.add("B", &[("a", "H")]);
        st
    }

    fn dleq_args() -> (ScalarArgs, PointArgs) {
        let mut sho = Sho::new(b"Test_Statement", b"");
        let a = sho.get_scalar();
        let h = sho.get_point();

        let mut scalar_args = ScalarArgs::new();
        scalar_args.add("a", a);
        let mut point_args = PointArgs::new();
        point_args.add("A", a * RISTRETTO_BASEPOINT_POINT);
        point_args.add("B", a * h);
        point_args.add("H", h);
        (scalar_args, point_args)
    }

    #[test]
    fn prove_and_verify() {
        let st = dleq();
        let (scalar_args, point_args) = dleq_args();
        let proof = st
            .prove(&scalar_args, &point_args, b"message", &[7u8; 32])
            .expect("valid witness");
        assert_eq!(proof.len(), 64);
        assert_eq!(proof.len(), st.proof_len());
        st.verify(&proof, &point_args, b"message").expect("verifies");

        // Same randomness, same proof.
        let again = st
            .prove(&scalar_args, &point_args, b"message", &[7u8; 32])
            .expect("valid witness");
        assert_eq!(proof, again);
    }

    #[test]
    fn wrong_message_or_points_fail() {
        let st = dleq();
        let (scalar_args, mut point_args) = dleq_args();
        let proof = st
            .prove(&scalar_args, &point_args, b"message", &[7u8; 32])
            .expect("valid witness");
        assert_eq!(
            st.verify(&proof, &point_args, b"massage"),
            Err(ProofError::VerificationFailure)
        );

        point_args.add("B", RISTRETTO_BASEPOINT_POINT);
        assert_eq!(
            st.verify(&proof, &point_args, b"message"),
            Err(ProofError::VerificationFailure)
        );
    }

    #[test]
    fn every_bit_of_proof_matters() {
        let st = dleq();
        let (scalar_args, point_args) = dleq_args();
        let proof = st
            .prove(&scalar_args, &point_args, b"", &[0u8; 32])
            .expect("valid witness");
        for bit in 0..proof.len() * 8 {
            let mut tampered = proof.clone();
            tampered[bit / 8] ^= 1 << (bit % 8);
            assert!(st.verify(&tampered, &point_args, b"").is_err(), "bit {bit}");
        }
        assert!(st.verify(&proof[1..], &point_args, b"").is_err());
    }

    #[test]
    fn bad_witness_is_caught_at_creation() {
        let st = dleq();
        let (_, point_args) = dleq_args();
        let mut scalar_args = ScalarArgs::new();
        scalar_args.add("a", Scalar::ONE);
        assert_eq!(
            st.prove(&scalar_args, &point_args, b"", &[0u8; 32]),
            Err(ProofError::ProofCreationFailure)
        );
    }

    #[test]
    fn missing_argument() {
        let st = dleq();
        let (scalar_args, mut point_args) = dleq_args();
        point_args.0.remove("H");
        assert_eq!(
            st.prove(&scalar_args, &point_args, b"", &[0u8; 32]),
            Err(ProofError::MissingArgument("H"))
        );
    }
}
