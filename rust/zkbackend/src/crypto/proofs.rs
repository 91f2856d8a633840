//
// Copyright 2020-2022 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Zero-knowledge proofs for issuance and presentation.
//!
//! Each proof is a [`Statement`] over the credential system's generators; the prover and verifier
//! build the same point assignments and differ only in who knows the scalars.

#![allow(non_snake_case)]

use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;
use serde::{Deserialize, Serialize};

use crate::common::errors::*;
use crate::common::sho::*;
use crate::common::simple_types::*;
use crate::crypto::credentials::{
    self, AuthCredential, BlindedProfileKeyCredential, BlindedProfileKeyCredentialWithSecretNonce,
    ProfileKeyCredential,
};
use crate::crypto::statement::{PointArgs, ProofError, ScalarArgs, Statement};
use crate::crypto::{
    profile_key_commitment, profile_key_credential_request, profile_key_encryption,
    profile_key_struct, uid_encryption, uid_struct,
};

#[derive(Clone, Serialize, Deserialize)]
pub struct AuthCredentialIssuanceProof {
    poksho_proof: Vec<u8>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ProfileKeyCredentialRequestProof {
    poksho_proof: Vec<u8>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct ProfileKeyCredentialIssuanceProof {
    poksho_proof: Vec<u8>,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct AuthCredentialPresentationProof {
    C_x0: RistrettoPoint,
    C_x1: RistrettoPoint,
    C_y1: RistrettoPoint,
    C_y2: RistrettoPoint,
    C_y3: RistrettoPoint,
    C_V: RistrettoPoint,
    poksho_proof: Vec<u8>,
}

/// Covers `E_B1` only. The masked key bytes in `E_B2` are checked against `E_B1` when a group
/// member decrypts them.
#[derive(Clone, Serialize, Deserialize)]
pub struct ProfileKeyCredentialPresentationProof {
    C_x0: RistrettoPoint,
    C_x1: RistrettoPoint,
    C_y1: RistrettoPoint,
    C_y2: RistrettoPoint,
    C_y3: RistrettoPoint,
    C_y4: RistrettoPoint,
    C_V: RistrettoPoint,
    poksho_proof: Vec<u8>,
}

fn verified(result: Result<(), ProofError>) -> Result<(), ZkBackendVerificationFailure> {
    result.map_err(|_| ZkBackendVerificationFailure)
}

/// Points shared by both issuance statements: the issuer's public key and the MAC generators.
fn issuer_point_args(
    public_key: credentials::PublicKey,
    t: Scalar,
    U: RistrettoPoint,
    num_attrs: usize,
) -> PointArgs {
    let system = credentials::SystemParams::get_hardcoded();
    let mut point_args = PointArgs::new();
    point_args.add("C_W", public_key.C_W);
    point_args.add("G_w", system.G_w);
    point_args.add("G_wprime", system.G_wprime);
    point_args.add("G_V-I", system.G_V - public_key.I);
    point_args.add("G_x0", system.G_x0);
    point_args.add("G_x1", system.G_x1);
    const G_Y_NAMES: [&str; 4] = ["G_y1", "G_y2", "G_y3", "G_y4"];
    for (name, G_y) in G_Y_NAMES.iter().zip(system.G_y).take(num_attrs) {
        point_args.add(*name, G_y);
    }
    point_args.add("U", U);
    point_args.add("tU", t * U);
    point_args
}

fn issuer_scalar_args<S>(key_pair: &credentials::KeyPair<S>, num_attrs: usize) -> ScalarArgs {
    let mut scalar_args = ScalarArgs::new();
    scalar_args.add("w", key_pair.w);
    scalar_args.add("wprime", key_pair.wprime);
    scalar_args.add("x0", key_pair.x0);
    scalar_args.add("x1", key_pair.x1);
    const Y_NAMES: [&str; 4] = ["y1", "y2", "y3", "y4"];
    for (name, y) in Y_NAMES.iter().zip(key_pair.y).take(num_attrs) {
        scalar_args.add(*name, y);
    }
    scalar_args
}

impl AuthCredentialIssuanceProof {
    pub fn get_poksho_statement() -> Statement {
        let mut st = Statement::new();
        st.add("C_W", &[("w", "G_w"), ("wprime", "G_wprime")]);
        st.add(
            "G_V-I",
            &[
                ("x0", "G_x0"),
                ("x1", "G_x1"),
                ("y1", "G_y1"),
                ("y2", "G_y2"),
                ("y3", "G_y3"),
            ],
        );
        st.add(
            "V",
            &[
                ("w", "G_w"),
                ("x0", "U"),
                ("x1", "tU"),
                ("y1", "M1"),
                ("y2", "M2"),
                ("y3", "M3"),
            ],
        );
        st
    }

    fn point_args(
        public_key: credentials::PublicKey,
        credential: AuthCredential,
        uid: &uid_struct::UidStruct,
        redemption_time: Timestamp,
    ) -> PointArgs {
        let [M1, M2, M3] = credentials::auth_credential_points(uid, redemption_time);
        let mut point_args = issuer_point_args(public_key, credential.t, credential.U, 3);
        point_args.add("V", credential.V);
        point_args.add("M1", M1);
        point_args.add("M2", M2);
        point_args.add("M3", M3);
        point_args
    }

    pub fn new(
        key_pair: credentials::KeyPair<AuthCredential>,
        credential: AuthCredential,
        uid: uid_struct::UidStruct,
        redemption_time: Timestamp,
        sho: &mut Sho,
    ) -> Self {
        let scalar_args = issuer_scalar_args(&key_pair, 3);
        let point_args =
            Self::point_args(key_pair.get_public_key(), credential, &uid, redemption_time);
        let poksho_proof = Self::get_poksho_statement()
            .prove(&scalar_args, &point_args, &[], &sho.squeeze_as_array())
            .expect("issuer holds the witness");
        AuthCredentialIssuanceProof { poksho_proof }
    }

    pub fn verify(
        &self,
        public_key: credentials::PublicKey,
        credential: AuthCredential,
        uid: uid_struct::UidStruct,
        redemption_time: Timestamp,
    ) -> Result<(), ZkBackendVerificationFailure> {
        let point_args = Self::point_args(public_key, credential, &uid, redemption_time);
        verified(Self::get_poksho_statement().verify(&self.poksho_proof, &point_args, &[]))
    }
}

impl ProfileKeyCredentialRequestProof {
    pub fn get_poksho_statement() -> Statement {
        let mut st = Statement::new();
        st.add("Y", &[("y", "G")]);
        st.add("D1", &[("r1", "G")]);
        st.add("J3", &[("j3", "G_j3")]);
        st.add("D2-J1", &[("r1", "Y"), ("j3", "-G_j1")]);
        st
    }

    fn point_args(
        public_key: profile_key_credential_request::PublicKey,
        ciphertext: profile_key_credential_request::Ciphertext,
        commitment: profile_key_commitment::Commitment,
    ) -> PointArgs {
        let commitment_system = profile_key_commitment::SystemParams::get_hardcoded();
        let mut point_args = PointArgs::new();
        point_args.add("Y", public_key.Y);
        point_args.add("D1", ciphertext.D1);
        point_args.add("J3", commitment.J3);
        point_args.add("G_j3", commitment_system.G_j3);
        point_args.add("D2-J1", ciphertext.D2 - commitment.J1);
        point_args.add("-G_j1", -commitment_system.G_j1);
        point_args
    }

    pub fn new(
        key_pair: profile_key_credential_request::KeyPair,
        ciphertext: profile_key_credential_request::CiphertextWithSecretNonce,
        commitment: profile_key_commitment::CommitmentWithSecretNonce,
        sho: &mut Sho,
    ) -> Self {
        let mut scalar_args = ScalarArgs::new();
        scalar_args.add("y", key_pair.y);
        scalar_args.add("r1", ciphertext.r1);
        scalar_args.add("j3", commitment.j3);

        let point_args = Self::point_args(
            key_pair.get_public_key(),
            ciphertext.get_ciphertext(),
            commitment.get_profile_key_commitment(),
        );
        let poksho_proof = Self::get_poksho_statement()
            .prove(&scalar_args, &point_args, &[], &sho.squeeze_as_array())
            .expect("client holds the witness");
        ProfileKeyCredentialRequestProof { poksho_proof }
    }

    pub fn verify(
        &self,
        public_key: profile_key_credential_request::PublicKey,
        ciphertext: profile_key_credential_request::Ciphertext,
        commitment: profile_key_commitment::Commitment,
    ) -> Result<(), ZkBackendVerificationFailure> {
        let point_args = Self::point_args(public_key, ciphertext, commitment);
        verified(Self::get_poksho_statement().verify(&self.poksho_proof, &point_args, &[]))
    }
}

impl ProfileKeyCredentialIssuanceProof {
    pub fn get_poksho_statement() -> Statement {
        let mut st = Statement::new();
        st.add("C_W", &[("w", "G_w"), ("wprime", "G_wprime")]);
        st.add(
            "G_V-I",
            &[
                ("x0", "G_x0"),
                ("x1", "G_x1"),
                ("y1", "G_y1"),
                ("y2", "G_y2"),
                ("y3", "G_y3"),
                ("y4", "G_y4"),
            ],
        );
        st.add("S1", &[("y3", "D1"), ("rprime", "G")]);
        st.add(
            "S2",
            &[
                ("y3", "D2"),
                ("rprime", "Y"),
                ("w", "G_w"),
                ("x0", "U"),
                ("x1", "tU"),
                ("y1", "M1"),
                ("y2", "M2"),
                ("y4", "M4"),
            ],
        );
        st
    }

    fn point_args(
        public_key: credentials::PublicKey,
        request_public_key: profile_key_credential_request::PublicKey,
        request: profile_key_credential_request::Ciphertext,
        blinded_credential: BlindedProfileKeyCredential,
        uid: &uid_struct::UidStruct,
        redemption_time: Timestamp,
    ) -> PointArgs {
        let mut point_args =
            issuer_point_args(public_key, blinded_credential.t, blinded_credential.U, 4);
        point_args.add("S1", blinded_credential.S1);
        point_args.add("D1", request.D1);
        point_args.add("S2", blinded_credential.S2);
        point_args.add("D2", request.D2);
        point_args.add("Y", request_public_key.Y);
        point_args.add("M1", uid.M1);
        point_args.add("M2", uid.M2);
        point_args.add(
            "M4",
            credentials::profile_key_redemption_point(redemption_time),
        );
        point_args
    }

    pub fn new(
        key_pair: credentials::KeyPair<ProfileKeyCredential>,
        request_public_key: profile_key_credential_request::PublicKey,
        request: profile_key_credential_request::Ciphertext,
        blinded_credential: BlindedProfileKeyCredentialWithSecretNonce,
        uid: uid_struct::UidStruct,
        redemption_time: Timestamp,
        sho: &mut Sho,
    ) -> Self {
        let mut scalar_args = issuer_scalar_args(&key_pair, 4);
        scalar_args.add("rprime", blinded_credential.rprime);

        let point_args = Self::point_args(
            key_pair.get_public_key(),
            request_public_key,
            request,
            blinded_credential.get_blinded_profile_key_credential(),
            &uid,
            redemption_time,
        );
        let poksho_proof = Self::get_poksho_statement()
            .prove(&scalar_args, &point_args, &[], &sho.squeeze_as_array())
            .expect("issuer holds the witness");
        ProfileKeyCredentialIssuanceProof { poksho_proof }
    }

    pub fn verify(
        &self,
        public_key: credentials::PublicKey,
        request_public_key: profile_key_credential_request::PublicKey,
        request: profile_key_credential_request::Ciphertext,
        blinded_credential: BlindedProfileKeyCredential,
        uid: uid_struct::UidStruct,
        redemption_time: Timestamp,
    ) -> Result<(), ZkBackendVerificationFailure> {
        let point_args = Self::point_args(
            public_key,
            request_public_key,
            request,
            blinded_credential,
            &uid,
            redemption_time,
        );
        verified(Self::get_poksho_statement().verify(&self.poksho_proof, &point_args, &[]))
    }
}

impl AuthCredentialPresentationProof {
    pub fn get_poksho_statement() -> Statement {
        let mut st = Statement::new();
        st.add("Z", &[("z", "I")]);
        st.add("C_x1", &[("t", "C_x0"), ("z0", "G_x0"), ("z", "G_x1")]);
        st.add("A", &[("a1", "G_a1"), ("a2", "G_a2")]);
        st.add("C_y2-E_A2", &[("z", "G_y2"), ("a2", "-E_A1")]);
        st.add("E_A1", &[("a1", "C_y1"), ("z1", "G_y1")]);
        st.add("C_y3", &[("z", "G_y3")]);
        st.add("0", &[("z1", "I"), ("a1", "Z")]);
        st
    }

    fn point_args(
        &self,
        Z: RistrettoPoint,
        I: RistrettoPoint,
        uid_enc_public_key: uid_encryption::PublicKey,
        uid_ciphertext: uid_encryption::Ciphertext,
    ) -> PointArgs {
        let system = credentials::SystemParams::get_hardcoded();
        let uid_system = uid_encryption::SystemParams::get_hardcoded();
        let mut point_args = PointArgs::new();
        point_args.add("Z", Z);
        point_args.add("I", I);
        point_args.add("C_x0", self.C_x0);
        point_args.add("C_x1", self.C_x1);
        point_args.add("G_x0", system.G_x0);
        point_args.add("G_x1", system.G_x1);
        point_args.add("A", uid_enc_public_key.A);
        point_args.add("G_a1", uid_system.G_a1);
        point_args.add("G_a2", uid_system.G_a2);
        point_args.add("C_y2-E_A2", self.C_y2 - uid_ciphertext.E_A2);
        point_args.add("G_y2", system.G_y[1]);
        point_args.add("-E_A1", -uid_ciphertext.E_A1);
        point_args.add("E_A1", uid_ciphertext.E_A1);
        point_args.add("C_y1", self.C_y1);
        point_args.add("G_y1", system.G_y[0]);
        point_args.add("C_y3", self.C_y3);
        point_args.add("G_y3", system.G_y[2]);
        point_args.add("0", RistrettoPoint::identity());
        point_args
    }

    pub fn new(
        credentials_public_key: credentials::PublicKey,
        uid_enc_key_pair: uid_encryption::KeyPair,
        credential: AuthCredential,
        uid: uid_struct::UidStruct,
        uid_ciphertext: uid_encryption::Ciphertext,
        sho: &mut Sho,
    ) -> Self {
        let system = credentials::SystemParams::get_hardcoded();

        let z = sho.get_scalar();
        let C_y1 = z * system.G_y[0] + uid.M1;
        let C_y2 = z * system.G_y[1] + uid.M2;
        let C_y3 = z * system.G_y[2];
        let C_x0 = z * system.G_x0 + credential.U;
        let C_V = z * system.G_V + credential.V;
        let C_x1 = z * system.G_x1 + credential.t * credential.U;

        let z0 = -z * credential.t;
        let z1 = -z * uid_enc_key_pair.a1;
        let I = credentials_public_key.I;
        let Z = z * I;

        let mut scalar_args = ScalarArgs::new();
        scalar_args.add("z", z);
        scalar_args.add("t", credential.t);
        scalar_args.add("z0", z0);
        scalar_args.add("a1", uid_enc_key_pair.a1);
        scalar_args.add("a2", uid_enc_key_pair.a2);
        scalar_args.add("z1", z1);

        let mut proof = AuthCredentialPresentationProof {
            C_x0,
            C_x1,
            C_y1,
            C_y2,
            C_y3,
            C_V,
            poksho_proof: Vec::new(),
        };
        let point_args = proof.point_args(
            Z,
            I,
            uid_enc_key_pair.get_public_key(),
            uid_ciphertext,
        );
        proof.poksho_proof = Self::get_poksho_statement()
            .prove(&scalar_args, &point_args, &[], &sho.squeeze_as_array())
            .expect("presenter holds the witness");
        proof
    }

    pub fn verify(
        &self,
        credentials_key_pair: credentials::KeyPair<AuthCredential>,
        uid_enc_public_key: uid_encryption::PublicKey,
        uid_ciphertext: uid_encryption::Ciphertext,
        redemption_time: Timestamp,
    ) -> Result<(), ZkBackendVerificationFailure> {
        let credentials::KeyPair { W, x0, x1, y, I, .. } = credentials_key_pair;
        let M3 = credentials::auth_redemption_point(redemption_time);

        let Z = self.C_V
            - W
            - x0 * self.C_x0
            - x1 * self.C_x1
            - y[0] * self.C_y1
            - y[1] * self.C_y2
            - y[2] * (self.C_y3 + M3);

        let point_args = self.point_args(Z, I, uid_enc_public_key, uid_ciphertext);
        verified(Self::get_poksho_statement().verify(&self.poksho_proof, &point_args, &[]))
    }
}

impl ProfileKeyCredentialPresentationProof {
    pub fn get_poksho_statement() -> Statement {
        let mut st = Statement::new();
        st.add("Z", &[("z", "I")]);
        st.add("C_x1", &[("t", "C_x0"), ("z0", "G_x0"), ("z", "G_x1")]);
        st.add("A", &[("a1", "G_a1"), ("a2", "G_a2")]);
        st.add("B", &[("b1", "G_b1"), ("b2", "G_b2")]);
        st.add("C_y2-E_A2", &[("z", "G_y2"), ("a2", "-E_A1")]);
        st.add("E_A1", &[("a1", "C_y1"), ("z1", "G_y1")]);
        st.add("E_B1", &[("b1", "C_y3"), ("z2", "G_y3")]);
        st.add("C_y4", &[("z", "G_y4")]);
        st.add("0", &[("z1", "I"), ("a1", "Z")]);
        st.add("0", &[("z2", "I"), ("b1", "Z")]);
        st
    }

    fn point_args(
        &self,
        Z: RistrettoPoint,
        I: RistrettoPoint,
        uid_enc_public_key: uid_encryption::PublicKey,
        uid_ciphertext: uid_encryption::Ciphertext,
        profile_key_enc_public_key: profile_key_encryption::PublicKey,
        profile_key_ciphertext: profile_key_encryption::Ciphertext,
    ) -> PointArgs {
        let system = credentials::SystemParams::get_hardcoded();
        let uid_system = uid_encryption::SystemParams::get_hardcoded();
        let profile_key_system = profile_key_encryption::SystemParams::get_hardcoded();
        let mut point_args = PointArgs::new();
        point_args.add("Z", Z);
        point_args.add("I", I);
        point_args.add("C_x0", self.C_x0);
        point_args.add("C_x1", self.C_x1);
        point_args.add("G_x0", system.G_x0);
        point_args.add("G_x1", system.G_x1);
        point_args.add("A", uid_enc_public_key.A);
        point_args.add("G_a1", uid_system.G_a1);
        point_args.add("G_a2", uid_system.G_a2);
        point_args.add("B", profile_key_enc_public_key.B);
        point_args.add("G_b1", profile_key_system.G_b1);
        point_args.add("G_b2", profile_key_system.G_b2);
        point_args.add("C_y2-E_A2", self.C_y2 - uid_ciphertext.E_A2);
        point_args.add("G_y2", system.G_y[1]);
        point_args.add("-E_A1", -uid_ciphertext.E_A1);
        point_args.add("E_A1", uid_ciphertext.E_A1);
        point_args.add("C_y1", self.C_y1);
        point_args.add("G_y1", system.G_y[0]);
        point_args.add("E_B1", profile_key_ciphertext.E_B1);
        point_args.add("C_y3", self.C_y3);
        point_args.add("G_y3", system.G_y[2]);
        point_args.add("C_y4", self.C_y4);
        point_args.add("G_y4", system.G_y[3]);
        point_args.add("0", RistrettoPoint::identity());
        point_args
    }

    #[allow(clippy::too_many_arguments)]
    pub fn new(
        credentials_public_key: credentials::PublicKey,
        uid_enc_key_pair: uid_encryption::KeyPair,
        profile_key_enc_key_pair: profile_key_encryption::KeyPair,
        credential: ProfileKeyCredential,
        uid: uid_struct::UidStruct,
        uid_ciphertext: uid_encryption::Ciphertext,
        profile_key: profile_key_struct::ProfileKeyStruct,
        profile_key_ciphertext: profile_key_encryption::Ciphertext,
        sho: &mut Sho,
    ) -> Self {
        let system = credentials::SystemParams::get_hardcoded();

        let z = sho.get_scalar();
        let C_y1 = z * system.G_y[0] + uid.M1;
        let C_y2 = z * system.G_y[1] + uid.M2;
        let C_y3 = z * system.G_y[2] + profile_key.M3;
        let C_y4 = z * system.G_y[3];
        let C_x0 = z * system.G_x0 + credential.U;
        let C_V = z * system.G_V + credential.V;
        let C_x1 = z * system.G_x1 + credential.t * credential.U;

        let z0 = -z * credential.t;
        let z1 = -z * uid_enc_key_pair.a1;
        let z2 = -z * profile_key_enc_key_pair.b1;
        let I = credentials_public_key.I;
        let Z = z * I;

        let mut scalar_args = ScalarArgs::new();
        scalar_args.add("z", z);
        scalar_args.add("t", credential.t);
        scalar_args.add("z0", z0);
        scalar_args.add("a1", uid_enc_key_pair.a1);
        scalar_args.add("a2", uid_enc_key_pair.a2);
        scalar_args.add("b1", profile_key_enc_key_pair.b1);
        scalar_args.add("b2", profile_key_enc_key_pair.b2);
        scalar_args.add("z1", z1);
        scalar_args.add("z2", z2);

        let mut proof = ProfileKeyCredentialPresentationProof {
            C_x0,
            C_x1,
            C_y1,
            C_y2,
            C_y3,
            C_y4,
            C_V,
            poksho_proof: Vec::new(),
        };
        let point_args = proof.point_args(
            Z,
            I,
            uid_enc_key_pair.get_public_key(),
            uid_ciphertext,
            profile_key_enc_key_pair.get_public_key(),
            profile_key_ciphertext,
        );
        proof.poksho_proof = Self::get_poksho_statement()
            .prove(&scalar_args, &point_args, &[], &sho.squeeze_as_array())
            .expect("presenter holds the witness");
        proof
    }

    pub fn verify(
        &self,
        credentials_key_pair: credentials::KeyPair<ProfileKeyCredential>,
        uid_enc_public_key: uid_encryption::PublicKey,
        uid_ciphertext: uid_encryption::Ciphertext,
        profile_key_enc_public_key: profile_key_encryption::PublicKey,
        profile_key_ciphertext: profile_key_encryption::Ciphertext,
        redemption_time: Timestamp,
    ) -> Result<(), ZkBackendVerificationFailure> {
        let credentials::KeyPair { W, x0, x1, y, I, .. } = credentials_key_pair;
        let M4 = credentials::profile_key_redemption_point(redemption_time);

        let Z = self.C_V
            - W
            - x0 * self.C_x0
            - x1 * self.C_x1
            - y[0] * self.C_y1
            - y[1] * self.C_y2
            - y[2] * self.C_y3
            - y[3] * (self.C_y4 + M4);

        let point_args = self.point_args(
            Z,
            I,
            uid_enc_public_key,
            uid_ciphertext,
            profile_key_enc_public_key,
            profile_key_ciphertext,
        );
        verified(Self::get_poksho_statement().verify(&self.poksho_proof, &point_args, &[]))
    }
}
