//
// Copyright 2020-2022 Signal Messenger, LLC.
// SPDX-License-Identifier: AGPL-3.0-only
//

//! Keyed-verification credentials (MAC_GGM).
//!
//! A credential over attributes `M1..Mn` is the triple `(t, U, V)` with
//!
//! ```text
//! V = W + (x0 + x1*t)*U + y1*M1 + ... + yn*Mn
//! ```
//!
//! where `W = w*G_w` and the `x`s and `y`s are the issuer's secret key.

#![allow(non_snake_case)]

use std::marker::PhantomData;
use std::sync::LazyLock;

use curve25519_dalek::constants::RISTRETTO_BASEPOINT_POINT;
use curve25519_dalek::ristretto::RistrettoPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;
use derive_where::derive_where;
use serde::{Deserialize, Serialize};

use crate::common::constants::*;
use crate::common::sho::*;
use crate::common::simple_types::*;
use crate::crypto::timestamp_struct::TimestampStruct;
use crate::crypto::{profile_key_credential_request, uid_struct};

static SYSTEM_PARAMS: LazyLock<SystemParams> = LazyLock::new(SystemParams::generate);

const MAX_ATTRS: usize = NUM_PROFILE_KEY_CRED_ATTRIBUTES;

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemParams {
    pub(crate) G_w: RistrettoPoint,
    pub(crate) G_wprime: RistrettoPoint,
    pub(crate) G_x0: RistrettoPoint,
    pub(crate) G_x1: RistrettoPoint,
    /// `G_y[0]` pairs with `y1`.
    pub(crate) G_y: [RistrettoPoint; MAX_ATTRS],
    pub(crate) G_m3: RistrettoPoint,
    pub(crate) G_m4: RistrettoPoint,
    pub(crate) G_V: RistrettoPoint,
}

/// Fixes how many of the issuer's `y` scalars a [`KeyPair<S>`] actually uses.
pub trait AttrScalars {
    const NUM_ATTRS: usize;
}

impl AttrScalars for AuthCredential {
    const NUM_ATTRS: usize = NUM_AUTH_CRED_ATTRIBUTES;
}

impl AttrScalars for ProfileKeyCredential {
    const NUM_ATTRS: usize = NUM_PROFILE_KEY_CRED_ATTRIBUTES;
}

#[derive(Serialize, Deserialize)]
#[serde(bound = "")]
#[derive_where(Clone, Copy)]
pub struct KeyPair<S> {
    // private
    pub(crate) w: Scalar,
    pub(crate) wprime: Scalar,
    pub(crate) W: RistrettoPoint,
    pub(crate) x0: Scalar,
    pub(crate) x1: Scalar,
    pub(crate) y: [Scalar; MAX_ATTRS],

    // public
    pub(crate) C_W: RistrettoPoint,
    pub(crate) I: RistrettoPoint,

    #[serde(skip)]
    kind: PhantomData<fn() -> S>,
}

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicKey {
    pub(crate) C_W: RistrettoPoint,
    pub(crate) I: RistrettoPoint,
}

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredential {
    pub(crate) t: Scalar,
    pub(crate) U: RistrettoPoint,
    pub(crate) V: RistrettoPoint,
}

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileKeyCredential {
    pub(crate) t: Scalar,
    pub(crate) U: RistrettoPoint,
    pub(crate) V: RistrettoPoint,
}

#[derive(Copy, Clone, Serialize, Deserialize)]
pub struct BlindedProfileKeyCredentialWithSecretNonce {
    pub(crate) rprime: Scalar,
    pub(crate) t: Scalar,
    pub(crate) U: RistrettoPoint,
    pub(crate) S1: RistrettoPoint,
    pub(crate) S2: RistrettoPoint,
}

#[derive(Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlindedProfileKeyCredential {
    pub(crate) t: Scalar,
    pub(crate) U: RistrettoPoint,
    pub(crate) S1: RistrettoPoint,
    pub(crate) S2: RistrettoPoint,
}

/// The attribute points of an auth credential: `[M1, M2, m3*G_m3]`.
pub(crate) fn auth_credential_points(
    uid: &uid_struct::UidStruct,
    redemption_time: Timestamp,
) -> [RistrettoPoint; NUM_AUTH_CRED_ATTRIBUTES] {
    [uid.M1, uid.M2, auth_redemption_point(redemption_time)]
}

/// The redemption-time attribute of an auth credential: `m3*G_m3`.
pub(crate) fn auth_redemption_point(redemption_time: Timestamp) -> RistrettoPoint {
    let system = SystemParams::get_hardcoded();
    TimestampStruct::calc_m_from(redemption_time) * system.G_m3
}

/// The redemption-time attribute of a profile key credential: `m4*G_m4`.
pub(crate) fn profile_key_redemption_point(redemption_time: Timestamp) -> RistrettoPoint {
    let system = SystemParams::get_hardcoded();
    TimestampStruct::calc_m_from(redemption_time) * system.G_m4
}

impl SystemParams {
    fn generate() -> Self {
        let mut sho = Sho::new(
            b"ZkBackend_20241019_Constant_Credentials_SystemParams_Generate",
            b"",
        );
        let G_w = sho.get_point();
        let G_wprime = sho.get_point();
        let G_x0 = sho.get_point();
        let G_x1 = sho.get_point();
        let G_y = std::array::from_fn(|_| sho.get_point());
        let G_m3 = sho.get_point();
        let G_m4 = sho.get_point();
        let G_V = sho.get_point();
        SystemParams {
            G_w,
            G_wprime,
            G_x0,
            G_x1,
            G_y,
            G_m3,
            G_m4,
            G_V,
        }
    }

    pub fn get_hardcoded() -> SystemParams {
        *SYSTEM_PARAMS
    }
}

impl<S: AttrScalars> KeyPair<S> {
    pub fn generate(sho: &mut Sho) -> Self {
        assert!(
            (1..=MAX_ATTRS).contains(&S::NUM_ATTRS),
            "unsupported attribute count"
        );

        let system = SystemParams::get_hardcoded();
        let w = sho.get_scalar();
        let W = w * system.G_w;
        let wprime = sho.get_scalar();
        let x0 = sho.get_scalar();
        let x1 = sho.get_scalar();
        let y: [Scalar; MAX_ATTRS] = std::array::from_fn(|_| sho.get_scalar());

        let C_W = W + (wprime * system.G_wprime);
        let mut I = system.G_V - (x0 * system.G_x0) - (x1 * system.G_x1);
        for (yn, G_yn) in y.iter().zip(&system.G_y).take(S::NUM_ATTRS) {
            I -= yn * G_yn;
        }

        KeyPair {
            w,
            wprime,
            W,
            x0,
            x1,
            y,
            C_W,
            I,
            kind: PhantomData,
        }
    }

    pub fn get_public_key(&self) -> PublicKey {
        PublicKey {
            C_W: self.C_W,
            I: self.I,
        }
    }

    fn credential_core(
        &self,
        M: &[RistrettoPoint],
        sho: &mut Sho,
    ) -> (Scalar, RistrettoPoint, RistrettoPoint) {
        assert!(M.len() <= S::NUM_ATTRS, "too many attributes");
        let t = sho.get_scalar();
        let U = sho.get_point();

        let mut V = self.W + (self.x0 + self.x1 * t) * U;
        for (yn, Mn) in self.y.iter().zip(M) {
            V += yn * Mn;
        }
        (t, U, V)
    }
}

impl KeyPair<AuthCredential> {
    pub fn create_auth_credential(
        &self,
        uid: uid_struct::UidStruct,
        redemption_time: Timestamp,
        sho: &mut Sho,
    ) -> AuthCredential {
        let M = auth_credential_points(&uid, redemption_time);
        let (t, U, V) = self.credential_core(&M, sho);
        AuthCredential { t, U, V }
    }
}

impl KeyPair<ProfileKeyCredential> {
    /// Issues over the encrypted profile key point without learning it.
    ///
    /// The blind attribute sits in the `y3` slot; `credential_core` sees the identity there and
    /// the encrypted contribution is added homomorphically.
    pub fn create_blinded_profile_key_credential(
        &self,
        uid: uid_struct::UidStruct,
        public_key: profile_key_credential_request::PublicKey,
        ciphertext: profile_key_credential_request::Ciphertext,
        redemption_time: Timestamp,
        sho: &mut Sho,
    ) -> BlindedProfileKeyCredentialWithSecretNonce {
        let M = [
            uid.M1,
            uid.M2,
            RistrettoPoint::identity(),
            profile_key_redemption_point(redemption_time),
        ];
        let (t, U, Vprime) = self.credential_core(&M, sho);
        let rprime = sho.get_scalar();
        let R1 = rprime * RISTRETTO_BASEPOINT_POINT;
        let R2 = rprime * public_key.Y + Vprime;
        let S1 = R1 + (self.y[2] * ciphertext.D1);
        let S2 = R2 + (self.y[2] * ciphertext.D2);
        BlindedProfileKeyCredentialWithSecretNonce {
            rprime,
            t,
            U,
            S1,
            S2,
        }
    }
}

impl BlindedProfileKeyCredentialWithSecretNonce {
    pub fn get_blinded_profile_key_credential(&self) -> BlindedProfileKeyCredential {
        BlindedProfileKeyCredential {
            t: self.t,
            U: self.U,
            S1: self.S1,
            S2: self.S2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::profile_key_struct::ProfileKeyStruct;

    #[test]
    fn system_params_are_distinct() {
        let system = SystemParams::get_hardcoded();
        let mut all = vec![
            system.G_w,
            system.G_wprime,
            system.G_x0,
            system.G_x1,
            system.G_m3,
            system.G_m4,
            system.G_V,
        ];
        all.extend(system.G_y);
        for (i, a) in all.iter().enumerate() {
            for b in &all[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(SystemParams::generate() == system);
    }

    #[test]
    fn auth_mac_equation() {
        let mut sho = Sho::new(b"Test_Credentials", b"");
        let key_pair = KeyPair::<AuthCredential>::generate(&mut sho);
        let uid = uid_struct::UidStruct::from_uuid(TEST_ARRAY_16);
        let redemption_time = Timestamp::from_epoch_seconds(SECONDS_PER_DAY);
        let credential = key_pair.create_auth_credential(uid, redemption_time, &mut sho);

        let M = auth_credential_points(&uid, redemption_time);
        let expected = key_pair.W
            + (key_pair.x0 + key_pair.x1 * credential.t) * credential.U
            + key_pair.y[0] * M[0]
            + key_pair.y[1] * M[1]
            + key_pair.y[2] * M[2];
        assert!(credential.V == expected);

        let system = SystemParams::get_hardcoded();
        let I = system.G_V
            - key_pair.x0 * system.G_x0
            - key_pair.x1 * system.G_x1
            - key_pair.y[0] * system.G_y[0]
            - key_pair.y[1] * system.G_y[1]
            - key_pair.y[2] * system.G_y[2];
        assert!(key_pair.get_public_key().I == I);
    }

    #[test]
    fn blinded_issuance_unblinds_to_mac() {
        let mut sho = Sho::new(b"Test_Blinded_Credentials", b"");
        let key_pair = KeyPair::<ProfileKeyCredential>::generate(&mut sho);
        let uid = uid_struct::UidStruct::from_uuid(TEST_ARRAY_16);
        let profile_key = ProfileKeyStruct::new(TEST_ARRAY_32, TEST_ARRAY_16);
        let redemption_time = Timestamp::from_epoch_seconds(0);

        let request_key_pair = profile_key_credential_request::KeyPair::generate(&mut sho);
        let ciphertext = request_key_pair
            .encrypt(profile_key, &mut sho)
            .get_ciphertext();
        let blinded = key_pair.create_blinded_profile_key_credential(
            uid,
            request_key_pair.get_public_key(),
            ciphertext,
            redemption_time,
            &mut sho,
        );
        let credential = request_key_pair
            .decrypt_blinded_profile_key_credential(blinded.get_blinded_profile_key_credential());

        let expected = key_pair.W
            + (key_pair.x0 + key_pair.x1 * credential.t) * credential.U
            + key_pair.y[0] * uid.M1
            + key_pair.y[1] * uid.M2
            + key_pair.y[2] * profile_key.M3
            + key_pair.y[3] * profile_key_redemption_point(redemption_time);
        assert!(credential.V == expected);
    }
}
