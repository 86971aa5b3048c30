//! Parameters, keys and ciphertexts of the scheme.
//!
//! All of these are plain immutable values. Every delegation creates a fresh
//! [`DelegatedSecretKey`], nothing is ever modified in place.
//!
//! Note that the debug output does not output all inner bytes and instead outputs a small
//! fingerprint only. The actual values have too many bytes to show nicely, and secret values
//! should not end up in logs.
use super::{
    config::Curve,
    error::{Error, Result},
    ByteAccess,
};

use std::fmt::{self, Debug};

use bls12_381_plus::{G1Affine, G2Affine, Gt};

/// The public parameters of the system.
///
/// Besides the curve, these consist of the generators `g` and `g_head`, the random elements `g2`
/// and `g3`, and one element `h_i` per level of the hierarchy. The number of `h` elements is the
/// maximum delegation depth.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicParams {
    pub(crate) curve: Curve,
    pub(crate) g: G1Affine,
    pub(crate) g_head: G2Affine,
    pub(crate) g2: G1Affine,
    pub(crate) g3: G1Affine,
    pub(crate) h: Vec<G1Affine>,
}

impl PublicParams {
    pub fn curve(&self) -> Curve {
        self.curve
    }

    /// Prime order `p` of the groups, big-endian.
    pub fn order(&self) -> [u8; 32] {
        self.curve.order()
    }

    /// Maximum number of delegations, `L`.
    pub fn max_height(&self) -> usize {
        self.h.len()
    }

    pub fn g(&self) -> &G1Affine {
        &self.g
    }

    pub fn g_head(&self) -> &G2Affine {
        &self.g_head
    }

    pub fn g2(&self) -> &G1Affine {
        &self.g2
    }

    pub fn g3(&self) -> &G1Affine {
        &self.g3
    }

    pub fn h(&self) -> &[G1Affine] {
        &self.h
    }
}

impl ByteAccess for PublicParams {
    fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.g2.to_compressed());
        bytes.extend_from_slice(&self.g3.to_compressed());
        bytes.extend_from_slice(&self.g.to_compressed());
        bytes.extend_from_slice(&self.g_head.to_compressed());
        for h in &self.h {
            bytes.extend_from_slice(&h.to_compressed());
        }
        bytes
    }
}

impl Debug for PublicParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicParams")
            .field("curve", &self.curve)
            .field("max_height", &self.max_height())
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

/// The master public key, `g_head^α`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey(pub(crate) G2Affine);

impl PublicKey {
    pub fn point(&self) -> &G2Affine {
        &self.0
    }
}

impl From<G2Affine> for PublicKey {
    fn from(value: G2Affine) -> Self {
        Self(value)
    }
}

impl ByteAccess for PublicKey {
    fn bytes(&self) -> Vec<u8> {
        self.0.to_compressed().to_vec()
    }
}

impl Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PublicKey")
            .field(&self.fingerprint())
            .finish()
    }
}

/// The master secret key, `g2^α`.
///
/// The holder of this key can delegate to any identity.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MasterKey(pub(crate) G1Affine);

impl MasterKey {
    pub fn point(&self) -> &G1Affine {
        &self.0
    }
}

impl From<G1Affine> for MasterKey {
    fn from(value: G1Affine) -> Self {
        Self(value)
    }
}

impl ByteAccess for MasterKey {
    fn bytes(&self) -> Vec<u8> {
        self.0.to_compressed().to_vec()
    }
}

impl Debug for MasterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("MasterKey")
            .field(&self.fingerprint())
            .finish()
    }
}

/// Master public and secret key, as produced by key generation.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MasterKeyPair {
    pub public_key: PublicKey,
    pub secret_key: MasterKey,
}

/// A secret key for a position in the hierarchy, and at the same time a signature.
///
/// The key consists of `a0 ∈ G1`, `a1 ∈ G2` and the remaining delegation components
/// `b_{depth+1}, ..., b_L ∈ G1`. `depth` is the number of identity elements folded into the key.
#[derive(Clone, PartialEq, Eq)]
pub struct DelegatedSecretKey {
    pub(crate) a0: G1Affine,
    pub(crate) a1: G2Affine,
    pub(crate) b: Vec<G1Affine>,
    pub(crate) depth: usize,
}

impl DelegatedSecretKey {
    /// Wraps the master secret key as a key at depth 0.
    ///
    /// Such a key can be used to decrypt and verify for the root identity, and it can be
    /// delegated from like any other key. It is the key with randomness `0`: `a1` and all `b`
    /// components are the identity.
    pub fn from_master(params: &PublicParams, master_key: &MasterKey) -> DelegatedSecretKey {
        DelegatedSecretKey {
            a0: master_key.0,
            a1: G2Affine::identity(),
            b: vec![G1Affine::identity(); params.max_height()],
            depth: 0,
        }
    }

    /// Assembles a key from its components, checking them against the parameters.
    pub fn from_parts(
        params: &PublicParams,
        a0: G1Affine,
        a1: G2Affine,
        b: Vec<G1Affine>,
        depth: usize,
    ) -> Result<DelegatedSecretKey> {
        let max = params.max_height();
        if depth > max {
            return Err(Error::DelegationDepthExceeded { depth, max });
        }
        if b.len() != max - depth {
            return Err(Error::Configuration(format!(
                "key at depth {depth} needs {} delegation components, got {}",
                max - depth,
                b.len()
            )));
        }
        Ok(DelegatedSecretKey { a0, a1, b, depth })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn a0(&self) -> &G1Affine {
        &self.a0
    }

    pub fn a1(&self) -> &G2Affine {
        &self.a1
    }

    pub fn b(&self) -> &[G1Affine] {
        &self.b
    }
}

impl ByteAccess for DelegatedSecretKey {
    fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend_from_slice(&self.a0.to_compressed());
        bytes.extend_from_slice(&self.a1.to_compressed());
        for b in &self.b {
            bytes.extend_from_slice(&b.to_compressed());
        }
        bytes
    }
}

impl Debug for DelegatedSecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DelegatedSecretKey")
            .field("depth", &self.depth)
            .field("fingerprint", &self.fingerprint())
            .finish()
    }
}

/// A ciphertext `(c1 ∈ GT, c2 ∈ G2, c3 ∈ G1)`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ciphertext {
    pub(crate) c1: Gt,
    pub(crate) c2: G2Affine,
    pub(crate) c3: G1Affine,
}

impl Ciphertext {
    pub fn c1(&self) -> &Gt {
        &self.c1
    }

    pub fn c2(&self) -> &G2Affine {
        &self.c2
    }

    pub fn c3(&self) -> &G1Affine {
        &self.c3
    }
}

impl ByteAccess for Ciphertext {
    fn bytes(&self) -> Vec<u8> {
        let mut bytes = self.c3.to_compressed().to_vec();
        bytes.extend_from_slice(&self.c2.to_compressed());
        bytes.extend_from_slice(&self.c1.to_bytes());
        bytes
    }
}

impl Debug for Ciphertext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Ciphertext")
            .field(&self.fingerprint())
            .finish()
    }
}
