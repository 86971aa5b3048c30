//! Hashing of identity elements to scalars.
//!
//! Identities are arbitrary byte strings. Before they can be used as exponents, they are hashed
//! with SHA-256 and the digest is interpreted as an unsigned big-endian integer. If that integer
//! is not smaller than the group order, the digest itself is hashed again, until a value below
//! the order comes out.
use bls12_381_plus::Scalar;
use sha2::{Digest, Sha256};
use tracing::trace;

/// Maps a byte string to a scalar in `[0, p)`.
pub fn hash_to_scalar(message: &[u8]) -> Scalar {
    let mut digest: [u8; 32] = Sha256::digest(message).into();
    loop {
        if let Some(scalar) = scalar_from_be(&digest) {
            return scalar;
        }
        trace!("digest not below the group order, rehashing");
        digest = Sha256::digest(digest).into();
    }
}

/// Interprets big-endian bytes as a scalar, if they encode a value below the group order.
pub(crate) fn scalar_from_be(bytes: &[u8; 32]) -> Option<Scalar> {
    let mut le = *bytes;
    le.reverse();
    Scalar::from_le_bytes(&le).into()
}
