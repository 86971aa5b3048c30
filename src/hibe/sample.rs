//! Random group elements and exponents.
use crate::config::Curve;

use bls12_381_plus::{
    group::{cofactor::CofactorGroup, Group},
    G1Affine, G1Projective, Gt, Scalar,
};
use rand::RngCore;
use tracing::trace;

/// Flag bits in the first byte of a compressed point.
const COMPRESSION_FLAG: u8 = 0x80;
const INFINITY_FLAG: u8 = 0x40;

/// Draws an exponent uniformly from `[0, 2^(bits(p) - 1))`.
///
/// The range is a little smaller than `[0, p)`, which saves the rejection step. The exponents
/// are never revealed.
pub(crate) fn random_exponent<R: RngCore + ?Sized>(rng: &mut R, curve: Curve) -> Scalar {
    let bits = curve.order_bits().saturating_sub(1);
    loop {
        let mut bytes = [0u8; 32];
        rng.fill_bytes(&mut bytes);
        // little endian, clear everything from bit `bits` upwards
        for (i, byte) in bytes.iter_mut().enumerate() {
            let low = i * 8;
            if low >= bits {
                *byte = 0;
            } else if bits - low < 8 {
                *byte &= (1u8 << (bits - low)) - 1;
            }
        }
        if let Some(scalar) = Option::from(Scalar::from_le_bytes(&bytes)) {
            return scalar;
        }
    }
}

/// Draws a uniformly random element of `G1` by rejection sampling.
///
/// A random non-zero field element is used as the x-coordinate (with a random sign for y). If
/// there is no curve point with that x-coordinate, a new one is drawn. The point is then mapped
/// into the prime-order subgroup by clearing the cofactor.
pub(crate) fn sample_g1<R: RngCore + ?Sized>(rng: &mut R) -> G1Affine {
    let mut attempts = 0usize;
    loop {
        attempts += 1;
        let mut x = [0u8; 48];
        rng.fill_bytes(&mut x);
        // keep the sign bit random, the remaining 381 bits are the coordinate
        x[0] = (x[0] & !(COMPRESSION_FLAG | INFINITY_FLAG)) | COMPRESSION_FLAG;
        if x[0] & 0x1f == 0 && x[1..].iter().all(|b| *b == 0) {
            continue;
        }
        let Some(point) = Option::<G1Affine>::from(G1Affine::from_compressed_unchecked(&x)) else {
            continue;
        };
        let point = G1Projective::from(point).clear_cofactor();
        if bool::from(point.is_identity()) {
            continue;
        }
        trace!(attempts, "sampled group element");
        return point.into();
    }
}

/// Draws a uniformly random element of `GT` other than the identity.
pub(crate) fn random_nonzero_gt<R: RngCore + ?Sized>(rng: &mut R) -> Gt {
    loop {
        let element = Gt::random(&mut *rng);
        if !bool::from(element.is_identity()) {
            return element;
        }
    }
}
