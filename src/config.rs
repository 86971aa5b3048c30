//! Scheme configuration.
//!
//! The curve and the maximum hierarchy height are explicit values that are handed to
//! [`BonehBoyenGoh::from_config`][crate::hibe::BonehBoyenGoh::from_config]. Nothing in this crate
//! keeps a process-wide curve selection.
use serde::{Deserialize, Serialize};

/// Order of the BLS12-381 scalar field, big-endian.
const BLS12_381_ORDER: [u8; 32] = [
    0x73, 0xed, 0xa7, 0x53, 0x29, 0x9d, 0x7d, 0x48, 0x33, 0x39, 0xd8, 0x08, 0x09, 0xa1, 0xd8, 0x05,
    0x53, 0xbd, 0xa4, 0x02, 0xff, 0xfe, 0x5b, 0xfe, 0xff, 0xff, 0xff, 0xff, 0x00, 0x00, 0x00, 0x01,
];

/// The pairing-friendly curve that the scheme is instantiated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Curve {
    /// BLS12-381, as provided by [`bls12_381_plus`].
    #[default]
    Bls12_381,
}

impl Curve {
    /// The prime order `p` of the groups, as big-endian bytes.
    pub fn order(&self) -> [u8; 32] {
        match self {
            Curve::Bls12_381 => BLS12_381_ORDER,
        }
    }

    /// Number of significant bits of [`Curve::order`].
    pub fn order_bits(&self) -> usize {
        let order = self.order();
        let leading = order.iter().position(|b| *b != 0).unwrap_or(order.len());
        match order.get(leading) {
            Some(byte) => (order.len() - leading) * 8 - byte.leading_zeros() as usize,
            None => 0,
        }
    }

    /// Looks up the curve with the given group order.
    pub fn from_order(order: &[u8; 32]) -> Option<Curve> {
        [Curve::Bls12_381]
            .into_iter()
            .find(|curve| &curve.order() == order)
    }
}

/// Configuration of a HIBE/HIBS instantiation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemeConfig {
    /// Maximum number of delegations below the master key.
    ///
    /// `0` is allowed: the master key can then still be used directly, but never delegated.
    pub max_height: usize,
    /// The curve to use.
    #[serde(default)]
    pub curve: Curve,
}

impl SchemeConfig {
    pub fn new(max_height: usize) -> Self {
        Self {
            max_height,
            curve: Curve::default(),
        }
    }

    pub fn with_curve(self, curve: Curve) -> Self {
        Self { curve, ..self }
    }
}

impl Default for SchemeConfig {
    /// Two delegate levels (e.g. domain and epoch) plus one level for the signed message.
    fn default() -> Self {
        Self::new(3)
    }
}
