//! Identity chains.
//!
//! A position in the hierarchy is addressed by an ordered list of byte strings, for example a
//! domain name, an epoch and finally the digest of a message. [`IdentityChain`] is an immutable
//! value: extending it with [`IdentityChain::child`] returns a new chain and leaves the parent
//! untouched, so a chain can be shared between sessions without anyone changing it underneath.
use super::{error::Result, hash::hash_to_scalar, Mapper};

use std::fmt::{self, Debug};

use bls12_381_plus::Scalar;

/// An ordered sequence of identity elements.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct IdentityChain(Vec<Vec<u8>>);

impl IdentityChain {
    /// The empty chain, which addresses the root of the hierarchy.
    pub fn root() -> IdentityChain {
        IdentityChain::default()
    }

    /// Builds a chain from the given elements, in order.
    pub fn new<I, T>(elements: I) -> IdentityChain
    where
        I: IntoIterator<Item = T>,
        T: AsRef<[u8]>,
    {
        IdentityChain(
            elements
                .into_iter()
                .map(|element| element.as_ref().to_vec())
                .collect(),
        )
    }

    /// Returns a new chain with `element` appended.
    pub fn child(&self, element: &[u8]) -> IdentityChain {
        IdentityChain(
            self.0
                .iter()
                .cloned()
                .chain(std::iter::once(element.to_vec()))
                .collect(),
        )
    }

    /// Returns the chain without its last element, or `None` for the root.
    pub fn parent(&self) -> Option<IdentityChain> {
        let (_, parent) = self.0.split_last()?;
        Some(IdentityChain(parent.to_vec()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.0.iter().map(Vec::as_slice)
    }

    /// Hashes every element to a scalar (`H(id_1), ..., H(id_k)`).
    pub fn hashes(&self) -> Vec<Scalar> {
        self.iter().map(hash_to_scalar).collect()
    }

    /// Returns `true` if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &IdentityChain) -> bool {
        self.len() <= other.len() && self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: AsRef<[u8]>> FromIterator<T> for IdentityChain {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        IdentityChain::new(iter)
    }
}

impl Debug for IdentityChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(String::from_utf8_lossy))
            .finish()
    }
}

/// A [`Mapper`] for the `[domain, epoch]` delegate lists used for time-bound signatures.
///
/// The domain is used verbatim, the epoch is encoded as 8 big-endian bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EpochMapper;

impl EpochMapper {
    /// Create a new [`EpochMapper`].
    pub fn new() -> EpochMapper {
        EpochMapper
    }
}

impl<D: AsRef<[u8]>> Mapper<(D, u64)> for EpochMapper {
    fn map_identity(&self, (domain, epoch): (D, u64)) -> Result<IdentityChain> {
        Ok(IdentityChain::new([
            domain.as_ref(),
            epoch.to_be_bytes().as_slice(),
        ]))
    }
}
