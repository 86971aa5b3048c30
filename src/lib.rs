//! Implementation of Hierarchical Identity Based Encryption ([HIBE]) with delegation, and of the
//! Hierarchical Identity Based Signatures (HIBS) that follow from it.
//!
//! # ⚠️ Warning: Cryptographic Hazmat ☣️
//!
//! This crate is made for playing around with HIBE/HIBS and for prototyping of applications and
//! protocols using them. It has *not* been audited, it is *not* battle tested, and *nobody*
//! claims it to be secure.
//!
//! Use it at **your own risk** and if you know what you are doing!
//!
//! # Introduction
//!
//! In a HIBE, the holder of a secret key for an identity `(id_1, ..., id_k)` can derive the key
//! for `(id_1, ..., id_k, id_{k+1})` on their own, without asking the authority that holds the
//! master key. The number of such delegations is bounded by the height chosen at setup.
//!
//! Such a delegated key is also a signature: delegating once more with a message as the last
//! identity element "signs" the message, and anybody with the master public key can check that
//! the delegated key is valid for the identity, without learning anything about the signer's
//! secret (the Naor transform). A typical use is a server that holds a key for
//! `[domain, epoch]` and signs handshake messages with it.
//!
//! # Crate Structure
//!
//! The [`hibe`] submodule contains the basic definitions of HIBE functionality, as
//! [`hibe::Hibe`] (setup, key generation and delegation), [`hibe::HibeCrypt`] (encryption of
//! target group elements) and [`hibe::HibeVerify`] (checking delegated keys). Those methods work
//! directly on the group elements, as they are defined in the paper.
//!
//! The [`signature`] submodule wraps delegation and verification into a sign/verify state
//! machine that works on bytes, and [`codec`] provides the binary encodings of parameters, keys
//! and signatures.
//!
//! Identities are [`identity::IdentityChain`]s of byte strings. A [`Mapper`] translates from
//! identities of the application domain to such chains.
//!
//! # Implemented Algorithms
//!
//! Currently, this crate implements the HIBE of Boneh, Boyen and Goh, "Hierarchical Identity
//! Based Encryption with Constant Size Ciphertext" ([eprint](https://eprint.iacr.org/2005/015.pdf)).
//! This algorithm lives as [`hibe::BonehBoyenGoh`].
//!
//! The algorithms in this crate are implemented on top of
//! [`bls_12_381_plus`](https://crates.io/crates/bls12_381_plus). The curve is selected through
//! [`config::SchemeConfig`].
//!
//! [HIBE]: https://cryptowiki.tm.kit.edu/index.php/Hierarchical_Identity-Based_Encryption
pub mod codec;
pub mod config;
pub mod error;
pub mod hash;
pub mod hibe;
pub mod identity;
pub mod keys;
pub mod signature;

use error::Result;
use identity::IdentityChain;

/// A trait to provide byte-level access to objects.
pub trait ByteAccess {
    /// Provides access to the bytes.
    ///
    /// Unlike [`AsRef`], there are no statements made about the performance of this operation.
    /// This operation will allocate a fresh vector, and the byte representation may or may not
    /// have to be computed first.
    fn bytes(&self) -> Vec<u8>;

    /// Provide a short fingerprint of the bytes.
    ///
    /// This can be used to "summarize" long keys when displaying them, to still provide
    /// distinguishing features but to not print out the whole key.
    ///
    /// By default, this method uses the first 16 bytes of the [`ByteAccess::bytes`]
    /// representation, and formats them as a hex string.
    fn fingerprint(&self) -> String {
        let bytes = self.bytes();
        hex::encode(&bytes[..bytes.len().min(16)])
    }
}

/// A trait to mark objects that can map from an application-specific identity to an
/// [`IdentityChain`].
///
/// A mapper can be implemented multiple times for a single struct, thereby providing multiple
/// (equivalent) ways to map.
pub trait Mapper<F> {
    fn map_identity(&self, input: F) -> Result<IdentityChain>;
}

/// [`Mapper`] is automatically implemented for functions and closures that match the signature of
/// [`Mapper::map_identity`].
impl<X, F: Fn(X) -> Result<IdentityChain>> Mapper<X> for F {
    fn map_identity(&self, input: X) -> Result<IdentityChain> {
        self(input)
    }
}
