//! Low-level implementation of the HIBE/HIBS primitives.
//!
//! The traits in this module describe a HIBE the way it is defined in the literature: system
//! setup, master key generation, delegation, and encryption of target group elements. On top of
//! that, [`HibeVerify`] describes the two ways of checking a delegated key against the master
//! public key, which is what turns the HIBE into a signature scheme (Naor transform). For a
//! sign/verify interface working on bytes, refer to the [`signature`][super::signature] module.
//!
//! All methods that use randomness require a [`CryptoRng`]. Ephemeral exponents are drawn fresh
//! for every call and never reused.
//!
//! # Identity Handling
//!
//! Identities are [`IdentityChain`]s, ordered lists of byte strings. The more elements a chain
//! has, the deeper down the hierarchy it points:
//!
//! ```ignore
//! let root = IdentityChain::root();
//! let a = root.child(b"example.com");
//! let b = a.child(b"2020-02-02");   // ... is a descendent of a
//! let c = a.child(b"2020-02-03");   // ... is also a descendent of a and a sibling of b
//! ```
//!
//! Chains are passed explicitly into every operation. A delegated key only works together with
//! exactly the chain it was delegated for.
use super::{error::Result, identity::IdentityChain};

use rand::{CryptoRng, Rng};

mod bbg;
mod precomp;
pub(crate) mod sample;

pub use self::bbg::BonehBoyenGoh;
pub use self::precomp::PrecomputedVerifier;

/// Main trait for HIBE schemes.
///
/// This trait defines the basic functionality of HIBEs, namely the generation of the system
/// parameters and the master key pair, and the delegation of secret keys down the hierarchy.
///
/// Note that this trait represents a HIBE *algorithm* not a HIBE *instantiation*.
pub trait Hibe {
    /// Type of the public system parameters.
    type Params;
    /// Type of the master key pair.
    type MasterKeyPair;
    /// Type of the master secret key.
    ///
    /// This is the secret key that can be used to delegate to any identity.
    type MasterKey;
    /// Type of the master public key.
    type PublicKey;
    /// Type of a delegated secret key.
    ///
    /// This refers to a single identity's secret key.
    type PrivateKey;

    /// Set the system up.
    fn setup<R: Rng + CryptoRng>(&self, rng: R) -> Result<Self::Params>;

    /// Generate the master key pair.
    fn generate_master_key<R: Rng + CryptoRng>(
        &self,
        rng: R,
        params: &Self::Params,
    ) -> Result<Self::MasterKeyPair>;

    /// Delegates directly from the master secret key to a first-level identity.
    ///
    /// Parameters:
    ///
    /// * `rng` - The randomness to use.
    /// * `params` - The public parameters.
    /// * `master_key` - The master secret key.
    /// * `child` - The identity element of the first level.
    fn delegate_master<R: Rng + CryptoRng>(
        &self,
        rng: R,
        params: &Self::Params,
        master_key: &Self::MasterKey,
        child: &[u8],
    ) -> Result<Self::PrivateKey>;

    /// Derives a key one level below the given parent key.
    ///
    /// Parameters:
    ///
    /// * `rng` - The randomness to use.
    /// * `params` - The public parameters.
    /// * `parent_key` - The parent's secret key.
    /// * `parent_name` - The identity of the parent.
    /// * `child` - Which child element to generate the key for.
    fn delegate<R: Rng + CryptoRng>(
        &self,
        rng: R,
        params: &Self::Params,
        parent_key: &Self::PrivateKey,
        parent_name: &IdentityChain,
        child: &[u8],
    ) -> Result<Self::PrivateKey>;
}

/// HIBE methods to do encryption.
pub trait HibeCrypt: Hibe {
    /// Type of the messages that this HIBE can encrypt.
    type Message;
    /// Type of the resulting ciphertext.
    type Ciphertext;

    /// Encrypt a message for the given identity.
    ///
    /// Parameters:
    ///
    /// * `rng` - The randomness to use.
    /// * `params` - The public parameters.
    /// * `public_key` - The master public key.
    /// * `identity` - The identity for which to encrypt the message.
    /// * `message` - The actual message.
    fn encrypt<R: Rng + CryptoRng>(
        &self,
        rng: R,
        params: &Self::Params,
        public_key: &Self::PublicKey,
        identity: &IdentityChain,
        message: &Self::Message,
    ) -> Result<Self::Ciphertext>;

    /// Decrypt a message given the secret key.
    ///
    /// If the key does not belong to the identity the ciphertext was made for, this does *not*
    /// fail. The result is simply an unrelated message.
    fn decrypt(
        &self,
        params: &Self::Params,
        key: &Self::PrivateKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::Message>;
}

/// HIBE methods to check a delegated key against the master public key.
///
/// Both methods return `Ok(false)` if the identity does not have exactly as many elements as the
/// key has been delegated for.
pub trait HibeVerify: HibeCrypt {
    /// Checks the key by encrypting a random message for `identity` and decrypting it again.
    ///
    /// A valid key always passes. An invalid key fails with overwhelming probability.
    fn verify_probabilistic<R: Rng + CryptoRng>(
        &self,
        rng: R,
        params: &Self::Params,
        public_key: &Self::PublicKey,
        identity: &IdentityChain,
        key: &Self::PrivateKey,
    ) -> Result<bool>;

    /// Checks the key with a single pairing-product equation.
    fn verify_deterministic(
        &self,
        params: &Self::Params,
        public_key: &Self::PublicKey,
        identity: &IdentityChain,
        key: &Self::PrivateKey,
    ) -> Result<bool>;
}
