//! Hierarchical identity based signatures with a sign/verify calling convention.
//!
//! Signing a message under a list of delegate identities means delegating once more, with the
//! message as the last identity element. The resulting [`DelegatedSecretKey`] *is* the signature;
//! it is transmitted in the encoding of [`codec::encode_delegated_key`].
//!
//! [`SignatureEngine`] wraps this into the usual phases: initialize for signing or verifying,
//! feed the message with [`SignatureEngine::update`], then finish with [`SignatureEngine::sign`]
//! or [`SignatureEngine::verify`]. The delegate identities (for example `[domain, epoch]`) are
//! configured with [`SignatureEngine::set_parameter`].
//!
//! An engine is a single-session state machine. Use one engine per signing or verification
//! session.
use super::{
    codec,
    error::{Error, Result},
    hibe::{BonehBoyenGoh, Hibe, HibeVerify},
    identity::IdentityChain,
    keys::{DelegatedSecretKey, MasterKey, PublicKey, PublicParams},
};

use std::mem;

use rand::{CryptoRng, Rng};
use tracing::{debug, warn};

/// A key that can produce signatures.
#[derive(Debug, Clone)]
pub enum SigningKey {
    /// The master secret key. Signatures made with it are one level deep.
    Master {
        params: PublicParams,
        key: MasterKey,
    },
    /// A delegated key, for example for a `[domain, epoch]` prefix.
    Delegated {
        params: PublicParams,
        key: DelegatedSecretKey,
    },
}

impl SigningKey {
    pub fn params(&self) -> &PublicParams {
        match self {
            SigningKey::Master { params, .. } | SigningKey::Delegated { params, .. } => params,
        }
    }

    /// Number of identity elements already folded into the key.
    pub fn depth(&self) -> usize {
        match self {
            SigningKey::Master { .. } => 0,
            SigningKey::Delegated { key, .. } => key.depth(),
        }
    }
}

/// A key that can check signatures: the master public key and its parameters.
#[derive(Debug, Clone)]
pub struct VerifyingKey {
    pub params: PublicParams,
    pub public_key: PublicKey,
}

#[derive(Debug, Default)]
enum State {
    #[default]
    Uninitialized,
    Signing {
        key: SigningKey,
        buffer: Vec<u8>,
    },
    Verifying {
        key: VerifyingKey,
        buffer: Vec<u8>,
    },
}

/// Sign/verify state machine on top of [`BonehBoyenGoh`].
#[derive(Debug)]
pub struct SignatureEngine<R> {
    hibe: BonehBoyenGoh,
    rng: R,
    delegate_ids: IdentityChain,
    state: State,
}

impl<R: Rng + CryptoRng> SignatureEngine<R> {
    /// Create a new engine.
    ///
    /// Parameters:
    ///
    /// * `hibe` - The HIBE to delegate and verify with.
    /// * `rng` - The randomness used for signing.
    pub fn new(hibe: BonehBoyenGoh, rng: R) -> SignatureEngine<R> {
        SignatureEngine {
            hibe,
            rng,
            delegate_ids: IdentityChain::root(),
            state: State::Uninitialized,
        }
    }

    /// Sets the delegate identities that signatures are made and checked under.
    ///
    /// This may be called in any state. The identities stay in effect until they are replaced.
    pub fn set_parameter(&mut self, delegate_ids: IdentityChain) {
        self.delegate_ids = delegate_ids;
    }

    pub fn delegate_ids(&self) -> &IdentityChain {
        &self.delegate_ids
    }

    /// Prepares the engine for signing with the given key.
    ///
    /// The configured delegate identities must match the depth of the key: none for the master
    /// key, `k` for a key at depth `k`.
    pub fn init_sign(&mut self, key: SigningKey) -> Result<()> {
        self.check_params(key.params())?;
        check_delegate_count(&self.delegate_ids, &key)?;
        debug!(depth = key.depth(), "initialized for signing");
        self.state = State::Signing {
            key,
            buffer: Vec::new(),
        };
        Ok(())
    }

    /// Prepares the engine for verifying signatures of the given master public key.
    pub fn init_verify(&mut self, key: VerifyingKey) -> Result<()> {
        self.check_params(&key.params)?;
        debug!("initialized for verification");
        self.state = State::Verifying {
            key,
            buffer: Vec::new(),
        };
        Ok(())
    }

    /// Feeds message bytes.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        match &mut self.state {
            State::Signing { buffer, .. } | State::Verifying { buffer, .. } => {
                buffer.extend_from_slice(data);
                Ok(())
            }
            State::Uninitialized => Err(Error::StateSequence(
                "signature must be initialized before it is fed data",
            )),
        }
    }

    /// Signs the buffered message.
    ///
    /// Returns the encoded signature. The buffer is emptied, the engine stays ready for signing
    /// with the same key.
    pub fn sign(&mut self) -> Result<Vec<u8>> {
        let State::Signing { key, buffer } = &mut self.state else {
            return Err(Error::StateSequence(
                "sign can not be called without init_sign first",
            ));
        };
        check_delegate_count(&self.delegate_ids, key)?;
        let message = mem::take(buffer);
        let key = key.clone();

        let signature = match &key {
            SigningKey::Master { params, key } => {
                self.hibe
                    .delegate_master(&mut self.rng, params, key, &message)?
            }
            SigningKey::Delegated { params, key } => self.hibe.delegate(
                &mut self.rng,
                params,
                key,
                &self.delegate_ids,
                &message,
            )?,
        };
        debug!(depth = signature.depth(), "signed message");
        codec::encode_delegated_key(&signature)
    }

    /// Verifies `signature` for the buffered message.
    ///
    /// A signature that does not belong to the configured delegate identities is an error, not
    /// an invalid signature. The buffer is emptied, the engine stays ready for verification
    /// with the same key.
    pub fn verify(&mut self, signature: &[u8]) -> Result<bool> {
        let State::Verifying { key, buffer } = &mut self.state else {
            return Err(Error::StateSequence(
                "verify can not be called without init_verify first",
            ));
        };
        let message = mem::take(buffer);
        let signature = codec::decode_delegated_key(signature, &key.params)?;
        if self.delegate_ids.len() + 1 != signature.depth() {
            warn!(
                depth = signature.depth(),
                delegate_ids = self.delegate_ids.len(),
                "signature depth does not match the delegate identities"
            );
            return Err(Error::IdentityChainMismatch {
                expected: signature.depth().saturating_sub(1),
                actual: self.delegate_ids.len(),
            });
        }
        let identity = self.delegate_ids.child(&message);
        if identity.len() != signature.depth() {
            return Err(Error::IdentityChainMismatch {
                expected: signature.depth(),
                actual: identity.len(),
            });
        }
        self.hibe
            .verify_deterministic(&key.params, &key.public_key, &identity, &signature)
    }

    /// The parameters must have been set up for the same height and curve as the engine.
    fn check_params(&self, params: &PublicParams) -> Result<()> {
        if params.max_height() != self.hibe.max_depth() || params.curve != self.hibe.curve() {
            return Err(Error::Configuration(format!(
                "parameters of height {} on {:?} do not fit an engine of height {} on {:?}",
                params.max_height(),
                params.curve,
                self.hibe.max_depth(),
                self.hibe.curve()
            )));
        }
        Ok(())
    }
}

fn check_delegate_count(delegate_ids: &IdentityChain, key: &SigningKey) -> Result<()> {
    if delegate_ids.len() != key.depth() {
        return Err(Error::IdentityChainMismatch {
            expected: key.depth(),
            actual: delegate_ids.len(),
        });
    }
    Ok(())
}
