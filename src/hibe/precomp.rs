//! Verification with a precomputed delegate prefix.
//!
//! When many signatures are checked for the same delegate identities (for example the same
//! domain and epoch), the product `g3 * h_1^H(id_1) * ... * h_k^H(id_k)` only needs to be
//! computed once. Verifying a single message then costs one exponentiation and one
//! multi-pairing.
use super::bbg::{multiply_simultaneously, signature_equation_holds};
use crate::{
    error::{Error, Result},
    hash::hash_to_scalar,
    identity::IdentityChain,
    keys::{DelegatedSecretKey, PublicKey, PublicParams},
};

use bls12_381_plus::{G1Affine, G1Projective};
use tracing::debug;

/// A verifier bound to a master public key and a fixed list of delegate identities.
#[derive(Debug, Clone)]
pub struct PrecomputedVerifier {
    params: PublicParams,
    public_key: PublicKey,
    delegate_ids: IdentityChain,
    precomp: G1Projective,
}

impl PrecomputedVerifier {
    /// Precomputes the delegate prefix.
    ///
    /// Signatures are one level below the delegate identities, so `delegate_ids` must leave at
    /// least one level free.
    pub fn new(
        params: &PublicParams,
        public_key: &PublicKey,
        delegate_ids: IdentityChain,
    ) -> Result<PrecomputedVerifier> {
        let max = params.max_height();
        if delegate_ids.len() >= max {
            return Err(Error::DelegationDepthExceeded {
                depth: delegate_ids.len(),
                max,
            });
        }
        let precomp = multiply_simultaneously(&delegate_ids.hashes(), &params.h) + params.g3;
        debug!(levels = delegate_ids.len(), "precomputed delegate prefix");
        Ok(PrecomputedVerifier {
            params: params.clone(),
            public_key: *public_key,
            delegate_ids,
            precomp,
        })
    }

    pub fn delegate_ids(&self) -> &IdentityChain {
        &self.delegate_ids
    }

    /// Checks that `signature` was delegated for the delegate identities followed by `message`.
    pub fn verify(&self, message: &[u8], signature: &DelegatedSecretKey) -> bool {
        let level = self.delegate_ids.len();
        if signature.depth != level + 1 {
            debug!(
                depth = signature.depth,
                expected = level + 1,
                "signature depth does not match"
            );
            return false;
        }
        let h_multi = G1Affine::from(self.precomp + self.params.h[level] * hash_to_scalar(message));
        signature_equation_holds(&self.params, &self.public_key, &h_multi, signature)
    }
}
