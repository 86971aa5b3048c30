use super::{
    sample::{random_exponent, random_nonzero_gt, sample_g1},
    Hibe, HibeCrypt, HibeVerify,
};
use crate::{
    config::{Curve, SchemeConfig},
    error::{Error, Result},
    hash::hash_to_scalar,
    identity::IdentityChain,
    keys::{Ciphertext, DelegatedSecretKey, MasterKey, MasterKeyPair, PublicKey, PublicParams},
};

use std::iter;

use bls12_381_plus::{
    group::Group, multi_miller_loop, pairing, G1Affine, G1Projective, G2Affine, G2Prepared, Gt,
    Scalar,
};
use rand::{CryptoRng, Rng};
use tracing::{debug, trace};

/// The HIBE of Boneh, Boyen and Goh, "Hierarchical Identity Based Encryption with Constant Size
/// Ciphertext" ([eprint](https://eprint.iacr.org/2005/015.pdf)).
///
/// Secret keys, `g2`, `g3` and the `h` elements live in `G1`, the master public key and the
/// second key component live in `G2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonehBoyenGoh {
    config: SchemeConfig,
}

impl BonehBoyenGoh {
    pub fn new(max_depth: usize) -> Self {
        Self::from_config(SchemeConfig::new(max_depth))
    }

    pub fn from_config(config: SchemeConfig) -> Self {
        Self { config }
    }

    pub fn max_depth(&self) -> usize {
        self.config.max_height
    }

    pub fn curve(&self) -> Curve {
        self.config.curve
    }

    pub fn config(&self) -> &SchemeConfig {
        &self.config
    }
}

/// `h_1^{x_1} * ... * h_k^{x_k}`, for as many elements as `exponents` has.
pub(crate) fn multiply_simultaneously(exponents: &[Scalar], hs: &[G1Affine]) -> G1Projective {
    hs.iter()
        .zip(exponents)
        .map(|(h, x)| h * x)
        .sum::<G1Projective>()
}

/// Evaluates `e(h_multi, a1) * e(g2, pk) * e(a0^-1, g_head) == 1`.
pub(crate) fn signature_equation_holds(
    params: &PublicParams,
    public_key: &PublicKey,
    h_multi: &G1Affine,
    key: &DelegatedSecretKey,
) -> bool {
    let a1 = G2Prepared::from(key.a1);
    let public_key = G2Prepared::from(public_key.0);
    let g_head = G2Prepared::from(params.g_head);
    let a0_inverse = -key.a0;
    let product = multi_miller_loop(&[
        (h_multi, &a1),
        (&params.g2, &public_key),
        (&a0_inverse, &g_head),
    ])
    .final_exponentiation();
    bool::from(product.is_identity())
}

impl Hibe for BonehBoyenGoh {
    type Params = PublicParams;
    type MasterKeyPair = MasterKeyPair;
    type MasterKey = MasterKey;
    type PublicKey = PublicKey;
    type PrivateKey = DelegatedSecretKey;

    fn setup<R: Rng + CryptoRng>(&self, mut rng: R) -> Result<Self::Params> {
        let curve = self.curve();
        let params = match curve {
            Curve::Bls12_381 => PublicParams {
                curve,
                g: G1Affine::generator(),
                g_head: G2Affine::generator(),
                g2: sample_g1(&mut rng),
                g3: sample_g1(&mut rng),
                h: (0..self.max_depth()).map(|_| sample_g1(&mut rng)).collect(),
            },
        };
        debug!(?curve, max_height = self.max_depth(), "set up public parameters");
        Ok(params)
    }

    fn generate_master_key<R: Rng + CryptoRng>(
        &self,
        mut rng: R,
        params: &Self::Params,
    ) -> Result<Self::MasterKeyPair> {
        let alpha = random_exponent(&mut rng, params.curve);
        Ok(MasterKeyPair {
            public_key: PublicKey((params.g_head * alpha).into()),
            secret_key: MasterKey((params.g2 * alpha).into()),
        })
    }

    fn delegate_master<R: Rng + CryptoRng>(
        &self,
        mut rng: R,
        params: &Self::Params,
        master_key: &Self::MasterKey,
        child: &[u8],
    ) -> Result<Self::PrivateKey> {
        let max = params.max_height();
        if max == 0 {
            return Err(Error::DelegationDepthExceeded { depth: 0, max });
        }
        debug!("first delegation");

        let v = random_exponent(&mut rng, params.curve);
        let inner = (params.h[0] * hash_to_scalar(child) + params.g3) * v;
        if max == 1 {
            trace!("last delegation, no h elements left");
        }
        Ok(DelegatedSecretKey {
            a0: (inner + master_key.0).into(),
            a1: (params.g_head * v).into(),
            b: params.h[1..].iter().map(|h| (h * v).into()).collect(),
            depth: 1,
        })
    }

    fn delegate<R: Rng + CryptoRng>(
        &self,
        mut rng: R,
        params: &Self::Params,
        parent_key: &Self::PrivateKey,
        parent_name: &IdentityChain,
        child: &[u8],
    ) -> Result<Self::PrivateKey> {
        let max = params.max_height();
        let depth = parent_key.depth;
        if depth >= max {
            return Err(Error::DelegationDepthExceeded { depth, max });
        }
        if parent_name.len() != depth {
            return Err(Error::IdentityChainMismatch {
                expected: depth,
                actual: parent_name.len(),
            });
        }
        if parent_key.b.len() != max - depth {
            return Err(Error::Configuration(format!(
                "key at depth {depth} does not belong to parameters of height {max}"
            )));
        }
        debug!(depth, "another delegation");

        let w = random_exponent(&mut rng, params.curve);
        let child = hash_to_scalar(child);
        let identity = parent_name
            .hashes()
            .into_iter()
            .chain(iter::once(child))
            .collect::<Vec<_>>();
        let inner = (multiply_simultaneously(&identity, &params.h) + params.g3) * w;
        if depth + 1 == max {
            trace!("last delegation, no h elements left");
        }
        Ok(DelegatedSecretKey {
            a0: (parent_key.b[0] * child + inner + parent_key.a0).into(),
            a1: (params.g_head * w + parent_key.a1).into(),
            b: parent_key.b[1..]
                .iter()
                .zip(params.h[depth + 1..].iter())
                .map(|(b, h)| b + h * w)
                .map(Into::into)
                .collect(),
            depth: depth + 1,
        })
    }
}

impl HibeCrypt for BonehBoyenGoh {
    type Message = Gt;

    type Ciphertext = Ciphertext;

    fn encrypt<R: Rng + CryptoRng>(
        &self,
        mut rng: R,
        params: &Self::Params,
        public_key: &Self::PublicKey,
        identity: &IdentityChain,
        message: &Self::Message,
    ) -> Result<Self::Ciphertext> {
        if identity.len() > params.max_height() {
            return Err(Error::IdentityTooLong);
        }
        debug!(levels = identity.len(), "encryption");

        let s = random_exponent(&mut rng, params.curve);
        Ok(Ciphertext {
            c1: pairing(&params.g2, &public_key.0) * s + message,
            c2: (params.g_head * s).into(),
            c3: ((multiply_simultaneously(&identity.hashes(), &params.h) + params.g3) * s).into(),
        })
    }

    fn decrypt(
        &self,
        _: &Self::Params,
        key: &Self::PrivateKey,
        ciphertext: &Self::Ciphertext,
    ) -> Result<Self::Message> {
        debug!(depth = key.depth, "decryption");
        let a1 = G2Prepared::from(key.a1);
        let c2 = G2Prepared::from(ciphertext.c2);
        let a0_inverse = -key.a0;
        Ok(ciphertext.c1
            + multi_miller_loop(&[(&ciphertext.c3, &a1), (&a0_inverse, &c2)])
                .final_exponentiation())
    }
}

impl HibeVerify for BonehBoyenGoh {
    fn verify_probabilistic<R: Rng + CryptoRng>(
        &self,
        mut rng: R,
        params: &Self::Params,
        public_key: &Self::PublicKey,
        identity: &IdentityChain,
        key: &Self::PrivateKey,
    ) -> Result<bool> {
        if identity.len() != key.depth {
            debug!(
                depth = key.depth,
                levels = identity.len(),
                "identity does not match key depth"
            );
            return Ok(false);
        }
        let message = random_nonzero_gt(&mut rng);
        let ciphertext = self.encrypt(&mut rng, params, public_key, identity, &message)?;
        Ok(self.decrypt(params, key, &ciphertext)? == message)
    }

    fn verify_deterministic(
        &self,
        params: &Self::Params,
        public_key: &Self::PublicKey,
        identity: &IdentityChain,
        key: &Self::PrivateKey,
    ) -> Result<bool> {
        if identity.len() != key.depth {
            debug!(
                depth = key.depth,
                levels = identity.len(),
                "identity does not match key depth"
            );
            return Ok(false);
        }
        if identity.len() > params.max_height() {
            return Err(Error::IdentityTooLong);
        }
        debug!(depth = key.depth, "deterministic verification");
        let h_multi =
            G1Affine::from(multiply_simultaneously(&identity.hashes(), &params.h) + params.g3);
        Ok(signature_equation_holds(params, public_key, &h_multi, key))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn chain(elements: &[&str]) -> IdentityChain {
        IdentityChain::new(elements)
    }

    /// Delegates along `identity`, starting at the master key.
    fn delegate_all(
        bbg: &BonehBoyenGoh,
        params: &PublicParams,
        master_key: &MasterKey,
        identity: &IdentityChain,
    ) -> DelegatedSecretKey {
        let mut rng = rand::thread_rng();
        let mut key = DelegatedSecretKey::from_master(params, master_key);
        let mut name = IdentityChain::root();
        for element in identity.iter() {
            key = bbg
                .delegate(&mut rng, params, &key, &name, element)
                .unwrap();
            name = name.child(element);
        }
        key
    }

    #[test]
    fn encrypt_decrypt_empty_identity() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(5);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let secret_key = DelegatedSecretKey::from_master(&params, &keys.secret_key);
        let message = Gt::generator() * Scalar::from(4u32);
        let ciphertext = bbg
            .encrypt(&mut rng, &params, &keys.public_key, &IdentityChain::root(), &message)
            .unwrap();
        let decryption = bbg.decrypt(&params, &secret_key, &ciphertext).unwrap();
        assert_eq!(message, decryption);
    }

    #[test]
    fn encrypt_decrypt_without_delegation_height_zero() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(0);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let secret_key = DelegatedSecretKey::from_master(&params, &keys.secret_key);
        let message = random_nonzero_gt(&mut rng);
        let ciphertext = bbg
            .encrypt(&mut rng, &params, &keys.public_key, &IdentityChain::root(), &message)
            .unwrap();
        assert_eq!(
            bbg.decrypt(&params, &secret_key, &ciphertext).unwrap(),
            message
        );
        let root = IdentityChain::root();
        assert!(bbg
            .verify_deterministic(&params, &keys.public_key, &root, &secret_key)
            .unwrap());
        assert!(bbg
            .verify_probabilistic(&mut rng, &params, &keys.public_key, &root, &secret_key)
            .unwrap());
    }

    #[test]
    fn encrypt_decrypt_delegated() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(5);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let identity = chain(&["alice@example.com", "2020-02-02", "payload"]);
        let secret_key = delegate_all(&bbg, &params, &keys.secret_key, &identity);
        assert_eq!(secret_key.depth(), 3);
        assert_eq!(secret_key.b().len(), 2);
        let message = random_nonzero_gt(&mut rng);
        let ciphertext = bbg
            .encrypt(&mut rng, &params, &keys.public_key, &identity, &message)
            .unwrap();
        let decryption = bbg.decrypt(&params, &secret_key, &ciphertext).unwrap();
        assert_eq!(message, decryption);
    }

    #[test]
    fn delegate_master_matches_delegate_from_depth_zero() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(2);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let identity = chain(&["alice@example.com"]);
        let first = bbg
            .delegate_master(&mut rng, &params, &keys.secret_key, b"alice@example.com")
            .unwrap();
        let second = bbg
            .delegate(
                &mut rng,
                &params,
                &DelegatedSecretKey::from_master(&params, &keys.secret_key),
                &IdentityChain::root(),
                b"alice@example.com",
            )
            .unwrap();
        // Different randomness, equally valid keys.
        assert_ne!(first, second);
        let message = random_nonzero_gt(&mut rng);
        let ciphertext = bbg
            .encrypt(&mut rng, &params, &keys.public_key, &identity, &message)
            .unwrap();
        for key in [&first, &second] {
            assert_eq!(key.depth(), 1);
            assert_eq!(key.b().len(), 1);
            assert!(bbg
                .verify_deterministic(&params, &keys.public_key, &identity, key)
                .unwrap());
            assert!(bbg
                .verify_probabilistic(&mut rng, &params, &keys.public_key, &identity, key)
                .unwrap());
            assert_eq!(bbg.decrypt(&params, key, &ciphertext).unwrap(), message);
        }
    }

    #[test]
    fn depth_zero_key_has_no_randomness() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(3);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let key = DelegatedSecretKey::from_master(&params, &keys.secret_key);
        assert_eq!(key.depth(), 0);
        assert_eq!(key.a0(), &keys.secret_key.0);
        assert!(bool::from(key.a1().is_identity()));
        assert_eq!(key.b().len(), 3);
        assert!(key.b().iter().all(|b| bool::from(b.is_identity())));
    }

    #[test]
    fn chain_from_delegate_master() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(3);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let delegate_ids = chain(&["alice@example.com", "2020-02-02"]);
        let key_1 = bbg
            .delegate_master(&mut rng, &params, &keys.secret_key, b"alice@example.com")
            .unwrap();
        let key_2 = bbg
            .delegate(
                &mut rng,
                &params,
                &key_1,
                &delegate_ids.parent().unwrap(),
                b"2020-02-02",
            )
            .unwrap();
        let signature = bbg
            .delegate(&mut rng, &params, &key_2, &delegate_ids, b"payload-to-sign")
            .unwrap();
        let identity = delegate_ids.child(b"payload-to-sign");
        assert!(signature.b().is_empty());
        assert!(bbg
            .verify_deterministic(&params, &keys.public_key, &identity, &signature)
            .unwrap());
        assert!(bbg
            .verify_probabilistic(&mut rng, &params, &keys.public_key, &identity, &signature)
            .unwrap());

        let message = random_nonzero_gt(&mut rng);
        let ciphertext = bbg
            .encrypt(&mut rng, &params, &keys.public_key, &delegate_ids, &message)
            .unwrap();
        assert_eq!(bbg.decrypt(&params, &key_2, &ciphertext).unwrap(), message);
    }

    #[test]
    fn encrypt_decrypt_max_length_identity() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(5);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let identity = chain(&["1", "2", "3", "4", "5"]);
        let secret_key = delegate_all(&bbg, &params, &keys.secret_key, &identity);
        assert!(secret_key.b().is_empty());
        let message = random_nonzero_gt(&mut rng);
        let ciphertext = bbg
            .encrypt(&mut rng, &params, &keys.public_key, &identity, &message)
            .unwrap();
        assert_eq!(
            bbg.decrypt(&params, &secret_key, &ciphertext).unwrap(),
            message
        );
    }

    #[test]
    fn encrypt_too_long_identity() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(2);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let result = bbg.encrypt(
            &mut rng,
            &params,
            &keys.public_key,
            &chain(&["1", "2", "3"]),
            &Gt::generator(),
        );
        assert!(matches!(result, Err(Error::IdentityTooLong)));
    }

    #[test]
    fn decrypt_with_shorter_or_longer_key() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(3);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let identity = chain(&["alice@example.com", "2020-02-02", "payload"]);
        let key_2 = delegate_all(&bbg, &params, &keys.secret_key, &identity.parent().unwrap());
        let key_3 = bbg
            .delegate(
                &mut rng,
                &params,
                &key_2,
                &identity.parent().unwrap(),
                b"payload",
            )
            .unwrap();

        // encrypt for the first two levels only
        let message = random_nonzero_gt(&mut rng);
        let ciphertext = bbg
            .encrypt(
                &mut rng,
                &params,
                &keys.public_key,
                &identity.parent().unwrap(),
                &message,
            )
            .unwrap();
        assert_eq!(bbg.decrypt(&params, &key_2, &ciphertext).unwrap(), message);
        assert_ne!(bbg.decrypt(&params, &key_3, &ciphertext).unwrap(), message);

        // and for all three
        let ciphertext = bbg
            .encrypt(&mut rng, &params, &keys.public_key, &identity, &message)
            .unwrap();
        assert_eq!(bbg.decrypt(&params, &key_3, &ciphertext).unwrap(), message);
        assert_ne!(bbg.decrypt(&params, &key_2, &ciphertext).unwrap(), message);
    }

    #[test]
    fn encrypt_decrypt_wrong_id() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(3);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let identity = chain(&["alice@example.com", "2020-02-02", "payload"]);
        let secret_key = delegate_all(&bbg, &params, &keys.secret_key, &identity);
        let evil = chain(&["alice@example.com", "2020-02-02", "evil devil"]);
        let message = random_nonzero_gt(&mut rng);
        let ciphertext = bbg
            .encrypt(&mut rng, &params, &keys.public_key, &evil, &message)
            .unwrap();
        assert_ne!(
            bbg.decrypt(&params, &secret_key, &ciphertext).unwrap(),
            message
        );
        assert!(!bbg
            .verify_deterministic(&params, &keys.public_key, &evil, &secret_key)
            .unwrap());
        assert!(!bbg
            .verify_probabilistic(&mut rng, &params, &keys.public_key, &evil, &secret_key)
            .unwrap());
    }

    #[test]
    fn different_master_keys() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(3);
        let params_1 = bbg.setup(&mut rng).unwrap();
        let keys_1 = bbg.generate_master_key(&mut rng, &params_1).unwrap();
        let params_2 = bbg.setup(&mut rng).unwrap();
        let keys_2 = bbg.generate_master_key(&mut rng, &params_2).unwrap();
        assert_ne!(keys_1, keys_2);

        let message = random_nonzero_gt(&mut rng);
        let ciphertext = bbg
            .encrypt(
                &mut rng,
                &params_1,
                &keys_1.public_key,
                &IdentityChain::root(),
                &message,
            )
            .unwrap();
        let wrong_key = DelegatedSecretKey::from_master(&params_2, &keys_2.secret_key);
        assert_ne!(
            bbg.decrypt(&params_2, &wrong_key, &ciphertext).unwrap(),
            message
        );
    }

    #[test]
    fn verify_delegated() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(3);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let identity = chain(&["alice@example.com", "2020-02-02", "payload-to-sign"]);
        for depth in 0..=3 {
            let prefix = IdentityChain::new(identity.iter().take(depth));
            let key = delegate_all(&bbg, &params, &keys.secret_key, &prefix);
            assert!(bbg
                .verify_deterministic(&params, &keys.public_key, &prefix, &key)
                .unwrap());
            assert!(bbg
                .verify_probabilistic(&mut rng, &params, &keys.public_key, &prefix, &key)
                .unwrap());
        }
    }

    #[test]
    fn verify_more_ids_than_delegated() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(3);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let key = bbg
            .delegate_master(&mut rng, &params, &keys.secret_key, b"alice@example.com")
            .unwrap();
        let identity = chain(&["alice@example.com", "2020-02-02", "payload"]);
        assert!(!bbg
            .verify_deterministic(&params, &keys.public_key, &identity, &key)
            .unwrap());
        assert!(!bbg
            .verify_probabilistic(&mut rng, &params, &keys.public_key, &identity, &key)
            .unwrap());
    }

    #[test]
    fn tampered_identity_byte() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(3);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let identity = chain(&["alice@example.com", "2020-02-02", "payload-to-sign"]);
        let key = delegate_all(&bbg, &params, &keys.secret_key, &identity);
        for level in 0..identity.len() {
            let mut elements = identity.iter().map(<[u8]>::to_vec).collect::<Vec<_>>();
            elements[level][0] ^= 1;
            let tampered = IdentityChain::new(elements);
            assert!(!bbg
                .verify_deterministic(&params, &keys.public_key, &tampered, &key)
                .unwrap());
        }
    }

    #[test]
    fn verify_strategies_agree_on_forgery() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(2);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let other = bbg.generate_master_key(&mut rng, &params).unwrap();
        let identity = chain(&["alice@example.com"]);
        let forged = delegate_all(&bbg, &params, &other.secret_key, &identity);
        assert!(!bbg
            .verify_deterministic(&params, &keys.public_key, &identity, &forged)
            .unwrap());
        for _ in 0..4 {
            assert!(!bbg
                .verify_probabilistic(&mut rng, &params, &keys.public_key, &identity, &forged)
                .unwrap());
        }
    }

    #[test]
    fn derive_max_length() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(2);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let identity = chain(&["alice@example.com", "2020-02-02"]);
        let key = delegate_all(&bbg, &params, &keys.secret_key, &identity);
        let result = bbg.delegate(&mut rng, &params, &key, &identity, b"payload");
        assert!(matches!(
            result,
            Err(Error::DelegationDepthExceeded { depth: 2, max: 2 })
        ));
    }

    #[test]
    fn zero_delegations_allowed() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(0);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let result = bbg.delegate_master(&mut rng, &params, &keys.secret_key, b"payload");
        assert!(matches!(
            result,
            Err(Error::DelegationDepthExceeded { depth: 0, max: 0 })
        ));
    }

    #[test]
    fn delegate_with_wrong_parent_name() {
        let mut rng = rand::thread_rng();
        let bbg = BonehBoyenGoh::new(3);
        let params = bbg.setup(&mut rng).unwrap();
        let keys = bbg.generate_master_key(&mut rng, &params).unwrap();
        let key = bbg
            .delegate_master(&mut rng, &params, &keys.secret_key, b"alice@example.com")
            .unwrap();
        let result = bbg.delegate(&mut rng, &params, &key, &IdentityChain::root(), b"2020-02-02");
        assert!(matches!(
            result,
            Err(Error::IdentityChainMismatch {
                expected: 1,
                actual: 0
            })
        ));
    }
}
