//! Binary encodings of parameters, keys and signatures.
//!
//! Every encoding is a versioned envelope, serialized with [`bincode`]. Group elements are stored
//! in their compressed form and validated by the curve library when they are read back. Vectors
//! are length-prefixed, trailing bytes are rejected and the input size is bounded, so that a
//! malformed signature cannot make us allocate arbitrary amounts of memory.
//!
//! | Envelope             | Version | Contents                                  |
//! |----------------------|---------|-------------------------------------------|
//! | [`PublicParams`]     | 333     | prime, `g`, `g_head`, `g2`, `g3`, `h[]`   |
//! | [`DelegatedSecretKey`] | 334   | depth, `a0`, `a1`, `b[]`                  |
//! | [`PublicKey`]        | 335     | `g_head^α`                                |
//! | [`MasterKey`]        | 336     | `g2^α`                                    |
use super::{
    config::Curve,
    error::{Error, Result},
    keys::{DelegatedSecretKey, MasterKey, PublicKey, PublicParams},
};

use bincode::Options;
use bls12_381_plus::{G1Affine, G2Affine};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

pub const PARAMS_VERSION: u32 = 333;
pub const DELEGATED_KEY_VERSION: u32 = 334;
pub const PUBLIC_KEY_VERSION: u32 = 335;
pub const MASTER_KEY_VERSION: u32 = 336;

/// Upper bound for any encoded object.
const SIZE_LIMIT: u64 = 1 << 20;

#[derive(Serialize, Deserialize)]
struct ParamsEnvelope {
    version: u32,
    prime: [u8; 32],
    g: G1Affine,
    g_head: G2Affine,
    g2: G1Affine,
    g3: G1Affine,
    h: Vec<G1Affine>,
}

#[derive(Serialize, Deserialize)]
struct DelegatedKeyEnvelope {
    version: u32,
    depth: u64,
    a0: G1Affine,
    a1: G2Affine,
    b: Vec<G1Affine>,
}

#[derive(Serialize, Deserialize)]
struct PointEnvelope<P> {
    version: u32,
    point: P,
}

fn options() -> impl Options {
    bincode::DefaultOptions::new()
        .with_limit(SIZE_LIMIT)
        .reject_trailing_bytes()
}

fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>> {
    options()
        .serialize(value)
        .map_err(|e| Error::Configuration(format!("cannot encode: {e}")))
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    options()
        .deserialize(bytes)
        .map_err(|e| Error::Decoding(e.to_string()))
}

fn check_version(what: &str, expected: u32, actual: u32) -> Result<()> {
    if expected != actual {
        return Err(Error::Decoding(format!(
            "wrong {what} version: expected {expected}, got {actual}"
        )));
    }
    Ok(())
}

pub fn encode_params(params: &PublicParams) -> Result<Vec<u8>> {
    encode(&ParamsEnvelope {
        version: PARAMS_VERSION,
        prime: params.order(),
        g: params.g,
        g_head: params.g_head,
        g2: params.g2,
        g3: params.g3,
        h: params.h.clone(),
    })
}

pub fn decode_params(bytes: &[u8]) -> Result<PublicParams> {
    let envelope: ParamsEnvelope = decode(bytes)?;
    check_version("parameter", PARAMS_VERSION, envelope.version)?;
    let curve = Curve::from_order(&envelope.prime).ok_or_else(|| {
        Error::Configuration(format!(
            "no supported curve with order {}",
            hex::encode(envelope.prime)
        ))
    })?;
    Ok(PublicParams {
        curve,
        g: envelope.g,
        g_head: envelope.g_head,
        g2: envelope.g2,
        g3: envelope.g3,
        h: envelope.h,
    })
}

pub fn encode_delegated_key(key: &DelegatedSecretKey) -> Result<Vec<u8>> {
    encode(&DelegatedKeyEnvelope {
        version: DELEGATED_KEY_VERSION,
        depth: key.depth as u64,
        a0: key.a0,
        a1: key.a1,
        b: key.b.clone(),
    })
}

/// Decodes a delegated key (or signature) that belongs to the given parameters.
pub fn decode_delegated_key(bytes: &[u8], params: &PublicParams) -> Result<DelegatedSecretKey> {
    let envelope: DelegatedKeyEnvelope = decode(bytes)?;
    check_version("delegated key", DELEGATED_KEY_VERSION, envelope.version)?;
    let depth = usize::try_from(envelope.depth)
        .map_err(|_| Error::Decoding(format!("depth {} out of range", envelope.depth)))?;
    DelegatedSecretKey::from_parts(params, envelope.a0, envelope.a1, envelope.b, depth)
        .map_err(|e| Error::Decoding(e.to_string()))
}

pub fn encode_public_key(key: &PublicKey) -> Result<Vec<u8>> {
    encode(&PointEnvelope {
        version: PUBLIC_KEY_VERSION,
        point: key.0,
    })
}

pub fn decode_public_key(bytes: &[u8]) -> Result<PublicKey> {
    let envelope: PointEnvelope<G2Affine> = decode(bytes)?;
    check_version("public key", PUBLIC_KEY_VERSION, envelope.version)?;
    Ok(PublicKey(envelope.point))
}

pub fn encode_master_key(key: &MasterKey) -> Result<Vec<u8>> {
    encode(&PointEnvelope {
        version: MASTER_KEY_VERSION,
        point: key.0,
    })
}

pub fn decode_master_key(bytes: &[u8]) -> Result<MasterKey> {
    let envelope: PointEnvelope<G1Affine> = decode(bytes)?;
    check_version("master key", MASTER_KEY_VERSION, envelope.version)?;
    Ok(MasterKey(envelope.point))
}
