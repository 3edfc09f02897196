//! Paillier public-key cryptosystem with additively homomorphic ciphertexts.
//!
//! Key generation, encryption and decryption, plus three operations carried
//! out on ciphertexts alone: addition of two encrypted values, multiplication
//! of an encrypted value by a plain scalar, and subtraction of encrypted
//! values. Messages live in `Z_n` for `n = p·q` a product of two secret
//! primes; ciphertexts live in `Z_{n²}`.
//!
//! The operational surface is the [`Scheme`] trait; [`Paillier`] is the stock
//! implementation over a caller-supplied [`rand_core::RngCore`] entropy
//! source.
//!
//! ## Example
//!
//! ```
//! use additive_paillier::{Paillier, Scheme};
//! use additive_paillier::unknown_order::BigNumber;
//!
//! # fn main() -> Result<(), additive_paillier::Error> {
//! // 256-bit primes keep the example fast, see `DEFAULT_PRIME_BITS`
//! let mut scheme = Paillier::from_rng(256, rand_core::OsRng);
//! let sk = scheme.generate_keypair()?;
//! let pk = sk.public_key().clone();
//!
//! let c1 = scheme.encrypt(&pk, &BigNumber::from(2));
//! let c2 = scheme.encrypt(&pk, &BigNumber::from(3));
//!
//! let sum = scheme.add(&c1, &c2, &pk);
//! assert_eq!(scheme.decrypt(&sk, &sum), BigNumber::from(5));
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

mod keys;
mod scheme;
pub mod utils;

/// Underlying big number implementation. Use this to get
/// the correct version of the library
pub use unknown_order;

use unknown_order::BigNumber;

pub use keys::{PrivateKey, PublicKey};
pub use scheme::{Paillier, Scheme, DEFAULT_PRIME_BITS};

/// Message in `[0, n)`
pub type Plaintext = BigNumber;
/// Encrypted message in `[0, n²)`
pub type Ciphertext = BigNumber;
/// Per-encryption blinding factor, a unit of `Z_n`
pub type Nonce = BigNumber;

#[derive(Debug, Clone, Error)]
#[error(transparent)]
pub struct Error(#[from] Reason);

#[derive(Debug, Clone, Error)]
pub(crate) enum Reason {
    #[error("p,q are invalid")]
    InvalidPQ,
    #[error("operand has no inverse modulo n²")]
    NotInvertible,
}
