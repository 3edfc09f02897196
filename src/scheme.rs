//! Operational surface of the cryptosystem: the [`Scheme`] capability trait
//! and [`Paillier`], its stock implementation over a caller-supplied entropy
//! source.

use rand_core::{CryptoRng, OsRng, RngCore};
use unknown_order::BigNumber;

use crate::{utils, Ciphertext, Error, Plaintext, PrivateKey, PublicKey};

/// Prime bit length used by [`Paillier::new_default`], per generating prime,
/// so the default plaintext modulus `n` is twice this size.
///
/// Pick the length explicitly via [`Paillier::from_rng`] when other security
/// requirements apply.
pub const DEFAULT_PRIME_BITS: usize = 1024;

/// Capability interface of the cryptosystem.
///
/// Everything callers do goes through this trait, so an implementation over
/// different big-integer machinery can be substituted without touching them.
/// All operations except [`encrypt`](Self::encrypt) are pure functions of
/// their inputs; `encrypt` additionally consumes the instance entropy source.
pub trait Scheme {
    /// Derive the key pair defined by this instance's generating primes.
    ///
    /// Repeated calls on one instance return the same pair. Fails when the
    /// primes do not form a valid pair, which signals a defect in the prime
    /// source, not a recoverable runtime condition.
    fn generate_keypair(&self) -> Result<PrivateKey, Error>;

    /// Encrypt `m ∈ [0, n)` under `key`.
    ///
    /// A fresh blinding nonce is drawn on every call, so two encryptions of
    /// the same plaintext are unequal with overwhelming probability.
    fn encrypt(&mut self, key: &PublicKey, m: &Plaintext) -> Ciphertext;

    /// Recover the plaintext of `c`.
    fn decrypt(&self, key: &PrivateKey, c: &Ciphertext) -> Plaintext;

    /// Ciphertext of `m1 + m2 mod n` given ciphertexts of `m1` and `m2`.
    fn add(&self, a: &Ciphertext, b: &Ciphertext, key: &PublicKey) -> Ciphertext;

    /// Ciphertext of `m · k mod n` given a ciphertext of `m` and a plain
    /// non-negative scalar `k`.
    fn mul(&self, a: &Ciphertext, k: &BigNumber, key: &PublicKey) -> Ciphertext;

    /// Ciphertext of `m1 − m2 mod n` given ciphertexts of `m1` and `m2`.
    ///
    /// Fails when `b` is not invertible modulo `n²` (a malformed or
    /// mismatched-key ciphertext).
    fn sub(&self, a: &Ciphertext, b: &Ciphertext, key: &PublicKey) -> Result<Ciphertext, Error>;
}

/// Scheme instance: two generating primes drawn at construction and the
/// entropy source used for blinding nonces.
pub struct Paillier<R> {
    p: BigNumber,
    q: BigNumber,
    rng: R,
}

impl<R: RngCore + CryptoRng> Paillier<R> {
    /// Instance over a caller-supplied entropy source.
    ///
    /// Draws the two generating primes of `prime_bits` bits each immediately.
    /// Prime sampling rejects candidates until the primality trials pass, so
    /// this call may block for an unbounded but typically short time.
    pub fn from_rng(prime_bits: usize, mut rng: R) -> Self {
        let p = BigNumber::prime_from_rng(prime_bits, &mut rng);
        let q = BigNumber::prime_from_rng(prime_bits, &mut rng);
        Self { p, q, rng }
    }
}

impl Paillier<OsRng> {
    /// Instance over the operating-system RNG and [`DEFAULT_PRIME_BITS`].
    pub fn new_default() -> Self {
        Self::from_rng(DEFAULT_PRIME_BITS, OsRng)
    }
}

impl<R: RngCore + CryptoRng> Scheme for Paillier<R> {
    fn generate_keypair(&self) -> Result<PrivateKey, Error> {
        PrivateKey::from_primes(&self.p, &self.q)
    }

    fn encrypt(&mut self, key: &PublicKey, m: &Plaintext) -> Ciphertext {
        // independent draw per call, never reused across encryptions
        let nonce = utils::gen_invertible(key.n(), &mut self.rng);
        key.encrypt_with(m, &nonce)
    }

    fn decrypt(&self, key: &PrivateKey, c: &Ciphertext) -> Plaintext {
        key.decrypt(c)
    }

    fn add(&self, a: &Ciphertext, b: &Ciphertext, key: &PublicKey) -> Ciphertext {
        key.oadd(a, b)
    }

    fn mul(&self, a: &Ciphertext, k: &BigNumber, key: &PublicKey) -> Ciphertext {
        key.omul(a, k)
    }

    fn sub(&self, a: &Ciphertext, b: &Ciphertext, key: &PublicKey) -> Result<Ciphertext, Error> {
        key.osub(a, b)
    }
}
