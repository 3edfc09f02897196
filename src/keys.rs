//! Key pair of the cryptosystem and the arithmetic tied to each half:
//! encryption and the homomorphic operations on the public key, decryption
//! on the private key.

use unknown_order::BigNumber;

use crate::{utils, Ciphertext, Error, Nonce, Plaintext, Reason};

/// Public half of a key pair.
///
/// Carries the plaintext modulus `n = p·q`, the ciphertext modulus `n²`, and
/// the canonical generator `g = n + 1`. Immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct PublicKey {
    n: BigNumber,
    nn: BigNumber,
    g: BigNumber,
}

impl PublicKey {
    pub(crate) fn from_modulus(n: BigNumber) -> Self {
        let nn = &n * &n;
        let g = &n + 1;
        Self { n, nn, g }
    }

    /// Plaintext modulus `n`
    pub fn n(&self) -> &BigNumber {
        &self.n
    }

    /// Ciphertext modulus `n²`
    pub fn nn(&self) -> &BigNumber {
        &self.nn
    }

    /// Generator `g = n + 1`
    pub fn g(&self) -> &BigNumber {
        &self.g
    }

    /// Encrypt `m` with a caller-provided nonce: `c = g^m · nonce^n mod n²`.
    ///
    /// Deterministic; [`Scheme::encrypt`](crate::Scheme::encrypt) draws a
    /// fresh nonce on every call instead. `m` outside `[0, n)` is reduced by
    /// the algebra and no longer the intended plaintext.
    pub fn encrypt_with(&self, m: &Plaintext, nonce: &Nonce) -> Ciphertext {
        utils::combine(&self.g, m, nonce, &self.n, &self.nn)
    }

    /// Ciphertext of `m1 + m2 mod n` given ciphertexts of `m1` and `m2`.
    pub fn oadd(&self, a: &Ciphertext, b: &Ciphertext) -> Ciphertext {
        a.modmul(b, &self.nn)
    }

    /// Ciphertext of `m · k mod n` given a ciphertext of `m` and a plain
    /// non-negative scalar `k`.
    pub fn omul(&self, a: &Ciphertext, k: &BigNumber) -> Ciphertext {
        a.modpow(k, &self.nn)
    }

    /// Ciphertext of `m1 − m2 mod n` given ciphertexts of `m1` and `m2`.
    ///
    /// Fails when `b` is not invertible modulo `n²`, i.e. it shares a factor
    /// with `n` and cannot be a well-formed ciphertext under this key.
    pub fn osub(&self, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext, Error> {
        let b_inv = b.invert(&self.nn).ok_or(Reason::NotInvertible)?;
        Ok(self.oadd(a, &b_inv))
    }
}

/// Private half of a key pair. Owns the matching [`PublicKey`]; the two are
/// never separated.
#[derive(Debug, Clone)]
pub struct PrivateKey {
    pk: PublicKey,
    /// Decryption exponent `lcm(p − 1, q − 1)`
    h: BigNumber,
    /// `L(g^h mod n²)⁻¹ mod n`
    u: BigNumber,
}

impl PrivateKey {
    /// Derive a key pair from two distinct odd primes.
    ///
    /// Fails when `p == q` or when `L(g^h mod n²)` has no inverse modulo `n`,
    /// both of which mean the inputs were not a valid prime pair and point at
    /// a defect in the prime source rather than a runtime condition.
    pub fn from_primes(p: &BigNumber, q: &BigNumber) -> Result<Self, Error> {
        if p == q {
            return Err(Reason::InvalidPQ.into());
        }
        let pk = PublicKey::from_modulus(p * q);
        let h = (p - 1u32).lcm(&(q - 1u32));
        let t = utils::l(&pk.g.modpow(&h, &pk.nn), &pk.n);
        let u = t.invert(&pk.n).ok_or(Reason::InvalidPQ)?;
        Ok(Self { pk, h, u })
    }

    /// The public half of this key pair.
    pub fn public_key(&self) -> &PublicKey {
        &self.pk
    }

    /// Recover the plaintext of `c`: `m = L(c^h mod n²) · u mod n`.
    ///
    /// Total for any integer input; the result is only meaningful for
    /// ciphertexts produced under the matching public key (directly or via
    /// the homomorphic operations).
    pub fn decrypt(&self, c: &Ciphertext) -> Plaintext {
        let ch = c.modpow(&self.h, &self.pk.nn);
        utils::l(&ch, &self.pk.n).modmul(&self.u, &self.pk.n)
    }
}

#[cfg(test)]
mod test {
    use unknown_order::BigNumber;

    use super::PrivateKey;

    // p = 3, q = 5: n = 15, n² = 225, g = 16, h = lcm(2, 4) = 4,
    // u = (L(16^4 mod 225))⁻¹ mod 15 = 4⁻¹ mod 15 = 4
    fn tiny_key() -> PrivateKey {
        PrivateKey::from_primes(&BigNumber::from(3), &BigNumber::from(5)).unwrap()
    }

    #[test]
    fn derives_textbook_values() {
        let sk = tiny_key();
        let pk = sk.public_key();
        assert_eq!(*pk.n(), BigNumber::from(15));
        assert_eq!(*pk.nn(), BigNumber::from(225));
        assert_eq!(*pk.g(), BigNumber::from(16));
        assert_eq!(sk.h, BigNumber::from(4));
        assert_eq!(sk.u, BigNumber::from(4));
    }

    #[test]
    fn known_ciphertexts_round_trip() {
        let sk = tiny_key();
        let pk = sk.public_key();

        let c1 = pk.encrypt_with(&BigNumber::from(2), &BigNumber::from(7));
        assert_eq!(c1, BigNumber::from(58));
        assert_eq!(sk.decrypt(&c1), BigNumber::from(2));

        let c2 = pk.encrypt_with(&BigNumber::from(3), &BigNumber::from(4));
        assert_eq!(c2, BigNumber::from(154));
        assert_eq!(sk.decrypt(&c2), BigNumber::from(3));
    }

    #[test]
    fn known_ciphertexts_add() {
        let sk = tiny_key();
        let pk = sk.public_key();

        let c1 = pk.encrypt_with(&BigNumber::from(2), &BigNumber::from(7));
        let c2 = pk.encrypt_with(&BigNumber::from(3), &BigNumber::from(4));
        let sum = pk.oadd(&c1, &c2);
        assert_eq!(sum, BigNumber::from(157));
        assert_eq!(sk.decrypt(&sum), BigNumber::from(5));
    }

    #[test]
    fn equal_primes_rejected() {
        let r = PrivateKey::from_primes(&BigNumber::from(5), &BigNumber::from(5));
        assert!(r.is_err());
    }

    #[test]
    fn osub_rejects_non_invertible_operand() {
        let sk = tiny_key();
        let pk = sk.public_key();
        let c = pk.encrypt_with(&BigNumber::from(2), &BigNumber::from(7));
        // 15 shares a factor with 225, so no inverse exists
        let r = pk.osub(&c, &BigNumber::from(15));
        assert!(r.is_err());
    }
}
