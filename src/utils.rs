//! Modular arithmetic shared by key generation and the ciphertext operations.

use rand_core::{CryptoRng, RngCore};
use unknown_order::BigNumber;

/// Residuosity quotient `L(x) = (x - 1) / n`, exact integer division.
///
/// Callers must guarantee `x ≡ 1 (mod n)`; the quotient carries no meaning
/// otherwise and no runtime check is performed.
pub fn l(x: &BigNumber, n: &BigNumber) -> BigNumber {
    (x - 1) / n
}

/// Compute l^le * r^re modulo m
pub fn combine(
    l: &BigNumber,
    le: &BigNumber,
    r: &BigNumber,
    re: &BigNumber,
    m: &BigNumber,
) -> BigNumber {
    l.modpow(le, m).modmul(&r.modpow(re, m), m)
}

/// Generate element in Zm*. Does so by trial.
pub fn gen_invertible<R: RngCore + CryptoRng>(modulo: &BigNumber, rng: &mut R) -> BigNumber {
    loop {
        let r = BigNumber::from_rng(modulo, rng);
        if r.gcd(modulo) == 1.into() {
            break r;
        }
    }
}

#[cfg(test)]
mod test {
    use unknown_order::BigNumber;

    #[test]
    fn l_is_exact_division() {
        // 61 ≡ 1 (mod 15)
        let q = super::l(&BigNumber::from(61), &BigNumber::from(15));
        assert_eq!(q, BigNumber::from(4));
    }

    #[test]
    fn combine_matches_naive_formula() {
        // 16^2 * 7^15 mod 225
        let got = super::combine(
            &BigNumber::from(16),
            &BigNumber::from(2),
            &BigNumber::from(7),
            &BigNumber::from(15),
            &BigNumber::from(225),
        );
        assert_eq!(got, BigNumber::from(58));
    }

    #[test]
    fn gen_invertible_samples_units() {
        let mut rng = rand_core::OsRng;
        let n = BigNumber::from(15);
        for _ in 0..32 {
            let r = super::gen_invertible(&n, &mut rng);
            assert!(r < n);
            assert_eq!(r.gcd(&n), BigNumber::one());
        }
    }
}
