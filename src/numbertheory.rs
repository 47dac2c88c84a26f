//! Number theory over prime fields: modular inverse and square root,
//! the Legendre symbol, and the base-2 Fermat test used to vet curve
//! parameters.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::encoding::int_string;
use crate::errors::{CurveError, Result};

/// Probabilistic primality check with Fermat's little theorem, base 2.
///
/// Even numbers fail by construction: only odd primes qualify as field
/// characteristics or subgroup orders here. Base-2 pseudoprimes slip
/// through, which is acceptable for vetting curve parameters.
pub fn fermat_test(n: &BigUint) -> bool {
    let one = BigUint::one();
    let two = BigUint::from(2u32);

    if n < &two || n.is_even() {
        return false;
    }

    two.modpow(&(n - &one), n) == one
}

/// Modular inverse by the extended Euclidean algorithm.
///
/// Fails when `a` and `m` are not coprime, in particular when a = 0 mod m.
///
/// ### Arguments
///
/// * `a` - Value to invert
/// * `m` - Modulus
pub fn mod_inv(a: &BigUint, m: &BigUint) -> Result<BigUint> {
    let int_m = BigInt::from(m.clone());
    let mut mn = (int_m.clone(), BigInt::from(a % m));
    let mut xy = (BigInt::zero(), BigInt::one());

    while !mn.1.is_zero() {
        let q = &mn.0 / &mn.1;
        xy = (xy.1.clone(), &xy.0 - &q * &xy.1);
        mn = (mn.1.clone(), &mn.0 % &mn.1);
    }

    // mn.0 now holds gcd(a, m)
    if !mn.0.is_one() {
        return Err(CurveError::InvalidInput(format!(
            "no inverse for {} mod {}",
            int_string(a),
            int_string(m)
        )));
    }

    Ok(xy.0.mod_floor(&int_m).to_biguint().unwrap())
}

/// Legendre symbol (a/p): +1 for a quadratic residue, -1 for a
/// non-residue, 0 when a = 0 mod p. `p` must be an odd prime.
pub fn legendre_symbol(a: &BigUint, p: &BigUint) -> i32 {
    let ls = a.modpow(&((p - 1u32) / 2u32), p);

    if ls.is_zero() {
        0
    } else if ls.is_one() {
        1
    } else {
        -1
    }
}

/// Modular square root of `a` mod the odd prime `p`.
///
/// For p = 3 mod 4 the root is a^((p+1)/4) directly; for p = 1 mod 4
/// the Tonelli-Shanks procedure runs instead. Fails when `a` is a
/// non-residue.
pub fn mod_sqrt(a: &BigUint, p: &BigUint) -> Result<BigUint> {
    let a = a % p;

    if a.is_zero() {
        return Ok(BigUint::zero());
    }

    if legendre_symbol(&a, p) != 1 {
        return Err(CurveError::NoSquareRoot(format!(
            "no root for {} mod {}",
            int_string(&a),
            int_string(p)
        )));
    }

    if p % 4u32 == BigUint::from(3u32) {
        return Ok(a.modpow(&((p + 1u32) / 4u32), p));
    }

    Ok(tonelli_shanks(&a, p))
}

/// Tonelli-Shanks square root for p = 1 mod 4. The caller has already
/// established that `a` is a nonzero quadratic residue, so the descent
/// terminates.
fn tonelli_shanks(a: &BigUint, p: &BigUint) -> BigUint {
    let one = BigUint::one();

    // p - 1 = q * 2^s with q odd
    let mut q = p - &one;
    let mut s = 0u32;
    while q.is_even() {
        q >>= 1u32;
        s += 1;
    }

    // any quadratic non-residue will do as the descent seed
    let mut z = BigUint::from(2u32);
    while legendre_symbol(&z, p) != -1 {
        z += 1u32;
    }

    let mut m = s;
    let mut c = z.modpow(&q, p);
    let mut t = a.modpow(&q, p);
    let mut r = a.modpow(&((&q + &one) / 2u32), p);

    while !t.is_one() {
        // least i with t^(2^i) = 1; always below m
        let mut i = 0u32;
        let mut t2i = t.clone();
        while !t2i.is_one() {
            t2i = &t2i * &t2i % p;
            i += 1;
        }

        let b = c.modpow(&(BigUint::one() << ((m - i - 1) as usize)), p);
        m = i;
        c = &b * &b % p;
        t = t * &c % p;
        r = r * b % p;
    }

    r
}

/*---- TESTS ----*/

#[cfg(test)]
mod numbertheory_test {

    use num_bigint::BigUint;
    use num_traits::Num;

    use crate::numbertheory::{fermat_test, legendre_symbol, mod_inv, mod_sqrt};

    fn big(i: u32) -> BigUint {
        BigUint::from(i)
    }

    #[test]
    fn fermat_separates_primes_from_composites() {
        for prime in &[3u32, 13, 19, 23, 31, 65537] {
            assert!(fermat_test(&big(*prime)), "{} should pass", prime);
        }
        for composite in &[0u32, 1, 4, 9, 15, 21, 33] {
            assert!(!fermat_test(&big(*composite)), "{} should fail", composite);
        }
    }

    #[test]
    fn inverse_times_value_is_one() {
        let p = big(13);
        for a in 1u32..13 {
            let inv = mod_inv(&big(a), &p).unwrap();
            assert_eq!((inv * big(a)) % &p, big(1));
        }
    }

    #[test]
    fn inverse_of_zero_fails() {
        assert!(mod_inv(&big(0), &big(13)).is_err());
        assert!(mod_inv(&big(13), &big(13)).is_err());
    }

    #[test]
    fn inverse_on_a_large_prime() {
        let p = BigUint::from_str_radix(
            "fffffffffffffffffffffffffffffffffffffffffffffffffffffffefffffc2f",
            16,
        )
        .unwrap();
        let a = big(2);
        let inv = mod_inv(&a, &p).unwrap();
        assert_eq!((inv * a) % &p, big(1));
    }

    #[test]
    fn legendre_symbol_values() {
        // residues mod 13: 1, 3, 4, 9, 10, 12
        assert_eq!(legendre_symbol(&big(4), &big(13)), 1);
        assert_eq!(legendre_symbol(&big(12), &big(13)), 1);
        assert_eq!(legendre_symbol(&big(2), &big(13)), -1);
        assert_eq!(legendre_symbol(&big(0), &big(13)), 0);
        assert_eq!(legendre_symbol(&big(13), &big(13)), 0);
    }

    #[test]
    fn sqrt_with_three_mod_four_prime() {
        // 9^2 = 81 = 5 mod 19
        let root = mod_sqrt(&big(5), &big(19)).unwrap();
        assert_eq!((&root * &root) % big(19), big(5));
    }

    #[test]
    fn sqrt_with_one_mod_four_prime() {
        // 13 = 1 mod 4 exercises Tonelli-Shanks
        let root = mod_sqrt(&big(12), &big(13)).unwrap();
        assert_eq!((&root * &root) % big(13), big(12));

        // 17 = 1 mod 8: two halving steps in the descent
        let root = mod_sqrt(&big(2), &big(17)).unwrap();
        assert_eq!((&root * &root) % big(17), big(2));
    }

    #[test]
    fn sqrt_of_zero_is_zero() {
        assert_eq!(mod_sqrt(&big(0), &big(19)).unwrap(), big(0));
    }

    #[test]
    fn sqrt_of_non_residue_fails() {
        assert!(mod_sqrt(&big(2), &big(13)).is_err());
        assert!(mod_sqrt(&big(5), &big(13)).is_err());
    }
}
