//! Random integers from any [`RngCore`].

use rand_core::RngCore;

use crate::{BigInt, Digit, LimbBuffer};
use crate::numbers::DIGIT_BITS;

impl BigInt {
    /// Uniformly random non-negative integer below $2^{bits}$.
    pub fn random_bits<R: RngCore + ?Sized>(rng: &mut R, bits: usize) -> Self {
        let mut magnitude = LimbBuffer::with_len((bits + DIGIT_BITS - 1) / DIGIT_BITS);
        for digit in magnitude.iter_mut() {
            *digit = rng.next_u32();
        }
        let spare = bits % DIGIT_BITS;
        if spare > 0 {
            if let Some(top) = magnitude.last_mut() {
                *top &= ((1 as Digit) << spare) - 1;
            }
        }
        BigInt::from_buffer(magnitude, false)
    }

    /// Random magnitude below $2^{bits}$ with a random sign; zero is never negative.
    pub fn random_signed_bits<R: RngCore + ?Sized>(rng: &mut R, bits: usize) -> Self {
        let negative = rng.next_u32() & 1 == 1;
        let magnitude = Self::random_bits(rng, bits);
        BigInt::from_buffer(magnitude.magnitude, negative)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[cfg(not(feature = "extended-testing"))]
    pub const ROUNDS: usize = 200;
    #[cfg(feature = "extended-testing")]
    pub const ROUNDS: usize = 10_000;

    fn sample(rng: &mut impl RngCore) -> BigInt {
        let bits = (rng.next_u32() % 600) as usize;
        BigInt::random_signed_bits(rng, bits)
    }

    #[test]
    fn bit_bounds() {
        let mut rng = StdRng::seed_from_u64(0x243f_6a88_85a3_08d3);
        for bits in 0..200 {
            let x = BigInt::random_bits(&mut rng, bits);
            assert!(x.bits() <= bits);
            assert!(!x.is_negative());
        }
        assert_eq!(BigInt::random_bits(&mut rng, 0), BigInt::zero());
    }

    #[test]
    fn division_identity() {
        let mut rng = StdRng::seed_from_u64(0x1319_8a2e_0370_7344);
        for _ in 0..ROUNDS {
            let a = sample(&mut rng);
            let b = sample(&mut rng);
            if b.is_zero() {
                continue;
            }
            let (q, r) = a.div_rem(&b);
            assert_eq!(&(&q * &b) + &r, a);
            assert!(r.magnitude() < b.magnitude());
            assert!(r.is_zero() || r.is_negative() == a.is_negative());
        }
    }

    #[test]
    fn ring_identities() {
        let mut rng = StdRng::seed_from_u64(0xa409_3822_299f_31d0);
        for _ in 0..ROUNDS {
            let (a, b, c) = (sample(&mut rng), sample(&mut rng), sample(&mut rng));
            assert_eq!(&(&a + &b) - &b, a);
            assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
            assert_eq!(&a - &a, BigInt::zero());
        }
    }

    #[test]
    fn bitwise_identities() {
        let mut rng = StdRng::seed_from_u64(0x082e_fa98_ec4e_6c89);
        for _ in 0..ROUNDS {
            let (a, b) = (sample(&mut rng), sample(&mut rng));
            assert_eq!(!(&a & &b), &!&a | &!&b);
            assert_eq!(!(&a ^ &b), &!&a ^ &b);
            assert_eq!(&(&a | &b) - &(&a & &b), &a ^ &b);
        }
    }

    #[test]
    fn shifts_are_scaling() {
        let mut rng = StdRng::seed_from_u64(0x4528_21e6_38d0_1377);
        for _ in 0..ROUNDS {
            let a = sample(&mut rng);
            let bits = (rng.next_u32() % 100) as usize;
            let power = BigInt::one() << bits;
            assert_eq!(&a << bits, &a * &power);
            // floor division, unlike `/`
            let (q, r) = a.div_rem(&power);
            let floor = if r.is_negative() { q - BigInt::one() } else { q };
            assert_eq!(&a >> bits, floor);
        }
    }

    #[test]
    fn decimal_round_trip() {
        let mut rng = StdRng::seed_from_u64(0xbe54_66cf_34e9_0c6c);
        for _ in 0..ROUNDS {
            let a = sample(&mut rng);
            assert_eq!(a.to_string().parse::<BigInt>(), Ok(a));
        }
    }

    #[test]
    fn clones_are_independent() {
        let mut rng = StdRng::seed_from_u64(0xc0ac_29b7_c97c_50dd);
        let original = BigInt::random_bits(&mut rng, 1000);
        let snapshot = original.to_string();
        let mut copies: Vec<BigInt> = (0..10).map(|_| original.clone()).collect();
        for (i, copy) in copies.iter_mut().enumerate() {
            *copy += &BigInt::from(i);
            copy.inc();
        }
        assert_eq!(original.to_string(), snapshot);
        for (i, copy) in copies.iter().enumerate() {
            assert_eq!(copy - &original, BigInt::from(i + 1));
        }
    }
}
