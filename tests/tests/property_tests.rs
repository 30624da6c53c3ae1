// tests/property_tests.rs
//! Property tests over the public surface.

use mlkem_algorithms::poly::prelude::*;
use mlkem_api::{Kem, Serialize, SerializeSecret};
use mlkem_kem::{
    Ciphertext, MlKem, MlKem1024, MlKem1024Params, MlKem512, MlKem512Params, MlKem768,
    MlKem768Params, MlKemParams, PublicKey, SecretKey,
};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

fn round_trip<P: MlKemParams>(d: [u8; 32], z: [u8; 32], m: [u8; 32]) -> Result<(), TestCaseError> {
    let (pk, sk) = MlKem::<P>::keypair_derand(&d, &z).unwrap();
    let (ct, ss) = MlKem::<P>::encapsulate_derand(&pk, &m).unwrap();
    prop_assert_eq!(MlKem::<P>::decapsulate(&sk, &ct).unwrap(), ss);
    prop_assert!(MlKem::<P>::validate_public_key(&pk));
    prop_assert!(MlKem::<P>::validate_private_key(&sk));
    Ok(())
}

/// Shortest distance between `a` and `b` modulo q.
fn mod_q_distance(a: i16, b: i16) -> i32 {
    let d = (a as i32 - b as i32).rem_euclid(Q as i32);
    d.min(Q as i32 - d)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_round_trip_all_levels(
        d in any::<[u8; 32]>(),
        z in any::<[u8; 32]>(),
        m in any::<[u8; 32]>(),
    ) {
        round_trip::<MlKem512Params>(d, z, m)?;
        round_trip::<MlKem768Params>(d, z, m)?;
        round_trip::<MlKem1024Params>(d, z, m)?;
    }

    #[test]
    fn prop_keygen_deterministic(d in any::<[u8; 32]>(), z in any::<[u8; 32]>()) {
        let (pk1, sk1) = MlKem768::keypair_derand(&d, &z).unwrap();
        let (pk2, sk2) = MlKem768::keypair_derand(&d, &z).unwrap();
        prop_assert_eq!(pk1, pk2);
        prop_assert_eq!(sk1.as_bytes(), sk2.as_bytes());
    }

    #[test]
    fn prop_typed_bytes_round_trip(seed in any::<u64>()) {
        let mut rng = ChaChaRng::seed_from_u64(seed);
        let (pk, sk) = MlKem1024::keypair(&mut rng).unwrap();
        let (ct, _) = MlKem1024::encapsulate(&mut rng, &pk).unwrap();

        let pk2 = <PublicKey<MlKem1024Params> as Serialize>::from_bytes(&pk.to_bytes()).unwrap();
        let sk_bytes = sk.to_bytes_zeroizing();
        let sk2 = <SecretKey<MlKem1024Params> as SerializeSecret>::from_bytes(&sk_bytes).unwrap();
        let ct2 = <Ciphertext<MlKem1024Params> as Serialize>::from_bytes(&ct.to_bytes()).unwrap();
        prop_assert_eq!(&pk, &pk2);
        prop_assert_eq!(&ct, &ct2);
        prop_assert_eq!(
            MlKem1024::decapsulate(&sk, &ct).unwrap(),
            MlKem1024::decapsulate(&sk2, &ct2).unwrap()
        );
    }
}

proptest! {
    #[test]
    fn prop_compress_error_bound(
        x in 0i16..Q,
        d in prop_oneof![Just(1u32), Just(4), Just(5), Just(10), Just(11)],
    ) {
        let y = decompress(compress(x, d), d);
        // ceil(q / 2^(d+1))
        let bound = (Q as i32 + (1 << (d + 1)) - 1) >> (d + 1);
        prop_assert!(mod_q_distance(x, y) <= bound, "x={} d={} y={}", x, d, y);
    }

    #[test]
    fn prop_barrett_congruent(a in any::<i16>()) {
        let r = barrett_reduce(a);
        prop_assert_eq!((r as i32 - a as i32).rem_euclid(Q as i32), 0);
        prop_assert!(r.abs() <= Q / 2 + 1);
    }

    #[test]
    fn prop_montgomery_congruent(a in -(Q as i32) * (1 << 15) + 1..(Q as i32) * (1 << 15)) {
        let r = montgomery_reduce(a);
        // r * 2^16 == a (mod q)
        prop_assert_eq!(((r as i64) << 16).rem_euclid(Q as i64), (a as i64).rem_euclid(Q as i64));
        prop_assert!((r as i32).abs() < Q as i32);
    }

    #[test]
    fn prop_ntt_round_trip(coeffs in proptest::collection::vec(-(Q - 1)..Q, N)) {
        let mut arr = [0i16; N];
        arr.copy_from_slice(&coeffs);
        let p = Poly::from_coeffs(arr);
        let back = p.ntt().inverse_ntt();
        for (a, b) in p.coeffs().iter().zip(back.coeffs().iter()) {
            prop_assert_eq!(mod_q_distance(*a, *b), 0);
        }
    }

    #[test]
    fn prop_ciphertext_bytes_only_length_checked(fill in any::<u8>()) {
        let bytes = vec![fill; 768];
        let ct = Ciphertext::<MlKem512Params>::from_bytes(&bytes).unwrap();
        let (_, sk) = MlKem512::keypair_derand(&[fill; 32], &[0; 32]).unwrap();
        prop_assert!(MlKem512::decapsulate(&sk, &ct).is_ok());
    }
}
