// Cross-crate scenarios for the two constant-weight codecs

use cwcrypt_algorithms::cw::{decode_fd, encode_fd};
use cwcrypt_algorithms::{
    combination_count, fix_l_d, ConstantTimeCodec, HashOracle, SendrierCodec, Shake256Oracle,
};
use cwcrypt_api::{BitString, ConstantWeightCodec, GapList, InputDomain};
use cwcrypt_tests::fixtures::{random_message, rng, CountingRng};
use num_bigint::BigUint;
use proptest::prelude::*;

#[test]
fn test_sendrier_index_12345() {
    let codec = SendrierCodec::new(30, 5).unwrap();
    assert_eq!(combination_count(30, 5), BigUint::from(142_506u32));

    let word = codec.word_for_index(&BigUint::from(12_345u32)).unwrap();
    assert_eq!(word.len(), 5);
    assert!(word.total() as usize + 5 <= 30);

    let bits = codec.encode(&word).unwrap();
    assert_eq!(codec.decode(&bits).unwrap(), word);
}

#[test]
fn test_constant_time_all_zero_input_2048_29() {
    assert_eq!(fix_l_d(2048, 29).unwrap(), (120, 16));
    let codec = ConstantTimeCodec::new(2048, 29).unwrap();

    let input = BitString::zeros(120);
    let word = codec.stc(&input, &mut rng(42)).unwrap();
    assert_eq!(word.len(), 29);
    assert!(word.total() <= 2019);
    assert_eq!(codec.cts(&word).unwrap(), input);
}

#[test]
fn test_codecs_through_the_trait() {
    fn words<C: ConstantWeightCodec>(codec: &C, seed: u64) -> Vec<(BitString, GapList)> {
        let oracle = Shake256Oracle;
        let mut rng = rng(seed);
        (0u8..16)
            .map(|i| {
                let digest = oracle.hash_to_domain(&[i], codec.input_domain()).unwrap();
                let word = codec.to_word(&digest, &mut rng).unwrap();
                word.check_shape(codec.length(), codec.weight()).unwrap();
                (digest, word)
            })
            .collect()
    }

    // decode undoes encode for the combinatorial codec
    let sendrier = SendrierCodec::new(1024, 38).unwrap();
    for (_, word) in words(&sendrier, 1) {
        let bits = sendrier.to_bits(&word).unwrap();
        assert_eq!(sendrier.to_word(&bits, &mut rng(0)).unwrap(), word);
    }

    for (n, t) in [(1024, 38), (192, 5)] {
        let codec = ConstantTimeCodec::new(n, t).unwrap();
        for (digest, word) in words(&codec, 2) {
            assert_eq!(codec.to_bits(&word).unwrap(), digest);
        }
    }
}

#[test]
fn test_input_domains() {
    assert_eq!(
        SendrierCodec::new(30, 5).unwrap().input_domain(),
        InputDomain::CombinationIndex { n: 30, t: 5 }
    );
    assert_eq!(
        ConstantTimeCodec::new(1024, 38).unwrap().input_domain(),
        InputDomain::Bits(56)
    );
}

#[test]
fn test_stc_draw_count_is_input_independent() {
    let codec = ConstantTimeCodec::new(2048, 29).unwrap();
    let mut counting = CountingRng::new(rng(9));
    let mut source = rng(10);

    let inputs = [
        BitString::zeros(120),
        (0..120).map(|_| 1u8).collect::<BitString>(),
        random_message(120, &mut source),
        random_message(120, &mut source),
    ];
    for input in &inputs {
        counting.reset();
        codec.stc(input, &mut counting).unwrap();
        assert_eq!(counting.draws(), 29 + 3);
    }
}

#[test]
fn test_wrong_shapes_are_rejected() {
    let sendrier = SendrierCodec::new(30, 5).unwrap();
    assert!(sendrier.encode(&GapList::new(vec![0, 0, 0, 0])).is_err());
    assert!(sendrier.encode(&GapList::new(vec![20, 5, 0, 0, 1])).is_err());

    let ct = ConstantTimeCodec::new(192, 5).unwrap();
    assert!(ct.stc(&BitString::zeros(17), &mut rng(1)).is_err());
    assert!(ct.cts(&GapList::new(vec![1, 2, 3])).is_err());
}

proptest! {
    #[test]
    fn prop_sub_code_round_trip(log2_d in 0u32..12, seed in any::<u64>()) {
        let d = 1u64 << log2_d;
        let delta = seed % d;
        let code = encode_fd(delta, d).unwrap();
        let mut bits = BitString::new();
        code.write_to(&mut bits);
        prop_assert_eq!(decode_fd(d, &bits, 0), (delta, bits.len()));
    }

    #[test]
    fn prop_stc_cts_left_inverse(bits in proptest::collection::vec(0u8..2, 120), seed in any::<u64>()) {
        let codec = ConstantTimeCodec::new(2048, 29).unwrap();
        let input = BitString::from_bits(&bits);
        let word = codec.stc(&input, &mut rng(seed)).unwrap();
        prop_assert_eq!(word.len(), 29);
        prop_assert!(word.total() <= 2019);
        prop_assert_eq!(codec.cts(&word).unwrap(), input);
    }
}
