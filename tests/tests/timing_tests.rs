// Timing comparisons for the constant-time paths.
//
// These depend on the machine and the build profile, so they are ignored by
// default. Run them with `--release -- --ignored --nocapture`.

use cwcrypt_algorithms::{ConstantTimeCodec, RepetitionMcEliece, Shake256Oracle};
use cwcrypt_api::{BitString, CodeBasedPkc};
use cwcrypt_params::pqc::mceliece::CODE_192_5;
use cwcrypt_pke::FoConstantTime;
use cwcrypt_tests::fixtures::{flip, keypair, random_message, rng};
use cwcrypt_tests::timing::{TimingConfig, TimingTester};

fn report(name: &str, analysis: &cwcrypt_tests::timing::TimingAnalysis) {
    println!("{} timing analysis:\n{}", name, analysis);
}

#[test]
#[ignore]
fn test_stc_timing_zeros_vs_ones() {
    let config = TimingConfig::for_codec();
    let codec = ConstantTimeCodec::new(2048, 29).unwrap();
    let zeros = BitString::zeros(120);
    let ones: BitString = (0..120).map(|_| 1u8).collect();
    let mut padding = rng(1);

    for _ in 0..config.num_warmup {
        let _ = codec.stc(&zeros, &mut padding);
        let _ = codec.stc(&ones, &mut padding);
    }

    let tester = TimingTester::from_config(&config);
    let t1 = tester.measure(|| {
        let _ = codec.stc(&zeros, &mut padding);
    });
    let t2 = tester.measure(|| {
        let _ = codec.stc(&ones, &mut padding);
    });

    let analysis = tester.analyze(&t1, &t2, &config).unwrap();
    report("StC", &analysis);
    assert!(analysis.is_constant_time, "StC timing depends on its input");
}

#[test]
#[ignore]
fn test_decrypt_timing_valid_vs_rejected() {
    let config = TimingConfig::for_transform();
    let (pk, sk) = keypair(CODE_192_5, 1);
    let fo = FoConstantTime::<RepetitionMcEliece>::constant_time(192, 5, Shake256Oracle).unwrap();
    let mut rng = rng(2);
    let message = random_message(16, &mut rng);
    let valid = fo.encrypt(&pk, &message, &mut rng).unwrap();
    let mut rejected = valid.clone();
    flip(rejected.c2_mut(), 0);

    for _ in 0..config.num_warmup {
        let _ = fo.decrypt(&sk, &pk, &valid);
        let _ = fo.decrypt(&sk, &pk, &rejected);
    }

    let tester = TimingTester::from_config(&config);
    let t1 = tester.measure(|| {
        let _ = fo.decrypt(&sk, &pk, &valid);
    });
    let t2 = tester.measure(|| {
        let _ = fo.decrypt(&sk, &pk, &rejected);
    });

    let analysis = tester.analyze(&t1, &t2, &config).unwrap();
    report("Fujisaki-Okamoto decrypt", &analysis);
    assert!(analysis.is_constant_time, "rejection is distinguishable by timing");
}

#[test]
#[ignore]
fn test_decrypt_timing_valid_vs_undecodable() {
    let config = TimingConfig::for_transform();
    let (pk, sk) = keypair(CODE_192_5, 3);
    let fo = FoConstantTime::<RepetitionMcEliece>::constant_time(192, 5, Shake256Oracle).unwrap();
    let mut rng = rng(4);
    let message = random_message(16, &mut rng);
    let valid = fo.encrypt(&pk, &message, &mut rng).unwrap();

    // one more error bit than the code corrects
    let (_, error) = RepetitionMcEliece::decrypt(valid.c1(), &sk, &pk).unwrap();
    let off_error = (0..192).find(|&i| error.bit_or_zero(i) == 0).unwrap();
    let mut rejected = valid.clone();
    flip(rejected.c1_mut(), off_error);

    for _ in 0..config.num_warmup {
        let _ = fo.decrypt(&sk, &pk, &valid);
        let _ = fo.decrypt(&sk, &pk, &rejected);
    }

    let tester = TimingTester::from_config(&config);
    let t1 = tester.measure(|| {
        let _ = fo.decrypt(&sk, &pk, &valid);
    });
    let t2 = tester.measure(|| {
        let _ = fo.decrypt(&sk, &pk, &rejected);
    });

    let analysis = tester.analyze(&t1, &t2, &config).unwrap();
    report("Fujisaki-Okamoto decrypt, tampered c1", &analysis);
    assert!(analysis.is_constant_time, "a failed decode is distinguishable by timing");
}
