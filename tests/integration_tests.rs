//! Integration tests for the conductor pipeline.

use num_bigint::BigUint;

use goldbach_conductor::export;
use goldbach_conductor::{
    build_sieve, chens_ratio, classify_pairs, conductor_proxy, odd_radical, scan_range,
    Classification, InputError,
};

#[test]
fn test_sieve_30_marks_exactly_the_primes() {
    let table = build_sieve(30).unwrap();
    let primes = [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29];
    for n in 0..=30u64 {
        assert_eq!(table.is_prime(n), primes.contains(&n), "n = {}", n);
    }
}

#[test]
fn test_odd_radical_reference_values() {
    // 8192 = 2^13: no odd prime factors at all.
    assert_eq!(odd_radical(8192), 1);
    // 45 = 3^2 * 5: distinct odd primes {3, 5}.
    assert_eq!(odd_radical(45), 15);
    // 8181 = 3^4 * 101: distinct odd primes {3, 101}.
    assert_eq!(odd_radical(8181), 303);
}

#[test]
fn test_table_one_pair_13_8179() {
    let table = build_sieve(20_000).unwrap();
    let records = classify_pairs(8192, &table).unwrap();

    let r = records.iter().find(|r| r.p == 13).unwrap();
    assert_eq!(r.q, 8179);
    assert_eq!(r.class, Classification::Goldbach);
    assert_eq!(r.rad_odd_pq, 106_327);
    assert_eq!(r.conductor, BigUint::from(106_327u64).pow(2));

    let expected_rho = (106_327.0f64 * 106_327.0).ln() / 8192.0f64.ln();
    assert!((r.rho - expected_rho).abs() < 1e-12);
}

#[test]
fn test_power_of_two_table_collapses_half_radical() {
    // At N = 2^13 every conductor must equal (rad_odd(p) * rad_odd(q))^2.
    let table = build_sieve(20_000).unwrap();
    for r in classify_pairs(8192, &table).unwrap() {
        assert_eq!(
            r.conductor,
            BigUint::from(r.rad_odd_pq).pow(2),
            "p = {}",
            r.p
        );
    }
}

#[test]
fn test_classifier_invariants_at_8192() {
    let table = build_sieve(20_000).unwrap();
    let records = classify_pairs(8192, &table).unwrap();

    // Odd p from 3 to 4096: 2047 decompositions.
    assert_eq!(records.len(), 2047);

    let mut last_p = 0;
    for r in &records {
        assert!(r.p > last_p, "strictly ascending p");
        last_p = r.p;
        assert_eq!(r.q, 8192 - r.p);
        assert!(r.q > 1);
        assert!(r.p <= r.q);

        let expected = match (table.is_prime(r.p), table.is_prime(r.q)) {
            (true, true) => Classification::Goldbach,
            (false, false) => Classification::Composite,
            _ => Classification::Mixed,
        };
        assert_eq!(r.class, expected, "p = {}", r.p);
    }
}

#[test]
fn test_chens_ratio_zero_on_degenerate_conductor() {
    // p and q both powers of two force the conductor to 1.
    assert!(conductor_proxy(4, 2) <= BigUint::from(1u64));
    assert_eq!(chens_ratio(4, 2), 0.0);
}

#[test]
fn test_scan_100_to_200() {
    let table = build_sieve(300).unwrap();
    let summaries = scan_range(100, 200, 2, &table).unwrap();

    for s in &summaries {
        assert!(s.pair_count >= 1);
        assert!(s.rho_min <= s.rho_mean && s.rho_mean <= s.rho_max, "N = {}", s.n);

        // pair_count must equal the number of Goldbach records the full
        // classifier produces for that N.
        let goldbach = classify_pairs(s.n, &table)
            .unwrap()
            .into_iter()
            .filter(|r| r.class == Classification::Goldbach)
            .count();
        assert_eq!(s.pair_count, goldbach, "N = {}", s.n);
    }

    // Every even N in [100, 200) has a Goldbach pair, so nothing is omitted.
    let expected: Vec<u64> = (100..200).step_by(2).collect();
    let scanned: Vec<u64> = summaries.iter().map(|s| s.n).collect();
    assert_eq!(scanned, expected);
}

#[test]
fn test_invalid_arguments_are_reported_not_panicked() {
    let table = build_sieve(100).unwrap();
    assert!(matches!(build_sieve(1), Err(InputError::SieveLimit(1))));
    assert!(matches!(classify_pairs(9, &table), Err(InputError::BadN(9))));
    assert!(matches!(
        scan_range(100, 200, 5, &table),
        Err(InputError::BadStep(5))
    ));
    assert!(matches!(
        classify_pairs(2000, &table),
        Err(InputError::TableTooSmall { .. })
    ));
}

#[test]
fn test_csv_contract_headers() {
    let table = build_sieve(300).unwrap();
    let records = classify_pairs(100, &table).unwrap();
    let summaries = scan_range(100, 120, 2, &table).unwrap();

    assert!(export::pair_csv(&records).starts_with("N,p,q,type,rad_odd_pq,conductor_proxy,rho\n"));
    assert!(export::scan_csv(&summaries)
        .starts_with("N,num_goldbach_pairs,rho_min,rho_mean,rho_max\n"));
}

#[test]
fn test_classifier_is_deterministic() {
    let table = build_sieve(500).unwrap();
    let a = classify_pairs(128, &table).unwrap();
    let b = classify_pairs(128, &table).unwrap();

    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.p, y.p);
        assert_eq!(x.class, y.class);
        assert_eq!(x.conductor, y.conductor);
        assert_eq!(x.rho, y.rho);
    }
}
