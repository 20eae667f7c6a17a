use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use regex::Regex;
use shared_core_providers::{
    FixedTimeProvider, HexIdGenerator, IdGenerator, PrefixedIdGenerator, SequentialIdGenerator,
    SystemTimeProvider, TimeProvider, UuidGenerator, DEFAULT_HEX_LENGTH,
};

fn uuid_shape() -> Regex {
    Regex::new(r"^[0-9a-f]{8}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{4}-[0-9a-f]{12}$").unwrap()
}

#[test]
fn uuid_generator_format_and_uniqueness() {
    let generator = UuidGenerator::new();
    let shape = uuid_shape();

    let ids: HashSet<String> = (0..100).map(|_| generator.generate()).collect();
    assert_eq!(ids.len(), 100);
    for id in &ids {
        assert!(shape.is_match(id), "{id}");
    }
}

#[test]
fn prefixed_generator() {
    let generator = PrefixedIdGenerator::new("user");
    let id = generator.generate();
    let suffix = id.strip_prefix("user-").expect("prefix present");
    assert!(uuid_shape().is_match(suffix), "{id}");
}

#[test]
fn sequential_generator_counts_from_one() {
    let generator = SequentialIdGenerator::new("test");
    assert_eq!(generator.generate(), "test-1");
    assert_eq!(generator.generate(), "test-2");
    assert_eq!(generator.generate(), "test-3");
    assert_eq!(generator.issued(), 3);
}

#[test]
fn sequential_generator_is_unique_across_threads() {
    let generator = Arc::new(SequentialIdGenerator::new("job"));
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let generator = Arc::clone(&generator);
            std::thread::spawn(move || (0..250).map(|_| generator.generate()).collect::<Vec<_>>())
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id));
        }
    }
    assert_eq!(ids.len(), 2_000);
    assert!(ids.contains("job-2000"));
    assert!(!ids.contains("job-2001"));
}

#[test]
fn hex_generator() {
    let hex = Regex::new("^[0-9a-f]+$").unwrap();

    let id = HexIdGenerator::new(16).generate();
    assert_eq!(id.len(), 16);
    assert!(hex.is_match(&id), "{id}");

    assert_eq!(HexIdGenerator::new(0).generate().len(), DEFAULT_HEX_LENGTH);
    assert_eq!(HexIdGenerator::default().length(), 16);

    let generator = HexIdGenerator::new(32);
    let ids: HashSet<String> = (0..100).map(|_| generator.generate()).collect();
    assert_eq!(ids.len(), 100);
}

#[test]
fn generators_behind_trait_objects() {
    let generators: Vec<Box<dyn IdGenerator>> = vec![
        Box::new(UuidGenerator::new()),
        Box::new(PrefixedIdGenerator::new("test")),
        Box::new(SequentialIdGenerator::new("test")),
        Box::new(HexIdGenerator::new(16)),
    ];
    for generator in &generators {
        assert!(!generator.generate().is_empty());
    }
}

#[test]
fn system_time_provider_tracks_the_clock() {
    let before = Utc::now();
    let now = SystemTimeProvider::new().now();
    let after = Utc::now();
    assert!(before <= now && now <= after);
}

#[test]
fn fixed_time_provider() {
    let initial = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
    let next_day = Utc.with_ymd_and_hms(2025, 1, 2, 12, 0, 0).unwrap();

    let provider = FixedTimeProvider::new(initial);
    assert_eq!(provider.now(), initial);
    assert_eq!(provider.now(), initial);

    provider.set_time(next_day);
    assert_eq!(provider.now(), next_day);

    provider.advance(Duration::hours(-24));
    assert_eq!(provider.now(), initial);
}

#[test]
fn shared_fixed_clock() {
    let initial = Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap();
    let clock = Arc::new(FixedTimeProvider::new(initial));
    let seen_by_service: Arc<dyn TimeProvider> = clock.clone();

    clock.advance(Duration::minutes(5));
    assert_eq!(seen_by_service.now(), initial + Duration::minutes(5));
}

proptest! {
    #[test]
    fn hex_length_is_exact(length in 1usize..128) {
        let id = HexIdGenerator::new(length).generate();
        prop_assert_eq!(id.len(), length);
        prop_assert!(id.bytes().all(|b| b.is_ascii_hexdigit() && !b.is_ascii_uppercase()));
    }
}
