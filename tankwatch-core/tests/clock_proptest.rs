//! Property-based tests for clock arithmetic and the tick service

use proptest::prelude::*;
use tankwatch_core::time::{Clock, TickService, TICKS_PER_SECOND};

proptest! {
    #[test]
    fn plus_hundredths_keeps_hundredths_in_range(
        seconds in 0u32..1_000_000_000,
        hundredths in 0u8..100,
        delta in 0u32..10_000_000,
    ) {
        let clock = Clock::new(seconds, hundredths).plus_hundredths(delta);
        prop_assert!(clock.hundredths() < 100);
    }

    #[test]
    fn plus_hundredths_matches_total(
        seconds in 0u32..1_000_000_000,
        hundredths in 0u8..100,
        delta in 0u32..10_000_000,
    ) {
        let start = seconds as u64 * 100 + hundredths as u64;
        let clock = Clock::new(seconds, hundredths).plus_hundredths(delta);
        let total = clock.seconds() as u64 * 100 + clock.hundredths() as u64;
        prop_assert_eq!(total, start + delta as u64);
    }

    #[test]
    fn ordering_matches_total_hundredths(
        a_s in 0u32..1_000, a_h in 0u8..100,
        b_s in 0u32..1_000, b_h in 0u8..100,
    ) {
        let a = Clock::new(a_s, a_h);
        let b = Clock::new(b_s, b_h);
        let a_total = a_s as u64 * 100 + a_h as u64;
        let b_total = b_s as u64 * 100 + b_h as u64;
        prop_assert_eq!(a.cmp(&b), a_total.cmp(&b_total));
    }

    #[test]
    fn deadline_arrives_exactly_on_time(start in 0u32..300, delta in 1u32..300) {
        let clock = TickService::new(TICKS_PER_SECOND);
        let ticks_per_hundredth = TICKS_PER_SECOND / 100;
        for _ in 0..start * ticks_per_hundredth {
            clock.on_tick();
        }

        let deadline = clock.future(delta);
        for _ in 0..delta * ticks_per_hundredth - 1 {
            clock.on_tick();
        }
        prop_assert!(!clock.has_arrived(deadline));

        clock.on_tick();
        prop_assert!(clock.has_arrived(deadline));
    }
}
