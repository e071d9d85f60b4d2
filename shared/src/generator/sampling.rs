//! Sampling primitives that turn stream draws into field values

use std::collections::BTreeSet;

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::stream::RandomStream;

/// Converts a draw-derived float to a decimal.
///
/// Panics on NaN, infinities and magnitudes beyond `Decimal`'s range; those
/// only arise from broken region bounds.
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value)
        .unwrap_or_else(|| panic!("value {value} has no decimal representation"))
}

/// Rounds half away from zero to one decimal place.
pub fn round_tenth(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
}

/// Linear interpolation between `min` and `max`, rounded to one decimal.
pub fn lerp(min: f64, max: f64, t: f64) -> Decimal {
    round_tenth(to_decimal(min + (max - min) * t))
}

fn index_for(len: usize, t: f64) -> usize {
    assert!(len > 0, "cannot sample from an empty pool");
    assert!((0.0..1.0).contains(&t), "draw {t} outside [0, 1)");
    // floor(t * len) < len for t < 1, min() only guards float edge cases
    ((t * len as f64) as usize).min(len - 1)
}

/// `pool[floor(t * len)]`
pub fn pick_one<T>(pool: &[T], t: f64) -> &T {
    &pool[index_for(pool.len(), t)]
}

/// Uniform integer in `min..=max`.
pub fn pick_int(min: i32, max: i32, t: f64) -> i32 {
    assert!(min <= max, "empty integer range {min}..={max}");
    let span = (max - min + 1) as usize;
    min + index_for(span, t) as i32
}

/// Draws `k` distinct items; a collision probes forward (wrapping) to the
/// next unused slot, so exactly `k` draws are consumed.
///
/// Items come back in draw order.
pub fn pick_unique_k<'a, T>(pool: &'a [T], k: usize, stream: &mut RandomStream) -> Vec<&'a T> {
    assert!(
        k <= pool.len(),
        "requested {k} unique items from a pool of {}",
        pool.len()
    );
    let mut used = vec![false; pool.len()];
    let mut picked = Vec::with_capacity(k);
    for _ in 0..k {
        let mut idx = index_for(pool.len(), stream.next_f64());
        while used[idx] {
            idx = (idx + 1) % pool.len();
        }
        used[idx] = true;
        picked.push(&pool[idx]);
    }
    picked
}

/// Picks up to `count` day indices in `0..total_days`.
///
/// A repeated index gets one retry on the next draw, and the retry is kept
/// whether or not it is new. The result can therefore hold fewer than
/// `count` days; generated histories depend on this, so it stays.
pub fn sparse_day_set(total_days: usize, count: usize, stream: &mut RandomStream) -> BTreeSet<usize> {
    let mut days = BTreeSet::new();
    for _ in 0..count {
        let day = index_for(total_days, stream.next_f64());
        if days.contains(&day) {
            days.insert(index_for(total_days, stream.next_f64()));
        } else {
            days.insert(day);
        }
    }
    days
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_lerp_end_points() {
        assert_eq!(lerp(24.0, 30.0, 0.0), dec("24.0"));
        assert_eq!(lerp(24.0, 30.0, 1.0), dec("30.0"));
        assert_eq!(lerp(2.0, 25.0, 0.5), dec("13.5"));
    }

    #[test]
    #[should_panic(expected = "no decimal representation")]
    fn test_to_decimal_rejects_nan() {
        to_decimal(f64::NAN);
    }

    #[test]
    #[should_panic(expected = "no decimal representation")]
    fn test_lerp_out_of_decimal_range_panics() {
        lerp(1e30, 1e30, 0.5);
    }

    #[test]
    fn test_round_tenth_midpoint_goes_up() {
        assert_eq!(round_tenth(dec("26.25")), dec("26.3"));
        assert_eq!(round_tenth(dec("26.24")), dec("26.2"));
    }

    #[test]
    fn test_pick_one_indexing() {
        let pool = ["a", "b", "c", "d"];
        assert_eq!(*pick_one(&pool, 0.0), "a");
        assert_eq!(*pick_one(&pool, 0.2499), "a");
        assert_eq!(*pick_one(&pool, 0.25), "b");
        assert_eq!(*pick_one(&pool, 0.9999), "d");
    }

    #[test]
    #[should_panic(expected = "empty pool")]
    fn test_pick_one_empty_pool_panics() {
        let pool: [u8; 0] = [];
        pick_one(&pool, 0.5);
    }

    #[test]
    #[should_panic(expected = "outside [0, 1)")]
    fn test_pick_one_rejects_one() {
        pick_one(&[1, 2, 3], 1.0);
    }

    #[test]
    fn test_pick_int_inclusive() {
        assert_eq!(pick_int(3, 5, 0.0), 3);
        assert_eq!(pick_int(3, 5, 0.34), 4);
        assert_eq!(pick_int(3, 5, 0.999), 5);
        assert_eq!(pick_int(7, 7, 0.5), 7);
    }

    #[test]
    fn test_pick_unique_k_consumes_exactly_k_draws() {
        let pool: Vec<u32> = (0..15).collect();
        let mut stream = RandomStream::new(7);
        let picked = pick_unique_k(&pool, 3, &mut stream);
        assert_eq!(stream.draws(), 3);
        assert_eq!(picked.len(), 3);
    }

    #[test]
    fn test_pick_unique_k_probes_forward_on_collision() {
        // Two picks from two slots: the second either lands free or probes
        let pool = ["x", "y"];
        let mut stream = RandomStream::new(99);
        let picked = pick_unique_k(&pool, 2, &mut stream);
        let mut sorted: Vec<&str> = picked.into_iter().copied().collect();
        sorted.sort();
        assert_eq!(sorted, vec!["x", "y"]);
        assert_eq!(stream.draws(), 2);
    }

    #[test]
    fn test_pick_unique_k_whole_pool_is_permutation() {
        let pool: Vec<u32> = (0..15).collect();
        let mut stream = RandomStream::new(2_076_390);
        let mut picked: Vec<u32> = pick_unique_k(&pool, 15, &mut stream)
            .into_iter()
            .copied()
            .collect();
        picked.sort();
        assert_eq!(picked, pool);
    }

    #[test]
    #[should_panic(expected = "unique items")]
    fn test_pick_unique_k_oversized_request_panics() {
        let mut stream = RandomStream::new(1);
        pick_unique_k(&[1, 2], 3, &mut stream);
    }

    #[test]
    fn test_sparse_day_set_can_under_deliver() {
        // Two slots and three attempts: at most two distinct days exist
        let mut stream = RandomStream::new(5);
        let days = sparse_day_set(2, 3, &mut stream);
        assert!(days.len() <= 2);
        assert!(stream.draws() >= 3 && stream.draws() <= 6);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_lerp_stays_in_bounds_and_is_monotonic(
            min in 0i32..400,
            width in 0i32..200,
            a in 0.0f64..1.0,
            b in 0.0f64..1.0,
        ) {
            let lo = f64::from(min) / 10.0;
            let hi = f64::from(min + width) / 10.0;
            let (t1, t2) = if a <= b { (a, b) } else { (b, a) };
            let v1 = lerp(lo, hi, t1);
            let v2 = lerp(lo, hi, t2);
            prop_assert!(v1 <= v2);
            prop_assert!(v1 >= Decimal::new(i64::from(min), 1));
            prop_assert!(v2 <= Decimal::new(i64::from(min + width), 1));
        }

        #[test]
        fn prop_sparse_day_set_bounded(seed in any::<u32>(), count in 3usize..=5) {
            let mut stream = RandomStream::new(seed);
            let days = sparse_day_set(30, count, &mut stream);
            prop_assert!(days.len() <= count);
            prop_assert!(days.iter().all(|d| *d < 30));
            prop_assert!(stream.draws() as usize >= count);
            prop_assert!(stream.draws() as usize <= 2 * count);
        }

        #[test]
        fn prop_pick_unique_k_distinct(seed in any::<u32>(), k in 0usize..=15) {
            let pool: Vec<u32> = (0..15).collect();
            let mut stream = RandomStream::new(seed);
            let picked = pick_unique_k(&pool, k, &mut stream);
            let distinct: BTreeSet<u32> = picked.iter().map(|v| **v).collect();
            prop_assert_eq!(distinct.len(), k);
        }
    }
}
