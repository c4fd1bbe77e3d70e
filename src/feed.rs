use chrono::NaiveDate;
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

use crate::emotion::Emotion;
use crate::snapshot::EmotionSnapshot;

/// Boundary over whatever produces snapshot series for a date range.
///
/// In production this would wrap a real measurement feed; here the only
/// implementation is [`SyntheticFeed`].
pub trait SnapshotSource {
    /// One snapshot per day from `from` through `to`, inclusive. A reversed
    /// range yields an empty series.
    fn span(&mut self, from: NaiveDate, to: NaiveDate) -> Vec<EmotionSnapshot>;
}

/// Generates uniform random intensities in `[0, 100)` for every canonical
/// category, one snapshot per day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mien_rs::{SnapshotSource, SyntheticFeed};
///
/// let from = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
/// let series = SyntheticFeed::seeded(7).span(from, to);
/// assert_eq!(series.len(), 7);
/// ```
pub struct SyntheticFeed<R: Rng> {
    rng: R,
}

impl SyntheticFeed<ThreadRng> {
    /// A feed over the thread-local generator.
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for SyntheticFeed<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntheticFeed<StdRng> {
    /// A deterministic feed for tests and reproducible demos.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> SnapshotSource for SyntheticFeed<R> {
    fn span(&mut self, from: NaiveDate, to: NaiveDate) -> Vec<EmotionSnapshot> {
        let mut series = Vec::new();
        let mut day = from;
        while day <= to {
            let mut snapshot = EmotionSnapshot::new(day);
            for emotion in Emotion::CANONICAL {
                snapshot
                    .emotions
                    .insert(emotion.as_str().to_string(), self.rng.gen_range(0.0..100.0));
            }
            series.push(snapshot);
            day = match day.succ_opt() {
                Some(next) => next,
                None => break,
            };
        }
        tracing::trace!(days = series.len(), %from, %to, "synthetic span generated");
        series
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn span_is_inclusive_of_both_endpoints() {
        let series = SyntheticFeed::seeded(1).span(day(1), day(10));
        assert_eq!(series.len(), 10);
        assert_eq!(series[0].date, day(1));
        assert_eq!(series[9].date, day(10));
    }

    #[test]
    fn single_day_span() {
        assert_eq!(SyntheticFeed::seeded(1).span(day(3), day(3)).len(), 1);
    }

    #[test]
    fn reversed_range_is_empty() {
        assert!(SyntheticFeed::seeded(1).span(day(10), day(1)).is_empty());
    }

    #[test]
    fn every_canonical_category_is_populated_in_range() {
        for snapshot in SyntheticFeed::seeded(42).span(day(1), day(14)) {
            for emotion in Emotion::CANONICAL {
                let value = snapshot.emotions[emotion.as_str()];
                assert!((0.0..100.0).contains(&value));
            }
        }
    }

    #[test]
    fn same_seed_same_series() {
        let a = SyntheticFeed::seeded(9).span(day(1), day(5));
        let b = SyntheticFeed::seeded(9).span(day(1), day(5));
        assert_eq!(a, b);
    }
}
