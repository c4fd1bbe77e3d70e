use std::collections::BTreeMap;

use serde::Serialize;

use crate::emotion::Emotion;
use crate::snapshot::EmotionSnapshot;

/// Dominant-category sentinel reported for an empty series.
pub const NO_DATA: &str = "No data";

/// Change summary reported when nothing shifted, or when the series is too
/// short to compare.
pub const NO_CHANGES: &str = "No significant changes";

/// Minimum absolute shift, in intensity points, between the leading and
/// trailing half of a series before a category is reported as changed.
pub const SHIFT_THRESHOLD: f64 = 15.0;

/// Arithmetic mean of one category's intensity across a series.
///
/// Snapshots missing the category contribute 0 but still count toward the
/// divisor. An empty series yields 0.0 rather than NaN.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mien_rs::{Emotion, EmotionSnapshot, average_intensity};
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
/// let series = vec![
///     EmotionSnapshot::new(day(1)).with(Emotion::Anger, 100.0),
///     EmotionSnapshot::new(day(2)),
/// ];
/// assert_eq!(average_intensity(&series, Emotion::Anger), 50.0);
/// assert_eq!(average_intensity(&[], Emotion::Anger), 0.0);
/// ```
pub fn average_intensity(series: &[EmotionSnapshot], emotion: Emotion) -> f64 {
    if series.is_empty() {
        return 0.0;
    }
    let sum: f64 = series.iter().map(|s| s.intensity(emotion)).sum();
    sum / series.len() as f64
}

/// Per-category averages over the six canonical categories.
///
/// The returned map iterates in canonical order.
pub fn all_averages(series: &[EmotionSnapshot]) -> BTreeMap<Emotion, f64> {
    Emotion::CANONICAL
        .into_iter()
        .map(|emotion| (emotion, average_intensity(series, emotion)))
        .collect()
}

/// The category with the strictly highest average, ties broken by canonical
/// order. `None` for an empty series.
pub fn dominant_emotion(series: &[EmotionSnapshot]) -> Option<Emotion> {
    if series.is_empty() {
        return None;
    }
    let mut dominant = Emotion::Anger;
    let mut best = f64::NEG_INFINITY;
    for emotion in Emotion::CANONICAL {
        let avg = average_intensity(series, emotion);
        if avg > best {
            dominant = emotion;
            best = avg;
        }
    }
    Some(dominant)
}

/// Advisory volatility score in `[1, 10]`, 10 being perfectly steady.
///
/// Computed as the mean coefficient of variation (population standard
/// deviation over mean) across the canonical categories, mapped inversely
/// onto the scale; categories whose mean is zero carry no variation signal
/// and are skipped. A series of fewer than two snapshots shows no variance
/// and reports 10.
pub fn stability_index(series: &[EmotionSnapshot]) -> u8 {
    if series.len() < 2 {
        return 10;
    }
    let n = series.len() as f64;
    let mut spreads = Vec::new();
    for emotion in Emotion::CANONICAL {
        let mean = average_intensity(series, emotion);
        if mean == 0.0 {
            continue;
        }
        let variance: f64 = series
            .iter()
            .map(|s| {
                let d = s.intensity(emotion) - mean;
                d * d
            })
            .sum::<f64>()
            / n;
        spreads.push(variance.sqrt() / mean);
    }
    if spreads.is_empty() {
        return 10;
    }
    let cv = spreads.iter().sum::<f64>() / spreads.len() as f64;
    let score = (10.0 - 9.0 * cv.min(1.0)).round() as u8;
    tracing::trace!(cv, score, "stability computed");
    score
}

/// Describes categories whose trailing-half mean moved at least
/// [`SHIFT_THRESHOLD`] points away from the leading-half mean.
///
/// Series of one snapshot or fewer have nothing to compare and report
/// [`NO_CHANGES`].
pub fn significant_changes(series: &[EmotionSnapshot]) -> String {
    if series.len() <= 1 {
        return NO_CHANGES.to_string();
    }
    let (leading, trailing) = series.split_at(series.len() / 2);
    let mut shifts = Vec::new();
    for emotion in Emotion::CANONICAL {
        let delta = average_intensity(trailing, emotion) - average_intensity(leading, emotion);
        if delta.abs() >= SHIFT_THRESHOLD {
            let direction = if delta > 0.0 { "rose" } else { "fell" };
            shifts.push(format!("{emotion} {direction} {:.1} points", delta.abs()));
        }
    }
    if shifts.is_empty() {
        NO_CHANGES.to_string()
    } else {
        shifts.join(", ")
    }
}

/// Everything the overview cards need about one series, recomputed per call
/// and never persisted.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mien_rs::{Emotion, EmotionSnapshot, TrendSummary};
///
/// let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let series = vec![EmotionSnapshot::new(day).with(Emotion::Sadness, 60.0)];
/// let summary = TrendSummary::of(&series);
/// assert_eq!(summary.dominant, Some(Emotion::Sadness));
/// assert_eq!(summary.dominant_label(), "Sadness");
/// assert_eq!(TrendSummary::of(&[]).dominant_label(), "No data");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct TrendSummary {
    pub averages: BTreeMap<Emotion, f64>,
    pub dominant: Option<Emotion>,
    pub stability: u8,
    pub changes: String,
}

impl TrendSummary {
    /// Aggregate `series` into a summary.
    pub fn of(series: &[EmotionSnapshot]) -> Self {
        let summary = Self {
            averages: all_averages(series),
            dominant: dominant_emotion(series),
            stability: stability_index(series),
            changes: significant_changes(series),
        };
        tracing::debug!(
            days = series.len(),
            dominant = summary.dominant_label(),
            stability = summary.stability,
            "trend summary computed"
        );
        summary
    }

    /// The dominant category name, or the [`NO_DATA`] sentinel.
    pub fn dominant_label(&self) -> &'static str {
        self.dominant.map_or(NO_DATA, Emotion::as_str)
    }
}
