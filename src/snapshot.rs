use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::emotion::Emotion;

/// One dated observation carrying an intensity per category.
///
/// The map is keyed by category name rather than [`Emotion`] so that feeds
/// may carry categories this crate does not know about; the six canonical
/// categories are the only ones the analysis consults. Intensities are
/// nominally in `[0, 100]` but are not clamped or validated here.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mien_rs::{Emotion, EmotionSnapshot};
///
/// let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let snap = EmotionSnapshot::new(day).with(Emotion::Anger, 82.0);
/// assert_eq!(snap.intensity(Emotion::Anger), 82.0);
/// // A missing category reads as zero.
/// assert_eq!(snap.intensity(Emotion::Surprise), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionSnapshot {
    pub date: NaiveDate,
    pub emotions: HashMap<String, f64>,
}

impl EmotionSnapshot {
    /// An observation for `date` with no intensities recorded yet.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            emotions: HashMap::new(),
        }
    }

    /// Builder-style intensity assignment.
    pub fn with(mut self, emotion: Emotion, intensity: f64) -> Self {
        self.emotions.insert(emotion.as_str().to_string(), intensity);
        self
    }

    /// Intensity recorded for `emotion`, or 0.0 when the key is absent.
    pub fn intensity(&self, emotion: Emotion) -> f64 {
        self.emotions.get(emotion.as_str()).copied().unwrap_or(0.0)
    }
}

/// Historical record of an administered treatment.
///
/// Carried only as a data-shape contract for the presentation layer; the
/// aggregation and recommendation paths never read or write these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreatmentRecord {
    pub id: String,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub kind: String,
    pub notes: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<String>,
}
