//! Core analysis for a microexpression dashboard.
//!
//! This crate reduces dated emotion-intensity snapshots to the summaries
//! and advisories the dashboard renders: per-category averages, a dominant
//! category, a stability score, a change description
//! ([`TrendSummary`]), and threshold-based treatment recommendations
//! ([`TreatmentAnalyzer`]). Everything is a pure function of its input
//! series; the only injected effects are the id and clock seams on the
//! recommendation engine.

mod countenance;
mod emotion;
mod feed;
mod snapshot;
mod treatment;
mod trend;

pub use countenance::{emoji, intensity_color, intensity_label, is_rising, trend_label};
pub use emotion::{Emotion, UnknownEmotion, Valence};
pub use feed::{SnapshotSource, SyntheticFeed};
pub use snapshot::{EmotionSnapshot, TreatmentRecord};
pub use treatment::{
    ANGER_THERAPY_THRESHOLD, ANXIETY_ACTIVITY_THRESHOLD, Clock, HAPPINESS_FLOOR, IdSource,
    Priority, Recommendation, SADNESS_RISK_THRESHOLD, SystemClock, TreatmentAnalyzer,
    TreatmentKind, UuidSource,
};
pub use trend::{
    NO_CHANGES, NO_DATA, SHIFT_THRESHOLD, TrendSummary, all_averages, average_intensity,
    dominant_emotion, significant_changes, stability_index,
};
