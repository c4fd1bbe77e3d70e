use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::emotion::Emotion;
use crate::snapshot::EmotionSnapshot;
use crate::trend::average_intensity;

/// Anger average above this triggers the anger-management rule.
pub const ANGER_THERAPY_THRESHOLD: f64 = 70.0;
/// Fear average above this triggers the anxiety-activity rule.
pub const ANXIETY_ACTIVITY_THRESHOLD: f64 = 60.0;
/// Sadness average above this, combined with [`HAPPINESS_FLOOR`], triggers
/// the depression-risk rule.
pub const SADNESS_RISK_THRESHOLD: f64 = 65.0;
/// Happiness average below this is required for the depression-risk rule.
pub const HAPPINESS_FLOOR: f64 = 30.0;

/// Kind of treatment a recommendation suggests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreatmentKind {
    Therapy,
    Activity,
    Medication,
}

/// Urgency of a recommendation, ordered from least to most pressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
}

/// A generated advisory, justified by the category averages that triggered
/// it. Created fresh on every analysis pass; callers wanting history must
/// store these themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TreatmentKind,
    pub description: String,
    pub priority: Priority,
    #[serde(rename = "basedOn")]
    pub based_on: Vec<Emotion>,
    #[serde(rename = "dateCreated")]
    pub date_created: DateTime<Utc>,
}

/// Source of creation timestamps, injectable so tests can pin time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of recommendation ids, injectable so tests can use predictable
/// ones.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Applies the fixed threshold rules over a series and emits advisories.
///
/// Stateless apart from its id and clock seams; two passes over identical
/// input produce the same advisories up to `id` and `dateCreated`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use mien_rs::{Emotion, EmotionSnapshot, Priority, TreatmentAnalyzer, TreatmentKind};
///
/// let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
/// let series = vec![EmotionSnapshot::new(day).with(Emotion::Anger, 90.0)];
/// let recs = TreatmentAnalyzer::default().analyze(&series);
/// assert_eq!(recs.len(), 1);
/// assert_eq!(recs[0].kind, TreatmentKind::Therapy);
/// assert_eq!(recs[0].priority, Priority::High);
/// assert_eq!(recs[0].based_on, vec![Emotion::Anger]);
/// ```
pub struct TreatmentAnalyzer<I: IdSource = UuidSource, C: Clock = SystemClock> {
    ids: I,
    clock: C,
}

impl Default for TreatmentAnalyzer {
    fn default() -> Self {
        Self::new(UuidSource, SystemClock)
    }
}

impl<I: IdSource, C: Clock> TreatmentAnalyzer<I, C> {
    /// Build an analyzer over explicit id and clock sources.
    pub fn new(ids: I, clock: C) -> Self {
        Self { ids, clock }
    }

    /// Evaluate the rules, in order, over full-series averages.
    ///
    /// Rules are independent: a series can trigger zero, one, or all of
    /// them. An empty series resolves every average to 0 and yields no
    /// recommendations; there is no error path.
    pub fn analyze(&self, series: &[EmotionSnapshot]) -> Vec<Recommendation> {
        let anger = average_intensity(series, Emotion::Anger);
        let fear = average_intensity(series, Emotion::Fear);
        let sadness = average_intensity(series, Emotion::Sadness);
        let happiness = average_intensity(series, Emotion::Happiness);
        tracing::debug!(anger, fear, sadness, happiness, "evaluating treatment rules");

        let mut recommendations = Vec::new();
        if anger > ANGER_THERAPY_THRESHOLD {
            recommendations.push(self.recommend(
                TreatmentKind::Therapy,
                Priority::High,
                vec![Emotion::Anger],
                "Consider anger management therapy sessions",
            ));
        }
        if fear > ANXIETY_ACTIVITY_THRESHOLD {
            recommendations.push(self.recommend(
                TreatmentKind::Activity,
                Priority::Medium,
                vec![Emotion::Fear],
                "Daily meditation and breathing exercises recommended",
            ));
        }
        if sadness > SADNESS_RISK_THRESHOLD && happiness < HAPPINESS_FLOOR {
            recommendations.push(self.recommend(
                TreatmentKind::Therapy,
                Priority::High,
                vec![Emotion::Sadness, Emotion::Happiness],
                "Schedule consultation with mental health professional",
            ));
        }
        tracing::debug!(count = recommendations.len(), "treatment rules evaluated");
        recommendations
    }

    fn recommend(
        &self,
        kind: TreatmentKind,
        priority: Priority,
        based_on: Vec<Emotion>,
        description: &str,
    ) -> Recommendation {
        Recommendation {
            id: self.ids.next_id(),
            kind,
            description: description.to_string(),
            priority,
            based_on,
            date_created: self.clock.now(),
        }
    }
}
