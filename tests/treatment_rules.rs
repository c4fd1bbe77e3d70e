use chrono::{DateTime, NaiveDate, Utc};
use mien_rs::{Clock, Emotion, EmotionSnapshot, IdSource, Priority, TreatmentAnalyzer, TreatmentKind};
use std::sync::Mutex;

struct FixedClock(DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

struct CountingIds(Mutex<u32>);

impl IdSource for CountingIds {
    fn next_id(&self) -> String {
        let mut n = self.0.lock().unwrap();
        *n += 1;
        format!("rec-{n}")
    }
}

fn engine() -> TreatmentAnalyzer<CountingIds, FixedClock> {
    TreatmentAnalyzer::new(
        CountingIds(Mutex::new(0)),
        FixedClock("2024-05-15T09:30:00Z".parse().unwrap()),
    )
}

fn series(levels: &[(Emotion, f64)]) -> Vec<EmotionSnapshot> {
    let date = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
    let mut snapshot = EmotionSnapshot::new(date);
    for &(emotion, value) in levels {
        snapshot = snapshot.with(emotion, value);
    }
    vec![snapshot]
}

#[test]
fn anger_rule_is_independent_of_the_others() {
    let input = series(&[
        (Emotion::Anger, 80.0),
        (Emotion::Fear, 20.0),
        (Emotion::Sadness, 20.0),
        (Emotion::Happiness, 80.0),
    ]);
    let recs = engine().analyze(&input);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].kind, TreatmentKind::Therapy);
    assert_eq!(recs[0].priority, Priority::High);
    assert_eq!(recs[0].based_on, vec![Emotion::Anger]);
}

#[test]
fn combined_trigger_fires_only_the_depression_rule() {
    let input = series(&[
        (Emotion::Sadness, 90.0),
        (Emotion::Happiness, 10.0),
        (Emotion::Anger, 10.0),
        (Emotion::Fear, 10.0),
    ]);
    let recs = engine().analyze(&input);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].based_on, vec![Emotion::Sadness, Emotion::Happiness]);
    assert_eq!(
        recs[0].description,
        "Schedule consultation with mental health professional"
    );
}

#[test]
fn boundary_averages_do_not_fire() {
    // Exactly at the thresholds: all rules use strict comparisons.
    let input = series(&[
        (Emotion::Anger, 70.0),
        (Emotion::Fear, 60.0),
        (Emotion::Sadness, 65.0),
        (Emotion::Happiness, 30.0),
    ]);
    assert!(engine().analyze(&input).is_empty());
}

#[test]
fn averages_are_taken_over_the_whole_series() {
    // One hot day does not trip a rule when the rest of the week is calm.
    let date = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
    let input: Vec<EmotionSnapshot> = (15..=21)
        .map(|d| {
            let value = if d == 15 { 95.0 } else { 40.0 };
            EmotionSnapshot::new(date(d)).with(Emotion::Anger, value)
        })
        .collect();
    assert!(engine().analyze(&input).is_empty());
}

#[test]
fn ids_and_timestamps_come_from_the_seams() {
    let input = series(&[(Emotion::Anger, 80.0), (Emotion::Fear, 70.0)]);
    let recs = engine().analyze(&input);
    assert_eq!(recs.len(), 2);
    assert_eq!(recs[0].id, "rec-1");
    assert_eq!(recs[1].id, "rec-2");
    let stamp: DateTime<Utc> = "2024-05-15T09:30:00Z".parse().unwrap();
    assert!(recs.iter().all(|r| r.date_created == stamp));
}
