use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the six microexpression categories tracked per snapshot.
///
/// The variants are declared in canonical order, so an ordered map keyed by
/// `Emotion` iterates Anger first and Surprise last. That order also breaks
/// ties when two categories share the highest average.
///
/// # Examples
///
/// ```
/// use mien_rs::Emotion;
///
/// let e: Emotion = "Happiness".parse().unwrap();
/// assert_eq!(e, Emotion::Happiness);
/// assert_eq!(Emotion::CANONICAL[0], Emotion::Anger);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Emotion {
    Anger,
    Disgust,
    Fear,
    Happiness,
    Sadness,
    Surprise,
}

/// Whether high intensity of a category reads as distress or wellbeing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Valence {
    Negative,
    Positive,
}

impl Emotion {
    /// The fixed category order used everywhere a deterministic order is
    /// needed.
    pub const CANONICAL: [Emotion; 6] = [
        Emotion::Anger,
        Emotion::Disgust,
        Emotion::Fear,
        Emotion::Happiness,
        Emotion::Sadness,
        Emotion::Surprise,
    ];

    /// The canonical name, matching the snapshot map keys.
    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Anger => "Anger",
            Emotion::Disgust => "Disgust",
            Emotion::Fear => "Fear",
            Emotion::Happiness => "Happiness",
            Emotion::Sadness => "Sadness",
            Emotion::Surprise => "Surprise",
        }
    }

    /// Happiness and Surprise read as positive; the rest as negative.
    pub fn valence(self) -> Valence {
        match self {
            Emotion::Happiness | Emotion::Surprise => Valence::Positive,
            _ => Valence::Negative,
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a category name from untrusted input is not one of the six
/// canonical categories. Extra keys inside a snapshot map are tolerated;
/// this error only concerns callers that need a typed [`Emotion`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown emotion category: {0}")]
pub struct UnknownEmotion(pub String);

impl FromStr for Emotion {
    type Err = UnknownEmotion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Anger" => Ok(Emotion::Anger),
            "Disgust" => Ok(Emotion::Disgust),
            "Fear" => Ok(Emotion::Fear),
            "Happiness" => Ok(Emotion::Happiness),
            "Sadness" => Ok(Emotion::Sadness),
            "Surprise" => Ok(Emotion::Surprise),
            other => Err(UnknownEmotion(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_canonical_names() {
        for emotion in Emotion::CANONICAL {
            assert_eq!(emotion.as_str().parse::<Emotion>(), Ok(emotion));
        }
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "Boredom".parse::<Emotion>().unwrap_err();
        assert_eq!(err, UnknownEmotion("Boredom".into()));
        assert_eq!(err.to_string(), "unknown emotion category: Boredom");
    }

    #[test]
    fn ord_matches_canonical_order() {
        let mut sorted = Emotion::CANONICAL;
        sorted.sort();
        assert_eq!(sorted, Emotion::CANONICAL);
    }

    #[test]
    fn valence_split() {
        assert_eq!(Emotion::Happiness.valence(), Valence::Positive);
        assert_eq!(Emotion::Surprise.valence(), Valence::Positive);
        assert_eq!(Emotion::Anger.valence(), Valence::Negative);
        assert_eq!(Emotion::Sadness.valence(), Valence::Negative);
    }
}
