//! Pure lookups the presentation layer uses to render an emotion level:
//! emoji, intensity labels and colors, and the trend badge. These replace
//! what used to be module-level tables in the dashboard markup; the literal
//! strings are part of the rendering contract and are kept as observed.

use crate::emotion::{Emotion, Valence};

/// Emoji shown next to a category name.
pub fn emoji(emotion: Emotion) -> &'static str {
    match emotion {
        Emotion::Anger => "\u{1F620}",
        Emotion::Disgust => "\u{1F922}",
        Emotion::Fear => "\u{1F628}",
        Emotion::Happiness => "\u{1F60A}",
        Emotion::Sadness => "\u{1F622}",
        Emotion::Surprise => "\u{1F632}",
    }
}

/// Severity label for an average intensity. High values of a negative
/// category read as severe; high values of a positive one as good news.
pub fn intensity_label(emotion: Emotion, value: f64) -> &'static str {
    match emotion.valence() {
        Valence::Negative => {
            if value >= 70.0 {
                "Intensidad severa"
            } else if value >= 50.0 {
                "Intensidad moderada"
            } else if value >= 30.0 {
                "Intensidad leve"
            } else {
                "Intensidad baja"
            }
        }
        Valence::Positive => {
            if value >= 70.0 {
                "Altamente positivo"
            } else if value >= 50.0 {
                "Moderadamente positivo"
            } else if value >= 30.0 {
                "Ligeramente positivo"
            } else {
                "Neutral"
            }
        }
    }
}

/// Utility class coloring an average intensity, valence-dependent like
/// [`intensity_label`].
pub fn intensity_color(emotion: Emotion, value: f64) -> &'static str {
    match emotion.valence() {
        Valence::Negative => {
            if value >= 70.0 {
                "text-red-600"
            } else if value >= 50.0 {
                "text-orange-500"
            } else if value >= 30.0 {
                "text-yellow-500"
            } else {
                "text-green-500"
            }
        }
        Valence::Positive => {
            if value >= 70.0 {
                "text-green-600"
            } else if value >= 50.0 {
                "text-green-500"
            } else if value >= 30.0 {
                "text-yellow-500"
            } else {
                "text-orange-500"
            }
        }
    }
}

/// Whether the trend badge renders as rising (above the midpoint).
pub fn is_rising(value: f64) -> bool {
    value > 50.0
}

/// Badge text for an average intensity.
pub fn trend_label(value: f64) -> &'static str {
    if is_rising(value) { "Aumentando" } else { "Estable" }
}
