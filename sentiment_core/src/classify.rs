//! Score to category mapping
//!
//! Two policies live here and must stay separate: the five-band policy
//! used for text annotation and the coarser three-band policy used for
//! headline batches.

use crate::{Category, PolarityScore};
use serde::{Serialize, Serializer};
use std::fmt;

/// Scores at or beyond this magnitude count as strong sentiment
pub const STRONG_THRESHOLD: f64 = 0.5;

/// Scores strictly inside `(-0.05, 0.05)` are neutral
pub const WEAK_THRESHOLD: f64 = 0.05;

/// A fixed mapping from polarity score to category and color
pub trait ClassificationPolicy {
    /// Color tag produced by this policy
    type Color: Copy + fmt::Debug + PartialEq;

    /// Map a score to its category and color
    fn classify(&self, score: PolarityScore) -> (Category, Self::Color);
}

/// Presentation color for annotated text fragments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextColor {
    StrongPositive,
    WeakPositive,
    StrongNegative,
    WeakNegative,
    Neutral,
}

impl TextColor {
    /// Color code understood by the rendering surface
    pub fn code(self) -> &'static str {
        match self {
            TextColor::StrongPositive => "#8ef",
            TextColor::WeakPositive => "#aef",
            TextColor::StrongNegative => "#faa",
            TextColor::WeakNegative => "#f77",
            TextColor::Neutral => "#aaa",
        }
    }
}

impl Serialize for TextColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Presentation color for headline items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadlineColor {
    Green,
    Red,
    Gray,
}

impl HeadlineColor {
    /// Color code understood by the feed surface
    pub fn code(self) -> &'static str {
        match self {
            HeadlineColor::Green => "green",
            HeadlineColor::Red => "red",
            HeadlineColor::Gray => "gray",
        }
    }
}

impl Serialize for HeadlineColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code())
    }
}

impl fmt::Display for HeadlineColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Text annotation policy: strong and weak bands on each side of neutral
///
/// Branches are checked in order and the first match wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FiveBandPolicy;

impl ClassificationPolicy for FiveBandPolicy {
    type Color = TextColor;

    fn classify(&self, score: PolarityScore) -> (Category, TextColor) {
        let s = score.value();
        if s >= STRONG_THRESHOLD {
            (Category::Positive, TextColor::StrongPositive)
        } else if s >= WEAK_THRESHOLD {
            (Category::Positive, TextColor::WeakPositive)
        } else if s <= -STRONG_THRESHOLD {
            (Category::Negative, TextColor::StrongNegative)
        } else if s <= -WEAK_THRESHOLD {
            (Category::Negative, TextColor::WeakNegative)
        } else {
            (Category::Neutral, TextColor::Neutral)
        }
    }
}

/// Headline policy: one band per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThreeBandPolicy;

impl ClassificationPolicy for ThreeBandPolicy {
    type Color = HeadlineColor;

    fn classify(&self, score: PolarityScore) -> (Category, HeadlineColor) {
        let s = score.value();
        if s >= WEAK_THRESHOLD {
            (Category::Positive, HeadlineColor::Green)
        } else if s <= -WEAK_THRESHOLD {
            (Category::Negative, HeadlineColor::Red)
        } else {
            (Category::Neutral, HeadlineColor::Gray)
        }
    }
}
