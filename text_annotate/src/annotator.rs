//! Segment, score and classify text into annotated fragments

use crate::segmenter::segment;
use sentiment_core::{
    score_or_neutral, Category, ClassificationPolicy, FiveBandPolicy, Granularity, PolarityScore,
    PolarityScorer, TextColor,
};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// One scored fragment of the source text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    /// Fragment text as it appears in the source
    #[serde(rename = "fragment_text")]
    pub text: String,
    /// Polarity of the fragment
    pub score: PolarityScore,
    /// Category from the five-band policy
    #[serde(rename = "category_name")]
    pub category: Category,
    /// Tint for the rendering surface
    #[serde(rename = "color_code")]
    pub color: TextColor,
}

/// Annotations of one text at one granularity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationSection {
    pub granularity: Granularity,
    pub annotations: Vec<Annotation>,
}

/// Independent annotation views of the same text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotationReport {
    pub sections: Vec<AnnotationSection>,
}

impl AnnotationReport {
    /// Annotations for a granularity, if it was requested
    pub fn get(&self, granularity: Granularity) -> Option<&[Annotation]> {
        self.sections
            .iter()
            .find(|s| s.granularity == granularity)
            .map(|s| s.annotations.as_slice())
    }

    /// True when no section produced any fragment
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.annotations.is_empty())
    }
}

/// Runs segmentation, scoring and five-band classification
///
/// Holds a shared, read-only scorer; annotating has no side effects.
#[derive(Clone)]
pub struct Annotator {
    scorer: Arc<dyn PolarityScorer>,
    policy: FiveBandPolicy,
}

impl fmt::Debug for Annotator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Annotator")
            .field("scorer", &self.scorer.name())
            .field("policy", &self.policy)
            .finish()
    }
}

impl Annotator {
    /// Create an annotator around an already initialized scorer
    pub fn new(scorer: Arc<dyn PolarityScorer>) -> Self {
        Self {
            scorer,
            policy: FiveBandPolicy,
        }
    }

    /// Annotate `text` at one granularity
    ///
    /// Output order matches fragment order. A fragment the scorer cannot
    /// handle is reported as neutral with a score of 0.0.
    pub fn annotate(&self, text: &str, granularity: Granularity) -> Vec<Annotation> {
        let annotations: Vec<Annotation> = segment(text, granularity)
            .into_iter()
            .map(|fragment| {
                let score = score_or_neutral(self.scorer.as_ref(), fragment);
                let (category, color) = self.policy.classify(score);
                Annotation {
                    text: fragment.to_string(),
                    score,
                    category,
                    color,
                }
            })
            .collect();

        debug!(%granularity, fragments = annotations.len(), "annotated text");
        annotations
    }

    /// Annotate `text` once per requested granularity, in the given order
    pub fn annotate_many(&self, text: &str, granularities: &[Granularity]) -> AnnotationReport {
        AnnotationReport {
            sections: granularities
                .iter()
                .map(|&granularity| AnnotationSection {
                    granularity,
                    annotations: self.annotate(text, granularity),
                })
                .collect(),
        }
    }

    /// Word, sentence and paragraph views of `text`
    pub fn annotate_all(&self, text: &str) -> AnnotationReport {
        self.annotate_many(text, &Granularity::ALL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sentiment_core::mock_scorers::{FailingScorer, TableScorer};

    fn annotator(entries: &[(&str, f64)]) -> Annotator {
        Annotator::new(Arc::new(TableScorer::new(entries.iter().copied())))
    }

    #[test]
    fn test_word_annotation_order() {
        let annotator = annotator(&[("great", 0.6), ("awful", -0.6), ("meh", 0.01)]);
        let result = annotator.annotate("great meh awful", Granularity::Word);

        let texts: Vec<&str> = result.iter().map(|a| a.text.as_str()).collect();
        assert_eq!(texts, vec!["great", "meh", "awful"]);

        let colors: Vec<TextColor> = result.iter().map(|a| a.color).collect();
        assert_eq!(
            colors,
            vec![
                TextColor::StrongPositive,
                TextColor::Neutral,
                TextColor::StrongNegative
            ]
        );
    }

    #[test]
    fn test_failed_fragment_is_neutral() {
        let scorer = TableScorer::new([("good", 0.3), ("bad", -0.3)]).with_failures(["???"]);
        let annotator = Annotator::new(Arc::new(scorer));

        let result = annotator.annotate("good ??? bad", Granularity::Word);
        assert_eq!(result.len(), 3);
        assert_eq!(result[1].category, Category::Neutral);
        assert_eq!(result[1].score, PolarityScore::NEUTRAL);
        assert_eq!(result[2].category, Category::Negative);
    }

    #[test]
    fn test_all_failures_still_annotate() {
        let annotator = Annotator::new(Arc::new(FailingScorer));
        let result = annotator.annotate("one two", Granularity::Word);
        assert!(result.iter().all(|a| a.color == TextColor::Neutral));
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn test_report_sections_are_independent() {
        let text = "Up big. Down small.\nFlat.";
        let annotator = annotator(&[
            ("Up big.", 0.7),
            ("Down small.", -0.2),
            ("Flat.", 0.0),
            ("Up big. Down small.", 0.4),
        ]);
        let report = annotator.annotate_all(text);

        assert_eq!(report.get(Granularity::Word).map(|a| a.len()), Some(5));

        let sentences = report.get(Granularity::Sentence).unwrap();
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].color, TextColor::StrongPositive);
        assert_eq!(sentences[1].color, TextColor::WeakNegative);

        // Paragraph scores come from the paragraph text, not its sentences
        let paragraphs = report.get(Granularity::Paragraph).unwrap();
        assert_eq!(paragraphs.len(), 2);
        assert_eq!(paragraphs[0].color, TextColor::WeakPositive);
        assert_eq!(paragraphs[1].category, Category::Neutral);
    }

    #[test]
    fn test_empty_report() {
        let report = annotator(&[]).annotate_all("");
        assert_eq!(report.sections.len(), 3);
        assert!(report.is_empty());
    }

    #[test]
    fn test_annotate_many_respects_request() {
        let report = annotator(&[]).annotate_many("a b", &[Granularity::Paragraph]);
        assert!(report.get(Granularity::Word).is_none());
        assert_eq!(report.get(Granularity::Paragraph).map(|a| a.len()), Some(1));
    }

    #[test]
    fn test_annotation_serializes_interface_names() {
        let annotator = annotator(&[("nice", 0.2)]);
        let result = annotator.annotate("nice", Granularity::Word);
        let json = serde_json::to_value(&result[0]).unwrap();

        assert_eq!(json["fragment_text"], "nice");
        assert_eq!(json["category_name"], "Positive");
        assert_eq!(json["color_code"], "#aef");
        assert_eq!(json["score"], 0.2);
    }
}
