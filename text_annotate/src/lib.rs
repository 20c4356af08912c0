//! # Text Annotate
//!
//! `text_annotate` splits free-form text into words, sentences or
//! paragraphs, scores every fragment and tags it with a sentiment category
//! and a display color.
//!
//! Each granularity is an independent view of the same text: paragraph
//! results are scored from the paragraph itself, never composed from its
//! sentences.
//!
//! ## Usage Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use sentiment_core::{Category, Granularity, VaderScorer};
//! use text_annotate::Annotator;
//!
//! let annotator = Annotator::new(Arc::new(VaderScorer::new()));
//! let sentences = annotator.annotate("I love this! I hate that.", Granularity::Sentence);
//!
//! assert_eq!(sentences.len(), 2);
//! assert_eq!(sentences[0].category, Category::Positive);
//! assert_eq!(sentences[1].category, Category::Negative);
//! ```

pub mod annotator;
pub mod render;
pub mod segmenter;

pub use annotator::{Annotation, AnnotationReport, AnnotationSection, Annotator};
pub use render::{render_html, render_plain, render_report_html, render_report_plain};
pub use segmenter::segment;
pub use sentiment_core::Granularity;
