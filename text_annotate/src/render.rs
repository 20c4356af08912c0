//! Render annotations for display surfaces

use crate::annotator::{Annotation, AnnotationReport};

/// Inline HTML, one tinted `<span>` per fragment labelled with its category
pub fn render_html(annotations: &[Annotation]) -> String {
    annotations
        .iter()
        .map(|a| {
            format!(
                "<span style=\"background-color: {}; padding: 0.2em 0.4em; border-radius: 0.3em; margin: 0 0.1em;\">{}<span style=\"font-size: 0.75em; opacity: 0.7; margin-left: 0.4em;\">{}</span></span>",
                a.color.code(),
                escape_html(&a.text),
                a.category
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain text, `[fragment | Category]` per fragment
pub fn render_plain(annotations: &[Annotation]) -> String {
    annotations
        .iter()
        .map(|a| format!("[{} | {}]", a.text, a.category))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Plain text report with one titled section per granularity
pub fn render_report_plain(report: &AnnotationReport) -> String {
    let mut out = String::new();
    for section in &report.sections {
        out.push_str(&format!(
            "{} Sentiment Annotation\n",
            section.granularity.label()
        ));
        out.push_str(&render_plain(&section.annotations));
        out.push_str("\n\n");
    }
    out
}

/// HTML report with one `<h3>` titled section per granularity
pub fn render_report_html(report: &AnnotationReport) -> String {
    let mut out = String::new();
    for section in &report.sections {
        out.push_str(&format!(
            "<h3>{} Sentiment Annotation</h3>\n<p>{}</p>\n",
            section.granularity.label(),
            render_html(&section.annotations)
        ));
    }
    out
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
