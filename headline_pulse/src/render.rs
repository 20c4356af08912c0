//! Markdown listing of a scored batch for feed surfaces

use crate::PulseSummary;

/// Shown instead of a listing when the batch is empty
pub const NO_NEWS_MESSAGE: &str = "No news found for the given ticker symbol.";

/// Render the summary as a Markdown sidebar listing
///
/// The total comes first, tinted by direction, followed by one block per
/// item in batch order. Every block has the same lines, even when the link
/// or publication time is blank.
pub fn render_markdown(summary: &PulseSummary) -> String {
    if summary.is_empty() {
        return format!("{}\n", NO_NEWS_MESSAGE);
    }

    let mut out = format!(
        "<h3 style='color: {}'>{}</h3>\n\n",
        summary.direction.color(),
        summary.headline()
    );

    for item in &summary.items {
        out.push_str(&format!("**{}**\n\n", item.title));
        out.push_str(&format!("[Read more]({})\n\n", item.link));
        out.push_str(&format!("*Published: {}*\n\n", item.published));
        out.push_str(&format!(
            "Sentiment: <span style='color:{}'>{}</span> (Score: {})\n\n---\n\n",
            item.color, item.category, item.score
        ));
    }

    out
}
