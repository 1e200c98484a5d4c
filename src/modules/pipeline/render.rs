use super::model::RunReport;
use crate::common::clock;
use std::fmt::Write;

/// Plain-text run report for the scheduler entry point. One banner line,
/// then one labeled blob per step, in invocation order.
pub fn plain_text(report: &RunReport) -> String {
    let mut out = format!(
        "YouTube Automation started at {}\n",
        clock::format_timestamp(report.started_at)
    );
    for step in &report.steps {
        let _ = writeln!(out, "{}: {}", step.label, step.output);
    }
    out
}

/// Browser-facing rendering of the same report. Step output goes inside
/// `<pre>` blocks and is escaped, never interpreted as markup.
pub fn html_page(report: &RunReport) -> String {
    let mut page = String::from("<h1>YouTube Automation Pipeline Test</h1>");
    for (i, step) in report.steps.iter().enumerate() {
        let _ = write!(
            page,
            "<h2>Step {}: Running {}...</h2><pre>{}</pre>",
            i + 1,
            step.label,
            escape_html(&step.output)
        );
    }
    page.push_str("<h2>Test Complete</h2>");
    page
}

/// Minimal HTML escaping for untrusted process output.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
