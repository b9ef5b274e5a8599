//! Chart rendering over aggregated results.
//!
//! A thin wrapper over `plotly` that consumes only final scalar series:
//! performance-drop tables become line charts, flat per-category means
//! become grouped bar charts. Renderers return standalone HTML documents;
//! [`write_chart`] puts one on disk. Legend labels always come from the
//! caller's [`LabelMap`], never from series position.

pub mod drop_line;
pub mod label;
pub mod mean_bar;

pub use drop_line::{render_drop_chart, DropMetric};
pub use label::{LabelMap, LabelPolicy, LegendTracker};
pub use mean_bar::{render_mean_bar_chart, MeanBar};

use std::path::Path;

use crate::error::Result;

/// Wrap a plotly fragment into a standalone HTML page.
fn wrap_page(title: &str, fragment: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="https://cdn.plot.ly/plotly-latest.min.js"></script>
</head>
<body>
{fragment}
</body>
</html>
"#
    )
}

/// Write rendered chart HTML to a file.
pub fn write_chart(html: &str, path: impl AsRef<Path>) -> Result<()> {
    std::fs::write(path, html)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_page_is_standalone_html() {
        let page = wrap_page("Drop chart", "<div>fragment</div>");
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Drop chart</title>"));
        assert!(page.contains("<div>fragment</div>"));
        assert!(page.contains("cdn.plot.ly"));
    }

    #[test]
    fn test_write_chart_creates_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("chart.html");
        write_chart("<html></html>", &path).expect("write succeeds");
        let written = std::fs::read_to_string(&path).expect("file exists");
        assert_eq!(written, "<html></html>");
    }
}
