//! Section rendering.
//!
//! One section is a `# title` header (optionally with an accent, e.g.
//! the branch name next to the status title) followed by the body text
//! of a sub-query or extension.

use std::str::FromStr;

use thiserror::Error;

use glance_ui::styles::{self, ColorMode};

/// The two text densities a section can render in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Header immediately followed by the raw body.
    #[default]
    Compact,
    /// Header, blank line, body indented four spaces, trailing blank
    /// line.
    Pretty,
}

/// Raised for a format argument outside `compact`/`pretty`.
#[derive(Debug, Error)]
#[error("unknown format '{0}'")]
pub struct UnknownFormat(String);

impl FromStr for Format {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Format::Compact),
            "pretty" => Ok(Format::Pretty),
            other => Err(UnknownFormat(other.to_string())),
        }
    }
}

/// Render one named section.
///
/// An empty body with `show_empty` unset drops the section entirely:
/// the result is the empty string. The accent, when present, sits
/// inside the same colored span as the title.
pub fn render(
    title: &str,
    accent: Option<&str>,
    body: &str,
    format: Format,
    show_empty: bool,
    color: ColorMode,
) -> String {
    if !show_empty && body.is_empty() {
        return String::new();
    }

    let heading = match accent {
        Some(accent) => styles::title(&format!("{title} {accent}"), color),
        None => styles::title(title, color),
    };
    let mut section = format!("# {heading}\n");

    match format {
        Format::Compact => section.push_str(body),
        Format::Pretty => {
            section.push('\n');
            if !body.is_empty() {
                for line in body.lines() {
                    section.push_str("    ");
                    section.push_str(line);
                    section.push('\n');
                }
                section.push('\n');
            }
        }
    }

    section
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compact_with_accent() {
        let rendered = render(
            "the title",
            Some("the accent"),
            "the text\nhere\n",
            Format::Compact,
            false,
            ColorMode::Never,
        );
        assert_eq!(rendered, "# the title the accent\nthe text\nhere\n");
    }

    #[test]
    fn compact_without_accent() {
        let rendered = render(
            "the title",
            None,
            "the text\nhere\n",
            Format::Compact,
            false,
            ColorMode::Never,
        );
        assert_eq!(rendered, "# the title\nthe text\nhere\n");
    }

    #[test]
    fn empty_body_is_suppressed() {
        let rendered = render("title", None, "", Format::Compact, false, ColorMode::Never);
        assert_eq!(rendered, "");
    }

    #[test]
    fn empty_body_shown_on_request() {
        let rendered = render("title", None, "", Format::Compact, true, ColorMode::Never);
        assert_eq!(rendered, "# title\n");
    }

    #[test]
    fn pretty_with_body() {
        let rendered = render(
            "the title",
            None,
            "the text\nhere\n",
            Format::Pretty,
            false,
            ColorMode::Never,
        );
        assert_eq!(rendered, "# the title\n\n    the text\n    here\n\n");
    }

    #[test]
    fn pretty_without_body() {
        let rendered = render("the title", None, "", Format::Pretty, true, ColorMode::Never);
        assert_eq!(rendered, "# the title\n\n");
    }

    #[test]
    fn colored_title_spans_accent() {
        let rendered = render(
            "status",
            Some("main"),
            "body\n",
            Format::Compact,
            false,
            ColorMode::Always,
        );
        // The colored span wraps "status main" as one unit.
        assert!(rendered.starts_with("# \x1b"));
        assert!(rendered.contains("status main"));
        assert!(rendered.ends_with("body\n"));
    }

    #[test]
    fn unknown_format_is_an_error() {
        let err = "invalid".parse::<Format>().unwrap_err();
        assert_eq!(err.to_string(), "unknown format 'invalid'");
    }
}
