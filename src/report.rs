//! Report data model and rendering.
//!
//! A report is an ordered list of sections, each a header plus
//! label/value lines. Rendering is fixed-format: right-aligned English
//! labels padded to a common width, values appended after the label. A
//! blank value renders as a blank field, it never suppresses the line.

use colored::Colorize;
use std::fmt::Write as _;

const LABEL_WIDTH: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub fields: Vec<(String, String)>,
}

impl Section {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((label.into(), value.into()));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<Section>,
}

impl Report {
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Render the whole report as one text block, sections in insertion
    /// order. Color is controlled globally via `colored`'s override.
    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{}", "Code quality report".bold());
        for section in &self.sections {
            let _ = writeln!(out);
            let _ = writeln!(out, "{}", section.title.bold());
            for (label, value) in &section.fields {
                let _ = writeln!(out, "{:>LABEL_WIDTH$}: {}", label, value);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_fixed_order_and_alignment() {
        plain();
        let mut report = Report::default();
        report.push(
            Section::new("source files")
                .field("lines", "4321")
                .field("lint score", "8.42"),
        );

        let rendered = report.render();
        let expected = indoc::indoc! {"
            Code quality report

            source files
                   lines: 4321
              lint score: 8.42
        "};
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_render_blank_field_keeps_line() {
        plain();
        let mut report = Report::default();
        report.push(Section::new("source files").field("lint score", ""));

        let rendered = report.render();
        assert!(rendered.contains("  lint score: \n"));
    }

    #[test]
    fn test_sections_render_in_insertion_order() {
        plain();
        let mut report = Report::default();
        report.push(Section::new("first"));
        report.push(Section::new("second"));

        let rendered = report.render();
        let first = rendered.find("first").unwrap();
        let second = rendered.find("second").unwrap();
        assert!(first < second);
    }
}
