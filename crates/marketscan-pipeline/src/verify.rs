//! Structural checks on generated reports.
//!
//! A report lists its markets as level-3 headings `"{n}. {name}"`. The first
//! bold `Opportunity Score:` or `Validation Score:` label inside an entry
//! carries its score. A well-formed report has a name and a score for every
//! entry, and scores never increase from one entry to the next within a
//! section. Every level-1 or level-2 heading starts a new section, so a
//! combined report holding several ranked lists is checked list by list.

use std::path::Path;
use std::sync::LazyLock;

use marketscan_core::{Error, Result};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use regex::Regex;

/// Labels whose value is an entry's score.
pub const SCORE_LABELS: &[&str] = &["Opportunity Score:", "Validation Score:"];

#[allow(clippy::expect_used)]
static ENTRY_HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.\s*(.*)$").expect("Invalid entry heading regex"));

#[allow(clippy::expect_used)]
static LEADING_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*(-?\d+(?:\.\d+)?)").expect("Invalid score regex"));

/// One ranked entry of a report.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportEntry {
    /// Number from the heading
    pub rank: usize,
    /// Market name
    pub name: String,
    /// Stated score
    pub score: f64,
}

/// A report that passed verification.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportCheck {
    /// Text of the first level-1 heading
    pub title: String,
    /// Entries in document order
    pub entries: Vec<ReportEntry>,
}

#[derive(Debug, Default)]
struct Draft {
    section: usize,
    rank: usize,
    name: String,
    score: Option<f64>,
}

#[derive(Debug, Default)]
struct Scan {
    title: Option<String>,
    section: usize,
    entries: Vec<Draft>,
    open: bool,
    heading: Option<(HeadingLevel, String)>,
    strong: Option<String>,
    awaiting_score: bool,
}

impl Scan {
    fn current(&mut self) -> Option<&mut Draft> {
        if self.open { self.entries.last_mut() } else { None }
    }

    fn end_heading(&mut self, level: HeadingLevel, text: &str) {
        let text = text.trim();
        match level {
            HeadingLevel::H1 => {
                if self.title.is_none() {
                    self.title = Some(text.to_string());
                }
                self.section += 1;
                self.open = false;
            }
            HeadingLevel::H2 => {
                self.section += 1;
                self.open = false;
            }
            HeadingLevel::H3 => {
                if let Some(caps) = ENTRY_HEADING.captures(text) {
                    self.entries.push(Draft {
                        section: self.section,
                        rank: caps[1].parse().unwrap_or_default(),
                        name: caps[2].trim().to_string(),
                        score: None,
                    });
                    self.open = true;
                }
            }
            _ => {}
        }
    }

    fn end_strong(&mut self, label: &str) {
        let unscored = self.current().is_some_and(|entry| entry.score.is_none());
        if unscored && SCORE_LABELS.contains(&label.trim()) {
            self.awaiting_score = true;
        }
    }

    fn text(&mut self, text: &str) {
        if let Some((_, heading)) = &mut self.heading {
            heading.push_str(text);
        } else if let Some(strong) = &mut self.strong {
            strong.push_str(text);
        } else if self.awaiting_score {
            self.awaiting_score = false;
            let score = LEADING_NUMBER
                .captures(text)
                .and_then(|caps| caps[1].parse::<f64>().ok());
            if let Some(entry) = self.current() {
                entry.score = score;
            }
        }
    }
}

fn scan(markdown: &str) -> Scan {
    let mut scan = Scan::default();
    for event in Parser::new(markdown) {
        match event {
            Event::Start(Tag::Heading { level, .. }) => {
                scan.heading = Some((level, String::new()));
                scan.awaiting_score = false;
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some((level, text)) = scan.heading.take() {
                    scan.end_heading(level, &text);
                }
            }
            Event::Start(Tag::Strong) => scan.strong = Some(String::new()),
            Event::End(TagEnd::Strong) => {
                if let Some(label) = scan.strong.take() {
                    scan.end_strong(&label);
                }
            }
            Event::Text(text) | Event::Code(text) => scan.text(&text),
            Event::SoftBreak | Event::HardBreak => scan.awaiting_score = false,
            _ => {}
        }
    }
    scan
}

/// Check that every entry has a name and a score and that scores are in
/// descending order within each section.
pub fn verify_report(markdown: &str) -> Result<ReportCheck> {
    let scan = scan(markdown);
    let mut entries: Vec<ReportEntry> = Vec::with_capacity(scan.entries.len());
    let mut previous_section = None;

    for draft in scan.entries {
        if draft.name.is_empty() {
            return Err(Error::report(format!("entry {} has no market name", draft.rank)));
        }
        let Some(score) = draft.score else {
            return Err(Error::report(format!(
                "entry {} ({}) has no score",
                draft.rank, draft.name
            )));
        };
        if let Some(previous) = entries.last()
            && previous_section == Some(draft.section)
            && score > previous.score
        {
            return Err(Error::report(format!(
                "entry {} ({}) scores {score} above entry {} ({}) at {}",
                draft.rank, draft.name, previous.rank, previous.name, previous.score
            )));
        }
        previous_section = Some(draft.section);
        entries.push(ReportEntry {
            rank: draft.rank,
            name: draft.name,
            score,
        });
    }

    tracing::debug!(entries = entries.len(), "Report verified");
    Ok(ReportCheck {
        title: scan.title.unwrap_or_default(),
        entries,
    })
}

/// Read and verify a report file.
pub fn verify_file(path: &Path) -> Result<ReportCheck> {
    if !path.is_file() {
        return Err(Error::missing_input("report", path));
    }
    let markdown = std::fs::read_to_string(path).map_err(|e| Error::io(e, path))?;
    verify_report(&markdown)
}
