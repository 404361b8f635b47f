//! Splits a free-text standup update into its sections.
//!
//! Recognises the usual "Yesterday: / Today: / Blockers:" style headers at
//! the start of a line, case-insensitively. Lines without a header continue
//! the section above them.

use serde::{Deserialize, Serialize};

/// Sections extracted from a standup message. Missing sections are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedStandup {
    pub yesterday_work: String,
    pub today_plan: String,
    pub blockers: String,
    pub additional_notes: String,
}

impl ParsedStandup {
    /// True when no section, notes included, has any content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.yesterday_work.is_empty()
            && self.today_plan.is_empty()
            && self.blockers.is_empty()
            && self.additional_notes.is_empty()
    }

    const fn section_mut(&mut self, section: Section) -> &mut String {
        match section {
            Section::Yesterday => &mut self.yesterday_work,
            Section::Today => &mut self.today_plan,
            Section::Blockers => &mut self.blockers,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Yesterday,
    Today,
    Blockers,
}

const YESTERDAY_PREFIXES: &[&str] = &[
    "yesterday:",
    "yesterday i",
    "completed:",
    "done:",
    "finished:",
    "worked on:",
    "yesterday's work:",
    "what i did:",
];

const TODAY_PREFIXES: &[&str] = &[
    "today:",
    "today i",
    "planning:",
    "will do:",
    "going to:",
    "today's plan:",
    "next:",
    "working on:",
];

const BLOCKER_PREFIXES: &[&str] = &[
    "blockers:",
    "blocked:",
    "blocker:",
    "issues:",
    "problems:",
    "stuck:",
    "need help:",
    "impediments:",
];

/// Find the section header a line opens with, returning the remaining text.
fn match_header(line: &str) -> Option<(Section, &str)> {
    let tables = [
        (Section::Yesterday, YESTERDAY_PREFIXES),
        (Section::Today, TODAY_PREFIXES),
        (Section::Blockers, BLOCKER_PREFIXES),
    ];

    tables.into_iter().find_map(|(section, prefixes)| {
        prefixes.iter().find_map(|prefix| {
            let head = line.get(..prefix.len())?;
            if head.eq_ignore_ascii_case(prefix) {
                line.get(prefix.len()..).map(|rest| (section, rest.trim()))
            } else {
                None
            }
        })
    })
}

fn append(target: &mut String, text: &str) {
    if text.is_empty() {
        return;
    }
    if !target.is_empty() {
        target.push(' ');
    }
    target.push_str(text);
}

/// Parse a standup message posted to Slack or typed into a form.
///
/// Text before the first recognised header is ignored. If no header is
/// found at all, the whole message is returned as `additional_notes`.
#[must_use]
pub fn parse_standup_message(message: &str) -> ParsedStandup {
    let mut parsed = ParsedStandup::default();
    let mut current: Option<Section> = None;

    for line in message.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some((section, rest)) = match_header(line) {
            current = Some(section);
            let target = parsed.section_mut(section);
            // A repeated header starts the section over.
            if !rest.is_empty() {
                rest.clone_into(target);
            }
        } else if let Some(section) = current {
            append(parsed.section_mut(section), line);
        }
    }

    if parsed.is_empty() {
        parsed.additional_notes = message.to_string();
    }

    parsed
}
