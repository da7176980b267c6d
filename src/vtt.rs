/// Caption cue extraction
///
/// Parses raw WebVTT-style caption blobs into ordered, cleaned cues.
/// Auto-generated tracks carry per-word timestamp tags and emphasis
/// markup inside the text lines; both are stripped here.
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::timestamp::parse_clock;

/// A single timestamped caption entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cue {
    /// Start time in seconds from the beginning of the media
    pub start_seconds: f64,
    /// Cleaned caption text
    pub text: String,
}

impl Cue {
    /// Create a new cue
    pub fn new(start_seconds: f64, text: impl Into<String>) -> Self {
        Self {
            start_seconds,
            text: text.into(),
        }
    }
}

/// Parse a raw caption blob into ordered cues.
///
/// A line containing the `-->` separator starts a new cue; the portion
/// before the separator is its start time. Text lines follow until the
/// next timing line or a blank line. Header lines, blank lines and
/// pure numeric index lines are skipped. Timing lines that fail to
/// parse are skipped silently so one bad cue cannot abort the whole
/// transcript.
pub fn extract_cues(raw: &str) -> Vec<Cue> {
    let lines: Vec<&str> = raw.lines().collect();
    let mut cues = Vec::new();

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        let timing = match line.split_once("-->") {
            Some((before, _)) => before,
            None => {
                i += 1;
                continue;
            }
        };

        let start_seconds = match parse_clock(timing.trim()) {
            Some(s) => s,
            None => {
                debug!("Skipping malformed timing line: {}", line.trim());
                i += 1;
                continue;
            }
        };

        // Gather text lines until the next timing line or a blank line
        let mut text = String::new();
        let mut j = i + 1;
        while j < lines.len() && !lines[j].contains("-->") && !lines[j].trim().is_empty() {
            let candidate = lines[j].trim();
            if !is_index_line(candidate) {
                let cleaned = clean_caption_text(candidate);
                if !cleaned.is_empty() {
                    if !text.is_empty() {
                        text.push(' ');
                    }
                    text.push_str(&cleaned);
                }
            }
            j += 1;
        }

        if !text.is_empty() {
            cues.push(Cue::new(start_seconds, text));
        }
        i = j.max(i + 1);
    }

    cues
}

/// Strip inline markup from a caption line.
///
/// Removes per-word timestamp tags like `<00:13:50.279>` and
/// `<c>`/`</c>` emphasis tags, then collapses whitespace runs left
/// behind by tag removal.
pub fn clean_caption_text(text: &str) -> String {
    let mut cleaned = text.to_string();

    if let Ok(re) = Regex::new(r"<\d+:\d+:\d+\.\d+>") {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }
    if let Ok(re) = Regex::new(r"</?c>") {
        cleaned = re.replace_all(&cleaned, "").into_owned();
    }

    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cue index lines are a bare sequence number on their own line
fn is_index_line(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|c| c.is_ascii_digit())
}
