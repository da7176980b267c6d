/// Transcript assembly
///
/// The front door of the engine: raw caption text in, finished
/// transcript out. With chapter markers the output is one "## {title}"
/// section per range that yields content; without markers the cues are
/// stitched into sentences and deduplicated as one flat document.
use std::collections::HashSet;

use tracing::debug;

use crate::chapters::{resolve_ranges, ChapterMarker, ResolvedChapterRange};
use crate::dedupe::{cues_in_range, dedupe_cues};
use crate::error::FormatError;
use crate::vtt::{extract_cues, Cue};

/// Inputs for one transcript rendering call
#[derive(Debug, Clone, Default)]
pub struct TranscriptOptions {
    /// Requested chapters; empty means a flat, unsectioned transcript
    pub chapters: Vec<ChapterMarker>,
    /// Full chapter list from the source video, for end-time lookup
    /// when only a subset of chapters was requested
    pub all_chapters: Option<Vec<ChapterMarker>>,
    /// Total media duration in seconds
    pub duration: f64,
    /// Video title, used for the synthesized whole-video range
    pub video_title: Option<String>,
}

/// Render a transcript from a raw caption blob.
///
/// Fails only when a caller-supplied chapter boundary cannot be
/// parsed; malformed cues inside the blob are skipped. An empty
/// result is not an error, the caller decides how to report it.
pub fn render_transcript(raw: &str, options: &TranscriptOptions) -> Result<String, FormatError> {
    let cues = extract_cues(raw);
    debug!("Extracted {} cues", cues.len());

    if options.chapters.is_empty() {
        return Ok(flat_transcript(&cues));
    }

    let ranges = resolve_ranges(
        &options.chapters,
        options.duration,
        options.all_chapters.as_deref(),
        options.video_title.as_deref(),
    )?;
    Ok(chaptered_transcript(&cues, &ranges))
}

/// One "## {title}\n{body}" section per range with content.
///
/// Ranges that match no cues are omitted entirely rather than rendered
/// as empty headers. Sections are joined with a blank line.
pub fn chaptered_transcript(cues: &[Cue], ranges: &[ResolvedChapterRange]) -> String {
    let mut sections = Vec::new();

    for range in ranges {
        let filtered = cues_in_range(cues, range.start, range.end);
        let body = dedupe_cues(&filtered).join("\n");
        if body.is_empty() {
            debug!("Chapter '{}' matched no cues, omitting", range.title);
            continue;
        }
        sections.push(format!("## {}\n{}", range.title, body));
    }

    sections.join("\n\n")
}

/// Flat transcript: sentence accumulation plus duplicate suppression.
///
/// Cue fragments concatenate until one ends in '.', '!' or '?'; each
/// completed sentence then goes through the same seen-set and
/// substring rules as chaptered ranges. A final pass drops any line
/// that survives only as a substring of another retained line, to
/// catch cross-sentence duplication the rolling window missed. That
/// pass is quadratic, which is fine at transcript scale (hundreds of
/// lines, not millions).
pub fn flat_transcript(cues: &[Cue]) -> String {
    let mut lines: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut current = String::new();

    for cue in cues {
        let text = cue.text.trim();
        if text.is_empty() {
            continue;
        }

        // Rolling-window repeat of what was just emitted
        if lines.last().map_or(false, |last| last.contains(text)) {
            continue;
        }

        if text.ends_with('.') || text.ends_with('!') || text.ends_with('?') {
            let sentence = if current.is_empty() {
                text.to_string()
            } else {
                format!("{} {}", current, text)
            };
            current.clear();
            push_sentence(&mut lines, &mut seen, sentence);
        } else if current.is_empty() {
            current = text.to_string();
        } else {
            current.push(' ');
            current.push_str(text);
        }
    }

    // Trailing fragment with no terminator
    if !current.is_empty() {
        push_sentence(&mut lines, &mut seen, current);
    }

    // Cross-sentence duplicates the rolling window missed
    let mut retained = Vec::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        let is_substring = lines
            .iter()
            .enumerate()
            .any(|(j, other)| i != j && other.contains(line.as_str()));
        if !is_substring {
            retained.push(line.clone());
        }
    }

    retained.join("\n")
}

fn push_sentence(lines: &mut Vec<String>, seen: &mut HashSet<String>, sentence: String) {
    if seen.contains(&sentence) {
        return;
    }
    if let Some(last) = lines.last_mut() {
        if last.contains(sentence.as_str()) {
            return;
        }
        if sentence.contains(last.as_str()) {
            seen.insert(sentence.clone());
            *last = sentence;
            return;
        }
    }
    seen.insert(sentence.clone());
    lines.push(sentence);
}
