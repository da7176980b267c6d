/// Chapter markers and time-range resolution
///
/// Callers request transcripts for named points in the media timeline,
/// often without explicit end times. Resolution turns those markers
/// into sorted half-open ranges, inferring missing ends from the full
/// chapter list when available, from the next requested marker
/// otherwise, and from the total duration as a last resort.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::FormatError;
use crate::timestamp::{format_seconds, TimeValue};

/// Trailing buffer added to non-final chapter ends, in seconds.
/// Auto-captions often run slightly past the chapter boundary.
pub const CHAPTER_END_BUFFER_SECS: f64 = 2.0;

/// A named point in the media timeline, optionally with an explicit end
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChapterMarker {
    /// Start time: "H:MM:SS", "M:SS" or bare seconds
    #[serde(alias = "start_time")]
    pub start: TimeValue,
    /// Chapter title
    pub title: String,
    /// Optional explicit end time
    #[serde(default, alias = "end_time", skip_serializing_if = "Option::is_none")]
    pub end: Option<TimeValue>,
}

impl ChapterMarker {
    /// Create a marker without an explicit end
    pub fn new(start: impl Into<TimeValue>, title: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            title: title.into(),
            end: None,
        }
    }

    /// Create a marker with an explicit end
    pub fn with_end(
        start: impl Into<TimeValue>,
        title: impl Into<String>,
        end: impl Into<TimeValue>,
    ) -> Self {
        Self {
            start: start.into(),
            title: title.into(),
            end: Some(end.into()),
        }
    }
}

/// A chapter marker resolved to a concrete half-open time interval
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResolvedChapterRange {
    /// Start time in seconds, inclusive
    pub start: f64,
    /// End time in seconds, exclusive
    pub end: f64,
    /// Chapter title
    pub title: String,
}

/// Synthetic whole-video marker used when a video has no chapter metadata
pub fn full_video_marker(duration: f64, video_title: Option<&str>) -> ChapterMarker {
    ChapterMarker::with_end(0.0, video_title.unwrap_or("Full Video"), duration)
}

/// Format markers as "{time} - {title}" lines for display
pub fn format_chapter_list(markers: &[ChapterMarker]) -> String {
    markers
        .iter()
        .map(|m| format!("{} - {}", format_seconds(m.start.to_seconds()), m.title))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Resolve requested markers into sorted half-open time ranges.
///
/// Marker boundaries are normalized strictly up front: a start or end
/// value that cannot be parsed aborts the call with `FormatError`. End
/// times are taken verbatim when explicit; otherwise the full chapter
/// list (`all_chapters`, matched by start and title) supplies the next
/// chapter's start, falling back to the next requested marker and
/// finally to `duration`. Every non-final range gets a trailing buffer
/// of `CHAPTER_END_BUFFER_SECS`, capped at `duration`.
///
/// An empty marker list yields a single range covering the whole video,
/// titled from `video_title`.
pub fn resolve_ranges(
    markers: &[ChapterMarker],
    duration: f64,
    all_chapters: Option<&[ChapterMarker]>,
    video_title: Option<&str>,
) -> Result<Vec<ResolvedChapterRange>, FormatError> {
    if markers.is_empty() {
        return Ok(vec![ResolvedChapterRange {
            start: 0.0,
            end: duration,
            title: video_title.unwrap_or("Full Video").to_string(),
        }]);
    }

    // Normalize caller-supplied boundaries before any other work
    let mut parsed: Vec<(f64, Option<f64>, &ChapterMarker)> = Vec::with_capacity(markers.len());
    for marker in markers {
        let start = marker.start.to_seconds_strict()?;
        let end = marker
            .end
            .as_ref()
            .map(|e| e.to_seconds_strict())
            .transpose()?;
        parsed.push((start, end, marker));
    }
    parsed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

    // Full chapter list is context, not caller input: parse leniently
    let context: Option<Vec<(f64, &str)>> = all_chapters.map(|chapters| {
        let mut ctx: Vec<(f64, &str)> = chapters
            .iter()
            .map(|c| (c.start.to_seconds(), c.title.as_str()))
            .collect();
        ctx.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));
        ctx
    });

    let last_idx = parsed.len() - 1;
    let mut ranges = Vec::with_capacity(parsed.len());

    for (idx, (start, explicit_end, marker)) in parsed.iter().enumerate() {
        let mut end = match explicit_end {
            Some(e) => *e,
            None => {
                let from_context = context.as_deref().and_then(|ctx| {
                    ctx.iter()
                        .position(|(s, title)| *s == *start && *title == marker.title)
                        .map(|pos| {
                            if pos + 1 < ctx.len() {
                                ctx[pos + 1].0
                            } else {
                                duration
                            }
                        })
                });

                match from_context {
                    Some(e) => e,
                    None if idx < last_idx => parsed[idx + 1].0,
                    None => duration,
                }
            }
        };

        if idx < last_idx {
            end = (end + CHAPTER_END_BUFFER_SECS).min(duration);
        }

        debug!(
            "Resolved chapter '{}' to [{:.3}, {:.3})",
            marker.title, start, end
        );
        ranges.push(ResolvedChapterRange {
            start: *start,
            end,
            title: marker.title.clone(),
        });
    }

    Ok(ranges)
}
