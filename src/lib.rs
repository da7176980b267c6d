/// Caption Transcript Engine
///
/// Timed-caption segmentation and deduplication: turns raw WebVTT-style
/// caption streams plus optional chapter markers into clean,
/// non-redundant transcripts, either flat or sectioned per chapter.
/// Pure functions over their inputs; retrieval of caption tracks and
/// video metadata is the caller's job.

pub mod chapters;
pub mod dedupe;
pub mod error;
pub mod timestamp;
pub mod transcript;
pub mod vtt;

// Re-export main types for easy access
pub use crate::chapters::{
    format_chapter_list, full_video_marker, resolve_ranges, ChapterMarker, ResolvedChapterRange,
    CHAPTER_END_BUFFER_SECS,
};
pub use crate::dedupe::{cues_in_range, dedupe_cues};
pub use crate::error::FormatError;
pub use crate::timestamp::{format_seconds, parse_clock, TimeValue};
pub use crate::transcript::{
    chaptered_transcript, flat_transcript, render_transcript, TranscriptOptions,
};
pub use crate::vtt::{clean_caption_text, extract_cues, Cue};
