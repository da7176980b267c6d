use anyhow::Result;
use clap::{Arg, Command};
use std::path::PathBuf;
use tracing::{info, warn};

use caption_transcript::{
    format_chapter_list, full_video_marker, render_transcript, ChapterMarker, TranscriptOptions,
};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("caption_transcript=info,warn")
        .init();

    let matches = Command::new("Caption Transcript")
        .version("0.1.0")
        .about("Segment and deduplicate timed caption streams into clean transcripts")
        .arg(
            Arg::new("captions")
                .short('c')
                .long("captions")
                .value_name("FILE")
                .help("Caption track file (WebVTT-style cue blocks)")
                .required(true),
        )
        .arg(
            Arg::new("chapters")
                .long("chapters")
                .value_name("FILE")
                .help("JSON list of chapter markers to section the transcript by"),
        )
        .arg(
            Arg::new("all-chapters")
                .long("all-chapters")
                .value_name("FILE")
                .help("JSON list of every chapter in the video, for end-time lookup"),
        )
        .arg(
            Arg::new("duration")
                .short('d')
                .long("duration")
                .value_name("SECONDS")
                .help("Total media duration in seconds")
                .default_value("0"),
        )
        .arg(
            Arg::new("title")
                .short('t')
                .long("title")
                .value_name("TITLE")
                .help("Video title, used when no chapters are available"),
        )
        .arg(
            Arg::new("list-chapters")
                .long("list-chapters")
                .help("Print the chapter list instead of a transcript")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let captions_path = PathBuf::from(matches.get_one::<String>("captions").unwrap());
    let duration: f64 = matches.get_one::<String>("duration").unwrap().parse()?;
    let video_title = matches.get_one::<String>("title").cloned();

    let chapters = load_markers(matches.get_one::<String>("chapters"))?.unwrap_or_default();
    let all_chapters = load_markers(matches.get_one::<String>("all-chapters"))?;

    if matches.get_flag("list-chapters") {
        let markers = if chapters.is_empty() {
            warn!("No chapters supplied, falling back to a single full-video chapter");
            vec![full_video_marker(duration, video_title.as_deref())]
        } else {
            chapters
        };
        println!("{}", format_chapter_list(&markers));
        return Ok(());
    }

    if !captions_path.exists() {
        return Err(anyhow::anyhow!(
            "Caption file not found: {}",
            captions_path.display()
        ));
    }

    info!("📝 Processing captions: {}", captions_path.display());
    if !chapters.is_empty() {
        info!("📑 Sectioning by {} chapters", chapters.len());
    }

    let raw = std::fs::read_to_string(&captions_path)?;
    let options = TranscriptOptions {
        chapters,
        all_chapters,
        duration,
        video_title,
    };

    let transcript = render_transcript(&raw, &options)?;

    if transcript.is_empty() {
        warn!("⚠️ No caption content matched the requested chapters");
    }
    println!("{}", transcript);

    Ok(())
}

/// Read a chapter marker list from a JSON file, if a path was given
fn load_markers(path: Option<&String>) -> Result<Option<Vec<ChapterMarker>>> {
    match path {
        Some(p) => {
            let content = std::fs::read_to_string(p)?;
            Ok(Some(serde_json::from_str(&content)?))
        }
        None => Ok(None),
    }
}
