/// Cue filtering and duplicate suppression
///
/// Auto-generated caption tracks re-render the same utterance across
/// consecutive cues, growing or shrinking a rolling text window. The
/// pass here keeps one copy of each utterance: exact repeats are
/// dropped, a cue contained in the last emitted line is dropped, and a
/// cue that extends the last emitted line replaces it.
use std::collections::HashSet;

use crate::vtt::Cue;

/// Cues whose start falls inside the half-open interval [start, end)
pub fn cues_in_range(cues: &[Cue], start: f64, end: f64) -> Vec<&Cue> {
    cues.iter()
        .filter(|c| start <= c.start_seconds && c.start_seconds < end)
        .collect()
}

/// Collapse repeats into an ordered sequence of unique lines.
///
/// Cues are processed in start-time order. The substring heuristic is
/// intentionally approximate: it assumes progressive caption
/// refinement and can misfire on short, naturally-repeating phrases.
/// Idempotent: feeding the output back through changes nothing.
pub fn dedupe_cues(cues: &[&Cue]) -> Vec<String> {
    let mut sorted: Vec<&Cue> = cues.to_vec();
    sorted.sort_by(|a, b| {
        a.start_seconds
            .partial_cmp(&b.start_seconds)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut lines: Vec<String> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for cue in sorted {
        let text = cue.text.trim();
        if text.is_empty() || seen.contains(text) {
            continue;
        }

        if let Some(last) = lines.last_mut() {
            // Shrinking rolling window: already covered by the last line
            if last.contains(text) {
                continue;
            }
            // Growing rolling window: the last line was a fragment of this one
            if text.contains(last.as_str()) {
                seen.insert(text.to_string());
                *last = text.to_string();
                continue;
            }
        }

        seen.insert(text.to_string());
        lines.push(text.to_string());
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cues(entries: &[(f64, &str)]) -> Vec<Cue> {
        entries
            .iter()
            .map(|(t, text)| Cue::new(*t, *text))
            .collect()
    }

    #[test]
    fn test_range_filter_is_half_open() {
        let all = cues(&[(0.0, "a"), (5.0, "b"), (9.9, "c"), (10.0, "d")]);
        let filtered = cues_in_range(&all, 5.0, 10.0);
        let texts: Vec<&str> = filtered.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["b", "c"]);
    }

    #[test]
    fn test_exact_repeat_dropped() {
        let all = cues(&[(0.0, "same line"), (1.0, "other"), (2.0, "same line")]);
        let lines = dedupe_cues(&all.iter().collect::<Vec<_>>());
        assert_eq!(lines, vec!["same line", "other"]);
    }

    #[test]
    fn test_shrinking_window_dropped() {
        let all = cues(&[(0.0, "the full sentence here"), (1.0, "sentence here")]);
        let lines = dedupe_cues(&all.iter().collect::<Vec<_>>());
        assert_eq!(lines, vec!["the full sentence here"]);
    }

    #[test]
    fn test_growing_window_supersedes() {
        let all = cues(&[(0.0, "AI cod"), (1.0, "AI coding is fun.")]);
        let lines = dedupe_cues(&all.iter().collect::<Vec<_>>());
        assert_eq!(lines, vec!["AI coding is fun."]);
    }

    #[test]
    fn test_progressive_refinement_chain() {
        let all = cues(&[
            (0.0, "Hello"),
            (1.0, "Hello world"),
            (2.5, "Hello world."),
            (10.0, "Goodbye."),
        ]);
        let lines = dedupe_cues(&all.iter().collect::<Vec<_>>());
        assert_eq!(lines, vec!["Hello world.", "Goodbye."]);
    }

    #[test]
    fn test_out_of_order_cues_sorted_first() {
        let all = cues(&[(5.0, "second"), (1.0, "first")]);
        let lines = dedupe_cues(&all.iter().collect::<Vec<_>>());
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_idempotent() {
        let all = cues(&[
            (0.0, "Hello"),
            (1.0, "Hello world"),
            (2.0, "unrelated line"),
            (3.0, "Hello world"),
        ]);
        let refs: Vec<&Cue> = all.iter().collect();
        let once = dedupe_cues(&refs);

        let as_cues: Vec<Cue> = once
            .iter()
            .enumerate()
            .map(|(i, text)| Cue::new(i as f64, text.clone()))
            .collect();
        let twice = dedupe_cues(&as_cues.iter().collect::<Vec<_>>());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input() {
        assert!(dedupe_cues(&[]).is_empty());
    }
}
