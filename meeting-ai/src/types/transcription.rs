//! Types for transcript retrieval.

use serde::{Deserialize, Serialize};

/// Header line that opens every WebVTT document.
const WEBVTT_HEADER: &str = "WEBVTT";

/// Marker separating start and end timestamps on a WebVTT cue timing line.
const CUE_TIMING_ARROW: &str = "-->";

/// Keywords opening WebVTT blocks that carry no spoken text.
const NON_CUE_BLOCKS: [&str; 4] = [WEBVTT_HEADER, "NOTE", "STYLE", "REGION"];

/// Transcript of a single meeting as returned by a transcript provider.
///
/// The text is opaque provider output. Meeting platforms usually deliver
/// WebVTT; use [`Transcript::plain_text`] to get the spoken lines only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub meeting_id: String,
    pub text: String,
}

impl Transcript {
    pub fn new(meeting_id: &str, text: String) -> Self {
        Self {
            meeting_id: meeting_id.to_string(),
            text,
        }
    }

    /// Returns true if the transcript holds no spoken text.
    pub fn is_blank(&self) -> bool {
        self.plain_text().is_empty()
    }

    /// Returns the spoken lines of the transcript, one cue line per line.
    ///
    /// The WebVTT header, `NOTE`, `STYLE` and `REGION` blocks, cue
    /// identifiers and timing lines are dropped. Text that is not WebVTT is
    /// returned trimmed but otherwise unchanged.
    pub fn plain_text(&self) -> String {
        let text = self.text.trim_start_matches('\u{feff}').trim();
        if !text.starts_with(WEBVTT_HEADER) {
            return text.to_string();
        }

        let mut spoken = Vec::new();
        let mut block = Vec::new();
        // Blocks are separated by blank lines; the trailing "" flushes the last one
        for line in text.lines().map(str::trim).chain(std::iter::once("")) {
            if line.is_empty() {
                spoken.extend(cue_text(&block));
                block.clear();
            } else {
                block.push(line);
            }
        }

        spoken.join("\n")
    }
}

/// Payload lines of one WebVTT block, or nothing for non-cue blocks.
fn cue_text<'a>(block: &[&'a str]) -> Vec<&'a str> {
    let Some(first) = block.first() else {
        return Vec::new();
    };
    let keyword = first.split_whitespace().next().unwrap_or_default();
    if NON_CUE_BLOCKS.contains(&keyword) {
        return Vec::new();
    }

    // An optional identifier line precedes the timing line
    match block.iter().position(|line| line.contains(CUE_TIMING_ARROW)) {
        Some(timing) => block[timing + 1..].to_vec(),
        None => block.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VTT: &str = "WEBVTT\n\n1\n00:00:01.000 --> 00:00:04.000\nAlice: Hello everyone.\n\n2\n00:00:05.000 --> 00:00:07.500\nBob: Hi Alice, shall we start?\n";

    #[test]
    fn test_plain_text_strips_webvtt_framing() {
        let transcript = Transcript::new("123", VTT.to_string());
        assert_eq!(
            transcript.plain_text(),
            "Alice: Hello everyone.\nBob: Hi Alice, shall we start?"
        );
    }

    #[test]
    fn test_plain_text_keeps_non_vtt_text() {
        let transcript = Transcript::new("123", "  Just some notes.\n".to_string());
        assert_eq!(transcript.plain_text(), "Just some notes.");
    }

    #[test]
    fn test_plain_text_handles_byte_order_mark() {
        let transcript = Transcript::new("123", format!("\u{feff}{}", VTT));
        assert!(transcript.plain_text().starts_with("Alice:"));
    }

    #[test]
    fn test_header_only_transcript_is_blank() {
        assert!(Transcript::new("123", "WEBVTT\n\n".to_string()).is_blank());
        assert!(!Transcript::new("123", VTT.to_string()).is_blank());
    }

    #[test]
    fn test_plain_text_keeps_numeric_speech_and_skips_notes() {
        let vtt = "WEBVTT\n\nNOTE exported by the recorder\nsecond note line\n\nSTYLE\n::cue { color: white }\n\n7\n00:00:01.000 --> 00:00:02.000\n2024\n\n00:00:03.000 --> 00:00:04.000\nAlice: 2024 was a good year.\n";
        let transcript = Transcript::new("123", vtt.to_string());

        assert_eq!(transcript.plain_text(), "2024\nAlice: 2024 was a good year.");
    }
}
