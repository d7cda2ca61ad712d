//! Detailed summarization.
//!
//! Condenses a transcript by sampling its beginning, middle, and end, then
//! trimming the draft down to an adaptive word budget.

const MIN_SENTENCE_LEN: usize = 10;
const CHARS_PER_WORD: usize = 5;

/// Build a condensed summary body from a transcript.
///
/// Returns `None` when no sentence survives the length filter. The caller
/// owns the section header; this returns the bare draft.
pub(super) fn detailed_summary(transcript: &str) -> Option<String> {
    let sentences: Vec<&str> = transcript
        .split('.')
        .map(str::trim)
        .filter(|s| s.len() > MIN_SENTENCE_LEN)
        .collect();

    if sentences.is_empty() {
        return None;
    }

    let target_words = target_word_budget(transcript.split_whitespace().count());

    let total = sentences.len();
    let window = (total as f64 * 0.2).ceil() as usize;
    let middle_start = (total as f64 * 0.4).floor() as usize;
    let middle_len = (total as f64 * 0.3).ceil() as usize;
    let middle_end = (middle_start + middle_len).min(total);

    let mut parts: Vec<&str> = Vec::new();
    parts.extend(&sentences[..window]);
    parts.extend(&sentences[middle_start..middle_end]);
    parts.extend(&sentences[total - window..]);
    parts.retain(|s| !s.is_empty());

    let draft = parts.join(". ");

    if draft.len() > target_words * CHARS_PER_WORD {
        let truncated: Vec<&str> = draft.split(' ').take(target_words).collect();
        let truncated = truncated.join(" ");
        if truncated.ends_with('.') {
            Some(truncated)
        } else {
            Some(format!("{}...", truncated))
        }
    } else {
        Some(draft)
    }
}

/// Adaptive word budget: short transcripts keep a larger share.
fn target_word_budget(total_words: usize) -> usize {
    if total_words < 500 {
        total_words * 2 / 5
    } else if total_words < 2000 {
        (total_words * 3 / 10).min(400)
    } else {
        (total_words / 5).min(500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_tiers() {
        assert_eq!(target_word_budget(100), 40);
        assert_eq!(target_word_budget(499), 199);
        assert_eq!(target_word_budget(500), 150);
        assert_eq!(target_word_budget(1999), 400);
        assert_eq!(target_word_budget(2000), 400);
        assert_eq!(target_word_budget(4000), 500);
    }

    #[test]
    fn test_splits_on_periods_only() {
        // Question marks are not sentence boundaries here.
        let text = "Does this question survive? It should stay intact. A second sentence here.";
        let draft = detailed_summary(text).unwrap();
        assert!(draft.contains("survive? It"));
    }

    #[test]
    fn test_no_meaningful_sentences() {
        assert_eq!(detailed_summary("a. b. c."), None);
        assert_eq!(detailed_summary(""), None);
    }

    #[test]
    fn test_long_transcript_truncates_with_ellipsis() {
        // 200 sentences of 7 words: a 1400-word transcript with a 400-word
        // budget, cut mid-sentence so the ellipsis is appended.
        let text = (0..200)
            .map(|i| format!("Sentence {} stretches with comfortable extra words", i))
            .collect::<Vec<_>>()
            .join(". ");

        let draft = detailed_summary(&text).unwrap();
        assert!(draft.ends_with("..."));
        assert_eq!(draft.trim_end_matches("...").split(' ').count(), 400);
    }

    #[test]
    fn test_no_ellipsis_when_cut_lands_on_period() {
        // One-word sentences make every draft token end with a period, so any
        // cut point already closes a sentence.
        let text = (0..12)
            .map(|i| format!("Abcdefghijk{}", i))
            .collect::<Vec<_>>()
            .join(". ");

        let draft = detailed_summary(&text).unwrap();
        assert!(draft.ends_with('.'));
        assert!(!draft.ends_with("..."));
    }

    #[test]
    fn test_samples_beginning_middle_end() {
        let text = (0..50)
            .map(|i| format!("Block {} holds neutral filler", i))
            .collect::<Vec<_>>()
            .join(". ");
        let draft = detailed_summary(&text).unwrap();
        // Windows cover sentences 0-9, 20-34, and 40-49; the gap is skipped.
        assert!(draft.contains("Block 0 "));
        assert!(draft.contains("Block 20 "));
        assert!(!draft.contains("Block 15 "));
    }
}
