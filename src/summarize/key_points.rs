//! Key-points extraction.
//!
//! Scores sentences with a fixed keyword list plus positional and length
//! bonuses, then greedily picks a spread of high scorers.

use super::keywords::SCORING_KEYWORDS;

const MAX_POINTS: usize = 5;
const MIN_SENTENCE_LEN: usize = 10;
const MAX_SENTENCE_LEN: usize = 200;
const MIN_INDEX_GAP: usize = 3;

/// A sentence with its score and position in the filtered sequence.
struct ScoredSentence {
    score: u32,
    index: usize,
}

/// Build a numbered key-points summary from a transcript.
///
/// Returns `None` when no sentence survives the length filter.
pub(super) fn key_points_summary(transcript: &str) -> Option<String> {
    let sentences = split_sentences(transcript);
    if sentences.is_empty() {
        return None;
    }

    let total = sentences.len();
    let mut scored: Vec<ScoredSentence> = sentences
        .iter()
        .enumerate()
        .map(|(index, text)| ScoredSentence {
            score: score_sentence(text, index, total),
            index,
        })
        .collect();

    // Highest score first; earlier sentence wins ties.
    scored.sort_by(|a, b| b.score.cmp(&a.score).then(a.index.cmp(&b.index)));

    let mut selected = select_diverse(&scored);
    if selected.is_empty() {
        selected = representative_indices(total);
    }
    if selected.is_empty() {
        let opening: Vec<&str> = sentences.iter().take(3).copied().collect();
        return Some(format!("{}.", opening.join(". ")));
    }

    // Emit in transcript order, not score order.
    selected.sort_unstable();

    let body: Vec<String> = selected
        .iter()
        .enumerate()
        .map(|(n, &index)| format!("{}. {}", n + 1, sentences[index]))
        .collect();

    Some(format!("## Key Points\n\n{}", body.join("\n")))
}

/// Split on terminal punctuation and keep mid-length sentences.
fn split_sentences(transcript: &str) -> Vec<&str> {
    transcript
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.len() > MIN_SENTENCE_LEN && s.len() < MAX_SENTENCE_LEN)
        .collect()
}

/// Score a single sentence.
fn score_sentence(sentence: &str, index: usize, total: usize) -> u32 {
    let lowered = sentence.to_lowercase();
    let mut score = 0;

    for keyword in SCORING_KEYWORDS {
        if lowered.contains(keyword) {
            score += 3;
        }
    }

    // Bands checked in order: opening, closing, middle.
    let position = index as f64 / total as f64;
    if position < 0.2 {
        score += 2;
    } else if position > 0.8 {
        score += 2;
    } else if position > 0.4 && position < 0.6 {
        score += 1;
    }

    let words = sentence.split(' ').count();
    if (8..=25).contains(&words) {
        score += 1;
    }

    score
}

/// Walk the score-sorted list once, skipping candidates whose original index
/// lies within `MIN_INDEX_GAP` of an already-selected one.
fn select_diverse(scored: &[ScoredSentence]) -> Vec<usize> {
    let mut selected: Vec<usize> = Vec::new();

    for candidate in scored {
        if selected.len() == MAX_POINTS {
            break;
        }
        if selected
            .iter()
            .any(|&index| index.abs_diff(candidate.index) <= MIN_INDEX_GAP)
        {
            continue;
        }
        selected.push(candidate.index);
    }

    selected
}

/// Indices spread evenly across the transcript: first, ~25%, ~50%, ~75%, last.
fn representative_indices(total: usize) -> Vec<usize> {
    let mut indices = vec![0, total / 4, total / 2, (3 * total) / 4, total - 1];
    indices.sort_unstable();
    indices.dedup();
    indices
}
