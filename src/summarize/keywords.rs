//! Fixed keyword list used for sentence scoring.
//!
//! Lowercase phrases matched as case-insensitive substrings. Each match adds
//! the same weight, so a sentence hitting several groups accumulates score.

pub(super) const SCORING_KEYWORDS: &[&str] = &[
    // Importance markers
    "important",
    "key",
    "main",
    "significant",
    "essential",
    "critical",
    "crucial",
    "fundamental",
    "vital",
    "primary",
    // Sequence and structure
    "first",
    "second",
    "third",
    "finally",
    "next",
    "then",
    "last",
    "to begin",
    "to start",
    // Attention phrases
    "remember",
    "note that",
    "keep in mind",
    "pay attention",
    "focus on",
    "don't forget",
    "notably",
    "in particular",
    // Content introductions
    "the point is",
    "in summary",
    "to summarize",
    "in conclusion",
    "basically",
    "essentially",
    "in other words",
    "this means",
    "the idea is",
    "what this means",
    // Action imperatives
    "you should",
    "you need",
    "you must",
    "make sure",
    "be sure to",
    "you can",
    "let's",
    "we need",
    "try to",
];
