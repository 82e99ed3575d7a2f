//! Built-in rule constants

/// Minimum words before a bullet may be closed
pub const MIN_WORDS: usize = 20;

/// Word count at which a bullet is closed immediately
pub const MAX_WORDS: usize = 45;

/// Sentences with fewer words always join the current bullet
pub const SHORT_SENTENCE_WORDS: usize = 6;

/// A sentence is long when it has at least `MIN_WORDS / LONG_SENTENCE_DIVISOR` words
pub const LONG_SENTENCE_DIVISOR: f64 = 1.2;

/// Bullets under `MERGE_RATIO * MIN_WORDS` words fold into their predecessor
pub const MERGE_RATIO: f64 = 0.6;

/// Leading tokens inspected for a transition starter
pub const TRANSITION_WINDOW: usize = 4;

/// Phrases that mark a concluding sentence
pub const CONCLUSION_PHRASES: &[&str] = &[
    "in conclusion",
    "to conclude",
    "to summarize",
    "to summarise",
    "in summary",
    "to sum up",
    "summing up",
    "overall",
    "finally",
    "ultimately",
    "in short",
    "in sum",
    "all in all",
    "in the end",
    "taken together",
    "all things considered",
    "in closing",
];

/// Phrases that open a new line of thought
pub const TRANSITION_STARTERS: &[&str] = &[
    "however",
    "additionally",
    "meanwhile",
    "notably",
    "furthermore",
    "moreover",
    "in addition",
    "on the other hand",
    "in contrast",
    "by contrast",
    "conversely",
    "separately",
    "elsewhere",
    "similarly",
    "nevertheless",
    "nonetheless",
    "despite this",
    "at the same time",
    "beyond that",
    "as a result",
    "consequently",
];

/// Abbreviations that always precede a name
pub const TITLE_ABBREVIATIONS: &[&str] = &[
    "Mr", "Mrs", "Ms", "Dr", "Prof", "Sr", "Jr", "St", "Gen", "Gov", "Sen", "Rep", "Rev", "Capt",
    "Lt", "Col", "Sgt", "Pres",
];

/// Abbreviations that may also end a sentence
pub const TERM_ABBREVIATIONS: &[&str] = &[
    "U.S", "U.K", "U.N", "E.U", "e.g", "i.e", "etc", "vs", "approx", "est", "Inc", "Corp", "Ltd",
    "Co", "No", "Jan", "Feb", "Mar", "Apr", "Aug", "Sept", "Sep", "Oct", "Nov", "Dec", "a.m",
    "p.m",
];
