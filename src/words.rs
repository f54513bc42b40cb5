//! Static word lists used by the detectors.
//!
//! All entries are lowercase. Matching against input text is always
//! case-insensitive, so casing here only matters for readability.

use lazy_static::lazy_static;

/// Vague qualifiers and intensifiers.
pub const WEASEL_WORDS: &[&str] = &[
    "many",
    "various",
    "very",
    "fairly",
    "several",
    "extremely",
    "exceedingly",
    "quite",
    "remarkably",
    "few",
    "surprisingly",
    "mostly",
    "largely",
    "huge",
    "tiny",
    "are a number",
    "is a number",
    "excellent",
    "interestingly",
    "significantly",
    "substantially",
    "clearly",
    "vast",
    "relatively",
    "completely",
];

/// Hedging words appended to [`WEASEL_WORDS`].
pub const ADDITIONAL_WEASEL_WORDS: &[&str] = &[
    "virtually",
    "somewhat",
    "somehow",
    "sort of",
    "kind of",
    "rather",
    "usually",
    "basically",
    "generally",
    "pretty much",
    "arguably",
    "almost",
    "occasionally",
    "approximately",
    "nearly",
    "seemingly",
    "apparently",
    "evidently",
    "conceivably",
    "possibly",
    "probably",
    "perhaps",
    "maybe",
    "certainly",
    "definitely",
    "essentially",
    "actually",
    "literally",
    "obviously",
];

/// Irregular past participles.
pub const IRREGULAR_VERBS: &[&str] = &[
    "awoken",
    "been",
    "born",
    "beat",
    "become",
    "begun",
    "bent",
    "beset",
    "bet",
    "bid",
    "bidden",
    "bound",
    "bitten",
    "bled",
    "blown",
    "broken",
    "bred",
    "brought",
    "broadcast",
    "built",
    "burnt",
    "burst",
    "bought",
    "cast",
    "caught",
    "chosen",
    "clung",
    "come",
    "cost",
    "crept",
    "cut",
    "dealt",
    "dug",
    "dived",
    "done",
    "drawn",
    "dreamt",
    "driven",
    "drunk",
    "eaten",
    "fallen",
    "fed",
    "felt",
    "fought",
    "found",
    "fit",
    "fled",
    "flung",
    "flown",
    "forbidden",
    "forgotten",
    "foregone",
    "forgiven",
    "forsaken",
    "frozen",
    "gotten",
    "given",
    "gone",
    "ground",
    "grown",
    "hung",
    "heard",
    "hidden",
    "hit",
    "held",
    "hurt",
    "kept",
    "knelt",
    "knit",
    "known",
    "laid",
    "led",
    "leapt",
    "learnt",
    "left",
    "lent",
    "let",
    "lain",
    "lighted",
    "lost",
    "made",
    "meant",
    "met",
    "misspelt",
    "mistaken",
    "mown",
    "overcome",
    "overdone",
    "overtaken",
    "overthrown",
    "paid",
    "pled",
    "proven",
    "put",
    "quit",
    "read",
    "rid",
    "ridden",
    "rung",
    "risen",
    "run",
    "sawn",
    "said",
    "seen",
    "sought",
    "sold",
    "sent",
    "set",
    "sewn",
    "shaken",
    "shaven",
    "shorn",
    "shed",
    "shone",
    "shod",
    "shot",
    "shown",
    "shrunk",
    "shut",
    "sung",
    "sunk",
    "sat",
    "slept",
    "slain",
    "slid",
    "slung",
    "slit",
    "smitten",
    "sown",
    "spoken",
    "sped",
    "spent",
    "spilt",
    "spun",
    "spit",
    "split",
    "spread",
    "sprung",
    "stood",
    "stolen",
    "stuck",
    "stung",
    "stunk",
    "stridden",
    "struck",
    "strung",
    "striven",
    "sworn",
    "swept",
    "swollen",
    "swum",
    "swung",
    "taken",
    "taught",
    "torn",
    "told",
    "thought",
    "thrived",
    "thrown",
    "thrust",
    "trodden",
    "understood",
    "upheld",
    "upset",
    "woken",
    "worn",
    "woven",
    "wed",
    "wept",
    "wound",
    "won",
    "withheld",
    "withstood",
    "wrung",
    "written",
];

/// Forms of "to be" that introduce a passive construction.
pub const AUXILIARY_VERBS: &[&str] = &["am", "are", "were", "being", "is", "been", "was", "be"];

lazy_static! {
    /// [`WEASEL_WORDS`] followed by [`ADDITIONAL_WEASEL_WORDS`], not deduplicated.
    pub static ref ALL_WEASEL_WORDS: Vec<&'static str> = WEASEL_WORDS
        .iter()
        .chain(ADDITIONAL_WEASEL_WORDS.iter())
        .copied()
        .collect();
}
