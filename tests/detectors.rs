use pretty_assertions::assert_eq;
use prose_lint::{
    FindingKind, Lexicon, LintError, Linter, Match, detect_duplicate_words, detect_passive_voice,
    detect_weasel_words, lint, lint_batch, remove_all_duplicates, remove_duplicate_word,
};

fn spans(found: &[Match]) -> Vec<(&str, usize, usize)> {
    found
        .iter()
        .map(|m| (m.matched_text.as_str(), m.index, m.length))
        .collect()
}

#[test]
fn weasel_word_at_offset() {
    let found = detect_weasel_words("there are several issues");
    assert_eq!(spans(&found), vec![("several", 10, 7)]);
}

#[test]
fn weasel_words_keep_original_casing() {
    let found = detect_weasel_words("Many cats, many dogs, MANY birds");
    assert_eq!(
        spans(&found),
        vec![("Many", 0, 4), ("many", 11, 4), ("MANY", 22, 4)]
    );
}

#[test]
fn weasel_matches_are_sorted_and_disjoint() {
    let text = "It is a number of very, very vast and basically huge, pretty much tiny things. \
                Perhaps it is quite literally the most remarkably excellent sort of thing.";
    let found = detect_weasel_words(text);
    assert!(found.len() > 10);
    for pair in found.windows(2) {
        assert!(pair[0].end() <= pair[1].index);
    }
    for m in &found {
        assert_eq!(&text[m.range()], m.matched_text);
    }
    assert_eq!(found[0].matched_text, "is a number");
}

#[test]
fn weasel_empty_input() {
    assert!(detect_weasel_words("").is_empty());
    assert!(detect_weasel_words("  \r\n ... ").is_empty());
}

#[test]
fn passive_empty_input() {
    assert!(detect_passive_voice("").is_empty());
    assert!(detect_passive_voice(" \r\n ").is_empty());
}

#[test]
fn passive_regular_participle() {
    let found = detect_passive_voice("the ball was thrown");
    assert_eq!(spans(&found), vec![("was thrown", 9, 10)]);

    let found = detect_passive_voice("The door is opened daily");
    assert_eq!(spans(&found), vec![("is opened", 9, 9)]);
}

#[test]
fn passive_irregular_participle() {
    let found = detect_passive_voice("it is written");
    assert_eq!(spans(&found), vec![("is written", 3, 10)]);
}

#[test]
fn passive_rejects_present_participle() {
    assert!(detect_passive_voice("many people were walking").is_empty());
    // the -ed heuristic accepts this even though it is not passive
    let found = detect_passive_voice("many people were walked");
    assert_eq!(spans(&found), vec![("were walked", 12, 11)]);
}

#[test]
fn passive_is_case_insensitive_and_sequential() {
    let found = detect_passive_voice("It WAS Taken. They are gone and we were fooled.");
    assert_eq!(
        spans(&found),
        vec![("WAS Taken", 3, 9), ("are gone", 19, 8), ("were fooled", 35, 11)]
    );
}

#[test]
fn duplicate_reports_second_occurrence() {
    let found = detect_duplicate_words("this is is fine");
    assert_eq!(spans(&found), vec![("is", 8, 2)]);
}

#[test]
fn duplicate_ignores_case_and_keeps_second_casing() {
    let found = detect_duplicate_words("The the cat");
    assert_eq!(spans(&found), vec![("the", 4, 3)]);

    let found = detect_duplicate_words("the   THE\nthe cat");
    assert_eq!(spans(&found), vec![("THE", 6, 3), ("the", 10, 3)]);
}

#[test]
fn duplicate_triple_yields_two_matches() {
    let found = detect_duplicate_words("the the the");
    assert_eq!(spans(&found), vec![("the", 4, 3), ("the", 8, 3)]);
}

#[test]
fn duplicate_not_across_punctuation() {
    assert!(detect_duplicate_words("the, the").is_empty());
    assert!(detect_duplicate_words("").is_empty());
}

#[test]
fn remove_second_is() {
    assert_eq!(remove_duplicate_word("this is is fine", 8, 2).unwrap(), "this is fine");
}

#[test]
fn remove_rejects_out_of_range() {
    let err = remove_duplicate_word("short", 3, 5).unwrap_err();
    assert!(matches!(
        err,
        LintError::InvalidRange {
            index: 3,
            length: 5,
            text_len: 5
        }
    ));
}

#[test]
fn removing_all_findings_right_to_left_is_clean() {
    let text = "We we went to the\tthe shop and and bought bread. It it was fine.";
    let found = detect_duplicate_words(text);
    assert_eq!(found.len(), 4);

    let mut fixed = text.to_string();
    for m in found.iter().rev() {
        fixed = remove_duplicate_word(&fixed, m.index, m.length).unwrap();
    }
    assert_eq!(fixed, "We went to the shop and bought bread. It was fine.");
    assert!(detect_duplicate_words(&fixed).is_empty());
}

#[test]
fn synthetic_duplicate_round_trip() {
    for original in ["word", "Ärger", "x", "naïve", "2024"] {
        let first_word = original.split_whitespace().next().unwrap();
        let doubled = format!("{original} {first_word}");
        let found = detect_duplicate_words(&doubled);
        assert_eq!(found.len(), 1, "{doubled}");
        let fixed = remove_duplicate_word(&doubled, found[0].index, found[0].length).unwrap();
        assert_eq!(fixed, original);
    }
}

#[test]
fn remove_all_duplicates_collapses_runs() {
    assert_eq!(remove_all_duplicates("so so so so good"), "so good");
    assert_eq!(remove_all_duplicates("nothing here"), "nothing here");
}

#[test]
fn lint_tags_each_detector() {
    let findings = lint("The report was written by many many people.");
    let tagged: Vec<_> = findings
        .iter()
        .map(|f| (f.kind, f.span.matched_text.as_str()))
        .collect();
    assert_eq!(
        tagged,
        vec![
            (FindingKind::PassiveVoice, "was written"),
            (FindingKind::WeaselWord, "many"),
            (FindingKind::WeaselWord, "many"),
            (FindingKind::DuplicateWord, "many"),
        ]
    );
}

#[test]
fn lint_batch_keeps_input_order() {
    let texts = vec!["very good", "it it", "", "was made"];
    let results = lint_batch(&texts);
    assert_eq!(results.len(), 4);
    assert_eq!(results[0][0].kind, FindingKind::WeaselWord);
    assert_eq!(results[1][0].kind, FindingKind::DuplicateWord);
    assert!(results[2].is_empty());
    assert_eq!(results[3][0].kind, FindingKind::PassiveVoice);
}

#[test]
fn custom_lexicon_uses_same_rules() {
    let lexicon = Lexicon::default().with_extra_weasel_words(["to be honest"]);
    let linter = Linter::new(lexicon).unwrap();
    let found = linter.detect_weasel_words("To be honest, it was VERY good.");
    assert_eq!(spans(&found), vec![("To be honest", 0, 12), ("VERY", 21, 4)]);
    let found = linter.detect_weasel_words("To be  honest, to be\thonest, to be\nhonest");
    assert!(found.is_empty());

    let lexicon = Lexicon {
        weasel_words: vec!["really".into()],
        irregular_verbs: vec!["gone".into()],
        auxiliary_verbs: vec!["got".into()],
    };
    let linter = Linter::new(lexicon).unwrap();
    assert!(linter.detect_weasel_words("very").is_empty());
    let found = linter.detect_passive_voice("it got gone, it is taken, it got fixed");
    assert_eq!(spans(&found), vec![("got gone", 3, 8), ("got fixed", 29, 9)]);
}

#[test]
fn invalid_lexicon_is_rejected() {
    let lexicon = Lexicon {
        irregular_verbs: Vec::new(),
        ..Lexicon::default()
    };
    assert!(matches!(
        Linter::new(lexicon),
        Err(LintError::EmptyWordList {
            list: "irregular_verbs"
        })
    ));
}

#[test]
fn findings_serialize_flat() {
    let findings = lint("very");
    let json = serde_json::to_value(&findings).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "kind": "weasel_word",
            "matched_text": "very",
            "index": 0,
            "length": 4
        }])
    );
}
