use nova_core::{respond, FaqRecord, KnowledgeBase, FALLBACK_ANSWER};

fn init_logging() {
    nova_logging::initialize_for_tests();
}

#[test]
fn company_question_gets_company_answer() {
    init_logging();
    let answer = respond("what is nova");
    assert!(answer.starts_with("NOVA Aerospace is a pioneering space technology company"));
}

#[test]
fn cost_question_gets_pricing_answer() {
    init_logging();
    let kb = KnowledgeBase::nova();
    let found = kb.best_match("how much does nova cost").expect("match");

    assert_eq!(found.record.question, "cost");
    assert_eq!(found.score, 3);
    assert!(respond("how much does nova cost").starts_with("Our plans start at $999/month"));
}

#[test]
fn punctuation_and_case_are_ignored() {
    let kb = KnowledgeBase::nova();
    assert_eq!(
        kb.respond("What is NOVA???"),
        kb.respond("what is nova"),
    );
}

#[test]
fn unrelated_input_gets_fallback() {
    assert_eq!(respond("zzqq"), FALLBACK_ANSWER);
    assert!(KnowledgeBase::nova().best_match("zzqq").is_none());
}

#[test]
fn empty_and_symbol_only_input_gets_fallback() {
    assert_eq!(respond(""), FALLBACK_ANSWER);
    assert_eq!(respond("?!...   "), FALLBACK_ANSWER);
}

#[test]
fn answers_are_never_empty() {
    for input in ["", "nova", "quantum propulsion", "where is your location", "zzqq", "ß∂ƒ"] {
        assert!(!respond(input).is_empty(), "empty answer for {input:?}");
    }
}

#[test]
fn equal_scores_keep_the_earlier_record() {
    let kb = KnowledgeBase::new(vec![
        FaqRecord::new("first", "first answer").with_keywords(["launch"]),
        FaqRecord::new("second", "second answer").with_keywords(["launch"]),
    ]);
    assert_eq!(kb.respond("launch window"), "first answer");
}

#[test]
fn strictly_higher_later_score_wins() {
    let kb = KnowledgeBase::new(vec![
        FaqRecord::new("first", "first answer").with_keywords(["launch"]),
        FaqRecord::new("second", "second answer").with_keywords(["launch", "window"]),
    ]);
    assert_eq!(kb.respond("launch window"), "second answer");
}

#[test]
fn question_phrase_outscores_single_keyword() {
    let kb = KnowledgeBase::nova();
    let found = kb.best_match("tell me about neural navigation").expect("match");
    assert_eq!(found.record.question, "neural navigation");
    assert_eq!(found.score, 2);
}

#[test]
fn empty_answer_falls_back() {
    let kb = KnowledgeBase::new(vec![FaqRecord::new("silence", "")]);
    assert_eq!(kb.respond("silence"), FALLBACK_ANSWER);
}
