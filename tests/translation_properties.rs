//! 翻译函数的外部可观察行为测试

use std::path::Path;

use minion_translator::oracle::{Dictionaries, Oracle};
use minion_translator::tokenizer::TokenizerStrategy;
use minion_translator::translator::Translator;

fn oracle(pairs: &[(&str, &str)]) -> Oracle {
    pairs.iter().copied().collect()
}

fn translator() -> Translator {
    Translator::new().unwrap()
}

#[test]
fn test_empty_text_translates_to_empty() {
    let oracle = oracle(&[("hello", "bello")]);
    assert_eq!(translator().translate("", &oracle, TokenizerStrategy::Regex), "");
}

#[test]
fn test_known_word_substituted() {
    let oracle = oracle(&[("hello", "bello")]);
    assert_eq!(
        translator().translate("hello world", &oracle, TokenizerStrategy::Regex),
        "bello world"
    );
}

#[test]
fn test_punctuation_attached_without_space() {
    let oracle = oracle(&[("hello", "bello"), ("world", "wurld")]);
    assert_eq!(
        translator().translate("Hello, World!", &oracle, TokenizerStrategy::Regex),
        "bello, wurld!"
    );
}

#[test]
fn test_apostrophe_word_substituted() {
    let oracle = oracle(&[("it's", "eet's")]);
    assert_eq!(
        translator().translate("it's fine", &oracle, TokenizerStrategy::Regex),
        "eet's fine"
    );
}

#[test]
fn test_unknown_word_passthrough() {
    let oracle = oracle(&[("hello", "bello")]);
    assert_eq!(
        translator().translate("xyz123 hello", &oracle, TokenizerStrategy::Regex),
        "xyz123 bello"
    );
}

#[test]
fn test_empty_oracle_normalizes_text() {
    let empty = Oracle::default();
    let translator = translator();
    assert_eq!(
        translator.translate("  Hello \t  there!  ", &empty, TokenizerStrategy::Regex),
        "hello there!"
    );
    assert_eq!(
        translator.translate("50% off @ store", &empty, TokenizerStrategy::Regex),
        "50 off store"
    );
}

#[test]
fn test_punctuation_only_input() {
    let empty = Oracle::default();
    assert_eq!(translator().translate("?!", &empty, TokenizerStrategy::Regex), "?!");
}

#[test]
fn test_oracles_need_not_be_inverse() {
    let eng2min = oracle(&[("hi", "bello"), ("hello", "bello")]);
    let min2eng = oracle(&[("bello", "hello")]);
    let translator = translator();

    let minion = translator.translate("hi there", &eng2min, TokenizerStrategy::Regex);
    assert_eq!(minion, "bello there");
    let back = translator.translate(&minion, &min2eng, TokenizerStrategy::Regex);
    assert_eq!(back, "hello there");
}

#[test]
fn test_linguistic_strategy_splits_contractions() {
    let empty = Oracle::default();
    assert_eq!(
        translator().translate("I don't know.", &empty, TokenizerStrategy::Linguistic),
        "i do n't know."
    );
}

#[test]
fn test_convenience_function() {
    let oracle = oracle(&[("hello", "bello")]);
    assert_eq!(
        minion_translator::translate("Hello!", &oracle, false),
        "bello!"
    );
    assert_eq!(
        minion_translator::translate("Hello!", &oracle, true),
        "bello!"
    );
}

#[test]
fn test_convenience_function_shared_across_threads() {
    let oracle = oracle(&[("banana", "banana"), ("apple", "bapple")]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let oracle = oracle.clone();
            std::thread::spawn(move || minion_translator::translate("Apple, banana!", &oracle, false))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), "bapple, banana!");
    }
}

#[test]
fn test_bundled_dictionaries() {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
    let dictionaries = Dictionaries::load(&dir).unwrap();
    let translator = translator();

    assert_eq!(
        translator.translate("Hello, friends!", &dictionaries.eng2min, TokenizerStrategy::Regex),
        "bello, buddies!"
    );
    assert_eq!(
        translator.translate("Tank yu, bapu", &dictionaries.min2eng, TokenizerStrategy::Regex),
        "thank you, boss"
    );
}
