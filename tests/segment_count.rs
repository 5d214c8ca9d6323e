// tests/segment_count.rs
//
// Segmenter + FrequencyTable on unspaced text.
//
use page_wordfreq::{
    analysis::FrequencyTable,
    core::{lexicon::Lexicon, normalize::normalize_str, segment::Segmenter},
};

fn count(seg: &Segmenter, raw: &str) -> FrequencyTable {
    let normalized = normalize_str(raw);
    FrequencyTable::from_tokens(seg.segment_str(&normalized))
}

#[test]
fn cat_sentence_counts() {
    let seg = Segmenter::new();
    let table = count(&seg, "the cat sat on the cat mat");

    assert_eq!(table.get("the"), 2);
    assert_eq!(table.get("cat"), 2);
    assert_eq!(table.get("sat"), 1);
    assert_eq!(table.get("on"), 1);
    assert_eq!(table.get("mat"), 1);
    assert_eq!(table.len(), 5);
    assert_eq!(table.total(), 7);

    // first-seen order
    let order: Vec<&str> = table.iter().map(|(t, _)| t).collect();
    assert_eq!(order, ["the", "cat", "sat", "on", "mat"]);
}

#[test]
fn unspaced_english_splits_into_words() {
    let seg = Segmenter::new();
    assert_eq!(seg.segment_str("welcometomywebsite"), ["welcome", "to", "my", "website"]);
}

#[test]
fn known_long_word_stays_whole() {
    let seg = Segmenter::new();
    assert_eq!(seg.segment_str("windows"), ["windows"]);
}

#[test]
fn unknown_word_is_not_split_into_chars() {
    let seg = Segmenter::with_lexicon(Lexicon::from_ranked(["the", "cat"]));
    let tokens = seg.segment_str("zxqvy");
    assert_eq!(tokens, ["zxqvy"]);
}

#[test]
fn empty_input_yields_no_tokens() {
    let seg = Segmenter::new();
    assert!(seg.segment_str("").is_empty());
    assert!(count(&seg, "  ,,, !!").is_empty());
}

#[test]
fn single_char_does_not_fail() {
    let seg = Segmenter::new();
    assert_eq!(seg.segment_str("a"), ["a"]);
    assert_eq!(seg.segment_str("7"), ["7"]);
    assert_eq!(seg.segment_str("猫"), ["猫"]);
}

#[test]
fn chinese_tokens_cover_input_in_order() {
    let seg = Segmenter::new();
    let text = normalize_str("我来到北京清华大学。今天天气很好！");
    let tokens = seg.segment_str(&text);

    assert!(!tokens.is_empty());
    assert_eq!(tokens.concat(), text);
    // a dictionary segmenter groups at least some characters
    assert!(tokens.len() < text.chars().count());
    assert!(tokens.contains(&"北京"));
}

#[test]
fn mixed_scripts_split_at_boundaries() {
    let seg = Segmenter::new();
    let tokens = seg.segment_str("我爱Rust2024");

    assert_eq!(tokens.concat(), "我爱Rust2024");
    assert_eq!(tokens.last(), Some(&"2024"));
    assert!(tokens.iter().all(|t| !(t.contains('爱') && t.contains('R'))));
}

#[test]
fn digit_runs_are_one_token() {
    let seg = Segmenter::new();
    let tokens = seg.segment_str("the2024cat");
    assert_eq!(tokens, ["the", "2024", "cat"]);
}

#[test]
fn lexicon_dedups_and_is_case_insensitive() {
    let lex = Lexicon::from_ranked(["The", "cat", "the", "", "Mat"]);
    assert_eq!(lex.len(), 3);
    assert!(lex.contains("THE"));
    assert!(lex.cost("the") < lex.cost("cat"));
    assert_eq!(lex.cost("zzz"), None);
    assert_eq!(lex.max_chars(), 3);
}

const PROSE: [&str; 4] = [
    "Rust is a general-purpose programming language emphasizing performance, type safety, and concurrency.",
    "The government announced together with scientists a new climate policy yesterday.",
    "Researchers at the university published a detailed report on water quality in rural communities.",
    "She said the weather would improve later this week, but the forecast remained uncertain.",
];

fn spaced_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric()).filter(|w| !w.is_empty()).collect()
}

#[test]
fn prose_sentences_recover_their_words() {
    let seg = Segmenter::new();
    for sentence in PROSE {
        let text = normalize_str(sentence);
        assert_eq!(seg.segment_str(&text), spaced_words(sentence), "{sentence}");
    }
}

#[test]
fn paragraph_splits_across_sentence_joins() {
    let seg = Segmenter::new();
    let paragraph = PROSE.join(" ");
    let text = normalize_str(&paragraph);
    let tokens = seg.segment_str(&text);

    assert_eq!(tokens, spaced_words(&paragraph));
    // every token is one dictionary word, never two glued together
    let lex = Lexicon::english();
    assert!(tokens.iter().all(|t| lex.contains(t)));
}

#[test]
fn unknown_stretches_never_hide_known_words() {
    let seg = Segmenter::new();
    let lex = Lexicon::english();
    let text = normalize_str(
        "Kubernetes orchestrates containers across clusters of machines. \
         Blorptastic zyxwv frobnicators quietly jumped over the lazy dog.",
    );
    let tokens = seg.segment_str(&text);

    assert_eq!(tokens.concat(), text);
    for t in tokens.iter().filter(|t| !lex.contains(t)) {
        let chars: Vec<char> = t.to_lowercase().chars().collect();
        for a in 0..chars.len() {
            for b in a + 3..=chars.len() {
                let inner: String = chars[a..b].iter().collect();
                assert!(!lex.contains(&inner), "{t:?} hides {inner:?}");
            }
        }
    }
    for word in ["containers", "across", "clusters", "machines", "quietly", "jumped", "lazy", "dog"] {
        assert!(tokens.contains(&word), "{word} missing from {tokens:?}");
    }
}

#[test]
fn kana_and_latin_split_at_boundary() {
    let seg = Segmenter::new();
    assert_eq!(seg.segment_str("Japaneseテキストを"), ["Japanese", "テキストを"]);
}

#[test]
fn non_latin_alphabets_stay_whole() {
    let seg = Segmenter::new();
    assert_eq!(seg.segment_str("helloпривет"), ["hello", "привет"]);
    assert_eq!(seg.segment_str("한국어text"), ["한국어", "text"]);
    assert_eq!(seg.segment_str("λόγοςword"), ["λόγος", "word"]);
}

#[test]
fn from_counts_accumulates_repeats() {
    let table = FrequencyTable::from_counts([("a", 2), ("b", 1), ("a", 3)]);
    assert_eq!(table.get("a"), 5);
    assert_eq!(table.get("b"), 1);
    assert_eq!(table.get("missing"), 0);
    assert_eq!(table.total(), 6);
}
