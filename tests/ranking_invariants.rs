use std::collections::HashSet;

use proptest::prelude::*;
use vocab_core::extraction::{is_excluded, rank_order, rank_words, top_n, WordCounter, EXCLUDED_WORDS};
use vocab_core::{parse_content, Article, NoWordLinks, TOP_N};

fn distinct_word(i: usize) -> String {
    let a = (b'a' + (i / 26) as u8) as char;
    let b = (b'a' + (i % 26) as u8) as char;
    format!("term{a}{b}")
}

fn assert_article_invariants(article: &Article) {
    // Sort totality
    for w in article.word_infos.windows(2) {
        if w[0].count == w[1].count {
            assert!(w[0].text < w[1].text, "{} !< {}", w[0].text, w[1].text);
        } else {
            assert!(w[0].count > w[1].count);
        }
    }

    // Top-N prefix law
    let expected_top: Vec<String> = article
        .word_infos
        .iter()
        .take(TOP_N)
        .map(|w| w.text.clone())
        .collect();
    assert_eq!(article.top_n, expected_top);
    assert_eq!(article.top_n.len(), article.net_count.min(TOP_N));

    // Count consistency
    assert_eq!(article.net_count, article.word_infos.len());
    let counted: u64 = article.word_infos.iter().map(|w| w.count).sum();
    assert!(counted <= article.total_count as u64);

    for info in &article.word_infos {
        // Exemplar bound
        assert!(info.count >= 1);
        assert!(info.sentence.len() <= 3);
        let unique: HashSet<&String> = info.sentence.iter().collect();
        assert_eq!(unique.len(), info.sentence.len());

        // Exclusion completeness
        assert!(!is_excluded(&info.text));
        assert!(!info.text.starts_with(|c: char| c.is_ascii_uppercase()));
        assert!(!info.text.contains('\u{2019}'));

        // Link fallback
        assert_eq!(info.word_link, info.text);
    }
}

#[test]
fn top_n_is_capped_at_fifty() {
    let body: String = (0..60)
        .map(|i| {
            let word = distinct_word(i);
            // Word i appears i + 1 times so the ranking is unambiguous.
            vec![word; i + 1].join(" ")
        })
        .collect::<Vec<_>>()
        .join(". ");
    let html = format!("<p>{body}</p>");

    let article = parse_content("", "p", html.into_bytes()).unwrap();

    assert_eq!(article.net_count, 60);
    assert_eq!(article.top_n.len(), TOP_N);
    assert_eq!(article.top_n[0], distinct_word(59));
    assert_eq!(article.top_n[49], distinct_word(10));
    assert_article_invariants(&article);
}

#[test]
fn excluded_words_never_rank() {
    let body = EXCLUDED_WORDS
        .iter()
        .map(|w| format!("{w} {}", w.to_uppercase()))
        .collect::<Vec<_>>()
        .join(" ");
    let article = parse_content("", "p", format!("<p>{body}</p>").into_bytes()).unwrap();

    assert!(article.word_infos.is_empty());
    assert_eq!(article.total_count, 0);
}

#[test]
fn rank_order_is_a_total_order_on_distinct_texts() {
    let mut counter = WordCounter::new();
    counter.observe_sentence("pear pear plum fig kiwi kiwi lime. ");
    let ranked = rank_words(&counter, &NoWordLinks);

    let texts: Vec<&str> = ranked.iter().map(|w| w.text.as_str()).collect();
    assert_eq!(texts, vec!["kiwi", "pear", "lime", "plum"]);
    for w in ranked.windows(2) {
        assert_eq!(rank_order(&w[0], &w[1]), std::cmp::Ordering::Less);
    }
    assert_eq!(top_n(&ranked, 2), vec!["kiwi", "pear"]);
    assert_eq!(top_n(&ranked, 10).len(), 4);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn extraction_invariants_hold(
        tokens in prop::collection::vec("[A-Za-z\u{2019}-]{1,10}", 0..120),
        breaks in prop::collection::vec(any::<bool>(), 0..120),
    ) {
        let mut body = String::new();
        for (i, token) in tokens.iter().enumerate() {
            body.push_str(token);
            if breaks.get(i).copied().unwrap_or(false) {
                body.push_str(". ");
            } else {
                body.push(' ');
            }
        }
        let html = format!("<html><body><p>{body}</p></body></html>");

        let first = parse_content("", "p", html.clone().into_bytes()).unwrap();
        let second = parse_content("", "p", html.into_bytes()).unwrap();

        assert_article_invariants(&first);
        prop_assert_eq!(first, second);
    }
}
