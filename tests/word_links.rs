use std::io::Write;

use tempfile::NamedTempFile;
use vocab_core::dictionary::WordLinkError;
use vocab_core::extraction::resolve_link;
use vocab_core::{ArticleExtractor, HtmlNodeSelector, NoWordLinks, WordLinkLookup, WordLinkTable};

#[test]
fn table_links_replace_word_text() {
    let links = WordLinkTable::from_json_str(r#"{"jumps": "jump", "lazy": ""}"#).unwrap();
    let extractor = ArticleExtractor::new(HtmlNodeSelector, links);

    let article = extractor
        .parse_content("", "p", b"<p>The quick brown fox jumps over the lazy dog.</p>".to_vec())
        .unwrap();

    let link_of = |word: &str| {
        article
            .word_infos
            .iter()
            .find(|w| w.text == word)
            .map(|w| w.word_link.clone())
    };

    assert_eq!(link_of("jumps").as_deref(), Some("jump"));
    // Empty link falls back to the word.
    assert_eq!(link_of("lazy").as_deref(), Some("lazy"));
    assert_eq!(link_of("quick").as_deref(), Some("quick"));
}

#[test]
fn lookup_is_case_sensitive() {
    let mut links = WordLinkTable::new();
    links.insert("Running", "run");

    assert_eq!(resolve_link(&links, "running"), "running");
    assert_eq!(resolve_link(&links, "Running"), "run");
}

#[test]
fn no_links_always_falls_back() {
    assert_eq!(NoWordLinks.word_link("anything"), None);
    assert_eq!(resolve_link(&NoWordLinks, "anything"), "anything");
}

#[test]
fn lookup_through_reference() {
    let table: WordLinkTable = vec![("went".to_string(), "go".to_string())].into_iter().collect();
    let by_ref = &table;

    assert_eq!(by_ref.word_link("went"), Some("go"));
    assert_eq!(table.len(), 1);
    assert!(!table.is_empty());
}

#[test]
fn table_loads_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"children": "child", "mice": "mouse"}}"#).unwrap();

    let table = WordLinkTable::from_path(file.path()).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.word_link("mice"), Some("mouse"));
}

#[test]
fn invalid_table_is_rejected() {
    let result = WordLinkTable::from_json_str(r#"["not", "an", "object"]"#);
    assert!(matches!(result, Err(WordLinkError::Json(_))));

    let missing = WordLinkTable::from_path(std::path::Path::new("/nonexistent/links.json"));
    assert!(matches!(missing, Err(WordLinkError::Io(_))));
}
