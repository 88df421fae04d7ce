//! End-to-end tests over whole pages: apply, revert and what is left alone.

use bionic_bold::bionic::{self, MARKER_CLASS};
use bionic_bold::{EmphasisMode, Page};
use proptest::prelude::*;

const ARTICLE: &str = r#"<!DOCTYPE html>
<html>
<head>
  <title>Reading faster</title>
  <style>p { color: black; }</style>
</head>
<body>
  <h1>Bionic reading</h1>
  <p>Your brain reads faster when <em>bold letters</em> guide your eyes.</p>
  <pre><code>let words = 42;</code></pre>
  <form><textarea>typed text</textarea><button>Submit form</button></form>
  <div contenteditable="true"><p>editable draft</p></div>
  <!-- a comment stays -->
  <script>document.title = "script text";</script>
</body>
</html>"#;

fn fixed(k: usize) -> EmphasisMode {
    EmphasisMode::fixed(k).unwrap()
}

#[test]
fn test_sentence_end_to_end() {
    let mut page = Page::parse("<p>Your brain reads faster.</p>");
    page.apply();

    let html = page.to_html().unwrap();
    assert!(html.contains(
        "<p><span class=\"bionic-bold-applied\">\
         <b class=\"bionic-bold\">Yo</b>ur \
         <b class=\"bionic-bold\">br</b>ain \
         <b class=\"bionic-bold\">re</b>ads \
         <b class=\"bionic-bold\">fa</b>ster.</span></p>"
    ));
}

#[test]
fn test_article_round_trip() {
    let mut page = Page::parse(ARTICLE);
    let original = page.to_html().unwrap();
    let text = page.text_content();

    let stats = page.apply();
    assert!(stats.words_emphasized > 0);
    assert_eq!(page.text_content(), text);

    page.revert();
    assert_eq!(page.to_html().unwrap(), original);
}

#[test]
fn test_non_prose_left_alone() {
    let mut page = Page::parse(ARTICLE);
    page.apply();
    let html = page.to_html().unwrap();

    assert!(html.contains("<title>Reading faster</title>"));
    assert!(html.contains("<style>p { color: black; }</style>"));
    assert!(html.contains("<code>let words = 42;</code>"));
    assert!(html.contains("<textarea>typed text</textarea>"));
    assert!(html.contains("<button>Submit form</button>"));
    assert!(html.contains("<p>editable draft</p>"));
    assert!(html.contains("<!-- a comment stays -->"));
    assert!(html.contains("document.title = \"script text\";"));

    assert!(html.contains("<b class=\"bionic-bold\">Bi</b>onic"));
    assert!(html.contains("<em><span class=\"bionic-bold-applied\"><b class=\"bionic-bold\">bo</b>ld"));
}

#[test]
fn test_second_walk_finds_nothing_new() {
    let mut page = Page::parse(ARTICLE);
    page.apply();
    let once = page.to_html().unwrap();

    let root = page.content_root().unwrap();
    let stats = bionic::walk(page.dom_mut(), root, EmphasisMode::Auto);

    assert_eq!(stats.text_nodes_wrapped, 0);
    assert_eq!(page.to_html().unwrap(), once);
}

#[test]
fn test_revert_after_reparse() {
    let mut page = Page::parse(ARTICLE);
    let original = page.to_html().unwrap();
    page.set_mode(fixed(2));
    page.apply();

    let mut reloaded = Page::parse(&page.to_html().unwrap());
    let removed = reloaded.revert();

    assert!(removed > 0);
    assert_eq!(reloaded.to_html().unwrap(), original);
}

#[test]
fn test_mode_change_rerenders() {
    let mut page = Page::parse("<p>Extraordinary</p>");
    page.apply();
    assert!(page.to_html().unwrap().contains(">Extr</b>aordinary"));

    page.reapply_with(fixed(1));
    let html = page.to_html().unwrap();
    assert!(html.contains(">E</b>xtraordinary"));
    assert_eq!(html.matches(MARKER_CLASS).count(), 1);
}

#[test]
fn test_symbols_only_text_untouched() {
    let mut page = Page::parse("<p>-- ... !!</p><p>a I</p>");
    let original = page.to_html().unwrap();

    let stats = page.apply();

    assert_eq!(stats.text_nodes_visited, 2);
    assert_eq!(stats.text_nodes_wrapped, 0);
    assert_eq!(page.to_html().unwrap(), original);
}

#[test]
fn test_open_detects_legacy_charset() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("page.html");
    std::fs::write(
        &path,
        b"<html><head><meta charset=\"windows-1252\"></head><body><p>caf\xe9 au lait</p></body></html>",
    )
    .unwrap();

    let mut page = Page::open(&path).unwrap();
    assert_eq!(page.text_content(), "caf\u{e9} au lait");

    page.apply();
    assert!(page.to_html().unwrap().contains(">c</b>af\u{e9}"));
}

#[test]
fn test_unicode_round_trip() {
    let mut page = Page::parse(
        "<p>\u{ab}Bonjour\u{bb}, dit-elle\u{a0}\u{2014} caf\u{e9} \u{fc}ber Stra\u{df}e \u{1f600}ok</p>",
    );
    let original = page.to_html().unwrap();
    let text = page.text_content();

    page.apply();
    let html = page.to_html().unwrap();
    assert!(html.contains("\u{ab}<b class=\"bionic-bold\">Bon</b>jour\u{bb}"));
    assert!(html.contains("\u{fc}<b class=\"bionic-bold\">b</b>er"));
    assert_eq!(page.text_content(), text);

    page.revert();
    assert_eq!(page.to_html().unwrap(), original);
}

#[test]
fn test_open_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();
    assert!(Page::open(dir.path().join("missing.html")).is_err());
}

fn fragment_html() -> impl Strategy<Value = String> {
    let tag = prop::sample::select(vec!["p", "div", "em", "strong", "code", "span", "h2"]);
    let text = "[a-zA-Z0-9 ,.'()!?\u{e9}\u{fc}\u{df}\u{ab}\u{bb}\u{2014}\u{a0}\u{feff}\u{85}-]{0,40}";
    prop::collection::vec((tag, text, text), 0..8).prop_map(|parts| {
        parts
            .into_iter()
            .map(|(tag, inner, after)| format!("<{tag}>{inner}</{tag}>{after}"))
            .collect()
    })
}

proptest! {
    #[test]
    fn prop_revert_restores_html(body in fragment_html(), k in 0usize..5) {
        let mut page = Page::parse(&format!("<html><body>{body}</body></html>"));
        let original = page.to_html().unwrap();
        let text = page.text_content();

        page.set_mode(EmphasisMode::fixed(k).unwrap_or_default());
        page.apply();
        prop_assert_eq!(page.text_content(), text);

        page.revert();
        prop_assert_eq!(page.to_html().unwrap(), original);
    }
}
