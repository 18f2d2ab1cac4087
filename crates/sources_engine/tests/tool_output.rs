use pretty_assertions::assert_eq;
use sources_core::{Category, CategoryCounts, Source, SourceKind};
use sources_engine::{extract_tool_sources, ExtractionStrategy};

fn init_logging() {
    sources_logging::initialize_for_tests();
}

#[test]
fn sources_array_is_returned_in_order() {
    init_logging();
    let payload = r#"{"sources":[
        {"url":"https://b.com","title":"B","type":"link"},
        {"url":"https://a.com/pic.png","title":"Pic","type":"image","description":"d"}
    ]}"#;

    let extraction = extract_tool_sources(payload);

    assert_eq!(extraction.strategy, ExtractionStrategy::SourcesArray);
    assert_eq!(
        extraction.sources,
        vec![
            Source::new("https://b.com", "B", SourceKind::Link),
            Source::new("https://a.com/pic.png", "Pic", SourceKind::Image).with_description("d"),
        ]
    );
}

#[test]
fn single_sources_payload_counts_as_one_link() {
    init_logging();
    let extraction =
        extract_tool_sources(r#"{"sources":[{"url":"https://a.com","title":"A","type":"link"}]}"#);

    assert_eq!(extraction.sources.len(), 1);
    let counts = CategoryCounts::tally(&extraction.sources);
    assert_eq!(counts.get(Category::Links), 1);
    assert_eq!(counts.get(Category::All), 1);
}

#[test]
fn single_record_object_is_wrapped() {
    init_logging();
    let extraction = extract_tool_sources(
        r#"{"url":"https://a.com","title":"A","type":"video","timestamp":"2024-01-01T00:00:00"}"#,
    );

    assert_eq!(extraction.strategy, ExtractionStrategy::SingleRecord);
    assert_eq!(extraction.sources.len(), 1);
    assert_eq!(extraction.sources[0].kind, SourceKind::Video);
    assert_eq!(
        extraction.sources[0].timestamp.as_deref(),
        Some("2024-01-01T00:00:00")
    );
}

#[test]
fn tool_result_output_is_unwrapped_one_level() {
    init_logging();
    let array = extract_tool_sources(
        r#"{"success":true,"output":{"sources":[{"url":"https://a.com","title":"A"}]}}"#,
    );
    assert_eq!(array.strategy, ExtractionStrategy::WrappedOutput);
    assert_eq!(array.sources[0].url, "https://a.com");

    let record = extract_tool_sources(
        r#"{"success":true,"output":{"url":"https://a.com/x.gif","title":"X","type":"image","description":null}}"#,
    );
    assert_eq!(record.strategy, ExtractionStrategy::WrappedOutput);
    assert_eq!(record.sources[0].kind, SourceKind::Image);
    assert_eq!(record.sources[0].description, None);
}

#[test]
fn malformed_elements_are_skipped() {
    init_logging();
    let extraction = extract_tool_sources(
        r#"{"sources":[42,{"title":"no url"},{"url":"https://ok.com","title":"OK","type":"podcast"},{"url":"https://a.com","title":"A"}]}"#,
    );

    assert_eq!(extraction.sources.len(), 1);
    assert_eq!(extraction.sources[0].url, "https://a.com");
}

#[test]
fn bare_urls_are_scanned_and_classified() {
    init_logging();
    let extraction =
        extract_tool_sources("Check https://x.com/img.png and https://youtu.be/dQw4w9WgXcQ");

    assert_eq!(extraction.strategy, ExtractionStrategy::BareUrls);
    let summary: Vec<_> = extraction
        .sources
        .iter()
        .map(|s| (s.url.as_str(), s.title.as_str(), s.kind))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("https://x.com/img.png", "img.png", SourceKind::Image),
            ("https://youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ", SourceKind::Video),
        ]
    );
    let counts = CategoryCounts::tally(&extraction.sources);
    assert_eq!(counts.videos, 1);
    assert_eq!(counts.images, 1);
}

#[test]
fn repeated_bare_urls_yield_one_record() {
    init_logging();
    let extraction =
        extract_tool_sources("https://a.com/page twice: https://a.com/page and https://a.com/");

    let urls: Vec<_> = extraction.sources.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(urls, vec!["https://a.com/page", "https://a.com/"]);
    assert_eq!(extraction.sources[1].title, "Link");
}

#[test]
fn escaped_urls_inside_text_are_cleaned() {
    init_logging();
    let extraction = extract_tool_sources(r#"result: \"https://a.com/some_doc\"\n done"#);

    assert_eq!(extraction.sources.len(), 1);
    assert_eq!(extraction.sources[0].url, "https://a.com/some_doc");
    assert_eq!(extraction.sources[0].title, "some doc");
}

#[test]
fn json_without_sources_falls_back_to_text_scan() {
    init_logging();
    let extraction =
        extract_tool_sources(r#"{"message":"see https://docs.example.com/guide for details"}"#);

    assert_eq!(extraction.strategy, ExtractionStrategy::BareUrls);
    assert_eq!(extraction.sources[0].url, "https://docs.example.com/guide");

    let empty_array = extract_tool_sources(r#"{"sources":[],"note":"https://a.com"}"#);
    assert_eq!(empty_array.strategy, ExtractionStrategy::BareUrls);
    assert_eq!(empty_array.sources.len(), 1);
}

#[test]
fn invalid_json_without_urls_yields_nothing() {
    init_logging();
    let extraction = extract_tool_sources("{not valid");

    assert_eq!(extraction.strategy, ExtractionStrategy::Nothing);
    assert!(extraction.sources.is_empty());
    assert!(extract_tool_sources("").sources.is_empty());
}
