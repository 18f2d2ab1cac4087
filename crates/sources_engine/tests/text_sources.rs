use pretty_assertions::assert_eq;
use sources_core::SourceKind;
use sources_engine::{classify_url, extract_text_sources, KindFilter};

const NOTES: &str = "Reading list:
https://example.com/release-notes
https://youtube.com/watch?v=dQw4w9WgXcQ
https://cdn.example.com/photo.JPG
https://youtu.be/dQw4w9WgXcQ.png
https://example.com/release-notes
";

#[test]
fn urls_in_text_are_typed_titled_and_described() {
    let sources = extract_text_sources(NOTES, KindFilter::all());

    let summary: Vec<_> = sources
        .iter()
        .map(|s| (s.url.as_str(), s.kind))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("https://example.com/release-notes", SourceKind::Link),
            ("https://youtube.com/watch?v=dQw4w9WgXcQ", SourceKind::Video),
            ("https://cdn.example.com/photo.JPG", SourceKind::Image),
            ("https://youtu.be/dQw4w9WgXcQ.png", SourceKind::Video),
        ]
    );
    assert_eq!(sources[0].title, "Release Notes");
    assert_eq!(sources[2].title, "Photo.Jpg");
    assert!(sources
        .iter()
        .all(|s| s.description.as_deref() == Some("Found in provided content")));
}

#[test]
fn video_patterns_win_over_image_extensions() {
    let url = "https://youtu.be/dQw4w9WgXcQ.png";
    assert_eq!(classify_url(url), SourceKind::Image);

    let sources = extract_text_sources(url, KindFilter::all());
    assert_eq!(sources[0].kind, SourceKind::Video);
}

#[test]
fn kind_filter_drops_unrequested_types() {
    let images = extract_text_sources(NOTES, KindFilter::only(&[SourceKind::Image]));
    let urls: Vec<_> = images.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(urls, vec!["https://cdn.example.com/photo.JPG"]);

    let none = extract_text_sources("nothing to see here", KindFilter::all());
    assert!(none.is_empty());
}
