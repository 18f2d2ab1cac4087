pub const EMPTY_MESSAGE: &str = "No sources found.";
pub const NOT_EMBEDDABLE_MESSAGE: &str = "Video cannot be embedded. Click the link above to watch.";
pub const OPEN_IN_NEW_TAB: &str = "Open in new tab";

pub const LINK_TARGET: &str = r#"target="_blank" rel="noopener noreferrer""#;

pub const IFRAME_ALLOW: &str =
    "accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture";

/// Crossed-out picture swapped in when an image preview fails to load.
/// Quotes are percent-encoded so the URI can sit inside an `onerror` handler.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns=%27http://www.w3.org/2000/svg%27 width=%2724%27 height=%2724%27 viewBox=%270 0 24 24%27 fill=%27none%27 stroke=%27currentColor%27 stroke-width=%272%27%3E%3Crect x=%273%27 y=%273%27 width=%2718%27 height=%2718%27 rx=%272%27/%3E%3Cline x1=%272%27 y1=%272%27 x2=%2722%27 y2=%2722%27/%3E%3C/svg%3E";

pub const ICON_GLOBE: &str = "globe";
pub const ICON_LINK: &str = "link";
pub const ICON_IMAGE: &str = "image";
pub const ICON_VIDEO: &str = "video";
pub const ICON_EXTERNAL: &str = "external-link";
pub const ICON_FILE_VIDEO: &str = "file-video";
