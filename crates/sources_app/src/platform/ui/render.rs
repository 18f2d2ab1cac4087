use std::fmt::Write;

use sources_core::{embed_url, Category, GalleryViewModel, Preview, SourceCardView, SourceIcon};

use super::constants::*;

/// Renders the gallery view model as an HTML fragment.
pub fn render(view: &GalleryViewModel) -> String {
    let mut html = String::new();
    if view.is_empty() {
        let _ = write!(
            html,
            r#"<div class="sources-gallery sources-empty"><p>{}</p></div>"#,
            EMPTY_MESSAGE
        );
        return html;
    }

    let _ = write!(
        html,
        r#"<div class="sources-gallery" data-scope="{}">"#,
        escape(&view.scope.to_string())
    );
    render_tabs(&mut html, view);
    html.push_str(r#"<ul class="sources-list">"#);
    for card in &view.cards {
        render_card(&mut html, card);
    }
    html.push_str("</ul></div>");
    html
}

fn render_tabs(html: &mut String, view: &GalleryViewModel) {
    html.push_str(r#"<nav class="sources-tabs">"#);
    for tab in &view.tabs {
        let class = if tab.active {
            "sources-tab active"
        } else {
            "sources-tab"
        };
        let _ = write!(
            html,
            r#"<button type="button" class="{class}" data-category="{id}">{icon}<span class="tab-label">{label}</span>"#,
            id = tab.category.id(),
            icon = icon(tab_icon(tab.category)),
            label = tab.label,
        );
        if tab.count > 0 {
            let _ = write!(html, r#"<span class="tab-count">{}</span>"#, tab.count);
        }
        html.push_str("</button>");
    }
    html.push_str("</nav>");
}

fn render_card(html: &mut String, card: &SourceCardView) {
    let url = escape(&card.url);
    let title = if card.title.is_empty() {
        url.clone()
    } else {
        escape(&card.title)
    };
    let icon_name = card_icon(card.icon);

    if card.linkable {
        let _ = write!(
            html,
            r#"<li class="source-card source-{icon_name}"><div class="source-header">{icon}<a class="source-title" href="{url}" {LINK_TARGET} title="{title}">{title}</a><a class="source-external" href="{url}" {LINK_TARGET} aria-label="{OPEN_IN_NEW_TAB}">{external}</a></div>"#,
            icon = icon(icon_name),
            external = icon(ICON_EXTERNAL),
        );
    } else {
        // Non-http(s) URLs never become navigable markup.
        let _ = write!(
            html,
            r#"<li class="source-card source-{icon_name} source-unlinked"><div class="source-header">{icon}<span class="source-title" title="{url}">{title}</span></div>"#,
            icon = icon(icon_name),
        );
    }

    if let Some(description) = &card.description {
        let _ = write!(
            html,
            r#"<p class="source-description">{}</p>"#,
            escape(description)
        );
    }

    match &card.preview {
        Preview::None => {}
        Preview::Image => {
            let _ = write!(
                html,
                r#"<div class="source-preview"><a href="{url}" {LINK_TARGET}><img src="{url}" alt="{title}" loading="lazy" onerror="this.onerror=null;this.src='{PLACEHOLDER_IMAGE}';this.className='preview-failed';"></a></div>"#,
            );
        }
        Preview::Embed { video_id } => {
            let _ = write!(
                html,
                r#"<div class="source-video"><iframe src="{src}" title="{title}" allow="{IFRAME_ALLOW}" allowfullscreen loading="lazy"></iframe></div>"#,
                src = escape(&embed_url(video_id)),
            );
        }
        Preview::NotEmbeddable => {
            let _ = write!(
                html,
                r#"<div class="source-video source-video-unavailable">{icon}<span>{NOT_EMBEDDABLE_MESSAGE}</span> <a href="{url}" {LINK_TARGET}>{external}</a></div>"#,
                icon = icon(ICON_FILE_VIDEO),
                external = icon(ICON_EXTERNAL),
            );
        }
    }

    html.push_str("</li>");
}

fn tab_icon(category: Category) -> &'static str {
    match category {
        Category::All => ICON_GLOBE,
        Category::Links => ICON_LINK,
        Category::Images => ICON_IMAGE,
        Category::Videos => ICON_VIDEO,
    }
}

fn card_icon(icon: SourceIcon) -> &'static str {
    match icon {
        SourceIcon::Globe => ICON_GLOBE,
        SourceIcon::Image => ICON_IMAGE,
        SourceIcon::Video => ICON_VIDEO,
    }
}

fn icon(name: &str) -> String {
    format!(r#"<span class="icon icon-{name}" aria-hidden="true"></span>"#)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
