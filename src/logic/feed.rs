//! Feed aggregation logic
//!
//! Pure functions that turn relay items into display tiles and collapse
//! per-source outcomes into the single list shown on the Blogs page.

use chrono::NaiveDateTime;

use crate::api::RelayItem;
use crate::model::types::{FeedItem, SourceOutcome};

/// Items kept from each source, in response order
pub const MAX_ITEMS_PER_SOURCE: usize = 3;

/// Characters of plain-text description kept on a tile
pub const SUMMARY_CHARS: usize = 80;

/// Timestamp layout used by the relay for `pubDate`
const PUB_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Keep the leading items of one source and convert them to tiles
pub fn take_leading(items: Vec<RelayItem>) -> Vec<FeedItem> {
    items
        .into_iter()
        .take(MAX_ITEMS_PER_SOURCE)
        .map(to_feed_item)
        .collect()
}

/// Convert a relay item into a display tile
///
/// The id is `guid`, then `id`, then the link.
pub fn to_feed_item(item: RelayItem) -> FeedItem {
    let id = [Some(item.guid.as_str()), item.id.as_deref()]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|candidate| !candidate.is_empty())
        .unwrap_or(item.link.as_str())
        .to_string();

    FeedItem {
        id,
        title: item.title.trim().to_string(),
        description: summarize(&item.description),
        published: item.pub_date.as_deref().and_then(parse_published),
        link: item.link,
    }
}

/// Concatenate fetched items of every source, in source order
pub fn flatten_outcomes(outcomes: &[SourceOutcome]) -> Vec<FeedItem> {
    outcomes
        .iter()
        .filter_map(|outcome| match outcome {
            SourceOutcome::Fetched { items, .. } => Some(items.iter().cloned()),
            SourceOutcome::Failed { .. } => None,
        })
        .flatten()
        .collect()
}

/// Number of sources that answered successfully
pub fn count_ok(outcomes: &[SourceOutcome]) -> usize {
    outcomes.iter().filter(|o| o.is_ok()).count()
}

/// Plain-text summary of an HTML description
///
/// # Examples
/// ```
/// use foliotui::logic::feed::summarize;
///
/// assert_eq!(summarize("<p>Hello <b>world</b></p>"), "Hello world...");
/// ```
pub fn summarize(html: &str) -> String {
    let text = strip_html(html);
    let truncated: String = text.chars().take(SUMMARY_CHARS).collect();
    format!("{}...", truncated.trim_end())
}

/// Remove markup, decode common entities and collapse whitespace
pub fn strip_html(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => {
                in_tag = true;
                // Tags separate words (e.g. "</p><p>")
                text.push(' ');
            }
            '>' if in_tag => in_tag = false,
            _ if !in_tag => text.push(c),
            _ => {}
        }
    }

    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse the relay's `pubDate` field
pub fn parse_published(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), PUB_DATE_FORMAT).ok()
}

/// Short date for a tile footer ("Mar 04, 2025")
pub fn format_published(published: Option<NaiveDateTime>) -> Option<String> {
    published.map(|ts| ts.format("%b %d, %Y").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::errors::ErrorType;

    fn relay_item(n: usize) -> RelayItem {
        RelayItem {
            guid: format!("guid-{}", n),
            id: None,
            title: format!("Post {}", n),
            link: format!("https://medium.com/p/{}", n),
            description: format!("<p>Body of post {}</p>", n),
            pub_date: Some("2025-03-04 10:15:00".to_string()),
        }
    }

    #[test]
    fn test_take_leading_keeps_first_three_in_order() {
        let items: Vec<RelayItem> = (0..5).map(relay_item).collect();
        let tiles = take_leading(items);
        assert_eq!(tiles.len(), 3);
        assert_eq!(tiles[0].id, "guid-0");
        assert_eq!(tiles[2].id, "guid-2");
    }

    #[test]
    fn test_take_leading_short_source() {
        let tiles = take_leading(vec![relay_item(7)]);
        assert_eq!(tiles.len(), 1);
        assert!(take_leading(Vec::new()).is_empty());
    }

    #[test]
    fn test_id_falls_back_to_relay_id() {
        let mut item = relay_item(1);
        item.guid = String::new();
        item.id = Some("id-1".to_string());
        assert_eq!(to_feed_item(item).id, "id-1");
    }

    #[test]
    fn test_id_falls_back_to_link() {
        let mut item = relay_item(1);
        item.guid = String::new();
        let tile = to_feed_item(item);
        assert_eq!(tile.id, "https://medium.com/p/1");
    }

    #[test]
    fn test_published_parsed() {
        let tile = to_feed_item(relay_item(1));
        assert_eq!(format_published(tile.published).as_deref(), Some("Mar 04, 2025"));
    }

    #[test]
    fn test_unparsable_published_is_none() {
        assert!(parse_published("yesterday").is_none());
        assert!(parse_published("").is_none());
    }

    #[test]
    fn test_summarize_truncates_to_limit() {
        let long = "a".repeat(200);
        let summary = summarize(&long);
        assert_eq!(summary.chars().count(), SUMMARY_CHARS + 3);
        assert!(summary.ends_with("..."));
    }

    #[test]
    fn test_summarize_counts_chars_not_bytes() {
        let long = "é".repeat(100);
        let summary = summarize(&long);
        assert_eq!(summary.chars().count(), SUMMARY_CHARS + 3);
    }

    #[test]
    fn test_strip_html_decodes_and_collapses() {
        let html = "<h3>Rust &amp; TUIs</h3>\n<p>Fast&nbsp;and   <em>fun</em></p>";
        assert_eq!(strip_html(html), "Rust & TUIs Fast and fun");
    }

    #[test]
    fn test_strip_html_drops_image_tags() {
        let html = r#"<figure><img src="https://cdn/x.png" alt="x"></figure>Intro"#;
        assert_eq!(strip_html(html), "Intro");
    }

    #[test]
    fn test_flatten_skips_failed_sources() {
        let outcomes = vec![
            SourceOutcome::Fetched {
                source: "a".to_string(),
                items: take_leading((0..5).map(relay_item).collect()),
            },
            SourceOutcome::Failed {
                source: "b".to_string(),
                error_type: ErrorType::ServerError,
                message: "500".to_string(),
            },
            SourceOutcome::Fetched {
                source: "c".to_string(),
                items: take_leading(vec![relay_item(9)]),
            },
        ];

        let items = flatten_outcomes(&outcomes);
        let ids: Vec<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["guid-0", "guid-1", "guid-2", "guid-9"]);
        assert_eq!(count_ok(&outcomes), 2);
    }
}
