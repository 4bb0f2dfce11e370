use crate::error::UnhandledError;
use crate::feed::Feed;
use crate::item::Item;
use html_escape::decode_html_entities;
use serde::Serialize;
use std::fmt;

/// Output of [`render_feed`]: report lines or a JSON document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Lines(Vec<String>),
    Json(String),
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Lines(lines) => write!(f, "{}", lines.join("\n")),
            Rendered::Json(json) => write!(f, "{}", json),
        }
    }
}

#[derive(Serialize)]
struct JsonFeed<'a> {
    title: &'a str,
    link: &'a str,
    description: &'a str,
    items: &'a [Item],
}

pub fn render_feed(
    feed: &Feed,
    limit: Option<i64>,
    as_json: bool,
) -> Result<Rendered, UnhandledError> {
    if as_json {
        render_json(feed, limit).map(Rendered::Json)
    } else {
        Ok(Rendered::Lines(render_text(feed, limit)))
    }
}

/// JSON carries the raw extracted values and never the optional channel fields.
pub fn render_json(feed: &Feed, limit: Option<i64>) -> Result<String, UnhandledError> {
    let doc = JsonFeed {
        title: &feed.title,
        link: &feed.link,
        description: &feed.description,
        items: feed.limited_items(limit),
    };
    Ok(serde_json::to_string_pretty(&doc)?)
}

/// Human-readable report. Only titles and descriptions are entity-decoded.
pub fn render_text(feed: &Feed, limit: Option<i64>) -> Vec<String> {
    let mut lines = vec![
        format!("Feed: {}", decode_html_entities(&feed.title)),
        format!("Link: {}", feed.link),
        format!("Description: {}", decode_html_entities(&feed.description)),
    ];

    for (label, value) in feed.optional_fields() {
        lines.push(format!("{}: {}", label, value));
    }

    for item in feed.limited_items(limit) {
        lines.push(format!("\nTitle: {}", decode_html_entities(&item.title)));
        lines.push(format!("Author: {}", item.author));
        lines.push(format!("PubDate: {}", item.pub_date));
        lines.push(format!("Link: {}", item.link));
        lines.push(format!("Category: {}", item.category));
        lines.push(format!(
            "Description: {}",
            decode_html_entities(&item.description)
        ));
    }

    lines
}
