use crate::error::ParseError;
use crate::feed::Feed;
use crate::item::Item;
use roxmltree::{Document, Node, ParsingOptions};

/// Parses an RSS 2.0 document into a [`Feed`].
///
/// The first `channel` element below the root is used. Only its own children
/// are read: mandatory fields default to an empty string, the optional ones
/// (`lastBuildDate`, `pubDate`, `language`, `managingEditor`) are kept only when
/// non-empty. Channel categories are joined, whereas each item only keeps its
/// first category. Text is kept exactly as written, whitespace included.
pub fn extract_feed(xml: &str) -> Result<Feed, ParseError> {
    let opts = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(xml, opts)?;

    let channel = doc
        .root_element()
        .descendants()
        .skip(1)
        .find(|node| is_named(node, "channel"))
        .ok_or(ParseError::MissingChannel)?;

    let categories: Vec<&str> = children_named(channel, "category")
        .map(|node| node.text().unwrap_or_default())
        .collect();
    let categories = if categories.is_empty() {
        None
    } else {
        Some(categories.join(", "))
    };

    let items = children_named(channel, "item").map(item_from).collect();

    Ok(Feed {
        title: child_text(channel, "title"),
        link: child_text(channel, "link"),
        description: child_text(channel, "description"),
        last_build_date: non_empty(channel, "lastBuildDate"),
        pub_date: non_empty(channel, "pubDate"),
        language: non_empty(channel, "language"),
        managing_editor: non_empty(channel, "managingEditor"),
        categories,
        items,
    })
}

fn item_from(item: Node<'_, '_>) -> Item {
    Item::new(
        child_text(item, "title"),
        child_text(item, "author"),
        child_text(item, "pubDate"),
        child_text(item, "link"),
        child_text(item, "category"),
        child_text(item, "description"),
    )
}

// Namespaced elements such as <media:title> never match.
fn is_named(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().namespace().is_none() && node.tag_name().name() == name
}

fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children().filter(move |child| is_named(child, name))
}

/// Text of the first child called `name`, or empty.
fn child_text(node: Node<'_, '_>, name: &str) -> String {
    children_named(node, name)
        .next()
        .and_then(|child| child.text())
        .unwrap_or_default()
        .to_string()
}

fn non_empty(node: Node<'_, '_>, name: &str) -> Option<String> {
    Some(child_text(node, name)).filter(|text| !text.is_empty())
}
