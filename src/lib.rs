pub mod cli;
pub mod config;
pub mod error;
pub mod extract;
pub mod feed;
pub mod fetch;
pub mod item;
pub mod render;

pub use error::{ParseError, UnhandledError};
pub use extract::extract_feed;
pub use feed::Feed;
pub use item::Item;
pub use render::{render_feed, Rendered};

/// Extracts `xml` and renders it in one step. Any failure comes back as an
/// [`UnhandledError`].
pub fn parse(xml: &str, limit: Option<i64>, as_json: bool) -> Result<Rendered, UnhandledError> {
    let feed = extract_feed(xml)?;
    render_feed(&feed, limit, as_json)
}
