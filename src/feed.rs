use crate::item::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feed {
    pub title: String,
    pub link: String,
    pub description: String,
    pub last_build_date: Option<String>,
    pub pub_date: Option<String>,
    pub language: Option<String>,
    pub managing_editor: Option<String>,
    /// Channel-level categories joined with `", "`.
    pub categories: Option<String>,
    pub items: Vec<Item>,
}

impl Feed {
    pub fn new(title: String, link: String, description: String, items: Vec<Item>) -> Self {
        Self {
            title,
            link,
            description,
            items,
            ..Default::default()
        }
    }

    /// Optional channel fields that are present, labelled and in display order.
    pub fn optional_fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("LastBuildDate", &self.last_build_date),
            ("PubDate", &self.pub_date),
            ("Language", &self.language),
            ("ManagingEditor", &self.managing_editor),
            ("Categories", &self.categories),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.as_deref().map(|v| (label, v)))
    }

    /// Leading items kept under `limit`. `None` keeps all, `<= 0` keeps none.
    pub fn limited_items(&self, limit: Option<i64>) -> &[Item] {
        match limit {
            None => &self.items,
            Some(n) => {
                let n = usize::try_from(n).unwrap_or(0);
                &self.items[..n.min(self.items.len())]
            }
        }
    }
}
