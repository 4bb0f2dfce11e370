use serde::Serialize;

/// One `<item>` of a channel. Every field is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Item {
    pub title: String,
    pub author: String,
    pub pub_date: String,
    pub link: String,
    pub category: String,
    pub description: String,
}

impl Item {
    pub fn new(
        title: String,
        author: String,
        pub_date: String,
        link: String,
        category: String,
        description: String,
    ) -> Self {
        Self {
            title,
            author,
            pub_date,
            link,
            category,
            description,
        }
    }
}
