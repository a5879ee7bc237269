use serde::{Deserialize, Serialize};

/// Display name block of an AniList media object.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub(crate) struct TitleName {
    #[serde(default)]
    pub romaji: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub(crate) struct CoverImage {
    #[serde(default)]
    pub large: Option<String>,
}

/// One catalog item as returned by the trending query.
///
/// The JSON shape mirrors AniList media (`title.romaji`, `coverImage.large`),
/// so the same type is used for API payloads and for the stored collection blob.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Title {
    pub id: i64,
    #[serde(default)]
    pub title: TitleName,
    #[serde(rename = "coverImage", default)]
    pub cover_image: CoverImage,
}

impl Title {
    pub fn display_name(&self) -> &str {
        self.title
            .romaji
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Untitled")
    }

    pub fn cover_url(&self) -> &str {
        self.cover_image.large.as_deref().unwrap_or_default()
    }
}

/// Full metadata for the title detail view.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct TitleDetail {
    pub id: i64,
    #[serde(default)]
    pub title: TitleName,
    #[serde(rename = "coverImage", default)]
    pub cover_image: CoverImage,
    #[serde(rename = "bannerImage", default)]
    pub banner_image: Option<String>,
    /// Synopsis. AniList returns light HTML (`<br>`, `<i>`).
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub episodes: Option<i32>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(rename = "averageScore", default)]
    pub average_score: Option<i32>,
}

impl TitleDetail {
    pub fn display_name(&self) -> &str {
        self.title
            .romaji
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or("Untitled")
    }

    /// Synopsis with the markup AniList embeds reduced to plain text.
    pub fn plain_description(&self) -> String {
        let Some(raw) = self.description.as_deref() else {
            return String::new();
        };

        let normalized = raw
            .replace("<br>", "\n")
            .replace("<br/>", "\n")
            .replace("<br />", "\n");

        let mut out = String::with_capacity(normalized.len());
        let mut in_tag = false;
        for c in normalized.chars() {
            match c {
                '<' => in_tag = true,
                '>' if in_tag => in_tag = false,
                _ if !in_tag => out.push(c),
                _ => {}
            }
        }
        out.trim().to_string()
    }
}

/// A user-named group of titles. The name is the identifier.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Collection {
    pub name: String,

    // Stored as `animes` to stay readable by earlier builds of the app.
    #[serde(rename = "animes", alias = "titles", default)]
    pub titles: Vec<Title>,
}

impl Collection {
    pub fn contains(&self, title_id: i64) -> bool {
        self.titles.iter().any(|t| t.id == title_id)
    }
}

/// Every collection of the current browser, persisted as one JSON array.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
#[serde(transparent)]
pub(crate) struct CollectionSet {
    pub collections: Vec<Collection>,
}
