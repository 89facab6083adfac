//! Solution (knowledge base) models for the Freshdesk API.
//!
//! Solutions form a three-level hierarchy: categories contain folders,
//! folders contain articles.

use serde::{Deserialize, Serialize};

/// A solution category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Unique category ID.
    pub id: u64,

    /// Category name.
    #[serde(default)]
    pub name: Option<String>,

    /// Category description.
    #[serde(default)]
    pub description: Option<String>,

    /// Portals the category is shown in.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub visible_in_portals: Vec<u64>,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A solution folder inside a category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder ID.
    pub id: u64,

    /// Folder name.
    #[serde(default)]
    pub name: Option<String>,

    /// Folder description.
    #[serde(default)]
    pub description: Option<String>,

    /// Visibility code (1 all users, 2 logged-in users, 3 agents, ...).
    #[serde(default)]
    pub visibility: Option<u32>,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// A solution article.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    /// Unique article ID.
    pub id: u64,

    /// Article title.
    #[serde(default)]
    pub title: Option<String>,

    /// Article body (HTML).
    #[serde(default)]
    pub description: Option<String>,

    /// Article body as plain text.
    #[serde(default)]
    pub description_text: Option<String>,

    /// Status code (1 draft, 2 published).
    #[serde(default)]
    pub status: Option<u32>,

    /// Article type (1 permanent, 2 workaround).
    #[serde(rename = "type", default)]
    pub article_type: Option<u32>,

    /// Folder holding the article.
    #[serde(default)]
    pub folder_id: Option<u64>,

    /// Category holding the folder.
    #[serde(default)]
    pub category_id: Option<u64>,

    /// Author agent ID.
    #[serde(default)]
    pub agent_id: Option<u64>,

    /// Tags attached to the article.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// View count.
    #[serde(default)]
    pub hits: Option<u64>,

    /// Positive votes.
    #[serde(default)]
    pub thumbs_up: Option<u64>,

    /// Negative votes.
    #[serde(default)]
    pub thumbs_down: Option<u64>,

    /// Creation timestamp (ISO 8601).
    #[serde(default)]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601).
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Articles of one folder, or the reason they could not be fetched.
#[derive(Debug, Clone, Serialize)]
pub struct FolderArticles {
    /// The folder.
    pub folder: Folder,
    /// Articles in the folder; empty when `error` is set.
    pub articles: Vec<Article>,
    /// Why the articles are missing, if the fetch failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Folders of one category, or the reason they could not be fetched.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryArticles {
    /// The category.
    pub category: Category,
    /// Folders in the category; empty when `error` is set.
    pub folders: Vec<FolderArticles>,
    /// Why the folders are missing, if the fetch failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Flattens a solution tree into the articles it contains, in traversal order.
pub fn flatten_articles(tree: Vec<CategoryArticles>) -> Vec<Article> {
    tree.into_iter()
        .flat_map(|category| category.folders)
        .flat_map(|folder| folder.articles)
        .collect()
}
