//! Input records for the solutions (knowledge base) tools.

use rmcp::schemars::{self, JsonSchema};
use serde::{Deserialize, Serialize};

/// Input parameters for the list_folders tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListFoldersInput {
    /// ID of the solution category whose folders to list.
    pub category_id: u64,
}

/// Input parameters for the list_articles tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListArticlesInput {
    /// ID of the solution folder whose articles to list.
    pub folder_id: u64,
}

/// Input parameters for the get_article tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetArticleInput {
    /// ID of the article to retrieve.
    pub article_id: u64,
}

/// Input parameters for the search_articles tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchArticlesInput {
    /// Full-text search term.
    pub term: String,
}

impl SearchArticlesInput {
    /// Sanitizes input by trimming the search term.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            term: self.term.trim().to_string(),
        }
    }
}

fn default_article_status() -> u32 {
    1
}

/// Body of a new solution article.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct NewArticle {
    /// Article title.
    pub title: String,

    /// Article body (HTML).
    pub description: String,

    /// 1 = draft (default), 2 = published.
    #[serde(default = "default_article_status")]
    pub status: u32,

    /// 1 = permanent, 2 = workaround.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub article_type: Option<u32>,

    /// Tags for the article.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Input parameters for the create_article tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateArticleInput {
    /// ID of the folder to create the article in.
    pub folder_id: u64,

    /// The article to create.
    #[serde(flatten)]
    pub article: NewArticle,
}

/// Fields of an article that can be changed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct ArticleChanges {
    /// New title.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// New body (HTML).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// New status: 1 = draft, 2 = published.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u32>,

    /// New type: 1 = permanent, 2 = workaround.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub article_type: Option<u32>,

    /// Replacement tag list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

/// Input parameters for the update_article tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateArticleInput {
    /// ID of the article to update.
    pub article_id: u64,

    /// Fields to change; at least one is required.
    #[serde(flatten)]
    pub changes: ArticleChanges,
}
