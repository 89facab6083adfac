//! Solutions (knowledge base) operations: categories, folders, articles.

use serde_json::Value;

use super::change_set;
use crate::client::{FreshdeskClient, RequestDescriptor};
use crate::error::FreshdeskError;
use crate::models::{
    flatten_articles, Article, Category, CategoryArticles, Folder, FolderArticles, SearchResults,
};
use crate::tools::{ArticleChanges, NewArticle};

impl FreshdeskClient {
    /// Lists all solution categories.
    ///
    /// Never fails: a transport or remote error, or a body that is not a
    /// list, is logged and yields an empty list. The article traversal
    /// relies on this.
    pub async fn get_categories(&self) -> Vec<Category> {
        let body: Value = match self
            .send_json(RequestDescriptor::get("/solutions/categories"))
            .await
        {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(
                    error = %e.sanitized_display(self.api_key_for_sanitization()),
                    "Failed to list solution categories, returning none"
                );
                return Vec::new();
            }
        };

        if !body.is_array() {
            tracing::warn!("Solution categories response is not a list, returning none");
            return Vec::new();
        }

        serde_json::from_value(body).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Failed to decode solution categories, returning none");
            Vec::new()
        })
    }

    /// Lists the folders of a category.
    pub async fn list_folders(&self, category_id: u64) -> Result<Vec<Folder>, FreshdeskError> {
        let path = format!("/solutions/categories/{}/folders", category_id);
        self.send_json(RequestDescriptor::get(path)).await
    }

    /// Lists the articles of a folder.
    pub async fn list_articles(&self, folder_id: u64) -> Result<Vec<Article>, FreshdeskError> {
        let path = format!("/solutions/folders/{}/articles", folder_id);
        self.send_json(RequestDescriptor::get(path)).await
    }

    /// Gets one article.
    pub async fn get_article(&self, article_id: u64) -> Result<Article, FreshdeskError> {
        let path = format!("/solutions/articles/{}", article_id);
        self.send_json(RequestDescriptor::get(path)).await
    }

    /// Full-text search over articles.
    ///
    /// The remote endpoint answers with either a bare list or an object
    /// carrying `results` and `total`; `total` is only set in the latter case.
    pub async fn search_articles(
        &self,
        term: &str,
    ) -> Result<SearchResults<Article>, FreshdeskError> {
        let request = RequestDescriptor::get("/search/solutions").with_query("term", term);
        let body: Value = self.send_json(request).await?;
        search_results(body)
    }

    /// Creates an article in a folder.
    pub async fn create_article(
        &self,
        folder_id: u64,
        article: &NewArticle,
    ) -> Result<Article, FreshdeskError> {
        let path = format!("/solutions/folders/{}/articles", folder_id);
        let body = serde_json::to_value(article)?;
        self.send_json(RequestDescriptor::post(path).with_json(body))
            .await
    }

    /// Updates an article. At least one attribute must change.
    pub async fn update_article(
        &self,
        article_id: u64,
        changes: &ArticleChanges,
    ) -> Result<Article, FreshdeskError> {
        let body = change_set(changes, "article")?;
        let path = format!("/solutions/articles/{}", article_id);
        self.send_json(RequestDescriptor::put(path).with_json(body))
            .await
    }

    /// Walks categories, folders and articles one request at a time.
    ///
    /// A category whose folders cannot be fetched, or a folder whose
    /// articles cannot be fetched, is kept with an `error` note and no
    /// children; the walk always completes.
    pub async fn solution_tree(&self) -> Vec<CategoryArticles> {
        let mut tree = Vec::new();

        for category in self.get_categories().await {
            let folders = match self.list_folders(category.id).await {
                Ok(folders) => folders,
                Err(e) => {
                    let message = e.sanitized_display(self.api_key_for_sanitization());
                    tracing::warn!(
                        category_id = category.id,
                        error = %message,
                        "Failed to list folders, skipping category"
                    );
                    tree.push(CategoryArticles {
                        category,
                        folders: Vec::new(),
                        error: Some(message),
                    });
                    continue;
                }
            };

            let mut entries = Vec::with_capacity(folders.len());
            for folder in folders {
                let entry = match self.list_articles(folder.id).await {
                    Ok(articles) => FolderArticles {
                        folder,
                        articles,
                        error: None,
                    },
                    Err(e) => {
                        let message = e.sanitized_display(self.api_key_for_sanitization());
                        tracing::warn!(
                            folder_id = folder.id,
                            error = %message,
                            "Failed to list articles, skipping folder"
                        );
                        FolderArticles {
                            folder,
                            articles: Vec::new(),
                            error: Some(message),
                        }
                    }
                };
                entries.push(entry);
            }

            tree.push(CategoryArticles {
                category,
                folders: entries,
                error: None,
            });
        }

        tree
    }

    /// Every article reachable from the category list, flattened.
    pub async fn get_all_articles(&self) -> Vec<Article> {
        flatten_articles(self.solution_tree().await)
    }
}

/// Interprets a search body that is either a list or `{results, total}`.
fn search_results(body: Value) -> Result<SearchResults<Article>, FreshdeskError> {
    match body {
        Value::Array(_) => Ok(SearchResults {
            results: serde_json::from_value(body)?,
            total: None,
        }),
        Value::Object(_) => Ok(serde_json::from_value(body)?),
        other => Err(FreshdeskError::unexpected(format!(
            "article search returned {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_results_from_list_has_no_total() {
        let results = search_results(json!([{"id": 1}, {"id": 2}])).unwrap();
        assert_eq!(results.results.len(), 2);
        assert_eq!(results.total, None);
    }

    #[test]
    fn test_search_results_from_object_keeps_total() {
        let results = search_results(json!({"results": [{"id": 1}], "total": 41})).unwrap();
        assert_eq!(results.results.len(), 1);
        assert_eq!(results.total, Some(41));
    }

    #[test]
    fn test_search_results_rejects_scalars() {
        let err = search_results(json!("nope")).unwrap_err();
        assert!(matches!(err, FreshdeskError::UnexpectedResponse(_)));
    }
}
