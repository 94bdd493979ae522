//! Public model catalog for `list available`.
//!
//! The catalog page at <https://ollama.com/library> is fetched once and
//! cached as JSON under the user's home directory; later invocations read
//! the cache instead of hitting the network.

use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::UserDirs;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::api::{CATALOG_CACHE_FILE, LIBRARY_URL, REQUEST_TIMEOUT_SECS};
use crate::error::{AiTermError, Result};

/// One downloadable model from the public library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogModel {
    pub name: String,
    /// Capability tags shown on the page ("tools", "vision", ...).
    pub tags: String,
}

/// Cache file layout.
#[derive(Debug, Serialize, Deserialize)]
struct CatalogCache {
    /// Unix timestamp of the fetch, kept for operators inspecting the file.
    date: i64,
    models: Vec<CatalogModel>,
}

/// Fetches the public catalog, preferring the local cache file.
pub struct ModelCatalog {
    cache_path: PathBuf,
}

impl ModelCatalog {
    pub fn new() -> Result<Self> {
        let dirs = UserDirs::new().ok_or_else(|| {
            AiTermError::Config("Could not determine the user home directory".to_string())
        })?;
        Ok(Self {
            cache_path: dirs.home_dir().join(CATALOG_CACHE_FILE),
        })
    }

    /// Cache location override for tests.
    pub fn with_cache_path(cache_path: impl Into<PathBuf>) -> Self {
        Self {
            cache_path: cache_path.into(),
        }
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Returns the available models, from cache when possible.
    pub async fn models(&self) -> Result<Vec<CatalogModel>> {
        if let Some(models) = self.read_cache() {
            tracing::debug!("Read {} catalog entries from cache", models.len());
            return Ok(models);
        }

        let html = self.fetch_library_page().await?;
        let models = parse_library_html(&html);
        if models.is_empty() {
            return Err(AiTermError::Other(
                "Could not find any models on the library page; its layout may have changed"
                    .to_string(),
            ));
        }

        self.write_cache(&models)?;
        Ok(models)
    }

    fn read_cache(&self) -> Option<Vec<CatalogModel>> {
        let content = std::fs::read_to_string(&self.cache_path).ok()?;
        match serde_json::from_str::<CatalogCache>(&content) {
            Ok(cache) if !cache.models.is_empty() => Some(cache.models),
            Ok(_) => None,
            Err(e) => {
                tracing::warn!(
                    "Ignoring corrupt catalog cache {}: {}",
                    self.cache_path.display(),
                    e
                );
                None
            }
        }
    }

    fn write_cache(&self, models: &[CatalogModel]) -> Result<()> {
        let cache = CatalogCache {
            date: chrono::Utc::now().timestamp(),
            models: models.to_vec(),
        };
        std::fs::write(&self.cache_path, serde_json::to_string_pretty(&cache)?)?;
        tracing::debug!("Cached {} catalog entries", models.len());
        Ok(())
    }

    async fn fetch_library_page(&self) -> Result<String> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(AiTermError::Network)?;

        tracing::debug!("GET {}", LIBRARY_URL);
        let response = client.get(LIBRARY_URL).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AiTermError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(body)
    }
}

/// Extracts model names and capability tags from the library page.
///
/// Each model is rendered as an `<li>` whose `<h2>` holds the name and
/// whose highlighted `<span>`s hold the capability tags. The page is not
/// a stable API, so anything unparseable is simply skipped.
pub fn parse_library_html(html: &str) -> Vec<CatalogModel> {
    let item_re = Regex::new(r"(?s)<li[^>]*>(.*?)</li>").expect("valid regex");
    let name_re = Regex::new(r"(?s)<h2[^>]*>(.*?)</h2>").expect("valid regex");
    let tag_re = Regex::new(r#"(?s)<span[^>]*capability[^>]*>(.*?)</span>"#).expect("valid regex");

    let mut models = Vec::new();
    for item in item_re.captures_iter(html) {
        let block = &item[1];
        let Some(name_caps) = name_re.captures(block) else {
            continue;
        };
        let name = strip_markup(&name_caps[1]);
        if name.is_empty() {
            continue;
        }

        let tags: Vec<String> = tag_re
            .captures_iter(block)
            .map(|c| strip_markup(&c[1]))
            .filter(|t| !t.is_empty())
            .collect();

        models.push(CatalogModel {
            name,
            tags: tags.join(", "),
        });
    }
    models
}

/// Drops nested tags and collapses whitespace.
fn strip_markup(fragment: &str) -> String {
    let tag_re = Regex::new(r"<[^>]+>").expect("valid regex");
    let text = tag_re.replace_all(fragment, " ");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const SAMPLE_HTML: &str = r#"
        <ul id="repo">
          <li class="flex"><a href="/library/llama3.2">
            <h2 class="truncate">llama3.2</h2>
            <span class="capability">tools</span>
          </a></li>
          <li class="flex"><a href="/library/llava">
            <h2><span>llava</span></h2>
            <span class="capability">vision</span>
            <span class="capability">tools</span>
          </a></li>
          <li class="flex"><a href="/other"><p>no heading here</p></a></li>
        </ul>
    "#;

    #[test]
    fn test_parse_library_html() {
        let models = parse_library_html(SAMPLE_HTML);
        assert_eq!(
            models,
            vec![
                CatalogModel {
                    name: "llama3.2".to_string(),
                    tags: "tools".to_string(),
                },
                CatalogModel {
                    name: "llava".to_string(),
                    tags: "vision, tools".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_parse_library_html_empty_input() {
        assert!(parse_library_html("").is_empty());
        assert!(parse_library_html("<ul><li>nothing</li></ul>").is_empty());
    }

    #[tokio::test]
    async fn test_models_prefers_cache() {
        let dir = TempDir::new().unwrap();
        let catalog = ModelCatalog::with_cache_path(dir.path().join(CATALOG_CACHE_FILE));

        let cached = CatalogCache {
            date: 0,
            models: vec![CatalogModel {
                name: "qwen2.5-coder".to_string(),
                tags: "tools".to_string(),
            }],
        };
        std::fs::write(
            catalog.cache_path(),
            serde_json::to_string(&cached).unwrap(),
        )
        .unwrap();

        // No network fetch happens when the cache is readable.
        let models = catalog.models().await.unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].name, "qwen2.5-coder");
    }

    #[test]
    fn test_corrupt_cache_is_ignored() {
        let dir = TempDir::new().unwrap();
        let catalog = ModelCatalog::with_cache_path(dir.path().join(CATALOG_CACHE_FILE));
        std::fs::write(catalog.cache_path(), "{broken").unwrap();
        assert!(catalog.read_cache().is_none());
    }
}
