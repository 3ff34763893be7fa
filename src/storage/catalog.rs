//! Model catalog
//!
//! Reads the list of models shown in the gallery from a JSON file.

use crate::storage::StorageError;
use crate::types::model::ModelInfo;
use std::collections::HashSet;
use std::path::Path;

/// Load the catalog asynchronously
///
/// A missing file is an empty catalog.
pub async fn load_catalog(path: &Path) -> Result<Vec<ModelInfo>, StorageError> {
    if !tokio::fs::try_exists(path).await? {
        tracing::info!("Catalog {} not found, gallery is empty", path.display());
        return Ok(Vec::new());
    }

    let json = tokio::fs::read_to_string(path).await?;
    parse_catalog(&json)
}

/// Parse catalog JSON, keeping the first model for each `model_name`
pub fn parse_catalog(json: &str) -> Result<Vec<ModelInfo>, StorageError> {
    let models: Vec<ModelInfo> = serde_json::from_str(json)?;
    let total = models.len();

    let mut seen = HashSet::new();
    let models: Vec<ModelInfo> = models
        .into_iter()
        .filter(|model| {
            let fresh = seen.insert(model.model_name.clone());
            if !fresh {
                tracing::warn!("Duplicate model_name '{}' in catalog, skipping", model.model_name);
            }
            fresh
        })
        .collect();

    tracing::debug!("Parsed catalog: {} of {} entries kept", models.len(), total);
    Ok(models)
}

/// Find a model by its identifier
pub fn find_model<'a>(models: &'a [ModelInfo], model_name: &str) -> Option<&'a ModelInfo> {
    models.iter().find(|model| model.model_name == model_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"[
        {
            "title": "A",
            "model_name": "a-1",
            "description": { "en_US": "first", "zh_CN": "第一" },
            "cover_image": "c.png",
            "sample_images": ["s1.png", "s2.png"]
        },
        {
            "title": "B",
            "model_name": "b-2",
            "description": { "en_US": "second", "zh_CN": "第二" },
            "civitai_url": "https://civitai.com/models/2",
            "cover_image": "b.png",
            "sample_images": []
        },
        {
            "title": "A again",
            "model_name": "a-1",
            "description": { "en_US": "dup", "zh_CN": "重复" },
            "cover_image": "d.png"
        }
    ]"#;

    #[test]
    fn test_duplicates_keep_first() {
        let models = parse_catalog(CATALOG).unwrap();
        assert_eq!(models.len(), 2);
        assert_eq!(models[0].title, "A");
        assert_eq!(models[1].model_name, "b-2");
    }

    #[test]
    fn test_find_model() {
        let models = parse_catalog(CATALOG).unwrap();
        assert_eq!(find_model(&models, "b-2").map(|m| m.title.as_str()), Some("B"));
        assert!(find_model(&models, "missing").is_none());
    }

    #[test]
    fn test_invalid_catalog() {
        assert!(matches!(parse_catalog("{}"), Err(StorageError::Json(_))));
    }

    #[tokio::test]
    async fn test_load_catalog_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("models.json");
        tokio::fs::write(&path, CATALOG).await.unwrap();

        let models = load_catalog(&path).await.unwrap();
        assert_eq!(models.len(), 2);
    }

    #[tokio::test]
    async fn test_missing_catalog_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let models = load_catalog(&dir.path().join("models.json")).await.unwrap();
        assert!(models.is_empty());
    }
}
