//! Model types
//!
//! Defines the model metadata rendered by the gallery cards.

use serde::{Deserialize, Deserializer, Serialize};

/// Language used to pick one side of a [`LocalizedText`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[serde(rename = "en_US")]
    EnUs,
    #[default]
    #[serde(rename = "zh_CN")]
    ZhCn,
}

impl Locale {
    /// Label of the trigger that opens the full description
    pub fn view_details_label(self) -> &'static str {
        match self {
            Locale::EnUs => "View details",
            Locale::ZhCn => "查看详情",
        }
    }
}

/// Bilingual text pair
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocalizedText {
    #[serde(rename = "en_US", default)]
    pub en_us: String,
    #[serde(rename = "zh_CN", default)]
    pub zh_cn: String,
}

impl LocalizedText {
    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::EnUs => &self.en_us,
            Locale::ZhCn => &self.zh_cn,
        }
    }
}

/// Metadata for one model shown in the gallery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// Display title
    pub title: String,
    /// Unique identifier, also the detail route segment
    pub model_name: String,
    pub description: LocalizedText,
    /// Hugging Face page, if any
    #[serde(default, deserialize_with = "non_empty_url", skip_serializing_if = "Option::is_none")]
    pub huggingface_url: Option<String>,
    /// Civitai page, if any
    #[serde(default, deserialize_with = "non_empty_url", skip_serializing_if = "Option::is_none")]
    pub civitai_url: Option<String>,
    pub cover_image: String,
    #[serde(default)]
    pub sample_images: Vec<String>,
}

/// Blank URLs in a catalog mean "not provided".
fn non_empty_url<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|url| !url.trim().is_empty()))
}
