//! What a model card shows, computed from its [`ModelInfo`].

use crate::types::model::{Locale, ModelInfo};

/// One image on the card, with its alt text
#[derive(Debug, Clone, PartialEq)]
pub struct ImageTile {
    pub src: String,
    pub alt: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSite {
    HuggingFace,
    Civitai,
}

impl LinkSite {
    pub fn label(self) -> &'static str {
        match self {
            LinkSite::HuggingFace => "Hugging Face",
            LinkSite::Civitai => "Civitai",
        }
    }
}

/// External link button opened in a new browsing context
#[derive(Debug, Clone, PartialEq)]
pub struct ExternalLink {
    pub site: LinkSite,
    pub href: String,
}

impl ExternalLink {
    pub const TARGET: &'static str = "_blank";
    pub const REL: &'static str = "noopener noreferrer";
}

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub title: String,
    pub description: String,
    pub details_label: &'static str,
    pub cover: ImageTile,
    pub samples: Vec<ImageTile>,
    pub links: Vec<ExternalLink>,
}

impl CardView {
    pub fn from_model(model: &ModelInfo, locale: Locale) -> Self {
        let samples = model
            .sample_images
            .iter()
            .enumerate()
            .map(|(index, src)| ImageTile {
                src: src.clone(),
                alt: format!("Sample image {} for {}", index + 1, model.title),
            })
            .collect();

        let links = [
            (LinkSite::HuggingFace, &model.huggingface_url),
            (LinkSite::Civitai, &model.civitai_url),
        ]
        .into_iter()
        .filter_map(|(site, url)| {
            url.as_ref().map(|href| ExternalLink {
                site,
                href: href.clone(),
            })
        })
        .collect();

        Self {
            title: model.title.clone(),
            description: model.description.get(locale).to_string(),
            details_label: locale.view_details_label(),
            cover: ImageTile {
                src: model.cover_image.clone(),
                alt: format!("Cover image for {}", model.title),
            },
            samples,
            links,
        }
    }

    /// The sample strip is only rendered when there is something to show
    pub fn shows_carousel(&self) -> bool {
        !self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::model::LocalizedText;

    fn model(samples: &[&str]) -> ModelInfo {
        ModelInfo {
            title: "A".to_string(),
            model_name: "a-1".to_string(),
            description: LocalizedText {
                en_us: "english".to_string(),
                zh_cn: "中文".to_string(),
            },
            huggingface_url: None,
            civitai_url: None,
            cover_image: "c.png".to_string(),
            sample_images: samples.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_two_samples_and_no_links() {
        let view = CardView::from_model(&model(&["s1.png", "s2.png"]), Locale::ZhCn);

        assert!(view.shows_carousel());
        assert_eq!(
            view.samples,
            vec![
                ImageTile {
                    src: "s1.png".to_string(),
                    alt: "Sample image 1 for A".to_string()
                },
                ImageTile {
                    src: "s2.png".to_string(),
                    alt: "Sample image 2 for A".to_string()
                },
            ]
        );
        assert!(view.links.is_empty());
        assert_eq!(view.cover.alt, "Cover image for A");
    }

    #[test]
    fn test_no_samples_hides_carousel() {
        let view = CardView::from_model(&model(&[]), Locale::ZhCn);
        assert!(!view.shows_carousel());
    }

    #[test]
    fn test_links_follow_present_urls() {
        let mut info = model(&[]);
        info.civitai_url = Some("https://civitai.com/models/7".to_string());
        let view = CardView::from_model(&info, Locale::ZhCn);
        assert_eq!(
            view.links,
            vec![ExternalLink {
                site: LinkSite::Civitai,
                href: "https://civitai.com/models/7".to_string()
            }]
        );

        info.huggingface_url = Some("https://huggingface.co/org/a".to_string());
        let view = CardView::from_model(&info, Locale::ZhCn);
        let sites: Vec<_> = view.links.iter().map(|link| link.site).collect();
        assert_eq!(sites, vec![LinkSite::HuggingFace, LinkSite::Civitai]);
        assert_eq!(ExternalLink::TARGET, "_blank");
        assert_eq!(ExternalLink::REL, "noopener noreferrer");
    }

    #[test]
    fn test_description_follows_locale() {
        let info = model(&[]);
        assert_eq!(CardView::from_model(&info, Locale::ZhCn).description, "中文");
        let english = CardView::from_model(&info, Locale::EnUs);
        assert_eq!(english.description, "english");
        assert_eq!(english.details_label, "View details");
    }
}
