//! Catalog Models

use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default = "default_true")]
    pub available: bool,
}

impl Product {
    /// Image to render, preferring the full-size asset over the thumbnail.
    pub fn display_image(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .filter(|u| !u.is_empty())
            .or_else(|| self.thumbnail_url.as_deref().filter(|u| !u.is_empty()))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Markdown-bodied notice shown on the landing page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShipmentAnnouncement {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_product() -> Product {
        Product {
            id: 1,
            name: "دستکش نیتریل".to_string(),
            category: Some("ایمنی".to_string()),
            description: None,
            image_url: None,
            thumbnail_url: None,
            available: true,
        }
    }

    #[test]
    fn display_image_prefers_full_size() {
        let mut p = make_product();
        assert_eq!(p.display_image(), None);
        p.thumbnail_url = Some("/media/thumb.jpg".to_string());
        assert_eq!(p.display_image(), Some("/media/thumb.jpg"));
        p.image_url = Some("/media/full.jpg".to_string());
        assert_eq!(p.display_image(), Some("/media/full.jpg"));
    }

    #[test]
    fn empty_url_strings_are_skipped() {
        let mut p = make_product();
        p.image_url = Some(String::new());
        p.thumbnail_url = Some("/media/thumb.jpg".to_string());
        assert_eq!(p.display_image(), Some("/media/thumb.jpg"));
    }

    #[test]
    fn availability_defaults_to_true() {
        let p: Product = serde_json::from_str(r#"{"id": 3, "name": "سیم جوش"}"#).unwrap();
        assert!(p.available);
    }
}
