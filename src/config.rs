//! Site configuration loaded from JSON
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::error::Error;

/// Contents of `config/persona.json`: identity, navigation, palette.
/// Every field is defaulted so a sparse file still builds.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    #[serde(default = "default_site_name")]
    pub site_name: String,
    pub tagline: String,
    pub base_url: String,
    pub author_name: String,
    pub about_text: String,
    pub about_portrait: String,
    pub footer_icon: String,
    pub categories: Vec<String>,
    pub colors: BTreeMap<String, String>,
    pub fonts: BTreeMap<String, String>,
    pub blogroll: Vec<BlogrollEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogrollEntry {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub description: String,
}

fn default_site_name() -> String {
    "Blog".to_string()
}

impl SiteConfig {
    pub fn load(path: &Path) -> Result<Self, Error> {
        let data = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Template color slot with a fallback so every placeholder is filled
    pub fn color(&self, key: &str, default: &str) -> String {
        self.colors
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    pub fn font(&self, key: &str, default: &str) -> String {
        self.fonts
            .get(key)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    /// Name on the copyright line; falls back to the site name
    pub fn display_author(&self) -> &str {
        if self.author_name.is_empty() {
            &self.site_name
        } else {
            &self.author_name
        }
    }
}

/// Contents of `config/soul.json`, the slowly-evolving state behind the
/// about page's dynamic sections
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Soul {
    pub current_interests: Vec<String>,
    pub developing_opinions: Vec<Opinion>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Opinion {
    pub topic: String,
    pub stance: String,
}

impl Soul {
    /// A missing or malformed soul file is not an error; the about page
    /// just loses its dynamic sections
    pub fn load(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|data| serde_json::from_str(&data).ok())
            .unwrap_or_default()
    }
}
