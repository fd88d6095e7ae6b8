//! Web app manifest.

use crate::SiteConfig;

const DISPLAY: &str = "minimal-ui";

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Manifest {
    pub name: String,
    pub short_name: String,
    pub description: String,
    pub start_url: String,
    pub background_color: String,
    pub theme_color: String,
    pub display: &'static str,
    pub icons: Vec<Icon>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Icon {
    pub src: String,
}

impl Manifest {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            name: config.site_title.clone(),
            short_name: config.site_title_alt.clone(),
            description: config.site_description.clone(),
            start_url: config.path_prefix.clone(),
            background_color: config.background_color.clone(),
            theme_color: config.theme_color.clone(),
            display: DISPLAY,
            icons: vec![Icon {
                src: config.favicon.clone(),
            }],
        }
    }

    pub fn to_json(&self) -> crate::Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(json)
    }
}
