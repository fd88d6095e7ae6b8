pub mod head;
pub mod manifest;
pub mod schema;
pub mod template;
pub mod typography;

mod init;

pub use crate::head::{MetaTag, head_tags, html_lang, html_lang_tag};
pub use crate::init::create_new_project;
pub use crate::manifest::Manifest;
pub use crate::schema::{website_json_ld, website_script_tag};
pub use crate::template::site_object;
pub use crate::typography::Typography;
pub use sitemeta_config as config;
pub use sitemeta_config::SiteConfig;

pub type Result<T, E = anyhow::Error> = std::result::Result<T, E>;

/// `siteUrl` without a trailing slash.
pub fn base_url(config: &SiteConfig) -> &str {
    config.site_url.trim_end_matches('/')
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn base_url_drops_trailing_slash() {
        let mut config = SiteConfig::default();
        config.site_url = "https://example.com/".to_owned();
        assert_eq!(base_url(&config), "https://example.com");
    }

    #[test]
    fn base_url_keeps_clean_url() {
        let config = SiteConfig::default();
        assert_eq!(base_url(&config), "https://codingwithjs.rocks");
    }
}
