//! HTML head and social preview metadata.

use std::fmt;

use crate::SiteConfig;

/// Which attribute names a `<meta>` element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name="...">`
    Name(&'static str),
    /// `<meta property="...">`, used by Open Graph
    Property(&'static str),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub content: String,
}

impl MetaTag {
    fn name(name: &'static str, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Name(name),
            content: content.into(),
        }
    }

    fn property(property: &'static str, content: impl Into<String>) -> Self {
        Self {
            key: MetaKey::Property(property),
            content: content.into(),
        }
    }
}

impl fmt::Display for MetaTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (attr, value) = match self.key {
            MetaKey::Name(name) => ("name", name),
            MetaKey::Property(property) => ("property", property),
        };
        write!(
            f,
            r#"<meta {attr}="{value}" content="{}">"#,
            escape_attr(&self.content)
        )
    }
}

/// Value for `<html lang="...">`.
pub fn html_lang(config: &SiteConfig) -> &str {
    &config.site_language
}

/// Opening `<html>` tag carrying the site language.
pub fn html_lang_tag(config: &SiteConfig) -> String {
    format!(r#"<html lang="{}">"#, escape_attr(html_lang(config)))
}

/// Absolute URL of the banner image.
pub fn banner_url(config: &SiteConfig) -> String {
    let base = crate::base_url(config);
    let banner = config.site_banner.trim_start_matches('/');
    format!("{base}/{banner}")
}

/// Meta tags for the site's landing page.
///
/// Handles left empty in the config produce no tag at all.
pub fn head_tags(config: &SiteConfig) -> Vec<MetaTag> {
    let image = banner_url(config);
    let mut tags = vec![
        MetaTag::name("description", &config.site_description),
        MetaTag::name("image", &image),
        MetaTag::property("og:locale", &config.og_language),
        MetaTag::property("og:url", crate::base_url(config)),
        MetaTag::property("og:type", "website"),
        MetaTag::property("og:title", &config.site_title),
        MetaTag::property("og:description", &config.site_description),
        MetaTag::property("og:image", &image),
        MetaTag::property("og:image:alt", &config.site_description),
    ];
    if !config.og_site_name.is_empty() {
        tags.push(MetaTag::property("og:site_name", &config.og_site_name));
    }
    if !config.site_fb_app_id.is_empty() {
        tags.push(MetaTag::property("fb:app_id", &config.site_fb_app_id));
    }

    tags.push(MetaTag::name("twitter:card", "summary_large_image"));
    if !config.user_twitter.is_empty() {
        tags.push(MetaTag::name("twitter:creator", &config.user_twitter));
    }
    tags.push(MetaTag::name("twitter:title", &config.site_title));
    tags.push(MetaTag::name("twitter:description", &config.site_description));
    tags.push(MetaTag::name("twitter:image", &image));
    tags.push(MetaTag::name("twitter:image:alt", &config.site_description));

    tags
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}
