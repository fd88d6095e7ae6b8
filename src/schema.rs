//! schema.org JSON-LD describing the site and its author.

use serde_json::json;

use crate::SiteConfig;

/// A `WebSite` node whose `author` is a `Person`.
pub fn website_json_ld(config: &SiteConfig) -> serde_json::Value {
    json!({
        "@context": "https://schema.org",
        "@type": "WebSite",
        "url": crate::base_url(config),
        "name": config.site_title,
        "alternateName": config.site_title_alt,
        "description": config.site_description,
        "inLanguage": config.site_language,
        "image": crate::head::banner_url(config),
        "author": {
            "@type": "Person",
            "name": config.author,
        },
    })
}

/// Wraps the JSON-LD in the `<script>` element head templates embed.
pub fn website_script_tag(config: &SiteConfig) -> crate::Result<String> {
    let json = serde_json::to_string(&website_json_ld(config))?;
    // `</` would close the script element early
    let json = json.replace("</", "<\\/");
    Ok(format!(r#"<script type="application/ld+json">{json}</script>"#))
}
