//! Template data for the site record.

use liquid_core::model::{Object, Value};

use crate::SiteConfig;

/// Build the `site` object handed to templates.
///
/// Keys keep their configuration names. `siteUrl` has any trailing slash removed.
pub fn site_object(config: &SiteConfig) -> Object {
    let SiteConfig {
        path_prefix,
        site_title,
        site_title_alt,
        site_language,
        site_banner,
        default_bg,
        favicon,
        site_description,
        author,
        site_fb_app_id,
        user_twitter,
        og_site_name,
        og_language,
        theme_color,
        background_color,
        header_font_family,
        body_font_family,
        base_font_size,
        google_tag_manager_id,
        post_per_page,
        ..
    } = config;

    let mut attributes = Object::new();
    let mut insert = |key: &'static str, value: &str| {
        attributes.insert(key.into(), Value::scalar(value.to_owned()));
    };
    insert("pathPrefix", path_prefix);
    insert("siteTitle", site_title);
    insert("siteTitleAlt", site_title_alt);
    insert("siteUrl", crate::base_url(config));
    insert("siteLanguage", site_language);
    insert("siteBanner", site_banner);
    insert("defaultBg", default_bg);
    insert("favicon", favicon);
    insert("siteDescription", site_description);
    insert("author", author);
    insert("siteFBAppID", site_fb_app_id);
    insert("userTwitter", user_twitter);
    insert("ogSiteName", og_site_name);
    insert("ogLanguage", og_language);
    insert("themeColor", theme_color);
    insert("backgroundColor", background_color);
    insert("headerFontFamily", header_font_family);
    insert("bodyFontFamily", body_font_family);
    insert("baseFontSize", base_font_size);
    insert("Google_Tag_Manager_ID", google_tag_manager_id);
    attributes.insert(
        "POST_PER_PAGE".into(),
        Value::scalar(i64::from(post_per_page.get())),
    );

    log::trace!("site object has {} keys", attributes.len());
    attributes
}
