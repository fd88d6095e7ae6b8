use std::num::NonZeroU32;
use std::path;

const DEFAULT_POST_PER_PAGE: NonZeroU32 = match NonZeroU32::new(4) {
    Some(n) => n,
    None => panic!("page size must be positive"),
};

/// Metadata describing the site as a whole.
///
/// Keys keep the names templates already know (`siteTitle`, `POST_PER_PAGE`, ...), so a
/// `_site.yml` can be dropped in from an existing theme unchanged.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
#[cfg_attr(feature = "unstable", serde(deny_unknown_fields))]
#[cfg_attr(not(feature = "unstable"), non_exhaustive)]
pub struct SiteConfig {
    /// Directory the record was loaded from.
    #[serde(skip)]
    pub root: path::PathBuf,
    /// Prefix for all internal links, e.g. `/` or `/portfolio`.
    #[serde(rename = "pathPrefix")]
    pub path_prefix: String,
    /// Navigation and site title.
    #[serde(rename = "siteTitle")]
    pub site_title: String,
    /// Alternative title for SEO.
    #[serde(rename = "siteTitleAlt")]
    pub site_title_alt: String,
    /// Domain of the site, without a trailing slash.
    #[serde(rename = "siteUrl")]
    pub site_url: String,
    /// Language tag for `<html lang>`.
    #[serde(rename = "siteLanguage")]
    pub site_language: String,
    /// Image used for `og:image`.
    #[serde(rename = "siteBanner")]
    pub site_banner: String,
    /// Default background for post headers.
    #[serde(rename = "defaultBg")]
    pub default_bg: String,
    /// Source image for favicons.
    pub favicon: String,
    #[serde(rename = "siteDescription")]
    pub site_description: String,
    pub author: String,
    /// Facebook App ID, empty when unused.
    #[serde(rename = "siteFBAppID")]
    pub site_fb_app_id: String,
    /// Twitter handle, empty when unused.
    #[serde(rename = "userTwitter")]
    pub user_twitter: String,
    /// Facebook site name, empty when unused.
    #[serde(rename = "ogSiteName")]
    pub og_site_name: String,
    #[serde(rename = "ogLanguage")]
    pub og_language: String,
    #[serde(rename = "themeColor")]
    pub theme_color: String,
    #[serde(rename = "backgroundColor")]
    pub background_color: String,
    #[serde(rename = "headerFontFamily")]
    pub header_font_family: String,
    #[serde(rename = "bodyFontFamily")]
    pub body_font_family: String,
    /// CSS length, e.g. `18px`.
    #[serde(rename = "baseFontSize")]
    pub base_font_size: String,
    #[serde(rename = "Google_Tag_Manager_ID")]
    pub google_tag_manager_id: String,
    /// Number of posts per listing page.
    #[serde(rename = "POST_PER_PAGE")]
    pub post_per_page: NonZeroU32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: Default::default(),
            path_prefix: "/".to_owned(),
            site_title: "Coding with J.S.".to_owned(),
            site_title_alt: "Jordi Sicart on JavaScript".to_owned(),
            site_url: "https://codingwithjs.rocks".to_owned(),
            site_language: "en".to_owned(),
            site_banner: "/assets/banner.jpg".to_owned(),
            default_bg: "/assets/bg/canigou.jpg".to_owned(),
            favicon: "src/favicon.png".to_owned(),
            site_description: "Let's explore JS".to_owned(),
            author: "Jordi Sicart".to_owned(),
            site_fb_app_id: String::new(),
            user_twitter: "@mhadaily".to_owned(),
            og_site_name: "mhadaily".to_owned(),
            og_language: "en_US".to_owned(),
            theme_color: "#3498DB".to_owned(),
            background_color: "#2b2e3c".to_owned(),
            header_font_family: "Bitter".to_owned(),
            body_font_family: "Open Sans".to_owned(),
            base_font_size: "18px".to_owned(),
            google_tag_manager_id: "GTM-XXXXXXX".to_owned(),
            post_per_page: DEFAULT_POST_PER_PAGE,
        }
    }
}
