use std::fmt;
use std::path;
use std::str::FromStr;

use super::*;

/// File name searched for when no explicit config path is given.
pub const CONFIG_FILE_NAME: &str = "_site.yml";

impl SiteConfig {
    pub fn from_file<P: Into<path::PathBuf>>(path: P) -> Result<SiteConfig> {
        Self::from_file_internal(path.into())
    }

    fn from_file_internal(path: path::PathBuf) -> Result<SiteConfig> {
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Status::new("Failed to read config")
                .with_source(e)
                .context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut config = content.parse::<SiteConfig>().map_err(|e| {
            e.context_with(|c| c.insert("Path", path.display().to_string()))
        })?;

        let mut root = path;
        root.pop(); // Remove filename
        if root == path::Path::new("") {
            root = path::Path::new(".").to_owned();
        }
        config.root = root;

        Ok(config)
    }

    pub fn from_cwd<P: Into<path::PathBuf>>(cwd: P) -> Result<SiteConfig> {
        Self::from_cwd_internal(cwd.into())
    }

    fn from_cwd_internal(cwd: path::PathBuf) -> Result<SiteConfig> {
        let file_path = find_project_file(&cwd, CONFIG_FILE_NAME);
        let config = file_path
            .map(|p| {
                log::debug!("Using config file `{}`", p.display());
                Self::from_file(&p)
            })
            .unwrap_or_else(|| {
                log::warn!(
                    "No {CONFIG_FILE_NAME} file found in current directory, using default config."
                );
                let config = SiteConfig {
                    root: cwd,
                    ..Default::default()
                };
                Ok(config)
            })?;
        Ok(config)
    }
}

impl FromStr for SiteConfig {
    type Err = Status;

    fn from_str(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(SiteConfig::default());
        }

        let config: SiteConfig = serde_yaml::from_str(content).map_err(|e| {
            let cause = e.to_string();
            Status::new("Failed to parse config")
                .with_source(e)
                .context_with(|c| c.insert("Cause", cause.clone()))
        })?;
        if config.site_url.ends_with('/') {
            log::warn!(
                "siteUrl `{}` has a trailing slash, links may be doubled",
                config.site_url
            );
        }
        Ok(config)
    }
}

impl fmt::Display for SiteConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let converted = serde_yaml::to_string(self).map_err(|_| fmt::Error)?;
        write!(f, "{converted}")
    }
}

fn find_project_file<P: Into<path::PathBuf>>(dir: P, name: &str) -> Option<path::PathBuf> {
    find_project_file_internal(dir.into(), name)
}

fn find_project_file_internal(dir: path::PathBuf, name: &str) -> Option<path::PathBuf> {
    let mut file_path = dir;
    file_path.push(name);
    while !file_path.exists() {
        file_path.pop(); // filename
        let hit_bottom = !file_path.pop();
        if hit_bottom {
            return None;
        }
        file_path.push(name);
    }
    Some(file_path)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_from_file_ok() {
        let result = SiteConfig::from_file("tests/fixtures/config/_site.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.site_title, "Notes from the Shed");
        assert_eq!(result.post_per_page.get(), 10);
        assert_eq!(result.user_twitter, "");
    }

    #[test]
    fn test_from_file_partial_keeps_defaults() {
        let result = SiteConfig::from_file("tests/fixtures/config/partial.yml").unwrap();
        assert_eq!(result.site_title, "Partial");
        assert_eq!(result.site_url, "https://codingwithjs.rocks");
        assert_eq!(result.post_per_page.get(), 4);
    }

    #[test]
    fn test_from_file_empty() {
        let result = SiteConfig::from_file("tests/fixtures/config/empty.yml").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
        assert_eq!(result.site_title, "Coding with J.S.");
    }

    #[test]
    fn test_from_file_invalid_syntax() {
        let result = SiteConfig::from_file("tests/fixtures/config/invalid_syntax.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_zero_per_page() {
        let result = SiteConfig::from_file("tests/fixtures/config/zero_per_page.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_not_found() {
        let result = SiteConfig::from_file("tests/fixtures/config/config_does_not_exist.yml");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_twice_is_identical() {
        let first = SiteConfig::from_file("tests/fixtures/config/_site.yml").unwrap();
        let second = SiteConfig::from_file("tests/fixtures/config/_site.yml").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_from_cwd_ok() {
        let result = SiteConfig::from_cwd("tests/fixtures/config/child").unwrap();
        assert_eq!(
            result.root,
            path::Path::new("tests/fixtures/config").to_path_buf()
        );
    }

    #[test]
    fn test_from_cwd_not_found() {
        let result = SiteConfig::from_cwd("tests/fixtures").unwrap();
        assert_eq!(result.root, path::Path::new("tests/fixtures").to_path_buf());
        assert_eq!(result.site_title, "Coding with J.S.");
    }

    #[test]
    fn from_str_empty_optional_fields() {
        let config: SiteConfig = "siteFBAppID: ''\nuserTwitter: ''\n".parse().unwrap();
        assert_eq!(config.site_fb_app_id, "");
        assert_eq!(config.user_twitter, "");
    }

    #[test]
    fn from_str_rejects_negative_per_page() {
        let result = "POST_PER_PAGE: -1\n".parse::<SiteConfig>();
        assert!(result.is_err());
    }

    #[test]
    fn from_str_error_names_the_cause() {
        let err = "POST_PER_PAGE: 0\n".parse::<SiteConfig>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Failed to parse config"), "{message}");
        assert!(message.contains("POST_PER_PAGE"), "{message}");
    }

    #[test]
    #[cfg(feature = "unstable")]
    fn from_str_rejects_unknown_keys() {
        let err = "siteTitel: typo\n".parse::<SiteConfig>().unwrap_err();
        assert!(err.to_string().contains("siteTitel"));
    }

    #[test]
    fn display_parses_back() {
        let config = SiteConfig::default();
        let text = config.to_string();
        assert!(text.contains("siteTitle: Coding with J.S."));
        assert_eq!(text.parse::<SiteConfig>().unwrap(), config);
    }

    #[test]
    fn find_project_file_same_dir() {
        let actual = find_project_file("tests/fixtures/config", CONFIG_FILE_NAME).unwrap();
        let expected = path::Path::new("tests/fixtures/config/_site.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_parent_dir() {
        let actual = find_project_file("tests/fixtures/config/child", CONFIG_FILE_NAME).unwrap();
        let expected = path::Path::new("tests/fixtures/config/_site.yml");
        assert_eq!(actual, expected);
    }

    #[test]
    fn find_project_file_doesnt_exist() {
        let expected = path::Path::new("<NOT FOUND>");
        let actual = find_project_file("tests/fixtures/", CONFIG_FILE_NAME)
            .unwrap_or_else(|| expected.into());
        assert_eq!(actual, expected);
    }
}
