//! Typographic settings for stylesheets.

use std::fmt;

use crate::SiteConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typography {
    pub base_font_size: String,
    pub header_font_family: String,
    pub body_font_family: String,
}

impl Typography {
    pub fn from_config(config: &SiteConfig) -> Self {
        Self {
            base_font_size: config.base_font_size.clone(),
            header_font_family: config.header_font_family.clone(),
            body_font_family: config.body_font_family.clone(),
        }
    }
}

/// Renders a `:root` rule with one custom property per setting.
impl fmt::Display for Typography {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, ":root {{")?;
        writeln!(f, "  --base-font-size: {};", self.base_font_size)?;
        writeln!(
            f,
            "  --header-font-family: {};",
            quote_family(&self.header_font_family)
        )?;
        writeln!(
            f,
            "  --body-font-family: {};",
            quote_family(&self.body_font_family)
        )?;
        writeln!(f, "}}")
    }
}

fn quote_family(family: &str) -> String {
    let escaped = family.replace('\\', "\\\\").replace('"', "\\\"");
    format!("\"{escaped}\"")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_default_config() {
        let typography = Typography::from_config(&SiteConfig::default());
        assert_eq!(typography.base_font_size, "18px");
        assert_eq!(typography.header_font_family, "Bitter");
        assert_eq!(typography.body_font_family, "Open Sans");
    }

    #[test]
    fn renders_custom_properties() {
        let css = Typography::from_config(&SiteConfig::default()).to_string();
        assert_eq!(
            css,
            ":root {\n  --base-font-size: 18px;\n  --header-font-family: \"Bitter\";\n  --body-font-family: \"Open Sans\";\n}\n"
        );
    }

    #[test]
    fn quotes_inside_family_are_escaped() {
        assert_eq!(quote_family(r#"My "Serif""#), r#""My \"Serif\"""#);
    }
}
