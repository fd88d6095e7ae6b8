use crate::args;

/// Print site metadata
#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum DebugCommands {
    /// Prints the loaded config
    Config {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints `<html lang>` and the head meta tags
    Head {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the web app manifest
    Manifest {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the typography settings as CSS custom properties
    Typography {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },

    /// Prints the schema.org JSON-LD for the site
    Schema {
        #[command(flatten, next_help_heading = "Config")]
        config: args::ConfigArgs,
    },
}

impl DebugCommands {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Config { config } => {
                let config = config.load_config()?;
                print!("{config}");
            }
            Self::Head { config } => {
                let config = config.load_config()?;
                println!("{}", sitemeta::html_lang_tag(&config));
                for tag in sitemeta::head_tags(&config) {
                    println!("{tag}");
                }
            }
            Self::Manifest { config } => {
                let config = config.load_config()?;
                let manifest = sitemeta::Manifest::from_config(&config);
                println!("{}", manifest.to_json()?);
            }
            Self::Typography { config } => {
                let config = config.load_config()?;
                print!("{}", sitemeta::Typography::from_config(&config));
            }
            Self::Schema { config } => {
                let config = config.load_config()?;
                let json = serde_json::to_string_pretty(&sitemeta::website_json_ld(&config))?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
