use std::env;
use std::io::Write;
use std::path;

use anyhow::Context as _;
use sitemeta::SiteConfig;

use crate::debug;
use crate::init;

/// Inspect and scaffold site metadata
#[derive(Debug, clap::Parser)]
#[command(name = "sitemeta", version, about)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,

    #[command(flatten)]
    pub(crate) verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,

    #[command(flatten)]
    pub(crate) color: colorchoice_clap::Color,
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Subcommand)]
pub(crate) enum Command {
    Init(init::InitArgs),

    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

impl Command {
    pub(crate) fn run(&self) -> anyhow::Result<()> {
        match self {
            Self::Init(cmd) => cmd.run(),
            Self::Debug(cmd) => cmd.run(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, clap::Args)]
pub(crate) struct ConfigArgs {
    /// Config file to use [default: _site.yml]
    #[arg(short, long, value_name = "FILE")]
    config: Option<path::PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn load_config(&self) -> anyhow::Result<SiteConfig> {
        let config = if let Some(config_path) = self.config.as_deref() {
            SiteConfig::from_file(config_path).with_context(|| {
                format!("Error reading config file {}", config_path.display())
            })?
        } else {
            let cwd = env::current_dir().context("Failed to read current directory")?;
            SiteConfig::from_cwd(cwd)?
        };

        Ok(config)
    }
}

pub(crate) fn init_logging(
    level: &clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
    colored: bool,
) {
    let Some(level) = level.log_level() else {
        return;
    };

    let mut builder = env_logger::Builder::new();
    builder.write_style(if colored {
        env_logger::WriteStyle::Always
    } else {
        env_logger::WriteStyle::Never
    });
    builder.filter(None, level.to_level_filter());
    builder.format(|f, record| {
        let style = level_style(record.level());
        let level = format!("[{}]", record.level()).to_lowercase();
        writeln!(f, "{style}{level:8}{style:#} {}", record.args())
    });

    builder.init();
}

fn level_style(level: log::Level) -> anstyle::Style {
    match level {
        log::Level::Error => anstyle::AnsiColor::Red.on_default().bold(),
        log::Level::Warn => anstyle::AnsiColor::Yellow.on_default(),
        log::Level::Info => anstyle::AnsiColor::Green.on_default(),
        log::Level::Debug => anstyle::AnsiColor::Blue.on_default(),
        log::Level::Trace => anstyle::AnsiColor::Cyan.on_default(),
    }
}
