use anyhow::Result;
use byteunit::{cli, config::Config, output};
use clap::Parser;
use logforth::{
    append,
    colored::Colorize,
    filter::{EnvFilter, env_filter::EnvFilterBuilder},
};

#[derive(Debug)]
pub struct CustomTextLayout {}
impl CustomTextLayout {
    fn new() -> Self {
        CustomTextLayout {}
    }
}

impl logforth::layout::Layout for CustomTextLayout {
    fn format(
        &self,
        record: &log::Record,
        _diagnostics: &[Box<dyn logforth::Diagnostic>],
    ) -> anyhow::Result<Vec<u8>> {
        let level_str = match record.level() {
            log::Level::Error => "ERROR".red().bold(),
            log::Level::Warn => "WARN".yellow().bold(),
            log::Level::Info => "INFO".green().bold(),
            log::Level::Debug => "DEBUG".blue().bold(),
            log::Level::Trace => "TRACE".purple().bold(),
        };

        let formatted = format!("[{}] {}", level_str, record.args());
        Ok(formatted.into_bytes())
    }
}

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let filter_builder = EnvFilterBuilder::try_from_env("BYTEUNIT_LOG").unwrap_or_else(|| {
        let default_level = if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        EnvFilterBuilder::new().filter_level(default_level)
    });

    logforth::builder()
        .dispatch(|d| {
            d.filter(EnvFilter::new(filter_builder))
                .append(append::Stderr::default().with_layout(CustomTextLayout::new()))
        })
        .apply();

    log::debug!("Starting byteunit v{}", env!("CARGO_PKG_VERSION"));
    let config = Config::from_cli(&cli)?;
    for line in output::render(&config)? {
        println!("{line}");
    }
    Ok(())
}
