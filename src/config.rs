use crate::cli::{Cli, CliCommand};
use crate::{SizeValue, Unit};
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub command: Command,
    pub output_config: OutputConfig,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(Config {
            command: Command::from_cli(&cli.command)?,
            output_config: OutputConfig::from_cli(cli)?,
        })
    }
}

#[derive(Debug, Clone)]
pub enum Command {
    /// Raw strings; unparseable ones are skipped at render time
    Parse(Vec<String>),
    Normalize(Vec<f64>),
    File(Vec<PathBuf>),
    Compare(SizeValue, SizeValue),
}

impl Command {
    fn from_cli(command: &CliCommand) -> Result<Self> {
        match command {
            CliCommand::Parse { texts } => Ok(Command::Parse(texts.clone())),
            CliCommand::Normalize { bytes } => {
                for &b in bytes {
                    anyhow::ensure!(b.is_finite(), "Byte count must be finite: {b}");
                    anyhow::ensure!(b >= 0.0, "Byte count cannot be negative: {b}");
                }
                Ok(Command::Normalize(bytes.clone()))
            }
            CliCommand::File { paths } => {
                let existing: Vec<PathBuf> = paths
                    .iter()
                    .filter(|path| {
                        let exists = path.exists();
                        if !exists {
                            log::warn!("Skipping missing path: {}", path.display());
                        }
                        exists
                    })
                    .cloned()
                    .collect();

                if existing.is_empty() {
                    anyhow::bail!(
                        "Given paths do not exist: {}",
                        paths
                            .iter()
                            .map(|path| path.display().to_string())
                            .collect::<Vec<_>>()
                            .join(", ")
                    )
                }
                Ok(Command::File(existing))
            }
            CliCommand::Compare { left, right } => {
                let left = SizeValue::parse(left)
                    .with_context(|| format!("Invalid left operand: {left}"))?;
                let right = SizeValue::parse(right)
                    .with_context(|| format!("Invalid right operand: {right}"))?;
                Ok(Command::Compare(left, right))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub target: Option<Unit>,
    pub rate: bool,
}

impl OutputConfig {
    fn from_cli(cli: &Cli) -> Result<Self> {
        Ok(OutputConfig {
            target: cli.unit.map(Unit::from),
            rate: cli.rate,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> Result<Config> {
        let cli = Cli::try_parse_from(args)?;
        Config::from_cli(&cli)
    }

    #[test]
    fn output_options() {
        let config = config(&["byteunit", "--unit", "MB", "-r", "parse", "5GB"]).unwrap();
        assert_eq!(config.output_config.target, Some(Unit::Megabyte));
        assert!(config.output_config.rate);
        assert!(matches!(config.command, Command::Parse(ref texts) if texts == &["5GB"]));
    }

    #[test]
    fn defaults() {
        let config = config(&["byteunit", "normalize", "1025"]).unwrap();
        assert_eq!(config.output_config.target, None);
        assert!(!config.output_config.rate);
        assert!(matches!(config.command, Command::Normalize(ref b) if b == &[1025.0]));
    }

    #[test]
    fn normalize_rejects_negative() {
        assert!(config(&["byteunit", "normalize", "-5"]).is_err());
    }

    #[test]
    fn compare_parses_operands() {
        let config = config(&["byteunit", "compare", "1 GB", "999 MB"]).unwrap();
        match config.command {
            Command::Compare(left, right) => {
                assert_eq!(left, SizeValue::from_gigabytes(1).unwrap());
                assert_eq!(right, SizeValue::from_megabytes(999).unwrap());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn compare_rejects_garbage() {
        let err = config(&["byteunit", "compare", "1 GB", "lots"]).unwrap_err();
        assert!(err.to_string().contains("Invalid right operand"));
    }

    #[test]
    fn file_requires_existing_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let missing = missing.to_str().unwrap();
        assert!(config(&["byteunit", "file", missing]).is_err());

        let present = dir.path().to_str().unwrap();
        let config = config(&["byteunit", "file", missing, present]).unwrap();
        assert!(matches!(config.command, Command::File(ref p) if p.len() == 1));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(config(&["byteunit"]).is_err());
    }
}
