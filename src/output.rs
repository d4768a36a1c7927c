use std::cmp::Ordering;

use anyhow::{Context, Result};

use crate::SizeValue;
use crate::config::{Command, Config, OutputConfig};

/// Runs the configured command and returns the lines to print.
pub fn render(config: &Config) -> Result<Vec<String>> {
    let out = &config.output_config;
    let mut lines = Vec::new();

    match &config.command {
        Command::Parse(texts) => {
            for text in texts {
                match SizeValue::try_parse(text) {
                    Some(value) => lines.push(format_value(&value, out)),
                    None => log::warn!("Could not parse '{text}', skipping"),
                }
            }
        }
        Command::Normalize(bytes) => {
            for &b in bytes {
                let value = SizeValue::find_unit(b)
                    .with_context(|| format!("Cannot normalize {b} bytes"))?;
                lines.push(format_value(&value, out));
            }
        }
        Command::File(paths) => {
            for path in paths {
                let value = SizeValue::from_path(path)
                    .with_context(|| format!("Cannot size {}", path.display()))?;
                lines.push(format!("{}\t{}", format_value(&value, out), path.display()));
            }
        }
        Command::Compare(left, right) => {
            let symbol = match left.cmp(right) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            lines.push(format!(
                "{} {symbol} {}",
                format_value(left, out),
                format_value(right, out)
            ));
        }
    }

    Ok(lines)
}

fn format_value(value: &SizeValue, out: &OutputConfig) -> String {
    let value = match out.target {
        Some(unit) => value.convert(unit),
        None => *value,
    };
    if out.rate {
        value.to_rate_string()
    } else {
        value.to_string()
    }
}
