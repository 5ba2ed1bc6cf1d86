use anyhow::{bail, Context, Result};
use std::env;

use crate::search::{LengthCap, SearchOptions, DEFAULT_MIN_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: InputConfig,
    pub search: SearchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputConfig {
    pub grid_path: String,
    pub dictionary_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub min_length: usize,
    pub length_cap: LengthCap,
    pub parallel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup, `from_env` passes the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input = InputConfig {
            grid_path: lookup("GRID_PATH").unwrap_or_else(|| "./matrix.txt".to_string()),
            dictionary_path: lookup("DICTIONARY_PATH")
                .unwrap_or_else(|| "./words.txt".to_string()),
        };

        let search = SearchConfig {
            min_length: lookup("MIN_LENGTH")
                .unwrap_or_else(|| DEFAULT_MIN_LENGTH.to_string())
                .parse()
                .context("MIN_LENGTH must be a non-negative number")?,
            length_cap: parse_length_cap(
                &lookup("LENGTH_CAP").unwrap_or_else(|| "width".to_string()),
            )?,
            parallel: lookup("PARALLEL")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .context("PARALLEL must be true or false")?,
        };

        let output = OutputConfig {
            format: parse_output_format(
                &lookup("OUTPUT_FORMAT").unwrap_or_else(|| "text".to_string()),
            )?,
        };

        Ok(Config {
            input,
            search,
            output,
        })
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            min_length: self.search.min_length,
            length_cap: self.search.length_cap,
        }
    }
}

fn parse_length_cap(value: &str) -> Result<LengthCap> {
    match value.trim().to_lowercase().as_str() {
        "width" => Ok(LengthCap::GridWidth),
        "unbounded" => Ok(LengthCap::Unbounded),
        other => bail!("LENGTH_CAP must be 'width' or 'unbounded', got '{}'", other),
    }
}

fn parse_output_format(value: &str) -> Result<OutputFormat> {
    match value.trim().to_lowercase().as_str() {
        "text" => Ok(OutputFormat::Text),
        "json" => Ok(OutputFormat::Json),
        other => bail!("OUTPUT_FORMAT must be 'text' or 'json', got '{}'", other),
    }
}
