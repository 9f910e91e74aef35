use std::path::PathBuf;

use clap::Parser;
use quiz_core::FacetFilter;
use quiz_core::filter::Selector;
use quiz_core::model::{Category, FacetError, Year};

use crate::logging::{LogConfig, LogFormat};

/// Desktop drill over a CSV question bank.
#[derive(Debug, Parser)]
#[command(name = "quiz-drill", version, about)]
pub struct Config {
    /// CSV question bank to load.
    #[arg(long, short = 'f', env = "QUIZ_FILE", value_name = "CSV")]
    pub file: PathBuf,

    /// Fixed seed for option shuffles (random when absent).
    #[arg(long, env = "QUIZ_SEED")]
    pub seed: Option<u64>,

    /// Year to start on; `all` selects every year.
    #[arg(long, env = "QUIZ_YEAR", value_parser = parse_year)]
    pub year: Option<Selector<Year>>,

    /// Category to start on; `all` selects every category.
    #[arg(long, env = "QUIZ_CATEGORY", value_parser = parse_category)]
    pub category: Option<Selector<Category>>,

    /// Log verbosity (-v for debug, -vv for trace). `RUST_LOG` overrides it.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormat,
}

impl Config {
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::from_verbosity(self.verbose).with_format(self.log_format)
    }

    /// Selection the quiz page opens on.
    ///
    /// A single preset facet opens the other on `All`, since an unselected
    /// facet would hide every question.
    #[must_use]
    pub fn selection(&self) -> FacetFilter {
        match (&self.year, &self.category) {
            (None, None) => FacetFilter::default(),
            (year, category) => FacetFilter::new(
                year.clone().unwrap_or(Selector::All),
                category.clone().unwrap_or(Selector::All),
            ),
        }
    }
}

fn parse_year(raw: &str) -> Result<Selector<Year>, FacetError> {
    parse_selector(raw, |value| Year::new(value))
}

fn parse_category(raw: &str) -> Result<Selector<Category>, FacetError> {
    parse_selector(raw, |value| Category::new(value))
}

fn parse_selector<T>(
    raw: &str,
    build: impl FnOnce(&str) -> Result<T, FacetError>,
) -> Result<Selector<T>, FacetError> {
    if raw.trim().eq_ignore_ascii_case("all") {
        Ok(Selector::All)
    } else {
        build(raw).map(Selector::Value)
    }
}
