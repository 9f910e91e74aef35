mod config;
mod logging;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use quiz_core::FacetFilter;
use quiz_core::filter::Selector;
use quiz_core::model::QuestionBank;
use services::load_bank;
use storage::{CsvRowSource, RowSource};
use ui::{App, UiApp, build_app_context};

use crate::config::Config;

struct DesktopApp {
    bank: Arc<QuestionBank>,
    origin: String,
    seed: Option<u64>,
    selection: FacetFilter,
}

impl UiApp for DesktopApp {
    fn question_bank(&self) -> Arc<QuestionBank> {
        Arc::clone(&self.bank)
    }

    fn bank_origin(&self) -> String {
        self.origin.clone()
    }

    fn shuffle_seed(&self) -> Option<u64> {
        self.seed
    }

    fn initial_selection(&self) -> FacetFilter {
        self.selection.clone()
    }
}

/// Logs preset facet values the bank never mentions; they simply match nothing.
fn warn_unknown_presets(bank: &QuestionBank, selection: &FacetFilter) {
    if let Selector::Value(year) = &selection.year
        && !bank.distinct_years().contains(year)
    {
        tracing::warn!(%year, "preset year does not occur in the bank");
    }
    if let Selector::Value(category) = &selection.category
        && !bank.distinct_categories().contains(category)
    {
        tracing::warn!(%category, "preset category does not occur in the bank");
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    let source = CsvRowSource::from_path(config.file.clone());
    let bank = load_bank(&source)
        .with_context(|| format!("failed to load question bank {}", config.file.display()))?;
    if bank.is_empty() {
        tracing::warn!(origin = %source.origin(), "question bank has no questions");
    }

    let selection = config.selection();
    warn_unknown_presets(&bank, &selection);

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        bank: Arc::new(bank),
        origin: source.origin(),
        seed: config.seed,
        selection,
    });
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz Drill")
            .with_always_on_top(false),
    );

    tracing::info!(file = %config.file.display(), "launching quiz window");
    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    let config = Config::parse();
    if let Err(err) = logging::init_logging(&config.log_config()) {
        eprintln!("error: failed to initialize logging: {err}");
        std::process::exit(2);
    }

    if let Err(err) = run(config) {
        // At this layer (binary glue), printing once is fine.
        eprintln!("error: {err:#}");
        std::process::exit(2);
    }
}
