//! Context wiring and per-command handlers.
//!
//! Handlers translate parsed arguments into [`FacetChange`]s, feed them to the
//! engine one at a time in a fixed order, and hand the final outcome to
//! `print`. No filtering rules live here.

use super::print::{print_config, print_filter_json, print_filter_result, print_options, print_tags};
use super::setup::{Cli, Commands, FilterArgs};
use boardcat::api::{FacetChange, FacetEngine, FilterOutcome};
use boardcat::config::{BoardcatConfig, CONFIG_KEYS};
use boardcat::error::Result;
use boardcat::facets::FacetValue;
use boardcat::store::fs::FileCatalog;
use clap::Parser;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const CONFIG_DIR_NAME: &str = ".boardcat";
const HOME_ENV: &str = "BOARDCAT_HOME";
const LOG_ENV: &str = "BOARDCAT_LOG";

struct AppContext {
    engine: FacetEngine,
    show_hidden: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_dir = resolve_config_dir();
    debug!(dir = %config_dir.display(), "using config directory");
    let config = BoardcatConfig::load(&config_dir)?;

    let command = cli
        .command
        .unwrap_or_else(|| Commands::Filter(FilterArgs::default()));

    match command {
        Commands::Filter(args) => {
            let mut ctx = init_context(cli.catalog.as_deref(), &config)?;
            handle_filter(&mut ctx, args)
        }
        Commands::Options {
            fragment,
            family,
            series,
            json,
        } => {
            let mut ctx = init_context(cli.catalog.as_deref(), &config)?;
            handle_options(&mut ctx, fragment, family, series, json)
        }
        Commands::Tags { query } => {
            let ctx = init_context(cli.catalog.as_deref(), &config)?;
            handle_tags(&ctx, query)
        }
        Commands::Config { key, value } => handle_config(&config_dir, config, key, value),
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore an already-installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// `BOARDCAT_HOME`, else `./.boardcat` if present, else the user config dir.
fn resolve_config_dir() -> PathBuf {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return PathBuf::from(home);
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let local = cwd.join(CONFIG_DIR_NAME);
    if local.exists() {
        return local;
    }

    ProjectDirs::from("com", "boardcat", "boardcat")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or(local)
}

fn init_context(catalog: Option<&Path>, config: &BoardcatConfig) -> Result<AppContext> {
    let path = catalog
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(&config.catalog));
    debug!(path = %path.display(), "opening catalog");

    let engine = FacetEngine::open(&FileCatalog::new(path))?;
    Ok(AppContext {
        engine,
        show_hidden: config.show_hidden,
    })
}

/// Changes in the order a page applies them after loading a URL.
fn filter_changes(args: &FilterArgs) -> Vec<FacetChange> {
    let mut changes = Vec::new();

    if let Some(fragment) = &args.fragment {
        changes.push(FacetChange::Navigate(fragment.clone()));
    }
    if let Some(name) = &args.name {
        changes.push(FacetChange::Set(FacetValue::Name(name.clone())));
    }
    if let Some(arch) = &args.arch {
        changes.push(FacetChange::Set(FacetValue::Architecture(Some(arch.clone()))));
    }
    if let Some(vendor) = &args.vendor {
        changes.push(FacetChange::Set(FacetValue::Vendor(Some(vendor.clone()))));
    }
    if !args.family.is_empty() {
        changes.push(FacetChange::Set(FacetValue::Families(args.family.clone())));
    }
    if !args.series.is_empty() {
        changes.push(FacetChange::Set(FacetValue::Series(args.series.clone())));
    }
    if !args.soc.is_empty() {
        changes.push(FacetChange::Set(FacetValue::Socs(args.soc.clone())));
    }
    changes.extend(args.features.iter().cloned().map(FacetChange::AddTag));
    changes.extend(args.compatibles.iter().cloned().map(FacetChange::AddCompatible));
    if args.hide_boards {
        changes.push(FacetChange::Set(FacetValue::ShowBoards(false)));
    }
    if args.hide_shields {
        changes.push(FacetChange::Set(FacetValue::ShowShields(false)));
    }

    changes
}

fn apply(engine: &mut FacetEngine, changes: Vec<FacetChange>) -> FilterOutcome {
    let mut outcome = engine.refresh();
    for change in changes {
        outcome = engine.on_facet_changed(change);
    }
    outcome
}

fn handle_filter(ctx: &mut AppContext, args: FilterArgs) -> Result<()> {
    let outcome = apply(&mut ctx.engine, filter_changes(&args));
    if args.json {
        print_filter_json(ctx.engine.cards(), ctx.engine.state(), &outcome)
    } else {
        print_filter_result(ctx.engine.cards(), &outcome, args.all || ctx.show_hidden);
        Ok(())
    }
}

fn handle_options(
    ctx: &mut AppContext,
    fragment: Option<String>,
    family: Vec<String>,
    series: Vec<String>,
    json: bool,
) -> Result<()> {
    let mut changes = Vec::new();
    if let Some(fragment) = fragment {
        changes.push(FacetChange::Navigate(fragment));
    }
    if !family.is_empty() {
        changes.push(FacetChange::Set(FacetValue::Families(family)));
    }
    if !series.is_empty() {
        changes.push(FacetChange::Set(FacetValue::Series(series)));
    }

    let outcome = apply(&mut ctx.engine, changes);
    print_options(&outcome.options, json)
}

fn handle_tags(ctx: &AppContext, query: Option<String>) -> Result<()> {
    let tags = ctx.engine.suggest_tags(query.as_deref().unwrap_or(""));
    print_tags(&tags);
    Ok(())
}

fn handle_config(
    config_dir: &Path,
    mut config: BoardcatConfig,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    match (key, value) {
        (None, _) => {
            let entries = CONFIG_KEYS
                .iter()
                .map(|k| config.get(k).map(|v| (k.to_string(), v)))
                .collect::<Result<Vec<_>>>()?;
            print_config(&entries, None);
        }
        (Some(key), None) => {
            let value = config.get(&key)?;
            print_config(&[(key, value)], None);
        }
        (Some(key), Some(value)) => {
            config.set(&key, &value)?;
            config.save(config_dir)?;
            let value = config.get(&key)?;
            print_config(&[(key, value)], Some("Configuration saved."));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_is_applied_before_flags() {
        let args = FilterArgs {
            fragment: Some("#vendor=st".into()),
            vendor: Some("nordic".into()),
            features: vec!["gpio".into()],
            hide_shields: true,
            ..Default::default()
        };
        let changes = filter_changes(&args);

        assert_eq!(changes[0], FacetChange::Navigate("#vendor=st".into()));
        assert_eq!(
            changes[1],
            FacetChange::Set(FacetValue::Vendor(Some("nordic".into())))
        );
        assert_eq!(changes[2], FacetChange::AddTag("gpio".into()));
        assert_eq!(
            changes.last(),
            Some(&FacetChange::Set(FacetValue::ShowShields(false)))
        );
    }

    #[test]
    fn no_flags_means_no_changes() {
        assert!(filter_changes(&FilterArgs::default()).is_empty());
    }

    #[test]
    fn family_comes_before_series_and_soc() {
        let args = FilterArgs {
            family: vec!["Nordic".into()],
            series: vec!["nRF53".into()],
            soc: vec!["nrf5340".into()],
            ..Default::default()
        };
        let changes = filter_changes(&args);
        assert!(matches!(changes[0], FacetChange::Set(FacetValue::Families(_))));
        assert!(matches!(changes[1], FacetChange::Set(FacetValue::Series(_))));
        assert!(matches!(changes[2], FacetChange::Set(FacetValue::Socs(_))));
    }
}
