//! # page-sim
//!
//! Terminal harness for the page controller. Feeds recorded layouts and scroll
//! offsets through the same handlers the landing page uses and prints what the
//! navigation bar would show.
//!
//! ```bash
//! # Navigation catalog of a mode
//! page-sim nav --mode almacenamiento
//!
//! # Which section is highlighted at each offset
//! page-sim replay --layout layout.json --offsets 50,750,2500
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::{Level, debug, info};

use nomofobia_core::{
    LayoutSnapshot, MainSection, NavigationGroup, PageConfig, PageController, PageEvent,
    PageVariant, SimulatedViewport, Theme,
};

#[derive(Parser, Debug)]
#[command(name = "page-sim")]
#[command(about = "Replay scroll offsets against a recorded page layout")]
#[command(version)]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the navigation catalog and palette of a mode
    Nav {
        /// Mode to describe (nomofobia, almacenamiento, multimedia)
        #[arg(long, default_value = "nomofobia")]
        mode: MainSection,
        /// Page variant (split or merged)
        #[arg(long, value_parser = parse_variant, default_value = "split")]
        variant: PageVariant,
    },
    /// Dispatch one scroll event per offset and print the resulting state
    Replay {
        /// Layout snapshot JSON: {"sections": [{"id", "top", "height"}]}
        #[arg(long)]
        layout: PathBuf,
        /// Comma-separated scroll offsets in pixels
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        offsets: Vec<f64>,
        /// Page config JSON (defaults apply when omitted)
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn parse_variant(raw: &str) -> Result<PageVariant, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "split" => Ok(PageVariant::Split),
        "merged" => Ok(PageVariant::Merged),
        other => Err(format!("unknown variant `{other}` (expected split or merged)")),
    }
}

#[derive(Serialize)]
struct NavReport {
    variant: PageVariant,
    mode: Option<MainSection>,
    theme: &'static Theme,
    groups: Vec<NavigationGroup>,
}

#[derive(Serialize)]
struct ReplayStep<'a> {
    offset: f64,
    active_section: &'a str,
    changed: bool,
    show_scroll_top: bool,
}

fn load_config(path: Option<&Path>) -> Result<PageConfig> {
    let Some(path) = path else {
        return Ok(PageConfig::default());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    PageConfig::from_json(&raw).with_context(|| format!("Failed to load config {}", path.display()))
}

fn load_layout(path: &Path) -> Result<LayoutSnapshot> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout {}", path.display()))?;
    LayoutSnapshot::from_json(&raw)
        .with_context(|| format!("Failed to parse layout {}", path.display()))
}

fn run_nav(mode: MainSection, variant: PageVariant) -> Result<()> {
    let controller = PageController::new(PageConfig {
        variant,
        initial_mode: mode,
        ..Default::default()
    });
    let report = NavReport {
        variant,
        mode: controller.state().current_main_section(),
        theme: controller.theme(),
        groups: controller.navigation_groups(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn run_replay(layout: &Path, offsets: &[f64], config: Option<&Path>) -> Result<()> {
    let config = load_config(config)?;
    let snapshot = load_layout(layout)?;
    if snapshot.sections.is_empty() {
        bail!("Layout {} has no sections", layout.display());
    }
    debug!(
        sections = snapshot.sections.len(),
        height = snapshot.document_height(),
        "layout loaded"
    );

    let mut controller = PageController::new(config);
    let mut viewport = SimulatedViewport::new(snapshot);

    for &offset in offsets {
        viewport.set_scroll_y(offset);
        let before = controller.state().active_section_id().to_string();
        controller.dispatch(PageEvent::Scrolled { offset }, &mut viewport);

        let state = controller.state();
        let step = ReplayStep {
            offset,
            active_section: state.active_section_id(),
            changed: before != state.active_section_id(),
            show_scroll_top: state.show_scroll_top_button(),
        };
        println!("{}", serde_json::to_string(&step)?);
    }

    info!(steps = offsets.len(), "replay finished");
    Ok(())
}

fn parse_log_level(raw: &str) -> Result<Level> {
    raw.trim().parse::<Level>().with_context(|| {
        format!("Invalid --log-level `{raw}` (expected trace, debug, info, warn or error)")
    })
}

fn run() -> Result<()> {
    let args = Args::parse();
    let level = parse_log_level(&args.log_level)?;

    // stdout carries the JSON output, logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::default()
                    .add_directive(LevelFilter::from_level(level).into())
            }),
        )
        .init();

    match args.command {
        Command::Nav { mode, variant } => run_nav(mode, variant),
        Command::Replay {
            layout,
            offsets,
            config,
        } => run_replay(&layout, &offsets, config.as_deref()),
    }
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[page-sim] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_variants() {
        assert_eq!(parse_variant("split"), Ok(PageVariant::Split));
        assert_eq!(parse_variant(" Merged "), Ok(PageVariant::Merged));
        assert!(parse_variant("tabs").is_err());
    }

    #[test]
    fn args_accept_offset_list() {
        let args = Args::try_parse_from([
            "page-sim",
            "replay",
            "--layout",
            "layout.json",
            "--offsets",
            "50,750,2500",
        ])
        .unwrap();
        match args.command {
            Command::Replay { offsets, .. } => assert_eq!(offsets, vec![50.0, 750.0, 2500.0]),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn log_level_accepts_tracing_levels() {
        assert_eq!(parse_log_level("warn").unwrap(), Level::WARN);
        assert_eq!(parse_log_level(" DEBUG ").unwrap(), Level::DEBUG);
    }

    #[test]
    fn log_level_rejects_unknown_names() {
        let err = parse_log_level("loud").unwrap_err();
        assert!(format!("{err:#}").contains("Invalid --log-level `loud`"));
    }

    #[test]
    fn args_reject_unknown_mode() {
        let err = Args::try_parse_from(["page-sim", "nav", "--mode", "podcasts"]).unwrap_err();
        assert!(err.to_string().contains("podcasts"));
    }
}
