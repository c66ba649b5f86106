//! Command-line interface for route-tabs.
//!
//! - `layout` prints the layout computed for a host width and tab count
//! - `replay` runs a YAML event script and prints the resulting strip

use crate::layout::{LayoutMetrics, compute_layout};
use crate::replay::{ReplayScript, replay};
use anyhow::Result;
use clap::{Parser, Subcommand};
use route_tabs_config::{Config, LogLevel};
use std::path::{Path, PathBuf};

/// route-tabs - open-tabs strip state machine and overflow layout
#[derive(Parser, Debug)]
#[command(name = "route-tabs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file to use instead of ~/.config/route-tabs/config.yaml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute how many tabs fit at a given host width
    Layout {
        /// Host viewport width in pixels
        #[arg(long, allow_negative_numbers = true)]
        host_width: i32,

        /// Number of open tabs
        #[arg(long, default_value_t = 0)]
        tabs: usize,

        /// Sidebar width (defaults to the configured width)
        #[arg(long)]
        sidebar_width: Option<i32>,
    },
    /// Replay a YAML script of shell events
    Replay {
        /// Script file
        script: PathBuf,

        /// Host width at startup (overrides the script)
        #[arg(long)]
        host_width: Option<i32>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Run a parsed command line
pub fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    crate::debug::init_log_bridge(cli.log_level, config.log_level);
    log::debug!("Running {:?}", cli.command);

    match cli.command {
        Commands::Layout {
            host_width,
            tabs,
            sidebar_width,
        } => {
            print_layout(&config, host_width, tabs, sidebar_width);
            Ok(())
        }
        Commands::Replay {
            script,
            host_width,
            json,
        } => {
            let script = ReplayScript::load(&script)?;
            let report = replay(&script, &config, host_width);
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print!("{report}");
            }
            Ok(())
        }
    }
}

/// Explicit path, else the default path if it exists, else built-in defaults
fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => {
            let default_path = Config::config_path();
            if default_path.exists() {
                Config::load_from(&default_path)
            } else {
                Ok(Config::default())
            }
        }
    }
}

fn print_layout(config: &Config, host_width: i32, tabs: usize, sidebar_width: Option<i32>) {
    let metrics = LayoutMetrics::from(config);
    let sidebar_width = sidebar_width.unwrap_or(config.sidebar_width);
    let result = compute_layout(&metrics.input(host_width, sidebar_width, tabs));

    println!("host width:       {host_width}px");
    println!("sidebar width:    {sidebar_width}px");
    println!("container width:  {}px", result.reported_container_width_px);
    println!(
        "tab area width:   {}px",
        result
            .reported_container_width_px
            .saturating_sub(metrics.overflow_control_width)
    );
    println!("visible tabs:     {} of {}", result.max_visible_count, tabs);
    println!("overflowing:      {}", result.max_visible_count < tabs);
    if result.is_undersized() {
        println!("warning: viewport is narrower than the surrounding chrome");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_layout_command() {
        let cli = Cli::try_parse_from([
            "route-tabs",
            "layout",
            "--host-width",
            "700",
            "--tabs",
            "5",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level, Some(LogLevel::Debug));
        assert!(matches!(
            cli.command,
            Commands::Layout {
                host_width: 700,
                tabs: 5,
                sidebar_width: None
            }
        ));
    }

    #[test]
    fn parses_replay_command() {
        let cli =
            Cli::try_parse_from(["route-tabs", "replay", "session.yaml", "--json"]).unwrap();
        match cli.command {
            Commands::Replay { script, json, .. } => {
                assert_eq!(script, PathBuf::from("session.yaml"));
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn run_fails_on_missing_config_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = dir.path().join("absent.yaml");
        let cli = Cli::try_parse_from([
            "route-tabs",
            "--config",
            config.to_str().unwrap(),
            "layout",
            "--host-width",
            "1200",
        ])
        .unwrap();

        assert!(run(cli).is_err());
    }

    #[test]
    fn run_fails_on_missing_script_and_succeeds_on_valid_one() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = dir.path().join("config.yaml");
        Config::default().save_to(&config).unwrap();
        let script = dir.path().join("session.yaml");

        let replay_cli = || {
            Cli::try_parse_from([
                "route-tabs",
                "--config",
                config.to_str().unwrap(),
                "replay",
                script.to_str().unwrap(),
            ])
            .unwrap()
        };

        let err = run(replay_cli()).unwrap_err();
        assert!(err.to_string().contains("session.yaml"));

        std::fs::write(
            &script,
            "events:\n  - event: route_changed\n    title: Home\n    url: /home\n",
        )
        .unwrap();
        assert!(run(replay_cli()).is_ok());
    }

    #[test]
    fn layout_command_accepts_extreme_host_width() {
        let cli = Cli::try_parse_from([
            "route-tabs",
            "layout",
            "--host-width",
            "-2147483648",
            "--tabs",
            "3",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Commands::Layout {
                host_width: i32::MIN,
                ..
            }
        ));
        print_layout(&Config::default(), i32::MIN, 3, None);
    }

    #[test]
    fn rejects_unknown_log_level() {
        assert!(
            Cli::try_parse_from([
                "route-tabs",
                "layout",
                "--host-width",
                "1",
                "--log-level",
                "loud"
            ])
            .is_err()
        );
    }
}
