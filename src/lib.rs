pub mod cli;
pub mod compose;
pub mod config;
pub mod engine;
pub mod events;
pub mod group;
pub mod state;

use colored::Colorize;
use comfy_table::Table;
use serde_json::json;

pub use cli::{Cli, ColorMode, Commands, OutputFormat, cli_parse};
pub use compose::{build_selector, compose, compose_paths};
pub use config::{ConfigError, MultifilterConfig, ParseOn, default_config, load_config};
pub use engine::Multifilter;
pub use events::{ControlEvent, FormEventTracker, apply_event};
pub use group::{FilterGroup, GroupLogic, Selector};
pub use state::{FilterState, GroupState, StateError, load_state_from_path};

fn write_output_file(
    path: &std::path::Path,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    std::fs::write(path, content)
        .map_err(|e| format!("Failed to write output file '{}': {}", path.display(), e).into())
}

/// Build an engine from a state file, honoring the loaded config defaults.
fn load_engine(
    file: &std::path::Path,
    config: &MultifilterConfig,
) -> Result<(Multifilter, FilterState), Box<dyn std::error::Error>> {
    let filter_state = load_state_from_path(file)
        .map_err(|e| format!("Failed to load state file '{}': {}", file.display(), e))?;

    let mut engine = Multifilter::new(config.clone());
    for group in filter_state.build_groups(config) {
        engine.add_group(group);
    }

    Ok((engine, filter_state))
}

fn format_paths_text(paths: &[Vec<String>], quiet: bool) -> String {
    let mut out = String::new();

    if !quiet {
        out.push_str(&format!(
            "{} selector path{}\n",
            paths.len(),
            if paths.len() == 1 { "" } else { "s" }
        ));
    }

    for path in paths {
        out.push_str(&path.join(" "));
        out.push('\n');
    }

    out
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = cli_parse();
    let config = load_config(cli.config.as_deref())
        .map_err(|e| format!("Failed to load config: {}", e))?;
    let format = cli.format;
    let output = &cli.output;
    let verbose = cli.verbose;
    let quiet = cli.quiet;

    // Set up color handling based on user preference
    match cli.color {
        ColorMode::Always => {
            // Force colors on
            unsafe {
                std::env::set_var("CLICOLOR_FORCE", "1");
            }
        }
        ColorMode::Never => {
            // Disable colors
            unsafe {
                std::env::set_var("NO_COLOR", "1");
            }
        }
        ColorMode::Auto => {
            // Default behavior - let the terminal decide
        }
    }

    if verbose > 0 && !quiet {
        eprintln!("Verbosity level: {}", verbose);
        eprintln!(
            "Logic defaults: within={}, between={}",
            config.logic_within_groups.canonical_name(),
            config.logic_between_groups.canonical_name()
        );
        if let Some(config_path) = &cli.config {
            eprintln!("Config file: {}", config_path.display());
        }
        if let Some(out_path) = output {
            eprintln!("Output will be written to: {}", out_path.display());
        }
    }

    match &cli.command {
        Commands::Compose {
            file,
            between,
            no_default,
        } => {
            let (engine, filter_state) = load_engine(file, &config)?;
            let between_logic = between.unwrap_or_else(|| filter_state.between_logic(&config));

            let paths = engine.compose_paths();
            let raw_selector = build_selector(&paths, between_logic);
            let fallback_applied = raw_selector.is_empty() && !*no_default;
            let selector = if fallback_applied {
                config.toggle_default.clone()
            } else {
                raw_selector
            };

            match format {
                OutputFormat::Text => {
                    if fallback_applied && !quiet {
                        eprintln!(
                            "{}",
                            "No active filters; falling back to the default selector".yellow()
                        );
                    }
                    println!("{}", selector.cyan().bold());
                    if let Some(path) = output {
                        write_output_file(path, &format!("{selector}\n"))?;
                    }
                }
                OutputFormat::Json => {
                    let json_output = serde_json::to_string_pretty(&json!({
                        "selector": selector,
                        "logic_between_groups": between_logic.canonical_name(),
                        "fallback_applied": fallback_applied,
                        "paths": paths,
                    }))?;
                    println!("{}", json_output);
                    if let Some(path) = output {
                        write_output_file(path, &json_output)?;
                    }
                }
            }
        }
        Commands::Paths { file } => {
            let (engine, _) = load_engine(file, &config)?;
            let paths = engine.compose_paths();

            match format {
                OutputFormat::Text => {
                    let text = format_paths_text(&paths, quiet);
                    print!("{text}");
                    if let Some(path) = output {
                        write_output_file(path, &text)?;
                    }
                }
                OutputFormat::Json => {
                    let json_output = serde_json::to_string_pretty(&paths)?;
                    println!("{}", json_output);
                    if let Some(path) = output {
                        write_output_file(path, &json_output)?;
                    }
                }
            }
        }
        Commands::Inspect { file } => {
            let (engine, filter_state) = load_engine(file, &config)?;
            let between_logic = filter_state.between_logic(&config);

            match format {
                OutputFormat::Json => {
                    let groups: Vec<_> = engine
                        .groups()
                        .iter()
                        .map(|group| {
                            json!({
                                "name": group.name,
                                "logic": group.logic().canonical_name(),
                                "toggles": group.active_toggles(),
                                "selectors": group
                                    .active_selectors()
                                    .iter()
                                    .map(|s| s.flatten())
                                    .collect::<Vec<_>>(),
                                "active": group.is_active(),
                            })
                        })
                        .collect();
                    let json_output = serde_json::to_string_pretty(&json!({
                        "logic_between_groups": between_logic.canonical_name(),
                        "groups": groups,
                        "selector": engine.compose_selector_with(between_logic),
                    }))?;
                    println!("{}", json_output);
                    if let Some(path) = output {
                        write_output_file(path, &json_output)?;
                    }
                }
                OutputFormat::Text => {
                    let mut table = Table::new();
                    table.set_header(vec!["Group", "Logic", "Toggles", "Selectors", "Active"]);

                    for group in engine.groups() {
                        let selectors: Vec<String> = group
                            .active_selectors()
                            .iter()
                            .map(|s| s.flatten())
                            .collect();
                        table.add_row(vec![
                            group.name.clone().unwrap_or_else(|| "-".to_string()),
                            group.logic().canonical_name().to_string(),
                            group.active_toggles().join(", "),
                            selectors.join(", "),
                            if group.is_active() { "yes" } else { "no" }.to_string(),
                        ]);
                    }

                    println!("{table}");
                    if !quiet {
                        println!(
                            "\n{} {}",
                            "Composed selector:".bold(),
                            engine.compose_selector_with(between_logic).cyan()
                        );
                    }
                    if let Some(path) = output {
                        write_output_file(path, &format!("{table}\n"))?;
                    }
                }
            }
        }
    }

    Ok(())
}
