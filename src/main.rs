//! Command line front end for the sparse life simulator

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use lateral_life::{
    config::{CliOverrides, Settings},
    game_of_life::{create_example_patterns, render_board_with, RuleKind},
    simulation::{History, Simulation},
    utils::{BoardFormatter, ColorOutput, ConsoleLogger},
};
use log::warn;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "lateral_life")]
#[command(about = "Sparse cellular automaton with unioned rules")]
#[command(version = "0.1.0")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that runs a simulation
#[derive(clap::Args, Debug, Default)]
struct RunOptions {
    /// Configuration file path
    #[arg(short, long, default_value = "config/default.yaml")]
    config: PathBuf,

    /// Starting pattern file (overrides config)
    #[arg(short, long)]
    pattern: Option<PathBuf>,

    /// Number of generations (overrides config)
    #[arg(short, long)]
    generations: Option<usize>,

    /// Active rules, unioned each tick (overrides config)
    #[arg(short, long, value_enum, value_delimiter = ',')]
    rules: Option<Vec<RuleKind>>,

    /// Dead cells drawn around the bounding box (overrides config)
    #[arg(long)]
    pad: Option<u32>,

    /// Write the JSON run history to this file (overrides config)
    #[arg(long)]
    history: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate the simulation in the terminal
    Run {
        #[command(flatten)]
        options: RunOptions,

        /// Milliseconds between frames (overrides config)
        #[arg(short, long)]
        delay: Option<u64>,

        /// Do not clear the screen between frames
        #[arg(long)]
        no_clear: bool,
    },

    /// Advance a pattern without animation and print the final board
    Step {
        #[command(flatten)]
        options: RunOptions,

        /// Label rows and columns with their coordinates
        #[arg(long)]
        coords: bool,
    },

    /// Run headless and report how the board settles
    Analyze {
        #[command(flatten)]
        options: RunOptions,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    ConsoleLogger::init(ConsoleLogger::level_for_verbosity(cli.verbose))
        .context("Failed to install logger")?;

    match cli.command {
        Commands::Run { options, delay, no_clear } => run_command(options, delay, no_clear),
        Commands::Step { options, coords } => step_command(options, coords),
        Commands::Analyze { options } => analyze_command(options),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Load the config file (or defaults) and apply command line overrides
fn load_settings(options: &RunOptions, overrides: CliOverrides) -> Result<Settings> {
    let mut settings = if options.config.exists() {
        Settings::from_file(&options.config)
            .with_context(|| format!("Failed to load config from {}", options.config.display()))?
    } else {
        warn!("config file {} not found, using defaults", options.config.display());
        Settings::default()
    };

    let overrides = CliOverrides {
        generations: options.generations,
        rules: options.rules.clone(),
        pattern_file: options.pattern.clone(),
        pad: options.pad,
        history_file: options.history.clone(),
        ..overrides
    };
    settings.merge_with_cli(&overrides);

    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn save_history_if_requested(settings: &Settings, history: &History) -> Result<()> {
    if let Some(ref path) = settings.output.history_file {
        history
            .save_to_file(path)
            .with_context(|| format!("Failed to save history to {}", path.display()))?;
        println!("{}", ColorOutput::success(&format!("History saved to {}", path.display())));
    }
    Ok(())
}

fn run_command(options: RunOptions, delay: Option<u64>, no_clear: bool) -> Result<()> {
    let settings = load_settings(
        &options,
        CliOverrides {
            delay_ms: delay,
            no_clear,
            ..Default::default()
        },
    )?;

    let mut simulation = Simulation::from_settings(&settings)?;
    let glyphs = settings.display.glyphs();
    let pad = settings.display.pad;
    let clear_screen = settings.simulation.clear_screen;
    let frame_delay = settings.simulation.delay();
    let mut stdout = std::io::stdout().lock();

    let history = simulation.run_with(settings.simulation.generations, |_, board| {
        let frame = BoardFormatter::format_frame(board, pad, &glyphs, clear_screen);
        BoardFormatter::write_frame(&mut stdout, &frame).context("Failed to write frame")?;
        std::thread::sleep(frame_delay);
        Ok(())
    })?;
    drop(stdout);

    save_history_if_requested(&settings, &history)
}

fn step_command(options: RunOptions, coords: bool) -> Result<()> {
    let settings = load_settings(&options, CliOverrides::default())?;
    let mut simulation = Simulation::from_settings(&settings)?;

    let start_time = Instant::now();
    let history = simulation.run(settings.simulation.generations);
    let elapsed = start_time.elapsed();

    let glyphs = settings.display.glyphs();
    let board = simulation.board();
    let rendered = if coords {
        BoardFormatter::format_board_with_coords(board, &glyphs)
    } else {
        render_board_with(board, settings.display.pad, &glyphs)
    };

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Generation {} ({} alive, rules: {})",
            simulation.generation(),
            simulation.population(),
            simulation.rule_names().join(" ∪ ")
        ))
    );
    println!("{}", rendered.trim_end());
    println!(
        "{}",
        ColorOutput::success(&format!("Computed in {:.3}s", elapsed.as_secs_f64()))
    );

    save_history_if_requested(&settings, &history)
}

fn analyze_command(options: RunOptions) -> Result<()> {
    println!("{}", ColorOutput::info("🔬 Analyzing pattern..."));

    let settings = load_settings(&options, CliOverrides::default())?;
    let mut simulation = Simulation::from_settings(&settings)?;
    let history = simulation.run(settings.simulation.generations);
    let analysis = history.analyze();

    println!("{}", analysis);
    println!("{}", BoardFormatter::format_population_trace(&history));

    if analysis.is_settled() {
        println!("{}", ColorOutput::success(&format!("✅ Pattern is {}", analysis.outcome)));
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Pattern did not repeat within {} generations",
                analysis.generations
            ))
        );
    }

    save_history_if_requested(&settings, &history)
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("🛠️  Setting up project structure..."));

    let config_dir = directory.join("config");
    let pattern_dir = directory.join("patterns");

    for dir in [&config_dir, &pattern_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    write_config(&config_dir.join("default.yaml"), &Settings::default(), force)?;

    create_example_patterns(&pattern_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", pattern_dir.display());

    // A classical-only variant that loads the glider pattern from disk
    let mut glider = Settings::default();
    glider.rules = vec![RuleKind::Classical];
    glider.simulation.generations = 40;
    glider.input.pattern_file = Some(pattern_dir.join("glider.txt"));
    glider.display.pad = 1;
    write_config(&config_dir.join("glider.yaml"), &glider, force)?;

    println!("\n{}", ColorOutput::success("✅ Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Add your own patterns to {}", pattern_dir.display());
    println!("3. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}

fn write_config(path: &Path, settings: &Settings, force: bool) -> Result<()> {
    if !path.exists() || force {
        settings
            .to_file(path)
            .with_context(|| format!("Failed to create configuration {}", path.display()))?;
        println!("Created: {}", path.display());
    } else {
        println!("Skipped: {} (already exists)", path.display());
    }
    Ok(())
}
