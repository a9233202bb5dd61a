mod ai;
mod config;
mod debug;
mod game;
mod game_modes;
mod ui;

use anyhow::{bail, Context};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

use ai::{Difficulty, DifficultyLevel};
use config::Config;

const DEFAULT_HEADLESS_TICKS: u64 = 3600;

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
struct Options {
    headless: bool,
    ticks: u64,
    seed: Option<u64>,
    difficulty: Option<DifficultyLevel>,
    config_path: Option<PathBuf>,
    debug: bool,
    help: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            headless: false,
            ticks: DEFAULT_HEADLESS_TICKS,
            seed: None,
            difficulty: None,
            config_path: None,
            debug: false,
            help: false,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let options = match parse_args(&args[1..]) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            print_usage(&args[0]);
            std::process::exit(1);
        }
    };

    if options.help {
        print_usage(&args[0]);
        return Ok(());
    }

    debug::init(options.debug).context("failed to initialize debug log")?;

    let config = match &options.config_path {
        Some(path) => config::load_config_from(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?,
        None => config::load_config().context("failed to load configuration")?,
    };
    let difficulty = resolve_difficulty(&config, options.difficulty);

    if options.headless {
        let report = game_modes::run_simulation(&config, difficulty, options.ticks, options.seed);
        println!("{}", report.summary());
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = game_modes::run_interactive(&mut terminal, &config, difficulty, options.seed);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result.context("game loop failed")
}

/// Difficulty from the config file, with the preset swapped when one was
/// given on the command line. Explicit overrides in the config still apply.
fn resolve_difficulty(config: &Config, level: Option<DifficultyLevel>) -> Difficulty {
    match level {
        Some(level) => {
            let mut ai_config = config.ai.clone();
            ai_config.difficulty = level.display_name().to_string();
            Difficulty::from(&ai_config)
        }
        None => Difficulty::from(&config.ai),
    }
}

fn parse_args(args: &[String]) -> anyhow::Result<Options> {
    let mut options = Options::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--headless" => options.headless = true,
            "--debug" | "-d" => options.debug = true,
            "--help" | "-h" => options.help = true,
            "--ticks" | "-t" => {
                let value = iter.next().context("--ticks requires a number")?;
                options.ticks = value
                    .parse()
                    .with_context(|| format!("invalid tick count: {}", value))?;
            }
            "--seed" | "-s" => {
                let value = iter.next().context("--seed requires a number")?;
                options.seed = Some(
                    value
                        .parse()
                        .with_context(|| format!("invalid seed: {}", value))?,
                );
            }
            "--difficulty" => {
                let value = iter.next().context("--difficulty requires a level")?;
                match DifficultyLevel::parse(value) {
                    Some(level) => options.difficulty = Some(level),
                    None => bail!("unknown difficulty: {}", value),
                }
            }
            "--config" | "-c" => {
                let value = iter.next().context("--config requires a path")?;
                options.config_path = Some(PathBuf::from(value));
            }
            other => bail!("unknown argument: {}", other),
        }
    }

    Ok(options)
}

fn print_usage(program: &str) {
    println!("Multipong - multi-ball terminal Pong against an AI paddle");
    println!();
    println!("Usage:");
    println!("  {} [options]", program);
    println!();
    println!("Options:");
    println!("  --headless             Run a simulation without the terminal UI");
    println!(
        "  --ticks, -t <n>        Ticks to simulate in headless mode (default {})",
        DEFAULT_HEADLESS_TICKS
    );
    println!("  --seed, -s <n>         Seed the random number generator");
    println!("  --difficulty <level>   Override the configured AI difficulty");
    println!("  --config, -c <path>    Use this config file instead of the default");
    println!("  --debug, -d            Write a trace log to {}", debug::LOG_FILE_PATH);
    println!("  --help, -h             Show this message");
    println!();
    println!("Difficulty levels:");
    for level in DifficultyLevel::all() {
        println!("  {:<8} {}", level.display_name(), level.description());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_interactive() {
        let options = parse_args(&[]).unwrap();
        assert_eq!(options, Options::default());
    }

    #[test]
    fn test_headless_options() {
        let options = parse_args(&args(&[
            "--headless",
            "--ticks",
            "120",
            "--seed",
            "7",
            "--difficulty",
            "hard",
        ]))
        .unwrap();

        assert!(options.headless);
        assert_eq!(options.ticks, 120);
        assert_eq!(options.seed, Some(7));
        assert_eq!(options.difficulty, Some(DifficultyLevel::Hard));
    }

    #[test]
    fn test_bad_args() {
        assert!(parse_args(&args(&["--ticks"])).is_err());
        assert!(parse_args(&args(&["--ticks", "many"])).is_err());
        assert!(parse_args(&args(&["--difficulty", "insane"])).is_err());
        assert!(parse_args(&args(&["--fullscreen"])).is_err());
    }

    #[test]
    fn test_cli_level_keeps_config_overrides() {
        let mut config = Config::default();
        config.ai.error_range = Some(0.0);

        let difficulty = resolve_difficulty(&config, Some(DifficultyLevel::Easy));
        assert_eq!(difficulty.error_range, 0.0);
        assert_eq!(
            difficulty.speed_multiplier,
            DifficultyLevel::Easy.profile().speed_multiplier
        );
    }
}
