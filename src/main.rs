use clap::{Parser, Subcommand};
use serde::Serialize;
use std::path::{Path, PathBuf};

use jyotish_eval::config::Config;
use jyotish_eval::{output, scoring, Chart, ChartFacts};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_SCORING: i32 = 2;
const EXIT_OUTPUT: i32 = 3;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a chart against one domain, or every domain if none is given
    Score {
        /// Chart file (JSON or YAML)
        #[arg(long)]
        chart: PathBuf,
        /// Domain name (configured or built-in)
        #[arg(short, long)]
        domain: Option<String>,
        /// Tab-separated output for scripting (ignored with --json)
        #[arg(long)]
        tsv: bool,
    },
    /// List the yogas present in a chart
    Yogas {
        #[arg(long)]
        chart: PathBuf,
    },
    /// List special conditions (combustion, affliction, Kuja, gandanta, lordship roles)
    Conditions {
        #[arg(long)]
        chart: PathBuf,
    },
    /// Show dignity, functional status and strength of every planet
    Placements {
        #[arg(long)]
        chart: PathBuf,
    },
    /// List available scoring domains
    Domains,
    /// Write a starter config with every built-in domain
    Init {
        /// Overwrite an existing file without asking
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "jyotish-eval")]
#[command(about = "Deterministic birth chart evaluation and domain scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/jyotish-eval/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn load_chart(path: &Path) -> Chart {
    let input = match jyotish_eval::config::load_chart_input(path) {
        Ok(i) => i,
        Err(e) => {
            eprintln!("Chart error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };
    match input.build() {
        Ok(chart) => chart,
        Err(e) => {
            eprintln!("Invalid chart in {}: {}", path.display(), e);
            std::process::exit(EXIT_INPUT);
        }
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => {
            eprintln!("Failed to serialize output: {}", e);
            std::process::exit(EXIT_OUTPUT);
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.map(PathBuf::from);
    run_command(cli.command, config_path, cli.json, output::should_use_colors());

    std::process::exit(EXIT_SUCCESS);
}

fn load_validated_config(path: Option<PathBuf>) -> Config {
    let config = match jyotish_eval::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate every configured domain at startup
    let mut config_errors = Vec::new();
    for domain in &config.domains {
        if let Err(errors) = scoring::validate_domain_config(domain) {
            config_errors.extend(errors);
        }
    }
    if !config_errors.is_empty() {
        eprintln!("Domain config errors:");
        for error in config_errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }
    config
}

fn run_init(path: Option<PathBuf>, force: bool) {
    match jyotish_eval::config::run_init(path, force) {
        Ok(Some(path)) => println!("Config written to {}", path.display()),
        Ok(None) => println!("Aborted."),
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

fn run_command(command: Commands, config_path: Option<PathBuf>, json: bool, use_colors: bool) {
    match command {
        Commands::Init { force } => run_init(config_path, force),
        Commands::Score { chart, domain, tsv } => {
            let config = load_validated_config(config_path);
            run_score(&config, &chart, domain.as_deref(), tsv, json, use_colors)
        }
        Commands::Yogas { chart } => {
            let config = load_validated_config(config_path);
            let chart = load_chart(&chart);
            let facts = ChartFacts::derive(&chart, &config.engine);
            let yogas = jyotish_eval::evaluate_yogas_with(&chart, &facts);
            if json {
                print_json(&yogas);
            } else {
                println!("{}", output::format_yogas(&yogas, use_colors));
            }
        }
        Commands::Conditions { chart } => {
            let config = load_validated_config(config_path);
            let chart = load_chart(&chart);
            let facts = ChartFacts::derive(&chart, &config.engine);
            if json {
                print_json(&facts.conditions);
            } else {
                println!("{}", output::format_conditions(&facts.conditions, use_colors));
            }
        }
        Commands::Placements { chart } => {
            let config = load_validated_config(config_path);
            let chart = load_chart(&chart);
            let facts = ChartFacts::derive(&chart, &config.engine);
            if json {
                print_json(&facts.analysis);
            } else {
                println!("{}", output::format_placements(&facts.analysis, use_colors));
            }
        }
        Commands::Domains => {
            let domains = load_validated_config(config_path).all_domains();
            if json {
                print_json(&domains);
            } else {
                println!("{}", output::format_domains(&domains));
            }
        }
    }
}

fn run_score(
    config: &Config,
    chart_path: &Path,
    domain: Option<&str>,
    tsv: bool,
    json: bool,
    use_colors: bool,
) {
    let domains = match domain {
        Some(name) => match config.domain(name) {
            Some(d) => vec![d],
            None => {
                eprintln!("Unknown domain '{}'. Run `jyotish-eval domains` to list them.", name);
                std::process::exit(EXIT_CONFIG);
            }
        },
        None => config.all_domains(),
    };

    let chart = load_chart(chart_path);
    let facts = ChartFacts::derive(&chart, &config.engine);

    let mut results = Vec::with_capacity(domains.len());
    for domain in &domains {
        match scoring::score_with_facts(&chart, &facts, domain) {
            Ok(result) => results.push(result),
            Err(e) => {
                eprintln!("Scoring error in '{}': {}", domain.name, e);
                std::process::exit(EXIT_SCORING);
            }
        }
    }

    if json {
        print_json(&results);
    } else if tsv {
        println!("{}", output::format_tsv(&results));
    } else if results.len() == 1 {
        println!("{}", output::format_score_report(&results[0], use_colors));
    } else {
        println!("{}", output::format_score_table(&results, use_colors));
    }
}
