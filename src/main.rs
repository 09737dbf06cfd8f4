// src/main.rs
//
// Worked-example driver: solves x^2 - 4x + exp(-x) = 0 both ways and runs the
// integer searches with the bounds from mathkit.toml / MATHKIT_* variables.
//
// Usage: mathkit [--json] [--config <path>]

use log::{info, warn, debug};
use env_logger::Env;
use serde::Serialize;
use mathkit::config::MathkitConfig;
use mathkit::integer_search::{
    factorize, first_mersenne_counterexample, mersenne_number, mersenne_search, perfect_numbers, prime_range,
};
use mathkit::root_finder::{Root, RootFinder};

const SAMPLE_FACTORIZATIONS: [i64; 4] = [36, 60, 2047, 8128];

#[derive(Debug, Serialize)]
struct WorkedExamples {
    equation: &'static str,
    bisection: Result<Root, String>,
    newton: Result<Root, String>,
    primes: Vec<i64>,
    mersenne_counterexample: Result<Option<u32>, String>,
    mersenne_exponents: Result<Vec<u32>, String>,
    mersenne_primes: Vec<i64>,
    perfect_numbers: Vec<i64>,
    factorizations: Vec<(i64, Vec<i64>)>,
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let json = args.iter().any(|a| a == "--json");
    let (path_arg, missing_path) = match config_path(&args) {
        Ok(path) => (path, false),
        Err(MissingConfigPath) => (None, true),
    };

    let loaded = match path_arg {
        Some(path) => MathkitConfig::load_from_file(path),
        None => MathkitConfig::load(),
    };
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (MathkitConfig::default(), Some(e)),
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("MATHKIT_LOG", config.log_level.as_str())
        .write_style_or("MATHKIT_LOG_STYLE", "auto");
    env_logger::Builder::from_env(env).init();

    if missing_path {
        warn!("--config given without a path, loading mathkit.toml / mathkit.yaml instead");
    }
    if let Some(e) = config_error {
        warn!("Failed to load configuration, using defaults: {}", e);
    }
    debug!("Configuration: {:?}", config);

    let report = run(&config);

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(text) => println!("{}", text),
            Err(e) => eprintln!("Error serializing report: {}", e),
        }
    } else {
        print_report(&report);
    }
}

/// `--config` was the last argument or was followed by another flag.
#[derive(Debug, PartialEq)]
struct MissingConfigPath;

/// The path following `--config`, if the flag is present.
fn config_path(args: &[String]) -> Result<Option<&str>, MissingConfigPath> {
    match args.iter().position(|a| a == "--config") {
        None => Ok(None),
        Some(i) => match args.get(i + 1) {
            Some(path) if !path.starts_with("--") => Ok(Some(path.as_str())),
            _ => Err(MissingConfigPath),
        },
    }
}

fn run(config: &MathkitConfig) -> WorkedExamples {
    let finder = RootFinder::new(config.solver);
    let f = |x: f64| x * x - 4.0 * x + (-x).exp();
    let dfdx = |x: f64| 2.0 * x - 4.0 - (-x).exp();

    info!("Solving with tolerance {}", config.solver.tolerance);
    let bisection = finder.bisection(f, -0.5, 1.0).map_err(|e| e.to_string());
    let newton = finder.newton_iteration(f, dfdx, 0.0).map_err(|e| e.to_string());

    let search = &config.search;
    info!("Listing primes up to {}", search.prime_range_end);
    let primes = prime_range(1, search.prime_range_end);

    info!("Searching Mersenne exponents up to {}", search.mersenne_limit);
    let mersenne_counterexample = first_mersenne_counterexample(search.counterexample_limit).map_err(|e| e.to_string());
    let mersenne_exponents = mersenne_search(search.mersenne_limit).map_err(|e| e.to_string());
    let mersenne_primes = match &mersenne_exponents {
        Ok(exponents) => exponents.iter().filter_map(|&p| mersenne_number(p).ok()).collect(),
        Err(_) => Vec::new(),
    };

    info!("Searching perfect numbers up to {}", search.perfect_limit);
    let perfect_numbers = perfect_numbers(search.perfect_limit);

    let factorizations = SAMPLE_FACTORIZATIONS.iter().map(|&n| (n, factorize(n))).collect();

    WorkedExamples {
        equation: "x^2 - 4x + exp(-x) = 0",
        bisection,
        newton,
        primes,
        mersenne_counterexample,
        mersenne_exponents,
        mersenne_primes,
        perfect_numbers,
        factorizations,
    }
}

fn print_report(report: &WorkedExamples) {
    println!("\n{}", "=".repeat(60));
    println!("Solving {}", report.equation);
    println!("{}", "=".repeat(60));
    print_root("Bisection on [-0.5, 1]", &report.bisection);
    print_root("Newton from x0 = 0", &report.newton);

    println!("\n{}", "-".repeat(60));
    println!("Primes: {:?}", report.primes);
    match &report.mersenne_counterexample {
        Ok(Some(p)) => println!("First prime p with composite 2^p - 1: {}", p),
        Ok(None) => println!("No prime p with composite 2^p - 1 in range"),
        Err(e) => println!("Counterexample search failed: {}", e),
    }
    match &report.mersenne_exponents {
        Ok(exponents) => {
            println!("Mersenne exponents: {:?}", exponents);
            println!("Mersenne primes: {:?}", report.mersenne_primes);
        }
        Err(e) => println!("Mersenne search failed: {}", e),
    }
    println!("Perfect numbers: {:?}", report.perfect_numbers);
    for (n, factors) in &report.factorizations {
        println!("Factors of {}: {:?}", n, factors);
    }
}

fn print_root(label: &str, result: &Result<Root, String>) {
    match result {
        Ok(root) => println!(
            "{}: x = {:.6}, f(x) = {:.5e} ({} iterations)",
            label, root.x, root.residual, root.iterations
        ),
        Err(e) => println!("{}: {}", label, e),
    }
}
