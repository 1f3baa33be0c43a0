//! cnb-rates CLI
//!
//! Print today's official CZK rates from the Czech National Bank.
//!
//! # Usage
//!
//! ```bash
//! # Rates for EUR and USD from the live bulletin
//! cnb-rates rates --currencies EUR,USD
//!
//! # From a saved bulletin, as JSON
//! cnb-rates rates --currencies EUR,JPY --input denni_kurz.txt --format json
//! ```

use cnb_rates::core::currency::Currency;
use cnb_rates::core::exchange_rate::ExchangeRate;
use cnb_rates::provider::config::ProviderConfig;
use cnb_rates::provider::rates::ExchangeRateProvider;
use cnb_rates::provider::source::{BulletinSource, FileSource, HttpSource};
use std::error::Error;
use std::process;

fn print_usage() {
    eprintln!(
        r#"cnb-rates — official CZK exchange rates from the Czech National Bank

USAGE:
    cnb-rates <COMMAND> [OPTIONS]

COMMANDS:
    rates       Print today's rates for the requested currencies
    help        Show this message

OPTIONS (rates):
    --currencies <LIST> Comma-separated currency codes (required)
    --input <FILE>      Read the bulletin from a file instead of the network
    --url <URL>         Bulletin address (default: $CNB_RATES_URL or the CNB site)
    --format <FORMAT>   Output format: text (default) or json

ENVIRONMENT:
    CNB_RATES_URL           Bulletin address
    CNB_RATES_TIMEOUT_SECS  HTTP timeout in seconds (default: 30)
    RUST_LOG                Log filter, e.g. info or cnb_rates=debug

EXAMPLES:
    cnb-rates rates --currencies EUR,USD
    cnb-rates rates --currencies EUR,JPY --input denni_kurz.txt --format json"#
    );
}

/// JSON output schema for a single rate.
#[derive(serde::Serialize)]
struct RateOutput {
    source: String,
    target: String,
    rate: String,
}

impl From<&ExchangeRate> for RateOutput {
    fn from(rate: &ExchangeRate) -> Self {
        Self {
            source: rate.source_currency().to_string(),
            target: rate.target_currency().to_string(),
            rate: rate.rate().normalize().to_string(),
        }
    }
}

/// Print an error and its causes, then exit.
fn fail(error: &dyn Error) -> ! {
    eprintln!("Error: {}", error);
    let mut cause = error.source();
    while let Some(e) = cause {
        eprintln!("  caused by: {}", e);
        cause = e.source();
    }
    process::exit(1);
}

fn parse_currencies(list: &str) -> Vec<Currency> {
    let mut currencies: Vec<Currency> = list
        .split(',')
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.parse::<Currency>().unwrap_or_else(|e| fail(&e)))
        .collect();
    if !currencies.iter().any(Currency::is_base) {
        currencies.push(Currency::base());
    }
    currencies
}

fn cmd_rates(args: &[String]) {
    let mut currencies = None;
    let mut input_path = None;
    let mut url = None;
    let mut format = "text".to_string();
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--currencies" => {
                i += 1;
                currencies = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--currencies requires a comma-separated list");
                    process::exit(1);
                }));
            }
            "--input" => {
                i += 1;
                input_path = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--input requires a file path");
                    process::exit(1);
                }));
            }
            "--url" => {
                i += 1;
                url = Some(args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--url requires an address");
                    process::exit(1);
                }));
            }
            "--format" => {
                i += 1;
                format = args.get(i).cloned().unwrap_or_else(|| {
                    eprintln!("--format requires 'text' or 'json'");
                    process::exit(1);
                });
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                process::exit(1);
            }
        }
        i += 1;
    }

    let list = currencies.unwrap_or_else(|| {
        eprintln!("Error: --currencies <LIST> is required");
        process::exit(1);
    });
    let requested = parse_currencies(&list);

    let source: Box<dyn BulletinSource> = match input_path {
        Some(path) => Box::new(FileSource::new(path)),
        None => {
            let mut config = ProviderConfig::from_env().unwrap_or_else(|e| fail(&e));
            if let Some(url) = url {
                config.url = url;
            }
            Box::new(HttpSource::new(&config).unwrap_or_else(|e| fail(&e)))
        }
    };

    let provider = ExchangeRateProvider::new(source);
    let rates = provider
        .get_exchange_rates(requested)
        .unwrap_or_else(|e| fail(&e));

    if format == "json" {
        let output: Vec<RateOutput> = rates.iter().map(RateOutput::from).collect();
        let json = serde_json::to_string_pretty(&output).unwrap_or_else(|e| fail(&e));
        println!("{}", json);
    } else if rates.is_empty() {
        println!("No requested currency is listed in today's bulletin.");
    } else {
        for rate in &rates {
            println!("{}", rate);
        }
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "rates" => cmd_rates(rest),
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {}", command);
            print_usage();
            process::exit(1);
        }
    }
}
