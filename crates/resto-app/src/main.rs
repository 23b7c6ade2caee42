//! # resto
//!
//! Change calculator on the command line.
//!
//! ## Usage
//! ```bash
//! # 50 leva handed over for a 37.45 leva bill
//! resto 50 37.45
//!
//! # Amounts typed in euro
//! resto 20 15.30 --currency EUR
//!
//! # 10 leva plus 20 euro for a 45 leva bill
//! resto 10 45 --split-eur 20
//!
//! # Machine-readable output
//! resto 50 37.45 --json
//! ```
//!
//! ## Exit Codes
//! - `0`: change computed
//! - `1`: an amount was rejected or the payment does not cover the bill
//! - `2`: bad command line

use std::env;
use std::process::ExitCode;

use resto_app::commands::{enter_amount, get_change, get_split_change, ChangeResponse};
use resto_app::state::{AmountField, CalculatorState, ConfigState};
use resto_app::{init_tracing, ApiError};
use resto_core::format::format_amount_with_currency;
use resto_core::Currency;
use tracing::{debug, info};

/// Parsed command line.
#[derive(Debug)]
struct Args {
    received: String,
    bill: String,
    currency: Option<Currency>,
    split_eur: Option<String>,
    json: bool,
}

enum Command {
    Run(Args),
    Help,
}

fn main() -> ExitCode {
    init_tracing();

    let command = match parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {}", err.message);
            eprintln!("Try 'resto --help' for more information.");
            return ExitCode::from(2);
        }
    };

    let args = match command {
        Command::Help => {
            print_help();
            return ExitCode::SUCCESS;
        }
        Command::Run(args) => args,
    };

    let config = ConfigState::from_env();
    debug!("Loaded configuration: {:?}", config);

    match run(&args, &config) {
        Ok(response) => {
            if let Err(err) = print_response(&response, args.json) {
                eprintln!("error: {}", err);
                return ExitCode::FAILURE;
            }
            if response.is_valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: {} ({})", err.message, err.code.as_str());
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args, config: &ConfigState) -> Result<ChangeResponse, ApiError> {
    if let Some(eur) = &args.split_eur {
        info!("Split payment: {} BGN + {} EUR", args.received, eur);
        return get_split_change(config, &args.received, eur, &args.bill);
    }

    let currency = args.currency.unwrap_or(config.default_currency);
    let calculator = CalculatorState::new(currency);

    enter_amount(&calculator, config, AmountField::Received, &args.received)?;
    enter_amount(&calculator, config, AmountField::Bill, &args.bill)?;

    Ok(get_change(&calculator, config))
}

fn parse_args<I>(args: I) -> Result<Command, ApiError>
where
    I: IntoIterator<Item = String>,
{
    let mut positional = Vec::new();
    let mut currency = None;
    let mut split_eur = None;
    let mut json = false;

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--currency" | "-c" => {
                let value = args
                    .next()
                    .ok_or_else(|| ApiError::invalid_input("--currency needs a value (BGN or EUR)"))?;
                currency = Some(value.parse::<Currency>()?);
            }
            "--split-eur" | "-s" => {
                let value = args
                    .next()
                    .ok_or_else(|| ApiError::invalid_input("--split-eur needs an amount"))?;
                split_eur = Some(value);
            }
            "--json" | "-j" => json = true,
            "--help" | "-h" => return Ok(Command::Help),
            flag if flag.starts_with("--") => {
                return Err(ApiError::invalid_input(format!("unknown option {}", flag)))
            }
            _ => positional.push(arg),
        }
    }

    if split_eur.is_some() && currency == Some(Currency::Eur) {
        return Err(ApiError::invalid_input(
            "--split-eur takes the bill in BGN; drop --currency EUR",
        ));
    }

    let mut positional = positional.into_iter();
    match (positional.next(), positional.next(), positional.next()) {
        (Some(received), Some(bill), None) => Ok(Command::Run(Args {
            received,
            bill,
            currency,
            split_eur,
            json,
        })),
        _ => Err(ApiError::invalid_input(
            "expected exactly two amounts: <received> <bill>",
        )),
    }
}

fn print_response(response: &ChangeResponse, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
        return Ok(());
    }

    let currency = response.currency;
    println!(
        "Received: {}    Bill: {}",
        format_text(&response.received_text, currency),
        format_text(&response.bill_text, currency),
    );

    if let Some(err) = &response.error {
        println!("Error:    {}", err.message);
        return Ok(());
    }

    println!(
        "Change:   {}  ({})",
        response.formatted_primary(),
        match currency {
            Currency::Bgn => &response.formatted_eur,
            Currency::Eur => &response.formatted_bgn,
        }
    );

    for line in &response.breakdown {
        let kind = match line.kind {
            resto_core::DenominationKind::Banknote => "banknote",
            resto_core::DenominationKind::Coin => "coin",
        };
        println!(
            "  {:>12} × {:<3} {}",
            format_amount_with_currency(line.denomination, currency),
            line.count,
            kind
        );
    }

    Ok(())
}

fn format_text(text: &str, currency: Currency) -> String {
    if text.is_empty() {
        format!("0 {}", currency.symbol())
    } else {
        format!("{} {}", text, currency.symbol())
    }
}

fn print_help() {
    println!("resto - change calculator for the lev to euro transition");
    println!();
    println!("Usage: resto <received> <bill> [OPTIONS]");
    println!();
    println!("Options:");
    println!("  -c, --currency <BGN|EUR>  Currency the amounts are typed in");
    println!("  -s, --split-eur <AMOUNT>  Euro part of a payment made in both currencies");
    println!("  -j, --json                Print the full response as JSON");
    println!("  -h, --help                Show this help message");
    println!();
    println!("Environment:");
    println!("  RESTO_CURRENCY, RESTO_SHOW_BREAKDOWN, RESTO_QUICK_AMOUNTS, RUST_LOG");
}

#[cfg(test)]
mod tests {
    use super::*;
    use resto_app::ErrorCode;

    fn parse(args: &[&str]) -> Result<Command, ApiError> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_positional() {
        let Ok(Command::Run(args)) = parse(&["50", "37.45"]) else {
            panic!("expected run");
        };
        assert_eq!(args.received, "50");
        assert_eq!(args.bill, "37.45");
        assert_eq!(args.currency, None);
        assert!(!args.json);
    }

    #[test]
    fn test_parse_options() {
        let Ok(Command::Run(args)) = parse(&["--currency", "eur", "20", "15,30", "--json"]) else {
            panic!("expected run");
        };
        assert_eq!(args.currency, Some(Currency::Eur));
        assert_eq!(args.bill, "15,30");
        assert!(args.json);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse(&["50"]).is_err());
        assert!(parse(&["1", "2", "3"]).is_err());
        assert!(parse(&["1", "2", "--currency"]).is_err());
        assert!(parse(&["1", "2", "--currency", "USD"]).is_err());
        assert!(parse(&["1", "2", "--verbose"]).is_err());
        assert!(parse(&["1", "2", "--split-eur", "5", "--currency", "EUR"]).is_err());
        assert!(matches!(parse(&["--help"]), Ok(Command::Help)));
    }

    #[test]
    fn test_unknown_currency_is_invalid_input() {
        let Err(err) = parse(&["1", "2", "--currency", "USD"]) else {
            panic!("expected error");
        };
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert!(err.message.contains("USD"));
    }

    #[test]
    fn test_run_in_euro() {
        let args = Args {
            received: "20".to_string(),
            bill: "15.30".to_string(),
            currency: Some(Currency::Eur),
            split_eur: None,
            json: false,
        };
        let response = run(&args, &ConfigState::default()).unwrap();
        assert_eq!(response.formatted_primary(), "4.70 €");
    }

    #[test]
    fn test_run_split() {
        let args = Args {
            received: "10".to_string(),
            bill: "45".to_string(),
            currency: None,
            split_eur: Some("20".to_string()),
            json: false,
        };
        let response = run(&args, &ConfigState::default()).unwrap();
        assert_eq!(response.bgn, 4.12);
    }

    #[test]
    fn test_run_rejects_huge_amount() {
        let args = Args {
            received: "100000".to_string(),
            bill: "1".to_string(),
            currency: None,
            split_eur: None,
            json: false,
        };
        assert!(run(&args, &ConfigState::default()).is_err());
    }
}
