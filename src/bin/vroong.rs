use std::{env, path::PathBuf, process};

use vroong::{
    config::{ConfigManager, DEFAULT_PRICE_UNIT, WON_PRICE_UNIT},
    init, AppError, Decimal, Locale, PriceUnit, PriceUnits,
};

fn main() {
    init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        None => startup(ConfigManager::default_location()),
        Some("--config") => {
            let path = args.next().map(PathBuf::from).unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            startup(ConfigManager::new(path))
        }
        Some("format") => {
            let tag = args.next().unwrap_or_else(|| {
                print_usage();
                process::exit(1);
            });
            let locale: Locale = tag.parse()?;
            let amount = args.next().map(|raw| parse_amount(&raw)).transpose()?;
            let unit = PriceUnit::new(Some(locale))?;
            println!("{}", unit.format(amount));
            Ok(())
        }
        Some(_) => {
            print_usage();
            process::exit(1);
        }
    }
}

fn startup(manager: ConfigManager) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = manager.load_or_create()?;
    config.apply_env()?;
    match config.server_port {
        Some(port) => tracing::info!("Customized port: {}", port),
        None => tracing::info!("Customized port: none"),
    }

    let units = PriceUnits::from_config(&config)?;

    let dollar = units.get(DEFAULT_PRICE_UNIT)?;
    println!("Price #1: {}", dollar.format(Some(Decimal::new(102, 1))));

    let won = units.get(WON_PRICE_UNIT)?;
    println!("Price #2: {}", won.format(Some(Decimal::from(1_000))));
    Ok(())
}

fn parse_amount(raw: &str) -> Result<Decimal, AppError> {
    raw.trim()
        .parse::<Decimal>()
        .map_err(|_| AppError::InvalidAmount(raw.to_string()))
}

fn print_usage() {
    eprintln!("Usage: vroong [--config <path>]");
    eprintln!("       vroong format <locale> [amount]");
}
