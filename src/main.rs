//! suite_booking - demo run
//!
//! Books the "Executiva" suite for a family of three, prints the stay and
//! then cancels it.
//!
//! Run with: cargo run -- [--json]

use rust_decimal::Decimal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use suite_booking::handlers::{BookStayCommand, BookingHandler};
use suite_booking::{AppResult, Config, LogFormat, Room};

/// Initialize tracing/logging
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "suite_booking=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn run(config: &Config, json: bool) -> AppResult<()> {
    let room = Room::new("Executiva", 2, 1, Decimal::new(400, 0), Decimal::new(200, 0))
        .map_err(suite_booking::DomainError::from)?;
    let handler = BookingHandler::new(config.pricing.clone());

    let command = BookStayCommand::new(12)
        .with_guest("Lucas", 32)
        .with_guest("Ana", 29)
        .with_guest("Pedro", 8);

    let mut reservation = handler.execute(&room, command)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reservation.summary()?)?);
    } else {
        println!("Guests: {}", reservation.guest_count());
        if reservation.has_guests() {
            for guest in reservation.guests() {
                println!("{}", guest);
            }
        } else {
            println!("No guests in this reservation");
        }
        println!("Total price: R$ {}", reservation.total_price()?);
    }

    handler.cancel(&mut reservation);

    if json {
        println!("{}", serde_json::to_string_pretty(&reservation.summary()?)?);
    } else {
        println!("Reservation cancelled.");
        println!("Price after cancellation: R$ {}", reservation.total_price()?);
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    tracing::debug!(environment = %config.environment, "Configuration loaded");

    let json = std::env::args().any(|arg| arg == "--json");

    match run(&config, json) {
        Ok(()) => Ok(()),
        Err(e) if e.is_domain_error() => {
            println!("Error: {}", e);
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
