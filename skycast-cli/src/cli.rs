use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Select};
use skycast_core::{Config, ForecastClient, Location, LocationList};

use crate::output;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Current weather for your saved locations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the current weather for one location.
    Show {
        /// Configured location name; defaults to the first location.
        location: Option<String>,
    },

    /// Step through the configured locations interactively.
    Browse,

    /// List the configured locations.
    Locations,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        match self.command {
            Command::Show { location } => show(&config, location.as_deref()).await,
            Command::Browse => browse(config).await,
            Command::Locations => {
                for location in &config.locations {
                    println!(
                        "{} ({:.4}, {:.4})",
                        location.name, location.latitude, location.longitude
                    );
                }
                Ok(())
            }
        }
    }
}

async fn show(config: &Config, name: Option<&str>) -> Result<()> {
    let location = match name {
        Some(name) => find_location(config, name)?,
        None => &config.locations[0],
    };

    let client = ForecastClient::new();
    let forecast = client
        .fetch_forecast(location.latitude, location.longitude)
        .await
        .with_context(|| format!("Could not fetch weather for {}", location.name))?;

    output::print_forecast(location, &forecast);
    Ok(())
}

fn find_location<'a>(config: &'a Config, name: &str) -> Result<&'a Location> {
    config
        .locations
        .iter()
        .find(|l| l.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| {
            let known: Vec<&str> = config.locations.iter().map(|l| l.name.as_str()).collect();
            anyhow::anyhow!("Unknown location '{}'. Configured locations: {}", name, known.join(", "))
        })
}

const PREVIOUS: &str = "Previous location";
const NEXT: &str = "Next location";
const REFRESH: &str = "Refresh";
const QUIT: &str = "Quit";

/// Interactive loop over the configured locations. One fetch per location
/// change, awaited before the next prompt; a failed fetch is reported and
/// the loop keeps going so Refresh doubles as a retry.
async fn browse(config: Config) -> Result<()> {
    if config.locations.is_empty() {
        bail!("No locations configured");
    }

    let client = ForecastClient::new();
    let mut list = LocationList::new(config.locations);

    loop {
        let location = list.selected().clone();
        match client.fetch_forecast(location.latitude, location.longitude).await {
            Ok(forecast) => output::print_forecast(&location, &forecast),
            Err(err) => println!("Could not fetch weather for {}: {err}", location.name),
        }

        let choice = match Select::new("Where to?", vec![PREVIOUS, NEXT, REFRESH, QUIT]).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Location prompt failed"),
        };

        match choice {
            PREVIOUS => {
                list.select_previous();
            }
            NEXT => {
                list.select_next();
            }
            REFRESH => {}
            _ => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_location_is_case_insensitive() {
        let config = Config::default();

        let found = find_location(&config, "san jose").expect("lookup must succeed");
        assert_eq!(found.name, "San Jose");
    }

    #[test]
    fn find_location_lists_known_names_on_miss() {
        let config = Config::default();

        let err = find_location(&config, "Atlantis").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("Unknown location 'Atlantis'"));
        assert!(msg.contains("San Jose"));
        assert!(msg.contains("Italy"));
    }
}
