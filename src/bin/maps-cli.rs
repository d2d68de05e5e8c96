use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args as ClapArgs, CommandFactory, Parser, Subcommand};
use maps_client::cli::format::{autocomplete_line, place_line, to_pretty_json};
use maps_client::cli::{normalize_completion_url, parse_countries, resolve_user_location, user_location, UsageError};
use maps_client::client::MapsClient;
use maps_client::config::loader::load_config;
use maps_client::domain::model::{Place, SearchResponsePlace, UserLocation};
use maps_client::domain::request::{GeocodeInput, SearchAutocompleteInput, SearchInput};
use maps_client::error::MapsError;
use maps_client::observability::metrics::get_metrics;
use maps_client::utils::constants::ENV_TOKEN;
use maps_client::utils::logging::{self, LogLevel};
use tracing::debug;

#[derive(Parser)]
#[command(author, version, about = "Apple Maps Server API from the command line", long_about = None)]
struct Args {
    /// Long-lived Maps authorization token
    #[arg(long, env = ENV_TOKEN, hide_env_values = true, global = true)]
    token: Option<String>,
    /// Optional YAML client configuration
    #[arg(short, long, env = "MAPS_CLIENT_CONFIG", global = true)]
    config: Option<PathBuf>,
    #[arg(long, env = "LOG_LEVEL", value_enum, global = true)]
    log_level: Option<LogLevel>,
    /// Print the raw response as pretty JSON
    #[arg(long, global = true)]
    json: bool,
    /// Dump client metrics to stderr after the command
    #[arg(long, global = true)]
    print_metrics: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Forward geocode an address
    Geocode {
        #[arg(required = true, num_args = 1..)]
        address: Vec<String>,
        #[command(flatten)]
        hints: LocationHints,
    },
    /// Reverse geocode a coordinate
    ReverseGeocode {
        #[arg(allow_negative_numbers = true)]
        latitude: f64,
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
        #[arg(long = "lang")]
        language: Option<String>,
    },
    /// Search places and points of interest
    Search {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        #[command(flatten)]
        hints: LocationHints,
    },
    /// Autocomplete a partial query
    Autocomplete {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        #[command(flatten)]
        hints: LocationHints,
        /// Print API completion URLs instead of Apple Maps web links
        #[arg(long)]
        api_url: bool,
    },
    /// Resolve an autocomplete completion URL
    Resolve {
        #[arg(required = true, num_args = 1..)]
        completion_url: Vec<String>,
    },
}

#[derive(ClapArgs)]
struct LocationHints {
    /// BCP 47 language tag
    #[arg(long = "lang")]
    language: Option<String>,
    #[arg(long, num_args = 2, value_names = ["LAT", "LON"], allow_negative_numbers = true)]
    user_location: Option<Vec<f64>>,
    /// Comma separated country codes, e.g. US,CA
    #[arg(long, value_name = "US,CA")]
    limit_to_countries: Vec<String>,
}

struct ResolvedHints {
    language: Option<String>,
    user_location: Option<UserLocation>,
    limit_to_countries: Vec<String>,
}

impl LocationHints {
    async fn resolve(self, client: &MapsClient) -> Result<ResolvedHints> {
        let limit_to_countries = parse_countries(&self.limit_to_countries);
        let explicit = match self.user_location.as_deref() {
            Some([latitude, longitude]) => Some(user_location(*latitude, *longitude)?),
            _ => None,
        };
        let user_location =
            resolve_user_location(client, explicit, self.language.as_deref(), &limit_to_countries).await?;
        Ok(ResolvedHints { language: self.language, user_location, limit_to_countries })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    logging::run(&config, args.log_level);

    let token = args
        .token
        .as_deref()
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .ok_or_else(|| UsageError::new(format!("Missing {}. Pass --token or set the env var.", ENV_TOKEN)))?;

    let client = MapsClient::new(token, &config)?;
    debug!(api_url = %config.api_url, "maps client ready");

    execute(&client, args.command, args.json).await?;

    if args.print_metrics {
        eprintln!("{}", get_metrics().render()?);
    }
    Ok(())
}

async fn execute(client: &MapsClient, command: Command, json: bool) -> Result<()> {
    match command {
        Command::Geocode { address, hints } => {
            let hints = hints.resolve(client).await?;
            let mut builder = GeocodeInput::builder(address.join(" "));
            if let Some(language) = hints.language {
                builder = builder.language(language);
            }
            if let Some(location) = hints.user_location {
                builder = builder.user_location(location);
            }
            if !hints.limit_to_countries.is_empty() {
                builder = builder.limit_to_countries(hints.limit_to_countries);
            }
            let response = client.geocode(&builder.build()).await?;
            if json {
                println!("{}", to_pretty_json(&response)?);
            } else {
                print_places(&response.results);
            }
        }
        Command::ReverseGeocode { latitude, longitude, language } => {
            let response = client.reverse_geocode(latitude, longitude, language.as_deref()).await?;
            if json {
                println!("{}", to_pretty_json(&response)?);
            } else {
                print_places(&response.results);
            }
        }
        Command::Search { query, hints } => {
            let hints = hints.resolve(client).await?;
            let mut builder = SearchInput::builder(query.join(" "));
            if let Some(language) = hints.language {
                builder = builder.language(language);
            }
            if let Some(location) = hints.user_location {
                builder = builder.user_location(location);
            }
            if !hints.limit_to_countries.is_empty() {
                builder = builder.limit_to_countries(hints.limit_to_countries);
            }
            let response = client.search(&builder.build()).await?;
            if json {
                println!("{}", to_pretty_json(&response)?);
            } else {
                print_search_places(&response.results);
            }
        }
        Command::Autocomplete { query, hints, api_url } => {
            let hints = hints.resolve(client).await?;
            let mut builder = SearchAutocompleteInput::builder(query.join(" "));
            if let Some(language) = hints.language {
                builder = builder.language(language);
            }
            if let Some(location) = hints.user_location {
                builder = builder.user_location(location);
            }
            if !hints.limit_to_countries.is_empty() {
                builder = builder.limit_to_countries(hints.limit_to_countries);
            }
            let response = client.autocomplete(&builder.build()).await?;
            if json {
                println!("{}", to_pretty_json(&response)?);
            } else {
                for result in &response.results {
                    println!("{}", autocomplete_line(result, api_url));
                }
            }
        }
        Command::Resolve { completion_url } => {
            let completion_url = normalize_completion_url(&completion_url.join(" "));
            let response = client.resolve_completion_url(&completion_url).await?;
            if json {
                println!("{}", to_pretty_json(&response)?);
            } else {
                print_search_places(&response.results);
            }
        }
    }
    Ok(())
}

fn print_places(places: &[Place]) {
    for place in places {
        println!("{}", place_line(&place.name, &place.formatted_address_lines));
    }
}

fn print_search_places(places: &[SearchResponsePlace]) {
    for place in places {
        println!("{}", place_line(&place.name, &place.formatted_address_lines));
    }
}

fn report(err: &anyhow::Error) -> ExitCode {
    if let Some(usage) = err.downcast_ref::<UsageError>() {
        eprintln!("{}\n", usage);
        let _ = Args::command().print_help();
        return ExitCode::from(2);
    }

    eprintln!("Error: {}", err);
    for cause in err.chain().skip(1) {
        eprintln!("Cause: {}", cause);
    }
    if let Some(body) = err.downcast_ref::<MapsError>().and_then(MapsError::response_body) {
        if !body.trim().is_empty() {
            eprintln!("Response: {}", body);
        }
    }
    ExitCode::FAILURE
}
