use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use flight_refine::amadeus::load_search_response;
use flight_refine::domain::FlightOffer;
use flight_refine::format::{
    format_date, format_duration, format_price, format_stops, format_time, layover_duration,
    time_of_day,
};
use flight_refine::refine::{RefineConfig, offer_airlines, stop_count};
use flight_refine::store::{SearchStore, SearchView};

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // First argument wins over the environment
    let Some(path) = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("FLIGHT_RESULTS").ok())
        .map(PathBuf::from)
    else {
        eprintln!("usage: flight-refine <search-response.json>");
        eprintln!("       (or set FLIGHT_RESULTS)");
        return ExitCode::from(2);
    };

    let mut store = SearchStore::new(config_from_env());

    match load_search_response(&path) {
        Ok(results) => store.load_results(results),
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to load search response");
            return ExitCode::FAILURE;
        }
    }

    if let Ok(sort) = std::env::var("FLIGHT_SORT") {
        store.set_sort_key_text(&sort);
    }

    let view = store.view();
    info!(
        offers = store.offers().len(),
        shown = view.flights.len(),
        "refined search results"
    );

    print_offers(&store, &view);
    print_summary(&view)
}

/// Configuration from `PRICE_BUCKETS`, falling back to defaults.
fn config_from_env() -> RefineConfig {
    let config = RefineConfig::default();
    match std::env::var("PRICE_BUCKETS") {
        Ok(text) => match text.parse::<usize>() {
            Ok(n) if n > 0 => config.with_bucket_count(n),
            _ => {
                warn!(value = %text, default = config.bucket_count, "invalid PRICE_BUCKETS");
                config
            }
        },
        Err(_) => config,
    }
}

fn print_offers(store: &SearchStore, view: &SearchView) {
    for offer in view.flights.iter() {
        println!("{}", offer_line(store, offer));
        for itinerary in offer.itineraries() {
            for pair in itinerary.segments().windows(2) {
                println!(
                    "      {} in {}",
                    layover_duration(&pair[0].arrival.at, &pair[1].departure.at),
                    pair[0].arrival.airport
                );
            }
        }
    }
}

fn offer_line(store: &SearchStore, offer: &FlightOffer) -> String {
    let outbound = offer.outbound();
    let departure = &outbound.departure().at;
    let codes = offer_airlines(offer);
    let airlines: Vec<&str> = codes
        .iter()
        .map(|code| store.carriers().name_for(code))
        .collect();

    format!(
        "{:>8}  {} {} ({}) -> {}  {:>8}  {:<9} {}",
        format_price(offer.grand_total(), &offer.price.currency),
        format_date(departure),
        format_time(departure),
        time_of_day(departure),
        format_time(&outbound.arrival().at),
        format_duration(outbound.duration()),
        format_stops(stop_count(offer)),
        airlines.join(", ")
    )
}

fn print_summary(view: &SearchView) -> ExitCode {
    let summary = serde_json::json!({
        "priceBounds": [view.price_bounds.0, view.price_bounds.1],
        "stats": view.price_stats,
        "distribution": view.price_distribution.as_slice(),
        "airlines": view.available_airlines.as_slice(),
        "sort": view.sort_key.map(|key| key.as_str()),
        "filtersActive": view.has_active_filters,
    });

    match serde_json::to_string_pretty(&summary) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "failed to encode summary");
            ExitCode::FAILURE
        }
    }
}
