use std::process;

use flight_router::domain::{Airport, WeekTime, day_and_time_to_week_minute, week_minute_to_day_and_time};
use flight_router::planner::{Itinerary, Planner, SearchConfig, SearchRequest};
use flight_router::schedule::{ScheduleGraph, loader};
use tracing_subscriber::EnvFilter;

const USAGE: &str = "\
Usage:
  flight-router list
  flight-router route FROM TO DAY [HH:MM] [LAYOVER_MINS] [--json]

The schedule file is read from the FLIGHTS_CSV environment variable.";

/// Print a message and exit with a usage error status.
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    process::exit(2);
}

#[tokio::main]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{USAGE}");
        process::exit(2);
    };

    let path = std::env::var("FLIGHTS_CSV").unwrap_or_else(|_| {
        eprintln!("{USAGE}");
        fail("FLIGHTS_CSV not set");
    });
    let mut schedule = ScheduleGraph::new();
    match loader::load_file(&path, &mut schedule) {
        Ok(count) => tracing::info!(count, path = path.as_str(), "loaded schedule"),
        Err(e) => fail(format!("{path}: {e}")),
    }

    match command.as_str() {
        "list" => list(&schedule),
        "route" => route(schedule, &args[1..]).await,
        other => {
            eprintln!("{USAGE}");
            fail(format!("unknown command {other:?}"));
        }
    }
}

fn list(schedule: &ScheduleGraph) {
    for flight in schedule.all_flights() {
        let (dep_day, dep_time) = week_minute_to_day_and_time(flight.departure_offset());
        let (arr_day, arr_time) =
            week_minute_to_day_and_time(flight.departure_offset() + flight.duration_mins());
        println!(
            "{} {} {dep_day} {dep_time} -> {arr_day} {arr_time} ({} min)",
            flight.origin(),
            flight.destination(),
            flight.duration_mins()
        );
    }
}

async fn route(schedule: ScheduleGraph, args: &[String]) {
    let json = args.iter().any(|a| a == "--json");
    let positional: Vec<&str> = args
        .iter()
        .filter(|a| *a != "--json")
        .map(String::as_str)
        .collect();

    let [from, to, day, rest @ ..] = positional.as_slice() else {
        eprintln!("{USAGE}");
        fail("route needs FROM, TO and DAY");
    };
    if rest.len() > 2 {
        fail("too many arguments to route");
    }

    let source = Airport::parse(from).unwrap_or_else(|e| fail(e));
    let target = Airport::parse(to).unwrap_or_else(|e| fail(e));
    if source == target {
        fail("source and destination must be different airports");
    }
    for airport in [source, target] {
        if !schedule.contains_airport(&airport) {
            tracing::warn!(%airport, "airport has no scheduled flights");
        }
    }

    let time = rest.first().copied().unwrap_or("00:00");
    let start = day_and_time_to_week_minute(day, time).unwrap_or_else(|e| fail(e));

    let mut config = SearchConfig::default();
    if let Some(layover) = rest.get(1) {
        config.min_layover_mins = layover
            .parse()
            .unwrap_or_else(|_| fail(format!("invalid layover {layover:?}")));
    }

    let request = SearchRequest::new(source, target, WeekTime::new(start));
    let itinerary = run_search(schedule, config, request)
        .await
        .unwrap_or_else(|e| fail(e));

    if json {
        let out = serde_json::to_string_pretty(&itinerary)
            .unwrap_or_else(|e| fail(format!("failed to encode itinerary: {e}")));
        println!("{out}");
    } else {
        print_itinerary(source, target, WeekTime::new(start), &itinerary);
    }
}

/// Run the search on a blocking worker so the runtime stays responsive.
async fn run_search(
    schedule: ScheduleGraph,
    config: SearchConfig,
    request: SearchRequest,
) -> Result<Itinerary, String> {
    tokio::task::spawn_blocking(move || Planner::new(&schedule, &config).search(&request))
        .await
        .map_err(|e| format!("search task failed: {e}"))?
        .map_err(|e| e.to_string())
}

fn print_itinerary(source: Airport, target: Airport, start: WeekTime, itinerary: &Itinerary) {
    let Some(arrival) = itinerary.arrival else {
        println!("No route from {source} to {target} within the search horizon.");
        return;
    };

    println!("{source} -> {target}, leaving from {start}");
    println!();
    for flight in &itinerary.flights {
        println!(
            "  {} -> {}  {}  ->  {}  ({} min)",
            flight.origin,
            flight.destination,
            flight.departure,
            flight.arrival,
            flight.duration().num_minutes()
        );
    }
    println!();

    let total = start.until(arrival);
    println!(
        "Arrive {arrival}, {}h {:02}m after start, {} change(s)",
        total.num_hours(),
        total.num_minutes() % 60,
        itinerary.change_count()
    );
}
