//! Command implementations for the Velib tracker CLI.
//!
//! One-shot queries against the tracker backend, plus `watch`, which runs the
//! dashboard's poll schedule and overlay model headless and logs what the map
//! would show.

use clap::{Args, Subcommand};
use std::time::Duration;
use velib_api::client::ApiClient;
use velib_api::endpoint::DEFAULT_HISTORY_HOURS;
use velib_api::Endpoint;
use velib_map::schedule::PollSchedule;
use velib_map::FilterState;

pub mod query;
pub mod watch;

/// Backend used when neither `--base-url` nor `VELIB_API_URL` is set.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Station filter checkboxes as flags.
///
/// With none given the map default applies (all stations).
#[derive(Args, Debug, Clone, Default)]
pub struct StationFilterArgs {
    /// Show all stations except empty and full ones
    #[arg(long)]
    pub all: bool,

    /// Show stations with no bikes
    #[arg(long)]
    pub empty: bool,

    /// Show stations with no free docks
    #[arg(long)]
    pub full: bool,
}

impl StationFilterArgs {
    pub fn filter_state(&self) -> FilterState {
        if !(self.all || self.empty || self.full) {
            return FilterState::default();
        }
        FilterState {
            show_all: self.all,
            show_empty: self.empty,
            show_full: self.full,
            ..FilterState::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List the stations the map would show
    Stations {
        #[command(flatten)]
        filter: StationFilterArgs,

        /// Also write the visible stations to this CSV file
        #[arg(long)]
        csv: Option<String>,
    },

    /// Print the live statistics panel
    Stats,

    /// List bikes currently in transit
    Live,

    /// List bikes flagged as malfunctioning
    Malfunctions,

    /// Print the recent history of one station
    History {
        /// Station code
        code: String,

        /// How many hours back
        #[arg(long, default_value_t = DEFAULT_HISTORY_HOURS)]
        hours: u32,
    },

    /// Poll the backend on the dashboard schedule until interrupted
    Watch {
        #[command(flatten)]
        filter: StationFilterArgs,

        /// Track bikes in transit
        #[arg(long)]
        in_transit: bool,

        /// Track malfunctioning bikes
        #[arg(long)]
        malfunctions: bool,

        /// Stations period in seconds (0 disables the timer)
        #[arg(long, default_value_t = 60)]
        stations_every: u64,

        /// Statistics period in seconds (0 disables the timer)
        #[arg(long, default_value_t = 30)]
        stats_every: u64,

        /// Live trips period in seconds; fetched once at startup when unset
        #[arg(long)]
        trips_every: Option<u64>,

        /// Malfunctions period in seconds; fetched once at startup when unset
        #[arg(long)]
        malfunctions_every: Option<u64>,
    },
}

fn seconds(s: u64) -> Option<Duration> {
    Some(Duration::from_secs(s))
}

pub async fn run(base_url: &str, command: Command) -> anyhow::Result<()> {
    let client = ApiClient::new(base_url);
    match command {
        Command::Stations { filter, csv } => {
            query::run_stations(&client, &filter.filter_state(), csv.as_deref()).await
        }
        Command::Stats => query::run_stats(&client).await,
        Command::Live => query::run_live(&client).await,
        Command::Malfunctions => query::run_malfunctions(&client).await,
        Command::History { code, hours } => query::run_history(&client, &code, hours).await,
        Command::Watch {
            filter,
            in_transit,
            malfunctions,
            stations_every,
            stats_every,
            trips_every,
            malfunctions_every,
        } => {
            let flags = FilterState {
                show_in_transit: in_transit,
                show_malfunctioning: malfunctions,
                ..filter.filter_state()
            };
            let schedule = PollSchedule::default()
                .with_period(Endpoint::Stations, seconds(stations_every))
                .with_period(Endpoint::Statistics, seconds(stats_every))
                .with_period(Endpoint::LiveTrips, trips_every.and_then(seconds))
                .with_period(Endpoint::Malfunctioning, malfunctions_every.and_then(seconds));
            watch::run_watch(client, flags, schedule).await
        }
    }
}
