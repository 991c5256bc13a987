//! skynear: CLI + web server reporting the aircraft nearest a watch point.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use comfy_table::{Cell, Table};

use skynear_core::flights::FlightTable;
use skynear_core::geo::GeoPoint;
use skynear_core::unseen::FileUnseenLog;

mod opensky;
mod web;

use opensky::OpenSkyClient;
use web::AppState;

#[derive(Parser)]
#[command(
    name = "skynear",
    version,
    about = "Nearest-aircraft lookup over the OpenSky Network"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the web server
    Serve {
        /// Bind address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Listen port
        #[arg(long, env = "PORT", default_value = "7007")]
        port: u16,

        /// Watch point latitude (degrees)
        #[arg(long, default_value = "41.219215")]
        lat: f64,

        /// Watch point longitude (degrees)
        #[arg(long, default_value = "-8.230035")]
        lon: f64,

        /// Half-width of the state query bounding box (degrees)
        #[arg(long, default_value = "0.2")]
        box_delta: f64,

        /// OpenSky API client id
        #[arg(long, env = "CLIENT_ID")]
        client_id: String,

        /// OpenSky API client secret
        #[arg(long, env = "CLIENT_SECRET", hide_env_values = true)]
        client_secret: String,

        /// Known-flight CSV path
        #[arg(long, default_value = "voos.csv")]
        flights_csv: PathBuf,

        /// Unseen-callsign log path
        #[arg(long, default_value = "logs.txt")]
        unseen_log: PathBuf,
    },

    /// Print the known-flight table
    Flights {
        /// Known-flight CSV path
        #[arg(long, default_value = "voos.csv")]
        flights_csv: PathBuf,
    },

    /// Print callsigns recorded as unseen
    Unseen {
        /// Unseen-callsign log path
        #[arg(long, default_value = "logs.txt")]
        unseen_log: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve {
            host,
            port,
            lat,
            lon,
            box_delta,
            client_id,
            client_secret,
            flights_csv,
            unseen_log,
        } => {
            let state = Arc::new(AppState {
                watch: GeoPoint::new(lat, lon),
                box_delta,
                flights_csv,
                unseen: Arc::new(FileUnseenLog::new(unseen_log)),
                provider: Arc::new(OpenSkyClient::new(client_id, client_secret)),
            });
            web::serve(state, host, port).await;
        }
        Commands::Flights { flights_csv } => cmd_flights(&flights_csv),
        Commands::Unseen { unseen_log } => cmd_unseen(&unseen_log),
    }
}

fn cmd_flights(path: &Path) {
    let flights = FlightTable::load(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        std::process::exit(1);
    });

    if flights.is_empty() {
        println!("No known flights ({})", path.display());
        return;
    }

    let mut table = Table::new();
    table.set_header(vec!["Callsign", "Origin", "Destination", "Airline", "Model"]);

    for rec in flights.records() {
        table.add_row(vec![
            Cell::new(&rec.callsign),
            Cell::new(rec.origin()),
            Cell::new(rec.destination()),
            Cell::new(rec.airline()),
            Cell::new(rec.model()),
        ]);
    }

    println!("{table}");
    println!("{} known flights", flights.len());
}

fn cmd_unseen(path: &Path) {
    let log = FileUnseenLog::new(path);
    let entries = log.entries().unwrap_or_else(|e| {
        eprintln!("Error reading {}: {e}", path.display());
        std::process::exit(1);
    });

    if entries.is_empty() {
        println!("No unseen callsigns ({})", path.display());
        return;
    }

    for callsign in &entries {
        println!("{callsign}");
    }
    println!();
    println!("{} unseen callsigns", entries.len());
}
