//! swe-chart: house cusps and planetary positions for one moment and place.
//!
//! # Usage
//!
//! ```bash
//! # Placidus houses and the standard bodies for J2000 over London
//! cargo run --bin swe-chart --features cli -- --jd 2451545.0 --lat 51.5 --lon 0.0
//!
//! # Whole sign houses, sidereal, from an ISO-8601 instant, as JSON
//! SE_SID_MODE=1 cargo run --bin swe-chart --features cli -- \
//!   --date 2024-03-20T03:06:00Z --lat 40.4 --lon -3.7 --hsys W --sidereal --json
//! ```
//!
//! # Environment Variables
//!
//! - `SE_EPHE_PATH`, `SE_JPL_FILE`, `SE_SID_MODE`: override the config file
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::{DateTime, Utc};
use clap::Parser;
use serde::Serialize;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use swisseph::{
    julian_day_ut, Angles, CalcOpts, EngineConfig, Ephemeris, Flag, HouseCuspFlag, HouseCusps,
    HouseSystem, HousesOpts, PlanetEphData, PlanetaryBody, SwissEph,
};

#[derive(Debug, Parser)]
#[command(name = "swe-chart", version, about = "Houses and planetary positions from the Swiss Ephemeris")]
struct Args {
    /// Julian day (UT)
    #[arg(long, conflicts_with = "date")]
    jd: Option<f64>,

    /// UTC instant in RFC 3339 form, e.g. 2000-01-01T12:00:00Z
    #[arg(long)]
    date: Option<DateTime<Utc>>,

    /// Geographic latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: f64,

    /// Geographic longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: f64,

    /// House system code (P, K, W, ...) or name (placidus, koch, ...)
    #[arg(long, default_value = "P")]
    hsys: HouseSystem,

    /// Sidereal zodiac for cusps and positions
    #[arg(long)]
    sidereal: bool,

    /// Use the built-in Moshier ephemeris instead of the Swiss files
    #[arg(long)]
    moshier: bool,

    /// Configuration file (defaults to swisseph.toml in the usual places)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Serialize)]
struct BodyRow {
    body: PlanetaryBody,
    #[serde(flatten)]
    data: PlanetEphData,
    #[serde(skip_serializing_if = "Option::is_none")]
    warning: Option<String>,
}

#[derive(Debug, Serialize)]
struct Chart {
    jd_ut: f64,
    house_system: HouseSystem,
    house_system_name: String,
    cusps: HouseCusps,
    angles: Angles,
    bodies: Vec<BodyRow>,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<EngineConfig> {
    let mut config = match path {
        Some(path) => EngineConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EngineConfig::find()
            .context("loading swisseph.toml")?
            .unwrap_or_else(|| {
                debug!("No swisseph.toml found; using engine defaults");
                EngineConfig::default()
            }),
    };

    let env = EngineConfig::from_env()?;
    if env.ephemeris.path.is_some() {
        config.ephemeris.path = env.ephemeris.path;
    }
    if env.ephemeris.jpl_file.is_some() {
        config.ephemeris.jpl_file = env.ephemeris.jpl_file;
    }
    if env.sidereal.is_some() {
        config.sidereal = env.sidereal;
    }

    Ok(config)
}

fn build_chart(eph: &mut Ephemeris<SwissEph>, args: &Args, jd_ut: f64) -> anyhow::Result<Chart> {
    let houses = eph.houses(&HousesOpts {
        jd_ut,
        flag: if args.sidereal {
            HouseCuspFlag::Sidereal
        } else {
            HouseCuspFlag::Tropical
        },
        geolat: args.lat,
        geolon: args.lon,
        hsys: args.hsys,
    })?;

    let mut flag = Flag::SPEED;
    flag |= if args.moshier {
        Flag::MOSHIER_EPH
    } else {
        Flag::SWISS_EPH
    };
    if args.sidereal {
        flag |= Flag::SIDEREAL;
    }

    let mut bodies = Vec::with_capacity(PlanetaryBody::ALL.len());
    for body in PlanetaryBody::ALL {
        match eph.calc_checked(&CalcOpts::for_body(jd_ut, body, flag)) {
            Ok(position) => bodies.push(BodyRow {
                body,
                data: position.data,
                warning: position.warning,
            }),
            Err(e) => warn!("skipping {}: {}", body, e),
        }
    }

    Ok(Chart {
        jd_ut,
        house_system: args.hsys,
        house_system_name: eph.house_name(args.hsys),
        cusps: houses.cusps,
        angles: houses.angles,
        bodies,
    })
}

fn print_table(chart: &Chart) {
    println!("JD (UT) {:.6}  {}", chart.jd_ut, chart.house_system_name);
    println!();
    for (i, cusp) in chart.cusps.iter().enumerate() {
        println!("house {:>2}  {:>10.4}", i + 1, cusp);
    }
    println!();
    println!("ASC       {:>10.4}", chart.angles.ac);
    println!("MC        {:>10.4}", chart.angles.mc);
    println!("ARMC      {:>10.4}", chart.angles.armc);
    println!("Vertex    {:>10.4}", chart.angles.vertex);
    println!();
    println!(
        "{:<10} {:>10} {:>10} {:>12} {:>10}",
        "body", "lon", "lat", "dist", "speed"
    );
    for row in &chart.bodies {
        println!(
            "{:<10} {:>10.4} {:>10.4} {:>12.6} {:>10.4}",
            row.body, row.data.lon, row.data.lat, row.data.dist, row.data.spdlon
        );
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let jd_ut = match (args.jd, args.date) {
        (Some(jd), _) => jd,
        (None, Some(date)) => julian_day_ut(date),
        (None, None) => bail!("one of --jd or --date is required"),
    };

    let config = load_config(args.config.as_ref())?;
    let mut eph = Ephemeris::open_with_config(&config)?;
    info!("Swiss Ephemeris {}", eph.engine_version());

    let chart = build_chart(&mut eph, &args, jd_ut)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        print_table(&chart);
    }

    Ok(())
}
