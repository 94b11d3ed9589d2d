use std::fmt::Display;
use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use kundali_base::{
    AyanamsaSelection, DEFAULT_DASHA_DEPTH, Varga, active_periods, deg_to_dms,
    nakshatra_from_longitude, rashi_from_longitude, try_resolve, varga_placement,
    vimshottari_timeline,
};
use kundali_chart::{BirthMoment, generate_kundali};
use kundali_config::KundaliConfig;
use kundali_ephem::SnapshotOracle;
use kundali_time::datetime_to_jd;

#[derive(Parser)]
#[command(name = "kundali", about = "Sidereal chart and Vimshottari dasha CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rashi from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Convert degrees to DMS
    Dms {
        /// Angle in decimal degrees
        #[arg(allow_hyphen_values = true)]
        deg: f64,
    },
    /// Ayanamsa for a date
    Ayanamsa {
        /// UTC datetime (RFC 3339, e.g. 2000-01-01T12:00:00Z)
        #[arg(long)]
        date: String,
        /// true_chitra, lahiri, raman or krishnamurti
        #[arg(long, default_value = "true_chitra")]
        system: String,
    },
    /// Divisional chart sign of a sidereal longitude
    Varga {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
        /// D1, D2, D3, D7, D9, D12 or D30
        #[arg(long, default_value = "D9")]
        division: Varga,
    },
    /// Vimshottari timeline from the Moon's sidereal longitude
    Dasha {
        /// Moon sidereal longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        moon: f64,
        /// Epoch the timeline is counted from, UTC (RFC 3339), usually the
        /// birth date at 00:00Z
        #[arg(long)]
        birth: String,
        /// 1 = Mahadasha .. 3 = Pratyantardasha
        #[arg(long, default_value_t = DEFAULT_DASHA_DEPTH)]
        depth: u8,
        /// Print only the periods running at this UTC instant
        #[arg(long)]
        at: Option<String>,
    },
    /// Full kundali from a positions snapshot
    Kundali {
        /// Snapshot JSON with houses and tropical positions
        #[arg(long)]
        positions: PathBuf,
        #[arg(long)]
        year: i32,
        #[arg(long)]
        month: u32,
        #[arg(long)]
        day: u32,
        /// Local hour (0-23)
        #[arg(long)]
        hour: u32,
        #[arg(long)]
        minute: u32,
        /// Latitude, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Longitude, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Timezone offset in hours east of UTC (IST = 5.5)
        #[arg(long, allow_hyphen_values = true)]
        tz: f64,
        /// Transit instant, UTC (RFC 3339); defaults to now
        #[arg(long)]
        transit: Option<String>,
        /// Overrides the configured ayanamsa
        #[arg(long)]
        ayanamsa: Option<String>,
        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn fail(msg: impl Display) -> ! {
    eprintln!("error: {msg}");
    std::process::exit(1);
}

fn print_json<T: Serialize>(value: &T) {
    let text = serde_json::to_string_pretty(value).unwrap_or_else(|e| fail(e));
    println!("{text}");
}

fn parse_utc(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid datetime '{s}': {e} (expected RFC 3339)"))
}

fn require_utc(s: &str) -> DateTime<Utc> {
    parse_utc(s).unwrap_or_else(|e| fail(e))
}

fn require_longitude(lon: f64) -> f64 {
    try_resolve(lon).unwrap_or_else(|e| fail(e)).longitude
}

fn load_config(path: Option<&PathBuf>) -> KundaliConfig {
    match path {
        Some(p) => KundaliConfig::load(p).unwrap_or_else(|e| fail(e)),
        None => KundaliConfig::default(),
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let info = rashi_from_longitude(require_longitude(lon));
            print_json(&json!({
                "rashi": info.rashi,
                "sanskrit": info.rashi.name(),
                "rashi_index": info.rashi_index,
                "degrees_in_rashi": info.degrees_in_rashi,
                "dms": info.dms.to_string(),
            }));
        }

        Commands::Nakshatra { lon } => {
            print_json(&nakshatra_from_longitude(require_longitude(lon)));
        }

        Commands::Dms { deg } => {
            if !deg.is_finite() {
                fail(format!("{deg} is not a finite angle"));
            }
            let dms = deg_to_dms(deg);
            print_json(&json!({
                "deg": deg,
                "dms": dms,
                "text": dms.to_string(),
            }));
        }

        Commands::Ayanamsa { date, system } => {
            let dt = require_utc(&date);
            let selection: AyanamsaSelection = system.parse().unwrap_or_else(|e| fail(e));
            let jd = datetime_to_jd(&dt);
            let value = selection.formula_value(jd);
            print_json(&json!({
                "system": selection.name(),
                "date": dt.to_rfc3339(),
                "jd_ut": jd,
                "ayanamsa": value,
                "dms": deg_to_dms(value).to_string(),
            }));
        }

        Commands::Varga { lon, division } => {
            let lon = require_longitude(lon);
            let vp = varga_placement(division, lon);
            print_json(&json!({
                "varga": division,
                "name": division.name(),
                "longitude": lon,
                "sign": vp.sign,
                "sign_index": vp.sign_index,
            }));
        }

        Commands::Dasha {
            moon,
            birth,
            depth,
            at,
        } => {
            let birth_jd = datetime_to_jd(&require_utc(&birth));
            let timeline =
                vimshottari_timeline(moon, birth_jd, depth).unwrap_or_else(|e| fail(e));
            match at {
                Some(at) => {
                    let jd = datetime_to_jd(&require_utc(&at));
                    print_json(&active_periods(&timeline, jd));
                }
                None => print_json(&timeline),
            }
        }

        Commands::Kundali {
            positions,
            year,
            month,
            day,
            hour,
            minute,
            lat,
            lon,
            tz,
            transit,
            ayanamsa,
            config,
        } => {
            let config = load_config(config.as_ref());
            let selection: AyanamsaSelection = match ayanamsa {
                Some(name) => name.parse().unwrap_or_else(|e| fail(e)),
                None => config.ayanamsa_selection().unwrap_or_else(|e| fail(e)),
            };
            let birth = BirthMoment::new(year, month, day, hour, minute, lat, lon)
                .unwrap_or_else(|e| fail(e));
            let transit = transit.as_deref().map(require_utc);
            let oracle = SnapshotOracle::load(&positions).unwrap_or_else(|e| fail(e));
            debug!(entries = oracle.entries().len(), "snapshot loaded");
            let report = generate_kundali(&oracle, &birth, tz, transit, &selection, &config)
                .unwrap_or_else(|e| fail(e));
            print_json(&report);
        }
    }
}
