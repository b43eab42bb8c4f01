use std::collections::BTreeMap;
use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use jyoti_base::{
    DEFAULT_LATITUDE_DEG, KaalKind, Nakshatra, PlanetaryPosition, Quality, SolarLocation,
    StaticChart, TimeWindow, abhijit_muhurta, classify_karana, classify_nakshatra,
    classify_panchang, classify_tithi, classify_yoga, combustion_report, derive_panchang,
    guna_milan, kaal_for_location, longitude_table, planetary_wars, rahu_kaal_fixed, solar_times,
    tithi_from_label,
};
use jyoti_math::{Dms, ParseDmsError, parse_dms, try_deg_to_dms};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "jyoti", about = "Derived Vedic calculations CLI")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct LocationArgs {
    /// Latitude in degrees (north positive)
    #[arg(long, default_value_t = DEFAULT_LATITUDE_DEG, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees (east positive); needs --tz
    #[arg(long, requires = "tz", allow_hyphen_values = true)]
    lng: Option<f64>,
    /// IANA time zone, e.g. Asia/Kolkata
    #[arg(long)]
    tz: Option<String>,
}

impl LocationArgs {
    fn location(&self) -> SolarLocation {
        SolarLocation {
            latitude_deg: self.lat,
            longitude_deg: self.lng,
            timezone: self.tz.clone(),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    /// Weekday table of clock times
    Fixed,
    /// Eighth of the local sunrise..sunset span
    Location,
}

#[derive(Clone, Copy, ValueEnum)]
enum Window {
    RahuKaal,
    Yamaganda,
    Gulika,
    Abhijit,
}

#[derive(Clone, Copy, ValueEnum)]
enum Element {
    Tithi,
    Nakshatra,
    Yoga,
    Karana,
}

#[derive(Subcommand)]
enum Commands {
    /// Approximate sunrise, sunset and solar noon
    Sun {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        #[command(flatten)]
        loc: LocationArgs,
    },
    /// Rahu Kaal, Yamaganda, Gulika Kaal or Abhijit Muhurta
    RahuKaal {
        /// Local date and time (YYYY-MM-DDThh:mm[:ss])
        #[arg(long)]
        at: String,
        /// Calculation method (fixed applies to Rahu Kaal only)
        #[arg(long, value_enum, default_value = "location")]
        method: Method,
        /// Which window to compute
        #[arg(long, value_enum, default_value = "rahu-kaal")]
        window: Window,
        #[command(flatten)]
        loc: LocationArgs,
    },
    /// Tithi index (0-29) for a paksha-qualified label
    TithiIndex {
        /// e.g. "Krishna Ashtami"
        label: String,
    },
    /// Panchang from sidereal Sun and Moon longitudes
    Panchang {
        /// Local date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Sidereal Sun longitude in degrees
        #[arg(long)]
        sun: f64,
        /// Sidereal Moon longitude in degrees
        #[arg(long)]
        moon: f64,
    },
    /// Convert decimal degrees to DMS, or DMS text back to degrees
    Dms {
        /// e.g. 137.5019 or 137°30'07"
        value: String,
    },
    /// Auspiciousness of a panchang element
    Classify {
        #[arg(value_enum)]
        element: Element,
        /// Element name, e.g. "Pushya"
        name: String,
    },
    /// Ashtakoot Guna Milan for two birth nakshatra indices
    Guna {
        /// First nakshatra index (0-26)
        n1: u8,
        /// Second nakshatra index (0-26)
        n2: u8,
    },
    /// Combustion report for a JSON chart
    Combustion {
        /// JSON object mapping body name to position
        chart: PathBuf,
    },
    /// Planetary wars in a JSON chart
    Yuddha {
        /// JSON object mapping body name to position
        chart: PathBuf,
    },
    /// Longitude table for a JSON chart
    Longitudes {
        /// JSON object mapping body name to position
        chart: PathBuf,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("JYOTI_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("invalid date '{s}': {e}"))
}

fn parse_local_datetime(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("invalid date-time '{s}': {e}"))
}

fn load_chart(path: &Path) -> Result<StaticChart, Box<dyn Error>> {
    let text = std::fs::read_to_string(path)?;
    let raw: BTreeMap<String, PlanetaryPosition> = serde_json::from_str(&text)?;
    let chart = StaticChart::from_named(raw)?;
    tracing::debug!(path = %path.display(), bodies = chart.len(), "chart loaded");
    Ok(chart)
}

/// Resolve the requested muhurta window. The fixed table only exists for Rahu Kaal.
fn select_window(
    window: Window,
    method: Method,
    now: NaiveDateTime,
    location: &SolarLocation,
) -> Result<(&'static str, TimeWindow), String> {
    let kind = match (window, method) {
        (Window::RahuKaal, Method::Fixed) => return Ok(("Rahu Kaal", rahu_kaal_fixed(now))),
        (Window::Abhijit, Method::Location) => {
            return Ok(("Abhijit Muhurta", abhijit_muhurta(now, location)));
        }
        (_, Method::Fixed) => {
            return Err("--method fixed is only available for --window rahu-kaal".to_string());
        }
        (Window::RahuKaal, Method::Location) => KaalKind::RahuKaal,
        (Window::Yamaganda, Method::Location) => KaalKind::Yamaganda,
        (Window::Gulika, Method::Location) => KaalKind::Gulika,
    };
    Ok((kind.name(), kaal_for_location(kind, now, location)))
}

#[derive(Debug, PartialEq)]
enum Converted {
    Dms(Dms),
    Degrees(f64),
}

/// Decimal input converts to DMS, anything else is parsed as DMS text.
fn convert_dms(value: &str) -> Result<Converted, ParseDmsError> {
    match value.trim().parse::<f64>() {
        Ok(deg) => try_deg_to_dms(deg).map(Converted::Dms),
        Err(_) => parse_dms(value).map(Converted::Degrees),
    }
}

fn classify_element(element: Element, name: &str) -> Quality {
    match element {
        Element::Tithi => classify_tithi(name),
        // accept any spelling the nakshatra parser does
        Element::Nakshatra => match name.parse::<Nakshatra>() {
            Ok(n) => classify_nakshatra(n.name()),
            Err(_) => classify_nakshatra(name),
        },
        Element::Yoga => classify_yoga(name),
        Element::Karana => classify_karana(name),
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), Box<dyn Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_window(label: &str, w: &TimeWindow) {
    let marker = if w.is_active { " (active now)" } else { "" };
    println!("{label}: {} - {}{marker}", w.start, w.end);
}

fn yes_no(b: bool) -> &'static str {
    if b { "yes" } else { "no" }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    match cli.command {
        Commands::Sun { date, loc } => {
            let date = parse_date(&date)?;
            let times = solar_times(date, &loc.location());
            if json {
                print_json(&times)?;
            } else {
                println!("Sunrise:    {}", times.sunrise);
                println!("Sunset:     {}", times.sunset);
                println!("Solar noon: {:.4} h", times.solar_noon_hour);
                println!("Day length: {:.4} h", times.day_length_hours());
            }
        }

        Commands::RahuKaal {
            at,
            method,
            window,
            loc,
        } => {
            let now = parse_local_datetime(&at)?;
            let (label, w) = select_window(window, method, now, &loc.location())?;
            if json {
                print_json(&w)?;
            } else {
                print_window(label, &w);
            }
        }

        Commands::TithiIndex { label } => {
            let tithi = tithi_from_label(&label);
            if json {
                print_json(&tithi.index())?;
            } else {
                println!("{} (index {})", tithi, tithi.index());
            }
        }

        Commands::Panchang { date, sun, moon } => {
            let date = parse_date(&date)?;
            let snap = derive_panchang(date, sun, moon);
            let quality = classify_panchang(&snap);
            if json {
                print_json(&snap)?;
            } else {
                println!("Date:      {}", snap.date);
                println!(
                    "Tithi:     {} [{}] (index {})",
                    snap.tithi, quality.tithi, snap.tithi_index
                );
                println!("Nakshatra: {} [{}]", snap.nakshatra, quality.nakshatra);
                println!("Yoga:      {} [{}]", snap.yoga, quality.yoga);
                println!("Karana:    {} [{}]", snap.karana, quality.karana);
            }
        }

        Commands::Dms { value } => match convert_dms(&value)? {
            Converted::Dms(dms) => {
                if json {
                    print_json(&dms)?;
                } else {
                    println!("{dms}");
                }
            }
            Converted::Degrees(deg) => {
                if json {
                    print_json(&deg)?;
                } else {
                    println!("{deg:.6} deg");
                }
            }
        },

        Commands::Classify { element, name } => {
            let quality = classify_element(element, &name);
            if json {
                print_json(&quality)?;
            } else {
                println!("{name}: {quality}");
            }
        }

        Commands::Guna { n1, n2 } => {
            let m = guna_milan(n1, n2);
            if json {
                print_json(&m)?;
            } else {
                for s in &m.scores {
                    println!("{:<13} {:>4} / {}", s.name, s.obtained, s.max);
                }
                println!("Total: {} / 36 ({}%)", m.total, m.percentage);
                println!("{}: {}", m.verdict.title, m.verdict.description);
            }
        }

        Commands::Combustion { chart } => {
            let report = combustion_report(&load_chart(&chart)?);
            if json {
                print_json(&report)?;
            } else if report.is_empty() {
                println!("No Sun position in chart; nothing to report.");
            } else {
                for e in &report {
                    println!(
                        "{:<8} combust: {:<3}  {:>5.1} deg from Sun (limit {})",
                        e.planet.english_name(),
                        yes_no(e.is_combust),
                        e.distance_from_sun,
                        e.threshold
                    );
                }
            }
        }

        Commands::Yuddha { chart } => {
            let wars = planetary_wars(&load_chart(&chart)?);
            if json {
                print_json(&wars)?;
            } else if wars.is_empty() {
                println!("No planetary wars.");
            } else {
                for w in &wars {
                    println!(
                        "{} vs {} ({:.2} deg): {}",
                        w.planet1.english_name(),
                        w.planet2.english_name(),
                        w.distance,
                        w.effect
                    );
                }
            }
        }

        Commands::Longitudes { chart } => {
            let rows = longitude_table(&load_chart(&chart)?);
            if json {
                print_json(&rows)?;
            } else {
                for r in &rows {
                    let sign = format!("{} ({})", r.rashi.name(), r.rashi.western_name());
                    println!(
                        "{:<10} {:<23} {:>12} {:>10}  {} pada {}{}",
                        r.point.name(),
                        sign,
                        r.absolute_text,
                        r.in_sign_text,
                        r.nakshatra,
                        r.nakshatra_pada,
                        if r.retrograde { " (R)" } else { "" }
                    );
                }
            }
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    init_tracing();
    run(Cli::parse())
}
