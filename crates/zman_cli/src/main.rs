use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use clap::{Args, Parser, Subcommand};
use log::debug;
use serde::Serialize;
use zman_config::ConfigFile;
use zman_halachic::{
    DayDefinitionId, Location, Occurrence, ZMANIM, ZmanId, ZmanimConfig, ZmanimContext,
};
use zman_solar::solar_position_at;

#[derive(Parser)]
#[command(name = "zmanim", version, about = "Halachic times of day")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

/// Where and when.
#[derive(Args)]
struct PlaceArgs {
    /// Named place from the config file
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    place: Option<String>,
    /// Config file (default: $ZMANIM_CONFIG, then ./zmanim.toml)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Meters above sea level
    #[arg(long, default_value = "0")]
    elevation: f64,
    /// IANA timezone used for display
    #[arg(long, default_value = "UTC")]
    tz: String,
    /// Civil date YYYY-MM-DD (default: today at the place)
    #[arg(long)]
    date: Option<NaiveDate>,
}

/// Overrides for the `[zmanim]` table of the config file.
#[derive(Args, Default)]
struct ConfigArgs {
    /// Apply the observer's elevation to sunrise and sunset
    #[arg(long)]
    use_elevation: bool,
    /// Depression angle of the configurable dawn/dusk
    #[arg(long)]
    dawn_degree: Option<f64>,
    /// Clock minutes of the configurable fixed dawn/dusk
    #[arg(long)]
    fixed_minutes: Option<f64>,
    /// Proportional minutes of the configurable dawn/dusk
    #[arg(long)]
    zmanis_minutes: Option<f64>,
    /// Candle lighting, minutes before sea-level sunset
    #[arg(long)]
    candle_minutes: Option<f64>,
    /// Nightfall, minutes after sea-level sunset
    #[arg(long)]
    nightfall_minutes: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Sunrise, sunset and solar transits
    Sunrise {
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// One named zman
    Zman {
        /// Zman name, see `list`
        name: String,
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Several named zmanim (all when none are given)
    Zmanim {
        names: Vec<String>,
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// Dawn, dusk and temporal hour of day definitions (all when none are given)
    Days {
        names: Vec<String>,
        #[command(flatten)]
        place: PlaceArgs,
        #[command(flatten)]
        config: ConfigArgs,
    },
    /// List zman and day-definition names
    List,
    /// Solar elevation and azimuth at an instant
    Position {
        /// UTC instant, e.g. 2024-03-20T12:00:00Z (default: now)
        #[arg(long)]
        time: Option<DateTime<Utc>>,
        #[command(flatten)]
        place: PlaceArgs,
    },
}

#[derive(Serialize)]
struct TimeRow<'a> {
    name: &'a str,
    time: Occurrence<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    local: Option<String>,
}

#[derive(Serialize)]
struct DayRow {
    definition: DayDefinitionId,
    dawn: Occurrence<DateTime<Utc>>,
    dusk: Occurrence<DateTime<Utc>>,
    temporal_hour_minutes: Occurrence<f64>,
}

#[derive(Serialize)]
struct PositionRow {
    time: DateTime<Utc>,
    elevation_deg: f64,
    azimuth_deg: f64,
    hour_angle_deg: f64,
}

#[derive(Serialize)]
struct ListRow {
    name: &'static str,
    description: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    day: Option<DayDefinitionId>,
}

fn load_config(path: Option<&PathBuf>) -> ConfigFile {
    ConfigFile::load_or_default(path.map(PathBuf::as_path)).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}");
        std::process::exit(1);
    })
}

fn require_location(args: &PlaceArgs, file: &ConfigFile) -> Location {
    if let Some(name) = &args.place {
        return file.place(name).cloned().unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        });
    }
    let (Some(lat), Some(lon)) = (args.lat, args.lon) else {
        eprintln!("Either --place or both --lat and --lon are required");
        std::process::exit(1);
    };
    let name = format!("{lat:.4}, {lon:.4}");
    Location::new(name, lat, lon, args.elevation, &args.tz).unwrap_or_else(|e| {
        eprintln!("Invalid location: {e}");
        std::process::exit(1);
    })
}

fn apply_overrides(mut config: ZmanimConfig, args: &ConfigArgs) -> ZmanimConfig {
    config.use_elevation |= args.use_elevation;
    if let Some(v) = args.dawn_degree {
        config.dawn_dusk_degree = v;
    }
    if let Some(v) = args.fixed_minutes {
        config.fixed_minute_offset = v;
    }
    if let Some(v) = args.zmanis_minutes {
        config.proportional_baseline_minutes = v;
    }
    if let Some(v) = args.candle_minutes {
        config.candle_lighting_offset_minutes = v;
    }
    if let Some(v) = args.nightfall_minutes {
        config.nightfall_sunset_offset_minutes = v;
    }
    config
}

fn build_context(place: &PlaceArgs, overrides: &ConfigArgs) -> ZmanimContext {
    let file = load_config(place.config.as_ref());
    let location = require_location(place, &file);
    let config = apply_overrides(file.zmanim, overrides);
    let date = place
        .date
        .unwrap_or_else(|| Utc::now().with_timezone(&location.timezone()).date_naive());
    debug!("{} on {date} with {config:?}", location.name());
    ZmanimContext::new(location, date, config).unwrap_or_else(|e| {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(1);
    })
}

fn require_zman(name: &str) -> ZmanId {
    name.parse().unwrap_or_else(|e| {
        eprintln!("{e} (see `zmanim list`)");
        std::process::exit(1);
    })
}

fn require_day_definition(name: &str) -> DayDefinitionId {
    name.parse().unwrap_or_else(|e| {
        eprintln!("{e} (see `zmanim list`)");
        std::process::exit(1);
    })
}

fn local_time(t: DateTime<Utc>, tz: Tz) -> String {
    t.with_timezone(&tz).format("%Y-%m-%d %H:%M:%S %Z").to_string()
}

fn describe(time: Occurrence<DateTime<Utc>>, tz: Tz) -> String {
    match time {
        Occurrence::At(t) => local_time(t, tz),
        Occurrence::Absent(reason) => format!("not applicable today ({})", reason.description()),
    }
}

fn print_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => {
            eprintln!("Failed to encode JSON: {e}");
            std::process::exit(1);
        }
    }
}

fn print_header(ctx: &ZmanimContext) {
    let loc = ctx.location();
    println!(
        "{} ({:.4}, {:.4}, {} m) on {} [{}]",
        loc.name(),
        loc.latitude_deg(),
        loc.longitude_deg(),
        loc.elevation_m(),
        ctx.date(),
        loc.timezone()
    );
}

fn print_times(ctx: &ZmanimContext, rows: &[TimeRow<'_>], json: bool) {
    if json {
        print_json(&rows);
        return;
    }
    print_header(ctx);
    let tz = ctx.location().timezone();
    let width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);
    for row in rows {
        println!("  {:<width$}  {}", row.name, describe(row.time, tz));
    }
}

fn time_row(name: &str, time: Occurrence<DateTime<Utc>>, tz: Tz) -> TimeRow<'_> {
    TimeRow {
        name,
        time,
        local: time.at().map(|t| local_time(t, tz)),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Sunrise { place, config } => {
            let ctx = build_context(&place, &config);
            let tz = ctx.location().timezone();
            let rows = [
                time_row("sunrise", ctx.sunrise(), tz),
                time_row("sea-level-sunrise", ctx.sea_level_sunrise(), tz),
                time_row("solar-noon", Occurrence::At(ctx.solar_noon()), tz),
                time_row("sunset", ctx.sunset(), tz),
                time_row("sea-level-sunset", ctx.sea_level_sunset(), tz),
                time_row("solar-midnight", Occurrence::At(ctx.solar_midnight()), tz),
            ];
            print_times(&ctx, &rows, cli.json);
        }

        Commands::Zman {
            name,
            place,
            config,
        } => {
            let id = require_zman(&name);
            let ctx = build_context(&place, &config);
            let tz = ctx.location().timezone();
            print_times(&ctx, &[time_row(id.name(), ctx.zman(id), tz)], cli.json);
        }

        Commands::Zmanim {
            names,
            place,
            config,
        } => {
            let ids: Vec<ZmanId> = if names.is_empty() {
                ZmanId::all().collect()
            } else {
                names.iter().map(|n| require_zman(n)).collect()
            };
            let ctx = build_context(&place, &config);
            let tz = ctx.location().timezone();
            let values = ctx.zmanim(&ids);
            let rows: Vec<TimeRow<'_>> = values
                .iter()
                .map(|v| time_row(v.id.name(), v.time, tz))
                .collect();
            print_times(&ctx, &rows, cli.json);
        }

        Commands::Days {
            names,
            place,
            config,
        } => {
            let ids: Vec<DayDefinitionId> = if names.is_empty() {
                DayDefinitionId::ALL.to_vec()
            } else {
                names.iter().map(|n| require_day_definition(n)).collect()
            };
            let ctx = build_context(&place, &config);
            let rows: Vec<DayRow> = ids
                .into_iter()
                .map(|id| {
                    let anchors = ctx.day_anchors(id);
                    DayRow {
                        definition: id,
                        dawn: anchors.dawn,
                        dusk: anchors.dusk,
                        temporal_hour_minutes: anchors.temporal_hour().map(|h| h.as_minutes()),
                    }
                })
                .collect();
            if cli.json {
                print_json(&rows);
                return;
            }
            print_header(&ctx);
            let tz = ctx.location().timezone();
            for row in &rows {
                println!("  {}", row.definition);
                println!("    dawn: {}", describe(row.dawn, tz));
                println!("    dusk: {}", describe(row.dusk, tz));
                match row.temporal_hour_minutes {
                    Occurrence::At(m) => println!("    hour: {m:.2} min"),
                    Occurrence::Absent(reason) => {
                        println!("    hour: not applicable today ({})", reason.description())
                    }
                }
            }
        }

        Commands::List => {
            let zmanim = ZMANIM.iter().map(|def| ListRow {
                name: def.name,
                description: def.description,
                day: Some(def.day),
            });
            let days = DayDefinitionId::ALL.into_iter().map(|id| ListRow {
                name: id.name(),
                description: id.description(),
                day: None,
            });
            if cli.json {
                #[derive(Serialize)]
                struct Listing {
                    zmanim: Vec<ListRow>,
                    days: Vec<ListRow>,
                }
                print_json(&Listing {
                    zmanim: zmanim.collect(),
                    days: days.collect(),
                });
                return;
            }
            println!("Zmanim:");
            for row in zmanim {
                println!("  {:<32} {}", row.name, row.description);
            }
            println!("Day definitions:");
            for row in days {
                println!("  {:<32} {}", row.name, row.description);
            }
        }

        Commands::Position { time, place } => {
            let file = load_config(place.config.as_ref());
            let location = require_location(&place, &file);
            let time = time.unwrap_or_else(Utc::now);
            let pos = solar_position_at(time, location.latitude_deg(), location.longitude_deg());
            let row = PositionRow {
                time,
                elevation_deg: pos.elevation_deg,
                azimuth_deg: pos.azimuth_deg,
                hour_angle_deg: pos.hour_angle_deg,
            };
            if cli.json {
                print_json(&row);
                return;
            }
            println!(
                "{} at {}",
                location.name(),
                local_time(time, location.timezone())
            );
            println!("  elevation:  {:>9.4} deg", row.elevation_deg);
            println!("  azimuth:    {:>9.4} deg", row.azimuth_deg);
            println!("  hour angle: {:>9.4} deg", row.hour_angle_deg);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use clap::CommandFactory;
    use zman_halachic::Absence;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn overrides_replace_file_values() {
        let args = ConfigArgs {
            use_elevation: true,
            dawn_degree: Some(18.0),
            candle_minutes: Some(40.0),
            ..Default::default()
        };
        let c = apply_overrides(ZmanimConfig::default(), &args);
        assert!(c.use_elevation);
        assert_eq!(c.dawn_dusk_degree, 18.0);
        assert_eq!(c.candle_lighting_offset_minutes, 40.0);
        assert_eq!(c.fixed_minute_offset, 72.0);
    }

    #[test]
    fn absent_times_say_why() {
        let text = describe(Occurrence::Absent(Absence::NeverSets), Tz::UTC);
        assert!(text.starts_with("not applicable today"), "{text}");
    }

    #[test]
    fn local_time_uses_zone() {
        let t = Utc.with_ymd_and_hms(2024, 3, 20, 3, 42, 30).unwrap();
        assert_eq!(
            local_time(t, chrono_tz::Asia::Jerusalem),
            "2024-03-20 05:42:30 IST"
        );
    }

    #[test]
    fn parses_negative_coordinates() {
        let cli = Cli::try_parse_from([
            "zmanim", "sunrise", "--lat", "-33.87", "--lon", "151.21", "--date", "2024-06-21",
        ])
        .unwrap();
        let Commands::Sunrise { place, .. } = cli.command else {
            panic!("wrong subcommand");
        };
        assert_eq!(place.lat, Some(-33.87));
        assert_eq!(place.date, NaiveDate::from_ymd_opt(2024, 6, 21));
    }
}
