//! sabhatrack - attendance reporting CLI for a constituency portal.
//!
//! Fetches read-side snapshots (seasons, attendance, schedules, busy dates)
//! from the portal's REST backend, caches them locally, and renders either
//! the per-day attendance report grid or an annotated month calendar.

use std::collections::HashSet;
use std::io;

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sabhatrack::api::ApiClient;
use sabhatrack::cache::CacheManager;
use sabhatrack::calendar::MonthView;
use sabhatrack::config::Config;
use sabhatrack::models::{AttendanceRecord, Schedule, Season};
use sabhatrack::render;
use sabhatrack::report::build_report;
use sabhatrack::utils::parse_date_key;

/// Initialize the tracing subscriber for logging.
/// Use RUST_LOG to control the level (e.g. RUST_LOG=debug).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

/// Parsed command line. Kept deliberately small - the portal UI owns
/// everything beyond report and calendar rendering.
#[derive(Debug, Default)]
struct CliArgs {
    command: Command,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    season_id: Option<String>,
    month: Option<MonthView>,
    offline: bool,
    api_url: Option<String>,
    constituency: Option<String>,
}

#[derive(Debug, Default, PartialEq, Eq)]
enum Command {
    #[default]
    Report,
    Calendar,
    /// Persist settings to the config file
    Config,
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut parsed = CliArgs::default();
    let mut iter = args.iter().peekable();

    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "report" => parsed.command = Command::Report,
            "calendar" => {
                parsed.command = Command::Calendar;
                // Optional YYYY-MM positional
                if let Some(next) = iter.peek() {
                    if !next.starts_with("--") {
                        parsed.month = Some(parse_month(next)?);
                        iter.next();
                    }
                }
            }
            "--from" => {
                let value = iter.next().context("--from requires a YYYY-MM-DD value")?;
                parsed.from = Some(parse_cli_date(value)?);
            }
            "--to" => {
                let value = iter.next().context("--to requires a YYYY-MM-DD value")?;
                parsed.to = Some(parse_cli_date(value)?);
            }
            "--season" => {
                let value = iter.next().context("--season requires a season id")?;
                parsed.season_id = Some(value.clone());
            }
            "--offline" => parsed.offline = true,
            "config" => parsed.command = Command::Config,
            "--api-url" => {
                let value = iter.next().context("--api-url requires a URL")?;
                parsed.api_url = Some(value.clone());
            }
            "--constituency" => {
                let value = iter.next().context("--constituency requires a name")?;
                parsed.constituency = Some(value.clone());
            }
            other => bail!("Unknown argument: {} (try: report | calendar)", other),
        }
    }

    if parsed.from.is_some() != parsed.to.is_some() {
        bail!("--from and --to must be given together");
    }

    Ok(parsed)
}

fn parse_cli_date(value: &str) -> Result<NaiveDate> {
    parse_date_key(value).with_context(|| format!("Invalid date: {} (expected YYYY-MM-DD)", value))
}

fn parse_month(value: &str) -> Result<MonthView> {
    let parts: Vec<&str> = value.splitn(2, '-').collect();
    let view = match parts.as_slice() {
        [year, month] => {
            let year: i32 = year.parse().ok().context("Invalid year")?;
            let month: u32 = month.parse().ok().context("Invalid month")?;
            MonthView::new(year, month)
        }
        _ => None,
    };
    view.with_context(|| format!("Invalid month: {} (expected YYYY-MM)", value))
}

/// The in-memory snapshot everything renders from
struct Snapshot {
    seasons: Vec<Season>,
    attendance: Vec<AttendanceRecord>,
    schedules: Vec<Schedule>,
    busy_dates: Vec<String>,
}

/// Fetch all snapshots concurrently and persist them for offline use
async fn fetch_snapshot(
    client: &ApiClient,
    cache: &CacheManager,
    season_id: Option<&str>,
) -> Result<Snapshot> {
    let (seasons, attendance, schedules, busy_dates) = futures::try_join!(
        client.fetch_seasons(),
        client.fetch_attendance(season_id),
        client.fetch_schedules(),
        client.fetch_busy_dates(),
    )?;

    // Cache write failures shouldn't kill the report
    if let Err(e) = cache
        .save_seasons(&seasons)
        .and_then(|_| cache.save_attendance(&attendance))
        .and_then(|_| cache.save_schedules(&schedules))
        .and_then(|_| cache.save_busy_dates(&busy_dates))
    {
        warn!(error = %e, "Failed to write snapshot cache");
    }

    Ok(Snapshot {
        seasons,
        attendance,
        schedules,
        busy_dates,
    })
}

/// Load the last persisted snapshot
fn load_cached_snapshot(cache: &CacheManager) -> Result<Snapshot> {
    let seasons = cache
        .load_seasons()?
        .context("No cached seasons - run online at least once")?;
    if seasons.is_stale() {
        warn!(age = %seasons.age_display(), "Using stale cached data");
    }
    let attendance = cache.load_attendance()?.map(|c| c.data).unwrap_or_default();
    let schedules = cache.load_schedules()?.map(|c| c.data).unwrap_or_default();
    let busy_dates = cache.load_busy_dates()?.map(|c| c.data).unwrap_or_default();

    Ok(Snapshot {
        seasons: seasons.data,
        attendance,
        schedules,
        busy_dates,
    })
}

async fn load_snapshot(
    args: &CliArgs,
    config: &Config,
    cache: &CacheManager,
) -> Result<Snapshot> {
    if args.offline {
        info!("Offline mode, using cached snapshot");
        return load_cached_snapshot(cache);
    }

    let mut client = ApiClient::new(config.resolved_api_url())?;
    if let Ok(token) = std::env::var("SABHATRACK_TOKEN") {
        client.set_token(token);
    } else {
        debug!("SABHATRACK_TOKEN not set, requesting without auth");
    }

    match fetch_snapshot(&client, cache, args.season_id.as_deref()).await {
        Ok(snapshot) => Ok(snapshot),
        Err(e) => {
            warn!(error = %e, "Fetch failed, falling back to cache");
            load_cached_snapshot(cache)
                .with_context(|| format!("Fetch failed ({}) and no usable cache", e))
        }
    }
}

/// Resolve the report range for a preferred season, if one was named
fn season_range(seasons: &[Season], season_id: &str) -> Result<(NaiveDate, NaiveDate)> {
    let season = seasons
        .iter()
        .find(|s| s.id == season_id)
        .with_context(|| format!("Season not found: {}", season_id))?;
    match (season.start_key(), season.end_key()) {
        (Some(start), Some(end)) => Ok((start, end)),
        _ => bail!("Season {} has unusable dates: {}", season_id, season.formatted_range()),
    }
}

fn run_report(args: &CliArgs, config: &Config, snapshot: &Snapshot) -> Result<()> {
    let explicit_range = match (args.from, args.to) {
        (Some(from), Some(to)) => Some((from, to)),
        _ => match args
            .season_id
            .as_deref()
            .or(config.preferred_season_id.as_deref())
        {
            Some(id) => Some(season_range(&snapshot.seasons, id)?),
            None => None,
        },
    };

    let report = build_report(explicit_range, &snapshot.seasons, &snapshot.attendance)?;
    print!("{}", render::render_report(&report, config.constituency.as_deref()));
    Ok(())
}

fn run_calendar(args: &CliArgs, snapshot: &Snapshot) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let view = args.month.unwrap_or_else(|| MonthView::containing(today));

    let busy: HashSet<NaiveDate> = snapshot
        .busy_dates
        .iter()
        .filter_map(|s| parse_date_key(s))
        .collect();

    let days = view.annotate(&snapshot.schedules, &busy, today);
    print!("{}", render::render_calendar(&view, &days));
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_args(&raw_args)?;

    let config = Config::load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load config, using defaults");
        Config::default()
    });

    if args.command == Command::Config {
        return run_config(&args, config);
    }

    let cache = CacheManager::new(config.cache_dir()?)?;
    let snapshot = load_snapshot(&args, &config, &cache).await?;

    match args.command {
        Command::Report => run_report(&args, &config, &snapshot)?,
        Command::Calendar => run_calendar(&args, &snapshot)?,
        Command::Config => unreachable!("handled above"),
    }

    Ok(())
}

/// Update and persist the config file from the given flags
fn run_config(args: &CliArgs, mut config: Config) -> Result<()> {
    if let Some(ref url) = args.api_url {
        config.api_base_url = Some(url.clone());
    }
    if let Some(ref name) = args.constituency {
        config.constituency = Some(name.clone());
    }
    if let Some(ref id) = args.season_id {
        config.preferred_season_id = Some(id.clone());
    }
    config.save()?;
    println!("Config saved");
    Ok(())
}
