//! Command-line front end: argument parsing, one-shot report, watch mode.

use crate::clock::WallClock;
use crate::config::Config;
use crate::logging;
use crate::model::{parse_date, CalendarDate};
use crate::report::AgeReport;
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

pub const USAGE: &str = "\
age-insight: age breakdown from a birth date, with a live clock

Usage: age-insight [OPTIONS] [BIRTH_DATE]

Arguments:
  [BIRTH_DATE]  DDMMYYYY, DD-MM-YYYY, DD/MM/YYYY, DD.MM.YYYY or
                YYYY-MM-DD; falls back to the configured default

Options:
  -w, --watch         keep running, ticking the clock line
      --json          print the report as JSON and exit
      --write-config  write the active configuration to disk and exit
      --about         print version and file locations, then exit
  -v                  mirror diagnostics to stderr (-vv for trace)
  -h, --help          show this help
";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Args {
    pub birth: Option<String>,
    pub watch: bool,
    pub json: bool,
    pub write_config: bool,
    pub about: bool,
    pub help: bool,
    pub verbose: u8,
}

impl Args {
    /// Hand-rolled parse over the raw argument strings (program name
    /// already stripped). Dates never begin with `-`, so anything dashed
    /// is an option.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        for arg in args {
            match arg.as_str() {
                "-w" | "--watch" => parsed.watch = true,
                "--json" => parsed.json = true,
                "--write-config" => parsed.write_config = true,
                "--about" => parsed.about = true,
                "-h" | "--help" => parsed.help = true,
                "-v" => parsed.verbose += 1,
                "-vv" => parsed.verbose += 2,
                other if other.starts_with('-') && other.len() > 1 => {
                    bail!("unknown option {other:?}\n\n{USAGE}");
                }
                positional => {
                    if parsed.birth.is_some() {
                        bail!("more than one birth date given\n\n{USAGE}");
                    }
                    parsed.birth = Some(positional.to_string());
                }
            }
        }
        Ok(parsed)
    }
}

/// Entry point behind the binary: parses the environment, then either
/// prints one report or stays up ticking the clock.
pub async fn run() -> Result<()> {
    let args = Args::parse(std::env::args().skip(1))?;

    if args.help {
        print!("{USAGE}");
        return Ok(());
    }
    if args.about {
        print_about();
        return Ok(());
    }

    let config = Config::load();

    if args.write_config {
        let path = config.save()?;
        println!("wrote {}", path.display());
        return Ok(());
    }

    // The guard keeps the file appender draining until exit.
    let _guard = logging::init(config.log.to_file, args.verbose)?;
    tracing::info!("display initialized");
    tracing::debug!(?args, "parsed arguments");

    let clock = WallClock::new(&config.clock.zone_name, config.clock.utc_offset_minutes)
        .context("building the display clock")?;
    let birth =
        resolve_birth(&args, &config).inspect_err(|err| tracing::error!("{err:#}"))?;

    let report =
        AgeReport::build(birth, &clock).inspect_err(|err| tracing::error!("{err}"))?;
    tracing::info!(birth = %report.birth, age = %report.age, "age computed");
    if args.json {
        println!("{}", report.to_json()?);
        return Ok(());
    }

    print!("{}", report.render());
    if args.watch {
        watch(birth, &clock, config.refresh_interval()).await
    } else {
        println!("{}", report.clock_line());
        Ok(())
    }
}

fn resolve_birth(args: &Args, config: &Config) -> Result<CalendarDate> {
    match &args.birth {
        Some(text) => parse_date(text).context("birth date argument"),
        None => parse_date(&config.default_birth)
            .with_context(|| format!("default_birth {:?} in config", config.default_birth)),
    }
}

fn print_about() {
    println!("age-insight {}", env!("CARGO_PKG_VERSION"));
    println!("{}", env!("CARGO_PKG_DESCRIPTION"));
    match Config::path() {
        Some(path) => println!("config: {}", path.display()),
        None => println!("config: unavailable"),
    }
    match Config::dir() {
        Some(dir) => println!("log:    {}", dir.join(logging::LOG_FILE).display()),
        None => println!("log:    unavailable"),
    }
}

/// Re-renders on every tick until Ctrl-C: normally only the clock line
/// moves (redrawn in place), but at local midnight the date panels change
/// too, so the whole report is printed again.
async fn watch(birth: CalendarDate, clock: &WallClock, period: Duration) -> Result<()> {
    let mut shown = clock.today()?;
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let report = AgeReport::build(birth, clock)?;
                if report.current != shown {
                    tracing::debug!("date rolled over to {}", report.current);
                    shown = report.current;
                    print!("\n{}", report.render());
                }
                print!("\r{}", report.clock_line());
                std::io::stdout().flush()?;
            }
            _ = &mut ctrl_c => {
                println!();
                tracing::info!("stopped by Ctrl-C");
                break;
            }
        }
    }
    Ok(())
}
