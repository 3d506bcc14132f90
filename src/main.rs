use anyhow::{bail, Context, Result};
use chrono::Utc;
use serde_json::json;
use std::env;
use std::path::PathBuf;

use restaurant_analytics::config::split_ids;
use restaurant_analytics::logging::{self, obj, v_str};
use restaurant_analytics::{
    build_report, Dataset, NotificationKind, Notifier, Page, Timeframe, ViewConfig, VERSION,
};

const USAGE: &str = "\
Usage: restaurant-analytics [PAGE] [OPTIONS]

Pages:
  dashboard | inventory | financials | payroll | statements | all   (or a route, e.g. /payroll)

Options:
  --timeframe <daily|weekly|monthly|quarterly>
  --locations <id,id,...|all>
  --owners <id,id,...|all>
  --accounts <id,id,...|all>
  --config <file.json>
  --data <dataset.json>
  --json                 print reports as JSON
  --dump-dataset         print the dataset as JSON and exit
  -h, --help";

#[derive(Debug)]
struct Args {
    pages: Vec<Page>,
    json: bool,
    dump_dataset: bool,
    config: ViewConfig,
}

fn main() -> Result<()> {
    let raw: Vec<String> = env::args().skip(1).collect();

    if raw.iter().any(|a| a == "-h" || a == "--help") {
        println!("restaurant-analytics {}\n\n{}", VERSION, USAGE);
        return Ok(());
    }

    let args = parse_args(&raw)?;
    let mut notifier = Notifier::from_config(&args.config)?;

    let data = match &args.config.data_path {
        Some(path) => Dataset::from_json_file(path)?,
        None => Dataset::sample(),
    };

    logging::info(
        "cli",
        "start",
        obj(&[
            ("msg", v_str("building reports")),
            ("timeframe", v_str(args.config.timeframe.as_str())),
            ("pages", json!(args.pages.len())),
            ("locations", json!(data.locations.len())),
        ]),
    );

    if args.dump_dataset {
        println!("{}", data.to_json_pretty()?);
        return Ok(());
    }

    let reports: Vec<_> = args
        .pages
        .iter()
        .map(|page| build_report(*page, &data, &args.config))
        .collect();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?
        );
    } else {
        for report in &reports {
            for line in report.summary_lines() {
                println!("{}", line);
            }
            println!();
        }
    }

    notifier.show(
        &format!("{} report(s) ready", reports.len()),
        NotificationKind::Success,
        Utc::now(),
    );
    if let Some(notice) = notifier.current(Utc::now()) {
        logging::info(
            "cli",
            "notice",
            obj(&[
                ("id", v_str(&notice.id.to_string())),
                ("msg", v_str(&notice.message)),
            ]),
        );
    }

    Ok(())
}

fn parse_args(raw: &[String]) -> Result<Args> {
    parse_args_with(raw, |key| env::var(key).ok())
}

/// Parse flags over a config built from file then `lookup` variables
fn parse_args_with<F>(raw: &[String], lookup: F) -> Result<Args>
where
    F: Fn(&str) -> Option<String>,
{
    // Config file first so flags and environment can override it
    let mut config = match flag_value(raw, "--config")? {
        Some(path) => ViewConfig::from_file(PathBuf::from(path))?,
        None => ViewConfig::default(),
    };
    config.apply_vars(lookup)?;

    let mut pages = Vec::new();
    let mut json = false;
    let mut dump_dataset = false;

    let mut iter = raw.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--dump-dataset" => dump_dataset = true,
            "--timeframe" => {
                let value = next_value(&mut iter, arg)?;
                config.timeframe = Timeframe::parse(value).map_err(anyhow::Error::msg)?;
            }
            "--locations" => config.set_locations(next_value(&mut iter, arg)?),
            "--owners" => config.owners = split_ids(next_value(&mut iter, arg)?),
            "--accounts" => config.bank_accounts = split_ids(next_value(&mut iter, arg)?),
            "--data" => config.data_path = Some(PathBuf::from(next_value(&mut iter, arg)?)),
            "--config" => {
                next_value(&mut iter, arg)?;
            }
            "all" => pages.extend(Page::all()),
            other if other.starts_with("--") => bail!("Unknown option: {}\n\n{}", other, USAGE),
            other => pages.push(Page::from_route(other).map_err(anyhow::Error::msg)?),
        }
    }

    if pages.is_empty() {
        pages.push(Page::Dashboard);
    }

    Ok(Args {
        pages,
        json,
        dump_dataset,
        config,
    })
}

fn next_value<'a, I>(iter: &mut I, flag: &str) -> Result<&'a str>
where
    I: Iterator<Item = &'a String>,
{
    iter.next()
        .map(|s| s.as_str())
        .with_context(|| format!("Missing value for {}", flag))
}

fn flag_value<'a>(raw: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    match raw.iter().position(|a| a == flag) {
        Some(i) => raw
            .get(i + 1)
            .map(|s| Some(s.as_str()))
            .with_context(|| format!("Missing value for {}", flag)),
        None => Ok(None),
    }
}
