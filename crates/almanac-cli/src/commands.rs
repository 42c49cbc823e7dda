//! Subcommand implementations.

use std::path::Path;

use almanac::{easter_sunday, CalendarDate, IsoWeek, Language, Locale};
use anyhow::{Context as _, Result};
use serde::Serialize;
use tracing::{debug, info};

use crate::cli::{AddArgs, BetweenArgs, EasterArgs, FormatArgs, ShowArgs, WeekArgs};
use crate::config::AlmanacConfig;

/// Settings resolved from the config file and command line.
pub struct Context {
    pub language: Language,
    pub template: String,
}

impl Context {
    pub fn load(config_path: Option<&Path>, lang: Option<&str>) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                info!(path = %path.display(), "loading config");
                AlmanacConfig::from_file(path)?
            }
            None => AlmanacConfig::default(),
        };

        let locale = Locale::new(config.language);
        let language = match lang {
            Some(code) => {
                let language = locale.resolve(code);
                if Language::from_code(code).is_none() {
                    debug!(code, fallback = language.code(), "unrecognized language code");
                }
                language
            }
            None => locale.default_language,
        };

        Ok(Self {
            language,
            template: config.format,
        })
    }
}

/// Parse a date argument, or take today's UTC date when absent.
fn date_or_today(arg: Option<&str>) -> Result<CalendarDate> {
    match arg {
        Some(text) => parse_date(text),
        None => CalendarDate::today().context("failed to read today's date"),
    }
}

fn parse_date(text: &str) -> Result<CalendarDate> {
    text.parse::<CalendarDate>()
        .with_context(|| format!("invalid date argument '{text}'"))
}

#[derive(Debug, Serialize)]
struct DateSummary {
    date: CalendarDate,
    weekday: String,
    day_number: i64,
    day_of_year: u16,
    days_in_month: u8,
    days_in_year: u16,
    leap_year: bool,
    iso_week: IsoWeek,
}

impl DateSummary {
    fn new(date: CalendarDate, language: Language) -> Self {
        Self {
            date,
            weekday: date.weekday_name(&language).to_string(),
            day_number: date.day_number(),
            day_of_year: date.day_of_year(),
            days_in_month: date.days_in_month(),
            days_in_year: date.days_in_year(),
            leap_year: date.is_leap_year(),
            iso_week: date.iso_week(),
        }
    }
}

pub fn show(ctx: &Context, args: ShowArgs) -> Result<()> {
    let date = date_or_today(args.date.as_deref())?;
    let summary = DateSummary::new(date, ctx.language);

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to encode JSON")?;
        println!("{json}");
        return Ok(());
    }

    println!("date:        {} ({})", summary.date, summary.weekday);
    println!("day number:  {}", summary.day_number);
    println!(
        "day of year: {} of {}",
        summary.day_of_year, summary.days_in_year
    );
    println!("month days:  {}", summary.days_in_month);
    println!(
        "ISO week:    {}-W{:02}",
        summary.iso_week.year, summary.iso_week.week
    );
    Ok(())
}

pub fn add(ctx: &Context, args: AddArgs) -> Result<()> {
    let date = parse_date(&args.date)?;
    let shifted = date
        .add_days(args.days)
        .with_context(|| format!("cannot add {} days to {date}", args.days))?;
    info!(%date, days = args.days, %shifted, "added days");
    println!("{shifted} ({})", shifted.weekday_name(&ctx.language));
    Ok(())
}

pub fn between(args: BetweenArgs) -> Result<()> {
    let from = parse_date(&args.from)?;
    let to = parse_date(&args.to)?;
    println!("{}", to - from);
    Ok(())
}

pub fn easter(ctx: &Context, args: EasterArgs) -> Result<()> {
    let year = match args.year {
        Some(year) => year,
        None => date_or_today(None)?.year(),
    };
    let easter = easter_sunday(year).with_context(|| format!("no Easter date for year {year}"))?;
    println!("{}", easter.format("%D (%A %e. %B)", &ctx.language));
    Ok(())
}

pub fn week(args: WeekArgs) -> Result<()> {
    let date = date_or_today(args.date.as_deref())?;
    let week = date.iso_week();
    println!("{}-W{:02}", week.year, week.week);
    Ok(())
}

pub fn format(ctx: &Context, args: FormatArgs) -> Result<()> {
    let date = date_or_today(args.date.as_deref())?;
    let template = args.template.as_deref().unwrap_or(&ctx.template);
    debug!(template, %date, "formatting");
    println!("{}", date.format(template, &ctx.language));
    Ok(())
}
