pub mod categorize;
pub mod config;
pub mod keywords;
pub mod report;
pub mod week;

use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;

use timecat_core::{
    CalendarSource, Categorizer, Config, JsonFileSource, KeywordRegistry, MeetingRecord,
    WeekRange,
};

/// Week selection and input shared by `week` and `report`.
#[derive(Args, Debug, Clone)]
pub struct WeekArgs {
    /// Exported meetings (JSON array). Defaults to `report.default_input`.
    #[arg(long, short)]
    pub input: Option<PathBuf>,
    /// Weeks relative to the current one (-1 = last week)
    #[arg(long, default_value_t = 0, allow_hyphen_values = true, conflicts_with_all = ["next", "last"])]
    pub offset: i64,
    /// Shorthand for --offset 1
    #[arg(long, conflicts_with = "last")]
    pub next: bool,
    /// Shorthand for --offset -1
    #[arg(long)]
    pub last: bool,
    /// Treat this date as today (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<String>,
}

impl WeekArgs {
    pub fn offset(&self) -> i64 {
        if self.next {
            1
        } else if self.last {
            -1
        } else {
            self.offset
        }
    }

    pub fn range(&self) -> Result<WeekRange, Box<dyn std::error::Error>> {
        let today = match &self.today {
            Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|e| format!("Invalid date: '{s}' ({e}). Use YYYY-MM-DD"))?,
            None => Local::now().date_naive(),
        };
        Ok(WeekRange::containing(today, self.offset()))
    }

    fn input_path(&self, config: &Config) -> Result<PathBuf, Box<dyn std::error::Error>> {
        if let Some(path) = &self.input {
            return Ok(path.clone());
        }
        if !config.report.default_input.is_empty() {
            return Ok(PathBuf::from(&config.report.default_input));
        }
        Err("no meeting export given: pass --input or set report.default_input".into())
    }
}

/// Everything a reporting command needs for one week.
pub struct WeekContext {
    pub config: Config,
    pub categorizer: Categorizer,
    pub range: WeekRange,
    pub meetings: Vec<MeetingRecord>,
}

pub fn load_week(args: &WeekArgs) -> Result<WeekContext, Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let categorizer = categorizer_from(&config)?;
    let range = args.range()?;
    let source = JsonFileSource::new(args.input_path(&config)?);
    let meetings = source.fetch(&range)?;
    Ok(WeekContext {
        config,
        categorizer,
        range,
        meetings,
    })
}

pub fn categorizer_from(config: &Config) -> Result<Categorizer, Box<dyn std::error::Error>> {
    Ok(Categorizer::new(KeywordRegistry::with_overrides(&config.keywords)?))
}
