use clap::Args;

use timecat_core::{ReportOptions, WeeklyReport};

use super::{load_week, WeekArgs};
use crate::render;

#[derive(Args)]
pub struct WeekCommand {
    #[command(flatten)]
    pub week: WeekArgs,
    /// Include Saturday and Sunday in the daily breakdown
    #[arg(long)]
    pub weekend: bool,
    /// List categories with no meetings
    #[arg(long)]
    pub all_categories: bool,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(cmd: WeekCommand) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = load_week(&cmd.week)?;

    let mut options = ReportOptions {
        totals_mode: ctx.config.totals_mode(),
        weekdays_only: ctx.config.report.weekdays_only,
    };
    if cmd.weekend {
        options.weekdays_only = false;
    }
    if cmd.all_categories {
        options.totals_mode = timecat_core::TotalsMode::IncludeEmpty;
    }

    let report = WeeklyReport::build(&ctx.categorizer, &ctx.range, &ctx.meetings, options);
    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::weekly_summary(&report));
    }
    Ok(())
}
