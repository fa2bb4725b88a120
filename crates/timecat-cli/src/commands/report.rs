use clap::Args;

use timecat_core::{ReportOptions, WeeklyReport};

use super::{load_week, WeekArgs};
use crate::render;

#[derive(Args)]
pub struct ReportCommand {
    #[command(flatten)]
    pub week: WeekArgs,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(cmd: ReportCommand) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = load_week(&cmd.week)?;
    let options = ReportOptions {
        totals_mode: ctx.config.totals_mode(),
        weekdays_only: ctx.config.report.weekdays_only,
    };
    let report = WeeklyReport::build(&ctx.categorizer, &ctx.range, &ctx.meetings, options);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&report.details)?);
    } else {
        print!("{}", render::detailed_report(&report));
    }
    Ok(())
}
