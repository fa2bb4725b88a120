use clap::Args;

use timecat_core::Config;

use super::categorizer_from;
use crate::render;

#[derive(Args)]
pub struct CategorizeCommand {
    /// Meeting subject
    pub subject: String,
    /// Organizer text (e.g. "Smith, John")
    #[arg(long, default_value = "")]
    pub organizer: String,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(cmd: CategorizeCommand) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let categorizer = categorizer_from(&config)?;
    let result = categorizer.classify_parts(&cmd.subject, &cmd.organizer);

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render::classification(&cmd.subject, &result));
    }
    Ok(())
}
