use clap::Args;

use timecat_core::{Category, Config};

use super::categorizer_from;

#[derive(Args)]
pub struct KeywordsCommand {
    /// Only show this category (e.g. staff_team, department)
    #[arg(long)]
    pub category: Option<String>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(cmd: KeywordsCommand) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let categorizer = categorizer_from(&config)?;
    let filter: Option<Category> = cmd.category.as_deref().map(str::parse).transpose()?;

    let rules: Vec<_> = categorizer
        .registry()
        .rules()
        .filter(|r| filter.map_or(true, |c| c == r.category))
        .collect();

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&rules)?);
        return Ok(());
    }

    for rule in rules {
        println!(
            "{} (priority {}, {} keywords)",
            rule.category,
            rule.priority,
            rule.keywords.len()
        );
        println!("  {}", rule.keywords.join(", "));
    }
    Ok(())
}
