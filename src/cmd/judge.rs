use crate::reports;
use clap::Args;
use sthenos::api::JudgePanel;
use sthenos::catalog::Catalog;
use sthenos::config::Config;
use sthenos::error::JudgeResult;
use sthenos::routine::Routine;
use sthenos::scorer::Scorer;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct JudgeArgs {
    #[command(flatten)]
    pub config: Config,

    /// JSON routine to replay
    #[arg(short, long)]
    pub routine: String,

    /// Print totals as JSON instead of tables
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: JudgeArgs, catalog: Catalog, scorer: Scorer) -> JudgeResult<()> {
    info!("📂 Loading routine: {}", args.routine);
    let routine = Routine::load_from_file(&args.routine)?;

    let mut panel = JudgePanel::new(catalog, scorer, &args.config.session);
    panel.replay(&routine)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&panel.totals())?);
        return Ok(());
    }

    println!("\n🏅 === SCORECARD === 🏅");
    for session in panel.sessions() {
        reports::print_elements(session);
    }
    reports::print_totals(&panel.totals());
    Ok(())
}
