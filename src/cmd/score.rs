use crate::reports;
use clap::Args;
use sthenos::api::JudgePanel;
use sthenos::catalog::{Catalog, Category, Exercise, PowerMoveGroup};
use sthenos::config::Config;
use sthenos::error::JudgeResult;
use sthenos::scorer::{ExtraPoints, PositionModifier, Scorer};
use sthenos::session::{ElementRequest, PowerMoveSelection};

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    #[arg(long)]
    pub category: Category,

    /// Catalog name (freestyle, statics, balance)
    #[arg(short, long, default_value = "")]
    pub element: String,

    // Power move selection
    #[arg(long)]
    pub group: Option<PowerMoveGroup>,
    #[arg(long)]
    pub exercise: Option<Exercise>,
    #[arg(long)]
    pub base: Option<String>,

    #[arg(long, default_value = "full")]
    pub position: PositionModifier,
    #[arg(long, default_value = "none")]
    pub extra: ExtraPoints,
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub cleanliness: u8,

    /// Score as the n-th time the same element is performed
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub occurrence: u32,
}

pub fn run(args: ScoreArgs, catalog: Catalog, scorer: Scorer) -> JudgeResult<()> {
    let mut panel = JudgePanel::new(catalog, scorer, &args.config.session);

    let mut request = ElementRequest::new(args.category, &args.element)
        .with_position(args.position)
        .with_extra(args.extra)
        .with_cleanliness(args.cleanliness);
    if args.category == Category::PowerMoves {
        request = request.with_selection(PowerMoveSelection {
            group: args.group,
            exercise: args.exercise,
            base: args.base.clone(),
        });
    }

    // Earlier occurrences only feed the repetition count.
    for _ in 1..args.occurrence {
        panel.add_element(&request)?;
    }
    let recorded = panel.add_element(&request)?.clone();

    reports::print_breakdown(&recorded);
    println!("Score: {:.4}", recorded.score());
    Ok(())
}
