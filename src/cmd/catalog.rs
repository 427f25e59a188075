use crate::reports;
use clap::Args;
use sthenos::catalog::{Catalog, Category};
use strum::IntoEnumIterator;

#[derive(Args, Debug, Clone)]
pub struct CatalogArgs {
    /// Only list this category (freestyle, statics, power_moves, balance)
    #[arg(short = 'C', long)]
    pub category: Option<Category>,
}

pub fn run(args: CatalogArgs, catalog: &Catalog) {
    for category in Category::iter().filter(|c| c.has_element_log()) {
        if args.category.is_some_and(|only| only != category) {
            continue;
        }
        reports::print_catalog(category, catalog.list_elements(category));
    }
}
