use std::path::PathBuf;

use clap::Parser;

use crate::models::{SortCycle, SortEntry, SortMode};

#[derive(Parser, Debug)]
#[command(
    version = concat!(
        env!("CARGO_PKG_VERSION"), " - ",
        env!("VERGEN_GIT_DESCRIBE"), "(",
        env!("VERGEN_BUILD_DATE"), ")"
    ),
    about = "Replay data-grid header sort triggers against a sort list"
)]
pub struct Args {
    #[arg(short, long, env = "DATATABLE_SORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Sort mode, overrides `sort-type` from the config file
    #[arg(short, long, value_name = "single|multi")]
    pub mode: Option<SortMode>,

    /// Sort cycle, overrides `sort-cycle` from the config file
    #[arg(long, value_name = "three-phase|two-phase|toggle")]
    pub cycle: Option<SortCycle>,

    /// Initial active sort, repeatable, highest priority first
    #[arg(short, long = "sort", value_name = "PROP:asc|desc")]
    pub sorts: Vec<SortEntry>,

    /// JSON file holding an array of objects to sort by the resulting list
    #[arg(short, long, value_name = "FILE")]
    pub rows: Option<PathBuf>,

    /// Print the resulting sort list as JSON
    #[arg(long)]
    pub json: bool,

    /// Columns to trigger, in order
    #[arg(value_name = "COLUMN")]
    pub triggers: Vec<String>,
}
