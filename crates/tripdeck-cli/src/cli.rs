use clap::{Args, Parser, Subcommand, ValueEnum};
use tripdeck_app::aggregate::CollectionTab;

#[derive(Debug, Parser)]
#[command(name = "tripdeck")]
#[command(bin_name = "tripdeck")]
#[command(version)]
#[command(about = "Browse, select and delete your created, remixed and saved trips")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Write a diagnostics log under ~/.config/tripdeck/diagnostics"
    )]
    pub diagnostics: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[command(about = "Print trip collections as tables")]
    List {
        #[arg(long, value_enum, help = "Only print one collection")]
        tab: Option<TabArg>,
    },
    #[command(about = "Add a trip you authored to the local store")]
    Add(AddArgs),
    #[command(about = "Save a sample trip by id")]
    Save {
        #[arg(help = "Id of a sample trip, e.g. sample-kyoto")]
        id: String,
    },
    #[command(about = "Run configuration and trip store checks")]
    Doctor,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub destination: String,
    #[arg(long)]
    pub country: String,
    #[arg(long, default_value_t = 1, help = "Trip length in days")]
    pub days: u32,
    #[arg(long)]
    pub cover_image: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TabArg {
    Created,
    Remixed,
    Saved,
}

impl From<TabArg> for CollectionTab {
    fn from(value: TabArg) -> Self {
        match value {
            TabArg::Created => Self::Created,
            TabArg::Remixed => Self::Remixed,
            TabArg::Saved => Self::Saved,
        }
    }
}
