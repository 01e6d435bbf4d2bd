//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use venture_core::panel::{DEFAULT_WIDTH, MAX_WIDTH, MIN_WIDTH};
use venture_model::{DealStage, ModelError, UserRole, UserStatus, VentureStage};

/// Member whose ventures and workspace are shown when none is given.
pub const DEFAULT_MEMBER: &str = "Amara Okafor";

#[derive(Parser)]
#[command(
    name = "venture-platform",
    version,
    about = "Browse the venture platform sample data from the terminal",
    long_about = "Browse the venture platform sample data from the terminal.\n\n\
                  Lists users, deals and ventures with search, filters and sorting,\n\
                  walks the onboarding wizard and replays docked panel drags."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Prefix log lines with a timestamp (JSON logs always carry one).
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Include the emitting module in log lines.
    #[arg(long = "log-targets", global = true)]
    pub log_targets: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Sample data directory (default: $VENTURE_SAMPLE_DATA_DIR or the bundled sample-data/).
    #[arg(long = "data-dir", value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List platform members (user management).
    Users(UsersArgs),

    /// List the investment pipeline.
    Deals(DealsArgs),

    /// Show one deal on its lifecycle screen.
    Deal(DealArgs),

    /// List the ventures founded by a member.
    Ventures(VenturesArgs),

    /// Explore the whole portfolio.
    Portfolio(PortfolioArgs),

    /// Walk the onboarding wizard non-interactively.
    Onboard(OnboardArgs),

    /// Replay a drag script against the docked panel.
    Panel(PanelArgs),
}

/// Search, sort and output options shared by the list commands.
#[derive(Args)]
pub struct ListingArgs {
    /// Case-insensitive text search.
    #[arg(long = "search", short = 's', value_name = "TEXT")]
    pub search: Option<String>,

    /// Field to sort by (e.g. name, amount, founded).
    #[arg(long = "sort", value_name = "FIELD")]
    pub sort: Option<String>,

    /// Sort descending.
    #[arg(long = "desc")]
    pub desc: bool,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct UsersArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    #[arg(long = "role", value_parser = parse_role)]
    pub role: Option<UserRole>,

    #[arg(long = "status", value_parser = parse_status)]
    pub status: Option<UserStatus>,

    /// Request an edit of the user with this id (sample data is read-only).
    #[arg(long = "edit", value_name = "ID")]
    pub edit: Option<String>,

    /// Request deletion of the user with this id (sample data is read-only).
    #[arg(long = "delete", value_name = "ID")]
    pub delete: Option<String>,
}

#[derive(Args)]
pub struct DealsArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    #[arg(long = "stage", value_parser = parse_deal_stage)]
    pub stage: Option<DealStage>,
}

#[derive(Args)]
pub struct DealArgs {
    /// Deal id, e.g. d-101.
    pub id: String,

    /// Tab to show: due-diligence, terms or closing.
    #[arg(long = "tab", default_value = "due-diligence")]
    pub tab: String,

    /// Generate the closing agreement.
    #[arg(long = "generate")]
    pub generate: bool,

    /// Sign the closing agreement (ignored unless generated).
    #[arg(long = "sign")]
    pub sign: bool,
}

#[derive(Args)]
pub struct VenturesArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    /// Founder whose ventures to show.
    #[arg(long = "founder", default_value = DEFAULT_MEMBER)]
    pub founder: String,
}

#[derive(Args)]
pub struct PortfolioArgs {
    #[command(flatten)]
    pub listing: ListingArgs,

    #[arg(long = "industry")]
    pub industry: Option<String>,

    #[arg(long = "stage", value_parser = parse_venture_stage)]
    pub stage: Option<VentureStage>,
}

#[derive(Args)]
pub struct OnboardArgs {
    #[arg(long = "role", value_parser = parse_role)]
    pub role: UserRole,

    #[arg(long = "name")]
    pub name: String,

    #[arg(long = "company")]
    pub company: Option<String>,

    /// Extra answers as STEP.KEY=VALUE (e.g. mindset.risk=high).
    #[arg(long = "answer", value_name = "STEP.KEY=VALUE")]
    pub answers: Vec<String>,

    /// Interest areas for the direction step (repeatable).
    #[arg(long = "interest", value_name = "AREA")]
    pub interests: Vec<String>,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Args)]
pub struct PanelArgs {
    /// Steps: toggle, begin, move:<x>, end, agent:<name>.
    #[arg(value_name = "STEP", required = true)]
    pub script: Vec<String>,

    /// Viewport width in pixels.
    #[arg(long = "viewport", default_value_t = 1440)]
    pub viewport: i32,

    #[arg(long = "min-width", default_value_t = MIN_WIDTH)]
    pub min_width: u32,

    #[arg(long = "max-width", default_value_t = MAX_WIDTH)]
    pub max_width: u32,

    #[arg(long = "initial-width", default_value_t = DEFAULT_WIDTH)]
    pub initial_width: u32,

    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_role(value: &str) -> Result<UserRole, ModelError> {
    value.parse()
}

fn parse_status(value: &str) -> Result<UserStatus, ModelError> {
    value.parse()
}

fn parse_deal_stage(value: &str) -> Result<DealStage, ModelError> {
    value.parse()
}

fn parse_venture_stage(value: &str) -> Result<VentureStage, ModelError> {
    value.parse()
}
