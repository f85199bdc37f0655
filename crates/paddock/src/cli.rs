//! Clap derive structures for the `paddock` CLI.
//!
//! Defines the complete command tree, global flags, and shared types.
//! Only depends on clap so `build.rs` can pull it in for man pages.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// paddock -- manage an animal facility from the command line
#[derive(Debug, Parser)]
#[command(
    name = "paddock",
    version,
    about = "Manage an animal care facility from the command line",
    long_about = "A command-line client for the paddock facility backend.\n\n\
        Tracks animals, health records, feeding schedules, breeding,\n\
        inventory and staff, and derives dashboard and report figures\n\
        from the loaded data.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "PADDOCK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend URL (overrides profile)
    #[arg(long, short = 'u', env = "PADDOCK_URL", global = true)]
    pub url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "PADDOCK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "PADDOCK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (0 waits indefinitely)
    #[arg(long, env = "PADDOCK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one id per line (scripting)
    Plain,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the animal registry
    #[command(alias = "a")]
    Animals(AnimalsArgs),

    /// Manage health records
    #[command(alias = "hr")]
    Health(HealthArgs),

    /// Manage feeding tasks
    #[command(alias = "f")]
    Feeding(FeedingArgs),

    /// Manage breeding records
    #[command(alias = "b")]
    Breeding(BreedingArgs),

    /// Manage inventory items
    #[command(alias = "inv")]
    Inventory(InventoryArgs),

    /// Manage staff members
    Staff(StaffArgs),

    /// View and change facility settings
    Settings(SettingsArgs),

    /// Facility overview: counts, alerts and budget
    #[command(alias = "dash")]
    Dashboard,

    /// Activity reports over a time range
    Reports(ReportsArgs),

    /// Check whether the backend is reachable
    Ping,

    /// Check login form input locally
    Login(LoginArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ── Shared Arguments ─────────────────────────────────────────────────

/// JSON payload for commands without dedicated flags.
#[derive(Debug, Args)]
pub struct PayloadArgs {
    /// Read the request body from a JSON file (`-` for stdin)
    #[arg(long, short = 'F')]
    pub from_file: PathBuf,
}

#[derive(Debug, Args)]
pub struct IdArg {
    /// Entity id (e.g. A001)
    pub id: String,
}

// ── Animals ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct AnimalsArgs {
    #[command(subcommand)]
    pub command: AnimalsCommand,
}

#[derive(Debug, Subcommand)]
pub enum AnimalsCommand {
    /// List animals
    #[command(alias = "ls")]
    List {
        /// Only animals with this status (e.g. "Under Care")
        #[arg(long, short = 's')]
        status: Option<String>,

        /// Only animals of this species
        #[arg(long)]
        species: Option<String>,

        /// Match name, species, breed or id
        #[arg(long)]
        search: Option<String>,
    },

    /// Show one animal
    Get(IdArg),

    /// Register a new animal
    Add(AnimalFields),

    /// Change fields of an animal
    Update {
        /// Animal id
        id: String,

        #[command(flatten)]
        fields: AnimalUpdateFields,
    },

    /// Delete an animal and its dependent records
    #[command(alias = "rm")]
    Delete(IdArg),
}

#[derive(Debug, Args)]
pub struct AnimalFields {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub species: String,

    #[arg(long)]
    pub breed: String,

    /// Age in years
    #[arg(long)]
    pub age: u32,

    /// Male, Female or Unknown
    #[arg(long, default_value = "Unknown")]
    pub gender: String,

    /// Weight in kg
    #[arg(long)]
    pub weight: Option<f64>,

    #[arg(long, default_value = "Healthy")]
    pub status: String,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Debug, Args)]
pub struct AnimalUpdateFields {
    #[arg(long)]
    pub name: Option<String>,

    #[arg(long)]
    pub species: Option<String>,

    #[arg(long)]
    pub breed: Option<String>,

    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long)]
    pub weight: Option<f64>,

    /// Remove the recorded weight
    #[arg(long, conflicts_with = "weight")]
    pub clear_weight: bool,

    #[arg(long)]
    pub status: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,

    /// Remove the notes
    #[arg(long, conflicts_with = "notes")]
    pub clear_notes: bool,
}

// ── Health ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct HealthArgs {
    #[command(subcommand)]
    pub command: HealthCommand,
}

#[derive(Debug, Subcommand)]
pub enum HealthCommand {
    /// List health records
    #[command(alias = "ls")]
    List {
        /// Only records for this animal id
        #[arg(long, short = 'a')]
        animal: Option<String>,

        /// Vaccination, Treatment, Checkup, Medication or Surgery
        #[arg(long = "type", short = 't')]
        record_type: Option<String>,

        #[arg(long, short = 's')]
        status: Option<String>,

        /// Only records that are not completed
        #[arg(long, conflicts_with = "status")]
        open: bool,
    },

    /// Follow-ups due within the next N days
    Upcoming {
        #[arg(long, default_value = "14")]
        days: u32,
    },

    /// Show one health record
    Get(IdArg),

    /// Create a health record
    Add(PayloadArgs),

    /// Change fields of a health record
    Update {
        id: String,

        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Mark a health record as completed
    Complete(IdArg),

    /// Delete a health record
    #[command(alias = "rm")]
    Delete(IdArg),
}

// ── Feeding ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct FeedingArgs {
    #[command(subcommand)]
    pub command: FeedingCommand,
}

#[derive(Debug, Subcommand)]
pub enum FeedingCommand {
    /// List feeding tasks
    #[command(alias = "ls")]
    List {
        #[arg(long, short = 'a')]
        animal: Option<String>,

        /// Pending, Completed or Missed
        #[arg(long, short = 's')]
        status: Option<String>,
    },

    /// Today's feeding schedule ordered by time
    Schedule,

    /// Show one feeding task
    Get(IdArg),

    /// Create a feeding task
    Add(PayloadArgs),

    /// Change fields of a feeding task
    Update {
        id: String,

        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Mark a feeding task as completed
    Complete(IdArg),

    /// Delete a feeding task
    #[command(alias = "rm")]
    Delete(IdArg),
}

// ── Breeding ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct BreedingArgs {
    #[command(subcommand)]
    pub command: BreedingCommand,
}

#[derive(Debug, Subcommand)]
pub enum BreedingCommand {
    /// List breeding records
    #[command(alias = "ls")]
    List {
        /// Only records with this animal as mother or father
        #[arg(long, short = 'a')]
        parent: Option<String>,

        /// Pregnant, Delivered or Unsuccessful
        #[arg(long, short = 's')]
        status: Option<String>,
    },

    /// Pregnancies due within two weeks
    Due,

    /// Show one breeding record
    Get(IdArg),

    /// Create a breeding record
    Add(PayloadArgs),

    /// Change fields of a breeding record
    Update {
        id: String,

        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Record a delivery
    Deliver {
        id: String,

        /// Actual litter, e.g. "3 puppies"
        #[arg(long)]
        litter: Option<String>,
    },

    /// Delete a breeding record
    #[command(alias = "rm")]
    Delete(IdArg),
}

// ── Inventory ────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct InventoryArgs {
    #[command(subcommand)]
    pub command: InventoryCommand,
}

#[derive(Debug, Subcommand)]
pub enum InventoryCommand {
    /// List inventory items
    #[command(alias = "ls")]
    List {
        /// Food, Medicine, Equipment or Supplies
        #[arg(long, short = 'c')]
        category: Option<String>,

        /// "In Stock", "Low Stock" or "Out of Stock"
        #[arg(long, short = 's')]
        status: Option<String>,

        #[arg(long)]
        search: Option<String>,

        /// Only items at or below their reorder level
        #[arg(long)]
        reorder: bool,
    },

    /// Stock value, budget use and reorder list
    Summary,

    /// Show one inventory item
    Get(IdArg),

    /// Create an inventory item
    Add(PayloadArgs),

    /// Change fields of an inventory item
    Update {
        id: String,

        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Set the on-hand quantity of an item
    Restock {
        id: String,

        /// New on-hand quantity
        #[arg(long)]
        quantity: f64,
    },

    /// Delete an inventory item
    #[command(alias = "rm")]
    Delete(IdArg),
}

// ── Staff ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct StaffArgs {
    #[command(subcommand)]
    pub command: StaffCommand,
}

#[derive(Debug, Subcommand)]
pub enum StaffCommand {
    /// List staff members
    #[command(alias = "ls")]
    List {
        #[arg(long, short = 'r')]
        role: Option<String>,

        /// Active, "On Leave" or Inactive
        #[arg(long, short = 's')]
        status: Option<String>,

        #[arg(long)]
        search: Option<String>,
    },

    /// Show one staff member
    Get(IdArg),

    /// Add a staff member
    Add(PayloadArgs),

    /// Change fields of a staff member
    Update {
        id: String,

        #[command(flatten)]
        payload: PayloadArgs,
    },

    /// Remove a staff member
    #[command(alias = "rm")]
    Delete(IdArg),
}

// ── Settings ─────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: SettingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    /// Show the facility settings
    Show,

    /// Change facility details
    Update {
        #[arg(long)]
        facility_name: Option<String>,

        #[arg(long)]
        registration_number: Option<String>,

        #[arg(long)]
        address: Option<String>,

        #[arg(long)]
        phone: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        operating_hours: Option<String>,
    },

    /// Flip one notification preference
    Toggle {
        /// lowStockAlerts, healthReminders, breedingAlerts,
        /// feedingReminders or emailSummary
        preference: String,
    },
}

// ── Reports ──────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ReportsArgs {
    /// week, month, quarter or year
    #[arg(long, short = 'r', default_value = "month")]
    pub range: String,

    /// overview, health, feeding, breeding or inventory
    #[arg(long = "type", short = 't', default_value = "overview")]
    pub report_type: String,
}

// ── Login ────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct LoginArgs {
    #[arg(long)]
    pub email: String,

    /// Password (prompted when omitted)
    #[arg(long, env = "PADDOCK_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

// ── Config ───────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create or extend the config file with a profile
    Init {
        /// Profile name (prompted when omitted)
        #[arg(long)]
        name: Option<String>,
    },

    /// Display the current configuration
    Show,

    /// Print the config file location
    Path,

    /// Set a value on the active profile
    Set {
        /// url, timeout, insecure or ca_cert
        key: String,

        value: String,
    },

    /// List configured profiles
    Profiles,

    /// Set the default profile
    Use {
        name: String,
    },
}

// ── Completions ──────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
