//! Command dispatch: bridges CLI args -> Facility operations -> output.

pub mod animals;
pub mod breeding;
pub mod config_cmd;
pub mod dashboard;
pub mod feeding;
pub mod health;
pub mod inventory;
pub mod settings;
pub mod staff;
pub mod system;
pub mod util;

use paddock_core::Facility;

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a backend-bound command to the appropriate handler.
///
/// Everything except `ping` works on loaded data, so the store is
/// populated first.
pub async fn dispatch(
    cmd: Command,
    facility: &Facility,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    if matches!(cmd, Command::Ping) {
        return system::ping(facility, global).await;
    }

    util::load(facility, global).await;

    match cmd {
        Command::Animals(args) => animals::handle(facility, args, global).await,
        Command::Health(args) => health::handle(facility, args, global).await,
        Command::Feeding(args) => feeding::handle(facility, args, global).await,
        Command::Breeding(args) => breeding::handle(facility, args, global).await,
        Command::Inventory(args) => inventory::handle(facility, args, global).await,
        Command::Staff(args) => staff::handle(facility, args, global).await,
        Command::Settings(args) => settings::handle(facility, args, global).await,
        Command::Dashboard => dashboard::dashboard(facility, global),
        Command::Reports(args) => dashboard::reports(facility, &args, global),
        // Handled before the store is built
        Command::Ping | Command::Login(_) | Command::Config(_) | Command::Completions(_) => {
            Err(CliError::Internal("command dispatched out of order".into()))
        }
    }
}
