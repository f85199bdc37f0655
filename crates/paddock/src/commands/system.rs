//! Backend liveness and the local login gate.

use dialoguer::Password;

use paddock_core::{Facility, LoginForm, Validate};

use crate::cli::{GlobalOpts, LoginArgs};
use crate::error::CliError;
use crate::output;

pub async fn ping(facility: &Facility, global: &GlobalOpts) -> Result<(), CliError> {
    let health = facility.check_health().await?;
    let url = facility.config().url.as_str();
    let out = output::render_single(
        &global.output,
        &health,
        |h| format!("{url}: {} ({})", h.status, h.message),
        |h| h.status.clone(),
    )?;
    output::print_output(&out, global.quiet);

    if health.is_ok() {
        Ok(())
    } else {
        Err(CliError::Api {
            message: format!("backend reports status {}", health.status),
            status: None,
        })
    }
}

/// There is no server-side authentication; a form that passes
/// validation is accepted.
pub fn login(args: LoginArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let password = match args.password {
        Some(password) => password,
        None => Password::new()
            .with_prompt("Password")
            .interact()
            .map_err(|e| CliError::Io(std::io::Error::other(e)))?,
    };

    let form = LoginForm {
        email: args.email,
        password,
    };
    form.validate()?;

    output::notice(global, &format!("Signed in as {}", form.email));
    Ok(())
}
