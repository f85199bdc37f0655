//! Facility settings command handlers.

use strum::IntoEnumIterator;

use paddock_core::{
    Facility, FacilitySettings, NotificationPreference, UpdateSettingsRequest,
};

use crate::cli::{GlobalOpts, SettingsArgs, SettingsCommand};
use crate::error::CliError;
use crate::output::{self, Painter, Tone};

use super::util;

fn detail(s: &FacilitySettings, painter: Painter) -> String {
    let mut fields = vec![
        ("Registration", s.registration_number.clone()),
        ("Address", s.address.clone()),
        ("Phone", s.phone.clone()),
        ("Email", s.email.clone()),
        ("Hours", s.operating_hours.clone()),
        ("Last backup", output::opt(s.last_backup.as_ref())),
    ];
    for pref in NotificationPreference::iter() {
        let enabled = s.notification_preferences.get(pref);
        let state = if enabled {
            painter.paint("on", Tone::Good)
        } else {
            painter.paint("off", Tone::Neutral)
        };
        fields.push((pref.into(), state));
    }
    output::detail(painter, &s.facility_name, &fields)
}

pub async fn handle(
    facility: &Facility,
    args: SettingsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let painter = Painter::new(global);

    let settings = match args.command {
        SettingsCommand::Show => facility.store().settings(),

        SettingsCommand::Update {
            facility_name,
            registration_number,
            address,
            phone,
            email,
            operating_hours,
        } => {
            let req = UpdateSettingsRequest {
                facility_name,
                registration_number,
                address,
                phone,
                email,
                operating_hours,
                notification_preferences: None,
                last_backup: None,
            };
            let updated = facility.update_settings(&req).await?;
            output::notice(global, "Settings saved");
            updated
        }

        SettingsCommand::Toggle { preference } => {
            let pref: NotificationPreference = util::parse_enum("preference", &preference)?;
            let updated = facility.toggle_notification(pref).await?;
            let state = if updated.notification_preferences.get(pref) {
                "on"
            } else {
                "off"
            };
            output::notice(global, &format!("{pref} turned {state}"));
            updated
        }
    };

    let out = output::render_single(
        &global.output,
        settings.as_ref(),
        |s| detail(s, painter),
        |s| s.facility_name.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
