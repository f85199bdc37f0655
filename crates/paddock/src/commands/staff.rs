//! Staff command handlers.

use std::sync::Arc;

use tabled::Tabled;

use paddock_core::stream::StaffFilter;
use paddock_core::{
    CreateStaffMemberRequest, EntityId, Facility, StaffMember, StaffStatus,
    UpdateStaffMemberRequest,
};

use crate::cli::{GlobalOpts, IdArg, StaffArgs, StaffCommand};
use crate::error::CliError;
use crate::output::{self, Painter, Tone};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct StaffRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl StaffRow {
    fn new(s: &StaffMember, painter: Painter) -> Self {
        Self {
            id: s.id.to_string(),
            name: s.name.clone(),
            role: s.role.to_string(),
            email: s.email.clone(),
            phone: s.phone.clone(),
            status: painter.paint(s.status, status_tone(s.status)),
        }
    }
}

fn status_tone(status: StaffStatus) -> Tone {
    match status {
        StaffStatus::Active => Tone::Good,
        StaffStatus::OnLeave => Tone::Warn,
        StaffStatus::Inactive => Tone::Neutral,
    }
}

fn detail(s: &StaffMember, painter: Painter) -> String {
    output::detail(
        painter,
        &format!("{} ({})", s.name, s.id),
        &[
            ("Role", s.role.to_string()),
            ("Email", s.email.clone()),
            ("Phone", s.phone.clone()),
            ("Status", painter.paint(s.status, status_tone(s.status))),
            ("Joined", s.joined.to_string()),
            ("Notes", output::opt(s.notes.as_ref())),
        ],
    )
}

fn print_one(member: &Arc<StaffMember>, global: &GlobalOpts) -> Result<(), CliError> {
    let painter = Painter::new(global);
    let out = output::render_single(
        &global.output,
        member,
        |s| detail(s, painter),
        |s| s.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    facility: &Facility,
    args: StaffArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        StaffCommand::List {
            role,
            status,
            search,
        } => {
            let mut filters = Vec::new();
            if let Some(role) = role {
                filters.push(StaffFilter::ByRole(util::parse_enum("role", &role)?));
            }
            if let Some(status) = status {
                filters.push(StaffFilter::ByStatus(util::parse_enum("status", &status)?));
            }
            if let Some(term) = search {
                filters.push(StaffFilter::Search(term));
            }

            let painter = Painter::new(global);
            let all = facility.store().staff_snapshot();
            let shown: Vec<_> = all
                .iter()
                .filter(|s| filters.iter().all(|f| f.matches(s)))
                .cloned()
                .collect();
            let out = output::render_list(
                &global.output,
                &shown,
                |s| StaffRow::new(s, painter),
                |s| s.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        StaffCommand::Get(IdArg { id }) => {
            let member = util::require(
                facility
                    .store()
                    .staff_member_by_id(&EntityId::from(id.as_str())),
                "Staff member",
                &id,
                "staff list",
            )?;
            print_one(&member, global)
        }

        StaffCommand::Add(payload) => {
            let req: CreateStaffMemberRequest = util::read_payload(&payload.from_file)?;
            let created = facility.add_staff_member(&req).await?;
            output::notice(global, &format!("Staff member {} added", created.id));
            print_one(&created, global)
        }

        StaffCommand::Update { id, payload } => {
            let req: UpdateStaffMemberRequest = util::read_payload(&payload.from_file)?;
            let updated = facility
                .update_staff_member(&EntityId::from(id), &req)
                .await?;
            output::notice(global, &format!("Staff member {} updated", updated.id));
            print_one(&updated, global)
        }

        StaffCommand::Delete(IdArg { id }) => {
            if !util::confirm(
                &format!("Remove staff member {id}?"),
                "staff delete",
                global.yes,
            )? {
                return Ok(());
            }
            facility
                .delete_staff_member(&EntityId::from(id.as_str()))
                .await?;
            output::notice(global, &format!("Staff member {id} deleted"));
            Ok(())
        }
    }
}
