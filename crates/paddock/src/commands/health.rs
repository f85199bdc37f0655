//! Health record command handlers.

use std::sync::Arc;

use tabled::Tabled;

use paddock_core::insights::health as insights;
use paddock_core::stream::HealthRecordFilter;
use paddock_core::{
    CreateHealthRecordRequest, EntityId, Facility, HealthRecord, HealthStatus,
    UpdateHealthRecordRequest,
};

use crate::cli::{GlobalOpts, HealthArgs, HealthCommand, IdArg};
use crate::error::CliError;
use crate::output::{self, Painter, Tone};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct HealthRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Animal")]
    animal: String,
    #[tabled(rename = "Type")]
    record_type: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Veterinarian")]
    veterinarian: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Next Due")]
    next_due: String,
}

impl HealthRow {
    fn new(r: &HealthRecord, facility: &Facility, painter: Painter) -> Self {
        Self {
            id: r.id.to_string(),
            animal: facility.animal_name(&r.animal_id),
            record_type: r.record_type.to_string(),
            date: r.date.to_string(),
            veterinarian: r.veterinarian.clone(),
            status: painter.paint(r.status, status_tone(r.status)),
            next_due: output::opt(r.next_due.as_ref()),
        }
    }
}

fn status_tone(status: HealthStatus) -> Tone {
    match status {
        HealthStatus::Completed => Tone::Good,
        HealthStatus::Ongoing => Tone::Warn,
        HealthStatus::Scheduled => Tone::Neutral,
    }
}

fn detail(r: &HealthRecord, facility: &Facility, painter: Painter) -> String {
    output::detail(
        painter,
        &format!("{} {}", r.record_type, r.id),
        &[
            (
                "Animal",
                format!("{} ({})", facility.animal_name(&r.animal_id), r.animal_id),
            ),
            ("Description", r.description.clone()),
            ("Date", r.date.to_string()),
            ("Veterinarian", r.veterinarian.clone()),
            ("Status", painter.paint(r.status, status_tone(r.status))),
            ("Next due", output::opt(r.next_due.as_ref())),
            ("Notes", output::opt(r.notes.as_ref())),
        ],
    )
}

fn print_many(
    records: &[Arc<HealthRecord>],
    facility: &Facility,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let painter = Painter::new(global);
    let out = output::render_list(
        &global.output,
        records,
        |r| HealthRow::new(r, facility, painter),
        |r| r.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn print_one(
    record: &Arc<HealthRecord>,
    facility: &Facility,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let painter = Painter::new(global);
    let out = output::render_single(
        &global.output,
        record,
        |r| detail(r, facility, painter),
        |r| r.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    facility: &Facility,
    args: HealthArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        HealthCommand::List {
            animal,
            record_type,
            status,
            open,
        } => {
            let mut filters = Vec::new();
            if let Some(animal) = animal {
                filters.push(HealthRecordFilter::ByAnimal(animal.into()));
            }
            if let Some(kind) = record_type {
                filters.push(HealthRecordFilter::ByType(util::parse_enum("type", &kind)?));
            }
            if let Some(status) = status {
                filters.push(HealthRecordFilter::ByStatus(util::parse_enum(
                    "status", &status,
                )?));
            }
            if open {
                filters.push(HealthRecordFilter::Open);
            }

            let all = facility.store().health_records_snapshot();
            let shown: Vec<_> = all
                .iter()
                .filter(|r| filters.iter().all(|f| f.matches(r)))
                .cloned()
                .collect();
            print_many(&shown, facility, global)
        }

        HealthCommand::Upcoming { days } => {
            let all = facility.store().health_records_snapshot();
            let shown = insights::upcoming(&all, util::today(), i64::from(days));
            print_many(&shown, facility, global)
        }

        HealthCommand::Get(IdArg { id }) => {
            let record = util::require(
                facility
                    .store()
                    .health_record_by_id(&EntityId::from(id.as_str())),
                "Health record",
                &id,
                "health list",
            )?;
            print_one(&record, facility, global)
        }

        HealthCommand::Add(payload) => {
            let req: CreateHealthRecordRequest = util::read_payload(&payload.from_file)?;
            let created = facility.add_health_record(&req).await?;
            output::notice(global, &format!("Health record {} added", created.id));
            print_one(&created, facility, global)
        }

        HealthCommand::Update { id, payload } => {
            let req: UpdateHealthRecordRequest = util::read_payload(&payload.from_file)?;
            let updated = facility
                .update_health_record(&EntityId::from(id), &req)
                .await?;
            output::notice(global, &format!("Health record {} updated", updated.id));
            print_one(&updated, facility, global)
        }

        HealthCommand::Complete(IdArg { id }) => {
            let req = UpdateHealthRecordRequest {
                status: Some(HealthStatus::Completed),
                ..Default::default()
            };
            let updated = facility
                .update_health_record(&EntityId::from(id), &req)
                .await?;
            output::notice(global, &format!("Health record {} completed", updated.id));
            Ok(())
        }

        HealthCommand::Delete(IdArg { id }) => {
            if !util::confirm(
                &format!("Delete health record {id}?"),
                "health delete",
                global.yes,
            )? {
                return Ok(());
            }
            facility.delete_health_record(&EntityId::from(id.as_str())).await?;
            output::notice(global, &format!("Health record {id} deleted"));
            Ok(())
        }
    }
}
