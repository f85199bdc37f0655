//! Breeding record command handlers.

use std::sync::Arc;

use tabled::Tabled;

use paddock_core::insights::breeding as insights;
use paddock_core::stream::BreedingRecordFilter;
use paddock_core::{
    BreedingRecord, BreedingStatus, CreateBreedingRecordRequest, EntityId, Facility,
    UpdateBreedingRecordRequest,
};

use crate::cli::{BreedingArgs, BreedingCommand, GlobalOpts, IdArg};
use crate::error::CliError;
use crate::output::{self, Painter, Tone};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct BreedingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Mother")]
    mother: String,
    #[tabled(rename = "Father")]
    father: String,
    #[tabled(rename = "Mated")]
    mating_date: String,
    #[tabled(rename = "Due")]
    due_date: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl BreedingRow {
    fn new(r: &BreedingRecord, facility: &Facility, painter: Painter) -> Self {
        Self {
            id: r.id.to_string(),
            mother: facility.animal_name(&r.mother_id),
            father: facility.animal_name(&r.father_id),
            mating_date: r.mating_date.to_string(),
            due_date: r.due_date.to_string(),
            status: painter.paint(r.status, status_tone(r.status)),
        }
    }
}

fn status_tone(status: BreedingStatus) -> Tone {
    match status {
        BreedingStatus::Delivered => Tone::Good,
        BreedingStatus::Pregnant => Tone::Warn,
        BreedingStatus::Unsuccessful => Tone::Bad,
    }
}

fn detail(r: &BreedingRecord, facility: &Facility, painter: Painter) -> String {
    output::detail(
        painter,
        &format!("Breeding record {}", r.id),
        &[
            (
                "Mother",
                format!("{} ({})", facility.animal_name(&r.mother_id), r.mother_id),
            ),
            (
                "Father",
                format!("{} ({})", facility.animal_name(&r.father_id), r.father_id),
            ),
            ("Mated", r.mating_date.to_string()),
            ("Due", r.due_date.to_string()),
            ("Status", painter.paint(r.status, status_tone(r.status))),
            ("Expected litter", output::opt(r.expected_litter.as_ref())),
            ("Actual litter", output::opt(r.actual_litter.as_ref())),
            ("Notes", output::opt(r.notes.as_ref())),
        ],
    )
}

fn print_many(
    records: &[Arc<BreedingRecord>],
    facility: &Facility,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let painter = Painter::new(global);
    let out = output::render_list(
        &global.output,
        records,
        |r| BreedingRow::new(r, facility, painter),
        |r| r.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn print_one(
    record: &Arc<BreedingRecord>,
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
    args: BreedingArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        BreedingCommand::List { parent, status } => {
            let mut filters = Vec::new();
            if let Some(parent) = parent {
                filters.push(BreedingRecordFilter::ByParent(parent.into()));
            }
            if let Some(status) = status {
                filters.push(BreedingRecordFilter::ByStatus(util::parse_enum(
                    "status", &status,
                )?));
            }

            let all = facility.store().breeding_records_snapshot();
            let shown: Vec<_> = all
                .iter()
                .filter(|r| filters.iter().all(|f| f.matches(r)))
                .cloned()
                .collect();
            print_many(&shown, facility, global)
        }

        BreedingCommand::Due => {
            let all = facility.store().breeding_records_snapshot();
            print_many(&insights::due_soon(&all, util::today()), facility, global)
        }

        BreedingCommand::Get(IdArg { id }) => {
            let record = util::require(
                facility
                    .store()
                    .breeding_record_by_id(&EntityId::from(id.as_str())),
                "Breeding record",
                &id,
                "breeding list",
            )?;
            print_one(&record, facility, global)
        }

        BreedingCommand::Add(payload) => {
            let req: CreateBreedingRecordRequest = util::read_payload(&payload.from_file)?;
            let created = facility.add_breeding_record(&req).await?;
            output::notice(global, &format!("Breeding record {} added", created.id));
            print_one(&created, facility, global)
        }

        BreedingCommand::Update { id, payload } => {
            let req: UpdateBreedingRecordRequest = util::read_payload(&payload.from_file)?;
            let updated = facility
                .update_breeding_record(&EntityId::from(id), &req)
                .await?;
            output::notice(global, &format!("Breeding record {} updated", updated.id));
            print_one(&updated, facility, global)
        }

        BreedingCommand::Deliver { id, litter } => {
            let req = UpdateBreedingRecordRequest {
                status: Some(BreedingStatus::Delivered),
                actual_litter: litter.map(Some),
                ..Default::default()
            };
            let updated = facility
                .update_breeding_record(&EntityId::from(id), &req)
                .await?;
            output::notice(global, &format!("Breeding record {} delivered", updated.id));
            Ok(())
        }

        BreedingCommand::Delete(IdArg { id }) => {
            if !util::confirm(
                &format!("Delete breeding record {id}?"),
                "breeding delete",
                global.yes,
            )? {
                return Ok(());
            }
            facility
                .delete_breeding_record(&EntityId::from(id.as_str()))
                .await?;
            output::notice(global, &format!("Breeding record {id} deleted"));
            Ok(())
        }
    }
}
