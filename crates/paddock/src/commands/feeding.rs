//! Feeding task command handlers.

use std::sync::Arc;

use tabled::Tabled;

use paddock_core::insights::feeding as insights;
use paddock_core::stream::FeedingTaskFilter;
use paddock_core::{
    CreateFeedingTaskRequest, EntityId, Facility, FeedingStatus, FeedingTask,
    UpdateFeedingTaskRequest,
};

use crate::cli::{FeedingArgs, FeedingCommand, GlobalOpts, IdArg};
use crate::error::CliError;
use crate::output::{self, Painter, Tone};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct FeedingRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Time")]
    time: String,
    #[tabled(rename = "Animal")]
    animal: String,
    #[tabled(rename = "Food")]
    food: String,
    #[tabled(rename = "Quantity")]
    quantity: String,
    #[tabled(rename = "Frequency")]
    frequency: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl FeedingRow {
    fn new(t: &FeedingTask, painter: Painter) -> Self {
        Self {
            id: t.id.to_string(),
            time: t.time.clone(),
            animal: t.animal_name.clone(),
            food: t.food_type.clone(),
            quantity: t.quantity.clone(),
            frequency: t.frequency.to_string(),
            status: painter.paint(t.status, status_tone(t.status)),
        }
    }
}

fn status_tone(status: FeedingStatus) -> Tone {
    match status {
        FeedingStatus::Completed => Tone::Good,
        FeedingStatus::Pending => Tone::Warn,
        FeedingStatus::Missed => Tone::Bad,
    }
}

fn detail(t: &FeedingTask, painter: Painter) -> String {
    output::detail(
        painter,
        &format!("Feeding task {}", t.id),
        &[
            ("Animal", format!("{} ({})", t.animal_name, t.animal_id)),
            ("Food", t.food_type.clone()),
            ("Quantity", t.quantity.clone()),
            ("Time", t.time.clone()),
            ("Frequency", t.frequency.to_string()),
            ("Status", painter.paint(t.status, status_tone(t.status))),
            ("Start date", t.start_date.to_string()),
        ],
    )
}

fn print_many(tasks: &[Arc<FeedingTask>], global: &GlobalOpts) -> Result<(), CliError> {
    let painter = Painter::new(global);
    let out = output::render_list(
        &global.output,
        tasks,
        |t| FeedingRow::new(t, painter),
        |t| t.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

fn print_one(task: &Arc<FeedingTask>, global: &GlobalOpts) -> Result<(), CliError> {
    let painter = Painter::new(global);
    let out = output::render_single(
        &global.output,
        task,
        |t| detail(t, painter),
        |t| t.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    facility: &Facility,
    args: FeedingArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        FeedingCommand::List { animal, status } => {
            let mut filters = Vec::new();
            if let Some(animal) = animal {
                filters.push(FeedingTaskFilter::ByAnimal(animal.into()));
            }
            if let Some(status) = status {
                filters.push(FeedingTaskFilter::ByStatus(util::parse_enum(
                    "status", &status,
                )?));
            }

            let all = facility.store().feeding_tasks_snapshot();
            let shown: Vec<_> = all
                .iter()
                .filter(|t| filters.iter().all(|f| f.matches(t)))
                .cloned()
                .collect();
            print_many(&shown, global)
        }

        FeedingCommand::Schedule => {
            let all = facility.store().feeding_tasks_snapshot();
            let schedule = insights::daily_schedule(&all);
            print_many(&schedule, global)?;

            if matches!(global.output, crate::cli::OutputFormat::Table) {
                let rate = insights::completion_rate(&all)
                    .map_or_else(|| "n/a".to_owned(), |r| format!("{r:.0}%"));
                output::notice(
                    global,
                    &format!(
                        "{} pending, completion rate {rate}",
                        insights::pending(&all)
                    ),
                );
            }
            Ok(())
        }

        FeedingCommand::Get(IdArg { id }) => {
            let task = util::require(
                facility
                    .store()
                    .feeding_task_by_id(&EntityId::from(id.as_str())),
                "Feeding task",
                &id,
                "feeding list",
            )?;
            print_one(&task, global)
        }

        FeedingCommand::Add(payload) => {
            let req: CreateFeedingTaskRequest = util::read_payload(&payload.from_file)?;
            let created = facility.add_feeding_task(&req).await?;
            output::notice(global, &format!("Feeding task {} added", created.id));
            print_one(&created, global)
        }

        FeedingCommand::Update { id, payload } => {
            let req: UpdateFeedingTaskRequest = util::read_payload(&payload.from_file)?;
            let updated = facility
                .update_feeding_task(&EntityId::from(id), &req)
                .await?;
            output::notice(global, &format!("Feeding task {} updated", updated.id));
            print_one(&updated, global)
        }

        FeedingCommand::Complete(IdArg { id }) => {
            let req = UpdateFeedingTaskRequest {
                status: Some(FeedingStatus::Completed),
                ..Default::default()
            };
            let updated = facility
                .update_feeding_task(&EntityId::from(id), &req)
                .await?;
            output::notice(
                global,
                &format!("Fed {} ({})", updated.animal_name, updated.id),
            );
            Ok(())
        }

        FeedingCommand::Delete(IdArg { id }) => {
            if !util::confirm(
                &format!("Delete feeding task {id}?"),
                "feeding delete",
                global.yes,
            )? {
                return Ok(());
            }
            facility.delete_feeding_task(&EntityId::from(id.as_str())).await?;
            output::notice(global, &format!("Feeding task {id} deleted"));
            Ok(())
        }
    }
}
