//! Animal registry command handlers.

use std::sync::Arc;

use tabled::Tabled;

use paddock_core::stream::AnimalFilter;
use paddock_core::{
    Animal, AnimalStatus, CreateAnimalRequest, EntityId, Facility, UpdateAnimalRequest,
};

use crate::cli::{AnimalFields, AnimalUpdateFields, AnimalsArgs, AnimalsCommand, GlobalOpts, IdArg};
use crate::error::CliError;
use crate::output::{self, Painter, Tone};

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct AnimalRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Species")]
    species: String,
    #[tabled(rename = "Breed")]
    breed: String,
    #[tabled(rename = "Age")]
    age: u32,
    #[tabled(rename = "Gender")]
    gender: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl AnimalRow {
    fn new(a: &Animal, painter: Painter) -> Self {
        Self {
            id: a.id.to_string(),
            name: a.name.clone(),
            species: a.species.clone(),
            breed: a.breed.clone(),
            age: a.age,
            gender: a.gender.to_string(),
            status: painter.paint(a.status, status_tone(a.status)),
        }
    }
}

pub(super) fn status_tone(status: AnimalStatus) -> Tone {
    match status {
        AnimalStatus::Healthy => Tone::Good,
        AnimalStatus::UnderCare => Tone::Warn,
        AnimalStatus::Quarantine => Tone::Bad,
        AnimalStatus::Breeding | AnimalStatus::Inactive => Tone::Neutral,
    }
}

fn detail(a: &Animal, painter: Painter) -> String {
    output::detail(
        painter,
        &format!("{} ({})", a.name, a.id),
        &[
            ("Species", a.species.clone()),
            ("Breed", a.breed.clone()),
            ("Age", a.age.to_string()),
            ("Gender", a.gender.to_string()),
            ("Weight", a.weight.map(|w| format!("{w} kg")).unwrap_or_default()),
            ("Status", painter.paint(a.status, status_tone(a.status))),
            ("Notes", output::opt(a.notes.as_ref())),
            ("Added", output::opt(a.created_at.as_ref())),
        ],
    )
}

// ── Request builders ────────────────────────────────────────────────

fn create_request(fields: AnimalFields) -> Result<CreateAnimalRequest, CliError> {
    Ok(CreateAnimalRequest {
        gender: util::parse_enum("gender", &fields.gender)?,
        status: util::parse_enum("status", &fields.status)?,
        name: fields.name,
        species: fields.species,
        breed: fields.breed,
        age: fields.age,
        weight: fields.weight,
        notes: fields.notes,
    })
}

fn update_request(fields: AnimalUpdateFields) -> Result<UpdateAnimalRequest, CliError> {
    Ok(UpdateAnimalRequest {
        gender: util::parse_opt_enum("gender", fields.gender.as_deref())?,
        status: util::parse_opt_enum("status", fields.status.as_deref())?,
        name: fields.name,
        species: fields.species,
        breed: fields.breed,
        age: fields.age,
        weight: clearable(fields.weight, fields.clear_weight),
        notes: clearable(fields.notes, fields.clear_notes),
    })
}

/// `--clear-*` sends an explicit null; a value sends the value.
fn clearable<T>(value: Option<T>, clear: bool) -> Option<Option<T>> {
    if clear { Some(None) } else { value.map(Some) }
}

fn print_one(animal: &Arc<Animal>, global: &GlobalOpts, painter: Painter) -> Result<(), CliError> {
    let out = output::render_single(
        &global.output,
        animal,
        |a| detail(a, painter),
        |a| a.id.to_string(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    facility: &Facility,
    args: AnimalsArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let painter = Painter::new(global);

    match args.command {
        AnimalsCommand::List {
            status,
            species,
            search,
        } => {
            let mut filters = Vec::new();
            if let Some(status) = status {
                filters.push(AnimalFilter::ByStatus(util::parse_enum("status", &status)?));
            }
            if let Some(species) = species {
                filters.push(AnimalFilter::BySpecies(species));
            }
            if let Some(term) = search {
                filters.push(AnimalFilter::Search(term));
            }

            let all = facility.store().animals_snapshot();
            let shown: Vec<Arc<Animal>> = all
                .iter()
                .filter(|a| filters.iter().all(|f| f.matches(a)))
                .cloned()
                .collect();

            let out = output::render_list(
                &global.output,
                &shown,
                |a| AnimalRow::new(a, painter),
                |a| a.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        AnimalsCommand::Get(IdArg { id }) => {
            let animal = util::require(
                facility.store().animal_by_id(&EntityId::from(id.as_str())),
                "Animal",
                &id,
                "animals list",
            )?;
            print_one(&animal, global, painter)
        }

        AnimalsCommand::Add(fields) => {
            let created = facility.add_animal(&create_request(fields)?).await?;
            output::notice(global, &format!("Animal {} added", created.id));
            print_one(&created, global, painter)
        }

        AnimalsCommand::Update { id, fields } => {
            let updated = facility
                .update_animal(&EntityId::from(id), &update_request(fields)?)
                .await?;
            output::notice(global, &format!("Animal {} updated", updated.id));
            print_one(&updated, global, painter)
        }

        AnimalsCommand::Delete(IdArg { id }) => {
            let id = EntityId::from(id);
            let prompt = format!(
                "Delete animal '{}' ({id}) along with its health, feeding and breeding records?",
                facility.animal_name(&id)
            );
            if !util::confirm(&prompt, "animals delete", global.yes)? {
                return Ok(());
            }

            let cascade = facility.delete_animal(&id).await?;
            output::notice(
                global,
                &format!(
                    "Animal {id} deleted (also removed {} health, {} feeding, {} breeding records)",
                    cascade.health_records, cascade.feeding_tasks, cascade.breeding_records
                ),
            );
            Ok(())
        }
    }
}
