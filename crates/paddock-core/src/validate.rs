// ── Form validation gate ──
//
// Local checks run before any create or update request leaves the
// client. The backend only checks for missing keys, so everything
// stricter lives here. Updates apply the same rules to the fields they
// carry.

use crate::error::CoreError;
use crate::requests::{
    CreateAnimalRequest, CreateBreedingRecordRequest, CreateFeedingTaskRequest,
    CreateHealthRecordRequest, CreateInventoryItemRequest, CreateStaffMemberRequest,
    UpdateAnimalRequest, UpdateBreedingRecordRequest, UpdateFeedingTaskRequest,
    UpdateHealthRecordRequest, UpdateInventoryItemRequest, UpdateSettingsRequest,
    UpdateStaffMemberRequest,
};

/// Minimum password length accepted by the login form.
pub const MIN_PASSWORD_LEN: usize = 6;

/// A form that can be checked locally before it is submitted.
pub trait Validate {
    fn validate(&self) -> Result<(), CoreError>;
}

fn require(value: &str, field: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(format!("{field} is required")));
    }
    Ok(())
}

fn require_if_set(value: Option<&String>, field: &str) -> Result<(), CoreError> {
    value.map_or(Ok(()), |v| require(v, field))
}

fn non_negative(value: f64, field: &str) -> Result<(), CoreError> {
    if !value.is_finite() || value < 0.0 {
        return Err(CoreError::validation(format!(
            "{field} must be a non-negative number"
        )));
    }
    Ok(())
}

/// Loose `local@domain.tld` shape check, the same bar a browser form sets.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

impl Validate for CreateAnimalRequest {
    fn validate(&self) -> Result<(), CoreError> {
        require(&self.name, "name")?;
        require(&self.species, "species")?;
        require(&self.breed, "breed")?;
        if let Some(weight) = self.weight {
            non_negative(weight, "weight")?;
        }
        Ok(())
    }
}

impl Validate for CreateHealthRecordRequest {
    fn validate(&self) -> Result<(), CoreError> {
        require(self.animal_id.as_str(), "animalId")?;
        require(&self.description, "description")?;
        require(&self.veterinarian, "veterinarian")?;
        if self.next_due.is_some_and(|due| due < self.date) {
            return Err(CoreError::validation("nextDue cannot be before date"));
        }
        Ok(())
    }
}

impl Validate for CreateFeedingTaskRequest {
    fn validate(&self) -> Result<(), CoreError> {
        require(self.animal_id.as_str(), "animalId")?;
        require(&self.food_type, "foodType")?;
        require(&self.quantity, "quantity")?;
        require(&self.time, "time")
    }
}

impl Validate for CreateBreedingRecordRequest {
    fn validate(&self) -> Result<(), CoreError> {
        require(self.mother_id.as_str(), "motherId")?;
        require(self.father_id.as_str(), "fatherId")?;
        if self.mother_id == self.father_id {
            return Err(CoreError::validation(
                "motherId and fatherId must be different animals",
            ));
        }
        if self.due_date < self.mating_date {
            return Err(CoreError::validation("dueDate cannot be before matingDate"));
        }
        Ok(())
    }
}

impl Validate for CreateInventoryItemRequest {
    fn validate(&self) -> Result<(), CoreError> {
        require(&self.name, "name")?;
        require(&self.unit, "unit")?;
        non_negative(self.quantity, "quantity")?;
        non_negative(self.reorder_level, "reorderLevel")?;
        non_negative(self.cost_per_unit, "costPerUnit")
    }
}

impl Validate for CreateStaffMemberRequest {
    fn validate(&self) -> Result<(), CoreError> {
        require(&self.name, "name")?;
        require(&self.phone, "phone")?;
        if !is_valid_email(&self.email) {
            return Err(CoreError::validation("email is not a valid address"));
        }
        Ok(())
    }
}

// ── Updates ──────────────────────────────────────────────────────────

impl Validate for UpdateAnimalRequest {
    fn validate(&self) -> Result<(), CoreError> {
        require_if_set(self.name.as_ref(), "name")?;
        require_if_set(self.species.as_ref(), "species")?;
        require_if_set(self.breed.as_ref(), "breed")?;
        if let Some(Some(weight)) = self.weight {
            non_negative(weight, "weight")?;
        }
        Ok(())
    }
}

impl Validate for UpdateHealthRecordRequest {
    fn validate(&self) -> Result<(), CoreError> {
        if let Some(animal_id) = &self.animal_id {
            require(animal_id.as_str(), "animalId")?;
        }
        require_if_set(self.description.as_ref(), "description")?;
        require_if_set(self.veterinarian.as_ref(), "veterinarian")?;
        let next_due = self.next_due.flatten();
        if self.date.zip(next_due).is_some_and(|(date, due)| due < date) {
            return Err(CoreError::validation("nextDue cannot be before date"));
        }
        Ok(())
    }
}

impl Validate for UpdateFeedingTaskRequest {
    fn validate(&self) -> Result<(), CoreError> {
        if let Some(animal_id) = &self.animal_id {
            require(animal_id.as_str(), "animalId")?;
        }
        require_if_set(self.food_type.as_ref(), "foodType")?;
        require_if_set(self.quantity.as_ref(), "quantity")?;
        require_if_set(self.time.as_ref(), "time")
    }
}

impl Validate for UpdateBreedingRecordRequest {
    fn validate(&self) -> Result<(), CoreError> {
        if self.mother_id.is_some() && self.mother_id == self.father_id {
            return Err(CoreError::validation(
                "motherId and fatherId must be different animals",
            ));
        }
        if self
            .mating_date
            .zip(self.due_date)
            .is_some_and(|(mating, due)| due < mating)
        {
            return Err(CoreError::validation("dueDate cannot be before matingDate"));
        }
        Ok(())
    }
}

impl Validate for UpdateInventoryItemRequest {
    fn validate(&self) -> Result<(), CoreError> {
        require_if_set(self.name.as_ref(), "name")?;
        require_if_set(self.unit.as_ref(), "unit")?;
        for (value, field) in [
            (self.quantity, "quantity"),
            (self.reorder_level, "reorderLevel"),
            (self.cost_per_unit, "costPerUnit"),
        ] {
            if let Some(value) = value {
                non_negative(value, field)?;
            }
        }
        Ok(())
    }
}

impl Validate for UpdateStaffMemberRequest {
    fn validate(&self) -> Result<(), CoreError> {
        require_if_set(self.name.as_ref(), "name")?;
        require_if_set(self.phone.as_ref(), "phone")?;
        if self.email.as_ref().is_some_and(|e| !is_valid_email(e)) {
            return Err(CoreError::validation("email is not a valid address"));
        }
        Ok(())
    }
}

impl Validate for UpdateSettingsRequest {
    fn validate(&self) -> Result<(), CoreError> {
        require_if_set(self.facility_name.as_ref(), "facilityName")?;
        if self.email.as_ref().is_some_and(|e| !is_valid_email(e)) {
            return Err(CoreError::validation("email is not a valid address"));
        }
        Ok(())
    }
}

// ── Login gate ───────────────────────────────────────────────────────

/// Client-side login form. There is no server-side authentication; a
/// form that validates simply lets the user in.
#[derive(Debug, Clone)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl Validate for LoginForm {
    fn validate(&self) -> Result<(), CoreError> {
        if !is_valid_email(&self.email) {
            return Err(CoreError::validation("Please enter a valid email address"));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(CoreError::validation(format!(
                "Password must be at least {MIN_PASSWORD_LEN} characters"
            )));
        }
        Ok(())
    }
}
