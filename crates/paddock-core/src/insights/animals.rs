// ── Animal registry aggregates ──

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::model::{Animal, AnimalStatus};

pub fn count_by_status(animals: &[Arc<Animal>]) -> BTreeMap<AnimalStatus, usize> {
    let mut counts = BTreeMap::new();
    for animal in animals {
        *counts.entry(animal.status).or_insert(0) += 1;
    }
    counts
}

/// Species counts, most common first; ties break alphabetically.
pub fn count_by_species(animals: &[Arc<Animal>]) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for animal in animals {
        *counts.entry(animal.species.as_str()).or_insert(0) += 1;
    }
    let mut ranked: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(species, n)| (species.to_owned(), n))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked
}

/// Animals under care or in quarantine.
pub fn needing_attention(animals: &[Arc<Animal>]) -> usize {
    animals.iter().filter(|a| a.status.needs_attention()).count()
}

#[allow(clippy::cast_precision_loss)]
pub fn average_age(animals: &[Arc<Animal>]) -> Option<f64> {
    if animals.is_empty() {
        return None;
    }
    let total: u64 = animals.iter().map(|a| u64::from(a.age)).sum();
    Some(total as f64 / animals.len() as f64)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::insights::fixtures::animal;

    #[test]
    fn species_ranked_by_count() {
        let animals = vec![
            animal("A001", "Dog", AnimalStatus::Healthy),
            animal("A002", "Cow", AnimalStatus::Breeding),
            animal("A003", "Dog", AnimalStatus::UnderCare),
            animal("A004", "Cat", AnimalStatus::Quarantine),
        ];

        assert_eq!(
            count_by_species(&animals),
            vec![("Dog".to_owned(), 2), ("Cat".to_owned(), 1), ("Cow".to_owned(), 1)]
        );
        assert_eq!(needing_attention(&animals), 2);
        assert_eq!(count_by_status(&animals)[&AnimalStatus::Healthy], 1);
        assert_eq!(average_age(&animals), Some(2.0));
        assert_eq!(average_age(&[]), None);
    }
}
