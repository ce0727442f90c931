use crate::models::workout::builtin_catalog;
use crate::models::WorkoutCategory;

/// In-memory workout catalog. The catalog is a single snapshot replaced
/// wholesale; there is no partial-update surface.
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    categories: Vec<WorkoutCategory>,
}

impl CatalogStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the built-in catalog
    pub fn with_builtin() -> Self {
        Self {
            categories: builtin_catalog(),
        }
    }

    /// Read-only view of the current categories and their workouts
    pub fn categories(&self) -> &[WorkoutCategory] {
        &self.categories
    }

    /// Swap the entire catalog atomically. Suppliers keep record ids
    /// unique across the flattened catalog.
    pub fn replace_all(&mut self, categories: Vec<WorkoutCategory>) {
        tracing::debug!("Replacing workout catalog ({} categories)", categories.len());
        self.categories = categories;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FitnessLevel, WorkoutRecord};

    #[test]
    fn builtin_catalog_ids_are_unique() {
        let store = CatalogStore::with_builtin();

        let mut ids: Vec<u32> = store
            .categories()
            .iter()
            .flat_map(|category| category.workouts.iter().map(|workout| workout.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), total);
        assert_eq!(total, 9);
    }

    #[test]
    fn replace_all_swaps_the_snapshot() {
        let mut store = CatalogStore::with_builtin();

        store.replace_all(vec![WorkoutCategory::new(
            "Recovery",
            vec![WorkoutRecord::new(
                10,
                "Foam Rolling",
                15,
                40,
                FitnessLevel::Beginner,
                "Light recovery session",
            )],
        )]);

        assert_eq!(store.categories().len(), 1);
        assert_eq!(store.categories()[0].name, "Recovery");
    }
}
