use std::collections::BTreeSet;

use crate::{
    CatalogExercise, Equipment, ExerciseCatalog, FitnessLevel, MuscleGroup, TrainingLocation,
};

/// Ranks the exercises of a location that train a muscle and are usable with the available
/// equipment at the given level. Both sets come from the catalog lookups and are joined by id.
///
/// Exercises targeting the muscle as primary mover come first, followed by those closest to
/// the user's level. The sort is stable, so ties keep their catalog order.
#[must_use]
pub fn select_exercises_for_muscle<'a>(
    catalog: &'a impl ExerciseCatalog,
    muscle: MuscleGroup,
    location: TrainingLocation,
    available_equipment: &BTreeSet<Equipment>,
    level: FitnessLevel,
    count: usize,
) -> Vec<&'a CatalogExercise> {
    let by_muscle = catalog
        .exercises_by_muscle(muscle)
        .into_iter()
        .map(|e| &e.id)
        .collect::<BTreeSet<_>>();
    let mut candidates = catalog
        .exercises_for_location(location)
        .into_iter()
        .filter(|e| by_muscle.contains(&e.id))
        .filter(|e| e.usable_with(available_equipment))
        .filter(|e| e.suits(level))
        .collect::<Vec<_>>();

    candidates.sort_by_key(|e| (!e.is_primary(muscle), e.difficulty.distance(level)));
    candidates.truncate(count);
    candidates
}
