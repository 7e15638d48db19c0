use crate::{FitnessLevel, MAX_SETS, MIN_SETS, PlannedWorkout, Target};

pub const MAX_REPS: u32 = 20;
pub const MIN_DELOAD_REPS: u32 = 3;
pub const DELOAD_NOTE: &str = "Deload-Woche: reduziertes Volumen";

#[must_use]
pub fn is_deload_week(week_number: u32) -> bool {
    week_number % 4 == 0
}

#[must_use]
pub fn is_set_increase_week(week_number: u32, level: FitnessLevel) -> bool {
    level >= FitnessLevel::Advanced && week_number > 3 && week_number % 3 == 0
}

/// Adjusts the main exercises of a workout to the training age in the given week.
///
/// Repetitions grow by one every four weeks up to a maximum of 20. Advanced and professional
/// users get an additional set every third week from week 6 on. Every fourth week is a deload
/// week with about 40 % less volume. Set increase and deload are applied in this order, so a
/// week that is both ends up with the reduced volume.
pub fn apply_progressive_overload(
    workout: &mut PlannedWorkout,
    week_number: u32,
    level: FitnessLevel,
) {
    let extra_reps = week_number.saturating_sub(1) / 4;

    for exercise in workout.main_exercises_mut() {
        if let Target::Reps(reps) = exercise.target {
            exercise.target = Target::Reps((reps + extra_reps).min(MAX_REPS));
        }

        if is_set_increase_week(week_number, level) {
            exercise.sets = (exercise.sets + 1).min(MAX_SETS);
        }

        if is_deload_week(week_number) {
            exercise.sets = (exercise.sets * 3).div_ceil(5).max(MIN_SETS);
            if let Target::Reps(reps) = exercise.target {
                exercise.target = Target::Reps(reps.saturating_sub(2).max(MIN_DELOAD_REPS));
            }
            exercise.notes = Some(match exercise.notes.take() {
                Some(notes) => format!("{notes} ({DELOAD_NOTE})"),
                None => DELOAD_NOTE.to_string(),
            });
        }
    }
}
