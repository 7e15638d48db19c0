use crate::{FitnessGoal, FitnessLevel};

pub const MIN_SETS: u32 = 2;
pub const MAX_SETS: u32 = 6;
pub const MIN_REST_SECONDS: u32 = 20;

/// Volume prescription for the main exercises of a workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetsAndReps {
    pub sets: u32,
    pub reps_min: u32,
    pub reps_max: u32,
    pub rest_seconds: u32,
}

impl SetsAndReps {
    /// Midpoint of the repetition range, rounding halves up.
    #[must_use]
    pub fn reps(&self) -> u32 {
        (self.reps_min + self.reps_max).div_ceil(2)
    }

    /// Prescription for an exercise. Compound movements get one more set and two fewer
    /// repetitions, bounded by the set maximum and the lower end of the repetition range.
    #[must_use]
    pub fn prescribe(&self, compound: bool) -> (u32, u32) {
        if compound {
            (
                (self.sets + 1).min(MAX_SETS),
                self.reps().saturating_sub(2).max(self.reps_min),
            )
        } else {
            (self.sets, self.reps())
        }
    }

    /// Estimated time needed for all sets of one exercise, assuming 45 seconds of work per set.
    #[must_use]
    pub fn seconds_per_exercise(&self) -> u32 {
        self.sets * (SECONDS_PER_SET + self.rest_seconds)
    }
}

const SECONDS_PER_SET: u32 = 45;

#[must_use]
pub fn sets_and_reps(goal: FitnessGoal, level: FitnessLevel) -> SetsAndReps {
    let (sets, reps_min, reps_max, rest_seconds): (u32, u32, u32, u32) = match goal {
        FitnessGoal::LoseWeight => (3, 12, 15, 45),
        FitnessGoal::BuildMuscle => (4, 8, 12, 75),
        FitnessGoal::GainStrength => (5, 3, 6, 150),
        FitnessGoal::StayFit => (3, 10, 15, 60),
        FitnessGoal::ImproveEndurance => (3, 15, 20, 30),
        FitnessGoal::IncreaseFlexibility => (2, 10, 15, 45),
    };
    let (sets_modifier, rest_modifier): (i32, i32) = match level {
        FitnessLevel::Beginner => (-1, 15),
        FitnessLevel::Intermediate => (0, 0),
        FitnessLevel::Advanced => (1, -10),
        FitnessLevel::Professional => (1, -15),
    };

    SetsAndReps {
        sets: sets.saturating_add_signed(sets_modifier).max(MIN_SETS),
        reps_min,
        reps_max,
        rest_seconds: rest_seconds
            .saturating_add_signed(rest_modifier)
            .max(MIN_REST_SECONDS),
    }
}

/// Plan length in weeks.
#[must_use]
pub fn plan_duration(level: FitnessLevel, goal: FitnessGoal) -> u32 {
    let base: u32 = match level {
        FitnessLevel::Beginner => 8,
        FitnessLevel::Intermediate => 10,
        FitnessLevel::Advanced => 12,
        FitnessLevel::Professional => 16,
    };
    let modifier: i32 = match goal {
        FitnessGoal::LoseWeight | FitnessGoal::GainStrength => 2,
        FitnessGoal::BuildMuscle | FitnessGoal::ImproveEndurance => 0,
        FitnessGoal::StayFit | FitnessGoal::IncreaseFlexibility => -2,
    };

    base.saturating_add_signed(modifier)
}
