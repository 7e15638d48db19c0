use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use log::debug;

use crate::{
    BlockRole, CatalogExercise, Category, DayOfWeek, Equipment, ExerciseCatalog, ExerciseID,
    FitnessGoal, FitnessLevel, MuscleGroup, PlanGenerationParams, PlanID, PlannedExercise,
    PlannedWorkout, Property, SetsAndReps, SplitDay, Target, TrainingPlan, WorkoutID,
    apply_progressive_overload, clamp_days_per_week, clamp_minutes_per_session, plan_duration,
    recommended_split, select_exercises_for_muscle, sets_and_reps, training_days,
};

pub const WARMUP_MINUTES: u32 = 8;
pub const COOLDOWN_MINUTES: u32 = 5;
pub const MIN_MAIN_EXERCISES: u32 = 3;

const CARDIO_WARMUP_SECONDS: u32 = 300;
const MOBILITY_WARMUP_EXERCISES: usize = 2;
const MOBILITY_WARMUP_REPS: u32 = 10;
const STRETCHED_FOCUS_AREAS: usize = 3;
const STRETCH_SECONDS: u32 = 30;
const GENERAL_COOLDOWN_SECONDS: u32 = 180;
const EXTRA_CANDIDATES: usize = 2;

pub const CARDIO_WARMUP_NOTE: &str = "Leichtes Aufwärmen – Puls langsam steigern";
pub const MOBILITY_WARMUP_NOTE: &str = "Dynamische Mobilisation – kontrolliert ausführen";
pub const COMPOUND_NOTE: &str = "Grundübung – Gewicht wochenweise steigern";
pub const STRETCH_NOTE: &str = "Dehnung halten – ruhig atmen";
pub const GENERAL_COOLDOWN_NOTE: &str = "Lockeres Auslaufen – Puls senken";

/// Turns generation parameters into periodized training plans, selecting exercises from the
/// given catalog.
///
/// Generation is deterministic for a given catalog, plan ID and time.
pub struct PlanGenerator<'a, C: ExerciseCatalog> {
    catalog: &'a C,
}

impl<'a, C: ExerciseCatalog> PlanGenerator<'a, C> {
    pub fn new(catalog: &'a C) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn generate_training_plan(&self, params: &PlanGenerationParams) -> TrainingPlan {
        self.generate_training_plan_at(params, PlanID::random(), Utc::now())
    }

    #[must_use]
    pub fn generate_training_plan_at(
        &self,
        params: &PlanGenerationParams,
        plan_id: PlanID,
        now: DateTime<Utc>,
    ) -> TrainingPlan {
        let params = PlanGenerationParams {
            days_per_week: clamp_days_per_week(params.days_per_week),
            minutes_per_session: clamp_minutes_per_session(params.minutes_per_session),
            ..params.clone()
        };
        let split_type = recommended_split(params.days_per_week, params.goal);
        let template = split_type.template();
        let duration_weeks = plan_duration(params.level, params.goal);

        debug!(
            "generating {} week plan {plan_id} with split {} for {} days per week",
            duration_weeks,
            split_type.code(),
            params.days_per_week
        );

        let mut workouts = vec![];
        for week_number in 1..=duration_weeks {
            for (day_index, day_of_week) in (0..).zip(training_days(params.days_per_week)) {
                let mut workout = self.build_workout(
                    plan_id,
                    *day_of_week,
                    week_number,
                    template.day(day_index),
                    day_index,
                    &params,
                );
                if week_number > 1 {
                    apply_progressive_overload(&mut workout, week_number, params.level);
                }
                workouts.push(workout);
            }
        }

        TrainingPlan {
            id: plan_id,
            user_id: params.user_id,
            name: format!("{} – {}", goal_title(params.goal), template.name),
            description: format!(
                "Individueller Trainingsplan für {}: {}-Split mit {} Trainingstagen pro Woche. \
                 Ziel: {}. Basierend auf wissenschaftlichen Trainingsprinzipien mit progressiver \
                 Belastungssteigerung.",
                level_audience(params.level),
                template.name,
                params.days_per_week,
                goal_phrase(params.goal),
            ),
            goal: params.goal,
            level: params.level,
            location: params.location,
            split_type,
            duration_weeks,
            days_per_week: params.days_per_week,
            workouts,
            is_active: true,
            is_template: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Builds the workout of one training day, consisting of a warm-up, the main block and a
    /// cool-down. Expects the session length to be clamped already.
    ///
    /// Muscle groups without a matching exercise are skipped, so the main block may contain
    /// fewer exercises than the session allows.
    #[must_use]
    pub fn build_workout(
        &self,
        plan_id: PlanID,
        day_of_week: DayOfWeek,
        week_number: u32,
        split_day: &SplitDay,
        day_index: u32,
        params: &PlanGenerationParams,
    ) -> PlannedWorkout {
        let focus_areas = prioritize_focus_areas(split_day.focus_areas, &params.focus_areas);
        let policy = sets_and_reps(params.goal, params.level);
        let max_exercises = main_exercise_budget(split_day, params.minutes_per_session, &policy);

        let mut workout = WorkoutBuilder::new(plan_id.workout_id(week_number, day_index));

        self.add_warmup(&mut workout, params);
        self.add_main_block(&mut workout, &focus_areas, max_exercises, &policy, params);
        self.add_cooldown(&mut workout, &focus_areas, params);

        PlannedWorkout {
            id: workout.id,
            plan_id,
            day_of_week,
            week_number,
            name: split_day.name.to_string(),
            description: format!(
                "{}: Fokus auf {} – Ziel: {}.",
                split_day.name,
                split_day
                    .focus_areas
                    .iter()
                    .take(3)
                    .map(|m| muscle_in_sentence(*m))
                    .collect::<Vec<_>>()
                    .join(", "),
                goal_description(params.goal)
            ),
            focus_areas,
            estimated_duration_minutes: params.minutes_per_session,
            exercises: workout.exercises,
            order: day_index,
        }
    }

    /// Recomputes the volume of all main exercises for another level.
    ///
    /// Progression and deload adjustments of later weeks are replaced by the base prescription
    /// of the new level. Warm-up and cool-down exercises are kept unchanged.
    #[must_use]
    pub fn adjust_plan_difficulty(&self, plan: &TrainingPlan, level: FitnessLevel) -> TrainingPlan {
        self.adjust_plan_difficulty_at(plan, level, Utc::now())
    }

    #[must_use]
    pub fn adjust_plan_difficulty_at(
        &self,
        plan: &TrainingPlan,
        level: FitnessLevel,
        now: DateTime<Utc>,
    ) -> TrainingPlan {
        let policy = sets_and_reps(plan.goal, level);
        let mut adjusted = plan.clone();

        debug!(
            "adjusting plan {} from {} to {}",
            plan.id,
            plan.level.code(),
            level.code()
        );

        for workout in &mut adjusted.workouts {
            for exercise in workout.main_exercises_mut() {
                let compound = self
                    .catalog
                    .exercise(&exercise.exercise_id)
                    .is_some_and(CatalogExercise::is_compound);
                let (sets, reps) = policy.prescribe(compound);
                exercise.sets = sets;
                exercise.rest_seconds = policy.rest_seconds;
                if let Target::Reps(_) = exercise.target {
                    exercise.target = Target::Reps(reps);
                }
            }
        }

        adjusted.level = level;
        adjusted.updated_at = now;
        adjusted.description = format!(
            "Angepasster Trainingsplan für {}. {}",
            level_audience(level),
            plan.description
        );
        adjusted
    }

    fn add_warmup(&self, workout: &mut WorkoutBuilder, params: &PlanGenerationParams) {
        if let Some(exercise) = self
            .candidates(MuscleGroup::Cardio, &params.available_equipment, params)
            .into_iter()
            .filter(|e| matches!(e.category, Category::Cardio | Category::Warmup))
            .find(|e| !workout.contains(&e.id))
        {
            workout.push(
                exercise,
                BlockRole::Warmup,
                1,
                Target::Duration(CARDIO_WARMUP_SECONDS),
                0,
                Some(CARDIO_WARMUP_NOTE),
            );
        }

        let mobility = self
            .candidates(MuscleGroup::FullBody, &params.available_equipment, params)
            .into_iter()
            .filter(|e| matches!(e.category, Category::Mobility | Category::Warmup))
            .filter(|e| !workout.contains(&e.id))
            .take(MOBILITY_WARMUP_EXERCISES)
            .collect::<Vec<_>>();
        for exercise in mobility {
            workout.push(
                exercise,
                BlockRole::Warmup,
                1,
                Target::Reps(MOBILITY_WARMUP_REPS),
                0,
                Some(MOBILITY_WARMUP_NOTE),
            );
        }
    }

    fn add_main_block(
        &self,
        workout: &mut WorkoutBuilder,
        focus_areas: &[MuscleGroup],
        max_exercises: usize,
        policy: &SetsAndReps,
        params: &PlanGenerationParams,
    ) {
        let per_area = (max_exercises / focus_areas.len().max(1)).max(1);
        let mut added = 0;

        for muscle in focus_areas {
            if added >= max_exercises {
                break;
            }

            let count = per_area.min(max_exercises - added);
            let candidates = self
                .candidates(*muscle, &params.available_equipment, params)
                .into_iter()
                .take(count + EXTRA_CANDIDATES)
                .collect::<Vec<_>>();

            if candidates.is_empty() {
                debug!(
                    "no exercises for {} at {} with level {}",
                    muscle.code(),
                    params.location.code(),
                    params.level.code()
                );
            }

            for exercise in candidates {
                if added >= max_exercises {
                    break;
                }
                if workout.contains(&exercise.id) {
                    continue;
                }

                let compound = exercise.is_compound();
                let (sets, reps) = policy.prescribe(compound);
                workout.push(
                    exercise,
                    BlockRole::Main,
                    sets,
                    Target::Reps(reps),
                    policy.rest_seconds,
                    compound.then_some(COMPOUND_NOTE),
                );
                added += 1;
            }
        }

        if added < max_exercises {
            debug!(
                "main block of workout {} has {added} of {max_exercises} exercises",
                workout.id
            );
        }
    }

    fn add_cooldown(
        &self,
        workout: &mut WorkoutBuilder,
        focus_areas: &[MuscleGroup],
        params: &PlanGenerationParams,
    ) {
        let mut equipment = params.available_equipment.clone();
        equipment.insert(Equipment::Mat);

        for muscle in focus_areas.iter().take(STRETCHED_FOCUS_AREAS) {
            if let Some(exercise) = self
                .candidates(*muscle, &equipment, params)
                .into_iter()
                .filter(|e| e.category.is_stretch())
                .find(|e| !workout.contains(&e.id))
            {
                workout.push(
                    exercise,
                    BlockRole::Cooldown,
                    1,
                    Target::Duration(STRETCH_SECONDS),
                    0,
                    Some(STRETCH_NOTE),
                );
            }
        }

        if let Some(exercise) = self
            .candidates(MuscleGroup::FullBody, &params.available_equipment, params)
            .into_iter()
            .filter(|e| e.category == Category::Cooldown)
            .find(|e| !workout.contains(&e.id))
        {
            workout.push(
                exercise,
                BlockRole::Cooldown,
                1,
                Target::Duration(GENERAL_COOLDOWN_SECONDS),
                0,
                Some(GENERAL_COOLDOWN_NOTE),
            );
        }
    }

    fn candidates(
        &self,
        muscle: MuscleGroup,
        equipment: &BTreeSet<Equipment>,
        params: &PlanGenerationParams,
    ) -> Vec<&'a CatalogExercise> {
        select_exercises_for_muscle(
            self.catalog,
            muscle,
            params.location,
            equipment,
            params.level,
            usize::MAX,
        )
    }
}

/// Moves the user's preferred muscle groups to the front, keeping the relative order otherwise.
/// The order is unchanged if none of the preferred muscle groups is trained on this day.
#[must_use]
pub fn prioritize_focus_areas(
    focus_areas: &[MuscleGroup],
    preferred: &[MuscleGroup],
) -> Vec<MuscleGroup> {
    let mut result = focus_areas.to_vec();
    if focus_areas.iter().any(|m| preferred.contains(m)) {
        result.sort_by_key(|m| !preferred.contains(m));
    }
    result
}

/// Number of main exercises fitting into a session after warm-up and cool-down, bounded by the
/// exercise count of the split day and a minimum of three.
#[must_use]
pub fn main_exercise_budget(
    split_day: &SplitDay,
    minutes_per_session: u32,
    policy: &SetsAndReps,
) -> usize {
    let main_seconds = minutes_per_session.saturating_sub(WARMUP_MINUTES + COOLDOWN_MINUTES) * 60;
    let fitting = main_seconds / policy.seconds_per_exercise().max(1);
    split_day
        .exercise_count
        .min(fitting)
        .max(MIN_MAIN_EXERCISES) as usize
}

struct WorkoutBuilder {
    id: WorkoutID,
    exercises: Vec<PlannedExercise>,
    used: BTreeSet<ExerciseID>,
}

impl WorkoutBuilder {
    fn new(id: WorkoutID) -> Self {
        Self {
            id,
            exercises: vec![],
            used: BTreeSet::new(),
        }
    }

    fn contains(&self, id: &ExerciseID) -> bool {
        self.used.contains(id)
    }

    fn push(
        &mut self,
        exercise: &CatalogExercise,
        block_role: BlockRole,
        sets: u32,
        target: Target,
        rest_seconds: u32,
        notes: Option<&str>,
    ) {
        let order = u32::try_from(self.exercises.len()).unwrap_or(u32::MAX);
        self.used.insert(exercise.id.clone());
        self.exercises.push(PlannedExercise {
            id: self.id.exercise_id(order),
            workout_id: self.id,
            exercise_id: exercise.id.clone(),
            block_role,
            sets,
            target,
            rest_seconds,
            notes: notes.map(str::to_string),
            order,
        });
    }
}

fn goal_title(goal: FitnessGoal) -> &'static str {
    match goal {
        FitnessGoal::LoseWeight => "Fettverbrennung",
        FitnessGoal::BuildMuscle => "Muskelaufbau",
        FitnessGoal::GainStrength => "Kraftaufbau",
        FitnessGoal::StayFit => "Fitness & Gesundheit",
        FitnessGoal::ImproveEndurance => "Ausdauer",
        FitnessGoal::IncreaseFlexibility => "Beweglichkeit",
    }
}

fn goal_phrase(goal: FitnessGoal) -> &'static str {
    match goal {
        FitnessGoal::LoseWeight => "Fett zu verlieren und die Muskelmasse zu erhalten",
        FitnessGoal::BuildMuscle => "Muskelmasse aufzubauen und Hypertrophie zu maximieren",
        FitnessGoal::GainStrength => "die Maximalkraft systematisch zu steigern",
        FitnessGoal::StayFit => "die allgemeine Fitness und Gesundheit zu verbessern",
        FitnessGoal::ImproveEndurance => "die Ausdauer und kardiovaskuläre Leistung zu steigern",
        FitnessGoal::IncreaseFlexibility => "die Beweglichkeit und Mobilität zu verbessern",
    }
}

fn goal_description(goal: FitnessGoal) -> &'static str {
    match goal {
        FitnessGoal::LoseWeight => "Kalorienverbrennung und Muskelerhalt",
        FitnessGoal::BuildMuscle => "Muskelaufbau und Hypertrophie",
        FitnessGoal::GainStrength => "Maximalkraft und neuronale Anpassung",
        FitnessGoal::StayFit => "Allgemeine Fitness und Gesundheit",
        FitnessGoal::ImproveEndurance => "Ausdauer und kardiovaskuläre Fitness",
        FitnessGoal::IncreaseFlexibility => "Beweglichkeit und Mobilität",
    }
}

fn level_audience(level: FitnessLevel) -> &'static str {
    match level {
        FitnessLevel::Beginner => "Einsteiger",
        FitnessLevel::Intermediate => "Fortgeschrittene",
        FitnessLevel::Advanced => "Erfahrene",
        FitnessLevel::Professional => "Profis",
    }
}

fn muscle_in_sentence(muscle: MuscleGroup) -> &'static str {
    match muscle {
        MuscleGroup::Obliques => "seitliche Bauchmuskeln",
        MuscleGroup::LowerBack => "unterer Rücken",
        _ => muscle.name(),
    }
}
