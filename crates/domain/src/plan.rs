use std::{collections::BTreeSet, slice::Iter};

use chrono::{DateTime, Utc};
use derive_more::Deref;
use uuid::Uuid;

use crate::{
    CreateError, DayOfWeek, DeleteError, Equipment, ExerciseID, FitnessGoal, FitnessLevel,
    MuscleGroup, Property, ReadError, SplitType, TrainingLocation, UpdateError,
};

#[allow(async_fn_in_trait)]
pub trait TrainingPlanService {
    /// Plans of the user, most recently created first.
    async fn get_training_plans(&self, user_id: UserID) -> Result<Vec<TrainingPlan>, ReadError>;
    async fn get_training_plan(&self, id: PlanID) -> Result<TrainingPlan, ReadError>;
    async fn get_active_training_plan(&self, user_id: UserID) -> Result<TrainingPlan, ReadError>;
    /// Generates and stores a new plan, which replaces the currently active plan of the user.
    async fn create_training_plan(
        &self,
        params: &PlanGenerationParams,
    ) -> Result<TrainingPlan, CreateError>;
    async fn activate_training_plan(&self, id: PlanID) -> Result<TrainingPlan, UpdateError>;
    async fn adjust_training_plan(
        &self,
        id: PlanID,
        level: FitnessLevel,
    ) -> Result<TrainingPlan, UpdateError>;
    async fn delete_training_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait TrainingPlanRepository {
    async fn read_training_plans(&self) -> Result<Vec<TrainingPlan>, ReadError>;
    async fn create_training_plan(&self, plan: TrainingPlan) -> Result<TrainingPlan, CreateError>;
    async fn replace_training_plan(
        &self,
        plan: TrainingPlan,
    ) -> Result<TrainingPlan, UpdateError>;
    async fn delete_training_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

/// Input of the plan generator.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanGenerationParams {
    pub user_id: UserID,
    pub goal: FitnessGoal,
    pub level: FitnessLevel,
    pub location: TrainingLocation,
    pub available_equipment: BTreeSet<Equipment>,
    /// Clamped to 2..=6
    pub days_per_week: u32,
    /// Clamped to 30..=90
    pub minutes_per_session: u32,
    pub focus_areas: Vec<MuscleGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingPlan {
    pub id: PlanID,
    pub user_id: UserID,
    pub name: String,
    pub description: String,
    pub goal: FitnessGoal,
    pub level: FitnessLevel,
    pub location: TrainingLocation,
    pub split_type: SplitType,
    pub duration_weeks: u32,
    pub days_per_week: u32,
    pub workouts: Vec<PlannedWorkout>,
    pub is_active: bool,
    pub is_template: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TrainingPlan {
    pub fn workouts_in_week(&self, week_number: u32) -> impl Iterator<Item = &PlannedWorkout> {
        self.workouts
            .iter()
            .filter(move |w| w.week_number == week_number)
    }

    #[must_use]
    pub fn workout(&self, week_number: u32, order: u32) -> Option<&PlannedWorkout> {
        self.workouts_in_week(week_number).find(|w| w.order == order)
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.workouts.iter().map(PlannedWorkout::num_sets).sum()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedWorkout {
    pub id: WorkoutID,
    pub plan_id: PlanID,
    pub day_of_week: DayOfWeek,
    pub week_number: u32,
    pub name: String,
    pub description: String,
    pub focus_areas: Vec<MuscleGroup>,
    pub estimated_duration_minutes: u32,
    pub exercises: Vec<PlannedExercise>,
    pub order: u32,
}

impl PlannedWorkout {
    pub fn main_exercises(&self) -> impl Iterator<Item = &PlannedExercise> {
        self.exercises
            .iter()
            .filter(|e| e.block_role == BlockRole::Main)
    }

    pub fn main_exercises_mut(&mut self) -> impl Iterator<Item = &mut PlannedExercise> {
        self.exercises
            .iter_mut()
            .filter(|e| e.block_role == BlockRole::Main)
    }

    #[must_use]
    pub fn num_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.sets).sum()
    }

    #[must_use]
    pub fn exercise_ids(&self) -> Vec<&ExerciseID> {
        self.exercises.iter().map(|e| &e.exercise_id).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    pub id: PlannedExerciseID,
    pub workout_id: WorkoutID,
    pub exercise_id: ExerciseID,
    pub block_role: BlockRole,
    pub sets: u32,
    pub target: Target,
    pub rest_seconds: u32,
    pub notes: Option<String>,
    pub order: u32,
}

/// Repetitions per set, or the hold time of timed work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Reps(u32),
    /// Seconds
    Duration(u32),
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Reps(reps) => write!(f, "{reps} Wdh."),
            Target::Duration(seconds) if seconds % 60 == 0 => write!(f, "{} min", seconds / 60),
            Target::Duration(seconds) => write!(f, "{seconds} s"),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum BlockRole {
    Warmup = 1,
    Main = 2,
    Cooldown = 3,
}

impl Property for BlockRole {
    fn iter() -> Iter<'static, BlockRole> {
        static ROLES: [BlockRole; 3] = [BlockRole::Warmup, BlockRole::Main, BlockRole::Cooldown];
        ROLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            BlockRole::Warmup => "Aufwärmen",
            BlockRole::Main => "Hauptteil",
            BlockRole::Cooldown => "Abwärmen",
        }
    }
}

codes!(
    BlockRole,
    "block role",
    Warmup => "warmup",
    Main => "main",
    Cooldown => "cooldown",
);

macro_rules! uuid_id {
    ($name: ident) => {
        #[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<u128> for $name {
            fn from(value: u128) -> Self {
                Self(Uuid::from_bytes(value.to_be_bytes()))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

uuid_id!(UserID);
uuid_id!(PlanID);
uuid_id!(WorkoutID);
uuid_id!(PlannedExerciseID);

impl PlanID {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Name-based identifier of a workout of this plan.
    #[must_use]
    pub fn workout_id(&self, week_number: u32, day_index: u32) -> WorkoutID {
        WorkoutID(Uuid::new_v5(
            &self.0,
            format!("workout/{week_number}/{day_index}").as_bytes(),
        ))
    }
}

impl WorkoutID {
    /// Name-based identifier of an exercise of this workout.
    #[must_use]
    pub fn exercise_id(&self, order: u32) -> PlannedExerciseID {
        PlannedExerciseID(Uuid::new_v5(&self.0, format!("exercise/{order}").as_bytes()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    pub(crate) fn planned_exercise(
        exercise_id: &str,
        block_role: BlockRole,
        sets: u32,
        target: Target,
        order: u32,
    ) -> PlannedExercise {
        PlannedExercise {
            id: u128::from(order + 1).into(),
            workout_id: 1.into(),
            exercise_id: exercise_id.into(),
            block_role,
            sets,
            target,
            rest_seconds: 60,
            notes: None,
            order,
        }
    }

    pub(crate) fn planned_workout(
        week_number: u32,
        exercises: Vec<PlannedExercise>,
    ) -> PlannedWorkout {
        PlannedWorkout {
            id: u128::from(week_number).into(),
            plan_id: 1.into(),
            day_of_week: DayOfWeek::Monday,
            week_number,
            name: "Beine".to_string(),
            description: String::new(),
            focus_areas: vec![MuscleGroup::Quadriceps],
            estimated_duration_minutes: 45,
            exercises,
            order: 0,
        }
    }

    fn workout() -> PlannedWorkout {
        planned_workout(
            1,
            vec![
                planned_exercise("jogging", BlockRole::Warmup, 1, Target::Duration(300), 0),
                planned_exercise("squat", BlockRole::Main, 4, Target::Reps(8), 1),
                planned_exercise("lunge", BlockRole::Main, 3, Target::Reps(10), 2),
                planned_exercise("quad-stretch", BlockRole::Cooldown, 1, Target::Duration(30), 3),
            ],
        )
    }

    #[test]
    fn test_planned_workout_main_exercises() {
        assert_eq!(
            workout()
                .main_exercises()
                .map(|e| e.exercise_id.as_str())
                .collect::<Vec<_>>(),
            vec!["squat", "lunge"]
        );
    }

    #[test]
    fn test_planned_workout_main_exercises_mut() {
        let mut workout = workout();

        for exercise in workout.main_exercises_mut() {
            exercise.sets = 2;
        }

        assert_eq!(
            workout.exercises.iter().map(|e| e.sets).collect::<Vec<_>>(),
            vec![1, 2, 2, 1]
        );
    }

    #[test]
    fn test_planned_workout_num_sets() {
        assert_eq!(workout().num_sets(), 9);
    }

    #[test]
    fn test_training_plan_workouts_in_week() {
        let plan = TrainingPlan {
            id: 1.into(),
            user_id: 2.into(),
            name: String::new(),
            description: String::new(),
            goal: FitnessGoal::StayFit,
            level: FitnessLevel::Beginner,
            location: TrainingLocation::Home,
            split_type: SplitType::FullBodyAB,
            duration_weeks: 2,
            days_per_week: 1,
            workouts: vec![workout(), planned_workout(2, vec![])],
            is_active: true,
            is_template: false,
            created_at: DateTime::default(),
            updated_at: DateTime::default(),
        };

        assert_eq!(plan.workouts_in_week(1).count(), 1);
        assert_eq!(plan.workouts_in_week(2).count(), 1);
        assert_eq!(plan.workouts_in_week(3).count(), 0);
        assert_eq!(plan.workout(2, 0).map(|w| w.week_number), Some(2));
        assert_eq!(plan.workout(2, 1), None);
        assert_eq!(plan.num_sets(), 9);
    }

    #[rstest]
    #[case(Target::Reps(12), "12 Wdh.")]
    #[case(Target::Duration(30), "30 s")]
    #[case(Target::Duration(300), "5 min")]
    fn test_target_display(#[case] target: Target, #[case] display: &str) {
        assert_eq!(target.to_string(), display);
    }

    #[test]
    fn test_block_role_codes() {
        for role in BlockRole::iter() {
            assert_eq!(role.code().parse::<BlockRole>(), Ok(*role));
            assert_eq!(BlockRole::try_from(*role as u8), Ok(*role));
        }
    }

    #[test]
    fn test_plan_id_random() {
        assert_ne!(PlanID::random(), PlanID::random());
        assert_ne!(PlanID::random(), PlanID::default());
    }

    #[test]
    fn test_plan_id_workout_id() {
        let plan_id = PlanID::from(7);

        assert_eq!(plan_id.workout_id(1, 0), plan_id.workout_id(1, 0));
        assert_ne!(plan_id.workout_id(1, 0), plan_id.workout_id(1, 1));
        assert_ne!(plan_id.workout_id(1, 0), plan_id.workout_id(2, 0));
        assert_ne!(plan_id.workout_id(1, 0), PlanID::from(8).workout_id(1, 0));
    }

    #[test]
    fn test_workout_id_exercise_id() {
        let workout_id = PlanID::from(7).workout_id(3, 2);
        let ids = (0..20)
            .map(|order| workout_id.exercise_id(order))
            .collect::<HashSet<_>>();

        assert_eq!(ids.len(), 20);
        assert_eq!(workout_id.exercise_id(4), workout_id.exercise_id(4));
    }
}
