use std::{collections::BTreeSet, slice::Iter};

use derive_more::{AsRef, Deref, Display};

use crate::{FitnessLevel, TrainingLocation};

/// Read access to a library of exercises.
///
/// All lookups return entries in catalog order, which keeps exercise selection reproducible.
pub trait ExerciseCatalog {
    fn exercises(&self) -> &[CatalogExercise];

    fn exercise(&self, id: &ExerciseID) -> Option<&CatalogExercise> {
        self.exercises().iter().find(|e| e.id == *id)
    }

    fn exercises_by_muscle(&self, muscle: MuscleGroup) -> Vec<&CatalogExercise> {
        self.exercises()
            .iter()
            .filter(|e| e.trains(muscle))
            .collect()
    }

    fn exercises_for_location(&self, location: TrainingLocation) -> Vec<&CatalogExercise> {
        self.exercises()
            .iter()
            .filter(|e| e.locations.contains(&location))
            .collect()
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Catalog {
    exercises: Vec<CatalogExercise>,
}

impl Catalog {
    #[must_use]
    pub fn new(exercises: Vec<CatalogExercise>) -> Self {
        Self { exercises }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl ExerciseCatalog for Catalog {
    fn exercises(&self) -> &[CatalogExercise] {
        &self.exercises
    }
}

impl<C: ExerciseCatalog> ExerciseCatalog for &C {
    fn exercises(&self) -> &[CatalogExercise] {
        (*self).exercises()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogExercise {
    pub id: ExerciseID,
    pub name: String,
    pub category: Category,
    pub muscles: Vec<(MuscleGroup, Stimulus)>,
    pub equipment: Vec<Equipment>,
    pub difficulty: FitnessLevel,
    pub locations: Vec<TrainingLocation>,
    pub instructions: Vec<String>,
    pub tips: Vec<String>,
    pub default_sets: Option<u32>,
    pub default_reps: Option<u32>,
    pub default_rest_seconds: Option<u32>,
}

impl CatalogExercise {
    #[must_use]
    pub fn trains(&self, muscle: MuscleGroup) -> bool {
        self.muscles.iter().any(|(m, _)| *m == muscle)
    }

    #[must_use]
    pub fn is_primary(&self, muscle: MuscleGroup) -> bool {
        self.muscles
            .iter()
            .any(|(m, s)| *m == muscle && *s == Stimulus::Primary)
    }

    /// Exercises tagged with three or more muscle groups count as compound movements.
    #[must_use]
    pub fn is_compound(&self) -> bool {
        self.muscles.len() >= 3
    }

    /// Every required item must either be `Equipment::None` or part of `available`. An exercise
    /// without any requirement is always usable.
    #[must_use]
    pub fn usable_with(&self, available: &BTreeSet<Equipment>) -> bool {
        self.equipment
            .iter()
            .all(|e| *e == Equipment::None || available.contains(e))
    }

    #[must_use]
    pub fn suits(&self, level: FitnessLevel) -> bool {
        self.difficulty <= level
    }
}

#[derive(AsRef, Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    // Upper body
    Chest = 1,
    Back = 2,
    Shoulders = 3,
    Biceps = 4,
    Triceps = 5,
    Forearms = 6,
    // Core
    Abs = 11,
    Obliques = 12,
    LowerBack = 13,
    // Lower body
    Quadriceps = 21,
    Hamstrings = 22,
    Glutes = 23,
    Calves = 24,
    // Whole body
    FullBody = 31,
    Cardio = 32,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLES: [MuscleGroup; 15] = [
            MuscleGroup::Chest,
            MuscleGroup::Back,
            MuscleGroup::Shoulders,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
            MuscleGroup::Abs,
            MuscleGroup::Obliques,
            MuscleGroup::LowerBack,
            MuscleGroup::Quadriceps,
            MuscleGroup::Hamstrings,
            MuscleGroup::Glutes,
            MuscleGroup::Calves,
            MuscleGroup::FullBody,
            MuscleGroup::Cardio,
        ];
        MUSCLES.iter()
    }

    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Brust",
            MuscleGroup::Back => "Rücken",
            MuscleGroup::Shoulders => "Schultern",
            MuscleGroup::Biceps => "Bizeps",
            MuscleGroup::Triceps => "Trizeps",
            MuscleGroup::Forearms => "Unterarme",
            MuscleGroup::Abs => "Bauch",
            MuscleGroup::Obliques => "Seitliche Bauchmuskeln",
            MuscleGroup::LowerBack => "Unterer Rücken",
            MuscleGroup::Quadriceps => "Oberschenkelvorderseite",
            MuscleGroup::Hamstrings => "Oberschenkelrückseite",
            MuscleGroup::Glutes => "Gesäß",
            MuscleGroup::Calves => "Waden",
            MuscleGroup::FullBody => "Ganzkörper",
            MuscleGroup::Cardio => "Ausdauer",
        }
    }
}

codes!(
    MuscleGroup,
    "muscle group",
    Chest => "chest",
    Back => "back",
    Shoulders => "shoulders",
    Biceps => "biceps",
    Triceps => "triceps",
    Forearms => "forearms",
    Abs => "abs",
    Obliques => "obliques",
    LowerBack => "lower_back",
    Quadriceps => "quadriceps",
    Hamstrings => "hamstrings",
    Glutes => "glutes",
    Calves => "calves",
    FullBody => "full_body",
    Cardio => "cardio",
);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Stimulus {
    Primary,
    Secondary,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Equipment {
    None = 0,
    Barbell = 1,
    Dumbbell = 2,
    Kettlebell = 3,
    ResistanceBand = 4,
    PullUpBar = 5,
    Bench = 6,
    CableMachine = 7,
    SmithMachine = 8,
    LegPress = 9,
    Treadmill = 10,
    Bike = 11,
    RowingMachine = 12,
    Mat = 13,
    FoamRoller = 14,
}

impl Property for Equipment {
    fn iter() -> Iter<'static, Equipment> {
        static EQUIPMENT: [Equipment; 14] = [
            Equipment::Barbell,
            Equipment::Dumbbell,
            Equipment::Kettlebell,
            Equipment::ResistanceBand,
            Equipment::PullUpBar,
            Equipment::Bench,
            Equipment::CableMachine,
            Equipment::SmithMachine,
            Equipment::LegPress,
            Equipment::Treadmill,
            Equipment::Bike,
            Equipment::RowingMachine,
            Equipment::Mat,
            Equipment::FoamRoller,
        ];
        EQUIPMENT.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Equipment::None => "Ohne Geräte",
            Equipment::Barbell => "Langhantel",
            Equipment::Dumbbell => "Kurzhanteln",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::ResistanceBand => "Widerstandsband",
            Equipment::PullUpBar => "Klimmzugstange",
            Equipment::Bench => "Hantelbank",
            Equipment::CableMachine => "Kabelzug",
            Equipment::SmithMachine => "Multipresse",
            Equipment::LegPress => "Beinpresse",
            Equipment::Treadmill => "Laufband",
            Equipment::Bike => "Fahrrad",
            Equipment::RowingMachine => "Rudergerät",
            Equipment::Mat => "Matte",
            Equipment::FoamRoller => "Faszienrolle",
        }
    }
}

codes!(
    Equipment,
    "equipment",
    None => "none",
    Barbell => "barbell",
    Dumbbell => "dumbbell",
    Kettlebell => "kettlebell",
    ResistanceBand => "resistance_band",
    PullUpBar => "pull_up_bar",
    Bench => "bench",
    CableMachine => "cable_machine",
    SmithMachine => "smith_machine",
    LegPress => "leg_press",
    Treadmill => "treadmill",
    Bike => "bike",
    RowingMachine => "rowing_machine",
    Mat => "mat",
    FoamRoller => "foam_roller",
);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Category {
    Strength = 1,
    Cardio = 2,
    Mobility = 3,
    Stretching = 4,
    Warmup = 5,
    Cooldown = 6,
}

impl Category {
    #[must_use]
    pub fn is_stretch(self) -> bool {
        matches!(self, Category::Stretching | Category::Mobility)
    }
}

impl Property for Category {
    fn iter() -> Iter<'static, Category> {
        static CATEGORY: [Category; 6] = [
            Category::Strength,
            Category::Cardio,
            Category::Mobility,
            Category::Stretching,
            Category::Warmup,
            Category::Cooldown,
        ];
        CATEGORY.iter()
    }

    fn name(self) -> &'static str {
        match self {
            Category::Strength => "Kraft",
            Category::Cardio => "Ausdauer",
            Category::Mobility => "Mobilität",
            Category::Stretching => "Dehnung",
            Category::Warmup => "Aufwärmen",
            Category::Cooldown => "Abwärmen",
        }
    }
}

codes!(
    Category,
    "category",
    Strength => "strength",
    Cardio => "cardio",
    Mobility => "mobility",
    Stretching => "stretching",
    Warmup => "warmup",
    Cooldown => "cooldown",
);

#[derive(Default, PartialEq)]
pub struct ExerciseFilter {
    pub name: String,
    pub muscles: BTreeSet<MuscleGroup>,
    pub locations: BTreeSet<TrainingLocation>,
    pub equipment: Option<BTreeSet<Equipment>>,
    pub level: Option<FitnessLevel>,
    pub category: BTreeSet<Category>,
}

impl ExerciseFilter {
    #[must_use]
    pub fn exercises<'a>(&self, catalog: &'a impl ExerciseCatalog) -> Vec<&'a CatalogExercise> {
        catalog
            .exercises()
            .iter()
            .filter(|e| {
                e.name
                    .to_lowercase()
                    .contains(self.name.to_lowercase().trim())
                    && self.muscles.iter().all(|m| e.trains(*m))
                    && (self.locations.is_empty()
                        || self.locations.iter().any(|l| e.locations.contains(l)))
                    && self
                        .equipment
                        .as_ref()
                        .is_none_or(|equipment| e.usable_with(equipment))
                    && self.level.is_none_or(|level| e.suits(level))
                    && (self.category.is_empty() || self.category.contains(&e.category))
            })
            .collect()
    }
}

pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}
