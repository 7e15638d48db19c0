use std::slice::Iter;

use crate::Property;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum FitnessGoal {
    LoseWeight = 1,
    BuildMuscle = 2,
    StayFit = 3,
    ImproveEndurance = 4,
    IncreaseFlexibility = 5,
    GainStrength = 6,
}

impl Property for FitnessGoal {
    fn iter() -> Iter<'static, FitnessGoal> {
        static GOALS: [FitnessGoal; 6] = [
            FitnessGoal::LoseWeight,
            FitnessGoal::BuildMuscle,
            FitnessGoal::StayFit,
            FitnessGoal::ImproveEndurance,
            FitnessGoal::IncreaseFlexibility,
            FitnessGoal::GainStrength,
        ];
        GOALS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FitnessGoal::LoseWeight => "Abnehmen",
            FitnessGoal::BuildMuscle => "Muskelaufbau",
            FitnessGoal::StayFit => "Fit bleiben",
            FitnessGoal::ImproveEndurance => "Ausdauer verbessern",
            FitnessGoal::IncreaseFlexibility => "Beweglichkeit",
            FitnessGoal::GainStrength => "Kraft steigern",
        }
    }
}

codes!(
    FitnessGoal,
    "fitness goal",
    LoseWeight => "lose_weight",
    BuildMuscle => "build_muscle",
    StayFit => "stay_fit",
    ImproveEndurance => "improve_endurance",
    IncreaseFlexibility => "increase_flexibility",
    GainStrength => "gain_strength",
);

/// Experience of a user, and the difficulty tier of an exercise.
///
/// The variants are ordered from least to most experienced.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum FitnessLevel {
    Beginner = 1,
    Intermediate = 2,
    Advanced = 3,
    Professional = 4,
}

impl FitnessLevel {
    /// Number of tiers between two levels.
    #[must_use]
    pub fn distance(self, other: FitnessLevel) -> u8 {
        (self as u8).abs_diff(other as u8)
    }
}

impl Property for FitnessLevel {
    fn iter() -> Iter<'static, FitnessLevel> {
        static LEVELS: [FitnessLevel; 4] = [
            FitnessLevel::Beginner,
            FitnessLevel::Intermediate,
            FitnessLevel::Advanced,
            FitnessLevel::Professional,
        ];
        LEVELS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            FitnessLevel::Beginner => "Anfänger",
            FitnessLevel::Intermediate => "Fortgeschritten",
            FitnessLevel::Advanced => "Erfahren",
            FitnessLevel::Professional => "Profi",
        }
    }
}

codes!(
    FitnessLevel,
    "fitness level",
    Beginner => "beginner",
    Intermediate => "intermediate",
    Advanced => "advanced",
    Professional => "professional",
);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum TrainingLocation {
    Gym = 1,
    Home = 2,
    Outdoor = 3,
}

impl Property for TrainingLocation {
    fn iter() -> Iter<'static, TrainingLocation> {
        static LOCATIONS: [TrainingLocation; 3] = [
            TrainingLocation::Gym,
            TrainingLocation::Home,
            TrainingLocation::Outdoor,
        ];
        LOCATIONS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            TrainingLocation::Gym => "Fitnessstudio",
            TrainingLocation::Home => "Zuhause",
            TrainingLocation::Outdoor => "Draußen",
        }
    }
}

codes!(
    TrainingLocation,
    "training location",
    Gym => "gym",
    Home => "home",
    Outdoor => "outdoor",
);

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum DayOfWeek {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Property for DayOfWeek {
    fn iter() -> Iter<'static, DayOfWeek> {
        static DAYS: [DayOfWeek; 7] = [
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
            DayOfWeek::Sunday,
        ];
        DAYS.iter()
    }

    fn name(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Montag",
            DayOfWeek::Tuesday => "Dienstag",
            DayOfWeek::Wednesday => "Mittwoch",
            DayOfWeek::Thursday => "Donnerstag",
            DayOfWeek::Friday => "Freitag",
            DayOfWeek::Saturday => "Samstag",
            DayOfWeek::Sunday => "Sonntag",
        }
    }
}

codes!(
    DayOfWeek,
    "day of week",
    Monday => "monday",
    Tuesday => "tuesday",
    Wednesday => "wednesday",
    Thursday => "thursday",
    Friday => "friday",
    Saturday => "saturday",
    Sunday => "sunday",
);
