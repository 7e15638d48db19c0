use std::slice::Iter;

use crate::{DayOfWeek, FitnessGoal, MuscleGroup, Property};

pub const MIN_DAYS_PER_WEEK: u32 = 2;
pub const MAX_DAYS_PER_WEEK: u32 = 6;
pub const MIN_MINUTES_PER_SESSION: u32 = 30;
pub const MAX_MINUTES_PER_SESSION: u32 = 90;

#[must_use]
pub fn clamp_days_per_week(days_per_week: u32) -> u32 {
    days_per_week.clamp(MIN_DAYS_PER_WEEK, MAX_DAYS_PER_WEEK)
}

#[must_use]
pub fn clamp_minutes_per_session(minutes_per_session: u32) -> u32 {
    minutes_per_session.clamp(MIN_MINUTES_PER_SESSION, MAX_MINUTES_PER_SESSION)
}

/// Picks the split for a weekly schedule. Out-of-range day counts are clamped.
#[must_use]
pub fn recommended_split(days_per_week: u32, goal: FitnessGoal) -> SplitType {
    match (clamp_days_per_week(days_per_week), goal) {
        (3, FitnessGoal::BuildMuscle | FitnessGoal::GainStrength) => SplitType::PushPullLegs,
        (3, _) => SplitType::FullBodyABC,
        (
            4,
            FitnessGoal::LoseWeight | FitnessGoal::BuildMuscle | FitnessGoal::GainStrength,
        ) => SplitType::UpperLower,
        (4, _) => SplitType::PplFullBody,
        (5, FitnessGoal::BuildMuscle) => SplitType::BroSplit,
        (5, _) => SplitType::PplUpperLower,
        (6, _) => SplitType::PplX2,
        _ => SplitType::FullBodyAB,
    }
}

/// Fixed distribution of training days over the week. Out-of-range day counts are clamped.
#[must_use]
pub fn training_days(days_per_week: u32) -> &'static [DayOfWeek] {
    match clamp_days_per_week(days_per_week) {
        2 => &[DayOfWeek::Monday, DayOfWeek::Thursday],
        3 => &[DayOfWeek::Monday, DayOfWeek::Wednesday, DayOfWeek::Friday],
        4 => &[
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
        ],
        5 => &[
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
        ],
        _ => &[
            DayOfWeek::Monday,
            DayOfWeek::Tuesday,
            DayOfWeek::Wednesday,
            DayOfWeek::Thursday,
            DayOfWeek::Friday,
            DayOfWeek::Saturday,
        ],
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum SplitType {
    FullBodyAB = 1,
    FullBodyABC = 2,
    PushPullLegs = 3,
    UpperLower = 4,
    PplFullBody = 5,
    PplUpperLower = 6,
    BroSplit = 7,
    PplX2 = 8,
}

impl SplitType {
    #[must_use]
    pub fn template(self) -> &'static SplitTemplate {
        match self {
            SplitType::FullBodyAB => &FULL_BODY_AB,
            SplitType::FullBodyABC => &FULL_BODY_ABC,
            SplitType::PushPullLegs => &PUSH_PULL_LEGS,
            SplitType::UpperLower => &UPPER_LOWER,
            SplitType::PplFullBody => &PPL_FULL_BODY,
            SplitType::PplUpperLower => &PPL_UPPER_LOWER,
            SplitType::BroSplit => &BRO_SPLIT,
            SplitType::PplX2 => &PPL_X2,
        }
    }
}

impl Property for SplitType {
    fn iter() -> Iter<'static, SplitType> {
        static SPLITS: [SplitType; 8] = [
            SplitType::FullBodyAB,
            SplitType::FullBodyABC,
            SplitType::PushPullLegs,
            SplitType::UpperLower,
            SplitType::PplFullBody,
            SplitType::PplUpperLower,
            SplitType::BroSplit,
            SplitType::PplX2,
        ];
        SPLITS.iter()
    }

    fn name(self) -> &'static str {
        self.template().name
    }
}

codes!(
    SplitType,
    "split type",
    FullBodyAB => "full_body_ab",
    FullBodyABC => "full_body_abc",
    PushPullLegs => "push_pull_legs",
    UpperLower => "upper_lower",
    PplFullBody => "ppl_full_body",
    PplUpperLower => "ppl_upper_lower",
    BroSplit => "bro_split",
    PplX2 => "ppl_x2",
);

#[derive(Debug, PartialEq)]
pub struct SplitTemplate {
    pub split_type: SplitType,
    pub name: &'static str,
    pub description: &'static str,
    pub days: &'static [SplitDay],
}

#[derive(Debug, PartialEq)]
pub struct SplitDay {
    pub name: &'static str,
    pub focus_areas: &'static [MuscleGroup],
    pub exercise_count: u32,
}

impl SplitTemplate {
    /// The template day for a training day of the week, cycling through the template if there
    /// are more training days than template days.
    #[must_use]
    pub fn day(&self, day_index: u32) -> &SplitDay {
        &self.days[day_index as usize % self.days.len()]
    }
}

const PUSH: &[MuscleGroup] = &[
    MuscleGroup::Chest,
    MuscleGroup::Shoulders,
    MuscleGroup::Triceps,
];
const PULL: &[MuscleGroup] = &[
    MuscleGroup::Back,
    MuscleGroup::Biceps,
    MuscleGroup::Forearms,
];
const LEGS: &[MuscleGroup] = &[
    MuscleGroup::Quadriceps,
    MuscleGroup::Hamstrings,
    MuscleGroup::Glutes,
    MuscleGroup::Calves,
];
const UPPER: &[MuscleGroup] = &[
    MuscleGroup::Chest,
    MuscleGroup::Back,
    MuscleGroup::Shoulders,
    MuscleGroup::Biceps,
    MuscleGroup::Triceps,
];
const LOWER: &[MuscleGroup] = &[
    MuscleGroup::Quadriceps,
    MuscleGroup::Hamstrings,
    MuscleGroup::Glutes,
    MuscleGroup::Calves,
    MuscleGroup::Abs,
];
const LOWER_AND_CORE: &[MuscleGroup] = &[
    MuscleGroup::Quadriceps,
    MuscleGroup::Hamstrings,
    MuscleGroup::Glutes,
    MuscleGroup::Calves,
    MuscleGroup::Abs,
    MuscleGroup::Obliques,
];

static FULL_BODY_AB: SplitTemplate = SplitTemplate {
    split_type: SplitType::FullBodyAB,
    name: "Ganzkörper A/B",
    description: "Zwei abwechselnde Ganzkörpereinheiten mit unterschiedlichen Übungen",
    days: &[
        SplitDay {
            name: "Ganzkörper A",
            focus_areas: &[
                MuscleGroup::Chest,
                MuscleGroup::Back,
                MuscleGroup::Quadriceps,
                MuscleGroup::Shoulders,
                MuscleGroup::Abs,
            ],
            exercise_count: 6,
        },
        SplitDay {
            name: "Ganzkörper B",
            focus_areas: &[
                MuscleGroup::Back,
                MuscleGroup::Chest,
                MuscleGroup::Hamstrings,
                MuscleGroup::Glutes,
                MuscleGroup::Biceps,
                MuscleGroup::Triceps,
            ],
            exercise_count: 6,
        },
    ],
};

static FULL_BODY_ABC: SplitTemplate = SplitTemplate {
    split_type: SplitType::FullBodyABC,
    name: "Ganzkörper A/B/C",
    description: "Drei verschiedene Ganzkörpereinheiten für ausgewogenes Training",
    days: &[
        SplitDay {
            name: "Ganzkörper A – Drücken-Fokus",
            focus_areas: &[
                MuscleGroup::Chest,
                MuscleGroup::Shoulders,
                MuscleGroup::Triceps,
                MuscleGroup::Quadriceps,
                MuscleGroup::Abs,
            ],
            exercise_count: 6,
        },
        SplitDay {
            name: "Ganzkörper B – Ziehen-Fokus",
            focus_areas: &[
                MuscleGroup::Back,
                MuscleGroup::Biceps,
                MuscleGroup::Hamstrings,
                MuscleGroup::Glutes,
                MuscleGroup::LowerBack,
            ],
            exercise_count: 6,
        },
        SplitDay {
            name: "Ganzkörper C – Beine & Core",
            focus_areas: LOWER_AND_CORE,
            exercise_count: 6,
        },
    ],
};

static PUSH_PULL_LEGS: SplitTemplate = SplitTemplate {
    split_type: SplitType::PushPullLegs,
    name: "Push/Pull/Beine",
    description: "Klassischer Dreier-Split: Drückübungen, Zugübungen und Beine",
    days: &[
        SplitDay {
            name: "Drücken (Push)",
            focus_areas: PUSH,
            exercise_count: 6,
        },
        SplitDay {
            name: "Ziehen (Pull)",
            focus_areas: PULL,
            exercise_count: 6,
        },
        SplitDay {
            name: "Beine",
            focus_areas: LEGS,
            exercise_count: 6,
        },
    ],
};

static UPPER_LOWER: SplitTemplate = SplitTemplate {
    split_type: SplitType::UpperLower,
    name: "Oberkörper/Unterkörper",
    description: "Vierer-Split: abwechselnd Ober- und Unterkörper",
    days: &[
        SplitDay {
            name: "Oberkörper A – Kraft",
            focus_areas: UPPER,
            exercise_count: 7,
        },
        SplitDay {
            name: "Unterkörper A – Kraft",
            focus_areas: LOWER,
            exercise_count: 6,
        },
        SplitDay {
            name: "Oberkörper B – Hypertrophie",
            focus_areas: UPPER,
            exercise_count: 7,
        },
        SplitDay {
            name: "Unterkörper B – Hypertrophie",
            focus_areas: LOWER,
            exercise_count: 6,
        },
    ],
};

static PPL_FULL_BODY: SplitTemplate = SplitTemplate {
    split_type: SplitType::PplFullBody,
    name: "Push/Pull/Beine + Ganzkörper",
    description: "Push/Pull/Legs-Split ergänzt durch eine Ganzkörpereinheit",
    days: &[
        SplitDay {
            name: "Drücken (Push)",
            focus_areas: PUSH,
            exercise_count: 6,
        },
        SplitDay {
            name: "Ziehen (Pull)",
            focus_areas: PULL,
            exercise_count: 6,
        },
        SplitDay {
            name: "Beine",
            focus_areas: LEGS,
            exercise_count: 6,
        },
        SplitDay {
            name: "Ganzkörper",
            focus_areas: &[
                MuscleGroup::Chest,
                MuscleGroup::Back,
                MuscleGroup::Shoulders,
                MuscleGroup::Quadriceps,
                MuscleGroup::Abs,
            ],
            exercise_count: 6,
        },
    ],
};

static PPL_UPPER_LOWER: SplitTemplate = SplitTemplate {
    split_type: SplitType::PplUpperLower,
    name: "Push/Pull/Beine/Ober/Unter",
    description: "Fünf-Tage-Split mit PPL und Upper/Lower für maximale Frequenz",
    days: &[
        SplitDay {
            name: "Drücken (Push)",
            focus_areas: PUSH,
            exercise_count: 6,
        },
        SplitDay {
            name: "Ziehen (Pull)",
            focus_areas: PULL,
            exercise_count: 6,
        },
        SplitDay {
            name: "Beine",
            focus_areas: LEGS,
            exercise_count: 6,
        },
        SplitDay {
            name: "Oberkörper",
            focus_areas: UPPER,
            exercise_count: 7,
        },
        SplitDay {
            name: "Unterkörper & Core",
            focus_areas: LOWER_AND_CORE,
            exercise_count: 6,
        },
    ],
};

static BRO_SPLIT: SplitTemplate = SplitTemplate {
    split_type: SplitType::BroSplit,
    name: "Klassischer 5er-Split",
    description: "Jede Muskelgruppe einmal pro Woche mit hohem Volumen",
    days: &[
        SplitDay {
            name: "Brust",
            focus_areas: &[MuscleGroup::Chest, MuscleGroup::Triceps],
            exercise_count: 7,
        },
        SplitDay {
            name: "Rücken",
            focus_areas: &[MuscleGroup::Back, MuscleGroup::Biceps],
            exercise_count: 7,
        },
        SplitDay {
            name: "Schultern & Arme",
            focus_areas: &[
                MuscleGroup::Shoulders,
                MuscleGroup::Biceps,
                MuscleGroup::Triceps,
                MuscleGroup::Forearms,
            ],
            exercise_count: 7,
        },
        SplitDay {
            name: "Beine",
            focus_areas: LEGS,
            exercise_count: 7,
        },
        SplitDay {
            name: "Core & Schwachstellen",
            focus_areas: &[
                MuscleGroup::Abs,
                MuscleGroup::Obliques,
                MuscleGroup::LowerBack,
            ],
            exercise_count: 6,
        },
    ],
};

static PPL_X2: SplitTemplate = SplitTemplate {
    split_type: SplitType::PplX2,
    name: "Push/Pull/Beine x2",
    description: "Sechs-Tage-Split: jede Muskelgruppe zweimal pro Woche",
    days: &[
        SplitDay {
            name: "Drücken A – Kraft",
            focus_areas: PUSH,
            exercise_count: 6,
        },
        SplitDay {
            name: "Ziehen A – Kraft",
            focus_areas: PULL,
            exercise_count: 6,
        },
        SplitDay {
            name: "Beine A – Kraft",
            focus_areas: LEGS,
            exercise_count: 6,
        },
        SplitDay {
            name: "Drücken B – Hypertrophie",
            focus_areas: PUSH,
            exercise_count: 7,
        },
        SplitDay {
            name: "Ziehen B – Hypertrophie",
            focus_areas: PULL,
            exercise_count: 7,
        },
        SplitDay {
            name: "Beine B – Hypertrophie",
            focus_areas: LEGS,
            exercise_count: 7,
        },
    ],
};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 2)]
    #[case(1, 2)]
    #[case(2, 2)]
    #[case(4, 4)]
    #[case(6, 6)]
    #[case(10, 6)]
    fn test_clamp_days_per_week(#[case] days: u32, #[case] expected: u32) {
        assert_eq!(clamp_days_per_week(days), expected);
    }

    #[rstest]
    #[case(10, 30)]
    #[case(45, 45)]
    #[case(120, 90)]
    fn test_clamp_minutes_per_session(#[case] minutes: u32, #[case] expected: u32) {
        assert_eq!(clamp_minutes_per_session(minutes), expected);
    }

    #[rstest]
    #[case(2, FitnessGoal::BuildMuscle, SplitType::FullBodyAB)]
    #[case(2, FitnessGoal::IncreaseFlexibility, SplitType::FullBodyAB)]
    #[case(3, FitnessGoal::BuildMuscle, SplitType::PushPullLegs)]
    #[case(3, FitnessGoal::GainStrength, SplitType::PushPullLegs)]
    #[case(3, FitnessGoal::LoseWeight, SplitType::FullBodyABC)]
    #[case(3, FitnessGoal::StayFit, SplitType::FullBodyABC)]
    #[case(4, FitnessGoal::LoseWeight, SplitType::UpperLower)]
    #[case(4, FitnessGoal::GainStrength, SplitType::UpperLower)]
    #[case(4, FitnessGoal::ImproveEndurance, SplitType::PplFullBody)]
    #[case(5, FitnessGoal::BuildMuscle, SplitType::BroSplit)]
    #[case(5, FitnessGoal::GainStrength, SplitType::PplUpperLower)]
    #[case(6, FitnessGoal::BuildMuscle, SplitType::PplX2)]
    #[case(6, FitnessGoal::StayFit, SplitType::PplX2)]
    #[case(1, FitnessGoal::BuildMuscle, SplitType::FullBodyAB)]
    #[case(10, FitnessGoal::LoseWeight, SplitType::PplX2)]
    fn test_recommended_split(
        #[case] days: u32,
        #[case] goal: FitnessGoal,
        #[case] expected: SplitType,
    ) {
        assert_eq!(recommended_split(days, goal), expected);
    }

    #[test]
    fn test_recommended_split_template_covers_schedule() {
        for days in MIN_DAYS_PER_WEEK..=MAX_DAYS_PER_WEEK {
            for goal in FitnessGoal::iter() {
                let template = recommended_split(days, *goal).template();
                assert!(
                    template.days.len() >= usize::try_from(days).unwrap(),
                    "{} for {days} days",
                    template.name
                );
            }
        }
    }

    #[rstest]
    #[case(2, &[DayOfWeek::Monday, DayOfWeek::Thursday])]
    #[case(3, &[DayOfWeek::Monday, DayOfWeek::Wednesday, DayOfWeek::Friday])]
    #[case(1, &[DayOfWeek::Monday, DayOfWeek::Thursday])]
    #[case(9, &[
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
    ])]
    fn test_training_days(#[case] days: u32, #[case] expected: &[DayOfWeek]) {
        assert_eq!(training_days(days), expected);
    }

    #[test]
    fn test_training_days_len() {
        for days in MIN_DAYS_PER_WEEK..=MAX_DAYS_PER_WEEK {
            let training_days = training_days(days);
            assert_eq!(training_days.len(), usize::try_from(days).unwrap());
            assert!(training_days.is_sorted());
            assert!(!training_days.contains(&DayOfWeek::Sunday));
        }
    }

    #[test]
    fn test_split_type_template() {
        for split_type in SplitType::iter() {
            let template = split_type.template();

            assert_eq!(template.split_type, *split_type);
            assert!(!template.name.is_empty());
            assert!(!template.description.is_empty());
            assert!(!template.days.is_empty());

            for day in template.days {
                assert!(!day.focus_areas.is_empty());
                assert!(day.exercise_count >= 3);
                assert!(!day.focus_areas.contains(&MuscleGroup::FullBody));
                assert!(!day.focus_areas.contains(&MuscleGroup::Cardio));
            }
        }
    }

    #[test]
    fn test_split_type_codes() {
        for split_type in SplitType::iter() {
            assert_eq!(split_type.code().parse::<SplitType>(), Ok(*split_type));
            assert_eq!(SplitType::try_from(*split_type as u8), Ok(*split_type));
        }
    }

    #[test]
    fn test_split_template_day() {
        let template = SplitType::PplX2.template();

        assert_eq!(template.days.len(), 6);
        assert_eq!(template.day(1).name, "Ziehen A – Kraft");
        assert_eq!(template.day(7).name, "Ziehen A – Kraft");

        let template = SplitType::FullBodyAB.template();

        assert_eq!(template.day(2).name, "Ganzkörper A");
    }
}
