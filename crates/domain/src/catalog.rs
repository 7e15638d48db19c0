use std::sync::LazyLock;

use crate::{
    Catalog, CatalogExercise, Category, Equipment, FitnessLevel, MuscleGroup,
    Stimulus::{Primary, Secondary},
    TrainingLocation,
};

/// The built-in exercise library.
#[must_use]
pub fn builtin() -> &'static Catalog {
    &BUILTIN
}

static BUILTIN: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::new(EXERCISES.iter().map(CatalogExercise::from).collect()));

impl From<&BaseExercise> for CatalogExercise {
    fn from(value: &BaseExercise) -> Self {
        CatalogExercise {
            id: value.id.into(),
            name: value.name.to_string(),
            category: value.category,
            muscles: value.muscles.to_vec(),
            equipment: value.equipment.to_vec(),
            difficulty: value.difficulty,
            locations: value.locations.to_vec(),
            instructions: value.instructions.iter().map(|i| (*i).to_string()).collect(),
            tips: value.tips.iter().map(|t| (*t).to_string()).collect(),
            default_sets: value.defaults.map(|(sets, _, _)| sets),
            default_reps: value.defaults.map(|(_, reps, _)| reps),
            default_rest_seconds: value.defaults.map(|(_, _, rest)| rest),
        }
    }
}

struct BaseExercise {
    id: &'static str,
    name: &'static str,
    category: Category,
    muscles: &'static [(MuscleGroup, crate::Stimulus)],
    equipment: &'static [Equipment],
    difficulty: FitnessLevel,
    locations: &'static [TrainingLocation],
    instructions: &'static [&'static str],
    tips: &'static [&'static str],
    /// Sets, reps and rest in seconds
    defaults: Option<(u32, u32, u32)>,
}

impl BaseExercise {
    const fn default() -> Self {
        Self {
            id: "",
            name: "",
            category: Category::Strength,
            muscles: &[],
            equipment: &[],
            difficulty: FitnessLevel::Beginner,
            locations: EVERYWHERE,
            instructions: &[],
            tips: &[],
            defaults: None,
        }
    }
}

const EVERYWHERE: &[TrainingLocation] = &[
    TrainingLocation::Gym,
    TrainingLocation::Home,
    TrainingLocation::Outdoor,
];
const GYM: &[TrainingLocation] = &[TrainingLocation::Gym];
const GYM_HOME: &[TrainingLocation] = &[TrainingLocation::Gym, TrainingLocation::Home];
const HOME_OUTDOOR: &[TrainingLocation] = &[TrainingLocation::Home, TrainingLocation::Outdoor];
const OUTDOOR: &[TrainingLocation] = &[TrainingLocation::Outdoor];

const EXERCISES: [BaseExercise; 97] = [
    // Chest
    BaseExercise {
        id: "bench-press",
        name: "Bankdrücken",
        muscles: &[
            (MuscleGroup::Chest, Primary),
            (MuscleGroup::Triceps, Secondary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM,
        instructions: &[
            "Flach auf die Bank legen, Füße fest am Boden.",
            "Stange kontrolliert zur unteren Brust senken und explosiv nach oben drücken.",
        ],
        tips: &["Schulterblätter zusammenziehen und während der Bewegung fixieren."],
        defaults: Some((4, 8, 90)),
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "dumbbell-bench-press",
        name: "Kurzhantel-Bankdrücken",
        muscles: &[
            (MuscleGroup::Chest, Primary),
            (MuscleGroup::Triceps, Secondary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        locations: GYM_HOME,
        instructions: &["Hanteln über der Brust strecken, seitlich absenken und wieder zusammenführen."],
        defaults: Some((3, 10, 75)),
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "incline-dumbbell-press",
        name: "Schrägbankdrücken mit Kurzhanteln",
        muscles: &[
            (MuscleGroup::Chest, Primary),
            (MuscleGroup::Shoulders, Primary),
            (MuscleGroup::Triceps, Secondary),
        ],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM_HOME,
        instructions: &["Bank auf 30 bis 45 Grad einstellen und die Hanteln schräg nach oben drücken."],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "push-up",
        name: "Liegestütz",
        muscles: &[
            (MuscleGroup::Chest, Primary),
            (MuscleGroup::Triceps, Secondary),
            (MuscleGroup::Shoulders, Secondary),
            (MuscleGroup::Abs, Secondary),
        ],
        equipment: &[Equipment::None],
        instructions: &[
            "Hände schulterbreit aufsetzen, Körper bildet eine Linie.",
            "Brust bis knapp über den Boden senken und wieder hochdrücken.",
        ],
        tips: &["Zu schwer? Knie ablegen."],
        defaults: Some((3, 12, 60)),
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "cable-fly",
        name: "Kabelzug-Flys",
        muscles: &[
            (MuscleGroup::Chest, Primary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::CableMachine],
        locations: GYM,
        instructions: &["Griffe mit leicht gebeugten Armen im Bogen vor der Brust zusammenführen."],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "dumbbell-fly",
        name: "Kurzhantel-Flys",
        muscles: &[(MuscleGroup::Chest, Primary)],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        locations: GYM_HOME,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "dips",
        name: "Dips",
        muscles: &[
            (MuscleGroup::Chest, Primary),
            (MuscleGroup::Triceps, Primary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::None],
        difficulty: FitnessLevel::Advanced,
        locations: &[TrainingLocation::Gym, TrainingLocation::Outdoor],
        instructions: &["Am Barren abstützen, Oberkörper leicht nach vorne neigen und tief absenken."],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "band-chest-press",
        name: "Brustpresse mit Widerstandsband",
        muscles: &[
            (MuscleGroup::Chest, Primary),
            (MuscleGroup::Triceps, Secondary),
        ],
        equipment: &[Equipment::ResistanceBand],
        locations: HOME_OUTDOOR,
        ..BaseExercise::default()
    },
    // Back
    BaseExercise {
        id: "deadlift",
        name: "Kreuzheben",
        muscles: &[
            (MuscleGroup::Back, Primary),
            (MuscleGroup::Hamstrings, Primary),
            (MuscleGroup::Glutes, Primary),
            (MuscleGroup::LowerBack, Secondary),
            (MuscleGroup::Forearms, Secondary),
        ],
        equipment: &[Equipment::Barbell],
        difficulty: FitnessLevel::Advanced,
        locations: GYM,
        instructions: &[
            "Stange nah am Schienbein greifen, Rücken gerade.",
            "Hüfte und Knie gleichzeitig strecken, bis der Körper aufrecht steht.",
        ],
        tips: &["Niemals mit rundem Rücken ziehen."],
        defaults: Some((5, 5, 150)),
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "pull-up",
        name: "Klimmzüge",
        muscles: &[
            (MuscleGroup::Back, Primary),
            (MuscleGroup::Biceps, Secondary),
            (MuscleGroup::Forearms, Secondary),
        ],
        equipment: &[Equipment::PullUpBar],
        difficulty: FitnessLevel::Intermediate,
        instructions: &["Im Obergriff hängen und das Kinn über die Stange ziehen."],
        defaults: Some((3, 8, 90)),
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "lat-pulldown",
        name: "Latziehen",
        muscles: &[
            (MuscleGroup::Back, Primary),
            (MuscleGroup::Biceps, Secondary),
        ],
        equipment: &[Equipment::CableMachine],
        locations: GYM,
        instructions: &["Stange zur oberen Brust ziehen, Ellbogen zeigen nach unten."],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "barbell-row",
        name: "Langhantelrudern",
        muscles: &[
            (MuscleGroup::Back, Primary),
            (MuscleGroup::Biceps, Secondary),
            (MuscleGroup::LowerBack, Secondary),
        ],
        equipment: &[Equipment::Barbell],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "dumbbell-row",
        name: "Einarmiges Kurzhantelrudern",
        muscles: &[
            (MuscleGroup::Back, Primary),
            (MuscleGroup::Biceps, Secondary),
        ],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        locations: GYM_HOME,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "seated-cable-row",
        name: "Rudern am Kabelzug",
        muscles: &[
            (MuscleGroup::Back, Primary),
            (MuscleGroup::Biceps, Secondary),
            (MuscleGroup::Forearms, Secondary),
        ],
        equipment: &[Equipment::CableMachine],
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "inverted-row",
        name: "Australian Pull-ups",
        muscles: &[
            (MuscleGroup::Back, Primary),
            (MuscleGroup::Biceps, Secondary),
        ],
        equipment: &[Equipment::None],
        locations: HOME_OUTDOOR,
        instructions: &["Unter einer hüfthohen Stange oder einem stabilen Tisch hängen und die Brust heranziehen."],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "band-row",
        name: "Rudern mit Widerstandsband",
        muscles: &[
            (MuscleGroup::Back, Primary),
            (MuscleGroup::Biceps, Secondary),
        ],
        equipment: &[Equipment::ResistanceBand],
        locations: HOME_OUTDOOR,
        ..BaseExercise::default()
    },
    // Shoulders
    BaseExercise {
        id: "overhead-press",
        name: "Schulterdrücken mit Langhantel",
        muscles: &[
            (MuscleGroup::Shoulders, Primary),
            (MuscleGroup::Triceps, Secondary),
            (MuscleGroup::Abs, Secondary),
        ],
        equipment: &[Equipment::Barbell],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM,
        instructions: &["Stange im Stand von den Schlüsselbeinen über den Kopf drücken."],
        tips: &["Bauch und Gesäß anspannen, kein Hohlkreuz."],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "dumbbell-shoulder-press",
        name: "Kurzhantel-Schulterdrücken",
        muscles: &[
            (MuscleGroup::Shoulders, Primary),
            (MuscleGroup::Triceps, Secondary),
        ],
        equipment: &[Equipment::Dumbbell],
        locations: GYM_HOME,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "lateral-raise",
        name: "Seitheben",
        muscles: &[(MuscleGroup::Shoulders, Primary)],
        equipment: &[Equipment::Dumbbell],
        locations: GYM_HOME,
        instructions: &["Hanteln mit leicht gebeugten Armen seitlich bis auf Schulterhöhe heben."],
        defaults: Some((3, 15, 45)),
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "face-pull",
        name: "Face Pulls",
        muscles: &[
            (MuscleGroup::Shoulders, Primary),
            (MuscleGroup::Back, Secondary),
        ],
        equipment: &[Equipment::CableMachine],
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "pike-push-up",
        name: "Pike-Liegestütz",
        muscles: &[
            (MuscleGroup::Shoulders, Primary),
            (MuscleGroup::Triceps, Secondary),
            (MuscleGroup::Chest, Secondary),
        ],
        equipment: &[Equipment::None],
        difficulty: FitnessLevel::Intermediate,
        instructions: &["Hüfte hoch, Kopf zwischen den Armen Richtung Boden senken."],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "band-lateral-raise",
        name: "Seitheben mit Widerstandsband",
        muscles: &[(MuscleGroup::Shoulders, Primary)],
        equipment: &[Equipment::ResistanceBand],
        locations: HOME_OUTDOOR,
        ..BaseExercise::default()
    },
    // Biceps
    BaseExercise {
        id: "barbell-curl",
        name: "Langhantel-Curls",
        muscles: &[
            (MuscleGroup::Biceps, Primary),
            (MuscleGroup::Forearms, Secondary),
        ],
        equipment: &[Equipment::Barbell],
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "dumbbell-curl",
        name: "Kurzhantel-Curls",
        muscles: &[
            (MuscleGroup::Biceps, Primary),
            (MuscleGroup::Forearms, Secondary),
        ],
        equipment: &[Equipment::Dumbbell],
        locations: GYM_HOME,
        instructions: &["Ellbogen am Körper halten und die Hanteln kontrolliert beugen."],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "hammer-curl",
        name: "Hammer-Curls",
        muscles: &[
            (MuscleGroup::Biceps, Primary),
            (MuscleGroup::Forearms, Primary),
        ],
        equipment: &[Equipment::Dumbbell],
        locations: GYM_HOME,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "chin-up",
        name: "Chin-ups",
        muscles: &[
            (MuscleGroup::Biceps, Primary),
            (MuscleGroup::Back, Primary),
        ],
        equipment: &[Equipment::PullUpBar],
        difficulty: FitnessLevel::Intermediate,
        instructions: &["Im Untergriff hängen und das Kinn über die Stange ziehen."],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "band-curl",
        name: "Bizeps-Curls mit Widerstandsband",
        muscles: &[(MuscleGroup::Biceps, Primary)],
        equipment: &[Equipment::ResistanceBand],
        locations: HOME_OUTDOOR,
        ..BaseExercise::default()
    },
    // Triceps
    BaseExercise {
        id: "triceps-pushdown",
        name: "Trizepsdrücken am Kabel",
        muscles: &[(MuscleGroup::Triceps, Primary)],
        equipment: &[Equipment::CableMachine],
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "skull-crusher",
        name: "French Press",
        muscles: &[(MuscleGroup::Triceps, Primary)],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "overhead-triceps-extension",
        name: "Trizepsstrecken über Kopf",
        muscles: &[(MuscleGroup::Triceps, Primary)],
        equipment: &[Equipment::Dumbbell],
        locations: GYM_HOME,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "bench-dips",
        name: "Bankdips",
        muscles: &[
            (MuscleGroup::Triceps, Primary),
            (MuscleGroup::Chest, Secondary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::None],
        instructions: &["Hände hinter dem Körper auf einer Kante abstützen und die Arme beugen."],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "diamond-push-up",
        name: "Diamant-Liegestütz",
        muscles: &[
            (MuscleGroup::Triceps, Primary),
            (MuscleGroup::Chest, Secondary),
        ],
        equipment: &[Equipment::None],
        difficulty: FitnessLevel::Intermediate,
        ..BaseExercise::default()
    },
    // Forearms
    BaseExercise {
        id: "wrist-curl",
        name: "Handgelenk-Curls",
        muscles: &[(MuscleGroup::Forearms, Primary)],
        equipment: &[Equipment::Dumbbell],
        locations: GYM_HOME,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "farmers-walk",
        name: "Farmer's Walk",
        muscles: &[
            (MuscleGroup::Forearms, Primary),
            (MuscleGroup::Shoulders, Secondary),
            (MuscleGroup::Abs, Secondary),
        ],
        equipment: &[Equipment::Dumbbell],
        instructions: &["Schwere Hanteln seitlich halten und aufrecht gehen."],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "dead-hang",
        name: "Dead Hang",
        muscles: &[
            (MuscleGroup::Forearms, Primary),
            (MuscleGroup::Back, Secondary),
        ],
        equipment: &[Equipment::PullUpBar],
        ..BaseExercise::default()
    },
    // Abs
    BaseExercise {
        id: "plank",
        name: "Unterarmstütz",
        muscles: &[
            (MuscleGroup::Abs, Primary),
            (MuscleGroup::LowerBack, Secondary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::None],
        instructions: &["Auf den Unterarmen abstützen und den Körper gerade halten."],
        tips: &["Gesäß nicht durchhängen lassen."],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "crunch",
        name: "Crunches",
        muscles: &[(MuscleGroup::Abs, Primary)],
        equipment: &[Equipment::Mat],
        defaults: Some((3, 20, 30)),
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "hanging-leg-raise",
        name: "Hängendes Beinheben",
        muscles: &[
            (MuscleGroup::Abs, Primary),
            (MuscleGroup::Obliques, Secondary),
            (MuscleGroup::Forearms, Secondary),
        ],
        equipment: &[Equipment::PullUpBar],
        difficulty: FitnessLevel::Advanced,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "cable-crunch",
        name: "Kabel-Crunches",
        muscles: &[(MuscleGroup::Abs, Primary)],
        equipment: &[Equipment::CableMachine],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "dead-bug",
        name: "Dead Bug",
        muscles: &[
            (MuscleGroup::Abs, Primary),
            (MuscleGroup::LowerBack, Secondary),
        ],
        equipment: &[Equipment::Mat],
        ..BaseExercise::default()
    },
    // Obliques
    BaseExercise {
        id: "russian-twist",
        name: "Russian Twist",
        muscles: &[
            (MuscleGroup::Obliques, Primary),
            (MuscleGroup::Abs, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "side-plank",
        name: "Seitstütz",
        muscles: &[
            (MuscleGroup::Obliques, Primary),
            (MuscleGroup::Abs, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "pallof-press",
        name: "Pallof Press",
        muscles: &[
            (MuscleGroup::Obliques, Primary),
            (MuscleGroup::Abs, Secondary),
        ],
        equipment: &[Equipment::CableMachine],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "band-woodchopper",
        name: "Holzhacker mit Widerstandsband",
        muscles: &[
            (MuscleGroup::Obliques, Primary),
            (MuscleGroup::Abs, Secondary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::ResistanceBand],
        difficulty: FitnessLevel::Intermediate,
        locations: HOME_OUTDOOR,
        ..BaseExercise::default()
    },
    // Lower back
    BaseExercise {
        id: "back-extension",
        name: "Rückenstrecker",
        muscles: &[
            (MuscleGroup::LowerBack, Primary),
            (MuscleGroup::Glutes, Secondary),
            (MuscleGroup::Hamstrings, Secondary),
        ],
        equipment: &[Equipment::Bench],
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "superman",
        name: "Superman",
        muscles: &[
            (MuscleGroup::LowerBack, Primary),
            (MuscleGroup::Glutes, Secondary),
        ],
        equipment: &[Equipment::Mat],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "good-morning",
        name: "Good Mornings",
        muscles: &[
            (MuscleGroup::LowerBack, Primary),
            (MuscleGroup::Hamstrings, Primary),
            (MuscleGroup::Glutes, Secondary),
        ],
        equipment: &[Equipment::Barbell],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "bird-dog",
        name: "Bird Dog",
        muscles: &[
            (MuscleGroup::LowerBack, Primary),
            (MuscleGroup::Abs, Secondary),
            (MuscleGroup::Glutes, Secondary),
        ],
        equipment: &[Equipment::Mat],
        ..BaseExercise::default()
    },
    // Quadriceps
    BaseExercise {
        id: "back-squat",
        name: "Kniebeugen mit Langhantel",
        muscles: &[
            (MuscleGroup::Quadriceps, Primary),
            (MuscleGroup::Glutes, Primary),
            (MuscleGroup::Hamstrings, Secondary),
            (MuscleGroup::LowerBack, Secondary),
        ],
        equipment: &[Equipment::Barbell],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM,
        instructions: &[
            "Stange auf dem oberen Rücken ablegen, Füße schulterbreit.",
            "Hüfte nach hinten unten führen, bis die Oberschenkel parallel zum Boden sind.",
        ],
        tips: &["Knie zeigen in Richtung der Zehen."],
        defaults: Some((4, 8, 120)),
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "leg-press",
        name: "Beinpresse",
        muscles: &[
            (MuscleGroup::Quadriceps, Primary),
            (MuscleGroup::Glutes, Secondary),
            (MuscleGroup::Hamstrings, Secondary),
        ],
        equipment: &[Equipment::LegPress],
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "goblet-squat",
        name: "Goblet Squat",
        muscles: &[
            (MuscleGroup::Quadriceps, Primary),
            (MuscleGroup::Glutes, Secondary),
            (MuscleGroup::Abs, Secondary),
        ],
        equipment: &[Equipment::Dumbbell],
        locations: GYM_HOME,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "bodyweight-squat",
        name: "Kniebeugen ohne Gewicht",
        muscles: &[
            (MuscleGroup::Quadriceps, Primary),
            (MuscleGroup::Glutes, Secondary),
        ],
        equipment: &[Equipment::None],
        defaults: Some((3, 15, 45)),
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "walking-lunge",
        name: "Ausfallschritte im Gehen",
        muscles: &[
            (MuscleGroup::Quadriceps, Primary),
            (MuscleGroup::Glutes, Primary),
            (MuscleGroup::Hamstrings, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "bulgarian-split-squat",
        name: "Bulgarische Kniebeuge",
        muscles: &[
            (MuscleGroup::Quadriceps, Primary),
            (MuscleGroup::Glutes, Primary),
            (MuscleGroup::Hamstrings, Secondary),
        ],
        equipment: &[Equipment::Dumbbell, Equipment::Bench],
        difficulty: FitnessLevel::Advanced,
        locations: GYM_HOME,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "smith-machine-squat",
        name: "Kniebeugen an der Multipresse",
        muscles: &[
            (MuscleGroup::Quadriceps, Primary),
            (MuscleGroup::Glutes, Secondary),
        ],
        equipment: &[Equipment::SmithMachine],
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "jump-squat",
        name: "Sprungkniebeugen",
        muscles: &[
            (MuscleGroup::Quadriceps, Primary),
            (MuscleGroup::Glutes, Secondary),
            (MuscleGroup::Calves, Secondary),
        ],
        equipment: &[Equipment::None],
        difficulty: FitnessLevel::Intermediate,
        locations: HOME_OUTDOOR,
        ..BaseExercise::default()
    },
    // Hamstrings
    BaseExercise {
        id: "romanian-deadlift",
        name: "Rumänisches Kreuzheben",
        muscles: &[
            (MuscleGroup::Hamstrings, Primary),
            (MuscleGroup::Glutes, Primary),
            (MuscleGroup::LowerBack, Secondary),
        ],
        equipment: &[Equipment::Barbell],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "dumbbell-romanian-deadlift",
        name: "Rumänisches Kreuzheben mit Kurzhanteln",
        muscles: &[
            (MuscleGroup::Hamstrings, Primary),
            (MuscleGroup::Glutes, Secondary),
        ],
        equipment: &[Equipment::Dumbbell],
        locations: GYM_HOME,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "nordic-curl",
        name: "Nordic Hamstring Curls",
        muscles: &[(MuscleGroup::Hamstrings, Primary)],
        equipment: &[Equipment::Mat],
        difficulty: FitnessLevel::Advanced,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "single-leg-deadlift",
        name: "Einbeiniges Kreuzheben",
        muscles: &[
            (MuscleGroup::Hamstrings, Primary),
            (MuscleGroup::Glutes, Secondary),
            (MuscleGroup::LowerBack, Secondary),
        ],
        equipment: &[Equipment::None],
        difficulty: FitnessLevel::Intermediate,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "kettlebell-swing",
        name: "Kettlebell Swings",
        muscles: &[
            (MuscleGroup::Hamstrings, Primary),
            (MuscleGroup::Glutes, Primary),
            (MuscleGroup::LowerBack, Secondary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::Kettlebell],
        difficulty: FitnessLevel::Intermediate,
        ..BaseExercise::default()
    },
    // Glutes
    BaseExercise {
        id: "hip-thrust",
        name: "Hip Thrust",
        muscles: &[
            (MuscleGroup::Glutes, Primary),
            (MuscleGroup::Hamstrings, Secondary),
        ],
        equipment: &[Equipment::Barbell, Equipment::Bench],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "glute-bridge",
        name: "Glute Bridge",
        muscles: &[
            (MuscleGroup::Glutes, Primary),
            (MuscleGroup::Hamstrings, Secondary),
        ],
        equipment: &[Equipment::Mat],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "cable-kickback",
        name: "Kickbacks am Kabelzug",
        muscles: &[(MuscleGroup::Glutes, Primary)],
        equipment: &[Equipment::CableMachine],
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "step-up",
        name: "Step-ups",
        muscles: &[
            (MuscleGroup::Glutes, Primary),
            (MuscleGroup::Quadriceps, Primary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "band-lateral-walk",
        name: "Seitliches Gehen mit Widerstandsband",
        muscles: &[(MuscleGroup::Glutes, Primary)],
        equipment: &[Equipment::ResistanceBand],
        ..BaseExercise::default()
    },
    // Calves
    BaseExercise {
        id: "standing-calf-raise",
        name: "Wadenheben stehend",
        muscles: &[(MuscleGroup::Calves, Primary)],
        equipment: &[Equipment::None],
        defaults: Some((3, 20, 30)),
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "smith-machine-calf-raise",
        name: "Wadenheben an der Multipresse",
        muscles: &[(MuscleGroup::Calves, Primary)],
        equipment: &[Equipment::SmithMachine],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "leg-press-calf-raise",
        name: "Wadendrücken an der Beinpresse",
        muscles: &[(MuscleGroup::Calves, Primary)],
        equipment: &[Equipment::LegPress],
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "single-leg-calf-raise",
        name: "Einbeiniges Wadenheben",
        muscles: &[(MuscleGroup::Calves, Primary)],
        equipment: &[Equipment::Dumbbell],
        difficulty: FitnessLevel::Intermediate,
        locations: GYM_HOME,
        ..BaseExercise::default()
    },
    // Cardio
    BaseExercise {
        id: "treadmill-walk",
        name: "Zügiges Gehen auf dem Laufband",
        category: Category::Cardio,
        muscles: &[(MuscleGroup::Cardio, Primary)],
        equipment: &[Equipment::Treadmill],
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "stationary-bike",
        name: "Radfahren auf dem Ergometer",
        category: Category::Cardio,
        muscles: &[
            (MuscleGroup::Cardio, Primary),
            (MuscleGroup::Quadriceps, Secondary),
        ],
        equipment: &[Equipment::Bike],
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "rowing-machine",
        name: "Rudern am Rudergerät",
        category: Category::Cardio,
        muscles: &[
            (MuscleGroup::Cardio, Primary),
            (MuscleGroup::Back, Secondary),
            (MuscleGroup::Quadriceps, Secondary),
        ],
        equipment: &[Equipment::RowingMachine],
        locations: GYM,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "jumping-jacks",
        name: "Hampelmänner",
        category: Category::Cardio,
        muscles: &[
            (MuscleGroup::Cardio, Primary),
            (MuscleGroup::FullBody, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "jogging",
        name: "Lockeres Joggen",
        category: Category::Cardio,
        muscles: &[
            (MuscleGroup::Cardio, Primary),
            (MuscleGroup::Calves, Secondary),
        ],
        equipment: &[Equipment::None],
        locations: OUTDOOR,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "burpees",
        name: "Burpees",
        category: Category::Cardio,
        muscles: &[
            (MuscleGroup::Cardio, Primary),
            (MuscleGroup::FullBody, Primary),
            (MuscleGroup::Chest, Secondary),
            (MuscleGroup::Quadriceps, Secondary),
        ],
        equipment: &[Equipment::None],
        difficulty: FitnessLevel::Intermediate,
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "mountain-climbers",
        name: "Mountain Climbers",
        category: Category::Cardio,
        muscles: &[
            (MuscleGroup::Cardio, Primary),
            (MuscleGroup::Abs, Secondary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    // Mobility
    BaseExercise {
        id: "arm-circles",
        name: "Armkreisen",
        category: Category::Mobility,
        muscles: &[
            (MuscleGroup::FullBody, Primary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "leg-swings",
        name: "Beinpendel",
        category: Category::Mobility,
        muscles: &[
            (MuscleGroup::FullBody, Primary),
            (MuscleGroup::Hamstrings, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "worlds-greatest-stretch",
        name: "World's Greatest Stretch",
        category: Category::Mobility,
        muscles: &[
            (MuscleGroup::FullBody, Primary),
            (MuscleGroup::Hamstrings, Secondary),
            (MuscleGroup::Glutes, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "inchworm",
        name: "Inchworm",
        category: Category::Mobility,
        muscles: &[
            (MuscleGroup::FullBody, Primary),
            (MuscleGroup::Hamstrings, Secondary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "cat-cow",
        name: "Katze-Kuh",
        category: Category::Mobility,
        muscles: &[
            (MuscleGroup::LowerBack, Primary),
            (MuscleGroup::FullBody, Secondary),
        ],
        equipment: &[Equipment::Mat],
        ..BaseExercise::default()
    },
    // Cool-down
    BaseExercise {
        id: "easy-walk",
        name: "Lockeres Gehen",
        category: Category::Cooldown,
        muscles: &[
            (MuscleGroup::FullBody, Primary),
            (MuscleGroup::Cardio, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "foam-rolling",
        name: "Faszienrollen",
        category: Category::Cooldown,
        muscles: &[(MuscleGroup::FullBody, Primary)],
        equipment: &[Equipment::FoamRoller],
        ..BaseExercise::default()
    },
    // Stretching
    BaseExercise {
        id: "chest-stretch",
        name: "Brustdehnung am Türrahmen",
        category: Category::Stretching,
        muscles: &[
            (MuscleGroup::Chest, Primary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "lat-stretch",
        name: "Latissimus-Dehnung",
        category: Category::Stretching,
        muscles: &[(MuscleGroup::Back, Primary)],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "child-pose",
        name: "Kindhaltung",
        category: Category::Stretching,
        muscles: &[
            (MuscleGroup::LowerBack, Primary),
            (MuscleGroup::Back, Secondary),
        ],
        equipment: &[Equipment::Mat],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "cross-body-shoulder-stretch",
        name: "Schulterdehnung vor der Brust",
        category: Category::Stretching,
        muscles: &[(MuscleGroup::Shoulders, Primary)],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "biceps-wall-stretch",
        name: "Bizepsdehnung an der Wand",
        category: Category::Stretching,
        muscles: &[
            (MuscleGroup::Biceps, Primary),
            (MuscleGroup::Forearms, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "overhead-triceps-stretch",
        name: "Trizepsdehnung über Kopf",
        category: Category::Stretching,
        muscles: &[
            (MuscleGroup::Triceps, Primary),
            (MuscleGroup::Shoulders, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "wrist-stretch",
        name: "Handgelenksdehnung",
        category: Category::Stretching,
        muscles: &[(MuscleGroup::Forearms, Primary)],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "cobra-stretch",
        name: "Kobra-Dehnung",
        category: Category::Stretching,
        muscles: &[
            (MuscleGroup::Abs, Primary),
            (MuscleGroup::LowerBack, Secondary),
        ],
        equipment: &[Equipment::Mat],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "standing-side-bend",
        name: "Seitliche Rumpfdehnung",
        category: Category::Stretching,
        muscles: &[
            (MuscleGroup::Obliques, Primary),
            (MuscleGroup::Back, Secondary),
        ],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "standing-quad-stretch",
        name: "Oberschenkeldehnung im Stand",
        category: Category::Stretching,
        muscles: &[(MuscleGroup::Quadriceps, Primary)],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "seated-hamstring-stretch",
        name: "Beinrückseiten-Dehnung im Sitzen",
        category: Category::Stretching,
        muscles: &[
            (MuscleGroup::Hamstrings, Primary),
            (MuscleGroup::LowerBack, Secondary),
        ],
        equipment: &[Equipment::Mat],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "pigeon-stretch",
        name: "Taubenhaltung",
        category: Category::Stretching,
        muscles: &[
            (MuscleGroup::Glutes, Primary),
            (MuscleGroup::Hamstrings, Secondary),
        ],
        equipment: &[Equipment::Mat],
        ..BaseExercise::default()
    },
    BaseExercise {
        id: "calf-wall-stretch",
        name: "Wadendehnung an der Wand",
        category: Category::Stretching,
        muscles: &[(MuscleGroup::Calves, Primary)],
        equipment: &[Equipment::None],
        ..BaseExercise::default()
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;

    use crate::{ExerciseCatalog, Property, Stimulus};

    use super::*;

    #[test]
    fn test_builtin() {
        assert_eq!(builtin().len(), EXERCISES.len());
        assert_eq!(
            builtin()
                .exercise(&"push-up".into())
                .map(|e| (e.default_sets, e.default_reps, e.default_rest_seconds)),
            Some((Some(3), Some(12), Some(60)))
        );
    }

    #[test]
    fn test_exercises_duplicate_ids() {
        let mut ids = HashSet::new();

        for exercise in &EXERCISES {
            let id = exercise.id;
            assert!(!id.is_empty());
            assert!(
                id.chars().all(|c| c.is_ascii_lowercase() || c == '-'),
                "invalid id {id}"
            );
            assert!(!ids.contains(id), "duplicate id {id}");
            ids.insert(id);
        }
    }

    #[test]
    fn test_exercises_duplicate_names() {
        let mut names = HashSet::new();

        for exercise in &EXERCISES {
            let name = exercise.name;
            assert!(!name.is_empty());
            assert!(!names.contains(name), "duplicate name {name}");
            names.insert(name);
        }
    }

    #[test]
    fn test_exercises_muscles() {
        for exercise in &EXERCISES {
            let muscles: HashSet<MuscleGroup> =
                exercise.muscles.iter().map(|(m, _)| m).copied().collect();
            assert_eq!(
                exercise.muscles.len(),
                muscles.len(),
                "duplicate muscle entries for \"{}\"",
                exercise.id
            );
            assert!(
                exercise.muscles.iter().any(|(_, s)| *s == Stimulus::Primary),
                "no primary muscle for \"{}\"",
                exercise.id
            );
        }
    }

    #[test]
    fn test_exercises_equipment() {
        for exercise in &EXERCISES {
            assert!(!exercise.equipment.is_empty(), "\"{}\"", exercise.id);
            assert!(
                !exercise.equipment.contains(&Equipment::None) || exercise.equipment.len() == 1,
                "\"{}\" mixes none with other equipment",
                exercise.id
            );
        }
    }

    #[test]
    fn test_exercises_locations() {
        for exercise in &EXERCISES {
            assert!(!exercise.locations.is_empty(), "\"{}\"", exercise.id);
            if exercise.locations.contains(&TrainingLocation::Outdoor) {
                for equipment in exercise.equipment {
                    assert!(
                        !matches!(
                            equipment,
                            Equipment::CableMachine
                                | Equipment::SmithMachine
                                | Equipment::LegPress
                                | Equipment::Treadmill
                                | Equipment::RowingMachine
                        ),
                        "machine outdoors for \"{}\"",
                        exercise.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_builtin_covers_every_muscle_in_every_location() {
        for location in TrainingLocation::iter() {
            let exercises = builtin().exercises_for_location(*location);
            for muscle in MuscleGroup::iter() {
                assert!(
                    exercises.iter().any(|e| e.trains(*muscle)),
                    "no exercise for {} in {}",
                    muscle.code(),
                    location.code()
                );
            }
        }
    }

    #[test]
    fn test_builtin_has_stretch_for_every_trained_muscle() {
        for muscle in MuscleGroup::iter()
            .filter(|m| !matches!(m, MuscleGroup::FullBody | MuscleGroup::Cardio))
        {
            assert!(
                builtin()
                    .exercises_by_muscle(*muscle)
                    .iter()
                    .any(|e| e.category.is_stretch() && e.is_primary(*muscle)),
                "no stretch for {}",
                muscle.code()
            );
        }
    }
}
