use fittutto_domain::{
    CatalogExercise, ExerciseCatalog, PlannedExercise, PlannedWorkout, Property, TrainingPlan,
};

#[must_use]
pub fn plan_summary(plan: &TrainingPlan) -> String {
    format!(
        "{} {} {} ({}, {}, {} Wochen){}",
        plan.id,
        plan.created_at.format("%Y-%m-%d"),
        plan.name,
        plan.level.name(),
        plan.location.name(),
        plan.duration_weeks,
        if plan.is_active { " [aktiv]" } else { "" }
    )
}

/// Renders a plan, optionally restricted to a single week.
#[must_use]
pub fn plan_details(
    plan: &TrainingPlan,
    catalog: &impl ExerciseCatalog,
    week: Option<u32>,
) -> String {
    let mut lines = vec![
        plan_summary(plan),
        plan.description.clone(),
        format!(
            "Split: {}, {} Tage pro Woche, {} Sätze insgesamt",
            plan.split_type.name(),
            plan.days_per_week,
            plan.num_sets()
        ),
    ];

    for workout in plan
        .workouts
        .iter()
        .filter(|w| week.is_none_or(|week| w.week_number == week))
    {
        lines.push(String::new());
        lines.extend(workout_lines(workout, catalog));
    }

    lines.join("\n")
}

fn workout_lines(workout: &PlannedWorkout, catalog: &impl ExerciseCatalog) -> Vec<String> {
    let mut lines = vec![
        format!(
            "Woche {}, {}: {} ({} min)",
            workout.week_number,
            workout.day_of_week.name(),
            workout.name,
            workout.estimated_duration_minutes
        ),
        format!("  {}", workout.description),
    ];
    let mut block_role = None;

    for exercise in &workout.exercises {
        if block_role != Some(exercise.block_role) {
            block_role = Some(exercise.block_role);
            lines.push(format!("  {}", exercise.block_role.name()));
        }
        lines.push(format!("    {}", exercise_line(exercise, catalog)));
    }

    lines
}

fn exercise_line(exercise: &PlannedExercise, catalog: &impl ExerciseCatalog) -> String {
    let name = catalog
        .exercise(&exercise.exercise_id)
        .map_or(exercise.exercise_id.as_str(), |e| e.name.as_str());
    let mut line = format!("{name}: {} × {}", exercise.sets, exercise.target);
    if exercise.rest_seconds > 0 {
        line.push_str(&format!(", {} s Pause", exercise.rest_seconds));
    }
    if let Some(notes) = &exercise.notes {
        line.push_str(&format!(" ({notes})"));
    }
    line
}

#[must_use]
pub fn catalog_exercise(exercise: &CatalogExercise) -> String {
    format!(
        "{:<32} {} | {} | {} | {}",
        exercise.id.as_str(),
        exercise.name,
        exercise.category.name(),
        exercise
            .muscles
            .iter()
            .map(|(m, _)| m.name())
            .collect::<Vec<_>>()
            .join(", "),
        exercise.difficulty.name()
    )
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use fittutto_domain::{
        Catalog, Category, Equipment, FitnessGoal, FitnessLevel, MuscleGroup,
        PlanGenerationParams, PlanGenerator, PlanID, Stimulus, TrainingLocation, UserID, catalog,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    fn plan() -> TrainingPlan {
        PlanGenerator::new(catalog::builtin()).generate_training_plan_at(
            &PlanGenerationParams {
                user_id: UserID::from(1),
                goal: FitnessGoal::StayFit,
                level: FitnessLevel::Beginner,
                location: TrainingLocation::Outdoor,
                available_equipment: [Equipment::Mat].into(),
                days_per_week: 2,
                minutes_per_session: 30,
                focus_areas: vec![],
            },
            PlanID::from(1),
            Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        )
    }

    #[test]
    fn test_plan_summary() {
        assert_eq!(
            plan_summary(&plan()),
            format!(
                "{} 2024-01-02 Fitness & Gesundheit – Ganzkörper A/B (Anfänger, Draußen, 6 \
                 Wochen) [aktiv]",
                PlanID::from(1)
            )
        );
    }

    #[test]
    fn test_plan_details() {
        let plan = plan();
        let details = plan_details(&plan, catalog::builtin(), Some(2));

        assert_eq!(details.matches("Woche 2, ").count(), 2);
        assert!(!details.contains("Woche 1, "));
        assert!(details.contains("  Aufwärmen\n"));
        assert!(details.contains("  Hauptteil\n"));
        assert!(details.contains("  Abwärmen\n"));

        let full = plan_details(&plan, catalog::builtin(), None);

        assert_eq!(full.matches("Woche ").count(), plan.workouts.len());
    }

    #[test]
    fn test_plan_details_unknown_exercise() {
        let plan = plan();
        let details = plan_details(&plan, &Catalog::default(), Some(1));

        assert!(details.contains(&format!(
            "    {}: 1 × 5 min (",
            plan.workouts[0].exercises[0].exercise_id
        )));
    }

    #[test]
    fn test_catalog_exercise() {
        let exercise = CatalogExercise {
            id: "plank".into(),
            name: "Unterarmstütz".to_string(),
            category: Category::Strength,
            muscles: vec![
                (MuscleGroup::Abs, Stimulus::Primary),
                (MuscleGroup::LowerBack, Stimulus::Secondary),
            ],
            equipment: vec![Equipment::None],
            difficulty: FitnessLevel::Beginner,
            locations: vec![TrainingLocation::Home],
            instructions: vec![],
            tips: vec![],
            default_sets: None,
            default_reps: None,
            default_rest_seconds: None,
        };

        assert_eq!(
            catalog_exercise(&exercise),
            format!(
                "{:<32} Unterarmstütz | Kraft | Bauch, Unterer Rücken | Anfänger",
                "plank"
            )
        );
    }
}
