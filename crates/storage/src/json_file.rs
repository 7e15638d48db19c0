use std::{
    fs, io,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use fittutto_domain as domain;
use log::debug;
use strum::AsRefStr;
use uuid::Uuid;

/// Repository keeping one JSON document per plan in a directory.
///
/// Documents are written to a temporary file first and then renamed, so an interrupted write
/// never leaves a truncated document behind.
#[derive(Clone, Debug)]
pub struct JsonFile {
    directory: PathBuf,
}

impl JsonFile {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn store(&self, store: Store) -> PathBuf {
        self.directory.join(store.as_ref())
    }

    fn path(&self, store: Store, id: Uuid) -> PathBuf {
        self.store(store).join(format!("{id}.json"))
    }

    fn get_all<R, V>(&self, store: Store) -> Result<Vec<R>, JsonFileError>
    where
        R: TryFrom<V, Error = domain::CodeError>,
        V: for<'de> serde::Deserialize<'de>,
    {
        let directory = self.store(store);
        let entries = match fs::read_dir(&directory) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("{} does not exist yet", directory.display());
                return Ok(vec![]);
            }
            Err(err) => return Err(err.into()),
        };

        let mut paths = vec![];
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_some_and(|e| e == "json") {
                paths.push(path);
            } else {
                debug!("ignoring {}", path.display());
            }
        }
        paths.sort();

        let mut result = vec![];
        for path in paths {
            let value: V = serde_json::from_slice(&fs::read(&path)?)?;
            result.push(R::try_from(value)?);
        }
        Ok(result)
    }

    fn put<V: serde::Serialize>(
        &self,
        store: Store,
        id: Uuid,
        value: &V,
    ) -> Result<(), JsonFileError> {
        fs::create_dir_all(self.store(store))?;
        let path = self.path(store, id);
        let temporary = path.with_extension("json.tmp");
        fs::write(&temporary, serde_json::to_vec_pretty(value)?)?;
        fs::rename(&temporary, &path)?;
        Ok(())
    }

    fn exists(&self, store: Store, id: Uuid) -> Result<bool, JsonFileError> {
        Ok(self.path(store, id).try_exists()?)
    }
}

impl domain::TrainingPlanRepository for JsonFile {
    async fn read_training_plans(&self) -> Result<Vec<domain::TrainingPlan>, domain::ReadError> {
        let mut plans = self
            .get_all::<domain::TrainingPlan, TrainingPlan>(Store::TrainingPlans)
            .map_err(domain::StorageError::from)?;
        plans.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        Ok(plans)
    }

    async fn create_training_plan(
        &self,
        plan: domain::TrainingPlan,
    ) -> Result<domain::TrainingPlan, domain::CreateError> {
        if self
            .exists(Store::TrainingPlans, *plan.id)
            .map_err(domain::StorageError::from)?
        {
            return Err(domain::CreateError::Conflict);
        }
        self.put(Store::TrainingPlans, *plan.id, &TrainingPlan::from(&plan))
            .map_err(domain::StorageError::from)?;
        Ok(plan)
    }

    async fn replace_training_plan(
        &self,
        plan: domain::TrainingPlan,
    ) -> Result<domain::TrainingPlan, domain::UpdateError> {
        if !self
            .exists(Store::TrainingPlans, *plan.id)
            .map_err(domain::StorageError::from)?
        {
            return Err(domain::UpdateError::NotFound);
        }
        self.put(Store::TrainingPlans, *plan.id, &TrainingPlan::from(&plan))
            .map_err(domain::StorageError::from)?;
        Ok(plan)
    }

    async fn delete_training_plan(
        &self,
        id: domain::PlanID,
    ) -> Result<domain::PlanID, domain::DeleteError> {
        match fs::remove_file(self.path(Store::TrainingPlans, *id)) {
            Ok(()) => Ok(id),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Err(domain::DeleteError::NotFound),
            Err(err) => Err(domain::StorageError::from(JsonFileError::from(err)).into()),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum JsonFileError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("invalid data: {0}")]
    InvalidData(#[from] domain::CodeError),
}

impl From<JsonFileError> for domain::StorageError {
    fn from(value: JsonFileError) -> Self {
        domain::StorageError::Other(Box::new(value))
    }
}

#[derive(AsRefStr, Clone, Copy)]
pub enum Store {
    #[strum(serialize = "training_plans")]
    TrainingPlans,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct TrainingPlan {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub description: String,
    pub goal: u8,
    pub level: u8,
    pub location: u8,
    pub split_type: u8,
    pub duration_weeks: u32,
    pub days_per_week: u32,
    pub workouts: Vec<PlannedWorkout>,
    pub is_active: bool,
    pub is_template: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&domain::TrainingPlan> for TrainingPlan {
    fn from(value: &domain::TrainingPlan) -> Self {
        Self {
            id: *value.id,
            user_id: *value.user_id,
            name: value.name.clone(),
            description: value.description.clone(),
            goal: value.goal as u8,
            level: value.level as u8,
            location: value.location as u8,
            split_type: value.split_type as u8,
            duration_weeks: value.duration_weeks,
            days_per_week: value.days_per_week,
            workouts: value.workouts.iter().map(PlannedWorkout::from).collect(),
            is_active: value.is_active,
            is_template: value.is_template,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl TryFrom<TrainingPlan> for domain::TrainingPlan {
    type Error = domain::CodeError;

    fn try_from(value: TrainingPlan) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            user_id: value.user_id.into(),
            name: value.name,
            description: value.description,
            goal: domain::FitnessGoal::try_from(value.goal)?,
            level: domain::FitnessLevel::try_from(value.level)?,
            location: domain::TrainingLocation::try_from(value.location)?,
            split_type: domain::SplitType::try_from(value.split_type)?,
            duration_weeks: value.duration_weeks,
            days_per_week: value.days_per_week,
            workouts: value
                .workouts
                .into_iter()
                .map(domain::PlannedWorkout::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            is_active: value.is_active,
            is_template: value.is_template,
            created_at: value.created_at,
            updated_at: value.updated_at,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct PlannedWorkout {
    pub id: Uuid,
    pub plan_id: Uuid,
    pub day_of_week: u8,
    pub week_number: u32,
    pub name: String,
    pub description: String,
    pub focus_areas: Vec<u8>,
    pub estimated_duration_minutes: u32,
    pub exercises: Vec<PlannedExercise>,
    pub order: u32,
}

impl From<&domain::PlannedWorkout> for PlannedWorkout {
    fn from(value: &domain::PlannedWorkout) -> Self {
        Self {
            id: *value.id,
            plan_id: *value.plan_id,
            day_of_week: value.day_of_week as u8,
            week_number: value.week_number,
            name: value.name.clone(),
            description: value.description.clone(),
            focus_areas: value.focus_areas.iter().map(|m| *m as u8).collect(),
            estimated_duration_minutes: value.estimated_duration_minutes,
            exercises: value.exercises.iter().map(PlannedExercise::from).collect(),
            order: value.order,
        }
    }
}

impl TryFrom<PlannedWorkout> for domain::PlannedWorkout {
    type Error = domain::CodeError;

    fn try_from(value: PlannedWorkout) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            plan_id: value.plan_id.into(),
            day_of_week: domain::DayOfWeek::try_from(value.day_of_week)?,
            week_number: value.week_number,
            name: value.name,
            description: value.description,
            focus_areas: value
                .focus_areas
                .into_iter()
                .map(domain::MuscleGroup::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            estimated_duration_minutes: value.estimated_duration_minutes,
            exercises: value
                .exercises
                .into_iter()
                .map(domain::PlannedExercise::try_from)
                .collect::<Result<Vec<_>, _>>()?,
            order: value.order,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct PlannedExercise {
    pub id: Uuid,
    pub workout_id: Uuid,
    pub exercise_id: String,
    pub block_role: u8,
    pub sets: u32,
    pub target: Target,
    pub rest_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub order: u32,
}

impl From<&domain::PlannedExercise> for PlannedExercise {
    fn from(value: &domain::PlannedExercise) -> Self {
        Self {
            id: *value.id,
            workout_id: *value.workout_id,
            exercise_id: value.exercise_id.to_string(),
            block_role: value.block_role as u8,
            sets: value.sets,
            target: value.target.into(),
            rest_seconds: value.rest_seconds,
            notes: value.notes.clone(),
            order: value.order,
        }
    }
}

impl TryFrom<PlannedExercise> for domain::PlannedExercise {
    type Error = domain::CodeError;

    fn try_from(value: PlannedExercise) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            workout_id: value.workout_id.into(),
            exercise_id: value.exercise_id.into(),
            block_role: domain::BlockRole::try_from(value.block_role)?,
            sets: value.sets,
            target: value.target.into(),
            rest_seconds: value.rest_seconds,
            notes: value.notes,
            order: value.order,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Target {
    Reps(u32),
    DurationSeconds(u32),
}

impl From<domain::Target> for Target {
    fn from(value: domain::Target) -> Self {
        match value {
            domain::Target::Reps(reps) => Target::Reps(reps),
            domain::Target::Duration(seconds) => Target::DurationSeconds(seconds),
        }
    }
}

impl From<Target> for domain::Target {
    fn from(value: Target) -> Self {
        match value {
            Target::Reps(reps) => domain::Target::Reps(reps),
            Target::DurationSeconds(seconds) => domain::Target::Duration(seconds),
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::TrainingPlanRepository;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::tests::data::plan;

    use super::*;

    #[test]
    fn test_training_plan_try_from() {
        let plan = plan(1, 1);

        assert_eq!(
            domain::TrainingPlan::try_from(TrainingPlan::from(&plan)).unwrap(),
            plan
        );
    }

    #[rstest]
    #[case::goal(|p: &mut TrainingPlan| p.goal = 99, "fitness goal")]
    #[case::level(|p: &mut TrainingPlan| p.level = 99, "fitness level")]
    #[case::location(|p: &mut TrainingPlan| p.location = 99, "training location")]
    #[case::split_type(|p: &mut TrainingPlan| p.split_type = 99, "split type")]
    #[case::day_of_week(|p: &mut TrainingPlan| p.workouts[0].day_of_week = 99, "day of week")]
    #[case::focus_area(|p: &mut TrainingPlan| p.workouts[0].focus_areas.push(99), "muscle group")]
    #[case::block_role(
        |p: &mut TrainingPlan| p.workouts[0].exercises[0].block_role = 99,
        "block role"
    )]
    fn test_training_plan_try_from_invalid_code(
        #[case] corrupt: fn(&mut TrainingPlan),
        #[case] what: &'static str,
    ) {
        let mut dto = TrainingPlan::from(&plan(1, 1));
        corrupt(&mut dto);

        assert_eq!(
            domain::TrainingPlan::try_from(dto).unwrap_err(),
            domain::CodeError::InvalidCode(what, 99)
        );
    }

    #[test]
    fn test_planned_exercise_serde() {
        let plan = plan(1, 1);
        let obj = PlannedExercise::from(&plan.workouts[0].exercises[0]);
        let serialized = json!(obj);

        assert_eq!(serialized["target"], json!({ "duration_seconds": 300 }));
        assert_eq!(
            serde_json::from_value::<PlannedExercise>(serialized).unwrap(),
            obj
        );
    }

    #[tokio::test]
    async fn test_read_training_plans_missing_directory() {
        let directory = tempfile::tempdir().unwrap();
        let storage = JsonFile::new(directory.path().join("missing"));

        assert_eq!(storage.read_training_plans().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_create_training_plan() {
        let directory = tempfile::tempdir().unwrap();
        let storage = JsonFile::new(directory.path());

        storage.create_training_plan(plan(2, 1)).await.unwrap();
        storage.create_training_plan(plan(1, 1)).await.unwrap();

        assert!(
            directory
                .path()
                .join("training_plans")
                .join(format!("{}.json", *domain::PlanID::from(1)))
                .is_file()
        );
        assert!(matches!(
            storage.create_training_plan(plan(1, 2)).await,
            Err(domain::CreateError::Conflict)
        ));
        assert_eq!(
            storage.read_training_plans().await.unwrap(),
            vec![plan(1, 1), plan(2, 1)]
        );
    }

    #[tokio::test]
    async fn test_replace_training_plan() {
        let directory = tempfile::tempdir().unwrap();
        let storage = JsonFile::new(directory.path());
        storage.create_training_plan(plan(1, 1)).await.unwrap();
        let mut replaced = plan(1, 1);
        replaced.is_active = false;
        replaced.name = "Umbenannt".to_string();

        storage
            .replace_training_plan(replaced.clone())
            .await
            .unwrap();

        assert_eq!(storage.read_training_plans().await.unwrap(), vec![replaced]);
        assert!(matches!(
            storage.replace_training_plan(plan(2, 1)).await,
            Err(domain::UpdateError::NotFound)
        ));
        assert_eq!(
            fs::read_dir(directory.path().join("training_plans"))
                .unwrap()
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn test_delete_training_plan() {
        let directory = tempfile::tempdir().unwrap();
        let storage = JsonFile::new(directory.path());
        storage.create_training_plan(plan(1, 1)).await.unwrap();

        assert_eq!(
            storage.delete_training_plan(1.into()).await.unwrap(),
            domain::PlanID::from(1)
        );
        assert!(matches!(
            storage.delete_training_plan(1.into()).await,
            Err(domain::DeleteError::NotFound)
        ));
        assert_eq!(storage.read_training_plans().await.unwrap(), vec![]);
    }

    #[tokio::test]
    async fn test_read_training_plans_ignores_other_files() {
        let directory = tempfile::tempdir().unwrap();
        let storage = JsonFile::new(directory.path());
        storage.create_training_plan(plan(1, 1)).await.unwrap();
        fs::write(
            directory.path().join("training_plans").join("notes.txt"),
            "",
        )
        .unwrap();
        fs::write(
            directory
                .path()
                .join("training_plans")
                .join("unfinished.json.tmp"),
            "{",
        )
        .unwrap();

        assert_eq!(storage.read_training_plans().await.unwrap(), vec![plan(1, 1)]);
    }

    #[tokio::test]
    async fn test_read_training_plans_invalid_document() {
        let directory = tempfile::tempdir().unwrap();
        let storage = JsonFile::new(directory.path());
        storage.create_training_plan(plan(1, 1)).await.unwrap();
        fs::write(
            directory.path().join("training_plans").join("broken.json"),
            "{\"id\": 1}",
        )
        .unwrap();

        assert!(matches!(
            storage.read_training_plans().await,
            Err(domain::ReadError::Storage(domain::StorageError::Other(_)))
        ));
    }
}
