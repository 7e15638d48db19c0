use chrono::Utc;
use log::{debug, error};

use crate::{
    CreateError, DeleteError, ExerciseCatalog, FitnessLevel, PlanGenerationParams, PlanGenerator,
    PlanID, ReadError, TrainingPlan, TrainingPlanRepository, TrainingPlanService, UpdateError,
    UserID,
};

pub struct Service<R, C> {
    repository: R,
    catalog: C,
}

impl<R, C> Service<R, C>
where
    R: TrainingPlanRepository,
    C: ExerciseCatalog,
{
    pub fn new(repository: R, catalog: C) -> Self {
        Self {
            repository,
            catalog,
        }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    async fn user_plans(&self, user_id: UserID) -> Result<Vec<TrainingPlan>, ReadError> {
        let mut plans = self
            .repository
            .read_training_plans()
            .await?
            .into_iter()
            .filter(|p| p.user_id == user_id)
            .collect::<Vec<_>>();
        plans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(plans)
    }

    async fn plan(&self, id: PlanID) -> Result<TrainingPlan, ReadError> {
        self.repository
            .read_training_plans()
            .await?
            .into_iter()
            .find(|p| p.id == id)
            .ok_or(ReadError::NotFound)
    }

    async fn active_plan(&self, user_id: UserID) -> Result<TrainingPlan, ReadError> {
        self.user_plans(user_id)
            .await?
            .into_iter()
            .find(|p| p.is_active)
            .ok_or(ReadError::NotFound)
    }

    async fn deactivate_plans(&self, user_id: UserID, except: PlanID) -> Result<(), UpdateError> {
        for mut plan in self.user_plans(user_id).await? {
            if plan.is_active && plan.id != except {
                plan.is_active = false;
                plan.updated_at = Utc::now();
                self.repository.replace_training_plan(plan).await?;
            }
        }
        Ok(())
    }

    async fn create(&self, params: &PlanGenerationParams) -> Result<TrainingPlan, CreateError> {
        let plan = PlanGenerator::new(&self.catalog).generate_training_plan(params);
        let plan = self.repository.create_training_plan(plan).await?;
        self.deactivate_plans(plan.user_id, plan.id).await?;
        Ok(plan)
    }

    async fn activate(&self, id: PlanID) -> Result<TrainingPlan, UpdateError> {
        let mut plan = self.plan(id).await?;
        self.deactivate_plans(plan.user_id, plan.id).await?;
        if plan.is_active {
            return Ok(plan);
        }
        plan.is_active = true;
        plan.updated_at = Utc::now();
        self.repository.replace_training_plan(plan).await
    }

    async fn adjust(&self, id: PlanID, level: FitnessLevel) -> Result<TrainingPlan, UpdateError> {
        let plan = self.plan(id).await?;
        let adjusted = PlanGenerator::new(&self.catalog).adjust_plan_difficulty(&plan, level);
        self.repository.replace_training_plan(adjusted).await
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::Unavailable) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R, C> TrainingPlanService for Service<R, C>
where
    R: TrainingPlanRepository,
    C: ExerciseCatalog,
{
    async fn get_training_plans(&self, user_id: UserID) -> Result<Vec<TrainingPlan>, ReadError> {
        log_on_error!(self.user_plans(user_id), ReadError, "get", "training plans")
    }

    async fn get_training_plan(&self, id: PlanID) -> Result<TrainingPlan, ReadError> {
        log_on_error!(self.plan(id), ReadError, "get", "training plan")
    }

    async fn get_active_training_plan(&self, user_id: UserID) -> Result<TrainingPlan, ReadError> {
        log_on_error!(
            self.active_plan(user_id),
            ReadError,
            "get",
            "active training plan"
        )
    }

    async fn create_training_plan(
        &self,
        params: &PlanGenerationParams,
    ) -> Result<TrainingPlan, CreateError> {
        log_on_error!(self.create(params), CreateError, "create", "training plan")
    }

    async fn activate_training_plan(&self, id: PlanID) -> Result<TrainingPlan, UpdateError> {
        log_on_error!(self.activate(id), UpdateError, "activate", "training plan")
    }

    async fn adjust_training_plan(
        &self,
        id: PlanID,
        level: FitnessLevel,
    ) -> Result<TrainingPlan, UpdateError> {
        log_on_error!(
            self.adjust(id, level),
            UpdateError,
            "adjust",
            "training plan"
        )
    }

    async fn delete_training_plan(&self, id: PlanID) -> Result<PlanID, DeleteError> {
        log_on_error!(
            self.repository.delete_training_plan(id),
            DeleteError,
            "delete",
            "training plan"
        )
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, collections::BTreeSet};

    use pretty_assertions::assert_eq;

    use crate::{
        BlockRole, Equipment, FitnessGoal, StorageError, Target, TrainingLocation, catalog,
    };

    use super::*;

    #[derive(Default)]
    struct FakeRepository {
        plans: RefCell<Vec<TrainingPlan>>,
        unavailable: bool,
        read_only: bool,
    }

    impl TrainingPlanRepository for FakeRepository {
        async fn read_training_plans(&self) -> Result<Vec<TrainingPlan>, ReadError> {
            if self.unavailable {
                return Err(StorageError::Unavailable.into());
            }
            Ok(self.plans.borrow().clone())
        }

        async fn create_training_plan(
            &self,
            plan: TrainingPlan,
        ) -> Result<TrainingPlan, CreateError> {
            if self.unavailable {
                return Err(StorageError::Unavailable.into());
            }
            if self.read_only {
                return Err(CreateError::Other("read-only".into()));
            }
            let mut plans = self.plans.borrow_mut();
            if plans.iter().any(|p| p.id == plan.id) {
                return Err(CreateError::Conflict);
            }
            plans.push(plan.clone());
            Ok(plan)
        }

        async fn replace_training_plan(
            &self,
            plan: TrainingPlan,
        ) -> Result<TrainingPlan, UpdateError> {
            let mut plans = self.plans.borrow_mut();
            let Some(stored) = plans.iter_mut().find(|p| p.id == plan.id) else {
                return Err(UpdateError::NotFound);
            };
            *stored = plan.clone();
            Ok(plan)
        }

        async fn delete_training_plan(&self, id: PlanID) -> Result<PlanID, DeleteError> {
            let mut plans = self.plans.borrow_mut();
            let len = plans.len();
            plans.retain(|p| p.id != id);
            if plans.len() == len {
                return Err(DeleteError::NotFound);
            }
            Ok(id)
        }
    }

    fn service() -> Service<FakeRepository, &'static crate::Catalog> {
        Service::new(FakeRepository::default(), catalog::builtin())
    }

    fn params(user_id: u128, goal: FitnessGoal) -> PlanGenerationParams {
        PlanGenerationParams {
            user_id: UserID::from(user_id),
            goal,
            level: FitnessLevel::Beginner,
            location: TrainingLocation::Home,
            available_equipment: BTreeSet::from([Equipment::Dumbbell, Equipment::Mat]),
            days_per_week: 3,
            minutes_per_session: 45,
            focus_areas: vec![],
        }
    }

    fn active_plans(service: &Service<FakeRepository, &'static crate::Catalog>) -> Vec<PlanID> {
        service
            .repository
            .plans
            .borrow()
            .iter()
            .filter(|p| p.is_active)
            .map(|p| p.id)
            .collect()
    }

    #[tokio::test]
    async fn test_create_training_plan() {
        let service = service();

        let first = service
            .create_training_plan(&params(1, FitnessGoal::BuildMuscle))
            .await
            .unwrap();
        let other_user = service
            .create_training_plan(&params(2, FitnessGoal::StayFit))
            .await
            .unwrap();
        let second = service
            .create_training_plan(&params(1, FitnessGoal::LoseWeight))
            .await
            .unwrap();

        assert!(second.is_active);
        assert_eq!(active_plans(&service), vec![other_user.id, second.id]);
        assert_eq!(
            service
                .get_active_training_plan(UserID::from(1))
                .await
                .unwrap()
                .id,
            second.id
        );
        assert_eq!(
            service
                .get_training_plans(UserID::from(1))
                .await
                .unwrap()
                .iter()
                .map(|p| p.id)
                .collect::<BTreeSet<_>>(),
            BTreeSet::from([first.id, second.id])
        );
    }

    #[tokio::test]
    async fn test_create_training_plan_failure_keeps_active_plan() {
        let active = PlanGenerator::new(catalog::builtin())
            .generate_training_plan(&params(1, FitnessGoal::BuildMuscle));
        let service = Service::new(
            FakeRepository {
                plans: RefCell::new(vec![active.clone()]),
                read_only: true,
                ..FakeRepository::default()
            },
            catalog::builtin(),
        );

        assert!(matches!(
            service
                .create_training_plan(&params(1, FitnessGoal::StayFit))
                .await,
            Err(CreateError::Other(_))
        ));
        assert_eq!(active_plans(&service), vec![active.id]);
        assert_eq!(
            service
                .get_active_training_plan(UserID::from(1))
                .await
                .unwrap(),
            active
        );
    }

    #[tokio::test]
    async fn test_get_training_plans_newest_first() {
        let service = service();
        let first = service
            .create_training_plan(&params(1, FitnessGoal::BuildMuscle))
            .await
            .unwrap();
        let mut second = service
            .create_training_plan(&params(1, FitnessGoal::StayFit))
            .await
            .unwrap();
        second.created_at = first.created_at + chrono::Duration::days(1);
        service.repository.replace_training_plan(second.clone()).await.unwrap();

        assert_eq!(
            service
                .get_training_plans(UserID::from(1))
                .await
                .unwrap()
                .iter()
                .map(|p| p.id)
                .collect::<Vec<_>>(),
            vec![second.id, first.id]
        );
        assert!(service.get_training_plans(UserID::from(3)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_active_training_plan_not_found() {
        let service = service();

        assert!(matches!(
            service.get_active_training_plan(UserID::from(1)).await,
            Err(ReadError::NotFound)
        ));

        let plan = service
            .create_training_plan(&params(1, FitnessGoal::BuildMuscle))
            .await
            .unwrap();
        service.delete_training_plan(plan.id).await.unwrap();

        assert!(matches!(
            service.get_active_training_plan(UserID::from(1)).await,
            Err(ReadError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_activate_training_plan() {
        let service = service();
        let first = service
            .create_training_plan(&params(1, FitnessGoal::BuildMuscle))
            .await
            .unwrap();
        let second = service
            .create_training_plan(&params(1, FitnessGoal::StayFit))
            .await
            .unwrap();

        let activated = service.activate_training_plan(first.id).await.unwrap();

        assert!(activated.is_active);
        assert!(activated.updated_at >= first.updated_at);
        assert_eq!(active_plans(&service), vec![first.id]);

        let again = service.activate_training_plan(first.id).await.unwrap();

        assert_eq!(again, activated);
        assert_eq!(active_plans(&service), vec![first.id]);
        assert!(matches!(
            service.activate_training_plan(PlanID::from(7)).await,
            Err(UpdateError::NotFound)
        ));
        assert!(
            !service
                .get_training_plan(second.id)
                .await
                .unwrap()
                .is_active
        );
    }

    #[tokio::test]
    async fn test_adjust_training_plan() {
        let service = service();
        let plan = service
            .create_training_plan(&params(1, FitnessGoal::BuildMuscle))
            .await
            .unwrap();

        let adjusted = service
            .adjust_training_plan(plan.id, FitnessLevel::Professional)
            .await
            .unwrap();

        assert_eq!(adjusted.id, plan.id);
        assert_eq!(adjusted.level, FitnessLevel::Professional);
        assert!(adjusted.is_active);
        assert_eq!(
            service.get_training_plan(plan.id).await.unwrap(),
            adjusted
        );
        for exercise in adjusted
            .workouts
            .iter()
            .flat_map(|w| w.exercises.iter())
            .filter(|e| e.block_role == BlockRole::Main)
        {
            assert!(matches!(exercise.target, Target::Reps(_)));
            assert!(exercise.sets >= 5);
        }
    }

    #[tokio::test]
    async fn test_delete_training_plan() {
        let service = service();
        let plan = service
            .create_training_plan(&params(1, FitnessGoal::BuildMuscle))
            .await
            .unwrap();

        assert_eq!(service.delete_training_plan(plan.id).await.unwrap(), plan.id);
        assert!(matches!(
            service.delete_training_plan(plan.id).await,
            Err(DeleteError::NotFound)
        ));
        assert!(matches!(
            service.get_training_plan(plan.id).await,
            Err(ReadError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_storage_unavailable() {
        let service = Service::new(
            FakeRepository {
                unavailable: true,
                ..FakeRepository::default()
            },
            catalog::builtin(),
        );

        assert!(matches!(
            service.get_training_plans(UserID::from(1)).await,
            Err(ReadError::Storage(StorageError::Unavailable))
        ));
        assert!(matches!(
            service
                .create_training_plan(&params(1, FitnessGoal::BuildMuscle))
                .await,
            Err(CreateError::Storage(StorageError::Unavailable))
        ));
        assert!(matches!(
            service.activate_training_plan(PlanID::from(1)).await,
            Err(UpdateError::Storage(StorageError::Unavailable))
        ));
    }
}
