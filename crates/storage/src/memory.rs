use std::{
    collections::BTreeMap,
    sync::{Mutex, MutexGuard},
};

use fittutto_domain as domain;

type Plans = BTreeMap<domain::PlanID, domain::TrainingPlan>;

/// Volatile repository, e.g. for previews and tests.
#[derive(Default)]
pub struct InMemory {
    plans: Mutex<Plans>,
}

impl InMemory {
    #[must_use]
    pub fn new(plans: impl IntoIterator<Item = domain::TrainingPlan>) -> Self {
        Self {
            plans: Mutex::new(plans.into_iter().map(|p| (p.id, p)).collect()),
        }
    }

    fn plans(&self) -> Result<MutexGuard<'_, Plans>, domain::StorageError> {
        self.plans
            .lock()
            .map_err(|err| domain::StorageError::Other(err.to_string().into()))
    }
}

impl domain::TrainingPlanRepository for InMemory {
    async fn read_training_plans(&self) -> Result<Vec<domain::TrainingPlan>, domain::ReadError> {
        Ok(self.plans()?.values().cloned().collect())
    }

    async fn create_training_plan(
        &self,
        plan: domain::TrainingPlan,
    ) -> Result<domain::TrainingPlan, domain::CreateError> {
        let mut plans = self.plans()?;
        if plans.contains_key(&plan.id) {
            return Err(domain::CreateError::Conflict);
        }
        plans.insert(plan.id, plan.clone());
        Ok(plan)
    }

    async fn replace_training_plan(
        &self,
        plan: domain::TrainingPlan,
    ) -> Result<domain::TrainingPlan, domain::UpdateError> {
        let mut plans = self.plans()?;
        match plans.get_mut(&plan.id) {
            Some(stored) => {
                *stored = plan.clone();
                Ok(plan)
            }
            None => Err(domain::UpdateError::NotFound),
        }
    }

    async fn delete_training_plan(
        &self,
        id: domain::PlanID,
    ) -> Result<domain::PlanID, domain::DeleteError> {
        match self.plans()?.remove(&id) {
            Some(_) => Ok(id),
            None => Err(domain::DeleteError::NotFound),
        }
    }
}
