use log::{debug, error};
use uuid::Uuid;

use crate::{
    ConversionService, ConvertError, DeleteError, Plan, PlanID, PlanRepository, PlanService,
    Preset, PresetRepository, PresetService, ProgramRepository, ProgramTemplate, ReadError,
    SaveError, conversion,
};

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
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

impl<R: PlanRepository> PlanService for Service<R> {
    async fn get_plans(&self) -> Result<Vec<Plan>, ReadError> {
        log_on_error!(self.repository.read_plans(), ReadError, "get", "plans")
    }

    async fn get_plan(&self, id: PlanID) -> Result<Plan, ReadError> {
        log_on_error!(self.repository.read_plan(id), ReadError, "get", "plan")
    }

    /// Creates the plan if it has never been persisted, replaces it
    /// otherwise. The caller marks the editor saved with the returned
    /// plan's id; a failure leaves the in-memory state untouched for
    /// retry.
    async fn save_plan(&self, plan: Plan) -> Result<Plan, SaveError> {
        if plan.id.is_nil() {
            log_on_error!(
                self.repository
                    .create_plan(plan.name, plan.description, plan.slots),
                SaveError,
                "create",
                "plan"
            )
        } else {
            log_on_error!(
                self.repository.replace_plan(plan),
                SaveError,
                "replace",
                "plan"
            )
        }
    }

    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError> {
        log_on_error!(self.repository.delete_plan(id), DeleteError, "delete", "plan")
    }
}

impl<R: PresetRepository> PresetService for Service<R> {
    async fn get_presets(&self) -> Result<Vec<Preset>, ReadError> {
        log_on_error!(self.repository.read_presets(), ReadError, "get", "presets")
    }
}

impl<R: ProgramRepository> ConversionService for Service<R> {
    async fn convert_plan(
        &self,
        plan: &Plan,
        owner: Uuid,
    ) -> Result<ProgramTemplate, ConvertError> {
        let template = conversion::project(plan, owner);
        let created = log_on_error!(
            self.repository.create_program(template),
            SaveError,
            "create",
            "program"
        )?;
        Ok(created)
    }
}
