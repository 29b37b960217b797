#![allow(clippy::unused_async)]

use std::cell::{Cell, RefCell};

use mesoplan_domain as domain;

use crate::{PlanRecord, PresetRecord, ProgramTemplateRecord};

/// Keeps all collections in memory. Intended for tests and as a
/// stand-in while no data directory is configured; can simulate a lost
/// connection.
#[derive(Default)]
pub struct InMemoryStore {
    plans: RefCell<Vec<PlanRecord>>,
    presets: RefCell<Vec<PresetRecord>>,
    programs: RefCell<Vec<ProgramTemplateRecord>>,
    offline: Cell<bool>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.set(offline);
    }

    pub fn add_preset(&self, record: PresetRecord) {
        self.presets.borrow_mut().push(record);
    }

    #[must_use]
    pub fn program_count(&self) -> usize {
        self.programs.borrow().len()
    }

    fn check_connection(&self) -> Result<(), domain::StorageError> {
        if self.offline.get() {
            return Err(domain::StorageError::NoConnection);
        }
        Ok(())
    }
}

impl domain::PlanRepository for InMemoryStore {
    async fn read_plans(&self) -> Result<Vec<domain::Plan>, domain::ReadError> {
        self.check_connection()?;
        self.plans
            .borrow()
            .iter()
            .map(|record| {
                domain::Plan::try_from(record.clone())
                    .map_err(|err| domain::ReadError::Other(Box::new(err)))
            })
            .collect()
    }

    async fn read_plan(&self, id: domain::PlanID) -> Result<domain::Plan, domain::ReadError> {
        self.check_connection()?;
        let record = self
            .plans
            .borrow()
            .iter()
            .find(|record| record.id == *id)
            .cloned()
            .ok_or(domain::ReadError::NotFound)?;
        domain::Plan::try_from(record).map_err(|err| domain::ReadError::Other(Box::new(err)))
    }

    async fn create_plan(
        &self,
        name: domain::Name,
        description: domain::Description,
        slots: Vec<domain::MuscleSlot>,
    ) -> Result<domain::Plan, domain::SaveError> {
        self.check_connection()?;
        let plan = domain::Plan {
            id: domain::PlanID::new(),
            name,
            description,
            slots,
            dirty: false,
        };
        self.plans.borrow_mut().push(PlanRecord::from(&plan));
        Ok(plan)
    }

    async fn replace_plan(&self, plan: domain::Plan) -> Result<domain::Plan, domain::SaveError> {
        self.check_connection()?;
        let plan = domain::Plan {
            dirty: false,
            ..plan
        };
        let record = PlanRecord::from(&plan);
        let mut records = self.plans.borrow_mut();
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        Ok(plan)
    }

    async fn delete_plan(
        &self,
        id: domain::PlanID,
    ) -> Result<domain::PlanID, domain::DeleteError> {
        self.check_connection()?;
        self.plans.borrow_mut().retain(|record| record.id != *id);
        Ok(id)
    }
}

impl domain::PresetRepository for InMemoryStore {
    async fn read_presets(&self) -> Result<Vec<domain::Preset>, domain::ReadError> {
        self.check_connection()?;
        self.presets
            .borrow()
            .iter()
            .map(|record| {
                domain::Preset::try_from(record.clone())
                    .map_err(|err| domain::ReadError::Other(Box::new(err)))
            })
            .collect()
    }
}

impl domain::ProgramRepository for InMemoryStore {
    async fn create_program(
        &self,
        template: domain::ProgramTemplate,
    ) -> Result<domain::ProgramTemplate, domain::SaveError> {
        self.check_connection()?;
        self.programs
            .borrow_mut()
            .push(ProgramTemplateRecord::from(&template));
        Ok(template)
    }
}

#[cfg(test)]
mod tests {
    use domain::{
        ConversionService, PlanRepository, PlanService, PresetService, Service,
    };
    use pretty_assertions::assert_eq;

    use crate::SlotRecord;

    use super::*;

    fn name(value: &str) -> domain::Name {
        domain::Name::new(value).unwrap()
    }

    fn plan_with_slots() -> domain::Plan {
        let mut plan = domain::Plan::new(name("Upper Lower"));
        plan.slots = vec![domain::MuscleSlot::new(
            domain::Day::Monday,
            domain::MuscleTarget::Group(domain::MuscleGroup::Chest),
            domain::Sets::default(),
            0,
        )];
        plan.dirty = true;
        plan
    }

    #[tokio::test]
    async fn test_save_plan_creates_when_unpersisted() {
        let service = Service::new(InMemoryStore::new());

        let saved = service.save_plan(plan_with_slots()).await.unwrap();

        assert!(!saved.id.is_nil());
        assert!(!saved.dirty);
        assert_eq!(service.get_plans().await.unwrap(), vec![saved]);
    }

    #[tokio::test]
    async fn test_save_plan_replaces_when_persisted() {
        let service = Service::new(InMemoryStore::new());
        let saved = service.save_plan(plan_with_slots()).await.unwrap();

        let renamed = service
            .save_plan(domain::Plan {
                name: name("Full Body"),
                ..saved.clone()
            })
            .await
            .unwrap();

        assert_eq!(renamed.id, saved.id);
        let plans = service.get_plans().await.unwrap();
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].name, name("Full Body"));
    }

    #[tokio::test]
    async fn test_get_plan_not_found() {
        let service = Service::new(InMemoryStore::new());

        assert!(matches!(
            service.get_plan(domain::PlanID::new()).await,
            Err(domain::ReadError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_plan() {
        let service = Service::new(InMemoryStore::new());
        let saved = service.save_plan(plan_with_slots()).await.unwrap();

        service.delete_plan(saved.id).await.unwrap();

        assert!(service.get_plans().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_presets() {
        let store = InMemoryStore::new();
        store.add_preset(PresetRecord {
            name: "Push Pull Legs".to_string(),
            slots: vec![SlotRecord {
                id: None,
                day: 1,
                muscle: domain::MuscleGroup::Chest as u8,
                sets: 4,
                rep_min: None,
                rep_max: None,
                tempo: None,
                rir: None,
                rpe: None,
                sort_order: 0,
            }],
        });
        let service = Service::new(store);

        let presets = service.get_presets().await.unwrap();

        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].name, name("Push Pull Legs"));
        assert!(!presets[0].slots[0].id.is_nil());
    }

    #[tokio::test]
    async fn test_convert_plan_returns_template() {
        let service = Service::new(InMemoryStore::new());
        let plan = plan_with_slots();

        let template = service
            .convert_plan(&plan, uuid::Uuid::nil())
            .await
            .unwrap();

        assert_eq!(template.module_count(), 1);
        assert_eq!(template.days[0].title, "Chest");
    }

    #[tokio::test]
    async fn test_create_program_persists_record() {
        let store = InMemoryStore::new();
        let plan = plan_with_slots();
        let template = domain::project(&plan, uuid::Uuid::nil());

        domain::ProgramRepository::create_program(&store, template)
            .await
            .unwrap();

        assert_eq!(store.program_count(), 1);
    }

    #[tokio::test]
    async fn test_offline_store_propagates_no_connection() {
        let store = InMemoryStore::new();
        store.set_offline(true);
        let service = Service::new(store);

        assert!(matches!(
            service.get_plans().await,
            Err(domain::ReadError::Storage(
                domain::StorageError::NoConnection
            ))
        ));
        assert!(matches!(
            service.save_plan(plan_with_slots()).await,
            Err(domain::SaveError::Storage(
                domain::StorageError::NoConnection
            ))
        ));
    }

    #[tokio::test]
    async fn test_failed_save_leaves_store_unchanged() {
        let store = InMemoryStore::new();
        let saved = store
            .create_plan(
                name("Upper Lower"),
                domain::Description::default(),
                vec![],
            )
            .await
            .unwrap();

        store.set_offline(true);
        let result = store
            .replace_plan(domain::Plan {
                name: name("Full Body"),
                ..saved.clone()
            })
            .await;
        assert!(result.is_err());

        store.set_offline(false);
        assert_eq!(store.read_plans().await.unwrap(), vec![saved]);
    }
}
