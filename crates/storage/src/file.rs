#![allow(clippy::unused_async)]

use std::{fs, path::PathBuf};

use log::debug;
use mesoplan_domain as domain;
use serde::{Serialize, de::DeserializeOwned};

use crate::{PlanRecord, PresetRecord, ProgramTemplateRecord};

const PLANS_FILE: &str = "plans.json";
const PRESETS_FILE: &str = "presets.json";
const PROGRAMS_FILE: &str = "programs.json";

/// Stores each collection as one JSON file in a directory. A missing
/// file reads as an empty collection; writes go through a temporary
/// file and a rename so a failed write never truncates existing data.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn read<T: DeserializeOwned>(&self, file_name: &str) -> Result<Vec<T>, domain::StorageError> {
        let path = self.dir.join(file_name);
        if !path.exists() {
            return Ok(vec![]);
        }
        let contents = fs::read_to_string(&path).map_err(other)?;
        serde_json::from_str(&contents).map_err(other)
    }

    fn write<T: Serialize>(
        &self,
        file_name: &str,
        values: &[T],
    ) -> Result<(), domain::StorageError> {
        let contents = serde_json::to_string_pretty(values).map_err(other)?;
        let temp_path = self.dir.join(format!("{file_name}.tmp"));
        fs::write(&temp_path, contents).map_err(other)?;
        fs::rename(&temp_path, self.dir.join(file_name)).map_err(other)?;
        debug!("wrote {} entries to {file_name}", values.len());
        Ok(())
    }

    fn read_plan_records(&self) -> Result<Vec<PlanRecord>, domain::StorageError> {
        self.read(PLANS_FILE)
    }
}

fn other(err: impl std::error::Error + 'static) -> domain::StorageError {
    domain::StorageError::Other(Box::new(err))
}

impl domain::PlanRepository for FileStore {
    async fn read_plans(&self) -> Result<Vec<domain::Plan>, domain::ReadError> {
        self.read_plan_records()?
            .into_iter()
            .map(|record| {
                domain::Plan::try_from(record).map_err(|err| domain::ReadError::Other(Box::new(err)))
            })
            .collect()
    }

    async fn read_plan(&self, id: domain::PlanID) -> Result<domain::Plan, domain::ReadError> {
        let record = self
            .read_plan_records()?
            .into_iter()
            .find(|record| record.id == *id)
            .ok_or(domain::ReadError::NotFound)?;
        domain::Plan::try_from(record).map_err(|err| domain::ReadError::Other(Box::new(err)))
    }

    async fn create_plan(
        &self,
        name: domain::Name,
        description: domain::Description,
        slots: Vec<domain::MuscleSlot>,
    ) -> Result<domain::Plan, domain::SaveError> {
        let plan = domain::Plan {
            id: domain::PlanID::new(),
            name,
            description,
            slots,
            dirty: false,
        };
        let mut records = self.read_plan_records()?;
        records.push(PlanRecord::from(&plan));
        self.write(PLANS_FILE, &records)?;
        Ok(plan)
    }

    async fn replace_plan(&self, plan: domain::Plan) -> Result<domain::Plan, domain::SaveError> {
        let plan = domain::Plan {
            dirty: false,
            ..plan
        };
        let mut records = self.read_plan_records()?;
        let record = PlanRecord::from(&plan);
        match records.iter_mut().find(|r| r.id == record.id) {
            Some(existing) => *existing = record,
            None => records.push(record),
        }
        self.write(PLANS_FILE, &records)?;
        Ok(plan)
    }

    async fn delete_plan(
        &self,
        id: domain::PlanID,
    ) -> Result<domain::PlanID, domain::DeleteError> {
        let mut records = self.read_plan_records()?;
        records.retain(|record| record.id != *id);
        self.write(PLANS_FILE, &records)?;
        Ok(id)
    }
}

impl domain::PresetRepository for FileStore {
    async fn read_presets(&self) -> Result<Vec<domain::Preset>, domain::ReadError> {
        self.read::<PresetRecord>(PRESETS_FILE)?
            .into_iter()
            .map(|record| {
                domain::Preset::try_from(record)
                    .map_err(|err| domain::ReadError::Other(Box::new(err)))
            })
            .collect()
    }
}

impl domain::ProgramRepository for FileStore {
    async fn create_program(
        &self,
        template: domain::ProgramTemplate,
    ) -> Result<domain::ProgramTemplate, domain::SaveError> {
        let mut records: Vec<ProgramTemplateRecord> = self.read(PROGRAMS_FILE)?;
        records.push(ProgramTemplateRecord::from(&template));
        self.write(PROGRAMS_FILE, &records)?;
        Ok(template)
    }
}
