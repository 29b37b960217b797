#![warn(clippy::pedantic)]

use mesoplan_domain as domain;
use uuid::Uuid;

pub mod file;
pub mod memory;

/// Persisted form of a plan. Slot-level problems are tolerated on
/// hydration; name and description must still be valid.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct PlanRecord {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub slots: Vec<SlotRecord>,
}

impl From<domain::Plan> for PlanRecord {
    fn from(value: domain::Plan) -> Self {
        Self::from(&value)
    }
}

impl From<&domain::Plan> for PlanRecord {
    fn from(value: &domain::Plan) -> Self {
        Self {
            id: *value.id,
            name: value.name.to_string(),
            description: value.description.to_string(),
            slots: value.slots.iter().map(SlotRecord::from).collect(),
        }
    }
}

impl TryFrom<PlanRecord> for domain::Plan {
    type Error = RecordError;

    fn try_from(value: PlanRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id.into(),
            name: domain::Name::new(&value.name)?,
            description: domain::Description::new(&value.description)?,
            slots: value.slots.iter().filter_map(SlotRecord::hydrate).collect(),
            dirty: false,
        })
    }
}

/// Persisted form of one slot. `id` is optional because legacy records
/// predate slot ids.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct SlotRecord {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub day: u8,
    pub muscle: u8,
    pub sets: u32,
    #[serde(default)]
    pub rep_min: Option<u32>,
    #[serde(default)]
    pub rep_max: Option<u32>,
    #[serde(default)]
    pub tempo: Option<String>,
    #[serde(default)]
    pub rir: Option<u8>,
    #[serde(default)]
    pub rpe: Option<f32>,
    #[serde(default)]
    pub sort_order: u32,
}

impl From<&domain::MuscleSlot> for SlotRecord {
    fn from(value: &domain::MuscleSlot) -> Self {
        Self {
            id: Some(*value.id),
            day: value.day.index(),
            muscle: value.target.code(),
            sets: *value.sets,
            rep_min: value.rep_range.map(|range| *range.min),
            rep_max: value.rep_range.map(|range| *range.max),
            tempo: value.tempo.map(|tempo| tempo.to_string()),
            rir: value.rir.map(|rir| *rir),
            rpe: value.rpe.map(f32::from),
            sort_order: value.sort_order,
        }
    }
}

impl SlotRecord {
    /// Best-effort hydration. An invalid day drops the whole slot; a
    /// missing id gets a fresh one; malformed detail fields are dropped
    /// individually. An unknown muscle code is kept as-is so it
    /// round-trips on the next save.
    #[must_use]
    pub fn hydrate(&self) -> Option<domain::MuscleSlot> {
        let day = domain::Day::try_from(self.day).ok()?;
        let rep_range = self.rep_min.zip(self.rep_max).and_then(|(min, max)| {
            let min = domain::Reps::new(min).ok()?;
            let max = domain::Reps::new(max).ok()?;
            domain::RepRange::new(min, max).ok()
        });
        Some(domain::MuscleSlot {
            id: self.id.map_or_else(domain::SlotID::new, Into::into),
            day,
            target: domain::MuscleTarget::from_code(self.muscle),
            sets: domain::Sets::clamped(self.sets),
            rep_range,
            tempo: self
                .tempo
                .as_deref()
                .and_then(|tempo| domain::Tempo::try_from(tempo).ok()),
            rir: self.rir.and_then(|rir| domain::RIR::new(rir).ok()),
            rpe: self.rpe.and_then(|rpe| domain::RPE::new(rpe).ok()),
            sort_order: self.sort_order,
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct PresetRecord {
    pub name: String,
    pub slots: Vec<SlotRecord>,
}

impl TryFrom<PresetRecord> for domain::Preset {
    type Error = RecordError;

    fn try_from(value: PresetRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            name: domain::Name::new(&value.name)?,
            slots: value.slots.iter().filter_map(SlotRecord::hydrate).collect(),
        })
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ProgramTemplateRecord {
    pub owner: Uuid,
    pub name: String,
    pub description: String,
    pub days: Vec<ProgramDayRecord>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ProgramDayRecord {
    pub day: u8,
    pub title: String,
    pub modules: Vec<ProgramModuleRecord>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
pub struct ProgramModuleRecord {
    pub title: String,
    pub sort_order: u32,
    pub source_muscle: u8,
    pub status: String,
}

impl From<&domain::ProgramTemplate> for ProgramTemplateRecord {
    fn from(value: &domain::ProgramTemplate) -> Self {
        Self {
            owner: value.owner,
            name: value.name.to_string(),
            description: value.description.to_string(),
            days: value
                .days
                .iter()
                .map(|day| ProgramDayRecord {
                    day: day.day.index(),
                    title: day.title.clone(),
                    modules: day
                        .modules
                        .iter()
                        .map(|module| ProgramModuleRecord {
                            title: module.title.clone(),
                            sort_order: module.sort_order,
                            source_muscle: module.source_muscle_code,
                            status: module.status.as_str().to_string(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RecordError {
    #[error(transparent)]
    Name(#[from] domain::NameError),
    #[error(transparent)]
    Description(#[from] domain::DescriptionError),
}
