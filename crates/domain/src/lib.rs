#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod conversion;
mod error;
mod muscle;
mod name;
mod plan;
mod service;
mod slot;
mod volume;

pub use conversion::{
    ConversionService, ModuleStatus, ProgramDay, ProgramModule, ProgramRepository,
    ProgramTemplate, UNKNOWN_MUSCLE_LABEL, project,
};
pub use error::{ConvertError, DeleteError, ReadError, SaveError, StorageError};
pub use muscle::{
    BodyRegion, Landmarks, MuscleCodeError, MuscleDisplay, MuscleGroup, MuscleTarget, Property,
    Subdivision, Zone,
};
pub use name::{Description, DescriptionError, Name, NameError};
pub use plan::{
    Action, Editor, Patch, Plan, PlanID, PlanRepository, PlanService, Preset, PresetRepository,
    PresetService, SlotPatch,
};
pub use service::Service;
pub use slot::{
    Day, DayError, MuscleSlot, RIR, RIRError, RPE, RPEError, RepRange, RepRangeError, Reps,
    RepsError, Sets, SlotID, Tempo, TempoError,
};
pub use volume::{MuscleVolume, VolumeReport, VolumeSummary, analyze};
