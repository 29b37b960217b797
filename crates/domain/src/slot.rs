use std::{fmt, slice::Iter};

use derive_more::{Deref, Display, Into};
use uuid::Uuid;

use crate::{MuscleTarget, Property};

/// Training day of the week, indexed 1 (Monday) to 7 (Sunday).
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Day {
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
    Sunday = 7,
}

impl Day {
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }
}

impl Property for Day {
    fn iter() -> Iter<'static, Day> {
        static DAYS: [Day; 7] = [
            Day::Monday,
            Day::Tuesday,
            Day::Wednesday,
            Day::Thursday,
            Day::Friday,
            Day::Saturday,
            Day::Sunday,
        ];
        DAYS.iter()
    }

    #[must_use]
    fn name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl TryFrom<u8> for Day {
    type Error = DayError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Day::iter()
            .find(|d| d.index() == value)
            .copied()
            .ok_or(DayError::OutOfRange(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DayError {
    #[error("Day index must be in the range 1 to 7 ({0})")]
    OutOfRange(u8),
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SlotID(Uuid);

impl SlotID {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    #[must_use]
    pub fn nil() -> Self {
        Self(Uuid::nil())
    }

    #[must_use]
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for SlotID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for SlotID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// Weekly working-set count of one slot, clamped to 1 to 20.
#[derive(Deref, Display, Into, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Sets(u32);

impl Sets {
    pub const MIN: Sets = Sets(1);
    pub const MAX: Sets = Sets(20);

    #[must_use]
    pub fn clamped(value: u32) -> Self {
        Self(value.clamp(*Sets::MIN, *Sets::MAX))
    }
}

impl Default for Sets {
    fn default() -> Self {
        Sets(3)
    }
}

#[derive(Deref, Display, Into, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Reps(u32);

impl Reps {
    pub fn new(value: u32) -> Result<Self, RepsError> {
        if !(1..100).contains(&value) {
            return Err(RepsError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepsError {
    #[error("Reps must be in the range 1 to 99")]
    OutOfRange,
}

/// Target rep range of one slot. Absent ranges default to 8 to 12.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct RepRange {
    pub min: Reps,
    pub max: Reps,
}

impl RepRange {
    pub fn new(min: Reps, max: Reps) -> Result<Self, RepRangeError> {
        if min > max {
            return Err(RepRangeError::Inverted);
        }

        Ok(Self { min, max })
    }
}

impl Default for RepRange {
    fn default() -> Self {
        Self {
            min: Reps(8),
            max: Reps(12),
        }
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RepRangeError {
    #[error("Minimum reps must not exceed maximum reps")]
    Inverted,
}

/// Four phase durations in whole seconds: eccentric, pause at the
/// bottom, concentric, pause at the top.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub struct Tempo([u8; 4]);

impl Tempo {
    pub fn new(
        eccentric: u8,
        pause_bottom: u8,
        concentric: u8,
        pause_top: u8,
    ) -> Result<Self, TempoError> {
        let phases = [eccentric, pause_bottom, concentric, pause_top];

        if phases.iter().any(|p| *p > 9) {
            return Err(TempoError::PhaseTooLong);
        }

        Ok(Self(phases))
    }

    #[must_use]
    pub fn total_seconds(self) -> u32 {
        self.0.iter().map(|p| u32::from(*p)).sum()
    }
}

impl TryFrom<&str> for Tempo {
    type Error = TempoError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let digits = value
            .chars()
            .map(|c| c.to_digit(10))
            .collect::<Option<Vec<u32>>>()
            .ok_or(TempoError::InvalidFormat)?;
        let phases: [u32; 4] = digits.try_into().map_err(|_| TempoError::InvalidFormat)?;

        #[allow(clippy::cast_possible_truncation)]
        Ok(Self(phases.map(|p| p as u8)))
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}{}", self.0[0], self.0[1], self.0[2], self.0[3])
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TempoError {
    #[error("Tempo must be exactly 4 digits")]
    InvalidFormat,
    #[error("Tempo phases must be 9 seconds or less")]
    PhaseTooLong,
}

/// Reps in reserve, 0 to 10.
#[derive(Deref, Display, Into, Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RIR(u8);

impl RIR {
    pub fn new(value: u8) -> Result<Self, RIRError> {
        if value > 10 {
            return Err(RIRError::OutOfRange);
        }

        Ok(Self(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RIRError {
    #[error("RIR must be in the range 0 to 10")]
    OutOfRange,
}

/// Rate of perceived exertion, 1.0 to 10.0 in half steps, stored in
/// tenths.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct RPE(u8);

impl RPE {
    pub const FIVE: RPE = RPE(50);
    pub const TEN: RPE = RPE(100);

    pub fn new(value: f32) -> Result<Self, RPEError> {
        if !(1.0..=10.0).contains(&value) {
            return Err(RPEError::OutOfRange);
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let v = (value * 10.0) as u8;

        if v % 5 != 0 {
            return Err(RPEError::InvalidResolution);
        }

        Ok(Self(v))
    }
}

impl From<RPE> for f32 {
    fn from(value: RPE) -> Self {
        f32::from(value.0) / 10.0
    }
}

impl fmt::Display for RPE {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", f32::from(*self))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RPEError {
    #[error("RPE must be in the range 1.0 to 10.0")]
    OutOfRange,
    #[error("RPE must be a multiple of 0.5")]
    InvalidResolution,
}

/// One muscle placed on one day of the week with a set count and
/// optional load and intensity detail.
#[derive(Debug, Clone, PartialEq)]
pub struct MuscleSlot {
    pub id: SlotID,
    pub day: Day,
    pub target: MuscleTarget,
    pub sets: Sets,
    pub rep_range: Option<RepRange>,
    pub tempo: Option<Tempo>,
    pub rir: Option<RIR>,
    pub rpe: Option<RPE>,
    pub sort_order: u32,
}

impl MuscleSlot {
    #[must_use]
    pub fn new(day: Day, target: MuscleTarget, sets: Sets, sort_order: u32) -> Self {
        Self {
            id: SlotID::new(),
            day,
            target,
            sets,
            rep_range: None,
            tempo: None,
            rir: None,
            rpe: None,
            sort_order,
        }
    }

    #[must_use]
    pub fn effective_rep_range(&self) -> RepRange {
        self.rep_range.unwrap_or_default()
    }

    /// Recorded intensity is hard enough to count: RIR of 5 or less, or
    /// RPE of 5 or more. Domain rule, not configurable.
    #[must_use]
    pub fn is_working_set(&self) -> bool {
        self.rir.is_some_and(|rir| *rir <= 5) || self.rpe.is_some_and(|rpe| rpe >= RPE::FIVE)
    }

    /// Qualifies for time-under-significant-tension tracking.
    #[must_use]
    pub fn counts_for_tust(&self) -> bool {
        self.tempo.is_some() && self.is_working_set()
    }

    /// Advisory only: tempo is recorded but there is no intensity data
    /// to qualify the slot for TUST tracking.
    #[must_use]
    pub fn needs_intensity_data(&self) -> bool {
        self.tempo.is_some() && self.rir.is_none() && self.rpe.is_none()
    }
}
