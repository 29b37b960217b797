use derive_more::Deref;
use uuid::Uuid;

use crate::{
    Day, DeleteError, Description, MuscleSlot, MuscleTarget, Name, Property, RIR, RPE, ReadError,
    RepRange, SaveError, Sets, SlotID, Tempo,
};

#[allow(async_fn_in_trait)]
pub trait PlanService {
    async fn get_plans(&self) -> Result<Vec<Plan>, ReadError>;
    async fn get_plan(&self, id: PlanID) -> Result<Plan, ReadError>;
    async fn save_plan(&self, plan: Plan) -> Result<Plan, SaveError>;
    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait PlanRepository {
    async fn read_plans(&self) -> Result<Vec<Plan>, ReadError>;
    async fn read_plan(&self, id: PlanID) -> Result<Plan, ReadError>;
    async fn create_plan(
        &self,
        name: Name,
        description: Description,
        slots: Vec<MuscleSlot>,
    ) -> Result<Plan, SaveError>;
    async fn replace_plan(&self, plan: Plan) -> Result<Plan, SaveError>;
    async fn delete_plan(&self, id: PlanID) -> Result<PlanID, DeleteError>;
}

#[allow(async_fn_in_trait)]
pub trait PresetService {
    async fn get_presets(&self) -> Result<Vec<Preset>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait PresetRepository {
    async fn read_presets(&self) -> Result<Vec<Preset>, ReadError>;
}

#[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct PlanID(Uuid);

impl PlanID {
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

impl From<Uuid> for PlanID {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<u128> for PlanID {
    fn from(value: u128) -> Self {
        Self(Uuid::from_bytes(value.to_be_bytes()))
    }
}

/// One weekly plan: an arena-style flat slot list plus metadata. Day
/// groupings and orderings are derived on demand.
///
/// A nil `id` means the plan has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Plan {
    pub id: PlanID,
    pub name: Name,
    pub description: Description,
    pub slots: Vec<MuscleSlot>,
    pub dirty: bool,
}

impl Plan {
    #[must_use]
    pub fn new(name: Name) -> Self {
        Self {
            id: PlanID::nil(),
            name,
            description: Description::default(),
            slots: vec![],
            dirty: false,
        }
    }

    /// Slots of one day, ascending by sort order.
    #[must_use]
    pub fn slots_on(&self, day: Day) -> Vec<&MuscleSlot> {
        let mut slots: Vec<&MuscleSlot> = self.slots.iter().filter(|s| s.day == day).collect();
        slots.sort_by_key(|s| s.sort_order);
        slots
    }

    /// Whether the day already holds a slot for the same parent-resolved
    /// muscle. Callers must check this before dispatching
    /// [`Action::AddSlot`] or [`Action::MoveSlot`]; the reducer itself
    /// does not deduplicate.
    #[must_use]
    pub fn has_slot_for(&self, day: Day, target: MuscleTarget) -> bool {
        let parent = target.resolve();
        self.slots
            .iter()
            .filter(|s| s.day == day)
            .any(|s| match (parent, s.target.resolve()) {
                (Some(a), Some(b)) => a == b,
                _ => s.target == target,
            })
    }

    fn day_slot_ids(&self, day: Day) -> Vec<SlotID> {
        self.slots_on(day).into_iter().map(|s| s.id).collect()
    }

    fn next_sort_order(&self, day: Day) -> u32 {
        self.slots
            .iter()
            .filter(|s| s.day == day)
            .map(|s| s.sort_order + 1)
            .max()
            .unwrap_or(0)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn apply_day_order(&mut self, ids: &[SlotID]) {
        for (order, id) in ids.iter().enumerate() {
            if let Some(slot) = self.slots.iter_mut().find(|s| s.id == *id) {
                slot.sort_order = order as u32;
            }
        }
    }

    fn normalize_day(&mut self, day: Day) {
        let ids = self.day_slot_ids(day);
        self.apply_day_order(&ids);
    }

    fn normalize_all_days(&mut self) {
        for day in Day::iter() {
            self.normalize_day(*day);
        }
    }

    fn backfill_slot_ids(slots: &mut [MuscleSlot]) {
        for slot in slots {
            if slot.id.is_nil() {
                slot.id = SlotID::new();
            }
        }
    }

    /// Applies a mutation. Returns whether the plan changed; malformed
    /// actions (missing slot id, out-of-range index, empty paste source)
    /// are no-ops and never fail.
    fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::AddSlot { day, target, sets } => {
                let sort_order = self.next_sort_order(day);
                self.slots.push(MuscleSlot::new(
                    day,
                    target,
                    sets.unwrap_or_default(),
                    sort_order,
                ));
                self.dirty = true;
                true
            }
            Action::RemoveSlot { id } => {
                let Some(index) = self.slots.iter().position(|s| s.id == id) else {
                    return false;
                };
                let day = self.slots[index].day;
                self.slots.remove(index);
                self.normalize_day(day);
                self.dirty = true;
                true
            }
            Action::SetSlotDetail { id, patch } => {
                let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) else {
                    return false;
                };
                let before = slot.clone();
                if let Some(sets) = patch.sets {
                    slot.sets = sets;
                }
                patch.rep_range.apply(&mut slot.rep_range);
                patch.tempo.apply(&mut slot.tempo);
                patch.rir.apply(&mut slot.rir);
                patch.rpe.apply(&mut slot.rpe);
                if *slot == before {
                    return false;
                }
                self.dirty = true;
                true
            }
            Action::Reorder { day, from, to } => {
                let mut ids = self.day_slot_ids(day);
                if from >= ids.len() || to >= ids.len() || from == to {
                    return false;
                }
                let id = ids.remove(from);
                ids.insert(to, id);
                self.apply_day_order(&ids);
                self.dirty = true;
                true
            }
            Action::MoveSlot {
                id,
                to_day,
                to_index,
            } => {
                let Some(index) = self.slots.iter().position(|s| s.id == id) else {
                    return false;
                };
                let from_day = self.slots[index].day;
                let mut source_ids = self.day_slot_ids(from_day);
                source_ids.retain(|sid| *sid != id);
                let mut target_ids = if to_day == from_day {
                    source_ids.clone()
                } else {
                    self.day_slot_ids(to_day)
                };
                target_ids.insert(to_index.min(target_ids.len()), id);
                self.slots[index].day = to_day;
                self.apply_day_order(&source_ids);
                self.apply_day_order(&target_ids);
                self.dirty = true;
                true
            }
            Action::PasteDay { from, to } => {
                let source_ids = self.day_slot_ids(from);
                if source_ids.is_empty() {
                    return false;
                }
                let mut sort_order = self.next_sort_order(to);
                for source_id in source_ids {
                    let Some(source) = self.slots.iter().find(|s| s.id == source_id) else {
                        continue;
                    };
                    let mut copy = source.clone();
                    copy.id = SlotID::new();
                    copy.day = to;
                    copy.sort_order = sort_order;
                    sort_order += 1;
                    self.slots.push(copy);
                }
                self.dirty = true;
                true
            }
            Action::SetAllForMuscle { target, sets } => {
                let mut changed = false;
                for slot in self.slots.iter_mut().filter(|s| s.target == target) {
                    if slot.sets != sets {
                        slot.sets = sets;
                        changed = true;
                    }
                }
                if changed {
                    self.dirty = true;
                }
                changed
            }
            Action::LoadPreset { mut slots } => {
                Self::backfill_slot_ids(&mut slots);
                self.slots = slots;
                self.normalize_all_days();
                self.dirty = true;
                true
            }
            Action::LoadTemplate {
                id,
                name,
                description,
                mut slots,
            } => {
                Self::backfill_slot_ids(&mut slots);
                self.id = id;
                self.name = name;
                self.description = description;
                self.slots = slots;
                self.normalize_all_days();
                self.dirty = false;
                true
            }
            Action::ClearSlots => {
                if self.slots.is_empty() {
                    return false;
                }
                self.slots.clear();
                self.dirty = true;
                true
            }
            Action::Rename { name } => {
                if self.name == name {
                    return false;
                }
                self.name = name;
                self.dirty = true;
                true
            }
            Action::SetDescription { description } => {
                if self.description == description {
                    return false;
                }
                self.description = description;
                self.dirty = true;
                true
            }
            Action::Undo | Action::Redo => false,
        }
    }
}

/// Partial update of one slot's detail fields.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlotPatch {
    pub sets: Option<Sets>,
    pub rep_range: Patch<RepRange>,
    pub tempo: Patch<Tempo>,
    pub rir: Patch<RIR>,
    pub rpe: Patch<RPE>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Patch<T> {
    Keep,
    Clear,
    Set(T),
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Keep
    }
}

impl<T> Patch<T> {
    fn apply(self, field: &mut Option<T>) {
        match self {
            Patch::Keep => {}
            Patch::Clear => *field = None,
            Patch::Set(value) => *field = Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Callers must have verified via [`Plan::has_slot_for`] that the
    /// day holds no slot for the same parent-resolved muscle.
    AddSlot {
        day: Day,
        target: MuscleTarget,
        sets: Option<Sets>,
    },
    RemoveSlot {
        id: SlotID,
    },
    SetSlotDetail {
        id: SlotID,
        patch: SlotPatch,
    },
    Reorder {
        day: Day,
        from: usize,
        to: usize,
    },
    MoveSlot {
        id: SlotID,
        to_day: Day,
        to_index: usize,
    },
    /// Appends copies of every slot of `from` after the existing slots
    /// of `to`, with fresh ids. Deliberately does not deduplicate
    /// muscles against the target day.
    PasteDay {
        from: Day,
        to: Day,
    },
    /// Exact-target match: subdivisions are edited independently of
    /// their parent.
    SetAllForMuscle {
        target: MuscleTarget,
        sets: Sets,
    },
    LoadPreset {
        slots: Vec<MuscleSlot>,
    },
    LoadTemplate {
        id: PlanID,
        name: Name,
        description: Description,
        slots: Vec<MuscleSlot>,
    },
    ClearSlots,
    Rename {
        name: Name,
    },
    SetDescription {
        description: Description,
    },
    Undo,
    Redo,
}

/// A named slot collection that can be loaded into the current plan.
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    pub name: Name,
    pub slots: Vec<MuscleSlot>,
}

/// Wraps one open plan with a snapshot-based undo/redo history.
///
/// Every effective mutation pushes the prior full snapshot; no-op
/// actions leave the history untouched, so undo depth equals the number
/// of effective mutations.
#[derive(Debug, Clone, PartialEq)]
pub struct Editor {
    current: Plan,
    undo: Vec<Plan>,
    redo: Vec<Plan>,
}

impl Editor {
    #[must_use]
    pub fn new(plan: Plan) -> Self {
        Self {
            current: plan,
            undo: vec![],
            redo: vec![],
        }
    }

    #[must_use]
    pub fn plan(&self) -> &Plan {
        &self.current
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Undo => {
                if let Some(previous) = self.undo.pop() {
                    self.redo.push(std::mem::replace(&mut self.current, previous));
                }
            }
            Action::Redo => {
                if let Some(next) = self.redo.pop() {
                    self.undo.push(std::mem::replace(&mut self.current, next));
                }
            }
            action => {
                let snapshot = self.current.clone();
                if self.current.apply(action) {
                    self.undo.push(snapshot);
                    self.redo.clear();
                }
            }
        }
    }

    /// Records a successful save: assigns the persisted id and clears
    /// the dirty flag. A save is not an edit, so this bypasses the undo
    /// history.
    pub fn mark_saved(&mut self, id: PlanID) {
        self.current.id = id;
        self.current.dirty = false;
    }
}
