use uuid::Uuid;

use crate::{ConvertError, Day, Description, MuscleSlot, MuscleTarget, Name, Plan, Property, SaveError};

#[allow(async_fn_in_trait)]
pub trait ConversionService {
    async fn convert_plan(&self, plan: &Plan, owner: Uuid) -> Result<ProgramTemplate, ConvertError>;
}

#[allow(async_fn_in_trait)]
pub trait ProgramRepository {
    async fn create_program(&self, template: ProgramTemplate) -> Result<ProgramTemplate, SaveError>;
}

/// Label used when a slot's persisted muscle code no longer resolves.
/// Such slots are still projected; nothing is dropped on conversion.
pub const UNKNOWN_MUSCLE_LABEL: &str = "Unknown muscle";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModuleStatus {
    #[default]
    Draft,
}

impl ModuleStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleStatus::Draft => "draft",
        }
    }
}

/// One training module in the receiving program system, projected from
/// one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramModule {
    pub title: String,
    pub sort_order: u32,
    pub source_muscle_code: u8,
    pub status: ModuleStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramDay {
    pub day: Day,
    pub title: String,
    pub modules: Vec<ProgramModule>,
}

/// In-memory projection handed to the program system. Persisting it as
/// program entities is the receiver's concern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramTemplate {
    pub owner: Uuid,
    pub name: Name,
    pub description: Description,
    pub days: Vec<ProgramDay>,
}

impl ProgramTemplate {
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.days.iter().map(|day| day.modules.len()).sum()
    }
}

/// Projects a plan into one day record per occupied day and one module
/// record per slot, preserving the within-day ordering.
#[must_use]
pub fn project(plan: &Plan, owner: Uuid) -> ProgramTemplate {
    let days = Day::iter()
        .filter_map(|day| {
            let slots = plan.slots_on(*day);
            if slots.is_empty() {
                return None;
            }
            let title = slots
                .iter()
                .map(|slot| label(slot.target))
                .collect::<Vec<_>>()
                .join(" / ");
            let modules = slots.iter().map(|slot| module(slot)).collect();
            Some(ProgramDay {
                day: *day,
                title,
                modules,
            })
        })
        .collect();
    ProgramTemplate {
        owner,
        name: plan.name.clone(),
        description: plan.description.clone(),
        days,
    }
}

fn label(target: MuscleTarget) -> &'static str {
    target.display().map_or(UNKNOWN_MUSCLE_LABEL, |display| display.label)
}

fn module(slot: &MuscleSlot) -> ProgramModule {
    let sets = *slot.sets;
    let unit = if sets == 1 { "set" } else { "sets" };
    ProgramModule {
        title: format!("{} ({sets} {unit})", label(slot.target)),
        sort_order: slot.sort_order,
        source_muscle_code: slot.target.code(),
        status: ModuleStatus::default(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::{MuscleGroup, Sets};

    use super::*;

    fn plan_with(slots: Vec<MuscleSlot>) -> Plan {
        let mut plan = Plan::new(Name::new("Push Pull Legs").unwrap());
        plan.slots = slots;
        plan
    }

    fn slot(day: Day, target: MuscleTarget, sets: u32, sort_order: u32) -> MuscleSlot {
        MuscleSlot::new(day, target, Sets::clamped(sets), sort_order)
    }

    #[test]
    fn test_project() {
        let plan = plan_with(vec![
            slot(Day::Monday, MuscleTarget::Group(MuscleGroup::Chest), 4, 0),
            slot(Day::Monday, MuscleTarget::Group(MuscleGroup::Triceps), 3, 1),
            slot(Day::Wednesday, MuscleTarget::Group(MuscleGroup::Lats), 5, 0),
        ]);

        let template = project(&plan, Uuid::nil());

        assert_eq!(template.days.len(), 2);
        assert_eq!(template.module_count(), 3);

        let monday = &template.days[0];
        assert_eq!(monday.day, Day::Monday);
        assert_eq!(monday.title, "Chest / Triceps");
        assert_eq!(
            monday.modules[0],
            ProgramModule {
                title: "Chest (4 sets)".to_string(),
                sort_order: 0,
                source_muscle_code: MuscleGroup::Chest as u8,
                status: ModuleStatus::Draft,
            }
        );
        assert_eq!(monday.modules[1].title, "Triceps (3 sets)");

        let wednesday = &template.days[1];
        assert_eq!(wednesday.day, Day::Wednesday);
        assert_eq!(wednesday.title, "Lats");
        assert_eq!(wednesday.modules[0].sort_order, 0);
    }

    #[test]
    fn test_project_singular_set_count() {
        let plan = plan_with(vec![slot(
            Day::Friday,
            MuscleTarget::Group(MuscleGroup::Calves),
            1,
            0,
        )]);

        let template = project(&plan, Uuid::nil());

        assert_eq!(template.days[0].modules[0].title, "Calves (1 set)");
    }

    #[test]
    fn test_project_preserves_sort_order_not_insertion_order() {
        let plan = plan_with(vec![
            slot(Day::Monday, MuscleTarget::Group(MuscleGroup::Triceps), 3, 1),
            slot(Day::Monday, MuscleTarget::Group(MuscleGroup::Chest), 4, 0),
        ]);

        let template = project(&plan, Uuid::nil());

        assert_eq!(template.days[0].title, "Chest / Triceps");
    }

    #[test]
    fn test_project_keeps_unresolvable_slots() {
        let plan = plan_with(vec![slot(Day::Monday, MuscleTarget::Unknown(255), 3, 0)]);

        let template = project(&plan, Uuid::nil());

        assert_eq!(template.days[0].title, UNKNOWN_MUSCLE_LABEL);
        assert_eq!(template.days[0].modules[0].source_muscle_code, 255);
    }

    #[test]
    fn test_project_empty_plan() {
        let plan = plan_with(vec![]);

        let template = project(&plan, Uuid::nil());

        assert!(template.days.is_empty());
        assert_eq!(template.module_count(), 0);
    }
}
