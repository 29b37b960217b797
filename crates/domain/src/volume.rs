use std::collections::{BTreeMap, BTreeSet};

use crate::{Day, MuscleGroup, MuscleSlot, MuscleTarget, Property, SlotID, Subdivision, Zone};

/// Weekly volume of one muscle group, with subdivision slots rolled up
/// into their parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MuscleVolume {
    pub muscle: MuscleGroup,
    pub total_sets: u32,
    pub total_reps_min: u32,
    pub total_reps_max: u32,
    pub tust_seconds_min: u32,
    pub tust_seconds_max: u32,
    pub working_sets: u32,
    pub zone: Zone,
    pub has_tempo: bool,
    pub sets_per_day: BTreeMap<Day, u32>,
    /// Subdivision breakdown, descending by sets.
    pub subdivisions: Vec<(Subdivision, u32)>,
}

impl MuscleVolume {
    /// Number of distinct training days for this muscle.
    #[must_use]
    pub fn frequency(&self) -> usize {
        self.sets_per_day.len()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VolumeSummary {
    pub total_sets: u32,
    pub muscles_targeted: u32,
    pub training_days: u32,
    pub avg_sets_per_muscle: u32,
    pub tust_seconds_min: u32,
    pub tust_seconds_max: u32,
    pub working_sets: u32,
}

/// All derived views of one plan's slot collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VolumeReport {
    entries: BTreeMap<MuscleGroup, MuscleVolume>,
    placements: BTreeMap<u8, u32>,
    pub summary: VolumeSummary,
    pub warnings: Vec<String>,
    pub needs_intensity: Vec<SlotID>,
}

impl VolumeReport {
    /// Entries in canonical muscle-group order, for the frequency and
    /// heatmap views.
    pub fn entries(&self) -> impl Iterator<Item = &MuscleVolume> {
        self.entries.values()
    }

    #[must_use]
    pub fn entry(&self, muscle: MuscleGroup) -> Option<&MuscleVolume> {
        self.entries.get(&muscle)
    }

    /// Entries by descending total sets, for the volume overview list.
    /// Ties keep canonical order.
    #[must_use]
    pub fn by_volume(&self) -> Vec<&MuscleVolume> {
        let mut entries: Vec<&MuscleVolume> = self.entries.values().collect();
        entries.sort_by(|a, b| b.total_sets.cmp(&a.total_sets));
        entries
    }

    /// Number of slots for this exact target, subdivisions counted
    /// separately from their parent. Drives the picker badges.
    #[must_use]
    pub fn placement_count(&self, target: MuscleTarget) -> u32 {
        self.placements.get(&target.code()).copied().unwrap_or(0)
    }
}

#[derive(Default)]
struct Accumulator {
    total_sets: u32,
    total_reps_min: u32,
    total_reps_max: u32,
    tust_seconds_min: u32,
    tust_seconds_max: u32,
    working_sets: u32,
    has_tempo: bool,
    sets_per_day: BTreeMap<Day, u32>,
    subdivisions: BTreeMap<Subdivision, u32>,
}

/// Computes all derived views from one plan's slots. Pure and
/// deterministic; recomputed in full after every mutation.
///
/// Slots whose target does not resolve are skipped from per-muscle
/// aggregation but still count toward the plan-wide totals.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn analyze(slots: &[MuscleSlot]) -> VolumeReport {
    let mut groups: BTreeMap<MuscleGroup, Accumulator> = BTreeMap::new();
    let mut placements: BTreeMap<u8, u32> = BTreeMap::new();
    let mut training_days: BTreeSet<Day> = BTreeSet::new();
    let mut needs_intensity = vec![];
    let mut plan_total_sets = 0;

    for slot in slots {
        let sets = *slot.sets;
        plan_total_sets += sets;
        training_days.insert(slot.day);
        *placements.entry(slot.target.code()).or_default() += 1;
        if slot.needs_intensity_data() {
            needs_intensity.push(slot.id);
        }

        let Some(muscle) = slot.target.resolve() else {
            continue;
        };
        let range = slot.effective_rep_range();
        let group = groups.entry(muscle).or_default();
        group.total_sets += sets;
        group.total_reps_min += sets * *range.min;
        group.total_reps_max += sets * *range.max;
        *group.sets_per_day.entry(slot.day).or_default() += sets;
        if let Some(tempo) = slot.tempo {
            group.has_tempo = true;
            if slot.is_working_set() {
                let tempo_total = tempo.total_seconds();
                group.tust_seconds_min += sets * *range.min * tempo_total;
                group.tust_seconds_max += sets * *range.max * tempo_total;
                group.working_sets += sets;
            }
        }
        if let MuscleTarget::Subdivision(subdivision) = slot.target {
            *group.subdivisions.entry(subdivision).or_default() += sets;
        }
    }

    let mut entries = BTreeMap::new();
    let mut warnings = vec![];
    let mut summary = VolumeSummary {
        total_sets: plan_total_sets,
        training_days: training_days.len() as u32,
        ..VolumeSummary::default()
    };

    for (muscle, group) in groups {
        let Some(zone) = Zone::classify(group.total_sets, muscle.landmarks()) else {
            continue;
        };
        summary.tust_seconds_min += group.tust_seconds_min;
        summary.tust_seconds_max += group.tust_seconds_max;
        summary.working_sets += group.working_sets;

        let days: Vec<u8> = group.sets_per_day.keys().map(|day| day.index()).collect();
        for pair in days.windows(2) {
            if pair[1] - pair[0] == 1 {
                warnings.push(format!(
                    "{} is trained on consecutive days {} and {}",
                    muscle.name(),
                    pair[0],
                    pair[1]
                ));
            }
        }

        let mut subdivisions: Vec<(Subdivision, u32)> =
            group.subdivisions.into_iter().collect();
        subdivisions.sort_by(|a, b| b.1.cmp(&a.1));

        entries.insert(
            muscle,
            MuscleVolume {
                muscle,
                total_sets: group.total_sets,
                total_reps_min: group.total_reps_min,
                total_reps_max: group.total_reps_max,
                tust_seconds_min: group.tust_seconds_min,
                tust_seconds_max: group.tust_seconds_max,
                working_sets: group.working_sets,
                zone,
                has_tempo: group.has_tempo,
                sets_per_day: group.sets_per_day,
                subdivisions,
            },
        );
    }

    summary.muscles_targeted = entries.len() as u32;
    summary.avg_sets_per_muscle = if summary.muscles_targeted == 0 {
        0
    } else {
        // Round half up.
        (summary.total_sets + summary.muscles_targeted / 2) / summary.muscles_targeted
    };

    VolumeReport {
        entries,
        placements,
        summary,
        warnings,
        needs_intensity,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::{RIR, RPE, Sets, Tempo};

    use super::*;

    fn slot(day: Day, target: MuscleTarget, sets: u32) -> MuscleSlot {
        MuscleSlot::new(day, target, Sets::clamped(sets), 0)
    }

    fn chest() -> MuscleTarget {
        MuscleTarget::Group(MuscleGroup::Chest)
    }

    fn lats() -> MuscleTarget {
        MuscleTarget::Group(MuscleGroup::Lats)
    }

    #[test]
    fn test_analyze_empty_plan() {
        let report = analyze(&[]);

        assert_eq!(report.summary, VolumeSummary::default());
        assert_eq!(report.entries().count(), 0);
        assert!(report.warnings.is_empty());
        assert!(report.needs_intensity.is_empty());
    }

    #[test]
    fn test_analyze_is_idempotent() {
        let slots = vec![
            slot(Day::Monday, chest(), 4),
            slot(Day::Wednesday, lats(), 5),
        ];

        assert_eq!(analyze(&slots), analyze(&slots));
    }

    #[test]
    fn test_conservation_with_unresolvable_target() {
        let slots = vec![
            slot(Day::Monday, chest(), 4),
            slot(Day::Monday, MuscleTarget::Unknown(255), 5),
            slot(Day::Tuesday, lats(), 3),
        ];

        let report = analyze(&slots);

        // Per-muscle entries only cover resolvable targets.
        let entry_total: u32 = report.entries().map(|e| e.total_sets).sum();
        assert_eq!(entry_total, 7);
        // The plan-wide totals still count every slot.
        assert_eq!(report.summary.total_sets, 12);
        assert_eq!(report.summary.training_days, 2);
    }

    #[test]
    fn test_tust_for_working_set() {
        let mut s = slot(Day::Monday, chest(), 3);
        s.tempo = Some(Tempo::new(3, 1, 2, 0).unwrap());
        s.rir = Some(RIR::new(3).unwrap());

        let report = analyze(&[s]);
        let entry = report.entry(MuscleGroup::Chest).unwrap();

        assert_eq!(entry.tust_seconds_min, 3 * 8 * 6);
        assert_eq!(entry.tust_seconds_max, 3 * 12 * 6);
        assert_eq!(entry.working_sets, 3);
        assert!(entry.has_tempo);
    }

    #[test]
    fn test_high_rir_does_not_qualify_as_working_set() {
        let mut s = slot(Day::Monday, chest(), 3);
        s.tempo = Some(Tempo::new(3, 1, 2, 0).unwrap());
        s.rir = Some(RIR::new(8).unwrap());

        let report = analyze(&[s]);
        let entry = report.entry(MuscleGroup::Chest).unwrap();

        assert_eq!(entry.tust_seconds_min, 0);
        assert_eq!(entry.tust_seconds_max, 0);
        assert_eq!(entry.working_sets, 0);
        assert_eq!(entry.total_sets, 3);
        assert_eq!(entry.total_reps_min, 24);
        assert_eq!(entry.total_reps_max, 36);
    }

    #[test]
    fn test_rpe_qualifies_as_working_set() {
        let mut s = slot(Day::Monday, chest(), 2);
        s.tempo = Some(Tempo::new(2, 0, 2, 0).unwrap());
        s.rpe = Some(RPE::new(8.5).unwrap());

        let report = analyze(&[s]);

        assert_eq!(report.entry(MuscleGroup::Chest).unwrap().working_sets, 2);
    }

    #[test]
    fn test_tempo_without_intensity_is_flagged() {
        let mut s = slot(Day::Monday, chest(), 3);
        s.tempo = Some(Tempo::new(3, 1, 2, 0).unwrap());
        let id = s.id;

        let report = analyze(&[s]);

        assert_eq!(report.needs_intensity, vec![id]);
        assert_eq!(report.entry(MuscleGroup::Chest).unwrap().working_sets, 0);
    }

    #[test]
    fn test_subdivision_rolls_up_into_parent() {
        let slots = vec![
            slot(
                Day::Monday,
                MuscleTarget::Subdivision(Subdivision::UpperChest),
                3,
            ),
            slot(Day::Monday, chest(), 4),
        ];

        let report = analyze(&slots);

        assert_eq!(report.entries().count(), 1);
        let entry = report.entry(MuscleGroup::Chest).unwrap();
        assert_eq!(entry.total_sets, 7);
        assert_eq!(entry.subdivisions, vec![(Subdivision::UpperChest, 3)]);
        assert_eq!(entry.frequency(), 1);
    }

    #[rstest]
    #[case::adjacent(Day::Tuesday, Day::Wednesday, 1)]
    #[case::spread(Day::Tuesday, Day::Friday, 0)]
    fn test_consecutive_day_warning(
        #[case] first: Day,
        #[case] second: Day,
        #[case] expected: usize,
    ) {
        let slots = vec![slot(first, lats(), 3), slot(second, lats(), 3)];

        let report = analyze(&slots);

        assert_eq!(report.warnings.len(), expected);
        if expected == 1 {
            assert_eq!(report.warnings[0], "Lats is trained on consecutive days 2 and 3");
        }
    }

    #[test]
    fn test_zone_classification_in_report() {
        // Chest landmarks: MV 4, MEV 8, MAV 16, MRV 22.
        let slots = vec![
            slot(Day::Monday, chest(), 5),
            slot(Day::Thursday, chest(), 5),
        ];

        let report = analyze(&slots);

        assert_eq!(report.entry(MuscleGroup::Chest).unwrap().zone, Zone::Productive);
    }

    #[test]
    fn test_by_volume_orders_descending() {
        let slots = vec![
            slot(Day::Monday, chest(), 3),
            slot(Day::Tuesday, lats(), 8),
            slot(Day::Wednesday, MuscleTarget::Group(MuscleGroup::Quads), 5),
        ];

        let report = analyze(&slots);

        let order: Vec<MuscleGroup> = report.by_volume().iter().map(|e| e.muscle).collect();
        assert_eq!(
            order,
            vec![MuscleGroup::Lats, MuscleGroup::Quads, MuscleGroup::Chest]
        );
    }

    #[test]
    fn test_entries_keep_canonical_order() {
        let slots = vec![
            slot(Day::Monday, MuscleTarget::Group(MuscleGroup::Calves), 8),
            slot(Day::Monday, chest(), 3),
        ];

        let report = analyze(&slots);

        let order: Vec<MuscleGroup> = report.entries().map(|e| e.muscle).collect();
        assert_eq!(order, vec![MuscleGroup::Chest, MuscleGroup::Calves]);
    }

    #[test]
    fn test_placement_counts_are_exact_target() {
        let slots = vec![
            slot(Day::Monday, chest(), 3),
            slot(Day::Thursday, chest(), 3),
            slot(
                Day::Friday,
                MuscleTarget::Subdivision(Subdivision::UpperChest),
                3,
            ),
        ];

        let report = analyze(&slots);

        assert_eq!(report.placement_count(chest()), 2);
        assert_eq!(
            report.placement_count(MuscleTarget::Subdivision(Subdivision::UpperChest)),
            1
        );
        assert_eq!(report.placement_count(lats()), 0);
    }

    #[test]
    fn test_summary_averages_round_half_up() {
        let slots = vec![
            slot(Day::Monday, chest(), 4),
            slot(Day::Tuesday, lats(), 3),
        ];

        let report = analyze(&slots);

        assert_eq!(report.summary.muscles_targeted, 2);
        // 7 sets over 2 muscles rounds to 4.
        assert_eq!(report.summary.avg_sets_per_muscle, 4);
    }
}
