use std::slice::Iter;

/// Static reference data shared by all enumerable taxonomy types.
pub trait Property: Clone + Copy + Sized {
    fn iter() -> Iter<'static, Self>;
    fn name(self) -> &'static str;
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum BodyRegion {
    Chest,
    Back,
    Shoulders,
    Arms,
    Core,
    Hips,
    Legs,
}

impl Property for BodyRegion {
    fn iter() -> Iter<'static, BodyRegion> {
        static REGIONS: [BodyRegion; 7] = [
            BodyRegion::Chest,
            BodyRegion::Back,
            BodyRegion::Shoulders,
            BodyRegion::Arms,
            BodyRegion::Core,
            BodyRegion::Hips,
            BodyRegion::Legs,
        ];
        REGIONS.iter()
    }

    #[must_use]
    fn name(self) -> &'static str {
        match self {
            BodyRegion::Chest => "Chest",
            BodyRegion::Back => "Back",
            BodyRegion::Shoulders => "Shoulders",
            BodyRegion::Arms => "Arms",
            BodyRegion::Core => "Core",
            BodyRegion::Hips => "Hips",
            BodyRegion::Legs => "Legs",
        }
    }
}

/// Weekly-set thresholds for one muscle group, ascending.
///
/// MV: minimum volume, MEV: minimum effective volume, MAV: maximum
/// adaptive volume, MRV: maximum recoverable volume.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Landmarks {
    pub mv: u32,
    pub mev: u32,
    pub mav: u32,
    pub mrv: u32,
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleGroup {
    // Chest
    Chest = 11,
    // Back
    Lats = 21,
    Traps = 22,
    LowerBack = 23,
    // Shoulders
    FrontDelts = 31,
    SideDelts = 32,
    RearDelts = 33,
    // Upper arms
    Biceps = 41,
    Triceps = 42,
    // Forearms
    Forearms = 51,
    // Waist
    Abs = 61,
    // Hips
    Glutes = 71,
    // Thighs
    Quads = 81,
    Hamstrings = 82,
    Adductors = 83,
    // Calves
    Calves = 91,
}

impl Property for MuscleGroup {
    fn iter() -> Iter<'static, MuscleGroup> {
        static MUSCLES: [MuscleGroup; 16] = [
            MuscleGroup::Chest,
            MuscleGroup::Lats,
            MuscleGroup::Traps,
            MuscleGroup::LowerBack,
            MuscleGroup::FrontDelts,
            MuscleGroup::SideDelts,
            MuscleGroup::RearDelts,
            MuscleGroup::Biceps,
            MuscleGroup::Triceps,
            MuscleGroup::Forearms,
            MuscleGroup::Abs,
            MuscleGroup::Glutes,
            MuscleGroup::Quads,
            MuscleGroup::Hamstrings,
            MuscleGroup::Adductors,
            MuscleGroup::Calves,
        ];
        MUSCLES.iter()
    }

    #[must_use]
    fn name(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "Chest",
            MuscleGroup::Lats => "Lats",
            MuscleGroup::Traps => "Traps",
            MuscleGroup::LowerBack => "Lower Back",
            MuscleGroup::FrontDelts => "Front Delts",
            MuscleGroup::SideDelts => "Side Delts",
            MuscleGroup::RearDelts => "Rear Delts",
            MuscleGroup::Biceps => "Biceps",
            MuscleGroup::Triceps => "Triceps",
            MuscleGroup::Forearms => "Forearms",
            MuscleGroup::Abs => "Abs",
            MuscleGroup::Glutes => "Glutes",
            MuscleGroup::Quads => "Quads",
            MuscleGroup::Hamstrings => "Hamstrings",
            MuscleGroup::Adductors => "Adductors",
            MuscleGroup::Calves => "Calves",
        }
    }
}

impl MuscleGroup {
    #[must_use]
    pub fn region(self) -> BodyRegion {
        match self {
            MuscleGroup::Chest => BodyRegion::Chest,
            MuscleGroup::Lats | MuscleGroup::Traps | MuscleGroup::LowerBack => BodyRegion::Back,
            MuscleGroup::FrontDelts | MuscleGroup::SideDelts | MuscleGroup::RearDelts => {
                BodyRegion::Shoulders
            }
            MuscleGroup::Biceps | MuscleGroup::Triceps | MuscleGroup::Forearms => BodyRegion::Arms,
            MuscleGroup::Abs => BodyRegion::Core,
            MuscleGroup::Glutes => BodyRegion::Hips,
            MuscleGroup::Quads
            | MuscleGroup::Hamstrings
            | MuscleGroup::Adductors
            | MuscleGroup::Calves => BodyRegion::Legs,
        }
    }

    #[must_use]
    pub fn landmarks(self) -> Landmarks {
        let (mv, mev, mav, mrv) = match self {
            MuscleGroup::Chest => (4, 8, 16, 22),
            MuscleGroup::Lats => (6, 10, 18, 25),
            MuscleGroup::Traps => (4, 8, 14, 20),
            MuscleGroup::LowerBack => (2, 4, 10, 16),
            MuscleGroup::FrontDelts => (2, 4, 8, 14),
            MuscleGroup::SideDelts => (6, 10, 20, 26),
            MuscleGroup::RearDelts => (6, 10, 18, 24),
            MuscleGroup::Biceps => (5, 8, 16, 22),
            MuscleGroup::Triceps => (4, 8, 16, 20),
            MuscleGroup::Forearms => (2, 4, 10, 16),
            MuscleGroup::Abs => (4, 8, 16, 20),
            MuscleGroup::Glutes => (2, 4, 12, 18),
            MuscleGroup::Quads => (6, 8, 16, 20),
            MuscleGroup::Hamstrings => (4, 6, 12, 18),
            MuscleGroup::Adductors => (2, 4, 10, 16),
            MuscleGroup::Calves => (4, 8, 14, 20),
        };
        Landmarks { mv, mev, mav, mrv }
    }

    #[must_use]
    pub fn color_hex(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "#ef4444",
            MuscleGroup::Lats => "#3b82f6",
            MuscleGroup::Traps => "#2563eb",
            MuscleGroup::LowerBack => "#1d4ed8",
            MuscleGroup::FrontDelts => "#f97316",
            MuscleGroup::SideDelts => "#fb923c",
            MuscleGroup::RearDelts => "#fdba74",
            MuscleGroup::Biceps => "#22c55e",
            MuscleGroup::Triceps => "#16a34a",
            MuscleGroup::Forearms => "#86efac",
            MuscleGroup::Abs => "#eab308",
            MuscleGroup::Glutes => "#a855f7",
            MuscleGroup::Quads => "#14b8a6",
            MuscleGroup::Hamstrings => "#0d9488",
            MuscleGroup::Adductors => "#5eead4",
            MuscleGroup::Calves => "#64748b",
        }
    }

    #[must_use]
    pub fn color_class(self) -> &'static str {
        match self {
            MuscleGroup::Chest => "muscle-chest",
            MuscleGroup::Lats => "muscle-lats",
            MuscleGroup::Traps => "muscle-traps",
            MuscleGroup::LowerBack => "muscle-lower-back",
            MuscleGroup::FrontDelts => "muscle-front-delts",
            MuscleGroup::SideDelts => "muscle-side-delts",
            MuscleGroup::RearDelts => "muscle-rear-delts",
            MuscleGroup::Biceps => "muscle-biceps",
            MuscleGroup::Triceps => "muscle-triceps",
            MuscleGroup::Forearms => "muscle-forearms",
            MuscleGroup::Abs => "muscle-abs",
            MuscleGroup::Glutes => "muscle-glutes",
            MuscleGroup::Quads => "muscle-quads",
            MuscleGroup::Hamstrings => "muscle-hamstrings",
            MuscleGroup::Adductors => "muscle-adductors",
            MuscleGroup::Calves => "muscle-calves",
        }
    }
}

impl TryFrom<u8> for MuscleGroup {
    type Error = MuscleCodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        MuscleGroup::iter()
            .find(|m| **m as u8 == value)
            .copied()
            .ok_or(MuscleCodeError::Unknown(value))
    }
}

/// A finer anatomical target that rolls up to exactly one parent muscle
/// group for aggregation.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Subdivision {
    UpperChest = 101,
    MidChest = 102,
    LowerChest = 103,
    UpperTraps = 104,
    MidTraps = 105,
    LowerTraps = 106,
    BicepsLongHead = 107,
    BicepsShortHead = 108,
    TricepsLongHead = 109,
    TricepsLateralHead = 110,
    TricepsMedialHead = 111,
    UpperAbs = 112,
    LowerAbs = 113,
    Obliques = 114,
    GluteusMaximus = 115,
    GluteusMedius = 116,
}

impl Property for Subdivision {
    fn iter() -> Iter<'static, Subdivision> {
        static SUBDIVISIONS: [Subdivision; 16] = [
            Subdivision::UpperChest,
            Subdivision::MidChest,
            Subdivision::LowerChest,
            Subdivision::UpperTraps,
            Subdivision::MidTraps,
            Subdivision::LowerTraps,
            Subdivision::BicepsLongHead,
            Subdivision::BicepsShortHead,
            Subdivision::TricepsLongHead,
            Subdivision::TricepsLateralHead,
            Subdivision::TricepsMedialHead,
            Subdivision::UpperAbs,
            Subdivision::LowerAbs,
            Subdivision::Obliques,
            Subdivision::GluteusMaximus,
            Subdivision::GluteusMedius,
        ];
        SUBDIVISIONS.iter()
    }

    #[must_use]
    fn name(self) -> &'static str {
        match self {
            Subdivision::UpperChest => "Upper Chest",
            Subdivision::MidChest => "Mid Chest",
            Subdivision::LowerChest => "Lower Chest",
            Subdivision::UpperTraps => "Upper Traps",
            Subdivision::MidTraps => "Mid Traps",
            Subdivision::LowerTraps => "Lower Traps",
            Subdivision::BicepsLongHead => "Biceps Long Head",
            Subdivision::BicepsShortHead => "Biceps Short Head",
            Subdivision::TricepsLongHead => "Triceps Long Head",
            Subdivision::TricepsLateralHead => "Triceps Lateral Head",
            Subdivision::TricepsMedialHead => "Triceps Medial Head",
            Subdivision::UpperAbs => "Upper Abs",
            Subdivision::LowerAbs => "Lower Abs",
            Subdivision::Obliques => "Obliques",
            Subdivision::GluteusMaximus => "Gluteus Maximus",
            Subdivision::GluteusMedius => "Gluteus Medius",
        }
    }
}

impl Subdivision {
    #[must_use]
    pub fn parent(self) -> MuscleGroup {
        match self {
            Subdivision::UpperChest | Subdivision::MidChest | Subdivision::LowerChest => {
                MuscleGroup::Chest
            }
            Subdivision::UpperTraps | Subdivision::MidTraps | Subdivision::LowerTraps => {
                MuscleGroup::Traps
            }
            Subdivision::BicepsLongHead | Subdivision::BicepsShortHead => MuscleGroup::Biceps,
            Subdivision::TricepsLongHead
            | Subdivision::TricepsLateralHead
            | Subdivision::TricepsMedialHead => MuscleGroup::Triceps,
            Subdivision::UpperAbs | Subdivision::LowerAbs | Subdivision::Obliques => {
                MuscleGroup::Abs
            }
            Subdivision::GluteusMaximus | Subdivision::GluteusMedius => MuscleGroup::Glutes,
        }
    }
}

impl TryFrom<u8> for Subdivision {
    type Error = MuscleCodeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Subdivision::iter()
            .find(|s| **s as u8 == value)
            .copied()
            .ok_or(MuscleCodeError::Unknown(value))
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum MuscleCodeError {
    #[error("Unknown muscle code {0}")]
    Unknown(u8),
}

/// What a slot points at: a muscle group, one of its subdivisions, or a
/// stale persisted code that no longer resolves.
///
/// `Unknown` keeps the original code so it survives a load/save round
/// trip; the aggregation engine skips such slots instead of failing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum MuscleTarget {
    Group(MuscleGroup),
    Subdivision(Subdivision),
    Unknown(u8),
}

impl MuscleTarget {
    #[must_use]
    pub fn from_code(code: u8) -> Self {
        MuscleGroup::try_from(code)
            .map(MuscleTarget::Group)
            .or_else(|_| Subdivision::try_from(code).map(MuscleTarget::Subdivision))
            .unwrap_or(MuscleTarget::Unknown(code))
    }

    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            MuscleTarget::Group(group) => group as u8,
            MuscleTarget::Subdivision(subdivision) => subdivision as u8,
            MuscleTarget::Unknown(code) => code,
        }
    }

    /// Parent muscle group, if the target resolves.
    #[must_use]
    pub fn resolve(self) -> Option<MuscleGroup> {
        match self {
            MuscleTarget::Group(group) => Some(group),
            MuscleTarget::Subdivision(subdivision) => Some(subdivision.parent()),
            MuscleTarget::Unknown(_) => None,
        }
    }

    /// Display metadata. Subdivisions inherit their parent's styling.
    #[must_use]
    pub fn display(self) -> Option<MuscleDisplay> {
        match self {
            MuscleTarget::Group(group) => Some(MuscleDisplay {
                label: group.name(),
                region: group.region(),
                color_class: group.color_class(),
                color_hex: group.color_hex(),
            }),
            MuscleTarget::Subdivision(subdivision) => {
                let parent = subdivision.parent();
                Some(MuscleDisplay {
                    label: subdivision.name(),
                    region: parent.region(),
                    color_class: parent.color_class(),
                    color_hex: parent.color_hex(),
                })
            }
            MuscleTarget::Unknown(_) => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct MuscleDisplay {
    pub label: &'static str,
    pub region: BodyRegion,
    pub color_class: &'static str,
    pub color_hex: &'static str,
}

/// Classification of a muscle's weekly volume against its landmarks.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub enum Zone {
    BelowMaintenance,
    Maintenance,
    Productive,
    NearLimit,
    OverLimit,
}

impl Zone {
    /// `None` for zero sets: an untrained muscle has no zone and is
    /// absent from all derived views.
    #[must_use]
    pub fn classify(total_sets: u32, landmarks: Landmarks) -> Option<Zone> {
        if total_sets == 0 {
            return None;
        }
        Some(if total_sets < landmarks.mv {
            Zone::BelowMaintenance
        } else if total_sets < landmarks.mev {
            Zone::Maintenance
        } else if total_sets <= landmarks.mav {
            Zone::Productive
        } else if total_sets <= landmarks.mrv {
            Zone::NearLimit
        } else {
            Zone::OverLimit
        })
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Zone::BelowMaintenance => "below MV",
            Zone::Maintenance => "maintenance",
            Zone::Productive => "productive",
            Zone::NearLimit => "near MRV",
            Zone::OverLimit => "over MRV",
        }
    }
}
