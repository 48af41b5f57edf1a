//! XP bands and level derivation.

/// One XP band.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    pub level: u32,
    pub xp_required: u32,
    pub title: &'static str,
}

/// All bands, sorted by `level` and strictly increasing `xp_required`.
pub static LEVELS: &[Level] = &[
    Level {
        level: 1,
        xp_required: 0,
        title: "Newcomer",
    },
    Level {
        level: 2,
        xp_required: 100,
        title: "Tinkerer",
    },
    Level {
        level: 3,
        xp_required: 300,
        title: "Tinkerer",
    },
    Level {
        level: 4,
        xp_required: 600,
        title: "Self-Tracker",
    },
    Level {
        level: 5,
        xp_required: 1000,
        title: "Self-Tracker",
    },
    Level {
        level: 6,
        xp_required: 1600,
        title: "Optimizer",
    },
    Level {
        level: 7,
        xp_required: 2400,
        title: "Optimizer",
    },
    Level {
        level: 8,
        xp_required: 3400,
        title: "Biohacker",
    },
    Level {
        level: 9,
        xp_required: 4600,
        title: "Biohacker",
    },
    Level {
        level: 10,
        xp_required: 6000,
        title: "Metabolic Engineer",
    },
    Level {
        level: 11,
        xp_required: 7600,
        title: "Metabolic Engineer",
    },
    Level {
        level: 12,
        xp_required: 9400,
        title: "Longevity Adept",
    },
    Level {
        level: 13,
        xp_required: 11_500,
        title: "Longevity Adept",
    },
    Level {
        level: 14,
        xp_required: 14_000,
        title: "Quantified Sage",
    },
    Level {
        level: 15,
        xp_required: 17_000,
        title: "Transhuman",
    },
];

impl Level {
    /// Highest band whose threshold `xp` has reached.
    pub fn for_xp(xp: u32) -> &'static Level {
        LEVELS
            .iter()
            .rev()
            .find(|l| xp >= l.xp_required)
            .unwrap_or(&LEVELS[0])
    }

    /// The band after this one (None at max level).
    pub fn next(&self) -> Option<&'static Level> {
        LEVELS.iter().find(|l| l.level == self.level + 1)
    }

    pub fn max_level() -> u32 {
        LEVELS.last().map(|l| l.level).unwrap_or(1)
    }
}

/// Level for a point total. Monotonic: more points never give a lower level.
pub fn derive_level(points: u32) -> u32 {
    Level::for_xp(points).level
}

/// 0.0..=1.0 progress through the current band; 1.0 at max level.
pub fn level_progress(points: u32) -> f64 {
    let current = Level::for_xp(points);
    match current.next() {
        None => 1.0,
        Some(next) => {
            let span = (next.xp_required - current.xp_required) as f64;
            (points - current.xp_required) as f64 / span
        }
    }
}

/// XP still needed to reach the next band (None at max level).
pub fn xp_to_next_level(points: u32) -> Option<u32> {
    Level::for_xp(points)
        .next()
        .map(|next| next.xp_required - points)
}
