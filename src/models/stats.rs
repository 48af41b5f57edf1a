use serde::{Deserialize, Serialize};

/// Read-only projection of the engine handed to the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub calories_consumed: u32,
    pub calories_goal: u32,
    pub streak_days: u32,
    pub points: u32,
    pub level: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    pub current: u32,
    pub best: u32,
}

impl Streak {
    /// Streak after closing one day.
    pub fn advance(self, qualified: bool) -> Streak {
        if qualified {
            let current = self.current.saturating_add(1);
            Streak {
                current,
                best: self.best.max(current),
            }
        } else {
            Streak {
                current: 0,
                best: self.best,
            }
        }
    }
}
