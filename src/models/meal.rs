use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub fn display_name(&self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
            MealSlot::Snack => "Snack",
        }
    }

    /// Slot a meal eaten at `time` most likely belongs to.
    pub fn for_time(time: NaiveTime) -> MealSlot {
        use chrono::Timelike;
        match time.hour() {
            5..=10 => MealSlot::Breakfast,
            11..=15 => MealSlot::Lunch,
            17..=21 => MealSlot::Dinner,
            _ => MealSlot::Snack,
        }
    }
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for MealSlot {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "dinner" => Ok(MealSlot::Dinner),
            "snack" => Ok(MealSlot::Snack),
            _ => Err(anyhow::anyhow!("Unknown meal slot: {}", s)),
        }
    }
}

/// Macronutrients in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fat_g: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meal {
    pub name: String,
    pub slot: MealSlot,
    pub time: NaiveTime,
    pub calories: u32,
    #[serde(default)]
    pub macros: Macros,
}

impl Meal {
    /// A calorie-only entry, slotted by the time it was eaten.
    pub fn quick(calories: u32, time: NaiveTime) -> Self {
        let slot = MealSlot::for_time(time);
        Self {
            name: format!("Quick {}", slot.display_name().to_lowercase()),
            slot,
            time,
            calories,
            macros: Macros::default(),
        }
    }
}
