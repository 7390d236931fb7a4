use std::collections::BTreeMap;

use strum::{Display, EnumIter, IntoEnumIterator};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Meal slots in the order they appear in a rendered plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

/// Templated meal/exercise recommendation. Every plan carries all four
/// meal slots, even when a slot holds no items.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DietPlan {
    pub caloric_needs: f64,
    pub meals: BTreeMap<MealSlot, Vec<String>>,
    pub exercise: Vec<String>,
}

impl DietPlan {
    pub fn new(caloric_needs: f64) -> Self {
        Self {
            caloric_needs,
            meals: MealSlot::iter().map(|slot| (slot, Vec::new())).collect(),
            exercise: Vec::new(),
        }
    }

    pub fn add_meal(&mut self, slot: MealSlot, item: impl Into<String>) {
        self.meals.entry(slot).or_default().push(item.into());
    }

    pub fn add_exercise(&mut self, item: impl Into<String>) {
        self.exercise.push(item.into());
    }

    pub fn meals_for(&self, slot: MealSlot) -> &[String] {
        self.meals.get(&slot).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Result of a successful plan computation, serialized for the caller
/// as `{"calories": …, "diet_plan": …}`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlanSummary {
    pub calories: f64,
    pub diet_plan: DietPlan,
}
