//! Daily caloric requirement via the Mifflin-St Jeor equation, plus the
//! templated diet/exercise plan built from it.

use calplan_model::plan::{DietPlan, MealSlot, PlanSummary};
use calplan_model::profile::{Gender, Profile};
use log::{debug, info};

use crate::questionnaire::{Answers, Prompter};
use crate::Result;

/// Strictly above this the higher-calorie template is selected.
const TEMPLATE_THRESHOLD_KCAL: f64 = 2000.0;

/// Mifflin-St Jeor base value, before the activity multiplier.
/// Expects weight in kilograms and height in centimeters.
pub fn basal_metabolic_rate(profile: &Profile) -> f64 {
    let base = 10.0 * profile.weight_kg + 6.25 * profile.height_cm - 5.0 * profile.age;
    match profile.gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// Estimated total daily energy expenditure in kcal/day.
pub fn daily_calories(profile: &Profile) -> f64 {
    basal_metabolic_rate(profile) * profile.activity_level.multiplier()
}

pub struct Advisor {
    prompter: Box<dyn Prompter>,
}

impl Advisor {
    pub fn new(prompter: Box<dyn Prompter>) -> Self {
        Self { prompter }
    }

    /// Compute caloric needs for a profile, run the follow-up
    /// questionnaire, and build the recommended plan.
    pub fn compute_plan(&self, profile: &Profile) -> Result<PlanSummary> {
        let calories = daily_calories(profile);
        debug!(
            "Caloric needs for {} {} profile: {:.1} kcal/day",
            profile.gender, profile.activity_level, calories
        );

        let answers = Answers::collect(self.prompter.as_ref())?;
        let diet_plan = build_plan(calories, &answers);
        info!("Built diet plan for {:.1} kcal/day", calories);

        Ok(PlanSummary { calories, diet_plan })
    }
}

fn build_plan(calories: f64, answers: &Answers) -> DietPlan {
    let mut plan = DietPlan::new(calories);

    if calories > TEMPLATE_THRESHOLD_KCAL {
        plan.add_meal(MealSlot::Breakfast, "Oatmeal with fruits");
        plan.add_meal(MealSlot::Lunch, "Grilled chicken salad");
        plan.add_meal(MealSlot::Dinner, "Quinoa with steamed vegetables");
        plan.add_meal(MealSlot::Snacks, "Nuts or yogurt");
        plan.add_exercise("30 minutes of jogging");
    } else {
        plan.add_meal(MealSlot::Breakfast, "Smoothie with spinach and banana");
        plan.add_meal(MealSlot::Lunch, "Lentil soup with whole-grain bread");
        plan.add_meal(MealSlot::Dinner, "Baked salmon with asparagus");
        plan.add_meal(MealSlot::Snacks, "Carrot sticks with hummus");
        plan.add_exercise("30 minutes of brisk walking");
    }

    for food in answers
        .favorite_foods
        .split(',')
        .map(str::trim)
        .filter(|food| !food.is_empty())
    {
        plan.add_meal(MealSlot::Lunch, food);
    }

    plan
}
