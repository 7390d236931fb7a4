//! The follow-up question exchange. The advisor only depends on the
//! [`Prompter`] trait, so the console stays out of this crate and tests
//! drive the flow with a mock.

use std::io;

pub const EATING_HABITS: &str =
    "What are your current eating habits like? (e.g., Do you eat breakfast? How often do you eat out?)";
pub const FAVORITE_FOODS: &str =
    "What are your favorite foods? (This helps me create a plan you'll actually enjoy!)";
pub const DIETARY_RESTRICTIONS: &str =
    "Do you have any dietary restrictions or allergies? (e.g., gluten-free, vegetarian, lactose intolerant)";
pub const WEIGHT_LOSS_GOAL: &str = "What is your weight loss goal? (e.g., 1-2 pounds per week)";

/// Blocking question/answer exchange with the user.
#[mockall::automock]
pub trait Prompter {
    fn ask(&self, question: &str) -> io::Result<String>;
}

/// Free-text answers to the fixed follow-up questions, collected in
/// order. Only the favorite-foods answer feeds back into the plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Answers {
    pub eating_habits: String,
    pub favorite_foods: String,
    pub dietary_restrictions: String,
    pub weight_loss_goal: String,
}

impl Answers {
    pub fn collect(prompter: &dyn Prompter) -> io::Result<Self> {
        Ok(Self {
            eating_habits: prompter.ask(EATING_HABITS)?,
            favorite_foods: prompter.ask(FAVORITE_FOODS)?,
            dietary_restrictions: prompter.ask(DIETARY_RESTRICTIONS)?,
            weight_loss_goal: prompter.ask(WEIGHT_LOSS_GOAL)?,
        })
    }
}
