use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use calplan_cli::console::{prompt_field, ConsolePrompter};
use calplan_cli::render;
use calplan_core::advisor::Advisor;
use calplan_core::input;
use calplan_model::profile::ActivityLevel;
use itertools::Itertools;
use log::info;
use strum::IntoEnumIterator;

fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let running = Arc::new(AtomicBool::new(true));
    let running2 = running.clone();
    ctrlc::set_handler(move || running2.store(false, Ordering::Relaxed))?;

    let advisor = Advisor::new(Box::new(ConsolePrompter::new()));
    let activity_prompt = format!(
        "Please enter your activity level ({}): ",
        ActivityLevel::iter().map(|level| level.to_string()).join(", ")
    );

    info!("Starting interactive advisor");
    while running.load(Ordering::Relaxed) {
        let Some(age) = prompt_field("Please enter your age: ")? else {
            break;
        };
        let Some(weight) = prompt_field("Please enter your weight (e.g., 70 kg or 154 lbs): ")?
        else {
            break;
        };
        let Some(height) = prompt_field("Please enter your height (e.g., 175 cm or 69 in): ")?
        else {
            break;
        };
        let Some(gender) = prompt_field("Please enter your gender (male/female): ")? else {
            break;
        };
        let Some(activity_level) = prompt_field(&activity_prompt)? else {
            break;
        };

        let result = input::parse_fields(&age, &weight, &height, &gender, &activity_level)
            .and_then(|profile| advisor.compute_plan(&profile));
        println!("{:#}", render(result));
    }

    info!("Received stop signal, terminating...");
    Ok(())
}
