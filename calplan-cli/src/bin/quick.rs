use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use calplan_cli::console::{prompt_field, ConsolePrompter};
use calplan_cli::render;
use calplan_core::advisor::Advisor;
use calplan_core::input;
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    let running = Arc::new(AtomicBool::new(true));
    let running2 = running.clone();
    ctrlc::set_handler(move || running2.store(false, Ordering::Relaxed))?;

    let advisor = Advisor::new(Box::new(ConsolePrompter::new()));

    info!("Starting quick-entry advisor");
    while running.load(Ordering::Relaxed) {
        let Some(line) =
            prompt_field("Please provide me the age, weight, height, gender, and activity level: ")?
        else {
            break;
        };

        let result = input::parse_inline(&line).and_then(|profile| advisor.compute_plan(&profile));
        println!("Calorie Calculation Output: {:#}", render(result));
    }

    info!("Received stop signal, terminating...");
    Ok(())
}
