pub mod console;

use calplan_model::plan::PlanSummary;
use serde_json::{json, Value};

/// Render the core's result into the caller-facing shape: either
/// `{"calories": …, "diet_plan": …}` or `{"error": "…"}`.
pub fn render(result: calplan_core::Result<PlanSummary>) -> Value {
    match result {
        Ok(summary) => json!(summary),
        Err(e) => json!({ "error": e.to_string() }),
    }
}
