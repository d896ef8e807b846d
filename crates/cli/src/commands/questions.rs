use fragrance_core::quiz::questions;

use crate::commands::CommandResult;

pub fn run(json_output: bool) -> CommandResult {
    if json_output {
        return CommandResult::json("questions", &questions());
    }

    let mut lines = Vec::new();
    for (index, question) in questions().iter().enumerate() {
        lines.push(format!("{}. {} ({})", index + 1, question.prompt, question.id));
        for option in question.options {
            lines.push(format!("   - {:<18} {}", option.id, option.label));
        }
    }
    CommandResult::text(lines.join("\n"))
}
