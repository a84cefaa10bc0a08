//! Insertion placement for a goal's task sequence
//!
//! When a goal already runs subtasks, the new subtask's position matters.
//! The interactive implementation offers "before each existing entry" plus
//! "after the last entry"; cancelling defaults to after-last. The fixed
//! implementation backs the `--at` flag. Indices are clamped to the
//! sequence length downstream.

use inquire::Select;

use crate::descriptor::patch::TaskPlacement;
use crate::error::Result;

/// Non-interactive placement with a pre-chosen index
pub struct FixedPlacement {
    index: usize,
}

impl FixedPlacement {
    pub fn new(index: usize) -> Self {
        Self { index }
    }
}

impl TaskPlacement for FixedPlacement {
    fn choose(&mut self, _goal: &str, existing: &[String]) -> Result<usize> {
        Ok(self.index.min(existing.len()))
    }
}

/// Blocking terminal prompt for the insertion position
pub struct InteractivePlacement;

impl TaskPlacement for InteractivePlacement {
    fn choose(&mut self, goal: &str, existing: &[String]) -> Result<usize> {
        let mut options: Vec<String> = existing
            .iter()
            .map(|task| format!("Before {}", task))
            .collect();
        if let Some(last) = existing.last() {
            options.push(format!("After {}", last));
        }

        let after_last = existing.len();
        let selection = Select::new(
            &format!("Where in the {} goal should this task run?", goal),
            options,
        )
        .with_starting_cursor(after_last)
        .with_page_size(10)
        .without_filtering()
        .with_help_message("↑↓ to move, ENTER to select, ESC to append after the last entry")
        .raw_prompt_skippable()?;

        Ok(selection.map_or(after_last, |option| option.index))
    }
}
