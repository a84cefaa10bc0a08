//! Descriptor patching state machine
//!
//! Applies one module to the descriptor model: subtask registration, goal
//! task-list splice (or public alias when the goal has no task list yet),
//! config merge call, and includes exclusions. Terminal on first failure;
//! the caller persists only after every step succeeded.

use crate::descriptor::Descriptor;
use crate::error::{Result, RiggerError};
use crate::source::ModuleMetadata;

/// Decides where a new subtask lands inside a goal's existing task sequence.
///
/// Implementations return an index in `[0, existing.len()]`; out-of-range
/// values are clamped by the descriptor splice.
pub trait TaskPlacement {
    fn choose(&mut self, goal: &str, existing: &[String]) -> Result<usize>;
}

/// Splice a module into the descriptor.
///
/// Fails with [`RiggerError::AlreadyInstalled`] when the module's subtask
/// registration already exists or the goal's task list already references it;
/// the descriptor is then left untouched by the caller.
pub fn apply_module(
    descriptor: &mut Descriptor,
    name: &str,
    metadata: &ModuleMetadata,
    fragment: &str,
    placement: &mut dyn TaskPlacement,
) -> Result<()> {
    let subtask = format!("do-{}", name);
    if descriptor.registration(&subtask).is_some() {
        return Err(already_installed(name));
    }

    let goal_list = format!("do-{}", metadata.goal);
    let existing = descriptor
        .registration(&goal_list)
        .map(|reg| reg.tasks.clone());
    match existing {
        None => {
            // First module for this goal: register the subtask and expose it
            // through a public alias. No ordering ambiguity.
            descriptor.insert_registration(&subtask, &metadata.tasks)?;
            descriptor.insert_alias(name, &subtask)?;
        }
        Some(existing) => {
            if existing.iter().any(|task| task == &subtask) {
                return Err(already_installed(name));
            }

            let index = if existing.is_empty() {
                0
            } else {
                placement.choose(&metadata.goal, &existing)?
            };

            descriptor.insert_registration(&subtask, &metadata.tasks)?;
            descriptor.insert_task(&goal_list, index, &subtask)?;
        }
    }

    descriptor.insert_config_merge(fragment)?;

    if let Some(excludes) = &metadata.excludes {
        descriptor.append_excludes(excludes)?;
    }

    Ok(())
}

fn already_installed(name: &str) -> RiggerError {
    RiggerError::AlreadyInstalled {
        name: name.to_string(),
    }
}
