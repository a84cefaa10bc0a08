use clap::Parser;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install a module, choosing the position interactively:\n    rigger install lint\n\n\
                   Install without prompting (0 = before the first subtask):\n    rigger install lint --at 0\n\n\
                   Append after the last subtask of the goal:\n    rigger install lint --at 99")]
pub struct InstallArgs {
    /// Module name to resolve across the configured repositories
    pub name: String,

    /// Insertion index within the goal's task list, clamped to the list length.
    /// Skips the interactive placement prompt.
    #[arg(long, value_name = "INDEX")]
    pub at: Option<usize>,
}
