use clap::Parser;

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate the build descriptor:\n    rigger init\n\n\
                  Overwrite an existing Gruntfile:\n    rigger init --force")]
pub struct InitArgs {
    /// Force initialisation even if a Gruntfile already exists
    #[arg(long, short = 'f')]
    pub force: bool,
}
