//! Spinner display for long-running external steps

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Create a steady-tick spinner with a message
pub fn spinner(message: String) -> ProgressBar {
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.cyan} {msg}")
        .unwrap();

    let pb = ProgressBar::new_spinner();
    pb.set_style(style);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(message);
    pb
}
