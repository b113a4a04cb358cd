//! Progress bar display for the package loop

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for one orchestration pass
pub struct ProgressDisplay {
    package_pb: ProgressBar,
}

impl ProgressDisplay {
    /// Create a new progress display with the total package count
    pub fn new(total_packages: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-");

        let package_pb = ProgressBar::new(total_packages);
        package_pb.set_style(style);

        Self { package_pb }
    }

    /// Update to show the package currently being processed
    pub fn update_package(&self, package_name: &str) {
        // Truncate long names for display
        let display_name = if package_name.len() > 50 {
            format!("...{}", &package_name[package_name.len() - 47..])
        } else {
            package_name.to_string()
        };
        self.package_pb.set_message(display_name);
    }

    /// Increment package progress
    pub fn inc_package(&self) {
        self.package_pb.inc(1);
    }

    /// Finish and clear the bar
    pub fn finish(&self) {
        self.package_pb.finish_and_clear();
    }
}
