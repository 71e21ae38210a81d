//! Application entry point for the attractor dot-field animation.
//!
//! This binary sets up logging and eframe, then hands every frame to
//! [`Viewer`] from the `viewer` module.

mod viewer;

use field_core::config::Config;
use viewer::Viewer;

/// Starts the native eframe application.
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if the built-in configuration is rejected, or eframe fails to
///   create the native window or event loop.
fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt::init();

    let viewer = Viewer::new(Config::default())
        .map_err(|e| eframe::Error::AppCreation(Box::new(e)))?;
    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Dot Field",
        options,
        Box::new(|_cc| Ok(Box::new(viewer))),
    )
}
