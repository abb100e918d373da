//! Calibration scene viewer.
//!
//! Draws the classic fixed test scene: axis indicators for x/y/z, three
//! solid triangles, a quadrilateral outline, and an icosahedron wireframe
//! from the shape library. Geometry is built once and uploaded once; the
//! window repaints on demand. Escape or closing the window exits.

mod app;
mod calibration;

use anyhow::Result;
use armillary_engine::device::GpuInit;
use armillary_engine::logging::{LoggingConfig, init_logging};
use armillary_engine::window::{Runtime, RuntimeConfig};
use winit::dpi::LogicalSize;

use crate::app::CalibrationApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let scene = calibration::calibration_scene();
    log::info!("calibration scene ready: {} objects", scene.len());

    Runtime::run(
        RuntimeConfig {
            title: "armillary".to_string(),
            initial_size: LogicalSize::new(768.0, 768.0),
        },
        GpuInit::default(),
        CalibrationApp::new(scene),
    )
}
