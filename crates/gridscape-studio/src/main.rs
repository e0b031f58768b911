mod app;

use anyhow::Result;
use gridscape_engine::device::GpuInit;
use gridscape_engine::logging::{init_logging, LoggingConfig};
use gridscape_engine::window::{Runtime, RuntimeConfig};

use crate::app::GridApp;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    log::info!("drag to pan, scroll to zoom");

    let result = Runtime::run(RuntimeConfig::default(), GpuInit::default(), GridApp::default());
    if let Err(e) = &result {
        log::error!("{e:#}");
    }
    result
}
