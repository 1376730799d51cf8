use crate::controllers::session::RenderSession;
use crate::controllers::session::SessionCommand;
use crate::controllers::session::ports::{PixelSink, SessionPresenterPort};
use crate::input::cli::args::CliOptions;
use crate::input::cli::errors::CliError;
use crate::presenters::file::factory::file_presenter_for_path;
use crate::presenters::frame_buffer::FrameBuffer;
use crate::presenters::logging::presenter::LogPresenter;
use env_logger::Builder;
use log::{LevelFilter, info};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

/// Installs the global logger. Later calls are ignored.
pub fn init_logging(verbosity: &str) {
    let level = LevelFilter::from_str(verbosity).unwrap_or(LevelFilter::Error);
    let mut builder = Builder::from_default_env();
    let _ = builder.filter_level(level).try_init();
}

/// Renders the initial frame, applies each zoom in turn and saves the result.
pub struct RunCliCommand {
    options: CliOptions,
}

impl RunCliCommand {
    pub fn new(options: CliOptions) -> Self {
        Self { options }
    }

    pub fn execute(&self) -> Result<PathBuf, CliError> {
        let output = &self.options.output;
        let file_presenter = file_presenter_for_path(output)?;

        let frame_buffer = Arc::new(FrameBuffer::new(self.options.config.size));
        let presenter = Arc::new(LogPresenter::new());
        let mut session = RenderSession::new(
            self.options.config,
            Arc::clone(&frame_buffer) as Arc<dyn PixelSink>,
            Arc::clone(&presenter) as Arc<dyn SessionPresenterPort>,
        )?;

        frame_buffer.clear();
        session.render()?;
        session.wait_until_idle(None);

        for &pixel in &self.options.zooms {
            session.handle(SessionCommand::ZoomClick(pixel))?;
            session.wait_until_idle(None);
        }

        let viewport = session.viewport();
        info!(
            "Final view of {}: origin ({}, {}), width {}",
            session.fractal(),
            viewport.origin().real,
            viewport.origin().imag,
            viewport.width()
        );

        let image = session.export_image()?;
        file_presenter
            .present(&image, output)
            .map_err(|source| CliError::Write {
                path: output.clone(),
                source,
            })?;

        info!(
            "Saved {} frame(s) to {}",
            session.last_completed_generation(),
            output.display()
        );

        Ok(output.clone())
    }
}
