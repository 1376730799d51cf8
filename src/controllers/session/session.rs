use crate::controllers::session::commands::{CommandOutcome, SessionCommand};
use crate::controllers::session::config::SessionConfig;
use crate::controllers::session::errors::SessionError;
use crate::controllers::session::ports::{PixelSink, SessionPresenterPort};
use crate::controllers::session::scheduler::{RenderRequest, RowRenderScheduler};
use crate::controllers::session::viewport_controller::ViewportController;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::colour_mapping::maps::hue_cycle::HueCycleColourMap;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::util::available_threads::threads_for_rows;
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;

/// One interactive exploration: the selected fractal, its viewport and the
/// frames rendered from them.
///
/// All navigation goes through this type. While a frame is rendering every
/// request is refused with [`SessionError::Busy`] and nothing changes.
pub struct RenderSession {
    config: SessionConfig,
    fractal: FractalKinds,
    viewport: ViewportController,
    colour_map: Arc<dyn ColourMap>,
    scheduler: RowRenderScheduler,
}

impl RenderSession {
    pub fn new(
        config: SessionConfig,
        sink: Arc<dyn PixelSink>,
        presenter_port: Arc<dyn SessionPresenterPort>,
    ) -> Result<Self, SessionError> {
        Self::with_colour_map(config, sink, presenter_port, Arc::new(HueCycleColourMap))
    }

    pub fn with_colour_map(
        config: SessionConfig,
        sink: Arc<dyn PixelSink>,
        presenter_port: Arc<dyn SessionPresenterPort>,
        colour_map: Arc<dyn ColourMap>,
    ) -> Result<Self, SessionError> {
        config.validate()?;

        let threads = threads_for_rows(config.threads, config.size);
        let scheduler = RowRenderScheduler::new(threads, sink, presenter_port)?;
        let viewport = ViewportController::new(config.fractal.initial_viewport(), config.size);

        info!(
            "Session started: {} at {}x{}, {} worker threads, colours: {}",
            config.fractal,
            config.size,
            config.size,
            threads,
            colour_map.display_name()
        );

        Ok(Self {
            config,
            fractal: config.fractal,
            viewport,
            colour_map,
            scheduler,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[must_use]
    pub fn size(&self) -> u32 {
        self.config.size
    }

    #[must_use]
    pub fn fractal(&self) -> FractalKinds {
        self.fractal
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport.viewport()
    }

    /// False while a frame is in flight.
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        !self.scheduler.is_rendering()
    }

    #[must_use]
    pub fn rows_remaining(&self) -> u32 {
        self.scheduler.rows_remaining()
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.scheduler.generation()
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.scheduler.last_completed_generation()
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.scheduler.last_render_duration()
    }

    pub fn wait_until_idle(&self, timeout: Option<Duration>) -> bool {
        self.scheduler.wait_until_idle(timeout)
    }

    fn ensure_idle(&self, action: &str) -> Result<(), SessionError> {
        if self.scheduler.is_rendering() {
            debug!("Ignoring {} while frame {} renders", action, self.generation());
            return Err(SessionError::Busy);
        }

        Ok(())
    }

    /// Renders the current viewport. Returns the frame's generation.
    pub fn render(&mut self) -> Result<u64, SessionError> {
        self.ensure_idle("render")?;

        self.scheduler.render(RenderRequest {
            size: self.config.size,
            viewport: self.viewport.viewport(),
            algorithm: Arc::new(self.fractal),
            colour_map: Arc::clone(&self.colour_map),
        })
    }

    pub fn reset(&mut self) -> Result<u64, SessionError> {
        self.ensure_idle("reset")?;

        self.viewport.reset(&self.fractal);
        self.render()
    }

    pub fn switch_fractal(&mut self, fractal: FractalKinds) -> Result<u64, SessionError> {
        self.ensure_idle("fractal switch")?;

        info!("Switching to {}", fractal);
        self.fractal = fractal;
        self.viewport.reset(&fractal);
        self.render()
    }

    /// Recentres on the clicked pixel and zooms by the configured scale.
    pub fn zoom_at(&mut self, pixel: Point) -> Result<u64, SessionError> {
        self.ensure_idle("zoom")?;

        let target = self.viewport.pixel_to_complex(pixel).map_err(|err| {
            warn!("Zoom rejected: {}", err);
            SessionError::from(err)
        })?;

        self.viewport
            .recenter_and_zoom(target, self.config.zoom_scale)
            .map_err(|err| {
                warn!("Zoom rejected: {}", err);
                SessionError::from(err)
            })?;

        debug!(
            "Zoomed to ({}, {}) width {}",
            target.real,
            target.imag,
            self.viewport.viewport().width()
        );

        self.render()
    }

    /// Snapshot of the last completed frame.
    pub fn export_image(&self) -> Result<PixelBuffer, SessionError> {
        self.ensure_idle("export")?;

        Ok(self.scheduler.sink().export_image())
    }

    /// Applies one selection event. Rejected wholesale while rendering.
    pub fn handle(&mut self, command: SessionCommand) -> Result<CommandOutcome, SessionError> {
        self.ensure_idle("command")?;

        match command {
            SessionCommand::Reset => self.reset().map(CommandOutcome::RenderStarted),
            SessionCommand::Save => self.export_image().map(CommandOutcome::Exported),
            SessionCommand::SwitchAlgorithm(name) => {
                let fractal = FractalKinds::from_name(&name)?;
                self.switch_fractal(fractal).map(CommandOutcome::RenderStarted)
            }
            SessionCommand::ZoomClick(pixel) => {
                self.zoom_at(pixel).map(CommandOutcome::RenderStarted)
            }
        }
    }
}
