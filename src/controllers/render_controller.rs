use std::error::Error;
use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use crate::controllers::ports::file_presenter::{FilePresenterPort, PresentError};
use crate::core::actions::render_raster::render_raster::{RenderRasterError, render_raster};
use crate::core::actions::render_raster::worker_pool::{WorkerPool, WorkerPoolError};
use crate::core::colour_mapping::errors::ColourMapError;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::render_config::RenderConfig;
use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
use crate::core::fractals::errors::FractalError;
use crate::core::util::plane_mapping::PixelToComplexCoordsError;
use crate::storage::write_atomically::write_atomically;

#[derive(Debug)]
pub enum RenderControllerError {
    WorkerPool(WorkerPoolError),
    Fractal(FractalError),
    Render(RenderRasterError<PixelToComplexCoordsError, ColourMapError>),
    Present(PresentError),
    NothingRendered,
}

impl fmt::Display for RenderControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WorkerPool(err) => write!(f, "{}", err),
            Self::Fractal(err) => write!(f, "{}", err),
            Self::Render(err) => write!(f, "render failed: {}", err),
            Self::Present(err) => write!(f, "failed to save image: {}", err),
            Self::NothingRendered => write!(f, "no image has been rendered yet"),
        }
    }
}

impl Error for RenderControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::WorkerPool(err) => Some(err),
            Self::Fractal(err) => Some(err),
            Self::Render(err) => Some(err),
            Self::Present(err) => Some(err),
            Self::NothingRendered => None,
        }
    }
}

impl From<WorkerPoolError> for RenderControllerError {
    fn from(err: WorkerPoolError) -> Self {
        Self::WorkerPool(err)
    }
}

impl From<FractalError> for RenderControllerError {
    fn from(err: FractalError) -> Self {
        Self::Fractal(err)
    }
}

impl From<RenderRasterError<PixelToComplexCoordsError, ColourMapError>> for RenderControllerError {
    fn from(err: RenderRasterError<PixelToComplexCoordsError, ColourMapError>) -> Self {
        Self::Render(err)
    }
}

impl From<PresentError> for RenderControllerError {
    fn from(err: PresentError) -> Self {
        Self::Present(err)
    }
}

/// Renders one frame from a [`RenderConfig`] and hands it to a file presenter.
pub struct RenderController<P: FilePresenterPort> {
    presenter: P,
    buffer: Option<PixelBuffer>,
}

impl<P: FilePresenterPort> RenderController<P> {
    pub fn new(presenter: P) -> Self {
        Self {
            presenter,
            buffer: None,
        }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn buffer(&self) -> Option<&PixelBuffer> {
        self.buffer.as_ref()
    }

    /// Renders the frame and returns the wall-clock time spent in the parallel sweep.
    pub fn generate(&mut self, config: &RenderConfig) -> Result<Duration, RenderControllerError> {
        let pixel_rect = config.pixel_rect();
        let viewport = config.viewport();

        log::info!("Rendering {}...", config.kind());
        log::info!("Image size: {}x{}", pixel_rect.width(), pixel_rect.height());
        log::info!(
            "Viewport: x {}..{}, y {}..{}",
            viewport.x_min(),
            viewport.x_max(),
            viewport.y_min(),
            viewport.y_max()
        );
        log::info!("Max iterations: {}", config.max_iterations());
        log::info!("Threads: {}", config.threads());

        let pool = WorkerPool::new(config.threads())?;
        let algorithm = EscapeTimeAlgorithm::new(
            config.kind(),
            pixel_rect,
            viewport,
            config.max_iterations(),
        )?;
        let colour_map = colour_map_factory(config.colour_map_kind(), config.max_iterations());
        log::info!("Colour map: {}", config.colour_map_kind());

        let start = Instant::now();
        let buffer = render_raster(&algorithm, &colour_map, &pool)?;
        let duration = start.elapsed();

        println!("Render time: {:.3?}", duration);

        self.buffer = Some(buffer);

        Ok(duration)
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> Result<(), RenderControllerError> {
        let Some(buffer) = &self.buffer else {
            return Err(RenderControllerError::NothingRendered);
        };

        let filepath = filepath.as_ref();
        write_atomically(filepath, |writer| self.presenter.encode(buffer, writer))?;
        log::info!("Saved to {}", filepath.display());

        Ok(())
    }
}
