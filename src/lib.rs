mod controllers;
mod core;
mod presenters;
mod storage;

pub use controllers::cli::args::{CliArgs, ColourArg, FormatArg};
pub use controllers::cli::menu::{UNPARSEABLE_SELECTOR, prompt_fractal_selector};
pub use controllers::ports::file_presenter::{FilePresenterPort, PresentError};
pub use controllers::render_controller::{RenderController, RenderControllerError};
pub use crate::core::actions::render_raster::ports::colour_map::ColourMap;
pub use crate::core::actions::render_raster::ports::fractal_algorithm::FractalAlgorithm;
pub use crate::core::actions::render_raster::render_raster::{
    RenderRasterError, render_raster, render_raster_serial,
};
pub use crate::core::actions::render_raster::worker_pool::{WorkerPool, WorkerPoolError};
pub use crate::core::colour_mapping::errors::ColourMapError;
pub use crate::core::colour_mapping::factory::colour_map_factory;
pub use crate::core::colour_mapping::kinds::ColourMapKind;
pub use crate::core::colour_mapping::map::IterationColourMap;
pub use crate::core::colour_mapping::maps::grayscale::Grayscale;
pub use crate::core::colour_mapping::maps::smooth_gradient::{
    SmoothGradient, smooth_gradient_colour,
};
pub use crate::core::colour_mapping::palette::Palette;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::complex::Complex;
pub use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
pub use crate::core::data::pixel_rect::{PixelRect, PixelRectError};
pub use crate::core::data::point::Point;
pub use crate::core::data::render_config::{ConfigError, RenderConfig, RenderSettings};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::algorithm::EscapeTimeAlgorithm;
pub use crate::core::fractals::errors::FractalError;
pub use crate::core::fractals::escape_time::{ESCAPE_RADIUS, escape_count};
pub use crate::core::fractals::fractal_kinds::{FractalKind, UnknownFractalSelector};
pub use crate::core::util::plane_mapping::{PixelToComplexCoordsError, PlaneMapping};
pub use presenters::file::bmp::BmpFilePresenter;
pub use presenters::file::factory::file_presenter_factory;
pub use presenters::file::kinds::ImageFormatKind;
pub use presenters::file::ppm::PpmFilePresenter;
