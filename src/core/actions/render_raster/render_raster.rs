use rayon::prelude::*;

use crate::core::actions::render_raster::ports::colour_map::ColourMap;
use crate::core::actions::render_raster::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::render_raster::worker_pool::WorkerPool;
use crate::core::data::colour::{BYTES_PER_PIXEL, Colour};
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::point::Point;

/// Error type for raster rendering.
///
/// Keeps the algorithm and colour map failures apart so callers can report
/// which stage broke.
#[derive(Debug)]
pub enum RenderRasterError<A, C> {
    /// The fractal algorithm rejected a pixel.
    Algorithm(A),
    /// The colour map rejected an algorithm result.
    ColourMap(C),
    /// A pixel could not be stored in the raster.
    PixelBuffer(PixelBufferError),
}

impl<A, C> std::fmt::Display for RenderRasterError<A, C>
where
    A: std::fmt::Display,
    C: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Algorithm(e) => write!(f, "algorithm error: {}", e),
            Self::ColourMap(e) => write!(f, "colour map error: {}", e),
            Self::PixelBuffer(e) => write!(f, "pixel buffer error: {}", e),
        }
    }
}

impl<A, C> std::error::Error for RenderRasterError<A, C>
where
    A: std::error::Error + 'static,
    C: std::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Algorithm(e) => Some(e),
            Self::ColourMap(e) => Some(e),
            Self::PixelBuffer(e) => Some(e),
        }
    }
}

impl<A, C> From<PixelBufferError> for RenderRasterError<A, C> {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

fn render_pixel<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
    pixel: Point,
) -> Result<Colour, RenderRasterError<Alg::Failure, CMap::Failure>>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let value = algorithm
        .compute(pixel)
        .map_err(RenderRasterError::Algorithm)?;

    colour_map.map(value).map_err(RenderRasterError::ColourMap)
}

/// Renders every pixel of `algorithm.pixel_rect()` on the given worker pool.
///
/// The flattened pixel index space is split by rayon's work-stealing
/// scheduler, so cheap pixels far from the set and expensive pixels near its
/// boundary balance out across threads. Each pixel owns a disjoint 3-byte
/// slice of the raster, so no locking is needed and the output does not
/// depend on the pool size.
pub fn render_raster<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
    pool: &WorkerPool,
) -> Result<PixelBuffer, RenderRasterError<Alg::Failure, CMap::Failure>>
where
    Alg: FractalAlgorithm + Sync,
    Alg::Failure: Send,
    CMap: ColourMap<Alg::Success> + Sync,
    CMap::Failure: Send,
{
    let pixel_rect = algorithm.pixel_rect();
    let mut raster = PixelBuffer::new(pixel_rect);

    pool.install(|| {
        raster
            .buffer_mut()
            .par_chunks_exact_mut(BYTES_PER_PIXEL)
            .enumerate()
            .try_for_each(|(index, cell)| {
                render_pixel(algorithm, colour_map, pixel_rect.point_at(index))
                    .map(|colour| cell.copy_from_slice(&colour.to_bytes()))
            })
    })?;

    Ok(raster)
}

/// Single-threaded reference renderer, row by row on the calling thread.
pub fn render_raster_serial<Alg, CMap>(
    algorithm: &Alg,
    colour_map: &CMap,
) -> Result<PixelBuffer, RenderRasterError<Alg::Failure, CMap::Failure>>
where
    Alg: FractalAlgorithm,
    CMap: ColourMap<Alg::Success>,
{
    let pixel_rect = algorithm.pixel_rect();
    let mut raster = PixelBuffer::new(pixel_rect);

    for pixel in pixel_rect.points() {
        let colour = render_pixel(algorithm, colour_map, pixel)?;
        raster.set_pixel(pixel, colour)?;
    }

    Ok(raster)
}
