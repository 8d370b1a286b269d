pub mod render_raster;
