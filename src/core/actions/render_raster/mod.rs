pub mod ports;
pub mod render_raster;
pub mod worker_pool;
