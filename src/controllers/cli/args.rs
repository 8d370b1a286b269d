use std::path::PathBuf;
use std::thread;

use clap::{Parser, ValueEnum};

use crate::core::colour_mapping::kinds::ColourMapKind;
use crate::core::data::render_config::{DEFAULT_THREADS, RenderSettings};
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::presenters::file::kinds::ImageFormatKind;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColourArg {
    SmoothGradient,
    Grayscale,
}

impl From<ColourArg> for ColourMapKind {
    fn from(arg: ColourArg) -> Self {
        match arg {
            ColourArg::SmoothGradient => ColourMapKind::SmoothGradient,
            ColourArg::Grayscale => ColourMapKind::Grayscale,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatArg {
    Bmp,
    Ppm,
}

impl From<FormatArg> for ImageFormatKind {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Bmp => ImageFormatKind::Bmp,
            FormatArg::Ppm => ImageFormatKind::Ppm,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "fractal_renderer",
    version,
    about = "Renders a Mandelbrot or Julia set to an image file"
)]
pub struct CliArgs {
    /// Fractal family: 0 Mandelbrot, 1 classic Julia, 2 Douady rabbit, 3 custom Julia,
    /// 4 neuron Julia. Unknown values fall back to the classic Julia set.
    #[arg(short = 'f', long, default_value_t = 1, allow_negative_numbers = true)]
    pub fractal: i64,

    /// Ask for the fractal family on stdin.
    #[arg(long, default_value_t = false)]
    pub menu: bool,

    #[arg(long)]
    pub width: Option<u32>,

    #[arg(long)]
    pub height: Option<u32>,

    #[arg(long, allow_negative_numbers = true)]
    pub x_min: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub x_max: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub y_min: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    pub y_max: Option<f64>,

    #[arg(short = 'i', long)]
    pub max_iterations: Option<u32>,

    /// Worker threads. Defaults to the available parallelism.
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    #[arg(long, value_enum, default_value_t = ColourArg::SmoothGradient)]
    pub colour: ColourArg,

    #[arg(long, value_enum, default_value_t = FormatArg::Bmp)]
    pub format: FormatArg,

    /// Output file. Overrides the name derived from the fractal family.
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,
}

impl CliArgs {
    /// Layers the explicit flags over the defaults of `kind`.
    pub fn render_settings(&self, kind: FractalKind) -> RenderSettings {
        let defaults = RenderSettings::for_kind(kind);

        RenderSettings {
            kind,
            width: self.width.unwrap_or(defaults.width),
            height: self.height.unwrap_or(defaults.height),
            x_min: self.x_min.unwrap_or(defaults.x_min),
            x_max: self.x_max.unwrap_or(defaults.x_max),
            y_min: self.y_min.unwrap_or(defaults.y_min),
            y_max: self.y_max.unwrap_or(defaults.y_max),
            max_iterations: self.max_iterations.unwrap_or(defaults.max_iterations),
            threads: self.threads.unwrap_or_else(default_threads),
            colour_map_kind: self.colour.into(),
        }
    }

    pub fn image_format(&self) -> ImageFormatKind {
        self.format.into()
    }

    pub fn output_path(&self, kind: FractalKind, extension: &str) -> PathBuf {
        match &self.output {
            Some(path) => path.clone(),
            None => self.output_dir.join(kind.file_name(extension)),
        }
    }
}

fn default_threads() -> usize {
    thread::available_parallelism()
        .map(|threads| threads.get())
        .unwrap_or(DEFAULT_THREADS)
}
