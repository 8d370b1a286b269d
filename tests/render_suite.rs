use std::fs;

use fractal_renderer::{
    CliArgs, Colour, ColourMapKind, ConfigError, FractalKind, ImageFormatKind, PixelBuffer,
    PixelRect, PlaneMapping, Point, RenderConfig, RenderController, RenderSettings, Viewport,
    file_presenter_factory,
};

use clap::Parser;

fn render(config: &RenderConfig) -> PixelBuffer {
    let mut controller = RenderController::new(file_presenter_factory(ImageFormatKind::Ppm));
    controller.generate(config).expect("render should succeed");

    controller.buffer().expect("buffer after render").clone()
}

fn settings(kind: FractalKind, width: u32, height: u32, max_iterations: u32) -> RenderSettings {
    RenderSettings {
        width,
        height,
        max_iterations,
        threads: 4,
        ..RenderSettings::for_kind(kind)
    }
}

#[test]
fn pixel_mapping_hits_the_axis_exactly() {
    let mapping = PlaneMapping::new(
        PixelRect::new(800, 600).unwrap(),
        Viewport::new(-2.0, 2.0, -1.5, 1.5).unwrap(),
    );

    let sample = mapping.pixel_to_complex(Point { x: 400, y: 300 }).unwrap();

    assert_eq!(sample.real, 0.0);
    assert_eq!(sample.imag, 0.0);
}

#[test]
fn mandelbrot_pixel_nearest_origin_is_black() {
    let config = settings(FractalKind::Mandelbrot, 100, 100, 50)
        .validate()
        .unwrap();

    let raster = render(&config);

    // x = -2 + 67 * 0.03 = 0.01, y = -1 + 50 * 0.02 = 0
    assert_eq!(raster.pixel(Point { x: 67, y: 50 }), Some(Colour::BLACK));
}

#[test]
fn unknown_selector_renders_the_classic_julia_set() {
    testing_logger::setup();
    let fallback = FractalKind::resolve_selector(99);
    assert_eq!(fallback, FractalKind::JuliaClassic);
    testing_logger::validate(|captured_logs| {
        let warnings: Vec<_> = captured_logs
            .iter()
            .filter(|log| log.level == log::Level::Warn)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].body.contains("99"));
    });

    let classic = settings(FractalKind::JuliaClassic, 64, 48, 100);
    let expected = render(&classic.validate().unwrap());
    let actual = render(&settings(fallback, 64, 48, 100).validate().unwrap());

    assert_eq!(actual.buffer(), expected.buffer());
}

#[test]
fn rasters_are_identical_for_every_pool_size() {
    for &kind in FractalKind::ALL {
        let base = settings(kind, 73, 41, 120);
        let with_threads = |threads| {
            let config = RenderSettings { threads, ..base.clone() }.validate().unwrap();
            render(&config)
        };
        let reference = with_threads(1);

        for threads in [2, 3, 8] {
            let raster = with_threads(threads);
            assert_eq!(
                raster.buffer(),
                reference.buffer(),
                "{} with {} threads",
                kind,
                threads
            );
        }
    }
}

#[test]
fn grayscale_render_keeps_interior_black() {
    let config = RenderSettings {
        colour_map_kind: ColourMapKind::Grayscale,
        ..settings(FractalKind::Mandelbrot, 100, 100, 50)
    }
    .validate()
    .unwrap();

    let raster = render(&config);

    assert_eq!(raster.pixel(Point { x: 67, y: 50 }), Some(Colour::BLACK));
    let corner = raster.pixel(Point { x: 0, y: 0 }).unwrap();
    assert_eq!(corner.r, corner.g);
    assert_eq!(corner.g, corner.b);
}

#[test]
fn cli_defaults_write_fallback_bmp() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().to_str().unwrap();
    let args = CliArgs::try_parse_from([
        "fractal_renderer",
        "--fractal",
        "99",
        "--width",
        "30",
        "--height",
        "20",
        "-i",
        "40",
        "--output-dir",
        out_dir,
    ])
    .unwrap();

    let kind = FractalKind::resolve_selector(args.fractal);
    let config = args.render_settings(kind).validate().unwrap();
    let mut controller = RenderController::new(file_presenter_factory(args.image_format()));
    let path = args.output_path(kind, controller.presenter().extension());

    controller.generate(&config).unwrap();
    controller.write(&path).unwrap();

    assert_eq!(path, dir.path().join("julia_classic.bmp"));
    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..2], b"BM");
    assert_eq!(u32::from_le_bytes(bytes[2..6].try_into().unwrap()) as usize, bytes.len());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn ppm_output_contains_the_raster() {
    let dir = tempfile::tempdir().unwrap();
    let config = settings(FractalKind::JuliaNeuron, 16, 9, 60).validate().unwrap();
    let mut controller = RenderController::new(file_presenter_factory(ImageFormatKind::Ppm));
    let path = dir.path().join(FractalKind::JuliaNeuron.file_name("ppm"));

    controller.generate(&config).unwrap();
    controller.write(&path).unwrap();

    let bytes = fs::read(&path).unwrap();
    let header = b"P6\n16 9\n255\n";
    assert_eq!(&bytes[..header.len()], header);
    assert_eq!(&bytes[header.len()..], controller.buffer().unwrap().buffer().as_slice());
}

#[test]
fn invalid_settings_are_rejected_before_rendering() {
    let zero_size = settings(FractalKind::Mandelbrot, 0, 10, 50);
    assert!(matches!(zero_size.validate(), Err(ConfigError::PixelRect(_))));

    let inverted = RenderSettings {
        y_min: 1.0,
        y_max: -1.0,
        ..settings(FractalKind::JuliaCustom, 10, 10, 50)
    };
    assert!(matches!(inverted.validate(), Err(ConfigError::Viewport(_))));

    let non_finite = RenderSettings {
        x_max: f64::NAN,
        ..settings(FractalKind::JuliaCustom, 10, 10, 50)
    };
    assert!(matches!(non_finite.validate(), Err(ConfigError::Viewport(_))));

    let zero_cap = settings(FractalKind::JuliaDouady, 10, 10, 0);
    assert_eq!(zero_cap.validate(), Err(ConfigError::ZeroMaxIterations));

    let zero_threads = RenderSettings {
        threads: 0,
        ..settings(FractalKind::JuliaDouady, 10, 10, 50)
    };
    assert_eq!(zero_threads.validate(), Err(ConfigError::ZeroThreads));
}
