use std::io;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;

use fractal_renderer::{
    CliArgs, FractalKind, RenderController, file_presenter_factory, prompt_fractal_selector,
};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = Instant::now();
    let args = CliArgs::parse();

    let selector = if args.menu {
        prompt_fractal_selector(io::stdin().lock(), io::stdout().lock())
            .context("failed to read the fractal choice")?
    } else {
        args.fractal
    };
    let kind = FractalKind::resolve_selector(selector);

    let config = args
        .render_settings(kind)
        .validate()
        .context("invalid render settings")?;

    let presenter = file_presenter_factory(args.image_format());
    let output = args.output_path(kind, presenter.extension());
    let mut controller = RenderController::new(presenter);

    controller.generate(&config)?;
    controller
        .write(&output)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("Total time: {:.3?}", start.elapsed());

    Ok(())
}
