mod cli;

use anyhow::{Context, Result};
use beam_renderer::{render, save_png, SceneDescription};
use clap::Parser;

use cli::Args;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Beamburst");

    let mut description = match &args.scene {
        Some(path) => SceneDescription::load(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => {
            log::info!("No scene given, using the built-in scene");
            SceneDescription::reference()
        }
    };
    args.apply_overrides(&mut description);
    description.validate()?;

    if args.print_scene {
        println!("{}", description.to_json_string()?);
        return Ok(());
    }

    let scene = description.build_scene()?;
    let camera = description.camera();
    let config = description.render_config();

    let image = render(&scene, &camera, &config);

    save_png(&image, &args.output)
        .with_context(|| format!("Failed to save {}", args.output.display()))?;

    Ok(())
}
