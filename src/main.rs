use anyhow::{bail, Context};
use clap::{ArgAction, Parser};
use std::fs;
use std::path::PathBuf;

use sketchpad::config::Config;
use sketchpad::draw::{Frame, Mark};
use sketchpad::export::{self, ExportOptions};
use sketchpad::session;

#[derive(Parser, Debug)]
#[command(name = "sketchpad")]
#[command(version, about = "Freehand sketchpad with stroke history, stickers, and PNG export")]
struct Cli {
    /// Export the saved sketch as a PNG image
    #[arg(long, short = 'e', action = ArgAction::SetTrue)]
    export: bool,

    /// Print a summary of the saved sketch
    #[arg(long, action = ArgAction::SetTrue)]
    info: bool,

    /// Read the sketch from this file instead of the configured location
    #[arg(long, value_name = "FILE")]
    sketch: Option<PathBuf>,

    /// Write the exported image to this exact path instead of the
    /// configured directory
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Override the configured export scale factor
    #[arg(long, value_name = "FACTOR")]
    scale: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::load()?;

    if cli.export || cli.info {
        let frame = load_frame(&cli, &config)?;

        if cli.info {
            print_info(&frame);
        }

        if cli.export {
            run_export(&cli, &config, &frame)?;
        }
    } else {
        // No flags: show usage
        println!("sketchpad: Freehand sketchpad with stroke history, stickers, and PNG export");
        println!();
        println!("Usage:");
        println!("  sketchpad --export             Export the saved sketch as a PNG image");
        println!("  sketchpad --info               Print a summary of the saved sketch");
        println!("  sketchpad --help               Show help");
        println!();
        println!("Options:");
        println!("  --sketch <FILE>   Read the sketch from a specific file");
        println!("  --output <FILE>   Write the exported image to an exact path");
        println!("  --scale <FACTOR>  Override the configured export scale");
        println!();
        println!("Configuration lives at ~/.config/sketchpad/config.toml; saved");
        println!("sketches live in the platform data directory by default.");
    }

    Ok(())
}

fn load_frame(cli: &Cli, config: &Config) -> anyhow::Result<Frame> {
    let config_dir = Config::get_config_dir()?;
    let options = session::options_from_config(&config.session, &config_dir)?;

    let (frame, looked_at) = match &cli.sketch {
        Some(path) => (session::load_sketch_from(path, &options)?, path.clone()),
        None => (session::load_sketch(&options)?, options.sketch_file_path()),
    };

    match frame {
        Some(frame) => Ok(frame),
        None => bail!("no saved sketch found (looked at {})", looked_at.display()),
    }
}

fn print_info(frame: &Frame) {
    let strokes = frame.marks().iter().filter(|mark| mark.is_stroke()).count();
    let stickers = frame.marks().iter().filter(|mark| mark.is_sticker()).count();
    println!(
        "{} mark(s): {} stroke(s), {} sticker(s)",
        frame.len(),
        strokes,
        stickers
    );

    for mark in frame.marks() {
        match mark {
            Mark::Stroke { points, thick, .. } => {
                println!("  stroke: {} point(s), {:.1}px", points.len(), thick);
            }
            Mark::Sticker {
                glyph, x, y, rotation,
            } => {
                println!("  sticker: '{}' at ({}, {}), {:.0}°", glyph, x, y, rotation);
            }
        }
    }
}

fn run_export(cli: &Cli, config: &Config, frame: &Frame) -> anyhow::Result<()> {
    let mut options = ExportOptions::from_config(config);
    if let Some(scale) = cli.scale {
        options.scale = scale.clamp(1.0, 16.0);
    }

    let path = match &cli.output {
        Some(path) => {
            let bytes = export::render_to_png(frame, &options)?;
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent).with_context(|| {
                        format!("failed to create output directory {}", parent.display())
                    })?;
                }
            }
            fs::write(path, &bytes)
                .with_context(|| format!("failed to write image to {}", path.display()))?;
            path.clone()
        }
        None => export::export_frame(frame, &options)?,
    };

    println!("Exported sketch to {}", path.display());
    Ok(())
}
