//! Cubepano CLI - cubemap to equirectangular panorama converter.
//!
//! Reads the six skybox face images from a directory and writes a single
//! equirectangular panorama PNG.

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use cubepano::export::{export_panorama_png, PngExportOptions};
use cubepano::loader::load_cubemap_dir;
use cubepano::projection::project_equirect;

/// Convert a six-face cubemap into an equirectangular panorama.
#[derive(Parser)]
#[command(name = "cubepano")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory containing the six face images (right.png, left.png,
    /// top.png, bottom.png, front.png, back.png).
    input: PathBuf,

    /// Output panorama PNG path.
    output: PathBuf,

    /// Panorama width in pixels.
    #[arg(short, long, default_value = "4096")]
    width: u32,

    /// Panorama height in pixels. Defaults to half the width.
    #[arg(long)]
    height: Option<u32>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    // Validate parameters
    if cli.width == 0 {
        eprintln!("Error: Width must be positive");
        std::process::exit(1);
    }

    let height = cli.height.unwrap_or(cli.width / 2);
    if height == 0 {
        eprintln!("Error: Height must be positive (pass --height for widths below 2)");
        std::process::exit(1);
    }

    let start = Instant::now();

    println!("Loading cubemap from {}...", cli.input.display());
    let cubemap = match load_cubemap_dir(&cli.input) {
        Ok(cubemap) => cubemap,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Projecting {}x{} panorama...", cli.width, height);
    let panorama = match project_equirect(&cubemap, cli.width, height) {
        Ok(panorama) => panorama,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = export_panorama_png(&panorama, &cli.output, &PngExportOptions::default()) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    println!("Panorama created in {:.2}s", start.elapsed().as_secs_f32());
    println!("Resolution: {}x{}", cli.width, height);
    println!("Saved to: {}", cli.output.display());
}
