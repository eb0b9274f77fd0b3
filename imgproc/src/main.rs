//! imgproc command-line tool
//!
//! ```text
//! imgproc squash    <input.png> <output.png> <xfac> <yfac>
//! imgproc color_rot <input.png> <output.png>
//! imgproc blur      <input.png> <output.png> <blur_dist>
//! imgproc expand    <input.png> <output.png>
//! ```

use std::num::NonZeroU32;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use imgproc::Transformation;
use imgproc::io::{ImageFormat, read_image, write_image};

#[derive(Parser, Debug)]
#[command(version, about = "Apply a pixel transformation to a PNG image")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Shrink by integer factors, keeping the top-left pixel of each cell
    Squash {
        input: PathBuf,
        output: PathBuf,
        /// Horizontal factor (at least 1)
        xfac: NonZeroU32,
        /// Vertical factor (at least 1)
        yfac: NonZeroU32,
    },
    /// Cycle the color channels: R <- B, G <- R, B <- G
    #[command(name = "color_rot")]
    ColorRot { input: PathBuf, output: PathBuf },
    /// Box blur over a (2 * blur_dist + 1)-wide square
    Blur {
        input: PathBuf,
        output: PathBuf,
        /// Half-width of the blur window
        blur_dist: u32,
    },
    /// Double the width and height
    Expand { input: PathBuf, output: PathBuf },
}

impl Command {
    fn into_parts(self) -> (PathBuf, PathBuf, Transformation) {
        match self {
            Self::Squash {
                input,
                output,
                xfac,
                yfac,
            } => (input, output, Transformation::Squash { xfac, yfac }),
            Self::ColorRot { input, output } => (input, output, Transformation::ColorRotate),
            Self::Blur {
                input,
                output,
                blur_dist,
            } => (input, output, Transformation::Blur { blur_dist }),
            Self::Expand { input, output } => (input, output, Transformation::Expand),
        }
    }
}

fn run(args: Args) -> Result<()> {
    let (input, output, transformation) = args.command.into_parts();

    let src = read_image(&input)
        .with_context(|| format!("failed to read image {}", input.display()))?;
    log::info!(
        "loaded {} ({}x{})",
        input.display(),
        src.width(),
        src.height()
    );

    let dst = transformation
        .apply(&src)
        .with_context(|| format!("{transformation} failed on {}", input.display()))?;

    write_image(&dst, &output, ImageFormat::Png)
        .with_context(|| format!("failed to write image {}", output.display()))?;
    log::info!(
        "wrote {} ({}x{})",
        output.display(),
        dst.width(),
        dst.height()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = match Args::try_parse() {
        Ok(args) => args,
        // --help and --version
        Err(err) if !err.use_stderr() => err.exit(),
        Err(err) => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
    };

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
