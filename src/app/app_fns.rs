use std::{
    error::Error,
    io::{BufWriter, Cursor},
    path::Path,
};

use image::{DynamicImage, ImageFormat, RgbImage};

use crate::{
    app::*,
    library::{build, plan_layout, CaptionRenderer, FontCaptioner, ImageDescriptor, Layout},
};

pub fn run_app() -> i32 {
    //Parse arguments and bail early if there is an error.
    let cfg = match parse_args() {
        Ok(cfg) => {
            configure_logs(cfg.output_cfg.verbosity);
            cfg
        }
        //clap formats its own errors (and --help/--version) and picks the exit code.
        Err(AppError::Clap(e)) => e.exit(),
        Err(fatal) => {
            //Errors are reported using TermLogger, which is configured from the argument parser.
            //But if a fatal error occurred during parsing the logger would not be configured when
            //we attempt to print the fatal error. So if a fatal error occurs, start the logger
            //before returning the error.
            configure_logs(ReportVerbosity::Verbose);
            print_fatal_err(&fatal, ReportVerbosity::Verbose);
            return 1;
        }
    };

    match run_app_inner(&cfg) {
        Ok(()) => 0,
        Err(fatal_error) => {
            print_fatal_err(&fatal_error, cfg.output_cfg.verbosity);
            1
        }
    }
}

pub fn run_app_inner(cfg: &AppCfg) -> Result<(), AppError> {
    //Load the font before touching any image, so that a missing font is reported
    //without first doing any (possibly slow) image work.
    let captioner = match &cfg.collage_cfg.caption {
        Some(caption_cfg) => Some(FontCaptioner::load(caption_cfg)?),
        None => None,
    };

    create_collage(cfg, captioner.as_ref().map(|c| c as &dyn CaptionRenderer))
}

pub fn create_collage(cfg: &AppCfg, captioner: Option<&dyn CaptionRenderer>) -> Result<(), AppError> {
    let collage_cfg = &cfg.collage_cfg;

    let images = cfg
        .image_files
        .iter()
        .map(|src_path| ImageDescriptor::probe(src_path, captioner))
        .collect::<Result<Vec<_>, _>>()?;

    if cfg.output_cfg.dry_run {
        let layout = plan_layout(&images, collage_cfg.border, collage_cfg.spacing, captioner.is_some())?;
        print_layout(&layout, cfg.output_cfg.json_output);
        return Ok(());
    }

    let canvas = build(&images, collage_cfg, captioner)?;

    let output_path = &cfg.output_cfg.output_path;
    info!(
        target: "write_image",
            "Writing {}x{} collage of {} images to {}",
            canvas.width(),
            canvas.height(),
            images.len(),
            output_path.display()
    );

    save_collage(canvas, output_path)
}

//Nothing is written to output_path until the image has been fully encoded in memory,
//so an unknown format or an encoder failure leaves no file behind.
fn save_collage(canvas: RgbImage, output_path: &Path) -> Result<(), AppError> {
    let save_err = |source| AppError::Save {
        path: output_path.to_path_buf(),
        source,
    };

    let format = ImageFormat::from_path(output_path).map_err(save_err)?;

    let mut encoded = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(canvas)
        .write_to(&mut encoded, format)
        .map_err(save_err)?;

    std::fs::write(output_path, encoded.into_inner()).map_err(|source| AppError::Write {
        path: output_path.to_path_buf(),
        source,
    })
}

fn print_fatal_err(fatal_err: &AppError, verbosity: ReportVerbosity) {
    error!(target: "app-errorlog", "{}", fatal_err);

    if verbosity == ReportVerbosity::Verbose {
        let mut source: Option<&(dyn Error + 'static)> = fatal_err.source();
        while let Some(e) = source {
            error!(target: "app-errorlog", "    caused by: {}", e);
            source = e.source();
        }
    }
}

pub fn configure_logs(verbosity: ReportVerbosity) {
    use simplelog::*;

    let mut cfg = simplelog::ConfigBuilder::new();

    let min_loglevel = match verbosity {
        ReportVerbosity::Quiet => LevelFilter::Warn,
        ReportVerbosity::Default => LevelFilter::Info,
        ReportVerbosity::Verbose => LevelFilter::Trace,
    };

    if let Err(e) = TermLogger::init(min_loglevel, cfg.build(), TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("TermLogger failed to initialize: {}", e);
    }
}

fn print_layout(layout: &Layout, json_output: bool) {
    if json_output {
        let stdout = BufWriter::new(std::io::stdout());
        serde_json::to_writer_pretty(stdout, layout).unwrap_or_default();
        println!();
    } else {
        println!("canvas {}x{}", layout.width, layout.height);
        for placement in &layout.placements {
            println!(
                "{} at ({}, {})",
                placement.src_path.display(),
                placement.image_x,
                placement.image_y
            );
            if let Some(caption) = &placement.caption {
                println!("    caption \"{}\" at ({}, {})", caption.text, caption.x, caption.y);
            }
        }
    }
}
