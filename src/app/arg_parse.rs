use std::{ffi::OsString, iter::once, path::PathBuf, str::FromStr};

use crate::{
    app::*,
    library::{definitions::*, parse_color, CaptionCfg, CollageCfg},
};

pub fn parse_args() -> Result<AppCfg, AppError> {
    parse_args_from(std::env::args_os())
}

pub fn parse_args_from<I, T>(args: I) -> Result<AppCfg, AppError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let image_files = "IMAGE_FILES";
    let bg_color = "Background color";
    let border_size = "Border size";
    let space_between_images = "Space between images";
    let caption_filenames = "Caption filenames";
    let caption_fontcolor = "Caption font color";
    let caption_fontsize = "Caption font size";
    let caption_font = "Caption font";
    let output = "Output file";
    let dry_run = "Dry run";
    let json_output = "Json output";
    let args_file = "Args file";
    let quiet = "Quiet";
    let verbose = "Verbose";
    let generate_bash_completions = "Generate bash completions";

    let default_border_string = DEFAULT_BORDER_SIZE.to_string();
    let default_spacing_string = DEFAULT_SPACE_BETWEEN_IMAGES.to_string();
    let default_fontsize_string = DEFAULT_CAPTION_FONT_SIZE.to_string();

    //args are not added through method chaining because this appears to break rustfmt.
    let mut clap_app = clap::App::new("imgtrain")
        .version("0.1")
        .about("Joins images side by side into a single image, optionally captioned with their file names");

    clap_app = clap_app.arg(
        clap::Arg::with_name(image_files)
            .multiple(true)
            .required_unless_one(&[args_file, generate_bash_completions])
            .help("Images to join. They are placed left to right in the order given.")
            .display_order(1),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(output)
            .short("o")
            .long("output")
            .default_value(DEFAULT_OUTPUT_PATH)
            .help("Output file. The image format is chosen from the extension.")
            .display_order(2),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(bg_color)
            .long("bg-color")
            .default_value(DEFAULT_BG_COLOR)
            .help("Background color, as #rgb, #rrggbb, rgb(r, g, b) or a color name"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(border_size)
            .long("border-size")
            .default_value(&default_border_string)
            .help("Margin in pixels around the whole image"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(space_between_images)
            .long("space-between-images")
            .default_value(&default_spacing_string)
            .help("Gap in pixels between adjacent images"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(caption_filenames)
            .long("caption-filenames")
            .help("Write each image's file name (without extension) underneath it"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(caption_fontcolor)
            .long("caption-fontcolor")
            .default_value(DEFAULT_CAPTION_COLOR)
            .help("Caption text color"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(caption_fontsize)
            .long("caption-fontsize")
            .default_value(&default_fontsize_string)
            .help("Caption text size in pixels"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(caption_font)
            .long("caption-font")
            .default_value(DEFAULT_CAPTION_FONT)
            .help("TrueType or OpenType font file used for captions"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(dry_run)
            .long("dry-run")
            .help("Print where each image and caption would be placed, without writing any output"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(json_output)
            .long("json-output")
            .requires(dry_run)
            .help("Print the --dry-run layout in json format"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(args_file)
            .long("args-file")
            .takes_value(true)
            .help("Read command line arguments from a file")
            .conflicts_with(image_files),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(quiet)
            .long("quiet")
            .help("Only print warnings and errors")
            .conflicts_with(verbose),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(verbose)
            .long("verbose")
            .help("Print where each image and caption is placed"),
    );

    clap_app = clap_app.arg(
        clap::Arg::with_name(generate_bash_completions)
            .long("generate-bash-completions")
            .help("Print bash completions and exit"),
    );

    let mut completions_app = clap_app.clone();

    let mut matches = clap_app.clone().get_matches_from_safe(args)?;

    //first check if a Args file is present. If so, then read it and use the arguments from within.
    if let Some(args_fname) = matches.value_of_os(args_file) {
        let args_fname = PathBuf::from(args_fname);
        let args = std::fs::read_to_string(&args_fname)
            .map_err(|e| AppError::ArgsFileNotFound(args_fname.clone(), e))?;

        //now strip comments from the args file
        let args_file_contents = comment::shell::strip(args)
            .map_err(|e| AppError::ArgsFileParse(args_fname.clone(), e.to_string()))?;

        //the arguments file needs to be split into args in the same way as the shell would do it.
        let args = shell_words::split(&args_file_contents)
            .map_err(|e| AppError::ArgsFileParse(args_fname.clone(), e.to_string()))?;

        //prepend the program name, as this is what would be seen in a direct shell invocation.
        let args = once("imgtrain".to_string()).chain(args);

        matches = clap_app.get_matches_from_safe(args)?;
    }

    if matches.is_present(generate_bash_completions) {
        completions_app.gen_completions_to("imgtrain", clap::Shell::Bash, &mut std::io::stdout());
        std::process::exit(0);
    }

    let image_files = matches
        .values_of_os(image_files)
        .map(|files| files.map(PathBuf::from).collect())
        .unwrap_or_default();

    let caption = if matches.is_present(caption_filenames) {
        let font_size: f32 = parse_number(&matches, caption_fontsize, "--caption-fontsize")?;
        if !(font_size.is_finite() && font_size > 0.0) {
            return Err(AppError::ParseNumber {
                arg: "--caption-fontsize",
                value: font_size.to_string(),
            });
        }

        Some(CaptionCfg {
            color: color_arg(&matches, caption_fontcolor, "--caption-fontcolor")?,
            font_size,
            font_path: PathBuf::from(matches.value_of_os(caption_font).unwrap_or_else(|| unreachable!())),
        })
    } else {
        None
    };

    let collage_cfg = CollageCfg {
        background: color_arg(&matches, bg_color, "--bg-color")?,
        border: parse_number(&matches, border_size, "--border-size")?,
        spacing: parse_number(&matches, space_between_images, "--space-between-images")?,
        caption,
    };

    let verbosity = if matches.is_present(quiet) {
        ReportVerbosity::Quiet
    } else if matches.is_present(verbose) {
        ReportVerbosity::Verbose
    } else {
        ReportVerbosity::Default
    };

    let output_cfg = OutputCfg {
        output_path: PathBuf::from(matches.value_of_os(output).unwrap_or_else(|| unreachable!())),
        dry_run: matches.is_present(dry_run),
        json_output: matches.is_present(json_output),
        verbosity,
    };

    Ok(AppCfg {
        image_files,
        collage_cfg,
        output_cfg,
    })
}

//all numeric args have defaults, so a value is always present.
fn parse_number<T: FromStr>(matches: &clap::ArgMatches, name: &str, flag: &'static str) -> Result<T, AppError> {
    let value = matches.value_of(name).unwrap_or_else(|| unreachable!());
    value.parse().map_err(|_| AppError::ParseNumber {
        arg: flag,
        value: value.to_string(),
    })
}

fn color_arg(matches: &clap::ArgMatches, name: &str, flag: &'static str) -> Result<image::Rgb<u8>, AppError> {
    let value = matches.value_of(name).unwrap_or_else(|| unreachable!());
    parse_color(value).ok_or_else(|| AppError::ParseColor {
        arg: flag,
        value: value.to_string(),
    })
}
