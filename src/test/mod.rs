use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use image::{Rgb, RgbImage};
use tempfile::TempDir;

use crate::{
    app::{parse_args_from, run_app_inner, AppCfg, AppError},
    library::LibError,
};

const RED: Rgb<u8> = Rgb([255, 0, 0]);
const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
const BG: Rgb<u8> = Rgb([0xee, 0xee, 0xee]);

// Fonts commonly found on linux machines. The captioned end-to-end test is skipped without one.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

pub(crate) fn system_font() -> Option<&'static Path> {
    SYSTEM_FONTS.iter().map(Path::new).find(|p| p.exists())
}

fn write_solid(dir: &Path, name: &str, width: u32, height: u32, color: Rgb<u8>) -> PathBuf {
    let path = dir.join(name);
    RgbImage::from_pixel(width, height, color).save(&path).unwrap();
    path
}

fn cfg_from(args: &[&str], files: &[PathBuf]) -> AppCfg {
    let args = std::iter::once(OsString::from("imgtrain"))
        .chain(args.iter().map(OsString::from))
        .chain(files.iter().map(|f| f.clone().into_os_string()))
        .collect::<Vec<_>>();
    parse_args_from(args).unwrap()
}

fn scenario_inputs(dir: &TempDir) -> Vec<PathBuf> {
    vec![
        write_solid(dir.path(), "a.png", 100, 50, RED),
        write_solid(dir.path(), "b.png", 80, 50, BLUE),
    ]
}

#[test]
fn test_two_image_collage_written() {
    let dir = TempDir::new().unwrap();
    let files = scenario_inputs(&dir);
    let output = dir.path().join("out.png");

    let cfg = cfg_from(
        &[
            "--border-size",
            "20",
            "--space-between-images",
            "20",
            "--bg-color",
            "#EEEEEE",
            "-o",
            output.to_str().unwrap(),
        ],
        &files,
    );
    run_app_inner(&cfg).unwrap();

    let written = image::open(&output).unwrap().into_rgb8();
    assert_eq!(written.dimensions(), (240, 90));
    assert_eq!(*written.get_pixel(20, 20), RED);
    assert_eq!(*written.get_pixel(140, 20), BLUE);
    assert_eq!(*written.get_pixel(130, 45), BG);
}

#[test]
//the default output format is jpeg, so only the dimensions are checked exactly
fn test_jpeg_output() {
    let dir = TempDir::new().unwrap();
    let files = scenario_inputs(&dir);
    let output = dir.path().join("out.jpeg");

    let cfg = cfg_from(&["-o", output.to_str().unwrap()], &files);
    run_app_inner(&cfg).unwrap();

    assert_eq!(image::image_dimensions(&output).unwrap(), (100 + 80 + 2 * 30 + 30, 50 + 2 * 30));
}

#[test]
fn test_same_args_same_output() {
    let dir = TempDir::new().unwrap();
    let files = scenario_inputs(&dir);
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");

    run_app_inner(&cfg_from(&["-o", first.to_str().unwrap()], &files)).unwrap();
    run_app_inner(&cfg_from(&["-o", second.to_str().unwrap()], &files)).unwrap();

    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn test_missing_input_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let mut files = scenario_inputs(&dir);
    files.push(dir.path().join("does_not_exist.png"));
    let output = dir.path().join("out.png");

    let result = run_app_inner(&cfg_from(&["-o", output.to_str().unwrap()], &files));

    assert!(matches!(result, Err(AppError::Lib(LibError::ImageOpen { .. }))));
    assert!(!output.exists());
}

#[test]
fn test_undecodable_input_fails() {
    let dir = TempDir::new().unwrap();
    let mut files = scenario_inputs(&dir);
    let bogus = dir.path().join("notes.png");
    std::fs::write(&bogus, b"this is not a png").unwrap();
    files.insert(0, bogus);
    let output = dir.path().join("out.png");

    let result = run_app_inner(&cfg_from(&["-o", output.to_str().unwrap()], &files));

    assert!(matches!(result, Err(AppError::Lib(LibError::ImageOpen { .. }))));
    assert!(!output.exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = TempDir::new().unwrap();
    let files = scenario_inputs(&dir);

    let no_such_dir = dir.path().join("no_such_dir").join("out.png");
    let result = run_app_inner(&cfg_from(&["-o", no_such_dir.to_str().unwrap()], &files));
    assert!(matches!(result, Err(AppError::Write { .. })));
    assert!(!no_such_dir.exists());

    //the format is checked before anything touches the filesystem
    let unknown_format = dir.path().join("out.not_an_image_format");
    let result = run_app_inner(&cfg_from(&["-o", unknown_format.to_str().unwrap()], &files));
    assert!(matches!(result, Err(AppError::Save { .. })));
    assert!(!unknown_format.exists());
}

#[test]
//jpeg cannot hold an image wider than 65535 pixels, so encoding fails after layout succeeded
fn test_encoder_failure_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let files = vec![write_solid(dir.path(), "very_wide.png", 70_000, 1, RED)];
    let output = dir.path().join("out.jpeg");

    let result = run_app_inner(&cfg_from(&["-o", output.to_str().unwrap()], &files));

    assert!(matches!(result, Err(AppError::Save { .. })));
    assert!(!output.exists());
}

#[test]
fn test_dry_run_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let files = scenario_inputs(&dir);
    let output = dir.path().join("out.png");

    let cfg = cfg_from(&["--dry-run", "--json-output", "-o", output.to_str().unwrap()], &files);
    run_app_inner(&cfg).unwrap();

    assert!(!output.exists());
}

#[test]
//the font is loaded before any input is looked at
fn test_missing_font_reported_first() {
    let dir = TempDir::new().unwrap();
    let missing_image = dir.path().join("missing.png");
    let missing_font = dir.path().join("missing.ttf");

    let cfg = cfg_from(
        &["--caption-filenames", "--caption-font", missing_font.to_str().unwrap()],
        &[missing_image],
    );

    assert!(matches!(
        run_app_inner(&cfg),
        Err(AppError::Lib(LibError::FontRead { .. }))
    ));
}

#[test]
fn test_captioned_collage_with_system_font() {
    let font = match system_font() {
        Some(font) => font,
        None => {
            eprintln!("no system font found, skipping captioned collage test");
            return;
        }
    };

    let dir = TempDir::new().unwrap();
    let files = scenario_inputs(&dir);
    let plain = dir.path().join("plain.png");
    let captioned = dir.path().join("captioned.png");

    run_app_inner(&cfg_from(&["-o", plain.to_str().unwrap()], &files)).unwrap();
    run_app_inner(&cfg_from(
        &[
            "--caption-filenames",
            "--caption-fontsize",
            "30",
            "--caption-font",
            font.to_str().unwrap(),
            "-o",
            captioned.to_str().unwrap(),
        ],
        &files,
    ))
    .unwrap();

    let plain = image::open(&plain).unwrap().into_rgb8();
    let captioned = image::open(&captioned).unwrap().into_rgb8();

    assert_eq!(plain.width(), captioned.width());
    assert!(captioned.height() > plain.height());

    //something other than background was drawn in the caption band
    let band_start = plain.height();
    let inked = (band_start..captioned.height())
        .flat_map(|y| (0..captioned.width()).map(move |x| (x, y)))
        .any(|(x, y)| *captioned.get_pixel(x, y) != BG);
    assert!(inked);
}
