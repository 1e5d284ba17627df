use std::path::PathBuf;

use crate::library::CollageCfg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportVerbosity {
    Quiet,
    Default,
    Verbose,
}

#[derive(Debug, Clone)]
pub struct OutputCfg {
    pub output_path: PathBuf,
    pub dry_run: bool,
    pub json_output: bool,

    pub verbosity: ReportVerbosity,
}

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub image_files: Vec<PathBuf>,
    pub collage_cfg: CollageCfg,
    pub output_cfg: OutputCfg,
}
