//! Subcommand implementations.

use anyhow::Context;
use clap::Args;
use nvdoc::{Nvdoc, NvdocConfig};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Options shared by commands that scan a directory.
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory to scan, usually a PSR-4 source directory such as `src`.
    /// Relative paths are resolved against --root. Class names are built
    /// from paths relative to this directory.
    pub dir: PathBuf,

    /// Source extension to scan; repeat for several
    #[arg(long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Scan every file regardless of extension
    #[arg(long, conflicts_with = "extensions")]
    pub all_files: bool,

    /// Include autoload-dev namespaces
    #[arg(long)]
    pub dev: bool,
}

impl ScanArgs {
    /// Project handle with CLI flags layered over the loaded config.
    fn project(&self, root: &Path) -> Nvdoc {
        let mut config = NvdocConfig::load(root);
        if self.all_files {
            config.scan.extensions = Some(Vec::new());
        } else if !self.extensions.is_empty() {
            config.scan.extensions = Some(self.extensions.clone());
        }
        if self.dev {
            config.manifest.include_dev = Some(true);
        }
        Nvdoc::with_config(root, config)
    }

    fn dir(&self, root: &Path) -> PathBuf {
        if self.dir.is_absolute() {
            self.dir.clone()
        } else {
            root.join(&self.dir)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> anyhow::Result<()> {
    let out = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{}", out);
    Ok(())
}

pub fn cmd_scan(root: &Path, args: &ScanArgs, pretty: bool) -> anyhow::Result<()> {
    let dir = args.dir(root);
    let information = args
        .project(root)
        .files_information(&dir)
        .with_context(|| format!("failed to scan {}", dir.display()))?;
    print_json(&information, pretty)
}

pub fn cmd_classes(root: &Path, args: &ScanArgs, json: bool) -> anyhow::Result<()> {
    let dir = args.dir(root);
    let classes = args
        .project(root)
        .find_files(&dir)
        .with_context(|| format!("failed to scan {}", dir.display()))?;
    if json {
        return print_json(&classes, false);
    }
    for class in classes {
        println!("{}", class);
    }
    Ok(())
}

pub fn cmd_namespaces(root: &Path, dev: bool) -> anyhow::Result<()> {
    let mut config = NvdocConfig::load(root);
    if dev {
        config.manifest.include_dev = Some(true);
    }
    print_json(&Nvdoc::with_config(root, config).namespaces(), true)
}

pub fn cmd_version(root: &Path) -> anyhow::Result<()> {
    println!("{}", Nvdoc::new(root).version());
    Ok(())
}
