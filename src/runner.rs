//! Batch runner
//!
//! Renders every catalog entry in order and writes it as a PNG into the
//! configured directory. The first failure stops the run; files already
//! written stay on disk.

use crate::canvas::Canvas;
use crate::catalog::{AssetDescriptor, AssetGroup, Catalog};
use crate::config::GeneratorConfig;
use crate::error::{GenerateError, Result};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenAsset {
    pub filename: String,
    pub bytes: usize,
}

#[derive(Debug, Clone)]
pub struct BatchReport {
    pub output_dir: PathBuf,
    pub written: Vec<WrittenAsset>,
}

impl BatchReport {
    pub fn count(&self) -> usize {
        self.written.len()
    }

    pub fn total_bytes(&self) -> usize {
        self.written.iter().map(|a| a.bytes).sum()
    }
}

/// One regular file found in the output directory after a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub size: u64,
}

pub struct BatchRunner {
    output_dir: PathBuf,
    quiet: bool,
    rng: StdRng,
}

impl BatchRunner {
    pub fn new(config: &GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => {
                info!("Using seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };
        Self {
            output_dir: config.output_dir.clone(),
            quiet: config.quiet,
            rng,
        }
    }

    pub fn run(&mut self, catalog: &Catalog) -> Result<BatchReport> {
        fs::create_dir_all(&self.output_dir).map_err(|source| GenerateError::CreateDir {
            path: self.output_dir.clone(),
            source,
        })?;
        info!("Writing {} assets to {}", catalog.len(), self.output_dir.display());

        let mut written = Vec::with_capacity(catalog.len());
        let mut current_group: Option<AssetGroup> = None;

        for descriptor in catalog {
            if current_group != Some(descriptor.group) {
                current_group = Some(descriptor.group);
                if !self.quiet {
                    println!("\n{}:", descriptor.group.heading());
                }
            }

            let img = render_descriptor(descriptor, &mut self.rng)?;
            let png = img.encode_png().map_err(|source| GenerateError::Encode {
                filename: descriptor.filename.clone(),
                source,
            })?;

            let path = self.output_dir.join(&descriptor.filename);
            fs::write(&path, &png).map_err(|source| GenerateError::Write { path, source })?;
            debug!("{} [{} {}] {} bytes", descriptor.filename, descriptor.kind, descriptor.variation, png.len());

            if !self.quiet {
                println!("  Created: {}", descriptor.filename);
            }
            written.push(WrittenAsset {
                filename: descriptor.filename.clone(),
                bytes: png.len(),
            });
        }

        Ok(BatchReport {
            output_dir: self.output_dir.clone(),
            written,
        })
    }
}

/// Render one entry and check it came out at the catalog's size.
pub fn render_descriptor(descriptor: &AssetDescriptor, rng: &mut dyn RngCore) -> Result<Canvas> {
    let img = descriptor.render(rng);
    if img.dimensions() != descriptor.size {
        return Err(GenerateError::DimensionMismatch {
            filename: descriptor.filename.clone(),
            expected: descriptor.size,
            actual: img.dimensions(),
        });
    }
    Ok(img)
}

/// Regular files in `dir`, sorted by name. Includes files this run did not write.
pub fn list_output_dir(dir: &Path) -> Result<Vec<DirEntryInfo>> {
    let read_err = |source| GenerateError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let meta = entry.metadata().map_err(read_err)?;
        if meta.is_dir() {
            continue;
        }
        entries.push(DirEntryInfo {
            name: entry.file_name().to_string_lossy().into_owned(),
            size: meta.len(),
        });
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

pub fn print_summary(report: &BatchReport, listing: &[DirEntryInfo]) {
    println!("\n{}", "=".repeat(50));
    println!(
        "Done! Generated {} assets ({} bytes) in {}/",
        report.count(),
        report.total_bytes(),
        report.output_dir.display()
    );
    println!("{}", "=".repeat(50));
    println!();
    println!("Files in {}/:", report.output_dir.display());
    for entry in listing {
        println!("  {} ({} bytes)", entry.name, entry.size);
    }
}
