//! Checks that generated disabled icons match their sources.
//!
//! A pair passes when the output keeps the source dimensions and transparency,
//! carries no color, and is darker than a plain grayscale of the source.

use crate::icon_set::{icon_set, IconPaths};
use anyhow::{Context, Result};
use image::{DynamicImage, GenericImageView};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Serialize, Debug, Clone)]
pub struct IconCheck {
    pub size: u32,
    pub input: PathBuf,
    pub output: PathBuf,
    pub dimensions_match: bool,
    pub alpha_match: bool,
    pub desaturated: bool,
    pub dimmed: bool,
}

impl IconCheck {
    pub fn passed(&self) -> bool {
        self.dimensions_match && self.alpha_match && self.desaturated && self.dimmed
    }
}

#[derive(Serialize, Debug)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum IconReport {
    Checked(IconCheck),
    /// No source icon, nothing to compare.
    Skipped { size: u32 },
    /// The source icon exists but its disabled variant was never written.
    Missing { size: u32, output: PathBuf },
    Error { size: u32, message: String },
}

impl IconReport {
    pub fn is_failure(&self) -> bool {
        match self {
            IconReport::Checked(check) => !check.passed(),
            IconReport::Missing { .. } | IconReport::Error { .. } => true,
            IconReport::Skipped { .. } => false,
        }
    }
}

/// Compare a source icon with its disabled variant.
pub fn verify_pair(size: u32, input: &Path, output: &Path) -> Result<IconCheck> {
    let source = image::open(input)
        .with_context(|| format!("Failed to load source icon {}", input.display()))?;
    let disabled = image::open(output)
        .with_context(|| format!("Failed to load disabled icon {}", output.display()))?;

    let dimensions_match = source.dimensions() == disabled.dimensions();

    Ok(IconCheck {
        size,
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        dimensions_match,
        alpha_match: dimensions_match && alpha_matches(&source, &disabled),
        desaturated: is_desaturated(&disabled),
        dimmed: dimensions_match && is_dimmed(&source, &disabled),
    })
}

/// Verify every icon size under `root`.
pub fn verify_icon_set(root: &Path) -> Vec<IconReport> {
    icon_set(root).iter().map(verify_paths).collect()
}

fn verify_paths(paths: &IconPaths) -> IconReport {
    if !paths.input.exists() {
        return IconReport::Skipped { size: paths.size };
    }
    if !paths.output.exists() {
        return IconReport::Missing {
            size: paths.size,
            output: paths.output.clone(),
        };
    }

    match verify_pair(paths.size, &paths.input, &paths.output) {
        Ok(check) => IconReport::Checked(check),
        Err(err) => IconReport::Error {
            size: paths.size,
            message: format!("{err:#}"),
        },
    }
}

fn alpha_matches(source: &DynamicImage, disabled: &DynamicImage) -> bool {
    let has_alpha = source.color().has_alpha();
    if has_alpha != disabled.color().has_alpha() {
        return false;
    }
    if !has_alpha {
        return true;
    }

    let source = source.to_rgba8();
    let disabled = disabled.to_rgba8();
    source
        .pixels()
        .zip(disabled.pixels())
        .all(|(a, b)| a[3] == b[3])
}

fn is_desaturated(img: &DynamicImage) -> bool {
    img.to_rgb8()
        .pixels()
        .all(|p| p[0] == p[1] && p[1] == p[2])
}

fn is_dimmed(source: &DynamicImage, disabled: &DynamicImage) -> bool {
    let plain = source.to_luma8();
    let disabled = disabled.to_luma8();

    let mut darker = false;
    let mut any_lit = false;
    for (gray, dim) in plain.pixels().zip(disabled.pixels()) {
        if dim[0] > gray[0] {
            return false;
        }
        any_lit |= gray[0] > 0;
        darker |= dim[0] < gray[0];
    }

    darker || !any_lit
}
