//! Naming conventions for the extension icon set.
//!
//! Sources live at `icons/icon-{size}.png` and their disabled variants are
//! written next to them as `icons/icon-disabled-{size}.png`.

use std::path::{Path, PathBuf};

/// Icon sizes processed on every run, in processing order.
pub const ICON_SIZES: [u32; 4] = [16, 32, 48, 128];

/// Directory holding the icons, relative to the working directory.
pub const ICON_DIR: &str = "icons";

/// Input and output locations for one icon size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconPaths {
    pub size: u32,
    pub input: PathBuf,
    pub output: PathBuf,
}

impl IconPaths {
    pub fn new(root: &Path, size: u32) -> Self {
        let dir = root.join(ICON_DIR);
        Self {
            size,
            input: dir.join(format!("icon-{size}.png")),
            output: dir.join(format!("icon-disabled-{size}.png")),
        }
    }
}

/// Paths for every size in [`ICON_SIZES`], in order.
pub fn icon_set(root: &Path) -> Vec<IconPaths> {
    ICON_SIZES
        .iter()
        .map(|&size| IconPaths::new(root, size))
        .collect()
}
