use crate::disable::create_disabled_icon;
use crate::icon_set::{icon_set, IconPaths};
use std::path::{Path, PathBuf};

/// What happened to a single icon size during a run
#[derive(Debug)]
pub enum IconOutcome {
    Created(PathBuf),
    Failed { output: PathBuf, error: anyhow::Error },
    /// The source icon does not exist; holds the expected input path.
    Missing(PathBuf),
}

impl IconOutcome {
    pub fn is_created(&self) -> bool {
        matches!(self, IconOutcome::Created(_))
    }
}

/// Generate disabled variants for every icon size under `root`.
///
/// Each size is handled on its own: a missing source or a failed conversion is
/// reported and the run moves on to the next size.
pub fn generate_disabled_icons(root: &Path) -> Vec<IconOutcome> {
    println!("🎨 Generating disabled icon variants...");

    let outcomes = icon_set(root).into_iter().map(process_icon).collect();

    println!("🎉 Disabled icons generation complete!");
    outcomes
}

fn process_icon(paths: IconPaths) -> IconOutcome {
    if !paths.input.exists() {
        println!("❌ Missing {}", paths.input.display());
        return IconOutcome::Missing(paths.input);
    }

    match create_disabled_icon(&paths.input, &paths.output) {
        Ok(()) => {
            println!("✅ Created {}", paths.output.display());
            IconOutcome::Created(paths.output)
        }
        Err(error) => {
            println!("❌ Error creating {}: {:#}", paths.output.display(), error);
            IconOutcome::Failed {
                output: paths.output,
                error,
            }
        }
    }
}
