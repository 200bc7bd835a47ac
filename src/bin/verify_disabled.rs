use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use icon_disable::verify::{verify_icon_set, IconReport};

#[derive(Debug, Parser)]
#[clap(
    name = "verify_disabled",
    about = "Check generated disabled icons against their sources"
)]
struct Args {
    /// Directory containing the `icons` folder.
    #[clap(long, value_name = "DIR", default_value = ".")]
    dir: PathBuf,

    /// Print the reports as JSON
    #[clap(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let reports = verify_icon_set(&args.dir);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        for report in &reports {
            match report {
                IconReport::Checked(check) if check.passed() => {
                    println!(
                        "✓ {} matches {}",
                        check.output.display(),
                        check.input.display()
                    );
                }
                IconReport::Checked(check) => {
                    println!(
                        "✗ {}: dimensions {}, alpha {}, desaturated {}, dimmed {}",
                        check.output.display(),
                        check.dimensions_match,
                        check.alpha_match,
                        check.desaturated,
                        check.dimmed
                    );
                }
                IconReport::Skipped { size } => println!("- {size}x{size}: nothing to check"),
                IconReport::Missing { output, .. } => {
                    println!("✗ {}: not generated", output.display());
                }
                IconReport::Error { size, message } => println!("✗ {size}x{size}: {message}"),
            }
        }
    }

    let failed = reports.iter().filter(|report| report.is_failure()).count();
    if failed > 0 {
        bail!("{failed} disabled icon(s) failed verification");
    }
    Ok(())
}
