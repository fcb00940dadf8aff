use anyhow::Result;
use clap::Parser;
use std::path::Path;

use bumper::error::BumperError;
use bumper::version::{Version, VersionBump};
use bumper::{config, replace, ui, vcs};

#[derive(clap::Parser)]
#[command(
    name = "bumper",
    about = "Bump the project version and rewrite it across configured files",
    version
)]
struct Args {
    #[arg(long, help = "Bump the major version number")]
    major: bool,

    #[arg(long, help = "Bump the minor version number")]
    minor: bool,

    #[arg(long, help = "Bump the patch version number")]
    patch: bool,

    #[arg(short, long, help = "Print each replaced line for every file")]
    verbose: bool,

    #[arg(long, help = "Preview what would change without touching any file")]
    dry_run: bool,

    #[arg(short, long, help = "Commit the rewritten files after the bump")]
    commit: bool,

    #[arg(short, long, help = "Tag the repository with the new version")]
    tag: bool,

    #[arg(long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    // Abort before touching any file if the configured version is bad
    let current = Version::parse(&config.current_version)?;

    if !(args.major || args.minor || args.patch) {
        anyhow::bail!("Nothing to bump, pass at least one of --major, --minor or --patch");
    }

    let backend = if args.commit || args.tag {
        let backend = vcs::detect().ok_or_else(|| {
            anyhow::anyhow!(
                "Can't commit or tag because the current directory is not inside a repository"
            )
        })?;

        if args.commit && backend.is_dirty() {
            anyhow::bail!("Can't commit because the repository has modified files");
        }

        Some(backend)
    } else {
        None
    };

    // Flags are cumulative and always applied in major, minor, patch order
    let mut new_version = current;
    if args.major {
        new_version = new_version.bump(&VersionBump::Major);
    }
    if args.minor {
        new_version = new_version.bump(&VersionBump::Minor);
    }
    if args.patch {
        new_version = new_version.bump(&VersionBump::Patch);
    }

    let new_text = new_version.to_string();

    for rule in &config.rules {
        let pattern = replace::build_pattern(&rule.version, &config.current_version)?
            .ok_or_else(|| {
                BumperError::invalid_rule(format!(
                    "rule for '{}' has an empty version template",
                    rule.file
                ))
            })?;

        let replacement = rule.version.replace("{{version}}", &new_text);

        let outcome =
            replace::replace_in_file(Path::new(&rule.file), &pattern, &replacement, args.dry_run)?;

        if args.verbose || args.dry_run {
            ui::display_outcome(&outcome, true);
        }
    }

    if args.dry_run {
        ui::display_status("Dry run: no files were modified");
        return Ok(());
    }

    if let Some(backend) = &backend {
        if args.commit {
            let message = config.commit_message.as_deref().unwrap_or("Bump version");
            backend.commit_all(message)?;
            ui::display_success(&format!("Committed the bump with {}", backend.name()));
        }

        if args.tag {
            backend.tag(&new_text)?;
            ui::display_success(&format!("Created tag {}", new_text));
        }
    }

    ui::display_success(&format!(
        "Bumped version: {} → {}",
        config.current_version, new_text
    ));

    Ok(())
}
