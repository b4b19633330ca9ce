//! stubgen: regenerate Python type stubs from Rust struct declarations.
//!
//! Scans `<source-root>/<dir>/mod.rs` for `pub struct` blocks and rewrites the
//! part of a `.pyi` file that follows the `# DO NOT EDIT` line:
//!
//! 1. **Extract**: line-oriented scan for structs, fields and `///` docs
//! 2. **Translate**: ordered literal substitution (`Option<u64>` → `Optional[int]`)
//! 3. **Write**: hand-written prefix is kept, one `class` block per struct
//!
//! With no arguments it uses the layout of the bandcamp bindings crate.

mod config;
mod model;
mod parser;
mod stub;
mod translate;

use anyhow::{bail, Result};
use clap::Parser;
use config::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "stubgen",
    about = "Regenerate Python stub classes from Rust struct declarations"
)]
struct Cli {
    /// Root directory containing the source dirs
    #[arg(short = 'r', long, default_value = config::DEFAULT_SOURCE_ROOT)]
    source_root: PathBuf,

    /// Source dir to scan, relative to the root (repeatable).
    /// Defaults to album, artist, search.
    #[arg(short = 'd', long = "dir")]
    dirs: Vec<String>,

    /// Struct name to leave out of the stub (repeatable). Defaults to ImageId.
    #[arg(short = 'b', long)]
    blacklist: Vec<String>,

    /// Destination stub file
    #[arg(short = 'o', long, default_value = config::DEFAULT_STUB_FILE)]
    output: PathBuf,

    /// Lines up to and including the first one starting with this are kept
    #[arg(long, default_value = config::DEFAULT_SENTINEL)]
    sentinel: String,

    /// Extra type substitution FROM=TO, applied after the built-in table (repeatable)
    #[arg(long = "type-map", value_parser = translate::parse_mapping)]
    type_map: Vec<(String, String)>,

    /// Emit field doc comments as property docstrings
    #[arg(long)]
    docstrings: bool,

    /// Fail if the stub file is out of date instead of writing it
    #[arg(long, conflicts_with = "stdout")]
    check: bool,

    /// Print the regenerated stub file to stdout instead of writing it
    #[arg(long)]
    stdout: bool,

    /// Suppress the summary line
    #[arg(short = 'q', long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    let path = config.stub_file().display();

    if cli.check {
        let generated = stub::generate(&config)?;
        if !generated.is_current() {
            bail!("{} is out of date; run stubgen to regenerate it", path);
        }
        if !cli.quiet {
            eprintln!("{} is up to date", path);
        }
        return Ok(());
    }

    if cli.stdout {
        let generated = stub::generate(&config)?;
        print!("{}", generated.content);
        return Ok(());
    }

    let generated = stub::regenerate(&config)?;
    if !cli.quiet {
        if generated.is_current() {
            eprintln!("{} is up to date", path);
        } else {
            eprintln!("wrote {} classes to {}", generated.classes, path);
        }
    }
    Ok(())
}

/// Turn parsed arguments into the immutable pipeline configuration.
/// Empty repeatable lists fall back to the built-in defaults.
fn build_config(cli: &Cli) -> Config {
    let mut config = Config {
        source_root: cli.source_root.clone(),
        stub_file: cli.output.clone(),
        sentinel: cli.sentinel.clone(),
        docstrings: cli.docstrings,
        ..Config::default()
    };
    if !cli.dirs.is_empty() {
        config.dirs = cli.dirs.clone();
    }
    if !cli.blacklist.is_empty() {
        config.blacklist = cli.blacklist.iter().cloned().collect();
    }
    for (from, to) in &cli.type_map {
        config.types.push(from.as_str(), to.as_str());
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("stubgen").chain(args.iter().copied()))
    }

    #[test]
    fn no_arguments_use_defaults() {
        let config = build_config(&cli(&[]));
        assert_eq!(config.dirs, ["album", "artist", "search"]);
        assert!(config.is_blacklisted("ImageId"));
        assert_eq!(config.source_root, Path::new("src"));
        assert_eq!(config.stub_file(), Path::new("python_bindings/bandcamp/__init__.pyi"));
        assert_eq!(config.sentinel, "# DO NOT EDIT");
        assert!(!config.docstrings);
    }

    #[test]
    fn repeatable_lists_replace_defaults() {
        let config = build_config(&cli(&["-d", "track", "--dir", "label", "-b", "Secret"]));
        assert_eq!(config.dirs, ["track", "label"]);
        assert!(config.is_blacklisted("Secret"));
        assert!(!config.is_blacklisted("ImageId"));
    }

    #[test]
    fn type_map_appends_to_table() {
        let config = build_config(&cli(&["--type-map", "Url=str"]));
        assert_eq!(config.types.translate("Vec<Url>"), "list[str]");
    }

    #[test]
    fn check_conflicts_with_stdout() {
        let result = Cli::try_parse_from(["stubgen", "--check", "--stdout"]);
        assert!(result.is_err());
    }
}
