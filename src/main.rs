mod analysis;
mod data;
mod money;
mod report;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};

use analysis::AnalysisConfig;

/// Options from the plain argv loop: input path and output mode.
struct Options {
    path: PathBuf,
    json: bool,
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options> {
    let mut json = false;
    let mut path: Option<PathBuf> = None;
    for arg in args {
        match arg.as_str() {
            "--json" => json = true,
            other if other.starts_with("--") => bail!("unknown option {other:?}"),
            other => path = Some(PathBuf::from(other)),
        }
    }
    Ok(Options {
        path: path.unwrap_or_else(|| PathBuf::from("data.txt")),
        json,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let options = parse_args(std::env::args().skip(1))?;

    let set = data::loader::load_file(&options.path)?;
    let result = analysis::analyze(set, &AnalysisConfig::default())
        .with_context(|| format!("analyzing {}", options.path.display()))?;

    if options.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&result).context("serializing report")?
        );
    } else {
        print!("{}", report::render(&result));
    }
    Ok(())
}
