use anyhow::{Context, Result};
use wordsplit::cli;
use wordsplit::observability::init_logging;
use wordsplit::RunConfig;

fn main() -> Result<()> {
    let config = RunConfig::from(cli::parse_args());
    init_logging(config.verbosity);

    let summary = wordsplit::run(&config).with_context(|| {
        format!(
            "wordsplit failed for {} -> {}",
            config.input.display(),
            config.output.display()
        )
    })?;

    println!("{}", summary.banner());
    Ok(())
}
