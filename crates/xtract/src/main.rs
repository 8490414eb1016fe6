use anyhow::Context;
use clap::Parser;
use std::process::ExitCode;
use xtract::cli::Cli;
use xtract::error::Error;
use xtract::input::Source;
use xtract::output::Output;
use xtract::runner::extract_all;
use xtract::Extractor;

fn main() -> ExitCode {
    // Reset SIGPIPE handler to default (terminate) so piping to head/tail works correctly
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }
    let cli = Cli::parse();

    let use_color = !cli.no_color && atty::is(atty::Stream::Stdout);
    let mut output = Output::new(use_color, cli.pretty);

    match run(&cli, &mut output) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

/// Returns whether every input matched the template.
fn run(cli: &Cli, output: &mut Output) -> anyhow::Result<bool> {
    let extractor = Extractor::new(&cli.template).map_err(|source| Error::Template {
        template: cli.template.clone(),
        source,
    })?;

    if cli.explain {
        output.print_explain(&extractor)?;
        return Ok(true);
    }

    let source = match (&cli.file, cli.inputs.is_empty()) {
        (Some(path), _) => Source::File(path),
        (None, false) => Source::Args(&cli.inputs),
        (None, true) => Source::Stdin,
    };
    let inputs = source.inputs(cli.lines)?;
    let results = extract_all(&extractor, &inputs, cli.parallel)?;

    for result in &results {
        output
            .print_result(result.as_ref())
            .context("failed to write output")?;
    }
    output.flush()?;

    Ok(results.iter().all(Option::is_some))
}
