//! Command handlers
//!
//! Every command reports through one [`OutputReporter`]. An error returned
//! by a handler is reported once, as an error without a file, and turns
//! into exit code 1.

mod check;
mod parse;

use std::process::ExitCode;

use pinwarden::config::{self, LoadedConfig};
use pinwarden::domain::ports::Reporter;
use pinwarden::infrastructure::{detect_capabilities, OutputReporter};
use pinwarden::presentation::{resolve_reporter_kind, CheckArgs, Cli, Commands};

pub fn dispatch(cli: Cli) -> ExitCode {
    let loaded = config::load(&cli.root);

    let (format, color) = match &loaded {
        Ok(l) => (l.config.output.format, l.config.output.color),
        Err(_) => Default::default(),
    };
    let kind = resolve_reporter_kind(
        cli.format.map(Into::into).unwrap_or(format),
        cli.color.map(Into::into).unwrap_or(color),
        detect_capabilities(),
    );
    tracing::debug!(?kind, "selected reporter");
    let mut reporter = OutputReporter::new(kind);

    let result = loaded.map_err(anyhow::Error::from).and_then(|loaded| {
        report_config_warnings(&loaded, &mut reporter);
        match cli.command {
            None => check::cmd_check(
                &cli.root,
                loaded.config,
                CheckArgs::default(),
                &mut reporter,
            ),
            Some(Commands::Check(args)) => {
                check::cmd_check(&cli.root, loaded.config, args, &mut reporter)
            }
            Some(Commands::Parse { files }) => {
                parse::cmd_parse(&cli.root, &loaded.config, files, &mut reporter)
            }
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            reporter.error(&err.to_string(), None);
            ExitCode::FAILURE
        }
    }
}

fn report_config_warnings(loaded: &LoadedConfig, reporter: &mut dyn Reporter) {
    for warning in &loaded.warnings {
        reporter.warning(&warning.to_string(), Some(&warning.file));
    }
    for warning in &loaded.env_warnings {
        reporter.warning(warning, None);
    }
}
