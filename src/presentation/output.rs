//! Output Selection
//!
//! Resolves the configured format and color mode against the detected
//! terminal into one concrete reporter kind.

use crate::config::{ColorMode, OutputFormat};
use crate::infrastructure::{ReporterKind, TerminalCapabilities};

pub fn resolve_reporter_kind(
    format: OutputFormat,
    color: ColorMode,
    caps: TerminalCapabilities,
) -> ReporterKind {
    match format {
        OutputFormat::Github => ReporterKind::Github,
        OutputFormat::Json => ReporterKind::Json,
        OutputFormat::Auto if caps.is_github_actions => ReporterKind::Github,
        OutputFormat::Auto | OutputFormat::Console => ReporterKind::Console {
            color: match color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => caps.supports_color && !caps.is_ci,
            },
        },
    }
}
