//! Output formatting module

pub mod terminal;

pub use terminal::{print_json, print_result, TimeFormatter};

use crate::certificate::EvaluationResult;
use crate::error::Result;

/// How evaluated certificates are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Emit one evaluated certificate in the selected format.
pub fn emit(
    result: &EvaluationResult,
    formatter: TimeFormatter,
    format: OutputFormat,
    show_days: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(result),
        OutputFormat::Text => {
            print_result(result, formatter, show_days);
            Ok(())
        }
    }
}
