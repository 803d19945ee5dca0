//! Score command implementation.

use crate::cli::ScoreArgs;
use crate::error::Result;
use crate::input::load_answers;
use crate::messages::Messages;
use crate::output::Formatter;
use crate::report;
use nakshatra_catalog::Catalog;

/// Execute the score command.
pub fn execute_score(
    args: ScoreArgs,
    catalog: &Catalog,
    messages: &Messages,
    formatter: &Formatter,
) -> Result<()> {
    let responses = load_answers(&args.answers)?;
    let report = report::score(&responses, catalog.questions(), messages)?;
    println!("{}", formatter.format_score(&report)?);
    Ok(())
}
