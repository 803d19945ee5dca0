//! Explain command implementation.

use crate::cli::PositionArgs;
use crate::error::Result;
use crate::input::resolve_position;
use crate::messages::Messages;
use crate::output::Formatter;
use crate::report;
use nakshatra_catalog::Catalog;

/// Execute the explain command.
pub fn execute_explain(
    args: PositionArgs,
    catalog: &Catalog,
    messages: &Messages,
    formatter: &Formatter,
) -> Result<()> {
    let position = resolve_position(&args, catalog)?;
    let explanation = report::explain(&position, catalog, messages)?;
    println!("{}", formatter.format_explanation(&explanation)?);
    Ok(())
}
