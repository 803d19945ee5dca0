//! Questions command implementation.

use crate::cli::QuestionsArgs;
use crate::error::Result;
use crate::output::Formatter;
use nakshatra_catalog::Catalog;
use nakshatra_domain::{Axis, Question};

/// Execute the questions command.
pub fn execute_questions(args: QuestionsArgs, catalog: &Catalog, formatter: &Formatter) -> Result<()> {
    let questions: Vec<&Question> = match &args.axis {
        Some(name) => {
            let axis: Axis = name.parse()?;
            catalog.questions_on(axis).collect()
        }
        None => catalog.questions().iter().collect(),
    };

    println!("{}", formatter.format_questions(&questions)?);
    Ok(())
}
