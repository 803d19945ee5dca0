//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use nakshatra_catalog::loader::{load_entities, load_questions};
use nakshatra_catalog::{Catalog, CatalogValidator, ValidationConfig};
use nakshatra_domain::EntityKind;

/// Execute the validate command.
///
/// Files given on the command line replace the configured catalogs; the
/// rest come from configuration. Exits with an error when rejected.
pub fn execute_validate(args: ValidateArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let validation = if args.strict {
        ValidationConfig::strict()
    } else {
        config.validation.clone()
    };

    let mut catalog = Catalog::builtin()?;
    if let Some(path) = args.questions.as_ref().or(config.catalog.questions.as_ref()) {
        catalog = catalog.with_questions(load_questions(path)?);
    }
    if let Some(path) = args.parties.as_ref().or(config.catalog.parties.as_ref()) {
        catalog = catalog.with_parties(load_entities(path, Some(EntityKind::Party))?);
    }
    if let Some(path) = args.leaders.as_ref().or(config.catalog.leaders.as_ref()) {
        catalog = catalog.with_leaders(load_entities(path, Some(EntityKind::Leader))?);
    }

    let result = catalog.validate(&CatalogValidator::new(validation));
    println!("{}", formatter.format_validation(&result)?);

    if result.is_accepted() {
        Ok(())
    } else {
        Err(CliError::InvalidInput(format!(
            "{} catalog problem(s) found",
            result.reasons.len()
        )))
    }
}
