//! Compare command implementation.

use crate::cli::CompareArgs;
use crate::error::{CliError, Result};
use crate::input::resolve_position;
use crate::messages::Messages;
use crate::output::Formatter;
use crate::report;
use nakshatra_catalog::{Catalog, RegionGroup};
use nakshatra_domain::Entity;

/// Execute the compare command.
pub fn execute_compare(
    args: CompareArgs,
    catalog: &Catalog,
    messages: &Messages,
    formatter: &Formatter,
) -> Result<()> {
    let position = resolve_position(&args.source, catalog)?;

    if let Some(key) = &args.with {
        let target = catalog
            .entity(key)
            .ok_or_else(|| CliError::InvalidInput(format!("Unknown party or leader: {}", key)))?;
        let comparison = report::compare_with(&position, target, catalog, messages);
        println!("{}", formatter.format_comparison(&comparison)?);
        return Ok(());
    }

    let entities: Vec<Entity> = if args.leaders {
        match &args.region {
            Some(name) => {
                let group = RegionGroup::parse(name).ok_or_else(|| {
                    CliError::InvalidInput(format!(
                        "Unknown region group '{}' (expected national, regional or historical)",
                        name
                    ))
                })?;
                catalog.leaders_in(group).into_iter().cloned().collect()
            }
            None => catalog.leaders().to_vec(),
        }
    } else {
        catalog.parties().to_vec()
    };

    let rows = report::ranking(&position, &entities, args.limit, messages);
    println!("{}", formatter.format_ranking(&rows)?);
    Ok(())
}
