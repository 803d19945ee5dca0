//! Share command implementation.

use crate::cli::{ShareAction, ShareArgs};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::input::parse_position;
use crate::output::Formatter;
use nakshatra_share::SharedPosition;

/// Execute the share command.
pub fn execute_share(args: ShareArgs, formatter: &Formatter) -> Result<()> {
    match args.action {
        ShareAction::Encode { position } => {
            let position = parse_position(&position)?;
            println!("{}", nakshatra_share::encode(&position)?);
        }
        ShareAction::Decode { token } => {
            let position = nakshatra_share::decode(&token)?;
            match formatter.format() {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&SharedPosition::from(&position))?);
                }
                _ => println!("{},{},{}", position.statism(), position.recognition(), position.sid()),
            }
        }
    }
    Ok(())
}
