//! The `synonyms` command - look up or edit a synonym file.

use numseq::synonyms::{SynonymData, SynonymLine};

use crate::cli::{SynonymAction, SynonymsArgs};
use crate::common::CliResult;

/// Run the synonyms command.
pub fn run(args: SynonymsArgs) -> CliResult<()> {
    let mut data = SynonymData::read_file(&args.file)?;

    match args.action {
        SynonymAction::Lookup { word } => {
            println!("{}", data.line(&word)?);
            return Ok(());
        }
        SynonymAction::Show => {
            print!("{}", data);
            return Ok(());
        }
        SynonymAction::AddLine { line } => data.add_line(line.parse::<SynonymLine>()?),
        SynonymAction::RemoveLine { word } => {
            data.remove_line(&word)?;
        }
        SynonymAction::Add { word, synonym } => data.add_synonym(&word, synonym)?,
        SynonymAction::Remove { word, synonym } => data.remove_synonym(&word, &synonym)?,
        SynonymAction::Sort => data.sort(),
    }

    let output = args.output.as_ref().unwrap_or(&args.file);
    data.write_file(output)?;
    Ok(())
}
