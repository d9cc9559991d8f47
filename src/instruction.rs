//! Source Selector: parse a fallback `command, parameter` instruction.

/// A replayable (command, parameter) pair read from the fallback file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub command: String,
    pub parameter: String,
}

/// Parse a `command, parameter` pair out of `text`.
///
/// Splits on the first comma and trims both halves. A single-token parameter
/// containing a quote character has its surrounding quotes stripped, so
/// `spotify-this-song, "Thriller"` resolves to the bare title while
/// `concert-this, Celine Dion` is kept verbatim. Text without a comma is not
/// an instruction.
pub fn parse(text: &str) -> Option<Instruction> {
    let (command, parameter) = text.split_once(',')?;
    let command = command.trim().to_string();
    let mut parameter = parameter.trim().to_string();

    let single_token = parameter.split_whitespace().count() == 1;
    if single_token && parameter.contains('"') {
        parameter = parameter.trim_matches('"').to_string();
    }

    Some(Instruction { command, parameter })
}
