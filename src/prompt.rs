//! Interactive prompt with a pre-filled default and inline validation.
//!
//! The prompt is a small retry loop: show the text, read a line, validate,
//! and either accept the value or prompt again. It is generic over the input
//! and output streams so the loop can be tested without a terminal.

use std::io::{self, BufRead, Write};

/// Options for a single prompt.
pub struct PromptOptions<'a> {
    /// Label shown before the cursor, e.g. "Username".
    pub text: &'a str,
    /// Value used when the operator submits an empty line.
    pub default: &'a str,
    /// Validation applied to entered values. Returning `Err` prints the
    /// message and prompts again; the error never escapes the loop.
    pub validate: Option<&'a dyn Fn(&str) -> Result<(), String>>,
}

/// Run the prompt loop until a value is accepted.
///
/// An empty line, or end of input, accepts the default. The default itself
/// is not validated: it comes from the current record and was already
/// accepted by the service.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    opts: PromptOptions<'_>,
) -> io::Result<String> {
    loop {
        write!(output, "{} [{}]: ", opts.text, opts.default)?;
        output.flush()?;

        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        let entered = line.trim();

        if read == 0 || entered.is_empty() {
            return Ok(opts.default.to_string());
        }

        match opts.validate {
            Some(validate) => match validate(entered) {
                Ok(()) => return Ok(entered.to_string()),
                Err(message) => writeln!(output, "{}", message)?,
            },
            None => return Ok(entered.to_string()),
        }
    }
}
