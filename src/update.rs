//! The `users update` workflow: resolve the target, collect the new field
//! values, submit the full-replacement update, report the outcome.

use crate::client::{CliClientResult, Client, ClientError, UpdateUserRequest, User};
use crate::prompt::{self, PromptOptions};

use std::io::{BufRead, Write};

use console::Style;

/// Field values supplied on the command line.
///
/// `None` means "not supplied", which is distinct from an explicitly
/// supplied empty string; the latter is rejected before submission.
#[derive(Debug, Default, Clone)]
pub struct UpdateInputs {
    pub username: Option<String>,
    pub email: Option<String>,
}

impl UpdateInputs {
    /// Prompting happens only when no flag was supplied at all, so scripted
    /// invocations with either flag never block on a terminal.
    fn interactive(&self) -> bool {
        self.username.is_none() && self.email.is_none()
    }
}

/// Produce the full-replacement update body from flags, prompts, and the
/// current record.
///
/// With no flags, prompts for both fields with the current values as
/// defaults. With at least one flag, never prompts; the unsupplied field
/// keeps its current value.
pub fn collect<R: BufRead, W: Write>(
    inputs: UpdateInputs,
    current: &User,
    input: &mut R,
    output: &mut W,
) -> CliClientResult<UpdateUserRequest> {
    let (username, email) = if inputs.interactive() {
        let username = prompt::prompt(
            input,
            output,
            PromptOptions {
                text: "Username",
                default: &current.username,
                validate: None,
            },
        )?;
        let email = prompt::prompt(
            input,
            output,
            PromptOptions {
                text: "Email",
                default: &current.email,
                validate: Some(&|value: &str| {
                    if valid_email(value) {
                        Ok(())
                    } else {
                        Err("That's not a valid email address!".to_string())
                    }
                }),
            },
        )?;
        (username, email)
    } else {
        (
            inputs.username.unwrap_or_else(|| current.username.clone()),
            inputs.email.unwrap_or_else(|| current.email.clone()),
        )
    };

    // Full-replacement semantics: both fields must be populated.
    if username.is_empty() {
        return Err(ClientError::invalid_input("username cannot be empty"));
    }
    if email.is_empty() {
        return Err(ClientError::invalid_input("email cannot be empty"));
    }

    Ok(UpdateUserRequest { username, email })
}

/// Syntactic email check: a single '@' separating a non-empty local part
/// from a dotted domain, with no whitespace anywhere.
pub fn valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
}

/// Run the whole update workflow for one identifier.
///
/// One resolution call, zero or more prompt round-trips, one update call.
/// Any failure aborts immediately; nothing is retried.
pub async fn run<R: BufRead, W: Write>(
    client: &Client,
    identifier: &str,
    inputs: UpdateInputs,
    input: &mut R,
    output: &mut W,
) -> CliClientResult<User> {
    let user = client.user(identifier).await?;
    let update = collect(inputs, &user, input, output)?;
    let updated = client.update_user(user.id, &update).await?;
    report_success(output, &updated)?;
    Ok(updated)
}

/// Print the confirmation with the new field values emphasized.
pub fn report_success<W: Write>(output: &mut W, user: &User) -> std::io::Result<()> {
    let keyword = Style::new().cyan().bold();
    writeln!(output)?;
    writeln!(output, "User has been updated!")?;
    writeln!(output)?;
    writeln!(output, "The new user details are:")?;
    writeln!(output, "    Username: {}", keyword.apply_to(&user.username))?;
    writeln!(output, "    Email:    {}", keyword.apply_to(&user.email))?;
    writeln!(output)?;
    Ok(())
}
