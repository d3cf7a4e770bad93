use inquire::Confirm;
use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum PromptError {
    #[error("Error occurred trying to prompt user")]
    #[diagnostic(
        code(storefront_scaffold::prompt::inquire),
        help("Interactive mode needs a terminal; drop --interactive when piping or scripting")
    )]
    Inquire(#[from] inquire::InquireError),
}

/// Asks whether `file_count` files should be written into `destination`.
/// Defaults to no.
pub fn confirm_materialize(destination: &Path, file_count: usize) -> Result<bool, PromptError> {
    let answer = Confirm::new(&format!(
        "Write {} files into {}?",
        file_count,
        destination.display()
    ))
    .with_default(false)
    .with_help_message("existing files at the same paths are overwritten")
    .prompt()?;

    Ok(answer)
}
