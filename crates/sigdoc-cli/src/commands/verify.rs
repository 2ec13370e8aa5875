use std::process::ExitCode;

use colored::Colorize;
use sigdoc_core::{verify_pem_and_json, VerificationOutcome};

use super::read_input;
use crate::error::CliResult;

/// Exit status when the signature does not match.
pub const EXIT_REJECTED: u8 = 1;

pub fn handle(document: String, key: String) -> CliResult<ExitCode> {
    let key_pem = read_input(&key)?;
    let document_json = read_input(&document)?;
    tracing::debug!(%document, %key, "verifying document");

    // 结果只输出到 stdout: ok / failed
    match verify_pem_and_json(&key_pem, &document_json)? {
        VerificationOutcome::Verified => {
            println!("ok");
            Ok(ExitCode::SUCCESS)
        }
        VerificationOutcome::Rejected(reason) => {
            println!("failed");
            eprintln!("{} {}", "✗".red(), reason);
            Ok(ExitCode::from(EXIT_REJECTED))
        }
    }
}
