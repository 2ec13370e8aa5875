use std::fs;

use colored::Colorize;
use rand::RngCore;
use sigdoc_core::SignedDocument;
use sigdoc_crypto::PrivateKey;

use super::read_input_string;
use crate::error::{CliError, CliResult};

/// Bytes of randomness behind a `--random` cleartext (hex encoded).
const RANDOM_CLEARTEXT_BYTES: usize = 65;

/// Where the cleartext comes from. Exactly one source is given on the
/// command line.
pub enum CleartextSource {
    Text(String),
    File(String),
    Random,
}

impl CleartextSource {
    pub fn from_args(cleartext: Option<String>, file: Option<String>, random: bool) -> CliResult<Self> {
        match (cleartext, file, random) {
            (Some(text), None, false) => Ok(Self::Text(text)),
            (None, Some(path), false) => Ok(Self::File(path)),
            (None, None, true) => Ok(Self::Random),
            _ => Err(CliError::InvalidInput(
                "give exactly one of --cleartext, --file or --random".to_string(),
            )),
        }
    }

    fn resolve(self) -> CliResult<String> {
        match self {
            Self::Text(text) => Ok(text),
            Self::File(path) => read_input_string(&path),
            Self::Random => {
                let mut bytes = [0u8; RANDOM_CLEARTEXT_BYTES];
                rand::thread_rng().fill_bytes(&mut bytes);
                Ok(hex::encode(bytes))
            }
        }
    }
}

pub fn handle(
    key: String,
    source: CleartextSource,
    passphrase: Option<String>,
    output: String,
) -> CliResult<()> {
    let key_pem = read_input_string(&key)?;
    let private_key = PrivateKey::from_pem(&key_pem, passphrase.as_deref())?;
    let cleartext = source.resolve()?;

    let document = SignedDocument::sign(cleartext, &private_key)?;
    let mut json = document.to_json()?;
    json.push('\n');
    fs::write(&output, json)?;

    eprintln!(
        "{} signed {} bytes with {} key, document saved to {}",
        "✓".green(),
        document.cleartext().len(),
        private_key.algorithm_name(),
        output
    );
    Ok(())
}
