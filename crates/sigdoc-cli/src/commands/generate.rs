use std::{fs, path::Path};

use colored::Colorize;
use sigdoc_crypto::{KeyAlgorithm, PrivateKey};

use crate::{
    error::{CliError, CliResult},
    settings::{DEFAULT_PRIVATE_KEY, DEFAULT_PUBLIC_KEY},
};

/// `(private, public)` file names for a key pair.
fn key_file_names(name: Option<&str>) -> (String, String) {
    match name {
        Some(name) => (format!("{}_private.pem", name), format!("{}_public.pem", name)),
        None => (DEFAULT_PRIVATE_KEY.to_string(), DEFAULT_PUBLIC_KEY.to_string()),
    }
}

pub fn handle(
    name: Option<String>,
    algorithm: String,
    output: Option<String>,
    passphrase: Option<String>,
    force: bool,
) -> CliResult<()> {
    let algorithm: KeyAlgorithm = algorithm
        .parse()
        .map_err(|e: sigdoc_crypto::Error| CliError::InvalidInput(e.to_string()))?;

    // 确定输出目录
    let output_dir = output.unwrap_or_else(|| ".".to_string());
    let output_path = Path::new(&output_dir);
    let (private_name, public_name) = key_file_names(name.as_deref());
    let private_key_path = output_path.join(private_name);
    let public_key_path = output_path.join(public_name);

    // 不覆盖已有密钥
    if !force {
        let existing = [&private_key_path, &public_key_path]
            .into_iter()
            .find(|path| path.exists());
        if let Some(path) = existing {
            return Err(CliError::InvalidInput(format!(
                "{} already exists; pass --force to replace it",
                path.display()
            )));
        }
    }

    eprintln!("{}", format!("Generating {} key pair...", algorithm).cyan());
    let private_key = PrivateKey::generate(algorithm)?;
    let public_key = private_key.public_key();

    if !output_path.exists() {
        fs::create_dir_all(output_path)?;
    }

    let private_pem = match passphrase.as_deref() {
        Some(passphrase) => private_key.to_pkcs8_encrypted_pem(passphrase)?,
        None => private_key.to_pkcs8_pem()?,
    };
    fs::write(&private_key_path, private_pem.as_bytes())?;
    eprintln!("{} private key saved to {}", "✓".green(), private_key_path.display());

    fs::write(&public_key_path, public_key.to_pem()?.as_bytes())?;
    eprintln!("{} public key saved to {}", "✓".green(), public_key_path.display());

    eprintln!();
    eprintln!("  Algorithm:   {}", public_key.algorithm_name());
    eprintln!("  Key size:    {} bits", public_key.key_size_bits());
    eprintln!("  Fingerprint: {}", public_key.fingerprint_sha256()?);
    if passphrase.is_none() {
        eprintln!("{}", "⚠ private key is stored unencrypted".yellow());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names_match_verify_defaults() {
        let (private, public) = key_file_names(None);
        assert_eq!(private, "private.ecdsa.secure.pem");
        assert_eq!(public, DEFAULT_PUBLIC_KEY);
    }

    #[test]
    fn test_named_file_names() {
        let (private, public) = key_file_names(Some("release"));
        assert_eq!(private, "release_private.pem");
        assert_eq!(public, "release_public.pem");
    }
}
