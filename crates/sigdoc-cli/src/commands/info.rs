use colored::Colorize;
use sigdoc_crypto::{classify_public_key_pem, PrivateKey, PublicKey};

use super::read_input_string;
use crate::error::CliResult;

pub fn handle(key: String, passphrase: Option<String>) -> CliResult<()> {
    let key_content = read_input_string(&key)?;

    // 私钥: 显示对应公钥的信息
    let is_private = key_content.contains("PRIVATE KEY-----");
    let public_key = if is_private {
        PrivateKey::from_pem(&key_content, passphrase.as_deref())?.public_key()
    } else {
        classify_public_key_pem(key_content.as_bytes())?
    };

    println!("{}", format!("Key: {}", key).cyan().bold());
    println!("Type:        {}", if is_private { "private" } else { "public" });
    println!("Algorithm:   {}", public_key.algorithm_name());
    println!("Key size:    {} bits", public_key.key_size_bits());
    if let PublicKey::Ecdsa(ec_key) = &public_key {
        println!("Curve:       {}", ec_key.curve().name());
    }
    println!("Fingerprint: {}", public_key.fingerprint_sha256()?);

    Ok(())
}
