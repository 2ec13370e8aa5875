pub mod generate;
pub mod info;
pub mod sign;
pub mod verify;

use std::{fs, path::Path};

use crate::error::{CliError, CliResult};

/// Read a whole input file, reporting a missing path as `FileNotFound`.
pub(crate) fn read_input(path: &str) -> CliResult<Vec<u8>> {
    if !Path::new(path).exists() {
        return Err(CliError::FileNotFound(path.to_string()));
    }
    Ok(fs::read(path)?)
}

pub(crate) fn read_input_string(path: &str) -> CliResult<String> {
    String::from_utf8(read_input(path)?)
        .map_err(|_| CliError::InvalidInput(format!("{} is not valid UTF-8", path)))
}
