use std::io;
use std::path::Path;

use secrecy::SecretString;

/// Reads the bearer credential presented to the decision service.
///
/// The file holds a single token; surrounding whitespace is ignored.
pub(crate) fn load(path: &Path) -> io::Result<SecretString> {
    let contents = std::fs::read_to_string(path)?;
    let token = contents.trim();

    if token.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "credential file is empty",
        ));
    }

    Ok(SecretString::from(token.to_string()))
}
