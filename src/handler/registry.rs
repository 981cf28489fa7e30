// Handler resolution module
// Maps a path-like reference to a compiled-in handler, once, at startup

use std::ffi::OsStr;
use std::path::Path;
use std::sync::Arc;

use crate::error::StartupError;

use super::builtin::{EchoHandler, HelloHandler};
use super::Handler;

/// Resolve a handler reference to a handler capability
///
/// The reference is path-like, matching how the control plane addresses
/// function sources (`/pulsar/functions/public/echo.js`); only the file
/// stem selects the handler, so `echo`, `echo.js` and
/// `functions/public/echo.js` all resolve to the same capability.
///
/// Resolution happens exactly once, before the listener binds. An
/// unresolvable reference is a startup failure: no socket is ever bound.
pub fn resolve(reference: &str) -> Result<Arc<dyn Handler>, StartupError> {
    let reference = reference.trim();
    if reference.is_empty() {
        return Err(StartupError::MissingHandler);
    }

    let stem = Path::new(reference)
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or(reference);

    match stem {
        "echo" => Ok(Arc::new(EchoHandler)),
        "hello" => Ok(Arc::new(HelloHandler)),
        _ => Err(StartupError::UnknownHandler(reference.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_bare_name() {
        let handler = resolve("echo").unwrap();
        assert_eq!(handler.name(), "echo");
    }

    #[test]
    fn resolves_path_like_reference_by_file_stem() {
        let handler = resolve("/pulsar/functions/public/echo.js").unwrap();
        assert_eq!(handler.name(), "echo");

        let handler = resolve("functions/hello.js").unwrap();
        assert_eq!(handler.name(), "hello");
    }

    #[test]
    fn unknown_reference_is_a_startup_error() {
        let err = resolve("functions/missing.js").err().unwrap();
        assert!(matches!(err, StartupError::UnknownHandler(_)));
        assert!(err.to_string().contains("functions/missing.js"));
    }

    #[test]
    fn empty_reference_is_a_startup_error() {
        assert!(matches!(resolve(""), Err(StartupError::MissingHandler)));
        assert!(matches!(resolve("   "), Err(StartupError::MissingHandler)));
    }
}
