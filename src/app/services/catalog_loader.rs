use std::fs;

use crate::app::domain::catalog::Catalog;
use crate::app::infrastructure::error::{AppError, Result};

/// True when `source` should be fetched over HTTP rather than read from disk.
pub fn is_remote(source: &str) -> bool {
    let source = source.trim_start();
    source.starts_with("http://") || source.starts_with("https://")
}

/// Fetch and parse the catalog from a URL or a local file. Single attempt.
pub fn load_catalog(source: &str) -> Result<Catalog> {
    let text = if is_remote(source) {
        let response = minreq::get(source.trim()).send()?;
        if response.status_code != 200 {
            return Err(AppError::Status(response.status_code));
        }
        response.as_str()?.to_string()
    } else {
        fs::read_to_string(source)?
    };
    Catalog::from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::test_http::serve_once;

    const BODY: &str = r#"{"languages":[{"name":"PHP","snippets":[{"title":"Echo","code":"<?php echo 'hi'; ?>","explanation":"Prints hi"}]}]}"#;

    #[test]
    fn test_is_remote() {
        assert!(is_remote("http://localhost/snippets.json"));
        assert!(is_remote("https://example.org/s.json"));
        assert!(!is_remote("snippets.json"));
        assert!(!is_remote("/srv/http/snippets.json"));
    }

    #[test]
    fn test_bundled_catalog_loads() {
        let catalog = load_catalog(concat!(env!("CARGO_MANIFEST_DIR"), "/snippets.json")).unwrap();
        assert_eq!(catalog.names(), vec!["Python", "JavaScript", "PHP", "Bash", "Kotlin"]);
        assert!(catalog.groups().iter().all(|g| !g.snippets.is_empty()));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.json");
        fs::write(&path, BODY).unwrap();

        let catalog = load_catalog(path.to_str().unwrap()).unwrap();
        assert_eq!(catalog.names(), vec!["PHP"]);
        assert_eq!(catalog.get(0).unwrap().snippets[0].code, "<?php echo 'hi'; ?>");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_catalog(dir.path().join("nope.json").to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }

    #[test]
    fn test_malformed_file_is_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snippets.json");
        fs::write(&path, "{\"languages\": [").unwrap();
        assert!(matches!(load_catalog(path.to_str().unwrap()), Err(AppError::Json(_))));
    }

    #[test]
    fn test_load_over_http() {
        let (base, handle) = serve_once("200 OK", BODY);
        let catalog = load_catalog(&format!("{}/snippets.json", base)).unwrap();
        assert_eq!(catalog.len(), 1);

        let request = handle.join().unwrap();
        assert!(request.starts_with("GET /snippets.json"));
    }

    #[test]
    fn test_non_200_is_error() {
        let (base, handle) = serve_once("404 Not Found", "{}");
        let err = load_catalog(&format!("{}/snippets.json", base)).unwrap_err();
        assert!(matches!(err, AppError::Status(404)));
        handle.join().unwrap();
    }
}
