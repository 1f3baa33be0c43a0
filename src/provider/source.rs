//! Where bulletin text comes from.
//!
//! The parser only needs the complete text of today's bulletin. A
//! [`BulletinSource`] hides whether that text comes from the network, a
//! file, or memory.

use crate::provider::config::ProviderConfig;
use reqwest::blocking::Client;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while obtaining bulletin text.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read bulletin from {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP request for the bulletin failed")]
    Http(#[from] reqwest::Error),

    #[error("bulletin request to {url} returned status {status}")]
    Status { url: String, status: u16 },
}

/// Supplies the raw text of the current bulletin.
pub trait BulletinSource {
    /// Short description used in log messages.
    fn name(&self) -> &str;

    fn fetch(&self) -> Result<String, SourceError>;
}

/// Bulletin text held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl BulletinSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self) -> Result<String, SourceError> {
        Ok(self.text.clone())
    }
}

/// Bulletin text read from a local file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
    name: String,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }
}

impl BulletinSource for FileSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch(&self) -> Result<String, SourceError> {
        fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

/// Bulletin text downloaded over HTTP.
///
/// # Example
///
/// ```no_run
/// use cnb_rates::provider::config::ProviderConfig;
/// use cnb_rates::provider::source::{BulletinSource, HttpSource};
///
/// let source = HttpSource::new(&ProviderConfig::default()).unwrap();
/// let text = source.fetch().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(config: &ProviderConfig) -> Result<Self, SourceError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

impl BulletinSource for HttpSource {
    fn name(&self) -> &str {
        &self.url
    }

    fn fetch(&self) -> Result<String, SourceError> {
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

impl<S: BulletinSource + ?Sized> BulletinSource for &S {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&self) -> Result<String, SourceError> {
        (**self).fetch()
    }
}

impl<S: BulletinSource + ?Sized> BulletinSource for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn fetch(&self) -> Result<String, SourceError> {
        (**self).fetch()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_static_source() {
        let source = StaticSource::new("h1\nh2\n");
        assert_eq!(source.fetch().unwrap(), "h1\nh2\n");
        assert_eq!(source.name(), "static");
    }

    #[test]
    fn test_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "h1\nh2\nEMU|euro|1|EUR|24,330\n").unwrap();

        let source = FileSource::new(file.path());
        assert_eq!(source.fetch().unwrap(), "h1\nh2\nEMU|euro|1|EUR|24,330\n");
    }

    #[test]
    fn test_file_source_missing() {
        let dir = tempfile::tempdir().unwrap();
        let source = FileSource::new(dir.path().join("missing.txt"));
        assert!(matches!(source.fetch(), Err(SourceError::Io { .. })));
    }

    #[test]
    fn test_boxed_source() {
        let source: Box<dyn BulletinSource> = Box::new(StaticSource::new("text"));
        assert_eq!(source.fetch().unwrap(), "text");
    }
}
