use reqwest::Url;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// RepositoryDescriptor - where descriptor documents may be found.
///
/// A closed set of repository kinds; the metadata resolver dispatches on
/// the variant rather than on an open trait hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RepositoryDescriptor {
    /// Maven-layout repository reachable by URL (`https://`, `http://` or `file://`)
    Remote {
        #[serde(deserialize_with = "deserialize_base_uris")]
        base_uris: Vec<Url>,
    },
    /// Flat directories searched recursively for `name-version.pom` / `name.pom`
    LocalDirectory { roots: Vec<PathBuf> },
}

impl RepositoryDescriptor {
    /// Creates a remote repository, dropping duplicate base URIs while
    /// keeping the first-seen order.
    pub fn remote(base_uris: Vec<Url>) -> Self {
        let mut unique: Vec<Url> = Vec::with_capacity(base_uris.len());
        for uri in base_uris {
            if !unique.contains(&uri) {
                unique.push(uri);
            }
        }
        Self::Remote { base_uris: unique }
    }

    pub fn local_directory(roots: Vec<PathBuf>) -> Self {
        Self::LocalDirectory { roots }
    }

    /// Resolves relative local roots against `base_dir`.
    pub fn resolve_relative_to(self, base_dir: &Path) -> Self {
        match self {
            Self::Remote { base_uris } => Self::remote(base_uris),
            Self::LocalDirectory { roots } => Self::LocalDirectory {
                roots: roots
                    .into_iter()
                    .map(|root| {
                        if root.is_absolute() {
                            root
                        } else {
                            base_dir.join(root)
                        }
                    })
                    .collect(),
            },
        }
    }
}

/// Base URIs that don't end with `/` are treated as directories anyway, so
/// `https://repo/maven2` and `https://repo/maven2/` behave the same on join.
///
/// A malformed URI is a location where nothing can be found: it is dropped
/// with a warning and the remaining URIs are kept.
fn deserialize_base_uris<'de, D>(deserializer: D) -> std::result::Result<Vec<Url>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw: Vec<String> = Vec::deserialize(deserializer)?;
    Ok(raw
        .iter()
        .filter_map(|s| match parse_base_uri(s) {
            Ok(url) => Some(url),
            Err(reason) => {
                tracing::warn!("Skipping repository location: {}", reason);
                None
            }
        })
        .collect())
}

/// Parses a repository base URI, normalising it to end with `/`.
pub fn parse_base_uri(raw: &str) -> std::result::Result<Url, String> {
    let mut normalized = raw.trim().to_string();
    if !normalized.ends_with('/') {
        normalized.push('/');
    }
    Url::parse(&normalized).map_err(|e| format!("invalid repository URI '{}': {}", raw, e))
}
