use crate::adapters::outbound::cache::{ResolutionCache, RetentionPolicy};
use crate::ports::outbound::{MetadataRepository, ResourceFetcher};
use crate::report_generation::domain::{
    MetadataDocument, ModuleCoordinate, PomData, RepositoryDescriptor,
};
use crate::shared::security::read_checked_file;
use crate::shared::Result;
use reqwest::Url;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use walkdir::WalkDir;

/// File extension of descriptor documents
pub const DESCRIPTOR_EXTENSION: &str = "pom";

/// MetadataResolver adapter: finds and merges descriptor documents.
///
/// Every configured repository is probed and every document found is kept;
/// repositories often hold partial metadata, so there is no first-hit
/// short-circuit. A coordinate's merged metadata is the union of its
/// documents' own fields and the merged fields of each declared parent.
///
/// Two caches back the resolver:
/// - `documents`: coordinate -> documents found for it (the fetch-bound step)
/// - `merged`: coordinate -> merged result
///
/// The merge walks parents through `documents` only, so the merged slot of
/// one coordinate is never held while waiting on another's.
pub struct MetadataResolver<F: ResourceFetcher> {
    repositories: Vec<RepositoryDescriptor>,
    fetcher: F,
    documents: ResolutionCache<ModuleCoordinate, Vec<MetadataDocument>>,
    merged: ResolutionCache<ModuleCoordinate, Option<Arc<PomData>>>,
}

impl<F: ResourceFetcher> MetadataResolver<F> {
    pub fn new(repositories: Vec<RepositoryDescriptor>, fetcher: F) -> Self {
        Self::with_retention(repositories, fetcher, RetentionPolicy::Unbounded)
    }

    pub fn with_retention(
        repositories: Vec<RepositoryDescriptor>,
        fetcher: F,
        retention: RetentionPolicy,
    ) -> Self {
        Self {
            repositories,
            fetcher,
            documents: ResolutionCache::with_retention(retention),
            merged: ResolutionCache::with_retention(retention),
        }
    }

    /// Drops everything cached for `coordinate`
    pub fn evict(&self, coordinate: &ModuleCoordinate) {
        self.merged.evict(coordinate);
        self.documents.evict(coordinate);
    }

    fn documents_for(&self, coordinate: &ModuleCoordinate) -> Arc<Vec<MetadataDocument>> {
        self.documents
            .get_or_compute(coordinate, |coordinate| self.probe_repositories(coordinate))
    }

    fn probe_repositories(&self, coordinate: &ModuleCoordinate) -> Vec<MetadataDocument> {
        let mut texts: Vec<String> = Vec::new();
        let mut add = |text: String| {
            if !texts.contains(&text) {
                texts.push(text);
            }
        };

        for repository in &self.repositories {
            match repository {
                RepositoryDescriptor::Remote { base_uris } => {
                    for base in base_uris {
                        if let Some(text) = self.probe_remote(base, coordinate) {
                            add(text);
                        }
                    }
                }
                RepositoryDescriptor::LocalDirectory { roots } => {
                    for root in roots {
                        probe_local(root, coordinate).into_iter().for_each(&mut add);
                    }
                }
            }
        }

        tracing::debug!(%coordinate, found = texts.len(), "probed repositories");
        texts.into_iter().map(MetadataDocument::new).collect()
    }

    fn probe_remote(&self, base: &Url, coordinate: &ModuleCoordinate) -> Option<String> {
        let fetched = descriptor_location(base, coordinate)
            .and_then(|location| self.fetcher.fetch(&location));
        match fetched {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!(%coordinate, %base, error = %e, "descriptor not found");
                None
            }
        }
    }

    /// Merges `coordinate` with its ancestors. `chain` holds the coordinates
    /// on the current path from the root request; a parent already on it is
    /// not followed again.
    fn merge(
        &self,
        coordinate: &ModuleCoordinate,
        chain: &mut HashSet<ModuleCoordinate>,
    ) -> Option<PomData> {
        let documents = self.documents_for(coordinate);
        if documents.is_empty() {
            return None;
        }

        chain.insert(coordinate.clone());
        let mut merged = PomData::new();
        for document in documents.iter() {
            merged.absorb(document.fields());
            if let Some(parent) = document.parent() {
                if chain.contains(parent) {
                    tracing::debug!(%coordinate, %parent, "parent cycle; not following");
                    continue;
                }
                if let Some(inherited) = self.merge(parent, chain) {
                    merged.merge(&inherited);
                }
            }
        }
        chain.remove(coordinate);

        Some(merged)
    }
}

impl<F: ResourceFetcher> MetadataRepository for MetadataResolver<F> {
    fn resolve(&self, coordinate: &ModuleCoordinate) -> Option<Arc<PomData>> {
        let merged = self.merged.get_or_compute(coordinate, |coordinate| {
            self.merge(coordinate, &mut HashSet::new()).map(Arc::new)
        });
        (*merged).clone()
    }
}

/// `<base>/<group segments>/<name>/<version>/<name>-<version>.pom`, each
/// segment percent-encoded. An empty group contributes no segments.
pub fn descriptor_location(base: &Url, coordinate: &ModuleCoordinate) -> Result<Url> {
    let name = urlencoding::encode(coordinate.name());
    let version = urlencoding::encode(coordinate.version());

    let mut segments: Vec<String> = coordinate
        .group_segments()
        .into_iter()
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect();
    segments.push(name.to_string());
    segments.push(version.to_string());
    segments.push(format!("{}-{}.{}", name, version, DESCRIPTOR_EXTENSION));

    let location = base.join(&segments.join("/"))?;
    Ok(location)
}

/// Searches `root` recursively for `<name>-<version>.pom` or `<name>.pom`
fn probe_local(root: &Path, coordinate: &ModuleCoordinate) -> Vec<String> {
    let versioned = format!(
        "{}-{}.{}",
        coordinate.name(),
        coordinate.version(),
        DESCRIPTOR_EXTENSION
    );
    let unversioned = format!("{}.{}", coordinate.name(), DESCRIPTOR_EXTENSION);

    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let file_name = entry.file_name().to_string_lossy();
            file_name == versioned || file_name == unversioned
        })
        .filter_map(|entry| match read_checked_file(entry.path(), "descriptor document") {
            Ok(text) => Some(text),
            Err(e) => {
                tracing::debug!(path = %entry.path().display(), error = %e, "unreadable descriptor");
                None
            }
        })
        .collect()
}
