//! Descriptor documents (`*.pom`) and the merged metadata derived from them.
//!
//! Documents are kept as raw text and only scanned when their fields are
//! first needed. Scanning tracks the element path so that `project/url` is
//! told apart from `scm/url` or `licenses/license/url` without a full XML
//! parser; malformed input simply yields fewer fields.

use super::coordinate::ModuleCoordinate;
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::sync::{LazyLock, OnceLock};

/// Tokenizer: comments, CDATA, processing instructions/doctype, tags, text
static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)<!--.*?-->|<!\[CDATA\[(?P<cdata>.*?)\]\]>|<[?!][^>]*>|<(?P<close>/?)(?P<tag>[A-Za-z_][\w:.\-]*)[^>]*?(?P<empty>/?)>|(?P<text>[^<]+)",
    )
    .expect("descriptor tokenizer pattern is valid")
});

static ENTITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:(?P<named>lt|gt|amp|quot|apos)|#(?P<dec>[0-9]+)|#x(?P<hex>[0-9a-fA-F]+));")
        .expect("entity pattern is valid")
});

/// One license declaration: `<license><name/><url/></license>`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LicenseRef {
    name: Option<String>,
    url: Option<String>,
}

impl LicenseRef {
    pub fn new(name: Option<String>, url: Option<String>) -> Self {
        Self {
            name: name.filter(|s| !s.trim().is_empty()),
            url: url.filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    fn is_empty(&self) -> bool {
        self.name.is_none() && self.url.is_none()
    }
}

/// Fields a single descriptor declares about itself
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DescriptorFields {
    pub parent: Option<ModuleCoordinate>,
    pub urls: Vec<String>,
    pub licenses: Vec<LicenseRef>,
}

impl DescriptorFields {
    /// Scans descriptor text for its parent coordinate, project URL and licenses.
    pub fn parse(text: &str) -> Self {
        let mut fields = Self::default();
        let mut path: Vec<String> = Vec::new();
        let mut buffer = String::new();
        let mut parent = ParentParts::default();
        let mut license = (None, None);

        for caps in TOKEN_RE.captures_iter(text) {
            if let Some(cdata) = caps.name("cdata") {
                buffer.push_str(cdata.as_str());
            } else if let Some(tag) = caps.name("tag") {
                let local = local_name(tag.as_str()).to_string();
                let closing = !caps["close"].is_empty();
                let self_closing = !caps["empty"].is_empty();

                if closing {
                    let value = buffer.trim().to_string();
                    buffer.clear();
                    if path.last() != Some(&local) {
                        // Unbalanced markup: skip rather than misattribute fields
                        continue;
                    }
                    let joined = path.join("/");
                    match joined.as_str() {
                        "project/url" => push_non_blank(&mut fields.urls, value),
                        "project/parent/groupId" => parent.group = non_blank(value),
                        "project/parent/artifactId" => parent.name = non_blank(value),
                        "project/parent/version" => parent.version = non_blank(value),
                        "project/licenses/license/name" => license.0 = non_blank(value),
                        "project/licenses/license/url" => license.1 = non_blank(value),
                        "project/licenses/license" => {
                            let entry = LicenseRef::new(license.0.take(), license.1.take());
                            if !entry.is_empty() {
                                fields.licenses.push(entry);
                            }
                        }
                        "project/parent" => fields.parent = parent.take_coordinate(),
                        _ => {}
                    }
                    path.pop();
                } else if !self_closing {
                    path.push(local);
                    buffer.clear();
                }
            } else if let Some(raw) = caps.name("text") {
                buffer.push_str(&decode_entities(raw.as_str()));
            }
        }

        fields
    }
}

#[derive(Default)]
struct ParentParts {
    group: Option<String>,
    name: Option<String>,
    version: Option<String>,
}

impl ParentParts {
    fn take_coordinate(&mut self) -> Option<ModuleCoordinate> {
        let group = self.group.take()?;
        let name = self.name.take()?;
        let version = self.version.take()?;
        ModuleCoordinate::new(group, name, version).ok()
    }
}

fn local_name(tag: &str) -> &str {
    tag.rsplit(':').next().unwrap_or(tag)
}

fn non_blank(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn push_non_blank(values: &mut Vec<String>, value: String) {
    if !value.is_empty() {
        values.push(value);
    }
}

fn decode_entities(raw: &str) -> String {
    ENTITY_RE
        .replace_all(raw, |caps: &Captures| {
            if let Some(named) = caps.name("named") {
                return match named.as_str() {
                    "lt" => "<",
                    "gt" => ">",
                    "amp" => "&",
                    "quot" => "\"",
                    _ => "'",
                }
                .to_string();
            }
            let code = caps
                .name("dec")
                .and_then(|d| d.as_str().parse::<u32>().ok())
                .or_else(|| {
                    caps.name("hex")
                        .and_then(|h| u32::from_str_radix(h.as_str(), 16).ok())
                });
            code.and_then(char::from_u32)
                .map(String::from)
                .unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

/// MetadataDocument - raw text of one discovered descriptor, parsed on first use
#[derive(Debug)]
pub struct MetadataDocument {
    text: String,
    fields: OnceLock<DescriptorFields>,
}

impl MetadataDocument {
    pub fn new(text: String) -> Self {
        Self {
            text,
            fields: OnceLock::new(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fields(&self) -> &DescriptorFields {
        self.fields.get_or_init(|| DescriptorFields::parse(&self.text))
    }

    pub fn parent(&self) -> Option<&ModuleCoordinate> {
        self.fields().parent.as_ref()
    }
}

/// PomData - merged metadata for a coordinate: its own descriptors' fields
/// united with those of every reachable parent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PomData {
    urls: BTreeSet<String>,
    licenses: BTreeSet<LicenseRef>,
}

impl PomData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one document's own fields
    pub fn absorb(&mut self, fields: &DescriptorFields) {
        self.urls.extend(fields.urls.iter().cloned());
        self.licenses.extend(fields.licenses.iter().cloned());
    }

    /// Unites another merged result (e.g. a parent's) into this one
    pub fn merge(&mut self, other: &PomData) {
        self.urls.extend(other.urls.iter().cloned());
        self.licenses.extend(other.licenses.iter().cloned());
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.urls.insert(url.into());
        self
    }

    pub fn with_license(mut self, license: LicenseRef) -> Self {
        self.licenses.insert(license);
        self
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub fn licenses(&self) -> impl Iterator<Item = &LicenseRef> {
        self.licenses.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty() && self.licenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_POM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- <url>http://commented.out</url> -->
<project xmlns="http://maven.apache.org/POM/4.0.0">
  <modelVersion>4.0.0</modelVersion>
  <parent>
    <groupId>com.example</groupId>
    <artifactId>parent</artifactId>
    <version>7</version>
  </parent>
  <artifactId>foo</artifactId>
  <url>http://x</url>
  <licenses>
    <license>
      <name>Apache License, Version 2.0</name>
      <url>https://www.apache.org/licenses/LICENSE-2.0.txt</url>
    </license>
    <license>
      <name>MIT</name>
    </license>
  </licenses>
  <scm>
    <url>https://scm.example/foo</url>
  </scm>
  <dependencies>
    <dependency><url>http://nope</url></dependency>
  </dependencies>
</project>
"#;

    #[test]
    fn test_parse_full_descriptor() {
        let fields = DescriptorFields::parse(FULL_POM);
        assert_eq!(fields.urls, vec!["http://x".to_string()]);
        assert_eq!(
            fields.parent,
            Some(ModuleCoordinate::new("com.example", "parent", "7").unwrap())
        );
        assert_eq!(fields.licenses.len(), 2);
        assert_eq!(fields.licenses[0].name(), Some("Apache License, Version 2.0"));
        assert_eq!(
            fields.licenses[0].url(),
            Some("https://www.apache.org/licenses/LICENSE-2.0.txt")
        );
        assert_eq!(fields.licenses[1].name(), Some("MIT"));
        assert_eq!(fields.licenses[1].url(), None);
    }

    #[test]
    fn test_parse_ignores_nested_urls() {
        let fields =
            DescriptorFields::parse("<project><scm><url>https://scm</url></scm></project>");
        assert!(fields.urls.is_empty());
    }

    #[test]
    fn test_parse_decodes_entities_and_cdata() {
        let fields = DescriptorFields::parse(
            "<project><url>http://x/?a=1&amp;b=2</url><licenses><license><name><![CDATA[A & B]]></name></license></licenses></project>",
        );
        assert_eq!(fields.urls, vec!["http://x/?a=1&b=2".to_string()]);
        assert_eq!(fields.licenses[0].name(), Some("A & B"));
    }

    #[test]
    fn test_parse_incomplete_parent_is_not_followed() {
        let fields = DescriptorFields::parse(
            "<project><parent><artifactId>p</artifactId><version>1</version></parent></project>",
        );
        assert!(fields.parent.is_none());
    }

    #[test]
    fn test_parse_garbage_yields_no_fields() {
        let fields = DescriptorFields::parse("this is not xml <<<>>>");
        assert_eq!(fields, DescriptorFields::default());
    }

    #[test]
    fn test_parse_namespaced_tags() {
        let fields =
            DescriptorFields::parse("<pom:project><pom:url>http://ns</pom:url></pom:project>");
        assert_eq!(fields.urls, vec!["http://ns".to_string()]);
    }

    #[test]
    fn test_metadata_document_lazy_fields() {
        let doc = MetadataDocument::new(FULL_POM.to_string());
        assert_eq!(doc.parent().map(|p| p.name()), Some("parent"));
        assert!(std::ptr::eq(doc.fields(), doc.fields()));
    }

    #[test]
    fn test_pom_data_absorb_is_a_union() {
        let fields = DescriptorFields::parse(FULL_POM);
        let mut data = PomData::new();
        data.absorb(&fields);
        data.absorb(&fields);
        assert_eq!(data.urls().count(), 1);
        assert_eq!(data.licenses().count(), 2);
        assert!(!data.is_empty());
    }
}
