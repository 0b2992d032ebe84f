use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// Writes a jar at `path` containing the given entries.
pub fn write_jar(path: &Path, entries: &[(&str, &str)]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let mut writer = ZipWriter::new(File::create(path).unwrap());
    let options = SimpleFileOptions::default();
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content.as_bytes()).unwrap();
    }
    writer.finish().unwrap();
}

/// Descriptor text with an optional parent, project URL and named licenses.
pub fn pom(parent: Option<(&str, &str, &str)>, url: Option<&str>, licenses: &[&str]) -> String {
    let mut text = String::from("<?xml version=\"1.0\"?>\n<project>\n");
    if let Some((group, name, version)) = parent {
        text.push_str(&format!(
            "  <parent><groupId>{}</groupId><artifactId>{}</artifactId><version>{}</version></parent>\n",
            group, name, version
        ));
    }
    if let Some(url) = url {
        text.push_str(&format!("  <url>{}</url>\n", url));
    }
    if !licenses.is_empty() {
        text.push_str("  <licenses>\n");
        for license in licenses {
            text.push_str(&format!("    <license><name>{}</name></license>\n", license));
        }
        text.push_str("  </licenses>\n");
    }
    text.push_str("</project>\n");
    text
}

/// Writes a descriptor into a Maven-layout repository rooted at `root`.
pub fn write_maven_pom(root: &Path, group: &str, name: &str, version: &str, text: &str) -> PathBuf {
    let mut dir = root.to_path_buf();
    for segment in group.split('.').filter(|s| !s.is_empty()) {
        dir.push(segment);
    }
    dir.push(name);
    dir.push(version);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(format!("{}-{}.pom", name, version));
    fs::write(&path, text).unwrap();
    path
}

/// `file://` base URI of a directory, with a trailing slash.
pub fn file_base_uri(dir: &Path) -> String {
    let mut uri = reqwest::Url::from_directory_path(dir.canonicalize().unwrap())
        .unwrap()
        .to_string();
    if !uri.ends_with('/') {
        uri.push('/');
    }
    uri
}
