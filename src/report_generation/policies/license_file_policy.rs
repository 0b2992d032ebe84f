/// Name prefixes that mark an archive entry as license-like, in lower case
pub const LICENSE_FILE_PREFIXES: [&str; 4] = ["license", "copying", "notice", "readme"];

/// LicenseFilePolicy decides which archive entries count as license/notice files.
///
/// An entry matches when, lower-cased,
/// 1. its last path segment starts with one of the prefixes, or
/// 2. it is nested and the part of its path after the first `/` contains
///    one of the prefixes (this includes every `/<prefix>` occurrence).
///
/// So `docs/notice-extra.txt` and `sub/mynotice.txt` match, while a
/// top-level `mylicense.txt` does not. The second clause is broad: nested
/// entries such as `com/x/ApacheLicenseUtil.class` match as well.
pub struct LicenseFilePolicy;

impl LicenseFilePolicy {
    /// Checks an archive entry path (always `/`-separated) against the rule
    pub fn is_license_file(entry_path: &str) -> bool {
        if entry_path.is_empty() || entry_path.ends_with('/') {
            return false;
        }

        let lowered = entry_path.to_lowercase();
        let simple_name = lowered.rsplit('/').next().unwrap_or(&lowered);
        let nested_part = lowered.split_once('/').map(|(_, rest)| rest);

        LICENSE_FILE_PREFIXES.iter().any(|prefix| {
            simple_name.starts_with(prefix)
                || nested_part.is_some_and(|rest| rest.contains(prefix))
        })
    }
}
