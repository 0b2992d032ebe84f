mod license_file_policy;

pub use license_file_policy::{LicenseFilePolicy, LICENSE_FILE_PREFIXES};
