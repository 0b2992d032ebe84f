use crate::report_generation::domain::DependencyInventory;
use crate::shared::Result;
use std::path::Path;

/// InventoryReader port for loading the dependency inventory
///
/// The inventory is what the build tool hands over: the project, its
/// repositories and its resolved configurations.
pub trait InventoryReader {
    /// Reads and validates the inventory at `path`
    ///
    /// Relative paths inside the inventory are resolved against the
    /// inventory file's directory.
    ///
    /// # Errors
    /// Returns an error if the file is missing, unsafe to read, or malformed
    fn read_inventory(&self, path: &Path) -> Result<DependencyInventory>;
}
