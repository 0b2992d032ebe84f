use crate::report_generation::domain::ConfigurationDescriptor;
use std::collections::HashSet;

/// Result of selecting the configurations to report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigurationSelection {
    /// Selected configurations, in inventory declaration order
    pub selected: Vec<ConfigurationDescriptor>,
    /// Requested names that matched no configuration
    pub unmatched_names: Vec<String>,
}

/// ConfigurationSelector picks the configurations a report covers.
///
/// Requested names match case-insensitively. The selection is then closed
/// over `extends_from`: a selected configuration pulls in every configuration
/// it extends, transitively, until nothing changes.
pub struct ConfigurationSelector;

impl ConfigurationSelector {
    pub fn select(
        configurations: &[ConfigurationDescriptor],
        requested_names: &[String],
    ) -> ConfigurationSelection {
        let mut selected: HashSet<String> = HashSet::new();
        let mut unmatched_names = Vec::new();

        for requested in requested_names {
            let lowered = requested.to_lowercase();
            let mut found = false;
            for configuration in configurations {
                if configuration.name.to_lowercase() == lowered {
                    selected.insert(lowered.clone());
                    found = true;
                }
            }
            if !found {
                unmatched_names.push(requested.clone());
            }
        }

        loop {
            let previous_size = selected.len();
            for configuration in configurations {
                if selected.contains(&configuration.name.to_lowercase()) {
                    for parent in &configuration.extends_from {
                        let parent = parent.to_lowercase();
                        if configurations
                            .iter()
                            .any(|c| c.name.to_lowercase() == parent)
                        {
                            selected.insert(parent);
                        }
                    }
                }
            }
            if selected.len() == previous_size {
                break;
            }
        }

        ConfigurationSelection {
            selected: configurations
                .iter()
                .filter(|c| selected.contains(&c.name.to_lowercase()))
                .cloned()
                .collect(),
            unmatched_names,
        }
    }
}
