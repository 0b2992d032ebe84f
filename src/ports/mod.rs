/// Ports module defining the interfaces of the hexagonal architecture
///
/// The report use case is driven directly by `main`, so only outbound
/// (driven) ports are declared here.
pub mod outbound;
