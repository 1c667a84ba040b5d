/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist in this crate; the driving side is
/// the host service that owns the scan loop.
pub mod outbound;
