/// Data Transfer Objects for the application layer
///
/// DTOs mirror the NVD CVE API 2.0 wire format and keep the domain layer
/// isolated from serialization concerns.
mod nvd_response;

pub use nvd_response::{
    CveRecord, CvssDataV2, CvssDataV3, CvssMetricV2, CvssMetricV3, Description, Metrics,
    NvdApiResponse, RawVendorComment, Reference, VulnerabilityEntry,
};
