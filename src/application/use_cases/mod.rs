/// Use cases module containing application business logic orchestration
mod enrich_vulnerability;

pub use enrich_vulnerability::EnrichVulnerabilityUseCase;
