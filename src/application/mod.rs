//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Performs no I/O; callers hand in assets and persist the result
//!
//! ## Use Cases
//!
//! - `ManifestPipeline` - Validate config once, then select, digest and emit per pass

pub mod pipeline;

pub use pipeline::{run_pass, ManifestPipeline};
