//! Tool surface published to an agent tool server.
//!
//! - `cricket` - the orchestrating operations over the feed client
//! - `params` - typed tool arguments decoded from JSON
//! - `registry` - name and URI addressed registration

pub mod cricket;
pub mod params;
pub mod registry;

pub use cricket::CricketTools;
pub use registry::{
    ResourceRegistry, ToolMetadata, ToolParam, ToolRegistry, competitions_uri, register_all,
};
