pub mod compliance;
pub mod layout;
pub mod material;
pub mod project;

pub use compliance::{ComplianceCategory, ComplianceFinding, ComplianceStatus};
pub use layout::{Dimensions, Layout, RoomGeometry};
pub use material::MaterialLine;
pub use project::{
    AdjacencyRule, CulturalParameters, Project, ProjectConfig, RoomSpec, SiteConstraints,
};
