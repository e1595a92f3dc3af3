pub mod dependency;
pub mod registry;

pub use crate::domain::DomainError;
pub use dependency::Dependency;
pub use registry::{DependencyRegistry, ResolvedDependencies};
