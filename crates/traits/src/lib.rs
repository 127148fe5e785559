pub mod render;
pub mod resource;
pub mod template;

pub use render::{Composition, EngineError, MediaType, RenderEngine, ResolvedStylesheet};
pub use resource::{InMemoryResourceProvider, ResourceError, ResourceProvider, SharedResourceData};
pub use template::{TemplateEngine, TemplateError};
