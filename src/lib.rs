// Module layout (Clean Architecture style)
// - bootstrap: configuration and startup
// - infrastructure: Postgres adapters
// - presentation: HTTP handlers and routing
// - application: persistence ports and lifecycle use cases
// - domain: core models, validation, and balance display rules

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
