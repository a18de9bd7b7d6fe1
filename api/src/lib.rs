// Module layout (Clean Architecture style)
// - bootstrap: configuration and wiring
// - infrastructure: catalog store adapters (Postgres, in-memory)
// - presentation: HTTP handlers, envelopes and routing
// - application: store ports and use cases
// - domain: core models

pub mod application;
pub mod bootstrap;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
