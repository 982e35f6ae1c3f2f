//! Controller layer: routes, discrete UI actions, and the dispatch step that
//! applies them in input order.

pub mod events;
pub mod orchestration;
