// Composition root for the expense tracker backend.
//
// Responsibilities
// - Wire the in-memory store, request counter and health monitor into the
//   application state.
// - Build the HTTP router that the binary serves.

pub mod http;
pub mod state;
