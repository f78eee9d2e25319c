//! End-to-end pipeline tests: commands in, replies out, with fake
//! collaborators standing in for the model, store, and chat surface.

mod analyze;
mod query;
mod support;
