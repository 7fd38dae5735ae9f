//! Phasefacts: a phase-science facts & puns HTTP service.
//!
//! A small JSON API serving a configured greeting, uniformly random puns and
//! facts drawn from fixed in-process sequences, an aggregate health summary,
//! and a version report. Configuration comes from environment variables read
//! once at startup; nothing is mutated after that, so handlers share state
//! without locking.

pub mod config;
pub mod content;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;
pub mod state;
