//! Configuration modules.
//!
//! Each submodule owns one aspect of configuration, loaded from environment
//! variables via a `from_env` constructor, except [`routes`], which is a
//! static table compiled into the binary.
//!
//! # Modules
//!
//! - [`cors`]: CORS allowed origins
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`email`]: SMTP configuration for invitation delivery
//! - [`llm`]: LLM provider endpoint, model, and sampling settings
//! - [`rate_limit`]: API rate limiting configuration
//! - [`routes`]: route classification used by the access middleware
//! - [`session`]: session cookie and token signing configuration

pub mod cors;
pub mod database;
pub mod email;
pub mod llm;
pub mod rate_limit;
pub mod routes;
pub mod session;
