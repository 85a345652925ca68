//! Request-processing middleware.
//!
//! - [`access`]: the route-level access gate (public routes, bot-challenge
//!   neutralization, unauthenticated redirects)
//! - [`session`]: session types and the [`session::SessionStore`] seam
//!
//! # Request flow
//!
//! 1. The access gate classifies the path (exclusions → public table →
//!    assets → challenge → auth callback).
//! 2. Only requests that survive classification resolve their session
//!    cookie against the store.
//! 3. Anonymous requests outside the root page get a 303 to `/` with any
//!    session `Set-Cookie` stripped; everything else passes through.

pub mod access;
pub mod session;
