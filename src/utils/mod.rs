//! Shared utilities.
//!
//! - [`email`]: invitation email delivery over SMTP
//! - [`errors`]: application error type and HTTP rendering
//! - [`jwt`]: session and invite token creation and verification
//! - [`llm`]: chat-completions client and the [`llm::LanguageModel`] seam

pub mod email;
pub mod errors;
pub mod jwt;
pub mod llm;
