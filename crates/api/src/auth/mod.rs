//! Token validation for the identity collaborator.
//!
//! Authentication itself is out of scope: tokens are issued elsewhere; this
//! API only validates them and authorizes by comparing ids.

pub mod jwt;
