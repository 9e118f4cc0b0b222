//! Shared models and form validation for the HD Notes web client.
//!
//! Everything the frontend puts on the wire lives here, together with the
//! client-side validation schemas for the registration and sign-in forms.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod models;
pub mod validation;
