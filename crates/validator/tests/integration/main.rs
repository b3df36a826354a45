//! Integration tests for stockroom-validator.

mod common;
mod form_attach;
mod form_properties;
mod scenarios;
