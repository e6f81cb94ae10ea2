//! Validation of tool-call arguments

pub mod validator;
