//! Route handlers: advice generation and credential settings.

pub mod advice;
pub mod settings;
