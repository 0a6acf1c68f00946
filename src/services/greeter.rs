//! The greeting component.

/// The greeting returned for every request. Never changes.
pub const GREETING: &str = "Hello, World!";

/// Source of the greeting text.
///
/// Object-safe so handler tests can substitute a counting mock.
pub trait Greeter: Send + Sync {
    fn greet(&self) -> &'static str;
}

/// Production greeter: always returns [`GREETING`].
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticGreeter;

impl Greeter for StaticGreeter {
    fn greet(&self) -> &'static str {
        GREETING
    }
}
