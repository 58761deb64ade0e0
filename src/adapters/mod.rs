// Adapters layer: concrete implementations of the domain ports for terminals,
// tests and random number generation. File storage lives in config::cli.

pub mod console;
pub mod order_number;

pub use console::{LineConsole, ScriptedConsole};
pub use order_number::{FixedOrderNumbers, RandomOrderNumbers};
