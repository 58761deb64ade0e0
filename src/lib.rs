pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FixedOrderNumbers, LineConsole, RandomOrderNumbers, ScriptedConsole};
pub use config::{cli::LocalStorage, AppSettings, CliConfig};
pub use crate::core::{
    invoice::Invoice,
    matcher::{DriverMatcher, DriverRoster, MatchOutcome},
    order_flow::{FlowOutcome, OrderFlow, OrderSummary},
};
pub use utils::error::{OrderError, Result};
