pub mod capture;
pub mod invoice;
pub mod location;
pub mod matcher;
pub mod order_flow;

pub use crate::domain::model::{Customer, Driver, MealLine, Order, Restaurant};
pub use crate::domain::ports::{ConfigProvider, Console, OrderNumberSource, Storage};
pub use crate::utils::error::Result;
