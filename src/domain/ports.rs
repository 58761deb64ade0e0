use crate::utils::error::Result;

/// Line-oriented interaction with whoever is placing the order.
pub trait Console {
    /// Prints `label` without a trailing newline and reads one line of input,
    /// returned without its line terminator.
    fn prompt(&mut self, label: &str) -> Result<String>;

    fn say(&mut self, text: &str) -> Result<()>;
}

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<String>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<String>;
}

pub trait OrderNumberSource {
    /// Returns a number in `0..=9999`. Uniqueness is not guaranteed.
    fn next_order_number(&mut self) -> u32;
}

pub trait ConfigProvider {
    fn drivers_file(&self) -> &str;
    fn invoice_file(&self) -> &str;
    fn currency(&self) -> &str;
}
