use crate::domain::model::{Customer, Driver, Order, Restaurant};
use crate::domain::ports::Storage;
use crate::utils::error::Result;
use std::fmt;

/// Formats `amount` with two decimals, rounding half-up from its shortest
/// decimal form, so 1.005 becomes "1.01" rather than "1.00".
pub fn format_amount(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("{:.2}", amount);
    }

    let shortest = format!("{}", amount.abs());
    let (whole, fraction) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(2))
        .map(|b| b - b'0')
        .collect();

    if fraction.as_bytes().get(2).is_some_and(|d| *d >= b'5') {
        let mut position = digits.len();
        loop {
            if position == 0 {
                digits.insert(0, 1);
                break;
            }
            position -= 1;
            if digits[position] == 9 {
                digits[position] = 0;
            } else {
                digits[position] += 1;
                break;
            }
        }
    }

    let split = digits.len() - 2;
    let render = |part: &[u8]| part.iter().map(|d| char::from(b'0' + d)).collect::<String>();
    let sign = if amount.is_sign_negative() { "-" } else { "" };
    format!("{}{}.{}", sign, render(&digits[..split]), render(&digits[split..]))
}

/// Everything printed on an invoice. Rendering is a pure function of these
/// fields, so equal inputs always produce identical text.
#[derive(Debug, Clone, Copy)]
pub struct Invoice<'a> {
    pub order_number: u32,
    pub customer: &'a Customer,
    pub restaurant: &'a Restaurant,
    pub order: &'a Order,
    pub driver: Option<&'a Driver>,
    pub currency: &'a str,
}

impl Invoice<'_> {
    fn money(&self, amount: f64) -> String {
        format!("{}{}", self.currency, format_amount(amount))
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Overwrites `path` in `storage` and returns the location written.
    pub fn write_to<S: Storage>(&self, storage: &S, path: &str) -> Result<String> {
        let written = storage.write_file(path, self.render().as_bytes())?;
        tracing::info!("Invoice for order {} written to {}", self.order_number, written);
        Ok(written)
    }
}

impl fmt::Display for Invoice<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Order number: {}\n\n", self.order_number)?;

        writeln!(f, "=== Customer detail ===")?;
        write!(f, "{}\n\n", self.customer)?;

        writeln!(f, "=== Your order ===")?;
        writeln!(
            f,
            "You have ordered the following from {} in {}:",
            self.restaurant.name, self.restaurant.location
        )?;
        for meal in &self.order.meals {
            writeln!(
                f,
                "{} x {} ({})",
                meal.quantity,
                meal.name,
                self.money(meal.unit_price)
            )?;
        }
        writeln!(f, "Total: {}", self.money(self.order.total()))?;
        write!(f, "\nSpecial instructions: {}\n\n", self.order.instructions)?;

        writeln!(f, "=== Detail for collection ===")?;
        match self.driver {
            Some(driver) => {
                writeln!(
                    f,
                    "{} is nearest to the restaurant and will deliver your order to:",
                    driver.name
                )?;
                writeln!(f, "{}\n{}", self.customer.address, self.customer.location)?;
                writeln!(
                    f,
                    "If you need to contact the restaurant, their number is {}.",
                    self.restaurant.contact
                )?;
                write!(f, "Thank you for your order.\nHave a nice day!")
            }
            None => write!(f, "Thank you for collecting your order.\nHave a nice day!"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::MealLine;

    fn fixtures() -> (Customer, Restaurant, Order) {
        let customer = Customer::new(
            "Thandi",
            "021 555 0101",
            "12 Long Street",
            "Cape Town",
            "thandi@example.com",
        );
        let restaurant = Restaurant::new("Mzansi Grill", "Cape Town", "021 555 0199");
        let order = Order {
            meals: vec![
                MealLine::new("Burger", 2, 45.50),
                MealLine::new("Fries", 1, 20.00),
            ],
            instructions: "No onions".to_string(),
        };
        (customer, restaurant, order)
    }

    #[test]
    fn test_collection_invoice_layout() {
        let (customer, restaurant, order) = fixtures();
        let invoice = Invoice {
            order_number: 4821,
            customer: &customer,
            restaurant: &restaurant,
            order: &order,
            driver: None,
            currency: "R",
        };

        let expected = "Order number: 4821\n\n\
=== Customer detail ===\n\
Customer: Thandi\n\
Email: thandi@example.com\n\
Phone number: 021 555 0101\n\
Address: 12 Long Street\n\
Location: Cape Town\n\n\
=== Your order ===\n\
You have ordered the following from Mzansi Grill in Cape Town:\n\
2 x Burger (R45.50)\n\
1 x Fries (R20.00)\n\
Total: R111.00\n\
\n\
Special instructions: No onions\n\n\
=== Detail for collection ===\n\
Thank you for collecting your order.\n\
Have a nice day!";

        assert_eq!(invoice.render(), expected);
    }

    #[test]
    fn test_delivery_invoice_names_driver_and_contact() {
        let (customer, restaurant, order) = fixtures();
        let driver = Driver::new("Lee", "Cape Town", 1);
        let invoice = Invoice {
            order_number: 7,
            customer: &customer,
            restaurant: &restaurant,
            order: &order,
            driver: Some(&driver),
            currency: "R",
        };

        let text = invoice.render();
        assert!(text.ends_with(
            "=== Detail for collection ===\n\
Lee is nearest to the restaurant and will deliver your order to:\n\
12 Long Street\n\
Cape Town\n\
If you need to contact the restaurant, their number is 021 555 0199.\n\
Thank you for your order.\n\
Have a nice day!"
        ));
    }

    #[test]
    fn test_rendering_is_repeatable() {
        let (customer, restaurant, order) = fixtures();
        let invoice = Invoice {
            order_number: 1,
            customer: &customer,
            restaurant: &restaurant,
            order: &order,
            driver: None,
            currency: "R",
        };
        assert_eq!(invoice.render(), invoice.render());
    }

    #[test]
    fn test_format_amount_rounds_half_up() {
        assert_eq!(format_amount(1.005), "1.01");
        assert_eq!(format_amount(0.125), "0.13");
        assert_eq!(format_amount(9.995), "10.00");
        assert_eq!(format_amount(99.999), "100.00");
        assert_eq!(format_amount(2.344), "2.34");
        assert_eq!(format_amount(-2.345), "-2.35");
    }

    #[test]
    fn test_format_amount_pads_to_two_decimals() {
        assert_eq!(format_amount(0.0), "0.00");
        assert_eq!(format_amount(45.5), "45.50");
        assert_eq!(format_amount(111.0), "111.00");
        assert_eq!(format_amount(1_000_000.0), "1000000.00");
    }

    #[test]
    fn test_half_cent_price_on_invoice() {
        let (customer, restaurant, _) = fixtures();
        let order = Order {
            meals: vec![MealLine::new("Samoosa", 1, 1.005)],
            instructions: String::new(),
        };
        let invoice = Invoice {
            order_number: 2,
            customer: &customer,
            restaurant: &restaurant,
            order: &order,
            driver: None,
            currency: "R",
        };
        let text = invoice.render();
        assert!(text.contains("1 x Samoosa (R1.01)\n"));
        assert!(text.contains("Total: R1.01\n"));
    }

    #[test]
    fn test_empty_order_and_custom_currency() {
        let (customer, restaurant, _) = fixtures();
        let order = Order::default();
        let invoice = Invoice {
            order_number: 0,
            customer: &customer,
            restaurant: &restaurant,
            order: &order,
            driver: None,
            currency: "USD ",
        };
        let text = invoice.render();
        assert!(text.contains("in Cape Town:\nTotal: USD 0.00\n"));
        assert!(text.contains("Special instructions: \n\n"));
    }
}
