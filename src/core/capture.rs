use crate::domain::model::{Customer, MealLine, Order, Restaurant};
use crate::domain::ports::Console;
use crate::utils::error::{OrderError, Result};
use std::str::FromStr;

fn parse_number<T: FromStr>(field: &str, raw: &str) -> Result<T> {
    raw.trim()
        .parse()
        .map_err(|_| OrderError::InvalidNumberError {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

pub fn capture_customer<C: Console>(console: &mut C) -> Result<Customer> {
    console.say("=== Enter Customer Details ===")?;
    let name = console.prompt("Name: ")?;
    let email = console.prompt("Email: ")?;
    let phone = console.prompt("Phone: ")?;
    let address = console.prompt("Address: ")?;
    let location = console.prompt("Location (City): ")?;

    let customer = Customer::new(name, phone, address, location, email);
    console.say("\nBelow is your details")?;
    console.say(&customer.to_string())?;
    Ok(customer)
}

pub fn capture_restaurant<C: Console>(console: &mut C) -> Result<Restaurant> {
    console.say("\n=== Enter Restaurant Details ===")?;
    let name = console.prompt("Restaurant Name: ")?;
    let location = console.prompt("Location (City): ")?;
    let contact = console.prompt("Contact Number: ")?;

    let restaurant = Restaurant::new(name, location, contact);
    console.say("\nBelow is the restaurant's details")?;
    console.say(&restaurant.to_string())?;
    Ok(restaurant)
}

/// Reads the meal count, then name, quantity and price for each meal.
/// A non-numeric count, quantity or price aborts the whole order.
pub fn capture_meals<C: Console>(console: &mut C) -> Result<Vec<MealLine>> {
    let meal_count: usize = parse_number("meal count", &console.prompt("How many meals? ")?)?;
    let mut meals = Vec::new();

    for index in 0..meal_count {
        let name = console.prompt("Meal name: ")?;
        let quantity: i32 = parse_number("quantity", &console.prompt("Quantity: ")?)?;
        let unit_price: f64 = parse_number("price", &console.prompt("Price: ")?)?;

        tracing::debug!(
            "Meal {}: {} x {} at {:.2}",
            index + 1,
            quantity,
            name,
            unit_price
        );
        meals.push(MealLine::new(name, quantity, unit_price));
    }

    Ok(meals)
}

pub fn capture_order<C: Console>(console: &mut C) -> Result<Order> {
    let meals = capture_meals(console)?;
    let instructions = console.prompt("Special instructions: ")?;
    Ok(Order {
        meals,
        instructions,
    })
}
