use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub phone: String,
    pub address: String,
    pub location: String,
    pub email: String,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        location: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            address: address.into(),
            location: location.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Customer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Customer: {}\nEmail: {}\nPhone number: {}\nAddress: {}\nLocation: {}",
            self.name, self.email, self.phone, self.address, self.location
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub name: String,
    pub location: String,
    pub contact: String,
}

impl Restaurant {
    pub fn new(
        name: impl Into<String>,
        location: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            contact: contact.into(),
        }
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Restaurant Name: {}\nRestaurant Location: {}\nRestaurant Phone number: {}",
            self.name, self.location, self.contact
        )
    }
}

/// A driver as listed in the roster file. `load` is the number of orders
/// already assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    pub name: String,
    pub location: String,
    pub load: u32,
}

impl Driver {
    pub fn new(name: impl Into<String>, location: impl Into<String>, load: u32) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            load,
        }
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Driver: {}\nLocation: {}\nCurrent load: {}",
            self.name, self.location, self.load
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealLine {
    pub name: String,
    pub quantity: i32,
    pub unit_price: f64,
}

impl MealLine {
    pub fn new(name: impl Into<String>, quantity: i32, unit_price: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price
    }
}

/// Meals in entry order plus the free-text instructions captured after them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Order {
    pub meals: Vec<MealLine>,
    pub instructions: String,
}

impl Order {
    pub fn total(&self) -> f64 {
        // Start from +0.0; an empty f64 sum is -0.0 and would print as "-0.00".
        self.meals
            .iter()
            .fold(0.0, |total, meal| total + meal.line_total())
    }

    pub fn meal_count(&self) -> usize {
        self.meals.len()
    }
}
