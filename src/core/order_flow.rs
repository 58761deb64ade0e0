use crate::core::capture::{capture_customer, capture_order, capture_restaurant};
use crate::core::invoice::Invoice;
use crate::core::location::{locations_match, MismatchChoice};
use crate::core::matcher::{DriverMatcher, MatchOutcome};
use crate::domain::model::{Customer, Driver};
use crate::domain::ports::{ConfigProvider, Console, OrderNumberSource, Storage};
use crate::utils::error::Result;
use serde::Serialize;

const FAREWELL: &str = "Thank you for using the app.\nHave a nice day!";
const COLLECTION_GREETING: &str = "We are looking forward to meeting you in person. See you soon!";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub order_number: u32,
    pub total: f64,
    pub driver: Option<Driver>,
    /// `None` when the invoice could not be written.
    pub invoice_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FlowOutcome {
    Completed(OrderSummary),
    /// Customer and restaurant cities differ. The run ends either way;
    /// `restart_requested` records whether the customer asked to try another city.
    LocationMismatch { restart_requested: bool },
    /// No driver could deliver and the customer chose not to collect.
    Declined,
}

#[derive(Debug, Clone, PartialEq)]
enum Fulfilment {
    Delivery(Driver),
    Collection,
    Abandoned,
}

fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Runs a single order from customer details through to the invoice.
pub struct OrderFlow<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> OrderFlow<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    pub fn run<K: Console, N: OrderNumberSource>(
        &self,
        console: &mut K,
        numbers: &mut N,
    ) -> Result<FlowOutcome> {
        tracing::info!("Starting new order");

        let customer = capture_customer(console)?;
        let restaurant = capture_restaurant(console)?;

        if !locations_match(&customer.location, &restaurant.location) {
            tracing::info!(
                "Customer city '{}' does not match restaurant city '{}'",
                customer.location,
                restaurant.location
            );
            return self.handle_location_mismatch(console);
        }

        let order_number = numbers.next_order_number();
        tracing::debug!("Assigned order number {}", order_number);
        console.say(&format!("\nYour order number is: {}", order_number))?;

        let order = capture_order(console)?;
        tracing::info!(
            "Captured {} meals totalling {:.2}",
            order.meal_count(),
            order.total()
        );

        let driver = match self.choose_fulfilment(console, &customer, &restaurant.location)? {
            Fulfilment::Delivery(driver) => Some(driver),
            Fulfilment::Collection => None,
            Fulfilment::Abandoned => return Ok(FlowOutcome::Declined),
        };

        let invoice = Invoice {
            order_number,
            customer: &customer,
            restaurant: &restaurant,
            order: &order,
            driver: driver.as_ref(),
            currency: self.config.currency(),
        };

        let invoice_path = match invoice.write_to(&self.storage, self.config.invoice_file()) {
            Ok(path) => {
                console.say(&format!("Invoice created as {}", self.config.invoice_file()))?;
                Some(path)
            }
            Err(e) => {
                tracing::error!("Failed to write invoice: {}", e);
                console.say(&format!("Error writing invoice: {}", e))?;
                None
            }
        };

        Ok(FlowOutcome::Completed(OrderSummary {
            order_number,
            total: order.total(),
            driver,
            invoice_path,
        }))
    }

    // Asking for a new city and then discarding it matches the established
    // behaviour of this gate: the customer must restart to change city.
    fn handle_location_mismatch<K: Console>(&self, console: &mut K) -> Result<FlowOutcome> {
        console.say(
            "\nSorry! Our drivers are too far away from you to be able to deliver to your location.",
        )?;
        let answer = console.prompt("Do you want to enter a new city? Type 'yes' or 'exit': ")?;

        match MismatchChoice::from_answer(&answer) {
            MismatchChoice::Exit => {
                console.say(&format!("\n{}", FAREWELL))?;
                Ok(FlowOutcome::LocationMismatch {
                    restart_requested: false,
                })
            }
            MismatchChoice::Restart => {
                console.say("\nPlease restart the program and enter the new city.")?;
                Ok(FlowOutcome::LocationMismatch {
                    restart_requested: true,
                })
            }
        }
    }

    fn choose_fulfilment<K: Console>(
        &self,
        console: &mut K,
        customer: &Customer,
        restaurant_location: &str,
    ) -> Result<Fulfilment> {
        let answer = console.prompt(&format!(
            "\nType 'yes' if you prefer your order to be delivered to {}, {} or 'no' to collect the order: ",
            customer.address, customer.location
        ))?;

        if !is_yes(&answer) {
            console.say(COLLECTION_GREETING)?;
            return Ok(Fulfilment::Collection);
        }

        let matcher = DriverMatcher::new(&self.storage, self.config.drivers_file());
        match matcher.find_driver(restaurant_location) {
            MatchOutcome::Found(driver) => {
                console.say(&format!(
                    "\n{} will deliver your order to {}, {}.",
                    driver.name, customer.address, customer.location
                ))?;
                Ok(Fulfilment::Delivery(driver))
            }
            MatchOutcome::SourceUnavailable(reason) => {
                console.say(&format!(
                    "Error reading {}: {}",
                    self.config.drivers_file(),
                    reason
                ))?;
                self.offer_collection(console)
            }
            MatchOutcome::NoneFound => self.offer_collection(console),
        }
    }

    fn offer_collection<K: Console>(&self, console: &mut K) -> Result<Fulfilment> {
        console.say(
            "\nSorry! No drivers are available to deliver to your area.\n\
             Do you want to collect the order yourself?\nType 'yes' or 'exit'",
        )?;
        let answer = console.prompt("")?;

        if is_yes(&answer) {
            console.say(COLLECTION_GREETING)?;
            Ok(Fulfilment::Collection)
        } else {
            console.say(FAREWELL)?;
            Ok(Fulfilment::Abandoned)
        }
    }
}
