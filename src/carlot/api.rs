//! # API Facade
//!
//! The API layer is a **thin facade** over the record store. It is the single
//! entry point for every carlot client, whether that is the CLI or the HTTP
//! server.
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Validates raw input** the way every client must: parses prices and day
//!   counts from text, trims names, rejects blank car details
//! - **Dispatches** to the matching [`RecordStore`] operation
//! - **Returns structured types** (`Result<CmdResult>`) with cars, totals and
//!   human-readable messages
//!
//! The record store itself accepts whatever it is given when adding a car, so
//! clients that skip this facade also skip that validation.
//!
//! ## What the API Does NOT Do
//!
//! - **Rental rules**: those belong to [`RecordStore`]
//! - **I/O**: no stdout, no HTTP status codes
//! - **Locking**: a multi-threaded client wraps the facade in its own mutex
//!
//! ## Generic Over CarStore
//!
//! `CarlotApi<S: CarStore>` is generic over the storage backend:
//! - Production: `CarlotApi<FileStore>`
//! - Testing: `CarlotApi<InMemoryStore>`

use crate::error::{CarlotError, Result};
use crate::model::Car;
use crate::records::RecordStore;
use crate::store::CarStore;

pub const MSG_DELETED: &str = "Deleted successfully";
pub const MSG_RENTED: &str = "Rented successfully";
pub const MSG_RETURNED: &str = "Returned successfully";
pub const MSG_INVALID_DETAILS: &str = "Enter valid car details";
pub const MSG_INVALID_PRICE: &str = "Invalid price";
pub const MSG_INVALID_DAYS: &str = "Invalid days";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Cars created or changed by the command, in their state after it ran
    pub affected_cars: Vec<Car>,
    pub listed_cars: Vec<Car>,
    /// Charge for a rental
    pub total: Option<f64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_cars(mut self, cars: Vec<Car>) -> Self {
        self.affected_cars = cars;
        self
    }

    pub fn with_listed_cars(mut self, cars: Vec<Car>) -> Self {
        self.listed_cars = cars;
        self
    }

    pub fn with_total(mut self, total: f64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }

    /// The first message's text, the short confirmation clients show.
    pub fn headline(&self) -> Option<&str> {
        self.messages.first().map(|m| m.content.as_str())
    }
}

/// Raw car details as a client received them.
#[derive(Debug, Clone, Default)]
pub struct NewCar {
    pub brand: String,
    pub model: String,
    pub price_per_day: String,
    pub image_url: String,
}

/// Raw rent request as a client received it.
#[derive(Debug, Clone, Default)]
pub struct RentRequest {
    pub car_id: String,
    pub customer: String,
    pub days: String,
}

/// The main API facade for carlot operations.
pub struct CarlotApi<S: CarStore> {
    records: RecordStore<S>,
}

impl<S: CarStore> CarlotApi<S> {
    /// Opens the record store on `store`; corrupt data is logged and dropped.
    pub fn new(store: S) -> Self {
        Self {
            records: RecordStore::open(store),
        }
    }

    pub fn list_cars(&self) -> CmdResult {
        let cars = self.records.list_cars().to_vec();
        let mut result = CmdResult::default();
        if cars.is_empty() {
            result.add_message(CmdMessage::info("No cars in the fleet."));
        }
        result.with_listed_cars(cars)
    }

    pub fn get_car(&self, car_id: &str) -> Result<CmdResult> {
        let car_id = car_id.trim();
        let car = self
            .records
            .find_car(car_id)
            .cloned()
            .ok_or_else(|| CarlotError::CarNotFound(car_id.to_string()))?;
        Ok(CmdResult::default().with_listed_cars(vec![car]))
    }

    pub fn add_car(&mut self, input: NewCar) -> Result<CmdResult> {
        let brand = input.brand.trim();
        let model = input.model.trim();
        let image_url = input.image_url.trim();
        let price = parse_price(&input.price_per_day)?;

        if brand.is_empty() || model.is_empty() || image_url.is_empty() || !is_valid_price(price)
        {
            return Err(CarlotError::InvalidInput(MSG_INVALID_DETAILS.to_string()));
        }

        let car = self.records.add_car(brand, model, price, image_url)?;
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(format!(
                "Car added ({}): {} {}",
                car.car_id, car.brand, car.model
            )))
            .with_affected_cars(vec![car]))
    }

    pub fn delete_car(&mut self, car_id: &str) -> Result<CmdResult> {
        self.records.delete_car(car_id.trim())?;
        Ok(CmdResult::default().with_message(CmdMessage::success(MSG_DELETED)))
    }

    pub fn rent_car(&mut self, request: RentRequest) -> Result<CmdResult> {
        let car_id = request.car_id.trim();
        let customer = request.customer.trim();
        let days: i64 = request
            .days
            .parse()
            .map_err(|_| CarlotError::InvalidInput(MSG_INVALID_DAYS.to_string()))?;

        let total = self.records.rent_car(car_id, customer, days)?;
        let affected = self.records.find_car(car_id).cloned().into_iter().collect();
        Ok(CmdResult::default()
            .with_message(CmdMessage::success(MSG_RENTED))
            .with_affected_cars(affected)
            .with_total(total))
    }

    pub fn return_car(&mut self, car_id: &str) -> Result<CmdResult> {
        let car_id = car_id.trim();
        let was_rented = self
            .records
            .find_car(car_id)
            .map(Car::is_rented)
            .unwrap_or(false);

        self.records.return_car(car_id)?;

        let mut result = CmdResult::default().with_message(CmdMessage::success(MSG_RETURNED));
        if !was_rented {
            result.add_message(CmdMessage::warning(format!(
                "Car {} was not rented",
                car_id
            )));
        }
        let affected = self.records.find_car(car_id).cloned().into_iter().collect();
        Ok(result.with_affected_cars(affected))
    }

    pub fn car_count(&self) -> usize {
        self.records.list_cars().len()
    }

    pub fn records(&self) -> &RecordStore<S> {
        &self.records
    }
}

fn parse_price(raw: &str) -> Result<f64> {
    raw.trim()
        .parse()
        .map_err(|_| CarlotError::InvalidInput(MSG_INVALID_PRICE.to_string()))
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price > 0.0
}
