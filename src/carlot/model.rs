use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

const CAR_ID_PREFIX: char = 'C';
const CAR_ID_DIGITS: usize = 3;
const CUSTOMER_ID_PREFIX: &str = "CUS";

/// A rentable car.
///
/// `available` and `rented_by` together form the rental status: a car is either
/// available with an empty `rented_by`, or rented with the customer's name in it.
/// Use [`Car::mark_rented`] and [`Car::mark_returned`] to move between the two.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub car_id: String,
    pub brand: String,
    pub model: String,
    pub price_per_day: f64,
    pub image_url: String,
    pub available: bool,
    pub rented_by: String,
}

impl Car {
    pub fn new(
        car_id: impl Into<String>,
        brand: impl Into<String>,
        model: impl Into<String>,
        price_per_day: f64,
        image_url: impl Into<String>,
    ) -> Self {
        Self {
            car_id: car_id.into(),
            brand: brand.into(),
            model: model.into(),
            price_per_day,
            image_url: image_url.into(),
            available: true,
            rented_by: String::new(),
        }
    }

    /// Case-insensitive ID comparison, the one matching rule used for lookup and removal.
    pub fn matches_id(&self, car_id: &str) -> bool {
        self.car_id.eq_ignore_ascii_case(car_id)
    }

    pub fn is_rented(&self) -> bool {
        !self.available
    }

    pub fn mark_rented(&mut self, customer_name: impl Into<String>) {
        self.available = false;
        self.rented_by = customer_name.into();
    }

    pub fn mark_returned(&mut self) {
        self.available = true;
        self.rented_by.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: String,
    pub name: String,
}

impl Customer {
    /// `ordinal` is the 1-based count of customers created so far, including this one.
    pub fn new(ordinal: usize, name: impl Into<String>) -> Self {
        Self {
            customer_id: format!("{}{}", CUSTOMER_ID_PREFIX, ordinal),
            name: name.into(),
        }
    }
}

/// One rent event. Holds a snapshot of the car as it was handed out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub car: Car,
    pub customer: Customer,
    pub days: i64,
    pub rented_at: DateTime<Utc>,
}

impl Rental {
    pub fn new(car: Car, customer: Customer, days: i64) -> Self {
        Self {
            car,
            customer,
            days,
            rented_at: Utc::now(),
        }
    }
}

/// Formats a sequence number as a car ID: `C` followed by at least three digits.
pub fn format_car_id(sequence: u32) -> String {
    format!("{}{:0width$}", CAR_ID_PREFIX, sequence, width = CAR_ID_DIGITS)
}

/// Returns the numeric suffix of IDs shaped exactly like `C007`.
///
/// IDs with another prefix, another case, or a different digit count yield `None`.
pub fn car_id_sequence(car_id: &str) -> Option<u32> {
    let digits = car_id.strip_prefix(CAR_ID_PREFIX)?;
    if digits.len() != CAR_ID_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
