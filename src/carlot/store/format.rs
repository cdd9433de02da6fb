//! Line codec for the car file.
//!
//! One car per line, seven fields joined by `|`:
//!
//! ```text
//! carId|brand|model|pricePerDay|imageUrl|available|rentedBy
//! ```
//!
//! There is no escaping. A `|` inside a string field is replaced with a space on
//! the way out, so the first save of such a value is lossy and later saves are
//! stable.

use crate::error::{CarlotError, Result};
use crate::model::Car;
use std::borrow::Cow;

pub const FIELD_SEPARATOR: char = '|';

/// Fields a line must have; the trailing `rentedBy` may be absent.
const REQUIRED_FIELDS: usize = 6;

pub fn encode(cars: &[Car]) -> String {
    let mut out = String::new();
    for car in cars {
        out.push_str(&encode_line(car));
        out.push('\n');
    }
    out
}

pub fn encode_line(car: &Car) -> String {
    [
        sanitize(&car.car_id),
        sanitize(&car.brand),
        sanitize(&car.model),
        Cow::Owned(format_price(car.price_per_day)),
        sanitize(&car.image_url),
        Cow::Borrowed(if car.available { "true" } else { "false" }),
        sanitize(&car.rented_by),
    ]
    .join("|")
}

/// Decodes a whole file. Any bad line fails the entire decode.
pub fn decode(text: &str) -> Result<Vec<Car>> {
    let mut cars = Vec::new();
    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let car = decode_line(line).map_err(|reason| CarlotError::Corrupt {
            line: number + 1,
            reason,
        })?;
        cars.push(car);
    }
    Ok(cars)
}

pub fn decode_line(line: &str) -> std::result::Result<Car, String> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < REQUIRED_FIELDS {
        return Err(format!(
            "expected at least {} fields, found {}",
            REQUIRED_FIELDS,
            fields.len()
        ));
    }

    let price_per_day: f64 = fields[3]
        .trim()
        .parse()
        .map_err(|_| format!("invalid price {:?}", fields[3]))?;

    Ok(Car {
        car_id: fields[0].to_string(),
        brand: fields[1].to_string(),
        model: fields[2].to_string(),
        price_per_day,
        image_url: fields[4].to_string(),
        available: fields[5].eq_ignore_ascii_case("true"),
        rented_by: fields.get(6).map(|s| s.to_string()).unwrap_or_default(),
    })
}

fn sanitize(value: &str) -> Cow<'_, str> {
    if value.contains(FIELD_SEPARATOR) {
        Cow::Owned(value.replace(FIELD_SEPARATOR, " "))
    } else {
        Cow::Borrowed(value)
    }
}

// Debug keeps the decimal point on whole numbers (45.0) and round-trips exactly.
fn format_price(price: f64) -> String {
    format!("{:?}", price)
}
