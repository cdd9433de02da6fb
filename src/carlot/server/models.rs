//! Request and response bodies.
//!
//! Request fields arrive as strings (`"pricePerDay": "45"`), but plain JSON
//! numbers are accepted too. A missing field behaves like an empty one.

use crate::api::{NewCar, RentRequest};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCarBody {
    #[serde(default, deserialize_with = "lenient_string")]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub model: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub price_per_day: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub image_url: Option<String>,
}

impl From<AddCarBody> for NewCar {
    fn from(body: AddCarBody) -> Self {
        NewCar {
            brand: body.brand.unwrap_or_default(),
            model: body.model.unwrap_or_default(),
            price_per_day: body.price_per_day.unwrap_or_else(|| "0".to_string()),
            image_url: body.image_url.unwrap_or_default(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentBody {
    #[serde(default, deserialize_with = "lenient_string")]
    pub car_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub customer: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub days: Option<String>,
}

impl From<RentBody> for RentRequest {
    fn from(body: RentBody) -> Self {
        RentRequest {
            car_id: body.car_id.unwrap_or_default(),
            customer: body.customer.unwrap_or_default(),
            days: body.days.unwrap_or_else(|| "0".to_string()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RentResponse {
    pub message: String,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub cars: usize,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
