//! HTTP request handlers and shared application state.
//!
//! Handlers hold the state lock for the whole API call, which serializes every
//! request against the single record store.

use super::errors::ApiError;
use super::models::{AddCarBody, HealthResponse, MessageResponse, RentBody, RentResponse};
use crate::api::CarlotApi;
use crate::model::Car;
use crate::store::CarStore;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use parking_lot::Mutex;
use std::sync::Arc;

/// Shared application state passed to every handler via Axum's `State` extractor.
pub struct AppState<S: CarStore> {
    pub api: Arc<Mutex<CarlotApi<S>>>,
}

impl<S: CarStore> AppState<S> {
    pub fn new(api: CarlotApi<S>) -> Self {
        Self {
            api: Arc::new(Mutex::new(api)),
        }
    }
}

impl<S: CarStore> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
        }
    }
}

fn headline(result: &crate::api::CmdResult, fallback: &str) -> String {
    result.headline().unwrap_or(fallback).to_string()
}

/// `GET /health`
pub async fn health<S: CarStore>(State(state): State<AppState<S>>) -> Json<HealthResponse> {
    let cars = state.api.lock().car_count();
    Json(HealthResponse {
        status: "ok".to_string(),
        cars,
    })
}

/// `GET /api/cars`
pub async fn list_cars<S: CarStore>(State(state): State<AppState<S>>) -> Json<Vec<Car>> {
    let result = state.api.lock().list_cars();
    Json(result.listed_cars)
}

/// `GET /api/cars/:car_id`
pub async fn get_car<S: CarStore>(
    State(state): State<AppState<S>>,
    Path(car_id): Path<String>,
) -> Result<Json<Car>, ApiError> {
    let result = state.api.lock().get_car(&car_id)?;
    result
        .listed_cars
        .into_iter()
        .next()
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Car not found: {}", car_id)))
}

/// `POST /api/cars`
pub async fn add_car<S: CarStore>(
    State(state): State<AppState<S>>,
    body: Result<Json<AddCarBody>, JsonRejection>,
) -> Result<Json<Car>, ApiError> {
    let Json(body) = body?;
    let result = state.api.lock().add_car(body.into())?;
    let car = result
        .affected_cars
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Internal("Car was not created".to_string()))?;
    tracing::info!(car_id = %car.car_id, "car added over http");
    Ok(Json(car))
}

/// `DELETE /api/cars/:car_id`
pub async fn delete_car<S: CarStore>(
    State(state): State<AppState<S>>,
    Path(car_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let result = state.api.lock().delete_car(&car_id)?;
    Ok(Json(MessageResponse {
        message: headline(&result, crate::api::MSG_DELETED),
    }))
}

/// `POST /api/rent`
pub async fn rent_car<S: CarStore>(
    State(state): State<AppState<S>>,
    body: Result<Json<RentBody>, JsonRejection>,
) -> Result<Json<RentResponse>, ApiError> {
    let Json(body) = body?;
    let result = state.api.lock().rent_car(body.into())?;
    Ok(Json(RentResponse {
        message: headline(&result, crate::api::MSG_RENTED),
        total: result.total.unwrap_or_default(),
    }))
}

/// `POST /api/return/:car_id`
pub async fn return_car<S: CarStore>(
    State(state): State<AppState<S>>,
    Path(car_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let result = state.api.lock().return_car(&car_id)?;
    Ok(Json(MessageResponse {
        message: headline(&result, crate::api::MSG_RETURNED),
    }))
}
