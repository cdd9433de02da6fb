//! # Record Store
//!
//! Owns the fleet's in-memory state and enforces the rental transitions.
//!
//! - `cars`: the persisted collection, in load order then append order
//! - `customers`, `rentals`: append-only history, never persisted
//! - `next_sequence`: the car ID counter, seeded from the persisted IDs
//!
//! Every mutation rewrites the whole store through [`CarStore::save`] before
//! returning. If that save fails the in-memory change has already happened and
//! the caller gets a persistence error, so it knows memory and disk disagree.

use crate::error::{CarlotError, Result};
use crate::model::{car_id_sequence, format_car_id, Car, Customer, Rental};
use crate::store::CarStore;

const FIRST_SEQUENCE: u32 = 1;

pub struct RecordStore<S: CarStore> {
    store: S,
    cars: Vec<Car>,
    customers: Vec<Customer>,
    rentals: Vec<Rental>,
    next_sequence: u32,
}

impl<S: CarStore> RecordStore<S> {
    /// Hydrate from `store`.
    ///
    /// A store that fails to load (corrupt line, unreadable file) is treated as
    /// empty: every car read so far is dropped and IDs restart at `C001`.
    pub fn open(store: S) -> Self {
        let cars = match store.load() {
            Ok(cars) => cars,
            Err(e) => {
                tracing::warn!("Discarding persisted cars, starting empty: {}", e);
                Vec::new()
            }
        };
        let next_sequence = next_sequence_after(&cars);
        tracing::info!(
            cars = cars.len(),
            next_id = %format_car_id(next_sequence),
            "record store opened"
        );

        Self {
            store,
            cars,
            customers: Vec::new(),
            rentals: Vec::new(),
            next_sequence,
        }
    }

    pub fn list_cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn find_car(&self, car_id: &str) -> Option<&Car> {
        self.cars.iter().find(|c| c.matches_id(car_id))
    }

    /// The ID the next [`add_car`](Self::add_car) will assign.
    pub fn next_car_id(&self) -> String {
        format_car_id(self.next_sequence)
    }

    /// Appends a new available car. Arguments are taken as given.
    pub fn add_car(
        &mut self,
        brand: impl Into<String>,
        model: impl Into<String>,
        price_per_day: f64,
        image_url: impl Into<String>,
    ) -> Result<Car> {
        let car_id = format_car_id(self.next_sequence);
        self.next_sequence += 1;

        let car = Car::new(car_id, brand, model, price_per_day, image_url);
        self.cars.push(car.clone());
        tracing::debug!(car_id = %car.car_id, "car added");

        self.persist()?;
        Ok(car)
    }

    pub fn delete_car(&mut self, car_id: &str) -> Result<()> {
        let car = self
            .find_car(car_id)
            .ok_or_else(|| CarlotError::CarNotFound(car_id.to_string()))?;
        if car.is_rented() {
            return Err(CarlotError::CarRented(car.car_id.clone()));
        }

        self.cars.retain(|c| !c.matches_id(car_id));
        tracing::debug!(car_id, "car deleted");

        self.persist()
    }

    /// Rents an available car and returns the total charge (`days * price_per_day`).
    ///
    /// Checks run in a fixed order: existence, availability, `days`, customer name.
    pub fn rent_car(&mut self, car_id: &str, customer_name: &str, days: i64) -> Result<f64> {
        let position = self.position(car_id)?;
        if self.cars[position].is_rented() {
            return Err(CarlotError::AlreadyRented(self.cars[position].car_id.clone()));
        }
        if days <= 0 {
            return Err(CarlotError::InvalidDays(days));
        }
        let name = customer_name.trim();
        if name.is_empty() {
            return Err(CarlotError::MissingCustomer);
        }

        let customer = Customer::new(self.customers.len() + 1, name);
        self.customers.push(customer.clone());

        let car = &mut self.cars[position];
        car.mark_rented(customer.name.clone());
        let total = days as f64 * car.price_per_day;
        let snapshot = car.clone();
        tracing::debug!(
            car_id = %snapshot.car_id,
            customer_id = %customer.customer_id,
            days,
            total,
            "car rented"
        );
        self.rentals.push(Rental::new(snapshot, customer, days));

        self.persist()?;
        Ok(total)
    }

    /// Marks a car available again. Returning a car that is not rented is allowed
    /// and still rewrites the store.
    pub fn return_car(&mut self, car_id: &str) -> Result<()> {
        let position = self.position(car_id)?;
        self.cars[position].mark_returned();
        tracing::debug!(car_id = %self.cars[position].car_id, "car returned");

        self.persist()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    #[cfg(test)]
    pub(crate) fn customers(&self) -> &[Customer] {
        &self.customers
    }

    #[cfg(test)]
    pub(crate) fn rentals(&self) -> &[Rental] {
        &self.rentals
    }

    fn position(&self, car_id: &str) -> Result<usize> {
        self.cars
            .iter()
            .position(|c| c.matches_id(car_id))
            .ok_or_else(|| CarlotError::CarNotFound(car_id.to_string()))
    }

    fn persist(&mut self) -> Result<()> {
        if let Err(e) = self.store.save(&self.cars) {
            tracing::warn!("Persisting cars failed, memory and disk now differ: {}", e);
            return Err(e);
        }
        Ok(())
    }
}

/// Seeds the ID counter: one past the highest `C###` suffix, ignoring other IDs.
fn next_sequence_after(cars: &[Car]) -> u32 {
    cars.iter()
        .filter_map(|c| car_id_sequence(&c.car_id))
        .max()
        .map_or(FIRST_SEQUENCE, |max| max + 1)
}
