//! Storage en memoria para tests
//!
//! Implementaciones de los traits de storage sobre colecciones protegidas
//! con RwLock. Sin garantías transaccionales: modelan el contrato mínimo
//! del colaborador de persistencia.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStats, BookingStatus, NewBooking};
use crate::models::vehicle::Vehicle;
use crate::repositories::{BookingStore, VehicleStore};
use crate::utils::errors::AppError;

#[derive(Default)]
pub struct InMemoryVehicleStore {
    vehicles: RwLock<Vec<Vehicle>>,
}

impl InMemoryVehicleStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl VehicleStore for InMemoryVehicleStore {
    async fn create(
        &self,
        name: String,
        capacity_kg: Decimal,
        tyres: i32,
    ) -> Result<Vehicle, AppError> {
        let vehicle = Vehicle {
            id: Uuid::new_v4(),
            name,
            capacity_kg,
            tyres,
            created_at: Utc::now(),
        };
        self.vehicles.write().await.push(vehicle.clone());
        Ok(vehicle)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError> {
        Ok(self
            .vehicles
            .read()
            .await
            .iter()
            .find(|v| v.id == id)
            .cloned())
    }

    async fn find_by_min_capacity(&self, capacity_kg: Decimal) -> Result<Vec<Vehicle>, AppError> {
        Ok(self
            .vehicles
            .read()
            .await
            .iter()
            .filter(|v| v.capacity_kg >= capacity_kg)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError> {
        let mut vehicles: Vec<Vehicle> = self.vehicles.read().await.clone();
        vehicles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(vehicles)
    }
}

#[derive(Default)]
pub struct InMemoryBookingStore {
    bookings: RwLock<Vec<Booking>>,
}

impl InMemoryBookingStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BookingStore for InMemoryBookingStore {
    async fn create(&self, booking: NewBooking) -> Result<Booking, AppError> {
        let created = Booking {
            id: Uuid::new_v4(),
            vehicle_id: booking.vehicle_id,
            customer_id: booking.customer_id,
            from_pincode: booking.from_pincode,
            to_pincode: booking.to_pincode,
            start_time: booking.start_time,
            end_time: booking.end_time,
            estimated_ride_duration_hours: booking.estimated_ride_duration_hours,
            status: BookingStatus::Confirmed.as_str().to_string(),
            created_at: Utc::now(),
        };
        self.bookings.write().await.push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        Ok(self
            .bookings
            .read()
            .await
            .iter()
            .find(|b| b.id == id)
            .cloned())
    }

    async fn find_active_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Booking>, AppError> {
        Ok(self
            .bookings
            .read()
            .await
            .iter()
            .filter(|b| b.vehicle_id == vehicle_id && b.status != BookingStatus::Cancelled.as_str())
            .cloned()
            .collect())
    }

    async fn list(&self, customer_id: Option<&str>) -> Result<Vec<Booking>, AppError> {
        let mut bookings: Vec<Booking> = self
            .bookings
            .read()
            .await
            .iter()
            .filter(|b| customer_id.map_or(true, |c| b.customer_id == c))
            .cloned()
            .collect();
        bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(bookings)
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, AppError> {
        let mut bookings = self.bookings.write().await;
        let booking = bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;
        booking.status = status.as_str().to_string();
        Ok(booking.clone())
    }

    async fn stats_for_vehicle(
        &self,
        vehicle_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<BookingStats, AppError> {
        let bookings = self.bookings.read().await;
        let for_vehicle: Vec<&Booking> =
            bookings.iter().filter(|b| b.vehicle_id == vehicle_id).collect();

        Ok(BookingStats {
            total_bookings: for_vehicle.len() as i64,
            active_bookings: for_vehicle
                .iter()
                .filter(|b| {
                    b.status == BookingStatus::Confirmed.as_str() && b.start_time >= now
                })
                .count() as i64,
            completed_bookings: for_vehicle
                .iter()
                .filter(|b| b.status == BookingStatus::Completed.as_str())
                .count() as i64,
        })
    }
}
