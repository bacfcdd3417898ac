//! Capa de persistencia
//!
//! Define los colaboradores de storage como traits inyectables, con la
//! implementación PostgreSQL como backend real. Los servicios dependen de
//! los traits, no de sqlx, para poder sustituir el storage en los tests.

pub mod booking_repository;
pub mod vehicle_repository;

#[cfg(test)]
pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStats, BookingStatus, NewBooking};
use crate::models::vehicle::Vehicle;
use crate::utils::errors::AppError;

/// Colaborador de storage para vehículos
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn create(
        &self,
        name: String,
        capacity_kg: Decimal,
        tyres: i32,
    ) -> Result<Vehicle, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Vehicle>, AppError>;

    /// Vehículos con capacidad >= la requerida
    async fn find_by_min_capacity(&self, capacity_kg: Decimal) -> Result<Vec<Vehicle>, AppError>;

    async fn list_all(&self) -> Result<Vec<Vehicle>, AppError>;
}

/// Colaborador de storage para reservas
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Persiste la reserva con status confirmed; asigna id y created_at
    async fn create(&self, booking: NewBooking) -> Result<Booking, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError>;

    /// Reservas del vehículo con status != cancelled
    async fn find_active_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Booking>, AppError>;

    /// Todas las reservas, opcionalmente filtradas por cliente, más recientes primero
    async fn list(&self, customer_id: Option<&str>) -> Result<Vec<Booking>, AppError>;

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, AppError>;

    async fn stats_for_vehicle(
        &self,
        vehicle_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<BookingStats, AppError>;
}
