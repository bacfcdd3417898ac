//! Modelo de Booking
//!
//! Este módulo contiene el struct Booking (reserva de un vehículo para un
//! intervalo de tiempo) y su ciclo de vida de estados.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Estado de la reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
        }
    }
}

/// Booking principal - mapea exactamente a la tabla bookings
///
/// Invariante: end_time > start_time. Para un mismo vehículo no pueden
/// coexistir dos reservas con status != cancelled cuyos intervalos
/// [start_time, end_time) se solapen.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Booking {
    pub id: Uuid,
    pub vehicle_id: Uuid,
    pub customer_id: String,
    pub from_pincode: String,
    pub to_pincode: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub estimated_ride_duration_hours: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Datos para crear una reserva nueva - el storage asigna id y created_at
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub vehicle_id: Uuid,
    pub customer_id: String,
    pub from_pincode: String,
    pub to_pincode: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub estimated_ride_duration_hours: f64,
}

/// Contadores de reservas por vehículo
#[derive(Debug, Clone, Serialize)]
pub struct BookingStats {
    pub total_bookings: i64,
    pub active_bookings: i64,
    pub completed_bookings: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_status_as_str() {
        assert_eq!(BookingStatus::Confirmed.as_str(), "confirmed");
        assert_eq!(BookingStatus::Completed.as_str(), "completed");
        assert_eq!(BookingStatus::Cancelled.as_str(), "cancelled");
    }
}
