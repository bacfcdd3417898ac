use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dto::vehicle_dto::VehicleResponse;
use crate::models::booking::Booking;
use crate::models::vehicle::Vehicle;

// Request para reservar un vehículo
#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub vehicle_id: String,
    pub from_pincode: String,
    pub to_pincode: String,
    pub start_time: String,
    pub customer_id: String,
}

// Query para listar reservas
#[derive(Debug, Deserialize)]
pub struct BookingListQuery {
    pub customer_id: Option<String>,
}

// Response de reserva, con los datos del vehículo asociado
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub vehicle: VehicleResponse,
    pub customer_id: String,
    pub from_pincode: String,
    pub to_pincode: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub estimated_ride_duration_hours: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

impl BookingResponse {
    pub fn from_parts(booking: Booking, vehicle: Vehicle) -> Self {
        Self {
            id: booking.id,
            vehicle: VehicleResponse::from(vehicle),
            customer_id: booking.customer_id,
            from_pincode: booking.from_pincode,
            to_pincode: booking.to_pincode,
            start_time: booking.start_time,
            end_time: booking.end_time,
            estimated_ride_duration_hours: booking.estimated_ride_duration_hours,
            status: booking.status,
            created_at: booking.created_at,
        }
    }
}
