use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle::Vehicle;

// Request para crear un vehículo
// Rangos según las reglas de la flota: capacidad 1-50000 kg, 2-20 neumáticos
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVehicleRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,

    #[validate(range(min = 1.0, max = 50000.0))]
    pub capacity_kg: f64,

    #[validate(range(min = 2, max = 20))]
    pub tyres: i32,
}

// Query para buscar vehículos disponibles
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub capacity_required: f64,
    pub from_pincode: String,
    pub to_pincode: String,
    pub start_time: String,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub capacity_kg: f64,
    pub tyres: i32,
    pub created_at: DateTime<Utc>,
}

// Response de vehículo disponible, anotado con la duración estimada del viaje
#[derive(Debug, Serialize)]
pub struct AvailableVehicleResponse {
    pub id: Uuid,
    pub name: String,
    pub capacity_kg: f64,
    pub tyres: i32,
    pub created_at: DateTime<Utc>,
    pub estimated_ride_duration_hours: f64,
}

// Response de estadísticas de reservas de un vehículo
#[derive(Debug, Serialize)]
pub struct VehicleStatsResponse {
    pub total_bookings: i64,
    pub active_bookings: i64,
    pub completed_bookings: i64,
}

impl From<Vehicle> for VehicleResponse {
    fn from(vehicle: Vehicle) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            capacity_kg: vehicle.capacity_kg.to_string().parse().unwrap_or(0.0),
            tyres: vehicle.tyres,
            created_at: vehicle.created_at,
        }
    }
}

impl AvailableVehicleResponse {
    pub fn from_vehicle(vehicle: Vehicle, estimated_ride_duration_hours: f64) -> Self {
        Self {
            id: vehicle.id,
            name: vehicle.name,
            capacity_kg: vehicle.capacity_kg.to_string().parse().unwrap_or(0.0),
            tyres: vehicle.tyres,
            created_at: vehicle.created_at,
            estimated_ride_duration_hours,
        }
    }
}
