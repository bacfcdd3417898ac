use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{
    AvailabilityQuery, AvailableVehicleResponse, CreateVehicleRequest, VehicleResponse,
    VehicleStatsResponse,
};
use crate::dto::ApiResponse;
use crate::repositories::booking_repository::PgBookingRepository;
use crate::repositories::vehicle_repository::PgVehicleRepository;
use crate::repositories::{BookingStore, VehicleStore};
use crate::services::BookingService;
use crate::utils::errors::{field_error, not_found_error, validation_error, AppError};
use crate::utils::validation::{validate_datetime, validate_pincode, validate_positive};

pub struct VehicleController {
    vehicles: Arc<dyn VehicleStore>,
    service: BookingService,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        let vehicles: Arc<dyn VehicleStore> = Arc::new(PgVehicleRepository::new(pool.clone()));
        let bookings: Arc<dyn BookingStore> = Arc::new(PgBookingRepository::new(pool));
        Self {
            service: BookingService::new(vehicles.clone(), bookings),
            vehicles,
        }
    }

    pub async fn create(
        &self,
        request: CreateVehicleRequest,
    ) -> Result<ApiResponse<VehicleResponse>, AppError> {
        request.validate()?;

        let capacity_kg = Decimal::from_f64_retain(request.capacity_kg)
            .ok_or_else(|| validation_error("capacity_kg", "capacity must be a valid number"))?;

        let vehicle = self
            .vehicles
            .create(request.name.trim().to_string(), capacity_kg, request.tyres)
            .await?;

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            "Vehículo creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<VehicleResponse, AppError> {
        let vehicle = self
            .vehicles
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Vehicle", &id.to_string()))?;

        Ok(VehicleResponse::from(vehicle))
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.vehicles.list_all().await?;

        Ok(vehicles.into_iter().map(VehicleResponse::from).collect())
    }

    /// Búsqueda de vehículos disponibles para una ruta y un horario
    pub async fn search_available(
        &self,
        query: AvailabilityQuery,
    ) -> Result<Vec<AvailableVehicleResponse>, AppError> {
        validate_pincode(&query.from_pincode).map_err(|e| field_error("from_pincode", e))?;
        validate_pincode(&query.to_pincode).map_err(|e| field_error("to_pincode", e))?;
        validate_positive(query.capacity_required)
            .map_err(|e| field_error("capacity_required", e))?;

        let start_time =
            validate_datetime(&query.start_time).map_err(|e| field_error("start_time", e))?;
        if start_time <= Utc::now() {
            return Err(validation_error("start_time", "start time must be in the future"));
        }

        let capacity_required = Decimal::from_f64_retain(query.capacity_required)
            .ok_or_else(|| validation_error("capacity_required", "capacity must be a valid number"))?;

        let (vehicles, estimated_ride_duration_hours) = self
            .service
            .search_available_vehicles(
                capacity_required,
                &query.from_pincode,
                &query.to_pincode,
                start_time,
            )
            .await?;

        Ok(vehicles
            .into_iter()
            .map(|v| AvailableVehicleResponse::from_vehicle(v, estimated_ride_duration_hours))
            .collect())
    }

    pub async fn stats(&self, id: Uuid) -> Result<VehicleStatsResponse, AppError> {
        let stats = self.service.vehicle_stats(id, Utc::now()).await?;

        Ok(VehicleStatsResponse {
            total_bookings: stats.total_bookings,
            active_bookings: stats.active_bookings,
            completed_bookings: stats.completed_bookings,
        })
    }
}
