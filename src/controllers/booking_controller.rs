use std::sync::Arc;

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::booking_dto::{BookingListQuery, BookingResponse, CreateBookingRequest};
use crate::dto::ApiResponse;
use crate::repositories::booking_repository::PgBookingRepository;
use crate::repositories::vehicle_repository::PgVehicleRepository;
use crate::repositories::{BookingStore, VehicleStore};
use crate::services::BookingService;
use crate::utils::errors::{field_error, validation_error, AppError};
use crate::utils::validation::{
    validate_datetime, validate_not_empty, validate_pincode, validate_uuid,
};

pub struct BookingController {
    service: BookingService,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        let vehicles: Arc<dyn VehicleStore> = Arc::new(PgVehicleRepository::new(pool.clone()));
        let bookings: Arc<dyn BookingStore> = Arc::new(PgBookingRepository::new(pool));
        Self {
            service: BookingService::new(vehicles, bookings),
        }
    }

    pub async fn create(
        &self,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        let vehicle_id =
            validate_uuid(&request.vehicle_id).map_err(|e| field_error("vehicle_id", e))?;
        validate_pincode(&request.from_pincode).map_err(|e| field_error("from_pincode", e))?;
        validate_pincode(&request.to_pincode).map_err(|e| field_error("to_pincode", e))?;
        validate_not_empty(&request.customer_id).map_err(|e| field_error("customer_id", e))?;

        let start_time =
            validate_datetime(&request.start_time).map_err(|e| field_error("start_time", e))?;
        if start_time <= Utc::now() {
            return Err(validation_error("start_time", "start time must be in the future"));
        }

        let (booking, vehicle) = self
            .service
            .book_vehicle(
                vehicle_id,
                &request.from_pincode,
                &request.to_pincode,
                start_time,
                request.customer_id.trim(),
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            BookingResponse::from_parts(booking, vehicle),
            "Reserva creada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, query: BookingListQuery) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = self
            .service
            .list_bookings(query.customer_id.as_deref())
            .await?;

        Ok(bookings
            .into_iter()
            .map(|(booking, vehicle)| BookingResponse::from_parts(booking, vehicle))
            .collect())
    }

    pub async fn cancel(&self, id: Uuid) -> Result<ApiResponse<BookingResponse>, AppError> {
        let (booking, vehicle) = self.service.cancel_booking(id, Utc::now()).await?;

        Ok(ApiResponse::success_with_message(
            BookingResponse::from_parts(booking, vehicle),
            "Reserva cancelada exitosamente".to_string(),
        ))
    }
}
