use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStats, BookingStatus, NewBooking};
use crate::repositories::BookingStore;
use crate::utils::errors::AppError;

/// Nombre de la constraint de exclusión que impide solapamientos en la tabla
/// bookings (ver database::run_migrations). Una violación significa que otro
/// writer ganó la carrera entre el re-check y el INSERT.
const NO_OVERLAP_CONSTRAINT: &str = "bookings_no_overlap";

pub struct PgBookingRepository {
    pool: PgPool,
}

impl PgBookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookingStore for PgBookingRepository {
    async fn create(&self, booking: NewBooking) -> Result<Booking, AppError> {
        let id = Uuid::new_v4();

        let created = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (id, vehicle_id, customer_id, from_pincode, to_pincode,
                                  start_time, end_time, estimated_ride_duration_hours,
                                  status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'confirmed', $9)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(booking.vehicle_id)
        .bind(booking.customer_id)
        .bind(booking.from_pincode)
        .bind(booking.to_pincode)
        .bind(booking.start_time)
        .bind(booking.end_time)
        .bind(booking.estimated_ride_duration_hours)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.constraint() == Some(NO_OVERLAP_CONSTRAINT) => {
                AppError::Conflict(
                    "El vehículo ya no está disponible para el horario solicitado".to_string(),
                )
            }
            _ => AppError::Database(e),
        })?;

        Ok(created)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        Ok(booking)
    }

    async fn find_active_by_vehicle(&self, vehicle_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE vehicle_id = $1 AND status <> 'cancelled'",
        )
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(bookings)
    }

    async fn list(&self, customer_id: Option<&str>) -> Result<Vec<Booking>, AppError> {
        let bookings = match customer_id {
            Some(customer_id) => {
                sqlx::query_as::<_, Booking>(
                    "SELECT * FROM bookings WHERE customer_id = $1 ORDER BY created_at DESC",
                )
                .bind(customer_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, Booking>("SELECT * FROM bookings ORDER BY created_at DESC")
                    .fetch_all(&self.pool)
                    .await
            }
        }
        .map_err(AppError::Database)?;

        Ok(bookings)
    }

    async fn update_status(&self, id: Uuid, status: BookingStatus) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            "UPDATE bookings SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)?
        .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        Ok(booking)
    }

    async fn stats_for_vehicle(
        &self,
        vehicle_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<BookingStats, AppError> {
        let (total_bookings,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM bookings WHERE vehicle_id = $1")
                .bind(vehicle_id)
                .fetch_one(&self.pool)
                .await
                .map_err(AppError::Database)?;

        let (active_bookings,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM bookings WHERE vehicle_id = $1 AND status = 'confirmed' AND start_time >= $2",
        )
        .bind(vehicle_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        let (completed_bookings,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM bookings WHERE vehicle_id = $1 AND status = 'completed'",
        )
        .bind(vehicle_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;

        Ok(BookingStats {
            total_bookings,
            active_bookings,
            completed_bookings,
        })
    }
}
