//! Lógica de reservas
//!
//! El núcleo del sistema: estimación determinística de duración de viaje,
//! detección de solapamiento de intervalos y el protocolo de creación de
//! reservas que evita el double-booking de un vehículo.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStats, BookingStatus, NewBooking};
use crate::models::vehicle::Vehicle;
use crate::repositories::{BookingStore, VehicleStore};
use crate::utils::errors::{validation_error, AppError};

/// Duración estimada del viaje en horas para un par de pincodes.
///
/// Proxy de distancia: diferencia numérica absoluta módulo 24 (viaje dentro
/// del mismo día), con piso de media hora para que origen == destino nunca
/// produzca una reserva de duración cero. Determinística y simétrica.
pub fn calculate_ride_duration(from_pincode: &str, to_pincode: &str) -> Result<f64, AppError> {
    let from: i64 = from_pincode
        .parse()
        .map_err(|_| validation_error("from_pincode", "pincode must be numeric"))?;
    let to: i64 = to_pincode
        .parse()
        .map_err(|_| validation_error("to_pincode", "pincode must be numeric"))?;

    let duration = ((to - from).abs() % 24) as f64;

    Ok(duration.max(0.5))
}

/// Fin del viaje: inicio + duración estimada
fn ride_end_time(start_time: DateTime<Utc>, duration_hours: f64) -> DateTime<Utc> {
    start_time + Duration::milliseconds((duration_hours * 3_600_000.0).round() as i64)
}

/// Test de solapamiento contra una reserva existente, con la convención
/// semiabierta [start, end):
///   (a) la existente empieza dentro de la ventana candidata
///   (b) la existente termina dentro de la ventana candidata
///   (c) la existente envuelve completamente a la candidata
fn conflicts_with(
    candidate_start: DateTime<Utc>,
    candidate_end: DateTime<Utc>,
    existing: &Booking,
) -> bool {
    if existing.start_time >= candidate_start && existing.start_time < candidate_end {
        return true;
    }
    if existing.end_time > candidate_start && existing.end_time <= candidate_end {
        return true;
    }
    existing.start_time <= candidate_start && existing.end_time >= candidate_end
}

/// Servicio de reservas sobre colaboradores de storage inyectados
pub struct BookingService {
    vehicles: Arc<dyn VehicleStore>,
    bookings: Arc<dyn BookingStore>,
}

impl BookingService {
    pub fn new(vehicles: Arc<dyn VehicleStore>, bookings: Arc<dyn BookingStore>) -> Self {
        Self { vehicles, bookings }
    }

    /// true si ninguna reserva no-cancelada del vehículo solapa la ventana
    /// candidata. Un error de storage se propaga, nunca se interpreta como
    /// "disponible".
    pub async fn validate_availability(
        &self,
        vehicle_id: Uuid,
        candidate_start: DateTime<Utc>,
        candidate_end: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        let existing = self.bookings.find_active_by_vehicle(vehicle_id).await?;

        Ok(!existing
            .iter()
            .any(|booking| conflicts_with(candidate_start, candidate_end, booking)))
    }

    /// Protocolo de creación de reserva, en una sola pasada y sin retries:
    /// resolver vehículo, derivar la ventana, re-chequear disponibilidad
    /// (la oferta pudo basarse en una lectura vieja) y persistir confirmada.
    pub async fn book_vehicle(
        &self,
        vehicle_id: Uuid,
        from_pincode: &str,
        to_pincode: &str,
        start_time: DateTime<Utc>,
        customer_id: &str,
    ) -> Result<(Booking, Vehicle), AppError> {
        let vehicle = self
            .vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        let estimated_ride_duration_hours = calculate_ride_duration(from_pincode, to_pincode)?;
        let end_time = ride_end_time(start_time, estimated_ride_duration_hours);

        let available = self
            .validate_availability(vehicle_id, start_time, end_time)
            .await?;
        if !available {
            return Err(AppError::Conflict(
                "El vehículo ya no está disponible para el horario solicitado".to_string(),
            ));
        }

        let booking = self
            .bookings
            .create(NewBooking {
                vehicle_id,
                customer_id: customer_id.to_string(),
                from_pincode: from_pincode.to_string(),
                to_pincode: to_pincode.to_string(),
                start_time,
                end_time,
                estimated_ride_duration_hours,
            })
            .await?;

        Ok((booking, vehicle))
    }

    /// Vehículos con capacidad suficiente y sin conflictos para la ventana
    /// derivada de la ruta. Escaneo lineal: un chequeo por candidato.
    pub async fn search_available_vehicles(
        &self,
        capacity_required: Decimal,
        from_pincode: &str,
        to_pincode: &str,
        start_time: DateTime<Utc>,
    ) -> Result<(Vec<Vehicle>, f64), AppError> {
        let estimated_ride_duration_hours = calculate_ride_duration(from_pincode, to_pincode)?;
        let end_time = ride_end_time(start_time, estimated_ride_duration_hours);

        let candidates = self.vehicles.find_by_min_capacity(capacity_required).await?;

        let mut available = Vec::new();
        for vehicle in candidates {
            if self
                .validate_availability(vehicle.id, start_time, end_time)
                .await?
            {
                available.push(vehicle);
            }
        }

        Ok((available, estimated_ride_duration_hours))
    }

    /// Todas las reservas (opcionalmente por cliente), con su vehículo
    pub async fn list_bookings(
        &self,
        customer_id: Option<&str>,
    ) -> Result<Vec<(Booking, Vehicle)>, AppError> {
        let bookings = self.bookings.list(customer_id).await?;

        let mut result = Vec::with_capacity(bookings.len());
        for booking in bookings {
            let vehicle = self
                .vehicles
                .find_by_id(booking.vehicle_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;
            result.push((booking, vehicle));
        }

        Ok(result)
    }

    /// Cancela una reserva si todavía no comenzó. Las canceladas quedan
    /// fuera del chequeo de disponibilidad por construcción, así que no
    /// hace falta ninguna acción compensatoria.
    pub async fn cancel_booking(
        &self,
        id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<(Booking, Vehicle), AppError> {
        let booking = self
            .bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        if booking.start_time <= now {
            return Err(AppError::InvalidState(
                "No se puede cancelar una reserva que ya comenzó".to_string(),
            ));
        }

        let cancelled = self
            .bookings
            .update_status(id, BookingStatus::Cancelled)
            .await?;

        let vehicle = self
            .vehicles
            .find_by_id(cancelled.vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        Ok((cancelled, vehicle))
    }

    /// Contadores de reservas de un vehículo: totales, confirmadas a futuro
    /// y completadas
    pub async fn vehicle_stats(
        &self,
        vehicle_id: Uuid,
        now: DateTime<Utc>,
    ) -> Result<BookingStats, AppError> {
        self.vehicles
            .find_by_id(vehicle_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vehículo no encontrado".to_string()))?;

        self.bookings.stats_for_vehicle(vehicle_id, now).await
    }
}
