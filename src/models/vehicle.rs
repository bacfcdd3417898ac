//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle de la flota.
//! Mapea exactamente al schema PostgreSQL con primary key 'id'.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Vehicle principal - mapea exactamente a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: Uuid,
    pub name: String,
    pub capacity_kg: Decimal,
    pub tyres: i32,
    pub created_at: DateTime<Utc>,
}
