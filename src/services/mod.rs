//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: estimación
//! de duración de viajes, chequeo de disponibilidad y orquestación de
//! reservas.

pub mod booking_service;

pub use booking_service::*;
