pub mod booking_routes;
pub mod vehicle_routes;
