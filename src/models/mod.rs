//! Domain models shared by the API, validation, and store layers.

pub mod reservation;
pub mod table;

pub use reservation::{NewReservation, Reservation, ReservationStatus};
pub use table::{NewTable, Table};
