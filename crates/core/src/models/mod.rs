//! Record types and their request DTOs.
//!
//! Entity structs are what the store holds and what the API returns; DTOs
//! are the create/update payloads accepted at the write boundary. All of
//! them use camelCase field names on the wire.

pub mod activity;
pub mod installation;
pub mod technician;
pub mod ticket;

pub use activity::{Activity, NewActivity};
pub use installation::{CreateInstallation, Installation, Inverter, Panel, UpdateInstallation};
pub use technician::Technician;
pub use ticket::{CreateTicket, InternalNote, NewNote, NewPart, PartUsed, Ticket, UpdateTicket};
