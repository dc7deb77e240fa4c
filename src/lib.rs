//! Client for the SDM web service: fetches a course, a semester or a
//! discipline in the background and publishes each result to an observable
//! slot.

pub mod client;
pub mod error;
pub mod settings;
pub mod slot;
pub mod structs;
pub mod transport;

pub use client::ResourceClient;
pub use error::{FetchError, TransportError};
pub use settings::Settings;
pub use slot::{ResultSlot, SlotWatcher};
pub use structs::{Course, Discipline, Resource, Semester};
pub use transport::{HttpTransport, ReqwestTransport, Request};
