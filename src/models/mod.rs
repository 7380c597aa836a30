pub mod api;
pub mod user;
pub mod animal;
pub mod solicitud;
pub mod profile;

pub use api::ApiEnvelope;
pub use user::{Session, User};
pub use animal::Animal;
pub use solicitud::{AdoptionForm, NuevaSolicitud, Solicitud};
pub use profile::{Profile, UserStats};
