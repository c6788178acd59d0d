// The clients defined here are reqwest clients for the services this page talks to.

pub mod contentful;
pub mod registration_api;
pub mod sequel;

pub use contentful::{ContentfulClient, ContentfulSettings};
pub use registration_api::RegistrationApiClient;
pub use sequel::SequelClient;
