// Interface adapters: outbound clients, HTTP handlers, and page rendering.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
pub mod views;
