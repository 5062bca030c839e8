//! Web front end: three pages behind a sidebar, plus a JSON API.

pub mod handlers;
pub mod middleware;
pub mod page;
pub mod routes;
pub mod server;
pub mod state;

pub use state::AppState;
