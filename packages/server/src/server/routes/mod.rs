// HTTP routes
pub mod health;
pub mod linkedin;
pub mod value;

pub use health::*;
pub use linkedin::*;
pub use value::*;

use serde::Serialize;

/// Error body for non-2xx responses.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}
