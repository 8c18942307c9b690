// Service exports
pub mod cricbuzz;

pub use cricbuzz::{CricbuzzClient, CricbuzzError, API_HOST_HEADER, API_KEY_HEADER};
