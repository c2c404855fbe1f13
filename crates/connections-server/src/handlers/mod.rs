//! HTTP request handlers, split by domain.

mod demo;
mod enrichment;
mod proxy;
mod puzzle;
mod shared;
mod status;

pub use demo::hardcoded_game;
pub use enrichment::{game_data, images, pickup_lines};
pub use proxy::svc_proxy;
pub use puzzle::puzzle_answers;
pub use shared::missing_date;
pub use status::health;
