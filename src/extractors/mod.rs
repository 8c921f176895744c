//! Extractors whose rejections are JSON `AppError` bodies rather than axum's plain text.

mod json_body;
mod restaurant_id;

pub use json_body::JsonBody;
pub use restaurant_id::RestaurantId;
