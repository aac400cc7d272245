mod convert;
mod convert_url;
mod health;

pub use convert::convert_handler;
pub use convert_url::convert_url_handler;
pub use health::health_handler;
