mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    CorsSettings, FetchSettings, LimitsSettings, LoggingSettings, ServerSettings, Settings,
};
