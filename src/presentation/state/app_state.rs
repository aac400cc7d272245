use std::sync::Arc;

use crate::application::ports::{TextExtractor, WebImporter};
use crate::application::services::ConversionService;
use crate::presentation::config::Settings;

pub struct AppState<E, W>
where
    E: TextExtractor,
    W: WebImporter,
{
    pub conversion_service: Arc<ConversionService<E, W>>,
    pub settings: Settings,
}

impl<E, W> Clone for AppState<E, W>
where
    E: TextExtractor,
    W: WebImporter,
{
    fn clone(&self) -> Self {
        Self {
            conversion_service: Arc::clone(&self.conversion_service),
            settings: self.settings.clone(),
        }
    }
}
