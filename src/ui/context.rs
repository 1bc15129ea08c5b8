use std::sync::Arc;

use flume::Sender;

use crate::{event::events::Event, http::RecipeApi};

pub struct AppContext {
    pub api: Arc<dyn RecipeApi>,
    pub event_tx: Sender<Event>,
}
