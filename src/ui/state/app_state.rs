use std::sync::Arc;

use dioxus::prelude::{use_signal, Signal};

use crate::domain::entities::bike::Bike;
use crate::domain::entities::query::QueryState;

pub struct AppState {
    pub records: Signal<Arc<Vec<Bike>>>,
    pub load_failed: Signal<bool>,
    pub query: Signal<QueryState>,
    pub busy: Signal<bool>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            records: use_signal(|| Arc::new(Vec::<Bike>::new())),
            load_failed: use_signal(|| false),
            query: use_signal(QueryState::default),
            busy: use_signal(|| false),
            status: use_signal(|| "Loading catalog".to_string()),
        }
    }
}
