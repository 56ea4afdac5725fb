use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::Config;
use crate::replica::Replica;

#[derive(Clone)]
pub struct AppState {
    pub replica: Arc<RwLock<Replica>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, tree_height: u8, root_ring_size: usize) -> Self {
        Self {
            replica: Arc::new(RwLock::new(Replica::new(tree_height, root_ring_size))),
            config: Arc::new(config),
        }
    }
}
