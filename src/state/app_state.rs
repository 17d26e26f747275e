use std::sync::Arc;

use crate::db::store::Store;
use crate::services::file_storage::FileStorage;

pub struct AppState {
    pub store: Arc<dyn Store>,
    pub files: FileStorage,
}
