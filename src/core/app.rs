//! Application context: the store, the admin session and the startup
//! location, built once per run and handed to the command handlers.

use crate::config::Config;
use crate::core::geo::resolve_location;
use crate::core::session::{Session, StaticSecret};
use crate::core::store::RecordStore;
use crate::db::storage::SqliteStorage;
use crate::errors::AppResult;
use crate::insight::{GeminiClient, InsightAdapter};
use crate::models::location::GeoPoint;

pub struct App {
    pub config: Config,
    pub store: RecordStore<SqliteStorage>,
    pub session: Session<StaticSecret, SqliteStorage>,
    pub location: Option<GeoPoint>,
}

impl App {
    pub fn open(config: Config) -> AppResult<Self> {
        let store = RecordStore::load(SqliteStorage::open(&config.database)?)?;
        let session = Session::restore(
            StaticSecret::new(config.admin_password.clone()),
            SqliteStorage::open(&config.session_file)?,
        )?;
        let location = resolve_location(&config);

        Ok(Self {
            config,
            store,
            session,
            location,
        })
    }

    pub fn insights(&self) -> InsightAdapter<GeminiClient> {
        InsightAdapter::new(GeminiClient::from_config(&self.config))
    }
}
