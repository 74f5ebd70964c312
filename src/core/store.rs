//! Record store: the ordered rainfall collection plus its persisted copy.
//!
//! Every mutation writes the full JSON snapshot under [`RECORDS_KEY`]
//! first and replaces the in-memory list only once that write succeeded.
//! Mutations require a privileged [`Session`].

use crate::core::session::Session;
use crate::db::storage::{RECORDS_KEY, Storage};
use crate::errors::{AppError, AppResult};
use crate::models::record::{RainfallRecord, RecordFields};
use rand::Rng;

const ID_LEN: usize = 9;
const ID_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

pub struct RecordStore<S> {
    records: Vec<RainfallRecord>, // newest first
    storage: S,
}

impl<S: Storage> RecordStore<S> {
    /// Read the persisted collection. A missing key or unparsable payload
    /// starts an empty collection instead of failing.
    pub fn load(storage: S) -> AppResult<Self> {
        let records = match storage.get(RECORDS_KEY)? {
            None => Vec::new(),
            Some(raw) => match serde_json::from_str::<Vec<RainfallRecord>>(&raw) {
                Ok(list) => list,
                Err(e) => {
                    tracing::warn!(error = %e, "stored records are corrupt, starting empty");
                    Vec::new()
                }
            },
        };
        tracing::debug!(count = records.len(), "record store loaded");
        Ok(Self { records, storage })
    }

    /// Newest-first snapshot.
    pub fn list(&self) -> &[RainfallRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&RainfallRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn create<P, T>(
        &mut self,
        session: &Session<P, T>,
        fields: RecordFields,
    ) -> AppResult<RainfallRecord> {
        ensure_privileged(session)?;
        fields.validate()?;

        let record = RainfallRecord::from_fields(self.fresh_id(), fields);
        let mut next = Vec::with_capacity(self.records.len() + 1);
        next.push(record.clone());
        next.extend(self.records.iter().cloned());
        self.commit(next)?;

        tracing::info!(id = %record.id, date = %record.date, amount = record.amount, "record created");
        Ok(record)
    }

    /// Full replace of the record with `id`, keeping its position.
    pub fn update<P, T>(
        &mut self,
        session: &Session<P, T>,
        id: &str,
        fields: RecordFields,
    ) -> AppResult<RainfallRecord> {
        ensure_privileged(session)?;
        fields.validate()?;

        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        let updated = RainfallRecord::from_fields(id.to_string(), fields);
        let mut next = self.records.clone();
        next[pos] = updated.clone();
        self.commit(next)?;

        tracing::info!(id, "record updated");
        Ok(updated)
    }

    /// Deleting an absent id is a no-op and does not touch storage.
    pub fn delete<P, T>(&mut self, session: &Session<P, T>, id: &str) -> AppResult<()> {
        ensure_privileged(session)?;

        if self.get(id).is_none() {
            tracing::debug!(id, "delete: no such record");
            return Ok(());
        }

        let next: Vec<_> = self.records.iter().filter(|r| r.id != id).cloned().collect();
        self.commit(next)?;

        tracing::info!(id, "record deleted");
        Ok(())
    }

    /// Write `next` to storage, then make it the in-memory list.
    /// On a failed write the in-memory list is left as it was.
    fn commit(&mut self, next: Vec<RainfallRecord>) -> AppResult<()> {
        let json = serde_json::to_string(&next)?;
        self.storage.set(RECORDS_KEY, &json)?;
        self.records = next;
        Ok(())
    }

    fn fresh_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let id: String = (0..ID_LEN)
                .map(|_| ID_CHARSET[rng.gen_range(0..ID_CHARSET.len())] as char)
                .collect();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

fn ensure_privileged<P, T>(session: &Session<P, T>) -> AppResult<()> {
    if session.is_privileged() {
        Ok(())
    } else {
        tracing::warn!("mutation refused: session is not privileged");
        Err(AppError::Unauthorized)
    }
}
