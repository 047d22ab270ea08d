use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;

use crate::core::errors::{Result, TfeError};
use crate::core::models::gpg_key::{
    GpgKey, GpgKeyCreateOptions, GpgKeyId, GpgKeyUpdateOptions, RegistryName,
    validate_registry_name,
};
use crate::core::traits::gpg_keys::GpgKeys;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    Create,
    Read,
    Update,
    Delete,
}

/// In-memory registry used as a test double for the HTTP client.
///
/// Key ids are handed out sequentially, so two different keys never share
/// one. Failures can be injected per operation.
#[derive(Default)]
pub struct MemoryGpgKeys {
    keys: Mutex<BTreeMap<(String, String), GpgKey>>,
    failures: Mutex<HashMap<Op, u16>>,
    calls: Mutex<Vec<Op>>,
}

impl MemoryGpgKeys {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every call of `op` fail with the given HTTP status.
    pub fn fail(&self, op: Op, status: u16) {
        self.failures.lock().unwrap().insert(op, status);
    }

    pub fn heal(&self, op: Op) {
        self.failures.lock().unwrap().remove(&op);
    }

    /// Delete a key behind the adapter's back.
    pub fn remove_out_of_band(&self, namespace: &str, key_id: &str) {
        self.keys
            .lock()
            .unwrap()
            .remove(&(namespace.to_string(), key_id.to_string()));
    }

    pub fn len(&self) -> usize {
        self.keys.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<Op> {
        self.calls.lock().unwrap().clone()
    }

    fn enter(&self, op: Op) -> Result<()> {
        self.calls.lock().unwrap().push(op);
        match self.failures.lock().unwrap().get(&op) {
            Some(404) => Err(TfeError::ResourceNotFound),
            Some(401) => Err(TfeError::Unauthorized),
            Some(status) => Err(TfeError::Remote {
                status: *status,
                detail: Some("injected failure".into()),
            }),
            None => Ok(()),
        }
    }

    fn entry(key_id: &GpgKeyId) -> (String, String) {
        (key_id.namespace.clone(), key_id.key_id.clone())
    }
}

impl GpgKeys for MemoryGpgKeys {
    fn create(
        &self,
        registry_name: RegistryName,
        options: &GpgKeyCreateOptions,
    ) -> Result<GpgKey> {
        self.enter(Op::Create)?;
        validate_registry_name(registry_name)?;
        options.validate()?;

        let mut keys = self.keys.lock().unwrap();
        let serial = self.calls.lock().unwrap().len();
        let key = GpgKey {
            id: format!("{serial}"),
            ascii_armor: options.ascii_armor.clone(),
            key_id: format!("{:016X}", 0x32966F3FB5AC0000u64 + serial as u64),
            namespace: options.namespace.clone(),
            source: Some(String::new()),
            source_url: None,
            trust_signature: Some(String::new()),
            created_at: Some(chrono::Utc::now()),
            updated_at: Some(chrono::Utc::now()),
        };
        keys.insert((key.namespace.clone(), key.key_id.clone()), key.clone());
        Ok(key)
    }

    fn read(&self, key_id: &GpgKeyId) -> Result<GpgKey> {
        self.enter(Op::Read)?;
        key_id.validate()?;
        self.keys
            .lock()
            .unwrap()
            .get(&Self::entry(key_id))
            .cloned()
            .ok_or(TfeError::ResourceNotFound)
    }

    fn update(&self, key_id: &GpgKeyId, options: &GpgKeyUpdateOptions) -> Result<GpgKey> {
        self.enter(Op::Update)?;
        key_id.validate()?;
        options.validate()?;

        let mut keys = self.keys.lock().unwrap();
        let mut key = keys
            .remove(&Self::entry(key_id))
            .ok_or(TfeError::ResourceNotFound)?;
        key.namespace = options.namespace.clone();
        key.updated_at = Some(chrono::Utc::now());
        keys.insert((key.namespace.clone(), key.key_id.clone()), key.clone());
        Ok(key)
    }

    fn delete(&self, key_id: &GpgKeyId) -> Result<()> {
        self.enter(Op::Delete)?;
        key_id.validate()?;
        self.keys
            .lock()
            .unwrap()
            .remove(&Self::entry(key_id))
            .map(|_| ())
            .ok_or(TfeError::ResourceNotFound)
    }
}
