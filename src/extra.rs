use arc_swap::ArcSwap;
use serde_json::{Map, Value};
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<ExtraFields> = LazyLock::new(ExtraFields::new);

/// Shared key/value data merged into the `extra` section of every record.
///
/// Cloning yields another handle onto the same store. Readers take a
/// snapshot without locking; [`ExtraFields::merge`] publishes a new map with
/// read-copy-update, so a handler never observes a half-applied merge.
#[derive(Clone, Default)]
pub struct ExtraFields {
    inner: Arc<ArcSwap<Map<String, Value>>>,
}

impl ExtraFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide store used by the default logger.
    pub fn global() -> ExtraFields {
        GLOBAL.clone()
    }

    /// Union `fields` into the store. Later merges overwrite existing keys.
    pub fn merge<I, K, V>(&self, fields: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let fields: Vec<(String, Value)> = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        if fields.is_empty() {
            return;
        }

        self.inner.rcu(|current| {
            let mut next = Map::clone(current);
            for (k, v) in &fields {
                next.insert(k.clone(), v.clone());
            }
            next
        });
    }

    /// Current contents of the store.
    pub fn snapshot(&self) -> Arc<Map<String, Value>> {
        self.inner.load_full()
    }

    pub fn get(&self, key: &str) -> Option<Value> {
        self.inner.load().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.inner.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Debug for ExtraFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ExtraFields").field(&*self.inner.load()).finish()
    }
}
