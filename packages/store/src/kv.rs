/// Durable string key-value slots.
///
/// Implementations swallow their own failures: a read that cannot be served
/// is `None`, a write that cannot be applied is dropped after a warning.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str);

    fn remove(&self, key: &str);
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) {
        (**self).remove(key)
    }
}
