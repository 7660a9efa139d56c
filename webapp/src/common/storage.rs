use gloo_console::error as console_error;
use gloo_storage::{LocalStorage, Storage};

use serde::{Deserialize, Serialize};

pub fn set_local_storage<T>(key: &str, value: T)
where
    T: Serialize,
{
    let key = format!("carnus_{}", key);

    LocalStorage::set(key.clone(), value)
        .unwrap_or_else(|err| console_error!(format!("Failed to set local storage {key}: {err}")))
}

// missing keys are the normal first-visit case, so this stays quiet
pub fn try_local_storage<T>(key: &str) -> Option<T>
where
    T: for<'a> Deserialize<'a>,
{
    LocalStorage::get(format!("carnus_{}", key)).ok()
}

pub fn delete_local_storage(key: &str) {
    LocalStorage::delete(format!("carnus_{}", key));
}
