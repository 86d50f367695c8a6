#![allow(non_snake_case)]

// Базовые модули
pub mod config;
pub mod error;
pub mod util;

// Значения и дерево с dotted-path адресацией
pub mod value;   // src/value.rs
pub mod mapping; // src/mapping/{mod,path,union}.rs

// Подписки (set/has/del события)
pub mod subs;

// Файл манифеста: resolve/load/save
pub mod store;   // src/store/{mod,open,save}.rs

// Удобные реэкспорты
pub use config::{StoreConfig, StoreOptions};
pub use error::{StoreError, FORCE_REQUIRED_MSG};
pub use mapping::{DelOptions, PathMapping};
pub use store::ManifestStore;
pub use subs::{Event, EventKind, SubscriptionHandle};
pub use value::{Map, Value};
