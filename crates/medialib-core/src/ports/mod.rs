//! Ports - 抽象化レイヤー
//!
//! カタログが外部に依存する部分（時刻・ID 生成・共有ストア）を trait として定義します。

pub mod catalog_store;
pub mod clock;
pub mod id_generator;

pub use self::catalog_store::CatalogStore;
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::id_generator::{IdGenerator, UlidGenerator};
