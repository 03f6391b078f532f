//! IdGenerator port - ID 生成の抽象化
//!
//! 呼び出し側が ID を持っていない場合に、カタログ内で衝突しない ID を発行します。
//! テスト容易性のために、trait として抽象化しています。
//!
//! # 実装
//! - **UlidGenerator**: ULID ベース（`media-<ULID>`）

use crate::domain::MediaId;
use crate::ports::Clock;
use ulid::Ulid;

/// IdGenerator は一意な MediaId を生成
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数スレッドから使える）
pub trait IdGenerator: Send + Sync {
    fn generate_media_id(&self) -> MediaId;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// Clock を使って現在時刻ベースの ULID を生成します。
/// テスト時は FixedClock で timestamp 部分を固定できます。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_media_id(&self) -> MediaId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        MediaId::from_ulid(Ulid::from_parts(timestamp_ms, rand::random()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{FixedClock, SystemClock};
    use chrono::{TimeZone, Utc};

    #[test]
    fn ulid_generator_generates_unique_ids() {
        let id_gen = UlidGenerator::new(SystemClock);

        let id1 = id_gen.generate_media_id();
        let id2 = id_gen.generate_media_id();
        let id3 = id_gen.generate_media_id();

        assert_ne!(id1, id2);
        assert_ne!(id2, id3);
        assert_ne!(id1, id3);
        assert!(id1.is_generated());
    }

    #[test]
    fn ulid_generator_with_fixed_clock_shares_timestamp() {
        let fixed_time = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let id_gen = UlidGenerator::new(FixedClock::new(fixed_time));

        let id1 = id_gen.generate_media_id();
        let id2 = id_gen.generate_media_id();

        // ランダム部分があるので ID は異なる
        assert_ne!(id1, id2);

        let ulid1 = Ulid::from_string(id1.as_str().trim_start_matches("media-")).unwrap();
        let ulid2 = Ulid::from_string(id2.as_str().trim_start_matches("media-")).unwrap();
        assert_eq!(ulid1.timestamp_ms(), ulid2.timestamp_ms());
        assert_eq!(ulid1.timestamp_ms(), fixed_time.timestamp_millis() as u64);
    }
}
