//! Snowflake ID - 64-bit time-ordered unique identifier
//!
//! Layout (high to low): 42 bits of milliseconds since the project epoch,
//! 10 bits of worker ID, 12 bits of per-millisecond sequence.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Time-ordered 64-bit unique ID used for every persisted entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Snowflake(i64);

impl Snowflake {
    /// Project epoch: 2025-01-01 00:00:00 UTC (milliseconds)
    pub const EPOCH: i64 = 1_735_689_600_000;

    /// Create a Snowflake from a raw i64 value
    #[inline]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the inner i64 value
    #[inline]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Check if the ID is zero (uninitialized)
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Milliseconds since the Unix epoch encoded in this ID
    #[inline]
    pub fn timestamp_millis(&self) -> i64 {
        (self.0 >> 22) + Self::EPOCH
    }

    /// Creation time derived from the embedded timestamp
    pub fn created_at(&self) -> chrono::DateTime<chrono::Utc> {
        use chrono::{TimeZone, Utc};
        Utc.timestamp_millis_opt(self.timestamp_millis())
            .single()
            .unwrap_or_else(|| Utc.timestamp_millis_opt(0).unwrap())
    }

    /// Parse from a decimal string
    pub fn parse(s: &str) -> Result<Self, SnowflakeParseError> {
        s.parse::<i64>()
            .map(Snowflake)
            .map_err(|_| SnowflakeParseError::InvalidFormat)
    }
}

/// Error when parsing a Snowflake from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SnowflakeParseError {
    #[error("invalid snowflake format")]
    InvalidFormat,
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Snowflake {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<Snowflake> for i64 {
    fn from(id: Snowflake) -> Self {
        id.0
    }
}

impl std::str::FromStr for Snowflake {
    type Err = SnowflakeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Snowflake::parse(s)
    }
}

// Serialized as a string: i64 overflows JavaScript's safe integer range.
impl Serialize for Snowflake {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct SnowflakeVisitor;

        impl Visitor<'_> for SnowflakeVisitor {
            type Value = Snowflake;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or integer snowflake ID")
            }

            fn visit_i64<E>(self, value: i64) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                Ok(Snowflake(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                Ok(Snowflake(value as i64))
            }

            fn visit_str<E>(self, value: &str) -> Result<Snowflake, E>
            where
                E: de::Error,
            {
                value
                    .parse::<i64>()
                    .map(Snowflake)
                    .map_err(|_| de::Error::custom("invalid snowflake string"))
            }
        }

        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

/// Thread-safe Snowflake generator.
///
/// Packs the current millisecond, worker ID, and an atomic sequence into one
/// i64. Sequence collisions within a millisecond are resolved by spinning to
/// the next millisecond.
pub struct SnowflakeGenerator {
    worker_id: u16,
    state: AtomicI64,
}

impl SnowflakeGenerator {
    /// Create a generator for the given worker ID
    ///
    /// # Panics
    /// Panics if worker_id >= 1024
    pub fn new(worker_id: u16) -> Self {
        assert!(worker_id < 1024, "worker ID must be < 1024");
        Self {
            worker_id,
            // state packs (timestamp << 12) | sequence
            state: AtomicI64::new(0),
        }
    }

    /// Generate a new unique Snowflake
    pub fn generate(&self) -> Snowflake {
        loop {
            let prev = self.state.load(Ordering::Acquire);
            let prev_ts = prev >> 12;
            let mut now = Self::now_millis();

            if now < prev_ts {
                // Clock went backwards; reuse the last timestamp.
                now = prev_ts;
            }

            let next = if now == prev_ts {
                let seq = (prev & 0xFFF) + 1;
                if seq > 0xFFF {
                    // Sequence exhausted for this millisecond.
                    while Self::now_millis() <= prev_ts {
                        std::hint::spin_loop();
                    }
                    Self::now_millis() << 12
                } else {
                    (now << 12) | seq
                }
            } else {
                now << 12
            };

            if self
                .state
                .compare_exchange(prev, next, Ordering::AcqRel, Ordering::Relaxed)
                .is_ok()
            {
                let ts = next >> 12;
                let seq = next & 0xFFF;
                let id = ((ts - Snowflake::EPOCH) << 22) | (i64::from(self.worker_id) << 12) | seq;
                return Snowflake::new(id);
            }
        }
    }

    /// Worker ID of this generator
    pub fn worker_id(&self) -> u16 {
        self.worker_id
    }

    #[inline]
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0)
    }
}

impl Default for SnowflakeGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}
