//! Response identifier strategies.
//!
//! `probe_id_generator` picks one strategy at startup: a v4 UUID when the OS
//! RNG answers, otherwise a time-seeded pseudo-random id that is unique enough
//! to deduplicate rows but carries no cryptographic guarantee.

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;

    fn kind(&self) -> &'static str;
}

pub struct SecureRandomIds;

impl IdGenerator for SecureRandomIds {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }

    fn kind(&self) -> &'static str {
        "secure-random"
    }
}

pub struct PseudoRandomIds {
    rng: Mutex<StdRng>,
}

static SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0)
}

impl PseudoRandomIds {
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let bump = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
        let seed = nanos ^ u64::from(std::process::id()).rotate_left(32) ^ bump;
        Self::with_seed(seed)
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for PseudoRandomIds {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for PseudoRandomIds {
    fn next_id(&self) -> String {
        let r: u64 = match self.rng.lock() {
            Ok(mut rng) => rng.gen(),
            Err(poisoned) => poisoned.into_inner().gen(),
        };
        format!("id_{:x}_{:x}", r, unix_millis())
    }

    fn kind(&self) -> &'static str {
        "pseudo-random"
    }
}

pub fn os_rng_available() -> bool {
    let mut probe = [0u8; 16];
    OsRng.try_fill_bytes(&mut probe).is_ok()
}

pub fn probe_id_generator() -> Box<dyn IdGenerator> {
    if os_rng_available() {
        Box::new(SecureRandomIds)
    } else {
        warn!("OS random source unavailable, falling back to pseudo-random response ids");
        Box::new(PseudoRandomIds::new())
    }
}

#[cfg(test)]
mod tests {
    use super::{IdGenerator, PseudoRandomIds, SecureRandomIds};
    use std::collections::HashSet;

    #[test]
    fn secure_ids_are_v4_uuids() {
        let id = SecureRandomIds.next_id();
        let parsed = uuid::Uuid::parse_str(&id).expect("uuid");
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn fallback_ids_have_prefix_and_two_hex_parts() {
        let id = PseudoRandomIds::with_seed(7).next_id();
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "id");
        assert!(parts[1..]
            .iter()
            .all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_hexdigit())));
    }

    #[test]
    fn ids_do_not_repeat_across_calls() {
        let secure = SecureRandomIds;
        let fallback = PseudoRandomIds::new();
        let mut seen = HashSet::new();
        for _ in 0..500 {
            assert!(seen.insert(secure.next_id()));
            assert!(seen.insert(fallback.next_id()));
        }
    }
}
