//! Payload generation: independent random fields plus the fixed metadata block.

use chrono::{DateTime, Local};
use rand::Rng;
use webhook_core::{Payload, PayloadData, PayloadMetadata};

/// ISO-8601 local time, microsecond precision, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Builds a payload from the thread-local RNG and the local clock.
pub fn generate_payload() -> Payload {
    generate_payload_with(&mut rand::thread_rng(), Local::now())
}

/// Builds a payload from the given RNG and timestamp.
pub fn generate_payload_with<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Local>) -> Payload {
    Payload {
        id: rng.gen_range(1..=1000),
        timestamp: now.format(TIMESTAMP_FORMAT).to_string(),
        data: PayloadData {
            value: rng.gen_range(0.0..=100.0),
            message: format!("Random message {}", rng.gen_range(1..=10_000u32)),
            active: rng.gen_bool(0.5),
        },
        metadata: PayloadMetadata::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDateTime, TimeZone};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use webhook_core::{PAYLOAD_SOURCE, PAYLOAD_VERSION};

    fn message_number(message: &str) -> u32 {
        message
            .strip_prefix("Random message ")
            .expect("message must follow the template")
            .parse()
            .expect("message must end with an integer")
    }

    #[test]
    fn test_fields_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let payload = generate_payload_with(&mut rng, Local::now());
            assert!((1..=1000).contains(&payload.id));
            assert!((0.0..=100.0).contains(&payload.data.value));
            assert!((1..=10_000).contains(&message_number(&payload.data.message)));
            assert_eq!(payload.metadata.source, PAYLOAD_SOURCE);
            assert_eq!(payload.metadata.version, PAYLOAD_VERSION);
        }
    }

    #[test]
    fn test_active_takes_both_values() {
        let mut rng = StdRng::seed_from_u64(11);
        let actives: Vec<bool> = (0..200)
            .map(|_| generate_payload_with(&mut rng, Local::now()).data.active)
            .collect();
        assert!(actives.iter().any(|a| *a));
        assert!(actives.iter().any(|a| !*a));
    }

    #[test]
    fn test_same_seed_same_payload() {
        let now = Local::now();
        let a = generate_payload_with(&mut StdRng::seed_from_u64(3), now);
        let b = generate_payload_with(&mut StdRng::seed_from_u64(3), now);
        assert_eq!(a, b);
    }

    #[test]
    fn test_timestamp_format() {
        let naive = NaiveDateTime::parse_from_str("2024-05-01 12:30:45.123456", "%Y-%m-%d %H:%M:%S%.f")
            .unwrap();
        let now = Local.from_local_datetime(&naive).earliest().unwrap();

        let payload = generate_payload_with(&mut StdRng::seed_from_u64(1), now);

        assert_eq!(payload.timestamp, "2024-05-01T12:30:45.123456");
        assert!(NaiveDateTime::parse_from_str(&payload.timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_generate_payload_uses_current_time() {
        let before = Local::now().naive_local();
        let payload = generate_payload();
        let after = Local::now().naive_local();

        let ts = NaiveDateTime::parse_from_str(&payload.timestamp, TIMESTAMP_FORMAT).unwrap();
        // Microsecond truncation can put ts just below `before`.
        assert!(ts >= before - chrono::Duration::milliseconds(1));
        assert!(ts <= after);
    }
}
