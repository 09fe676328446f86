//! Integration tests for drape-types.

use drape_types::constants::{DAMPING, DEFAULT_TIMESTEP, GRAVITY, TAPER_ROWS};
use drape_types::{ConstraintId, DrapeError};

// ─── ID Tests ──────────────────────────────────────────────────

#[test]
fn constraint_id_raw() {
    let id = ConstraintId(42);
    assert_eq!(id.raw(), 42);
}

#[test]
fn constraint_id_next_is_monotonic() {
    let id = ConstraintId::from(7);
    assert_eq!(id.next(), ConstraintId(8));
    assert!(id < id.next());
}

#[test]
fn ids_are_serializable() {
    let id = ConstraintId(100);
    let json = serde_json::to_string(&id).unwrap();
    let deserialized: ConstraintId = serde_json::from_str(&json).unwrap();
    assert_eq!(id, deserialized);
}

// ─── Error Tests ──────────────────────────────────────────────

#[test]
fn error_display() {
    let err = DrapeError::InvalidConfig("mass must be positive".into());
    assert!(err.to_string().contains("mass must be positive"));
}

#[test]
fn out_of_range_display() {
    let err = DrapeError::ParticleOutOfRange { index: 12, count: 4 };
    let msg = err.to_string();
    assert!(msg.contains("12"));
    assert!(msg.contains("4"));
}

#[test]
fn unknown_constraint_display() {
    let err = DrapeError::UnknownConstraint(ConstraintId(3));
    assert!(err.to_string().contains("3"));
}

#[test]
fn io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "scene.toml");
    let err: DrapeError = io_err.into();
    assert!(matches!(err, DrapeError::Io(_)));
}

// ─── Constant Tests ───────────────────────────────────────────

#[test]
fn constants_are_sane() {
    assert!(GRAVITY > 9.0 && GRAVITY < 10.0);
    assert!((DEFAULT_TIMESTEP - 0.018).abs() < 1e-9);
    assert!(DAMPING > 0.0 && DAMPING < 1.0);
    assert_eq!(TAPER_ROWS, 8.0);
}
