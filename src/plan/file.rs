//! Plan loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable plan files.
//! Loading validates against resource limits; the geometry pipeline itself
//! never rejects input, so validation here is the only gate.

use std::fs;
use std::path::Path;

use super::Plan;

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum number of wall segments in a plan
    pub const MAX_SEGMENTS: usize = 4096;
    /// Maximum coordinate value (prevents overflow issues)
    pub const MAX_COORD: f32 = 1_000_000.0;
    /// Maximum wall height / thickness
    pub const MAX_DIMENSION: f32 = 100_000.0;
    /// Maximum texture path length
    pub const MAX_PATH_LEN: usize = 256;
}

/// Error type for plan loading
#[derive(Debug)]
pub enum PlanError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
    ValidationError(String),
}

impl From<std::io::Error> for PlanError {
    fn from(e: std::io::Error) -> Self {
        PlanError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for PlanError {
    fn from(e: ron::error::SpannedError) -> Self {
        PlanError::ParseError(e)
    }
}

impl From<ron::Error> for PlanError {
    fn from(e: ron::Error) -> Self {
        PlanError::SerializeError(e)
    }
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::IoError(e) => write!(f, "IO error: {}", e),
            PlanError::ParseError(e) => write!(f, "Parse error: {}", e),
            PlanError::SerializeError(e) => write!(f, "Serialize error: {}", e),
            PlanError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

/// Check if a float is valid (not NaN or Inf, within coordinate range)
fn is_valid_float(f: f32) -> bool {
    f.is_finite() && f.abs() <= limits::MAX_COORD
}

/// Validate a plan against resource limits.
///
/// Zero-length segments pass: they render as degenerate boxes rather than
/// being rejected.
pub fn validate_plan(plan: &Plan) -> Result<(), PlanError> {
    if plan.segments.len() > limits::MAX_SEGMENTS {
        return Err(PlanError::ValidationError(format!(
            "too many segments ({} > {})",
            plan.segments.len(),
            limits::MAX_SEGMENTS
        )));
    }

    for (i, seg) in plan.segments.iter().enumerate() {
        for (name, v) in [
            ("x1", seg.x1),
            ("y1", seg.y1),
            ("x2", seg.x2),
            ("y2", seg.y2),
        ] {
            if !is_valid_float(v) {
                return Err(PlanError::ValidationError(format!(
                    "segment {}: invalid {} = {}",
                    i, name, v
                )));
            }
        }
    }

    for (name, v) in [
        ("wall_height", plan.wall_height),
        ("wall_thickness", plan.wall_thickness),
    ] {
        if !v.is_finite() || v <= 0.0 || v > limits::MAX_DIMENSION {
            return Err(PlanError::ValidationError(format!(
                "invalid {} = {}",
                name, v
            )));
        }
    }

    if let Some(path) = &plan.floor_texture {
        if path.len() > limits::MAX_PATH_LEN {
            return Err(PlanError::ValidationError(format!(
                "floor_texture path too long ({} > {})",
                path.len(),
                limits::MAX_PATH_LEN
            )));
        }
    }

    Ok(())
}

/// Load a plan from a RON file
pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<Plan, PlanError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let plan: Plan = match ron::from_str(&contents) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("RON parse error in {}: {}", path.display(), e);
            return Err(e.into());
        }
    };

    validate_plan(&plan)?;
    Ok(plan)
}

/// Load a plan from a RON string (for embedded plans or testing)
pub fn load_plan_from_str(s: &str) -> Result<Plan, PlanError> {
    let plan: Plan = ron::from_str(s)?;
    validate_plan(&plan)?;
    Ok(plan)
}

/// Save a plan to a pretty-printed RON file
pub fn save_plan<P: AsRef<Path>>(plan: &Plan, path: P) -> Result<(), PlanError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());

    let ron_string = ron::ser::to_string_pretty(plan, config)?;
    fs::write(path, ron_string)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::{square_room, WallSegment};

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("room.ron");

        let plan = square_room();
        save_plan(&plan, &path).unwrap();
        let loaded = load_plan(&path).unwrap();

        assert_eq!(loaded.segments.len(), plan.segments.len());
        assert_eq!(loaded.segments[1], plan.segments[1]);
        assert!((loaded.wall_height - plan.wall_height).abs() < 0.001);
    }

    #[test]
    fn test_load_from_str_defaults() {
        let plan = load_plan_from_str(
            "(segments: [(x1: 0.0, y1: 0.0, x2: 100.0, y2: 0.0)])",
        )
        .unwrap();
        assert_eq!(plan.segments.len(), 1);
        assert!((plan.wall_height - 200.0).abs() < 0.001);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_plan("no/such/plan.ron").unwrap_err();
        assert!(matches!(err, PlanError::IoError(_)));
    }

    #[test]
    fn test_rejects_non_finite_coordinate() {
        let mut plan = square_room();
        plan.segments.push(WallSegment::new(f32::NAN, 0.0, 1.0, 1.0));
        assert!(matches!(
            validate_plan(&plan),
            Err(PlanError::ValidationError(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_coordinate() {
        let mut plan = square_room();
        plan.segments.push(WallSegment::new(2_000_000.0, 0.0, 1.0, 1.0));
        assert!(validate_plan(&plan).is_err());
    }

    #[test]
    fn test_rejects_non_positive_height() {
        let mut plan = square_room();
        plan.wall_height = 0.0;
        assert!(validate_plan(&plan).is_err());
    }

    #[test]
    fn test_zero_length_segment_passes_validation() {
        let mut plan = square_room();
        plan.segments.push(WallSegment::new(5.0, 5.0, 5.0, 5.0));
        assert!(validate_plan(&plan).is_ok());
    }
}
