//! Built-in sample plans
//!
//! Used when no plan file is given (or when loading one fails).

use super::{Plan, WallSegment};

/// Four-wall 1000 x 1000 square room
pub fn square_room() -> Plan {
    Plan::new(vec![
        WallSegment::new(0.0, 0.0, 1000.0, 0.0),
        WallSegment::new(1000.0, 0.0, 1000.0, 1000.0),
        WallSegment::new(1000.0, 1000.0, 0.0, 1000.0),
        WallSegment::new(0.0, 1000.0, 0.0, 0.0),
    ])
}

/// Six-wall L-shaped studio, exercises the irregular floor polygon path
pub fn l_shaped_studio() -> Plan {
    Plan::new(vec![
        WallSegment::new(0.0, 0.0, 1200.0, 0.0),
        WallSegment::new(1200.0, 0.0, 1200.0, 600.0),
        WallSegment::new(1200.0, 600.0, 600.0, 600.0),
        WallSegment::new(600.0, 600.0, 600.0, 1200.0),
        WallSegment::new(600.0, 1200.0, 0.0, 1200.0),
        WallSegment::new(0.0, 1200.0, 0.0, 0.0),
    ])
}
