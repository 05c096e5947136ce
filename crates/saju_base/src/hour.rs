//! Double-hour (shichen) branches.
//!
//! The day is split into twelve two-hour slots. Slot 0 (zi) straddles
//! midnight, covering 23:00-00:59; slot 1 (chou) covers 01:00-02:59, and so on.

use crate::branch::{ALL_BRANCHES, Branch};

/// Double-hour slot (0-11) for a wall-clock hour. Hours wrap modulo 24.
pub const fn hour_slot(hour: u32) -> u8 {
    (((hour % 24 + 1) / 2) % 12) as u8
}

/// Branch of the double hour containing `hour`.
pub const fn hour_branch(hour: u32) -> Branch {
    ALL_BRANCHES[hour_slot(hour) as usize]
}

/// Branch for a fractional hour (23.9 is 23:54). Non-finite input is midnight.
pub fn hour_branch_fractional(hour: f64) -> Branch {
    let h = if hour.is_finite() {
        hour.floor().rem_euclid(24.0) as u32
    } else {
        0
    };
    hour_branch(h)
}
