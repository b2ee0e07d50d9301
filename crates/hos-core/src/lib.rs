//! `hos-core` — foundational types for the HOS trip planner.
//!
//! Every other `hos-*` crate depends on this one.  It has no `hos-*`
//! dependencies and minimal external ones (`chrono` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                 |
//! |-------------|----------------------------------------------------------|
//! | [`geo`]     | `Coordinate`, `LatLng`, haversine miles, interpolation   |
//! | [`duty`]    | `DutyStatus` enum                                        |
//! | [`rules`]   | `HosRules` — thresholds for one HOS rule set             |
//! | [`clock`]   | Fractional-hour ↔ `TimeDelta`, day index, formatting     |
//! | [`error`]   | `CoreError`, `CoreResult`                                |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod clock;
pub mod duty;
pub mod error;
pub mod geo;
pub mod rules;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use duty::DutyStatus;
pub use error::{CoreError, CoreResult};
pub use geo::{Coordinate, LatLng};
pub use rules::HosRules;
