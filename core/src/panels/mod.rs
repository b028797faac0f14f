//! Panel visibility tracking.
//!
//! Three structurally different detection sources feed one reconciler:
//!
//! - **Patch hook**: the host's show/hide methods are intercepted and
//!   forwarded as events. Lowest latency, only for panel families with a
//!   patchable lifecycle method.
//! - **Reflective poll**: an `IsOpen`-style property is read every tick;
//!   a report fires only when the value changes between polls.
//! - **Alpha poll**: fade-group opacity is sampled every tick with a
//!   hysteresis band, so mid-fade frames never flicker.
//!
//! A static ownership partition guarantees at most one source ever
//! reports a given panel name; the reconciler enforces it again at the
//! signal level and owns the single authoritative set of visible panels.

pub mod ownership;
pub mod reconciler;
pub mod record;
pub mod sources;

#[cfg(test)]
pub(crate) mod testing;

#[cfg(test)]
mod reconciler_tests;

pub use ownership::{handles_panel, owner_of};
pub use reconciler::{PanelReconciler, PanelTransition};
pub use record::{PanelId, PanelRecord, classify_panel, display_name_for};
pub use sources::{
    AlphaPollSource, HandleRef, PanelHandle, PatchHookSource, ReflectionPollSource,
    effective_alpha,
};
