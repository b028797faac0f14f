//! Static detector-ownership partition.
//!
//! Each panel-name pattern is claimed by exactly one source. Precedence is
//! PatchHook > ReflectionPoll > AlphaPoll, and every lower source
//! explicitly refuses names matching a pattern owned above it, so two
//! sources can never both report the same panel instance. The partition is
//! a fixed table: only three structurally different sources exist, and a
//! registry abstraction was deliberately not built for them.

use herald_types::DetectorKind;

/// Blade-family panels expose patchable show/hide methods.
const PATCH_HOOK_PATTERNS: &[&str] = &["blade"];

/// These families expose an `IsOpen`-style polled property. `popupbase`
/// is the carve-out from the alpha source's generic `popup` match.
const REFLECTION_PATTERNS: &[&str] = &["popupbase", "settingsmenu"];

/// Pure fade-group panels, detectable only by opacity.
const ALPHA_PATTERNS: &[&str] = &["popup", "overlay", "socialpanel"];

fn matches_any(lower: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| lower.contains(p))
}

/// Whether `detector` owns the given panel name.
///
/// Names are lowercased before matching. Lower-precedence sources return
/// false for any name a higher-precedence source owns, even when their
/// own patterns match.
pub fn handles_panel(detector: DetectorKind, name: &str) -> bool {
    let lower = name.to_ascii_lowercase();
    match detector {
        DetectorKind::PatchHook => matches_any(&lower, PATCH_HOOK_PATTERNS),
        DetectorKind::ReflectionPoll => {
            !matches_any(&lower, PATCH_HOOK_PATTERNS) && matches_any(&lower, REFLECTION_PATTERNS)
        }
        DetectorKind::AlphaPoll => {
            !matches_any(&lower, PATCH_HOOK_PATTERNS)
                && !matches_any(&lower, REFLECTION_PATTERNS)
                && matches_any(&lower, ALPHA_PATTERNS)
        }
    }
}

/// The unique owning detector for a name, if any pattern claims it.
pub fn owner_of(name: &str) -> Option<DetectorKind> {
    [
        DetectorKind::PatchHook,
        DetectorKind::ReflectionPoll,
        DetectorKind::AlphaPoll,
    ]
    .into_iter()
    .find(|&detector| handles_panel(detector, name))
}
