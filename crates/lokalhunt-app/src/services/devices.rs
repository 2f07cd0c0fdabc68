// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Simulated device profiles for the desktop preview.

use lokalhunt_bridge::stub::SimulatedInsets;
use lokalhunt_core::types::{ApiLevel, EdgeInsets};

/// A phone the preview can pretend to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceProfile {
    pub name: &'static str,
    pub api_level: ApiLevel,
    pub density: f32,
    /// Status + navigation bars, device pixels.
    pub system_bars: EdgeInsets,
    /// Camera notch / punch hole, device pixels.
    pub display_cutout: EdgeInsets,
}

impl DeviceProfile {
    pub fn insets(&self) -> SimulatedInsets {
        SimulatedInsets::new(self.system_bars, self.display_cutout)
    }
}

pub const PROFILES: &[DeviceProfile] = &[
    DeviceProfile {
        name: "No system UI",
        api_level: ApiLevel(34),
        density: 1.0,
        system_bars: EdgeInsets::ZERO,
        display_cutout: EdgeInsets::ZERO,
    },
    DeviceProfile {
        name: "Punch-hole phone, portrait",
        api_level: ApiLevel(34),
        density: 2.625,
        system_bars: EdgeInsets::new(63, 63, 0, 0),
        display_cutout: EdgeInsets::new(118, 0, 0, 0),
    },
    DeviceProfile {
        name: "Punch-hole phone, landscape",
        api_level: ApiLevel(34),
        density: 2.625,
        system_bars: EdgeInsets::new(63, 0, 0, 126),
        display_cutout: EdgeInsets::new(0, 0, 118, 0),
    },
    DeviceProfile {
        name: "Android 10 phone, 3-button nav",
        api_level: ApiLevel::Q,
        density: 3.0,
        system_bars: EdgeInsets::new(72, 144, 0, 0),
        display_cutout: EdgeInsets::ZERO,
    },
    DeviceProfile {
        name: "Android 9 notched phone",
        api_level: ApiLevel(28),
        density: 2.0,
        system_bars: EdgeInsets::new(48, 96, 0, 0),
        // Invisible to the legacy measurement path.
        display_cutout: EdgeInsets::new(80, 0, 0, 0),
    },
];

#[cfg(test)]
mod tests {
    use lokalhunt_bridge::compute;
    use lokalhunt_core::types::{Density, InsetStrategy, NormalizedInsets};

    use super::*;

    #[test]
    fn portrait_cutout_dominates_status_bar() {
        let p = &PROFILES[1];
        let n = compute(p.system_bars, p.display_cutout, Density::new(p.density).unwrap());
        // 118 / 2.625 = 44.95, 63 / 2.625 = 24
        assert_eq!(n, NormalizedInsets::from_dp(45, 24, 0, 0));
    }

    #[test]
    fn first_profile_has_no_insets() {
        let p = &PROFILES[0];
        let n = compute(p.system_bars, p.display_cutout, Density::new(p.density).unwrap());
        assert!(!n.has_insets);
    }

    #[test]
    fn profiles_cover_both_strategies() {
        let strategies: Vec<_> = PROFILES
            .iter()
            .map(|p| InsetStrategy::select(p.api_level, ApiLevel::R))
            .collect();
        assert!(strategies.contains(&InsetStrategy::Modern));
        assert!(strategies.contains(&InsetStrategy::Legacy));
    }

    #[test]
    fn densities_are_valid() {
        for p in PROFILES {
            assert!(Density::new(p.density).is_ok(), "{}", p.name);
        }
    }
}
