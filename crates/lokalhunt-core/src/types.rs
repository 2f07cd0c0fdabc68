// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for safe-area inset reporting.
//
// Raw insets arrive from the window system in device pixels. They are merged
// (system bars vs. display cutout, larger wins per edge) and converted to
// density-independent units before being handed to the hosted web content.

use serde::{Deserialize, Serialize};

use crate::error::{Result, ShellError};

/// Per-edge inset thickness in device pixels.
///
/// Fields are unsigned: the window system never reports negative insets, and
/// values coming across JNI as `jint` are clamped by [`EdgeInsets::from_signed`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
}

impl EdgeInsets {
    /// No insets on any edge.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    pub const fn new(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// Build from signed platform values, clamping anything negative to zero.
    pub fn from_signed(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        let clamp = |v: i32| v.max(0) as u32;
        Self::new(clamp(top), clamp(bottom), clamp(left), clamp(right))
    }

    /// Edge-wise maximum of two inset sets.
    ///
    /// On devices with a notch the cutout can be deeper than the status bar
    /// on the same edge, so the larger value is the true unsafe area.
    pub fn max_per_edge(self, other: Self) -> Self {
        Self {
            top: self.top.max(other.top),
            bottom: self.bottom.max(other.bottom),
            left: self.left.max(other.left),
            right: self.right.max(other.right),
        }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

/// Display density factor (device pixels per density-independent pixel).
///
/// Always read fresh from the display subsystem; it changes when the app is
/// moved between displays or the user alters display size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct Density(f32);

impl Density {
    /// Baseline mdpi density.
    pub const MDPI: Self = Self(1.0);

    /// Validate a raw density value. Zero, negative, NaN and infinite values
    /// are rejected.
    pub fn new(value: f32) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(ShellError::InvalidDensity(value))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }

    /// Convert device pixels to density-independent units, rounding to the
    /// nearest integer with ties rounding up.
    ///
    /// The division is single precision, as the platform computes it. At
    /// densities with no exact `f32` form (2.4, 1.2) the quotient for a tie
    /// lands exactly on .5 in `f32` but just under it in `f64`.
    pub fn px_to_dp(self, px: u32) -> u32 {
        (px as f32 / self.0).round() as u32
    }
}

impl TryFrom<f32> for Density {
    type Error = ShellError;

    fn try_from(value: f32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Density> for f32 {
    fn from(d: Density) -> f32 {
        d.0
    }
}

/// Safe-area insets in density-independent units, as delivered to the web app.
///
/// Serializes to `{"top":..,"bottom":..,"left":..,"right":..,"hasInsets":..}`
/// with keys in exactly that order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedInsets {
    pub top: u32,
    pub bottom: u32,
    pub left: u32,
    pub right: u32,
    #[serde(rename = "hasInsets")]
    pub has_insets: bool,
}

impl NormalizedInsets {
    /// Build from already-converted dp values, deriving `has_insets`.
    pub fn from_dp(top: u32, bottom: u32, left: u32, right: u32) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
            has_insets: top > 0 || bottom > 0 || left > 0 || right > 0,
        }
    }

    /// Merge system-bar and cutout insets and normalize by `density`.
    pub fn from_pixels(system_bars: EdgeInsets, cutout: EdgeInsets, density: Density) -> Self {
        let merged = system_bars.max_per_edge(cutout);
        Self::from_dp(
            density.px_to_dp(merged.top),
            density.px_to_dp(merged.bottom),
            density.px_to_dp(merged.left),
            density.px_to_dp(merged.right),
        )
    }

    /// Serialize to the JSON object literal handed to the hosted content.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Android SDK level (`Build.VERSION.SDK_INT`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApiLevel(pub u32);

impl ApiLevel {
    /// Android 10.
    pub const Q: Self = Self(29);
    /// Android 11: first level with `WindowInsets.Type` and
    /// `Window.setDecorFitsSystemWindows`.
    pub const R: Self = Self(30);
}

impl std::fmt::Display for ApiLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "API {}", self.0)
    }
}

/// How raw insets are measured from a platform notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsetStrategy {
    /// Separate system-bar and display-cutout categories; the window is laid
    /// out edge-to-edge and the listener sits on the content root view.
    Modern,
    /// One combined system-window inset with no cutout information; the
    /// listener sits on the decor view.
    Legacy,
}

impl InsetStrategy {
    /// Pick the strategy for the running platform version.
    pub fn select(api_level: ApiLevel, modern_min: ApiLevel) -> Self {
        if api_level >= modern_min {
            Self::Modern
        } else {
            Self::Legacy
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "modern",
            Self::Legacy => "legacy",
        }
    }
}

impl std::fmt::Display for InsetStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host activity lifecycle transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleEvent {
    Create,
    Start,
    Resume,
    Pause,
    Stop,
    Destroy,
}

impl LifecycleEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "onCreate",
            Self::Start => "onStart",
            Self::Resume => "onResume",
            Self::Pause => "onPause",
            Self::Stop => "onStop",
            Self::Destroy => "onDestroy",
        }
    }
}

impl std::fmt::Display for LifecycleEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
