//! Triplet selection shared by both front ends.

use anyhow::Result;
use serde::Serialize;
use vcpkg_tools::Triplet;

use crate::platform::Platform;

/// MSVC toolset the static Windows triplet is built with.
pub const MSVC_TOOLSET: &str = "vs2022";

/// Fixed triplet for the MinGW cross environment.
pub const MINGW_TRIPLET: &str = "x64-mingw";

/// Fixed triplet for 64-bit Windows: static linkage, [`MSVC_TOOLSET`].
pub fn windows_static_triplet() -> String {
    format!("x64-windows-static-{MSVC_TOOLSET}")
}

/// Where the triplet came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TripletSource {
    /// Fixed by the platform.
    Detected,
    /// `--triplet`.
    Override,
    /// Asked interactively.
    Prompted,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TripletChoice {
    pub triplet: Triplet,
    pub source: TripletSource,
    /// Only the bootstrap front end acts on this.
    pub ui_enabled: bool,
}

/// Pick the triplet for `platform`. First match wins:
///
/// 1. primary desktop: static Windows triplet, UI enabled
/// 2. minimal cross: MinGW triplet
/// 3. no (or empty) override: `prompt`
/// 4. the override, unchanged
///
/// Platform detection outranks `--triplet`; an ignored override is logged.
pub fn classify_triplet(
    platform: Platform,
    triplet_override: Option<&str>,
    prompt: impl FnOnce() -> Result<Triplet>,
) -> Result<TripletChoice> {
    let requested = triplet_override.filter(|t| !t.is_empty());

    let choice = match platform {
        Platform::PrimaryDesktop => TripletChoice {
            triplet: Triplet::new(windows_static_triplet())?,
            source: TripletSource::Detected,
            ui_enabled: true,
        },
        Platform::MinimalCross => TripletChoice {
            triplet: Triplet::new(MINGW_TRIPLET)?,
            source: TripletSource::Detected,
            ui_enabled: false,
        },
        Platform::Other => match requested {
            None => TripletChoice {
                triplet: prompt()?,
                source: TripletSource::Prompted,
                ui_enabled: false,
            },
            Some(name) => TripletChoice {
                triplet: Triplet::new(name)?,
                source: TripletSource::Override,
                ui_enabled: false,
            },
        },
    };

    if choice.source == TripletSource::Detected {
        if let Some(name) = requested.filter(|name| *name != choice.triplet.as_str()) {
            log::warn!(
                "Ignoring --triplet {name}: this platform always builds {}",
                choice.triplet
            );
        }
    }

    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;

    fn no_prompt() -> Result<Triplet> {
        bail!("prompt must not be called")
    }

    #[test]
    fn primary_desktop_is_fixed_and_enables_ui() {
        for requested in [None, Some("x64-windows"), Some("")] {
            let choice = classify_triplet(Platform::PrimaryDesktop, requested, no_prompt).unwrap();
            assert_eq!(choice.triplet.as_str(), "x64-windows-static-vs2022");
            assert_eq!(choice.source, TripletSource::Detected);
            assert!(choice.ui_enabled);
        }
    }

    #[test]
    fn minimal_cross_is_fixed() {
        let choice = classify_triplet(Platform::MinimalCross, Some("x64-linux"), no_prompt).unwrap();
        assert_eq!(choice.triplet.as_str(), "x64-mingw");
        assert!(!choice.ui_enabled);
    }

    #[test]
    fn other_platforms_take_the_override_verbatim() {
        for name in ["x64-linux", "arm64-osx-dynamic", " spaced "] {
            let first = classify_triplet(Platform::Other, Some(name), no_prompt).unwrap();
            let again = classify_triplet(Platform::Other, Some(first.triplet.as_str()), no_prompt)
                .unwrap();
            assert_eq!(first.triplet.as_str(), name);
            assert_eq!(again, first);
            assert_eq!(first.source, TripletSource::Override);
        }
    }

    #[test]
    fn missing_or_empty_override_prompts() {
        for requested in [None, Some("")] {
            let choice = classify_triplet(Platform::Other, requested, || Triplet::new("x64-linux"))
                .unwrap();
            assert_eq!(choice.triplet.as_str(), "x64-linux");
            assert_eq!(choice.source, TripletSource::Prompted);
        }
    }

    #[test]
    fn prompt_failure_propagates() {
        let err = classify_triplet(Platform::Other, None, || {
            Err(anyhow::anyhow!("stdin closed"))
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "stdin closed");
    }
}
