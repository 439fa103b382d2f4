//! Navigation targets for sprite clicks
//!
//! Each sprite click picks a random destination. Absolute addresses open in a
//! new browsing context; relative ones replace the current page.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Minimum number of targets; shorter lists are padded
pub const MIN_NAV_TARGETS: usize = 5;

/// Padding target
pub const DEFAULT_NAV_TARGET: &str = "/";

/// What the page should do when a sprite is activated
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Navigation {
    /// Open in a new tab/window
    NewContext(String),
    /// Replace the current page
    InPlace(String),
}

impl Navigation {
    /// Classify a target by its form
    pub fn for_target(target: &str) -> Self {
        if is_absolute(target) {
            Navigation::NewContext(target.to_string())
        } else {
            Navigation::InPlace(target.to_string())
        }
    }

    pub fn url(&self) -> &str {
        match self {
            Navigation::NewContext(url) | Navigation::InPlace(url) => url,
        }
    }
}

/// Scheme-qualified (`https:`, `mailto:`) or protocol-relative (`//host`)
pub fn is_absolute(target: &str) -> bool {
    if target.starts_with("//") {
        return true;
    }

    let Some((scheme, _)) = target.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Destination list, always at least [`MIN_NAV_TARGETS`] long
///
/// Serialized as a plain list; deserializing pads it like [`NavTargets::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct NavTargets {
    targets: Vec<String>,
}

impl Default for NavTargets {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl From<Vec<String>> for NavTargets {
    fn from(targets: Vec<String>) -> Self {
        Self::new(targets)
    }
}

impl From<NavTargets> for Vec<String> {
    fn from(targets: NavTargets) -> Self {
        targets.targets
    }
}

impl NavTargets {
    pub fn new(mut targets: Vec<String>) -> Self {
        targets.retain(|t| !t.trim().is_empty());
        if targets.len() < MIN_NAV_TARGETS {
            log::debug!(
                "Padding {} navigation targets with {:?}",
                MIN_NAV_TARGETS - targets.len(),
                DEFAULT_NAV_TARGET
            );
            targets.resize(MIN_NAV_TARGETS, DEFAULT_NAV_TARGET.to_string());
        }
        Self { targets }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Uniformly random destination
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Navigation {
        let index = rng.random_range(0..self.targets.len());
        let navigation = Navigation::for_target(&self.targets[index]);
        log::debug!("Navigation target #{}: {:?}", index, navigation);
        navigation
    }
}
