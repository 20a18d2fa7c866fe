//! Group configuration surface.

use serde::{Deserialize, Serialize};

/// Icon shown after the header of a top-level group by default.
pub const EXPAND_ICON: &str = "$expand";

/// Icon shown before the header of a sub-group by default.
pub const SUBGROUP_ICON: &str = "$subgroup";

/// Class applied to the prepend icon while active, by default.
pub const DEFAULT_ACTIVE_CLASS: &str = "primary--text";

/// Options recognized by a list group.
///
/// Only `disabled`, `group`, `sub_group`, `eager` and `value` affect the
/// group's behavior; the rest is handed to the renderer through
/// [`HeaderView`](super::HeaderView).
///
/// Field names deserialize in camelCase:
///
/// ```
/// use listgroup::GroupConfig;
///
/// let config: GroupConfig =
///     serde_json::from_str(r#"{ "group": "/users", "subGroup": true }"#).unwrap();
/// assert_eq!(config.group.as_deref(), Some("/users"));
/// assert!(config.sub_group);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GroupConfig {
    /// Class applied to the prepend icon while active.
    pub active_class: String,
    /// Icon after the header text. Empty hides it.
    pub append_icon: String,
    /// Icon before the header text.
    pub prepend_icon: Option<String>,
    /// Ignore clicks and the activation key.
    pub disabled: bool,
    /// Route pattern; the group activates while the path matches.
    pub group: Option<String>,
    /// Render items without the action indent.
    pub no_action: bool,
    /// Ripple feedback on the header.
    pub ripple: Ripple,
    /// Nested group, exempt from sibling exclusivity.
    pub sub_group: bool,
    /// Build the nested content immediately instead of on first expand.
    pub eager: bool,
    /// Explicit initial state. Suppresses the initial route evaluation.
    pub value: Option<bool>,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            active_class: DEFAULT_ACTIVE_CLASS.into(),
            append_icon: EXPAND_ICON.into(),
            prepend_icon: None,
            disabled: false,
            group: None,
            no_action: false,
            ripple: Ripple::default(),
            sub_group: false,
            eager: false,
            value: None,
        }
    }
}

/// Ripple setting: on/off, or on with options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Ripple {
    Enabled(bool),
    Custom(RippleOptions),
}

impl Ripple {
    /// Whether any ripple is shown.
    pub fn is_enabled(&self) -> bool {
        match self {
            Ripple::Enabled(enabled) => *enabled,
            Ripple::Custom(_) => true,
        }
    }
}

impl Default for Ripple {
    fn default() -> Self {
        Ripple::Enabled(true)
    }
}

impl From<bool> for Ripple {
    fn from(enabled: bool) -> Self {
        Ripple::Enabled(enabled)
    }
}

impl From<RippleOptions> for Ripple {
    fn from(options: RippleOptions) -> Self {
        Ripple::Custom(options)
    }
}

/// Ripple settings used when the ripple is configured with options
/// instead of a plain flag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RippleOptions {
    /// Start the ripple from the center instead of the pointer.
    pub center: bool,
    /// Extra class on the ripple element.
    pub class: Option<String>,
}
