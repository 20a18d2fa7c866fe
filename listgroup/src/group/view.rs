//! Render models handed to the presentation layer.
//!
//! Icons, theming, the expand animation and ripple feedback live outside
//! this crate. A renderer reads these plain values and draws whatever it
//! likes.

use super::config::{GroupConfig, Ripple, SUBGROUP_ICON};

/// State classes for the group container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupClasses {
    pub active: bool,
    pub disabled: bool,
    pub no_action: bool,
    pub sub_group: bool,
}

impl GroupClasses {
    /// Class names for the flags that are set.
    pub fn names(&self) -> Vec<&'static str> {
        [
            (self.active, "list-group--active"),
            (self.disabled, "list-group--disabled"),
            (self.no_action, "list-group--no-action"),
            (self.sub_group, "list-group--sub-group"),
        ]
        .into_iter()
        .filter_map(|(set, name)| set.then_some(name))
        .collect()
    }
}

/// An icon and the extra class to draw it with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconSlot {
    pub icon: String,
    pub class: Option<String>,
}

/// Everything needed to draw a group header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub classes: GroupClasses,
    pub prepend_icon: Option<IconSlot>,
    pub append_icon: Option<IconSlot>,
    pub ripple: Ripple,
}

impl HeaderView {
    pub(crate) fn new(config: &GroupConfig, active: bool, disabled: bool) -> Self {
        let prepend_icon = config
            .prepend_icon
            .clone()
            .or_else(|| config.sub_group.then(|| SUBGROUP_ICON.to_string()))
            .map(|icon| IconSlot {
                icon,
                class: active.then(|| config.active_class.clone()),
            });

        // Sub-groups never show the expand icon.
        let append_icon = (!config.sub_group && !config.append_icon.is_empty()).then(|| {
            IconSlot {
                icon: config.append_icon.clone(),
                class: None,
            }
        });

        Self {
            classes: GroupClasses {
                active,
                disabled,
                no_action: config.no_action,
                sub_group: config.sub_group,
            },
            prepend_icon,
            append_icon,
            ripple: config.ripple.clone(),
        }
    }
}

/// The nested item area of a group.
#[derive(Debug)]
pub struct ItemsView<'a, T> {
    /// Whether the items are shown (the group is active).
    pub visible: bool,
    /// The content, once it has been materialized.
    pub content: Option<&'a mut T>,
}

impl<T> ItemsView<'_, T> {
    /// Whether there is anything to draw.
    pub fn is_rendered(&self) -> bool {
        self.visible && self.content.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::config::EXPAND_ICON;

    #[test]
    fn test_top_level_header_icons() {
        let config = GroupConfig::default();
        let header = HeaderView::new(&config, false, false);
        assert_eq!(header.prepend_icon, None);
        assert_eq!(
            header.append_icon.map(|slot| slot.icon),
            Some(EXPAND_ICON.to_string())
        );
    }

    #[test]
    fn test_sub_group_header_icons() {
        let config = GroupConfig {
            sub_group: true,
            ..Default::default()
        };
        let header = HeaderView::new(&config, true, false);
        let prepend = header.prepend_icon.expect("sub-group prepend icon");
        assert_eq!(prepend.icon, SUBGROUP_ICON);
        assert_eq!(prepend.class.as_deref(), Some("primary--text"));
        assert!(header.append_icon.is_none());
    }

    #[test]
    fn test_active_class_only_while_active() {
        let config = GroupConfig {
            prepend_icon: Some("$folder".into()),
            active_class: "accent".into(),
            ..Default::default()
        };
        let inactive = HeaderView::new(&config, false, false);
        let active = HeaderView::new(&config, true, false);
        assert_eq!(inactive.prepend_icon.and_then(|s| s.class), None);
        assert_eq!(
            active.prepend_icon.and_then(|s| s.class).as_deref(),
            Some("accent")
        );
    }

    #[test]
    fn test_empty_append_icon_hidden() {
        let config = GroupConfig {
            append_icon: String::new(),
            ..Default::default()
        };
        assert!(HeaderView::new(&config, false, false).append_icon.is_none());
    }

    #[test]
    fn test_class_names() {
        let classes = GroupClasses {
            active: true,
            sub_group: true,
            ..Default::default()
        };
        assert_eq!(
            classes.names(),
            vec!["list-group--active", "list-group--sub-group"]
        );
    }
}
