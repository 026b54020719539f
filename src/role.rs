use crate::identifier::AXDomain;
use crate::identifier::AXIdentifier;
use crate::identifier::sealed::Sealed;

/// Marker for the role domain. Uninhabited, used only as a type tag.
pub enum RoleDomain {}

impl Sealed for RoleDomain {}

impl AXDomain for RoleDomain {
    const NAME: &'static str = "AXRole";
}

/// The coarse classification of an accessibility element: what kind of
/// thing it is (button, window, table, menu, and so on).
///
/// A role may be refined by an [`AXSubrole`](crate::subrole::AXSubrole);
/// which subroles are valid for which roles is decided by the remote
/// element, not by this layer.
pub type AXRole = AXIdentifier<RoleDomain>;

ax_identifiers! {
    AXRole {
        UNKNOWN => "AXUnknown";
        BUTTON => "AXButton";
        RADIO_BUTTON => "AXRadioButton";
        CHECK_BOX => "AXCheckBox";
        SLIDER => "AXSlider";
        TAB_GROUP => "AXTabGroup";
        TEXT_FIELD => "AXTextField";
        STATIC_TEXT => "AXStaticText";
        TEXT_AREA => "AXTextArea";
        SCROLL_AREA => "AXScrollArea";
        POP_UP_BUTTON => "AXPopUpButton";
        MENU_BUTTON => "AXMenuButton";
        TABLE => "AXTable";
        APPLICATION => "AXApplication";
        GROUP => "AXGroup";
        RADIO_GROUP => "AXRadioGroup";
        LIST => "AXList";
        SCROLL_BAR => "AXScrollBar";
        VALUE_INDICATOR => "AXValueIndicator";
        IMAGE => "AXImage";
        MENU_BAR => "AXMenuBar";
        MENU => "AXMenu";
        MENU_ITEM => "AXMenuItem";
        MENU_BAR_ITEM => "AXMenuBarItem";
        COLUMN => "AXColumn";
        ROW => "AXRow";
        TOOLBAR => "AXToolbar";
        BUSY_INDICATOR => "AXBusyIndicator";
        PROGRESS_INDICATOR => "AXProgressIndicator";
        WINDOW => "AXWindow";
        DRAWER => "AXDrawer";
        SYSTEM_WIDE => "AXSystemWide";
        OUTLINE => "AXOutline";
        INCREMENTOR => "AXIncrementor";
        BROWSER => "AXBrowser";
        COMBO_BOX => "AXComboBox";
        SPLIT_GROUP => "AXSplitGroup";
        SPLITTER => "AXSplitter";
        COLOR_WELL => "AXColorWell";
        GROW_AREA => "AXGrowArea";
        SHEET => "AXSheet";
        HELP_TAG => "AXHelpTag";
        MATTE => "AXMatte";
        RULER => "AXRuler";
        RULER_MARKER => "AXRulerMarker";
        LINK => "AXLink";
        DISCLOSURE_TRIANGLE => "AXDisclosureTriangle";
        GRID => "AXGrid";
        RELEVANCE_INDICATOR => "AXRelevanceIndicator";
        LEVEL_INDICATOR => "AXLevelIndicator";
        CELL => "AXCell";
        POPOVER => "AXPopover";
        LAYOUT_AREA => "AXLayoutArea";
        LAYOUT_ITEM => "AXLayoutItem";
        HANDLE => "AXHandle";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_raw_values() {
        assert_eq!(AXRole::BUTTON.as_str(), "AXButton");
        assert_eq!(AXRole::SYSTEM_WIDE.as_str(), "AXSystemWide");
        assert_eq!(AXRole::DISCLOSURE_TRIANGLE.as_str(), "AXDisclosureTriangle");
    }

    #[test]
    fn test_open_world_construction() {
        let custom = AXRole::from_raw("AXWebArea");
        assert_eq!(custom.as_str(), "AXWebArea");
        assert!(!AXRole::PREDEFINED.contains(&custom));
    }

    #[test]
    fn test_predefined_are_prefixed_and_distinct() {
        let mut seen = HashSet::new();

        for role in AXRole::PREDEFINED {
            assert!(role.as_str().starts_with("AX"));
            assert!(seen.insert(role.as_str()), "{role} appears twice");
        }
    }
}
