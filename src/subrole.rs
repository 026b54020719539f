use crate::identifier::AXDomain;
use crate::identifier::AXIdentifier;
use crate::identifier::sealed::Sealed;

/// Marker for the subrole domain. Uninhabited, used only as a type tag.
pub enum SubroleDomain {}

impl Sealed for SubroleDomain {}

impl AXDomain for SubroleDomain {
    const NAME: &'static str = "AXSubrole";
}

/// The refined classification layered on an element's
/// [`AXRole`](crate::role::AXRole); a window's subrole may be `AXDialog` or
/// `AXFloatingWindow`, for example.
///
/// Roles and subroles are deliberately distinct domains even though the
/// protocol stores both as the same kind of string attribute.
pub type AXSubrole = AXIdentifier<SubroleDomain>;

ax_identifiers! {
    AXSubrole {
        UNKNOWN => "AXUnknown";
        CLOSE_BUTTON => "AXCloseButton";
        ZOOM_BUTTON => "AXZoomButton";
        MINIMIZE_BUTTON => "AXMinimizeButton";
        TOOLBAR_BUTTON => "AXToolbarButton";
        TABLE_ROW => "AXTableRow";
        OUTLINE_ROW => "AXOutlineRow";
        SECURE_TEXT_FIELD => "AXSecureTextField";
        STANDARD_WINDOW => "AXStandardWindow";
        DIALOG => "AXDialog";
        SYSTEM_DIALOG => "AXSystemDialog";
        FLOATING_WINDOW => "AXFloatingWindow";
        SYSTEM_FLOATING_WINDOW => "AXSystemFloatingWindow";
        INCREMENT_ARROW => "AXIncrementArrow";
        DECREMENT_ARROW => "AXDecrementArrow";
        INCREMENT_PAGE => "AXIncrementPage";
        DECREMENT_PAGE => "AXDecrementPage";
        SEARCH_FIELD => "AXSearchField";
        TEXT_ATTACHMENT => "AXTextAttachment";
        TEXT_LINK => "AXTextLink";
        TIMELINE => "AXTimeline";
        SORT_BUTTON => "AXSortButton";
        RATING_INDICATOR => "AXRatingIndicator";
        CONTENT_LIST => "AXContentList";
        DEFINITION_LIST => "AXDefinitionList";
        FULL_SCREEN_BUTTON => "AXFullScreenButton";
        TOGGLE => "AXToggle";
        SWITCH => "AXSwitch";
        DESCRIPTION_LIST => "AXDescriptionList";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_raw_values() {
        assert_eq!(AXSubrole::DIALOG.as_str(), "AXDialog");
        assert_eq!(AXSubrole::SWITCH.as_str(), "AXSwitch");
        assert_eq!(AXSubrole::STANDARD_WINDOW.as_str(), "AXStandardWindow");
    }

    #[test]
    fn test_predefined_are_prefixed_and_distinct() {
        let mut seen = HashSet::new();

        for subrole in AXSubrole::PREDEFINED {
            assert!(subrole.as_str().starts_with("AX"));
            assert!(seen.insert(subrole.as_str()), "{subrole} appears twice");
        }
    }
}
