use crate::identifier::AXDomain;
use crate::identifier::AXIdentifier;
use crate::identifier::sealed::Sealed;

/// Marker for the attribute domain. Uninhabited, used only as a type tag.
pub enum AttributeDomain {}

impl Sealed for AttributeDomain {}

impl AXDomain for AttributeDomain {
    const NAME: &'static str = "AXAttribute";
}

/// A key into an accessibility element's property table.
///
/// Every attribute is an opaque key; the type of the value behind it
/// (string, number, point, rectangle, boolean, element reference, array of
/// elements) is a documented convention per constant and is enforced by the
/// marshalling collaborator, not here. Parameterized attributes name a read
/// operation that additionally takes an argument; the identifier itself
/// never carries that argument.
pub type AXAttribute = AXIdentifier<AttributeDomain>;

ax_identifiers! {
    AXAttribute {
        // Standard attributes
        /// Non-localized role tag, e.g. `AXRadioButton`.
        ROLE => "AXRole";
        /// User-readable role, e.g. "radio button".
        ROLE_DESCRIPTION => "AXRoleDescription";
        /// Non-localized subrole tag, e.g. `AXCloseButton`.
        SUBROLE => "AXSubrole";
        /// Instance description, e.g. a tool tip.
        HELP => "AXHelp";
        /// The element's value.
        VALUE => "AXValue";
        MIN_VALUE => "AXMinValue";
        MAX_VALUE => "AXMaxValue";
        /// Boolean: does the element respond to user interaction?
        ENABLED => "AXEnabled";
        /// Boolean: does the element have keyboard focus?
        FOCUSED => "AXFocused";
        /// The element containing this one.
        PARENT => "AXParent";
        /// The elements this one contains.
        CHILDREN => "AXChildren";
        /// The containing window element.
        WINDOW => "AXWindow";
        /// The containing top-level element.
        TOP_LEVEL_UI_ELEMENT => "AXTopLevelUIElement";
        SELECTED_CHILDREN => "AXSelectedChildren";
        VISIBLE_CHILDREN => "AXVisibleChildren";
        /// Point: position in screen coordinates.
        POSITION => "AXPosition";
        SIZE => "AXSize";
        FRAME => "AXFrame";
        CONTENTS => "AXContents";
        /// Visible text, e.g. of a push button.
        TITLE => "AXTitle";
        DESCRIPTION => "AXDescription";
        /// The menu currently being displayed.
        SHOWN_MENU => "AXShownMenu";
        /// Text description of the value.
        VALUE_DESCRIPTION => "AXValueDescription";
        /// Elements that share focus with this one.
        SHARED_FOCUS_ELEMENTS => "AXSharedFocusElements";

        // Misc attributes
        PREVIOUS_CONTENTS => "AXPreviousContents";
        NEXT_CONTENTS => "AXNextContents";
        HEADER => "AXHeader";
        /// Boolean: has the element been edited since the last save?
        EDITED => "AXEdited";
        TABS => "AXTabs";
        HORIZONTAL_SCROLL_BAR => "AXHorizontalScrollBar";
        VERTICAL_SCROLL_BAR => "AXVerticalScrollBar";
        OVERFLOW_BUTTON => "AXOverflowButton";
        INCREMENT_BUTTON => "AXIncrementButton";
        DECREMENT_BUTTON => "AXDecrementButton";
        FILENAME => "AXFilename";
        EXPANDED => "AXExpanded";
        SELECTED => "AXSelected";
        SPLITTERS => "AXSplitters";
        /// URL string of the open document.
        DOCUMENT => "AXDocument";
        ACTIVATION_POINT => "AXActivationPoint";
        URL => "AXURL";
        INDEX => "AXIndex";
        ROW_COUNT => "AXRowCount";
        COLUMN_COUNT => "AXColumnCount";
        ORDERED_BY_ROW => "AXOrderedByRow";
        /// Warning value of a level indicator, typically a number.
        WARNING_VALUE => "AXWarningValue";
        /// Critical value of a level indicator, typically a number.
        CRITICAL_VALUE => "AXCriticalValue";
        /// Placeholder value of a control such as a text field.
        PLACEHOLDER_VALUE => "AXPlaceholderValue";
        CONTAINS_PROTECTED_CONTENT => "AXContainsProtectedContent";
        ALTERNATE_UI_VISIBLE => "AXAlternateUIVisible";

        // Linkage attributes
        /// The element that titles this one.
        TITLE_UI_ELEMENT => "AXTitleUIElement";
        /// The elements this one titles.
        SERVES_AS_TITLE_FOR_UI_ELEMENTS => "AXServesAsTitleForUIElements";
        LINKED_UI_ELEMENTS => "AXLinkedUIElements";

        // Text-specific attributes
        SELECTED_TEXT => "AXSelectedText";
        /// Range of the selected text.
        SELECTED_TEXT_RANGE => "AXSelectedTextRange";
        NUMBER_OF_CHARACTERS => "AXNumberOfCharacters";
        /// Range of the visible text.
        VISIBLE_CHARACTER_RANGE => "AXVisibleCharacterRange";
        /// Text views sharing this view's text.
        SHARED_TEXT_UI_ELEMENTS => "AXSharedTextUIElements";
        /// The part of the shared text shown in this view.
        SHARED_CHARACTER_RANGE => "AXSharedCharacterRange";
        /// Line number containing the caret.
        INSERTION_POINT_LINE_NUMBER => "AXInsertionPointLineNumber";
        SELECTED_TEXT_RANGES => "AXSelectedTextRanges";
        /// Private, undocumented attribute.
        TEXT_INPUT_MARKED_RANGE => "AXTextInputMarkedRange";

        // Parameterized text-specific attributes
        /// Line number for a character index; argument: number.
        LINE_FOR_INDEX_PARAMETERIZED => "AXLineForIndexParameterized";
        /// Range of a line; argument: line number.
        RANGE_FOR_LINE_PARAMETERIZED => "AXRangeForLineParameterized";
        /// Substring; argument: character range.
        STRING_FOR_RANGE_PARAMETERIZED => "AXStringForRangeParameterized";
        /// Composed character range; argument: screen point.
        RANGE_FOR_POSITION_PARAMETERIZED => "AXRangeForPositionParameterized";
        /// Composed character range; argument: character index.
        RANGE_FOR_INDEX_PARAMETERIZED => "AXRangeForIndexParameterized";
        /// Screen bounds of a stretch of text; argument: character range.
        BOUNDS_FOR_RANGE_PARAMETERIZED => "AXBoundsForRangeParameterized";
        /// RTF data for a stretch of text; argument: character range.
        RTF_FOR_RANGE_PARAMETERIZED => "AXRTFForRangeParameterized";
        /// Extent of the style run at an index; argument: character index.
        STYLE_RANGE_FOR_INDEX_PARAMETERIZED => "AXStyleRangeForIndexParameterized";
        /// Attributed substring; argument: character range.
        ATTRIBUTED_STRING_FOR_RANGE_PARAMETERIZED => "AXAttributedStringForRangeParameterized";

        // Text attributed-string attributes
        FONT_TEXT => "AXFontText";
        FOREGROUND_COLOR_TEXT => "AXForegroundColorText";
        BACKGROUND_COLOR_TEXT => "AXBackgroundColorText";
        UNDERLINE_COLOR_TEXT => "AXUnderlineColorText";
        STRIKETHROUGH_COLOR_TEXT => "AXStrikethroughColorText";
        UNDERLINE_TEXT => "AXUnderlineText";
        /// Number: superscript > 0, subscript < 0.
        SUPERSCRIPT_TEXT => "AXSuperscriptText";
        STRIKETHROUGH_TEXT => "AXStrikethroughText";
        SHADOW_TEXT => "AXShadowText";
        ATTACHMENT_TEXT => "AXAttachmentText";
        LINK_TEXT => "AXLinkText";
        AUTOCORRECTED_TEXT => "AXAutocorrectedText";

        // Textual list attributes, e.g. ordered or unordered lists in a
        // document
        /// The string prepended to the list item (a bullet, an index, or a
        /// label for a leading image).
        LIST_ITEM_PREFIX_TEXT => "AXListItemPrefixText";
        /// Zero-based line index; increments per item even in unordered
        /// lists.
        LIST_ITEM_INDEX_TEXT => "AXListItemIndexText";
        /// Zero-based indent level; increments per sublist.
        LIST_ITEM_LEVEL_TEXT => "AXListItemLevelText";

        // Misspelled-text attributes
        MISSPELLED_TEXT => "AXMisspelledText";
        MARKED_MISSPELLED_TEXT => "AXMarkedMisspelledText";

        // Window-specific attributes
        /// Boolean: is this the main window?
        MAIN => "AXMain";
        MINIMIZED => "AXMinimized";
        CLOSE_BUTTON => "AXCloseButton";
        ZOOM_BUTTON => "AXZoomButton";
        MINIMIZE_BUTTON => "AXMinimizeButton";
        TOOLBAR_BUTTON => "AXToolbarButton";
        /// The title bar's document icon element.
        PROXY => "AXProxy";
        GROW_AREA => "AXGrowArea";
        MODAL => "AXModal";
        DEFAULT_BUTTON => "AXDefaultButton";
        CANCEL_BUTTON => "AXCancelButton";
        FULL_SCREEN_BUTTON => "AXFullScreenButton";
        /// Private, undocumented attribute. Boolean: is the window
        /// fullscreen?
        FULL_SCREEN => "AXFullScreen";

        // Application-specific attributes
        MENU_BAR => "AXMenuBar";
        WINDOWS => "AXWindows";
        /// Boolean: is the application active?
        FRONTMOST => "AXFrontmost";
        HIDDEN => "AXHidden";
        MAIN_WINDOW => "AXMainWindow";
        FOCUSED_WINDOW => "AXFocusedWindow";
        FOCUSED_UI_ELEMENT => "AXFocusedUIElement";
        EXTRAS_MENU_BAR => "AXExtrasMenuBar";
        /// Private, undocumented attribute. Boolean: is the assistive
        /// enhanced user interface active? Settable; window managers toggle
        /// it off during positioning because it slows the target app down.
        ENHANCED_USER_INTERFACE => "AXEnhancedUserInterface";

        /// One of the orientation values, see
        /// [`AXOrientation`](crate::orientation::AXOrientation).
        ORIENTATION => "AXOrientation";

        COLUMN_TITLES => "AXColumnTitles";

        // Search-field attributes
        SEARCH_BUTTON => "AXSearchButton";
        SEARCH_MENU => "AXSearchMenu";
        CLEAR_BUTTON => "AXClearButton";

        // Table/outline view attributes
        ROWS => "AXRows";
        VISIBLE_ROWS => "AXVisibleRows";
        SELECTED_ROWS => "AXSelectedRows";
        COLUMNS => "AXColumns";
        VISIBLE_COLUMNS => "AXVisibleColumns";
        SELECTED_COLUMNS => "AXSelectedColumns";
        SORT_DIRECTION => "AXSortDirection";

        // Cell-based table attributes
        SELECTED_CELLS => "AXSelectedCells";
        VISIBLE_CELLS => "AXVisibleCells";
        ROW_HEADER_UI_ELEMENTS => "AXRowHeaderUIElements";
        COLUMN_HEADER_UI_ELEMENTS => "AXColumnHeaderUIElements";

        /// The cell element at a position; argument: an array of two
        /// numbers, column index then row index.
        CELL_FOR_COLUMN_AND_ROW_PARAMETERIZED => "AXCellForColumnAndRowParameterized";

        // Cell attributes. The index range carries both the starting index
        // and the span within the table.
        ROW_INDEX_RANGE => "AXRowIndexRange";
        COLUMN_INDEX_RANGE => "AXColumnIndexRange";

        // Layout area attributes
        HORIZONTAL_UNITS => "AXHorizontalUnits";
        VERTICAL_UNITS => "AXVerticalUnits";
        HORIZONTAL_UNIT_DESCRIPTION => "AXHorizontalUnitDescription";
        VERTICAL_UNIT_DESCRIPTION => "AXVerticalUnitDescription";

        // Layout area parameterized attributes
        /// Layout point for a screen point; argument: point.
        LAYOUT_POINT_FOR_SCREEN_POINT_PARAMETERIZED => "AXLayoutPointForScreenPointParameterized";
        /// Layout size for a screen size; argument: size.
        LAYOUT_SIZE_FOR_SCREEN_SIZE_PARAMETERIZED => "AXLayoutSizeForScreenSizeParameterized";
        /// Screen point for a layout point; argument: point.
        SCREEN_POINT_FOR_LAYOUT_POINT_PARAMETERIZED => "AXScreenPointForLayoutPointParameterized";
        /// Screen size for a layout size; argument: size.
        SCREEN_SIZE_FOR_LAYOUT_SIZE_PARAMETERIZED => "AXScreenSizeForLayoutSizeParameterized";

        // Layout item attributes
        HANDLES => "AXHandles";

        // Outline attributes
        /// Boolean: is the row disclosing child rows?
        DISCLOSING => "AXDisclosing";
        DISCLOSED_ROWS => "AXDisclosedRows";
        DISCLOSED_BY_ROW => "AXDisclosedByRow";
        /// Indentation level.
        DISCLOSURE_LEVEL => "AXDisclosureLevel";

        // Slider attributes
        ALLOWED_VALUES => "AXAllowedValues";
        LABEL_UI_ELEMENTS => "AXLabelUIElements";
        LABEL_VALUE => "AXLabelValue";

        // Matte attributes, no longer supported by the platform
        MATTE_HOLE => "AXMatteHole";
        MATTE_CONTENT_UI_ELEMENT => "AXMatteContentUIElement";

        // Ruler view attributes
        MARKER_UI_ELEMENTS => "AXMarkerUIElements";
        MARKER_VALUES => "AXMarkerValues";
        MARKER_GROUP_UI_ELEMENT => "AXMarkerGroupUIElement";
        UNITS => "AXUnits";
        UNIT_DESCRIPTION => "AXUnitDescription";
        MARKER_TYPE => "AXMarkerType";
        MARKER_TYPE_DESCRIPTION => "AXMarkerTypeDescription";

        // Element identification attributes
        IDENTIFIER => "AXIdentifier";

        // System-wide attributes
        FOCUSED_APPLICATION => "AXFocusedApplication";

        FUNCTION_ROW_TOP_LEVEL_ELEMENTS => "AXFunctionRowTopLevelElements";
        CHILDREN_IN_NAVIGATION_ORDER => "AXChildrenInNavigationOrder";
    }
}

impl AXAttribute {
    /// Whether this attribute's read operation takes an argument supplied
    /// by the caller, following the platform's `…Parameterized` naming
    /// convention. The argument's shape is documented per constant; the
    /// collaborator issuing the call is responsible for packaging it.
    pub fn is_parameterized(&self) -> bool {
        self.as_str().ends_with("Parameterized")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_raw_values() {
        assert_eq!(AXAttribute::VALUE.as_str(), "AXValue");
        assert_eq!(AXAttribute::URL.as_str(), "AXURL");
        assert_eq!(
            AXAttribute::ENHANCED_USER_INTERFACE.as_str(),
            "AXEnhancedUserInterface"
        );
        assert_eq!(
            AXAttribute::RTF_FOR_RANGE_PARAMETERIZED.as_str(),
            "AXRTFForRangeParameterized"
        );
    }

    #[test]
    fn test_distinct_constants_never_alias() {
        assert_ne!(AXAttribute::ROW_INDEX_RANGE, AXAttribute::COLUMN_INDEX_RANGE);
        assert_ne!(AXAttribute::MIN_VALUE, AXAttribute::MAX_VALUE);
    }

    #[test]
    fn test_open_world_construction() {
        let custom = AXAttribute::from_raw("AXCustomVendorAttr");
        assert_eq!(custom.as_str(), "AXCustomVendorAttr");
    }

    #[test]
    fn test_parameterized_convention() {
        assert!(AXAttribute::STRING_FOR_RANGE_PARAMETERIZED.is_parameterized());
        assert!(AXAttribute::CELL_FOR_COLUMN_AND_ROW_PARAMETERIZED.is_parameterized());
        assert!(!AXAttribute::VALUE.is_parameterized());
        assert!(!AXAttribute::SELECTED_TEXT_RANGE.is_parameterized());

        let parameterized = AXAttribute::PREDEFINED
            .iter()
            .filter(|attribute| attribute.is_parameterized())
            .count();
        assert_eq!(parameterized, 14);
    }

    #[test]
    fn test_predefined_are_prefixed_and_distinct() {
        let mut seen = HashSet::new();

        for attribute in AXAttribute::PREDEFINED {
            assert!(
                attribute.as_str().starts_with("AX"),
                "{attribute} is missing the vendor prefix"
            );
            assert!(seen.insert(attribute.as_str()), "{attribute} appears twice");
        }
    }
}
