use crate::identifier::AXDomain;
use crate::identifier::AXIdentifier;
use crate::identifier::sealed::Sealed;

/// Marker for the notification domain. Uninhabited, used only as a type tag.
pub enum NotificationDomain {}

impl Sealed for NotificationDomain {}

impl AXDomain for NotificationDomain {
    const NAME: &'static str = "AXNotification";
}

/// The name of an asynchronous state-change event an observer can subscribe
/// to on an application's accessibility element.
///
/// Consumers use these as keys when registering observer callbacks and as
/// the discriminant when dispatching a received event to its handler. The
/// constants carry no behavior; subscribing and dispatching belong to the
/// observer machinery.
pub type AXNotification = AXIdentifier<NotificationDomain>;

ax_identifiers! {
    AXNotification {
        // Focus notifications
        MAIN_WINDOW_CHANGED => "AXMainWindowChanged";
        FOCUSED_WINDOW_CHANGED => "AXFocusedWindowChanged";
        FOCUSED_UI_ELEMENT_CHANGED => "AXFocusedUIElementChanged";
        FOCUSED_TAB_CHANGED => "AXFocusedTabChanged";

        // Application notifications
        APPLICATION_ACTIVATED => "AXApplicationActivated";
        APPLICATION_DEACTIVATED => "AXApplicationDeactivated";
        APPLICATION_HIDDEN => "AXApplicationHidden";
        APPLICATION_SHOWN => "AXApplicationShown";

        // Window notifications
        WINDOW_CREATED => "AXWindowCreated";
        WINDOW_MOVED => "AXWindowMoved";
        WINDOW_RESIZED => "AXWindowResized";
        WINDOW_MINIATURIZED => "AXWindowMiniaturized";
        WINDOW_DEMINIATURIZED => "AXWindowDeminiaturized";

        // Drawer & sheet notifications
        DRAWER_CREATED => "AXDrawerCreated";
        SHEET_CREATED => "AXSheetCreated";

        // Element notifications
        UI_ELEMENT_DESTROYED => "AXUIElementDestroyed";
        VALUE_CHANGED => "AXValueChanged";
        TITLE_CHANGED => "AXTitleChanged";
        RESIZED => "AXResized";
        MOVED => "AXMoved";
        CREATED => "AXCreated";
        ELEMENT_BUSY_CHANGED => "AXElementBusyChanged";

        /// UI changes that require the attention of an assistive
        /// application. The event's user info carries the changed elements
        /// under [`UI_ELEMENTS_KEY`].
        LAYOUT_CHANGED => "AXLayoutChanged";

        // Menu notifications
        MENU_OPENED => "AXMenuOpened";
        MENU_CLOSED => "AXMenuClosed";
        MENU_ITEM_SELECTED => "AXMenuItemSelected";

        // Misc notifications
        HELP_TAG_CREATED => "AXHelpTagCreated";
        SELECTED_TEXT_CHANGED => "AXSelectedTextChanged";
        ROW_COUNT_CHANGED => "AXRowCountChanged";
        SELECTED_CHILDREN_CHANGED => "AXSelectedChildrenChanged";
        SELECTED_ROWS_CHANGED => "AXSelectedRowsChanged";
        SELECTED_COLUMNS_CHANGED => "AXSelectedColumnsChanged";
        LOAD_COMPLETE => "AXLoadComplete";
        ROW_EXPANDED => "AXRowExpanded";
        ROW_COLLAPSED => "AXRowCollapsed";

        // Cell-table notifications
        SELECTED_CELLS_CHANGED => "AXSelectedCellsChanged";

        // Layout area notifications
        UNITS_CHANGED => "AXUnitsChanged";
        SELECTED_CHILDREN_MOVED => "AXSelectedChildrenMoved";

        /// A request that an assistive application announce something to the
        /// user. Posted for the application element with the announcement
        /// under [`ANNOUNCEMENT_KEY`] and its importance under
        /// [`PRIORITY_KEY`].
        ANNOUNCEMENT_REQUESTED => "AXAnnouncementRequested";
    }
}

// Keys into a notification's user info dictionary. These name payload
// entries rather than subscriptions, so they stay plain strings.
pub const UI_ELEMENTS_KEY: &str = "AXUIElementsKey";
pub const PRIORITY_KEY: &str = "AXPriorityKey";
pub const ANNOUNCEMENT_KEY: &str = "AXAnnouncementKey";
pub const UI_ELEMENT_TITLE_KEY: &str = "AXUIElementTitleKey";
