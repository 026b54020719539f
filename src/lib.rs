#![warn(clippy::all)]

//! Typed vocabulary for the macOS accessibility protocol.
//!
//! The assistive-technology interface is string-keyed: roles, subroles,
//! attributes, actions, and notifications are all exchanged as plain string
//! identifiers. This crate wraps that vocabulary in per-domain identifier
//! types so that, say, a role can never be passed where an action is
//! expected, while any string still wraps into a valid identifier because
//! the OS vocabulary grows with every release.
//!
//! ```
//! use ax_vocabulary::AXAttribute;
//! use ax_vocabulary::AXRole;
//!
//! assert_eq!(AXRole::BUTTON.as_str(), "AXButton");
//!
//! // identifiers the library does not enumerate are still valid
//! let vendor = AXAttribute::from_raw("AXCustomVendorAttr");
//! assert_eq!(vendor.as_str(), "AXCustomVendorAttr");
//! ```
//!
//! Identifiers are immutable values, hashable, and `Send + Sync`; the
//! element-tree walker and observer machinery that actually issue calls
//! against the accessibility API consume them as keys and pass the raw
//! string (`as_str`) across the process boundary.

#[macro_use]
pub mod identifier;

pub mod action;
pub mod attribute;
pub mod notification;
pub mod orientation;
pub mod role;
pub mod subrole;

pub use action::AXAction;
pub use attribute::AXAttribute;
pub use identifier::AXDomain;
pub use identifier::AXIdentifier;
pub use notification::AXNotification;
pub use orientation::AXOrientation;
pub use role::AXRole;
pub use subrole::AXSubrole;
