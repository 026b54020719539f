use crate::identifier::AXDomain;
use crate::identifier::AXIdentifier;
use crate::identifier::sealed::Sealed;

/// Marker for the action domain. Uninhabited, used only as a type tag.
pub enum ActionDomain {}

impl Sealed for ActionDomain {}

impl AXDomain for ActionDomain {
    const NAME: &'static str = "AXAction";
}

/// The name of an operation that can be invoked on an accessibility
/// element. Actions take no argument and return nothing; performing one is
/// the element-tree collaborator's job, this layer only supplies the
/// canonical name.
pub type AXAction = AXIdentifier<ActionDomain>;

ax_identifiers! {
    AXAction {
        PRESS => "AXPress";
        INCREMENT => "AXIncrement";
        DECREMENT => "AXDecrement";
        CONFIRM => "AXConfirm";
        PICK => "AXPick";
        CANCEL => "AXCancel";
        RAISE => "AXRaise";
        SHOW_MENU => "AXShowMenu";
        DELETE => "AXDelete";
        SHOW_ALTERNATE_UI => "AXShowAlternateUI";
        SHOW_DEFAULT_UI => "AXShowDefaultUI";
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_canonical_raw_values() {
        assert_eq!(AXAction::PRESS.as_str(), "AXPress");
        assert_eq!(AXAction::SHOW_ALTERNATE_UI.as_str(), "AXShowAlternateUI");
    }

    #[test]
    fn test_predefined_are_prefixed_and_distinct() {
        let mut seen = HashSet::new();

        for action in AXAction::PREDEFINED {
            assert!(action.as_str().starts_with("AX"));
            assert!(seen.insert(action.as_str()), "{action} appears twice");
        }
    }
}
