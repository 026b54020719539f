use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use std::borrow::Cow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;
use std::marker::PhantomData;
use std::str::FromStr;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A family of accessibility identifiers: notifications, roles, subroles,
/// attributes, or actions.
///
/// Implemented only by the uninhabited marker types defined in this crate;
/// the trait is sealed because the protocol defines exactly these families.
pub trait AXDomain: sealed::Sealed {
    /// Family name used in `Debug` output and domain-aware hashing.
    const NAME: &'static str;
}

/// A typed wrapper around one of the accessibility protocol's string
/// identifiers.
///
/// The protocol itself is permissively string-keyed, so construction never
/// validates: any string wraps into a valid identifier, which keeps the
/// crate forward-compatible with vocabulary newer than its constant tables.
/// The domain marker `D` exists only at the type level and makes the
/// families mutually incompatible:
///
/// ```compile_fail
/// use ax_vocabulary::AXRole;
/// use ax_vocabulary::AXSubrole;
///
/// // a subrole is not a role, even though both wrap a string
/// let role: AXRole = AXSubrole::DIALOG;
/// ```
///
/// Identifiers are immutable values. Equality and ordering are byte-exact
/// comparisons of the raw string; hashing covers the domain tag and the raw
/// string, so equal values always hash equal and type-erased registries
/// keyed by (domain, identifier) cannot collide across families.
pub struct AXIdentifier<D: AXDomain> {
    raw: Cow<'static, str>,
    _domain: PhantomData<fn() -> D>,
}

impl<D: AXDomain> AXIdentifier<D> {
    /// Wraps a static string. Used to declare the predefined constants.
    pub const fn from_static(raw: &'static str) -> Self {
        Self {
            raw: Cow::Borrowed(raw),
            _domain: PhantomData,
        }
    }

    /// Wraps an arbitrary string, typically one echoed back by the
    /// accessibility API at runtime. Total: unrecognized identifiers are
    /// accepted as opaque values, matching the behavior of the underlying
    /// protocol.
    pub fn from_raw(raw: impl Into<Cow<'static, str>>) -> Self {
        Self {
            raw: raw.into(),
            _domain: PhantomData,
        }
    }

    /// The exact wire value to hand to the accessibility API.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consumes the identifier, returning the wrapped string.
    pub fn into_raw(self) -> Cow<'static, str> {
        self.raw
    }
}

impl<D: AXDomain> Clone for AXIdentifier<D> {
    fn clone(&self) -> Self {
        Self {
            raw: self.raw.clone(),
            _domain: PhantomData,
        }
    }
}

impl<D: AXDomain> PartialEq for AXIdentifier<D> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<D: AXDomain> Eq for AXIdentifier<D> {}

impl<D: AXDomain> PartialOrd for AXIdentifier<D> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<D: AXDomain> Ord for AXIdentifier<D> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

impl<D: AXDomain> Hash for AXIdentifier<D> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        D::NAME.hash(state);
        self.raw.hash(state);
    }
}

impl<D: AXDomain> fmt::Debug for AXIdentifier<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(D::NAME).field(&self.raw).finish()
    }
}

impl<D: AXDomain> fmt::Display for AXIdentifier<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl<D: AXDomain> From<&'static str> for AXIdentifier<D> {
    fn from(raw: &'static str) -> Self {
        Self::from_raw(raw)
    }
}

impl<D: AXDomain> From<String> for AXIdentifier<D> {
    fn from(raw: String) -> Self {
        Self::from_raw(raw)
    }
}

impl<D: AXDomain> FromStr for AXIdentifier<D> {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_raw(s.to_owned()))
    }
}

impl<D: AXDomain> Serialize for AXIdentifier<D> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de, D: AXDomain> Deserialize<'de> for AXIdentifier<D> {
    fn deserialize<De: Deserializer<'de>>(deserializer: De) -> Result<Self, De::Error> {
        String::deserialize(deserializer).map(Self::from_raw)
    }
}

#[cfg(feature = "schemars")]
impl<D: AXDomain> schemars::JsonSchema for AXIdentifier<D> {
    fn schema_name() -> Cow<'static, str> {
        Cow::Borrowed(D::NAME)
    }

    fn json_schema(generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        <String as schemars::JsonSchema>::json_schema(generator)
    }
}

/// Declares the predefined constants of a domain along with a `PREDEFINED`
/// slice enumerating them.
macro_rules! ax_identifiers {
    (
        $ty:ident {
            $(
                $(#[$meta:meta])*
                $name:ident => $raw:literal;
            )+
        }
    ) => {
        impl $ty {
            $(
                $(#[$meta])*
                pub const $name: Self = Self::from_static($raw);
            )+

            /// Every identifier in this domain that the library predefines.
            ///
            /// The domain is open-ended: values outside this slice are still
            /// valid identifiers, this is just the vocabulary known at the
            /// time of writing.
            pub const PREDEFINED: &'static [Self] = &[$(Self::$name),+];
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::AXNotification;
    use crate::role::AXRole;
    use std::collections::HashMap;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_round_trip_identity() {
        for raw in ["AXButton", "", "AXCustomVendorAttr", "not even prefixed"] {
            assert_eq!(AXRole::from_raw(raw.to_owned()).as_str(), raw);
        }
    }

    #[test]
    fn test_equality_is_byte_exact() {
        assert_eq!(AXRole::from_raw("AXButton"), AXRole::BUTTON);
        assert_ne!(AXRole::from_raw("axbutton"), AXRole::BUTTON);
        assert_ne!(AXRole::from_raw("AXButton "), AXRole::BUTTON);
    }

    #[test]
    fn test_equal_values_hash_equal() {
        let a = AXRole::from_raw(String::from("AXButton"));
        let b = AXRole::BUTTON;

        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut handlers: HashMap<AXNotification, &str> = HashMap::new();
        handlers.insert(AXNotification::WINDOW_CREATED, "on_window_created");

        assert_eq!(
            handlers.get(&AXNotification::WINDOW_CREATED),
            Some(&"on_window_created")
        );
        assert_eq!(handlers.get(&AXNotification::from_raw("AXNotExist")), None);
    }

    #[test]
    fn test_ordering_follows_raw_string() {
        let mut roles = vec![AXRole::WINDOW, AXRole::BUTTON, AXRole::MENU];
        roles.sort();

        assert_eq!(roles, vec![AXRole::BUTTON, AXRole::MENU, AXRole::WINDOW]);
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(AXRole::BUTTON.to_string(), "AXButton");
        assert_eq!(format!("{:?}", AXRole::BUTTON), "AXRole(\"AXButton\")");
    }

    #[test]
    fn test_from_str_never_fails() {
        let parsed: AXNotification = "AXSomeFutureNotification".parse().unwrap();
        assert_eq!(parsed.as_str(), "AXSomeFutureNotification");
    }

    #[test]
    fn test_into_raw_returns_wire_value() {
        assert_eq!(AXRole::BUTTON.into_raw(), "AXButton");
        assert_eq!(AXRole::from_raw(String::from("AXCustom")).into_raw(), "AXCustom");
    }

    #[test]
    fn test_serde_is_transparent() {
        let json = serde_json::to_string(&AXNotification::WINDOW_CREATED).unwrap();
        assert_eq!(json, "\"AXWindowCreated\"");

        let parsed: AXNotification = serde_json::from_str("\"AXVendorSpecific\"").unwrap();
        assert_eq!(parsed, AXNotification::from_raw("AXVendorSpecific"));
    }
}
