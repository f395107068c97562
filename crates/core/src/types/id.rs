//! Newtype identifiers for type-safe references.
//!
//! Use the `define_id!` macro to create string-backed ID wrappers that
//! prevent accidentally mixing identifiers from different domains, such as
//! passing an order number where a product id is expected.

/// Macro to define a type-safe, string-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Accessors: `new()`, `as_str()`, `into_inner()`
/// - `Display`, `AsRef<str>`, `From<&str>` and `From<String>`
///
/// # Example
///
/// ```rust
/// # use volt_core::define_id;
/// define_id!(SkuCode);
/// define_id!(WarehouseCode);
///
/// let sku = SkuCode::new("volt-x1-256");
/// assert_eq!(sku.as_str(), "volt-x1-256");
///
/// // These are different types, so this won't compile:
/// // let _: WarehouseCode = sku;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the underlying string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the owned string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

// Catalog product identifier, e.g. `volt-anc-pro`. Stable and unique within
// the catalog and within a cart.
define_id!(ProductId);

// Locally fabricated order reference, e.g. `VOLT-7QK2ZD`.
define_id!(OrderNumber);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_accessors() {
        let id = ProductId::new("volt-x1");
        assert_eq!(id.as_str(), "volt-x1");
        assert_eq!(id.to_string(), "volt-x1");
        assert_eq!(ProductId::from("volt-x1"), id);
        assert_eq!(id.into_inner(), "volt-x1");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let id = OrderNumber::new("VOLT-ABC123");
        let json = serde_json::to_string(&id).ok();
        assert_eq!(json.as_deref(), Some("\"VOLT-ABC123\""));
    }
}
