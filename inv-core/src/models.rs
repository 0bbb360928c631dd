mod category;
mod dataset;
mod product;

pub use category::Category;
pub use dataset::Dataset;
pub use product::{MAX_NAME_LEN, Product, ProductQuery, ValidationError};

macro_rules! string_id {
    ($struct: ident) => {
        /// An opaque string identifier.
        ///
        /// Identifiers are caller-supplied and treated as plain text: no
        /// format is imposed, and uniqueness is the caller's problem.
        #[derive(
            Debug,
            Hash,
            PartialEq,
            Eq,
            Clone,
            PartialOrd,
            Ord,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
        #[serde(transparent)]
        #[repr(transparent)]
        pub struct $struct(String);

        impl From<String> for $struct {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $struct {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl std::ops::Deref for $struct {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl std::fmt::Display for $struct {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

string_id!(ProductId);
string_id!(CategoryId);
