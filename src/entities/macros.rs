//! Macros for reducing boilerplate when defining record types

/// Define a category enumeration
///
/// Generates the enum with serde wire names, plus [`Category`], `Display`
/// and `FromStr` implementations.
///
/// [`Category`]: crate::core::category::Category
///
/// # Example
/// ```rust,ignore
/// define_category! {
///     /// Operating environment of a loadout
///     pub enum Terrain {
///         Urban => "urban",
///         Desert => "desert",
///     }
/// }
///
/// assert_eq!(Terrain::Urban.as_str(), "urban");
/// assert_eq!("desert".parse::<Terrain>()?, Terrain::Desert);
/// ```
#[macro_export]
macro_rules! define_category {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $($variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                #[serde(rename = $value)]
                $variant,
            )+
        }

        impl $crate::core::category::Category for $name {
            const VALUES: &'static [&'static str] = &[$($value),+];

            fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $value,)+
                }
            }

            fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($value => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::category::Category::as_str(self))
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = $crate::core::error::ConfigurationError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                <Self as $crate::core::category::Category>::parse_for(stringify!($name), s)
            }
        }

        impl ::std::convert::From<$name> for $crate::core::field::FieldValue {
            fn from(value: $name) -> Self {
                $crate::core::field::FieldValue::String(
                    $crate::core::category::Category::as_str(&value).to_string(),
                )
            }
        }
    };
}
