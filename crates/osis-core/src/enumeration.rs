//! # Closed Enumerations
//!
//! Admission data is persisted with textual enumeration names
//! (`"TRAITEMENT_FAC"`, `"GEST_REUSSITE"`, ...). The [`choix_enum!`] macro
//! declares a Rust enum whose serde form, `Display` form, and lookup table
//! all use those exact names.
//!
//! `from_name()` is a literal `match` over the declared names. Unknown
//! input resolves to `None`, so "unknown input silently becomes absent"
//! is expressed in the type instead of through reflection.

/// Declare a closed enumeration with stable persisted names.
///
/// ```
/// osis_core::choix_enum! {
///     /// Colour of a traffic light.
///     pub enum Feu {
///         /// Stop.
///         Rouge => "ROUGE",
///         /// Go.
///         Vert => "VERT",
///     }
/// }
///
/// assert_eq!(Feu::from_name("VERT"), Some(Feu::Vert));
/// assert_eq!(Feu::from_name("BLEU"), None);
/// assert_eq!(Feu::Rouge.to_string(), "ROUGE");
/// ```
///
/// The calling crate must depend on `serde` with the `derive` feature.
#[macro_export]
macro_rules! choix_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident => $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            ::serde::Serialize, ::serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every member, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The persisted name of this member.
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Resolve a persisted name. Unknown names give `None`.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $($label => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    choix_enum! {
        /// Test enumeration.
        pub enum Etape {
            /// First.
            APreparer => "A_PREPARER",
            /// Second.
            EnCours => "EN_COURS",
            /// Third.
            Terminee => "TERMINEE",
        }
    }

    #[test]
    fn test_name_and_from_name_agree() {
        for etape in Etape::ALL {
            assert_eq!(Etape::from_name(etape.name()), Some(*etape));
        }
    }

    #[test]
    fn test_unknown_name_is_none() {
        assert_eq!(Etape::from_name("INCONNU"), None);
        assert_eq!(Etape::from_name(""), None);
        assert_eq!(Etape::from_name("en_cours"), None);
    }

    #[test]
    fn test_display_is_persisted_name() {
        assert_eq!(Etape::EnCours.to_string(), "EN_COURS");
    }

    #[test]
    fn test_serde_uses_persisted_name() {
        let json = serde_json::to_string(&Etape::APreparer).unwrap();
        assert_eq!(json, "\"A_PREPARER\"");
        let parsed: Etape = serde_json::from_str("\"TERMINEE\"").unwrap();
        assert_eq!(parsed, Etape::Terminee);
    }

    #[test]
    fn test_all_preserves_declaration_order() {
        assert_eq!(
            Etape::ALL,
            &[Etape::APreparer, Etape::EnCours, Etape::Terminee]
        );
    }
}
