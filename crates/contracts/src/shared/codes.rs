//! Wire-coded enums.
//!
//! Every enum the backend sends as a string code is declared through
//! [`coded_enum!`]. Codes the client does not know yet land in an
//! `Unknown(raw)` variant, so a new backend value never fails a whole page.

/// Declares an enum that (de)serializes through its wire code.
///
/// `from_code` never fails: `Shade::from_code("neon")` yields
/// `Shade::Unknown("neon")` whose label is `"neon"`.
#[macro_export]
macro_rules! coded_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($code:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(from = "String", into = "String")]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Code not known to this client build (kept verbatim)
            Unknown(String),
        }

        impl $name {
            /// Wire code
            pub fn code(&self) -> &str {
                match self {
                    $( $name::$variant => $code, )+
                    $name::Unknown(raw) => raw.as_str(),
                }
            }

            /// Human readable label; unknown codes fall back to the raw value
            pub fn display_name(&self) -> &str {
                match self {
                    $( $name::$variant => $label, )+
                    $name::Unknown(raw) => raw.as_str(),
                }
            }

            pub fn from_code(code: &str) -> Self {
                match code {
                    $( $code => $name::$variant, )+
                    other => $name::Unknown(other.to_string()),
                }
            }

            /// All known values in declaration order
            pub fn all() -> Vec<$name> {
                vec![$( $name::$variant ),+]
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, $name::Unknown(_))
            }
        }

        impl From<String> for $name {
            fn from(code: String) -> Self {
                $name::from_code(&code)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> String {
                value.code().to_string()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }
    };
}

#[cfg(test)]
mod tests {
    crate::coded_enum! {
        pub enum Sample {
            InProgress => ("in-progress", "In Progress"),
            Done => ("done", "Done"),
        }
    }

    #[test]
    fn test_known_code_round_trip() {
        let parsed: Sample = serde_json::from_str("\"in-progress\"").unwrap();
        assert_eq!(parsed, Sample::InProgress);
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"in-progress\"");
        assert_eq!(parsed.display_name(), "In Progress");
    }

    #[test]
    fn test_unknown_code_is_kept() {
        let parsed: Sample = serde_json::from_str("\"on-hold\"").unwrap();
        assert_eq!(parsed, Sample::Unknown("on-hold".to_string()));
        assert!(!parsed.is_known());
        assert_eq!(parsed.display_name(), "on-hold");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"on-hold\"");
    }

    #[test]
    fn test_all_lists_known_values_only() {
        assert_eq!(Sample::all(), vec![Sample::InProgress, Sample::Done]);
    }
}
