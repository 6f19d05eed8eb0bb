//! Travel entities as the API serves them (camelCase JSON, numeric enums).

/// Fieldless enum carried as a number on the wire, with a display label.
macro_rules! numeric_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident = $value:literal => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(try_from = "u8", into = "u8")]
        pub enum $name {
            $($variant = $value),+
        }

        impl $name {
            pub fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl TryFrom<u8> for $name {
            type Error = String;

            fn try_from(value: u8) -> Result<Self, Self::Error> {
                match value {
                    $($value => Ok(Self::$variant),)+
                    other => Err(format!("invalid {} {}", stringify!($name), other)),
                }
            }
        }

        impl From<$name> for u8 {
            fn from(value: $name) -> u8 {
                value as u8
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

mod airline;
mod airplane;
mod booking;
mod class_flight;
mod flight;
mod home;
mod loyalty;
mod passenger;
mod seat;

pub use airline::*;
pub use airplane::*;
pub use booking::*;
pub use class_flight::*;
pub use flight::*;
pub use home::*;
pub use loyalty::*;
pub use passenger::*;
pub use seat::*;

/// Turn optional filter values into query pairs, skipping the unset ones.
pub(crate) fn filter_pairs(pairs: Vec<(&'static str, Option<String>)>) -> Vec<(&'static str, String)> {
    pairs
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
}
