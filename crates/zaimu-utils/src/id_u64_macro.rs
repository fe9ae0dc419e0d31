// zaimu-core-client/zaimu-utils
//
// Copyright: 2024, Zaimu Works
// License: Mozilla Public License v2.0 (MPL v2.0)

#[macro_export]
macro_rules! id_u64 {
    ($(#[$meta:meta])* $t:ident) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Eq,
            PartialEq,
            Ord,
            PartialOrd,
            Hash,
            Clone,
            Copy,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $t(u64);

        impl $t {
            #[allow(dead_code)]
            pub fn into_inner(self) -> u64 {
                self.0
            }
        }

        impl From<u64> for $t {
            fn from(id: u64) -> $t {
                $t(id)
            }
        }

        impl From<$t> for u64 {
            fn from(id: $t) -> u64 {
                id.0
            }
        }

        impl std::str::FromStr for $t {
            type Err = std::num::ParseIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Ok($t(s.parse()?))
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}
