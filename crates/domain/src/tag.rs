//! Open-string discriminators.
//!
//! Fields such as `type`, `mode` and `listen` take values from a documented set,
//! but newer Postman versions and third-party tools add their own. Each tag is a
//! string newtype with named constants for the documented values; anything else
//! parses and round-trips unchanged.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! open_tag {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $( $(#[$konst_meta:meta])* $konst:ident = $value:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Cow<'static, str>);

        impl $name {
            $(
                $(#[$konst_meta])*
                pub const $konst: Self = Self(Cow::Borrowed($value));
            )+

            /// Every documented value, in schema order.
            pub const KNOWN: &'static [&'static str] = &[$($value),+];

            /// Wraps any tag string, documented or not.
            #[must_use]
            pub fn new(value: impl Into<String>) -> Self {
                Self(Cow::Owned(value.into()))
            }

            /// The tag exactly as stored.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Whether the tag is one of the documented values.
            #[must_use]
            pub fn is_known(&self) -> bool {
                Self::KNOWN.contains(&self.as_str())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self::new(value)
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.as_str() == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.as_str() == *other
            }
        }
    };
}

open_tag! {
    /// Value type hint of a [`Variable`](crate::Variable).
    pub struct VariableType {
        /// `string`
        STRING = "string",
        /// `boolean`
        BOOLEAN = "boolean",
        /// `any`
        ANY = "any",
        /// `number`
        NUMBER = "number",
    }
}

open_tag! {
    /// Lifecycle hook an [`Event`](crate::Event) listens on.
    pub struct EventListen {
        /// Runs after the response arrives.
        TEST = "test",
        /// Runs before the request is sent.
        PRE_REQUEST = "prerequest",
    }
}

open_tag! {
    /// Discriminator of an [`Auth`](crate::Auth) block.
    pub struct AuthType {
        /// AWS Signature v4
        AWSV4 = "awsv4",
        /// HTTP Basic
        BASIC = "basic",
        /// Bearer token
        BEARER = "bearer",
        /// HTTP Digest
        DIGEST = "digest",
        /// Hawk
        HAWK = "hawk",
        /// NTLM
        NTLM = "ntlm",
        /// `OAuth` 1.0
        OAUTH1 = "oauth1",
        /// `OAuth` 2.0
        OAUTH2 = "oauth2",
        /// Explicitly no authentication.
        NOAUTH = "noauth",
    }
}

open_tag! {
    /// Discriminator of a [`RequestBody`](crate::RequestBody).
    pub struct RequestBodyMode {
        /// Raw text body.
        RAW = "raw",
        /// `application/x-www-form-urlencoded` parameters.
        URL_ENCODED = "urlencoded",
        /// `multipart/form-data` parameters.
        FORM_DATA = "formdata",
        /// Binary file upload.
        FILE = "file",
    }
}
