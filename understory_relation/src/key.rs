// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stringification of extracted record fields.
//!
//! Parent keys, option values and labels end up in string-typed HTML attributes and script
//! literals, so every extracted field is turned into a `String` before it is compared or stored.
//! [`IntoKey`] is that conversion.

use std::borrow::Cow;

/// Conversion of an extracted record field into the string form used for keys and labels.
///
/// Implemented for string types, `char`, `bool`, the primitive integers, shared references to
/// any of those, and `Option<T>`. An absent value (`None`) becomes the empty string, so records
/// without a reference land in the `""` parent bucket.
pub trait IntoKey {
    /// Produce the string form of this value.
    fn into_key(self) -> String;
}

impl IntoKey for String {
    #[inline]
    fn into_key(self) -> String {
        self
    }
}

impl IntoKey for &str {
    #[inline]
    fn into_key(self) -> String {
        self.to_string()
    }
}

impl IntoKey for &String {
    #[inline]
    fn into_key(self) -> String {
        self.clone()
    }
}

impl IntoKey for Cow<'_, str> {
    #[inline]
    fn into_key(self) -> String {
        self.into_owned()
    }
}

impl<T: IntoKey> IntoKey for Option<T> {
    #[inline]
    fn into_key(self) -> String {
        match self {
            Some(v) => v.into_key(),
            None => String::new(),
        }
    }
}

macro_rules! display_keys {
    ($($t:ty),* $(,)?) => {
        $(
            impl IntoKey for $t {
                #[inline]
                fn into_key(self) -> String {
                    self.to_string()
                }
            }

            impl IntoKey for &$t {
                #[inline]
                fn into_key(self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

display_keys!(
    char, bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
);
