// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

/// Declares one or more boxed types together with their tags.
///
/// Each entry `vis Name: T => TagName;` expands to an uninhabited tag type
/// `TagName` and a type alias `Name = Boxed<T, TagName>`. Attributes and doc
/// comments before an entry are applied to the alias.
///
/// # Examples
///
/// ```rust
/// boxed::boxed_type! {
///     /// Distance in meters.
///     pub Meters: f64 => MetersTag;
///     /// Number of retries.
///     pub Retries: u32 => RetriesTag;
/// }
///
/// let d = Meters::new(1.5) * 2.0;
/// assert_eq!(d.get(), 3.0);
/// assert_eq!(format!("{:?}", Retries::new(3)), "RetriesTag(3)");
/// ```
///
/// Every entry gets its own tag, so aliases over the same primitive do not
/// mix:
///
/// ```compile_fail
/// boxed::boxed_type! {
///     Rows: usize => RowsTag;
///     Columns: usize => ColumnsTag;
/// }
///
/// let r: Rows = Columns::new(3);
/// ```
#[macro_export]
macro_rules! boxed_type {
    ($($(#[$meta:meta])* $vis:vis $name:ident : $inner:ty => $tag:ident;)+) => {
        $(
            #[doc = concat!("Tag type of [`", stringify!($name), "`].")]
            $vis enum $tag {}

            $(#[$meta])*
            $vis type $name = $crate::Boxed<$inner, $tag>;
        )+
    };
}
