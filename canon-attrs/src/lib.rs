mod error_kind;

use error_kind::ErrorKindStruct;
use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

/// Derives the [`ErrorKind`] trait for the given struct.
///
/// This trait can be derived for unit structs and structs with named fields.
///
/// The information of the error can be customized using the `error` attribute by adding the
/// corresponding tags to it:
/// ```
/// use canon_attrs::ErrorKind;
/// use canon_error::ErrorKind;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(message = "unexpected end of file", labels = ["add something here"])]
/// pub struct Foo;
///
/// #[derive(Debug, ErrorKind)]
/// #[error(
///     message = format!("unknown variable `{}`", letter),
///     labels = ["this variable"],
///     help = "use a single letter from `t` to `z`",
/// )]
/// pub struct Bar {
///     letter: char,
/// }
///
/// assert_eq!(Foo.message(), "unexpected end of file");
/// assert_eq!(Bar { letter: 'a' }.message(), "unknown variable `a`");
/// ```
///
/// The following tags are available:
///
/// | Tag         | Description                                                                  |
/// | ----------- | ---------------------------------------------------------------------------- |
/// | `message`   | The message displayed at the top of the error when it is displayed.          |
/// | `labels`    | An array of label texts, one for each span the error is reported with.       |
/// | `help`      | Optional help text for the error, describing what the user can do to fix it. |
///
/// Each tag accepts an expression, and each may appear at most once. Only `message` is required.
/// For structs with named fields, the expressions are evaluated with references to the fields in
/// scope under the same names. Enums and tuple structs are rejected.
#[proc_macro_derive(ErrorKind, attributes(error))]
pub fn error_kind(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    let target = match ErrorKindStruct::from_input(input) {
        Ok(target) => target,
        Err(err) => return err.to_compile_error().into(),
    };

    let name = target.name();
    quote! {
        impl ErrorKind for #name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            #target
        }
    }.into()
}
