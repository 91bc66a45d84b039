//! Typed error classes built on an embedded node.

/// Makes a struct holding an [`ErrorNode`](crate::ErrorNode) field behave as
/// that node.
///
/// Implements `Display`, `std::error::Error` and every [`Fault`](crate::Fault)
/// capability for `$class` by forwarding to `$field`. The class keeps its own
/// type for [`extract`](crate::extract) and [`find`](crate::find), while
/// matching, unwrapping and root resolution see the node underneath.
///
/// Appending through the forwarded capability yields a plain node; give the
/// class its own `wrap` to keep the type.
///
/// # Examples
///
/// ```
/// use wrappable::{ErrorNode, ErrorRef, IntoCause, error_class, find, is};
///
/// #[derive(Debug, Clone)]
/// struct StorageError {
///     node: ErrorNode,
/// }
///
/// error_class!(StorageError, node);
///
/// impl StorageError {
///     fn new(msg: &str) -> Self {
///         Self { node: ErrorNode::new(msg) }
///     }
///
///     fn wrap(&self, err: impl IntoCause) -> Self {
///         Self { node: self.node.wrap(err) }
///     }
/// }
///
/// let io = ErrorRef::msg("disk full");
/// let err = StorageError::new("write block").wrap(&io);
/// assert_eq!(err.to_string(), "write block: disk full");
///
/// let err = ErrorRef::new(err);
/// assert!(is(&err, &io));
/// assert!(find::<StorageError>(&err).is_some());
/// ```
#[macro_export]
macro_rules! error_class {
    ($class:ty, $field:ident) => {
        impl ::std::fmt::Display for $class {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(&self.$field, f)
            }
        }

        impl ::std::error::Error for $class {
            fn source(&self) -> ::std::option::Option<&(dyn ::std::error::Error + 'static)> {
                ::std::error::Error::source(&self.$field)
            }
        }

        impl $crate::Fault for $class {
            fn as_unwrappable(&self) -> ::std::option::Option<&dyn $crate::Unwrappable> {
                $crate::Fault::as_unwrappable(&self.$field)
            }

            fn as_headed(&self) -> ::std::option::Option<&dyn $crate::Headed> {
                $crate::Fault::as_headed(&self.$field)
            }

            fn as_appendable(&self) -> ::std::option::Option<&dyn $crate::Appendable> {
                $crate::Fault::as_appendable(&self.$field)
            }

            fn as_self_matching(&self) -> ::std::option::Option<&dyn $crate::SelfMatching> {
                $crate::Fault::as_self_matching(&self.$field)
            }

            fn as_self_extracting(&self) -> ::std::option::Option<&dyn $crate::SelfExtracting> {
                $crate::Fault::as_self_extracting(&self.$field)
            }

            fn as_root_aware(&self) -> ::std::option::Option<&dyn $crate::RootAware> {
                $crate::Fault::as_root_aware(&self.$field)
            }
        }
    };
}
