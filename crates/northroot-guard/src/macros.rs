/// Guards against an absent argument, naming it after the expression.
///
/// ```
/// use northroot_guard::guard_null;
///
/// let port: Option<u16> = None;
/// let err = guard_null!(port).unwrap_err();
/// assert_eq!(err.param_name(), "port");
/// ```
#[macro_export]
macro_rules! guard_null {
    ($arg:expr) => {
        $crate::against_null_argument(stringify!($arg), $arg)
    };
    ($arg:expr, $name:expr) => {
        $crate::against_null_argument($name, $arg)
    };
}

/// Guards against an absent or empty string, naming it after the expression.
#[macro_export]
macro_rules! guard_null_or_empty {
    ($arg:expr) => {
        $crate::against_null_or_empty_string(stringify!($arg), $arg)
    };
    ($arg:expr, $name:expr) => {
        $crate::against_null_or_empty_string($name, $arg)
    };
}

/// Guards against an absent, empty, or white-space string, naming it after
/// the expression.
#[macro_export]
macro_rules! guard_null_or_white_space {
    ($arg:expr) => {
        $crate::against_null_or_white_space_string(stringify!($arg), $arg)
    };
    ($arg:expr, $name:expr) => {
        $crate::against_null_or_white_space_string($name, $arg)
    };
}
