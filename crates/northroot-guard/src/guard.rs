use crate::errors::{GuardError, GuardResult};
use crate::nullable::Nullable;

fn reject<T>(err: GuardError) -> GuardResult<T> {
    #[cfg(feature = "tracing")]
    tracing::debug!(
        param_name = err.param_name(),
        kind = ?err.kind(),
        "guard rejected argument: {}",
        err
    );
    Err(err)
}

/// Guards against an absent argument.
///
/// Returns the present value so it can be bound in place.
pub fn against_null_argument<T>(param_name: &str, argument: Option<T>) -> GuardResult<T> {
    match argument {
        Some(value) => Ok(value),
        None => reject(GuardError::null_argument(param_name)),
    }
}

/// Guards against an absent argument if `T` can be absent at all.
///
/// Value types that are never null (see [`Nullable`]) always pass.
pub fn against_null_argument_if_nullable<T>(param_name: &str, argument: &T) -> GuardResult<()>
where
    T: Nullable + ?Sized,
{
    if argument.is_null() {
        return reject(GuardError::null_argument(param_name));
    }
    Ok(())
}

/// Guards against an absent property of a present argument.
///
/// The error names `param_name` as the failing parameter; the property only
/// appears in the message.
pub fn against_null_argument_property<T>(
    param_name: &str,
    property_name: &str,
    property: Option<T>,
) -> GuardResult<T> {
    match property {
        Some(value) => Ok(value),
        None => reject(GuardError::null_property(param_name, property_name)),
    }
}

/// Guards against an absent property if `T` can be absent at all.
pub fn against_null_argument_property_if_nullable<T>(
    param_name: &str,
    property_name: &str,
    property: &T,
) -> GuardResult<()>
where
    T: Nullable + ?Sized,
{
    if property.is_null() {
        return reject(GuardError::null_property(param_name, property_name));
    }
    Ok(())
}

/// Guards against the empty string.
///
/// An absent argument passes, as does a white-space only one.
pub fn against_empty_string(param_name: &str, argument: Option<&str>) -> GuardResult<()> {
    if argument == Some("") {
        return reject(GuardError::empty_string(param_name));
    }
    Ok(())
}

/// Guards against an absent or empty string.
///
/// The null check runs first, so an absent argument is always reported as
/// [`GuardError::NullArgument`].
pub fn against_null_or_empty_string<'a>(
    param_name: &str,
    argument: Option<&'a str>,
) -> GuardResult<&'a str> {
    let value = against_null_argument(param_name, argument)?;
    against_empty_string(param_name, Some(value))?;
    Ok(value)
}

/// Guards against an absent, empty, or white-space only string.
pub fn against_null_or_white_space_string<'a>(
    param_name: &str,
    argument: Option<&'a str>,
) -> GuardResult<&'a str> {
    let value = against_null_argument(param_name, argument)?;
    if value.trim().is_empty() {
        return reject(GuardError::empty_or_white_space_string(param_name));
    }
    Ok(value)
}
