//! Routine signature decomposition.
//!
//! The engine reports a routine's signature as text such as
//! `FOO(NUMBER(38,0), VARCHAR, DEFAULT BOOLEAN) RETURN NUMBER`. This module
//! recovers the ordered list of declared parameter types from that text and
//! resolves them against a [`TypeCatalog`].

mod split;

use log::debug;
use thiserror::Error;

use crate::catalog::{BaseDataType, TypeCatalog};

pub use split::split_top_level;

/// Marker closing the parameter list and opening the return section.
const RETURN_MARKER: &str = ") RETURN ";

/// Prefix the engine puts on parameters that carry a default value.
const DEFAULT_PREFIX: &str = "DEFAULT ";

/// Why a signature could not be decomposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("no `(` opens the parameter list")]
    MissingParameterList,
    #[error("no `) RETURN ` marker closes the parameter list")]
    MissingReturnMarker,
    #[error("`) RETURN ` marker precedes the parameter list")]
    ReturnBeforeParameterList,
    #[error("parameter {index} is empty")]
    EmptyParameter { index: usize },
}

/// Errors produced while decomposing a signature.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Structural markers are missing or out of order.
    #[error("malformed signature {signature:?}: {reason}")]
    MalformedSignature {
        signature: String,
        reason: MalformedReason,
    },
    /// A normalised parameter type is absent from the catalog.
    #[error("unknown data type {type_name:?} in parameter {segment:?}")]
    UnknownDataType { segment: String, type_name: String },
}

impl SignatureError {
    fn malformed(signature: &str, reason: MalformedReason) -> Self {
        Self::MalformedSignature {
            signature: signature.to_string(),
            reason,
        }
    }
}

/// One parameter as declared in the signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeclaredParameter<'a> {
    /// The trimmed segment exactly as split from the parameter list.
    pub segment: &'a str,
    /// Whether the segment carried the `DEFAULT ` prefix.
    pub has_default: bool,
    /// The type name with both decorations removed.
    pub type_name: &'a str,
    /// The size or precision qualifier, parentheses included.
    pub qualifier: Option<&'a str>,
}

impl<'a> DeclaredParameter<'a> {
    /// Strip the `DEFAULT ` prefix and any trailing qualifier from `segment`.
    #[must_use]
    pub fn from_segment(segment: &'a str) -> Self {
        let (has_default, rest) = segment
            .strip_prefix(DEFAULT_PREFIX)
            .map_or((false, segment), |rest| (true, rest));
        let (type_name, qualifier) = rest.find('(').map_or((rest, None), |idx| {
            (rest.get(..idx).unwrap_or(rest).trim_end(), rest.get(idx..))
        });
        Self {
            segment,
            has_default,
            type_name,
            qualifier,
        }
    }

    /// Resolve the normalised type name against `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`SignatureError::UnknownDataType`] if the catalog has no entry.
    pub fn resolve(&self, catalog: &impl TypeCatalog) -> Result<BaseDataType, SignatureError> {
        catalog
            .lookup(self.type_name)
            .ok_or_else(|| SignatureError::UnknownDataType {
                segment: self.segment.to_string(),
                type_name: self.type_name.to_string(),
            })
    }
}

/// Return the text strictly between the first `(` and the `) RETURN ` marker.
///
/// # Errors
///
/// Returns [`SignatureError::MalformedSignature`] when either marker is
/// missing or the return marker comes first.
pub fn parameter_list(signature: &str) -> Result<&str, SignatureError> {
    let open = signature
        .find('(')
        .ok_or_else(|| SignatureError::malformed(signature, MalformedReason::MissingParameterList))?;
    let close = signature
        .find(RETURN_MARKER)
        .ok_or_else(|| SignatureError::malformed(signature, MalformedReason::MissingReturnMarker))?;
    if close < open {
        return Err(SignatureError::malformed(
            signature,
            MalformedReason::ReturnBeforeParameterList,
        ));
    }
    signature
        .get(open + 1..close)
        .ok_or_else(|| SignatureError::malformed(signature, MalformedReason::MissingParameterList))
}

/// Split the parameter list of `signature` into declared parameters.
///
/// # Errors
///
/// Returns [`SignatureError::MalformedSignature`] if the markers are missing
/// or a parameter segment is blank.
pub fn declared_parameters(signature: &str) -> Result<Vec<DeclaredParameter<'_>>, SignatureError> {
    let body = parameter_list(signature)?;
    split_top_level(body)
        .into_iter()
        .enumerate()
        .map(|(index, segment)| {
            if segment.is_empty() {
                Err(SignatureError::malformed(
                    signature,
                    MalformedReason::EmptyParameter { index },
                ))
            } else {
                Ok(DeclaredParameter::from_segment(segment))
            }
        })
        .collect()
}

/// Normalised parameter type names, in declaration order, without catalog
/// resolution.
///
/// # Errors
///
/// See [`declared_parameters`].
pub fn parameter_type_names(signature: &str) -> Result<Vec<&str>, SignatureError> {
    Ok(declared_parameters(signature)?
        .into_iter()
        .map(|param| param.type_name)
        .collect())
}

/// Recover the ordered parameter types declared by `signature`.
///
/// # Examples
///
/// ```
/// use ddlcheck::catalog::{BaseDataType, BuiltinCatalog};
/// use ddlcheck::signature::parse_parameter_types;
///
/// let types = parse_parameter_types(
///     "FOO(NUMBER(38,0), VARCHAR, DEFAULT BOOLEAN) RETURN NUMBER",
///     &BuiltinCatalog,
/// )
/// .unwrap_or_default();
/// assert_eq!(
///     types,
///     vec![BaseDataType::Number, BaseDataType::Varchar, BaseDataType::Boolean]
/// );
/// ```
///
/// # Errors
///
/// Returns [`SignatureError::MalformedSignature`] for structural problems and
/// [`SignatureError::UnknownDataType`] when a type is not in `catalog`.
pub fn parse_parameter_types(
    signature: &str,
    catalog: &impl TypeCatalog,
) -> Result<Vec<BaseDataType>, SignatureError> {
    let types = declared_parameters(signature)?
        .iter()
        .map(|param| param.resolve(catalog))
        .collect::<Result<Vec<_>, _>>()?;
    debug!("resolved {} parameter types from {signature:?}", types.len());
    Ok(types)
}
