use thiserror::Error;

/// Failures of circuit synthesis.
///
/// All of these are contract violations of the caller or of the lowering
/// step; none is retried, and no partial circuit is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("Cannot lower '{kind}' expression `{expression}` to gates")]
    UnsupportedExpression { kind: &'static str, expression: String },

    #[error("Operator '{kind}' has no operands")]
    EmptyOperation { kind: &'static str },

    #[error("Variable '{name}' is used by a gate but has no input bus slot")]
    UnregisteredVariable { name: String },
}

pub type Result<T, E = BuildError> = std::result::Result<T, E>;
