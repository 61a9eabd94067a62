use thiserror::Error;

#[derive(Error, Debug)]
pub enum TargetError {
    #[error("position modifiers must lead the modifier chain")]
    MisplacedPositionModifier,

    #[error("malformed target descriptor: {0}")]
    MalformedDescriptor(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TargetError>;
