#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Unknown order type: {0:?}")]
    UnknownOrderType(String),
}
