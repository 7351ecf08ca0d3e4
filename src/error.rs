use crate::client::session::PeerId;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Composition or dispatch reached a state it cannot proceed from,
    /// e.g. a cluster factory failure or an unregistered command callback.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),

    /// The fabric index does not reference a commissioned fabric.
    #[error("no fabric with index {0}")]
    InvalidFabricIndex(u8),

    #[error("no endpoint with id {0}")]
    NoEndpoint(u16),

    #[error("no established session for peer {0:?}")]
    NoSession(PeerId),

    #[error("session establishment with {0:?} failed")]
    SessionEstablishment(PeerId),
}
