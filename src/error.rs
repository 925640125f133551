use crate::constants::output::MAX_SIZE;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Invalid icon size: {0} (must be between 1 and {max} pixels)", max = MAX_SIZE)]
    InvalidSize(u32),
}
