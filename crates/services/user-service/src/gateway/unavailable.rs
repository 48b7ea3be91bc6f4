use domain::GatewayError;

use super::DeletionGateway;

/// Gateway used when no backing store has been wired in.
///
/// Every request fails with [`GatewayError::Unavailable`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableGateway;

impl DeletionGateway for UnavailableGateway {
    fn delete(&self, id: i32) -> Result<bool, GatewayError> {
        Err(GatewayError::unavailable(format!(
            "no backing store configured to delete user {}",
            id
        )))
    }
}
