//! Media deletion for `AdminClient`.

use crate::error::AdminError;
use crate::graphql::{DELETE_PRODUCT_MEDIA_MUTATION, DELETE_PRODUCT_MEDIA_OPERATION};
use crate::types::{DeleteMediaData, DeleteMediaVariables};

use super::AdminClient;

impl AdminClient {
    /// Permanently deletes `media_ids` from the product `product_id` with one
    /// `productDeleteMedia` mutation.
    ///
    /// An empty `media_ids` slice is a no-op: no request is sent and `Ok(0)`
    /// is returned.
    ///
    /// Returns the number of media the platform reports as deleted, or the
    /// number requested when the payload omits `deletedMediaIds`.
    ///
    /// # Errors
    ///
    /// - [`AdminError::UserErrors`]: the payload carries `mediaUserErrors`;
    ///   the whole deletion is treated as failed.
    /// - [`AdminError::MissingData`]: the mutation returned no payload.
    /// - Any transport or GraphQL error from the request itself.
    pub async fn delete_product_media(
        &self,
        product_id: &str,
        media_ids: &[String],
    ) -> Result<usize, AdminError> {
        if media_ids.is_empty() {
            return Ok(0);
        }

        let data: DeleteMediaData = self
            .execute(
                DELETE_PRODUCT_MEDIA_OPERATION,
                DELETE_PRODUCT_MEDIA_MUTATION,
                DeleteMediaVariables {
                    product_id,
                    media_ids,
                },
            )
            .await?;

        let payload = data
            .product_delete_media
            .ok_or_else(|| AdminError::MissingData {
                operation: DELETE_PRODUCT_MEDIA_OPERATION.to_owned(),
            })?;

        if !payload.media_user_errors.is_empty() {
            let messages = payload
                .media_user_errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            return Err(AdminError::UserErrors {
                product_id: product_id.to_owned(),
                messages,
            });
        }

        let deleted = payload
            .deleted_media_ids
            .map_or(media_ids.len(), |ids| ids.len());
        tracing::debug!(
            product_id,
            requested = media_ids.len(),
            deleted,
            "deleted product media"
        );
        Ok(deleted)
    }
}
