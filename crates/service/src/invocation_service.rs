//! Endpoint invocation on behalf of the invocation page.
//!
//! An invocation is split into three steps so that the display region is
//! never borrowed across the network call: `begin` opens the region and builds
//! the request path, `PendingInvocation::send` performs the single request,
//! and `finish` writes the outcome back unless a newer invocation has opened
//! the region in the meantime.

use apidir_client::{ApiClient, ClientError, Invocation};
use apidir_core::{
    DEFAULT_MAX_INLINE_IMAGE_BYTES, InvocationTicket, Item, Modal, ModalContent, ParamError,
    ParamForm, env_parse_with_default,
};

pub struct InvocationService {
    client: ApiClient,
    max_image_bytes: usize,
}

/// Request built from a form, not yet sent.
#[derive(Debug, Clone)]
pub struct PendingInvocation {
    ticket: InvocationTicket,
    path: String,
}

/// Outcome of a sent request, waiting to be written to the region.
#[derive(Debug)]
pub struct CompletedInvocation {
    ticket: InvocationTicket,
    result: Result<Invocation, ClientError>,
}

impl PendingInvocation {
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Sends the request. No retry and no deadline beyond the client's connect timeout.
    pub async fn send(self, client: &ApiClient) -> CompletedInvocation {
        let result = client.invoke(&self.path).await;
        if let Err(e) = &result {
            tracing::warn!(path = %self.path, error = %e, "endpoint invocation failed");
        }
        CompletedInvocation { ticket: self.ticket, result }
    }
}

impl InvocationService {
    #[must_use]
    pub fn new(client: ApiClient) -> Self {
        let max_image_bytes =
            env_parse_with_default("APIDIR_MAX_IMAGE_BYTES", DEFAULT_MAX_INLINE_IMAGE_BYTES);
        Self { client, max_image_bytes }
    }

    #[must_use]
    pub const fn with_max_image_bytes(mut self, max_image_bytes: usize) -> Self {
        self.max_image_bytes = max_image_bytes;
        self
    }

    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    /// Opens the region for `item` and builds the request path from `form`.
    ///
    /// An incomplete form leaves the region open and shows the fill-in message.
    pub fn begin(
        &self,
        modal: &mut Modal,
        item: &Item,
        form: &ParamForm,
    ) -> Result<PendingInvocation, ParamError> {
        let ticket = modal.open(item);
        match form.submit() {
            Ok(path) => {
                modal.start_loading(ticket);
                Ok(PendingInvocation { ticket, path })
            },
            Err(e) => {
                modal.fail(ticket, e.to_string());
                Err(e)
            },
        }
    }

    /// Writes a completed invocation into the region.
    ///
    /// Returns false when a newer invocation owns the region. Images larger
    /// than the inline limit are shown as an error instead.
    pub fn finish(&self, modal: &mut Modal, completed: CompletedInvocation) -> bool {
        match completed.result {
            Ok(Invocation::Json { url, pretty }) => {
                modal.resolve(completed.ticket, url, ModalContent::Json(pretty))
            },
            Ok(Invocation::Image { url, bytes, .. }) if bytes.len() > self.max_image_bytes => {
                tracing::warn!(
                    %url,
                    size = bytes.len(),
                    limit = self.max_image_bytes,
                    "image too large to inline"
                );
                modal.fail(
                    completed.ticket,
                    format!(
                        "Error: image is too large to display ({} bytes, limit {})",
                        bytes.len(),
                        self.max_image_bytes
                    ),
                )
            },
            Ok(Invocation::Image { url, content_type, bytes }) => {
                modal.resolve(completed.ticket, url, ModalContent::Image { content_type, bytes })
            },
            Err(e) => modal.fail(completed.ticket, format!("Error: {e}")),
        }
    }

    /// Runs all three steps against a region owned by the caller.
    pub async fn invoke(
        &self,
        modal: &mut Modal,
        item: &Item,
        form: &ParamForm,
    ) -> Result<(), ParamError> {
        let pending = self.begin(modal, item, form)?;
        let completed = pending.send(&self.client).await;
        self.finish(modal, completed);
        Ok(())
    }
}
