use async_trait::async_trait;
use mockall::mock;
use venuebook_core::{
    errors::VenueResult,
    models::slot::{CreateSlotRequest, SlotRecord},
};

use crate::api_client::SlotEndpoint;

// Mock slot endpoint for testing
mock! {
    pub SlotEndpoint {}

    #[async_trait]
    impl SlotEndpoint for SlotEndpoint {
        async fn create_slot(&self, request: &CreateSlotRequest) -> VenueResult<SlotRecord>;
    }
}
