use async_trait::async_trait;
use shared::{
    errors::ClientError,
    model::{EaterProfile, MakerProfile},
};
use std::sync::Arc;

pub type DynProfileClient = Arc<dyn ProfileClientTrait + Send + Sync>;

#[async_trait]
pub trait ProfileClientTrait {
    async fn maker_profile(&self, maker_id: i64) -> Result<MakerProfile, ClientError>;
    async fn save_maker_profile(
        &self,
        maker_id: i64,
        profile: &MakerProfile,
    ) -> Result<MakerProfile, ClientError>;
    async fn eater_profile(&self, eater_id: i64) -> Result<EaterProfile, ClientError>;
    async fn save_eater_profile(
        &self,
        eater_id: i64,
        profile: &EaterProfile,
    ) -> Result<EaterProfile, ClientError>;
}
