use crate::{abstract_trait::ProfileClientTrait, service::BackendClient};
use async_trait::async_trait;
use reqwest::Method;
use serde::Serialize;
use shared::{
    errors::ClientError,
    model::{EaterProfile, MakerProfile},
};

#[derive(Serialize)]
struct MakerProfileBody<'a> {
    maker_id: i64,
    #[serde(flatten)]
    profile: &'a MakerProfile,
}

#[derive(Serialize)]
struct EaterProfileBody<'a> {
    eater_id: i64,
    #[serde(flatten)]
    profile: &'a EaterProfile,
}

#[derive(Clone)]
pub struct ProfileClientService {
    backend: BackendClient,
}

impl ProfileClientService {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

#[async_trait]
impl ProfileClientTrait for ProfileClientService {
    async fn maker_profile(&self, maker_id: i64) -> Result<MakerProfile, ClientError> {
        self.backend
            .get(
                "GetMakerProfile",
                "/api/maker/profile",
                &[("maker_id", maker_id.to_string())],
                "Unable to load profile",
            )
            .await
    }

    async fn save_maker_profile(
        &self,
        maker_id: i64,
        profile: &MakerProfile,
    ) -> Result<MakerProfile, ClientError> {
        self.backend
            .send_json(
                "SaveMakerProfile",
                Method::PUT,
                "/api/maker/profile",
                &MakerProfileBody { maker_id, profile },
                "Unable to save profile",
            )
            .await
    }

    async fn eater_profile(&self, eater_id: i64) -> Result<EaterProfile, ClientError> {
        self.backend
            .get(
                "GetEaterProfile",
                "/api/eater/profile",
                &[("eater_id", eater_id.to_string())],
                "Unable to load profile",
            )
            .await
    }

    async fn save_eater_profile(
        &self,
        eater_id: i64,
        profile: &EaterProfile,
    ) -> Result<EaterProfile, ClientError> {
        self.backend
            .send_json(
                "SaveEaterProfile",
                Method::PUT,
                "/api/eater/profile",
                &EaterProfileBody { eater_id, profile },
                "Unable to save profile",
            )
            .await
    }
}
