//! Ontology REST client.

use crate::config::OntologyConfig;
use crate::wire::{
    ApplyActionOptions, ApplyActionReq, ApplyActionRes, EditBedParameters, ErrorBody,
    ExecuteQueryReq, ExecuteQueryRes, ObjectPage, ACTION_VALIDATION_FAILED,
};
use crate::{ClientError, ClientResult};
use chrono::SecondsFormat;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use ward_core::{BedEdit, BedId, BedRecord, OntologyGateway, ValidationResult, WardResult};

/// [`OntologyGateway`] backed by the platform's REST API.
#[derive(Clone, Debug)]
pub struct OntologyClient {
    http: reqwest::Client,
    cfg: OntologyConfig,
}

impl OntologyClient {
    /// # Errors
    /// Returns `ClientError::ClientBuild` if the TLS backend cannot be initialised.
    pub fn new(cfg: OntologyConfig) -> ClientResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(cfg.timeout())
            .build()
            .map_err(ClientError::ClientBuild)?;
        Ok(Self { http, cfg })
    }

    async fn fetch_beds(&self) -> ClientResult<Vec<BedRecord>> {
        let page_size = self.cfg.page_size().to_string();
        let mut beds = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self
                .http
                .get(self.cfg.objects_url())
                .query(&[("pageSize", page_size.as_str())]);
            if let Some(token) = page_token.as_deref() {
                request = request.query(&[("pageToken", token)]);
            }

            let page: ObjectPage = self.send_json(request).await?;
            let fetched = page.data.len();
            beds.extend(page.data.into_iter().filter_map(|props| {
                let record = props.into_record();
                if record.is_none() {
                    tracing::warn!("skipping bed object without a primary key");
                }
                record
            }));
            tracing::debug!("fetched {} bed objects", fetched);

            match page.next_page_token {
                Some(token) if !token.is_empty() => {
                    if page_token.as_deref() == Some(token.as_str()) {
                        tracing::warn!("ontology repeated page token '{}', stopping", token);
                        break;
                    }
                    page_token = Some(token);
                }
                _ => break,
            }
        }

        Ok(beds)
    }

    async fn fetch_bed(&self, bed_id: &BedId) -> ClientResult<Option<BedRecord>> {
        let response = self
            .authorised(self.http.get(self.cfg.object_url(bed_id.as_str())))
            .send()
            .await
            .map_err(ClientError::Request)?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let props: ward_core::BedProperties = decode(response).await?;
        Ok(props.into_record())
    }

    async fn execute_queue_query(&self) -> ClientResult<Value> {
        let mut parameters = serde_json::Map::new();
        parameters.insert(
            self.cfg.queue_parameter().to_string(),
            json!({"type": "base", "objectType": self.cfg.object_type()}),
        );

        let request = self
            .http
            .post(self.cfg.queue_query_url())
            .json(&ExecuteQueryReq { parameters });
        let res: ExecuteQueryRes = self.send_json(request).await?;
        Ok(res.value)
    }

    async fn apply_edit(&self, edit: &BedEdit) -> ClientResult<ValidationResult> {
        let body = ApplyActionReq {
            options: ApplyActionOptions::VALIDATE_AND_EXECUTE_ALL,
            parameters: EditBedParameters {
                bed_data: edit.bed_id.as_str(),
                patient_name: &edit.patient_name,
                procedure_type: &edit.procedure_type,
                current_note: &edit.current_note,
                last_updated: edit.last_updated.to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        };

        let response = self
            .authorised(self.http.post(self.cfg.edit_action_url()).json(&body))
            .send()
            .await
            .map_err(ClientError::Request)?;

        match decode::<ApplyActionRes>(response).await {
            Ok(res) => Ok(ValidationResult::from_wire(&res.validation.result)),
            // Validate-and-execute reports failed submission criteria as a 400.
            Err(ClientError::Status { error_name, .. })
                if error_name == ACTION_VALIDATION_FAILED =>
            {
                Ok(ValidationResult::Invalid)
            }
            Err(e) => Err(e),
        }
    }

    fn authorised(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(self.cfg.token())
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> ClientResult<T> {
        let response = self
            .authorised(request)
            .send()
            .await
            .map_err(ClientError::Request)?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let status = response.status();
    if !status.is_success() {
        let error = response.json::<ErrorBody>().await.unwrap_or_default();
        tracing::warn!(
            "ontology request failed with HTTP {}: {}",
            status.as_u16(),
            error.error_name
        );
        return Err(ClientError::Status {
            status: status.as_u16(),
            error_name: error.error_name,
        });
    }
    response.json::<T>().await.map_err(ClientError::Decode)
}

#[async_trait::async_trait]
impl OntologyGateway for OntologyClient {
    async fn list_beds(&self) -> WardResult<Vec<BedRecord>> {
        Ok(self.fetch_beds().await?)
    }

    async fn queue_order(&self) -> WardResult<Value> {
        Ok(self.execute_queue_query().await?)
    }

    async fn get_bed(&self, bed_id: &BedId) -> WardResult<Option<BedRecord>> {
        Ok(self.fetch_bed(bed_id).await?)
    }

    async fn edit_bed(&self, edit: BedEdit) -> WardResult<ValidationResult> {
        Ok(self.apply_edit(&edit).await?)
    }
}
