use reqwest::{Client, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

pub mod error;

pub use error::ClientError;

pub type Result<T> = std::result::Result<T, ClientError>;

/// One row of the remote price list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VegetableListing {
    pub name: String,
    pub price: f64,
    pub unit: Option<String>,
}

/// Receipt fields as returned by the service.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptData {
    pub cashier_name: String,
    pub vegetable: String,
    pub quantity: f64,
    pub total_cost: f64,
    pub amount_given: f64,
    pub change_due: f64,
    pub items: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Removed {
    removed: bool,
}

#[derive(Debug, Serialize)]
struct CostParams<'a> {
    name: &'a str,
    quantity: f64,
}

/// Typed client for the vegetable pricing service.
///
/// Never retries; retry policy belongs to the caller.
pub struct GrocerClient {
    http: Client,
    base_url: String,
}

impl GrocerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn add_vegetable(&self, name: &str, price: f64, unit: Option<&str>) -> Result<()> {
        let url = format!("{}/vegetable/add", self.base_url);
        let request = self
            .http
            .post(&url)
            .json(&json!({ "name": name, "price": price, "unit": unit }));
        self.execute::<serde_json::Value>(request).await?;
        Ok(())
    }

    pub async fn update_vegetable(&self, name: &str, price: f64, unit: Option<&str>) -> Result<()> {
        let url = format!("{}/vegetable/update", self.base_url);
        let request = self
            .http
            .post(&url)
            .json(&json!({ "name": name, "price": price, "unit": unit }));
        self.execute::<serde_json::Value>(request).await?;
        Ok(())
    }

    /// Returns whether an entry actually existed; deleting an absent
    /// vegetable succeeds with `false`.
    pub async fn delete_vegetable(&self, name: &str) -> Result<bool> {
        let url = format!("{}/vegetable/delete", self.base_url);
        let request = self.http.post(&url).json(&json!({ "name": name }));
        let removed: Removed = require_data(self.execute(request).await?)?;
        Ok(removed.removed)
    }

    /// Total cost of `quantity` units at the listed price.
    pub async fn vegetable_cost(&self, name: &str, quantity: f64) -> Result<f64> {
        let url = format!("{}/vegetable/cost", self.base_url);
        let request = self.http.get(&url).query(&CostParams { name, quantity });
        require_data(self.execute(request).await?)
    }

    pub async fn list_vegetables(&self) -> Result<Vec<VegetableListing>> {
        let url = format!("{}/vegetable/list", self.base_url);
        require_data(self.execute(self.http.get(&url)).await?)
    }

    pub async fn calculate_receipt(
        &self,
        clerk_id: &str,
        name: &str,
        quantity: f64,
        amount_given: f64,
    ) -> Result<ReceiptData> {
        let url = format!("{}/receipt/calculate", self.base_url);
        let request = self.http.post(&url).json(&json!({
            "clerkId": clerk_id,
            "name": name,
            "quantity": quantity,
            "amountGiven": amount_given,
        }));
        require_data(self.execute(request).await?)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<Option<T>> {
        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!(%status, "response received");
        decode_envelope(status, &bytes)
    }
}

/// Split the three client-visible outcomes apart: the request never
/// completed, the body was not a service envelope, or the service itself
/// rejected the request.
fn decode_envelope<T: DeserializeOwned>(status: StatusCode, bytes: &[u8]) -> Result<Option<T>> {
    let envelope: Envelope<T> = match serde_json::from_slice(bytes) {
        Ok(envelope) => envelope,
        Err(_) if !status.is_success() => return Err(ClientError::UnexpectedStatus { status }),
        Err(err) => return Err(ClientError::Malformed(err)),
    };

    if envelope.success {
        Ok(envelope.data)
    } else {
        Err(ClientError::Rejected(
            envelope.error.unwrap_or_else(|| "unknown error".to_string()),
        ))
    }
}

fn require_data<T>(data: Option<T>) -> Result<T> {
    data.ok_or(ClientError::EmptyEnvelope)
}
