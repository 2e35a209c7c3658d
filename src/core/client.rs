use crate::core::{ConfigProvider, PlacementApi};
use crate::domain::model::{
    DashboardSummary, Internship, InternshipUpdate, NewInternship, NewOffer, NewReport,
    NewStudent, Offer, OfferUpdate, Report, ReportUpdate, Student, StudentUpdate,
};
use crate::utils::error::{ClientError, Result};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://spr-placement.onrender.com/api";

/// 單次請求的選項；未指定時為不帶 body 的 GET
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    pub body: Option<String>,
    pub headers: Vec<(String, String)>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            method: Method::GET,
            body: None,
            headers: Vec::new(),
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn json<T: Serialize + ?Sized>(self, payload: &T) -> Result<Self> {
        let body = serde_json::to_string(payload)?;
        Ok(self.body(body))
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// 預設的 JSON Content-Type 與呼叫端標頭合併，同名時以呼叫端為準
    fn merged_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                ClientError::InvalidRequestError {
                    message: format!("Invalid header name '{}': {}", name, e),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| ClientError::InvalidRequestError {
                    message: format!("Invalid value for header '{}': {}", name, e),
                })?;
            headers.insert(header_name, header_value);
        }

        Ok(headers)
    }
}

/// 成功回應的內容；非 JSON 回應以 `NoContent` 表示
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse {
    Json(serde_json::Value),
    NoContent,
}

impl ApiResponse {
    pub fn is_no_content(&self) -> bool {
        matches!(self, ApiResponse::NoContent)
    }

    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            ApiResponse::Json(value) => Some(value),
            ApiResponse::NoContent => None,
        }
    }
}

fn is_json_content_type(content_type: &str) -> bool {
    let media_type = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    media_type == "application/json" || media_type.ends_with("+json")
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();

        if let Some(timeout) = config.timeout_seconds() {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        let client = builder.build().map_err(|e| ClientError::ConfigError {
            message: format!("Failed to build HTTP client: {}", e),
        })?;

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url_for(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// 對 `base_url + path` 發出請求並依回應的 Content-Type 決定是否解析 JSON
    pub async fn request(&self, path: &str, options: RequestOptions) -> Result<ApiResponse> {
        let url = self.url_for(path);
        let headers = options.merged_headers()?;

        tracing::debug!("📡 {} {}", options.method, url);

        let mut request = self
            .client
            .request(options.method.clone(), &url)
            .headers(headers);

        if let Some(body) = options.body {
            request = request.body(body);
        }

        // 建構階段的錯誤（例如無效的 URL）不是網路問題
        let response = request.send().await.map_err(|e| {
            if e.is_builder() {
                ClientError::InvalidRequestError {
                    message: format!("Could not build request for '{}': {}", url, e),
                }
            } else {
                ClientError::TransportError(e)
            }
        })?;
        let status = response.status();

        tracing::debug!("📡 {} {}: response status {}", options.method, url, status);

        if !status.is_success() {
            let body = response.text().await?;
            tracing::warn!(
                "❌ {} {} failed with status {}",
                options.method,
                url,
                status.as_u16()
            );
            return Err(ClientError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(is_json_content_type)
            .unwrap_or(false);

        if !is_json {
            return Ok(ApiResponse::NoContent);
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ApiResponse::NoContent);
        }

        let value = serde_json::from_slice(&bytes)?;
        Ok(ApiResponse::Json(value))
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str, options: RequestOptions) -> Result<T> {
        match self.request(path, options).await? {
            ApiResponse::Json(value) => Ok(serde_json::from_value(value)?),
            ApiResponse::NoContent => Err(ClientError::EmptyResponseError {
                path: path.to_string(),
            }),
        }
    }

    async fn send_json<B, T>(&self, method: Method, path: &str, payload: &B) -> Result<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let options = RequestOptions::new().method(method).json(payload)?;
        self.fetch(path, options).await
    }

    async fn delete(&self, path: &str) -> Result<()> {
        // 刪除成功時伺服器可能回傳確認訊息或空內容，兩者都接受
        self.request(path, RequestOptions::new().method(Method::DELETE))
            .await?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl PlacementApi for ApiClient {
    async fn list_students(&self) -> Result<Vec<Student>> {
        self.fetch("/students", RequestOptions::new()).await
    }

    async fn get_student(&self, id: i64) -> Result<Student> {
        self.fetch(&format!("/students/{}", id), RequestOptions::new())
            .await
    }

    async fn create_student(&self, student: &NewStudent) -> Result<Student> {
        self.send_json(Method::POST, "/students", student).await
    }

    async fn update_student(&self, id: i64, update: &StudentUpdate) -> Result<Student> {
        self.send_json(Method::PUT, &format!("/students/{}", id), update)
            .await
    }

    async fn delete_student(&self, id: i64) -> Result<()> {
        self.delete(&format!("/students/{}", id)).await
    }

    async fn list_offers(&self) -> Result<Vec<Offer>> {
        self.fetch("/offers", RequestOptions::new()).await
    }

    async fn create_offer(&self, offer: &NewOffer) -> Result<Offer> {
        self.send_json(Method::POST, "/offers", offer).await
    }

    async fn update_offer(&self, id: i64, update: &OfferUpdate) -> Result<Offer> {
        self.send_json(Method::PUT, &format!("/offers/{}", id), update)
            .await
    }

    async fn delete_offer(&self, id: i64) -> Result<()> {
        self.delete(&format!("/offers/{}", id)).await
    }

    async fn list_internships(&self) -> Result<Vec<Internship>> {
        self.fetch("/internships", RequestOptions::new()).await
    }

    async fn create_internship(&self, internship: &NewInternship) -> Result<Internship> {
        self.send_json(Method::POST, "/internships", internship)
            .await
    }

    async fn update_internship(&self, id: i64, update: &InternshipUpdate) -> Result<Internship> {
        self.send_json(Method::PUT, &format!("/internships/{}", id), update)
            .await
    }

    async fn delete_internship(&self, id: i64) -> Result<()> {
        self.delete(&format!("/internships/{}", id)).await
    }

    async fn create_report(&self, report: &NewReport) -> Result<Report> {
        self.send_json(Method::POST, "/reports", report).await
    }

    async fn update_report(&self, id: i64, update: &ReportUpdate) -> Result<Report> {
        self.send_json(Method::PUT, &format!("/reports/{}", id), update)
            .await
    }

    async fn delete_report(&self, id: i64) -> Result<()> {
        self.delete(&format!("/reports/{}", id)).await
    }

    async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        self.fetch("/dashboard/summary", RequestOptions::new())
            .await
    }
}
