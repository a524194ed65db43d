//! HTTP client for network calls against the receivables API

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::ApiEnvelope;
use shared::models::{
    ContractCreate, Customer, CustomerCreate, DashboardData, DashboardQuery, DebtPage, DebtQuery,
    FinalizePriceRequest, LoginRequest, LoginResponse, PaymentCreate, User,
};

/// HTTP client for making requests to the receivables server
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// Set the authentication token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Get the current token
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Build authorization header value
    fn auth_header(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("Bearer {}", t))
    }

    /// Join the base URL and an endpoint path
    fn endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let url = self.endpoint_url(path);
        let mut request = self.client.get(&url);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a GET request with a query string
    pub async fn get_query<T, Q>(&self, path: &str, query: &Q) -> ClientResult<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = self.endpoint_url(path);
        let mut request = self.client.get(&url).query(query);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let url = self.endpoint_url(path);
        let mut request = self.client.post(&url).json(body);

        if let Some(auth) = self.auth_header() {
            request = request.header(reqwest::header::AUTHORIZATION, auth);
        }

        let response = request.send().await?;
        Self::handle_response(response).await
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await?;
            return match status {
                StatusCode::UNAUTHORIZED => Err(ClientError::Unauthorized),
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                _ => Err(ClientError::Api {
                    status: status.as_u16() as i32,
                    message: text,
                }),
            };
        }

        response.json().await.map_err(Into::into)
    }

    /// Unwrap an envelope into its payload
    fn unwrap_object<T>(envelope: ApiEnvelope<T>) -> ClientResult<T> {
        if !envelope.is_success() {
            return Err(Self::envelope_error(envelope.status, envelope.message));
        }
        envelope.object.ok_or_else(|| {
            ClientError::InvalidResponse("success envelope carried no payload".to_string())
        })
    }

    /// Unwrap an envelope whose payload is irrelevant (insert acks)
    fn unwrap_ack<T>(envelope: ApiEnvelope<T>) -> ClientResult<()> {
        if !envelope.is_success() {
            return Err(Self::envelope_error(envelope.status, envelope.message));
        }
        Ok(())
    }

    fn envelope_error(status: i32, message: Option<String>) -> ClientError {
        ClientError::Api {
            status,
            message: message.unwrap_or_else(|| "request rejected by server".to_string()),
        }
    }

    // ========== Authenticate API ==========

    /// Log in and obtain tokens plus the permitted page list
    pub async fn login(
        &self,
        username: &str,
        password: &str,
        remember: bool,
    ) -> ClientResult<LoginResponse> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
            is_remember_password: remember,
        };

        let envelope = self
            .post::<ApiEnvelope<LoginResponse>, _>("api/Authenticate/Login", &request)
            .await?;
        Self::unwrap_object(envelope)
    }

    // ========== User API ==========

    /// List back-office users (the sales people referenced by customers)
    pub async fn get_all_users(&self) -> ClientResult<Vec<User>> {
        let envelope = self
            .get::<ApiEnvelope<Vec<User>>>("api/User/GetAllUsers")
            .await?;
        Self::unwrap_object(envelope)
    }

    /// Fetch one user by id
    pub async fn get_user_by_id(&self, id: i64) -> ClientResult<User> {
        let envelope = self
            .get::<ApiEnvelope<User>>(&format!("api/User/GetUserById/{}", id))
            .await?;
        Self::unwrap_object(envelope)
    }

    // ========== Customer API ==========

    /// List every customer with its assigned sales person
    pub async fn get_all_customers(&self) -> ClientResult<Vec<Customer>> {
        let envelope = self
            .get::<ApiEnvelope<Vec<Customer>>>("api/Customer/GetAllCustomers")
            .await?;
        Self::unwrap_object(envelope)
    }

    /// Create a customer; the server enforces name uniqueness
    pub async fn insert_customer(&self, customer: &CustomerCreate) -> ClientResult<()> {
        let envelope = self
            .post::<ApiEnvelope<serde_json::Value>, _>("api/Customer/InsertCustomer", customer)
            .await?;
        Self::unwrap_ack(envelope)
    }

    // ========== Contract API ==========

    /// Create a contract together with its order items
    pub async fn create_contract_with_order(&self, contract: &ContractCreate) -> ClientResult<()> {
        let envelope = self
            .post::<ApiEnvelope<serde_json::Value>, _>(
                "api/Contract/CreateContractWithOrder",
                contract,
            )
            .await?;
        Self::unwrap_ack(envelope)
    }

    /// Fetch the customer debt listing
    pub async fn get_customer_debts(&self, query: &DebtQuery) -> ClientResult<DebtPage> {
        let envelope = self
            .get_query::<ApiEnvelope<DebtPage>, _>("api/Contract/GetCustomerDebts", query)
            .await?;
        Self::unwrap_object(envelope)
    }

    // ========== Order API ==========

    /// Fix the final unit price of an order
    pub async fn choose_final_price(&self, request: &FinalizePriceRequest) -> ClientResult<()> {
        let envelope = self
            .post::<ApiEnvelope<serde_json::Value>, _>("api/Order/ChooseFinalPrice", request)
            .await?;
        Self::unwrap_ack(envelope)
    }

    // ========== Payment API ==========

    /// Record one collected payment against an order
    pub async fn insert_payment(&self, payment: &PaymentCreate) -> ClientResult<()> {
        let envelope = self
            .post::<ApiEnvelope<serde_json::Value>, _>("api/Payment/InsertPayment", payment)
            .await?;
        Self::unwrap_ack(envelope)
    }

    // ========== Dashboard API ==========

    /// Fetch the receivables dashboard aggregates
    pub async fn dashboard(&self, query: &DashboardQuery) -> ClientResult<DashboardData> {
        let envelope = self
            .get_query::<ApiEnvelope<DashboardData>, _>("api/Dashboard/dashboard", query)
            .await?;
        Self::unwrap_object(envelope)
    }
}
