//! Test helper module
//!
//! Mock backend implementation and convenient factory helpers.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::RwLock;

use kurs24_backend::{
    BackendError, CreateTenantRequest, ProvisioningApi, RegisterUserRequest, SubdomainCheck,
    TenantCreated, TenantStatusResponse,
};

use crate::types::Session;

type BackendResult<T> = std::result::Result<T, BackendError>;

// ===== MockBackend =====

/// Scripted in-memory stand-in for the provisioning backend.
///
/// Status reads consume a script queue; the last entry repeats once the
/// queue is down to one element, so pollers can run indefinitely against a
/// stable state. Call counters allow asserting on traffic (idempotent stop,
/// no duplicate registration).
pub struct MockBackend {
    create_result: RwLock<Option<BackendResult<TenantCreated>>>,
    status_script: RwLock<VecDeque<BackendResult<Option<TenantStatusResponse>>>>,
    check_result: RwLock<Option<BackendResult<SubdomainCheck>>>,
    user_ids: RwLock<HashMap<String, i64>>,
    lookup_error: RwLock<Option<BackendError>>,
    next_registered_id: RwLock<i64>,
    create_calls: RwLock<u32>,
    status_calls: RwLock<u32>,
    check_calls: RwLock<u32>,
    lookup_calls: RwLock<u32>,
    register_calls: RwLock<u32>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            create_result: RwLock::new(None),
            status_script: RwLock::new(VecDeque::new()),
            check_result: RwLock::new(None),
            user_ids: RwLock::new(HashMap::new()),
            lookup_error: RwLock::new(None),
            next_registered_id: RwLock::new(1),
            create_calls: RwLock::new(0),
            status_calls: RwLock::new(0),
            check_calls: RwLock::new(0),
            lookup_calls: RwLock::new(0),
            register_calls: RwLock::new(0),
        }
    }

    pub async fn set_create_result(&self, created: TenantCreated) {
        *self.create_result.write().await = Some(Ok(created));
    }

    pub async fn set_create_error(&self, err: BackendError) {
        *self.create_result.write().await = Some(Err(err));
    }

    /// Script the status endpoint with raw results.
    pub async fn script_status(
        &self,
        script: Vec<BackendResult<Option<TenantStatusResponse>>>,
    ) {
        *self.status_script.write().await = script.into();
    }

    /// Script the status endpoint with a sequence of records.
    pub async fn set_status_sequence(&self, sequence: Vec<TenantStatusResponse>) {
        self.script_status(sequence.into_iter().map(|w| Ok(Some(w))).collect())
            .await;
    }

    /// Make every status read fail with the given error.
    pub async fn set_status_error(&self, err: BackendError) {
        self.script_status(vec![Err(err)]).await;
    }

    pub async fn set_check_result(&self, check: SubdomainCheck) {
        *self.check_result.write().await = Some(Ok(check));
    }

    pub async fn set_user_id(&self, email: &str, id: i64) {
        self.user_ids.write().await.insert(email.to_string(), id);
    }

    pub async fn set_lookup_error(&self, err: BackendError) {
        *self.lookup_error.write().await = Some(err);
    }

    pub async fn set_next_registered_id(&self, id: i64) {
        *self.next_registered_id.write().await = id;
    }

    pub async fn create_calls(&self) -> u32 {
        *self.create_calls.read().await
    }

    pub async fn status_calls(&self) -> u32 {
        *self.status_calls.read().await
    }

    pub async fn check_calls(&self) -> u32 {
        *self.check_calls.read().await
    }

    pub async fn lookup_calls(&self) -> u32 {
        *self.lookup_calls.read().await
    }

    pub async fn register_calls(&self) -> u32 {
        *self.register_calls.read().await
    }
}

#[async_trait]
impl ProvisioningApi for MockBackend {
    async fn create_tenant(&self, req: &CreateTenantRequest) -> BackendResult<TenantCreated> {
        *self.create_calls.write().await += 1;
        match self.create_result.read().await.clone() {
            Some(result) => result,
            None => Ok(TenantCreated {
                url: format!("https://{}.kurs24.io", req.subdomain),
                message: format!("Academy {}.kurs24.io wird erstellt!", req.subdomain),
                estimated_time: "5-10 Minuten".to_string(),
                tenant_id: Some(format!("tenant_{}", req.subdomain)),
            }),
        }
    }

    async fn tenant_status(
        &self,
        _user_id: i64,
    ) -> BackendResult<Option<TenantStatusResponse>> {
        *self.status_calls.write().await += 1;
        let mut script = self.status_script.write().await;
        match script.len() {
            0 => Ok(None),
            // The last scripted state repeats
            1 => script.front().cloned().unwrap_or(Ok(None)),
            _ => script.pop_front().unwrap_or(Ok(None)),
        }
    }

    async fn user_id_by_email(&self, email: &str) -> BackendResult<Option<i64>> {
        *self.lookup_calls.write().await += 1;
        if let Some(err) = self.lookup_error.read().await.clone() {
            return Err(err);
        }
        Ok(self.user_ids.read().await.get(email).copied())
    }

    async fn register_user(&self, req: &RegisterUserRequest) -> BackendResult<i64> {
        *self.register_calls.write().await += 1;
        let id = *self.next_registered_id.read().await;
        // Registration makes the user discoverable by a later lookup
        self.user_ids.write().await.insert(req.email.clone(), id);
        Ok(id)
    }

    async fn check_subdomain(&self, subdomain: &str) -> BackendResult<SubdomainCheck> {
        *self.check_calls.write().await += 1;
        match self.check_result.read().await.clone() {
            Some(result) => result,
            None => Ok(SubdomainCheck {
                subdomain: subdomain.to_string(),
                available: true,
                message: "Subdomain ist verfügbar".to_string(),
            }),
        }
    }
}

// ===== factory helpers =====

pub fn session_with_cached_id(id: i64) -> Session {
    Session {
        email: "owner@example.com".to_string(),
        name: Some("Maria".to_string()),
        auth_provider: "google".to_string(),
        db_user_id: Some(id),
        plan: Some("basis".to_string()),
    }
}

pub fn session_without_cached_id() -> Session {
    Session {
        email: "owner@example.com".to_string(),
        name: None,
        auth_provider: "google".to_string(),
        db_user_id: None,
        plan: None,
    }
}

pub fn provisioning_wire(subdomain: &str, progress: u8) -> TenantStatusResponse {
    TenantStatusResponse {
        status: "provisioning".to_string(),
        subdomain: subdomain.to_string(),
        progress: Some(progress),
        domain: None,
        ssl_status: None,
        dns_status: None,
        updated_at: None,
    }
}

pub fn terminal_wire(subdomain: &str, status: &str) -> TenantStatusResponse {
    TenantStatusResponse {
        status: status.to_string(),
        subdomain: subdomain.to_string(),
        progress: Some(100),
        domain: Some(format!("{subdomain}.kurs24.io")),
        ssl_status: Some("issued".to_string()),
        dns_status: Some("propagated".to_string()),
        updated_at: Some("2025-03-01T10:00:00+00:00".to_string()),
    }
}
