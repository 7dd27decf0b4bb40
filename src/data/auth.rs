use super::Environment;
use serde::Serialize;

const VERSION: &str = "1.0.0";
const AUTHENTICATION_TYPE: &str = "AAD_CERT";
const TENANT_ID: &str = "72f988bf-86f1-41af-91ab-2d7cd011db47";
const STORE_LOCATION: &str = "LocalMachine";
const STORE_NAME: &str = "My";

/// Identity the ESRP client authenticates with (`auth.json`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AuthConfig {
    pub version: String,
    pub authentication_type: String,
    pub tenant_id: String,
    pub client_id: String,
    pub auth_cert: Certificate,
    pub request_signing_cert: Certificate,
}

/// A certificate in the local certificate store
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Certificate {
    pub subject_name: String,
    pub store_location: String,
    pub store_name: String,
}

impl Certificate {
    fn local_machine(subject_name: String) -> Self {
        Self {
            subject_name,
            store_location: STORE_LOCATION.to_string(),
            store_name: STORE_NAME.to_string(),
        }
    }
}

impl AuthConfig {
    pub fn new(env: &Environment) -> Self {
        Self {
            version: VERSION.to_string(),
            authentication_type: AUTHENTICATION_TYPE.to_string(),
            tenant_id: TENANT_ID.to_string(),
            client_id: env.aad_id.clone(),
            auth_cert: Certificate::local_machine(format!(
                "CN={}.microsoft.com",
                env.aad_id_temp
            )),
            request_signing_cert: Certificate::local_machine(format!("CN={}", env.aad_id)),
        }
    }
}
