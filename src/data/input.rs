use super::{Environment, SigningRequest};
use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};

const VERSION: &str = "1.0.0";
const LOCATION_TYPE_UNC: &str = "UNC";
const CUSTOMER_CORRELATION_ID: &str = "01A7F55F-6CDD-4123-B255-77E6F212CDAD";
const SIGNED_DIRECTORY: &str = "signed";
const TOOL_NAME: &str = "sign";
const TOOL_VERSION: &str = "1.0";

/// What to sign, where to put it, and how (`input.json`)
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignInputConfig {
    pub version: String,
    pub sign_batches: Vec<SignBatch>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignBatch {
    pub source_location_type: String,
    pub source_root_directory: String,
    pub destination_location_type: String,
    pub destination_root_directory: String,
    pub sign_request_files: Vec<SignRequestFile>,
    pub signing_info: SigningInfo,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignRequestFile {
    pub customer_correlation_id: String,
    pub source_location: String,
    pub destination_location: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SigningInfo {
    pub operations: Vec<Operation>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Operation {
    pub key_code: String,
    pub operation_code: String,
    /// Tool specific parameters, e.g. enabling the hardened runtime for macOS
    pub parameters: Map<String, Value>,
    pub tool_name: String,
    pub tool_version: String,
}

impl SignInputConfig {
    /// A single batch, signing a single file into `signed/` below the workspace.
    pub fn new(request: &SigningRequest, env: &Environment) -> Result<Self> {
        let file_to_sign = request.file_to_sign()?;

        // later duplicates win, but keep the position of the first
        let mut parameters = Map::new();
        for (name, value) in &request.extra_params {
            parameters.insert(name.clone(), Value::String(value.clone()));
        }

        Ok(Self {
            version: VERSION.to_string(),
            sign_batches: vec![SignBatch {
                source_location_type: LOCATION_TYPE_UNC.to_string(),
                source_root_directory: request.source_location()?,
                destination_location_type: LOCATION_TYPE_UNC.to_string(),
                destination_root_directory: env.workspace.display().to_string(),
                sign_request_files: vec![SignRequestFile {
                    customer_correlation_id: CUSTOMER_CORRELATION_ID.to_string(),
                    destination_location: format!("{SIGNED_DIRECTORY}/{file_to_sign}"),
                    source_location: file_to_sign,
                }],
                signing_info: SigningInfo {
                    operations: vec![Operation {
                        key_code: request.key_code.clone(),
                        operation_code: request.op_code.clone(),
                        parameters,
                        tool_name: TOOL_NAME.to_string(),
                        tool_version: TOOL_VERSION.to_string(),
                    }],
                },
            }],
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn env() -> Environment {
        Environment {
            aad_id: "id".into(),
            aad_id_temp: "temp".into(),
            workspace: "/work".into(),
        }
    }

    #[test]
    fn test_input_json() {
        let request = SigningRequest::new(
            "/a/b/file.bin",
            "CP-401337-Apple",
            "MacAppDeveloperSign",
            Some("Key1 Val1 Key2 Val2"),
        )
        .unwrap();

        let value = serde_json::to_value(SignInputConfig::new(&request, &env()).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "Version": "1.0.0",
                "SignBatches": [{
                    "SourceLocationType": "UNC",
                    "SourceRootDirectory": "/a/b",
                    "DestinationLocationType": "UNC",
                    "DestinationRootDirectory": "/work",
                    "SignRequestFiles": [{
                        "CustomerCorrelationId": "01A7F55F-6CDD-4123-B255-77E6F212CDAD",
                        "SourceLocation": "file.bin",
                        "DestinationLocation": "signed/file.bin"
                    }],
                    "SigningInfo": {
                        "Operations": [{
                            "KeyCode": "CP-401337-Apple",
                            "OperationCode": "MacAppDeveloperSign",
                            "Parameters": { "Key1": "Val1", "Key2": "Val2" },
                            "ToolName": "sign",
                            "ToolVersion": "1.0"
                        }]
                    }
                }]
            })
        );
    }

    #[test]
    fn test_no_params() {
        let request = SigningRequest::new("file.bin", "k", "o", None).unwrap();
        let input = SignInputConfig::new(&request, &env()).unwrap();
        assert!(input.sign_batches[0].signing_info.operations[0]
            .parameters
            .is_empty());
    }

    #[test]
    fn test_parameter_order() {
        let request = SigningRequest::new("f", "k", "o", Some("b 1 a 2 b 3")).unwrap();
        let input = SignInputConfig::new(&request, &env()).unwrap();
        let json =
            serde_json::to_string(&input.sign_batches[0].signing_info.operations[0].parameters)
                .unwrap();
        assert_eq!(json, r#"{"b":"3","a":"2"}"#);
    }
}
