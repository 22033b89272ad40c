//! Request/response boundary between a front end and [`HulkApi`]
//!
//! Each request is one JSON object naming the operation, answered by exactly
//! one JSON response. Failures are reported in the response, never by
//! dropping the connection, so a front end can keep the user's edits and show
//! the message.
//!
//! ```text
//! → {"request":"getAliases"}
//! ← {"status":"aliases","records":[{"type":"heading","line":0,...}]}
//! → {"request":"saveAliases","records":[...]}
//! ← {"status":"saved"}
//! ```

use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use super::HulkApi;
use crate::error::HulkError;
use crate::model::{AliasRecord, EnvRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "request", rename_all = "camelCase")]
pub enum Request {
    GetAliases,
    GetEnv,
    #[serde(rename = "getBashRC")]
    GetBashRc,
    SaveAliases { records: Vec<AliasRecord> },
    HasHulkConfig,
    GetHomeDir,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum Response {
    Aliases { records: Vec<AliasRecord> },
    Env { records: Vec<EnvRecord> },
    Lines { lines: Vec<String> },
    Saved,
    Flag { value: bool },
    Path { path: PathBuf },
    /// `not_found` lets the front end offer to create the missing file
    Error { message: String, not_found: bool },
}

impl From<HulkError> for Response {
    fn from(err: HulkError) -> Self {
        Response::Error {
            not_found: err.is_not_found(),
            message: err.to_string(),
        }
    }
}

impl HulkApi {
    /// Run a single request.
    pub fn handle(&self, request: Request) -> Response {
        let result = match request {
            Request::GetAliases => self.get_aliases().map(|records| Response::Aliases { records }),
            Request::GetEnv => self.get_env().map(|records| Response::Env { records }),
            Request::GetBashRc => self.get_bashrc().map(|lines| Response::Lines { lines }),
            Request::SaveAliases { records } => {
                self.save_aliases(&records).map(|()| Response::Saved)
            }
            Request::HasHulkConfig => Ok(Response::Flag {
                value: self.has_hulk_config(),
            }),
            Request::GetHomeDir => Ok(Response::Path {
                path: self.get_home_dir().to_path_buf(),
            }),
        };

        result.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "request failed");
            err.into()
        })
    }

    /// Answer newline-delimited JSON requests from `input` until EOF.
    ///
    /// A line that is not a valid request gets an error response.
    pub fn serve<R: BufRead, W: Write>(&self, input: R, mut output: W) -> std::io::Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let response = match serde_json::from_str::<Request>(&line) {
                Ok(request) => {
                    tracing::debug!(?request, "handling request");
                    self.handle(request)
                }
                Err(err) => Response::Error {
                    message: format!("Invalid request: {}", err),
                    not_found: false,
                },
            };

            serde_json::to_writer(&mut output, &response)?;
            output.write_all(b"\n")?;
            output.flush()?;
        }
        Ok(())
    }
}
