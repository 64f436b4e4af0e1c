use alloc::string::String;
use alloc::vec::Vec;
use tracing::warn;

use super::{blank_result, parse_backup_with, ParseIssue};
use crate::config::ParserConfig;
use crate::model::FirebirdParseResult;

/// Run [`parse_backup_with`] on tokio's blocking pool.
///
/// Scanning is CPU-bound, this keeps it off the async workers. If the task
/// dies the caller still gets a failed result rather than an error.
pub async fn parse_backup_async(
    buf: Vec<u8>,
    file_name: Option<String>,
    config: ParserConfig,
) -> FirebirdParseResult {
    let size = buf.len();
    let name = file_name.clone();
    let task = tokio::task::spawn_blocking(move || {
        return parse_backup_with(&buf, file_name.as_deref(), &config);
    });
    match task.await {
        Ok(result) => return result,
        Err(e) => {
            warn!(error = %e, "backup parse task failed");
            let mut result = blank_result(size, name.as_deref());
            result
                .errors
                .push(ParseIssue::Interrupted(e.to_string()).to_string());
            return result;
        }
    }
}
