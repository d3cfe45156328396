use aws_sdk_s3::primitives::ByteStream;
use tracing::{info, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::DocumentType;

/// Object key for an uploaded resume file: `resumes/<job>/<resume>.<ext>`.
pub fn resume_object_key(job_id: Uuid, resume_id: Uuid, doc_type: DocumentType) -> String {
    format!("resumes/{job_id}/{resume_id}.{}", doc_type.as_str())
}

/// Stores the original upload bytes. The extracted text lives in the database.
pub async fn upload_resume_file(
    s3: &aws_sdk_s3::Client,
    bucket: &str,
    key: &str,
    doc_type: DocumentType,
    bytes: Vec<u8>,
) -> Result<(), AppError> {
    let size = bytes.len();
    s3.put_object()
        .bucket(bucket)
        .key(key)
        .body(ByteStream::from(bytes))
        .content_type(doc_type.mime_type())
        .send()
        .await
        .map_err(|e| AppError::S3(format!("upload of {key} failed: {e}")))?;

    info!("Uploaded resume file to s3://{bucket}/{key} ({size} bytes)");
    Ok(())
}

/// Removes a stored upload whose database row was never written. Failures
/// are logged and swallowed; the caller is already on an error path.
pub async fn delete_resume_file(s3: &aws_sdk_s3::Client, bucket: &str, key: &str) {
    match s3.delete_object().bucket(bucket).key(key).send().await {
        Ok(_) => info!("Removed orphaned resume file s3://{bucket}/{key}"),
        Err(e) => warn!("Could not remove orphaned resume file s3://{bucket}/{key}: {e}"),
    }
}
