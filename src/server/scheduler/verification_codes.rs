use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::verification_code::VerificationCodeService};

/// Starts the verification code sweep scheduler
///
/// Runs every minute and drops codes whose expiry has passed. Expired codes are already
/// rejected on verification; the sweep only keeps the store from growing.
///
/// # Arguments
/// - `codes`: Shared verification code store
pub async fn start_scheduler(codes: VerificationCodeService) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async("0 * * * * *", move |_uuid, _lock| {
        let codes = codes.clone();

        Box::pin(async move {
            let removed = codes.sweep_expired().await;
            if removed > 0 {
                tracing::debug!("Swept {} expired verification codes", removed);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Verification code sweep scheduler started");

    Ok(())
}
