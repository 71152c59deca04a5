use color_eyre::eyre::{Result, WrapErr, eyre};
use dotenv::dotenv;
use tracing::{Level, info, warn};
use tracing_subscriber::FmtSubscriber;
use venuebook_client::{ApiClient, BatchConfig, commit};
use venuebook_core::flow::BatchFlow;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = BatchConfig::from_env()?;
    if config.credential.is_none() {
        warn!("VENUEBOOK_TOKEN is not set, the backend will likely reject every slot");
    }
    let client = ApiClient::new(&config.client, config.credential.clone())?;

    // Generate and trim the batch
    let mut flow = BatchFlow::default();
    let generated = flow
        .generate(&config.draft)
        .wrap_err("Could not generate slots")?;
    info!("Generated {} slots", generated);

    for sequence_number in &config.skip {
        if flow.working_set().is_none() {
            break;
        }
        if !flow.remove(*sequence_number)? {
            warn!("No slot #{} in this batch, nothing skipped", sequence_number);
        }
    }

    let Some(working_set) = flow.working_set() else {
        return Err(eyre!("Every generated slot was skipped, nothing to commit"));
    };
    for slot in working_set {
        info!("#{} {} {} price {}", slot.sequence_number, slot.date, slot.label(), slot.price);
    }
    let first = working_set.iter().next().cloned();

    // Commit one slot at a time
    let mut working_set = flow.begin_commit()?;
    let report = commit(&mut working_set, &client).await;
    flow.finish_commit(working_set, &report)?;

    if let Some(slot) = first {
        match client.ground_slots(&slot.ground_id, Some(slot.date)).await {
            Ok(slots) => info!(
                "Ground {} now has {} slots on {}",
                slot.ground_id,
                slots.len(),
                slot.date
            ),
            Err(e) => warn!("Could not list slots for ground {}: {}", slot.ground_id, e),
        }
    }

    match &flow {
        BatchFlow::CommittedDone { created } => {
            info!("Created all {} slots", created);
            Ok(())
        }
        BatchFlow::CommittedPartial { created, remaining, .. } => {
            for err in report.errors() {
                warn!("{}", err);
            }
            Err(eyre!(
                "Failed to create {} slots ({} created); remaining: {:?}",
                remaining.len(),
                created,
                remaining.sequence_numbers()
            ))
        }
        other => Err(eyre!("Unexpected batch state after commit: {}", other.phase())),
    }
}
