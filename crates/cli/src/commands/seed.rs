use crate::commands::{connect, prepare, CommandResult, StepFailure};
use rolodex_db::{migrations, seed_demo_data, SeedResult};

pub fn run() -> CommandResult {
    let (config, runtime) = match prepare("seed") {
        Ok(prepared) => prepared,
        Err(failure) => return failure,
    };

    let result = runtime.block_on(async {
        let pool = connect(&config).await?;
        let outcome = seed(&pool).await;
        pool.close().await;
        outcome
    });

    match result {
        Ok(seeded) => CommandResult::success("seed", seed_message(&seeded)),
        Err((error_class, message, exit_code)) => {
            CommandResult::failure("seed", error_class, message, exit_code)
        }
    }
}

async fn seed(pool: &rolodex_db::DbPool) -> Result<SeedResult, StepFailure> {
    migrations::run_pending(pool).await.map_err(|error| ("migration", error.to_string(), 5u8))?;
    seed_demo_data(pool).await.map_err(|error| ("seed_execution", error.to_string(), 5u8))
}

fn seed_message(seeded: &SeedResult) -> String {
    format!(
        "demo data loaded: {} customers, {} addresses",
        seeded.customers, seeded.addresses
    )
}
