use near_workspaces::network::{NetworkClient, NetworkInfo};
use near_workspaces::{Account, Contract, DevNetwork, Worker};

/// Build contract from sources and initialize it
pub async fn build_contract<T>(
    worker: &Worker<T>,
    project_path: &str,
    init_method: &str,
    args: near_sdk::serde_json::Value,
) -> anyhow::Result<Contract>
where
    T: NetworkInfo + NetworkClient + DevNetwork + Send + Sync,
{
    let mut wasm;
    let mut retry_count = 3;
    // Under some circumstances compilation could provide zero length built wasm. In this case we retry.
    loop {
        wasm = near_workspaces::compile_project(project_path).await?;
        if !wasm.is_empty() || retry_count == 0 {
            break;
        }
        retry_count -= 1;
    }

    let contract = worker.dev_deploy(&wasm).await?;

    // initialize contract
    let _ = contract
        .call(init_method)
        .args_json(args)
        .max_gas()
        .transact()
        .await?
        .into_result()?;

    Ok(contract)
}

/// Creates `n` dev accounts.
pub async fn dev_accounts<T>(worker: &Worker<T>, n: usize) -> anyhow::Result<Vec<Account>>
where
    T: DevNetwork + Send + Sync,
{
    let mut accounts = Vec::with_capacity(n);
    for _ in 0..n {
        accounts.push(worker.dev_create_account().await?);
    }
    Ok(accounts)
}

/// Get current block timestamp
pub async fn get_block_timestamp<T>(worker: &Worker<T>) -> anyhow::Result<u64>
where
    T: NetworkClient + Send + Sync,
{
    Ok(worker.view_block().await?.timestamp())
}
