use crate::{
    cli::globals::GlobalArgs,
    features::hobbies::{HobbiesStore, Hobby},
};
use anyhow::Result;
use std::io::Write;
use tracing::debug;

/// Refreshes the store once and prints the resulting collection. Fetch
/// failures only show up in the log; the printed list is then the initial,
/// empty one.
///
/// # Errors
/// Returns an error if the API client cannot be built or stdout cannot be written.
pub async fn execute(globals: &GlobalArgs) -> Result<()> {
    let store = HobbiesStore::new(globals.api_client()?);

    let mut observer = store.subscribe();
    let watcher = tokio::spawn(async move {
        while observer.changed().await.is_ok() {
            let state = observer.borrow_and_update().clone();
            debug!(
                is_loading = state.is_loading,
                hobbies = state.hobbies.len(),
                "hobbies state changed"
            );
        }
    });

    store.refresh().await;
    let hobbies = store.hobbies();

    // closing the last sender ends the watcher
    drop(store);
    watcher.await?;

    let mut out = std::io::stdout().lock();
    out.write_all(render(&hobbies).as_bytes())?;
    Ok(())
}

fn render(hobbies: &[Hobby]) -> String {
    hobbies
        .iter()
        .map(|hobby| format!("{}\t{}\n", hobby.id, hobby.name))
        .collect()
}
