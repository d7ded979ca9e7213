mod renderer;
mod store;

use anyhow::Result;

fn main() -> Result<()> {
    let mut store = store::FileStore::default_path();
    // Terminals report no color-scheme signal; absent → light per the
    // preference contract.
    let mode = folio_core::theme::initial_mode(&store, None);

    renderer::run(mode, &mut store)
}
