// server/src/state.rs
use flatshop::Shop;

/// Shared by every worker. Cloning shares the underlying documents and their
/// writer locks.
#[derive(Clone)]
pub struct AppState {
  pub shop: Shop,
}
