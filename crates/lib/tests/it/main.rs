/*! Integration tests for Tether.
 *
 * This test suite is organized as a single integration test binary
 * following the pattern described by matklad in
 * https://matklad.github.io/2021/02/27/delete-cargo-integration-tests.html
 *
 * The module structure mirrors the main library structure:
 * - contract: Tests for the forwarding impls and failing snapshots
 * - view: Tests for the AppendOnlyView, ListView and MapView forwarding rules
 * - backing: Tests for the reference stores, recorders and journal replay
 * - properties: Property tests for ordering and the replay invariant
 */

use tracing_subscriber::EnvFilter;

#[ctor::ctor]
fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("tether=info".parse().unwrap()),
        )
        .with_test_writer()
        .try_init();
}

mod backing;
mod helpers;
mod properties;
