use std::sync::Once;
use tracing::{debug, info};
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::domain::{NodeId, Tree};

static TEST_SETUP: Once = Once::new();

pub fn init_test_setup() {
    TEST_SETUP.call_once(|| {
        // global logging subscriber, used by all tracing log macros
        setup_test_logging();
        info!("Test Setup complete");
    });
}

fn setup_test_logging() {
    // RUST_LOG wins; quiet by default so property tests stay readable
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_test_writer()
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(env_filter),
    );

    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

/// Checks the parent/child bookkeeping of every node reachable from the root.
///
/// Returns a description of the first violation found.
pub fn check_links<T>(tree: &Tree<T>) -> Result<(), String> {
    if tree.parent(tree.root()).is_some() {
        return Err("root has a parent".to_string());
    }
    let mut reachable = 0;
    let mut stack: Vec<NodeId> = vec![tree.root()];
    while let Some(id) = stack.pop() {
        reachable += 1;
        for (index, &child) in tree.children(id).iter().enumerate() {
            let node = tree
                .get(child)
                .ok_or_else(|| format!("child {child:?} of {id:?} is not in the tree"))?;
            if node.parent() != Some(id) {
                return Err(format!("{child:?} points at {:?}, expected {id:?}", node.parent()));
            }
            if node.child_index() != index {
                return Err(format!(
                    "{child:?} records index {}, sits at {index}",
                    node.child_index()
                ));
            }
            stack.push(child);
        }
    }
    if reachable != tree.size() {
        return Err(format!("{reachable} reachable nodes, {} stored", tree.size()));
    }
    Ok(())
}
