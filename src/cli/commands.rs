use tracing::{debug, instrument};

use crate::cli::args::{Cli, Commands, Format};
use crate::cli::error::CliResult;
use crate::cli::output;
use crate::domain::Tree;
use crate::render::{self, TreeRender};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Commands::Demo { format } => _demo(*format),
        Commands::Paths => _paths(),
    }
}

/// The two sample trees: `+(1, 2)` and `*(3, +(1, 2))`.
///
/// The second is built by concatenating a copy of the first.
pub fn sample_trees() -> (Tree<String>, Tree<String>) {
    let sum = Tree::new("+".to_string())
        .with_child("1".to_string())
        .with_child("2".to_string());
    let product = Tree::new("*".to_string())
        .with_child("3".to_string())
        .with_subtree(sum.clone());
    (sum, product)
}

#[instrument]
fn _demo(format: Format) -> CliResult<()> {
    let (sum, product) = sample_trees();
    debug!(sum = sum.size(), product = product.size(), "Built sample trees");

    for tree in [&sum, &product] {
        if matches!(format, Format::Prefix | Format::All) {
            output::info(&render::prefix(tree));
        }
        if matches!(format, Format::Infix | Format::All) {
            output::info(&render::infix(tree));
        }
        if matches!(format, Format::Tree | Format::All) {
            output::info(&tree.to_tree_string());
        }
    }
    Ok(())
}

#[instrument]
fn _paths() -> CliResult<()> {
    let (_, product) = sample_trees();
    output::header(&render::infix(&product));

    let mut cursor = product.begin();
    let end = product.end();
    while cursor != end {
        let value = cursor.value(&product)?;
        output::info(&format!("{:?} {}", cursor.path(), value));
        cursor.advance(&product)?;
    }
    output::info(&format!("{:?} end", cursor.path()));
    Ok(())
}
