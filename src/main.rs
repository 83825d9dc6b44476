use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use treegen::{count_nodes, render_slots, BranchRule, TreeParams};

#[derive(Parser, Debug)]
#[command(name = "treegen", about = "Complete binary tree generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Which representation a build should produce.
#[derive(ValueEnum, Clone, Copy, Debug)]
enum Form {
    /// Linked nodes, built breadth-first.
    Linked,
    /// Heap-indexed slot sequence.
    Array,
    /// Persistent nodes, built breadth-first.
    Persistent,
    /// Linked nodes, built by the depth-first reference builder.
    Recursive,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build one tree and render it.
    Build {
        /// Representation to build.
        #[arg(long, value_enum, default_value = "linked")]
        form: Form,
        /// Tree height (0 produces the empty tree).
        #[arg(long, default_value_t = 4)]
        height: usize,
        /// Root node value.
        #[arg(long, default_value_t = 4)]
        root: i64,
        /// Left branch rule, e.g. `mul:4`.
        #[arg(long, default_value = "mul:4")]
        left: BranchRule,
        /// Right branch rule, e.g. `add:1`.
        #[arg(long, default_value = "add:1")]
        right: BranchRule,
    },
    /// Cross-check all builders against each other up to a height.
    Verify {
        /// Largest height to check (inclusive).
        #[arg(long, default_value_t = 10)]
        max_height: usize,
        /// Root node value.
        #[arg(long, default_value_t = 4)]
        root: i64,
        /// Left branch rule, e.g. `mul:4`.
        #[arg(long, default_value = "mul:4")]
        left: BranchRule,
        /// Right branch rule, e.g. `add:1`.
        #[arg(long, default_value = "add:1")]
        right: BranchRule,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            form,
            height,
            root,
            left,
            right,
        } => run_build(form, TreeParams { height, root, left, right }),
        Commands::Verify {
            max_height,
            root,
            left,
            right,
        } => run_verify(max_height, root, left, right),
    }
}

fn run_build(form: Form, params: TreeParams) -> Result<()> {
    debug!(?form, ?params, "building tree");

    match form {
        Form::Linked => match params.build_linked() {
            Some(tree) => print!("{tree}"),
            None => println!("(empty tree)"),
        },
        Form::Array => println!("{}", render_slots(&params.build_array())),
        Form::Persistent => match params.build_persistent() {
            Some(tree) => print!("{tree}"),
            None => println!("(empty tree)"),
        },
        Form::Recursive => match params.build_recursive() {
            Some(tree) => print!("{tree}"),
            None => println!("(empty tree)"),
        },
    }

    Ok(())
}

fn run_verify(max_height: usize, root: i64, left: BranchRule, right: BranchRule) -> Result<()> {
    println!("height | nodes | all forms agree");
    println!("{}", "-".repeat(34));

    for height in 0..=max_height {
        let params = TreeParams {
            height,
            root,
            left,
            right,
        };
        let linked = params.build_linked();
        let reference = params.build_recursive();
        let expected = params.expected_nodes();

        if linked != reference {
            bail!("level-order and recursive builders disagree at height {height}");
        }
        let slots = params.build_array();
        let flattened = linked
            .as_deref()
            .map(|tree| tree.to_heap_vec())
            .unwrap_or_default();
        if slots != flattened {
            bail!("array builder disagrees with linked form at height {height}");
        }
        let persistent_count = params.build_persistent().map_or(0, |tree| tree.count());
        let linked_count = count_nodes(linked.as_deref());
        if linked_count != expected || persistent_count != expected {
            bail!(
                "node count mismatch at height {height}: linked {linked_count}, \
                 persistent {persistent_count}, expected {expected}"
            );
        }

        debug!(height, expected, "height verified");
        println!("{height:6} | {expected:5} | yes");
    }

    Ok(())
}
